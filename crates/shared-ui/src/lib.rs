//! Presentational Dioxus components shared by every Monitor 360 screen.
//!
//! Components carry their own stylesheet via `asset!` and know nothing
//! about sessions or the API.

pub mod components;
pub mod theme;

pub use components::*;
