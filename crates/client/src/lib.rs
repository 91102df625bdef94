//! Browser-independent core of the Monitor 360 frontend: session storage,
//! token claims, the route access table and the typed REST client.

pub mod access;
pub mod api;
pub mod config;
pub mod session;
pub mod store;
pub mod token;

pub use access::{Access, GuardDecision, NavbarVariant};
pub use api::{ApiClient, ReportTarget};
pub use session::Session;
pub use store::{MemoryStore, SessionStore};
