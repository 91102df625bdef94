pub mod list;
pub mod review;
pub mod submit;
