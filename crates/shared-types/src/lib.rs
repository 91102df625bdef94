pub mod config;
pub mod error;
pub mod i18n;
pub mod requests;
pub mod role;

// Monitor 360 domain modules
pub mod case;
pub mod case_type;
pub mod institution;
pub mod report;

pub use config::*;
pub use error::*;
pub use i18n::*;
pub use requests::*;
pub use role::*;

pub use case::*;
pub use case_type::*;
pub use institution::*;
pub use report::*;
