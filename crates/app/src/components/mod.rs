pub mod navbars;
pub mod quick_actions;

pub use navbars::AppNavbar;
pub use quick_actions::{QuickAction, QuickActions};
