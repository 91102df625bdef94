pub mod available;
pub mod create;
pub mod detail;
pub mod form;
pub mod manage;
pub mod update;
