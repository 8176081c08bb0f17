//! Display formatting for terminal output
//!
//! Renders users and audit entries as tables and detail views.

pub mod log;
pub mod user;

pub use log::format_log_list;
pub use user::{format_user_details, format_user_list};
