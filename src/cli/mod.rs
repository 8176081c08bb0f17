//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod log;
pub mod user;

pub use log::{handle_log_command, LogCommands};
pub use user::{handle_user_command, UserCommands};
