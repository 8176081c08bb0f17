//! Configuration module for userdir
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - Settings persistence

pub mod paths;
pub mod settings;

pub use paths::DirectoryPaths;
pub use settings::Settings;
