//! userdir - A user directory with a field-level audit trail
//!
//! This library provides the core of the userdir command-line tool: a small
//! directory of people where every creation, deletion and per-field edit is
//! recorded as an audit entry.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (users and typed ids)
//! - `audit`: Audit entries and the field diff engine
//! - `storage`: Generic store over JSON-backed repositories
//! - `services`: Directory and audit log services
//! - `export`: CSV, JSON and YAML export of the audit trail
//! - `display`: Terminal tables
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use userdir::models::User;
//! use userdir::services::{AuditLogService, UserService};
//! use userdir::storage::Storage;
//!
//! let storage = Storage::in_memory();
//! let user = UserService::new(&storage).add(User::new("Ada", "Lovelace", "", "ada@example.com", true))?;
//! let logs = AuditLogService::new(&storage).get_logs_for_user(user.id)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::DirectoryError;
