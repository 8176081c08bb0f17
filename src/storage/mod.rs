//! Storage layer for userdir
//!
//! Typed in-memory repositories with optional JSON file backing. Every
//! mutation is written through to disk before it returns.

pub mod file_io;
pub mod init;
pub mod repository;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use file_io::{read_json, write_json_atomic};
pub use init::{initialize_storage, seed_users};
pub use repository::{Entity, Repository};
pub use store::Store;

use crate::audit::AuditLogEntry;
use crate::config::paths::DirectoryPaths;
use crate::error::DirectoryError;
use crate::models::User;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: Option<DirectoryPaths>,
    pub users: Repository<User>,
    pub logs: Repository<AuditLogEntry>,
}

impl Storage {
    /// Create file-backed storage under `paths`
    pub fn new(paths: DirectoryPaths) -> Result<Self, DirectoryError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: Repository::new(paths.users_file()),
            logs: Repository::new(paths.logs_file()),
            paths: Some(paths),
        })
    }

    /// Create storage that lives only in memory
    pub fn in_memory() -> Self {
        Self {
            paths: None,
            users: Repository::in_memory(),
            logs: Repository::in_memory(),
        }
    }

    /// In-memory storage preloaded with `users` and no audit entries
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Result<Self, DirectoryError> {
        let storage = Self::in_memory();
        for user in users {
            storage.users.insert(user)?;
        }
        Ok(storage)
    }

    /// Get the paths configuration, if file-backed
    pub fn paths(&self) -> Option<&DirectoryPaths> {
        self.paths.as_ref()
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), DirectoryError> {
        self.users.load()?;
        self.logs.load()?;
        Ok(())
    }
}
