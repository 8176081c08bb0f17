//! Path management for userdir
//!
//! ## Path Resolution Order
//!
//! 1. `USERDIR_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/userdir` on Linux, `%APPDATA%\userdir\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DirectoryError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "USERDIR_DATA_DIR";

/// Manages all paths used by userdir
#[derive(Debug, Clone)]
pub struct DirectoryPaths {
    /// Base directory for all userdir data
    base_dir: PathBuf,
}

impl DirectoryPaths {
    /// Create a new DirectoryPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, DirectoryError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create DirectoryPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the export directory (<base>/exports/)
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to users.json
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    /// Get the path to audit_log.json
    pub fn logs_file(&self) -> PathBuf {
        self.data_dir().join("audit_log.json")
    }

    /// Ensure the base, data and export directories exist
    pub fn ensure_directories(&self) -> Result<(), DirectoryError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DirectoryError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| DirectoryError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir()).map_err(|e| {
            DirectoryError::Io(format!("Failed to create export directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if the directory has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, DirectoryError> {
    ProjectDirs::from("", "", "userdir")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DirectoryError::Config("Could not determine home directory".into()))
}
