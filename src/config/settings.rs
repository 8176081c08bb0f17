//! User settings for userdir
//!
//! Manages preferences for seeding, diagnostic log verbosity and how audit
//! timestamps are rendered.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::DirectoryPaths;
use crate::error::DirectoryError;

/// Persistent settings stored in `config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether `init` loads the demo roster into an empty directory
    #[serde(default = "default_seed_on_init")]
    pub seed_on_init: bool,

    /// Diagnostic log filter used when `USERDIR_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// strftime format for audit timestamps in listings
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_seed_on_init() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            seed_on_init: default_seed_on_init(),
            log_level: default_log_level(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &DirectoryPaths) -> Result<Self, DirectoryError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DirectoryError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DirectoryError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject values that would fail later at render time
    pub fn validate(&self) -> Result<(), DirectoryError> {
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(DirectoryError::Config(format!(
                "Invalid timestamp_format: {:?}",
                self.timestamp_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DirectoryPaths) -> Result<(), DirectoryError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DirectoryError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            DirectoryError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
