//! JSON export of the audit trail with schema versioning

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::audit::AuditLogEntry;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::UserId;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A self-describing snapshot of audit entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Version of userdir that wrote the export
    pub app_version: String,

    /// Set when the export is scoped to one user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    pub entry_count: usize,

    pub entries: Vec<AuditLogEntry>,
}

impl LogExport {
    pub fn new(entries: Vec<AuditLogEntry>, user_id: Option<UserId>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            user_id,
            entry_count: entries.len(),
            entries,
        }
    }

    /// Check the schema version and the entry count
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.entry_count != self.entries.len() {
            return Err(format!(
                "Entry count mismatch: header says {}, found {}",
                self.entry_count,
                self.entries.len()
            ));
        }

        if let Some(user_id) = self.user_id {
            if let Some(stray) = self.entries.iter().find(|e| e.user_id != user_id) {
                return Err(format!(
                    "Entry {} belongs to user {}, export is scoped to user {}",
                    stray.log_id, stray.user_id, user_id
                ));
            }
        }

        Ok(())
    }
}

/// Export entries to JSON
pub fn export_logs_json<W: Write>(
    export: &LogExport,
    writer: &mut W,
    pretty: bool,
) -> DirectoryResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| DirectoryError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::LogAction;

    fn read_logs_json(json_str: &str) -> LogExport {
        let export: LogExport = serde_json::from_str(json_str).unwrap();
        export.validate().unwrap();
        export
    }

    fn entries() -> Vec<AuditLogEntry> {
        vec![
            AuditLogEntry::new(
                UserId::new(1),
                LogAction::EmailChanged,
                "a@example.com",
                "b@example.com",
                "Peter Loew",
            ),
            AuditLogEntry::new(
                UserId::new(1),
                LogAction::UserCreated,
                "",
                "User Peter Loew was created",
                "Peter Loew",
            ),
        ]
    }

    #[test]
    fn test_json_export_reads_back() {
        let export = LogExport::new(entries(), Some(UserId::new(1)));
        let mut buffer = Vec::new();
        export_logs_json(&export, &mut buffer, true).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"schema_version\": \"1.0.0\""));
        assert!(text.contains("Email changed"));

        let parsed = read_logs_json(&text);
        assert_eq!(parsed.entry_count, 2);
        assert_eq!(parsed.entries, export.entries);
    }

    #[test]
    fn test_validate_rejects_wrong_version() {
        let mut export = LogExport::new(entries(), None);
        export.schema_version = "0.1".to_string();
        assert!(export.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_foreign_entry() {
        let mut all = entries();
        all.push(AuditLogEntry::new(UserId::new(2), LogAction::UserDeleted, "", "", "Other"));
        let export = LogExport::new(all, Some(UserId::new(1)));
        assert!(export.validate().unwrap_err().contains("user 2"));
    }
}
