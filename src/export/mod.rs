//! Export module for userdir
//!
//! Writes the audit trail in three formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable, schema versioned
//! - YAML: human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use crate::audit::AuditLogEntry;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::UserId;

pub use self::csv::export_logs_csv;
pub use self::json::{export_logs_json, LogExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_logs_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

/// Write `entries` in `format`
///
/// Nothing is written when an entry falls outside the `user_id` scope.
pub fn export_logs<W: Write>(
    format: ExportFormat,
    entries: Vec<AuditLogEntry>,
    user_id: Option<UserId>,
    writer: &mut W,
) -> DirectoryResult<()> {
    let export = LogExport::new(entries, user_id);
    export.validate().map_err(DirectoryError::Export)?;

    match format {
        ExportFormat::Csv => export_logs_csv(&export.entries, writer),
        ExportFormat::Json => export_logs_json(&export, writer, true),
        ExportFormat::Yaml => export_logs_yaml(&export, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::LogAction;

    fn entry(user_id: u64) -> AuditLogEntry {
        AuditLogEntry::new(UserId::new(user_id), LogAction::EmailChanged, "a", "b", "Someone")
    }

    #[test]
    fn test_scoped_export_rejects_foreign_entries() {
        let mut buffer = Vec::new();
        let result = export_logs(
            ExportFormat::Csv,
            vec![entry(1), entry(2)],
            Some(UserId::new(1)),
            &mut buffer,
        );

        assert!(matches!(result, Err(DirectoryError::Export(_))));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_each_format_writes() {
        for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Yaml] {
            let mut buffer = Vec::new();
            export_logs(format, vec![entry(1)], None, &mut buffer).unwrap();
            assert!(String::from_utf8(buffer).unwrap().contains("Email changed"));
        }
    }
}
