//! CSV export of the audit trail (spreadsheet-compatible)

use std::io::Write;

use crate::audit::AuditLogEntry;
use crate::error::{DirectoryError, DirectoryResult};

const HEADER: [&str; 7] = [
    "Log ID",
    "Timestamp",
    "User ID",
    "User Name",
    "Action",
    "Previous Value",
    "New Value",
];

/// Export entries to CSV, one row per entry in the given order
pub fn export_logs_csv<W: Write>(entries: &[AuditLogEntry], writer: W) -> DirectoryResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| DirectoryError::Export(e.to_string()))?;

    for entry in entries {
        csv_writer
            .write_record([
                entry.log_id.to_string(),
                entry.timestamp.to_rfc3339(),
                entry.user_id.to_string(),
                entry.user_name.clone(),
                entry.action.to_string(),
                entry.previous_value.clone(),
                entry.new_value.clone(),
            ])
            .map_err(|e| DirectoryError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| DirectoryError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::LogAction;
    use crate::models::{User, UserId};

    #[test]
    fn test_csv_header_and_rows() {
        let user = User::new("Benjamin Franklin", "Gates", "", "bfgates@example.com", true).with_id(2);
        let entries = vec![AuditLogEntry::deleted(&user)];

        let mut buffer = Vec::new();
        export_logs_csv(&entries, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Log ID,Timestamp,User ID,User Name,Action,Previous Value,New Value"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("Deleted user"));
        assert!(row.contains("Benjamin Franklin Gates"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_csv_quotes_commas() {
        let entry = AuditLogEntry::new(
            UserId::new(1),
            LogAction::SurnameChanged,
            "Loew, Jr.",
            "Loew",
            "Peter Loew",
        );

        let mut buffer = Vec::new();
        export_logs_csv(&[entry], &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("\"Loew, Jr.\""));
    }

    #[test]
    fn test_csv_empty_has_header_only() {
        let mut buffer = Vec::new();
        export_logs_csv(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
    }
}
