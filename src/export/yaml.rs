//! YAML export of the audit trail for human reading

use std::io::Write;

use crate::error::{DirectoryError, DirectoryResult};

use super::json::LogExport;

/// Export entries to YAML with a short comment header
pub fn export_logs_yaml<W: Write>(export: &LogExport, writer: &mut W) -> DirectoryResult<()> {
    let header = format!(
        "# userdir audit trail export\n# Generated: {}\n# Entries: {}\n\n",
        export.exported_at, export.entry_count
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| DirectoryError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| DirectoryError::Export(e.to_string()))
}
