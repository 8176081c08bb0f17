//! Audit trail display formatting

use std::fmt::Write;

use chrono::{DateTime, Utc};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::audit::AuditLogEntry;

#[derive(Tabled)]
struct LogRow {
    #[tabled(rename = "#")]
    log_id: u64,
    #[tabled(rename = "When")]
    timestamp: String,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Previous")]
    previous_value: String,
    #[tabled(rename = "New")]
    new_value: String,
}

/// Format audit entries as a table, keeping the given order
///
/// `timestamp_format` is a strftime pattern applied to the UTC timestamp.
pub fn format_log_list(title: &str, entries: &[AuditLogEntry], timestamp_format: &str) -> String {
    if entries.is_empty() {
        return format!("{}\nNo changes recorded.", title);
    }

    let rows = entries.iter().map(|entry| LogRow {
        log_id: entry.log_id.value(),
        timestamp: render_timestamp(&entry.timestamp, timestamp_format),
        user: format!("{} ({})", entry.user_name, entry.user_id),
        action: entry.action.to_string(),
        previous_value: truncate(&entry.previous_value, 40),
        new_value: truncate(&entry.new_value, 40),
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());

    format!("{}\n{}\n{} entries\n", title, table, entries.len())
}

/// Render with `format`, falling back to RFC 3339 when the pattern is invalid
fn render_timestamp(timestamp: &DateTime<Utc>, format: &str) -> String {
    let mut rendered = String::new();
    match write!(rendered, "{}", timestamp.format(format)) {
        Ok(()) => rendered,
        Err(_) => timestamp.to_rfc3339(),
    }
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::LogAction;
    use crate::models::{User, UserId};

    #[test]
    fn test_format_log_list() {
        let user = User::new("Memphis", "Raines", "", "mraines@example.com", true).with_id(4);
        let entries = vec![
            AuditLogEntry::new(UserId::new(4), LogAction::EmailChanged, "a", "b", "Memphis Raines"),
            AuditLogEntry::created(&user),
        ];

        let output = format_log_list("Change logs for Memphis Raines", &entries, "%Y-%m-%d");

        assert!(output.starts_with("Change logs for Memphis Raines"));
        assert!(output.contains("Email changed"));
        assert!(output.contains("Memphis Raines (4)"));
        assert!(output.contains("2 entries"));
    }

    #[test]
    fn test_format_empty_log_list() {
        let output = format_log_list("All change logs", &[], "%Y");
        assert!(output.contains("No changes recorded."));
    }

    #[test]
    fn test_invalid_timestamp_format_falls_back() {
        let entry = AuditLogEntry::new(UserId::new(1), LogAction::UserCreated, "", "", "Peter Loew");

        let output = format_log_list("All change logs", &[entry.clone()], "%Q");

        assert!(output.contains(&entry.timestamp.to_rfc3339()));
        assert_eq!(
            render_timestamp(&entry.timestamp, "%Y"),
            entry.timestamp.format("%Y").to_string()
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
        assert_eq!(truncate("ééééééééé", 5), "éé...");
    }
}
