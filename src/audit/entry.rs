//! Audit entry data structures
//!
//! Defines the fixed action vocabulary and the audit log entry itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{LogId, User, UserId};

use super::diff::FieldChange;

/// What happened to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogAction {
    #[serde(rename = "Created user")]
    UserCreated,
    #[serde(rename = "Deleted user")]
    UserDeleted,
    #[serde(rename = "Forename changed")]
    ForenameChanged,
    #[serde(rename = "Surname changed")]
    SurnameChanged,
    #[serde(rename = "Date of birth changed")]
    DateOfBirthChanged,
    #[serde(rename = "Email changed")]
    EmailChanged,
    #[serde(rename = "Active status changed")]
    ActiveStatusChanged,
}

impl LogAction {
    pub fn as_str(self) -> &'static str {
        match self {
            LogAction::UserCreated => "Created user",
            LogAction::UserDeleted => "Deleted user",
            LogAction::ForenameChanged => "Forename changed",
            LogAction::SurnameChanged => "Surname changed",
            LogAction::DateOfBirthChanged => "Date of birth changed",
            LogAction::EmailChanged => "Email changed",
            LogAction::ActiveStatusChanged => "Active status changed",
        }
    }
}

impl std::fmt::Display for LogAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single audit log entry
///
/// `user_id` and `user_name` are a snapshot of the user at the time the entry
/// was written. The user may no longer exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Assigned by the store on insert
    #[serde(default)]
    pub log_id: LogId,

    pub user_id: UserId,

    pub action: LogAction,

    #[serde(default)]
    pub previous_value: String,

    #[serde(default)]
    pub new_value: String,

    /// "Forename Surname" display snapshot
    #[serde(default)]
    pub user_name: String,

    /// When the entry was written (UTC)
    pub timestamp: DateTime<Utc>,
}

impl AuditLogEntry {
    /// Build an entry stamped with the current time
    pub fn new(
        user_id: UserId,
        action: LogAction,
        previous_value: impl Into<String>,
        new_value: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Self {
        Self {
            log_id: LogId::UNASSIGNED,
            user_id,
            action,
            previous_value: previous_value.into(),
            new_value: new_value.into(),
            user_name: user_name.into(),
            timestamp: Utc::now(),
        }
    }

    /// Entry for a freshly created user
    pub fn created(user: &User) -> Self {
        let name = user.full_name();
        Self::new(
            user.id,
            LogAction::UserCreated,
            "",
            format!("User {} was created with email {}", name, user.email),
            name,
        )
    }

    /// Entry for a removed user, carrying its last known identity
    pub fn deleted(user: &User) -> Self {
        let name = user.full_name();
        Self::new(
            user.id,
            LogAction::UserDeleted,
            format!("User {} with email {} was deleted", name, user.email),
            "",
            name,
        )
    }

    /// Entry for one changed field
    pub fn field_changed(user_id: UserId, change: &FieldChange, user_name: &str) -> Self {
        Self::new(
            user_id,
            change.field.action(),
            change.previous.clone(),
            change.new.clone(),
            user_name,
        )
    }

    /// Override the timestamp (imports and tests)
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] #{} {} (user {}: {})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.log_id,
            self.action,
            self.user_id,
            self.user_name
        );

        if !self.previous_value.is_empty() || !self.new_value.is_empty() {
            output.push_str(&format!(
                "\n  {} -> {}",
                display_or_dash(&self.previous_value),
                display_or_dash(&self.new_value)
            ));
        }

        output
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
