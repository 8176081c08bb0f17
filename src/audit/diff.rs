//! Field-level diff generation for audit logging
//!
//! Compares two user records over the tracked fields and reports each change
//! with its before and after values rendered as display strings.

use serde::{Deserialize, Serialize};

use crate::models::User;

use super::entry::LogAction;

/// A user attribute whose changes are individually audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackedField {
    Forename,
    Surname,
    DateOfBirth,
    Email,
    IsActive,
}

impl TrackedField {
    /// All tracked fields, in the order entries are written
    pub const ALL: [TrackedField; 5] = [
        TrackedField::Forename,
        TrackedField::Surname,
        TrackedField::DateOfBirth,
        TrackedField::Email,
        TrackedField::IsActive,
    ];

    /// The audit action recorded when this field changes
    pub fn action(self) -> LogAction {
        match self {
            TrackedField::Forename => LogAction::ForenameChanged,
            TrackedField::Surname => LogAction::SurnameChanged,
            TrackedField::DateOfBirth => LogAction::DateOfBirthChanged,
            TrackedField::Email => LogAction::EmailChanged,
            TrackedField::IsActive => LogAction::ActiveStatusChanged,
        }
    }

    /// Render this field's value on `user` the way audit entries store it
    pub fn render(self, user: &User) -> String {
        match self {
            TrackedField::Forename => user.forename.clone(),
            TrackedField::Surname => user.surname.clone(),
            TrackedField::DateOfBirth => user.date_of_birth.clone(),
            TrackedField::Email => user.email.clone(),
            TrackedField::IsActive => format_bool(user.is_active).to_string(),
        }
    }

    fn differs(self, before: &User, after: &User) -> bool {
        match self {
            TrackedField::Forename => before.forename != after.forename,
            TrackedField::Surname => before.surname != after.surname,
            TrackedField::DateOfBirth => before.date_of_birth != after.date_of_birth,
            TrackedField::Email => before.email != after.email,
            TrackedField::IsActive => before.is_active != after.is_active,
        }
    }
}

/// One changed field between two versions of a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: TrackedField,
    pub previous: String,
    pub new: String,
}

/// Diff two user records over the tracked fields
///
/// Changes come back in `TrackedField::ALL` order. Identifiers are not
/// compared.
pub fn diff_users(before: &User, after: &User) -> Vec<FieldChange> {
    TrackedField::ALL
        .iter()
        .filter(|field| field.differs(before, after))
        .map(|&field| FieldChange {
            field,
            previous: field.render(before),
            new: field.render(after),
        })
        .collect()
}

/// Booleans are stored capitalized ("True"/"False")
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
