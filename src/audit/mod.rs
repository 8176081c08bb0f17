//! Audit trail for userdir
//!
//! Every create, field change and delete made through the user service is
//! recorded as an `AuditLogEntry`.
//!
//! # Architecture
//!
//! - `AuditLogEntry`: one recorded change with before/after values, a
//!   snapshot of the user's display name and a timestamp.
//! - `LogAction`: the fixed vocabulary of recorded actions.
//! - `diff_users`: compares two versions of a user over the tracked fields.
//!
//! Entries are stored through the same `Store` as users and read back through
//! `AuditLogService`.
//!
//! # Example
//!
//! ```rust,ignore
//! use userdir::audit::{diff_users, AuditLogEntry};
//!
//! for change in diff_users(&before, &after) {
//!     let entry = AuditLogEntry::field_changed(before.id, &change, &after.full_name());
//!     store.create(entry)?;
//! }
//! ```

mod diff;
mod entry;

pub use diff::{diff_users, format_bool, FieldChange, TrackedField};
pub use entry::{AuditLogEntry, LogAction};
