//! Audit log service
//!
//! Read access to the audit trail, newest first, plus a raw append.

use std::cmp::Reverse;

use crate::audit::AuditLogEntry;
use crate::error::DirectoryResult;
use crate::models::UserId;
use crate::storage::{Storage, Store};

/// Service for reading and appending audit entries
pub struct AuditLogService<'a, S: Store = Storage> {
    store: &'a S,
}

impl<'a, S: Store> AuditLogService<'a, S> {
    /// Create a new audit log service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Append an entry as given
    ///
    /// The user service is the normal producer; nothing here checks that the
    /// entry is consistent with any user.
    pub fn add_log(&self, entry: AuditLogEntry) -> DirectoryResult<AuditLogEntry> {
        self.store.create(entry)
    }

    /// Entries for one user, newest first
    pub fn get_logs_for_user(&self, user_id: UserId) -> DirectoryResult<Vec<AuditLogEntry>> {
        let mut entries: Vec<AuditLogEntry> = self
            .store
            .get_all::<AuditLogEntry>()?
            .into_iter()
            .filter(|l| l.user_id == user_id)
            .collect();
        sort_newest_first(&mut entries);
        Ok(entries)
    }

    /// Every entry, newest first
    pub fn get_all_logs(&self) -> DirectoryResult<Vec<AuditLogEntry>> {
        let mut entries = self.store.get_all::<AuditLogEntry>()?;
        sort_newest_first(&mut entries);
        Ok(entries)
    }
}

/// Timestamp descending; equal timestamps put the later-written entry first
fn sort_newest_first(entries: &mut [AuditLogEntry]) {
    entries.sort_by_key(|l| Reverse((l.timestamp, l.log_id)));
}
