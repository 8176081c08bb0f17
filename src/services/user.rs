//! User service
//!
//! Directory operations over `User` records. Every mutation also writes the
//! audit entries describing what changed.

use crate::audit::{diff_users, AuditLogEntry};
use crate::error::DirectoryResult;
use crate::models::{User, UserId};
use crate::storage::{Storage, Store};

/// Service for user management
///
/// Each call reads, decides and writes without holding a lock across the
/// whole sequence. Two concurrent `update`s of the same user can both diff
/// against the same starting state; the later write wins while both sets of
/// audit entries are kept.
pub struct UserService<'a, S: Store = Storage> {
    store: &'a S,
}

impl<'a, S: Store> UserService<'a, S> {
    /// Create a new user service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// List every user
    pub fn get_all(&self) -> DirectoryResult<Vec<User>> {
        self.store.get_all()
    }

    /// List users whose active flag equals `is_active`
    pub fn filter_by_active(&self, is_active: bool) -> DirectoryResult<Vec<User>> {
        Ok(self
            .store
            .get_all::<User>()?
            .into_iter()
            .filter(|u| u.is_active == is_active)
            .collect())
    }

    /// Get a user by ID
    pub fn get(&self, id: UserId) -> DirectoryResult<Option<User>> {
        Ok(self
            .store
            .get_all::<User>()?
            .into_iter()
            .find(|u| u.id == id))
    }

    /// Add a user and record its creation
    ///
    /// The store assigns an id when `user.id` is unassigned.
    pub fn add(&self, user: User) -> DirectoryResult<User> {
        let user = self.store.create(user)?;

        self.store.create(AuditLogEntry::created(&user))?;

        tracing::info!(user_id = %user.id, "created user");
        Ok(user)
    }

    /// Overwrite a user's fields and record one entry per changed field
    ///
    /// Returns `None`, without writing anything, when no user has `id`. The
    /// stored record is written even when nothing differs. Every entry carries
    /// the name from `updated`.
    pub fn update(&self, id: UserId, updated: &User) -> DirectoryResult<Option<User>> {
        let Some(mut user) = self.get(id)? else {
            tracing::debug!(user_id = %id, "update skipped, no such user");
            return Ok(None);
        };

        let user_name = updated.full_name();
        let entries: Vec<AuditLogEntry> = diff_users(&user, updated)
            .iter()
            .map(|change| AuditLogEntry::field_changed(id, change, &user_name))
            .collect();

        user.apply(updated);
        self.store.update(&user)?;

        let changed = entries.len();
        for entry in entries {
            self.store.create(entry)?;
        }

        tracing::info!(user_id = %id, changed, "updated user");
        Ok(Some(user))
    }

    /// Delete a user and record the deletion
    ///
    /// Returns the removed user, or `None` when no user has `id`.
    pub fn delete(&self, id: UserId) -> DirectoryResult<Option<User>> {
        let Some(user) = self.get(id)? else {
            tracing::debug!(user_id = %id, "delete skipped, no such user");
            return Ok(None);
        };

        self.store.delete(&user)?;
        self.store.create(AuditLogEntry::deleted(&user))?;

        tracing::info!(user_id = %id, "deleted user");
        Ok(Some(user))
    }
}
