//! Typed record repositories
//!
//! A `Repository<T>` keeps every record of one entity type in insertion order
//! behind an `RwLock`, hands out integer identities from a counter that only
//! moves forward, and optionally mirrors its contents to a JSON file.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::audit::AuditLogEntry;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{LogId, User, UserId};

use super::file_io::{read_json, write_json_atomic};
use super::Storage;

/// A record type the store knows how to hold
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Name used in errors and diagnostics
    const KIND: &'static str;

    /// Identity; zero means unassigned
    fn key(&self) -> u64;

    fn assign_key(&mut self, key: u64);

    /// The repository in `storage` holding records of this type
    fn repository(storage: &Storage) -> &Repository<Self>;
}

impl Entity for User {
    const KIND: &'static str = "User";

    fn key(&self) -> u64 {
        self.id.value()
    }

    fn assign_key(&mut self, key: u64) {
        self.id = UserId::new(key);
    }

    fn repository(storage: &Storage) -> &Repository<Self> {
        &storage.users
    }
}

impl Entity for AuditLogEntry {
    const KIND: &'static str = "AuditLogEntry";

    fn key(&self) -> u64 {
        self.log_id.value()
    }

    fn assign_key(&mut self, key: u64) {
        self.log_id = LogId::new(key);
    }

    fn repository(storage: &Storage) -> &Repository<Self> {
        &storage.logs
    }
}

/// On-disk layout of a repository file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RepositoryData<T> {
    /// Next identity to hand out; persisted so deleted ids are never reused
    next_id: u64,
    records: Vec<T>,
}

impl<T> Default for RepositoryData<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }
}

/// Repository for one entity type
pub struct Repository<T> {
    path: Option<PathBuf>,
    data: RwLock<RepositoryData<T>>,
}

impl<T: Entity> Repository<T> {
    /// Create a repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            data: RwLock::new(RepositoryData::default()),
        }
    }

    /// Create a repository that never touches disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: RwLock::new(RepositoryData::default()),
        }
    }

    /// Load records from disk, replacing whatever is in memory
    pub fn load(&self) -> DirectoryResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut file_data: RepositoryData<T> = read_json(path)?;
        file_data.next_id = file_data.next_id.max(1);
        if let Some(max_key) = file_data.records.iter().map(Entity::key).max() {
            file_data.next_id = file_data.next_id.max(successor::<T>(max_key)?);
        }

        tracing::debug!(
            kind = T::KIND,
            count = file_data.records.len(),
            "loaded repository"
        );

        *self.write()? = file_data;
        Ok(())
    }

    /// Get every record in insertion order
    pub fn get_all(&self) -> DirectoryResult<Vec<T>> {
        Ok(self.read()?.records.clone())
    }

    /// Get a record by key
    pub fn get(&self, key: u64) -> DirectoryResult<Option<T>> {
        Ok(self.read()?.records.iter().find(|r| r.key() == key).cloned())
    }

    /// Insert a record, assigning a key when it has none
    ///
    /// Returns the record as stored. A caller-supplied key that is already
    /// taken is rejected.
    pub fn insert(&self, mut entity: T) -> DirectoryResult<T> {
        let mut data = self.write()?;

        if entity.key() == 0 {
            entity.assign_key(data.next_id);
        } else if data.records.iter().any(|r| r.key() == entity.key()) {
            return Err(DirectoryError::Duplicate {
                entity_type: T::KIND,
                identifier: entity.key().to_string(),
            });
        }

        let mut staged = RepositoryData::clone(&data);
        staged.next_id = staged.next_id.max(successor::<T>(entity.key())?);
        staged.records.push(entity.clone());
        self.commit(&mut data, staged)?;

        tracing::debug!(kind = T::KIND, key = entity.key(), "inserted record");
        Ok(entity)
    }

    /// Replace the stored record that has the same key
    pub fn replace(&self, entity: &T) -> DirectoryResult<()> {
        let mut data = self.write()?;

        let Some(index) = data.records.iter().position(|r| r.key() == entity.key()) else {
            return Err(DirectoryError::NotFound {
                entity_type: T::KIND,
                identifier: entity.key().to_string(),
            });
        };

        let mut staged = RepositoryData::clone(&data);
        staged.records[index] = entity.clone();
        self.commit(&mut data, staged)?;

        tracing::debug!(kind = T::KIND, key = entity.key(), "replaced record");
        Ok(())
    }

    /// Remove a record by key, returning it if it was present
    pub fn remove(&self, key: u64) -> DirectoryResult<Option<T>> {
        let mut data = self.write()?;

        let Some(index) = data.records.iter().position(|r| r.key() == key) else {
            return Ok(None);
        };

        let mut staged = RepositoryData::clone(&data);
        let removed = staged.records.remove(index);
        self.commit(&mut data, staged)?;

        tracing::debug!(kind = T::KIND, key, "removed record");
        Ok(Some(removed))
    }

    /// Count records
    pub fn count(&self) -> DirectoryResult<usize> {
        Ok(self.read()?.records.len())
    }

    /// Persist `staged`, then make it the live state
    ///
    /// Memory is left untouched when the write fails.
    fn commit(
        &self,
        live: &mut RwLockWriteGuard<'_, RepositoryData<T>>,
        staged: RepositoryData<T>,
    ) -> DirectoryResult<()> {
        if let Some(path) = &self.path {
            write_json_atomic(path, &staged)?;
        }
        **live = staged;
        Ok(())
    }

    fn read(&self) -> DirectoryResult<RwLockReadGuard<'_, RepositoryData<T>>> {
        self.data
            .read()
            .map_err(|e| DirectoryError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> DirectoryResult<RwLockWriteGuard<'_, RepositoryData<T>>> {
        self.data
            .write()
            .map_err(|e| DirectoryError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

/// The key after `key`, or an error once the key space is used up
fn successor<T: Entity>(key: u64) -> DirectoryResult<u64> {
    key.checked_add(1).ok_or_else(|| {
        DirectoryError::Storage(format!("{} key space exhausted at {}", T::KIND, key))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn user(forename: &str) -> User {
        User::new(forename, "Test", "01/01/2000", "test@example.com", true)
    }

    fn create_test_repo() -> (TempDir, Repository<User>) {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::new(temp_dir.path().join("users.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_insert_assigns_sequential_keys() {
        let repo = Repository::<User>::in_memory();

        let a = repo.insert(user("A")).unwrap();
        let b = repo.insert(user("B")).unwrap();

        assert_eq!(a.id, UserId::new(1));
        assert_eq!(b.id, UserId::new(2));
        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|u| u.forename).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_insert_keeps_supplied_key() {
        let repo = Repository::<User>::in_memory();

        let explicit = repo.insert(user("Explicit").with_id(10)).unwrap();
        let next = repo.insert(user("Next")).unwrap();

        assert_eq!(explicit.id, UserId::new(10));
        assert_eq!(next.id, UserId::new(11));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let repo = Repository::<User>::in_memory();
        repo.insert(user("First").with_id(4)).unwrap();

        let result = repo.insert(user("Second").with_id(4));
        assert!(matches!(result, Err(DirectoryError::Duplicate { .. })));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_keys_never_reused_after_delete() {
        let (temp_dir, repo) = create_test_repo();
        repo.insert(user("A")).unwrap();
        let b = repo.insert(user("B")).unwrap();
        repo.remove(b.key()).unwrap();

        // Survives a reload as well
        let reloaded = Repository::<User>::new(temp_dir.path().join("users.json"));
        reloaded.load().unwrap();
        let c = reloaded.insert(user("C")).unwrap();
        assert_eq!(c.id, UserId::new(3));
    }

    #[test]
    fn test_replace() {
        let repo = Repository::<User>::in_memory();
        let mut stored = repo.insert(user("Before")).unwrap();

        stored.forename = "After".to_string();
        repo.replace(&stored).unwrap();

        let fetched = repo.get(stored.key()).unwrap().unwrap();
        assert_eq!(fetched.forename, "After");
    }

    #[test]
    fn test_replace_missing_is_not_found() {
        let repo = Repository::<User>::in_memory();
        let result = repo.replace(&user("Ghost").with_id(9));
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_remove_missing_is_none() {
        let repo = Repository::<User>::in_memory();
        assert!(repo.remove(99).unwrap().is_none());
    }

    #[test]
    fn test_writes_are_persisted_immediately() {
        let (temp_dir, repo) = create_test_repo();
        let stored = repo.insert(user("Persisted")).unwrap();

        let repo2 = Repository::<User>::new(temp_dir.path().join("users.json"));
        repo2.load().unwrap();

        let retrieved = repo2.get(stored.key()).unwrap().unwrap();
        assert_eq!(retrieved, stored);
    }

    #[test]
    fn test_load_repairs_stale_counter() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        let data = RepositoryData {
            next_id: 1,
            records: vec![user("Seeded").with_id(11)],
        };
        write_json_atomic(&path, &data).unwrap();

        let repo = Repository::<User>::new(path);
        repo.load().unwrap();
        let added = repo.insert(user("New")).unwrap();
        assert_eq!(added.id, UserId::new(12));
    }

    #[test]
    fn test_largest_key_is_rejected() {
        let repo = Repository::<User>::in_memory();

        let result = repo.insert(user("Edge").with_id(u64::MAX));
        assert!(matches!(result, Err(DirectoryError::Storage(_))));
        assert_eq!(repo.count().unwrap(), 0);

        let next = repo.insert(user("Next")).unwrap();
        assert_eq!(next.id, UserId::new(1));
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let repo = Repository::<User>::new(blocker.join("users.json"));

        assert!(repo.insert(user("Lost").with_id(5)).is_err());
        assert_eq!(repo.count().unwrap(), 0);

        // A retry fails the same way instead of reporting a duplicate
        let retry = repo.insert(user("Lost").with_id(5)).unwrap_err();
        assert!(!retry.is_duplicate());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_failed_replace_and_remove_keep_record() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        let repo = Repository::<User>::new(data_dir.join("users.json"));
        let mut stored = repo.insert(user("Kept")).unwrap();

        // Swap the data directory for a plain file so every write fails
        std::fs::remove_dir_all(&data_dir).unwrap();
        std::fs::write(&data_dir, "not a directory").unwrap();

        stored.forename = "Changed".to_string();
        assert!(repo.replace(&stored).is_err());
        assert!(repo.remove(stored.key()).is_err());

        let current = repo.get(stored.key()).unwrap().unwrap();
        assert_eq!(current.forename, "Kept");
        assert_eq!(repo.count().unwrap(), 1);
    }
}
