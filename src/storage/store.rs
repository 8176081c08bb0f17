//! The persistence seam used by the services
//!
//! `Store` is generic over the entity type; `Storage` resolves each type to its
//! own repository through `Entity::repository`.

use crate::error::DirectoryResult;

use super::repository::Entity;
use super::Storage;

/// Whole-record persistence for any `Entity`
pub trait Store {
    /// Every stored record of type `T`, in insertion order
    ///
    /// The vector is a snapshot taken under the repository lock.
    fn get_all<T: Entity>(&self) -> DirectoryResult<Vec<T>>;

    /// Persist a new record, assigning an identity if it has none
    fn create<T: Entity>(&self, entity: T) -> DirectoryResult<T>;

    /// Persist the new state of a record that is already stored
    fn update<T: Entity>(&self, entity: &T) -> DirectoryResult<()>;

    /// Remove the record with the same identity; absent records are ignored
    fn delete<T: Entity>(&self, entity: &T) -> DirectoryResult<()>;
}

impl Store for Storage {
    fn get_all<T: Entity>(&self) -> DirectoryResult<Vec<T>> {
        T::repository(self).get_all()
    }

    fn create<T: Entity>(&self, entity: T) -> DirectoryResult<T> {
        T::repository(self).insert(entity)
    }

    fn update<T: Entity>(&self, entity: &T) -> DirectoryResult<()> {
        T::repository(self).replace(entity)
    }

    fn delete<T: Entity>(&self, entity: &T) -> DirectoryResult<()> {
        T::repository(self).remove(entity.key()).map(|_| ())
    }
}
