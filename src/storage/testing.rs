//! Test double that records every store call

use std::sync::Mutex;

use crate::error::DirectoryResult;

use super::repository::Entity;
use super::store::Store;
use super::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    GetAll,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCall {
    pub op: StoreOp,
    pub kind: &'static str,
    pub key: Option<u64>,
}

/// Delegates to an in-memory `Storage` and keeps a call journal
pub struct RecordingStore {
    pub inner: Storage,
    calls: Mutex<Vec<StoreCall>>,
}

impl RecordingStore {
    pub fn new(inner: Storage) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of `op` calls made for entity type `T`
    pub fn count<T: Entity>(&self, op: StoreOp) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.op == op && c.kind == T::KIND)
            .count()
    }

    fn record(&self, op: StoreOp, kind: &'static str, key: Option<u64>) {
        self.calls.lock().unwrap().push(StoreCall { op, kind, key });
    }
}

impl Store for RecordingStore {
    fn get_all<T: Entity>(&self) -> DirectoryResult<Vec<T>> {
        self.record(StoreOp::GetAll, T::KIND, None);
        self.inner.get_all()
    }

    fn create<T: Entity>(&self, entity: T) -> DirectoryResult<T> {
        let created = self.inner.create(entity)?;
        self.record(StoreOp::Create, T::KIND, Some(created.key()));
        Ok(created)
    }

    fn update<T: Entity>(&self, entity: &T) -> DirectoryResult<()> {
        self.record(StoreOp::Update, T::KIND, Some(entity.key()));
        self.inner.update(entity)
    }

    fn delete<T: Entity>(&self, entity: &T) -> DirectoryResult<()> {
        self.record(StoreOp::Delete, T::KIND, Some(entity.key()));
        self.inner.delete(entity)
    }
}
