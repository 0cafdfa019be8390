use std::sync::atomic::{AtomicI64, Ordering};

use contracts::domain::common::{EntityMetadata, ReferenceEntity};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory table of one reference resource, ordered by id
#[derive(Debug)]
pub struct ReferenceStore<E> {
    items: RwLock<Vec<E>>,
    next_id: AtomicI64,
}

impl<E: ReferenceEntity> ReferenceStore<E> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Vec<E>> {
        self.items.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Vec<E>> {
        self.items.write().await
    }

    pub fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Appends without validation; used for seeding
    pub async fn insert_unchecked(&self, payload: E::Payload) -> E {
        let record = E::from_payload(self.next_id(), payload, EntityMetadata::new());
        self.items.write().await.push(record.clone());
        record
    }

    pub async fn get(&self, id: i64) -> Option<E> {
        self.items.read().await.iter().find(|e| e.id() == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

impl<E: ReferenceEntity> Default for ReferenceStore<E> {
    fn default() -> Self {
        Self::new()
    }
}
