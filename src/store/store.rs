//! In-memory record store
//!
//! A single `RwLock` around the record map gives each request exclusive
//! access for the duration of its writes; that is the whole concurrency
//! story. No transactions, no partial-completion recovery.

use std::collections::HashMap;
use std::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::record::OrderableRecord;

/// Shared in-memory record store
#[derive(Debug, Default)]
pub struct RecordStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    records: HashMap<u64, OrderableRecord>,
    next_id: u64,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record at the end of the list.
    ///
    /// The new record gets `order = N + 1`, keeping the order set contiguous.
    pub fn insert(&self, title: impl Into<String>) -> StoreResult<OrderableRecord> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        inner.next_id += 1;
        let id = inner.next_id;
        let order = inner.records.len() as u32 + 1;
        let record = OrderableRecord::new(id, title, order);
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    /// Fetch a record by id
    pub fn get(&self, id: u64) -> StoreResult<OrderableRecord> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        inner
            .records
            .get(&id)
            .cloned()
            .ok_or(StoreError::RecordNotFound(id))
    }

    /// Fetch the record currently holding the given order value
    pub fn get_by_order(&self, order: u32) -> StoreResult<OrderableRecord> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        inner
            .records
            .values()
            .find(|r| r.order == order)
            .cloned()
            .ok_or(StoreError::OrderNotFound(order))
    }

    /// Overwrite a record's order value
    pub fn set_order(&self, id: u64, order: u32) -> StoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let record = inner
            .records
            .get_mut(&id)
            .ok_or(StoreError::RecordNotFound(id))?;
        record.order = order;
        Ok(())
    }

    /// Remove a record without touching any other order value.
    ///
    /// Gap closing is the reorder engine's responsibility; callers go
    /// through [`crate::engine::ReorderEngine::remove`].
    pub fn remove(&self, id: u64) -> StoreResult<OrderableRecord> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        inner
            .records
            .remove(&id)
            .ok_or(StoreError::RecordNotFound(id))
    }

    /// Number of records in the store
    pub fn count(&self) -> usize {
        self.inner.read().map(|inner| inner.records.len()).unwrap_or(0)
    }

    /// All records, ascending by order value.
    ///
    /// Ties (only possible mid-reorder) break on id, keeping the snapshot
    /// deterministic.
    pub fn snapshot_ordered(&self) -> Vec<OrderableRecord> {
        let mut records: Vec<OrderableRecord> = self
            .inner
            .read()
            .map(|inner| inner.records.values().cloned().collect())
            .unwrap_or_default();
        records.sort_by_key(|r| (r.order, r.id));
        records
    }

    /// Check the `{1..N}` invariant over the full store
    pub fn verify_contiguous(&self) -> bool {
        let records = self.snapshot_ordered();
        records
            .iter()
            .enumerate()
            .all(|(idx, r)| r.order as usize == idx + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(count: usize) -> RecordStore {
        let store = RecordStore::new();
        for i in 0..count {
            store.insert(format!("Record {}", i + 1)).unwrap();
        }
        store
    }

    #[test]
    fn test_insert_appends_to_end() {
        let store = seeded(3);
        let record = store.insert("Fourth").unwrap();
        assert_eq!(record.order, 4);
        assert_eq!(store.count(), 4);
        assert!(store.verify_contiguous());
    }

    #[test]
    fn test_get_by_order() {
        let store = seeded(5);
        let record = store.get_by_order(3).unwrap();
        assert_eq!(record.order, 3);
        assert!(matches!(
            store.get_by_order(6),
            Err(StoreError::OrderNotFound(6))
        ));
    }

    #[test]
    fn test_set_order() {
        let store = seeded(2);
        let first = store.snapshot_ordered()[0].clone();
        store.set_order(first.id, 9).unwrap();
        assert_eq!(store.get(first.id).unwrap().order, 9);
    }

    #[test]
    fn test_remove_leaves_gap() {
        let store = seeded(3);
        let middle = store.get_by_order(2).unwrap();
        store.remove(middle.id).unwrap();
        assert_eq!(store.count(), 2);
        // Raw removal does not renumber; invariant restoration is the
        // engine's job.
        assert!(!store.verify_contiguous());
    }

    #[test]
    fn test_missing_record_errors() {
        let store = seeded(1);
        assert!(matches!(store.get(99), Err(StoreError::RecordNotFound(99))));
        assert!(matches!(
            store.set_order(99, 1),
            Err(StoreError::RecordNotFound(99))
        ));
        assert!(matches!(store.remove(99), Err(StoreError::RecordNotFound(99))));
    }

    #[test]
    fn test_snapshot_is_ordered() {
        let store = seeded(4);
        let orders: Vec<u32> = store.snapshot_ordered().iter().map(|r| r.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
    }
}
