//! Reorder engine
//!
//! The computation core of the service: given a request to move one record
//! to a new order position, or to relocate a bulk selection to a target
//! page, compute the new order value for every affected record and persist
//! the changes so the order set stays exactly `{1..N}`.
//!
//! Every individual record write publishes a before-save event, performs the
//! write, then publishes an after-save event, in the engine's processing
//! order. The moved record (single move) is always processed last.

pub mod bulk;
pub mod errors;
pub mod paging;
pub mod single;

pub use bulk::{BulkAction, BulkContext, BulkOutcome};
pub use errors::{EngineError, EngineResult};
pub use paging::SortDirection;

use std::sync::Arc;

use crate::events::{SaveDispatcher, SaveEvent};
use crate::store::RecordStore;

/// A planned order write: `(record id, new order value)`
pub(crate) type OrderWrite = (u64, u32);

/// The reorder engine
///
/// Holds the store it renumbers and the dispatcher it announces writes
/// through. Cheap to clone; clones share the same store and dispatcher.
#[derive(Debug, Clone)]
pub struct ReorderEngine {
    store: Arc<RecordStore>,
    dispatcher: Arc<SaveDispatcher>,
}

impl ReorderEngine {
    /// Create an engine over the given store and dispatcher
    pub fn new(store: Arc<RecordStore>, dispatcher: Arc<SaveDispatcher>) -> Self {
        Self { store, dispatcher }
    }

    /// The store this engine renumbers
    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    /// Delete a record and close the gap it leaves.
    ///
    /// Every record with a greater order shifts down by one, ascending, with
    /// save events per shifted record. Returns the shifted record ids.
    pub fn remove(&self, id: u64) -> EngineResult<Vec<u64>> {
        let record = self.store.get(id)?;
        let count = self.store.count() as u32;

        let mut plan: Vec<OrderWrite> = Vec::new();
        for order in (record.order + 1)..=count {
            let shifted = self.store.get_by_order(order)?;
            plan.push((shifted.id, order - 1));
        }

        self.store.remove(id)?;
        self.apply(&plan)
    }

    /// Persist a sequence of order writes, one record at a time.
    ///
    /// Each write is bracketed by before-save and after-save events. Returns
    /// the written record ids in processing order.
    pub(crate) fn apply(&self, plan: &[OrderWrite]) -> EngineResult<Vec<u64>> {
        let mut updated = Vec::with_capacity(plan.len());
        for &(id, order) in plan {
            self.dispatcher.publish(&SaveEvent::before_save(id, order));
            self.store.set_order(id, order)?;
            self.dispatcher.publish(&SaveEvent::after_save(id, order));
            updated.push(id);
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_engine(count: usize) -> ReorderEngine {
        let store = Arc::new(RecordStore::new());
        for i in 0..count {
            store.insert(format!("Record {}", i + 1)).unwrap();
        }
        ReorderEngine::new(store, Arc::new(SaveDispatcher::new()))
    }

    #[test]
    fn test_remove_closes_gap() {
        let engine = seeded_engine(5);
        let victim = engine.store().get_by_order(2).unwrap();

        let shifted = engine.remove(victim.id).unwrap();
        assert_eq!(shifted.len(), 3);
        assert_eq!(engine.store().count(), 4);
        assert!(engine.store().verify_contiguous());
    }

    #[test]
    fn test_remove_last_shifts_nothing() {
        let engine = seeded_engine(3);
        let last = engine.store().get_by_order(3).unwrap();

        let shifted = engine.remove(last.id).unwrap();
        assert!(shifted.is_empty());
        assert!(engine.store().verify_contiguous());
    }

    #[test]
    fn test_remove_unknown_record() {
        let engine = seeded_engine(2);
        assert!(engine.remove(99).is_err());
        assert_eq!(engine.store().count(), 2);
    }
}
