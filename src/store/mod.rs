//! Orderable record store
//!
//! In-memory record set carrying the single piece of persisted state this
//! service manages: one integer `order` attribute per record. Across the
//! whole store the order values are exactly `{1..N}`: no gaps, no
//! duplicates. The store only does raw reads and writes; maintaining the
//! invariant across moves is the reorder engine's job.

pub mod errors;
pub mod record;
pub mod store;

pub use errors::{StoreError, StoreResult};
pub use record::OrderableRecord;
pub use store::RecordStore;
