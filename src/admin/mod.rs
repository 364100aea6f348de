//! Change-list presentation layer
//!
//! Models the sortable list view: which columns it shows, whether drag
//! reordering is active for the requested sort, and the one-shot notice
//! queue surfaced alongside the rows.

pub mod changelist;
pub mod messages;

pub use changelist::{ChangeListConfig, ListSorting, REORDER_COLUMN};
pub use messages::{Message, MessageLevel, MessageStore};
