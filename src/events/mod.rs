//! Save-event publication
//!
//! The reorder engine announces every record persistence twice: once before
//! the write and once after, in the exact order it processes records. This
//! module is the explicit observer interface those announcements go through.

pub mod dispatcher;
pub mod event;

pub use dispatcher::{DispatchOutcome, SaveDispatcher, SaveListener};
pub use event::{SaveEvent, SavePhase};
