//! Observable lifecycle events
//!
//! Every externally visible state change of the service has a named event.
//! Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Startup complete, ready to serve
    BootComplete,

    // Configuration
    /// Configuration resolved
    ConfigLoaded,
    /// Initial record set seeded into the store
    StoreSeeded,

    // Record lifecycle
    /// Record appended at the end of the list
    RecordCreated,
    /// Record deleted, order gap closed
    RecordDeleted,

    // Single-record reorder
    /// Drag reorder request received
    ReorderReceived,
    /// Drag reorder applied, orders renumbered
    ReorderApplied,
    /// Drag reorder rejected as invalid
    ReorderRejected,

    // Bulk moves
    /// Bulk move request received
    BulkMoveReceived,
    /// Bulk move applied
    BulkMoveApplied,
    /// Bulk move clamped to a boundary page
    BulkMoveClamped,
    /// Bulk move skipped, nothing changed
    BulkMoveSkipped,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::BootComplete => "BOOT_COMPLETE",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::RecordCreated => "RECORD_CREATED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::ReorderReceived => "REORDER_RECEIVED",
            Event::ReorderApplied => "REORDER_APPLIED",
            Event::ReorderRejected => "REORDER_REJECTED",
            Event::BulkMoveReceived => "BULK_MOVE_RECEIVED",
            Event::BulkMoveApplied => "BULK_MOVE_APPLIED",
            Event::BulkMoveClamped => "BULK_MOVE_CLAMPED",
            Event::BulkMoveSkipped => "BULK_MOVE_SKIPPED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake() {
        for event in [Event::BootStart, Event::ReorderApplied, Event::BulkMoveSkipped] {
            let name = event.as_str();
            assert!(name
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_display_matches_as_str() {
        assert_eq!(Event::RecordDeleted.to_string(), "RECORD_DELETED");
    }
}
