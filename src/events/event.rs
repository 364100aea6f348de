//! Save event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which side of the persistence boundary an event marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavePhase {
    /// Published immediately before the record is written
    BeforeSave,
    /// Published immediately after the record is written
    AfterSave,
}

impl std::fmt::Display for SavePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SavePhase::BeforeSave => write!(f, "before_save"),
            SavePhase::AfterSave => write!(f, "after_save"),
        }
    }
}

/// A single persistence notification for one record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveEvent {
    /// Persistence phase
    pub phase: SavePhase,

    /// Id of the record being written
    pub record_id: u64,

    /// Order value being written
    pub order: u32,

    /// When the event was published
    pub timestamp: DateTime<Utc>,
}

impl SaveEvent {
    /// Create a before-save event
    pub fn before_save(record_id: u64, order: u32) -> Self {
        Self {
            phase: SavePhase::BeforeSave,
            record_id,
            order,
            timestamp: Utc::now(),
        }
    }

    /// Create an after-save event
    pub fn after_save(record_id: u64, order: u32) -> Self {
        Self {
            phase: SavePhase::AfterSave,
            record_id,
            order,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display() {
        assert_eq!(SavePhase::BeforeSave.to_string(), "before_save");
        assert_eq!(SavePhase::AfterSave.to_string(), "after_save");
    }

    #[test]
    fn test_event_constructors() {
        let before = SaveEvent::before_save(7, 3);
        assert_eq!(before.phase, SavePhase::BeforeSave);
        assert_eq!(before.record_id, 7);
        assert_eq!(before.order, 3);

        let after = SaveEvent::after_save(7, 3);
        assert_eq!(after.phase, SavePhase::AfterSave);
    }
}
