//! Orderable record type
//!
//! A record is anything with a stable integer id, a human-readable title and
//! a 1-based `order` value defining its display position.

use serde::{Deserialize, Serialize};

/// A record participating in the sortable list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderableRecord {
    /// Stable record identifier
    pub id: u64,
    /// Display title
    pub title: String,
    /// 1-based display position within the full set
    pub order: u32,
}

impl OrderableRecord {
    /// Create a new record at the given order position
    pub fn new(id: u64, title: impl Into<String>, order: u32) -> Self {
        Self {
            id,
            title: title.into(),
            order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_construction() {
        let record = OrderableRecord::new(3, "Third", 3);
        assert_eq!(record.id, 3);
        assert_eq!(record.title, "Third");
        assert_eq!(record.order, 3);
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = OrderableRecord::new(1, "First", 1);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["title"], "First");
        assert_eq!(value["order"], 1);
    }
}
