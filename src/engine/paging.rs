//! Page and display-position arithmetic
//!
//! The list view presents records in display positions `1..N`: position `d`
//! holds order `d` when sorted ascending and order `N + 1 - d` when sorted
//! descending. Pages are fixed-size contiguous slices of those positions,
//! indexed from 0.

use serde::{Deserialize, Serialize};

/// Direction the list view sorts the order column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

/// Total number of pages; an empty set still renders one page
pub fn total_pages(record_count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    if record_count == 0 {
        1
    } else {
        record_count.div_ceil(page_size)
    }
}

/// First display position (1-based) of a 0-based page index
pub fn page_start_position(page: usize, page_size: usize) -> usize {
    page * page_size.max(1) + 1
}

/// Map a display position to the order value it holds
pub fn position_to_order(position: usize, record_count: usize, direction: SortDirection) -> u32 {
    match direction {
        SortDirection::Ascending => position as u32,
        SortDirection::Descending => (record_count + 1 - position) as u32,
    }
}
