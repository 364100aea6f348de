//! Change-list column and sorting rules
//!
//! Drag reordering is only offered when the list is sorted by the order
//! column itself. Sorting by any other column, or a malformed sort
//! parameter, disables it for that request.

use serde::{Deserialize, Serialize};

use crate::engine::SortDirection;

/// Synthetic column name marking where the drag handle renders
pub const REORDER_COLUMN: &str = "_reorder";

/// Configuration of the sortable list view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeListConfig {
    /// Columns the list displays, in order
    #[serde(default = "default_columns")]
    pub columns: Vec<String>,
    /// Which column carries the order value
    #[serde(default = "default_order_field")]
    pub order_field: String,
    /// Rows per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_columns() -> Vec<String> {
    vec!["order".to_string(), "title".to_string()]
}

fn default_order_field() -> String {
    "order".to_string()
}

fn default_page_size() -> usize {
    12
}

impl Default for ChangeListConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            order_field: default_order_field(),
            page_size: default_page_size(),
        }
    }
}

/// Effective sorting state for one list request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListSorting {
    /// Whether drag reordering and bulk moves are active
    pub enabled: bool,
    /// Direction the order column is sorted in
    pub direction: SortDirection,
}

impl Default for ListSorting {
    fn default() -> Self {
        Self {
            enabled: true,
            direction: SortDirection::Ascending,
        }
    }
}

impl ListSorting {
    fn disabled() -> Self {
        Self {
            enabled: false,
            direction: SortDirection::Ascending,
        }
    }
}

impl ChangeListConfig {
    /// Columns as displayed: the order field is replaced by the reorder
    /// handle column, or the handle is prepended when the order field is
    /// not among the configured columns.
    pub fn display_columns(&self) -> Vec<String> {
        let mut columns = self.columns.clone();
        match columns.iter().position(|c| *c == self.order_field) {
            Some(index) => columns[index] = REORDER_COLUMN.to_string(),
            None => columns.insert(0, REORDER_COLUMN.to_string()),
        }
        columns
    }

    /// Resolve the `o` sort parameter into a sorting state.
    ///
    /// The parameter is a 1-based column index into `columns`, with a `-`
    /// prefix for descending. Absent means the default order-column sort.
    /// Anything unparsable, out of range, or naming a column other than the
    /// order field disables reordering.
    pub fn sorting_from_query(&self, o: Option<&str>) -> ListSorting {
        let Some(raw) = o else {
            return ListSorting::default();
        };

        let (direction, index_str) = match raw.strip_prefix('-') {
            Some(rest) => (SortDirection::Descending, rest),
            None => (SortDirection::Ascending, raw),
        };
        let Ok(index) = index_str.parse::<usize>() else {
            return ListSorting::disabled();
        };
        if index == 0 || index > self.columns.len() {
            return ListSorting::disabled();
        }
        if self.columns[index - 1] != self.order_field {
            return ListSorting::disabled();
        }
        ListSorting {
            enabled: true,
            direction,
        }
    }
}
