//! Bulk selection moves
//!
//! A bulk move relocates a multi-record selection to the first display
//! position of a target page, preserving the selection's display order.
//! Records between source and destination shift to close the vacated range,
//! so the order set stays `{1..N}` afterwards.
//!
//! Boundary handling is deliberately soft: page-relative moves that would
//! run past the first or last page clamp to the boundary, a selection that
//! does not fit at its destination stays put, and both cases report a single
//! informational notice instead of failing. An explicit page number beyond
//! the page count is a silent no-op.

use std::collections::{HashMap, HashSet};

use super::errors::{EngineError, EngineResult};
use super::paging::{page_start_position, position_to_order, total_pages, SortDirection};
use super::{OrderWrite, ReorderEngine};

/// A bulk relocation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    /// Move the selection `step` pages toward the front of the list
    BackPage { step: usize },
    /// Move the selection `step` pages toward the back of the list
    ForwardPage { step: usize },
    /// Move the selection to the start of the first page
    FirstPage,
    /// Move the selection to the start of the last page
    LastPage,
    /// Move the selection to the start of an explicit 1-based page
    ExactPage { page: usize },
}

/// List-view context a bulk move executes in
#[derive(Debug, Clone, Copy)]
pub struct BulkContext {
    /// 0-based page the list view currently shows
    pub current_page: usize,
    /// Records per page
    pub page_size: usize,
    /// Sort direction of the order column in the list view
    pub direction: SortDirection,
}

/// Result of a bulk move
#[derive(Debug, Clone, Default)]
pub struct BulkOutcome {
    /// Ids of records whose order changed, in write order
    pub updated: Vec<u64>,
    /// User-visible informational notice, when the move was clamped,
    /// skipped, or changed nothing
    pub notice: Option<String>,
}

impl BulkOutcome {
    fn skipped(notice: impl Into<String>) -> Self {
        Self {
            updated: Vec::new(),
            notice: Some(notice.into()),
        }
    }

    fn silent() -> Self {
        Self::default()
    }
}

impl ReorderEngine {
    /// Relocate `selected` according to `action` within the given list-view
    /// context.
    ///
    /// The selection is placed contiguously at the first display position of
    /// the target page, in display order (ascending by order value for
    /// ascending views, descending otherwise). Only records whose order
    /// actually changes are written.
    pub fn bulk_move(
        &self,
        selected: &[u64],
        action: BulkAction,
        ctx: &BulkContext,
    ) -> EngineResult<BulkOutcome> {
        if selected.is_empty() {
            return Err(EngineError::EmptySelection);
        }
        for &id in selected {
            self.store()
                .get(id)
                .map_err(|_| EngineError::UnknownRecord(id))?;
        }

        let count = self.store().count();
        let page_size = ctx.page_size.max(1);
        let last_page = total_pages(count, page_size) - 1;

        let mut notice: Option<String> = None;
        let target_page = match action {
            BulkAction::BackPage { step } => {
                if step > ctx.current_page {
                    if ctx.current_page == 0 {
                        return Ok(BulkOutcome::skipped(
                            "Selection cannot move back past the first page",
                        ));
                    }
                    notice = Some("Selection move clamped to the first page".to_string());
                    0
                } else {
                    ctx.current_page - step
                }
            }
            BulkAction::ForwardPage { step } => {
                let raw = ctx.current_page + step;
                if raw > last_page {
                    if ctx.current_page >= last_page {
                        return Ok(BulkOutcome::skipped(
                            "Selection cannot move forward past the last page",
                        ));
                    }
                    notice = Some("Selection move clamped to the last page".to_string());
                    last_page
                } else {
                    raw
                }
            }
            BulkAction::FirstPage => 0,
            BulkAction::LastPage => last_page,
            BulkAction::ExactPage { page } => {
                if page == 0 || page - 1 > last_page {
                    // Soft failure: an out-of-range explicit page leaves the
                    // set untouched without a notice.
                    return Ok(BulkOutcome::silent());
                }
                page - 1
            }
        };
        let target_page = target_page.min(last_page);

        // Display-ordered id sequence for the whole set.
        let snapshot = self.store().snapshot_ordered();
        let mut display: Vec<u64> = snapshot.iter().map(|r| r.id).collect();
        if ctx.direction == SortDirection::Descending {
            display.reverse();
        }

        let selected_set: HashSet<u64> = selected.iter().copied().collect();
        let selected_display: Vec<u64> = display
            .iter()
            .copied()
            .filter(|id| selected_set.contains(id))
            .collect();
        let remaining: Vec<u64> = display
            .iter()
            .copied()
            .filter(|id| !selected_set.contains(id))
            .collect();

        if action == BulkAction::LastPage {
            // A selection already holding the tail of the list has nowhere
            // further to go.
            let tail = &display[display.len() - selected_display.len()..];
            if tail.iter().all(|id| selected_set.contains(id)) {
                return Ok(BulkOutcome::skipped(
                    "Selection is already at the end of the list",
                ));
            }
        }

        let destination = page_start_position(target_page, page_size);
        if destination - 1 > remaining.len() {
            return Ok(BulkOutcome::skipped(format!(
                "Selection does not fit on page {}; nothing was moved",
                target_page + 1
            )));
        }

        let mut new_display = Vec::with_capacity(count);
        new_display.extend_from_slice(&remaining[..destination - 1]);
        new_display.extend_from_slice(&selected_display);
        new_display.extend_from_slice(&remaining[destination - 1..]);

        let current_orders: HashMap<u64, u32> =
            snapshot.iter().map(|r| (r.id, r.order)).collect();
        let mut plan: Vec<OrderWrite> = Vec::new();
        for (index, id) in new_display.iter().enumerate() {
            let order = position_to_order(index + 1, count, ctx.direction);
            if current_orders[id] != order {
                plan.push((*id, order));
            }
        }

        if plan.is_empty() {
            return Ok(BulkOutcome::skipped(notice.unwrap_or_else(|| {
                "Selection is already in the requested position".to_string()
            })));
        }

        let updated = self.apply(&plan)?;
        Ok(BulkOutcome { updated, notice })
    }
}
