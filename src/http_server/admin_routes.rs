//! Admin HTTP Routes
//!
//! Endpoints for the sortable record list: paginated listing, record
//! creation and deletion, single-record drag reorder, and bulk page moves.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, RawForm, State},
    http::{HeaderMap, StatusCode},
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::admin::{ChangeListConfig, ListSorting, Message, MessageStore};
use crate::engine::paging::total_pages;
use crate::engine::{BulkAction, BulkContext, ReorderEngine, SortDirection};
use crate::events::SaveDispatcher;
use crate::observability::{log_event_with_fields, Event};
use crate::store::{OrderableRecord, RecordStore};

use super::errors::{AdminError, AdminResult};
use super::forms::FormValues;

// ==================
// Shared State
// ==================

/// Admin state shared across handlers
pub struct AdminState {
    pub store: Arc<RecordStore>,
    pub engine: ReorderEngine,
    pub dispatcher: Arc<SaveDispatcher>,
    pub messages: MessageStore,
    pub list_config: ChangeListConfig,
}

impl AdminState {
    pub fn new() -> Self {
        Self::with_config(ChangeListConfig::default())
    }

    pub fn with_config(list_config: ChangeListConfig) -> Self {
        let store = Arc::new(RecordStore::new());
        let dispatcher = Arc::new(SaveDispatcher::new());
        let engine = ReorderEngine::new(store.clone(), dispatcher.clone());
        Self {
            store,
            engine,
            dispatcher,
            messages: MessageStore::new(),
            list_config,
        }
    }
}

impl Default for AdminState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Request/Response Types
// ==================

/// List-view query parameters: 0-based page `p` and sort parameter `o`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub p: Option<usize>,
    #[serde(default)]
    pub o: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub rows: Vec<OrderableRecord>,
    pub count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub columns: Vec<String>,
    pub sorting: ListSorting,
    pub messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    pub title: String,
}

// ==================
// Routes
// ==================

pub fn admin_routes(state: Arc<AdminState>) -> Router {
    Router::new()
        .route(
            "/records",
            get(list_records_handler).post(bulk_action_handler),
        )
        .route("/records/add", post(create_record_handler))
        .route("/records/:id", axum::routing::delete(delete_record_handler))
        .route("/records/sortable-update", post(sortable_update_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// GET /records - one page of the list in display order
async fn list_records_handler(
    State(state): State<Arc<AdminState>>,
    Query(query): Query<ListQuery>,
) -> AdminResult<Json<ListResponse>> {
    let sorting = state.list_config.sorting_from_query(query.o.as_deref());
    let page_size = state.list_config.page_size.max(1);

    let mut display = state.store.snapshot_ordered();
    if sorting.direction == SortDirection::Descending {
        display.reverse();
    }

    let count = display.len();
    let pages = total_pages(count, page_size);
    let page = query.p.unwrap_or(0).min(pages - 1);
    let start = page * page_size;
    let rows = display
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    Ok(Json(ListResponse {
        rows,
        count,
        page,
        total_pages: pages,
        columns: state.list_config.display_columns(),
        sorting,
        messages: state.messages.drain(),
    }))
}

/// POST /records/add - append a record at the end of the list
async fn create_record_handler(
    State(state): State<Arc<AdminState>>,
    Json(request): Json<CreateRecordRequest>,
) -> AdminResult<(StatusCode, Json<OrderableRecord>)> {
    let record = state
        .store
        .insert(request.title)
        .map_err(crate::engine::EngineError::Store)?;
    log_event_with_fields(
        Event::RecordCreated,
        &[
            ("id", &record.id.to_string()),
            ("order", &record.order.to_string()),
        ],
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// DELETE /records/:id - delete a record and close the order gap
async fn delete_record_handler(
    State(state): State<Arc<AdminState>>,
    Path(id): Path<u64>,
) -> AdminResult<StatusCode> {
    state.engine.remove(id)?;
    log_event_with_fields(Event::RecordDeleted, &[("id", &id.to_string())]);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /records/sortable-update - drag one record to a new order position.
///
/// Accepts `startorder` and `endorder` form fields and answers with the ids
/// of every record whose order changed. Only honored for AJAX requests.
async fn sortable_update_handler(
    State(state): State<Arc<AdminState>>,
    headers: HeaderMap,
    RawForm(body): RawForm,
) -> AdminResult<Json<Vec<u64>>> {
    let requested_with = headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if requested_with != "XMLHttpRequest" {
        return Err(AdminError::NotAjax);
    }

    let form = FormValues::parse(&body);
    let start_order = form.require_u32("startorder")?;
    let end_order = form.require_u32("endorder")?;
    log_event_with_fields(
        Event::ReorderReceived,
        &[
            ("endorder", &end_order.to_string()),
            ("startorder", &start_order.to_string()),
        ],
    );

    match state.engine.move_single(start_order, end_order) {
        Ok(updated) => {
            log_event_with_fields(
                Event::ReorderApplied,
                &[("updated", &updated.len().to_string())],
            );
            Ok(Json(updated))
        }
        Err(err) => {
            log_event_with_fields(Event::ReorderRejected, &[("reason", &err.to_string())]);
            Err(err.into())
        }
    }
}

/// POST /records - run a bulk move action against the selection.
///
/// Mirrors a change-list action submit: the chosen action plus one
/// `_selected_action` field per selected row, executed in the list context
/// given by the `p` and `o` query parameters. Redirects back to the list;
/// clamped or skipped moves leave a notice for the next list fetch.
async fn bulk_action_handler(
    State(state): State<Arc<AdminState>>,
    Query(query): Query<ListQuery>,
    RawForm(body): RawForm,
) -> AdminResult<Redirect> {
    let form = FormValues::parse(&body);
    let action = form.require("action")?;
    let sorting = state.list_config.sorting_from_query(query.o.as_deref());

    // Actions only apply while the list is sorted by the order column.
    if sorting.enabled {
        let bulk_action = parse_action(action, &form)?;
        let selected = form.u64_list("_selected_action")?;
        let ctx = BulkContext {
            current_page: query.p.unwrap_or(0),
            page_size: state.list_config.page_size,
            direction: sorting.direction,
        };
        log_event_with_fields(
            Event::BulkMoveReceived,
            &[("action", action), ("selected", &selected.len().to_string())],
        );

        let outcome = state.engine.bulk_move(&selected, bulk_action, &ctx)?;
        let event = if outcome.updated.is_empty() {
            Event::BulkMoveSkipped
        } else if outcome.notice.is_some() {
            Event::BulkMoveClamped
        } else {
            Event::BulkMoveApplied
        };
        log_event_with_fields(event, &[("updated", &outcome.updated.len().to_string())]);
        if let Some(notice) = outcome.notice {
            state.messages.push_info(notice);
        }
    }

    Ok(Redirect::to(&list_url(&query)))
}

fn parse_action(action: &str, form: &FormValues) -> AdminResult<BulkAction> {
    let step = || -> AdminResult<usize> {
        match form.first("step") {
            Some(_) => form.require_usize("step"),
            None => Ok(1),
        }
    };
    match action {
        "move_to_back_page" => Ok(BulkAction::BackPage { step: step()? }),
        "move_to_forward_page" => Ok(BulkAction::ForwardPage { step: step()? }),
        "move_to_first_page" => Ok(BulkAction::FirstPage),
        "move_to_last_page" => Ok(BulkAction::LastPage),
        "move_to_exact_page" => Ok(BulkAction::ExactPage {
            page: form.require_usize("page")?,
        }),
        other => Err(AdminError::UnknownAction(other.to_string())),
    }
}

/// Rebuild the list URL preserving the page and sort parameters
fn list_url(query: &ListQuery) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if let Some(p) = query.p {
        serializer.append_pair("p", &p.to_string());
    }
    if let Some(o) = &query.o {
        serializer.append_pair("o", o);
    }
    let params = serializer.finish();
    if params.is_empty() {
        "/admin/records".to_string()
    } else {
        format!("/admin/records?{params}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url_preserves_context() {
        let query = ListQuery {
            p: Some(1),
            o: Some("-2".to_string()),
        };
        assert_eq!(list_url(&query), "/admin/records?p=1&o=-2");
        assert_eq!(list_url(&ListQuery::default()), "/admin/records");
    }

    #[test]
    fn test_parse_action_defaults_step() {
        let form = FormValues::parse(b"action=move_to_forward_page");
        let action = parse_action("move_to_forward_page", &form).unwrap();
        assert_eq!(action, BulkAction::ForwardPage { step: 1 });
    }

    #[test]
    fn test_parse_action_exact_page_requires_page() {
        let form = FormValues::parse(b"action=move_to_exact_page");
        assert!(matches!(
            parse_action("move_to_exact_page", &form),
            Err(AdminError::MissingField(_))
        ));
    }

    #[test]
    fn test_parse_action_rejects_unknown() {
        let form = FormValues::parse(b"action=delete_selected");
        assert!(matches!(
            parse_action("delete_selected", &form),
            Err(AdminError::UnknownAction(_))
        ));
    }
}
