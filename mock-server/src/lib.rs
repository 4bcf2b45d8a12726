//! Mock of the monday.com GraphQL endpoint.
//!
//! Understands only the four fixed board queries the client sends. The
//! query shape is recognised by the fields it selects, and the board filter
//! is read from the `boardId` variable.

pub mod fixture;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub use fixture::{Fixture, FixtureBoard, FixtureColumn, FixtureItem};

pub const GRAPHQL_PATH: &str = "/v2";

#[derive(Deserialize)]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(default)]
    pub variables: Option<Value>,
}

#[derive(Clone)]
struct AppState {
    fixture: Arc<Fixture>,
    token: Option<String>,
}

/// Selection requested by an incoming query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Boards,
    Items,
    Columns,
    ItemsWithColumnValues,
}

impl Selection {
    fn of(query: &str) -> Self {
        if query.contains("column_values") {
            Selection::ItemsWithColumnValues
        } else if query.contains("items_page") {
            Selection::Items
        } else if query.contains("columns") {
            Selection::Columns
        } else {
            Selection::Boards
        }
    }
}

/// Router accepting any non-empty `Authorization` header.
pub fn app(fixture: Fixture) -> Router {
    router(fixture, None)
}

/// Router accepting only `token` as the `Authorization` header.
pub fn app_with_token(fixture: Fixture, token: impl Into<String>) -> Router {
    router(fixture, Some(token.into()))
}

fn router(fixture: Fixture, token: Option<String>) -> Router {
    let state = AppState {
        fixture: Arc::new(fixture),
        token,
    };
    Router::new()
        .route(GRAPHQL_PATH, post(graphql))
        .with_state(state)
}

pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn graphql(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<GraphQlRequest>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&state, &headers) {
        tracing::debug!("rejecting request with missing or wrong token");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "errors": [{ "message": "Not Authenticated" }] })),
        );
    }

    let ids = match board_ids(request.variables.as_ref()) {
        Ok(ids) => ids,
        Err(message) => return (StatusCode::OK, Json(graphql_error(&message))),
    };

    let selection = Selection::of(&request.query);
    let boards: Vec<Value> = state
        .fixture
        .boards
        .iter()
        .filter(|board| ids.as_ref().map_or(true, |ids| ids.contains(&board.id)))
        .map(|board| render_board(board, selection))
        .collect();

    (StatusCode::OK, Json(json!({ "data": { "boards": boards } })))
}

fn authorized(state: &AppState, headers: &HeaderMap) -> bool {
    let Some(presented) = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
    else {
        return false;
    };
    state.token.as_deref().map_or(true, |expected| expected == presented)
}

/// Ids from the `boardId` variable; `None` means no filter.
fn board_ids(variables: Option<&Value>) -> Result<Option<Vec<String>>, String> {
    let Some(raw) = variables.and_then(|vars| vars.get("boardId")) else {
        return Ok(None);
    };
    let values = match raw {
        Value::Array(values) => values.clone(),
        Value::Null => return Ok(None),
        single => vec![single.clone()],
    };
    values
        .iter()
        .map(|value| {
            let id = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                other => return Err(format!("Variable $boardId got invalid value {other}")),
            };
            if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("Variable $boardId got invalid value \"{id}\""));
            }
            Ok(id)
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn graphql_error(message: &str) -> Value {
    json!({ "errors": [{ "message": message, "locations": [{ "line": 1, "column": 8 }] }] })
}

fn render_board(board: &FixtureBoard, selection: Selection) -> Value {
    match selection {
        Selection::Boards => json!({ "id": board.id, "name": board.name }),
        Selection::Columns => json!({ "columns": board.columns }),
        Selection::Items => {
            let items: Vec<Value> = board
                .items
                .iter()
                .map(|item| json!({ "id": item.id, "name": item.name }))
                .collect();
            json!({ "items_page": { "items": items } })
        }
        Selection::ItemsWithColumnValues => {
            let items: Vec<Value> = board
                .items
                .iter()
                .map(|item| {
                    json!({
                        "id": item.id,
                        "name": item.name,
                        "column_values": render_cells(board, item),
                    })
                })
                .collect();
            json!({ "items_page": { "items": items } })
        }
    }
}

fn render_cells(board: &FixtureBoard, item: &FixtureItem) -> Vec<Value> {
    item.cells
        .iter()
        .filter_map(|(column_id, value)| {
            let column = board.columns.iter().find(|column| &column.id == column_id)?;
            Some(json!({
                "column": { "title": column.title },
                "id": column.id,
                "type": column.kind,
                "value": value,
            }))
        })
        .collect()
}
