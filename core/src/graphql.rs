//! GraphQL wire envelope and the fixed query documents.
//!
//! # Design
//! Requests always carry the board id as a variable, never spliced into the
//! query text. Responses are read as `GraphQlResponse<Value>` first so an
//! `errors` array is reported even when `data` does not match the expected
//! shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const BOARDS_QUERY: &str = "query { boards { id name } }";

pub const BOARD_ITEMS_QUERY: &str =
    "query ($boardId: [ID!]) { boards (ids: $boardId) { items_page { items { id name } } } }";

pub const BOARD_COLUMNS_QUERY: &str =
    "query ($boardId: [ID!]) { boards (ids: $boardId) { columns { id title type } } }";

pub const BOARD_ITEMS_WITH_COLUMN_VALUES_QUERY: &str = "query ($boardId: [ID!]) { boards (ids: $boardId) { items_page { items { id name column_values { column { title } id type value } } } } }";

/// Request body: `{"query": ..., "variables": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

/// Response envelope. Either side may be populated.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    pub locations: Option<Vec<GraphQlLocation>>,
    pub extensions: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GraphQlLocation {
    pub line: u32,
    pub column: u32,
}

/// `data` of every board query: `{ "boards": [...] }`.
#[derive(Debug, Deserialize)]
pub(crate) struct BoardsData<B> {
    pub boards: Vec<B>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemsPageBoard<I> {
    pub items_page: ItemsPage<I>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemsPage<I> {
    pub items: Vec<I>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ColumnsBoard<C> {
    pub columns: Vec<C>,
}
