//! Domain DTOs for the monday.com boards API.
//!
//! # Design
//! Field names follow the GraphQL schema so the types deserialize straight
//! out of `data`. `type` is a Rust keyword, so column and column-value kinds
//! are renamed on the way in. None of these types are shared with the
//! mock-server crate; integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// Column type of a "Connect boards" column.
pub const BOARD_RELATION: &str = "board_relation";

/// A board visible to the token's account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    pub id: String,
    pub name: String,
}

/// An item (row) on a board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
}

/// A column definition on a board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

impl Column {
    pub fn is_board_relation(&self) -> bool {
        self.column_type == BOARD_RELATION
    }
}

/// Title of the column a value belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnRef {
    pub title: String,
}

/// One cell of an item. `value` is opaque JSON text and `null` for empty
/// cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnValue {
    pub id: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub value_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<ColumnRef>,
}

/// An item fetched together with its cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemWithColumnValues {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub column_values: Vec<ColumnValue>,
}

impl ItemWithColumnValues {
    pub fn column_value(&self, column_id: &str) -> Option<&ColumnValue> {
        self.column_values.iter().find(|value| value.id == column_id)
    }

    /// True when the cell for `column_id` exists and is a board relation.
    pub fn is_connected_through(&self, column_id: &str) -> bool {
        self.column_value(column_id)
            .is_some_and(|value| value.value_type == BOARD_RELATION)
    }
}

/// An item that links to another board through a connected column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectedItem {
    pub id: String,
    pub name: String,
}

impl From<ItemWithColumnValues> for ConnectedItem {
    fn from(item: ItemWithColumnValues) -> Self {
        Self {
            id: item.id,
            name: item.name,
        }
    }
}

/// Keep the items whose `column_id` cell is a board relation, in order.
///
/// The relation payload in `value` is not decoded.
pub fn select_connected_items(
    items: Vec<ItemWithColumnValues>,
    column_id: &str,
) -> Vec<ConnectedItem> {
    items
        .into_iter()
        .filter(|item| item.is_connected_through(column_id))
        .map(ConnectedItem::from)
        .collect()
}
