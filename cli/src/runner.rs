//! The boards → items → columns → connected items walk.

use std::io::Write;

use anyhow::Result;
use monday_core::{MondayClient, Transport};

/// Optional overrides for the discovery steps.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub board_id: Option<String>,
    pub column_id: Option<String>,
}

/// Run the reference flow, printing each listing to `out`.
///
/// Stops quietly when the account has no boards. The connected column is
/// found once, not once per printed column.
pub fn run<T: Transport>(
    client: &MondayClient<T>,
    options: &RunOptions,
    out: &mut impl Write,
) -> Result<()> {
    let boards = client.get_boards()?;
    if boards.is_empty() {
        writeln!(out, "No boards found.")?;
        return Ok(());
    }
    for board in &boards {
        writeln!(out, "Board ID: {} | Board Name: {}", board.id, board.name)?;
    }

    let board_id = match &options.board_id {
        Some(id) => id.clone(),
        None => boards[0].id.clone(),
    };
    tracing::info!(%board_id, "inspecting board");

    let items = client.get_items_from_board(&board_id)?;
    if items.is_empty() {
        writeln!(out, "No items found in the board.")?;
    }
    for item in &items {
        writeln!(out, "Item ID: {} | Item Name: {}", item.id, item.name)?;
    }

    let columns = client.fetch_board_columns(&board_id)?;
    for column in &columns {
        writeln!(
            out,
            "Column ID: {} | Column Title: {} | Column Type: {}",
            column.id, column.title, column.column_type
        )?;
    }

    let connected_column = match &options.column_id {
        Some(id) => Some(id.clone()),
        None => {
            let found = columns.iter().find(|column| column.is_board_relation());
            if let Some(column) = found {
                writeln!(
                    out,
                    "Found Connected Boards Column ID: {} | Title: {}",
                    column.id, column.title
                )?;
            }
            found.map(|column| column.id.clone())
        }
    };

    let Some(column_id) = connected_column else {
        tracing::info!(%board_id, "board has no connected boards column");
        writeln!(out, "No Connected Boards column found.")?;
        return Ok(());
    };

    let connected = client.fetch_connected_boards_column_data(&board_id, &column_id)?;
    writeln!(out, "Connected Boards Column Data:")?;
    if connected.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for item in &connected {
        writeln!(out, "  Item ID: {} | Item Name: {}", item.id, item.name)?;
    }

    Ok(())
}
