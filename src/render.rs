use serde_json::{json, Value};

use crate::board_engine::models::Board;

/// Snapshot of the board as a table for a markup renderer.
///
/// `head` holds one title per column. `body` holds one row per clue index,
/// each with one cell per category carrying the cell id (`"<col>-<row>"`),
/// the text currently displayed and the reveal state.
pub fn to_table_json(board: &Board) -> Value {
    let head: Vec<Value> = board
        .categories()
        .iter()
        .map(|c| Value::String(c.title().to_string()))
        .collect();

    let body: Vec<Value> = (0..board.row_count())
        .map(|row| {
            let cells = board
                .categories()
                .iter()
                .enumerate()
                .filter_map(|(col, category)| {
                    category.clues().get(row).map(|clue| {
                        json!({
                            "id": format!("{col}-{row}"),
                            "text": clue.display_text(),
                            "state": clue.reveal_state().to_string(),
                        })
                    })
                })
                .collect();
            Value::Array(cells)
        })
        .collect();

    json!({
        "columns": board.column_count(),
        "rows": board.row_count(),
        "head": head,
        "body": body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_engine::{activate_cell, Category, Clue};

    #[test]
    fn hidden_board_renders_placeholders() {
        let board = Board::new(vec![
            Category::new("Math", vec![Clue::new("2+2", "4"), Clue::new("1+1", "2")]),
            Category::new("Books", vec![Clue::new("Hamlet author", "Shakespeare"), Clue::new("Bell Jar author", "Plath")]),
        ]);
        let table = to_table_json(&board);
        assert_eq!(table["columns"], 2);
        assert_eq!(table["rows"], 2);
        assert_eq!(table["head"], json!(["Math", "Books"]));
        assert_eq!(table["body"][1][0], json!({ "id": "0-1", "text": "?", "state": "hidden" }));
        assert_eq!(table["body"][0][1]["id"], "1-0");
    }

    #[test]
    fn revealed_cells_show_current_text() {
        let mut board = Board::new(vec![Category::new("Math", vec![Clue::new("2+2", "4")])]);
        activate_cell(&mut board, 0, 0).unwrap();
        assert_eq!(to_table_json(&board)["body"][0][0]["text"], "2+2");
        activate_cell(&mut board, 0, 0).unwrap();
        let table = to_table_json(&board);
        assert_eq!(table["body"][0][0]["text"], "4");
        assert_eq!(table["body"][0][0]["state"], "answer");
    }

    #[test]
    fn empty_board_renders_empty_table() {
        let table = to_table_json(&Board::default());
        assert_eq!(table, json!({ "columns": 0, "rows": 0, "head": [], "body": [] }));
    }
}
