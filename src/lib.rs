//! # trivia_board
//!
//! The board model and game flow behind a Jeopardy-style trivia board.
//!
//! A board is a grid: each column is a category picked at random from a remote
//! question service, each cell is one clue sampled at random from that
//! category. Activating a cell first shows its question, then its answer, and
//! after that does nothing.
//!
//! ## How it works
//!
//! 1. Load a [`BoardConfig`] (defaults, optional TOML file, `TRIVIA_*` env).
//! 2. Wrap a [`QuestionSource`] (usually [`JServiceSource`]) and a
//!    [`RenderSink`] in a [`GameController`].
//! 3. Feed it [`GameEvent`]s: `Restart` builds and renders a fresh board,
//!    `Activate(coord)` reveals one cell and pushes its new text to the sink.
//!
//! The engine pieces are usable on their own as well: [`select_category_ids`],
//! [`build_category`], [`build_board`] and [`activate_cell`].
//!
//! ## Quick start
//!
//! ```rust
//! use trivia_board::{activate_cell, Board, Category, Clue, RevealOutcome};
//!
//! let mut board = Board::new(vec![Category::new("Math", vec![Clue::new("2+2", "4")])]);
//!
//! assert_eq!(activate_cell(&mut board, 0, 0).unwrap().text(), Some("2+2"));
//! assert_eq!(activate_cell(&mut board, 0, 0).unwrap().text(), Some("4"));
//! assert_eq!(activate_cell(&mut board, 0, 0).unwrap(), RevealOutcome::NoChange);
//! ```

pub mod board_engine;
pub mod controller;
pub mod render;
pub mod source;

pub use board_engine::{
    activate_cell, build_board, build_board_from_source, build_category, select_category_ids,
    Board, BoardConfig, BoardError, Category, CategoryId, CellCoord, Clue, Result,
    RevealOutcome, RevealState, HIDDEN_PLACEHOLDER,
};
pub use controller::{
    CompletedBuild, EventOutcome, GameController, GameEvent, InstallOutcome, PendingBuild,
    RenderSink,
};
pub use render::to_table_json;
pub use source::{JServiceSource, QuestionSource, RawCategory, RawClue};

#[cfg(test)]
mod test_support;
