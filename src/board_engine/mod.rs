//! Core board engine: the board model, how boards are built, and how cells reveal.
//!
//! ## Module overview
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `models`  | Board, Category, Clue, RevealState, CellCoord, RevealOutcome |
//! | `sampler` | Uniform sampling without replacement (partial Fisher-Yates) |
//! | `builder` | Column selection and per-category clue sampling |
//! | `reveal`  | The per-cell Hidden → Question → Answer transition |
//! | `config`  | Board shape and service settings |
//! | `error`   | `BoardError` and the crate `Result` alias |

pub mod builder;
pub mod config;
pub mod error;
pub mod models;
pub mod reveal;
pub mod sampler;

pub use builder::{build_board, build_board_from_source, build_category, select_category_ids};
pub use config::BoardConfig;
pub use error::{BoardError, Result};
pub use models::{
    Board, Category, CategoryId, CellCoord, Clue, RevealOutcome, RevealState, HIDDEN_PLACEHOLDER,
};
pub use reveal::activate_cell;
