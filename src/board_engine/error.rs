use thiserror::Error;

use crate::board_engine::models::CategoryId;

/// Every failure the board engine, the data source, or the controller can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Network failure, non-2xx status other than 404, or a malformed body.
    #[error("question source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("category {0} not found")]
    NotFound(CategoryId),
    #[error("category pool too small: requested {requested}, only {available} distinct ids")]
    InsufficientPool { requested: usize, available: usize },
    #[error("category {category} has {available} clues, {requested} requested")]
    InsufficientClues {
        category: CategoryId,
        requested: usize,
        available: usize,
    },
    /// The coordinate was never rendered; a caller bug.
    #[error("cell ({category_index}, {clue_index}) is outside the board")]
    IndexOutOfRange {
        category_index: usize,
        clue_index: usize,
    },
    #[error("malformed cell id {0:?}")]
    InvalidCellId(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for BoardError {
    fn from(err: reqwest::Error) -> Self {
        BoardError::SourceUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
