use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board_engine::error::BoardError;

/// Identifier the question service assigns to a category.
pub type CategoryId = u64;

/// Text shown in a cell whose clue has not been revealed yet.
pub const HIDDEN_PLACEHOLDER: &str = "?";

// ---------------------------------------------------------------------------
// Cell state
// ---------------------------------------------------------------------------

/// How far a single clue has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    /// The state one activation moves to, or `None` once the answer is showing.
    pub const fn next(self) -> Option<RevealState> {
        match self {
            RevealState::Hidden => Some(RevealState::Question),
            RevealState::Question => Some(RevealState::Answer),
            RevealState::Answer => None,
        }
    }
}

impl fmt::Display for RevealState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealState::Hidden => write!(f, "hidden"),
            RevealState::Question => write!(f, "question"),
            RevealState::Answer => write!(f, "answer"),
        }
    }
}

/// Result of activating one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell advanced to `state`; `text` replaces what the cell displays.
    Revealed { state: RevealState, text: String },
    /// The answer was already showing. Displayed content must stay as is.
    NoChange,
}

impl RevealOutcome {
    pub const fn has_update(&self) -> bool {
        match self {
            RevealOutcome::Revealed { .. } => true,
            RevealOutcome::NoChange => false,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            RevealOutcome::Revealed { text, .. } => Some(text.as_str()),
            RevealOutcome::NoChange => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Board contents
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    reveal_state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Clue {
            question: question.into(),
            answer: answer.into(),
            reveal_state: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal_state
    }

    /// What the cell for this clue currently shows.
    pub fn display_text(&self) -> &str {
        match self.reveal_state {
            RevealState::Hidden => HIDDEN_PLACEHOLDER,
            RevealState::Question => &self.question,
            RevealState::Answer => &self.answer,
        }
    }

    pub(crate) fn set_reveal_state(&mut self, state: RevealState) {
        self.reveal_state = state;
    }
}

/// One titled column of clues. The clue count is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Category {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub(crate) fn clue_mut(&mut self, index: usize) -> Option<&mut Clue> {
        self.clues.get_mut(index)
    }
}

/// The full grid for one game: categories are columns, clue indices are rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Self {
        Board { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn column_count(&self) -> usize {
        self.categories.len()
    }

    /// Row count of the grid. Boards built by the engine are rectangular, so
    /// this is the clue count of every column.
    pub fn row_count(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.clues.len())
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn clue(&self, coord: CellCoord) -> Option<&Clue> {
        self.categories
            .get(coord.category_index)?
            .clues
            .get(coord.clue_index)
    }

    pub(crate) fn clue_mut(&mut self, coord: CellCoord) -> Option<&mut Clue> {
        self.categories
            .get_mut(coord.category_index)?
            .clue_mut(coord.clue_index)
    }

    /// Every coordinate on the board, row by row.
    pub fn coords(&self) -> impl Iterator<Item = CellCoord> + '_ {
        (0..self.row_count()).flat_map(move |row| {
            self.categories
                .iter()
                .enumerate()
                .filter(move |(_, c)| row < c.clues.len())
                .map(move |(col, _)| CellCoord::new(col, row))
        })
    }
}

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// Zero-based `(category_index, clue_index)` address of one cell.
///
/// Renders as `"<category_index>-<clue_index>"`, the id a renderer puts on the
/// cell so activation events can be mapped back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub category_index: usize,
    pub clue_index: usize,
}

impl CellCoord {
    pub const fn new(category_index: usize, clue_index: usize) -> Self {
        CellCoord {
            category_index,
            clue_index,
        }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category_index, self.clue_index)
    }
}

impl FromStr for CellCoord {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidCellId(s.to_string());
        let (category, clue) = s.split_once('-').ok_or_else(invalid)?;
        let category_index = category.parse().map_err(|_| invalid())?;
        let clue_index = clue.parse().map_err(|_| invalid())?;
        Ok(CellCoord::new(category_index, clue_index))
    }
}
