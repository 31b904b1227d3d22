//! The remote question service, seen from the board engine.
//!
//! The engine only needs two calls: list some category ids, and fetch one
//! category with all of its clues. [`JServiceSource`] is the HTTP
//! implementation; anything else implementing [`QuestionSource`] can stand in
//! for it.

pub mod jservice;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::board_engine::{error::Result, models::CategoryId};

pub use jservice::JServiceSource;

/// A question/answer pair as the service returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClue {
    pub question: String,
    pub answer: String,
}

/// A category with its full clue set, before any sampling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCategory {
    pub title: String,
    pub clues: Vec<RawClue>,
}

#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Return at least `min_count` available category ids.
    ///
    /// Fails with `SourceUnavailable` on network errors, non-2xx responses or
    /// malformed bodies.
    async fn list_category_ids(&self, min_count: usize) -> Result<Vec<CategoryId>>;

    /// Fetch one category. Unknown ids fail with `NotFound`.
    async fn fetch_category(&self, id: CategoryId) -> Result<RawCategory>;
}

