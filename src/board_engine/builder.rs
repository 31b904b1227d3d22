//! Board construction: pick the columns, then fetch and sample each one.
//!
//! A category with fewer clues than requested is an error
//! ([`BoardError::InsufficientClues`]); the engine never builds ragged boards.

use rand::Rng;
use tracing::{debug, info};

use crate::board_engine::{
    config::BoardConfig,
    error::{BoardError, Result},
    models::{Board, Category, CategoryId, Clue},
    sampler::{distinct, sample_without_replacement},
};
use crate::source::QuestionSource;

/// Choose `count` distinct ids uniformly at random from `pool`.
///
/// Repeated ids in `pool` count once. The returned order is arbitrary and
/// becomes the column order of the board.
pub fn select_category_ids<R: Rng + ?Sized>(
    pool: &[CategoryId],
    count: usize,
    rng: &mut R,
) -> Result<Vec<CategoryId>> {
    let unique = distinct(pool);
    sample_without_replacement(&unique, count, rng).ok_or(BoardError::InsufficientPool {
        requested: count,
        available: unique.len(),
    })
}

/// Fetch category `id` and keep `clue_sample_size` of its clues, all hidden.
pub async fn build_category<S, R>(
    source: &S,
    id: CategoryId,
    clue_sample_size: usize,
    rng: &mut R,
) -> Result<Category>
where
    S: QuestionSource + ?Sized,
    R: Rng + ?Sized,
{
    let raw = source.fetch_category(id).await?;
    let available = raw.clues.len();
    let sampled = sample_without_replacement(&raw.clues, clue_sample_size, rng).ok_or(
        BoardError::InsufficientClues {
            category: id,
            requested: clue_sample_size,
            available,
        },
    )?;
    debug!(id, title = %raw.title, available, kept = sampled.len(), "built category");

    let clues = sampled
        .into_iter()
        .map(|c| Clue::new(c.question, c.answer))
        .collect();
    Ok(Category::new(raw.title, clues))
}

/// Select `column_count` ids from `pool` and build each category in turn.
///
/// Categories are fetched one at a time in selection order, and the first
/// failure aborts the build; no partial board is ever returned.
pub async fn build_board<S, R>(
    source: &S,
    pool: &[CategoryId],
    column_count: usize,
    clue_sample_size: usize,
    rng: &mut R,
) -> Result<Board>
where
    S: QuestionSource + ?Sized,
    R: Rng + ?Sized,
{
    let ids = select_category_ids(pool, column_count, rng)?;
    info!(?ids, clue_sample_size, "building board");

    let mut categories = Vec::with_capacity(ids.len());
    for id in ids {
        categories.push(build_category(source, id, clue_sample_size, rng).await?);
    }
    Ok(Board::new(categories))
}

/// List the category pool from `source`, then [`build_board`] with the
/// configured shape.
pub async fn build_board_from_source<S, R>(
    source: &S,
    config: &BoardConfig,
    rng: &mut R,
) -> Result<Board>
where
    S: QuestionSource + ?Sized,
    R: Rng + ?Sized,
{
    let min_count = config.category_pool_size.max(config.columns);
    let pool = source.list_category_ids(min_count).await?;
    build_board(
        source,
        &pool,
        config.columns,
        config.clues_per_category,
        rng,
    )
    .await
}
