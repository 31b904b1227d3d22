//! Game controller: owns the current board and turns restart and activation
//! events into board builds, reveals and render calls.
//!
//! Every build is stamped with a generation number when it starts. A finished
//! build is installed only if no newer build has started since, so a slow
//! stale build can never overwrite the board of a later restart.

use std::sync::Arc;

use rand::{rngs::StdRng, RngCore, SeedableRng};
use tracing::{info, warn};

use crate::board_engine::{
    builder::build_board_from_source,
    config::BoardConfig,
    error::{BoardError, Result},
    models::{Board, CellCoord, RevealOutcome},
    reveal::activate_cell,
};
use crate::source::QuestionSource;

/// Whatever displays the board.
pub trait RenderSink {
    /// Rebuild the whole grid: a header of category titles and one
    /// placeholder cell per `(category, clue)` pair.
    fn render_board(&mut self, board: &Board);

    /// Replace the displayed content of one cell.
    fn update_cell(&mut self, coord: CellCoord, text: &str);
}

/// Input from the user: start a new game, or click one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Restart,
    Activate(CellCoord),
}

/// What happened to a finished build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The board replaced the previous one and was rendered.
    Installed,
    /// A newer build started while this one was running; its result was dropped.
    Stale,
}

/// Result of handling one [`GameEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Build(InstallOutcome),
    Reveal(RevealOutcome),
}

/// A build that has been started but not run. Owns everything it needs, so it
/// can run while the controller keeps handling events.
pub struct PendingBuild<S> {
    generation: u64,
    source: Arc<S>,
    config: BoardConfig,
    rng: StdRng,
}

impl<S: QuestionSource> PendingBuild<S> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Build the board. An invalid config fails here, before any fetch, so
    /// the error reaches [`GameController::finish_build`] like any other.
    pub async fn run(mut self) -> CompletedBuild {
        let result = match self.config.validate() {
            Ok(()) => build_board_from_source(&*self.source, &self.config, &mut self.rng).await,
            Err(err) => Err(err),
        };
        CompletedBuild {
            generation: self.generation,
            result,
        }
    }
}

/// A build that has run, stamped with the generation it started under.
#[derive(Debug)]
pub struct CompletedBuild {
    generation: u64,
    result: Result<Board>,
}

impl CompletedBuild {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn result(&self) -> &Result<Board> {
        &self.result
    }
}

/// Owns the single current board and routes events to the engine and the sink.
pub struct GameController<S, K> {
    source: Arc<S>,
    sink: K,
    config: BoardConfig,
    rng: StdRng,
    generation: u64,
    board: Option<Board>,
}

impl<S: QuestionSource, K: RenderSink> GameController<S, K> {
    pub fn new(source: S, sink: K, config: BoardConfig) -> Self {
        Self::with_shared_source(Arc::new(source), sink, config)
    }

    pub fn with_shared_source(source: Arc<S>, sink: K, config: BoardConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            source,
            sink,
            config,
            rng,
            generation: 0,
            board: None,
        }
    }

    /// The installed board, if any build has succeeded yet.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Takes effect from the next build; the installed board is left alone.
    pub fn set_config(&mut self, config: BoardConfig) {
        self.config = config;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new build, making every earlier build stale.
    pub fn begin_build(&mut self) -> PendingBuild<S> {
        self.generation += 1;
        PendingBuild {
            generation: self.generation,
            source: Arc::clone(&self.source),
            config: self.config.clone(),
            rng: StdRng::seed_from_u64(self.rng.next_u64()),
        }
    }

    /// Install a finished build if it is still current, then render it.
    ///
    /// Stale results are dropped whether they succeeded or not. A failed
    /// current build returns its error and keeps the previous board.
    pub fn finish_build(&mut self, completed: CompletedBuild) -> Result<InstallOutcome> {
        if completed.generation != self.generation {
            info!(
                stale = completed.generation,
                current = self.generation,
                "discarding stale board build"
            );
            return Ok(InstallOutcome::Stale);
        }

        let board = completed.result.map_err(|err| {
            warn!(generation = completed.generation, %err, "board build failed");
            err
        })?;
        info!(
            generation = completed.generation,
            columns = board.column_count(),
            rows = board.row_count(),
            "installing new board"
        );
        self.sink.render_board(&board);
        self.board = Some(board);
        Ok(InstallOutcome::Installed)
    }

    /// Build a fresh board and install it.
    pub async fn restart(&mut self) -> Result<InstallOutcome> {
        let pending = self.begin_build();
        let completed = pending.run().await;
        self.finish_build(completed)
    }

    /// Reveal one cell of the installed board and push the new text to the sink.
    pub fn activate(&mut self, coord: CellCoord) -> Result<RevealOutcome> {
        let board = self.board.as_mut().ok_or(BoardError::IndexOutOfRange {
            category_index: coord.category_index,
            clue_index: coord.clue_index,
        })?;
        let outcome = activate_cell(board, coord.category_index, coord.clue_index)?;
        if let Some(text) = outcome.text() {
            self.sink.update_cell(coord, text);
        }
        Ok(outcome)
    }

    /// Handle one event to completion.
    ///
    /// `Restart` awaits the whole build while holding `&mut self`, so no other
    /// event is handled until it finishes. Callers that need a second restart
    /// to supersede one still in flight should use [`begin_build`],
    /// [`PendingBuild::run`] and [`finish_build`] instead.
    ///
    /// [`begin_build`]: GameController::begin_build
    /// [`finish_build`]: GameController::finish_build
    pub async fn handle_event(&mut self, event: GameEvent) -> Result<EventOutcome> {
        match event {
            GameEvent::Restart => self.restart().await.map(EventOutcome::Build),
            GameEvent::Activate(coord) => self.activate(coord).map(EventOutcome::Reveal),
        }
    }
}
