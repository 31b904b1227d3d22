//! Play a few moves against a live question service.
//!
//! Run with: `cargo run --example play [config.toml]`
//!
//! Settings come from the optional TOML file and `TRIVIA_*` environment
//! variables (`TRIVIA_API_URL`, `TRIVIA_COLUMNS`, `TRIVIA_RNG_SEED`, ...).
//! Set `RUST_LOG=trivia_board=debug` to watch the fetches.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use trivia_board::{
    Board, BoardConfig, CellCoord, GameController, GameEvent, JServiceSource, RenderSink,
};

/// Prints the grid as a plain text table.
struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn render_board(&mut self, board: &Board) {
        let titles: Vec<&str> = board.categories().iter().map(|c| c.title()).collect();
        println!("| {} |", titles.join(" | "));
        for row in 0..board.row_count() {
            let cells: Vec<&str> = (0..board.column_count())
                .map(|col| {
                    board
                        .clue(CellCoord::new(col, row))
                        .map(|c| c.display_text())
                        .unwrap_or("")
                })
                .collect();
            println!("| {} |", cells.join(" | "));
        }
        println!();
    }

    fn update_cell(&mut self, coord: CellCoord, text: &str) {
        println!("  [{coord}] {text}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = BoardConfig::load(path.as_deref())?;
    let source = JServiceSource::from_config(&config)?;
    let mut game = GameController::new(source, ConsoleSink, config);

    game.handle_event(GameEvent::Restart).await?;

    // Reveal the top row: question, then answer.
    let columns = game.board().map(|b| b.column_count()).unwrap_or(0);
    for col in 0..columns {
        let at = CellCoord::new(col, 0);
        game.handle_event(GameEvent::Activate(at)).await?;
        game.handle_event(GameEvent::Activate(at)).await?;
    }
    Ok(())
}
