//! Console piece-queue runner (default binary).
//!
//! Pre-fills the queue, then serves the play/insert/exit menu on stdin/stdout
//! until the operator exits or input ends.

use std::io::{self, IsTerminal};

use anyhow::Result;
use tracing::info;

use tetris_queue::core::{PieceQueue, RandSource};
use tetris_queue::telemetry;
use tetris_queue::MenuLoop;

fn main() -> Result<()> {
    telemetry::init_tracing();

    let rng = RandSource::from_time();
    info!("starting piece queue");

    let stdout = io::stdout();
    // Escape sequences only make sense on a real terminal.
    let clear = stdout.is_terminal();

    let mut menu = MenuLoop::new(PieceQueue::new(rng), io::stdin().lock(), stdout.lock())
        .with_clear_screen(clear);
    menu.run()
}
