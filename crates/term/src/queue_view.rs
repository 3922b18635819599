//! QueueView: maps a `core::PieceQueue` and its outcomes into console text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write;

use crate::core::{PieceQueue, QueueError};
use crate::types::{MenuAction, Piece};

/// Shown in place of the piece list when nothing is queued.
pub const EMPTY_MARKER: &str = "[ Empty ]";

pub const MENU_BANNER: &str = "TETRIS STACK - BASIC LEVEL";

const RULE: &str = "========================================";

/// Render the queue, oldest first, followed by its capacity line.
///
/// ```
/// use tetris_queue_core::{PieceQueue, PieceRng};
/// use tetris_queue_term::render_queue;
///
/// struct AlwaysI;
/// impl PieceRng for AlwaysI {
///     fn next_range(&mut self, _max: u32) -> u32 { 0 }
/// }
///
/// let mut queue = PieceQueue::new(AlwaysI);
/// queue.enqueue().unwrap();
/// queue.enqueue().unwrap();
/// assert_eq!(render_queue(&queue), "Piece queue: [I 1] [I 2]\n(Capacity: 2/5)");
/// ```
pub fn render_queue<R>(queue: &PieceQueue<R>) -> String {
    let mut out = String::with_capacity(64);
    out.push_str("Piece queue: ");

    let mut count = 0usize;
    for piece in queue.pieces() {
        if count > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{piece}");
        count += 1;
    }
    if count == 0 {
        out.push_str(EMPTY_MARKER);
    }

    let _ = write!(out, "\n(Capacity: {}/{})", count, queue.capacity());
    out
}

pub fn render_inserted(piece: Piece) -> String {
    format!(">>> Piece inserted: {piece}")
}

pub fn render_played(piece: Piece) -> String {
    format!(">>> Piece played: {piece}")
}

pub fn render_error(err: QueueError) -> String {
    match err {
        QueueError::Full { .. } => "[!] The queue is full! Cannot add more pieces.".to_string(),
        QueueError::Empty => "[!] The queue is empty! No pieces to play.".to_string(),
    }
}

/// Render the result of a play/insert action.
///
/// `Exit` has no queue outcome and renders as an empty string.
pub fn render_outcome(action: MenuAction, outcome: Result<Piece, QueueError>) -> String {
    match (action, outcome) {
        (_, Err(err)) => render_error(err),
        (MenuAction::Play, Ok(piece)) => render_played(piece),
        (MenuAction::Insert, Ok(piece)) => render_inserted(piece),
        (MenuAction::Exit, Ok(_)) => String::new(),
    }
}

pub fn render_banner() -> String {
    format!("{RULE}\n      {MENU_BANNER}       \n{RULE}")
}

pub fn render_menu() -> String {
    format!(
        "--- Action Options ---\n{} - Play piece (dequeue)\n{} - Insert new piece (enqueue)\n{} - Exit",
        MenuAction::Play.code(),
        MenuAction::Insert.code(),
        MenuAction::Exit.code(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PieceRng;
    use crate::types::PieceKind;

    /// Cycles through the draw indices in order.
    struct Cycle(u32);

    impl PieceRng for Cycle {
        fn next_range(&mut self, max: u32) -> u32 {
            let v = self.0 % max;
            self.0 += 1;
            v
        }
    }

    #[test]
    fn test_render_empty_queue() {
        let queue = PieceQueue::new(Cycle(0));
        assert_eq!(
            render_queue(&queue),
            "Piece queue: [ Empty ]\n(Capacity: 0/5)"
        );
    }

    #[test]
    fn test_render_full_queue() {
        let mut queue = PieceQueue::new(Cycle(0));
        queue.fill();
        assert_eq!(
            render_queue(&queue),
            "Piece queue: [I 1] [O 2] [T 3] [L 4] [J 5]\n(Capacity: 5/5)"
        );
    }

    #[test]
    fn test_render_after_wraparound() {
        let mut queue = PieceQueue::new(Cycle(0));
        queue.fill();
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        queue.enqueue().unwrap();

        assert_eq!(
            render_queue(&queue),
            "Piece queue: [T 3] [L 4] [J 5] [S 6]\n(Capacity: 4/5)"
        );
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut queue = PieceQueue::new(Cycle(0));
        queue.fill();
        let first = render_queue(&queue);
        let second = render_queue(&queue);
        assert_eq!(first, second);
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.next_id(), 6);
    }

    #[test]
    fn test_render_outcomes() {
        let piece = Piece::new(PieceKind::S, 7);
        assert_eq!(
            render_outcome(MenuAction::Insert, Ok(piece)),
            ">>> Piece inserted: [S 7]"
        );
        assert_eq!(
            render_outcome(MenuAction::Play, Ok(piece)),
            ">>> Piece played: [S 7]"
        );
        assert_eq!(
            render_outcome(MenuAction::Insert, Err(QueueError::Full { capacity: 5 })),
            "[!] The queue is full! Cannot add more pieces."
        );
        assert_eq!(
            render_outcome(MenuAction::Play, Err(QueueError::Empty)),
            "[!] The queue is empty! No pieces to play."
        );
    }

    #[test]
    fn test_render_menu_lists_codes() {
        let menu = render_menu();
        assert!(menu.contains("1 - Play piece (dequeue)"));
        assert!(menu.contains("2 - Insert new piece (enqueue)"));
        assert!(menu.contains("0 - Exit"));
        assert!(render_banner().contains(MENU_BANNER));
    }
}
