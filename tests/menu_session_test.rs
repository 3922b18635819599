//! Scripted menu sessions through the facade

use std::io::Cursor;

use tetris_queue::core::{PieceQueue, PieceRng};
use tetris_queue::{Flow, MenuLoop};

/// Always draws the O piece.
struct AlwaysO;

impl PieceRng for AlwaysO {
    fn next_range(&mut self, _max: u32) -> u32 {
        1
    }
}

fn run(script: &str) -> (PieceQueue<AlwaysO>, String) {
    let mut menu = MenuLoop::new(PieceQueue::new(AlwaysO), Cursor::new(script), Vec::new());
    menu.run().expect("session runs");
    let (queue, out) = menu.into_parts();
    (queue, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_startup_fills_queue() {
    let (queue, out) = run("0\n");
    assert!(queue.is_full());
    for id in 1..=5 {
        assert!(out.contains(&format!(">>> Piece inserted: [O {id}]")));
    }
    assert!(out.contains("Piece queue: [O 1] [O 2] [O 3] [O 4] [O 5]\n(Capacity: 5/5)"));
}

#[test]
fn test_play_then_insert() {
    let (queue, out) = run("1\n\n2\n\n0\n");
    assert!(out.contains(">>> Piece played: [O 1]"));
    assert!(out.contains("Piece queue: [O 2] [O 3] [O 4] [O 5]\n(Capacity: 4/5)"));
    assert!(out.contains(">>> Piece inserted: [O 6]"));
    assert!(out.contains("Piece queue: [O 2] [O 3] [O 4] [O 5] [O 6]\n(Capacity: 5/5)"));
    assert_eq!(queue.next_id(), 7);
}

#[test]
fn test_play_until_empty_reports_underflow() {
    let (queue, out) = run("1\n\n1\n\n1\n\n1\n\n1\n\n1\n\n0\n");
    assert!(queue.is_empty());
    assert!(out.contains("Piece queue: [ Empty ]\n(Capacity: 0/5)"));
    assert_eq!(out.matches("[!] The queue is empty! No pieces to play.").count(), 1);
}

#[test]
fn test_invalid_choice_reprompts() {
    let (queue, out) = run("banana\n\n0\n");
    assert!(out.contains("[!] Invalid option! Try again."));
    assert_eq!(out.matches("Choose an option: ").count(), 2);
    assert_eq!(queue.next_id(), 6);
}

#[test]
fn test_step_reports_flow() {
    let mut menu = MenuLoop::new(PieceQueue::new(AlwaysO), Cursor::new("2\n\n0\n"), Vec::new());
    menu.prefill().unwrap();
    assert_eq!(menu.step().unwrap(), Flow::Continue);
    assert_eq!(menu.step().unwrap(), Flow::Exit);
    assert_eq!(menu.queue().len(), 5);
}
