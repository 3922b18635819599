//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (queue logic, console rendering, menu input).
//!
//! # Queue Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Number of slots in the next-pieces queue |
//! | `PIECE_KIND_COUNT` | 7 | Number of distinct tetromino symbols |
//! | `FIRST_PIECE_ID` | 1 | Id assigned to the first generated piece |
//!
//! # Examples
//!
//! ```
//! use tetris_queue_types::{MenuAction, Piece, PieceKind, QUEUE_CAPACITY};
//!
//! // Random draws map onto symbols in draw order
//! let kind = PieceKind::from_index(2);
//! assert_eq!(kind, PieceKind::T);
//!
//! // Pieces render as `[symbol id]`
//! let piece = Piece::new(kind, 3);
//! assert_eq!(piece.to_string(), "[T 3]");
//!
//! // Menu choices
//! assert_eq!(MenuAction::from_code(1), Some(MenuAction::Play));
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Capacity of the next-pieces queue (5 slots)
pub const QUEUE_CAPACITY: usize = 5;

/// Number of distinct piece symbols (7 tetrominoes)
pub const PIECE_KIND_COUNT: u32 = 7;

/// Id of the first piece a fresh queue generates
pub const FIRST_PIECE_ID: u32 = 1;


/// The seven tetromino piece kinds
///
/// The declaration order (I, O, T, L, J, S, Z) is the order in which a random
/// draw in `[0, 7)` maps onto a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in draw order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Map a random draw to a piece kind
    ///
    /// Draws outside `[0, 7)` wrap around.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_queue_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), PieceKind::I);
    /// assert_eq!(PieceKind::from_index(6), PieceKind::Z);
    /// assert_eq!(PieceKind::from_index(7), PieceKind::I);
    /// ```
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % PIECE_KIND_COUNT) as usize]
    }

    /// Uppercase display symbol
    pub fn symbol(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One queued tetromino: a symbol plus the sequential id it was generated with.
///
/// Pieces are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    id: u32,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

/// Actions the operator can pick from the menu
///
/// Each action maps to one numeric menu code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Play the piece at the front of the queue (dequeue)
    Play,
    /// Generate a new piece at the back of the queue (enqueue)
    Insert,
    /// Leave the menu loop
    Exit,
}

impl MenuAction {
    /// Look up an action by its menu code
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(MenuAction::Play),
            2 => Some(MenuAction::Insert),
            0 => Some(MenuAction::Exit),
            _ => None,
        }
    }

    /// Menu code shown to the operator
    pub fn code(&self) -> i64 {
        match self {
            MenuAction::Play => 1,
            MenuAction::Insert => 2,
            MenuAction::Exit => 0,
        }
    }
}
