//! Core queue logic module - pure, deterministic, and testable
//!
//! This module contains the "next pieces" queue and everything it needs.
//! It has **zero dependencies** on the console, making it:
//!
//! - **Deterministic**: Inject a seeded or scripted random source and every piece is predictable
//! - **Testable**: Mutations return values instead of printing
//! - **Allocation-free**: Storage is a fixed array; snapshots are `ArrayVec`s
//!
//! # Module Structure
//!
//! - [`ring`]: Generic fixed-capacity circular buffer
//! - [`rng`]: The [`PieceRng`] capability and its `rand`-backed implementation
//! - [`queue`]: [`PieceQueue`], piece generation plus FIFO over the ring
//! - [`error`]: [`QueueError`] for full/empty rejections
//!
//! # Example
//!
//! ```
//! use tetris_queue_core::{PieceQueue, QueueError, RandSource};
//!
//! // Pre-fill to capacity
//! let mut queue = PieceQueue::new(RandSource::seeded(12345));
//! queue.fill();
//! assert!(queue.is_full());
//!
//! // A full queue rejects new pieces and keeps its id counter
//! assert!(matches!(queue.enqueue(), Err(QueueError::Full { .. })));
//! assert_eq!(queue.next_id(), 6);
//!
//! // Oldest piece comes out first
//! assert_eq!(queue.dequeue().unwrap().id(), 1);
//! ```

pub mod error;
pub mod queue;
pub mod ring;
pub mod rng;

pub use tetris_queue_types as types;

// Re-export commonly used types for convenience
pub use error::QueueError;
pub use queue::PieceQueue;
pub use ring::RingBuffer;
pub use rng::{PieceRng, RandSource};
