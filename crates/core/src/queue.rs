//! Queue module - the "next pieces" queue
//!
//! A [`PieceQueue`] owns a fixed [`RingBuffer`] of [`Piece`]s, the id counter
//! and an injected [`PieceRng`]. Mutations return the affected piece (or a
//! [`QueueError`]) and never print; rendering lives in the term crate.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::error::QueueError;
use crate::ring::{Iter, RingBuffer};
use crate::rng::PieceRng;
use crate::types::{Piece, PieceKind, FIRST_PIECE_ID, PIECE_KIND_COUNT, QUEUE_CAPACITY};

/// Fixed-capacity FIFO of upcoming pieces.
///
/// # Examples
///
/// ```
/// use tetris_queue_core::{PieceQueue, QueueError, RandSource};
///
/// let mut queue = PieceQueue::new(RandSource::seeded(1));
/// let first = queue.enqueue().unwrap();
/// assert_eq!(first.id(), 1);
///
/// assert_eq!(queue.dequeue(), Ok(first));
/// assert_eq!(queue.dequeue(), Err(QueueError::Empty));
/// ```
#[derive(Debug, Clone)]
pub struct PieceQueue<R> {
    ring: RingBuffer<Piece, QUEUE_CAPACITY>,
    next_id: u32,
    rng: R,
}

impl<R: PieceRng> PieceQueue<R> {
    /// Create an empty queue whose first piece will get id 1
    pub fn new(rng: R) -> Self {
        Self {
            ring: RingBuffer::new(),
            next_id: FIRST_PIECE_ID,
            rng,
        }
    }

    /// Build a piece from one random draw and the next sequential id.
    ///
    /// This consumes an id even if the piece is never queued; use
    /// [`enqueue`](Self::enqueue) to generate and store in one step.
    pub fn generate_piece(&mut self) -> Piece {
        let draw = self.rng.next_range(PIECE_KIND_COUNT);
        let piece = Piece::new(PieceKind::from_index(draw), self.next_id);
        self.next_id += 1;
        piece
    }

    /// Generate a piece and append it at the back.
    ///
    /// A full queue is left untouched: no draw is consumed and the id
    /// counter does not move.
    pub fn enqueue(&mut self) -> Result<Piece, QueueError> {
        if self.is_full() {
            debug!(capacity = self.capacity(), "enqueue rejected: queue full");
            return Err(QueueError::Full {
                capacity: self.capacity(),
            });
        }

        let capacity = self.capacity();
        let piece = self.generate_piece();
        self.ring
            .push(piece)
            .map_err(|_| QueueError::Full { capacity })?;
        debug!(piece = %piece, len = self.len(), "piece enqueued");
        Ok(piece)
    }

    /// Remove and return the piece at the front.
    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        match self.ring.pop() {
            Some(piece) => {
                debug!(piece = %piece, len = self.len(), "piece dequeued");
                Ok(piece)
            }
            None => {
                debug!("dequeue rejected: queue empty");
                Err(QueueError::Empty)
            }
        }
    }

    /// Enqueue until full, returning what was inserted.
    pub fn fill(&mut self) -> ArrayVec<Piece, QUEUE_CAPACITY> {
        let mut inserted = ArrayVec::new();
        while let Ok(piece) = self.enqueue() {
            inserted.push(piece);
        }
        inserted
    }
}

impl<R> PieceQueue<R> {
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Number of queued pieces
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Id the next generated piece will receive
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Piece that the next [`dequeue`](Self::dequeue) would return
    pub fn peek(&self) -> Option<Piece> {
        self.ring.peek().copied()
    }

    /// Queued pieces, oldest first
    pub fn pieces(&self) -> Iter<'_, Piece, QUEUE_CAPACITY> {
        self.ring.iter()
    }

    /// Stack-only copy of the queued pieces, oldest first.
    pub fn snapshot(&self) -> ArrayVec<Piece, QUEUE_CAPACITY> {
        self.ring.peek_all()
    }
}
