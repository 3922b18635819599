//! Recoverable queue errors.
//!
//! Neither error changes the queue; both are meant to be reported to the
//! operator and then ignored.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue is full ({capacity} pieces)")]
    Full { capacity: usize },

    #[error("queue is empty")]
    Empty,
}
