//! Tetris next-pieces queue (workspace facade crate).
//!
//! This package exposes `tetris_queue::{core,input,term,types}` from the
//! dedicated crates under `crates/`, plus the [`menu::MenuLoop`] that ties them
//! together and the logging setup used by the binary.

pub mod menu;
pub mod telemetry;

pub use tetris_queue_core as core;
pub use tetris_queue_input as input;
pub use tetris_queue_term as term;
pub use tetris_queue_types as types;

pub use menu::{Flow, MenuLoop};
