//! Menu input module.
//!
//! This module is intentionally independent of any terminal library. It reads
//! whole lines from any `BufRead` and maps them into
//! [`crate::types::MenuAction`]s; malformed lines are reported back so the
//! caller can re-prompt.

pub mod map;
pub mod reader;

pub use tetris_queue_types as types;

pub use map::parse_choice;
pub use reader::{Choice, MenuInput};
