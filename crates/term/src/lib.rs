//! Console presentation for the piece queue.
//!
//! Rendering is split in two:
//! - [`queue_view`] turns queue state and operation outcomes into strings (pure)
//! - [`screen`] writes those strings and terminal commands to an output
//!
//! Goals:
//! - Keep `core` free of printing so it can be tested without capturing output
//! - Keep the exact console text in one place

pub mod queue_view;
pub mod screen;

pub use tetris_queue_core as core;
pub use tetris_queue_types as types;

pub use queue_view::{
    render_banner, render_error, render_inserted, render_menu, render_outcome, render_played,
    render_queue, EMPTY_MARKER, MENU_BANNER,
};
pub use screen::{clear_screen, print_line, prompt};
