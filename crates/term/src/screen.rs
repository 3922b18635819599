//! Screen: console side effects for the menu loop.
//!
//! Commands are queued into any `Write` and flushed once, so the same code
//! drives a real terminal or an in-memory buffer.

use std::io::Write;

use anyhow::Result;
use crossterm::{cursor, terminal, QueueableCommand};

/// Clear the whole screen and park the cursor at the top-left corner.
pub fn clear_screen<W: Write>(out: &mut W) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

/// Write `text` followed by a newline.
pub fn print_line<W: Write>(out: &mut W, text: &str) -> Result<()> {
    writeln!(out, "{text}")?;
    Ok(())
}

/// Write `text` without a newline and flush, for inline prompts.
pub fn prompt<W: Write>(out: &mut W, text: &str) -> Result<()> {
    write!(out, "{text}")?;
    out.flush()?;
    Ok(())
}
