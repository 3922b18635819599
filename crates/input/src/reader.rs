//! Line-oriented menu input over any `BufRead`.

use std::io::BufRead;

use anyhow::Result;
use tracing::debug;

use crate::map::parse_choice;
use crate::types::MenuAction;

/// What the operator typed at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Action(MenuAction),
    /// Line that is not a menu code.
    Invalid,
    /// Input stream closed.
    Eof,
}

pub struct MenuInput<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> MenuInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::with_capacity(16),
        }
    }

    /// Read one line and classify it.
    pub fn read_choice(&mut self) -> Result<Choice> {
        if !self.read_line()? {
            return Ok(Choice::Eof);
        }

        match parse_choice(&self.line) {
            Some(action) => Ok(Choice::Action(action)),
            None => {
                debug!(input = self.line.trim(), "rejected menu input");
                Ok(Choice::Invalid)
            }
        }
    }

    /// Block until the operator presses Enter.
    ///
    /// Returns `false` when the input stream is closed.
    pub fn wait_for_enter(&mut self) -> Result<bool> {
        self.read_line()
    }

    fn read_line(&mut self) -> Result<bool> {
        self.line.clear();
        let n = self.reader.read_line(&mut self.line)?;
        Ok(n > 0)
    }
}
