//! Menu loop driving the piece queue from line-based console input.
//!
//! The loop owns the queue, an input reader and an output writer, so a whole
//! session can be scripted in tests with a `Cursor` and a `Vec<u8>`.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{PieceQueue, PieceRng};
use crate::input::{Choice, MenuInput};
use crate::term::{
    clear_screen, print_line, prompt, render_banner, render_inserted, render_menu,
    render_outcome, render_queue,
};
use crate::types::MenuAction;

/// Whether the loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive play/insert/exit loop over a [`PieceQueue`].
pub struct MenuLoop<R, I, W> {
    queue: PieceQueue<R>,
    input: MenuInput<I>,
    out: W,
    clear_screen: bool,
}

impl<R: PieceRng, I: BufRead, W: Write> MenuLoop<R, I, W> {
    pub fn new(queue: PieceQueue<R>, input: I, out: W) -> Self {
        Self {
            queue,
            input: MenuInput::new(input),
            out,
            clear_screen: false,
        }
    }

    /// Clear the screen after each action (off by default).
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    pub fn queue(&self) -> &PieceQueue<R> {
        &self.queue
    }

    /// Consume the loop, returning the queue and the output writer.
    pub fn into_parts(self) -> (PieceQueue<R>, W) {
        (self.queue, self.out)
    }

    /// Pre-fill the queue, then serve the menu until exit or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.prefill()?;

        while self.step()? == Flow::Continue {}

        info!(
            pieces = self.queue.len(),
            next_id = self.queue.next_id(),
            "menu loop finished"
        );
        Ok(())
    }

    /// Fill the queue to capacity, reporting each inserted piece.
    pub fn prefill(&mut self) -> Result<()> {
        print_line(&mut self.out, "Initializing the system...")?;
        for piece in self.queue.fill() {
            print_line(&mut self.out, &render_inserted(piece))?;
        }
        debug!(len = self.queue.len(), "queue pre-filled");
        Ok(())
    }

    /// One iteration: show state and menu, read a choice, act on it.
    pub fn step(&mut self) -> Result<Flow> {
        print_line(&mut self.out, "")?;
        print_line(&mut self.out, &render_banner())?;
        print_line(&mut self.out, &render_queue(&self.queue))?;
        print_line(&mut self.out, "")?;
        print_line(&mut self.out, &render_menu())?;
        prompt(&mut self.out, "Choose an option: ")?;

        match self.input.read_choice()? {
            Choice::Eof => {
                print_line(&mut self.out, "")?;
                info!("input closed, leaving menu");
                return Ok(Flow::Exit);
            }
            Choice::Action(MenuAction::Exit) => {
                print_line(&mut self.out, "Ending the game. Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Choice::Action(action) => {
                let text = self.apply(action);
                print_line(&mut self.out, "")?;
                print_line(&mut self.out, &text)?;
            }
            Choice::Invalid => {
                print_line(&mut self.out, "")?;
                print_line(&mut self.out, "[!] Invalid option! Try again.")?;
            }
        }

        print_line(&mut self.out, "")?;
        prompt(&mut self.out, "Press Enter to continue...")?;
        if !self.input.wait_for_enter()? {
            print_line(&mut self.out, "")?;
            return Ok(Flow::Exit);
        }

        if self.clear_screen {
            clear_screen(&mut self.out)?;
        }
        Ok(Flow::Continue)
    }

    /// Run a queue action and render its outcome.
    pub fn apply(&mut self, action: MenuAction) -> String {
        let outcome = match action {
            MenuAction::Play => self.queue.dequeue(),
            MenuAction::Insert => self.queue.enqueue(),
            MenuAction::Exit => return String::new(),
        };
        render_outcome(action, outcome)
    }
}
