//! Console presentation of the replay.
//!
//! [`narrator`] describes the last applied action as one line of text and
//! [`theme`] highlights that line by category. [`ConsoleListener`] prints
//! the turn banners around them.
pub mod narrator;
pub mod theme;

pub use narrator::describe;
pub use theme::{Category, Theme};

use runtime::{RunOutcome, TurnListener};

/// Prints turn progress to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleListener;

impl ConsoleListener {
    pub fn banner(outcome: &RunOutcome) -> &'static str {
        match outcome {
            RunOutcome::Exhausted { .. } => "No Actions Left",
            RunOutcome::GameOver { .. } => "\n<<< The turn sequence was interrupted >>>",
        }
    }
}

impl TurnListener for ConsoleListener {
    fn turn_started(&mut self, index: usize) {
        println!("Turn NO: {}", index);
    }

    fn finished(&mut self, outcome: &RunOutcome) {
        println!("{}", Self::banner(outcome));
    }
}
