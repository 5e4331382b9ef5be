//! Session state and command dispatch
//!
//! One interactive session owns one history log. Interactions arrive as
//! commands from a closed set and run to completion, one at a time; there
//! is no other data flow. A failed check changes nothing.
//!
//! Rendering is not done here: front ends project results and state to
//! their own display form.

use crate::checker::{check, CheckResult};
use crate::error::Result;
use crate::history::{HistoryEntry, HistoryLog};

// ── Commands ──────────────────────────────────────────────

/// The closed set of interactions a session supports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check whether the given text is a palindrome and record the result
    Check(String),
    /// Empty the history log
    Clear,
}

/// What a dispatched command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A check ran; its result was recorded in the history
    Checked(CheckResult),
    /// The history log was emptied
    Cleared,
}

// ── Session ───────────────────────────────────────────────

/// One user's session: the explicit owner of the history log
#[derive(Debug, Clone)]
pub struct Session {
    history: HistoryLog,
}

impl Session {
    /// Create a fresh session with an empty history
    pub fn new() -> Self {
        Session {
            history: HistoryLog::new(),
        }
    }

    /// Run one command to completion.
    ///
    /// `Check` runs the checker and, on success, records the original
    /// input with its verdict. `Clear` empties the log and cannot fail.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` for `Check("")`; the history is left
    /// untouched in that case.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Check(text) => {
                let result = check(&text)?;
                self.history.record(HistoryEntry {
                    input: text,
                    status: result.verdict(),
                });
                Ok(Outcome::Checked(result))
            }
            Command::Clear => {
                self.history.clear();
                Ok(Outcome::Cleared)
            }
        }
    }

    /// Read-only view of the session's history
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
