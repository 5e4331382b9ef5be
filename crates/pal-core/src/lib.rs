//! Pal Core - palindrome checking with bounded session history
//!
//! This is the single source of truth for pal semantics. The CLI (and any
//! other front end) is a thin presentation layer over this crate.
//!
//! # Architecture
//!
//! ```text
//! raw text → Checker → CheckResult (verdict + cleaned string)
//!                          ↓
//!            Session::dispatch(Command)
//!                          ↓
//!            History Log (≤ 10 entries, most recent first)
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: same input always produces identical output
//! - **Pure checking**: `check` reads and writes no state
//! - **Bounded**: the history log never exceeds its capacity
//! - **Ephemeral**: all state lives and dies with the session

pub mod checker;
pub mod error;
pub mod history;
pub mod session;

pub use checker::{check, normalize, CheckResult, Verdict};
pub use error::{Error, Result};
pub use history::{HistoryEntry, HistoryLog};
pub use session::{Command, Outcome, Session};
