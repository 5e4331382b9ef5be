//! Display projections - results and session state to terminal text
//!
//! Pure string builders: no printing, no color, no state. Callers decide
//! styling and destination, which keeps every surface testable and shared
//! between the one-shot commands and the interactive session.

use pal_core::{CheckResult, HistoryLog, Verdict};

/// The fixed explanation panel
const EXPLAIN: &str = "\
What is a Palindrome?

A palindrome is a word, phrase, number, or other sequence of characters
that reads the same forwards and backwards.

Examples:
  Level
  Madam
  A man, a plan, a canal: Panama   (spaces and punctuation are ignored)

Comparison keeps only ASCII letters and digits and lowercases them.";

/// Session command summary shown by :help
const HELP: &str = "\
Commands:
  :history   show recent checks
  :clear     clear the history
  :help      show this help
  :quit      leave the session

Any other line is checked as text.";

/// One-line verdict for a check, quoting the original input
pub fn verdict_line(input: &str, result: &CheckResult) -> String {
    if result.is_palindrome {
        format!("'{}' is a Palindrome!", input)
    } else {
        format!("'{}' is NOT a Palindrome.", input)
    }
}

/// The normalized comparison string, quoted so emptiness is visible
pub fn cleaned_line(cleaned: &str) -> String {
    format!("cleaned: {:?}", cleaned)
}

/// JSON projection of a check result for --json output
pub fn check_json(input: &str, result: &CheckResult) -> String {
    serde_json::json!({
        "input": input,
        "is_palindrome": result.is_palindrome,
        "cleaned": result.cleaned,
    })
    .to_string()
}

/// The history panel: most recent first, one icon-prefixed line per entry
pub fn history_panel(log: &HistoryLog) -> String {
    if log.is_empty() {
        return "No checks recorded yet.".to_string();
    }

    let mut out = String::from("Recent Checks\n");
    for entry in log.entries() {
        out.push_str(&format!(
            "  {} '{}' ({})\n",
            status_icon(entry.status),
            entry.input,
            entry.status
        ));
    }
    out.pop();
    out
}

/// The fixed explanation panel
pub fn explain() -> &'static str {
    EXPLAIN
}

/// The session command summary plus the explanation panel
pub fn help() -> String {
    format!("{}\n\n{}", HELP, EXPLAIN)
}

fn status_icon(status: Verdict) -> &'static str {
    match status {
        Verdict::Palindrome => "✓",
        Verdict::NotPalindrome => "✗",
    }
}
