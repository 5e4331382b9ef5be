//! Interactive session - a line-driven front end over `Session::dispatch`
//!
//! One line per interaction: plain text is dispatched as a check, words
//! starting with ':' are session commands. When stdin is a terminal the
//! loop runs under rustyline for line editing and recall; otherwise it
//! falls back to a plain buffered reader so sessions can be piped in
//! scripts and tests. The history log lives and dies with the process.

use std::io::{BufRead, IsTerminal};

use colored::Colorize;
use pal_core::{Command, Outcome, Session};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::render;

const PROMPT: &str = "pal> ";

enum Flow {
    Continue,
    Quit,
}

/// Run the interactive session to completion. Returns the process exit
/// code: 0 on a normal end (quit or end of input), 2 on an input failure.
pub fn run(quiet: bool) -> i32 {
    let mut session = Session::new();

    if std::io::stdin().is_terminal() {
        run_editor(&mut session, quiet)
    } else {
        run_piped(&mut session, quiet)
    }
}

/// Terminal path: rustyline editor with prompt, recall, and Ctrl-C/Ctrl-D
fn run_editor(session: &mut Session, quiet: bool) -> i32 {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return 2;
        }
    };

    if !quiet {
        println!("Palindrome Checker");
        println!("Type text to check it; :help lists session commands.");
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                if let Flow::Quit = handle_line(session, &line, quiet) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{} {}", "error:".red().bold(), err);
                return 2;
            }
        }
    }
    0
}

/// Non-terminal path: plain line loop, no prompt, no banner
fn run_piped(session: &mut Session, quiet: bool) -> i32 {
    for line in std::io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                if let Flow::Quit = handle_line(session, &line, quiet) {
                    break;
                }
            }
            Err(err) => {
                eprintln!("{} {}", "error:".red().bold(), err);
                return 2;
            }
        }
    }
    0
}

/// Route one input line: session commands by keyword, everything else is
/// checked as text. The raw line (not the trimmed form) is what gets
/// checked, so an empty line surfaces the empty-input error and a
/// whitespace line is checked like any other text.
fn handle_line(session: &mut Session, line: &str, quiet: bool) -> Flow {
    match line.trim() {
        ":quit" | ":q" => return Flow::Quit,
        ":help" => {
            if !quiet {
                println!("{}", render::help());
            }
        }
        ":history" => {
            if !quiet {
                println!("{}", render::history_panel(session.history()));
            }
        }
        ":clear" => run_command(session, Command::Clear, line, quiet),
        _ => run_command(session, Command::Check(line.to_string()), line, quiet),
    }
    Flow::Continue
}

/// The single dispatch seam: every state change goes through here
fn run_command(session: &mut Session, command: Command, input: &str, quiet: bool) {
    match session.dispatch(command) {
        Ok(outcome) => print_outcome(input, &outcome, quiet),
        Err(err) => eprintln!("{} {}", "error:".red().bold(), err),
    }
}

fn print_outcome(input: &str, outcome: &Outcome, quiet: bool) {
    if quiet {
        return;
    }
    match outcome {
        Outcome::Checked(result) => {
            let verdict = render::verdict_line(input, result);
            if result.is_palindrome {
                println!("{}", verdict.green().bold());
            } else {
                println!("{}", verdict.yellow());
            }
            println!("{}", render::cleaned_line(&result.cleaned));
        }
        Outcome::Cleared => println!("History cleared."),
    }
}
