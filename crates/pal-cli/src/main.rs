use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process;

mod render;
mod repl;

/// pal - palindrome checker
///
/// Check text, print its normalized comparison form, or start an
/// interactive session with a rolling history of recent checks.
#[derive(Parser)]
#[command(name = "pal", version, about, long_about = None)]
struct Cli {
    /// Suppress non-essential output (exit codes and --json are unaffected)
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether text is a palindrome
    Check {
        /// Text to check
        text: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the normalized form used for comparison
    Normalize {
        /// Text to normalize
        text: String,
    },

    /// Explain what a palindrome is
    Explain,

    /// Start an interactive session with history
    Repl,

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check { text, json } => run_check(&text, json, cli.quiet),
        Commands::Normalize { text } => run_normalize(&text),
        Commands::Explain => {
            if !cli.quiet {
                println!("{}", render::explain());
            }
            0
        }
        Commands::Repl => repl::run(cli.quiet),
        Commands::Version => {
            println!(
                "pal {} (pal-core {})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_VERSION")
            );
            0
        }
    };

    process::exit(exit_code);
}

/// One-shot check. Exit 0 = palindrome, 1 = not a palindrome, 2 = error.
fn run_check(text: &str, json: bool, quiet: bool) -> i32 {
    match pal_core::check(text) {
        Ok(result) => {
            if json {
                println!("{}", render::check_json(text, &result));
            } else if !quiet {
                let verdict = render::verdict_line(text, &result);
                if result.is_palindrome {
                    println!("{}", verdict.green().bold());
                } else {
                    println!("{}", verdict.yellow());
                }
                println!("{}", render::cleaned_line(&result.cleaned));
            }
            if result.is_palindrome {
                0
            } else {
                1
            }
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            2
        }
    }
}

/// Print only the normalized comparison string. Exit 0, or 2 on error.
///
/// The normalized form is the command's whole output, so --quiet does not
/// suppress it. Input without alphanumeric content prints an empty line.
fn run_normalize(text: &str) -> i32 {
    match pal_core::check(text) {
        Ok(result) => {
            println!("{}", result.cleaned);
            0
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            2
        }
    }
}
