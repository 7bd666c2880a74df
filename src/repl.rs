//! Interactive REPL for exploring passing patterns.

use anyhow::Result;
use colored::*;
use prechac_core::Pattern;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RustylineResult};

/// Line-oriented REPL: each input is `<jugglers> <notation>`.
pub struct Repl {
    editor: DefaultEditor,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new() -> RustylineResult<Self> {
        Ok(Repl {
            editor: DefaultEditor::new()?,
        })
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!("{}", "Prechac passing-pattern translator".bright_cyan().bold());
        println!(
            "Enter a juggler count and a siteswap, e.g. {} or {}",
            "2 633".cyan(),
            "3 522".cyan()
        );
        println!("Type '{}' or press Ctrl-D to exit.\n", "quit".cyan());

        loop {
            match self.editor.readline("prechac> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if line == "quit" || line == "exit" {
                        break;
                    }
                    let _ = self.editor.add_history_entry(line);
                    match line.parse::<Pattern>() {
                        Ok(pattern) => print_pattern(&pattern),
                        Err(e) => println!("{} {}", "Error:".red(), e),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => {
                    println!("{} {}", "Readline error:".red(), e);
                    break;
                }
            }
        }

        Ok(())
    }
}

/// Print every rendering of a constructed pattern.
pub fn print_pattern(pattern: &Pattern) {
    println!(
        "{} {} ({} jugglers, {} props)",
        "pattern".bold(),
        pattern,
        pattern.num_jugglers(),
        pattern.num_props()
    );
    println!("{} {}", "local siteswap:".cyan(), pattern.local_siteswap());
    println!("{} {}", "prechac:".cyan(), pattern.prechac());
    println!("{}", "joepass:".cyan());
    print!("{}", pattern.joepass("\n"));
    println!("{}", "description:".cyan());
    print!("{}", pattern.describe("\n"));
}
