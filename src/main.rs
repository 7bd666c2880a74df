//! Command-line front end for the prechac pattern engine.
//!
//! With two arguments it builds a single pattern and prints every
//! rendering; with no arguments it starts the interactive REPL.

mod repl;

use anyhow::{bail, Context, Result};
use prechac_core::Pattern;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.len() {
        0 => repl::Repl::new()?.run(),
        2 => {
            let jugglers: usize = args[0]
                .parse()
                .context("the juggler count must be a positive integer")?;
            let pattern = Pattern::new(jugglers, &args[1])?;
            repl::print_pattern(&pattern);
            Ok(())
        }
        _ => bail!("usage: prechac [<jugglers> <notation>]"),
    }
}
