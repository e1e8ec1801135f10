//! REPL Module
//!
//! Interactive read loop over the PokeAPI client.
//!
//! # Commands
//! - `help`, `exit`
//! - `map`, `mapb` - Page forwards/backwards through location areas
//! - `explore <area>` - List pokemon found in an area
//! - `catch <pokemon>`, `inspect <pokemon>`, `pokedex`

mod commands;
mod pager;
mod pokedex;

pub use commands::{attempt_catch, Command, Flow, Session};
pub use pager::Pager;
pub use pokedex::Pokedex;

use std::io::{BufRead, Write};

use rand::Rng;
use tracing::warn;

use crate::error::Result;

/// Prompt printed before every line of input
pub const PROMPT: &str = "Pokedex > ";

/// Lower-cases a line and splits it on whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Runs the read loop until `exit` or end of input.
///
/// Unknown commands and failing commands are reported on `output` and the
/// loop carries on; only I/O errors on `input`/`output` end it early.
pub async fn run<I, O, G>(session: &mut Session<G>, mut input: I, output: &mut O) -> Result<()>
where
    I: BufRead,
    O: Write,
    G: Rng,
{
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };
        let Some(command) = Command::parse(name) else {
            writeln!(output, "Unknown command")?;
            continue;
        };

        match session.execute(command, args, output).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(err) => {
                warn!(command = command.name(), error = %err, "command failed");
                writeln!(output, "Error: {err}")?;
            }
        }
    }
}
