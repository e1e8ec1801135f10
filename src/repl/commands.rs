//! REPL Commands
//!
//! The command table and the handler behind each command.

use std::io::Write;

use rand::Rng;
use tracing::debug;

use super::{Pager, Pokedex};
use crate::error::{PokedexError, Result};
use crate::pokeapi::PokeApiClient;

// == Command Table ==
/// Every command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    Mapb,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// All commands, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::Mapb,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    /// Looks a command up by its (already lower-cased) name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::Mapb => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Displays the names of the next location areas",
            Command::Mapb => "Displays the names of the previous location areas",
            Command::Explore => "List Pokemon found in a given area",
            Command::Catch => "Attempt to catch a Pokemon",
            Command::Inspect => "List attributes for a caught Pokemon",
            Command::Pokedex => "List Pokemon names in your Pokedex",
        }
    }
}

/// What the read loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Catch Roll ==
/// Rolls a catch attempt.
///
/// The roll is uniform in `[0, base_experience)` and succeeds at or below
/// `threshold`, so stronger pokemon escape more often. Pokemon without a
/// positive base experience are always caught.
pub fn attempt_catch<G: Rng>(rng: &mut G, base_experience: Option<u32>, threshold: u32) -> bool {
    match base_experience {
        Some(experience) if experience > 0 => rng.gen_range(0..experience) <= threshold,
        _ => true,
    }
}

// == Session ==
/// State carried between commands: pagination, caught pokemon and the RNG.
pub struct Session<G> {
    client: PokeApiClient,
    pager: Pager,
    pokedex: Pokedex,
    rng: G,
    page_size: u32,
    catch_threshold: u32,
}

impl<G: Rng> Session<G> {
    pub fn new(client: PokeApiClient, rng: G, page_size: u32, catch_threshold: u32) -> Self {
        Self {
            client,
            pager: Pager::new(),
            pokedex: Pokedex::new(),
            rng,
            page_size,
            catch_threshold,
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    /// Runs one command, writing its output to `out`.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        args: &[String],
        out: &mut W,
    ) -> Result<Flow> {
        debug!(command = command.name(), ?args, "executing command");
        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::Mapb => self.mapb(out).await?,
            Command::Explore => self.explore(first_arg(args, "area")?, out).await?,
            Command::Catch => self.catch(first_arg(args, "Pokemon")?, out).await?,
            Command::Inspect => self.inspect(first_arg(args, "Pokemon")?, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
        }
        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in Command::ALL {
            writeln!(out, "{:<10} {}", format!("{}:", command.name()), command.description())?;
        }
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let client = &self.client;
        let page_size = self.page_size;
        let Some(url) = self.pager.next_url(|| client.location_areas_url(0, page_size)) else {
            writeln!(out, "You're on the last page!")?;
            return Ok(());
        };
        self.show_page(&url, out).await
    }

    async fn mapb<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.pager.previous_url() else {
            writeln!(out, "You're on the first page!")?;
            return Ok(());
        };
        self.show_page(&url, out).await
    }

    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        let page = self.client.location_areas(url).await?;
        self.pager.advance(&page);
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Exploring {area}...")?;
        let details = self.client.explore_area(area).await?;
        if details.pokemon_encounters.is_empty() {
            return Ok(());
        }
        writeln!(out, "Found Pokemon:")?;
        for name in details.pokemon_names() {
            writeln!(out, " - {name}")?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Throwing a Pokeball at {name}...")?;
        let pokemon = self.client.pokemon(name).await?;

        if attempt_catch(&mut self.rng, pokemon.base_experience, self.catch_threshold) {
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            self.pokedex.insert(pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let Some(pokemon) = self.pokedex.get(name) else {
            writeln!(out, "you have not caught that pokemon")?;
            return Ok(());
        };

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, " -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, " - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "you have no pokemon in your pokedex")?;
            return Ok(());
        }
        writeln!(out, "Pokedex:")?;
        for name in self.pokedex.names() {
            writeln!(out, " - {name}")?;
        }
        Ok(())
    }
}

fn first_arg<'a>(args: &'a [String], what: &'static str) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or(PokedexError::MissingArgument(what))
}
