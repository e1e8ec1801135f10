//! Pokedex - A PokeAPI explorer
//!
//! Interactive command-line client for PokeAPI with a response cache.

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::repl::{self, Session};
use pokedex::{Config, ExpiringCache, PokeApiClient};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr, so the REPL stays readable)
/// 2. Load configuration from environment variables
/// 3. Create the response cache and start its sweep task
/// 4. Create the PokeAPI client around the cache
/// 5. Run the REPL on stdin/stdout until `exit` or end of input
/// 6. Stop the sweep task
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs do not interleave with the prompt;
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_ttl={}s, page_size={}, catch_threshold={}",
        config.base_url, config.cache_ttl, config.page_size, config.catch_threshold
    );

    let cache = ExpiringCache::new(config.cache_ttl()).context("creating response cache")?;
    let client =
        PokeApiClient::new(&config, cache.clone()).context("creating PokeAPI client")?;

    let mut session = Session::new(
        client,
        rand::thread_rng(),
        config.page_size,
        config.catch_threshold,
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let result = repl::run(&mut session, stdin.lock(), &mut stdout).await;

    cache.shutdown();
    info!("Pokedex closed, {} cached responses discarded", cache.len());

    result.context("REPL terminated on an I/O error")
}
