//! RPS Plus terminal referee
//!
//! Plays one best-of-three game against a random bot on stdin/stdout.
//!
//! Environment:
//! - `RPS_SEED` - seed the bot for a reproducible game
//! - `RUST_LOG` - diagnostics filter (default `warn`), written to stderr

use rps_plus_core::{opponent::RandomBot, session::Referee};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Settings read from the environment at startup
struct Config {
    seed: Option<u64>,
}

impl Config {
    fn from_env() -> Self {
        let seed = match std::env::var("RPS_SEED") {
            Ok(raw) => match raw.trim().parse() {
                Ok(seed) => Some(seed),
                Err(e) => {
                    warn!("Ignoring RPS_SEED={:?}: {}", raw, e);
                    None
                }
            },
            Err(_) => None,
        };

        Self { seed }
    }

    fn bot(&self) -> RandomBot {
        match self.seed {
            Some(seed) => {
                info!("Bot seeded with {}", seed);
                RandomBot::seeded(seed)
            }
            None => RandomBot::from_entropy(),
        }
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let mut referee = Referee::new(config.bot());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = referee.run(stdin.lock(), stdout.lock()) {
        error!("Game aborted: {}", e);
    }
}
