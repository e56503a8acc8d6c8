//! # Himmy Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The subcommands of the `himmy` binary and the session setup they share.
//!
//! ## Architecture
//!
//! - `chat`: the interactive read-reply loop (default when no subcommand is given)
//! - `say`: one turn on a fresh session, printed to stdout
//! - `classify`: prints the intent label for a line of text
//!
//! Every subcommand starts from `prepare_session`, which loads configuration,
//! builds the template pools once, and seeds the random source.
//!
use himmy::bot::pools::TemplatePools;
use himmy::bot::random::SeededRandom;
use himmy::bot::responder::Responder;
use himmy::core::config::{load_config, Config};
use himmy::core::error::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// Implements `himmy chat` (the default).
pub mod chat;
/// Implements `himmy classify <text>...`.
pub mod classify;
/// Implements `himmy say <text>...`.
pub mod say;

/// Global options that apply to every subcommand.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Fixed random seed; wins over `session.seed` from configuration.
    pub seed: Option<u64>,
    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Everything a subcommand needs to run turns.
pub struct Session {
    pub config: Config,
    pub responder: Responder,
    pub rng: SeededRandom,
}

/// Loads configuration and builds the responder and random source.
pub fn prepare_session(options: &SessionOptions) -> Result<Session> {
    let config = load_config(options.config.as_deref())?;
    let pools = TemplatePools::with_extras(&config.pools)?;
    let seed = options.seed.or(config.session.seed);
    match seed {
        Some(seed) => info!("Using fixed random seed {}", seed),
        None => debug!("Seeding random source from OS entropy"),
    }
    Ok(Session {
        responder: Responder::new(pools),
        rng: SeededRandom::new(seed),
        config,
    })
}
