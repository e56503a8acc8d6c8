//! # Himmy Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `himmy` binary.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the chat, say, or classify handler
//!
//! ## Architecture
//!
//! The responder itself lives in the `himmy` library (`bot` and `core`). This
//! binary only adds the caller-level concerns: flags, logging, and the terminal
//! loop in `commands`. All errors are propagated to this level for consistent
//! handling; stdout carries conversation text only, logs go to stderr.
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting (same as `himmy chat`)
//! himmy
//!
//! # One-shot reply with a fixed seed
//! himmy --seed 7 say hello there
//!
//! # See which intent a line maps to, with debug logging
//! himmy -vv classify best photo spot in patapsco
//! ```
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::SessionOptions;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "himmy",
    about = "Himmy: a terminal chat persona with commands and a one-question quiz",
    long_about = "Chat with Himmy in the terminal. Free text gets a persona reply;\n\
                  !photo, !rec, !roll and !quiz (or 'himmy, <command>') run commands.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Fixed random seed for reproducible replies.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Configuration file to use instead of the user and project files.
    #[arg(long, global = true, env = "HIMMY_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive chat session (default).
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Reply to one line and exit.
    Say(commands::say::SayArgs),
    /// Print the intent label for a line of text.
    Classify(commands::classify::ClassifyArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let options = SessionOptions {
        seed: cli.seed,
        config: cli.config,
    };
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Chat(commands::chat::ChatArgs::default()));

    let command_result = match command {
        Commands::Chat(args) => commands::chat::handle_chat(args, &options).await,
        Commands::Say(args) => commands::say::handle_say(args, &options).await,
        Commands::Classify(args) => commands::classify::handle_classify(args, &options).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
