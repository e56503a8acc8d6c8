//! # Say Command
//!
//! File: cli/src/commands/say.rs
//! Author: Christi Mahu
//!
//! `himmy say <text>...` runs a single turn on a fresh conversation and prints
//! the reply. Words are joined with single spaces, so quoting is optional.
//!
//! ```bash
//! himmy say hello there
//! himmy --seed 7 say '!roll 3d6'
//! ```
//!
use super::{prepare_session, SessionOptions};
use clap::Args;
use himmy::bot::state::ConversationState;
use himmy::core::error::Result;
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct SayArgs {
    /// What to say to Himmy.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

pub async fn handle_say(args: SayArgs, options: &SessionOptions) -> Result<()> {
    let mut session = prepare_session(options)?;
    let input = args.text.join(" ");
    debug!("One-shot input: {:?}", input);
    let mut state = ConversationState::new();
    let reply = session
        .responder
        .process_turn(&input, &mut state, &mut session.rng);
    println!("{}", reply);
    Ok(())
}
