//! # Himmy Command Dispatcher
//!
//! File: cli/src/bot/handlers/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Maps a parsed command name to its handler. The table is fixed at startup and
//! never changes during a session.
//!
//! ## Architecture
//!
//! Every handler has the same shape:
//!
//! ```text
//! fn(&TemplatePools, argument, &mut ConversationState, &mut dyn RandomSource) -> String
//! ```
//!
//! Handlers that don't need state or randomness simply ignore those parameters.
//! A handler always produces a reply; malformed arguments become messages.
//!
//! | Command              | Handler        | Touches state |
//! |----------------------|----------------|---------------|
//! | `photo`              | `photo::handle_photo` | no     |
//! | `rec`, `recommend`   | `rec::handle_rec`     | no     |
//! | `roll`               | `roll::handle_roll`   | no     |
//! | `quiz`               | `quiz::handle_quiz`   | yes    |
//!
//! ## Examples
//!
//! ```rust
//! use himmy::bot::command::Command;
//! use himmy::bot::handlers::dispatch;
//! use himmy::bot::pools::TemplatePools;
//! use himmy::bot::random::ScriptedRandom;
//! use himmy::bot::state::ConversationState;
//!
//! let pools = TemplatePools::builtin().unwrap();
//! let mut state = ConversationState::new();
//! let reply = dispatch(&pools, &Command::new("quiz", ""), &mut state, &mut ScriptedRandom::new());
//! assert_eq!(reply, "Quiz time: In which year did WWII end?");
//! assert_eq!(state.expected_answer(), Some("1945"));
//! ```
//!
use crate::bot::command::Command;
use crate::bot::pools::TemplatePools;
use crate::bot::random::RandomSource;
use crate::bot::state::ConversationState;
use tracing::{debug, warn};

/// Implements `!photo [extra]`.
pub mod photo;
/// Implements `!quiz`.
pub mod quiz;
/// Implements `!rec [edm|photo|game]` and its `!recommend` alias.
pub mod rec;
/// Implements `!roll [NdM]`.
pub mod roll;

/// The single handler shape shared by every command.
pub type Handler = fn(&TemplatePools, &str, &mut ConversationState, &mut dyn RandomSource) -> String;

/// Command name to handler, in the order shown to users.
pub const HANDLERS: &[(&str, Handler)] = &[
    ("photo", photo::handle_photo),
    ("rec", rec::handle_rec),
    ("recommend", rec::handle_rec),
    ("roll", roll::handle_roll),
    ("quiz", quiz::handle_quiz),
];

/// Looks up the handler for a lower-cased command name.
pub fn lookup(name: &str) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(command, _)| *command == name)
        .map(|(_, handler)| *handler)
}

/// Runs `command` and returns its reply. Unknown names get an explanatory message.
pub fn dispatch(
    pools: &TemplatePools,
    command: &Command,
    state: &mut ConversationState,
    rng: &mut dyn RandomSource,
) -> String {
    match lookup(&command.name) {
        Some(handler) => {
            debug!("Dispatching {}", command);
            handler(pools, &command.argument, state, rng)
        }
        None => {
            warn!("Unknown command '{}'", command.name);
            format!(
                "I don't know the command '{}'. Try !rec or !photo.",
                command.name
            )
        }
    }
}
