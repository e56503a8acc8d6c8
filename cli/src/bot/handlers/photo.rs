//! # Photo Command
//!
//! File: cli/src/bot/handlers/photo.rs
//! Author: Christi Mahu
//!
//! `!photo [extra]` replies with one photography tip. A non-empty argument is
//! appended verbatim after `Extra:`.
//!
use crate::bot::pools::TemplatePools;
use crate::bot::random::RandomSource;
use crate::bot::state::ConversationState;

pub fn handle_photo(
    pools: &TemplatePools,
    argument: &str,
    _state: &mut ConversationState,
    rng: &mut dyn RandomSource,
) -> String {
    let tip = pools.photo_tips.pick(rng);
    if argument.is_empty() {
        tip.to_string()
    } else {
        format!("{} Extra: {}", tip, argument)
    }
}
