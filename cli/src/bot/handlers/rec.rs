//! # Recommendation Command
//!
//! File: cli/src/bot/handlers/rec.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `!rec [category]` (alias `!recommend`) picks a recommendation by looking for
//! category words anywhere in the argument, case-insensitively. Categories are
//! checked in a fixed order, so `!rec edm photos` is an EDM rec:
//!
//! 1. `edm`
//! 2. `photo` or `patapsco`
//! 3. `game`, `survev` or `surviv`
//!
//! An empty argument gets a generic prompt; anything else echoes the unknown
//! term back with a default suggestion.
//!
use crate::bot::pools::TemplatePools;
use crate::bot::random::RandomSource;
use crate::bot::state::ConversationState;

const CATEGORIES: &[(&[&str], &str)] = &[
    (
        &["edm"],
        "EDM rec: Flume (instrumentals) for chill, Martin Garrix for hype, and try Deadmau5 for texture.",
    ),
    (
        &["photo", "patapsco"],
        "Photo rec: Avalon area of Patapsco at sunset, or check the old bridges for moody frames.",
    ),
    (
        &["game", "survev", "surviv"],
        "Game rec: try a 2v2 Survev run if you want chaos and comebacks.",
    ),
];

const GENERIC_PROMPT: &str =
    "Try Flume for chill or Martin Garrix for hype. Ask '!rec edm' or '!rec photo' for specifics.";

pub fn handle_rec(
    _pools: &TemplatePools,
    argument: &str,
    _state: &mut ConversationState,
    _rng: &mut dyn RandomSource,
) -> String {
    let lowered = argument.to_lowercase();
    if let Some((_, rec)) = CATEGORIES
        .iter()
        .find(|(words, _)| words.iter().any(|word| lowered.contains(word)))
    {
        return rec.to_string();
    }
    if lowered.is_empty() {
        return GENERIC_PROMPT.to_string();
    }
    format!(
        "Hmm, not sure about '{}', but I'm vibing with Flume and Patapsco shots lately.",
        argument
    )
}
