//! # Response Composition
//!
//! File: cli/src/bot/composer.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns a classified intent (or its absence) into one persona-flavored reply.
//! Composition never fails and never returns an empty string.
//!
//! ## Architecture
//!
//! Each call draws one opener, one topic, one follow-up, and one quip up front,
//! in that order, and every branch reuses those draws:
//!
//! - **Topical intent**: `[opener?] <flavor line> [aside] <quip> <tagline> <follow-up>`.
//!   The opener appears with the intent's own probability; some intents add an
//!   aside (a primary-source offer for `ww2`, a lab idea for `apenv`, a local
//!   Patapsco nod for `photography`).
//! - **`unknown_question`**: `[opener?] <rejection> <follow-up>`, no quip or tagline.
//! - **No intent**: `<opener> [You said: <input> —] <topic> <quip> <tagline> <follow-up>`,
//!   echoing the trimmed input 40% of the time when there is any.
//!
//! Fragments are joined with single spaces and skipped fragments leave no gap.
//!
use crate::bot::intent::Intent;
use crate::bot::pools::{
    Aside, IntentReply, TemplatePools, ECHO_CHANCE, REJECTION_OPENER_CHANCE, TAGLINE,
};
use crate::bot::random::RandomSource;
use tracing::warn;

/// Prefix used when the fallback echoes the user's words.
pub const ECHO_PREFIX: &str = "You said:";

/// The four per-call draws shared by every branch.
struct Draws<'a> {
    opener: &'a str,
    topic: &'a str,
    follow_up: &'a str,
    quip: &'a str,
}

/// Assembles replies from a set of template pools.
#[derive(Debug, Clone, Copy)]
pub struct ResponseComposer<'a> {
    pools: &'a TemplatePools,
}

impl<'a> ResponseComposer<'a> {
    pub fn new(pools: &'a TemplatePools) -> Self {
        Self { pools }
    }

    /// Builds the reply for `input` given its classification.
    pub fn compose(&self, input: &str, intent: Option<Intent>, rng: &mut dyn RandomSource) -> String {
        let draws = Draws {
            opener: self.pools.openers.pick(rng),
            topic: self.pools.topics.pick(rng),
            follow_up: self.pools.follow_ups.pick(rng),
            quip: self.pools.quips.pick(rng),
        };

        match intent {
            Some(Intent::UnknownQuestion) => self.rejection(&draws, rng),
            Some(intent) => match self.pools.reply_for(intent) {
                Some(reply) => Self::topical(reply, &draws, rng),
                None => {
                    warn!("No reply recipe for intent '{}', using fallback", intent);
                    Self::fallback(input, &draws, rng)
                }
            },
            None => Self::fallback(input, &draws, rng),
        }
    }

    fn topical(reply: &IntentReply, draws: &Draws<'_>, rng: &mut dyn RandomSource) -> String {
        let line = reply.lines.pick(rng);
        let opener = if rng.chance(reply.opener_chance) {
            draws.opener
        } else {
            ""
        };
        let aside = match &reply.aside {
            Some(Aside::Always(text)) => text.as_str(),
            Some(Aside::Sometimes(text, probability)) if rng.chance(*probability) => text.as_str(),
            _ => "",
        };
        join(&[opener, line, aside, draws.quip, TAGLINE, draws.follow_up])
    }

    fn rejection(&self, draws: &Draws<'_>, rng: &mut dyn RandomSource) -> String {
        let rejection = self.pools.rejections.pick(rng);
        let opener = if rng.chance(REJECTION_OPENER_CHANCE) {
            draws.opener
        } else {
            ""
        };
        join(&[opener, rejection, draws.follow_up])
    }

    fn fallback(input: &str, draws: &Draws<'_>, rng: &mut dyn RandomSource) -> String {
        let trimmed = input.trim();
        // The echo roll only happens when there is something to echo.
        let body = if !trimmed.is_empty() && rng.chance(ECHO_CHANCE) {
            format!("{} {} — {}", ECHO_PREFIX, trimmed, draws.topic)
        } else {
            draws.topic.to_string()
        };
        join(&[draws.opener, &body, draws.quip, TAGLINE, draws.follow_up])
    }
}

fn join(fragments: &[&str]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
