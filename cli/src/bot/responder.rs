//! # Himmy Responder
//!
//! File: cli/src/bot/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The `Responder` processes one turn of conversation: raw input in, exactly one
//! reply line out. It owns the template pools and the classifier built from
//! them; session state and randomness are passed in on every call so callers
//! decide their lifetime.
//!
//! ## Architecture
//!
//! Each turn takes the first path that applies:
//!
//! 1. **Pending quiz**: the input is judged as the answer, whatever it looks
//!    like, and the state returns to idle. Commands and intents are not
//!    consulted.
//! 2. **Command**: the input parses as a command and is dispatched.
//! 3. **Free text**: the input is classified and a reply is composed.
//!
//! Replies from paths 1 and 2 get a random opener in front.
//!
//! ## Examples
//!
//! ```rust
//! use himmy::bot::pools::TemplatePools;
//! use himmy::bot::random::SeededRandom;
//! use himmy::bot::responder::Responder;
//! use himmy::bot::state::ConversationState;
//!
//! let responder = Responder::new(TemplatePools::builtin().unwrap());
//! let mut state = ConversationState::new();
//! let mut rng = SeededRandom::new(Some(1));
//!
//! let question = responder.process_turn("!quiz", &mut state, &mut rng);
//! assert!(question.ends_with("Quiz time: In which year did WWII end?"));
//!
//! let verdict = responder.process_turn("1945", &mut state, &mut rng);
//! assert!(verdict.contains("Nice! That's right"));
//! assert!(state.is_idle());
//! ```
//!
use crate::bot::command;
use crate::bot::composer::ResponseComposer;
use crate::bot::handlers;
use crate::bot::intent::{Intent, IntentClassifier};
use crate::bot::pools::TemplatePools;
use crate::bot::random::RandomSource;
use crate::bot::state::ConversationState;
use tracing::debug;

/// Turn processor for one set of template pools.
#[derive(Debug, Clone)]
pub struct Responder {
    pools: TemplatePools,
    classifier: IntentClassifier,
}

impl Responder {
    pub fn new(pools: TemplatePools) -> Self {
        let classifier = IntentClassifier::new(&pools.keywords);
        Self { pools, classifier }
    }

    pub fn pools(&self) -> &TemplatePools {
        &self.pools
    }

    /// Classifies free text without producing a reply.
    pub fn classify(&self, input: &str) -> Option<Intent> {
        self.classifier.classify(input)
    }

    /// Produces the reply for one line of input, updating `state` as needed.
    pub fn process_turn(
        &self,
        input: &str,
        state: &mut ConversationState,
        rng: &mut dyn RandomSource,
    ) -> String {
        if let Some(pending) = state.take_pending() {
            let verdict = pending.judge(input);
            debug!("Answer to '{}' judged {:?}", pending.tag, verdict);
            return self.with_opener(&verdict.message(), rng);
        }

        if let Some(command) = command::parse(input) {
            let reply = handlers::dispatch(&self.pools, &command, state, rng);
            return self.with_opener(&reply, rng);
        }

        let intent = self.classifier.classify(input);
        ResponseComposer::new(&self.pools).compose(input, intent, rng)
    }

    fn with_opener(&self, reply: &str, rng: &mut dyn RandomSource) -> String {
        format!("{} {}", self.pools.openers.pick(rng), reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::pools::TAGLINE;
    use crate::bot::random::{ScriptedRandom, SeededRandom};

    fn responder() -> Responder {
        Responder::new(TemplatePools::builtin().unwrap())
    }

    #[test]
    fn test_quiz_round_trip_correct() {
        let r = responder();
        let mut state = ConversationState::new();
        let mut rng = ScriptedRandom::new();

        let question = r.process_turn("!quiz", &mut state, &mut rng);
        assert_eq!(question, "Yo! I'm Himmy. Quiz time: In which year did WWII end?");
        assert_eq!(state.expected_answer(), Some("1945"));

        let verdict = r.process_turn("1945", &mut state, &mut rng);
        assert_eq!(
            verdict,
            "Yo! I'm Himmy. Nice! That's right — 1945 was the year WWII ended."
        );
        assert!(state.is_idle());
    }

    #[test]
    fn test_quiz_round_trip_wrong() {
        let r = responder();
        let mut state = ConversationState::new();
        let mut rng = ScriptedRandom::new();
        r.process_turn("himmy, quiz", &mut state, &mut rng);

        let verdict = r.process_turn("the year was nineteen forty four", &mut state, &mut rng);
        assert!(verdict.ends_with("Not quite — the correct year was 1945."));
        assert!(state.is_idle());
    }

    #[test]
    fn test_pending_answer_bypasses_commands_and_intents() {
        let r = responder();
        let mut state = ConversationState::new();
        let mut rng = ScriptedRandom::new();
        r.process_turn("!quiz", &mut state, &mut rng);

        // Looks like a command, but it is judged as the answer.
        let verdict = r.process_turn("!roll 2d6", &mut state, &mut rng);
        assert!(verdict.contains("Not quite"));
        assert!(!verdict.contains("Rolled"));
        assert!(state.is_idle());

        // The following turn is back to normal.
        let roll = r.process_turn("!roll 2d6", &mut state, &mut rng);
        assert!(roll.contains("Rolled 2d6"));
    }

    #[test]
    fn test_command_reply_gets_opener() {
        let r = responder();
        let mut state = ConversationState::new();
        let mut rng = ScriptedRandom::new().with_rolls([3, 4]).with_picks([1]);
        let reply = r.process_turn("!roll 2d6", &mut state, &mut rng);
        assert_eq!(reply, "Heyyy, I'm Himmy. Rolled 2d6: [3, 4] (sum: 7)");
    }

    #[test]
    fn test_unknown_command() {
        let r = responder();
        let mut state = ConversationState::new();
        let reply = r.process_turn("!dance", &mut state, &mut ScriptedRandom::new());
        assert!(reply.ends_with("I don't know the command 'dance'. Try !rec or !photo."));
    }

    #[test]
    fn test_named_command_wins_over_intents() {
        let r = responder();
        let mut state = ConversationState::new();
        let reply = r.process_turn("himmy, rec edm", &mut state, &mut ScriptedRandom::new());
        assert!(reply.contains("EDM rec: Flume (instrumentals)"));
        assert!(!reply.contains(TAGLINE));
    }

    #[test]
    fn test_free_text_goes_through_composer() {
        let r = responder();
        let mut state = ConversationState::new();
        let mut rng = SeededRandom::new(Some(3));
        let reply = r.process_turn("any good survev tips", &mut state, &mut rng);
        assert!(reply.contains(TAGLINE));
        assert_eq!(r.classify("any good survev tips"), Some(Intent::Game));
        assert!(state.is_idle());
    }

    #[test]
    fn test_every_turn_yields_one_non_empty_line() {
        let r = responder();
        let mut state = ConversationState::new();
        let mut rng = SeededRandom::new(Some(5));
        let inputs = [
            "", "hi", "!photo", "!rec", "!roll 200d6", "!quiz", "idk", "what?", "ww2", "nothing here",
        ];
        for input in inputs {
            let reply = r.process_turn(input, &mut state, &mut rng);
            assert!(!reply.trim().is_empty(), "empty reply for {input:?}");
            assert!(!reply.contains('\n'), "multi-line reply for {input:?}");
        }
    }
}
