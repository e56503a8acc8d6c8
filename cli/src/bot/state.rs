//! # Conversation State
//!
//! File: cli/src/bot/state.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The only multi-turn interaction is the quiz, so the session state is a
//! two-state machine:
//!
//! ```text
//!          !quiz dispatched
//!   Idle ───────────────────▶ AwaitingAnswer { tag, expected }
//!    ▲                              │
//!    └──────── next turn ───────────┘  (answer judged, state cleared)
//! ```
//!
//! A pending question carries both its tag and its expected answer, so one is
//! never set without the other.
//!
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static NON_DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("non-digit regex must compile"));

/// The question currently waiting for an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuestion {
    pub tag: String,
    pub expected: String,
}

/// Session state threaded through every turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingAnswer(PendingQuestion),
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag of the pending question, if any.
    pub fn awaiting(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::AwaitingAnswer(pending) => Some(&pending.tag),
        }
    }

    /// Expected answer of the pending question, if any.
    pub fn expected_answer(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::AwaitingAnswer(pending) => Some(&pending.expected),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Moves to `AwaitingAnswer`, replacing any question already pending.
    pub fn await_answer(&mut self, tag: &str, expected: &str) {
        debug!("Conversation now awaiting '{}'", tag);
        *self = Self::AwaitingAnswer(PendingQuestion {
            tag: tag.to_string(),
            expected: expected.to_string(),
        });
    }

    /// Removes and returns the pending question, leaving the state `Idle`.
    pub fn take_pending(&mut self) -> Option<PendingQuestion> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::AwaitingAnswer(pending) => {
                debug!("Conversation back to idle after '{}'", pending.tag);
                Some(pending)
            }
        }
    }
}

/// Outcome of judging one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct { expected: String },
    Incorrect { expected: String },
}

impl PendingQuestion {
    /// Keeps only the digits of `input` and compares them to the expected answer.
    pub fn judge(&self, input: &str) -> Verdict {
        let digits = NON_DIGIT_RE.replace_all(input, "");
        let expected = self.expected.clone();
        if digits == expected.as_str() {
            Verdict::Correct { expected }
        } else {
            Verdict::Incorrect { expected }
        }
    }
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct { .. })
    }

    /// The reply line for this verdict.
    pub fn message(&self) -> String {
        match self {
            Verdict::Correct { expected } => {
                format!("Nice! That's right — {} was the year WWII ended.", expected)
            }
            Verdict::Incorrect { expected } => {
                format!("Not quite — the correct year was {}.", expected)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let state = ConversationState::new();
        assert!(state.is_idle());
        assert_eq!(state.awaiting(), None);
        assert_eq!(state.expected_answer(), None);
    }

    #[test]
    fn test_fields_are_set_and_cleared_together() {
        let mut state = ConversationState::new();
        state.await_answer("ww2_end", "1945");
        assert_eq!(state.awaiting(), Some("ww2_end"));
        assert_eq!(state.expected_answer(), Some("1945"));

        let pending = state.take_pending().unwrap();
        assert_eq!(pending.expected, "1945");
        assert!(state.is_idle());
        assert_eq!(state.expected_answer(), None);
        assert_eq!(state.take_pending(), None);
    }

    #[test]
    fn test_judge_uses_digits_only() {
        let pending = PendingQuestion {
            tag: "ww2_end".into(),
            expected: "1945".into(),
        };
        assert!(pending.judge("1945").is_correct());
        assert!(pending.judge("it ended in 1945!").is_correct());
        assert!(pending.judge("19-45").is_correct());
        assert!(!pending.judge("the year was nineteen forty four").is_correct());
        assert!(!pending.judge("1944").is_correct());
        assert!(!pending.judge("1945 or 1946").is_correct());
    }

    #[test]
    fn test_verdict_messages_name_the_year() {
        let correct = Verdict::Correct {
            expected: "1945".into(),
        };
        let wrong = Verdict::Incorrect {
            expected: "1945".into(),
        };
        assert_eq!(correct.message(), "Nice! That's right — 1945 was the year WWII ended.");
        assert_eq!(wrong.message(), "Not quite — the correct year was 1945.");
    }
}
