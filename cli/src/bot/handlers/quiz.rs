//! # Quiz Command
//!
//! File: cli/src/bot/handlers/quiz.rs
//! Author: Christi Mahu
//!
//! `!quiz` asks the one quiz question and arms the conversation state. The next
//! turn is judged as the answer, see `crate::bot::responder`.
//!
use crate::bot::pools::TemplatePools;
use crate::bot::random::RandomSource;
use crate::bot::state::ConversationState;

pub const QUIZ_TAG: &str = "ww2_end";
pub const QUIZ_ANSWER: &str = "1945";
pub const QUIZ_QUESTION: &str = "Quiz time: In which year did WWII end?";

/// Ignores its argument.
pub fn handle_quiz(
    _pools: &TemplatePools,
    _argument: &str,
    state: &mut ConversationState,
    _rng: &mut dyn RandomSource,
) -> String {
    state.await_answer(QUIZ_TAG, QUIZ_ANSWER);
    QUIZ_QUESTION.to_string()
}
