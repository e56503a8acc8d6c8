//! # Dice Roll Command
//!
//! File: cli/src/bot/handlers/roll.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `!roll [NdM]` rolls `N` dice with `M` sides each. `N` defaults to 1 and an
//! empty argument means `1d6`.
//!
//! ## Architecture
//!
//! Rolling is split from replying:
//! - `roll_dice` parses the notation and returns a typed `DiceRoll` or a
//!   `HimmyError` (`DiceNotation` / `DiceOutOfRange`).
//! - `handle_roll` turns either outcome into a reply. The error's display text
//!   is the usage or bounds message itself.
//!
//! Limits: 1 to 100 dice, at least one side. Counts or sides too large to
//! parse as `u64` are treated as out of range.
//!
//! ## Examples
//!
//! ```rust
//! use himmy::bot::handlers::roll::roll_dice;
//! use himmy::bot::random::SeededRandom;
//!
//! let roll = roll_dice("3d6", &mut SeededRandom::new(Some(7))).unwrap();
//! assert_eq!(roll.rolls.len(), 3);
//! assert!(roll.rolls.iter().all(|r| (1..=6).contains(r)));
//! assert_eq!(roll.total(), roll.rolls.iter().map(|&r| u128::from(r)).sum::<u128>());
//! ```
//!
use crate::bot::pools::TemplatePools;
use crate::bot::random::RandomSource;
use crate::bot::state::ConversationState;
use crate::core::error::HimmyError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use tracing::debug;

/// Maximum number of dice in one roll.
pub const MAX_DICE: u64 = 100;

const DEFAULT_NOTATION: &str = "1d6";

static DICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d*)d(\d+)$").expect("dice regex must compile"));

/// The outcome of one `NdM` roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRoll {
    pub count: u64,
    pub sides: u64,
    pub rolls: Vec<u64>,
}

impl DiceRoll {
    /// Sum of every roll. `u128` so 100 maximal dice cannot overflow.
    pub fn total(&self) -> u128 {
        self.rolls.iter().map(|&roll| u128::from(roll)).sum()
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listed = self
            .rolls
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "Rolled {}d{}: [{}] (sum: {})",
            self.count,
            self.sides,
            listed,
            self.total()
        )
    }
}

/// Parses `notation` and rolls. An empty (or all-whitespace) notation rolls `1d6`.
pub fn roll_dice(notation: &str, rng: &mut dyn RandomSource) -> Result<DiceRoll, HimmyError> {
    let trimmed = notation.trim();
    let notation = if trimmed.is_empty() {
        DEFAULT_NOTATION
    } else {
        trimmed
    };

    let captures = DICE_RE
        .captures(notation)
        .ok_or_else(|| HimmyError::DiceNotation(notation.to_string()))?;
    let count_digits = captures.get(1).map_or("", |m| m.as_str());
    let sides_digits = captures.get(2).map_or("", |m| m.as_str());

    let count = if count_digits.is_empty() {
        Some(1)
    } else {
        count_digits.parse::<u64>().ok()
    };
    let sides = sides_digits.parse::<u64>().ok();

    let (count, sides) = match (count, sides) {
        (Some(count), Some(sides)) if count > 0 && count <= MAX_DICE && sides > 0 => (count, sides),
        (count, sides) => {
            return Err(HimmyError::DiceOutOfRange {
                count: count.unwrap_or(u64::MAX),
                sides: sides.unwrap_or(u64::MAX),
            })
        }
    };

    let rolls = (0..count).map(|_| rng.roll_range(1, sides)).collect();
    let roll = DiceRoll {
        count,
        sides,
        rolls,
    };
    debug!("Rolled {:?}", roll);
    Ok(roll)
}

pub fn handle_roll(
    _pools: &TemplatePools,
    argument: &str,
    _state: &mut ConversationState,
    rng: &mut dyn RandomSource,
) -> String {
    match roll_dice(argument, rng) {
        Ok(roll) => roll.to_string(),
        Err(err) => err.to_string(),
    }
}
