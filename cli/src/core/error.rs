//! # Himmy Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout Himmy. The responder core
//! itself never fails a turn: every malformed input becomes a user-facing reply.
//! Errors exist for two situations only:
//!
//! - Startup problems (bad configuration, empty template pools, broken banner
//!   templates). These propagate to `main` and end the process.
//! - Typed intermediate results inside the core (dice notation), which the
//!   owning handler converts to a reply.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `HimmyError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! use himmy::core::error::HimmyError;
//!
//! let err = HimmyError::DiceOutOfRange { count: 0, sides: 6 };
//! // The Display text doubles as the reply shown to the user.
//! assert!(err.to_string().starts_with("Can't roll that"));
//! ```
//!
use thiserror::Error;

/// Custom error type for the Himmy application.
#[derive(Error, Debug)]
pub enum HimmyError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A template pool ended up with no candidate lines.
    #[error("Template pool '{pool}' has no entries.")]
    EmptyPool { pool: String },

    /// A keyword group was given a blank phrase.
    #[error("Keyword group '{group}' contains an empty phrase.")]
    EmptyKeyword { group: String },

    #[error("Keyword pattern failed to compile: {source}")]
    KeywordPattern {
        #[from]
        source: regex::Error,
    },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    // The two dice variants render as the exact text the `roll` handler replies with.
    #[error("Use the format NdM, e.g. '!roll 2d6' or '!roll d20'.")]
    DiceNotation(String),

    #[error("Can't roll that — pick 1-100 dice and a positive number of sides.")]
    DiceOutOfRange { count: u64, sides: u64 },

    #[error("I/O error: {0}")]
    Io(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
