//! # Himmy Bot Core
//!
//! File: cli/src/bot/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The responder core: everything needed to turn one line of user input into
//! one persona reply. Nothing in here touches the terminal.
//!
//! ## Architecture
//!
//! Control flow per turn:
//!
//! ```text
//! input ─▶ ConversationState awaiting? ──yes──▶ judge answer
//!            │ no
//!            ▼
//!         command::parse ──some──▶ handlers::dispatch
//!            │ none
//!            ▼
//!         IntentClassifier ─▶ ResponseComposer
//! ```
//!
//! - `random`: the `RandomSource` seam every random choice goes through
//! - `keywords`: word-edge keyword matching and the built-in keyword groups
//! - `intent`: the `Intent` labels and the ordered rule chain
//! - `pools`: template pools and per-intent reply recipes
//! - `composer`: assembles replies for free text
//! - `command`: the `!cmd` / `himmy, cmd` grammar
//! - `handlers`: the command table and one module per command
//! - `state`: the quiz state machine
//! - `responder`: ties the pieces into `process_turn`
//!
pub mod command;
pub mod composer;
pub mod handlers;
pub mod intent;
pub mod keywords;
pub mod pools;
pub mod random;
pub mod responder;
pub mod state;
