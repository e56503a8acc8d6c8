//! # Himmy
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Library half of the `himmy` crate. `bot` holds the responder core and
//! `core` the infrastructure around it (errors, configuration, templating).
//! The `himmy` binary in `main.rs` adds the terminal loop and CLI surface on top.
//!
pub mod bot;
pub mod core;
