//! # Himmy Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure components that sit underneath
//! the responder: configuration, error management, and templating.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `templating`: Tera rendering for the banner and farewell lines
//!
//! ## Usage
//!
//! ```rust
//! use himmy::core::config; // For loading configuration
//! use himmy::core::error::{HimmyError, Result}; // For error handling
//! use himmy::core::templating; // For rendering session lines
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
