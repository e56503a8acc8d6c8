//! # Himmy Template System
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module renders the few user-configurable lines of a chat session (the
//! banner printed on start and the farewell printed on exit) with the Tera
//! templating engine. Both lines come from configuration, so a user can write
//! things like `"Bye from {{ name }}!"` or `"{{ name | upper }} is listening"`.
//!
//! Reply composition does not go through Tera: replies are assembled from
//! template pools by `bot::composer`, which has to be infallible.
//!
//! ## Architecture
//!
//! 1. Build a flat string context (`name`, `commands`)
//! 2. Render each configured template once at startup
//! 3. Surface syntax errors as startup errors with the offending field named
//!
use crate::core::config::SessionConfig;
use crate::core::error::{HimmyError, Result};
use anyhow::anyhow;
use std::collections::HashMap;
use tera::Tera;
use tracing::debug;

/// Display name substituted for `{{ name }}`.
pub const BOT_NAME: &str = "Himmy";

/// Command summary substituted for `{{ commands }}`.
pub const COMMAND_SUMMARY: &str = "!photo, !rec, !roll, !quiz";

/// Rendered, ready-to-print session lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLines {
    pub banner: String,
    pub farewell: String,
}

/// Builds the context shared by every session template.
pub fn session_context() -> HashMap<String, String> {
    let mut context = HashMap::new();
    context.insert("name".to_string(), BOT_NAME.to_string());
    context.insert("commands".to_string(), COMMAND_SUMMARY.to_string());
    context
}

/// Renders one template string against a flat string context.
///
/// Autoescaping is off: the output goes to a terminal, not to HTML.
pub fn render_line(template: &str, context_map: &HashMap<String, String>) -> Result<String> {
    let tera_context = tera::Context::from_serialize(context_map).map_err(|e| {
        anyhow!(HimmyError::Template { source: e })
            .context("Failed to create Tera context from map")
    })?;
    Tera::one_off(template, &tera_context, false)
        .map_err(|e| anyhow!(HimmyError::Template { source: e }))
}

/// Renders the banner and farewell configured for a session.
pub fn render_session_lines(session: &SessionConfig) -> Result<SessionLines> {
    let context = session_context();
    let banner = render_line(&session.banner, &context)
        .map_err(|e| e.context("Tera rendering failed for session banner"))?;
    let farewell = render_line(&session.farewell, &context)
        .map_err(|e| e.context("Tera rendering failed for session farewell"))?;
    debug!("Rendered session banner: {}", banner);
    Ok(SessionLines { banner, farewell })
}
