//! # Himmy Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges, and validates the optional configuration for a
//! Himmy session. Nothing here is required: with no files present every value
//! falls back to the built-in defaults and the bot behaves exactly the same.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit path given with `--config` (or `HIMMY_CONFIG`); when present,
//!    no other file is consulted
//! 2. Project-specific `.himmy.toml` in the current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `<config dir>/himmy/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [session]
//! prompt = "you> "
//! farewell = "Catch you later, {{ name }}."
//! exit_words = ["exit", "quit", "bye"]
//! seed = 7
//!
//! [pools]
//! quips = ["Golden hour is a lifestyle."]
//! ```
//!
//! The configuration is loaded once at startup; the `[pools]` extras are
//! folded into the template pools and never touched again.
//!
use crate::core::error::{HimmyError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub pools: PoolExtras,
}

/// Settings for the interactive loop (`himmy chat`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Text printed before each line read.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Tera template for the greeting printed once when the loop starts.
    #[serde(default = "default_banner")]
    pub banner: String,
    /// Tera template for the line printed when the loop ends.
    #[serde(default = "default_farewell")]
    pub farewell: String,
    /// Inputs that end the session, compared case-insensitively.
    #[serde(default = "default_exit_words")]
    pub exit_words: Vec<String>,
    /// Fixed seed for the random source. Absent means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            banner: default_banner(),
            farewell: default_farewell(),
            exit_words: default_exit_words(),
            seed: None,
        }
    }
}

/// Extra lines appended to the built-in template pools.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PoolExtras {
    #[serde(default)]
    pub openers: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub follow_ups: Vec<String>,
    #[serde(default)]
    pub quips: Vec<String>,
    #[serde(default)]
    pub rejections: Vec<String>,
    #[serde(default)]
    pub photo_tips: Vec<String>,
}

impl PoolExtras {
    /// Iterates `(pool name, extra lines)` for every configurable pool.
    pub fn named(&self) -> [(&'static str, &[String]); 6] {
        [
            ("openers", self.openers.as_slice()),
            ("topics", self.topics.as_slice()),
            ("follow_ups", self.follow_ups.as_slice()),
            ("quips", self.quips.as_slice()),
            ("rejections", self.rejections.as_slice()),
            ("photo_tips", self.photo_tips.as_slice()),
        ]
    }

    fn is_empty(&self) -> bool {
        self.named().iter().all(|(_, lines)| lines.is_empty())
    }
}

fn default_prompt() -> String {
    "> ".to_string()
}
fn default_banner() -> String {
    "{{ name }}Bot terminal chat (type 'exit' to quit). Commands: {{ commands }}. \
     You can also say '{{ name | lower }}, rec edm'."
        .to_string()
}
fn default_farewell() -> String {
    "Later! Stay vibey.".to_string()
}
fn default_exit_words() -> Vec<String> {
    vec!["exit".to_string(), "quit".to_string()]
}

const PROJECT_CONFIG_FILENAME: &str = ".himmy.toml";

/// Loads the effective configuration.
///
/// When `explicit` is given only that file is read, and it must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            let expanded = expand_path(path);
            info!("Loading configuration from: {}", expanded.display());
            load_config_from_path(&expanded)?
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Himmy", "himmy") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.himmy.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.session.prompt = if project_cfg.session.prompt != default_prompt() {
        project_cfg.session.prompt
    } else {
        user.session.prompt
    };
    merged.session.banner = if project_cfg.session.banner != default_banner() {
        project_cfg.session.banner
    } else {
        user.session.banner
    };
    merged.session.farewell = if project_cfg.session.farewell != default_farewell() {
        project_cfg.session.farewell
    } else {
        user.session.farewell
    };
    merged.session.exit_words = if project_cfg.session.exit_words != default_exit_words() {
        project_cfg.session.exit_words
    } else {
        user.session.exit_words
    };
    merged.session.seed = project_cfg.session.seed.or(user.session.seed);
    // Pool extras are taken as a block: a project that lists any extras replaces the user's.
    merged.pools = if !project_cfg.pools.is_empty() {
        project_cfg.pools
    } else {
        user.pools
    };
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.session.prompt.contains('\n') {
        return Err(anyhow!(HimmyError::Config(
            "Prompt must fit on a single line.".to_string()
        )));
    }
    if config.session.exit_words.iter().any(|w| w.trim().is_empty()) {
        return Err(anyhow!(HimmyError::Config(
            "Exit words cannot be blank.".to_string()
        )));
    }
    for (pool, lines) in config.pools.named() {
        if lines.iter().any(|line| line.trim().is_empty()) {
            return Err(anyhow!(HimmyError::Config(format!(
                "Pool '{}' contains a blank line.",
                pool
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}
