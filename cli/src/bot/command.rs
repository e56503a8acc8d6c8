//! # Command Parsing
//!
//! File: cli/src/bot/command.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Recognizes explicit commands before any intent classification happens.
//! Two grammars are accepted, tried in order:
//!
//! 1. Symbol prefix: `!roll 2d6`, `/quiz`
//! 2. Addressing the bot by name: `himmy, rec edm`, `Himmy: photo`, `himmy roll d20`
//!
//! The command name is lower-cased and the argument trimmed (empty if absent).
//!
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use tracing::debug;

static SYMBOL_COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[/!](\w+)(?:\s+(.*))?$").expect("symbol command regex must compile")
});
static NAMED_COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^himmy[,:\s]+\s*(\w+)(?:\s+(.*))?$").expect("named command regex must compile")
});

/// A parsed `(name, argument)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub argument: String,
}

impl Command {
    pub fn new(name: &str, argument: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            argument: argument.trim().to_string(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.argument.is_empty() {
            write!(f, "!{}", self.name)
        } else {
            write!(f, "!{} {}", self.name, self.argument)
        }
    }
}

/// Parses `input` as a command. `None` means the input is free text.
pub fn parse(input: &str) -> Option<Command> {
    let trimmed = input.trim();
    let captures = SYMBOL_COMMAND_RE
        .captures(trimmed)
        .or_else(|| NAMED_COMMAND_RE.captures(trimmed))?;
    let name = captures.get(1)?.as_str();
    let argument = captures.get(2).map_or("", |m| m.as_str());
    let command = Command::new(name, argument);
    debug!("Parsed command {:?}", command);
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_prefix() {
        assert_eq!(parse("!roll 2d6"), Some(Command::new("roll", "2d6")));
        assert_eq!(parse("/quiz"), Some(Command::new("quiz", "")));
        assert_eq!(parse("!PHOTO   sunset at the river  "), Some(Command::new("photo", "sunset at the river")));
    }

    #[test]
    fn test_named_prefix() {
        assert_eq!(parse("himmy, rec edm"), Some(Command::new("rec", "edm")));
        assert_eq!(parse("Himmy: photo"), Some(Command::new("photo", "")));
        assert_eq!(parse("HIMMY roll d20"), Some(Command::new("roll", "d20")));
        assert_eq!(parse("himmy,,  quiz"), Some(Command::new("quiz", "")));
    }

    #[test]
    fn test_free_text_is_not_a_command() {
        assert_eq!(parse("hello there"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("!"), None);
        assert_eq!(parse("! roll"), None);
        assert_eq!(parse("himmy"), None);
        assert_eq!(parse("himmyroll"), None);
        assert_eq!(parse("hey himmy, rec edm"), None);
    }

    #[test]
    fn test_name_is_lowercased_argument_kept() {
        let command = parse("!Rec EDM").unwrap();
        assert_eq!(command.name, "rec");
        assert_eq!(command.argument, "EDM");
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::new("roll", "2d6").to_string(), "!roll 2d6");
        assert_eq!(Command::new("quiz", "").to_string(), "!quiz");
    }
}
