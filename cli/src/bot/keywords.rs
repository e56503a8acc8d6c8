//! # Keyword Matching
//!
//! File: cli/src/bot/keywords.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Case-insensitive keyword detection that respects word edges. `"history"`
//! matches `"AP history class"` but not `"storyhistorical"`, and a phrase
//! such as `"ap world history"` only matches as one contiguous run of words.
//!
//! ## Architecture
//!
//! - `contains_any`: the standalone check. Compiles one `\b<phrase>\b` pattern per
//!   keyword and stops at the first hit.
//! - `KeywordGroup`: a named phrase list with a precompiled pattern, used by the
//!   classifier on every turn. Groups can also run in `Substring` mode for the
//!   few triggers that deliberately ignore word edges (`"walter"` inside `"walters"`).
//! - `KeywordBook`: every group the classifier consults, with the built-in phrase lists.
//!
use crate::core::error::HimmyError;
use regex::Regex;
use std::fmt;
use tracing::warn;

/// Returns `true` if any keyword occurs in `text` bounded by word edges.
///
/// Both sides are lower-cased and the keyword is escaped, so punctuation in a
/// keyword (`"st. john's"`) is matched literally. Empty keywords never match.
pub fn contains_any<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|keyword| {
        let keyword = keyword.as_ref();
        if keyword.is_empty() {
            return false;
        }
        match word_bounded_pattern(&[keyword]) {
            Ok(pattern) => pattern.is_match(&lowered),
            Err(e) => {
                warn!("Skipping keyword '{}': {}", keyword, e);
                false
            }
        }
    })
}

/// Builds `\b(?:p1|p2|...)\b` over the escaped, lower-cased phrases.
fn word_bounded_pattern<S: AsRef<str>>(phrases: &[S]) -> Result<Regex, regex::Error> {
    let alternatives = phrases
        .iter()
        .map(|phrase| regex::escape(&phrase.as_ref().to_lowercase()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternatives))
}

/// How a group's phrases are located in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Phrase must be flanked by word boundaries.
    WordBounded,
    /// Plain substring containment.
    Substring,
}

/// A named, ordered set of trigger phrases.
#[derive(Debug, Clone)]
pub struct KeywordGroup {
    id: String,
    phrases: Vec<String>,
    mode: MatchMode,
    pattern: Option<Regex>,
}

impl KeywordGroup {
    /// Creates a group, rejecting blank phrases.
    pub fn new<S: AsRef<str>>(
        id: &str,
        phrases: &[S],
        mode: MatchMode,
    ) -> Result<Self, HimmyError> {
        if phrases.iter().any(|p| p.as_ref().trim().is_empty()) {
            return Err(HimmyError::EmptyKeyword {
                group: id.to_string(),
            });
        }
        let phrases: Vec<String> = phrases.iter().map(|p| p.as_ref().to_lowercase()).collect();
        let pattern = match mode {
            MatchMode::WordBounded if !phrases.is_empty() => Some(word_bounded_pattern(&phrases)?),
            _ => None,
        };
        Ok(Self {
            id: id.to_string(),
            phrases,
            mode,
            pattern,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Tests raw input against the group.
    pub fn matches(&self, text: &str) -> bool {
        self.matches_lowered(&text.to_lowercase())
    }

    /// Same as `matches`, for input that is already lower-cased.
    pub(crate) fn matches_lowered(&self, lowered: &str) -> bool {
        match (&self.pattern, self.mode) {
            (Some(pattern), _) => pattern.is_match(lowered),
            (None, MatchMode::Substring) => self.phrases.iter().any(|p| lowered.contains(p.as_str())),
            (None, MatchMode::WordBounded) => false,
        }
    }
}

impl fmt::Display for KeywordGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} phrases)", self.id, self.phrases.len())
    }
}

/// Every keyword group the intent classifier consults.
#[derive(Debug, Clone)]
pub struct KeywordBook {
    pub greeting: KeywordGroup,
    pub simple_questions: KeywordGroup,
    pub ww2: KeywordGroup,
    pub walters: KeywordGroup,
    pub apenv: KeywordGroup,
    pub patapsco: KeywordGroup,
    pub sled: KeywordGroup,
    pub photography: KeywordGroup,
    pub edm: KeywordGroup,
    pub game: KeywordGroup,
    pub history: KeywordGroup,
    pub recommend: KeywordGroup,
}

const GREETING_KEYS: &[&str] = &["hi", "hello", "hey", "hiya", "yo", "sup"];

const SIMPLE_QUESTIONS: &[&str] = &[
    "who are you",
    "what's your name",
    "what is your name",
    "how are you",
    "how's it going",
    "what are you up to",
];

const WW2_KEYS: &[&str] = &["ww2", "wwii", "world war 2", "world war ii", "second world war"];

const WALTERS_KEYS: &[&str] = &["walter", "mr. walters", "mr walters"];

const APENV_KEYS: &[&str] = &[
    "ap env",
    "ap environmental",
    "apes",
    "environmental science",
    "ms. mcgarry",
    "ms mcgarry",
    "mcgarry",
    "mrs mcgarry",
];

const PATAPSCO_KEYS: &[&str] = &["patapsco", "patapsco valley", "ellicott", "ellicott city"];

const SLED_KEYS: &[&str] = &[
    "sled",
    "sledding",
    "st. john",
    "st john",
    "st. john's",
    "st john's",
    "st. johns",
    "st johns",
    "st. john's lane",
    "st johns lane",
    "st john's lane",
];

const PHOTO_KEYS: &[&str] = &[
    "photo",
    "picture",
    "pic",
    "camera",
    "photograph",
    "photography",
    "sunset",
    "golden hour",
    "shot",
    "dslr",
    "lens",
    "iso",
    "aperture",
    "exposure",
];

const EDM_KEYS: &[&str] = &[
    "edm",
    "calvin",
    "flume",
    "deadmau5",
    "skrillex",
    "tiesto",
    "tiësto",
    "martin garrix",
    "garrix",
    "marshmello",
    "diplo",
];

const GAME_KEYS: &[&str] = &[
    "game",
    "survev",
    "surviv",
    "io game",
    "surviv.io",
    "survev.io",
    "match",
    "clutch",
    "grind",
    "play",
];

const HISTORY_KEYS: &[&str] = &[
    "history",
    "world history",
    "ap world",
    "ap world history",
    "mr. walters",
    "mr walters",
    "walter",
    "walters",
    "ww2",
    "wwii",
    "world war 2",
    "world war ii",
    "second world war",
];

const RECOMMEND_KEYS: &[&str] = &["recommend", "rec"];

impl KeywordBook {
    /// The built-in phrase lists.
    pub fn builtin() -> Result<Self, HimmyError> {
        use MatchMode::{Substring, WordBounded};
        Ok(Self {
            greeting: KeywordGroup::new("greeting", GREETING_KEYS, WordBounded)?,
            simple_questions: KeywordGroup::new("simple_questions", SIMPLE_QUESTIONS, Substring)?,
            ww2: KeywordGroup::new("ww2", WW2_KEYS, Substring)?,
            walters: KeywordGroup::new("mr_walters", WALTERS_KEYS, Substring)?,
            apenv: KeywordGroup::new("apenv", APENV_KEYS, WordBounded)?,
            patapsco: KeywordGroup::new("patapsco", PATAPSCO_KEYS, WordBounded)?,
            sled: KeywordGroup::new("sled", SLED_KEYS, WordBounded)?,
            photography: KeywordGroup::new("photography", PHOTO_KEYS, WordBounded)?,
            edm: KeywordGroup::new("edm", EDM_KEYS, WordBounded)?,
            game: KeywordGroup::new("game", GAME_KEYS, WordBounded)?,
            history: KeywordGroup::new("history", HISTORY_KEYS, WordBounded)?,
            recommend: KeywordGroup::new("recommend", RECOMMEND_KEYS, Substring)?,
        })
    }
}
