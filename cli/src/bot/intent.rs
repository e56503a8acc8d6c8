//! # Intent Classification
//!
//! File: cli/src/bot/intent.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Maps one line of free text to at most one `Intent`. The classifier is an
//! ordered list of rules, each a `(Trigger, Intent)` pair, evaluated top to
//! bottom with first-match-wins semantics. Keeping the rules as data makes the
//! priority order visible in one place and lets each rule be tested on its own.
//!
//! ## Rule Order
//!
//! | # | Trigger                                         | Intent             |
//! |---|-------------------------------------------------|--------------------|
//! | 1 | blank input                                     | none               |
//! | 2 | greeting word, or a simple "who are you" phrase | `greeting`         |
//! | 3 | explicit WWII token (substring)                 | `ww2`              |
//! | 4 | "walter" / "mr. walters" (substring)            | `mr_walters`       |
//! | 5 | AP Environmental Science group                  | `apenv`            |
//! | 6 | Patapsco group AND photography group            | `patapsco_photo`   |
//! | 7 | sledding group                                  | `sled`             |
//! | 8 | photography group                               | `photography`      |
//! | 9 | EDM group                                       | `edm`              |
//! |10 | game group                                      | `game`             |
//! |11 | history group                                   | `history`          |
//! |12 | "recommend" / "rec" (substring)                 | `recommend`        |
//! |13 | ends with `?` after trimming                    | `unknown_question` |
//!
//! Anything else yields no intent.
//!
use crate::bot::keywords::{KeywordBook, KeywordGroup};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The closed set of topical labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Greeting,
    Ww2,
    MrWalters,
    ApEnv,
    PatapscoPhoto,
    Sled,
    Photography,
    Edm,
    Game,
    History,
    Recommend,
    UnknownQuestion,
}

impl Intent {
    /// Every intent, in rule priority order.
    pub const ALL: [Intent; 12] = [
        Intent::Greeting,
        Intent::Ww2,
        Intent::MrWalters,
        Intent::ApEnv,
        Intent::PatapscoPhoto,
        Intent::Sled,
        Intent::Photography,
        Intent::Edm,
        Intent::Game,
        Intent::History,
        Intent::Recommend,
        Intent::UnknownQuestion,
    ];

    /// The snake_case label.
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Ww2 => "ww2",
            Intent::MrWalters => "mr_walters",
            Intent::ApEnv => "apenv",
            Intent::PatapscoPhoto => "patapsco_photo",
            Intent::Sled => "sled",
            Intent::Photography => "photography",
            Intent::Edm => "edm",
            Intent::Game => "game",
            Intent::History => "history",
            Intent::Recommend => "recommend",
            Intent::UnknownQuestion => "unknown_question",
        }
    }

    /// Whether replies for this intent carry the quip and tagline.
    pub fn is_topical(self) -> bool {
        self != Intent::UnknownQuestion
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == s)
            .ok_or_else(|| format!("unknown intent label '{}'", s))
    }
}

/// The condition half of a rule. Triggers receive lower-cased input.
#[derive(Debug, Clone)]
pub enum Trigger {
    /// Any phrase of one group.
    Group(KeywordGroup),
    /// A phrase from either group.
    Either(KeywordGroup, KeywordGroup),
    /// A phrase from both groups.
    Both(KeywordGroup, KeywordGroup),
    /// Trimmed input ends with `?`.
    TrailingQuestionMark,
}

impl Trigger {
    fn fires(&self, lowered: &str) -> bool {
        match self {
            Trigger::Group(group) => group.matches_lowered(lowered),
            Trigger::Either(a, b) => a.matches_lowered(lowered) || b.matches_lowered(lowered),
            Trigger::Both(a, b) => a.matches_lowered(lowered) && b.matches_lowered(lowered),
            Trigger::TrailingQuestionMark => lowered.trim_end().ends_with('?'),
        }
    }
}

/// One `(trigger, label)` entry of the rule chain.
#[derive(Debug, Clone)]
pub struct Rule {
    pub intent: Intent,
    pub trigger: Trigger,
}

impl Rule {
    fn new(intent: Intent, trigger: Trigger) -> Self {
        Self { intent, trigger }
    }

    /// Evaluates this rule alone, ignoring every other rule.
    pub fn fires(&self, input: &str) -> bool {
        self.trigger.fires(&input.to_lowercase())
    }
}

/// Priority-ordered rule chain.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<Rule>,
}

impl IntentClassifier {
    /// Builds the standard rule chain over a keyword book.
    pub fn new(book: &KeywordBook) -> Self {
        let rules = vec![
            Rule::new(
                Intent::Greeting,
                Trigger::Either(book.greeting.clone(), book.simple_questions.clone()),
            ),
            Rule::new(Intent::Ww2, Trigger::Group(book.ww2.clone())),
            Rule::new(Intent::MrWalters, Trigger::Group(book.walters.clone())),
            Rule::new(Intent::ApEnv, Trigger::Group(book.apenv.clone())),
            Rule::new(
                Intent::PatapscoPhoto,
                Trigger::Both(book.patapsco.clone(), book.photography.clone()),
            ),
            Rule::new(Intent::Sled, Trigger::Group(book.sled.clone())),
            Rule::new(Intent::Photography, Trigger::Group(book.photography.clone())),
            Rule::new(Intent::Edm, Trigger::Group(book.edm.clone())),
            Rule::new(Intent::Game, Trigger::Group(book.game.clone())),
            Rule::new(Intent::History, Trigger::Group(book.history.clone())),
            Rule::new(Intent::Recommend, Trigger::Group(book.recommend.clone())),
            Rule::new(Intent::UnknownQuestion, Trigger::TrailingQuestionMark),
        ];
        Self { rules }
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The rule that produces `intent`.
    pub fn rule_for(&self, intent: Intent) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.intent == intent)
    }

    /// Returns the first matching intent, or `None` for blank or unmatched input.
    pub fn classify(&self, input: &str) -> Option<Intent> {
        let lowered = input.to_lowercase();
        if lowered.trim().is_empty() {
            return None;
        }
        let intent = self
            .rules
            .iter()
            .find(|rule| rule.trigger.fires(&lowered))
            .map(|rule| rule.intent);
        debug!("Classified {:?} as {:?}", input, intent);
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new(&KeywordBook::builtin().unwrap())
    }

    #[test]
    fn test_blank_input_has_no_intent() {
        let c = classifier();
        assert_eq!(c.classify(""), None);
        assert_eq!(c.classify("   "), None);
        assert_eq!(c.classify("\t\n"), None);
    }

    #[test]
    fn test_greetings() {
        let c = classifier();
        for input in ["hi", "Hello there", "yo what's up", "sup", "HIYA", "who are you", "so how are you doing"] {
            assert_eq!(c.classify(input), Some(Intent::Greeting), "input {input:?}");
        }
        // "hi" inside another word is not a greeting.
        assert_ne!(c.classify("this is high quality"), Some(Intent::Greeting));
    }

    #[test]
    fn test_greeting_beats_everything_below_it() {
        let c = classifier();
        assert_eq!(c.classify("hey, ww2 was wild"), Some(Intent::Greeting));
        assert_eq!(c.classify("hello patapsco photo"), Some(Intent::Greeting));
    }

    #[test]
    fn test_ww2_beats_history_and_other_groups() {
        let c = classifier();
        assert_eq!(c.classify("tell me about WWII"), Some(Intent::Ww2));
        assert_eq!(c.classify("world war 2 history photos"), Some(Intent::Ww2));
        assert_eq!(c.classify("second world war edm game"), Some(Intent::Ww2));
        // Substring rule: no word boundary needed.
        assert_eq!(c.classify("ww2ish stuff"), Some(Intent::Ww2));
    }

    #[test]
    fn test_walters_substring() {
        let c = classifier();
        assert_eq!(c.classify("Mr. Walters was the best"), Some(Intent::MrWalters));
        assert_eq!(c.classify("walterstown"), Some(Intent::MrWalters));
    }

    #[test]
    fn test_apenv() {
        let c = classifier();
        assert_eq!(c.classify("Ms. McGarry's class"), Some(Intent::ApEnv));
        assert_eq!(c.classify("environmental science lab at patapsco"), Some(Intent::ApEnv));
    }

    #[test]
    fn test_patapsco_photo_conjunction() {
        let c = classifier();
        assert_eq!(c.classify("best photo spot in Patapsco"), Some(Intent::PatapscoPhoto));
        assert_eq!(c.classify("ellicott city sunset"), Some(Intent::PatapscoPhoto));
        // Either side alone does not fire the conjunction.
        assert_eq!(c.classify("camera settings"), Some(Intent::Photography));
        assert_eq!(c.classify("patapsco trails"), None);
    }

    #[test]
    fn test_topical_groups() {
        let c = classifier();
        assert_eq!(c.classify("sledding last winter"), Some(Intent::Sled));
        assert_eq!(c.classify("my dslr died"), Some(Intent::Photography));
        assert_eq!(c.classify("Flume is goated"), Some(Intent::Edm));
        assert_eq!(c.classify("survev tonight"), Some(Intent::Game));
        assert_eq!(c.classify("ap world history"), Some(Intent::History));
    }

    #[test]
    fn test_sled_beats_photography() {
        let c = classifier();
        assert_eq!(c.classify("photo of the sled hill"), Some(Intent::Sled));
    }

    #[test]
    fn test_recommend_is_plain_substring() {
        let c = classifier();
        assert_eq!(c.classify("can you recommend something"), Some(Intent::Recommend));
        // Substring rule fires inside other words, as specified.
        assert_eq!(c.classify("record store"), Some(Intent::Recommend));
    }

    #[test]
    fn test_unknown_question_is_last_resort() {
        let c = classifier();
        assert_eq!(c.classify("what is the capital of peru?"), Some(Intent::UnknownQuestion));
        assert_eq!(c.classify("why though?   "), Some(Intent::UnknownQuestion));
        // A topical keyword wins over the trailing question mark.
        assert_eq!(c.classify("any edm tips?"), Some(Intent::Edm));
    }

    #[test]
    fn test_no_match() {
        let c = classifier();
        assert_eq!(c.classify("the weather is nice"), None);
        assert_eq!(c.classify("storyhistorical"), None);
    }

    #[test]
    fn test_rules_follow_priority_order() {
        let c = classifier();
        let order: Vec<Intent> = c.rules().iter().map(|r| r.intent).collect();
        assert_eq!(order, Intent::ALL.to_vec());
    }

    #[test]
    fn test_rules_are_independently_testable() {
        let c = classifier();
        let photo_rule = c.rule_for(Intent::Photography).unwrap();
        // The photography rule fires on its own even where a higher rule wins overall.
        assert!(photo_rule.fires("hello camera"));
        assert_eq!(c.classify("hello camera"), Some(Intent::Greeting));
        assert!(!c.rule_for(Intent::PatapscoPhoto).unwrap().fires("camera"));
    }

    #[test]
    fn test_labels_round_trip() {
        for intent in Intent::ALL {
            assert_eq!(intent.as_str().parse::<Intent>(), Ok(intent));
        }
        assert!("school".parse::<Intent>().is_err());
        assert_eq!(Intent::PatapscoPhoto.to_string(), "patapsco_photo");
    }
}
