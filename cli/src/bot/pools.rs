//! # Template Pools
//!
//! File: cli/src/bot/pools.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Immutable collections of candidate text fragments: openers, topic lines,
//! follow-up questions, quips, rejection lines, photo tips, and the per-intent
//! flavor lines. Pools are built once at startup (built-ins plus any `[pools]`
//! extras from configuration) and handed to the classifier and composer.
//!
//! Every `Pool` is guaranteed non-empty, so picking from one never fails.
//!
use crate::bot::intent::Intent;
use crate::bot::keywords::KeywordBook;
use crate::bot::random::RandomSource;
use crate::core::config::PoolExtras;
use crate::core::error::HimmyError;
use std::collections::HashMap;
use tracing::debug;

/// Constant tagline appended to every topical and fallback reply.
pub const TAGLINE: &str =
    "Also, have you played Surviv (now Survev.io) lately? That .io game still hits.";

/// A named, non-empty list of candidate strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    name: String,
    entries: Vec<String>,
}

impl Pool {
    /// Creates a pool; fails if `entries` is empty or holds a blank line.
    pub fn new<S: AsRef<str>>(name: &str, entries: &[S]) -> Result<Self, HimmyError> {
        if entries.is_empty() {
            return Err(HimmyError::EmptyPool {
                pool: name.to_string(),
            });
        }
        let mut pool = Self {
            name: name.to_string(),
            entries: Vec::with_capacity(entries.len()),
        };
        pool.extend(entries)?;
        Ok(pool)
    }

    /// Appends extra candidates.
    pub fn extend<S: AsRef<str>>(&mut self, extras: &[S]) -> Result<(), HimmyError> {
        for extra in extras {
            let line = extra.as_ref().trim();
            if line.is_empty() {
                return Err(HimmyError::Config(format!(
                    "Pool '{}' cannot take a blank line.",
                    self.name
                )));
            }
            self.entries.push(line.to_string());
        }
        Ok(())
    }

    /// Picks one entry uniformly at random.
    pub fn pick(&self, rng: &mut dyn RandomSource) -> &str {
        let index = rng.pick_index(self.entries.len());
        self.entries
            .get(index)
            .or_else(|| self.entries.first())
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.entries.iter().any(|entry| entry == line)
    }
}

/// An extra sentence placed right after an intent's flavor line.
#[derive(Debug, Clone, PartialEq)]
pub enum Aside {
    Always(String),
    Sometimes(String, f64),
}

/// How replies for one topical intent are built.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentReply {
    pub lines: Pool,
    /// Probability that the opener is shown in front of the flavor line.
    pub opener_chance: f64,
    pub aside: Option<Aside>,
}

/// Probability of an opener in front of a rejection line.
pub const REJECTION_OPENER_CHANCE: f64 = 0.6;

/// Probability that the no-intent fallback echoes the user's input.
pub const ECHO_CHANCE: f64 = 0.4;

/// Every pool the bot draws from, plus the keyword groups behind classification.
#[derive(Debug, Clone)]
pub struct TemplatePools {
    pub openers: Pool,
    pub topics: Pool,
    pub follow_ups: Pool,
    pub quips: Pool,
    pub rejections: Pool,
    pub photo_tips: Pool,
    pub keywords: KeywordBook,
    replies: HashMap<Intent, IntentReply>,
}

const OPENERS: &[&str] = &[
    "Yo! I'm Himmy.",
    "Heyyy, I'm Himmy.",
    "Sup, I'm Himmy.",
    "Ayo, Himmy here.",
    "What's good? Himmy in the house.",
    "Yo yo, Himmy on the mic.",
    "Heeeyyy, it's Himmy.",
    "Wassup? Himmy's vibin'.",
    "Hey! Himmy checking in.",
    "Yo! You found Himmy.",
];

const TOPICS: &[&str] = &[
    "I'm lowkey grinding some games after class.",
    "I've been taking outdoor pics of sunsets and trails.",
    "EDM playlists have been carrying my vibe lately.",
    "Kinda wanna hit the park with my camera later.",
    "Ngl I'm in a gaming mood tonight.",
    "Trying to map out new photo spots for golden hour.",
    "Been hunting EDM drops for my next playlist — fire recs welcome.",
    "Just finished a clutch match and ngl it felt iconic.",
    "Lowkey thinking of learning some synths for beats.",
    "Going on a quick hike after school to catch the sunset.",
    "Spent last weekend wandering Patapsco Valley State Park — those river views slap.",
    "Ellicott City's trails are so pretty at golden hour, you should check Patapsco.",
    "I've been nerding out about WWII timelines in Mr. Walters' class — wild stuff.",
    "Ms. McGarry had us doing an APES stream survey once — nature nerd moment.",
];

const FOLLOW_UPS: &[&str] = &[
    "What are you into right now?",
    "You got any music recs?",
    "Wanna swap game recs?",
    "Got any cool photo spots?",
    "What's your go-to track when you vibe out?",
    "You ever play .io games? Which one slaps?",
    "Any camera tips I should try for sunsets?",
    "You streaming or just chilling tonight?",
    "Ever been to Patapsco? Got a favorite trail?",
    "You ever try sledding down a hill that felt way too steep? lol",
    "You into history? What's your favorite era?",
    "Ever take a science class that made you lowkey obsessed with nature?",
];

const QUIPS: &[&str] = &[
    "Lowkey think Survev matches are the best way to de-stress ngl.",
    "Not tryna flex but my EDM playlist bangs at 2AM.",
    "If you spot a sick sunset pic, that was probably me.",
    "I lowkey rage when I get third-partied in Survev.",
    "Pro tip: golden hour = instant aesthetic.",
    "Vibes so strong, even my playlist has a playlist.",
    "I collect map spots like they're rare loot drops.",
    "No cap, sunsets > everything else sometimes.",
    "Bet I can find a park with better vibes than your last spot.",
    "My camera roll is basically moodboard central.",
    "Used to sled the hill by St. John's Lane Elementary back in the day — scraped knees and all.",
    "Ellicott City sunsets hit different, ngl — Patapsco's got the vibes.",
    "Patapsco's rivers and old bridges are perfect for moody shots, 10/10 rec.",
    "I still walk those trails and pretend I'm scouting shots for an insta feed.",
    "EDM's my mood — I jam everything from Calvin Harris to Flume and Deadmau5.",
    "Marshmello, Skrillex, Tiësto, Martin Garrix — can't pick just one, I love 'em all.",
    "If you got a Tiësto or Diplo banger, drop it, I'm adding to the playlist.",
    "My playlist goes from chill Flume vibes to full-on Martin Garrix festival energy.",
    "I put 'survivor-of-homework' on my resume, should I?",
    "Camera? Check. Headphones? Check. Energy? Too much, maybe.",
    "If my shots were loot, they'd be legendary.",
    "Mr. Walters made WWII feel like a whole movie — the discussions were wild.",
    "Ms. McGarry legit made me care about streams and soil tests — science rules.",
];

const REJECTIONS: &[&str] = &[
    "Himmy couldn't compute — get it, cause I'm trying to be a robot today? 🤖",
    "Oops, that one made my circuits hiccup. Try rephrasing?",
    "Error 404: Chill answer not found. Can you ask that another way?",
    "My brain's buffering. Say that again but like, simpler?",
    "Himmy's brain went on a snack break. Mind rewording that?",
    "Brain offline for homework. Ask me later? jk, try again lol.",
];

const PHOTO_TIPS: &[&str] = &[
    "Try shooting during golden hour and look for reflections on the river — instant mood.",
    "Use a small tripod for low-light; or bump ISO for motion shots.",
    "Look for leading lines (like bridges or streams) to draw the eye into the shot.",
];

const GREETING_LINES: &[&str] =
    &["I'm Himmy — I dig games, EDM, history, and taking photos around Patapsco."];

const PATAPSCO_PHOTO_LINES: &[&str] = &[
    "Patapsco Valley State Park is my go-to — those old bridges, the river, and the trees are \
     prime for moody shots at golden hour. If you want, I can talk composition or where I snag \
     my fav shots.",
];

const PHOTOGRAPHY_LINES: &[&str] = &[
    "Try shooting during golden hour and look for reflections on the river — instant mood.",
    "Bring a small tripod for low-light shots, or bump ISO if you gotta move fast.",
    "Frame with foreground interest (like branches or a bridge) for more depth.",
];
const PHOTOGRAPHY_LOCAL_NOD: &str = "Patapsco's trails are sick if you ever wanna scout spots.";

const SLED_LINES: &[&str] = &[
    "Oh man, the hill by St. John's Lane Elementary — absolute chaos in winter, we loved it.",
    "We used to sled that hill until someone yelled 'car!' (kidding, but it felt wild).",
    "Nostalgia hit hard — scraped knees, big laughs, and the best hot chocolate after.",
];

const EDM_LINES: &[&str] = &[
    "I love them all — from chill Flume to festival Martin Garrix bangers.",
    "My playlist goes Calvin Harris → Diplo → Skrillex → chill again — variety is the mood.",
    "Drop an artist and I'll tell you my fave track by them.",
];

const GAME_LINES: &[&str] = &[
    "Survev matches are peak stress and thrill, ngl. Clutch plays feel so good.",
    "If you wanna squad up, I can lowkey carry (or at least try).",
    "My strategy: third-person peek, then full send — works more than you'd think.",
];

const RECOMMEND_LINES: &[&str] = &[
    "Photo rec: try the Avalon area of Patapsco for river shots at sunset.",
    "EDM rec: add Flume's instrumental tracks for chill vibes, then switch to Martin Garrix for hype.",
    "Game rec: try a 2v2 Survev run if you want chaos and comebacks.",
];

const WW2_LINES: &[&str] = &[
    "WWII was intense to unpack — we traced causes, theaters, homefront shifts, and the aftermath.",
    "Mr. Walters had us do these timeline debates on the European and Pacific fronts — super deep.",
    "I remember the class discussion on how tech and logistics changed the war — totally fascinating.",
];
const WW2_SOURCE_OFFER: &str =
    "If you like primary sources, ask me for a cool primary doc or battle overview.";

const MR_WALTERS_LINES: &[&str] = &[
    "Mr. Walters' AP World class was my fav — his WWII units had the best debates and those mock \
     'diplomacy' roleplays. He pushed us to think about cause and effect, which I loved.",
];

const HISTORY_LINES: &[&str] = &[
    "I've been obsessed with WWII timelines and how events connected across theaters.",
    "History sucked me in because Mr. Walters made it feel like a story — especially WWII.",
    "I like tracing cause-and-effect in history; WW2 chapters were my favorite to dissect.",
];

const APENV_LINES: &[&str] = &[
    "Ms. McGarry's APES class was hands-on — we did stream surveys and soil tests that made Patapsco feel personal.",
    "She made ecology click for me; I still think about watershed stuff when I'm near the river.",
    "APES labs + a Patapsco field trip = instant respect for local ecosystems.",
];
const APENV_LAB_TIP: &str = "If you want a quick lab idea: try a simple macroinvertebrate kicknet survey to gauge stream health.";

fn reply(
    intent: Intent,
    lines: &[&str],
    opener_chance: f64,
    aside: Option<Aside>,
) -> Result<(Intent, IntentReply), HimmyError> {
    Ok((
        intent,
        IntentReply {
            lines: Pool::new(intent.as_str(), lines)?,
            opener_chance,
            aside,
        },
    ))
}

impl TemplatePools {
    /// The built-in pools.
    pub fn builtin() -> Result<Self, HimmyError> {
        let replies = [
            reply(Intent::Greeting, GREETING_LINES, 0.7, None)?,
            reply(Intent::Ww2, WW2_LINES, 0.6, Some(Aside::Always(WW2_SOURCE_OFFER.into())))?,
            reply(Intent::MrWalters, MR_WALTERS_LINES, 0.6, None)?,
            reply(Intent::ApEnv, APENV_LINES, 0.6, Some(Aside::Always(APENV_LAB_TIP.into())))?,
            reply(Intent::PatapscoPhoto, PATAPSCO_PHOTO_LINES, 1.0, None)?,
            reply(Intent::Sled, SLED_LINES, 0.6, None)?,
            reply(
                Intent::Photography,
                PHOTOGRAPHY_LINES,
                0.5,
                Some(Aside::Sometimes(PHOTOGRAPHY_LOCAL_NOD.into(), 0.6)),
            )?,
            reply(Intent::Edm, EDM_LINES, 0.6, None)?,
            reply(Intent::Game, GAME_LINES, 0.6, None)?,
            reply(Intent::History, HISTORY_LINES, 0.6, None)?,
            reply(Intent::Recommend, RECOMMEND_LINES, 0.6, None)?,
        ]
        .into_iter()
        .collect();

        Ok(Self {
            openers: Pool::new("openers", OPENERS)?,
            topics: Pool::new("topics", TOPICS)?,
            follow_ups: Pool::new("follow_ups", FOLLOW_UPS)?,
            quips: Pool::new("quips", QUIPS)?,
            rejections: Pool::new("rejections", REJECTIONS)?,
            photo_tips: Pool::new("photo_tips", PHOTO_TIPS)?,
            keywords: KeywordBook::builtin()?,
            replies,
        })
    }

    /// The built-in pools with configured extras appended.
    pub fn with_extras(extras: &PoolExtras) -> Result<Self, HimmyError> {
        let mut pools = Self::builtin()?;
        pools.openers.extend(extras.openers.as_slice())?;
        pools.topics.extend(extras.topics.as_slice())?;
        pools.follow_ups.extend(extras.follow_ups.as_slice())?;
        pools.quips.extend(extras.quips.as_slice())?;
        pools.rejections.extend(extras.rejections.as_slice())?;
        pools.photo_tips.extend(extras.photo_tips.as_slice())?;
        debug!(
            "Template pools ready: {} openers, {} topics, {} follow-ups, {} quips",
            pools.openers.len(),
            pools.topics.len(),
            pools.follow_ups.len(),
            pools.quips.len()
        );
        Ok(pools)
    }

    /// Reply recipe for a topical intent. `None` for `UnknownQuestion`.
    pub fn reply_for(&self, intent: Intent) -> Option<&IntentReply> {
        self.replies.get(&intent)
    }
}
