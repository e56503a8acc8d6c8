//! # Classify Command
//!
//! File: cli/src/commands/classify.rs
//! Author: Christi Mahu
//!
//! `himmy classify <text>...` prints the intent label the rule chain picks for
//! the text, or `none`. Commands are not parsed here; `!rec` is just text.
//!
use super::{prepare_session, SessionOptions};
use clap::Args;
use himmy::bot::intent::Intent;
use himmy::core::error::Result;

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Text to classify. May be empty.
    #[arg(num_args = 0..)]
    pub text: Vec<String>,
}

pub async fn handle_classify(args: ClassifyArgs, options: &SessionOptions) -> Result<()> {
    let session = prepare_session(options)?;
    let input = args.text.join(" ");
    println!("{}", label(session.responder.classify(&input)));
    Ok(())
}

fn label(intent: Option<Intent>) -> &'static str {
    intent.map_or("none", Intent::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(label(Some(Intent::PatapscoPhoto)), "patapsco_photo");
        assert_eq!(label(None), "none");
    }
}
