//! # Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The interactive session, and what `himmy` runs with no subcommand. Prints the
//! banner, then repeats prompt, read, reply until the user leaves.
//!
//! ## Architecture
//!
//! The loop reads stdin line by line with `tokio` and races each read against
//! Ctrl+C using `tokio::select!`. A session ends with the farewell line on:
//! - an exit word (`exit`, `quit` by default), compared case-insensitively
//! - end of input
//! - Ctrl+C
//!
//! Blank lines are skipped without a reply. Every other line gets exactly one
//! reply line from `Responder::process_turn`. Conversation state lives for the
//! whole loop, so a `!quiz` question is answered on the next line.
//!
//! `run_chat` takes its reader, writer, and interrupt future as parameters so
//! the loop can be driven from tests without a terminal.
//!
//! ## Examples
//!
//! ```bash
//! himmy
//! himmy --seed 42 chat
//! printf '!quiz\n1945\nexit\n' | himmy chat
//! ```
//!
use super::{prepare_session, Session, SessionOptions};
use anyhow::Context;
use clap::Args;
use himmy::bot::state::ConversationState;
use himmy::core::error::{HimmyError, Result};
use himmy::core::templating::{render_session_lines, SessionLines};
use std::future::Future;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

#[derive(Args, Debug, Clone, Default)]
pub struct ChatArgs {
    /// Skip the banner line at startup.
    #[arg(long)]
    pub no_banner: bool,
}

pub async fn handle_chat(args: ChatArgs, options: &SessionOptions) -> Result<()> {
    let session = prepare_session(options)?;
    let lines = render_session_lines(&session.config.session)?;
    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();
    let interrupt = async {
        // If the handler cannot be installed, Ctrl+C falls back to the default kill.
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };
    run_chat(session, &lines, !args.no_banner, reader, writer, interrupt).await
}

/// Why a chat session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatEnd {
    ExitWord,
    EndOfInput,
    Interrupted,
}

/// Runs the read-reply loop until an exit word, end of input, or `interrupt` fires.
pub async fn run_chat<R, W, F>(
    mut session: Session,
    lines: &SessionLines,
    show_banner: bool,
    reader: R,
    mut writer: W,
    interrupt: F,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    F: Future<Output = ()>,
{
    let mut input_lines = reader.lines();
    let mut state = ConversationState::new();
    tokio::pin!(interrupt);

    if show_banner {
        write_line(&mut writer, &lines.banner).await?;
    }

    let end = loop {
        write_text(&mut writer, &session.config.session.prompt).await?;

        let next = tokio::select! {
            line = input_lines.next_line() => line
                .map_err(|e| HimmyError::Io(format!("Failed to read input: {}", e)))?,
            _ = &mut interrupt => break ChatEnd::Interrupted,
        };
        let Some(line) = next else {
            break ChatEnd::EndOfInput;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if is_exit_word(input, &session.config.session.exit_words) {
            break ChatEnd::ExitWord;
        }

        let reply = session
            .responder
            .process_turn(input, &mut state, &mut session.rng);
        write_line(&mut writer, &reply).await?;
    };

    info!("Chat session ended: {:?}", end);
    match end {
        // The prompt is still on screen, so start the farewell on a fresh line.
        ChatEnd::EndOfInput | ChatEnd::Interrupted => write_text(&mut writer, "\n").await?,
        ChatEnd::ExitWord => {}
    }
    write_line(&mut writer, &lines.farewell).await?;
    Ok(())
}

fn is_exit_word(input: &str, exit_words: &[String]) -> bool {
    let lowered = input.to_lowercase();
    exit_words
        .iter()
        .any(|word| word.trim().to_lowercase() == lowered)
}

async fn write_text<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<()> {
    writer
        .write_all(text.as_bytes())
        .await
        .context("Failed to write to stdout")?;
    writer.flush().await.context("Failed to flush stdout")?;
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<()> {
    debug!("Writing line: {}", text);
    write_text(writer, &format!("{}\n", text)).await
}
