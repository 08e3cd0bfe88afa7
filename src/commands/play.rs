//! Interactive play mode
//!
//! Line-based game loop: one candidate per line, `:`-prefixed lines are commands.

use crate::core::normalize;
use crate::dictionary::Dictionary;
use crate::game::Game;
use crate::output::formatters::{length_badge, plural};
use crate::output::{write_alert, write_session_header, write_used_words};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayCommand {
    Quit,
    New,
    List,
    Help,
    Unknown,
}

impl PlayCommand {
    /// Parse a `:`-prefixed command; anything else is a candidate word
    fn parse(line: &str) -> Option<Self> {
        let command = line.trim().strip_prefix(':')?;
        Some(match command.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::New,
            "list" | "l" => Self::List,
            "help" | "h" | "?" => Self::Help,
            _ => Self::Unknown,
        })
    }
}

const HELP: &str = "Commands: ':new' new root word, ':list' show your words, ':quit' to exit";

/// Run the interactive game until the player quits or input ends
///
/// A session is started immediately; `:new` replaces it.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<D, R, I, W>(game: &mut Game<D, R>, mut input: I, output: &mut W) -> Result<(), String>
where
    D: Dictionary,
    R: Rng,
    I: BufRead,
    W: Write,
{
    play_loop(game, &mut input, output).map_err(|e| e.to_string())
}

fn play_loop<D, R, I, W>(game: &mut Game<D, R>, input: &mut I, out: &mut W) -> std::io::Result<()>
where
    D: Dictionary,
    R: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Word Scramble - Play Mode                   ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make as many real words as you can from the root word's letters.")?;
    writeln!(out, "{HELP}")?;

    let session = game.start_session();
    write_session_header(out, session)?;

    loop {
        write!(out, "Enter your word: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match PlayCommand::parse(&line) {
            Some(PlayCommand::Quit) => break,
            Some(PlayCommand::New) => {
                let session = game.start_session();
                writeln!(out, "\n🔄 New root word!")?;
                write_session_header(out, session)?;
            }
            Some(PlayCommand::List) => {
                if let Some(session) = game.session() {
                    write_used_words(out, session.used_words())?;
                }
            }
            Some(PlayCommand::Help) => writeln!(out, "{HELP}")?,
            Some(PlayCommand::Unknown) => {
                writeln!(out, "Unknown command '{}'. {HELP}", line.trim())?;
            }
            None => submit_line(game, &line, out)?,
        }
    }

    if let Some(session) = game.session() {
        let found = session.used_words().len();
        writeln!(
            out,
            "\n👋 Thanks for playing! You found {} {} for a score of {}.\n",
            found,
            plural(found, "word", "words"),
            session.score().to_string().bright_cyan().bold()
        )?;
    }

    Ok(())
}

fn submit_line<D, R, W>(game: &mut Game<D, R>, line: &str, out: &mut W) -> std::io::Result<()>
where
    D: Dictionary,
    R: Rng,
    W: Write,
{
    let verdict = game
        .submit(line)
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let Some(session) = game.session() else {
        return Ok(());
    };
    let candidate = normalize(line);

    if verdict.is_accepted() {
        writeln!(
            out,
            "✓ {} {}  score {}",
            candidate.green().bold(),
            length_badge(candidate.chars().count()),
            session.score()
        )?;
    } else if let Some(alert) = verdict.alert(&candidate, session.root_word().text()) {
        write_alert(out, &alert)?;
    }

    Ok(())
}
