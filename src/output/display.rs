//! Display functions for sessions and command results

use super::formatters::{create_progress_bar, length_badge, plural, spaced_letters};
use crate::commands::{CheckResult, HintsResult};
use crate::core::{Alert, UsedWords};
use crate::game::Session;
use colored::Colorize;
use std::io::{self, Write};

/// Write the banner for a new session
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_session_header<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let root = session.root_word();
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Root word: {}  ({} letters)",
        spaced_letters(root.text()).bright_yellow().bold(),
        root.letter_count()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Write the accepted words, newest first, each with its length badge
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_used_words<W: Write>(out: &mut W, used: &UsedWords) -> io::Result<()> {
    if used.is_empty() {
        return writeln!(out, "  No words yet.");
    }

    for word in used.iter() {
        writeln!(out, "  {} {}", length_badge(word.chars().count()), word)?;
    }

    writeln!(
        out,
        "  {} {}, score {}",
        used.len(),
        plural(used.len(), "word", "words"),
        used.total_letters().to_string().bright_cyan().bold()
    )
}

/// Write a rejection alert
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_alert<W: Write>(out: &mut W, alert: &Alert) -> io::Result<()> {
    writeln!(out, "❌ {}", alert.title.red().bold())?;
    writeln!(out, "   {}", alert.message)
}

/// Print the result of checking a single word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking: {} against {}",
        result.candidate.bright_white().bold(),
        result.root.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.alert {
        Some(alert) => {
            println!("\n❌ {}", alert.title.red().bold());
            println!("   {}", alert.message);
        }
        None if result.verdict.is_accepted() => {
            println!(
                "\n{} {}",
                "✅ Accepted".green().bold(),
                length_badge(result.candidate.chars().count())
            );
        }
        None => println!("\nNothing to check."),
    }
}

/// Print the words that can be made from a root word
pub fn print_hints_result(result: &HintsResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Words hidden in {}",
        spaced_letters(&result.root).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\nNo dictionary words can be made from these letters.");
        return;
    }

    let longest = result.words.first().map_or(0, |w| w.chars().count());
    let mut current_length = usize::MAX;
    for word in &result.words {
        let length = word.chars().count();
        if length != current_length {
            current_length = length;
            println!(
                "\n{} {}",
                length_badge(length),
                create_progress_bar(length as f64, longest as f64, 20).bright_black()
            );
        }
        println!("  {word}");
    }

    println!();
    println!(
        "{} {} shown of {} found, worth {} points",
        result.words.len(),
        plural(result.words.len(), "word", "words"),
        result.total_found,
        result.max_score.to_string().bright_cyan().bold()
    );
}
