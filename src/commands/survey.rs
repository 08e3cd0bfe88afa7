//! Survey all start words - how playable is each root?
//!
//! Counts, for every start word, the dictionary words that can be spelled from it.

use super::hints::find_playable;
use crate::core::RootWord;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Playability of a single root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSurvey {
    pub root: String,
    pub playable: usize,
    pub max_score: usize,
}

/// Statistics from surveying the start words
#[derive(Debug)]
pub struct SurveyStatistics {
    pub roots_surveyed: usize,
    pub average_playable: f64,
    pub richest: Vec<RootSurvey>,
    pub poorest: Vec<RootSurvey>,
    pub total_time: Duration,
}

/// How many entries to keep at each end of the ranking
const RANKING_SIZE: usize = 5;

/// Survey the start words (or the first `limit` of them)
///
/// Blank entries are skipped.
pub fn run_survey(
    start_words: &[String],
    dictionary_words: &[&str],
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<RootWord> = start_words
        .iter()
        .filter_map(|w| RootWord::new(w).ok())
        .take(limit.unwrap_or(start_words.len()))
        .collect();

    println!("🔎 Surveying {} root words...", roots.len());

    let pb = ProgressBar::new(roots.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut results: Vec<RootSurvey> = Vec::with_capacity(roots.len());

    for root in &roots {
        pb.set_message(root.text().to_string());
        let playable = find_playable(root, dictionary_words);
        results.push(RootSurvey {
            root: root.text().to_string(),
            playable: playable.len(),
            max_score: playable.iter().map(|w| w.chars().count()).sum(),
        });
        pb.inc(1);
    }

    pb.finish_with_message("done");

    summarize(results, start.elapsed())
}

fn summarize(mut results: Vec<RootSurvey>, total_time: Duration) -> SurveyStatistics {
    let roots_surveyed = results.len();
    let average_playable = if roots_surveyed == 0 {
        0.0
    } else {
        results.iter().map(|r| r.playable).sum::<usize>() as f64 / roots_surveyed as f64
    };

    results.sort_by(|a, b| b.playable.cmp(&a.playable).then_with(|| a.root.cmp(&b.root)));

    let richest: Vec<RootSurvey> = results.iter().take(RANKING_SIZE).cloned().collect();
    let poorest: Vec<RootSurvey> = results.iter().rev().take(RANKING_SIZE).cloned().collect();

    SurveyStatistics {
        roots_surveyed,
        average_playable,
        richest,
        poorest,
        total_time,
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!("{}", " Start Word Survey ".bright_white().bold());
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Roots surveyed:   {}",
        stats.roots_surveyed.to_string().bright_white().bold()
    );
    println!(
        "  Average playable: {}",
        format!("{:.1}", stats.average_playable).bright_cyan().bold()
    );
    println!("  Time:             {:.2?}", stats.total_time);

    if !stats.richest.is_empty() {
        println!("\n  {}", "Richest roots:".green().bold());
        for entry in &stats.richest {
            println!(
                "    {:<12} {:>4} words  {:>5} points",
                entry.root, entry.playable, entry.max_score
            );
        }
    }

    if !stats.poorest.is_empty() {
        println!("\n  {}", "Poorest roots:".yellow().bold());
        for entry in &stats.poorest {
            println!(
                "    {:<12} {:>4} words  {:>5} points",
                entry.root, entry.playable, entry.max_score
            );
        }
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["silk", "worm", "ball", "base", "bass", "sale", "sill"];

    fn roots(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn survey_counts_playable_words() {
        let stats = run_survey(&roots(&["silkworm", "baseball"]), WORDS, None);

        assert_eq!(stats.roots_surveyed, 2);
        assert_eq!(stats.richest[0].root, "baseball");
        assert_eq!(stats.richest[0].playable, 3);
        assert_eq!(stats.poorest[0].root, "silkworm");
        assert_eq!(stats.poorest[0].playable, 2);
        assert!((stats.average_playable - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn survey_respects_limit() {
        let stats = run_survey(&roots(&["silkworm", "baseball"]), WORDS, Some(1));
        assert_eq!(stats.roots_surveyed, 1);
        assert_eq!(stats.richest[0].root, "silkworm");
    }

    #[test]
    fn survey_skips_blank_roots() {
        let stats = run_survey(&roots(&["", "  ", "silkworm"]), WORDS, None);
        assert_eq!(stats.roots_surveyed, 1);
    }

    #[test]
    fn survey_empty() {
        let stats = run_survey(&[], WORDS, None);
        assert_eq!(stats.roots_surveyed, 0);
        assert!(stats.richest.is_empty());
        assert!(stats.poorest.is_empty());
        assert!(stats.average_playable.abs() < f64::EPSILON);
    }

    #[test]
    fn summarize_ranks_ties_alphabetically() {
        let results = vec![
            RootSurvey {
                root: "b".to_string(),
                playable: 1,
                max_score: 1,
            },
            RootSurvey {
                root: "a".to_string(),
                playable: 1,
                max_score: 1,
            },
        ];
        let stats = summarize(results, Duration::ZERO);
        assert_eq!(stats.richest[0].root, "a");
        assert_eq!(stats.poorest[0].root, "b");
    }
}
