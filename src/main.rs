//! Word Scramble - CLI
//!
//! Spell real words from the letters of a random root word.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use word_scramble::{
    commands::{check_word, find_hints, print_survey_statistics, run_play, run_survey},
    core::{RootWord, UsedWords},
    dictionary::{DEFAULT_LANGUAGE, WordListDictionary},
    game::{Game, StartWords, WordValidator, choose_root_word, load_start_words},
    output::{print_check_result, print_hints_result},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell real words from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start words: path to a newline-separated file (default: embedded list)
    #[arg(short = 's', long, global = true)]
    start_words: Option<PathBuf>,

    /// Dictionary: path to a newline-separated word list (default: embedded English)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Language tag of the dictionary
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for root word selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Check a single word against a root word
    Check {
        /// The candidate word
        word: String,

        /// Root word (default: random start word)
        #[arg(short, long)]
        root: Option<String>,

        /// Words already accepted, comma separated
        #[arg(short, long, value_delimiter = ',')]
        used: Vec<String>,
    },

    /// List the dictionary words hidden in a root word
    Hints {
        /// Root word (default: random start word)
        #[arg(short, long)]
        root: Option<String>,

        /// Maximum number of words to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Count playable words for every start word
    Survey {
        /// Limit number of start words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary selected by the -d flag
fn load_dictionary(path: Option<&PathBuf>, language: &str) -> Result<WordListDictionary> {
    match path {
        Some(path) => WordListDictionary::from_file(path, language)
            .with_context(|| format!("Could not load dictionary from {}", path.display())),
        None => {
            if !language.eq_ignore_ascii_case(DEFAULT_LANGUAGE) {
                bail!(
                    "The embedded dictionary only covers '{DEFAULT_LANGUAGE}'; pass --dictionary for '{language}'"
                );
            }
            Ok(WordListDictionary::embedded())
        }
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Initialization phase: a missing start-word resource stops here
    let source = cli
        .start_words
        .clone()
        .map_or(StartWords::Embedded, StartWords::File);
    let start_words = load_start_words(&source).context("Cannot start a game")?;
    let dictionary = load_dictionary(cli.dictionary.as_ref(), &cli.language)?;
    info!(
        "{} start words, {} dictionary words",
        start_words.len(),
        dictionary.len()
    );

    let mut rng = build_rng(cli.seed);
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let validator = WordValidator::new(dictionary).with_language(cli.language);
            let mut game = Game::new(validator, start_words, rng);
            let stdin = io::stdin();
            run_play(&mut game, stdin.lock(), &mut io::stdout()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { word, root, used } => {
            let root = resolve_root(root.as_deref(), &start_words, &mut rng)?;
            let used: UsedWords = used.iter().collect();
            let validator = WordValidator::new(dictionary).with_language(cli.language);
            let result = check_word(&word, &root, &used, &validator);
            print_check_result(&result);
            Ok(())
        }
        Commands::Hints { root, limit } => {
            let root = resolve_root(root.as_deref(), &start_words, &mut rng)?;
            let words: Vec<&str> = dictionary.words().collect();
            let result = find_hints(&root, &words, limit);
            print_hints_result(&result);
            Ok(())
        }
        Commands::Survey { limit } => {
            let words: Vec<&str> = dictionary.words().collect();
            let stats = run_survey(&start_words, &words, limit);
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

/// Use the root given on the command line, or pick one like a new session would
fn resolve_root(root: Option<&str>, start_words: &[String], rng: &mut StdRng) -> Result<RootWord> {
    match root {
        Some(text) => RootWord::new(text).with_context(|| format!("Invalid root word '{text}'")),
        None => {
            let root = choose_root_word(start_words, rng);
            debug!("picked root word '{root}'");
            Ok(root)
        }
    }
}
