//! Session state and start-up
//!
//! A session is one play-through: a fixed root word and the words accepted so far.

use super::WordValidator;
use crate::core::{RootWord, UsedWords, Verdict};
use crate::dictionary::Dictionary;
use crate::wordlists::{START_WORDS, loader};
use log::{debug, info};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Where the start-word list comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StartWords {
    /// List compiled into the binary
    #[default]
    Embedded,
    /// Newline-separated file read at start-up
    File(PathBuf),
}

/// Errors that prevent a session from running
#[derive(Debug)]
pub enum SessionError {
    /// The start-word resource could not be loaded at all
    InitializationFailure { path: PathBuf, source: io::Error },
    /// A candidate was submitted before any session was started
    NoActiveSession,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitializationFailure { path, source } => write!(
                f,
                "Could not load start words from {}: {source}",
                path.display()
            ),
            Self::NoActiveSession => write!(f, "No session has been started"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InitializationFailure { source, .. } => Some(source),
            Self::NoActiveSession => None,
        }
    }
}

/// Load the start-word list
///
/// An empty list is fine (sessions fall back to the default root word); an unreadable
/// resource is not.
///
/// # Errors
///
/// Returns `SessionError::InitializationFailure` if the file cannot be read.
pub fn load_start_words(source: &StartWords) -> Result<Vec<String>, SessionError> {
    match source {
        StartWords::Embedded => Ok(loader::words_from_slice(START_WORDS)),
        StartWords::File(path) => {
            loader::load_from_file(path).map_err(|source| SessionError::InitializationFailure {
                path: path.clone(),
                source,
            })
        }
    }
}

/// Pick a root word uniformly from `word_list`
///
/// Falls back to the default root word when the list is empty or the picked entry is
/// blank.
pub fn choose_root_word<R: Rng + ?Sized>(word_list: &[String], rng: &mut R) -> RootWord {
    word_list
        .choose(rng)
        .and_then(|word| RootWord::new(word).ok())
        .unwrap_or_else(|| {
            debug!("no usable start word, falling back");
            RootWord::fallback()
        })
}

/// State of one play-through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root: RootWord,
    used: UsedWords,
}

impl Session {
    /// Begin a session on a known root word
    #[must_use]
    pub fn new(root: RootWord) -> Self {
        Self {
            root,
            used: UsedWords::new(),
        }
    }

    /// Begin a session on a randomly chosen root word
    pub fn start<R: Rng + ?Sized>(word_list: &[String], rng: &mut R) -> Self {
        let root = choose_root_word(word_list, rng);
        info!("session started on root word '{root}'");
        Self::new(root)
    }

    #[must_use]
    pub const fn root_word(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words, newest first
    #[must_use]
    pub const fn used_words(&self) -> &UsedWords {
        &self.used
    }

    /// Total letters across all accepted words
    #[must_use]
    pub fn score(&self) -> usize {
        self.used.total_letters()
    }

    /// Classify a candidate without recording it
    pub fn classify<D: Dictionary>(&self, validator: &WordValidator<D>, candidate: &str) -> Verdict {
        validator.classify(candidate, &self.root, &self.used)
    }

    /// Classify a candidate and record it if accepted
    pub fn submit<D: Dictionary>(
        &mut self,
        validator: &WordValidator<D>,
        candidate: &str,
    ) -> Verdict {
        let verdict = self.classify(validator, candidate);
        if verdict.is_accepted() {
            self.used.accept(candidate);
        }
        verdict
    }
}
