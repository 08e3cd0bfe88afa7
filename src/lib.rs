//! Word Scramble
//!
//! A word puzzle: spell real words from the letters of a randomly chosen root word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{RootWord, Verdict};
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::game::{Session, WordValidator};
//!
//! let validator = WordValidator::new(WordListDictionary::embedded());
//! let mut session = Session::new(RootWord::new("silkworm").unwrap());
//!
//! assert_eq!(session.submit(&validator, "worms"), Verdict::Accepted);
//! assert_eq!(session.submit(&validator, "worms"), Verdict::AlreadyUsed);
//! assert_eq!(session.submit(&validator, "sill"), Verdict::NotPossible);
//! ```

// Core domain types
pub mod core;

// Real-word oracle
pub mod dictionary;

// Validation rules and session state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
