//! Core domain types for the word scramble puzzle
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure and testable in isolation.

mod candidate;
mod letters;
mod root;
mod used;
mod verdict;

pub use candidate::normalize;
pub use letters::{LetterPool, can_spell};
pub use root::{FALLBACK_ROOT_WORD, RootWord, RootWordError};
pub use used::UsedWords;
pub use verdict::{Alert, Verdict};
