//! Dictionary oracle
//!
//! The real-word check sits behind the `Dictionary` trait so alternate word lists or
//! languages can be plugged in without touching the validator.

mod word_list;

pub use word_list::WordListDictionary;

/// Language tag used when none is given
pub const DEFAULT_LANGUAGE: &str = "en";

/// A capability that decides whether a word is a recognized dictionary word
pub trait Dictionary {
    /// Returns `true` if `word` (already lowercase) is a word of `language`
    fn recognizes(&self, word: &str, language: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn recognizes(&self, word: &str, language: &str) -> bool {
        (**self).recognizes(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn recognizes(&self, word: &str, language: &str) -> bool {
        (**self).recognizes(word, language)
    }
}
