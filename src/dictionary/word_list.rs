//! Static word-list dictionary

use super::{DEFAULT_LANGUAGE, Dictionary};
use crate::wordlists::{DICTIONARY_WORDS, loader};
use log::debug;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Dictionary backed by an in-memory set of words for one language
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY_WORDS.iter().copied(), DEFAULT_LANGUAGE)
    }

    /// Build a dictionary from any word iterator
    ///
    /// Words are lowercased and trimmed; blank entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::from_words(["Silk", "worm"], "en");
    /// assert!(dictionary.recognizes("silk", "en"));
    /// assert!(!dictionary.recognizes("silk", "fr"));
    /// ```
    pub fn from_words<I, S>(words: I, language: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.to_string(),
            words,
        }
    }

    /// Load a one-word-per-line dictionary file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    pub fn from_file<P: AsRef<Path>>(path: P, language: &str) -> io::Result<Self> {
        let words = loader::load_from_file(path)?;
        let dictionary = Self::from_words(words, language);
        debug!(
            "dictionary '{}' holds {} distinct words",
            dictionary.language,
            dictionary.len()
        );
        Ok(dictionary)
    }

    /// Language tag this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every word in the dictionary, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordListDictionary {
    fn recognizes(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.words.contains(word)
    }
}
