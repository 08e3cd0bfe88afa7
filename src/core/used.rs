//! Accepted-word history of a session

use super::normalize;
use std::collections::VecDeque;

/// Words accepted so far, newest first
///
/// Grows only by prepending; a new session starts from an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedWords {
    words: VecDeque<String>,
}

impl UsedWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted candidate at the front of the list
    ///
    /// The candidate is normalized first. No validation is performed here; callers
    /// only record words that were classified as accepted.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::UsedWords;
    ///
    /// let mut used = UsedWords::new();
    /// used.accept("silk");
    /// used.accept(" Worms ");
    /// assert_eq!(used.first(), Some("worms"));
    /// assert_eq!(used.len(), 2);
    /// ```
    pub fn accept(&mut self, candidate: &str) {
        self.words.push_front(normalize(candidate));
    }

    /// Exact-match membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Most recently accepted word
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.words.front().map(String::as_str)
    }

    /// Iterate newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of the letter counts of every accepted word
    #[must_use]
    pub fn total_letters(&self) -> usize {
        self.words.iter().map(|w| w.chars().count()).sum()
    }
}

impl<S: AsRef<str>> FromIterator<S> for UsedWords {
    /// Build a history from words given oldest first
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut used = Self::new();
        for word in iter {
            used.accept(word.as_ref());
        }
        used
    }
}
