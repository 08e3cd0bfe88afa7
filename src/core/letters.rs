//! Letter multiset used for the spellability rule
//!
//! Each letter instance of the root word may be consumed at most once; order is irrelevant.

use rustc_hash::FxHashMap;

/// Remaining letters of a root word
///
/// Letters are Unicode scalar values (`char`), not grapheme clusters: a decomposed
/// accented letter such as `e` + U+0301 takes two slots. The bundled word lists are
/// plain ASCII, so this only matters for custom dictionaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool holding every letter instance of `word`
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Consume one instance of `letter`
    ///
    /// Returns `false` (leaving the pool untouched) if no instance is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// How many instances of `letter` are still available
    #[inline]
    #[must_use]
    pub fn remaining(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total letters left in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Check whether `candidate` can be spelled from the letters of `root`
///
/// Walks the candidate letter by letter and stops at the first letter the pool
/// cannot supply.
///
/// # Examples
/// ```
/// use word_scramble::core::can_spell;
///
/// assert!(can_spell("silk", "silkworm"));
/// assert!(!can_spell("sill", "silkworm")); // only one 'l'
/// ```
#[must_use]
pub fn can_spell(candidate: &str, root: &str) -> bool {
    let mut pool = LetterPool::new(root);
    candidate.chars().all(|letter| pool.take(letter))
}
