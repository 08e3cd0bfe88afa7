//! Hints command
//!
//! Lists every dictionary word that can be spelled from a root word.

use crate::core::{RootWord, can_spell};
use rayon::prelude::*;

/// Words hidden in a root word
pub struct HintsResult {
    pub root: String,
    /// Longest first, then alphabetical; truncated to the requested limit
    pub words: Vec<String>,
    pub total_found: usize,
    /// Score for finding every word
    pub max_score: usize,
}

/// Dictionary words spellable from `root`, longest first then alphabetical
///
/// The root word itself is included when the dictionary knows it.
pub fn find_playable(root: &RootWord, dictionary_words: &[&str]) -> Vec<String> {
    let mut words: Vec<String> = dictionary_words
        .par_iter()
        .filter(|word| can_spell(word, root.text()))
        .map(|word| (*word).to_string())
        .collect();

    words.sort_unstable_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    words.dedup();
    words
}

/// Build the hint listing for `root`
pub fn find_hints(root: &RootWord, dictionary_words: &[&str], limit: Option<usize>) -> HintsResult {
    let mut words = find_playable(root, dictionary_words);
    let total_found = words.len();
    let max_score = words.iter().map(|w| w.chars().count()).sum();

    if let Some(limit) = limit {
        words.truncate(limit);
    }

    HintsResult {
        root: root.text().to_string(),
        words,
        total_found,
        max_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY_WORDS;

    const WORDS: &[&str] = &["silk", "worm", "worms", "sill", "zebra", "milk", "i", "silkworm"];

    fn silkworm() -> RootWord {
        RootWord::new("silkworm").unwrap()
    }

    #[test]
    fn playable_excludes_unspellable() {
        let words = find_playable(&silkworm(), WORDS);
        assert!(!words.contains(&"sill".to_string()));
        assert!(!words.contains(&"zebra".to_string()));
    }

    #[test]
    fn playable_sorted_longest_first() {
        let words = find_playable(&silkworm(), WORDS);
        assert_eq!(words, vec!["silkworm", "worms", "milk", "silk", "worm", "i"]);
    }

    #[test]
    fn hints_limit_keeps_totals() {
        let result = find_hints(&silkworm(), WORDS, Some(2));
        assert_eq!(result.words, vec!["silkworm", "worms"]);
        assert_eq!(result.total_found, 6);
        assert_eq!(result.max_score, 8 + 5 + 4 + 4 + 4 + 1);
    }

    #[test]
    fn hints_without_limit() {
        let result = find_hints(&silkworm(), WORDS, None);
        assert_eq!(result.words.len(), result.total_found);
        assert_eq!(result.root, "silkworm");
    }

    #[test]
    fn hints_from_embedded_dictionary() {
        let result = find_hints(&silkworm(), DICTIONARY_WORDS, None);
        assert!(result.words.contains(&"worms".to_string()));
        assert!(result.words.contains(&"silk".to_string()));
        assert!(!result.words.contains(&"sill".to_string()));
    }

    #[test]
    fn hints_none_found() {
        let root = RootWord::new("xyz").unwrap();
        let result = find_hints(&root, WORDS, None);
        assert!(result.words.is_empty());
        assert_eq!(result.max_score, 0);
    }
}
