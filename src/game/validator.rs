//! Candidate validation
//!
//! Rules are applied in a fixed order and only the first failing one is reported.

use crate::core::{RootWord, UsedWords, Verdict, can_spell, normalize};
use crate::dictionary::{DEFAULT_LANGUAGE, Dictionary};

/// Classifies candidates against a root word and the words already accepted
///
/// Holds no session state; the same validator serves every session.
#[derive(Debug, Clone)]
pub struct WordValidator<D: Dictionary> {
    dictionary: D,
    language: String,
}

impl<D: Dictionary> WordValidator<D> {
    /// Create a validator checking real words in the default language (`en`)
    pub fn new(dictionary: D) -> Self {
        Self {
            dictionary,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Use a different language tag for the real-word check
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Classify a raw candidate
    ///
    /// Order: empty, already used, spellable from the root, recognized by the dictionary.
    /// Never mutates its inputs, so repeated calls give identical results.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{RootWord, UsedWords, Verdict};
    /// use word_scramble::dictionary::WordListDictionary;
    /// use word_scramble::game::WordValidator;
    ///
    /// let validator = WordValidator::new(WordListDictionary::embedded());
    /// let root = RootWord::new("silkworm").unwrap();
    /// let used = UsedWords::new();
    ///
    /// assert_eq!(validator.classify(" Silk ", &root, &used), Verdict::Accepted);
    /// assert_eq!(validator.classify("sill", &root, &used), Verdict::NotPossible);
    /// ```
    pub fn classify(&self, candidate: &str, root: &RootWord, used: &UsedWords) -> Verdict {
        let word = normalize(candidate);

        if word.is_empty() {
            return Verdict::Empty;
        }

        if used.contains(&word) {
            return Verdict::AlreadyUsed;
        }

        if !can_spell(&word, root.text()) {
            return Verdict::NotPossible;
        }

        if !self.dictionary.recognizes(&word, &self.language) {
            return Verdict::NotReal;
        }

        Verdict::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    fn setup() -> (WordValidator<WordListDictionary>, RootWord) {
        let dictionary = WordListDictionary::from_words(
            ["silk", "worm", "worms", "milk", "sill", "zebra", "silkworm", "i", "wok"],
            "en",
        );
        (
            WordValidator::new(dictionary),
            RootWord::new("silkworm").unwrap(),
        )
    }

    #[test]
    fn accepts_valid_word() {
        let (validator, root) = setup();
        assert_eq!(
            validator.classify("silk", &root, &UsedWords::new()),
            Verdict::Accepted
        );
    }

    #[test]
    fn normalizes_before_checking() {
        let (validator, root) = setup();
        assert_eq!(
            validator.classify("  WoRmS\n", &root, &UsedWords::new()),
            Verdict::Accepted
        );
    }

    #[test]
    fn empty_regardless_of_state() {
        let (validator, root) = setup();
        let used: UsedWords = ["silk", "worm"].into_iter().collect();

        for blank in ["", "   ", "\n", "\t \r\n"] {
            assert_eq!(validator.classify(blank, &root, &used), Verdict::Empty);
            assert_eq!(
                validator.classify(blank, &root, &UsedWords::new()),
                Verdict::Empty
            );
        }
    }

    #[test]
    fn already_used_is_case_and_space_insensitive() {
        let (validator, root) = setup();
        let used: UsedWords = ["silk"].into_iter().collect();

        assert_eq!(validator.classify("silk", &root, &used), Verdict::AlreadyUsed);
        assert_eq!(validator.classify(" SILK ", &root, &used), Verdict::AlreadyUsed);
    }

    #[test]
    fn already_used_reported_before_other_rules() {
        let (validator, root) = setup();
        // "zebra" could never be spelled; the reuse rule still wins
        let used: UsedWords = ["zebra"].into_iter().collect();
        assert_eq!(validator.classify("zebra", &root, &used), Verdict::AlreadyUsed);
    }

    #[test]
    fn not_possible_respects_multiplicity() {
        let (validator, root) = setup();
        assert_eq!(
            validator.classify("sill", &root, &UsedWords::new()),
            Verdict::NotPossible
        );
    }

    #[test]
    fn not_possible_missing_letters() {
        let (validator, root) = setup();
        assert_eq!(
            validator.classify("zebra", &root, &UsedWords::new()),
            Verdict::NotPossible
        );
    }

    #[test]
    fn spellable_nonsense_defers_to_dictionary() {
        let (validator, root) = setup();
        // every letter of "wrom" is available, so only the dictionary rejects it
        assert_eq!(
            validator.classify("wrom", &root, &UsedWords::new()),
            Verdict::NotReal
        );
    }

    #[test]
    fn spellable_word_is_never_not_possible() {
        let (validator, root) = setup();
        assert_ne!(
            validator.classify("silk", &root, &UsedWords::new()),
            Verdict::NotPossible
        );
    }

    #[test]
    fn classify_is_repeatable() {
        let (validator, root) = setup();
        let used: UsedWords = ["worm"].into_iter().collect();
        let snapshot = used.clone();

        for candidate in ["silk", "worm", "sill", "wrom", ""] {
            let first = validator.classify(candidate, &root, &used);
            let second = validator.classify(candidate, &root, &used);
            assert_eq!(first, second);
        }
        assert_eq!(used, snapshot);
    }

    #[test]
    fn root_word_itself_is_accepted() {
        // Current behavior: nothing excludes the root word as a guess
        let (validator, root) = setup();
        assert_eq!(
            validator.classify("silkworm", &root, &UsedWords::new()),
            Verdict::Accepted
        );
    }

    #[test]
    fn single_letter_word_is_accepted() {
        // Current behavior: no minimum length
        let (validator, root) = setup();
        assert_eq!(
            validator.classify("I", &root, &UsedWords::new()),
            Verdict::Accepted
        );
    }

    #[test]
    fn embedded_dictionary_accepts_inflected_words() {
        let validator = WordValidator::new(WordListDictionary::embedded());
        let cases = [
            ("silkworm", ["rims", "kilos", "roil", "silks"]),
            ("baseball", ["bales", "labs", "sable", "babes"]),
        ];

        for (root, words) in cases {
            let root = RootWord::new(root).unwrap();
            for word in words {
                assert_eq!(
                    validator.classify(word, &root, &UsedWords::new()),
                    Verdict::Accepted,
                    "'{word}' from '{root}'"
                );
            }
        }
    }

    #[test]
    fn language_mismatch_is_not_real() {
        let (validator, root) = setup();
        let validator = validator.with_language("fr");
        assert_eq!(validator.language(), "fr");
        assert_eq!(
            validator.classify("silk", &root, &UsedWords::new()),
            Verdict::NotReal
        );
    }
}
