//! Single-word check command
//!
//! Classifies one candidate against a root word and an optional history.

use crate::core::{Alert, RootWord, UsedWords, Verdict, normalize};
use crate::dictionary::Dictionary;
use crate::game::WordValidator;

/// Result of checking a word
pub struct CheckResult {
    pub candidate: String,
    pub root: String,
    pub verdict: Verdict,
    pub alert: Option<Alert>,
}

/// Classify `word` against `root`, treating `used` as already accepted
pub fn check_word<D: Dictionary>(
    word: &str,
    root: &RootWord,
    used: &UsedWords,
    validator: &WordValidator<D>,
) -> CheckResult {
    let candidate = normalize(word);
    let verdict = validator.classify(word, root, used);
    let alert = verdict.alert(&candidate, root.text());

    CheckResult {
        candidate,
        root: root.text().to_string(),
        verdict,
        alert,
    }
}
