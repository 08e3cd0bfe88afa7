//! Root word representation
//!
//! A `RootWord` is the session's fixed source of letters.

use std::fmt;

/// Root word used when no start word can be picked
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// The word every candidate of a session must be spelled from
///
/// Always lowercase and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord {
    text: String,
}

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootWordError {
    Empty,
}

impl fmt::Display for RootWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Root word must contain at least one letter"),
        }
    }
}

impl std::error::Error for RootWordError {}

impl RootWord {
    /// Create a new `RootWord`, lowercasing and trimming the input
    ///
    /// # Errors
    /// Returns `RootWordError::Empty` if nothing remains after trimming.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new(" SilkWorm ").unwrap();
    /// assert_eq!(root.text(), "silkworm");
    ///
    /// assert!(RootWord::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, RootWordError> {
        let text = super::normalize(text.as_ref());

        if text.is_empty() {
            return Err(RootWordError::Empty);
        }

        Ok(Self { text })
    }

    /// The fixed default root word
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_ROOT_WORD.to_string(),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the root word
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_creation_valid() {
        let root = RootWord::new("silkworm").unwrap();
        assert_eq!(root.text(), "silkworm");
        assert_eq!(root.letter_count(), 8);
    }

    #[test]
    fn root_creation_normalized() {
        assert_eq!(RootWord::new("SILKWORM").unwrap().text(), "silkworm");
        assert_eq!(RootWord::new("  silkworm\n").unwrap().text(), "silkworm");
    }

    #[test]
    fn root_creation_empty() {
        assert!(matches!(RootWord::new(""), Err(RootWordError::Empty)));
        assert!(matches!(RootWord::new(" \t "), Err(RootWordError::Empty)));
    }

    #[test]
    fn fallback_is_silkworm() {
        assert_eq!(RootWord::fallback().text(), FALLBACK_ROOT_WORD);
        assert_eq!(RootWord::fallback(), RootWord::new("silkworm").unwrap());
    }

    #[test]
    fn root_display() {
        let root = RootWord::new("baseball").unwrap();
        assert_eq!(format!("{root}"), "baseball");
    }

    #[test]
    fn root_equality_case_insensitive() {
        assert_eq!(RootWord::new("Notebook").unwrap(), RootWord::new("notebook").unwrap());
    }
}
