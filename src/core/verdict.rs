//! Classification outcomes and their player-facing alerts

use std::fmt;

/// Result of classifying a candidate against a root word and history
///
/// Rejections are ordinary values: they are shown to the player and never propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Passed every rule
    Accepted,
    /// Nothing left after normalization; ignored silently
    Empty,
    /// Already accepted this session
    AlreadyUsed,
    /// Cannot be spelled from the root word's letters
    NotPossible,
    /// Not recognized by the dictionary
    NotReal,
}

/// A `(title, message)` pair presented for a rejected candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Rejections the player should be told about
    #[inline]
    #[must_use]
    pub const fn is_rejection(self) -> bool {
        matches!(self, Self::AlreadyUsed | Self::NotPossible | Self::NotReal)
    }

    /// Build the alert for this verdict
    ///
    /// `Accepted` and `Empty` produce no feedback.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Verdict;
    ///
    /// let alert = Verdict::NotPossible.alert("sill", "silkworm").unwrap();
    /// assert_eq!(alert.title, "Word not possible");
    /// assert!(Verdict::Empty.alert("", "silkworm").is_none());
    /// ```
    #[must_use]
    pub fn alert(self, candidate: &str, root: &str) -> Option<Alert> {
        let (title, message) = match self {
            Self::Accepted | Self::Empty => return None,
            Self::AlreadyUsed => ("Word used already", "Be more original".to_string()),
            Self::NotPossible => (
                "Word not possible",
                format!("You cannot spell '{candidate}' from '{root}'"),
            ),
            // Names the rejected candidate, not the root word
            Self::NotReal => (
                "Word not recognized",
                format!("'{candidate}' is not a part of the english dictionary"),
            ),
        };

        Some(Alert {
            title: title.to_string(),
            message,
        })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Accepted => "accepted",
            Self::Empty => "empty",
            Self::AlreadyUsed => "already used",
            Self::NotPossible => "not possible",
            Self::NotReal => "not real",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
