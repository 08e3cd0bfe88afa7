//! Candidate input normalization

/// Normalize raw player input before validation
///
/// Lowercases the input and strips leading/trailing whitespace, including newlines.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Worms\n"), "worms");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize("SILK"), "silk");
        assert_eq!(normalize("SiLk"), "silk");
    }

    #[test]
    fn normalize_trims_whitespace_and_newlines() {
        assert_eq!(normalize("  silk  "), "silk");
        assert_eq!(normalize("\tsilk\r\n"), "silk");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize(" silk worm "), "silk worm");
    }

    #[test]
    fn normalize_blank_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }
}
