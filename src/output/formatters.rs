//! Output formatting utilities

/// Circled-number badge for a word length, as shown next to accepted words
///
/// Lengths 1 to 20 map to ① .. ⑳; anything else falls back to `(n)`.
#[must_use]
pub fn length_badge(length: usize) -> String {
    match length {
        1..=20 => {
            // ① is U+2460; the next nineteen code points are ② .. ⑳
            let offset = u32::try_from(length - 1).unwrap_or(0);
            char::from_u32(0x2460 + offset).map_or_else(|| format!("({length})"), String::from)
        }
        _ => format!("({length})"),
    }
}

/// Pick the singular or plural form of a noun
#[must_use]
pub const fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Spell a word with spaces between its letters, uppercased
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_small_lengths() {
        assert_eq!(length_badge(1), "①");
        assert_eq!(length_badge(5), "⑤");
        assert_eq!(length_badge(20), "⑳");
    }

    #[test]
    fn badge_out_of_range() {
        assert_eq!(length_badge(0), "(0)");
        assert_eq!(length_badge(21), "(21)");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "word", "words"), "word");
        assert_eq!(plural(0, "word", "words"), "words");
        assert_eq!(plural(3, "word", "words"), "words");
    }

    #[test]
    fn spaced_letters_uppercases() {
        assert_eq!(spaced_letters("silk"), "S I L K");
        assert_eq!(spaced_letters(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
