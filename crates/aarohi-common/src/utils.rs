//! Shared display helpers used by the page view models.

/// Builds the `tel:` link a call shortcut opens for a helpline number.
pub fn dial_link(number: &str) -> String {
    format!("tel:{}", number.trim())
}

/// Truncates card preview text to a maximum length with ellipsis.
///
/// The result never exceeds `max_length` characters; below four characters
/// there is no room for the ellipsis, so the text is cut hard.
pub fn truncate_text(input: &str, max_length: usize) -> String {
    if input.chars().count() <= max_length {
        input.to_string()
    } else if max_length <= 3 {
        input.chars().take(max_length).collect()
    } else {
        let cut: String = input.chars().take(max_length - 3).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dial_link() {
        assert_eq!(dial_link("1091"), "tel:1091");
        assert_eq!(dial_link(" 1800-233-3330 "), "tel:1800-233-3330");
    }

    #[test]
    fn test_truncate_text() {
        let input = "Every stitch taught me that we can rebuild our lives";
        let truncated = truncate_text(input, 20);
        assert_eq!(truncated, "Every stitch taug...");

        let short = "Short";
        assert_eq!(truncate_text(short, 20), "Short");
    }

    #[test]
    fn test_truncate_text_never_exceeds_tiny_maximums() {
        assert_eq!(truncate_text("abcdef", 3), "abc");
        assert_eq!(truncate_text("abcdef", 2), "ab");
        assert_eq!(truncate_text("abcdef", 0), "");
        for max in 0..10 {
            assert!(truncate_text("abcdefghij", max).chars().count() <= max);
        }
    }

    #[test]
    fn test_truncate_text_counts_chars_not_bytes() {
        // Devanagari text must not be cut mid-codepoint.
        let input = "होम";
        assert_eq!(truncate_text(input, 20), "होम");
    }
}
