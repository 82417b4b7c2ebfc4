//! Secondary splitting for chunks that remain over budget.
//!
//! Used by the assembler when a single section (or section plus overlap)
//! exceeds the tolerance limit. Prefers a paragraph break near
//! `chunk_size`, then a space, and finally cuts hard at `chunk_size`.

use crate::text::split_at_char;

/// Half-width of the window searched for a paragraph break.
pub const PARAGRAPH_WINDOW: usize = 200;

/// Half-width of the window searched for a space.
pub const WORD_WINDOW: usize = 50;

/// Split an over-budget string into a leading `chunk_part` and the
/// `remainder`, both trimmed.
///
/// The split point is the first `"\n\n"` starting in
/// `[chunk_size - 200, chunk_size + 200)`; failing that, the first `' '` in
/// `[chunk_size - 50, chunk_size + 50)`; failing that, `chunk_size` itself.
/// Windows are clamped to the string, and all positions are char indices.
pub fn split_oversize(current: &str, chunk_size: usize) -> (String, String) {
    let split = split_oversize_str(current, chunk_size);
    (split.head.to_string(), split.remainder.to_string())
}

/// Borrowed result of one oversize split.
pub(crate) struct OversizeSplit<'a> {
    pub head: &'a str,
    pub remainder: &'a str,
    /// Byte offset of `remainder` within the split input.
    pub remainder_start: usize,
}

/// Only the first `chunk_size + 201` chars are inspected, so a pass costs
/// O(chunk_size) however long `current` is.
pub(crate) fn split_oversize_str(current: &str, chunk_size: usize) -> OversizeSplit<'_> {
    let window: Vec<char> = current
        .chars()
        .take(chunk_size + PARAGRAPH_WINDOW + 1)
        .collect();
    let split_point = find_split_point(&window, chunk_size);
    let (head, tail) = split_at_char(current, split_point);
    let leading = tail.len() - tail.trim_start().len();
    OversizeSplit {
        head: head.trim(),
        remainder: tail.trim(),
        remainder_start: head.len() + leading,
    }
}

fn find_split_point(chars: &[char], chunk_size: usize) -> usize {
    let len = chars.len();
    let mut split_point = chunk_size;

    let start = chunk_size.saturating_sub(PARAGRAPH_WINDOW);
    let end = (chunk_size + PARAGRAPH_WINDOW).min(len);
    let paragraph_break = (start..end).find(|&i| i + 1 < len && chars[i..i + 2] == ['\n', '\n']);
    if let Some(i) = paragraph_break {
        split_point = i;
    }

    // A paragraph break found exactly at chunk_size still falls through to
    // the word search.
    if split_point == chunk_size {
        let start = chunk_size.saturating_sub(WORD_WINDOW);
        let end = (chunk_size + WORD_WINDOW).min(len);
        if let Some(i) = (start..end).find(|&i| chars[i] == ' ') {
            split_point = i;
        }
    }

    split_point
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaks_past_inspected_prefix_ignored() {
        // The only paragraph break sits well past chunk_size + 200.
        let text = format!("{}\n\n{}", "x".repeat(1_000), "y".repeat(10));
        let (part, rest) = split_oversize(&text, 100);
        assert_eq!(part, "x".repeat(100));
        assert_eq!(rest, format!("{}\n\n{}", "x".repeat(900), "y".repeat(10)));
    }

    #[test]
    fn test_remainder_start_skips_whitespace() {
        let text = format!("{}\n\n  {}", "a".repeat(90), "b".repeat(100));
        let split = split_oversize_str(&text, 100);
        assert_eq!(split.head, "a".repeat(90));
        assert_eq!(split.remainder, "b".repeat(100));
        assert_eq!(&text[split.remainder_start..], split.remainder);
    }

    #[test]
    fn test_prefers_paragraph_break() {
        // Paragraph break at index 90, spaces everywhere else.
        let text = format!("{}\n\n{}", "word ".repeat(18), "tail ".repeat(40));
        let (part, rest) = split_oversize(&text, 100);
        assert_eq!(part, "word ".repeat(18).trim());
        assert!(rest.starts_with("tail"));
    }

    #[test]
    fn test_first_paragraph_break_in_window_wins() {
        let text = format!("{}\n\n{}\n\n{}", "a".repeat(10), "b".repeat(10), "c".repeat(300));
        let (part, rest) = split_oversize(&text, 100);
        assert_eq!(part, "a".repeat(10));
        assert!(rest.starts_with(&"b".repeat(10)));
    }

    #[test]
    fn test_falls_back_to_space() {
        let text = format!("{} {}", "x".repeat(480), "y".repeat(200));
        let (part, rest) = split_oversize(&text, 500);
        assert_eq!(part, "x".repeat(480));
        assert_eq!(rest, "y".repeat(200));
    }

    #[test]
    fn test_space_outside_word_window_ignored() {
        let text = format!("{} {}", "x".repeat(400), "y".repeat(400));
        let (part, rest) = split_oversize(&text, 500);
        assert_eq!(part.chars().count(), 500);
        assert_eq!(rest, "y".repeat(301));
    }

    #[test]
    fn test_hard_cut_without_boundaries() {
        let text = "z".repeat(1000);
        let (part, rest) = split_oversize(&text, 300);
        assert_eq!(part, "z".repeat(300));
        assert_eq!(rest, "z".repeat(700));
    }

    #[test]
    fn test_windows_clamped_for_small_chunk_size() {
        let text = format!("ab\n\n{}", "c".repeat(100));
        let (part, rest) = split_oversize(&text, 10);
        assert_eq!(part, "ab");
        assert_eq!(rest, "c".repeat(100));
    }

    #[test]
    fn test_paragraph_break_at_chunk_size_uses_word_search() {
        // "\n\n" starts exactly at index 100; a space sits at index 60.
        let text = format!(
            "{} {}\n\n{}",
            "a".repeat(60),
            "b".repeat(39),
            "c".repeat(100)
        );
        let (part, rest) = split_oversize(&text, 100);
        assert_eq!(part, "a".repeat(60));
        assert!(rest.starts_with(&"b".repeat(39)));
    }

    #[test]
    fn test_multibyte_text_splits_on_char_boundary() {
        let text = "é".repeat(700);
        let (part, rest) = split_oversize(&text, 300);
        assert_eq!(part.chars().count(), 300);
        assert_eq!(rest.chars().count(), 400);
    }
}
