//! Character-indexed string helpers.
//!
//! Chunk budgets are counted in `char`s, so every index handed to these
//! helpers is a char index; conversions to byte offsets happen here and
//! nowhere else.

/// Length of `s` in chars.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the char at `char_index`, or `s.len()` past the end.
pub(crate) fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// The last `n` chars of `s`.
pub(crate) fn char_suffix(s: &str, n: usize) -> &str {
    let len = char_len(s);
    &s[byte_offset(s, len.saturating_sub(n))..]
}

/// Split `s` at a char index.
pub(crate) fn split_at_char(s: &str, char_index: usize) -> (&str, &str) {
    s.split_at(byte_offset(s, char_index))
}
