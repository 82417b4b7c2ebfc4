//! Greedy chunk assembly over heading sections.
//!
//! Sections are packed into an accumulator until the next one would push
//! it past `chunk_size`; the accumulator is then closed and a new one is
//! opened, seeded with the last few words of the closed chunk. Any
//! accumulator that grows beyond the tolerance limit is peeled apart with
//! [`split_oversize`](crate::split::split_oversize).

use tracing::debug;

use crate::config::ChunkConfig;
use crate::split::split_oversize_str;
use crate::text::{char_len, char_suffix};

/// Number of trailing words carried into the next chunk.
pub const OVERLAP_WORDS: usize = 5;

/// Length of the `"\n\n"` joiner between sections.
const JOINER_LEN: usize = 2;

/// Pack `sections` into chunks under `config.chunk_size`.
///
/// Chunks break between sections whenever that keeps them under budget.
/// A section that alone exceeds `chunk_size * 1.2` is split at paragraph
/// or word boundaries. Returned chunks are trimmed and non-empty.
pub fn assemble_chunks(sections: &[String], config: &ChunkConfig) -> Vec<String> {
    let config = ChunkConfig {
        chunk_size: config.chunk_size.max(1),
        ..*config
    };

    let mut chunks = Vec::new();
    let mut current = String::new();

    for section in sections {
        if !current.is_empty()
            && char_len(&current) + char_len(section) + JOINER_LEN > config.chunk_size
        {
            let closed = std::mem::take(&mut current);
            push_trimmed(&mut chunks, &closed);

            current = match overlap_seed(&closed, config.overlap) {
                Some(seed) => format!("{}\n\n{}", seed, section),
                None => section.clone(),
            };
        } else {
            if !current.is_empty() {
                current.push_str("\n\n");
            }
            current.push_str(section);
        }

        if config.exceeds_tolerance(char_len(&current)) {
            current = split_until_within_tolerance(&current, &config, &mut chunks);
        }
    }

    push_trimmed(&mut chunks, &current);
    chunks
}

/// Overlap text to prepend to the chunk following `closed`.
///
/// Takes the last `overlap` chars of `closed` and keeps its last
/// [`OVERLAP_WORDS`] words. Returns `None` when overlap is disabled,
/// `closed` is not longer than `overlap`, or the window holds no more than
/// [`OVERLAP_WORDS`] words.
pub fn overlap_seed(closed: &str, overlap: usize) -> Option<String> {
    if overlap == 0 || char_len(closed) <= overlap {
        return None;
    }
    let window = char_suffix(closed, overlap).trim();
    let words: Vec<&str> = window.split_whitespace().collect();
    if words.len() <= OVERLAP_WORDS {
        return None;
    }
    Some(words[words.len() - OVERLAP_WORDS..].join(" "))
}

/// Peel chunks off the front of `text` until the rest fits the tolerance
/// limit, and return the rest. The remaining length is tracked
/// incrementally so each pass only scans what it cuts off.
fn split_until_within_tolerance(
    text: &str,
    config: &ChunkConfig,
    chunks: &mut Vec<String>,
) -> String {
    let mut rest = text;
    let mut rest_len = char_len(rest);

    while config.exceeds_tolerance(rest_len) {
        let split = split_oversize_str(rest, config.chunk_size);
        let end = split.remainder_start + split.remainder.len();
        rest_len -= char_len(&rest[..split.remainder_start]) + char_len(&rest[end..]);
        debug!(
            part_len = char_len(split.head),
            remainder_len = rest_len,
            "split oversize chunk"
        );
        if !split.head.is_empty() {
            chunks.push(split.head.to_string());
        }
        rest = split.remainder;
    }

    rest.to_string()
}

fn push_trimmed(chunks: &mut Vec<String>, chunk: &str) {
    let trimmed = chunk.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_sections() {
        assert!(assemble_chunks(&[], &ChunkConfig::default()).is_empty());
    }

    #[test]
    fn test_small_sections_share_a_chunk() {
        let config = ChunkConfig::new(100, 20, 10);
        let input = sections(&["## One\nalpha beta", "## Two\ngamma delta"]);
        let chunks = assemble_chunks(&input, &config);
        assert_eq!(
            chunks,
            vec!["## One\nalpha beta\n\n## Two\ngamma delta".to_string()]
        );
    }

    #[test]
    fn test_short_overlap_window_is_skipped() {
        let config = ChunkConfig::new(50, 20, 10);
        let input = sections(&[
            "# A\none two three four five six seven",
            "## B\neight nine ten eleven twelve",
        ]);
        let chunks = assemble_chunks(&input, &config);
        // The last 20 chars of A hold only four words.
        assert_eq!(chunks, input);
    }

    #[test]
    fn test_overlap_carries_last_five_words() {
        let config = ChunkConfig::new(60, 30, 10);
        let input = sections(&[
            "# A\none two three four five six seven eight nine ten",
            "## B\nbody",
        ]);
        let chunks = assemble_chunks(&input, &config);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], input[0]);
        assert_eq!(chunks[1], "six seven eight nine ten\n\n## B\nbody");
    }

    #[test]
    fn test_zero_overlap_disables_seed() {
        let config = ChunkConfig::new(60, 0, 10);
        let input = sections(&[
            "# A\none two three four five six seven eight nine ten",
            "## B\nbody",
        ]);
        let chunks = assemble_chunks(&input, &config);
        assert_eq!(chunks[1], "## B\nbody");
    }

    #[test]
    fn test_overlap_seed_rules() {
        assert_eq!(overlap_seed("a b c d e f g", 0), None);
        assert_eq!(overlap_seed("short", 10), None);
        assert_eq!(overlap_seed("a b c d e f g", 10), None);
        assert_eq!(
            overlap_seed("a b c d e f g", 11),
            Some("c d e f g".to_string())
        );
        assert_eq!(
            overlap_seed("x a b c d e f g", 13),
            Some("c d e f g".to_string())
        );
    }

    #[test]
    fn test_oversize_section_is_split() {
        let config = ChunkConfig::new(100, 20, 10);
        let paragraphs: Vec<String> = (0..20)
            .map(|i| format!("Paragraph {:02} text.", i))
            .collect();
        let section = format!("# Big\n\n{}", paragraphs.join("\n\n"));
        let chunks = assemble_chunks(&[section.clone()], &config);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(!config.exceeds_tolerance(chunk.chars().count()), "{chunk:?}");
        }
        // No overlap inside a split section: content is preserved in order.
        let rejoined: String = chunks.join("").split_whitespace().collect();
        let original: String = section.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_section_within_tolerance_not_split() {
        let config = ChunkConfig::new(100, 20, 10);
        let section = "w".repeat(115);
        let chunks = assemble_chunks(&[section.clone()], &config);
        assert_eq!(chunks, vec![section]);
    }

    #[test]
    fn test_chunk_order_follows_sections() {
        let config = ChunkConfig::new(40, 0, 1);
        let input = sections(&[
            "# One\nfirst body text here",
            "# Two\nsecond body text here",
            "# Three\nthird body text here",
        ]);
        let chunks = assemble_chunks(&input, &config);
        assert_eq!(chunks, input);
    }

    #[test]
    fn test_long_section_splits_into_even_parts() {
        let config = ChunkConfig::new(1_000, 0, 10);
        let sections = vec!["x".repeat(200_000)];
        let chunks = assemble_chunks(&sections, &config);
        assert_eq!(chunks.len(), 200);
        assert!(chunks.iter().all(|c| c.chars().count() == 1_000));
    }

    #[test]
    fn test_zero_chunk_size_terminates() {
        let config = ChunkConfig::new(0, 0, 0);
        let chunks = assemble_chunks(&sections(&["abc def"]), &config);
        assert!(!chunks.is_empty());
    }
}
