//! Heading-aware document chunker.
//!
//! Turns a document body into an ordered list of chunks and then into
//! [`ChunkRecord`]s.
//!
//! # Algorithm
//!
//! 1. If the trimmed body is shorter than `min_chunk_size`, return it as
//!    the only chunk (or no chunk at all when it is empty).
//! 2. Split the body into sections at `#` / `##` headings.
//! 3. Greedily pack sections into chunks of at most `chunk_size` chars,
//!    seeding each new chunk with the last five words of the previous one.
//! 4. Force-split anything above `chunk_size * 1.2` at a paragraph break,
//!    a space, or a hard cut.
//! 5. Fold undersized fragments into their predecessor, keeping
//!    heading-led fragments that cannot be merged and dropping the rest.
//!
//! # Example
//!
//! ```rust
//! use doc_chunker_core::{chunk_document, ChunkConfig, DocumentSource, Frontmatter};
//!
//! let source = DocumentSource::new("intro", "intro.md");
//! let records = chunk_document(
//!     &source,
//!     "# Intro\n\nHello.",
//!     &Frontmatter::default(),
//!     &ChunkConfig::default(),
//! );
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].document_id, "intro_chunk_1");
//! assert_eq!(records[0].total_chunks, 1);
//! ```

use tracing::debug;

use crate::assemble::assemble_chunks;
use crate::config::ChunkConfig;
use crate::merge::merge_small_chunks;
use crate::models::{ChunkRecord, DocumentSource, Frontmatter};
use crate::segment::split_on_headings;
use crate::text::char_len;

/// Chunk a document body into the final, ordered list of chunk texts.
///
/// # Guarantees
///
/// - Never panics and never fails, whatever the input text.
/// - A trimmed body shorter than `min_chunk_size` comes back unchanged as
///   a single chunk; an empty body yields no chunks.
/// - Chunks appear in document order.
pub fn chunk_text(text: &str, config: &ChunkConfig) -> Vec<String> {
    let body = text.trim();
    if char_len(body) < config.min_chunk_size {
        return if body.is_empty() {
            Vec::new()
        } else {
            vec![body.to_string()]
        };
    }

    let sections = split_on_headings(body);
    let assembled = assemble_chunks(&sections, config);
    let assembled_count = assembled.len();
    let chunks = merge_small_chunks(assembled, config);

    debug!(
        sections = sections.len(),
        assembled = assembled_count,
        chunks = chunks.len(),
        "chunked document"
    );

    chunks
}

/// Wrap chunk texts into records with 1-based indices and copied metadata.
pub fn build_records(
    source: &DocumentSource,
    chunks: Vec<String>,
    frontmatter: &Frontmatter,
) -> Vec<ChunkRecord> {
    let total_chunks = chunks.len();
    let source_url = frontmatter.source_url();
    let title = frontmatter.title();

    chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk_text)| ChunkRecord {
            document_id: source.chunk_id(i + 1),
            source_file: source.file_name.clone(),
            source_url: source_url.clone(),
            title: title.clone(),
            chunk_index: i + 1,
            total_chunks,
            chunk_text,
            frontmatter: frontmatter.clone(),
        })
        .collect()
}

/// Chunk a document body and build its records.
pub fn chunk_document(
    source: &DocumentSource,
    body: &str,
    frontmatter: &Frontmatter,
    config: &ChunkConfig,
) -> Vec<ChunkRecord> {
    build_records(source, chunk_text(body, config), frontmatter)
}
