//! End-of-run summary and chunk previews.

use doc_chunker_core::ChunkRecord;

use crate::pipeline::RunOutcome;
use crate::progress::format_number;

/// Characters shown in a chunk preview.
const PREVIEW_CHARS: usize = 300;

/// Build the summary printed after `chunk-docs chunk`.
pub fn render_summary(outcome: &RunOutcome) -> String {
    let mut out = format!(
        "Total: Processed {} documents, generated {} chunks\n",
        format_number(outcome.documents as u64),
        format_number(outcome.records.len() as u64)
    );

    if let Some(sample) = outcome.records.first() {
        out.push_str("\nSample chunk:\n");
        out.push_str(&format!("Document ID: {}\n", sample.document_id));
        out.push_str(&format!("Source: {}\n", sample.source_file));
        out.push_str(&format!(
            "Chunk {}/{}\n",
            sample.chunk_index, sample.total_chunks
        ));
        out.push_str(&format!(
            "Text length: {} characters\n",
            sample.chunk_text.chars().count()
        ));
        out.push_str("Text preview:\n");
        out.push_str(&preview(&sample.chunk_text, PREVIEW_CHARS));
        out.push('\n');
    }

    out
}

/// One block per chunk, used by `chunk-docs inspect`.
pub fn render_inspection(records: &[ChunkRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "── {} ({}/{}, {} chars) ──\n{}\n\n",
            record.document_id,
            record.chunk_index,
            record.total_chunks,
            record.chunk_text.chars().count(),
            preview(&record.chunk_text, PREVIEW_CHARS)
        ));
    }
    if records.is_empty() {
        out.push_str("(no chunks)\n");
    }
    out
}

/// The first `max_chars` characters of `text`, followed by `...` when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
