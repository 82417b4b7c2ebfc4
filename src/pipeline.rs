//! Chunking pipeline orchestration.
//!
//! Coordinates the full run: discovery → frontmatter → chunking → records.
//! Documents are independent, so they are chunked in parallel; a document
//! that cannot be read is logged and skipped without failing the run.

use anyhow::{Context, Result};
use doc_chunker_core::{chunk_document, ChunkConfig, ChunkRecord, DocumentSource};
use rayon::prelude::*;
use std::borrow::Cow;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::connector_fs::{self, DocumentFile};
use crate::frontmatter::parse_frontmatter;
use crate::progress::{ChunkProgressEvent, ChunkProgressReporter};

/// Result of chunking a docs directory.
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Number of documents processed, including ones that produced no chunks.
    pub documents: usize,
    /// Records of all documents, in document order.
    pub records: Vec<ChunkRecord>,
}

/// Chunk already-loaded file content.
///
/// Line endings are normalized to `\n` first, so CRLF files get the same
/// frontmatter detection and paragraph breaks as LF files.
pub fn process_content(
    source: &DocumentSource,
    content: &str,
    chunking: &ChunkConfig,
) -> Vec<ChunkRecord> {
    let content = normalize_line_endings(content);
    let (frontmatter, body) = parse_frontmatter(&content);
    chunk_document(source, body, &frontmatter, chunking)
}

fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Read and chunk a single markdown file.
pub fn process_file(path: &Path, chunking: &ChunkConfig) -> Result<Vec<ChunkRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let source = connector_fs::document_source(path);
    Ok(process_content(&source, &content, chunking))
}

/// Chunk every document under the configured docs directory.
pub fn process_directory(
    config: &Config,
    reporter: &dyn ChunkProgressReporter,
) -> Result<RunOutcome> {
    reporter.report(ChunkProgressEvent::Discovering {
        docs_dir: config.input.docs_dir.display().to_string(),
    });
    let files = connector_fs::scan_documents(&config.input)?;
    for (stem, paths) in connector_fs::shared_stems(&files) {
        warn!(
            stem = %stem,
            files = %paths.join(", "),
            "documents share a stem; their chunk ids collide"
        );
    }
    info!(
        documents = files.len(),
        docs_dir = %config.input.docs_dir.display(),
        "discovered documents"
    );

    let total = files.len() as u64;
    let done = AtomicU64::new(0);

    let per_document: Vec<Vec<ChunkRecord>> = files
        .par_iter()
        .map(|file| {
            let records = chunk_file(file, &config.chunking);
            let n = done.fetch_add(1, Ordering::Relaxed) + 1;
            reporter.report(ChunkProgressEvent::Chunking { n, total });
            records
        })
        .collect();

    let records: Vec<ChunkRecord> = per_document.into_iter().flatten().collect();
    info!(
        documents = files.len(),
        chunks = records.len(),
        "chunking complete"
    );

    Ok(RunOutcome {
        documents: files.len(),
        records,
    })
}

fn chunk_file(file: &DocumentFile, chunking: &ChunkConfig) -> Vec<ChunkRecord> {
    match process_file(&file.path, chunking) {
        Ok(records) => {
            debug!(
                file = %file.relative_path,
                chunks = records.len(),
                "chunked document"
            );
            records
        }
        Err(e) => {
            warn!(file = %file.relative_path, error = %format!("{:#}", e), "skipping document");
            Vec::new()
        }
    }
}
