//! Persist chunk records.
//!
//! Two formats are supported: a single JSON array of all records, and a
//! directory of markdown files (one per chunk) with a metadata header.

use anyhow::{Context, Result};
use doc_chunker_core::ChunkRecord;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write `records` as a JSON array.
///
/// A path of `-` writes to stdout for piping; any other path is created
/// along with its parent directories.
pub fn write_json(records: &[ChunkRecord], output: &Path, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };

    if output == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", json)?;
        return Ok(());
    }

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(output, &json)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(chunks = records.len(), path = %output.display(), "saved JSON chunks");
    Ok(())
}

/// Write one `{document_id}.md` file per record into `dir`.
pub fn write_markdown(records: &[ChunkRecord], dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    for record in records {
        let path = dir.join(format!("{}.md", record.document_id));
        std::fs::write(&path, render_markdown(record))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    info!(chunks = records.len(), dir = %dir.display(), "saved markdown chunks");
    Ok(())
}

/// Render a record as a markdown document with a `---` metadata header.
pub fn render_markdown(record: &ChunkRecord) -> String {
    format!(
        "---\n\
         document_id: {}\n\
         source_file: {}\n\
         source_url: {}\n\
         title: {}\n\
         chunk_index: {}\n\
         total_chunks: {}\n\
         ---\n\
         \n\
         {}\n",
        record.document_id,
        record.source_file,
        record.source_url,
        record.title,
        record.chunk_index,
        record.total_chunks,
        record.chunk_text
    )
}
