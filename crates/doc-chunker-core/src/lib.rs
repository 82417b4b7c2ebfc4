//! # doc-chunker core
//!
//! Pure chunking logic for doc-chunker: heading segmentation, greedy
//! chunk assembly with word-based overlap, oversize splitting, small-chunk
//! merging and chunk record construction.
//!
//! This crate contains no filesystem, network, or process-state
//! dependencies. Every function takes its [`ChunkConfig`] explicitly and
//! returns plain owned data, so documents can be chunked in parallel with
//! no coordination.
//!
//! # Pipeline
//!
//! ```text
//! body text ─▶ segment ─▶ assemble (+ split) ─▶ merge ─▶ ChunkRecord
//! ```
//!
//! # Example
//!
//! ```rust
//! use doc_chunker_core::{chunk_text, ChunkConfig};
//!
//! let config = ChunkConfig::default();
//! let chunks = chunk_text("# Title\n\nShort body.", &config);
//! assert_eq!(chunks, vec!["# Title\n\nShort body.".to_string()]);
//! ```

pub mod assemble;
pub mod chunk;
pub mod config;
pub mod error;
pub mod merge;
pub mod models;
pub mod segment;
pub mod split;
mod text;

pub use assemble::assemble_chunks;
pub use chunk::{build_records, chunk_document, chunk_text};
pub use config::ChunkConfig;
pub use error::ConfigError;
pub use merge::merge_small_chunks;
pub use models::{ChunkRecord, DocumentSource, Frontmatter};
pub use segment::{is_major_heading, split_on_headings};
pub use split::split_oversize;
