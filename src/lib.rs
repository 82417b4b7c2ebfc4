//! # doc-chunker
//!
//! Prepares long-form markdown documentation for a retrieval pipeline by
//! splitting each document into bounded-size, heading-aligned chunks with
//! word-based overlap.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌────────────────┐   ┌──────────┐
//! │ connector_fs│──▶│ frontmatter  │──▶│ doc-chunker-   │──▶│  export  │
//! │  (walkdir)  │   │   (YAML)     │   │ core (chunking)│   │ JSON / md│
//! └─────────────┘   └──────────────┘   └────────────────┘   └──────────┘
//! ```
//!
//! The chunking algorithm itself lives in the I/O-free
//! [`doc_chunker_core`] crate; this crate supplies discovery, metadata
//! extraction, parallel batch processing, persistence and the
//! `chunk-docs` CLI.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration and CLI overrides |
//! | [`connector_fs`] | Markdown file discovery |
//! | [`frontmatter`] | YAML frontmatter extraction |
//! | [`pipeline`] | Per-document and batch chunking |
//! | [`export`] | JSON and markdown persistence |
//! | [`progress`] | Progress reporting on stderr |
//! | [`summary`] | Run summary and chunk previews |

pub mod config;
pub mod connector_fs;
pub mod export;
pub mod frontmatter;
pub mod pipeline;
pub mod progress;
pub mod summary;
