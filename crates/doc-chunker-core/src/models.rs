//! Core data models: document identity, frontmatter metadata and the
//! chunk records handed to persistence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Frontmatter key holding the document's canonical URL.
pub const SOURCE_URL_KEY: &str = "source_url";

/// Frontmatter key holding the document's title.
pub const TITLE_KEY: &str = "title";

/// Metadata parsed from a document's leading key-value block.
///
/// The full map is kept so nothing is lost when it is copied onto chunk
/// records; the well-known keys are exposed through typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frontmatter {
    fields: BTreeMap<String, Value>,
}

impl Frontmatter {
    pub fn new(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// `source_url` rendered as a string, or `""` when absent.
    pub fn source_url(&self) -> String {
        self.scalar_string(SOURCE_URL_KEY)
    }

    /// `title` rendered as a string, or `""` when absent.
    pub fn title(&self) -> String {
        self.scalar_string(TITLE_KEY)
    }

    /// Render a scalar value as text. Strings are returned unquoted;
    /// numbers and booleans use their display form; null, missing and
    /// structured values yield `""`.
    pub fn scalar_string(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }
}

/// Identity of the document being chunked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    /// File name without extension; prefix of every chunk's `document_id`.
    pub stem: String,
    /// File name including extension, copied to `source_file`.
    pub file_name: String,
}

impl DocumentSource {
    pub fn new(stem: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            file_name: file_name.into(),
        }
    }

    /// `document_id` of the chunk at 1-based `index`.
    pub fn chunk_id(&self, index: usize) -> String {
        format!("{}_chunk_{}", self.stem, index)
    }
}

/// A chunk of a document, ready for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub document_id: String,
    pub source_file: String,
    pub source_url: String,
    pub title: String,
    /// 1-based position within the document.
    pub chunk_index: usize,
    pub total_chunks: usize,
    pub chunk_text: String,
    pub frontmatter: Frontmatter,
}
