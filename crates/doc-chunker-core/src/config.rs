//! Chunking parameters.
//!
//! All sizes are measured in characters (Unicode scalar values), not bytes
//! or tokens.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default target chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 5000;

/// Default overlap window in characters.
pub const DEFAULT_OVERLAP: usize = 200;

/// Default minimum chunk size in characters.
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 1000;

/// Overage allowed above `chunk_size` before a chunk is force-split.
pub const TOLERANCE_FACTOR: f64 = 1.2;

/// Parameters controlling chunk assembly.
///
/// Valid configurations satisfy `0 < chunk_size`, `overlap < chunk_size`
/// and `min_chunk_size <= chunk_size`. The chunking functions never panic
/// on an invalid configuration, but their output is only meaningful for
/// valid ones; call [`ChunkConfig::validate`] once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_overlap")]
    pub overlap: usize,
    #[serde(default = "default_min_chunk_size")]
    pub min_chunk_size: usize,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}
fn default_overlap() -> usize {
    DEFAULT_OVERLAP
}
fn default_min_chunk_size() -> usize {
    DEFAULT_MIN_CHUNK_SIZE
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
        }
    }
}

impl ChunkConfig {
    pub fn new(chunk_size: usize, overlap: usize, min_chunk_size: usize) -> Self {
        Self {
            chunk_size,
            overlap,
            min_chunk_size,
        }
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.overlap >= self.chunk_size {
            return Err(ConfigError::OverlapTooLarge {
                overlap: self.overlap,
                chunk_size: self.chunk_size,
            });
        }
        if self.min_chunk_size > self.chunk_size {
            return Err(ConfigError::MinChunkSizeTooLarge {
                min_chunk_size: self.min_chunk_size,
                chunk_size: self.chunk_size,
            });
        }
        Ok(())
    }

    /// Largest length a chunk may reach before it is force-split
    /// (`chunk_size * 1.2`).
    pub fn tolerance_limit(&self) -> f64 {
        self.chunk_size as f64 * TOLERANCE_FACTOR
    }

    /// Whether a chunk of `len` characters exceeds the tolerance limit.
    pub fn exceeds_tolerance(&self, len: usize) -> bool {
        len as f64 > self.tolerance_limit()
    }
}
