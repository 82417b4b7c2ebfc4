use thiserror::Error;

/// Errors produced by [`ChunkConfig::validate`](crate::ChunkConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("chunk_size must be > 0")]
    ZeroChunkSize,
    #[error("overlap ({overlap}) must be smaller than chunk_size ({chunk_size})")]
    OverlapTooLarge { overlap: usize, chunk_size: usize },
    #[error("min_chunk_size ({min_chunk_size}) must not exceed chunk_size ({chunk_size})")]
    MinChunkSizeTooLarge {
        min_chunk_size: usize,
        chunk_size: usize,
    },
}
