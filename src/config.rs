use anyhow::{Context, Result};
use doc_chunker_core::ChunkConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "./config/chunk-docs.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,
    /// Globs matched against paths relative to `docs_dir`. Chunk ids use
    /// only the file stem, so recursive globs that pick up two files with
    /// the same stem produce colliding ids (a warning is logged).
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default = "default_exclude_globs")]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            include_globs: default_include_globs(),
            exclude_globs: default_exclude_globs(),
            follow_symlinks: false,
        }
    }
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_include_globs() -> Vec<String> {
    vec!["*.md".to_string()]
}

fn default_exclude_globs() -> Vec<String> {
    vec!["README.md".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// JSON output path; `-` writes to stdout.
    #[serde(default)]
    pub json: Option<PathBuf>,
    /// Directory receiving one markdown file per chunk.
    #[serde(default)]
    pub markdown_dir: Option<PathBuf>,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: None,
            markdown_dir: None,
            pretty: true,
        }
    }
}

fn default_pretty() -> bool {
    true
}

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub chunk_size: Option<usize>,
    pub overlap: Option<usize>,
    pub min_chunk_size: Option<usize>,
    pub docs_dir: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub markdown_dir: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides on top of the file values.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(v) = overrides.chunk_size {
            self.chunking.chunk_size = v;
        }
        if let Some(v) = overrides.overlap {
            self.chunking.overlap = v;
        }
        if let Some(v) = overrides.min_chunk_size {
            self.chunking.min_chunk_size = v;
        }
        if let Some(v) = overrides.docs_dir {
            self.input.docs_dir = v;
        }
        if overrides.json.is_some() {
            self.output.json = overrides.json;
        }
        if overrides.markdown_dir.is_some() {
            self.output.markdown_dir = overrides.markdown_dir;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.chunking
            .validate()
            .context("Invalid [chunking] configuration")?;

        if self.input.include_globs.is_empty() {
            anyhow::bail!("input.include_globs must not be empty");
        }

        Ok(())
    }
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;
    Ok(config)
}

/// Load the configuration file at `path`.
///
/// A missing file is only tolerated when `required` is false, in which
/// case the built-in defaults are returned.
pub fn load_config(path: &Path, required: bool) -> Result<Config> {
    if !path.exists() && !required {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&content)
}
