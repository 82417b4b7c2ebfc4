//! # doc-chunker CLI (`chunk-docs`)
//!
//! Splits a directory of markdown documentation into heading-aligned
//! chunks for embedding and search.
//!
//! ## Usage
//!
//! ```bash
//! chunk-docs [--config ./config/chunk-docs.toml] <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `chunk-docs chunk` | Chunk every document in the docs directory |
//! | `chunk-docs inspect <file>` | Chunk one file and print each chunk |
//!
//! ## Examples
//!
//! ```bash
//! # Chunk ./flink_docs and write a JSON array of chunk records
//! chunk-docs chunk --docs-dir ./flink_docs --output chunks.json
//!
//! # Smaller chunks, one markdown file per chunk
//! chunk-docs chunk --chunk-size 2000 --overlap 100 --min-chunk-size 400 \
//!     --output-md-dir ./chunks
//!
//! # Try parameters on a single file
//! chunk-docs inspect ./flink_docs/windows.md --chunk-size 1500
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use doc_chunker::config::{self, Config, Overrides, DEFAULT_CONFIG_PATH};
use doc_chunker::progress::ProgressMode;
use doc_chunker::{export, pipeline, summary};

/// doc-chunker CLI — heading-aware chunking of markdown documentation.
///
/// Settings are read from an optional TOML file and can be overridden
/// per run with flags.
#[derive(Parser)]
#[command(
    name = "chunk-docs",
    about = "Split markdown documentation into heading-aligned chunks for retrieval",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// When omitted, `./config/chunk-docs.toml` is used if it exists and
    /// built-in defaults otherwise.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug detail to stderr (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Chunk size flags shared by all commands.
#[derive(Args, Debug, Default)]
struct ChunkArgs {
    /// Target chunk size in characters.
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Characters of the previous chunk considered for overlap.
    #[arg(long)]
    overlap: Option<usize>,

    /// Minimum chunk size in characters.
    #[arg(long)]
    min_chunk_size: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Chunk every markdown document in the docs directory.
    ///
    /// Prints a summary and a sample chunk. Records are written as a JSON
    /// array and/or as one markdown file per chunk when requested.
    Chunk {
        /// Directory containing markdown files.
        #[arg(long)]
        docs_dir: Option<PathBuf>,

        /// Output file for chunks (JSON). Use `-` for stdout.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output directory for individual markdown files.
        #[arg(long)]
        output_md_dir: Option<PathBuf>,

        #[command(flatten)]
        sizes: ChunkArgs,

        /// Progress reporting on stderr. Defaults to `human` on a TTY.
        #[arg(long, value_enum)]
        progress: Option<ProgressMode>,
    },

    /// Chunk a single file and print each chunk with its length.
    Inspect {
        /// Markdown file to chunk.
        file: PathBuf,

        #[command(flatten)]
        sizes: ChunkArgs,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load(config_path: Option<&Path>, overrides: Overrides) -> Result<Config> {
    let cfg = match config_path {
        Some(path) => config::load_config(path, true)?,
        None => config::load_config(Path::new(DEFAULT_CONFIG_PATH), false)?,
    };
    let cfg = cfg.with_overrides(overrides);
    cfg.validate()?;
    Ok(cfg)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Chunk {
            docs_dir,
            output,
            output_md_dir,
            sizes,
            progress,
        } => {
            let cfg = load(
                cli.config.as_deref(),
                Overrides {
                    chunk_size: sizes.chunk_size,
                    overlap: sizes.overlap,
                    min_chunk_size: sizes.min_chunk_size,
                    docs_dir,
                    json: output,
                    markdown_dir: output_md_dir,
                },
            )?;
            info!(
                chunk_size = cfg.chunking.chunk_size,
                overlap = cfg.chunking.overlap,
                min_chunk_size = cfg.chunking.min_chunk_size,
                "starting chunk run"
            );

            let reporter = progress.unwrap_or_else(ProgressMode::default_for_tty).reporter();
            let outcome = pipeline::process_directory(&cfg, reporter.as_ref())?;

            if let Some(path) = &cfg.output.json {
                export::write_json(&outcome.records, path, cfg.output.pretty)?;
            }
            if let Some(dir) = &cfg.output.markdown_dir {
                export::write_markdown(&outcome.records, dir)?;
            }

            let report = summary::render_summary(&outcome);
            if cfg.output.json.as_deref() == Some(Path::new("-")) {
                eprint!("{}", report);
            } else {
                print!("{}", report);
            }
        }
        Commands::Inspect { file, sizes } => {
            let cfg = load(
                cli.config.as_deref(),
                Overrides {
                    chunk_size: sizes.chunk_size,
                    overlap: sizes.overlap,
                    min_chunk_size: sizes.min_chunk_size,
                    ..Default::default()
                },
            )?;
            let records = pipeline::process_file(&file, &cfg.chunking)?;
            print!("{}", summary::render_inspection(&records));
        }
    }

    Ok(())
}
