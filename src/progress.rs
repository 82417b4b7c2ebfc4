//! Chunking progress reporting.
//!
//! Reports how many documents have been chunked so far during
//! `chunk-docs chunk`. Progress is emitted on **stderr** so stdout remains
//! parseable when JSON is written there.

use serde_json::{json, Value};
use std::io::Write;

/// A single progress event for a chunking run.
#[derive(Clone, Debug)]
pub enum ChunkProgressEvent {
    /// The docs directory is being scanned. Total unknown.
    Discovering { docs_dir: String },
    /// `n` documents chunked out of `total`.
    Chunking { n: u64, total: u64 },
}

/// Reports chunking progress. Called concurrently from worker threads.
pub trait ChunkProgressReporter: Send + Sync {
    fn report(&self, event: ChunkProgressEvent);
}

/// Human-friendly progress on stderr: "chunk  1,234 / 5,000 documents".
pub struct StderrProgress;

impl ChunkProgressReporter for StderrProgress {
    fn report(&self, event: ChunkProgressEvent) {
        write_stderr_line(&human_line(&event));
    }
}

fn human_line(event: &ChunkProgressEvent) -> String {
    match event {
        ChunkProgressEvent::Discovering { docs_dir } => {
            format!("chunk {}  discovering...", docs_dir)
        }
        ChunkProgressEvent::Chunking { n, total } => format!(
            "chunk  {} / {} documents",
            format_number(*n),
            format_number(*total)
        ),
    }
}

/// Machine-readable progress: one JSON object per line on stderr.
pub struct JsonProgress;

impl ChunkProgressReporter for JsonProgress {
    fn report(&self, event: ChunkProgressEvent) {
        if let Ok(line) = serde_json::to_string(&event_json(&event)) {
            write_stderr_line(&line);
        }
    }
}

/// JSON shape of a progress event: `{"event": "progress", "phase": ..}`
/// plus the phase's fields.
fn event_json(event: &ChunkProgressEvent) -> Value {
    match event {
        ChunkProgressEvent::Discovering { docs_dir } => json!({
            "event": "progress",
            "phase": "discovering",
            "docs_dir": docs_dir
        }),
        ChunkProgressEvent::Chunking { n, total } => json!({
            "event": "progress",
            "phase": "chunking",
            "n": n,
            "total": total
        }),
    }
}

fn write_stderr_line(line: &str) {
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{}", line);
    let _ = stderr.flush();
}

/// No-op reporter when progress is disabled.
pub struct NoProgress;

impl ChunkProgressReporter for NoProgress {
    fn report(&self, _event: ChunkProgressEvent) {}
}

pub(crate) fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + (s.len() - 1) / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Progress mode for the CLI: off, human (stderr), or JSON (stderr).
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ProgressMode {
    Off,
    Human,
    Json,
}

impl ProgressMode {
    /// Default: human progress when stderr is a TTY, otherwise off.
    pub fn default_for_tty() -> Self {
        if atty::is(atty::Stream::Stderr) {
            ProgressMode::Human
        } else {
            ProgressMode::Off
        }
    }

    pub fn reporter(&self) -> Box<dyn ChunkProgressReporter> {
        match self {
            ProgressMode::Off => Box::new(NoProgress),
            ProgressMode::Human => Box::new(StderrProgress),
            ProgressMode::Json => Box::new(JsonProgress),
        }
    }
}
