//! Filesystem document discovery.
//!
//! Walks the configured docs directory and returns the markdown files to
//! chunk, filtered by include/exclude globs matched against the path
//! relative to the root. `*` does not cross `/`, so `*.md` only selects
//! top-level files; use `**/*.md` to recurse.

use anyhow::{bail, Context, Result};
use doc_chunker_core::DocumentSource;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::InputConfig;

/// A markdown file found under the docs directory.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    pub path: PathBuf,
    pub relative_path: String,
    pub source: DocumentSource,
}

pub fn scan_documents(input: &InputConfig) -> Result<Vec<DocumentFile>> {
    let root = &input.docs_dir;
    if !root.is_dir() {
        bail!("Docs directory does not exist: {}", root.display());
    }

    let include_set = build_globset(&input.include_globs)?;
    let exclude_set = build_globset(&input.exclude_globs)?;

    let mut files = Vec::new();

    let walker = WalkDir::new(root).follow_links(input.follow_symlinks);
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().replace('\\', "/");

        if exclude_set.is_match(&rel_str) {
            continue;
        }
        if !include_set.is_match(&rel_str) {
            continue;
        }

        files.push(DocumentFile {
            path: path.to_path_buf(),
            source: document_source(path),
            relative_path: rel_str,
        });
    }

    // Sort for deterministic ordering
    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    Ok(files)
}

/// Stems shared by more than one file, with the relative paths sharing them.
///
/// Chunk ids are derived from the stem alone, so with recursive globs two
/// `intro.md` files in different directories would produce the same ids.
pub fn shared_stems(files: &[DocumentFile]) -> Vec<(String, Vec<String>)> {
    let mut by_stem: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for file in files {
        by_stem
            .entry(file.source.stem.as_str())
            .or_default()
            .push(file.relative_path.clone());
    }
    by_stem
        .into_iter()
        .filter(|(_, paths)| paths.len() > 1)
        .map(|(stem, paths)| (stem.to_string(), paths))
        .collect()
}

/// Stem and file name used to identify a document's chunks.
pub fn document_source(path: &Path) -> DocumentSource {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    DocumentSource::new(stem, file_name)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .with_context(|| format!("Invalid glob pattern: '{}'", pattern))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn input_for(root: &Path) -> InputConfig {
        InputConfig {
            docs_dir: root.to_path_buf(),
            ..InputConfig::default()
        }
    }

    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::write(root.join("b.md"), "# B").unwrap();
        fs::write(root.join("a.md"), "# A").unwrap();
        fs::write(root.join("README.md"), "# Readme").unwrap();
        fs::write(root.join("notes.txt"), "plain").unwrap();
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("nested/c.md"), "# C").unwrap();
        tmp
    }

    #[test]
    fn test_default_globs_top_level_markdown_without_readme() {
        let tmp = fixture();
        let files = scan_documents(&input_for(tmp.path())).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
        assert_eq!(files[0].source, DocumentSource::new("a", "a.md"));
    }

    #[test]
    fn test_recursive_globs() {
        let tmp = fixture();
        let input = InputConfig {
            include_globs: vec!["**/*.md".to_string()],
            exclude_globs: vec![],
            ..input_for(tmp.path())
        };
        let files = scan_documents(&input).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(names, vec!["README.md", "a.md", "b.md", "nested/c.md"]);
        assert_eq!(files[3].source.stem, "c");
    }

    #[test]
    fn test_shared_stems_across_directories() {
        let tmp = fixture();
        fs::write(tmp.path().join("nested/a.md"), "# Nested A").unwrap();
        let input = InputConfig {
            include_globs: vec!["**/*.md".to_string()],
            ..input_for(tmp.path())
        };
        let files = scan_documents(&input).unwrap();
        assert_eq!(
            shared_stems(&files),
            vec![(
                "a".to_string(),
                vec!["a.md".to_string(), "nested/a.md".to_string()]
            )]
        );

        let top_level = scan_documents(&input_for(tmp.path())).unwrap();
        assert!(shared_stems(&top_level).is_empty());
    }

    #[test]
    fn test_missing_root() {
        let input = input_for(Path::new("/definitely/not/here"));
        assert!(scan_documents(&input).is_err());
    }

    #[test]
    fn test_invalid_glob() {
        let tmp = fixture();
        let input = InputConfig {
            include_globs: vec!["[".to_string()],
            ..input_for(tmp.path())
        };
        assert!(scan_documents(&input).is_err());
    }
}
