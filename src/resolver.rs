//! Resolver - expands CLI path arguments into files to lint
//!
//! Accepts literal file paths, directories (walked recursively for `.css`
//! files) and shell-style glob patterns. The resulting list is sorted and
//! deduplicated so lint output is deterministic.
//!
//! # Examples
//!
//! ```no_run
//! use airtightcss::resolver;
//!
//! let files = resolver::resolve(&["styles".to_string()]).unwrap();
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Errors that can occur during path resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Path argument does not exist
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    /// Invalid glob pattern syntax
    #[error("invalid glob pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    /// Error reading a glob match
    #[error("glob error: {0}")]
    Glob(#[from] glob::GlobError),

    /// Error walking directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Expand path arguments into a sorted, deduplicated file list
pub fn resolve(paths: &[String]) -> Result<Vec<PathBuf>, ResolveError> {
    let mut files = Vec::new();

    for raw in paths {
        if is_glob_pattern(raw) {
            for entry in glob::glob(raw)? {
                let path = entry?;
                if path.is_file() {
                    files.push(path);
                }
            }
        } else {
            let path = PathBuf::from(raw);
            if !path.exists() {
                return Err(ResolveError::NotFound(path));
            }
            if path.is_dir() {
                collect_css_files(&path, &mut files)?;
            } else {
                files.push(path);
            }
        }
    }

    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Recursively collect `.css` files under a directory, skipping hidden entries
fn collect_css_files(root: &Path, files: &mut Vec<PathBuf>) -> Result<(), ResolveError> {
    for entry in WalkDir::new(root).follow_links(true).into_iter().filter_entry(|e| {
        // Don't filter the root directory itself
        e.path() == root || !is_hidden(e)
    }) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == "css") {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(())
}

/// Check if an entry is hidden (starts with .)
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}

/// Check if a string contains glob metacharacters
fn is_glob_pattern(s: &str) -> bool {
    s.contains('*') || s.contains('?') || s.contains('[')
}
