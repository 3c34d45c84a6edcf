//! Tests for the resolver module
//!
//! The resolver expands path arguments (files, directories, globs) into a
//! sorted list of files to lint.

use std::fs;

use airtightcss::resolver::{self, ResolveError};
use tempfile::TempDir;

fn touch(dir: &TempDir, relative: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, ".a {}\n").unwrap();
}

#[test]
fn literal_file_kept_as_is() {
    let temp = TempDir::new().unwrap();
    touch(&temp, "main.css");

    let arg = temp.path().join("main.css").display().to_string();
    let files = resolver::resolve(&[arg]).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn directory_collects_css_recursively() {
    let temp = TempDir::new().unwrap();
    touch(&temp, "a.css");
    touch(&temp, "nested/b.css");
    touch(&temp, "nested/deep/c.css");
    touch(&temp, "notes.txt");

    let files = resolver::resolve(&[temp.path().display().to_string()]).unwrap();
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| f.extension().is_some_and(|e| e == "css")));
}

#[test]
fn hidden_entries_skipped() {
    let temp = TempDir::new().unwrap();
    touch(&temp, "a.css");
    touch(&temp, ".hidden/b.css");

    let files = resolver::resolve(&[temp.path().display().to_string()]).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn glob_pattern_expanded() {
    let temp = TempDir::new().unwrap();
    touch(&temp, "a.css");
    touch(&temp, "b.css");
    touch(&temp, "c.scss");

    let pattern = temp.path().join("*.css").display().to_string();
    let files = resolver::resolve(&[pattern]).unwrap();
    assert_eq!(files.len(), 2);
}

#[test]
fn results_sorted_and_deduplicated() {
    let temp = TempDir::new().unwrap();
    touch(&temp, "a.css");
    touch(&temp, "b.css");

    let a = temp.path().join("a.css").display().to_string();
    let b = temp.path().join("b.css").display().to_string();
    let files = resolver::resolve(&[b.clone(), a.clone(), a]).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files[0] < files[1]);
}

#[test]
fn missing_path_is_an_error() {
    let result = resolver::resolve(&["definitely/not/here.css".to_string()]);
    assert!(matches!(result, Err(ResolveError::NotFound(_))));
}
