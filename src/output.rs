//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of linting a set of files
#[derive(Debug, Serialize)]
pub struct LintResult {
    /// Whether every file came back clean
    pub passed: bool,
    /// Number of files checked
    pub files_checked: usize,
    /// Style violations across all files
    pub findings: Vec<FileFinding>,
    /// Files that could not be read or tokenized
    pub errors: Vec<FileError>,
}

/// A finding located in a specific file
#[derive(Debug, Serialize)]
pub struct FileFinding {
    /// The file the finding came from
    pub file: String,
    /// Line of the violating rule, 1-based
    pub line: u32,
    /// Column of the violating rule, 1-based
    pub column: u32,
    /// Human-readable cause
    pub message: String,
}

/// A file the lint failed to run on
#[derive(Debug, Serialize)]
pub struct FileError {
    /// The file that failed
    pub file: String,
    /// Why it failed
    pub error: String,
}

impl LintResult {
    /// Build a result from per-file outcomes
    #[must_use]
    pub fn new(files_checked: usize, findings: Vec<FileFinding>, errors: Vec<FileError>) -> Self {
        Self {
            passed: findings.is_empty() && errors.is_empty(),
            files_checked,
            findings,
            errors,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for finding in &self.findings {
            println!(
                "{}",
                format!(
                    "[{}:{}:{}] {}",
                    finding.file, finding.line, finding.column, finding.message
                )
                .red()
            );
        }

        for error in &self.errors {
            println!("{}", format!("{}: {}", error.file, error.error).red());
        }

        if self.passed {
            println!(
                "{}",
                format!("{} file(s) checked for airtightness.", self.files_checked).green()
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
