//! Lint CSS files for airtightness

use std::fs;

use airtightcss::checker;
use airtightcss::output::{FileError, FileFinding, LintResult, OutputMode};
use airtightcss::resolver;

/// Lint the given paths and report findings
///
/// Every resolved file is checked independently: a file that fails to read or
/// tokenize is recorded as an error and the remaining files are still
/// processed. Exits with status 1 when findings were produced and 2 when any
/// file failed to lint at all.
pub fn check(paths: &[String], mode: OutputMode) -> anyhow::Result<()> {
    let files = resolver::resolve(paths)?;

    let mut findings = Vec::new();
    let mut errors = Vec::new();

    for path in &files {
        let file = path.display().to_string();

        let css = match fs::read_to_string(path) {
            Ok(css) => css,
            Err(err) => {
                errors.push(FileError {
                    file,
                    error: err.to_string(),
                });
                continue;
            },
        };

        match checker::check_css(&css) {
            Ok(file_findings) => {
                findings.extend(file_findings.into_iter().map(|finding| FileFinding {
                    file: file.clone(),
                    line: finding.line,
                    column: finding.column,
                    message: finding.message,
                }));
            },
            Err(err) => errors.push(FileError {
                file,
                error: err.to_string(),
            }),
        }
    }

    let result = LintResult::new(files.len(), findings, errors);
    result.render(mode);

    if !result.errors.is_empty() {
        std::process::exit(2);
    }
    if !result.passed {
        std::process::exit(1);
    }

    Ok(())
}
