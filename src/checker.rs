//! Two-pass airtightness checker
//!
//! Pass 1 walks the stylesheet in document order: it validates every selector
//! against the BEM discipline and records which selectors establish relative
//! positioning. Pass 2 then audits every positioned rule against the recorded
//! relative parents. The ignore set (selectors of rules following an
//! `airtight ignore` comment) is collected up front and exempts selectors from
//! both passes.
//!
//! The whole analysis is a pure function of the tokenized stylesheet; findings
//! come back as an ordered list stamped with each rule's source position.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::css::{self, Entry, Position, Rule, Stylesheet};
use crate::selector::{self, chain, chain::Combinator};

static IGNORE_DIRECTIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*airtight\s+ignore\s*$").expect("valid regex"));

/// Errors that abort the whole check
///
/// Distinct from findings: a `CheckError` means the lint failed to run, not
/// that the stylesheet has style violations.
#[derive(Debug, Clone, Copy, Error)]
pub enum CheckError {
    /// An `airtight ignore` comment with no rule after it
    #[error("no rules left")]
    NoRulesLeft,

    /// The input could not be tokenized
    #[error(transparent)]
    Css(#[from] css::ParseError),
}

/// A single style violation with its source location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Line of the violating rule, 1-based
    pub line: u32,
    /// Column of the violating rule, 1-based
    pub column: u32,
    /// Human-readable cause
    pub message: String,
}

impl Finding {
    const fn new(position: Position, message: String) -> Self {
        Self {
            line: position.line,
            column: position.column,
            message,
        }
    }
}

/// Tokenize and check raw CSS text
pub fn check_css(input: &str) -> Result<Vec<Finding>, CheckError> {
    let stylesheet = css::parse(input)?;
    check_stylesheet(&stylesheet)
}

/// Check a tokenized stylesheet
///
/// Findings come back in document order of rules, selector order within a
/// rule, with all pass-1 findings before pass-2 findings. An empty list means
/// the stylesheet is airtight.
pub fn check_stylesheet(stylesheet: &Stylesheet) -> Result<Vec<Finding>, CheckError> {
    let ignored = collect_ignored(stylesheet)?;

    let mut findings = Vec::new();
    let mut relative_parents: Vec<String> = Vec::new();

    for rule in stylesheet.rules() {
        check_rule(rule, &ignored, &mut relative_parents, &mut findings);
    }

    // relative parents are fully collected before any rule is audited
    for rule in stylesheet.rules() {
        audit_positioning(rule, &ignored, &relative_parents, &mut findings);
    }

    Ok(findings)
}

/// Collect the ignore set: selectors of the rule following each directive comment
fn collect_ignored(stylesheet: &Stylesheet) -> Result<Vec<String>, CheckError> {
    let mut ignored = Vec::new();
    let entries = stylesheet.entries();

    for (index, entry) in entries.iter().enumerate() {
        let Entry::Comment(comment) = entry else {
            continue;
        };
        if !IGNORE_DIRECTIVE_RE.is_match(&comment.text) {
            continue;
        }

        let next_rule = entries[index + 1..]
            .iter()
            .find_map(|entry| match entry {
                Entry::Rule(rule) => Some(rule),
                Entry::Comment(_) => None,
            })
            .ok_or(CheckError::NoRulesLeft)?;

        debug!("ignoring selectors {:?} (directive at {})", next_rule.selectors, comment.position);
        ignored.extend(next_rule.selectors.iter().cloned());
    }

    Ok(ignored)
}

/// Validate one rule's selectors and record its relative-parent selectors
fn check_rule(
    rule: &Rule,
    ignored: &[String],
    relative_parents: &mut Vec<String>,
    findings: &mut Vec<Finding>,
) {
    let position = rule.position;
    let mut top_level_only = Vec::new();

    for selector in &rule.selectors {
        if covered_by(ignored, selector) {
            continue;
        }
        if selector::is_global(selector) {
            continue;
        }

        let Some(top) = selector::match_top_level(selector) else {
            findings.push(Finding::new(
                position,
                "cannot recognize top-level selector match".to_string(),
            ));
            continue;
        };

        if let Some(element) = &top.element {
            findings.push(Finding::new(
                position,
                format!("do not use top-level tag match: \"{element}\""),
            ));
        }

        match &top.remainder {
            None => top_level_only.push(selector.clone()),
            Some(remainder) => {
                check_child_chain(remainder, &top.bem_prefix(), position, findings);
            },
        }
    }

    for value in rule.position_values() {
        match value {
            "relative" => {
                debug!("relative parents at {position}: {:?}", rule.selectors);
                relative_parents.extend(rule.selectors.iter().cloned());
            },
            // fixed elements are viewport-anchored, so only genuine top-level
            // selectors count as parents
            "fixed" => relative_parents.extend(top_level_only.iter().cloned()),
            _ => {},
        }
    }
}

/// Validate the child chain of a single compound selector
fn check_child_chain(
    remainder: &str,
    bem_prefix: &str,
    position: Position,
    findings: &mut Vec<Finding>,
) {
    let parsed = chain::parse(remainder);
    let mut parent_constrained = false;

    for segment in &parsed.segments {
        let constrained = match segment.combinator {
            Combinator::Child => true,
            // constrained only if the preceding segment was itself constrained
            Combinator::Sibling => parent_constrained,
            Combinator::Descendant => false,
        };

        match (&segment.element, &segment.class) {
            (None, Some(class)) => {
                if !class.starts_with('_') && !class.starts_with(bem_prefix) {
                    findings.push(Finding::new(
                        position,
                        format!("child class must have BEM prefix: \".{class}\""),
                    ));
                }
            },
            (Some(element), None) => {
                if !constrained {
                    findings.push(Finding::new(
                        position,
                        format!(
                            "tag-based match must be a direct child or sibling of direct child: \"{element}\""
                        ),
                    ));
                }
                if element == "div" || element == "span" {
                    findings.push(Finding::new(
                        position,
                        format!("do not use non-semantic tag name: \"{element}\""),
                    ));
                }
            },
            _ => {
                findings.push(Finding::new(
                    position,
                    format!(
                        "must specify either child element or class but not both: \"{}\"",
                        segment.text
                    ),
                ));
            },
        }

        parent_constrained = constrained;
    }

    if let Some(trailer) = &parsed.invalid_trailer {
        findings.push(Finding::new(position, format!("invalid modifier: \"{trailer}\"")));
    }
}

/// Check non-relative positioned rules against the relative-parent set
fn audit_positioning(
    rule: &Rule,
    ignored: &[String],
    relative_parents: &[String],
    findings: &mut Vec<Finding>,
) {
    for value in rule.position_values() {
        if value == "relative" {
            continue;
        }
        for selector in &rule.selectors {
            if covered_by(ignored, selector) {
                continue;
            }
            if !covered_by(relative_parents, selector) {
                findings.push(Finding::new(
                    rule.position,
                    format!("no relative parent for {selector}"),
                ));
            }
        }
    }
}

/// Token-boundary prefix membership
///
/// A prefix covers a selector iff the selector starts with it and the next
/// character, if any, is not an identifier character. This keeps `.foo` from
/// covering `.foobar` while still covering `.foo .bar` and `.foo:hover`.
fn covered_by(prefixes: &[String], selector: &str) -> bool {
    prefixes.iter().any(|prefix| {
        selector
            .strip_prefix(prefix.as_str())
            .is_some_and(|rest| !rest.starts_with(is_identifier_char))
    })
}

const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-')
}
