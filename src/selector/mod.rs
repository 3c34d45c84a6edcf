//! Selector tokenizer
//!
//! Classifies a compound selector as global (bare tag, `*` or at-rule, exempt
//! from BEM rules) or decomposes it into an optional top element, the top-level
//! BEM block class, and the remaining child chain. The child chain itself is
//! parsed by [`chain`].

pub mod chain;

use std::sync::LazyLock;

use regex::Regex;

// simple tag name/star with possible attached pseudo- or attribute selectors
static GLOBAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9]+|\*)(::?[a-z-]+|\[[^\]]+\])*$").expect("valid regex")
});

// optional tag with non-dash-prefixed class and following BEM modifiers,
// pseudo-classes, attributes, then an optional whitespace-separated child chain
static TOP_LEVEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([a-z0-9]+)?\.([a-z0-9][a-z0-9-]*)(?:\.-[a-z0-9-]+|::?[a-z-]+|\[[^\]]+\])*(?:\s+(.*))?$",
    )
    .expect("valid regex")
});

/// Check whether a selector is exempt from BEM rules
///
/// Global selectors target a bare tag name, the universal selector, or an
/// at-rule; they short-circuit all further checks.
#[must_use]
pub fn is_global(selector: &str) -> bool {
    selector.starts_with('@') || GLOBAL_RE.is_match(selector)
}

/// The decomposed top level of a compound selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevel {
    /// Tag name attached to the block class, if any (itself a violation)
    pub element: Option<String>,
    /// The BEM block class
    pub class: String,
    /// The child chain after the block class, if any
    pub remainder: Option<String>,
}

impl TopLevel {
    /// The prefix every BEM element class of this block must carry
    #[must_use]
    pub fn bem_prefix(&self) -> String {
        format!("{}__", self.class)
    }

    /// Whether this selector stops at the block level
    #[must_use]
    pub const fn is_top_level_only(&self) -> bool {
        self.remainder.is_none()
    }
}

/// Decompose a compound selector at the top level
///
/// Returns `None` when the selector does not start with a recognizable block
/// class (possibly preceded by a tag name and followed by modifier suffixes).
#[must_use]
pub fn match_top_level(selector: &str) -> Option<TopLevel> {
    let caps = TOP_LEVEL_RE.captures(selector)?;
    Some(TopLevel {
        element: caps.get(1).map(|m| m.as_str().to_string()),
        class: caps.get(2).map_or_else(String::new, |m| m.as_str().to_string()),
        remainder: caps.get(3).map(|m| m.as_str().to_string()),
    })
}
