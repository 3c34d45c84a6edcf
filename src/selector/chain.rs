//! Typed child-chain parser
//!
//! Decomposes the remainder of a selector after the top-level block class into
//! a sequence of [`Segment`]s, one per combinator step. Validation policy
//! lives in the checker; this module only produces the typed sequence.

use std::sync::LazyLock;

use regex::Regex;

// optional tag name and a class that does not start with dash (i.e. BEM modifier)
static SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9-]+|\*)?(?:\.([a-z0-9_][a-z0-9_-]*))?(.*)$").expect("valid regex")
});

static CHILD_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s+").expect("valid regex"));

static SIBLING_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\s+").expect("valid regex"));

// dash-prefixed modifier class, pseudo (with optional argument list) or attribute
static MODIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\.-[a-z0-9-]+|::?[a-z-]+(?:\([^)]*\))?|\[[^\]]+\])(.*)$")
        .expect("valid regex")
});

/// How a segment relates to the one before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Plain whitespace: any descendant
    Descendant,
    /// `>`: direct child
    Child,
    /// `+`: adjacent sibling
    Sibling,
}

/// One step of a child chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Combinator leading into this segment
    pub combinator: Combinator,
    /// Matched element name or `*`, if any
    pub element: Option<String>,
    /// Matched class name, if any
    pub class: Option<String>,
    /// Raw text from this segment to the end of the chain, for messages
    pub text: String,
}

/// A parsed child chain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildChain {
    /// Segments in selector order
    pub segments: Vec<Segment>,
    /// Trailing text that matched no modifier form; parsing stopped there
    pub invalid_trailer: Option<String>,
}

/// Parse the child chain left after the top-level block class
///
/// Peels off one combinator plus child token plus modifier run at a time.
/// A trailer that matches no modifier form halts the descent and is recorded
/// as [`ChildChain::invalid_trailer`]; segments parsed up to that point are
/// still returned.
#[must_use]
pub fn parse(remainder: &str) -> ChildChain {
    let mut segments = Vec::new();
    let mut rest = remainder.to_string();

    loop {
        let combinator = if rest.starts_with('>') {
            rest = CHILD_STRIP_RE.replace(&rest, "").into_owned();
            Combinator::Child
        } else if rest.starts_with('+') {
            rest = SIBLING_STRIP_RE.replace(&rest, "").into_owned();
            Combinator::Sibling
        } else {
            Combinator::Descendant
        };

        let Some(caps) = SEGMENT_RE.captures(&rest) else {
            return ChildChain {
                segments,
                invalid_trailer: Some(rest),
            };
        };

        let mut trailer = caps.get(3).map_or("", |m| m.as_str()).to_string();
        segments.push(Segment {
            combinator,
            element: caps.get(1).map(|m| m.as_str().to_string()),
            class: caps.get(2).map(|m| m.as_str().to_string()),
            text: rest.clone(),
        });

        while trailer.chars().next().is_some_and(|c| !c.is_whitespace()) {
            match MODIFIER_RE.captures(&trailer) {
                Some(caps) => {
                    trailer = caps.get(1).map_or("", |m| m.as_str()).to_string();
                },
                None => {
                    return ChildChain {
                        segments,
                        invalid_trailer: Some(trailer),
                    };
                },
            }
        }

        if trailer.is_empty() {
            return ChildChain {
                segments,
                invalid_trailer: None,
            };
        }
        rest = trailer.trim_start().to_string();
    }
}
