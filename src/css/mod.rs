//! Stylesheet data model and tokenizer
//!
//! The checker consumes an already-tokenized stylesheet: an ordered list of
//! entries, each either a comment or a rule with selectors, declarations and
//! a 1-based source position. [`parse`] produces that list from raw CSS text.
//!
//! Order is significant: directive comments and `position` declarations only
//! make sense relative to the rules around them, so entries are kept in
//! document order.

mod parser;

pub use parser::{ParseError, parse};

/// A 1-based source position (line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number, starting at 1
    pub line: u32,
    /// Column number, starting at 1
    pub column: u32,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A property/value pair inside a rule block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name, trimmed (e.g. `position`)
    pub property: String,
    /// Property value, trimmed (e.g. `relative`)
    pub value: String,
}

/// A comment appearing between rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment text between the `/*` and `*/` markers
    pub text: String,
    /// Position of the opening `/*`
    pub position: Position,
}

/// A qualified rule: selectors plus a declaration block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Selector strings, split on top-level commas and whitespace-normalized
    pub selectors: Vec<String>,
    /// Declarations in block order
    pub declarations: Vec<Declaration>,
    /// Position of the first selector character
    pub position: Position,
}

impl Rule {
    /// Iterate over the values of this rule's `position` declarations
    pub fn position_values(&self) -> impl Iterator<Item = &str> {
        self.declarations
            .iter()
            .filter(|decl| decl.property == "position")
            .map(|decl| decl.value.as_str())
    }
}

/// One entry of a stylesheet, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A comment between rules
    Comment(Comment),
    /// A qualified rule
    Rule(Rule),
}

/// An ordered sequence of comments and rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    entries: Vec<Entry>,
}

impl Stylesheet {
    /// Create a stylesheet from a list of entries
    #[must_use]
    pub const fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// The entries in document order
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate over the rules, skipping comments
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Rule(rule) => Some(rule),
            Entry::Comment(_) => None,
        })
    }
}
