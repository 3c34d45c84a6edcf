//! CSS tokenizer
//!
//! A small scanner that turns raw CSS text into the ordered entry list the
//! checker works on. It deliberately understands just enough CSS: top-level
//! comments, qualified rules with declaration blocks, and at-rules (which are
//! consumed without producing entries, since the checker never inspects
//! their contents).

use thiserror::Error;

use super::{Comment, Declaration, Entry, Position, Rule, Stylesheet};

/// Errors for structurally malformed CSS
///
/// These are fatal: the stylesheet could not be tokenized, so the lint never
/// ran. They are distinct from findings, which describe style violations in
/// well-formed input.
#[derive(Debug, Clone, Copy, Error)]
pub enum ParseError {
    /// A `/*` comment with no closing `*/`
    #[error("unterminated comment at {0}")]
    UnterminatedComment(Position),

    /// Selector text that never reaches a `{`
    #[error("missing '{{' for rule at {0}")]
    MissingBlock(Position),

    /// A block opened with `{` that never closes
    #[error("missing '}}' for block opened at {0}")]
    UnterminatedBlock(Position),

    /// A declaration without a `:` separator
    #[error("missing ':' in declaration at {0}")]
    MissingColon(Position),

    /// An at-rule that reaches end of input before `;` or a block
    #[error("unterminated at-rule at {0}")]
    UnterminatedAtRule(Position),
}

/// Tokenize raw CSS text into a stylesheet
pub fn parse(input: &str) -> Result<Stylesheet, ParseError> {
    Scanner::new(input).run()
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn run(mut self) -> Result<Stylesheet, ParseError> {
        let mut entries = Vec::new();

        loop {
            self.skip_whitespace();
            if self.eof() {
                break;
            }

            if self.at_comment() {
                entries.push(Entry::Comment(self.comment()?));
            } else if self.peek() == Some('@') {
                self.at_rule()?;
            } else {
                entries.push(Entry::Rule(self.rule()?));
            }
        }

        Ok(Stylesheet::new(entries))
    }

    fn eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    const fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn at_comment(&self) -> bool {
        self.peek() == Some('/') && self.chars.get(self.pos + 1) == Some(&'*')
    }

    /// Consume a `/* ... */` comment and return its text
    fn comment(&mut self) -> Result<Comment, ParseError> {
        let position = self.position();
        self.bump();
        self.bump();

        let mut text = String::new();
        loop {
            if self.eof() {
                return Err(ParseError::UnterminatedComment(position));
            }
            if self.peek() == Some('*') && self.chars.get(self.pos + 1) == Some(&'/') {
                self.bump();
                self.bump();
                return Ok(Comment { text, position });
            }
            if let Some(c) = self.bump() {
                text.push(c);
            }
        }
    }

    /// Consume an at-rule, either `@...;` or `@... { ... }`, producing no entry
    fn at_rule(&mut self) -> Result<(), ParseError> {
        let position = self.position();

        loop {
            if self.eof() {
                return Err(ParseError::UnterminatedAtRule(position));
            }
            if self.at_comment() {
                self.comment()?;
                continue;
            }
            match self.peek() {
                Some(';') => {
                    self.bump();
                    return Ok(());
                },
                Some('{') => return self.skip_block(),
                _ => {
                    self.bump();
                },
            }
        }
    }

    /// Consume a brace-balanced block starting at the current `{`
    fn skip_block(&mut self) -> Result<(), ParseError> {
        let open = self.position();
        self.bump();
        let mut depth: usize = 1;

        loop {
            if self.eof() {
                return Err(ParseError::UnterminatedBlock(open));
            }
            if self.at_comment() {
                self.comment()?;
                continue;
            }
            match self.bump() {
                Some('{') => depth += 1,
                Some('}') => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                },
                _ => {},
            }
        }
    }

    /// Consume a qualified rule: selectors up to `{`, then the declaration block
    fn rule(&mut self) -> Result<Rule, ParseError> {
        let position = self.position();
        let mut selector_text = String::new();

        loop {
            if self.eof() {
                return Err(ParseError::MissingBlock(position));
            }
            if self.at_comment() {
                self.comment()?;
                selector_text.push(' ');
                continue;
            }
            if self.peek() == Some('{') {
                break;
            }
            if let Some(c) = self.bump() {
                selector_text.push(c);
            }
        }

        let open = self.position();
        self.bump();
        let declarations = self.declarations()?;

        if self.eof() {
            return Err(ParseError::UnterminatedBlock(open));
        }
        self.bump();

        Ok(Rule {
            selectors: split_selectors(&selector_text),
            declarations,
            position,
        })
    }

    /// Consume declarations until the closing `}` (left unconsumed) or end of input
    fn declarations(&mut self) -> Result<Vec<Declaration>, ParseError> {
        let mut declarations = Vec::new();

        loop {
            self.skip_whitespace();
            if self.at_comment() {
                self.comment()?;
                continue;
            }
            match self.peek() {
                None | Some('}') => return Ok(declarations),
                Some(';') => {
                    self.bump();
                    continue;
                },
                _ => {},
            }

            let start = self.position();
            let mut property = String::new();
            loop {
                match self.peek() {
                    None | Some('}' | ';') => return Err(ParseError::MissingColon(start)),
                    Some(':') => {
                        self.bump();
                        break;
                    },
                    Some(_) => {
                        if self.at_comment() {
                            self.comment()?;
                        } else if let Some(c) = self.bump() {
                            property.push(c);
                        }
                    },
                }
            }

            // parentheses may contain semicolons, e.g. data URIs
            let mut value = String::new();
            let mut parens: usize = 0;
            loop {
                match self.peek() {
                    None | Some('}') => break,
                    Some(';') if parens == 0 => {
                        self.bump();
                        break;
                    },
                    Some(c) => {
                        if self.at_comment() {
                            self.comment()?;
                            continue;
                        }
                        if c == '(' {
                            parens += 1;
                        } else if c == ')' {
                            parens = parens.saturating_sub(1);
                        }
                        self.bump();
                        value.push(c);
                    },
                }
            }

            declarations.push(Declaration {
                property: property.trim().to_string(),
                value: value.trim().to_string(),
            });
        }
    }
}

/// Split selector text on top-level commas and normalize whitespace
fn split_selectors(text: &str) -> Vec<String> {
    let mut selectors = Vec::new();
    let mut current = String::new();
    let mut brackets: usize = 0;
    let mut parens: usize = 0;

    for c in text.chars() {
        match c {
            '[' => brackets += 1,
            ']' => brackets = brackets.saturating_sub(1),
            '(' => parens += 1,
            ')' => parens = parens.saturating_sub(1),
            ',' if brackets == 0 && parens == 0 => {
                push_selector(&mut selectors, &current);
                current.clear();
                continue;
            },
            _ => {},
        }
        current.push(c);
    }
    push_selector(&mut selectors, &current);

    selectors
}

fn push_selector(selectors: &mut Vec<String>, raw: &str) {
    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if !normalized.is_empty() {
        selectors.push(normalized);
    }
}
