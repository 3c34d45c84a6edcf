//! Tests for the selector module
//!
//! The selector module classifies global selectors, decomposes the top level
//! of compound selectors, and parses child chains into typed segments.

use airtightcss::selector::chain::{self, Combinator};
use airtightcss::selector::{is_global, match_top_level};

// =============================================================================
// Global Classification
// =============================================================================

#[test]
fn global_selector_table() {
    for selector in ["h1", "ul", "*", "a:hover", "li::marker", "input[type=checkbox]", "@media"] {
        assert!(is_global(selector), "{selector} should be global");
    }
    for selector in [".block", "a.block", "#id", ".block > h1", "h1 .block"] {
        assert!(!is_global(selector), "{selector} should not be global");
    }
}

#[test]
fn global_pseudo_arguments_are_not_recognized() {
    // the global matcher accepts bare pseudo names only
    assert!(!is_global("li:nth-child(2)"));
}

// =============================================================================
// Top-Level Decomposition
// =============================================================================

#[test]
fn top_level_splits_element_class_and_remainder() {
    let top = match_top_level("a.nav > .nav__item").unwrap();
    assert_eq!(top.element.as_deref(), Some("a"));
    assert_eq!(top.class, "nav");
    assert_eq!(top.remainder.as_deref(), Some("> .nav__item"));
    assert_eq!(top.bem_prefix(), "nav__");
}

#[test]
fn top_level_modifier_run_before_remainder() {
    let top = match_top_level(".nav.-open .nav__item").unwrap();
    assert_eq!(top.class, "nav");
    assert_eq!(top.remainder.as_deref(), Some(".nav__item"));
}

#[test]
fn top_level_rejects_dash_class_and_id() {
    assert!(match_top_level(".-modifier").is_none());
    assert!(match_top_level("#header").is_none());
}

#[test]
fn top_level_requires_whitespace_before_remainder() {
    // `.nav>x` has no whitespace-separated child chain, so nothing matches
    assert!(match_top_level(".nav>x").is_none());
}

// =============================================================================
// Child Chains
// =============================================================================

#[test]
fn chain_combinators_in_order() {
    let chain = chain::parse(".a__x > h1 + h2 .a__y");
    let combinators: Vec<_> = chain.segments.iter().map(|s| s.combinator).collect();
    assert_eq!(
        combinators,
        vec![
            Combinator::Descendant,
            Combinator::Child,
            Combinator::Sibling,
            Combinator::Descendant,
        ]
    );
}

#[test]
fn chain_segment_fields() {
    let chain = chain::parse("> li ._private");
    assert_eq!(chain.segments[0].element.as_deref(), Some("li"));
    assert_eq!(chain.segments[0].class, None);
    assert_eq!(chain.segments[1].element, None);
    assert_eq!(chain.segments[1].class.as_deref(), Some("_private"));
}

#[test]
fn chain_attribute_and_pseudo_modifiers() {
    let chain = chain::parse(".a__x[data-open]:not(.-closed)::before");
    assert_eq!(chain.segments.len(), 1);
    assert!(chain.invalid_trailer.is_none());
}

#[test]
fn chain_invalid_trailer_reported_verbatim() {
    let chain = chain::parse(".a__x#frag");
    assert_eq!(chain.invalid_trailer.as_deref(), Some("#frag"));
}
