//! Tests for the checker module
//!
//! The checker runs two passes over a tokenized stylesheet: selector
//! conformance plus relative-parent collection, then the positional audit.

use airtightcss::checker::{self, CheckError, Finding};

fn run(css: &str) -> Vec<Finding> {
    checker::check_css(css).unwrap()
}

fn messages(css: &str) -> Vec<String> {
    run(css).into_iter().map(|f| f.message).collect()
}

// =============================================================================
// Selector Conformance
// =============================================================================

#[test]
fn whitespace_only_input_is_clean() {
    assert!(run(" \n\t\n ").is_empty());
}

#[test]
fn global_only_stylesheet_is_clean() {
    let css = "body { margin: 0; }\nh1 { font-size: 2em; }\n* { box-sizing: border-box; }";
    assert!(run(css).is_empty());
}

#[test]
fn bare_bem_block_is_clean() {
    assert!(run(".top-level-class {}").is_empty());
}

#[test]
fn dangling_top_modifier_reported_at_rule_start() {
    let findings = run(".-dangling-top-modifier {}");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 1);
    assert_eq!(findings[0].column, 1);
    assert_eq!(findings[0].message, "cannot recognize top-level selector match");
}

#[test]
fn private_child_and_direct_child_tag_are_clean() {
    assert!(run(".top-level ._child > h1 {}").is_empty());
}

#[test]
fn div_is_non_semantic() {
    assert_eq!(
        messages(".top-level ._child > div {}"),
        vec!["do not use non-semantic tag name: \"div\""]
    );
}

#[test]
fn span_is_non_semantic() {
    assert_eq!(
        messages(".top-level > span {}"),
        vec!["do not use non-semantic tag name: \"span\""]
    );
}

#[test]
fn unconstrained_div_gets_both_findings() {
    assert_eq!(
        messages(".top-level div {}"),
        vec![
            "tag-based match must be a direct child or sibling of direct child: \"div\"",
            "do not use non-semantic tag name: \"div\"",
        ]
    );
}

#[test]
fn deep_bem_chain_is_clean() {
    assert!(run(".menu .menu__list > li + li .menu__item.-active {}").is_empty());
}

#[test]
fn each_selector_of_a_rule_checked_in_order() {
    let findings = messages(".block .one, .block .two {}");
    assert_eq!(
        findings,
        vec![
            "child class must have BEM prefix: \".one\"",
            "child class must have BEM prefix: \".two\"",
        ]
    );
}

// =============================================================================
// Ignore Directive
// =============================================================================

#[test]
fn ignored_selectors_are_exempt_everywhere() {
    // malformed selectors after the marker never produce findings, no matter
    // how broken, and the exemption covers other occurrences in the document
    let css = "\
#totally--broken..thing {}\n\
/* airtight ignore */\n\
#totally--broken..thing {}\n";
    assert!(run(css).is_empty());
}

#[test]
fn ignore_marker_tolerates_whitespace() {
    let css = "/*   airtight   ignore   */\n#x {}";
    assert!(run(css).is_empty());
}

#[test]
fn non_matching_comment_is_not_a_directive() {
    let css = "/* airtight ignore this one */\n#x {}";
    assert_eq!(messages(css), vec!["cannot recognize top-level selector match"]);
}

#[test]
fn directive_skips_comments_to_find_next_rule() {
    let css = "/* airtight ignore */\n/* another comment */\n#x {}";
    assert!(run(css).is_empty());
}

#[test]
fn directive_without_following_rule_fails() {
    assert!(matches!(
        checker::check_css("/* airtight ignore */"),
        Err(CheckError::NoRulesLeft)
    ));
}

#[test]
fn findings_before_a_fatal_parse_are_not_needed() {
    // structural errors from tokenization propagate as CheckError::Css
    assert!(matches!(checker::check_css(".a {"), Err(CheckError::Css(_))));
}

// =============================================================================
// Positional Audit
// =============================================================================

#[test]
fn absolute_child_of_relative_parent_is_clean() {
    let css = "\
.card { position: relative; }\n\
.card .card__badge { position: absolute; }\n";
    assert!(run(css).is_empty());
}

#[test]
fn absolute_child_without_relative_parent_is_reported() {
    let css = "\
.card {}\n\
.card .card__badge { position: absolute; }\n";
    let findings = run(css);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 2);
    assert_eq!(findings[0].message, "no relative parent for .card .card__badge");
}

#[test]
fn relative_parent_covers_pseudo_suffixed_child() {
    let css = "\
.card { position: relative; }\n\
.card:hover { position: absolute; }\n";
    assert!(run(css).is_empty());
}

#[test]
fn prefix_without_token_boundary_does_not_cover() {
    let css = "\
.foo { position: relative; }\n\
.foobar { position: absolute; }\n";
    assert_eq!(messages(css), vec!["no relative parent for .foobar"]);
}

#[test]
fn rule_without_position_is_never_audited() {
    assert!(run(".card .card__badge { top: 0; }").is_empty());
}

#[test]
fn static_position_is_audited_too() {
    // any position value other than relative requires coverage
    let css = ".card .card__badge { position: static; }";
    assert_eq!(messages(css), vec!["no relative parent for .card .card__badge"]);
}

#[test]
fn fixed_top_level_selector_covers_itself() {
    assert!(run(".modal { position: fixed; }").is_empty());
}

#[test]
fn fixed_nested_selector_is_not_registered_as_parent() {
    let css = ".modal .modal__pane { position: fixed; }";
    assert_eq!(messages(css), vec!["no relative parent for .modal .modal__pane"]);
}

#[test]
fn ignored_selector_skips_positional_audit() {
    let css = "\
/* airtight ignore */\n\
#legacy {}\n\
#legacy { position: absolute; }\n";
    assert!(run(css).is_empty());
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn repeated_runs_are_identical() {
    let css = "\
.block h1 {}\n\
.block .oops { position: absolute; }\n\
.block > div {}\n";
    let first = run(css);
    let second = run(css);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn findings_follow_document_order_then_passes() {
    let css = "\
.a .bad {}\n\
.b .b__x { position: absolute; }\n\
.c div {}\n";
    let messages = messages(css);
    assert_eq!(
        messages,
        vec![
            "child class must have BEM prefix: \".bad\"",
            "tag-based match must be a direct child or sibling of direct child: \"div\"",
            "do not use non-semantic tag name: \"div\"",
            "no relative parent for .b .b__x",
        ]
    );
}
