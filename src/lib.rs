//! airtightcss - Lint CSS for airtightness
//!
//! This library checks that stylesheets follow a restricted BEM-like naming
//! discipline (block classes at the top level, `block__element` child classes,
//! dash-prefixed modifiers) and that absolutely positioned elements are nested
//! under an element establishing relative positioning.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod checker;
pub mod css;
pub mod output;
pub mod resolver;
pub mod selector;
