//! Snapshot tests for exported artifacts
//!
//! These pin the exact text of the deterministic artifacts for the default
//! configuration. Run `cargo insta review` to review and accept changes.

use insta::assert_snapshot;
use tokensmith::config::TokenConfig;
use tokensmith::export::{css, tailwind};

#[test]
fn test_css_variables_default() {
    let artifact = css::render(&TokenConfig::default());
    assert_snapshot!("css_variables_default", artifact);
}

#[test]
fn test_tailwind_theme_default() {
    let artifact = tailwind::render(&TokenConfig::default());
    assert_snapshot!("tailwind_theme_default", artifact);
}
