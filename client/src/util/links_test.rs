#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn external_links_target_new_context() {
    assert_eq!(NEW_CONTEXT, "_blank");
}

#[test]
fn open_github_is_repeatable() {
    // Each call is independent; nothing accumulates between invocations.
    open_github();
    open_github();
    open_github();
    assert_eq!(PROFILE.github_url(), "https://github.com/owais1724");
}

#[test]
fn open_external_is_noop_but_callable() {
    open_external("https://example.com");
    open_external("");
}
