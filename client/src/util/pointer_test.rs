#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn no_fine_pointer_outside_browser() {
    assert!(!has_fine_pointer());
}
