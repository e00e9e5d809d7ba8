use super::*;

// =============================================================
// scroll_offset
// =============================================================

#[test]
fn scroll_offset_places_section_under_header() {
    // Section currently 850px below the viewport top, page scrolled 1200px.
    let target = scroll_offset(850.0, 1200.0, HEADER_OFFSET_PX);
    assert_eq!(target, 1950.0);

    // After scrolling to `target`, the section top sits at the header height.
    let new_top = 850.0 - (target - 1200.0);
    assert_eq!(new_top, HEADER_OFFSET_PX);
}

#[test]
fn scroll_offset_handles_sections_above_viewport() {
    assert_eq!(scroll_offset(-300.0, 2000.0, 100.0), 1600.0);
}

#[test]
fn scroll_offset_can_go_negative_near_top() {
    // The browser clamps; the math does not.
    assert_eq!(scroll_offset(40.0, 0.0, 100.0), -60.0);
}

// =============================================================
// scroll_progress
// =============================================================

#[test]
fn scroll_progress_is_fraction_of_scrollable_height() {
    assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
    assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn scroll_progress_clamps_overscroll() {
    assert_eq!(scroll_progress(-50.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn scroll_progress_is_zero_for_short_pages() {
    assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0);
}

#[test]
fn background_drift_spans_twenty_percent() {
    assert_eq!(background_drift_style(0.0), "transform:translateY(0.00%)");
    assert_eq!(background_drift_style(0.5), "transform:translateY(10.00%)");
    assert_eq!(background_drift_style(1.0), "transform:translateY(20.00%)");
    assert_eq!(background_drift_style(3.0), "transform:translateY(20.00%)");
}

// =============================================================
// DOM fallbacks
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_to_unknown_section_is_a_noop() {
    assert!(!scroll_to_section("does-not-exist"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_helpers_are_callable_without_a_browser() {
    assert!(!scroll_to_section("projects"));
    scroll_to_top();
    assert_eq!(read_scroll_progress(), 0.0);
}
