//! Smooth in-page scrolling and scroll-progress helpers.
//!
//! The offset math is pure and shared by both render targets; the DOM calls
//! only exist in the `hydrate` build. On the server every scroll request is a
//! no-op that reports `false`.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Height (px) reserved for the fixed navigation bar.
pub const HEADER_OFFSET_PX: f64 = 100.0;

/// How far the background drifts (percent of its height) over a full page scroll.
pub const BACKGROUND_DRIFT_PERCENT: f64 = 20.0;

/// Absolute scroll position that puts an element `header_offset` pixels below
/// the viewport top.
///
/// `element_top` is the element's current top relative to the viewport (as
/// reported by `getBoundingClientRect`), `page_offset` the current vertical
/// scroll position.
#[must_use]
pub fn scroll_offset(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    element_top + page_offset - header_offset
}

/// Fraction of the scrollable distance already scrolled, in `[0, 1]`.
///
/// Pages that fit in the viewport report `0`.
#[must_use]
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Inline style for the drifting page background.
#[must_use]
pub fn background_drift_style(progress: f64) -> String {
    format!("transform:translateY({:.2}%)", progress.clamp(0.0, 1.0) * BACKGROUND_DRIFT_PERCENT)
}

/// Smoothly scroll so the element with `id` sits just under the header.
///
/// Returns `false` without scrolling when no element has that id.
pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
            log::debug!("scroll target #{id} not found");
            return false;
        };
        let element_top = element.get_bounding_client_rect().top();
        let page_offset = window.scroll_y().unwrap_or(0.0);
        smooth_scroll_to(&window, scroll_offset(element_top, page_offset, HEADER_OFFSET_PX));
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}

/// Smoothly scroll back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            smooth_scroll_to(&window, 0.0);
        }
    }
}

/// Current scroll progress of the page; `0` outside the browser.
pub fn read_scroll_progress() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let document_height = window
            .document()
            .and_then(|doc| doc.document_element())
            .map_or(0.0, |el| f64::from(el.scroll_height()));
        scroll_progress(scroll_y, document_height, viewport_height)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

#[cfg(feature = "hydrate")]
fn smooth_scroll_to(window: &web_sys::Window, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
