//! Outbound navigation to external profiles.
//!
//! Opening a link is fire-and-forget: the browser owns the new browsing
//! context, and nothing about previous calls is remembered here.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use crate::content::PROFILE;

/// Browsing-context target for external links.
pub const NEW_CONTEXT: &str = "_blank";

/// Open `url` in a new browsing context. Silently ignored outside the browser
/// or when the popup is blocked.
pub fn open_external(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(url, NEW_CONTEXT).is_err() {
                log::warn!("failed to open {url}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Open the owner's GitHub profile in a new browsing context.
pub fn open_github() {
    open_external(&PROFILE.github_url());
}
