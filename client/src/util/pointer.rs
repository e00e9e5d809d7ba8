//! Pointer capability detection.
//!
//! The cursor follower only makes sense for devices with a continuously
//! tracked pointer. Touch-first devices report a coarse pointer and keep the
//! follower inert. Requires a browser environment.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

#[cfg(feature = "hydrate")]
const FINE_POINTER_QUERY: &str = "(pointer: fine)";

/// Whether the primary pointer is a mouse/trackpad-class device.
pub fn has_fine_pointer() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(FINE_POINTER_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
