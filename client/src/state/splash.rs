//! Splash overlay lifecycle.
//!
//! The page starts `Loading` with the overlay covering everything. A one-shot
//! timer calls [`SplashState::finish`] after [`SPLASH_DELAY`], which is the
//! only loading → loaded transition. The overlay then plays its exit
//! transition for [`SPLASH_EXIT`] before [`SplashState::retire`] unmounts it.

#[cfg(test)]
#[path = "splash_test.rs"]
mod splash_test;

use std::time::Duration;

/// How long the overlay is shown before the page counts as loaded.
pub const SPLASH_DELAY: Duration = Duration::from_millis(800);

/// Length of the overlay's fade-out once loaded.
pub const SPLASH_EXIT: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplashState {
    /// Overlay visible, page content hidden behind it.
    #[default]
    Loading,
    /// Loaded; overlay still mounted while it fades out.
    Exiting,
    /// Loaded; overlay removed.
    Done,
}

impl SplashState {
    /// Flip to loaded. Returns `true` only for the call that made the transition.
    pub fn finish(&mut self) -> bool {
        if *self == SplashState::Loading {
            *self = SplashState::Exiting;
            true
        } else {
            false
        }
    }

    /// Drop the overlay after its exit transition. No effect while still loading.
    pub fn retire(&mut self) -> bool {
        if *self == SplashState::Exiting {
            *self = SplashState::Done;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_loading(self) -> bool {
        self == SplashState::Loading
    }

    #[must_use]
    pub fn overlay_mounted(self) -> bool {
        self != SplashState::Done
    }

    /// CSS class for the overlay element.
    #[must_use]
    pub fn overlay_class(self) -> &'static str {
        if self.is_loading() { "splash" } else { "splash splash--exit" }
    }
}
