//! One-shot "fade and rise" entrance for page sections.
//!
//! DESIGN
//! ======
//! The observer callback only feeds intersection flags into
//! [`RevealState::observe`]; whether an animation plays is decided by the
//! tagged state, not by observer bookkeeping. Once `Revealed`, later
//! intersections are ignored.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Vertical offset (px) of hidden content.
pub const REVEAL_OFFSET_PX: f64 = 40.0;

/// Transition duration in seconds, excluding any per-section delay.
pub const REVEAL_DURATION_SECS: f64 = 0.8;

/// Ease-out curve shared by every section entrance.
pub const REVEAL_EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

/// Observer root margin; sections trigger once they are 100px inside the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "-100px";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    /// Feed one intersection observation. Returns `true` only when this call
    /// reveals the section.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && *self == RevealState::Pending {
            *self = RevealState::Revealed;
            return true;
        }
        false
    }

    /// Reveal without an observation (no `IntersectionObserver` available).
    pub fn force_reveal(&mut self) -> bool {
        self.observe(true)
    }

    #[must_use]
    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

/// Inline style for a section wrapper, parameterised by its entrance delay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    delay_secs: f64,
}

impl RevealStyle {
    /// Negative or non-finite delays are treated as zero.
    #[must_use]
    pub fn new(delay_secs: f64) -> Self {
        let delay_secs = if delay_secs.is_finite() { delay_secs.max(0.0) } else { 0.0 };
        Self { delay_secs }
    }

    #[must_use]
    pub fn css(self, state: RevealState) -> String {
        match state {
            RevealState::Pending => format!("opacity:0;transform:translateY({REVEAL_OFFSET_PX}px)"),
            RevealState::Revealed => format!(
                "opacity:1;transform:none;transition:opacity {d}s {e} {delay}s,transform {d}s {e} {delay}s",
                d = REVEAL_DURATION_SECS,
                e = REVEAL_EASING,
                delay = self.delay_secs,
            ),
        }
    }
}

/// Class list for a section: the shared base plus an optional caller class.
#[must_use]
pub fn section_class(extra: &str, state: RevealState) -> String {
    let mut class = String::from("section reveal");
    if state.is_revealed() {
        class.push_str(" reveal--revealed");
    }
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}
