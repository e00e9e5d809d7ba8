//! Pointer position and the two spring-smoothed indicators that follow it.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use crate::util::spring::{DOT_SPRING, RING_SPRING, Spring2};

/// Outer ring diameter in px.
pub const RING_SIZE_PX: f64 = 32.0;

/// Inner dot diameter in px.
pub const DOT_SIZE_PX: f64 = 4.0;

/// Latest raw pointer coordinate in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Follower state: the raw pointer plus one spring per indicator.
///
/// Rendered positions are top-left corners, offset by half the indicator's
/// size so each shape is centred on the pointer once settled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorTrail {
    pointer: PointerPosition,
    ring: Spring2,
    dot: Spring2,
}

impl Default for CursorTrail {
    fn default() -> Self {
        let pointer = PointerPosition::default();
        let (rx, ry) = corner(pointer, RING_SIZE_PX);
        let (dx, dy) = corner(pointer, DOT_SIZE_PX);
        Self {
            pointer,
            ring: Spring2::new(RING_SPRING, rx, ry),
            dot: Spring2::new(DOT_SPRING, dx, dy),
        }
    }
}

fn corner(pointer: PointerPosition, size: f64) -> (f64, f64) {
    let half = size / 2.0;
    (pointer.x - half, pointer.y - half)
}

impl CursorTrail {
    /// Record a pointer-move event and retarget both springs.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = PointerPosition { x, y };
        let (rx, ry) = corner(self.pointer, RING_SIZE_PX);
        let (dx, dy) = corner(self.pointer, DOT_SIZE_PX);
        self.ring.set_target(rx, ry);
        self.dot.set_target(dx, dy);
    }

    /// Advance both springs. Returns `true` while either indicator is moving.
    pub fn tick(&mut self, dt_secs: f64) -> bool {
        let ring_moving = self.ring.step(dt_secs);
        let dot_moving = self.dot.step(dt_secs);
        ring_moving || dot_moving
    }

    /// Top-left of the outer ring.
    #[must_use]
    pub fn ring_position(&self) -> (f64, f64) {
        self.ring.position()
    }

    /// Top-left of the inner dot.
    #[must_use]
    pub fn dot_position(&self) -> (f64, f64) {
        self.dot.position()
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.ring.is_settled() && self.dot.is_settled()
    }
}

/// `transform` style placing an indicator at `(x, y)`.
#[must_use]
pub fn translate_style((x, y): (f64, f64)) -> String {
    format!("transform:translate3d({x:.2}px,{y:.2}px,0)")
}

/// Seconds between two millisecond timestamps. Clock skew and non-finite
/// readings yield `0`; long gaps are left to the spring's frame clamp.
#[must_use]
pub fn frame_secs(last_ms: f64, now_ms: f64) -> f64 {
    let elapsed = (now_ms - last_ms) / 1000.0;
    if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 }
}
