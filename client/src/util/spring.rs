//! Damped spring integrator used by the cursor follower.
//!
//! Each axis is a mass on a spring pulled toward a target:
//! `a = (-k * (x - target) - c * v) / m`. Integration is semi-implicit Euler
//! with fixed sub-steps, so a long frame (tab switch, GC pause) cannot blow
//! the simulation up.

#[cfg(test)]
#[path = "spring_test.rs"]
mod spring_test;

/// Largest integration step in seconds.
const MAX_SUBSTEP_SECS: f64 = 0.001;

/// Frames longer than this are clamped before integrating.
const MAX_FRAME_SECS: f64 = 0.1;

/// Distance (px) under which a spring counts as at rest.
pub const REST_DELTA: f64 = 0.01;

/// Speed (px/s) under which a spring counts as at rest.
pub const REST_SPEED: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

/// Outer ring: soft and heavy, trails the pointer like a halo.
pub const RING_SPRING: SpringConfig = SpringConfig { stiffness: 200.0, damping: 20.0, mass: 0.5 };

/// Inner dot: stiff and light, stays tight on the pointer.
pub const DOT_SPRING: SpringConfig = SpringConfig { stiffness: 400.0, damping: 30.0, mass: 0.1 };

/// One-dimensional spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// A spring at rest at `value`.
    #[must_use]
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self { config, value, velocity: 0.0, target: value }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advance by `dt_secs`. Returns `true` while the spring is still moving.
    pub fn step(&mut self, dt_secs: f64) -> bool {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }

        let mut remaining = if dt_secs.is_finite() { dt_secs.clamp(0.0, MAX_FRAME_SECS) } else { 0.0 };
        let SpringConfig { stiffness, damping, mass } = self.config;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SECS);
            let accel = (-stiffness * (self.value - self.target) - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

/// Pair of springs animating a 2-D point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    #[must_use]
    pub fn new(config: SpringConfig, x: f64, y: f64) -> Self {
        Self { x: Spring::new(config, x), y: Spring::new(config, y) }
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    /// Returns `true` while either axis is still moving.
    pub fn step(&mut self, dt_secs: f64) -> bool {
        let moving_x = self.x.step(dt_secs);
        let moving_y = self.y.step(dt_secs);
        moving_x || moving_y
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x.value(), self.y.value())
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}
