//! Damped spring driving the wheel rotation.
//!
//! The spring integrates in fixed 1 ms sub-steps and carries leftover time
//! between calls, so the trajectory depends only on the total elapsed time
//! and not on how the caller slices it. Ticks from a real terminal and ticks
//! from a test script therefore produce bit-identical positions.

use std::time::Duration;

/// Integration sub-step.
const STEP: Duration = Duration::from_millis(1);

/// Elapsed time accepted per call; the excess is dropped.
const MAX_ELAPSED: Duration = Duration::from_secs(1);

/// Physical parameters of the spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Restoring force per unit of displacement.
    pub stiffness: f64,
    /// Opposing force per unit of velocity.
    pub damping: f64,
    /// Mass being moved.
    pub mass: f64,
    /// Displacement below which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self { stiffness: 100.0, damping: 10.0, mass: 1.0, rest_delta: 0.5, rest_speed: 1.0 }
    }
}

/// One-dimensional damped spring.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
    /// Elapsed time not yet consumed by a whole sub-step.
    pending: Duration,
}

impl Spring {
    /// Create a spring resting at `position`.
    pub fn new(config: SpringConfig, position: f64) -> Self {
        Self { config, position, velocity: 0.0, target: position, pending: Duration::ZERO }
    }

    /// Current position.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current velocity, in units per second.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Position the spring is pulling toward.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Move the anchor. Velocity is preserved so retargeting mid-flight is
    /// smooth.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Whether the spring is close enough to its target, and slow enough,
    /// to stop animating.
    pub fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Jump straight to the target and stop.
    pub fn snap_to_target(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
        self.pending = Duration::ZERO;
    }

    /// Advance the simulation by `elapsed`.
    ///
    /// Snaps exactly onto the target as soon as the spring comes to rest.
    pub fn step(&mut self, elapsed: Duration) {
        if self.is_at_rest() {
            self.snap_to_target();
            return;
        }

        self.pending += elapsed.min(MAX_ELAPSED);
        let dt = STEP.as_secs_f64();

        while self.pending >= STEP {
            self.pending -= STEP;

            let displacement = self.position - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * dt;
            self.position += self.velocity * dt;

            if self.is_at_rest() {
                self.snap_to_target();
                return;
            }
        }
    }
}
