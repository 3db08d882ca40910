// SPDX-License-Identifier: MPL-2.0
//! Damped spring used to smooth the underline towards its target.
//!
//! Integration uses semi-implicit Euler with fixed substeps so the motion does
//! not depend on the frame rate. A spring is at rest once both its distance to
//! the target and its speed drop below small thresholds; it then snaps onto
//! the target and stops asking for frames.

use super::underline::UnderlineState;
use std::time::{Duration, Instant};

const MAX_SUBSTEP: f32 = 1.0 / 240.0;
/// Longest step taken for a single frame. Longer gaps (window hidden, debugger)
/// are treated as this much time so the spring never explodes.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(64);
const REST_DISTANCE: f32 = 0.01;
const REST_SPEED: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const DEFAULT_STIFFNESS: f32 = 300.0;
    pub const DEFAULT_DAMPING: f32 = 30.0;

    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STIFFNESS, Self::DEFAULT_DAMPING)
    }
}

/// One animated scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Changes the target, keeping the current velocity.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.value - self.target).abs() < REST_DISTANCE && self.velocity.abs() < REST_SPEED
    }

    /// Advances the simulation by `dt` seconds.
    pub fn step(&mut self, config: &SpringConfig, dt: f32) {
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let displacement = self.value - self.target;
            let acceleration =
                (-config.stiffness * displacement - config.damping * self.velocity) / config.mass;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

/// The underline as displayed: three springs chasing the computed target.
#[derive(Debug, Clone)]
pub struct AnimatedUnderline {
    config: SpringConfig,
    left: Spring,
    width: Spring,
    opacity: Spring,
    last_tick: Option<Instant>,
}

impl AnimatedUnderline {
    pub fn new(config: SpringConfig) -> Self {
        let start = UnderlineState::HIDDEN;
        Self {
            config,
            left: Spring::new(start.left),
            width: Spring::new(start.width),
            opacity: Spring::new(start.opacity),
            last_tick: None,
        }
    }

    pub fn retarget(&mut self, target: UnderlineState) {
        self.left.set_target(target.left);
        self.width.set_target(target.width);
        self.opacity.set_target(target.opacity);
    }

    /// Advances to `now`. The first tick after a pause only records the time.
    pub fn tick(&mut self, now: Instant) {
        let Some(last) = self.last_tick.replace(now) else {
            return;
        };
        let delta = now.saturating_duration_since(last).min(MAX_FRAME_DELTA);
        self.advance_by(delta);
    }

    pub fn advance_by(&mut self, delta: Duration) {
        let dt = delta.as_secs_f32();
        self.left.step(&self.config, dt);
        self.width.step(&self.config, dt);
        self.opacity.step(&self.config, dt);
    }

    /// Forgets the last tick so the next frame after a pause starts fresh.
    pub fn pause(&mut self) {
        self.last_tick = None;
    }

    pub fn current(&self) -> UnderlineState {
        UnderlineState {
            left: self.left.value(),
            width: self.width.value().max(0.0),
            opacity: self.opacity.value().clamp(0.0, 1.0),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.left.is_at_rest() && self.width.is_at_rest() && self.opacity.is_at_rest()
    }
}
