//! The player-controlled prey.
//!
//! Moving charges energy, idling drains it, and energy buys speed on top of
//! a base speed that is always available. Velocity and heading are both
//! exponentially smoothed toward their targets with a fixed per-tick
//! factor, so responsiveness depends on frame rate.
//!
//! Heading is measured relative to a sprite that faces left at rest:
//! `0` means facing -X, `90` facing -Y, `180` facing +X.

use crate::arena::Arena;
use crate::config::PreyConfig;
use crate::math::{shortest_angle_delta, wrap_degrees, Vec2Ext};
use glam::Vec2;
use serde::Serialize;

/// The single prey agent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PreyAgent {
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) heading: f32,
    pub(crate) energy: f32,
    /// Seconds since creation, for animation.
    pub(crate) state_time: f32,
    #[serde(skip)]
    config: PreyConfig,
}

impl PreyAgent {
    /// Create a prey at rest with no energy.
    pub fn new(position: Vec2, config: PreyConfig) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            heading: 0.0,
            energy: 0.0,
            state_time: 0.0,
            config,
        }
    }

    /// Create a prey at its configured start: `start_x` from the left edge,
    /// vertically centered.
    pub fn spawn(arena: &Arena, config: PreyConfig) -> Self {
        let position = Vec2::new(config.start_x, arena.height / 2.0);
        Self::new(arena.clamp(position, config.footprint), config)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Heading in degrees, in `(-180, 180]`.
    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    #[inline]
    pub fn energy(&self) -> f32 {
        self.energy
    }

    /// Energy as a fraction of the maximum, in `[0, 1]`.
    #[inline]
    pub fn energy_fraction(&self) -> f32 {
        self.energy / self.config.max_energy
    }

    #[inline]
    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    #[inline]
    pub fn config(&self) -> &PreyConfig {
        &self.config
    }

    /// Speed the prey would travel at if moving with its current energy.
    pub fn current_speed(&self) -> f32 {
        let c = &self.config;
        c.base_speed + self.energy_fraction() * c.base_speed * c.energy_speed_factor
    }

    /// Advance one tick.
    ///
    /// `intent` is the raw movement request from the host; any non-zero
    /// vector counts as moving and only its direction is used.
    pub fn update(&mut self, intent: Vec2, dt: f32, arena: &Arena) {
        self.state_time += dt;

        let direction = intent.unit_or_zero();
        let moving = direction != Vec2::ZERO;

        let c = self.config;
        self.energy = if moving {
            (self.energy + c.energy_gain_rate * dt).min(c.max_energy)
        } else {
            (self.energy - c.energy_decay_rate * dt).max(0.0)
        };

        let desired = if moving {
            direction * self.current_speed()
        } else {
            Vec2::ZERO
        };
        self.velocity = self.velocity.lerp(desired, c.velocity_smoothing);

        self.position += self.velocity * dt;

        if self.velocity.length() > c.heading_threshold {
            let target = self.velocity.angle_degrees() - 180.0;
            let delta = shortest_angle_delta(self.heading, target);
            self.heading = wrap_degrees(self.heading + delta * c.heading_smoothing);
        }

        self.position = arena.clamp(self.position, c.footprint);
    }
}
