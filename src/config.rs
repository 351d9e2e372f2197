//! Simulation parameters.
//!
//! Every tunable lives here, grouped by the agent it affects. Defaults
//! reproduce the classic shark-and-fish tuning. All types round-trip through
//! JSON so a host can ship presets next to its assets.
//!
//! # Example
//!
//! ```
//! use flockchase::{ChaseConfig, SpawnCatchUp};
//!
//! let config = ChaseConfig::default()
//!     .with_seed(7)
//!     .with_capture_radius(25.0)
//!     .with_catch_up(SpawnCatchUp::EveryInterval);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::ConfigError;
use crate::spawn::{SpawnCatchUp, SpawnRegion};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Limits and radii shared by every swarm member.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    /// Speed cap, units per second.
    pub max_speed: f32,
    /// Magnitude cap for each individual steering force.
    pub max_force: f32,
    /// Radius for alignment and cohesion.
    pub neighbor_distance: f32,
    /// Radius for separation.
    pub desired_separation: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            max_speed: 150.0,
            max_force: 50.0,
            neighbor_distance: 100.0,
            desired_separation: 40.0,
        }
    }
}

/// How strongly each behavior contributes to a member's acceleration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockWeights {
    pub separation: f32,
    pub alignment: f32,
    pub cohesion: f32,
    pub pursuit: f32,
}

impl Default for FlockWeights {
    fn default() -> Self {
        // Strong separation and weak cohesion split the swarm into several
        // hunting groups instead of one clump.
        Self {
            separation: 3.0,
            alignment: 1.0,
            cohesion: 0.5,
            pursuit: 2.0,
        }
    }
}

/// Prey kinematics and energy model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreyConfig {
    pub max_energy: f32,
    /// Energy gained per second while moving.
    pub energy_gain_rate: f32,
    /// Energy lost per second while idle.
    pub energy_decay_rate: f32,
    /// Speed at zero energy.
    pub base_speed: f32,
    /// Extra speed at full energy, as a multiple of `base_speed`.
    pub energy_speed_factor: f32,
    /// Per-tick lerp factor from current to desired velocity.
    pub velocity_smoothing: f32,
    /// Per-tick fraction of the heading error that is corrected.
    pub heading_smoothing: f32,
    /// Below this speed the heading is left alone.
    pub heading_threshold: f32,
    /// Width and height of the prey's box, anchored at its position.
    pub footprint: Vec2,
    /// Distance from the left edge at start; the prey is vertically centered.
    pub start_x: f32,
}

impl Default for PreyConfig {
    fn default() -> Self {
        Self {
            max_energy: 100.0,
            energy_gain_rate: 50.0,
            energy_decay_rate: 30.0,
            base_speed: 100.0,
            energy_speed_factor: 1.0,
            velocity_smoothing: 0.1,
            heading_smoothing: 0.1,
            heading_threshold: 0.1,
            footprint: Vec2::new(48.0, 24.0),
            start_x: 50.0,
        }
    }
}

/// Population growth schedule.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Members created with the simulation.
    pub initial_count: usize,
    /// Members added per spawn event.
    pub batch_size: usize,
    /// Seconds between spawn events; the first fires at this time too.
    pub interval: f32,
    /// Where new members appear, as fractions of the arena.
    pub region: SpawnRegion,
    /// What to do when a single tick crosses several intervals.
    pub catch_up: SpawnCatchUp,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            initial_count: 4,
            batch_size: 2,
            interval: 10.0,
            region: SpawnRegion::default(),
            catch_up: SpawnCatchUp::default(),
        }
    }
}

/// Complete configuration for a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseConfig {
    pub steering: SteeringConfig,
    pub weights: FlockWeights,
    pub prey: PreyConfig,
    pub spawn: SpawnConfig,
    /// A predator closer than this, and facing the prey, captures it.
    pub capture_radius: f32,
    /// Box size used for predator sprites.
    pub predator_footprint: Vec2,
    /// Upper bound applied to each tick's delta time. `None` trusts the host.
    pub max_delta: Option<f32>,
    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            steering: SteeringConfig::default(),
            weights: FlockWeights::default(),
            prey: PreyConfig::default(),
            spawn: SpawnConfig::default(),
            capture_radius: 30.0,
            predator_footprint: Vec2::new(64.0, 32.0),
            max_delta: None,
            seed: None,
        }
    }
}

impl ChaseConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fix the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_capture_radius(mut self, radius: f32) -> Self {
        self.capture_radius = radius;
        self
    }

    pub fn with_steering(mut self, steering: SteeringConfig) -> Self {
        self.steering = steering;
        self
    }

    pub fn with_weights(mut self, weights: FlockWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_prey(mut self, prey: PreyConfig) -> Self {
        self.prey = prey;
        self
    }

    pub fn with_spawn(mut self, spawn: SpawnConfig) -> Self {
        self.spawn = spawn;
        self
    }

    /// Set the number of members present at start.
    pub fn with_initial_population(mut self, count: usize) -> Self {
        self.spawn.initial_count = count;
        self
    }

    pub fn with_catch_up(mut self, catch_up: SpawnCatchUp) -> Self {
        self.spawn.catch_up = catch_up;
        self
    }

    /// Clamp every tick's delta time to at most `max_delta` seconds.
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = Some(max_delta);
        self
    }

    /// Check every parameter is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.steering;
        positive("steering.max_speed", s.max_speed)?;
        non_negative("steering.max_force", s.max_force)?;
        non_negative("steering.neighbor_distance", s.neighbor_distance)?;
        non_negative("steering.desired_separation", s.desired_separation)?;

        let w = &self.weights;
        finite("weights.separation", w.separation)?;
        finite("weights.alignment", w.alignment)?;
        finite("weights.cohesion", w.cohesion)?;
        finite("weights.pursuit", w.pursuit)?;

        let p = &self.prey;
        positive("prey.max_energy", p.max_energy)?;
        non_negative("prey.energy_gain_rate", p.energy_gain_rate)?;
        non_negative("prey.energy_decay_rate", p.energy_decay_rate)?;
        non_negative("prey.base_speed", p.base_speed)?;
        non_negative("prey.energy_speed_factor", p.energy_speed_factor)?;
        unit_interval("prey.velocity_smoothing", p.velocity_smoothing)?;
        unit_interval("prey.heading_smoothing", p.heading_smoothing)?;
        non_negative("prey.heading_threshold", p.heading_threshold)?;
        non_negative("prey.footprint.x", p.footprint.x)?;
        non_negative("prey.footprint.y", p.footprint.y)?;
        finite("prey.start_x", p.start_x)?;

        positive("spawn.interval", self.spawn.interval)?;
        self.spawn.region.validate()?;

        non_negative("capture_radius", self.capture_radius)?;
        non_negative("predator_footprint.x", self.predator_footprint.x)?;
        non_negative("predator_footprint.y", self.predator_footprint.y)?;
        if let Some(max_delta) = self.max_delta {
            positive("max_delta", max_delta)?;
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be finite",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: "must not be negative",
        });
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

pub(crate) fn unit_interval(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::Invalid {
            field,
            reason: "must be within [0, 1]",
        });
    }
    Ok(())
}
