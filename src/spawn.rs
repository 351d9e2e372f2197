//! Spawning of swarm members.
//!
//! New members appear at a random point in a [`SpawnRegion`] with a random
//! heading at full speed. All randomness is drawn from the simulation's
//! injected RNG so a seeded run spawns identically every time.

use crate::arena::Arena;
use crate::config::unit_interval;
use crate::error::ConfigError;
use crate::swarm::SwarmMember;
use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Rectangle, in fractions of the arena, where new members appear.
///
/// Expressed relative to the arena so a resized window keeps spawning in the
/// same visual band.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnRegion {
    /// Lower-left corner, each component in `[0, 1]`.
    pub min: Vec2,
    /// Upper-right corner, each component in `[0, 1]`.
    pub max: Vec2,
}

impl SpawnRegion {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// The whole arena.
    pub fn full() -> Self {
        Self::new(Vec2::ZERO, Vec2::ONE)
    }

    /// Region resolved to world coordinates for `arena`.
    pub fn resolve(&self, arena: &Arena) -> (Vec2, Vec2) {
        let size = arena.size();
        (self.min * size, self.max * size)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        unit_interval("spawn.region.min.x", self.min.x)?;
        unit_interval("spawn.region.min.y", self.min.y)?;
        unit_interval("spawn.region.max.x", self.max.x)?;
        unit_interval("spawn.region.max.y", self.max.y)?;
        if self.min.x > self.max.x || self.min.y > self.max.y {
            return Err(ConfigError::Invalid {
                field: "spawn.region",
                reason: "min must not exceed max",
            });
        }
        Ok(())
    }
}

impl Default for SpawnRegion {
    /// The right-hand fifth of the arena, full height.
    fn default() -> Self {
        Self::new(Vec2::new(0.8, 0.0), Vec2::new(1.0, 1.0))
    }
}

/// Behavior when one tick crosses more than one spawn interval.
///
/// This only matters when the host stalls (e.g. a window drag) and hands in
/// a delta larger than the interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnCatchUp {
    /// At most one batch per tick; the schedule advances one interval and
    /// the backlog is paid off on following ticks.
    #[default]
    OncePerTick,
    /// One batch for every interval crossed, all in the same tick.
    EveryInterval,
}

/// Helper handed the RNG for one spawn batch.
///
/// ```ignore
/// let mut ctx = SpawnContext::new(&mut rng, arena, 2);
/// let position = ctx.random_in_region(&SpawnRegion::default());
/// let velocity = ctx.random_direction() * 150.0;
/// ```
pub struct SpawnContext<'a, R: Rng> {
    /// Size of the batch.
    pub count: usize,
    /// Arena at spawn time.
    pub arena: Arena,
    rng: &'a mut R,
}

impl<'a, R: Rng> SpawnContext<'a, R> {
    pub fn new(rng: &'a mut R, arena: Arena, count: usize) -> Self {
        Self {
            count,
            arena,
            rng,
        }
    }

    /// Random f32 in `[min, max)`; returns `min` for an empty range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    /// Uniform random point inside `region` for the current arena.
    pub fn random_in_region(&mut self, region: &SpawnRegion) -> Vec2 {
        let (lo, hi) = region.resolve(&self.arena);
        Vec2::new(self.random_range(lo.x, hi.x), self.random_range(lo.y, hi.y))
    }

    /// Uniformly distributed unit vector.
    pub fn random_direction(&mut self) -> Vec2 {
        let theta = self.rng.gen_range(0.0..TAU);
        Vec2::new(theta.cos(), theta.sin())
    }

    /// Spawn `count` members in `region`, each moving at `speed` in a random
    /// direction.
    pub fn spawn_batch(&mut self, region: &SpawnRegion, speed: f32) -> Vec<SwarmMember> {
        (0..self.count)
            .map(|_| {
                let position = self.random_in_region(region);
                let velocity = self.random_direction() * speed;
                SwarmMember::new(position, velocity)
            })
            .collect()
    }
}
