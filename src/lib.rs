//! # flockchase
//!
//! A 2D predator-prey chase: one energy-driven prey steered by the player,
//! and a growing swarm of flocking predators hunting it.
//!
//! The crate is the simulation core only. The host owns the window, reads
//! the keyboard and draws; each frame it calls [`Simulation::tick`] with the
//! frame time, a movement intent and the current arena size, then reads
//! poses back.
//!
//! ## Quick Start
//!
//! ```
//! use flockchase::prelude::*;
//!
//! let arena = Arena::new(800.0, 480.0);
//! let mut sim = Simulation::new(ChaseConfig::default().with_seed(42), arena).unwrap();
//! let mut input = Input::new();
//! input.press(KeyCode::Up);
//!
//! for _ in 0..60 {
//!     let report = sim.tick(1.0 / 60.0, input.movement_intent(), arena);
//!     if report.phase == Phase::Terminal {
//!         break;
//!     }
//! }
//! println!("{}", sim.snapshot().status_line());
//! ```
//!
//! ## Core Concepts
//!
//! ### Swarm
//!
//! Every [`SwarmMember`] sums four weighted [`steering`] forces each tick:
//!
//! | Behavior | Effect |
//! |----------|--------|
//! | Separation | keep personal space |
//! | Alignment | match neighbors' heading |
//! | Cohesion | drift toward neighbors |
//! | Pursuit | seek the prey |
//!
//! Speed is capped at `max_speed`, each force at `max_force`, and members
//! wrap around the arena edges.
//!
//! ### Prey
//!
//! The [`PreyAgent`] gains energy while moving and loses it while idle;
//! energy adds speed on top of a base speed. Velocity and heading are
//! smoothed toward their targets and the prey is clamped inside the arena.
//!
//! ### Capture and growth
//!
//! A predator within `capture_radius` whose velocity points at the prey ends
//! the chase ([`Phase::Terminal`]). Every `spawn.interval` seconds a batch of
//! new predators appears in the [`SpawnRegion`].
//!
//! ## Determinism
//!
//! All randomness comes from the simulation's RNG. With
//! [`ChaseConfig::with_seed`] (or [`Simulation::with_rng`]) the same inputs
//! replay the same chase.

pub mod arena;
pub mod collision;
pub mod config;
mod error;
pub mod input;
pub mod math;
pub mod prey;
pub mod simulation;
pub mod spawn;
pub mod sprite;
pub mod steering;
pub mod swarm;

pub use arena::Arena;
pub use collision::{check_capture, is_capture};
pub use config::{ChaseConfig, FlockWeights, PreyConfig, SpawnConfig, SteeringConfig};
pub use error::{ConfigError, SimulationError};
pub use glam::Vec2;
pub use input::{Input, KeyCode};
pub use math::Vec2Ext;
pub use prey::PreyAgent;
pub use simulation::{
    MemberPose, Phase, PreyPose, Simulation, SimulationState, Snapshot, TickReport, MAX_TICK_DELTA,
};
pub use spawn::{SpawnCatchUp, SpawnContext, SpawnRegion};
pub use sprite::{SpriteAnimation, SpriteInstance, SpriteKind};
pub use steering::Behavior;
pub use swarm::{Swarm, SwarmMember};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use flockchase::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arena::Arena;
    pub use crate::config::{ChaseConfig, FlockWeights, PreyConfig, SpawnConfig, SteeringConfig};
    pub use crate::input::{Input, KeyCode};
    pub use crate::math::Vec2Ext;
    pub use crate::prey::PreyAgent;
    pub use crate::simulation::{Phase, Simulation, Snapshot, TickReport};
    pub use crate::spawn::{SpawnCatchUp, SpawnRegion};
    pub use crate::sprite::{SpriteAnimation, SpriteInstance, SpriteKind};
    pub use crate::swarm::{Swarm, SwarmMember};
    pub use crate::Vec2;
}
