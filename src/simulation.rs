//! Simulation orchestrator.
//!
//! [`Simulation`] owns the whole chase: the prey, the swarm, the clock and
//! the spawn schedule. The host drives it with one [`Simulation::tick`] per
//! frame and reads positions back through [`Simulation::snapshot`] or
//! [`Simulation::sprite_instances`].
//!
//! Each running tick, in order:
//!
//! 1. advance the clock
//! 2. update the prey from the movement intent
//! 3. update every swarm member, in population order
//! 4. test every member for a capture; any capture ends the chase
//! 5. apply the spawn schedule
//!
//! Once a capture has happened the simulation is [`Phase::Terminal`] and
//! further ticks change nothing.

use crate::arena::Arena;
use crate::collision::check_capture;
use crate::config::ChaseConfig;
use crate::error::SimulationError;
use crate::prey::PreyAgent;
use crate::spawn::{SpawnCatchUp, SpawnContext};
use crate::sprite::{SpriteAnimation, SpriteInstance, SpriteKind};
use crate::swarm::{Swarm, SwarmMember};
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Longest delta a single tick will simulate, in seconds.
///
/// Larger values are cut down to this regardless of
/// [`ChaseConfig::max_delta`].
pub const MAX_TICK_DELTA: f32 = 60.0;

/// Lifecycle of a chase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Running,
    /// The prey was caught. Absorbing.
    Terminal,
}

/// Everything that changes from tick to tick.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationState {
    elapsed: f32,
    next_spawn_time: f32,
    ticks: u64,
    swarm: Swarm,
    prey: PreyAgent,
    phase: Phase,
    captured_by: Option<usize>,
}

impl SimulationState {
    /// Seconds simulated so far.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Elapsed time at which the next spawn batch is due.
    #[inline]
    pub fn next_spawn_time(&self) -> f32 {
        self.next_spawn_time
    }

    /// Running ticks processed.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    #[inline]
    pub fn prey(&self) -> &PreyAgent {
        &self.prey
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// Index of the member that caught the prey, once terminal.
    #[inline]
    pub fn captured_by(&self) -> Option<usize> {
        self.captured_by
    }
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Phase after the tick.
    pub phase: Phase,
    /// Delta time actually simulated, after sanitizing.
    pub dt: f32,
    /// First member (in population order) that caught the prey this tick.
    pub captured_by: Option<usize>,
    /// Members appended by the spawn schedule this tick.
    pub spawned: usize,
}

/// Pose of one swarm member.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberPose {
    pub position: Vec2,
    pub velocity: Vec2,
    /// `angle_degrees(velocity)`.
    pub heading_degrees: f32,
}

/// Pose of the prey.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreyPose {
    pub position: Vec2,
    pub heading_degrees: f32,
    pub energy: f32,
}

/// Read-only view of a tick's outcome for the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub elapsed: f32,
    pub phase: Phase,
    pub prey: PreyPose,
    pub swarm: Vec<MemberPose>,
}

impl Snapshot {
    pub fn population(&self) -> usize {
        self.swarm.len()
    }

    /// HUD text: survival timer with one decimal and the shark count.
    pub fn status_line(&self) -> String {
        format!("Time: {:.1}  Sharks: {}", self.elapsed, self.population())
    }
}

/// The chase simulation.
///
/// Generic over the random source so tests and replays can inject their
/// own; the default is a seedable ChaCha8.
///
/// # Example
///
/// ```
/// use flockchase::{Arena, ChaseConfig, Simulation};
/// use glam::Vec2;
///
/// let arena = Arena::new(800.0, 480.0);
/// let mut sim = Simulation::new(ChaseConfig::default().with_seed(1), arena).unwrap();
/// let report = sim.tick(1.0 / 60.0, Vec2::new(0.0, 1.0), arena);
/// assert!(report.dt > 0.0);
/// assert_eq!(sim.population(), 4);
/// ```
pub struct Simulation<R: Rng = ChaCha8Rng> {
    config: ChaseConfig,
    state: SimulationState,
    rng: R,
    animation: SpriteAnimation,
}

impl Simulation<ChaCha8Rng> {
    /// Build a simulation, seeding the RNG from `config.seed` or the OS.
    pub fn new(config: ChaseConfig, arena: Arena) -> Result<Self, SimulationError> {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, arena, rng)
    }
}

impl<R: Rng> Simulation<R> {
    /// Build a simulation drawing all randomness from `rng`.
    ///
    /// The prey starts at its configured position and
    /// `spawn.initial_count` members are spawned in the spawn region.
    pub fn with_rng(config: ChaseConfig, arena: Arena, mut rng: R) -> Result<Self, SimulationError> {
        config.validate()?;
        if !arena.is_valid() {
            return Err(SimulationError::EmptyArena {
                width: arena.width,
                height: arena.height,
            });
        }

        let prey = PreyAgent::spawn(&arena, config.prey);
        let members = SpawnContext::new(&mut rng, arena, config.spawn.initial_count)
            .spawn_batch(&config.spawn.region, config.steering.max_speed);

        info!(
            population = members.len(),
            width = arena.width,
            height = arena.height,
            "chase started"
        );

        let state = SimulationState {
            elapsed: 0.0,
            next_spawn_time: config.spawn.interval,
            ticks: 0,
            swarm: Swarm::from_members(members),
            prey,
            phase: Phase::Running,
            captured_by: None,
        };

        Ok(Self {
            config,
            state,
            rng,
            animation: SpriteAnimation::default(),
        })
    }

    /// Replace the population, e.g. to stage a scenario.
    pub fn with_swarm(mut self, members: Vec<SwarmMember>) -> Self {
        self.state.swarm = Swarm::from_members(members);
        self
    }

    /// Replace the prey.
    pub fn with_prey(mut self, prey: PreyAgent) -> Self {
        self.state.prey = prey;
        self
    }

    /// Use a different sprite-sheet layout for the prey.
    pub fn with_animation(mut self, animation: SpriteAnimation) -> Self {
        self.animation = animation;
        self
    }

    #[inline]
    pub fn config(&self) -> &ChaseConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.state.elapsed
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.state.swarm.len()
    }

    #[inline]
    pub fn prey(&self) -> &PreyAgent {
        &self.state.prey
    }

    #[inline]
    pub fn swarm(&self) -> &Swarm {
        &self.state.swarm
    }

    /// Advance the chase by `dt` seconds.
    ///
    /// `intent` is the raw movement request for the prey and `arena` the
    /// current play area. Negative or non-finite `dt` is treated as zero and
    /// anything above [`MAX_TICK_DELTA`] is cut down to it; a non-finite
    /// intent counts as no input. A tick with an empty arena (minimized
    /// window) is skipped entirely.
    pub fn tick(&mut self, dt: f32, intent: Vec2, arena: Arena) -> TickReport {
        if self.state.is_terminal() {
            return TickReport {
                phase: Phase::Terminal,
                ..Default::default()
            };
        }
        if !arena.is_valid() {
            warn!(width = arena.width, height = arena.height, "skipping tick for empty arena");
            return TickReport::default();
        }

        let dt = self.sanitize_delta(dt);
        let intent = if intent.is_finite() {
            intent
        } else {
            warn!(?intent, "ignoring non-finite movement intent");
            Vec2::ZERO
        };

        let state = &mut self.state;
        state.elapsed += dt;
        state.ticks += 1;

        state.prey.update(intent, dt, &arena);
        state.swarm.update(
            state.prey.position(),
            dt,
            &arena,
            &self.config.steering,
            &self.config.weights,
        );

        let radius = self.config.capture_radius;
        let captured_by = state
            .swarm
            .iter()
            .position(|m| check_capture(m, &state.prey, radius));
        if let Some(index) = captured_by {
            state.phase = Phase::Terminal;
            state.captured_by = Some(index);
            info!(
                predator = index,
                elapsed = state.elapsed,
                population = state.swarm.len(),
                "prey captured"
            );
        }

        let spawned = self.apply_spawn_schedule(arena);

        TickReport {
            phase: self.state.phase,
            dt,
            captured_by,
            spawned,
        }
    }

    fn sanitize_delta(&self, dt: f32) -> f32 {
        if !dt.is_finite() || dt < 0.0 {
            warn!(dt, "invalid delta time, simulating zero");
            return 0.0;
        }
        if dt > MAX_TICK_DELTA {
            warn!(dt, max = MAX_TICK_DELTA, "delta time too large, clamping");
        }
        let dt = dt.min(MAX_TICK_DELTA);
        match self.config.max_delta {
            Some(max) => dt.min(max),
            None => dt,
        }
    }

    /// Append spawn batches that are due. Returns the number of members added.
    fn apply_spawn_schedule(&mut self, arena: Arena) -> usize {
        let spawn = self.config.spawn;
        let mut spawned = 0;
        while self.state.elapsed >= self.state.next_spawn_time {
            let next = self.state.next_spawn_time + spawn.interval;
            if next <= self.state.next_spawn_time {
                // interval below f32 resolution at this elapsed time
                warn!(next_spawn_time = next, "spawn schedule cannot advance");
                break;
            }

            let batch = SpawnContext::new(&mut self.rng, arena, spawn.batch_size)
                .spawn_batch(&spawn.region, self.config.steering.max_speed);
            spawned += batch.len();
            self.state.swarm.extend(batch);
            self.state.next_spawn_time = next;
            debug!(
                elapsed = self.state.elapsed,
                next_spawn_time = next,
                population = self.state.swarm.len(),
                "spawned batch"
            );

            if spawn.catch_up == SpawnCatchUp::OncePerTick {
                break;
            }
        }
        spawned
    }

    /// Poses of every agent for the host.
    pub fn snapshot(&self) -> Snapshot {
        let prey = &self.state.prey;
        Snapshot {
            elapsed: self.state.elapsed,
            phase: self.state.phase,
            prey: PreyPose {
                position: prey.position(),
                heading_degrees: prey.heading(),
                energy: prey.energy(),
            },
            swarm: self
                .state
                .swarm
                .iter()
                .map(|m| MemberPose {
                    position: m.position,
                    velocity: m.velocity,
                    heading_degrees: m.heading_degrees(),
                })
                .collect(),
        }
    }

    /// One sprite per agent, prey first, ready for an instance buffer.
    pub fn sprite_instances(&self) -> Vec<SpriteInstance> {
        let prey = &self.state.prey;
        let mut out = Vec::with_capacity(self.state.swarm.len() + 1);
        out.push(SpriteInstance::new(
            SpriteKind::Prey,
            prey.position(),
            self.config.prey.footprint,
            prey.heading(),
            self.animation.frame_index(prey.state_time()),
        ));
        out.extend(self.state.swarm.iter().map(|m| {
            SpriteInstance::new(
                SpriteKind::Predator,
                m.position,
                self.config.predator_footprint,
                m.heading_degrees(),
                0,
            )
        }));
        out
    }
}
