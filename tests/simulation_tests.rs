//! End-to-end chase scenarios.
//!
//! These drive the public API the way a host would: build a simulation,
//! stage agents, tick, and inspect the outcome.

use flockchase::prelude::*;
use flockchase::steering::{align, cohere, separate};
use flockchase::Vec2Ext;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const DT: f32 = 1.0 / 60.0;
const W: f32 = 800.0;
const H: f32 = 480.0;

fn arena() -> Arena {
    Arena::new(W, H)
}

fn seeded(seed: u64) -> Simulation {
    Simulation::new(ChaseConfig::default().with_seed(seed), arena()).unwrap()
}

// ============================================================================
// Capture
// ============================================================================

#[test]
fn test_predator_facing_prey_captures_in_one_tick() {
    let config = ChaseConfig::default();
    let max_speed = config.steering.max_speed;
    let prey = PreyAgent::new(Vec2::new(50.0, H / 2.0), config.prey);
    let hunter = SwarmMember::new(Vec2::new(55.0, H / 2.0), Vec2::new(-1.0, 0.0) * max_speed);

    let mut sim = seeded(1).with_prey(prey).with_swarm(vec![hunter]);
    let report = sim.tick(DT, Vec2::ZERO, arena());

    assert_eq!(report.phase, Phase::Terminal);
    assert_eq!(report.captured_by, Some(0));
    assert!(sim.is_terminal());
    assert_eq!(sim.state().captured_by(), Some(0));
}

#[test]
fn test_stationary_predator_next_to_prey_never_captures() {
    let config = ChaseConfig::default().with_weights(FlockWeights {
        separation: 0.0,
        alignment: 0.0,
        cohesion: 0.0,
        pursuit: 0.0,
    });
    let prey = PreyAgent::new(Vec2::new(100.0, 100.0), config.prey);
    let idle = SwarmMember::new(Vec2::new(110.0, 100.0), Vec2::ZERO);

    let mut sim = Simulation::new(config.with_seed(3), arena())
        .unwrap()
        .with_prey(prey)
        .with_swarm(vec![idle]);
    for _ in 0..120 {
        let report = sim.tick(DT, Vec2::ZERO, arena());
        assert_eq!(report.phase, Phase::Running);
    }
}

#[test]
fn test_predator_approaching_from_behind_does_not_capture() {
    let config = ChaseConfig::default().with_weights(FlockWeights {
        separation: 0.0,
        alignment: 0.0,
        cohesion: 0.0,
        pursuit: 0.0,
    });
    let prey = PreyAgent::new(Vec2::new(200.0, 200.0), config.prey);
    // Just past the prey and moving away from it
    let leaving = SwarmMember::new(Vec2::new(190.0, 200.0), Vec2::new(-150.0, 0.0));

    let mut sim = Simulation::new(config.with_seed(4), arena())
        .unwrap()
        .with_prey(prey)
        .with_swarm(vec![leaving]);
    let report = sim.tick(DT, Vec2::ZERO, arena());
    assert_eq!(report.phase, Phase::Running);
}

#[test]
fn test_idle_prey_is_eventually_caught() {
    let mut sim = seeded(5);
    let mut caught = false;
    for _ in 0..(60 * 60) {
        if sim.tick(DT, Vec2::ZERO, arena()).phase == Phase::Terminal {
            caught = true;
            break;
        }
    }
    assert!(caught, "swarm never reached an idle prey in 60s");
}

// ============================================================================
// Population growth
// ============================================================================

#[test]
fn test_one_interval_adds_one_batch() {
    let mut sim = seeded(6).with_swarm(Vec::new());
    let n = sim.population();
    let interval = sim.config().spawn.interval;

    // Just short of the interval: nothing
    sim.tick(interval - 0.5, Vec2::ZERO, arena());
    assert_eq!(sim.population(), n);
    assert_eq!(sim.state().next_spawn_time(), interval);

    // Crossing it: one batch of two
    let report = sim.tick(1.0, Vec2::ZERO, arena());
    assert_eq!(report.spawned, 2);
    assert_eq!(sim.population(), n + 2);
    assert_eq!(sim.state().next_spawn_time(), 2.0 * interval);
}

#[test]
fn test_spawned_members_appear_in_spawn_region_at_full_speed() {
    let mut sim = seeded(7).with_swarm(Vec::new());
    sim.tick(10.0, Vec2::ZERO, arena());
    let max_speed = sim.config().steering.max_speed;
    for m in sim.swarm() {
        assert!(m.position.x >= 0.8 * W && m.position.x <= W);
        assert!(m.position.y >= 0.0 && m.position.y <= H);
        assert!((m.velocity.length() - max_speed).abs() < 1e-2);
    }
}

#[test]
fn test_spawn_follows_resized_arena() {
    let mut sim = seeded(8).with_swarm(Vec::new());
    let wide = Arena::new(2000.0, 300.0);
    sim.tick(10.0, Vec2::ZERO, wide);
    for m in sim.swarm() {
        assert!(m.position.x >= 1600.0);
        assert!(m.position.y <= 300.0);
    }
}

#[test]
fn test_population_only_grows() {
    let mut sim = seeded(9);
    let mut last = sim.population();
    for step in 0..(60 * 40) {
        let intent = if (step / 90) % 2 == 0 { Vec2::Y } else { Vec2::NEG_Y };
        sim.tick(DT, intent, arena());
        assert!(sim.population() >= last);
        last = sim.population();
        if sim.is_terminal() {
            break;
        }
    }
}

// ============================================================================
// Invariants over long runs
// ============================================================================

#[test]
fn test_invariants_hold_over_long_run() {
    let mut sim = Simulation::with_rng(
        ChaseConfig::default().with_initial_population(10),
        arena(),
        ChaCha8Rng::seed_from_u64(10),
    )
    .unwrap();
    let max_speed = sim.config().steering.max_speed;
    let footprint = sim.config().prey.footprint;
    let max_energy = sim.config().prey.max_energy;

    let intents = [
        Vec2::new(1.0, 1.0),
        Vec2::ZERO,
        Vec2::new(-1.0, 0.0),
        Vec2::new(0.0, -3.0),
        Vec2::ZERO,
    ];
    for step in 0..(60 * 30) {
        let intent = intents[(step / 45) % intents.len()];
        sim.tick(DT, intent, arena());

        let prey = sim.prey();
        assert!(prey.energy() >= 0.0 && prey.energy() <= max_energy);
        assert!(prey.heading() > -180.0 && prey.heading() <= 180.0);
        let p = prey.position();
        assert!(p.x >= 0.0 && p.x <= W - footprint.x);
        assert!(p.y >= 0.0 && p.y <= H - footprint.y);

        for m in sim.swarm() {
            assert!(m.velocity.length() <= max_speed + 1e-3);
            assert!(m.position.x >= 0.0 && m.position.x <= W);
            assert!(m.position.y >= 0.0 && m.position.y <= H);
        }
    }
}

#[test]
fn test_elapsed_and_schedule_advance_monotonically() {
    let mut sim = seeded(12);
    let mut last_elapsed = 0.0;
    let mut last_next = sim.state().next_spawn_time();
    for _ in 0..(60 * 25) {
        sim.tick(DT, Vec2::X, arena());
        assert!(sim.elapsed() >= last_elapsed);
        assert!(sim.state().next_spawn_time() >= last_next);
        last_elapsed = sim.elapsed();
        last_next = sim.state().next_spawn_time();
        if sim.is_terminal() {
            break;
        }
    }
}

// ============================================================================
// Neighbor edge cases
// ============================================================================

#[test]
fn test_coincident_neighbors_contribute_nothing() {
    let steering = SteeringConfig::default();
    let spot = Vec2::new(300.0, 200.0);
    let me = SwarmMember::new(spot, Vec2::new(100.0, 0.0));
    let mut population = vec![me.clone()];
    for _ in 0..3 {
        population.push(SwarmMember::new(spot, Vec2::new(0.0, -100.0)));
    }
    assert_eq!(separate(&me, &population, &steering), Vec2::ZERO);
    assert_eq!(align(&me, &population, &steering), Vec2::ZERO);
    assert_eq!(cohere(&me, &population, &steering), Vec2::ZERO);
}

#[test]
fn test_stacked_swarm_does_not_produce_nan() {
    let spot = Vec2::new(400.0, 240.0);
    let stacked = (0..6).map(|_| SwarmMember::new(spot, Vec2::ZERO)).collect();
    let prey = PreyAgent::new(spot, ChaseConfig::default().prey);
    let mut sim = seeded(13).with_prey(prey).with_swarm(stacked);
    for _ in 0..30 {
        sim.tick(DT, Vec2::ZERO, arena());
    }
    for m in sim.swarm() {
        assert!(m.position.is_finite());
        assert!(m.velocity.is_finite());
        assert!(m.heading_degrees().is_finite());
    }
}

// ============================================================================
// Host-facing output
// ============================================================================

#[test]
fn test_snapshot_serializes_to_json() {
    let mut sim = seeded(14);
    sim.tick(DT, Vec2::X, arena());
    let json = serde_json::to_string(&sim.snapshot()).unwrap();
    assert!(json.contains("\"phase\":\"running\""));
    assert!(json.contains("heading_degrees"));
}

#[test]
fn test_keyboard_drives_prey() {
    let mut sim = seeded(15).with_swarm(Vec::new());
    let mut input = Input::new();
    input.press(KeyCode::W);
    let start = sim.prey().position();
    for _ in 0..60 {
        sim.tick(DT, input.movement_intent(), arena());
    }
    let moved = sim.prey().position() - start;
    assert!(moved.y > 0.0);
    assert_eq!(moved.x, 0.0);
    // Heading turns toward -90 when swimming up
    assert!(sim.prey().heading() < 0.0);
    assert!(sim.prey().velocity().angle_degrees() > 89.0);
}
