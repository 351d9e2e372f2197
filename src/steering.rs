//! Steering behaviors.
//!
//! Classic Reynolds steering: every behavior turns a *desired velocity* into
//! a force `desired - velocity`, capped at `max_force`. The functions here
//! are pure; they read a member and the population and return a force
//! without touching either.
//!
//! # Behaviors
//!
//! | Behavior | Neighbors | Desired velocity |
//! |----------|-----------|------------------|
//! | [`separate`] | `0 < d < desired_separation` | away from neighbors, closer ones weigh more |
//! | [`align`] | `0 < d < neighbor_distance` | average neighbor velocity |
//! | [`cohere`] | `0 < d < neighbor_distance` | toward average neighbor position |
//! | [`pursue`] | - | straight at the prey |
//!
//! # Degenerate inputs
//!
//! A neighbor at distance exactly zero (the member itself, or another member
//! on the same spot) is never counted by any behavior. When a desired
//! direction collapses to zero length the behavior contributes nothing
//! rather than braking or producing NaN.

use crate::config::SteeringConfig;
use crate::math::Vec2Ext;
use crate::swarm::SwarmMember;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the four forces acting on a swarm member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    Separate,
    Align,
    Cohere,
    Pursue,
}

impl Behavior {
    /// All behaviors, in the order they are accumulated.
    pub const ALL: [Behavior; 4] = [
        Behavior::Separate,
        Behavior::Align,
        Behavior::Cohere,
        Behavior::Pursue,
    ];

    /// Unweighted force this behavior exerts on `member`.
    pub fn force(
        self,
        member: &SwarmMember,
        population: &[SwarmMember],
        target: Vec2,
        config: &SteeringConfig,
    ) -> Vec2 {
        match self {
            Behavior::Separate => separate(member, population, config),
            Behavior::Align => align(member, population, config),
            Behavior::Cohere => cohere(member, population, config),
            Behavior::Pursue => pursue(member, target, config),
        }
    }
}

/// Turn a desired direction into a capped steering force.
///
/// Returns zero when `direction` has no usable length.
#[inline]
fn steer_towards(direction: Vec2, velocity: Vec2, config: &SteeringConfig) -> Vec2 {
    let unit = direction.unit_or_zero();
    if unit == Vec2::ZERO {
        return Vec2::ZERO;
    }
    let desired = unit * config.max_speed;
    (desired - velocity).limit(config.max_force)
}

/// Iterate over `(other, distance)` for members strictly within `radius`.
#[inline]
fn neighbors<'a>(
    member: &'a SwarmMember,
    population: &'a [SwarmMember],
    radius: f32,
) -> impl Iterator<Item = (&'a SwarmMember, f32)> + 'a {
    population.iter().filter_map(move |other| {
        let d = member.position.distance(other.position);
        (d > 0.0 && d < radius).then_some((other, d))
    })
}

/// Separation: steer away from members closer than `desired_separation`.
///
/// Each neighbor pushes along the unit vector from it to `member`, scaled by
/// `1 / distance`, so crowding at close range dominates.
pub fn separate(member: &SwarmMember, population: &[SwarmMember], config: &SteeringConfig) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut count = 0usize;
    for (other, d) in neighbors(member, population, config.desired_separation) {
        let away = (member.position - other.position).unit_or_zero();
        sum += away / d;
        count += 1;
    }
    if count == 0 {
        return Vec2::ZERO;
    }
    sum /= count as f32;
    steer_towards(sum, member.velocity, config)
}

/// Alignment: steer toward the average velocity of nearby members.
pub fn align(member: &SwarmMember, population: &[SwarmMember], config: &SteeringConfig) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut count = 0usize;
    for (other, _) in neighbors(member, population, config.neighbor_distance) {
        sum += other.velocity;
        count += 1;
    }
    if count == 0 {
        return Vec2::ZERO;
    }
    steer_towards(sum / count as f32, member.velocity, config)
}

/// Cohesion: seek the average position of nearby members.
pub fn cohere(member: &SwarmMember, population: &[SwarmMember], config: &SteeringConfig) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut count = 0usize;
    for (other, _) in neighbors(member, population, config.neighbor_distance) {
        sum += other.position;
        count += 1;
    }
    if count == 0 {
        return Vec2::ZERO;
    }
    seek(member, sum / count as f32, config)
}

/// Seek: steer at full speed toward `target`.
pub fn seek(member: &SwarmMember, target: Vec2, config: &SteeringConfig) -> Vec2 {
    steer_towards(target - member.position, member.velocity, config)
}

/// Pursuit of the prey.
///
/// A direct seek on the prey's current position; no lead is taken on where
/// the prey is heading.
#[inline]
pub fn pursue(member: &SwarmMember, prey_position: Vec2, config: &SteeringConfig) -> Vec2 {
    seek(member, prey_position, config)
}
