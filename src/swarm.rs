//! The predator swarm.
//!
//! A [`SwarmMember`] accumulates the weighted steering forces from
//! [`steering`](crate::steering) into its acceleration, integrates with
//! semi-implicit Euler, and wraps around the arena edges.
//!
//! [`Swarm`] owns the ordered population and updates it in place: member
//! `i` sees members `0..i` already moved this tick and `i+1..` still at
//! their previous state.

use crate::arena::Arena;
use crate::config::{FlockWeights, SteeringConfig};
use crate::math::Vec2Ext;
use crate::steering::Behavior;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One predator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwarmMember {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Force accumulator, cleared after every integration step.
    #[serde(skip)]
    pub acceleration: Vec2,
}

impl SwarmMember {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
        }
    }

    /// Direction of travel in degrees, for sprite rotation.
    #[inline]
    pub fn heading_degrees(&self) -> f32 {
        self.velocity.angle_degrees()
    }

    /// Add a force to this tick's accumulator.
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// Weighted sum of all behaviors for this member.
    ///
    /// `population` may contain `self`; it is skipped by the zero-distance
    /// rule.
    pub fn flock_force(
        &self,
        population: &[SwarmMember],
        prey_position: Vec2,
        steering: &SteeringConfig,
        weights: &FlockWeights,
    ) -> Vec2 {
        Behavior::ALL
            .iter()
            .map(|&b| b.force(self, population, prey_position, steering) * weights.weight(b))
            .sum()
    }

    /// Integrate the accumulated acceleration over `dt` and wrap.
    ///
    /// A step that would overflow leaves position and velocity untouched.
    /// The accumulator is cleared either way.
    pub fn integrate(&mut self, dt: f32, max_speed: f32, arena: &Arena) {
        let velocity = (self.velocity + self.acceleration * dt).limit(max_speed);
        let position = self.position + velocity * dt;
        self.acceleration = Vec2::ZERO;
        if !(velocity.is_finite() && position.is_finite()) {
            return;
        }
        self.velocity = velocity;
        self.position = arena.wrap(position);
    }
}

impl FlockWeights {
    /// Weight applied to `behavior`.
    pub fn weight(&self, behavior: Behavior) -> f32 {
        match behavior {
            Behavior::Separate => self.separation,
            Behavior::Align => self.alignment,
            Behavior::Cohere => self.cohesion,
            Behavior::Pursue => self.pursuit,
        }
    }
}

/// Ordered, append-only predator population.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Swarm {
    members: Vec<SwarmMember>,
}

impl Swarm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_members(members: Vec<SwarmMember>) -> Self {
        Self { members }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn members(&self) -> &[SwarmMember] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SwarmMember> {
        self.members.iter()
    }

    /// Append new members at the end of the order.
    pub fn extend(&mut self, batch: impl IntoIterator<Item = SwarmMember>) {
        self.members.extend(batch);
    }

    pub fn push(&mut self, member: SwarmMember) {
        self.members.push(member);
    }

    /// Advance every member one tick, in order.
    pub fn update(
        &mut self,
        prey_position: Vec2,
        dt: f32,
        arena: &Arena,
        steering: &SteeringConfig,
        weights: &FlockWeights,
    ) {
        for i in 0..self.members.len() {
            let force = self.members[i].flock_force(&self.members, prey_position, steering, weights);
            let member = &mut self.members[i];
            member.apply_force(force);
            member.integrate(dt, steering.max_speed, arena);
        }
    }
}

impl<'a> IntoIterator for &'a Swarm {
    type Item = &'a SwarmMember;
    type IntoIter = std::slice::Iter<'a, SwarmMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_clamps_speed() {
        let arena = Arena::new(10_000.0, 10_000.0);
        let mut m = SwarmMember::new(Vec2::splat(5000.0), Vec2::new(140.0, 0.0));
        m.apply_force(Vec2::new(10_000.0, 0.0));
        m.integrate(1.0, 150.0, &arena);
        assert!((m.velocity.length() - 150.0).abs() < 1e-3);
        assert_eq!(m.acceleration, Vec2::ZERO);
    }

    #[test]
    fn test_acceleration_does_not_carry_over() {
        let arena = Arena::new(1000.0, 1000.0);
        let mut m = SwarmMember::new(Vec2::splat(500.0), Vec2::ZERO);
        m.apply_force(Vec2::new(10.0, 0.0));
        m.integrate(1.0, 150.0, &arena);
        let v1 = m.velocity;
        m.integrate(1.0, 150.0, &arena);
        assert_eq!(m.velocity, v1);
    }

    #[test]
    fn test_overflowing_step_keeps_previous_state() {
        let arena = Arena::new(800.0, 480.0);
        let mut m = SwarmMember::new(Vec2::new(400.0, 240.0), Vec2::new(150.0, 0.0));
        m.apply_force(Vec2::new(50.0, 10.0));
        m.integrate(f32::MAX, 150.0, &arena);
        assert_eq!(m.position, Vec2::new(400.0, 240.0));
        assert_eq!(m.velocity, Vec2::new(150.0, 0.0));
        assert_eq!(m.acceleration, Vec2::ZERO);
    }

    #[test]
    fn test_wraps_past_right_edge() {
        let arena = Arena::new(100.0, 100.0);
        let mut m = SwarmMember::new(Vec2::new(99.0, 50.0), Vec2::new(100.0, 0.0));
        m.integrate(0.1, 150.0, &arena);
        assert_eq!(m.position.x, 0.0);
        assert_eq!(m.position.y, 50.0);
    }

    #[test]
    fn test_wraps_past_bottom_edge() {
        let arena = Arena::new(100.0, 80.0);
        let mut m = SwarmMember::new(Vec2::new(50.0, 1.0), Vec2::new(0.0, -100.0));
        m.integrate(0.1, 150.0, &arena);
        assert_eq!(m.position.y, 80.0);
    }

    #[test]
    fn test_lone_member_turns_toward_prey() {
        let arena = Arena::new(1000.0, 1000.0);
        let steering = SteeringConfig::default();
        let weights = FlockWeights::default();
        let mut swarm = Swarm::from_members(vec![SwarmMember::new(Vec2::splat(500.0), Vec2::ZERO)]);
        swarm.update(Vec2::new(100.0, 500.0), 1.0 / 60.0, &arena, &steering, &weights);
        let m = &swarm.members()[0];
        assert!(m.velocity.x < 0.0);
        assert!(m.position.x < 500.0);
    }

    #[test]
    fn test_speed_stays_bounded_over_many_ticks() {
        let arena = Arena::new(800.0, 480.0);
        let steering = SteeringConfig::default();
        let weights = FlockWeights::default();
        let mut swarm = Swarm::from_members(
            (0..12)
                .map(|i| {
                    let a = i as f32;
                    SwarmMember::new(
                        Vec2::new(600.0 + a * 7.0, 40.0 * a % 480.0),
                        Vec2::new(a.cos(), a.sin()) * 150.0,
                    )
                })
                .collect(),
        );
        for step in 0..600 {
            let prey = Vec2::new(50.0 + (step as f32).sin() * 30.0, 240.0);
            swarm.update(prey, 1.0 / 60.0, &arena, &steering, &weights);
            for m in &swarm {
                assert!(m.velocity.length() <= steering.max_speed + 1e-3);
                assert!(m.position.is_finite());
                assert!(m.position.x >= 0.0 && m.position.x <= arena.width);
                assert!(m.position.y >= 0.0 && m.position.y <= arena.height);
            }
        }
    }

    #[test]
    fn test_weights_lookup() {
        let w = FlockWeights::default();
        assert_eq!(w.weight(Behavior::Separate), 3.0);
        assert_eq!(w.weight(Behavior::Pursue), 2.0);
    }
}
