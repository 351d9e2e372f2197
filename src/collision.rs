//! Capture test between a predator and the prey.
//!
//! A predator catches the prey when the prey is within `capture_radius` and
//! lies in the predator's forward half-plane. Approaching from behind or
//! drifting with zero velocity never counts.

use crate::math::Vec2Ext;
use crate::prey::PreyAgent;
use crate::swarm::SwarmMember;
use glam::Vec2;

/// Front-facing proximity test on raw vectors.
pub fn is_capture(predator_position: Vec2, predator_velocity: Vec2, prey_position: Vec2, capture_radius: f32) -> bool {
    let to_prey = prey_position - predator_position;
    if to_prey.length() >= capture_radius {
        return false;
    }
    // Zero velocity normalizes to zero, so the dot is zero: no facing, no capture.
    to_prey.dot(predator_velocity.unit_or_zero()) > 0.0
}

/// True when `predator` has caught `prey`.
#[inline]
pub fn check_capture(predator: &SwarmMember, prey: &PreyAgent, capture_radius: f32) -> bool {
    is_capture(predator.position, predator.velocity, prey.position(), capture_radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f32 = 30.0;

    #[test]
    fn test_facing_prey_within_radius_captures() {
        assert!(is_capture(Vec2::new(55.0, 100.0), Vec2::new(-150.0, 0.0), Vec2::new(50.0, 100.0), R));
    }

    #[test]
    fn test_facing_away_does_not_capture() {
        assert!(!is_capture(Vec2::new(55.0, 100.0), Vec2::new(150.0, 0.0), Vec2::new(50.0, 100.0), R));
    }

    #[test]
    fn test_zero_velocity_never_captures() {
        for offset in [Vec2::new(1.0, 0.0), Vec2::new(-3.0, 4.0), Vec2::new(0.0, -29.0)] {
            assert!(!is_capture(Vec2::ZERO, Vec2::ZERO, offset, R));
        }
    }

    #[test]
    fn test_outside_radius_does_not_capture() {
        assert!(!is_capture(Vec2::ZERO, Vec2::X, Vec2::new(R, 0.0), R));
        assert!(is_capture(Vec2::ZERO, Vec2::X, Vec2::new(R - 0.01, 0.0), R));
    }

    #[test]
    fn test_perpendicular_is_not_in_front() {
        assert!(!is_capture(Vec2::ZERO, Vec2::X, Vec2::new(0.0, 10.0), R));
    }

    #[test]
    fn test_coincident_does_not_capture() {
        assert!(!is_capture(Vec2::splat(5.0), Vec2::X, Vec2::splat(5.0), R));
    }
}
