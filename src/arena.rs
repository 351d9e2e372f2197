//! Arena bounds and the two boundary policies.
//!
//! The arena spans `[0, width] x [0, height]` with Y up. Predators live on a
//! torus ([`Arena::wrap`]); the prey is kept inside the visible area
//! ([`Arena::clamp`]).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Size of the play area in world units (usually pixels).
///
/// The host may resize the window between ticks, so the arena is passed
/// into every tick rather than stored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Arena dimensions as a vector.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// True when both dimensions are positive and finite.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Toroidal wrap.
    ///
    /// A coordinate below zero snaps to the far edge, one past the far edge
    /// snaps to zero. This is a snap, not a modulo: the overshoot distance
    /// is discarded.
    pub fn wrap(&self, mut p: Vec2) -> Vec2 {
        if p.x < 0.0 {
            p.x = self.width;
        }
        if p.x > self.width {
            p.x = 0.0;
        }
        if p.y < 0.0 {
            p.y = self.height;
        }
        if p.y > self.height {
            p.y = 0.0;
        }
        p
    }

    /// Keep a box of size `footprint` anchored at `p` fully inside the arena.
    ///
    /// When the arena is smaller than the footprint the box is pinned to the
    /// origin on that axis.
    pub fn clamp(&self, p: Vec2, footprint: Vec2) -> Vec2 {
        let max_x = (self.width - footprint.x).max(0.0);
        let max_y = (self.height - footprint.y).max(0.0);
        Vec2::new(p.x.min(max_x).max(0.0), p.y.min(max_y).max(0.0))
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 480.0,
        }
    }
}
