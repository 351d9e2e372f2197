//! 2D vector helpers on top of [`glam::Vec2`].
//!
//! glam already covers the arithmetic (add, scale, subtract, length, dot,
//! lerp) and the zero-length guard through [`Vec2::normalize_or_zero`].
//! This module adds the pieces the chase needs on top: angles in degrees
//! and wrapping of angles into a half-open range.

use glam::Vec2;

/// Extra operations on [`Vec2`] used by the steering and heading code.
pub trait Vec2Ext {
    /// Direction of the vector in degrees, counter-clockwise from +X,
    /// in `[0, 360)`.
    ///
    /// The zero vector reports `0.0`.
    fn angle_degrees(self) -> f32;

    /// Unit vector in the same direction, or zero when the vector is zero,
    /// denormal, or non-finite.
    fn unit_or_zero(self) -> Self;

    /// Clamp the magnitude to `max`, keeping direction.
    fn limit(self, max: f32) -> Self;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn angle_degrees(self) -> f32 {
        if self == Vec2::ZERO {
            return 0.0;
        }
        let deg = self.y.atan2(self.x).to_degrees();
        // rem_euclid can round -tiny up to exactly 360.0
        let deg = deg.rem_euclid(360.0);
        if deg >= 360.0 {
            0.0
        } else {
            deg
        }
    }

    #[inline]
    fn unit_or_zero(self) -> Self {
        self.normalize_or_zero()
    }

    #[inline]
    fn limit(self, max: f32) -> Self {
        self.clamp_length_max(max)
    }
}

/// Wrap an angle in degrees into `(-180, 180]`.
pub fn wrap_degrees(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    // rem_euclid lands in [0, 360]; 360 only for tiny negatives
    let a = angle.rem_euclid(360.0);
    if a > 180.0 {
        a - 360.0
    } else {
        a
    }
}

/// Shortest signed rotation in degrees that takes `from` to `to`.
///
/// The result lies in `(-180, 180]`.
#[inline]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    wrap_degrees(to - from)
}
