//! Renderer-facing output.
//!
//! The simulation never draws. Instead it hands the host a flat slice of
//! [`SpriteInstance`]s that can be uploaded straight into a GPU instance
//! buffer with `bytemuck::cast_slice`, plus a [`SpriteAnimation`] helper for
//! picking the prey's sprite-sheet frame.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// What an instance depicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum SpriteKind {
    Prey = 0,
    Predator = 1,
}

impl From<SpriteKind> for u32 {
    fn from(kind: SpriteKind) -> u32 {
        kind as u32
    }
}

/// One sprite to draw, laid out for a vertex instance buffer.
///
/// Position is the lower-left anchor; rotation is in degrees about the
/// sprite's center.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub rotation_degrees: f32,
    /// [`SpriteKind`] as `u32`.
    pub kind: u32,
    /// Animation frame index; always `0` for predators.
    pub frame: u32,
    pub _pad: u32,
}

impl SpriteInstance {
    pub fn new(kind: SpriteKind, position: glam::Vec2, size: glam::Vec2, rotation_degrees: f32, frame: u32) -> Self {
        Self {
            position: position.to_array(),
            size: size.to_array(),
            rotation_degrees,
            kind: kind.into(),
            frame,
            _pad: 0,
        }
    }
}

/// Looping sprite-sheet animation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpriteAnimation {
    /// Frames in the sheet, laid out in one row.
    pub frame_count: u32,
    /// Seconds each frame is shown.
    pub frame_duration: f32,
}

impl SpriteAnimation {
    pub fn new(frame_count: u32, frame_duration: f32) -> Self {
        Self {
            frame_count,
            frame_duration,
        }
    }

    /// Frame to show after `state_time` seconds.
    pub fn frame_index(&self, state_time: f32) -> u32 {
        if self.frame_count == 0 || !(self.frame_duration > 0.0) || !state_time.is_finite() {
            return 0;
        }
        let n = (state_time.max(0.0) / self.frame_duration) as u64;
        (n % self.frame_count as u64) as u32
    }
}

impl Default for SpriteAnimation {
    /// The nine-frame swim cycle at ten frames per second.
    fn default() -> Self {
        Self::new(9, 0.1)
    }
}
