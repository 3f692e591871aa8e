//! Projection pipeline: orbital space → screen space.
//!
//! The global rotation spins the (x, z) plane about the vertical axis; `y` is
//! left alone, so the view reads as a single-axis spin.  A simple pinhole
//! perspective then shrinks far objects (`rotZ > 0`) and enlarges near ones.
//!
//! Screen space is canvas-style: origin top-left, `y` growing downward.

use bevy::prelude::*;

/// Result of projecting one 3D point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Screen-space position.
    pub screen: Vec2,
    /// Perspective scale factor, always finite and positive.
    pub scale: f32,
}

/// Perspective projector for a surface of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub focal_constant: f32,
    /// Screen-space centre of the view (half the surface size).
    pub center: Vec2,
    pub base_size: f32,
    pub min_size: f32,
}

impl Projector {
    /// Rotate `(x, z)` by `rotation` radians; returns `(rotX, rotZ)`.
    #[inline]
    pub fn rotate(point: Vec3, rotation: f32) -> (f32, f32) {
        let (sin, cos) = rotation.sin_cos();
        (
            point.x * cos - point.z * sin,
            point.x * sin + point.z * cos,
        )
    }

    /// `f / (f + depth)`, or `None` when the denominator is non-positive.
    #[inline]
    pub fn perspective_scale(&self, depth: f32) -> Option<f32> {
        let denominator = self.focal_constant + depth;
        if denominator <= 0.0 {
            return None;
        }
        let scale = self.focal_constant / denominator;
        scale.is_finite().then_some(scale)
    }

    /// Project `point` under the global `rotation`.
    ///
    /// Returns `None` for the degenerate case (point at or behind the focal
    /// plane); callers skip drawing the object for that frame.
    pub fn project(&self, point: Vec3, rotation: f32) -> Option<Projected> {
        let (rot_x, rot_z) = Self::rotate(point, rotation);
        let scale = self.perspective_scale(rot_z)?;
        let screen = Vec2::new(
            self.center.x + rot_x * scale,
            self.center.y + point.y * scale,
        );
        if !screen.is_finite() {
            return None;
        }
        Some(Projected { screen, scale })
    }

    /// Marker radius for a given perspective scale, never below `min_size`.
    #[inline]
    pub fn draw_size(&self, scale: f32) -> f32 {
        (self.base_size * scale).max(self.min_size)
    }
}
