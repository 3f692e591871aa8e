//! Orbital motion model.
//!
//! A stylised approximation, not a propagator: an object's angle advances
//! linearly with elapsed wall-clock time, and its 3D point lies on a curve
//! whose vertical excursion couples in the inclination to suggest tilted
//! planes.  Everything here is pure.

use crate::constants::VERTICAL_EXCURSION;
use crate::object::{LayerRadii, SimulatedObject};
use bevy::prelude::*;
use std::f64::consts::TAU;

/// Angular speed after the category multiplier (debris moves 1.5× faster).
#[inline]
pub fn effective_speed(object: &SimulatedObject) -> f32 {
    object.velocity * object.category.speed_multiplier()
}

/// Angle of `object` after `elapsed_secs`, wrapped into `[0, 2π)`.
///
/// `angle = inclination + elapsed × effective_speed`.  Accumulated in `f64`
/// so long sessions keep sub-pixel precision.
pub fn angular_position(object: &SimulatedObject, elapsed_secs: f64) -> f32 {
    let angle = object.inclination as f64 + elapsed_secs * effective_speed(object) as f64;
    let narrowed = angle.rem_euclid(TAU) as f32;
    // An f64 just below 2π can round up to f32 TAU.
    if narrowed >= std::f32::consts::TAU {
        0.0
    } else {
        narrowed
    }
}

/// Base orbit radius; depends on the layer only, never on time.
#[inline]
pub fn orbit_radius(object: &SimulatedObject, radii: &LayerRadii) -> f32 {
    radii.radius(object.layer)
}

/// Raw 3D point for an object at `angle` on an orbit of `radius`.
///
/// `x = cos(a)·r`, `z = sin(a)·r`, `y = sin(a + inclination)·r·0.5`.
pub fn orbital_point(angle: f32, inclination: f32, radius: f32) -> Vec3 {
    Vec3::new(
        angle.cos() * radius,
        (angle + inclination).sin() * radius * VERTICAL_EXCURSION,
        angle.sin() * radius,
    )
}

/// Convenience: angle → radius → 3D point for one object.
pub fn object_point(object: &SimulatedObject, elapsed_secs: f64, radii: &LayerRadii) -> Vec3 {
    let angle = angular_position(object, elapsed_secs);
    orbital_point(angle, object.inclination, orbit_radius(object, radii))
}
