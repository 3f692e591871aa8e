//! View-specific error types.
//!
//! The pure paths (motion, projection, filtering) never fail: a degenerate
//! projection is a skipped object, not an error.  What *can* fail is bringing
//! the loop up without a surface to draw on, and loading a configuration whose
//! values would break the projection math.

use std::fmt;

/// Top-level error enum for the orbital view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewError {
    /// `activate()` was requested but the host has no drawing surface.
    MissingSurface,

    /// The host surface exists but has no drawable area.
    DegenerateSurface {
        /// Surface width in logical pixels.
        width: f32,
        /// Surface height in logical pixels.
        height: f32,
    },

    /// A configuration value is outside its safe operating range.
    UnsafeConstant {
        /// Name of the config key (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::MissingSurface => {
                write!(f, "no drawing surface available; render loop not started")
            }
            ViewError::DegenerateSurface { width, height } => write!(
                f,
                "drawing surface is {}x{}; render loop needs a non-empty surface",
                width, height
            ),
            ViewError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "config '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
        }
    }
}

impl std::error::Error for ViewError {}

/// Convenience alias: a `Result` using `ViewError` as the error type.
pub type ViewResult<T> = Result<T, ViewError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is finite and strictly positive.
pub fn validate_positive(name: &'static str, value: f32) -> ViewResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ViewError::UnsafeConstant {
            name,
            value,
            safe_range: "(0.0, ∞)",
        })
    }
}

/// Returns an error unless `value` is finite and not negative.
pub fn validate_non_negative(name: &'static str, value: f32) -> ViewResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ViewError::UnsafeConstant {
            name,
            value,
            safe_range: "[0.0, ∞)",
        })
    }
}

/// Returns an error unless `min < max` (both already validated positive).
pub fn validate_velocity_band(min: f32, max: f32) -> ViewResult<()> {
    validate_positive("velocity_min", min)?;
    validate_positive("velocity_max", max)?;
    if min < max {
        Ok(())
    } else {
        Err(ViewError::UnsafeConstant {
            name: "velocity_max",
            value: max,
            safe_range: "(velocity_min, ∞)",
        })
    }
}

/// Returns an error unless the three band altitudes strictly increase.
pub fn validate_band_altitudes(low: f32, mid: f32, geo: f32) -> ViewResult<()> {
    validate_non_negative("low_orbit_altitude", low)?;
    if !(mid.is_finite() && mid > low) {
        return Err(ViewError::UnsafeConstant {
            name: "mid_orbit_altitude",
            value: mid,
            safe_range: "(low_orbit_altitude, ∞)",
        });
    }
    if !(geo.is_finite() && geo > mid) {
        return Err(ViewError::UnsafeConstant {
            name: "geo_orbit_altitude",
            value: geo,
            safe_range: "(mid_orbit_altitude, ∞)",
        });
    }
    Ok(())
}

/// Returns an error unless the focal constant clears the outermost orbit.
///
/// At or below `max_orbit_radius` a far-side object can sit arbitrarily close
/// to the focal plane, where the perspective scale grows without bound.
pub fn validate_focal_clearance(focal_constant: f32, max_orbit_radius: f32) -> ViewResult<()> {
    validate_positive("focal_constant", focal_constant)?;
    if focal_constant > max_orbit_radius {
        Ok(())
    } else {
        Err(ViewError::UnsafeConstant {
            name: "focal_constant",
            value: focal_constant,
            safe_range: "(body_radius + geo_orbit_altitude, ∞)",
        })
    }
}
