//! Runtime view configuration loaded from `assets/view.toml`.
//!
//! [`ViewConfig`] is a Bevy [`Resource`] that mirrors the tuneable constants in
//! [`crate::constants`].  At startup, [`load_view_config`] reads
//! `assets/view.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! A file that parses but fails [`ViewConfig::validate`] is rejected as a
//! whole: a half-applied focal constant or velocity band is worse than the
//! defaults.

use crate::constants::*;
use crate::draw::DisplaySurface;
use crate::error::{
    validate_band_altitudes, validate_focal_clearance, validate_non_negative, validate_positive,
    validate_velocity_band, ViewResult,
};
use crate::object::{Layer, LayerRadii};
use crate::projection::Projector;
use bevy::prelude::*;
use serde::Deserialize;

/// Environment variable that overrides [`ViewConfig::seed`].
pub const SEED_ENV_VAR: &str = "ORBITWATCH_SEED";

/// Runtime-tunable view configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    // ── Population ────────────────────────────────────────────────────────────
    pub object_count: usize,
    /// Fixed RNG seed; `None` draws a fresh population every session.
    pub seed: Option<u64>,
    pub velocity_min: f32,
    pub velocity_max: f32,

    // ── Reference body & bands ────────────────────────────────────────────────
    pub body_radius: f32,
    pub low_orbit_altitude: f32,
    pub mid_orbit_altitude: f32,
    pub geo_orbit_altitude: f32,
    pub latitude_ring_count: u32,

    // ── Projection ────────────────────────────────────────────────────────────
    pub focal_constant: f32,
    pub base_object_size: f32,
    pub min_object_size: f32,

    // ── Render loop ───────────────────────────────────────────────────────────
    pub rotation_increment: f32,
    pub orbit_path_stride: usize,

    // ── Host ──────────────────────────────────────────────────────────────────
    pub window_width: u32,
    pub window_height: u32,
    pub congestion_moderate_at: usize,
    pub congestion_high_at: usize,
    pub hud_font_size: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            object_count: DEFAULT_OBJECT_COUNT,
            seed: None,
            velocity_min: VELOCITY_MIN,
            velocity_max: VELOCITY_MAX,
            body_radius: BODY_RADIUS,
            low_orbit_altitude: LOW_ORBIT_ALTITUDE,
            mid_orbit_altitude: MID_ORBIT_ALTITUDE,
            geo_orbit_altitude: GEO_ORBIT_ALTITUDE,
            latitude_ring_count: LATITUDE_RING_COUNT,
            focal_constant: FOCAL_CONSTANT,
            base_object_size: BASE_OBJECT_SIZE,
            min_object_size: MIN_OBJECT_SIZE,
            rotation_increment: ROTATION_INCREMENT,
            orbit_path_stride: ORBIT_PATH_STRIDE,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            congestion_moderate_at: CONGESTION_MODERATE_AT,
            congestion_high_at: CONGESTION_HIGH_AT,
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

impl ViewConfig {
    /// Reject values that would break the motion or projection math.
    pub fn validate(&self) -> ViewResult<()> {
        validate_velocity_band(self.velocity_min, self.velocity_max)?;
        validate_positive("body_radius", self.body_radius)?;
        validate_band_altitudes(
            self.low_orbit_altitude,
            self.mid_orbit_altitude,
            self.geo_orbit_altitude,
        )?;
        validate_focal_clearance(
            self.focal_constant,
            self.layer_radii().radius(Layer::Geosynchronous),
        )?;
        validate_positive("base_object_size", self.base_object_size)?;
        validate_positive("min_object_size", self.min_object_size)?;
        validate_non_negative("rotation_increment", self.rotation_increment)?;
        validate_positive("orbit_path_stride", self.orbit_path_stride as f32)?;
        Ok(())
    }

    /// Orbit radius per layer.
    pub fn layer_radii(&self) -> LayerRadii {
        LayerRadii::new(
            self.body_radius,
            [
                self.low_orbit_altitude,
                self.mid_orbit_altitude,
                self.geo_orbit_altitude,
            ],
        )
    }

    /// Projector centred on `surface`.
    pub fn projector(&self, surface: &DisplaySurface) -> Projector {
        Projector {
            focal_constant: self.focal_constant,
            center: surface.center(),
            base_size: self.base_object_size,
            min_size: self.min_object_size,
        }
    }

    /// Parse a TOML document and validate it.
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        let config: ViewConfig = toml::from_str(contents).map_err(|e| e.to_string())?;
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

/// Parse a seed override; blank or malformed values are ignored.
pub fn parse_seed_override(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

/// Startup system: attempt to load `assets/view.toml` and overwrite the
/// `ViewConfig` resource with any values present in the file, then apply the
/// `ORBITWATCH_SEED` override.
///
/// Parse or validation errors are logged but do not abort startup.  A missing
/// file is not an error (defaults are already in place from `insert_resource`).
pub fn load_view_config(mut config: ResMut<ViewConfig>) {
    let path = "assets/view.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match ViewConfig::from_toml(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded view config from {path}");
            }
            Err(e) => {
                warn!("Rejected {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            info!("No {path} found; using compiled defaults");
        }
    }

    if let Ok(value) = std::env::var(SEED_ENV_VAR) {
        match parse_seed_override(&value) {
            Some(seed) => config.seed = Some(seed),
            None => warn!("Ignoring {SEED_ENV_VAR}={value:?}: not an unsigned integer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ViewConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = ViewConfig::from_toml("object_count = 50\nseed = 7\n").unwrap();
        assert_eq!(config.object_count, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.focal_constant, FOCAL_CONSTANT);
        assert_eq!(config.rotation_increment, ROTATION_INCREMENT);
    }

    #[test]
    fn invalid_values_reject_the_whole_file() {
        let err = ViewConfig::from_toml("focal_constant = 0.0\n").unwrap_err();
        assert!(err.contains("focal_constant"));

        let err = ViewConfig::from_toml("velocity_min = 0.05\n").unwrap_err();
        assert!(err.contains("velocity_max"));
    }

    #[test]
    fn focal_constant_inside_the_geo_band_is_rejected() {
        // Default GEO radius is 80 + 180 = 260.
        let err = ViewConfig::from_toml("focal_constant = 200.0\n").unwrap_err();
        assert!(err.contains("focal_constant"));

        let err = ViewConfig::from_toml("focal_constant = 280.0\ngeo_orbit_altitude = 220.0\n")
            .unwrap_err();
        assert!(err.contains("focal_constant"));

        assert!(ViewConfig::from_toml("focal_constant = 261.0\n").is_ok());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(ViewConfig::from_toml("object_count = \"many\"").is_err());
    }

    #[test]
    fn seed_override_parsing() {
        assert_eq!(parse_seed_override(" 1234 "), Some(1234));
        assert_eq!(parse_seed_override("abc"), None);
        assert_eq!(parse_seed_override(""), None);
    }

    #[test]
    fn projector_is_centred_on_the_surface() {
        let projector = ViewConfig::default().projector(&DisplaySurface::new(800.0, 600.0));
        assert_eq!(projector.center, Vec2::new(400.0, 300.0));
        assert_eq!(projector.focal_constant, 300.0);
    }
}
