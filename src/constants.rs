//! Centralised view, motion and projection constants.
//!
//! All tuneable values live here so they can be found and reasoned about in
//! one place.  [`crate::config::ViewConfig::default`] mirrors these, and
//! `assets/view.toml` can override most of them at startup.
//!
//! Values that define the shape of the motion model (the debris speed
//! multiplier, the vertical flattening factor, the orbit-path aspect) are not
//! exposed through the config: changing them changes what the view *is*.

// ── Population ────────────────────────────────────────────────────────────────

/// Number of simulated objects seeded at session start.
pub const DEFAULT_OBJECT_COUNT: usize = 200;

/// Lower bound of the uniform velocity band (rad per second of elapsed time).
pub const VELOCITY_MIN: f32 = 0.005;

/// Upper bound (exclusive) of the uniform velocity band.
pub const VELOCITY_MAX: f32 = 0.025;

/// Upper bound (exclusive) of the descriptive anomaly score.
pub const ANOMALY_SCORE_MAX: f32 = 100.0;

// ── Motion model ──────────────────────────────────────────────────────────────

/// Apparent speed multiplier applied to debris relative to its stored velocity.
pub const DEBRIS_SPEED_MULTIPLIER: f32 = 1.5;

/// Vertical excursion of an orbit relative to its radius.
///
/// `y = sin(angle + inclination) × radius × VERTICAL_EXCURSION`.
pub const VERTICAL_EXCURSION: f32 = 0.5;

// ── Reference body & orbital bands ────────────────────────────────────────────

/// Radius of the wireframe reference body (screen units at scale 1).
pub const BODY_RADIUS: f32 = 80.0;

/// Altitude of the low band above the body surface.
pub const LOW_ORBIT_ALTITUDE: f32 = 40.0;

/// Altitude of the mid band above the body surface.
pub const MID_ORBIT_ALTITUDE: f32 = 100.0;

/// Altitude of the geosynchronous band above the body surface.
pub const GEO_ORBIT_ALTITUDE: f32 = 180.0;

/// Number of decorative latitude rings drawn over the reference body.
pub const LATITUDE_RING_COUNT: u32 = 4;

/// Phase step between consecutive latitude rings (radians).
pub const LATITUDE_RING_STEP: f32 = 0.5;

/// How strongly the global rotation sways the latitude rings.
pub const LATITUDE_RING_SWAY: f32 = 0.2;

// ── Projection ────────────────────────────────────────────────────────────────

/// Perspective focal constant: `scale = f / (f + rotZ)`.
///
/// Must exceed the largest orbit radius; `ViewConfig::validate` rejects a
/// value at or inside the geosynchronous band.
pub const FOCAL_CONSTANT: f32 = 300.0;

/// Object marker radius at scale 1.
pub const BASE_OBJECT_SIZE: f32 = 4.0;

/// Smallest marker radius; keeps objects visible at the horizon.
pub const MIN_OBJECT_SIZE: f32 = 1.0;

// ── Render loop ───────────────────────────────────────────────────────────────

/// Rotation added to the global spin every tick, independent of frame time.
pub const ROTATION_INCREMENT: f32 = 0.002;

/// Every `ORBIT_PATH_STRIDE`-th object (by population index) gets a faint orbit ellipse.
pub const ORBIT_PATH_STRIDE: usize = 10;

/// Minor/major ratio of the context orbit ellipse.
pub const ORBIT_PATH_ASPECT: f32 = 0.4;

/// Opacity of the context orbit ellipse (`0x10` of `0xff`).
pub const ORBIT_PATH_OPACITY: f32 = 16.0 / 255.0;

/// Opacity of the latitude rings.
pub const LATITUDE_RING_OPACITY: f32 = 0.2;

// ── Palette ───────────────────────────────────────────────────────────────────

/// Surface clear colour (`#020617`).
pub const BACKGROUND_RGB: [u8; 3] = [0x02, 0x06, 0x17];

/// Reference body stroke colour (`#06b6d4`).
pub const BODY_RGB: [u8; 3] = [0x06, 0xb6, 0xd4];

// ── Host window & HUD ─────────────────────────────────────────────────────────

/// Initial window width (logical pixels).
pub const WINDOW_WIDTH: u32 = 800;

/// Initial window height (logical pixels).
pub const WINDOW_HEIGHT: u32 = 600;

/// Visible-object count at which the congestion label becomes `MODERATE`.
pub const CONGESTION_MODERATE_AT: usize = 60;

/// Visible-object count at which the congestion label becomes `HIGH`.
pub const CONGESTION_HIGH_AT: usize = 120;

/// HUD font size.
pub const HUD_FONT_SIZE: f32 = 14.0;
