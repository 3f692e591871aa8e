//! Simulated orbital objects and their taxonomy.
//!
//! Per-category and per-layer behaviour (colour, speed multiplier, labels,
//! radius slot) is looked up in static tables indexed by the enum
//! discriminant, so adding a variant without a table row fails to compile
//! rather than silently falling through a default branch.

use crate::constants::DEBRIS_SPEED_MULTIPLIER;
use bevy::prelude::*;
use std::fmt;

// ── Layer ─────────────────────────────────────────────────────────────────────

/// Orbital band; fixes an object's base orbit radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Low = 0,
    Mid = 1,
    Geosynchronous = 2,
}

/// Static per-layer properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerProfile {
    /// Short band label shown in the HUD.
    pub label: &'static str,
}

const LAYER_PROFILES: [LayerProfile; 3] = [
    LayerProfile { label: "LEO" },
    LayerProfile { label: "MEO" },
    LayerProfile { label: "GEO" },
];

impl Layer {
    /// Every layer, innermost first.
    pub const ALL: [Layer; 3] = [Layer::Low, Layer::Mid, Layer::Geosynchronous];

    /// Draw order: outermost band first so inner bands overlap it.
    pub const DRAW_ORDER: [Layer; 3] = [Layer::Geosynchronous, Layer::Mid, Layer::Low];

    #[inline]
    pub fn profile(self) -> &'static LayerProfile {
        &LAYER_PROFILES[self as usize]
    }

    #[inline]
    pub fn label(self) -> &'static str {
        self.profile().label
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Base orbit radius per layer, indexed by [`Layer`].
///
/// Built from the body radius plus one altitude per band; radii strictly
/// increase from `Low` to `Geosynchronous` when the altitudes do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerRadii([f32; 3]);

impl LayerRadii {
    pub fn new(body_radius: f32, altitudes: [f32; 3]) -> Self {
        Self(altitudes.map(|altitude| body_radius + altitude))
    }

    #[inline]
    pub fn radius(&self, layer: Layer) -> f32 {
        self.0[layer as usize]
    }
}

// ── Category ──────────────────────────────────────────────────────────────────

/// Provenance classification; drives colour and debris-toggle membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Civil = 0,
    Commercial = 1,
    Restricted = 2,
    Debris = 3,
}

/// Static per-category properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryProfile {
    /// sRGB marker colour.
    pub rgb: [u8; 3],
    /// Factor applied to the stored velocity by the motion model.
    pub speed_multiplier: f32,
    /// Label shown in the legend.
    pub legend: &'static str,
    /// Whether the debris-field toggle hides objects of this category.
    pub debris_field: bool,
}

const CATEGORY_PROFILES: [CategoryProfile; 4] = [
    CategoryProfile {
        rgb: [0x10, 0xb9, 0x81],
        speed_multiplier: 1.0,
        legend: "CIVIL/SCI",
        debris_field: false,
    },
    CategoryProfile {
        rgb: [0x3b, 0x82, 0xf6],
        speed_multiplier: 1.0,
        legend: "COMMERCIAL",
        debris_field: false,
    },
    CategoryProfile {
        rgb: [0xf5, 0x9e, 0x0b],
        speed_multiplier: 1.0,
        legend: "RESTRICTED",
        debris_field: false,
    },
    CategoryProfile {
        rgb: [0xef, 0x44, 0x44],
        speed_multiplier: DEBRIS_SPEED_MULTIPLIER,
        legend: "DEBRIS/UNK",
        debris_field: true,
    },
];

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Civil,
        Category::Commercial,
        Category::Restricted,
        Category::Debris,
    ];

    #[inline]
    pub fn profile(self) -> &'static CategoryProfile {
        &CATEGORY_PROFILES[self as usize]
    }

    /// Marker colour for this category.
    pub fn color(self) -> Color {
        let [r, g, b] = self.profile().rgb;
        Color::srgb_u8(r, g, b)
    }

    #[inline]
    pub fn speed_multiplier(self) -> f32 {
        self.profile().speed_multiplier
    }
}

// ── Simulated object ──────────────────────────────────────────────────────────

/// Identifier derived from the object's creation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj-{}", self.0)
    }
}

/// One tracked object.  Immutable after creation: position is a pure function
/// of these fields and elapsed time (see [`crate::motion`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedObject {
    pub id: ObjectId,
    pub layer: Layer,
    pub category: Category,
    /// Orbital phase offset in radians, `[0, 2π)`.
    pub inclination: f32,
    /// Angular speed before the category multiplier.
    pub velocity: f32,
    /// Descriptive risk metadata in `[0, 100]`; not consumed by rendering.
    pub anomaly_score: f32,
}

impl SimulatedObject {
    #[inline]
    pub fn is_debris(&self) -> bool {
        self.category.profile().debris_field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_table_is_indexed_by_discriminant() {
        assert_eq!(Layer::Low.label(), "LEO");
        assert_eq!(Layer::Mid.label(), "MEO");
        assert_eq!(Layer::Geosynchronous.label(), "GEO");
    }

    #[test]
    fn only_debris_has_a_speed_multiplier() {
        for category in Category::ALL {
            let expected = if category == Category::Debris { 1.5 } else { 1.0 };
            assert_eq!(category.speed_multiplier(), expected);
        }
    }

    #[test]
    fn only_debris_belongs_to_the_debris_field() {
        let members: Vec<_> = Category::ALL
            .into_iter()
            .filter(|c| c.profile().debris_field)
            .collect();
        assert_eq!(members, vec![Category::Debris]);
    }

    #[test]
    fn layer_radii_increase_outward() {
        let radii = LayerRadii::new(80.0, [40.0, 100.0, 180.0]);
        assert_eq!(radii.radius(Layer::Low), 120.0);
        assert_eq!(radii.radius(Layer::Mid), 180.0);
        assert_eq!(radii.radius(Layer::Geosynchronous), 260.0);
    }

    #[test]
    fn draw_order_starts_with_the_outermost_band() {
        assert_eq!(Layer::DRAW_ORDER[0], Layer::Geosynchronous);
        assert_eq!(Layer::DRAW_ORDER[2], Layer::Low);
    }

    #[test]
    fn object_id_displays_with_prefix() {
        assert_eq!(ObjectId(17).to_string(), "obj-17");
    }
}
