//! View state and the visibility rule.
//!
//! [`ViewState`] holds the user's layer filter, the debris toggle and the
//! global rotation.  Filtering is evaluated fresh every frame against the live
//! population, so a toggle takes effect on the next frame and never touches
//! the objects themselves.

use crate::object::{Layer, SimulatedObject};
use bevy::prelude::*;
use std::f32::consts::TAU;
use std::fmt;

/// Layer selection: every band, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayerFilter {
    #[default]
    All,
    Only(Layer),
}

impl LayerFilter {
    #[inline]
    pub fn admits(self, layer: Layer) -> bool {
        match self {
            LayerFilter::All => true,
            LayerFilter::Only(selected) => selected == layer,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LayerFilter::All => "ALL",
            LayerFilter::Only(layer) => layer.label(),
        }
    }
}

impl fmt::Display for LayerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Process-wide view state: one instance per simulation.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Global spin in radians, kept in `[0, 2π)`.
    rotation: f32,
    pub filter: LayerFilter,
    pub debris_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            filter: LayerFilter::All,
            debris_visible: true,
        }
    }
}

impl ViewState {
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Advance the global spin by a fixed per-tick increment, wrapping at 2π.
    pub fn advance_rotation(&mut self, increment: f32) -> f32 {
        self.rotation = (self.rotation + increment).rem_euclid(TAU);
        self.rotation
    }

    pub fn set_filter_layer(&mut self, filter: LayerFilter) {
        self.filter = filter;
    }

    pub fn set_debris_visible(&mut self, visible: bool) {
        self.debris_visible = visible;
    }

    /// `(filter admits layer) AND (debris visible OR not debris)`.
    #[inline]
    pub fn is_visible(&self, object: &SimulatedObject) -> bool {
        self.filter.admits(object.layer) && (self.debris_visible || !object.is_debris())
    }

    /// Visible objects with their population index, in population order.
    pub fn visible<'a>(
        &'a self,
        objects: &'a [SimulatedObject],
    ) -> impl Iterator<Item = (usize, &'a SimulatedObject)> + 'a {
        objects
            .iter()
            .enumerate()
            .filter(move |(_, object)| self.is_visible(object))
    }
}
