//! One tick of the render loop.
//!
//! Order within a tick is fixed:
//!
//! 1. clear the surface
//! 2. advance the global rotation (before any projection, so every object in
//!    the frame sees the same rotation)
//! 3. draw the reference body and its latitude rings
//! 4. draw every visible object, outermost band first
//! 5. draw faint orbit ellipses for every `orbit_path_stride`-th visible object
//!
//! All work is a handful of linear passes over the population.

use crate::config::ViewConfig;
use crate::constants::{
    BACKGROUND_RGB, BODY_RGB, LATITUDE_RING_OPACITY, LATITUDE_RING_STEP, LATITUDE_RING_SWAY,
    ORBIT_PATH_ASPECT, ORBIT_PATH_OPACITY,
};
use crate::draw::{DisplaySurface, DrawCommand, DrawSurface};
use crate::filter::ViewState;
use crate::motion::{angular_position, orbit_radius, orbital_point};
use crate::object::{Layer, LayerRadii, SimulatedObject};
use crate::projection::{Projected, Projector};
use bevy::prelude::*;

/// Per-frame scene parameters derived from config and surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    pub projector: Projector,
    pub radii: LayerRadii,
    pub body_radius: f32,
    pub latitude_ring_count: u32,
    pub rotation_increment: f32,
    pub orbit_path_stride: usize,
}

impl SceneParams {
    pub fn new(config: &ViewConfig, surface: &DisplaySurface) -> Self {
        Self {
            projector: config.projector(surface),
            radii: config.layer_radii(),
            body_radius: config.body_radius,
            latitude_ring_count: config.latitude_ring_count,
            rotation_increment: config.rotation_increment,
            orbit_path_stride: config.orbit_path_stride.max(1),
        }
    }
}

/// What one tick drew.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    /// Rotation the frame was projected with.
    pub rotation: f32,
    /// Objects passing the visibility rule.
    pub visible: usize,
    /// Visible objects actually drawn.
    pub drawn: usize,
    /// Visible objects skipped by the degenerate-scale guard.
    pub skipped: usize,
    /// Context orbit ellipses drawn.
    pub orbit_paths: usize,
}

/// A visible object projected for the current frame only.
struct FrameObject<'a> {
    index: usize,
    object: &'a SimulatedObject,
    radius: f32,
    projected: Projected,
}

/// Run one tick against `surface`.
pub fn render_frame<S: DrawSurface + ?Sized>(
    view: &mut ViewState,
    objects: &[SimulatedObject],
    params: &SceneParams,
    elapsed_secs: f64,
    surface: &mut S,
) -> FrameStats {
    let [r, g, b] = BACKGROUND_RGB;
    surface.draw(DrawCommand::Clear {
        color: Color::srgb_u8(r, g, b),
    });

    let rotation = view.advance_rotation(params.rotation_increment);

    draw_reference_body(params, rotation, surface);

    let mut stats = FrameStats {
        rotation,
        ..Default::default()
    };

    let mut frame_objects = Vec::with_capacity(objects.len());
    for (index, object) in view.visible(objects) {
        stats.visible += 1;
        let radius = orbit_radius(object, &params.radii);
        let angle = angular_position(object, elapsed_secs);
        let point = orbital_point(angle, object.inclination, radius);
        match params.projector.project(point, rotation) {
            Some(projected) => frame_objects.push(FrameObject {
                index,
                object,
                radius,
                projected,
            }),
            None => stats.skipped += 1,
        }
    }

    for layer in Layer::DRAW_ORDER {
        for entry in frame_objects.iter().filter(|e| e.object.layer == layer) {
            surface.draw(DrawCommand::FillCircle {
                center: entry.projected.screen,
                radius: params.projector.draw_size(entry.projected.scale),
                color: entry.object.category.color(),
                opacity: 1.0,
            });
            stats.drawn += 1;
        }
    }

    for entry in frame_objects
        .iter()
        .filter(|e| e.index % params.orbit_path_stride == 0)
    {
        let scale = entry.projected.scale;
        surface.draw(DrawCommand::StrokeEllipse {
            center: params.projector.center,
            half_size: Vec2::new(
                entry.radius * scale,
                entry.radius * ORBIT_PATH_ASPECT * scale,
            ),
            rotation: entry.object.inclination,
            color: entry.object.category.color(),
            opacity: ORBIT_PATH_OPACITY,
        });
        stats.orbit_paths += 1;
    }

    stats
}

/// Wireframe body plus latitude rings that sway slowly with the rotation.
fn draw_reference_body<S: DrawSurface + ?Sized>(
    params: &SceneParams,
    rotation: f32,
    surface: &mut S,
) {
    let [r, g, b] = BODY_RGB;
    let color = Color::srgb_u8(r, g, b);
    let center = params.projector.center;
    let radius = params.body_radius;

    surface.draw(DrawCommand::StrokeCircle {
        center,
        radius,
        color,
        opacity: 1.0,
    });

    for ring in 1..=params.latitude_ring_count {
        let phase = ring as f32 * LATITUDE_RING_STEP + rotation * LATITUDE_RING_SWAY;
        surface.draw(DrawCommand::StrokeEllipse {
            center,
            half_size: Vec2::new(radius, (radius * phase.sin()).abs()),
            rotation: 0.0,
            color,
            opacity: LATITUDE_RING_OPACITY,
        });
    }
}
