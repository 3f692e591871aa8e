//! Bevy host surface: camera, window ↔ [`DisplaySurface`] plumbing, and the
//! gizmo presenter that replays each frame's [`FrameDrawList`].
//!
//! Gizmos are immediate mode, so the presenter redraws the latest list every
//! `Update`; while the loop is stopped that list is the frozen last frame.

use crate::draw::{DisplaySurface, DrawCommand, DrawSurface, FrameDrawList};
use crate::simulation::ViewCommand;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

/// Radial spacing of the concentric rings that approximate a filled disc.
const FILL_RING_SPACING: f32 = 0.75;

/// Upper bound on rings per filled disc; larger discs get sparser rings.
const MAX_FILL_RINGS: usize = 64;

/// Radii of the concentric rings drawn for a filled disc of `radius`,
/// outermost first.  Never more than [`MAX_FILL_RINGS`], whatever the radius.
pub fn fill_ring_radii(radius: f32) -> impl Iterator<Item = f32> {
    let radius = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
    let wanted = (radius / FILL_RING_SPACING).ceil() as usize;
    let count = wanted.min(MAX_FILL_RINGS);
    let spacing = if count == 0 { 0.0 } else { radius / count as f32 };
    (0..count).map(move |i| radius - i as f32 * spacing)
}

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    // Default Camera2d maps one world unit to one logical pixel, centred.
    commands.spawn(Camera2d);
}

/// Startup system: describe the primary window as the drawing surface.
///
/// Without a primary window no [`DisplaySurface`] is inserted and the
/// activation request below fails once with `MissingSurface`.
pub fn attach_display_surface(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    match windows.single() {
        Ok(window) => {
            commands.insert_resource(DisplaySurface::new(window.width(), window.height()));
        }
        Err(_) => warn!("No primary window; orbital view has no surface"),
    }
}

/// Startup system: ask the view to start once the surface is attached.
pub fn request_activation(mut writer: MessageWriter<ViewCommand>) {
    writer.write(ViewCommand::Activate);
}

/// Forward window resizes to the view as `Resize` commands.
pub fn window_resize_system(
    mut resized: MessageReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut writer: MessageWriter<ViewCommand>,
) {
    let Ok(primary) = primary.single() else {
        return;
    };
    for event in resized.read().filter(|e| e.window == primary) {
        writer.write(ViewCommand::Resize {
            width: event.width,
            height: event.height,
        });
    }
}

/// [`DrawSurface`] backed by Bevy gizmos.
///
/// Converts canvas-style coordinates (origin top-left, y down) to the centred,
/// y-up world space of the default 2D camera.  `Clear` is captured rather than
/// drawn: the clear colour belongs to [`ClearColor`].
pub struct GizmoSurface<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    surface: DisplaySurface,
    clear_color: Option<Color>,
}

impl<'a, 'w, 's> GizmoSurface<'a, 'w, 's> {
    pub fn new(gizmos: &'a mut Gizmos<'w, 's>, surface: DisplaySurface) -> Self {
        Self {
            gizmos,
            surface,
            clear_color: None,
        }
    }

    /// Colour of the last `Clear` command, if any.
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }
}

impl DrawSurface for GizmoSurface<'_, '_, '_> {
    fn draw(&mut self, command: DrawCommand) {
        let color = command.resolved_color();
        match command {
            DrawCommand::Clear { color } => self.clear_color = Some(color),
            DrawCommand::StrokeCircle { center, radius, .. } => {
                self.gizmos
                    .circle_2d(self.surface.to_world(center), radius, color);
            }
            DrawCommand::StrokeEllipse {
                center,
                half_size,
                rotation,
                ..
            } => {
                // Screen rotation is clockwise with y down; world y is up.
                let isometry =
                    Isometry2d::new(self.surface.to_world(center), Rot2::radians(-rotation));
                self.gizmos.ellipse_2d(isometry, half_size, color);
            }
            DrawCommand::FillCircle { center, radius, .. } => {
                let position = self.surface.to_world(center);
                for ring in fill_ring_radii(radius) {
                    self.gizmos.circle_2d(position, ring, color);
                }
            }
        }
    }
}

/// Replay the latest draw list through gizmos.
pub fn present_frame_system(
    mut gizmos: Gizmos,
    draw_list: Res<FrameDrawList>,
    surface: Option<Res<DisplaySurface>>,
    mut clear_color: ResMut<ClearColor>,
) {
    let Some(surface) = surface else {
        return;
    };
    let mut target = GizmoSurface::new(&mut gizmos, *surface);
    for command in &draw_list.0 {
        target.draw(*command);
    }
    if let Some(color) = target.clear_color() {
        if clear_color.0 != color {
            clear_color.0 = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_disc_rings_follow_the_spacing() {
        let rings: Vec<f32> = fill_ring_radii(3.0).collect();
        assert_eq!(rings.len(), 4);
        assert_eq!(rings[0], 3.0);
        assert!(rings.iter().all(|r| *r > 0.0));
        assert!((rings[0] - rings[1] - FILL_RING_SPACING).abs() < 1e-6);
    }

    #[test]
    fn huge_disc_ring_count_is_bounded() {
        for radius in [1.0e4_f32, 5.2e7, f32::MAX] {
            let rings: Vec<f32> = fill_ring_radii(radius).collect();
            assert_eq!(rings.len(), MAX_FILL_RINGS, "radius {radius}");
            assert!(rings.iter().all(|r| *r > 0.0));
        }
    }

    #[test]
    fn empty_or_invalid_disc_draws_nothing() {
        assert_eq!(fill_ring_radii(0.0).count(), 0);
        assert_eq!(fill_ring_radii(-2.0).count(), 0);
        assert_eq!(fill_ring_radii(f32::NAN).count(), 0);
        assert_eq!(fill_ring_radii(f32::INFINITY).count(), 0);
    }
}
