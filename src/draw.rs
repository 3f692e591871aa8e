//! Draw primitives emitted by the render loop.
//!
//! The loop assumes a surface that can clear, stroke circles and ellipses and
//! fill circles and nothing more.  Any backend (Bevy gizmos, a software buffer,
//! a recorded list for tests) implements [`DrawSurface`].
//!
//! Positions are in canvas-style screen space: origin top-left, `y` down.

use bevy::prelude::*;

/// One primitive draw operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear { color: Color },
    /// Outline a circle.
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Color,
        opacity: f32,
    },
    /// Outline an ellipse whose major axis is rotated by `rotation` radians
    /// (clockwise on screen).
    StrokeEllipse {
        center: Vec2,
        half_size: Vec2,
        rotation: f32,
        color: Color,
        opacity: f32,
    },
    /// Solid disc.
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
        opacity: f32,
    },
}

impl DrawCommand {
    /// Colour with the command's opacity folded into alpha.
    pub fn resolved_color(&self) -> Color {
        match *self {
            DrawCommand::Clear { color } => color,
            DrawCommand::StrokeCircle { color, opacity, .. }
            | DrawCommand::StrokeEllipse { color, opacity, .. }
            | DrawCommand::FillCircle { color, opacity, .. } => color.with_alpha(opacity),
        }
    }
}

/// A sink for draw commands.
pub trait DrawSurface {
    fn draw(&mut self, command: DrawCommand);
}

impl DrawSurface for Vec<DrawCommand> {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command);
    }
}

/// Host surface description: logical size in pixels.
///
/// Inserted by the host once a window exists; `activate()` refuses to start
/// the loop without it.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct DisplaySurface {
    pub width: f32,
    pub height: f32,
}

impl DisplaySurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Whether the surface has a drawable area.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Convert a canvas-style point to a centred, y-up world point.
    #[inline]
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x - self.width * 0.5, self.height * 0.5 - screen.y)
    }
}

/// Draw commands produced by the most recent tick, replayed by the presenter.
#[derive(Resource, Debug, Clone, Default)]
pub struct FrameDrawList(pub Vec<DrawCommand>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_surface_records_in_order() {
        let mut surface: Vec<DrawCommand> = Vec::new();
        surface.draw(DrawCommand::Clear {
            color: Color::BLACK,
        });
        surface.draw(DrawCommand::FillCircle {
            center: Vec2::ZERO,
            radius: 2.0,
            color: Color::WHITE,
            opacity: 1.0,
        });
        assert_eq!(surface.len(), 2);
        assert!(matches!(surface[0], DrawCommand::Clear { .. }));
    }

    #[test]
    fn opacity_is_folded_into_alpha() {
        let command = DrawCommand::StrokeCircle {
            center: Vec2::ZERO,
            radius: 1.0,
            color: Color::WHITE,
            opacity: 0.25,
        };
        assert!((command.resolved_color().alpha() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn screen_to_world_flips_y_about_the_centre() {
        let surface = DisplaySurface::new(800.0, 600.0);
        assert_eq!(surface.to_world(Vec2::new(400.0, 300.0)), Vec2::ZERO);
        assert_eq!(surface.to_world(Vec2::new(0.0, 0.0)), Vec2::new(-400.0, 300.0));
    }

    #[test]
    fn zero_sized_surface_is_not_drawable() {
        assert!(!DisplaySurface::new(0.0, 600.0).is_drawable());
        assert!(DisplaySurface::new(800.0, 600.0).is_drawable());
    }
}
