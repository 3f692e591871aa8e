//! Orbital view plugin and its per-frame systems.
//!
//! ## Pipeline (runs in order every `Update` frame, inside [`ViewLoopSet`])
//!
//! 1. [`apply_view_commands_system`] drains [`ViewCommand`] messages:
//!    filter changes, debris toggle, resize, activate/deactivate.
//! 2. [`render_loop_system`] fires the pending frame request, runs one tick
//!    into [`FrameDrawList`] and publishes [`FrameTelemetry`].
//!
//! Both systems take exclusive access to [`ViewState`] and are chained, so a
//! filter mutation can never land between the rotation advance of a tick and
//! the projection of its objects.  Hosts write commands from systems ordered
//! `.before(ViewLoopSet)` and present the draw list `.after(ViewLoopSet)`.

use crate::config::ViewConfig;
use crate::draw::{DisplaySurface, FrameDrawList};
use crate::filter::{LayerFilter, ViewState};
use crate::frame_loop::RenderLoop;
use crate::population::{seed_population_system, Population};
use crate::scene::{render_frame, SceneParams};
use bevy::prelude::*;

pub struct OrbitalViewPlugin;

impl Plugin for OrbitalViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewConfig>()
            .init_resource::<Population>()
            .init_resource::<ViewState>()
            .init_resource::<RenderLoop>()
            .init_resource::<FrameDrawList>()
            .init_resource::<FrameTelemetry>()
            .add_message::<ViewCommand>()
            .add_systems(Startup, seed_population_system)
            .add_systems(
                Update,
                (apply_view_commands_system, render_loop_system)
                    .chain()
                    .in_set(ViewLoopSet),
            );
    }
}

/// System set containing the command drain and the tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewLoopSet;

/// Host → engine input.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    Activate,
    Deactivate,
    SetFilterLayer(LayerFilter),
    SetDebrisVisible(bool),
    Resize { width: f32, height: f32 },
}

/// Read-only per-frame readout for the host.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTelemetry {
    /// Ticks rendered since startup.
    pub frame: u64,
    /// Population size; filtering never changes it.
    pub tracked_objects: usize,
    pub visible_objects: usize,
    pub drawn_objects: usize,
    /// Visible objects dropped by the degenerate-scale guard this frame.
    pub skipped_objects: usize,
    pub orbit_paths: usize,
    pub filter: LayerFilter,
    pub debris_visible: bool,
    pub rotation: f32,
    pub running: bool,
}

/// Apply queued host commands in arrival order.
///
/// A resize with no surface yet creates one, so a host may resize and then
/// activate within the same frame.
pub fn apply_view_commands_system(
    mut commands: Commands,
    mut messages: MessageReader<ViewCommand>,
    mut view: ResMut<ViewState>,
    mut render_loop: ResMut<RenderLoop>,
    surface: Option<ResMut<DisplaySurface>>,
) {
    let mut current = surface.as_deref().copied();
    let mut resized = false;

    for message in messages.read() {
        match *message {
            ViewCommand::Activate => match render_loop.activate(current.as_ref()) {
                Ok(()) => info!("Render loop running"),
                Err(e) => error!("Render loop activation failed: {e}"),
            },
            ViewCommand::Deactivate => {
                if render_loop.deactivate() {
                    info!("Render loop stopped");
                }
            }
            ViewCommand::SetFilterLayer(filter) => {
                view.set_filter_layer(filter);
                debug!("Layer filter set to {filter}");
            }
            ViewCommand::SetDebrisVisible(visible) => {
                view.set_debris_visible(visible);
                debug!("Debris field visible: {visible}");
            }
            ViewCommand::Resize { width, height } => {
                match current.as_mut() {
                    Some(existing) => existing.resize(width, height),
                    None => current = Some(DisplaySurface::new(width, height)),
                }
                resized = true;
            }
        }
    }

    if !resized {
        return;
    }
    match (surface, current) {
        (Some(mut existing), Some(updated)) => *existing = updated,
        (None, Some(created)) => commands.insert_resource(created),
        _ => {}
    }
}

/// Fire the pending frame request, if any, and run one tick.
///
/// When the loop is stopped the last draw list is left in place, so the host
/// keeps presenting the frozen frame.
#[allow(clippy::too_many_arguments)]
pub fn render_loop_system(
    time: Res<Time>,
    config: Res<ViewConfig>,
    population: Res<Population>,
    surface: Option<Res<DisplaySurface>>,
    mut view: ResMut<ViewState>,
    mut render_loop: ResMut<RenderLoop>,
    mut draw_list: ResMut<FrameDrawList>,
    mut telemetry: ResMut<FrameTelemetry>,
) {
    let Some(request) = render_loop.pending_frame() else {
        publish_idle_telemetry(&mut telemetry, &view, false);
        return;
    };
    if !render_loop.begin_frame(request) {
        publish_idle_telemetry(&mut telemetry, &view, render_loop.is_running());
        return;
    }

    if let Some(surface) = surface.as_deref() {
        let params = SceneParams::new(&config, surface);
        draw_list.0.clear();
        let stats = render_frame(
            &mut view,
            population.objects(),
            &params,
            time.elapsed_secs_f64(),
            &mut draw_list.0,
        );
        if stats.skipped > 0 {
            debug!(
                "Skipped {} objects at the focal plane this frame",
                stats.skipped
            );
        }
        *telemetry = FrameTelemetry {
            frame: render_loop.frames_rendered() + 1,
            tracked_objects: population.len(),
            visible_objects: stats.visible,
            drawn_objects: stats.drawn,
            skipped_objects: stats.skipped,
            orbit_paths: stats.orbit_paths,
            filter: view.filter,
            debris_visible: view.debris_visible,
            rotation: stats.rotation,
            running: true,
        };
    }

    render_loop.end_frame();
    telemetry.running = render_loop.is_running();
}

/// Without a tick, carry filter changes and the run state into the readout.
///
/// Only writes when something differs, so the HUD is not redrawn every frame
/// while paused.
fn publish_idle_telemetry(telemetry: &mut ResMut<FrameTelemetry>, view: &ViewState, running: bool) {
    let idle = FrameTelemetry {
        filter: view.filter,
        debris_visible: view.debris_visible,
        running,
        ..**telemetry
    };
    telemetry.set_if_neq(idle);
}
