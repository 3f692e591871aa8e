//! Headless integration tests for [`OrbitalViewPlugin`].
//!
//! These tests use [`MinimalPlugins`] (no window or renderer) and insert a
//! [`DisplaySurface`] by hand where a running loop is needed, so they run fast
//! and deterministically in CI.
//!
//! Covered scenarios:
//! 1. Activation without a surface leaves the loop stopped.
//! 2. One tick per `update` once running; the draw list starts with a clear.
//! 3. LEO-only, debris hidden → exactly the matching objects are visible.
//! 4. 1000 ticks advance the rotation by exactly 1000 fixed increments.
//! 5. Double deactivation is a no-op and no further ticks fire.
//! 6. Filter changes never touch the population.

use bevy::prelude::*;
use orbitwatch::config::ViewConfig;
use orbitwatch::draw::{DisplaySurface, DrawCommand, FrameDrawList};
use orbitwatch::filter::{LayerFilter, ViewState};
use orbitwatch::frame_loop::{LoopState, RenderLoop};
use orbitwatch::object::{Category, Layer};
use orbitwatch::population::Population;
use orbitwatch::simulation::{FrameTelemetry, OrbitalViewPlugin, ViewCommand};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Minimal headless app with a seeded 200-object population and no surface.
fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(ViewConfig {
        seed: Some(1234),
        ..Default::default()
    });
    app.add_plugins(OrbitalViewPlugin);
    app
}

/// Headless app with an 800×600 surface and an activation request queued.
fn running_app() -> App {
    let mut app = headless_app();
    app.insert_resource(DisplaySurface::new(800.0, 600.0));
    send(&mut app, ViewCommand::Activate);
    app
}

fn send(app: &mut App, command: ViewCommand) {
    app.world_mut().write_message(command);
}

fn telemetry(app: &App) -> FrameTelemetry {
    *app.world().resource::<FrameTelemetry>()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn activation_without_surface_stays_stopped() {
    let mut app = headless_app();
    send(&mut app, ViewCommand::Activate);
    app.update();
    app.update();

    assert_eq!(
        app.world().resource::<RenderLoop>().state(),
        LoopState::Stopped
    );
    assert!(app.world().resource::<FrameDrawList>().0.is_empty());
    assert_eq!(telemetry(&app).frame, 0);
}

#[test]
fn running_loop_renders_one_tick_per_update() {
    let mut app = running_app();
    for _ in 0..3 {
        app.update();
    }

    let readout = telemetry(&app);
    assert!(readout.running);
    assert_eq!(readout.frame, 3);
    assert_eq!(readout.tracked_objects, 200);
    assert_eq!(readout.visible_objects, 200);

    let draw_list = &app.world().resource::<FrameDrawList>().0;
    assert!(matches!(draw_list.first(), Some(DrawCommand::Clear { .. })));
    let fills = draw_list
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
        .count();
    assert_eq!(fills + readout.skipped_objects, readout.visible_objects);
}

#[test]
fn low_band_without_debris_shows_exactly_matching_objects() {
    let mut app = running_app();
    app.update();

    send(
        &mut app,
        ViewCommand::SetFilterLayer(LayerFilter::Only(Layer::Low)),
    );
    send(&mut app, ViewCommand::SetDebrisVisible(false));
    app.update();

    let expected = app
        .world()
        .resource::<Population>()
        .objects()
        .iter()
        .filter(|o| o.layer == Layer::Low && o.category != Category::Debris)
        .count();
    let readout = telemetry(&app);
    assert_eq!(readout.visible_objects, expected);
    assert_eq!(readout.tracked_objects, 200);
    assert_eq!(readout.filter, LayerFilter::Only(Layer::Low));
    assert!(!readout.debris_visible);
}

#[test]
fn thousand_ticks_advance_rotation_by_fixed_increments() {
    let mut app = running_app();
    for _ in 0..1000 {
        app.update();
    }

    let expected = (1000.0_f64 * 0.002).rem_euclid(std::f64::consts::TAU) as f32;
    let rotation = app.world().resource::<ViewState>().rotation();
    assert_eq!(telemetry(&app).frame, 1000);
    assert!(
        (rotation - expected).abs() < 1e-3,
        "rotation {rotation} expected {expected}"
    );
}

#[test]
fn double_deactivate_stops_without_further_ticks() {
    let mut app = running_app();
    app.update();
    app.update();

    send(&mut app, ViewCommand::Deactivate);
    send(&mut app, ViewCommand::Deactivate);
    app.update();
    send(&mut app, ViewCommand::Deactivate);
    app.update();

    let render_loop = app.world().resource::<RenderLoop>();
    assert_eq!(render_loop.state(), LoopState::Stopped);
    assert!(render_loop.pending_frame().is_none());
    let frozen = telemetry(&app);
    assert_eq!(frozen.frame, 2);
    assert!(!frozen.running);

    for _ in 0..5 {
        app.update();
    }
    assert_eq!(telemetry(&app).frame, 2);
}

#[test]
fn pause_and_resume_continues_the_rotation() {
    let mut app = running_app();
    app.update();
    send(&mut app, ViewCommand::Deactivate);
    app.update();
    let paused_rotation = app.world().resource::<ViewState>().rotation();

    app.update();
    assert_eq!(
        app.world().resource::<ViewState>().rotation(),
        paused_rotation
    );

    send(&mut app, ViewCommand::Activate);
    app.update();
    let resumed = app.world().resource::<ViewState>().rotation();
    assert!((resumed - paused_rotation - 0.002).abs() < 1e-6);
}

#[test]
fn filter_changes_never_touch_the_population() {
    let mut app = running_app();
    app.update();
    let before = app.world().resource::<Population>().0.clone();

    for filter in [
        LayerFilter::Only(Layer::Geosynchronous),
        LayerFilter::Only(Layer::Mid),
        LayerFilter::All,
    ] {
        send(&mut app, ViewCommand::SetFilterLayer(filter));
        send(&mut app, ViewCommand::SetDebrisVisible(false));
        app.update();
        send(&mut app, ViewCommand::SetDebrisVisible(true));
        app.update();
    }

    assert_eq!(app.world().resource::<Population>().0, before);
}

#[test]
fn resize_recentres_the_reference_body() {
    let mut app = running_app();
    app.update();
    send(
        &mut app,
        ViewCommand::Resize {
            width: 1000.0,
            height: 400.0,
        },
    );
    app.update();

    let draw_list = &app.world().resource::<FrameDrawList>().0;
    let body_center = draw_list.iter().find_map(|c| match c {
        DrawCommand::StrokeCircle { center, .. } => Some(*center),
        _ => None,
    });
    assert_eq!(body_center, Some(Vec2::new(500.0, 200.0)));
}

#[test]
fn filter_changes_while_paused_update_the_readout() {
    let mut app = running_app();
    app.update();
    send(&mut app, ViewCommand::Deactivate);
    app.update();

    send(
        &mut app,
        ViewCommand::SetFilterLayer(LayerFilter::Only(Layer::Mid)),
    );
    send(&mut app, ViewCommand::SetDebrisVisible(false));
    app.update();

    let readout = telemetry(&app);
    assert_eq!(readout.frame, 1);
    assert!(!readout.running);
    assert_eq!(readout.filter, LayerFilter::Only(Layer::Mid));
    assert!(!readout.debris_visible);
}
