use bevy::prelude::*;
use bevy::window::WindowResolution;
use orbitwatch::config::{self, ViewConfig};
use orbitwatch::constants::BACKGROUND_RGB;
use orbitwatch::population::seed_population_system;
use orbitwatch::simulation::{OrbitalViewPlugin, ViewLoopSet};
use orbitwatch::{controls, graphics, rendering};

fn main() {
    // Window size has to be known before the app is built, so read the config
    // file eagerly here; the Startup loader below re-applies it (plus the seed
    // override) to the resource.
    let window_config = std::fs::read_to_string("assets/view.toml")
        .ok()
        .and_then(|contents| ViewConfig::from_toml(&contents).ok())
        .unwrap_or_default();

    let [r, g, b] = BACKGROUND_RGB;

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Orbital Watch".into(),
            resolution: WindowResolution::new(
                window_config.window_width,
                window_config.window_height,
            ),
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::srgb_u8(r, g, b)))
    // Compiled defaults; load_view_config overwrites them from
    // assets/view.toml (if present) before the population is seeded.
    .insert_resource(ViewConfig::default())
    .add_plugins(OrbitalViewPlugin)
    .add_systems(
        Startup,
        (
            config::load_view_config.before(seed_population_system),
            graphics::setup_camera,
            graphics::attach_display_surface,
            graphics::request_activation.after(graphics::attach_display_surface),
            rendering::setup_hud.after(config::load_view_config),
        ),
    )
    .add_systems(
        Update,
        (
            (
                controls::keyboard_view_controls_system,
                graphics::window_resize_system,
            )
                .before(ViewLoopSet),
            (graphics::present_frame_system, rendering::hud_telemetry_system)
                .after(ViewLoopSet),
        ),
    );

    app.run();
}
