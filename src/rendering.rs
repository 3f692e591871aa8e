//! HUD overlay: header readout, category legend, controls hint and the
//! visibility note.
//!
//! ## System Responsibilities
//!
//! | System                   | Schedule | Purpose                                 |
//! |--------------------------|----------|-----------------------------------------|
//! | `setup_hud`              | Startup  | Spawn header, legend, hint and note     |
//! | `hud_telemetry_system`   | Update   | Refresh header text from telemetry      |
//!
//! The congestion label is a host-side reading of the telemetry; the view
//! itself has no notion of congestion.

use crate::config::ViewConfig;
use crate::object::Category;
use crate::simulation::FrameTelemetry;
use bevy::prelude::*;

// ── Congestion label ──────────────────────────────────────────────────────────

/// Qualitative congestion index shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CongestionLevel {
    Low,
    Moderate,
    High,
}

impl CongestionLevel {
    /// Classify a visible-object count against the configured thresholds.
    pub fn from_visible(visible: usize, config: &ViewConfig) -> Self {
        if visible >= config.congestion_high_at {
            Self::High
        } else if visible >= config.congestion_moderate_at {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Low => Color::srgb(0.06, 0.73, 0.51),
            Self::Moderate => Color::srgb(0.96, 0.62, 0.04),
            Self::High => Color::srgb(0.94, 0.27, 0.27),
        }
    }
}

/// Header line for one frame of telemetry.
pub fn telemetry_line(telemetry: &FrameTelemetry, congestion: CongestionLevel) -> String {
    format!(
        "TRACKED {}  |  VISIBLE {}  |  FILTER {}  |  DEBRIS {}  |  CONGESTION {}  |  SYNC: {}",
        telemetry.tracked_objects,
        telemetry.visible_objects,
        telemetry.filter,
        if telemetry.debris_visible { "ON" } else { "OFF" },
        congestion.label(),
        if telemetry.running { "LIVE" } else { "PAUSED" },
    )
}

// ── Component markers ─────────────────────────────────────────────────────────

/// Marker for the header telemetry text.
#[derive(Component)]
pub struct HudTelemetryText;

// ── Colour helpers ────────────────────────────────────────────────────────────

fn title_text() -> Color {
    Color::srgb(0.95, 0.96, 0.98)
}
fn dim_text() -> Color {
    Color::srgb(0.39, 0.45, 0.55)
}
fn panel_bg() -> Color {
    Color::srgba(0.01, 0.02, 0.09, 0.8)
}

// ── Startup ───────────────────────────────────────────────────────────────────

/// Spawn the HUD: header (top-left), legend (below header), visibility note
/// (top-right) and controls hint (bottom).
pub fn setup_hud(mut commands: Commands, config: Res<ViewConfig>) {
    let font_size = config.hud_font_size;

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(10.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(2.0),
            ..default()
        })
        .with_children(|header| {
            header.spawn((
                Text::new("ORBITAL WATCH"),
                TextFont {
                    font_size: font_size + 4.0,
                    ..default()
                },
                TextColor(title_text()),
            ));
            header.spawn((
                Text::new("LIVE SPACE SITUATIONAL AWARENESS"),
                TextFont {
                    font_size: font_size - 4.0,
                    ..default()
                },
                TextColor(dim_text()),
            ));
            header.spawn((
                Text::new(""),
                TextFont {
                    font_size,
                    ..default()
                },
                TextColor(title_text()),
                HudTelemetryText,
            ));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                top: Val::Px(80.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(8.0)),
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(panel_bg()),
        ))
        .with_children(|legend| {
            for category in Category::ALL {
                legend.spawn((
                    Text::new(format!("● {}", category.profile().legend)),
                    TextFont {
                        font_size: font_size - 2.0,
                        ..default()
                    },
                    TextColor(category.color()),
                ));
            }
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(12.0),
                top: Val::Px(80.0),
                width: Val::Px(200.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(panel_bg()),
        ))
        .with_children(|note| {
            note.spawn((
                Text::new(
                    "VISIBILITY NOTE: restricted assets are abstracted to generic \
                     orbital slots. Precision telemetry withheld.",
                ),
                TextFont {
                    font_size: font_size - 4.0,
                    ..default()
                },
                TextColor(dim_text()),
            ));
        });

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            bottom: Val::Px(10.0),
            ..default()
        })
        .with_children(|hint| {
            hint.spawn((
                Text::new("[0] ALL  [1] LEO  [2] MEO  [3] GEO  [D] DEBRIS FIELD  [SPACE] PAUSE"),
                TextFont {
                    font_size: font_size - 2.0,
                    ..default()
                },
                TextColor(dim_text()),
            ));
        });
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Refresh the header text whenever telemetry changes.
pub fn hud_telemetry_system(
    telemetry: Res<FrameTelemetry>,
    config: Res<ViewConfig>,
    mut query: Query<(&mut Text, &mut TextColor), With<HudTelemetryText>>,
) {
    if !telemetry.is_changed() {
        return;
    }
    let congestion = CongestionLevel::from_visible(telemetry.visible_objects, &config);
    for (mut text, mut color) in query.iter_mut() {
        text.0 = telemetry_line(&telemetry, congestion);
        color.0 = congestion.color();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::LayerFilter;
    use crate::object::Layer;

    #[test]
    fn congestion_thresholds() {
        let config = ViewConfig::default();
        assert_eq!(CongestionLevel::from_visible(0, &config), CongestionLevel::Low);
        assert_eq!(
            CongestionLevel::from_visible(config.congestion_moderate_at, &config),
            CongestionLevel::Moderate
        );
        assert_eq!(CongestionLevel::from_visible(200, &config), CongestionLevel::High);
    }

    #[test]
    fn telemetry_line_reports_filter_and_sync() {
        let telemetry = FrameTelemetry {
            tracked_objects: 200,
            visible_objects: 41,
            filter: LayerFilter::Only(Layer::Low),
            debris_visible: false,
            running: false,
            ..Default::default()
        };
        let line = telemetry_line(&telemetry, CongestionLevel::Low);
        assert!(line.contains("TRACKED 200"));
        assert!(line.contains("VISIBLE 41"));
        assert!(line.contains("FILTER LEO"));
        assert!(line.contains("DEBRIS OFF"));
        assert!(line.contains("SYNC: PAUSED"));
    }

    #[test]
    fn hud_text_follows_telemetry() {
        let mut world = World::new();
        world.insert_resource(ViewConfig::default());
        world.insert_resource(FrameTelemetry {
            tracked_objects: 200,
            visible_objects: 150,
            running: true,
            ..Default::default()
        });
        let entity = world
            .spawn((Text::new(""), TextColor(Color::WHITE), HudTelemetryText))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(hud_telemetry_system);
        schedule.run(&mut world);

        let text = world.get::<Text>(entity).unwrap();
        assert!(text.0.contains("CONGESTION HIGH"));
        assert!(text.0.contains("SYNC: LIVE"));
    }
}
