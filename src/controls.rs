//! Keyboard filter controls.
//!
//! - **0** / **A** → all bands
//! - **1** / **2** / **3** → LEO / MEO / GEO only
//! - **D** → toggle the debris field
//! - **Space** → pause / resume the render loop
//!
//! Keys are translated into [`ViewCommand`] messages; nothing here touches
//! [`ViewState`] directly, so every mutation goes through the single command
//! drain that runs before the tick.

use crate::filter::{LayerFilter, ViewState};
use crate::frame_loop::RenderLoop;
use crate::object::Layer;
use crate::simulation::ViewCommand;
use bevy::prelude::*;

/// Map one key press to a view command given the current state.
pub fn command_for_key(key: KeyCode, view: &ViewState, running: bool) -> Option<ViewCommand> {
    match key {
        KeyCode::Digit0 | KeyCode::KeyA => Some(ViewCommand::SetFilterLayer(LayerFilter::All)),
        KeyCode::Digit1 => Some(ViewCommand::SetFilterLayer(LayerFilter::Only(Layer::Low))),
        KeyCode::Digit2 => Some(ViewCommand::SetFilterLayer(LayerFilter::Only(Layer::Mid))),
        KeyCode::Digit3 => Some(ViewCommand::SetFilterLayer(LayerFilter::Only(
            Layer::Geosynchronous,
        ))),
        KeyCode::KeyD => Some(ViewCommand::SetDebrisVisible(!view.debris_visible)),
        KeyCode::Space if running => Some(ViewCommand::Deactivate),
        KeyCode::Space => Some(ViewCommand::Activate),
        _ => None,
    }
}

/// Translate this frame's key presses into [`ViewCommand`]s.
pub fn keyboard_view_controls_system(
    keys: Res<ButtonInput<KeyCode>>,
    view: Res<ViewState>,
    render_loop: Res<RenderLoop>,
    mut writer: MessageWriter<ViewCommand>,
) {
    let running = render_loop.is_running();
    for key in keys.get_just_pressed() {
        if let Some(command) = command_for_key(*key, &view, running) {
            writer.write(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_select_bands() {
        let view = ViewState::default();
        assert_eq!(
            command_for_key(KeyCode::Digit1, &view, true),
            Some(ViewCommand::SetFilterLayer(LayerFilter::Only(Layer::Low)))
        );
        assert_eq!(
            command_for_key(KeyCode::Digit3, &view, true),
            Some(ViewCommand::SetFilterLayer(LayerFilter::Only(
                Layer::Geosynchronous
            )))
        );
        assert_eq!(
            command_for_key(KeyCode::KeyA, &view, true),
            Some(ViewCommand::SetFilterLayer(LayerFilter::All))
        );
    }

    #[test]
    fn d_flips_the_current_debris_setting() {
        let mut view = ViewState::default();
        assert_eq!(
            command_for_key(KeyCode::KeyD, &view, true),
            Some(ViewCommand::SetDebrisVisible(false))
        );
        view.set_debris_visible(false);
        assert_eq!(
            command_for_key(KeyCode::KeyD, &view, true),
            Some(ViewCommand::SetDebrisVisible(true))
        );
    }

    #[test]
    fn space_pauses_and_resumes() {
        let view = ViewState::default();
        assert_eq!(
            command_for_key(KeyCode::Space, &view, true),
            Some(ViewCommand::Deactivate)
        );
        assert_eq!(
            command_for_key(KeyCode::Space, &view, false),
            Some(ViewCommand::Activate)
        );
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(
            command_for_key(KeyCode::KeyQ, &ViewState::default(), true),
            None
        );
    }
}
