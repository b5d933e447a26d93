//! Keyboard shortcuts for simulation control and camera zoom.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::body::BodyInit;
use crate::camera::apply_zoom;
use crate::simulation::{EditorValues, Simulation, add_edited_body};
use crate::types::SimulationSystemSet;
use crate::viewport::CameraView;

/// Zoom change per frame while a zoom key is held.
pub const KEY_ZOOM_STEP: f64 = 0.05;

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            keyboard_shortcuts.in_set(SimulationSystemSet::Input),
        );
    }
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    mut contexts: EguiContexts,
    keys: Res<ButtonInput<KeyCode>>,
    mut simulation: ResMut<Simulation>,
    mut editor: ResMut<EditorValues>,
    mut view: ResMut<CameraView>,
) {
    // Typing into a form field must not trigger shortcuts.
    if contexts
        .ctx_mut()
        .is_ok_and(|ctx| ctx.wants_keyboard_input())
    {
        return;
    }

    // Space: play / pause
    if keys.just_pressed(KeyCode::Space) {
        simulation.toggle_play_pause();
    }

    // R: back to editing
    if keys.just_pressed(KeyCode::KeyR) {
        simulation.restart();
    }

    // N: new body at the origin
    if keys.just_pressed(KeyCode::KeyN) {
        match add_edited_body(&mut simulation, &mut editor, BodyInit::default()) {
            Ok(id) => debug!("Shortcut added {}", id),
            Err(err) => warn!("Could not add body: {}", err),
        }
    }

    // Plus/Equal: zoom in
    if keys.pressed(KeyCode::Equal) || keys.pressed(KeyCode::NumpadAdd) {
        apply_zoom(&mut view, 1.0 + KEY_ZOOM_STEP);
    }

    // Minus: zoom out
    if keys.pressed(KeyCode::Minus) || keys.pressed(KeyCode::NumpadSubtract) {
        apply_zoom(&mut view, 1.0 - KEY_ZOOM_STEP);
    }

    // Home: recenter
    if keys.just_pressed(KeyCode::Home) {
        view.position = Default::default();
        info!("Camera recentered");
    }
}
