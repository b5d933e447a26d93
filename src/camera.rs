//! Camera system for the sandbox.
//!
//! The Bevy camera itself never moves: one render unit is one pixel and the
//! origin is the center of the window. Panning and zooming only change the
//! [`CameraView`] resource, which maps world units to pixels for both the
//! renderer and the trajectory preview's on-screen test.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit},
    math::DVec2,
    prelude::*,
    window::PrimaryWindow,
};
use bevy_egui::EguiContexts;

use crate::types::SimulationSystemSet;
use crate::viewport::CameraView;

/// Minimum zoom (pixels per world unit).
pub const MIN_ZOOM: f64 = 1.0;

/// Maximum zoom (pixels per world unit).
pub const MAX_ZOOM: f64 = 10_000.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraView>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (sync_screen_size, camera_zoom, camera_pan).in_set(SimulationSystemSet::Input),
            );
    }
}

/// Spawn the 2D camera.
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Keep the view's screen size in step with the window.
fn sync_screen_size(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut view: ResMut<CameraView>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let screen = DVec2::new(window.width() as f64, window.height() as f64);
    if view.screen != screen {
        view.screen = screen;
    }
}

/// Multiplicative zoom change for one frame of wheel input.
///
/// Scrolling up zooms in. Line-based wheels change zoom by 1/50 per line,
/// pixel-based touchpads by 1/1000 per pixel.
pub fn wheel_zoom_factor(unit: MouseScrollUnit, delta_y: f32) -> f64 {
    let delta = delta_y as f64;
    match unit {
        MouseScrollUnit::Line => 1.0 + delta / 50.0,
        MouseScrollUnit::Pixel => 1.0 + delta / 1000.0,
    }
}

/// Apply a zoom factor, keeping the result within [`MIN_ZOOM`, `MAX_ZOOM`].
pub fn apply_zoom(view: &mut CameraView, factor: f64) {
    view.zoom = (view.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
}

/// Whether egui is using the pointer this frame.
fn pointer_over_ui(contexts: &mut EguiContexts) -> bool {
    match contexts.ctx_mut() {
        Ok(ctx) => ctx.wants_pointer_input() || ctx.is_pointer_over_area(),
        Err(_) => false,
    }
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(
    mut contexts: EguiContexts,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut view: ResMut<CameraView>,
) {
    if mouse_scroll.delta.y == 0.0 || pointer_over_ui(&mut contexts) {
        return;
    }

    let factor = wheel_zoom_factor(mouse_scroll.unit, mouse_scroll.delta.y);
    apply_zoom(&mut view, factor);
}

/// Handle left mouse button drag for panning.
fn camera_pan(
    mut contexts: EguiContexts,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut view: ResMut<CameraView>,
) {
    if !mouse_buttons.pressed(MouseButton::Left) || mouse_motion.delta == Vec2::ZERO {
        return;
    }
    if pointer_over_ui(&mut contexts) {
        return;
    }

    // Window coordinates grow downward; the view's y axis points up.
    view.position.x += mouse_motion.delta.x as f64;
    view.position.y -= mouse_motion.delta.y as f64;
}
