//! Orbits - 2D Gravity Sandbox
//!
//! A desktop application for placing bodies, previewing their paths and
//! watching them move under mutual gravity.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orbits::camera::CameraPlugin;
use orbits::input::InputPlugin;
use orbits::render::RenderPlugin;
use orbits::scenarios::ScenarioPlugin;
use orbits::simulation::SimulationPlugin;
use orbits::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbits".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Simulation resources must exist before the scenario loads into them
        .add_plugins((SimulationPlugin, ScenarioPlugin))
        .add_plugins((CameraPlugin, InputPlugin, RenderPlugin, UiPlugin))
        .run();
}
