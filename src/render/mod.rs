//! Rendering for the sandbox.
//!
//! Bodies are filled circle meshes kept in sync with the simulation; the
//! trajectory previews are immediate-mode gizmo lines.

pub mod bodies;
pub mod trajectories;

use bevy::prelude::*;

use self::bodies::sync_body_visuals;
use self::trajectories::draw_trajectories;
use crate::types::SimulationSystemSet;

pub use self::bodies::BodyVisual;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK)).add_systems(
            Update,
            (sync_body_visuals, draw_trajectories).in_set(SimulationSystemSet::Draw),
        );
    }
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// Bodies. Gizmo lines are drawn on top regardless.
    pub const BODIES: f32 = 1.0;
}
