//! Trajectory preview rendering using Bevy Gizmos.
//!
//! Paths are only drawn while the bodies are being edited. Each segment
//! fades with its step index so the preview thins out toward the end of
//! its budget.

use bevy::prelude::*;

use crate::prediction::PathSegment;
use crate::simulation::Simulation;
use crate::types::{BodyColor, SimulationStatus};
use crate::viewport::CameraView;

/// A segment in screen space, ready to draw.
pub fn screen_segment(segment: &PathSegment, view: &CameraView) -> (Vec2, Vec2) {
    (
        view.world_to_screen(segment.from).as_vec2(),
        view.world_to_screen(segment.to).as_vec2(),
    )
}

/// Color of a segment drawn for a body of the given color.
pub fn segment_color(color: BodyColor, segment: &PathSegment) -> Color {
    color.with_alpha(segment.alpha)
}

/// Draw the projected trajectories of every body.
pub fn draw_trajectories(
    mut gizmos: Gizmos,
    simulation: Res<Simulation>,
    view: Res<CameraView>,
) {
    if simulation.status() != SimulationStatus::Setting {
        return;
    }

    for path in simulation.projected_paths() {
        for segment in &path.segments {
            let (from, to) = screen_segment(segment, &view);
            gizmos.line_2d(from, to, segment_color(path.color, segment));
        }
    }
}
