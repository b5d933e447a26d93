//! Trajectory preview for bodies being edited.
//!
//! Every body gets a [`PathCursor`] seeded from its live state. The cursors
//! then run their own short N-body simulation in lockstep, attracting each
//! other but never the live bodies, and each step of a cursor is recorded as
//! a fading line segment. A cursor stops recording once it has been on
//! screen and left it again, or once it stops moving; otherwise it runs for
//! the whole iteration budget.

use std::time::Instant;

use bevy::log::debug;
use bevy::math::DVec2;

use crate::body::Body;
use crate::physics::{CursorPartners, Mover, PartnerSet, step_all};
use crate::types::{BodyColor, BodyId};
use crate::vector::VectorExt;
use crate::viewport::ViewBounds;

/// Whether a cursor has been seen on screen during the current pass.
///
/// The transition `NotEntered -> Entered` is one-way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewPresence {
    #[default]
    NotEntered,
    Entered,
}

impl ViewPresence {
    fn observe(self, inside: bool) -> Self {
        match self {
            ViewPresence::NotEntered if inside => ViewPresence::Entered,
            other => other,
        }
    }
}

/// Ephemeral point mass that walks a body's predicted path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathCursor {
    pub pos: DVec2,
    pub vel: DVec2,
    mass: f64,
    /// Position before the last step.
    pub prev_pos: DVec2,
    presence: ViewPresence,
}

impl PathCursor {
    pub fn from_body(body: &Body) -> Self {
        Self {
            pos: body.pos,
            vel: body.vel,
            mass: body.mass(),
            prev_pos: body.pos,
            presence: ViewPresence::NotEntered,
        }
    }

    /// Classify the cursor's latest step against the visible rectangle.
    fn observe(&mut self, bounds: &ViewBounds) -> StepCheck {
        let inside = bounds.contains(self.pos);
        self.presence = self.presence.observe(inside);

        StepCheck {
            exited_after_entering: !inside && self.presence == ViewPresence::Entered,
            stationary: self.pos.exactly_equals(self.prev_pos),
        }
    }
}

impl Mover for PathCursor {
    fn position(&self) -> DVec2 {
        self.pos
    }

    fn velocity(&self) -> DVec2 {
        self.vel
    }

    fn mass(&self) -> f64 {
        self.mass
    }

    fn set_motion(&mut self, pos: DVec2, vel: DVec2) {
        self.pos = pos;
        self.vel = vel;
    }
}

struct StepCheck {
    exited_after_entering: bool,
    stationary: bool,
}

/// One drawn step of a predicted path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSegment {
    pub from: DVec2,
    pub to: DVec2,
    /// 1.0 for the first step, fading linearly to 0.0 at the last step of
    /// the budget.
    pub alpha: f32,
}

/// Why a path stopped growing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathEnd {
    /// Ran for the whole iteration budget.
    Exhausted,
    /// Left the screen after having been on it.
    ExitedView { steps: usize },
    /// Did not move during its last step.
    Stationary { steps: usize },
}

/// Predicted path of one body.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryPath {
    pub body: BodyId,
    pub color: BodyColor,
    pub segments: Vec<PathSegment>,
    pub end: PathEnd,
}

/// Alpha of the segment drawn at step `index` out of `max_iterations`.
pub fn segment_alpha(index: usize, max_iterations: usize) -> f32 {
    if max_iterations <= 1 {
        return 1.0;
    }
    1.0 - index as f32 / (max_iterations - 1) as f32
}

/// Run one projection pass over `bodies`.
///
/// Returns one path per body, in body order, each with at most
/// `max_iterations` segments. The live bodies are only read.
pub fn project_trajectories(
    bodies: &[Body],
    g: f64,
    bounds: &ViewBounds,
    max_iterations: usize,
) -> Vec<TrajectoryPath> {
    let start = Instant::now();

    let mut cursors: Vec<PathCursor> = bodies.iter().map(PathCursor::from_body).collect();
    let mut paths: Vec<TrajectoryPath> = bodies
        .iter()
        .map(|body| TrajectoryPath {
            body: body.id(),
            color: body.color,
            segments: Vec::with_capacity(max_iterations.min(64)),
            end: PathEnd::Exhausted,
        })
        .collect();
    let mut stopped = vec![false; bodies.len()];
    let mut active = bodies.len();
    let mut steps_taken = 0;

    for index in 0..max_iterations {
        if active == 0 {
            break;
        }

        // Stopped cursors keep moving so the remaining ones still feel them.
        let partners = CursorPartners(&cursors).attractors();
        for cursor in &mut cursors {
            cursor.prev_pos = cursor.pos;
        }
        step_all(&mut cursors, &partners, g);
        steps_taken += 1;

        let alpha = segment_alpha(index, max_iterations);
        for ((cursor, path), done) in cursors.iter_mut().zip(&mut paths).zip(&mut stopped) {
            if *done {
                continue;
            }

            let check = cursor.observe(bounds);
            path.segments.push(PathSegment {
                from: cursor.prev_pos,
                to: cursor.pos,
                alpha,
            });

            let steps = index + 1;
            if check.exited_after_entering {
                path.end = PathEnd::ExitedView { steps };
            } else if check.stationary {
                path.end = PathEnd::Stationary { steps };
            } else {
                continue;
            }

            *done = true;
            active -= 1;
        }
    }

    debug!(
        "Projected {} bodies in {} steps ({:.2} ms)",
        bodies.len(),
        steps_taken,
        start.elapsed().as_secs_f64() * 1000.0
    );

    paths
}
