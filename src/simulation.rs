//! The simulation engine: bodies, gravitational constant and play state.
//!
//! One call to [`Simulation::tick`] is one frame. While bodies are being
//! edited (`Setting`) the engine pulls the editor's values into its bodies
//! and previews every trajectory; while `Running` it advances every body by
//! one step; while `Paused` it does nothing.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::body::{Body, BodyInit};
use crate::physics::{LivePartners, PartnerSet, step_all};
use crate::prediction::{TrajectoryPath, project_trajectories};
use crate::types::{
    BodyId, DEFAULT_GRAVITATIONAL_CONSTANT, DEFAULT_MAX_PATH_ITERATIONS, SimulationStatus,
    SimulationSystemSet,
};
use crate::viewport::CameraView;

/// Plugin providing the simulation resources and the per-frame tick.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationConfig>()
            .init_resource::<CameraView>();

        let config = app.world().resource::<SimulationConfig>().clone();
        if !app.world().contains_resource::<Simulation>() {
            app.insert_resource(Simulation::new(&config));
        }
        if !app.world().contains_resource::<EditorValues>() {
            app.insert_resource(EditorValues::new(config.gravitational_constant));
        }

        app.configure_sets(
            Update,
            (
                SimulationSystemSet::Input,
                SimulationSystemSet::Tick,
                SimulationSystemSet::Draw,
            )
                .chain(),
        )
        .add_systems(Update, tick_simulation.in_set(SimulationSystemSet::Tick));
    }
}

/// Startup configuration of the simulation.
#[derive(Resource, Clone, Debug)]
pub struct SimulationConfig {
    /// Initial gravitational constant. Default: 1.0.
    pub gravitational_constant: f64,
    /// Step budget of each trajectory preview. Default: 800.
    pub max_path_iterations: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            max_path_iterations: DEFAULT_MAX_PATH_ITERATIONS,
        }
    }
}

/// Errors returned by simulation commands.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    #[error("{id} has zero mass")]
    ZeroMass { id: BodyId },

    #[error("no body with id {0}")]
    UnknownBody(BodyId),
}

/// Values currently held by the body editor.
///
/// The simulation reads them once per tick while in `Setting`.
pub trait InputSource {
    /// Gravitational constant to use for this tick, if the editor has one.
    fn gravitational_constant(&self) -> Option<f64>;

    /// Editor values for a body, if the editor knows it.
    fn body_values(&self, id: BodyId) -> Option<BodyInit>;
}

/// An editor that holds nothing. Bodies keep their current values.
pub struct NoInput;

impl InputSource for NoInput {
    fn gravitational_constant(&self) -> Option<f64> {
        None
    }

    fn body_values(&self, _id: BodyId) -> Option<BodyInit> {
        None
    }
}

/// Form values of the editor panel, one entry per body in display order.
#[derive(Resource, Clone, Debug, Default)]
pub struct EditorValues {
    pub gravitational_constant: f64,
    entries: Vec<(BodyId, BodyInit)>,
}

impl EditorValues {
    pub fn new(gravitational_constant: f64) -> Self {
        Self {
            gravitational_constant,
            entries: Vec::new(),
        }
    }

    /// Start tracking a body's form, or replace its values.
    pub fn track(&mut self, id: BodyId, init: BodyInit) {
        match self.get_mut(id) {
            Some(values) => *values = init,
            None => self.entries.push((id, init)),
        }
    }

    pub fn forget(&mut self, id: BodyId) {
        self.entries.retain(|(entry, _)| *entry != id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: BodyId) -> Option<&BodyInit> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, init)| init)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut BodyInit> {
        self.entries
            .iter_mut()
            .find(|(entry, _)| *entry == id)
            .map(|(_, init)| init)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyId, &mut BodyInit)> {
        self.entries.iter_mut().map(|(id, init)| (*id, init))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl InputSource for EditorValues {
    fn gravitational_constant(&self) -> Option<f64> {
        Some(self.gravitational_constant)
    }

    fn body_values(&self, id: BodyId) -> Option<BodyInit> {
        self.get(id).copied()
    }
}

/// Create a body from `init` and give it an editor form.
pub fn add_edited_body(
    simulation: &mut Simulation,
    editor: &mut EditorValues,
    init: BodyInit,
) -> Result<BodyId, SimulationError> {
    let id = simulation.add_body(init)?;
    editor.track(id, init);
    simulation.mark_edited();
    Ok(id)
}

/// Remove a body together with its editor form.
pub fn remove_edited_body(
    simulation: &mut Simulation,
    editor: &mut EditorValues,
    id: BodyId,
) -> Result<(), SimulationError> {
    simulation.remove_body(id)?;
    editor.forget(id);
    simulation.mark_edited();
    Ok(())
}

/// What a tick did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Trajectories are available; `recomputed` is false when nothing
    /// changed since the previous pass and the cached paths were kept.
    Projected { recomputed: bool },
    /// Every body advanced one step, except the listed ones.
    Advanced { failed: Vec<BodyId> },
    /// Paused: nothing changed.
    Held,
}

/// Owner of every live body.
#[derive(Resource, Debug)]
pub struct Simulation {
    bodies: Vec<Body>,
    next_id: u32,
    status: SimulationStatus,
    gravitational_constant: f64,
    max_path_iterations: usize,
    paths: Vec<TrajectoryPath>,
    /// Something changed since the last projection pass.
    dirty: bool,
    /// Camera used by the last projection pass.
    last_view: Option<CameraView>,
    /// Bodies whose editor values are currently rejected.
    rejected: HashSet<BodyId>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(&SimulationConfig::default())
    }
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 0,
            status: SimulationStatus::Setting,
            gravitational_constant: config.gravitational_constant,
            max_path_iterations: config.max_path_iterations,
            paths: Vec::new(),
            dirty: true,
            last_view: None,
            rejected: HashSet::new(),
        }
    }

    pub fn status(&self) -> SimulationStatus {
        self.status
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    pub fn set_gravitational_constant(&mut self, g: f64) {
        if g.to_bits() != self.gravitational_constant.to_bits() {
            self.gravitational_constant = g;
            self.dirty = true;
        }
    }

    pub fn max_path_iterations(&self) -> usize {
        self.max_path_iterations
    }

    /// Live bodies in insertion order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|body| body.id() == id)
    }

    /// Paths from the latest projection pass, in body order.
    pub fn projected_paths(&self) -> &[TrajectoryPath] {
        &self.paths
    }

    /// Create a body and return its handle. Zero mass is rejected.
    pub fn add_body(&mut self, init: BodyInit) -> Result<BodyId, SimulationError> {
        let id = BodyId(self.next_id);
        let body = Body::new(id, init)?;

        self.next_id += 1;
        self.bodies.push(body);
        self.dirty = true;

        info!("Added {} at ({:.3}, {:.3})", id, init.pos.x, init.pos.y);
        Ok(id)
    }

    /// Remove a body and return it.
    pub fn remove_body(&mut self, id: BodyId) -> Result<Body, SimulationError> {
        let index = self
            .bodies
            .iter()
            .position(|body| body.id() == id)
            .ok_or(SimulationError::UnknownBody(id))?;

        let body = self.bodies.remove(index);
        self.paths.retain(|path| path.body != id);
        self.rejected.remove(&id);
        self.dirty = true;

        info!("Removed {}", id);
        Ok(body)
    }

    /// Remove every body.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.paths.clear();
        self.rejected.clear();
        self.dirty = true;
    }

    /// Setting and Paused start running; Running pauses.
    pub fn toggle_play_pause(&mut self) -> SimulationStatus {
        self.status = match self.status {
            SimulationStatus::Setting | SimulationStatus::Paused => SimulationStatus::Running,
            SimulationStatus::Running => SimulationStatus::Paused,
        };

        info!("Simulation {}", self.status.label());
        self.status
    }

    /// Go back to editing. Bodies are not touched here; the next tick pulls
    /// the editor's values back into them.
    pub fn restart(&mut self) {
        self.status = SimulationStatus::Setting;
        self.dirty = true;
        info!("Simulation restarted");
    }

    /// The user started editing a field: pause if running, then go back to
    /// `Setting`.
    pub fn mark_edited(&mut self) {
        if self.status == SimulationStatus::Running {
            self.toggle_play_pause();
        }
        self.status = SimulationStatus::Setting;
        self.dirty = true;
    }

    /// Overwrite a body's values directly and go back to `Setting`.
    pub fn edit_body(&mut self, id: BodyId, init: BodyInit) -> Result<(), SimulationError> {
        let body = self
            .bodies
            .iter_mut()
            .find(|body| body.id() == id)
            .ok_or(SimulationError::UnknownBody(id))?;

        body.apply(init)?;
        self.mark_edited();
        Ok(())
    }

    /// Run one frame.
    ///
    /// The gravitational constant is read from `input` once, up front, and
    /// used for every computation of the tick.
    pub fn tick(&mut self, input: &impl InputSource, view: &CameraView) -> TickOutcome {
        if let Some(g) = input.gravitational_constant() {
            self.set_gravitational_constant(g);
        }

        match self.status {
            SimulationStatus::Setting => {
                self.refresh_from(input);
                let recomputed = self.project(view);
                TickOutcome::Projected { recomputed }
            }
            SimulationStatus::Running => {
                let failed = self.advance();
                TickOutcome::Advanced { failed }
            }
            SimulationStatus::Paused => TickOutcome::Held,
        }
    }

    /// Pull editor values into every body it knows about.
    fn refresh_from(&mut self, input: &impl InputSource) {
        for body in &mut self.bodies {
            let id = body.id();
            let Some(init) = input.body_values(id) else {
                continue;
            };

            match body.apply(init) {
                Ok(changed) => {
                    self.dirty |= changed;
                    self.rejected.remove(&id);
                }
                Err(err) => {
                    if self.rejected.insert(id) {
                        warn!("Keeping previous values: {}", err);
                    }
                }
            }
        }
    }

    /// Recompute the trajectory previews if anything changed.
    fn project(&mut self, view: &CameraView) -> bool {
        if self.last_view.as_ref() != Some(view) {
            self.dirty = true;
        }
        if !self.dirty {
            return false;
        }

        self.paths = project_trajectories(
            &self.bodies,
            self.gravitational_constant,
            &view.world_bounds(),
            self.max_path_iterations,
        );
        self.last_view = Some(*view);
        self.dirty = false;
        true
    }

    /// Advance every body one step against a snapshot of all bodies.
    fn advance(&mut self) -> Vec<BodyId> {
        let partners = LivePartners(&self.bodies).attractors();
        let failures = step_all(&mut self.bodies, &partners, self.gravitational_constant);

        failures
            .into_iter()
            .map(|(slot, _)| self.bodies[slot].id())
            .collect()
    }
}

/// Advance the simulation by one tick per frame.
pub fn tick_simulation(
    mut simulation: ResMut<Simulation>,
    editor: Res<EditorValues>,
    view: Res<CameraView>,
) {
    simulation.tick(&*editor, &view);
}
