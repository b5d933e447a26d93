//! Built-in starting configurations for the sandbox.

pub mod presets;

use bevy::prelude::*;

use crate::body::BodyInit;
use crate::simulation::{EditorValues, Simulation, SimulationError};

pub use presets::SCENARIOS;

/// A named set of bodies to start from.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Initial body values, in display order.
    pub bodies: &'static [BodyInit],
}

impl Scenario {
    /// Replace every body of the simulation and the editor with this
    /// scenario's bodies, and go back to `Setting`.
    pub fn load(
        &self,
        simulation: &mut Simulation,
        editor: &mut EditorValues,
    ) -> Result<(), SimulationError> {
        simulation.clear();
        editor.clear();
        simulation.restart();

        for init in self.bodies {
            let id = simulation.add_body(*init)?;
            editor.track(id, *init);
        }

        info!("Loaded scenario '{}' ({} bodies)", self.name, self.bodies.len());
        Ok(())
    }
}

/// Look up a preset by id.
pub fn find(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|scenario| scenario.id == id)
}

/// Resource naming the scenario loaded at startup.
#[derive(Resource, Clone, Debug)]
pub struct StartupScenario(pub &'static str);

impl Default for StartupScenario {
    fn default() -> Self {
        Self(presets::STAR_AND_PLANET.id)
    }
}

/// Plugin loading the startup scenario.
pub struct ScenarioPlugin;

impl Plugin for ScenarioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StartupScenario>()
            .add_systems(Startup, load_startup_scenario);
    }
}

fn load_startup_scenario(
    startup: Res<StartupScenario>,
    mut simulation: ResMut<Simulation>,
    mut editor: ResMut<EditorValues>,
) {
    let Some(scenario) = find(startup.0) else {
        warn!("Unknown startup scenario '{}'", startup.0);
        return;
    };

    if let Err(err) = scenario.load(&mut simulation, &mut editor) {
        warn!("Failed to load scenario '{}': {}", scenario.name, err);
    }
}
