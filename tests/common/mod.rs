//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec2;
use orbits::body::BodyInit;
use orbits::simulation::Simulation;
use orbits::types::{BodyId, DISTANCE_SCALE};

/// Editor values for a body with the given state.
pub fn init(pos: DVec2, vel: DVec2, mass: f64) -> BodyInit {
    BodyInit {
        pos,
        vel,
        mass,
        ..Default::default()
    }
}

/// A simulation holding the given bodies, in order.
pub fn simulation_with(inits: &[BodyInit]) -> (Simulation, Vec<BodyId>) {
    let mut simulation = Simulation::default();
    let ids = inits
        .iter()
        .map(|init| simulation.add_body(*init).expect("test bodies have mass"))
        .collect();
    (simulation, ids)
}

/// Speed of a circular orbit around a fixed mass under the scaled force law.
pub fn circular_speed(central_mass: f64, distance: f64, g: f64) -> f64 {
    let scaled = distance * DISTANCE_SCALE;
    (g * central_mass * distance / (scaled * scaled)).sqrt()
}

/// Mass-weighted mean position of every body.
pub fn center_of_mass(simulation: &Simulation) -> DVec2 {
    let bodies = simulation.bodies();
    let total: f64 = bodies.iter().map(|body| body.mass()).sum();
    bodies
        .iter()
        .fold(DVec2::ZERO, |acc, body| acc + body.pos * body.mass())
        / total
}

/// Advance a running simulation by `steps` ticks.
pub fn run_steps(simulation: &mut Simulation, steps: usize) {
    use orbits::simulation::NoInput;
    use orbits::viewport::CameraView;

    let view = CameraView::default();
    for _ in 0..steps {
        simulation.tick(&NoInput, &view);
    }
}
