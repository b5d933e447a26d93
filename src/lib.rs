//! Orbits - 2D Gravity Sandbox
//!
//! A library crate providing the N-body simulation, trajectory preview and
//! viewport mapping, plus the Bevy plugins that drive them.

pub mod body;
pub mod camera;
pub mod input;
pub mod physics;
pub mod prediction;
pub mod render;
pub mod scenarios;
pub mod simulation;
pub mod types;
pub mod ui;
pub mod vector;
pub mod viewport;

#[cfg(test)]
pub mod test_utils;
