//! Test utilities for gravity sandbox tests.
//!
//! Provides fixtures for common body layouts and assertions for physical
//! invariants like momentum conservation.

use bevy::math::DVec2;

use crate::body::{Body, BodyInit};
use crate::types::BodyId;

/// Fixtures for creating test bodies.
pub mod fixtures {
    use super::*;

    /// A body with the given position, velocity and mass.
    pub fn body(id: u32, pos: DVec2, vel: DVec2, mass: f64) -> Body {
        Body::new(
            BodyId(id),
            BodyInit {
                pos,
                vel,
                mass,
                ..Default::default()
            },
        )
        .expect("fixture mass must be non-zero")
    }

    /// Two equal masses mirrored through the origin with opposite velocities.
    ///
    /// Total momentum is zero and the center of mass stays at the origin.
    pub fn symmetric_pair(separation: f64, speed: f64, mass: f64) -> Vec<Body> {
        let half = separation / 2.0;
        vec![
            body(0, DVec2::new(-half, 0.0), DVec2::new(0.0, speed), mass),
            body(1, DVec2::new(half, 0.0), DVec2::new(0.0, -speed), mass),
        ]
    }

    /// A heavy body at the origin and a light one at `distance` on the x axis
    /// moving at circular speed for gravitational constant `g`.
    pub fn star_and_planet(distance: f64, g: f64) -> Vec<Body> {
        let star_mass = 1000.0;
        vec![
            body(0, DVec2::ZERO, DVec2::ZERO, star_mass),
            body(
                1,
                DVec2::new(distance, 0.0),
                DVec2::new(0.0, assertions::circular_speed(star_mass, distance, g)),
                1.0,
            ),
        ]
    }
}

/// Assertions for physical invariants.
pub mod assertions {
    use super::*;
    use crate::types::DISTANCE_SCALE;

    /// Mass-weighted mean position.
    pub fn center_of_mass(bodies: &[Body]) -> DVec2 {
        let total: f64 = bodies.iter().map(Body::mass).sum();
        bodies
            .iter()
            .fold(DVec2::ZERO, |acc, body| acc + body.pos * body.mass())
            / total
    }

    /// Total momentum of all bodies.
    pub fn total_momentum(bodies: &[Body]) -> DVec2 {
        bodies
            .iter()
            .fold(DVec2::ZERO, |acc, body| acc + body.vel * body.mass())
    }

    /// Speed of a circular orbit around a fixed mass, one step per unit time.
    ///
    /// With the scaled force law the acceleration at distance r is
    /// `g * m / (r * DISTANCE_SCALE)^2`, so `v^2 / r` equals that.
    pub fn circular_speed(central_mass: f64, distance: f64, g: f64) -> f64 {
        let scaled = distance * DISTANCE_SCALE;
        (g * central_mass * distance / (scaled * scaled)).sqrt()
    }

    /// Assert that two vectors agree within `tolerance` on both axes.
    pub fn assert_vec_near(actual: DVec2, expected: DVec2, tolerance: f64) {
        assert!(
            (actual - expected).abs().max_element() <= tolerance,
            "Expected {:?} within {} of {:?}",
            actual,
            tolerance,
            expected
        );
    }
}
