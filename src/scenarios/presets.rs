//! Preset scenario definitions.
//!
//! Masses and speeds are tuned for the default gravitational constant (1.0)
//! and camera zoom, so every preset fits on screen and its preview shows
//! most of one orbit.

use bevy::math::DVec2;

use super::Scenario;
use crate::body::BodyInit;
use crate::types::BodyColor;

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[STAR_AND_PLANET, BINARY_PAIR, EMPTY];

/// A heavy star with one planet on a near-circular orbit.
///
/// Circular speed for this force law is `sqrt(G * M / (r * 1000²))`:
/// with M = 1000 and r = 3 that is about 0.01826 units per step.
pub const STAR_AND_PLANET: Scenario = Scenario {
    id: "star_and_planet",
    name: "Star and Planet",
    description: "One planet circling a heavy star.",
    bodies: &[
        BodyInit {
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            mass: 1000.0,
            radius: 0.5,
            color: BodyColor([0xff, 0xd5, 0x4f]),
        },
        BodyInit {
            pos: DVec2::new(3.0, 0.0),
            vel: DVec2::new(0.0, 0.01826),
            mass: 1.0,
            radius: 0.2,
            color: BodyColor([0x4f, 0xc3, 0xf7]),
        },
    ],
};

/// Two equal masses circling their common center.
///
/// Each body sits 1.5 units from the center, 3 units from its partner:
/// speed `sqrt(1.5 * G * m / (3² * 1000²))` ≈ 0.009129 for m = 500.
pub const BINARY_PAIR: Scenario = Scenario {
    id: "binary_pair",
    name: "Binary Pair",
    description: "Two equal stars orbiting each other.",
    bodies: &[
        BodyInit {
            pos: DVec2::new(-1.5, 0.0),
            vel: DVec2::new(0.0, -0.009129),
            mass: 500.0,
            radius: 0.3,
            color: BodyColor([0xff, 0x70, 0x43]),
        },
        BodyInit {
            pos: DVec2::new(1.5, 0.0),
            vel: DVec2::new(0.0, 0.009129),
            mass: 500.0,
            radius: 0.3,
            color: BodyColor([0x81, 0xc7, 0x84]),
        },
    ],
};

/// Nothing at all; add bodies from the panel.
pub const EMPTY: Scenario = Scenario {
    id: "empty",
    name: "Empty",
    description: "A blank sandbox.",
    bodies: &[],
};
