//! Gravity between point masses.
//!
//! Uses the sandbox's simplified inverse-square law: the distance is scaled
//! by [`DISTANCE_SCALE`] before squaring, and forces (not accelerations) are
//! returned so that the caller divides by its own mass.

use bevy::math::DVec2;

use super::Attractor;
use crate::types::DISTANCE_SCALE;
use crate::vector::VectorExt;

/// Force exerted on a mass at `pos` by a mass at `other_pos`.
///
/// Magnitude is `g * mass * other_mass / (distance * DISTANCE_SCALE)²`,
/// directed from `pos` toward `other_pos`. Coincident positions have no
/// defined direction and contribute zero force.
#[inline]
pub fn pairwise_force(pos: DVec2, mass: f64, other_pos: DVec2, other_mass: f64, g: f64) -> DVec2 {
    let delta = other_pos - pos;
    let distance = delta.length();

    if distance == 0.0 {
        return DVec2::ZERO;
    }

    let scaled = distance * DISTANCE_SCALE;
    let magnitude = g * mass * other_mass / (scaled * scaled);

    delta.direction() * magnitude
}

/// Sum of the forces from every attractor except the one at `slot`.
///
/// O(n) in the number of partners.
#[inline]
pub fn net_force(slot: usize, pos: DVec2, mass: f64, partners: &[Attractor], g: f64) -> DVec2 {
    partners
        .iter()
        .filter(|partner| partner.slot != slot)
        .fold(DVec2::ZERO, |acc, partner| {
            acc + pairwise_force(pos, mass, partner.pos, partner.mass, g)
        })
}
