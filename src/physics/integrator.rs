//! Semi-implicit (symplectic) Euler integration with a unit timestep.
//!
//! One step is `v += F / m; x += v`: the freshly updated velocity moves the
//! position. The sandbox measures velocity in world units per step, so there
//! is no `dt`.

use bevy::log::warn;
use bevy::math::DVec2;

use super::{Attractor, Mover, PhysicsError};
use crate::vector::VectorExt;

/// Advance a single state by one step under `force`.
///
/// Returns the new `(position, velocity)`. Fails with
/// [`PhysicsError::ZeroMass`] when `mass == 0`.
#[inline]
pub fn semi_implicit_euler(
    pos: DVec2,
    vel: DVec2,
    mass: f64,
    force: DVec2,
) -> Result<(DVec2, DVec2), PhysicsError> {
    let acc = force
        .checked_div(mass)
        .map_err(|_| PhysicsError::ZeroMass)?;

    let vel = vel + acc;
    let pos = pos + vel;

    Ok((pos, vel))
}

/// Step every mover once against a snapshot of `partners`.
///
/// `partners` must have been taken before this call, so no mover sees a
/// peer that has already moved this step. A mover that fails to integrate is
/// left where it was and reported by slot; the others still advance.
pub fn step_all<M: Mover>(
    movers: &mut [M],
    partners: &[Attractor],
    g: f64,
) -> Vec<(usize, PhysicsError)> {
    let mut failures = Vec::new();

    for (slot, mover) in movers.iter_mut().enumerate() {
        if let Err(err) = mover.integrate_step(slot, partners, g) {
            warn!("Mover {} skipped this step: {}", slot, err);
            failures.push((slot, err));
        }
    }

    failures
}
