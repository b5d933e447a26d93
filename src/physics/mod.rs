//! Gravity and integration shared by live bodies and trajectory cursors.
//!
//! Anything that moves under gravity implements [`Mover`]. A mover never
//! looks up its partners itself: the caller takes a snapshot of the
//! partner set (see [`partners`]) and hands it to every mover of the step,
//! so all forces in one step are computed from the same positions.

mod gravity;
mod integrator;
pub mod partners;

#[cfg(test)]
mod proptest_physics;

use bevy::math::DVec2;

pub use gravity::{net_force, pairwise_force};
pub use integrator::{semi_implicit_euler, step_all};
pub use partners::{CursorPartners, LivePartners, PartnerSet};

/// Numeric failures of the physics layer.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsError {
    #[error("division by zero")]
    DivideByZero,

    #[error("cannot accelerate a body with zero mass")]
    ZeroMass,
}

/// A point mass as seen by its partners during one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attractor {
    /// Position of the source mover in its collection. Used to skip self.
    pub slot: usize,
    pub pos: DVec2,
    pub mass: f64,
}

/// Capability shared by live bodies and path cursors.
pub trait Mover {
    fn position(&self) -> DVec2;

    fn velocity(&self) -> DVec2;

    fn mass(&self) -> f64;

    /// Overwrite position and velocity with the result of a step.
    fn set_motion(&mut self, pos: DVec2, vel: DVec2);

    /// Net gravitational force from every partner except the one at `slot`.
    fn net_force(&self, slot: usize, partners: &[Attractor], g: f64) -> DVec2 {
        net_force(slot, self.position(), self.mass(), partners, g)
    }

    /// Advance one step against `partners`, mutating position and velocity.
    ///
    /// On error the mover is left untouched.
    fn integrate_step(
        &mut self,
        slot: usize,
        partners: &[Attractor],
        g: f64,
    ) -> Result<(), PhysicsError> {
        let force = self.net_force(slot, partners, g);
        let (pos, vel) = semi_implicit_euler(self.position(), self.velocity(), self.mass(), force)?;
        self.set_motion(pos, vel);
        Ok(())
    }
}

/// Snapshot the position and mass of every mover, tagged with its slot.
pub fn snapshot<M: Mover>(movers: &[M]) -> Vec<Attractor> {
    movers
        .iter()
        .enumerate()
        .map(|(slot, mover)| Attractor {
            slot,
            pos: mover.position(),
            mass: mover.mass(),
        })
        .collect()
}
