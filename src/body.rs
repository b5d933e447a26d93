//! Live bodies of the simulation.
//!
//! A body is a point mass with a display radius and color. Its initial state
//! comes from a [`BodyInit`] supplied by the editor; while the simulation is
//! running it is moved in place by the integrator.

use bevy::math::DVec2;

use crate::physics::Mover;
use crate::simulation::SimulationError;
use crate::types::{BodyColor, BodyId};

/// Editable state of a body, as supplied by the editor.
///
/// All fields are plain numbers; parsing user text is the editor's job.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyInit {
    /// Position in world units.
    pub pos: DVec2,
    /// Velocity in world units per step.
    pub vel: DVec2,
    /// Mass. Must not be zero.
    pub mass: f64,
    /// Display radius in world units. Not used by the physics.
    pub radius: f64,
    pub color: BodyColor,
}

impl Default for BodyInit {
    fn default() -> Self {
        Self {
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            mass: 1.0,
            radius: 1.0,
            color: BodyColor::default(),
        }
    }
}

impl BodyInit {
    /// Check the values the physics cannot work with.
    pub fn validate(&self, id: BodyId) -> Result<(), SimulationError> {
        if self.mass == 0.0 {
            return Err(SimulationError::ZeroMass { id });
        }
        Ok(())
    }
}

/// A live point mass owned by the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    id: BodyId,
    pub pos: DVec2,
    pub vel: DVec2,
    mass: f64,
    pub radius: f64,
    pub color: BodyColor,
}

impl Body {
    /// Create a body from editor values, rejecting a zero mass.
    pub fn new(id: BodyId, init: BodyInit) -> Result<Self, SimulationError> {
        init.validate(id)?;
        Ok(Self {
            id,
            pos: init.pos,
            vel: init.vel,
            mass: init.mass,
            radius: init.radius,
            color: init.color,
        })
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Overwrite every editable field. On error the body is unchanged.
    ///
    /// Returns whether anything actually changed.
    pub fn apply(&mut self, init: BodyInit) -> Result<bool, SimulationError> {
        init.validate(self.id)?;
        let changed = init != self.to_init();

        self.pos = init.pos;
        self.vel = init.vel;
        self.mass = init.mass;
        self.radius = init.radius;
        self.color = init.color;

        Ok(changed)
    }

    /// Current state expressed as editor values.
    pub fn to_init(&self) -> BodyInit {
        BodyInit {
            pos: self.pos,
            vel: self.vel,
            mass: self.mass,
            radius: self.radius,
            color: self.color,
        }
    }
}

impl Mover for Body {
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
