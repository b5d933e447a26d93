//! Partner-set resolution: who pulls on whom.
//!
//! Live bodies attract live bodies. Path cursors attract the other cursors
//! of the same projection pass and never the live bodies, so a preview is a
//! self-contained N-body system seeded from the live one.

use super::{Attractor, snapshot};
use crate::body::Body;
use crate::prediction::PathCursor;

/// A source of attractors for one integration step.
pub trait PartnerSet {
    /// Positions and masses at the moment of the call, tagged by slot.
    fn attractors(&self) -> Vec<Attractor>;
}

/// Partners of a live body: every body owned by the simulation.
pub struct LivePartners<'a>(pub &'a [Body]);

impl PartnerSet for LivePartners<'_> {
    fn attractors(&self) -> Vec<Attractor> {
        snapshot(self.0)
    }
}

/// Partners of a path cursor: the cursors of the current projection pass.
pub struct CursorPartners<'a>(pub &'a [PathCursor]);

impl PartnerSet for CursorPartners<'_> {
    fn attractors(&self) -> Vec<Attractor> {
        snapshot(self.0)
    }
}
