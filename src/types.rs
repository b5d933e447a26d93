//! Core physics types and constants for the N-body sandbox.

use bevy::prelude::*;

/// Gravitational constant used when nothing else is configured.
///
/// The sandbox works in arbitrary world units, so this is a plain
/// scaling factor rather than the SI constant.
pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = 1.0;

/// Distances are multiplied by this factor before being squared in the
/// inverse-square law. Keeps forces small for bodies a few units apart.
pub const DISTANCE_SCALE: f64 = 1000.0;

/// Maximum number of steps a trajectory preview may take per body.
pub const DEFAULT_MAX_PATH_ITERATIONS: usize = 800;

/// Default camera zoom in pixels per world unit.
pub const DEFAULT_CAMERA_ZOOM: f64 = 100.0;

/// System sets ordering one frame of the sandbox.
///
/// Input is applied before the simulation ticks, and drawing reads the
/// state the tick produced.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSystemSet {
    /// Keyboard, mouse and camera handling
    Input,
    /// One simulation tick
    Tick,
    /// Gizmo rendering
    Draw,
}

/// Stable handle for a body, assigned by the simulation when it is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub u32);

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "planet-{}", self.0)
    }
}

/// Display color of a body as sRGB bytes. Ignored by the physics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyColor(pub [u8; 3]);

impl BodyColor {
    pub const RED: Self = Self([0xff, 0x00, 0x00]);

    /// Bevy color with the given alpha (0.0 transparent, 1.0 opaque).
    pub fn with_alpha(self, alpha: f32) -> Color {
        let [r, g, b] = self.0;
        Color::srgba_u8(r, g, b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

impl Default for BodyColor {
    fn default() -> Self {
        Self::RED
    }
}

impl From<BodyColor> for Color {
    fn from(color: BodyColor) -> Self {
        let [r, g, b] = color.0;
        Color::srgb_u8(r, g, b)
    }
}

/// Which per-tick behavior the simulation runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimulationStatus {
    /// Bodies are being edited; trajectories are previewed, nothing moves.
    #[default]
    Setting,
    /// Bodies advance one integration step per tick.
    Running,
    /// Nothing moves; the last state stays on screen.
    Paused,
}

impl SimulationStatus {
    pub fn label(self) -> &'static str {
        match self {
            SimulationStatus::Setting => "setting",
            SimulationStatus::Running => "running",
            SimulationStatus::Paused => "paused",
        }
    }
}
