//! Mapping between the camera and the visible world rectangle.

use bevy::math::DVec2;
use bevy::prelude::Resource;

use crate::types::DEFAULT_CAMERA_ZOOM;

/// Camera state owned by the front-end and read by the simulation.
///
/// A world point `p` is drawn at screen offset `p * zoom + position`
/// from the center of the screen (y up).
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct CameraView {
    /// Pan offset in pixels.
    pub position: DVec2,
    /// Pixels per world unit.
    pub zoom: f64,
    /// Drawable area in pixels.
    pub screen: DVec2,
}

impl Default for CameraView {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            zoom: DEFAULT_CAMERA_ZOOM,
            screen: DVec2::new(1280.0, 720.0),
        }
    }
}

impl CameraView {
    /// World-space rectangle currently on screen.
    pub fn world_bounds(&self) -> ViewBounds {
        let half = self.screen / 2.0;
        ViewBounds {
            min: (-half - self.position) / self.zoom,
            max: (half - self.position) / self.zoom,
        }
    }

    /// Screen offset (from the center, y up) of a world point.
    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        world * self.zoom + self.position
    }
}

/// Axis-aligned world rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl ViewBounds {
    /// Whether `pos` lies strictly inside the rectangle. Points on the edge
    /// are outside.
    pub fn contains(&self, pos: DVec2) -> bool {
        self.min.x < pos.x && pos.x < self.max.x && self.min.y < pos.y && pos.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_centered_camera_bounds() {
        let view = CameraView {
            position: DVec2::ZERO,
            zoom: 100.0,
            screen: DVec2::new(800.0, 600.0),
        };
        let bounds = view.world_bounds();

        assert_eq!(bounds.min, DVec2::new(-4.0, -3.0));
        assert_eq!(bounds.max, DVec2::new(4.0, 3.0));
    }

    #[test]
    fn test_panned_camera_bounds() {
        let view = CameraView {
            position: DVec2::new(200.0, -100.0),
            zoom: 50.0,
            screen: DVec2::new(400.0, 400.0),
        };
        let bounds = view.world_bounds();

        // xMin = (-200 - 200) / 50, xMax = (200 - 200) / 50
        assert_relative_eq!(bounds.min.x, -8.0);
        assert_relative_eq!(bounds.max.x, 0.0);
        // yMin = (-200 + 100) / 50, yMax = (200 + 100) / 50
        assert_relative_eq!(bounds.min.y, -2.0);
        assert_relative_eq!(bounds.max.y, 6.0);
    }

    #[test]
    fn test_bounds_match_screen_mapping() {
        let view = CameraView {
            position: DVec2::new(37.0, 12.0),
            zoom: 3.5,
            screen: DVec2::new(640.0, 480.0),
        };
        let bounds = view.world_bounds();

        let corner = view.world_to_screen(bounds.max);
        assert_relative_eq!(corner.x, 320.0, epsilon = 1e-9);
        assert_relative_eq!(corner.y, 240.0, epsilon = 1e-9);
    }

    #[test]
    fn test_contains_is_strict() {
        let bounds = ViewBounds {
            min: DVec2::new(-1.0, -1.0),
            max: DVec2::new(1.0, 1.0),
        };

        assert!(bounds.contains(DVec2::ZERO));
        assert!(!bounds.contains(DVec2::new(1.0, 0.0)));
        assert!(!bounds.contains(DVec2::new(0.0, -1.0)));
        assert!(!bounds.contains(DVec2::new(f64::NAN, 0.0)));
    }
}
