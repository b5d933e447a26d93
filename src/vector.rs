//! 2D vector helpers on top of `DVec2`.
//!
//! Addition, subtraction, scaling, magnitude and distance come straight from
//! `DVec2`. This module adds the few operations whose edge cases the physics
//! relies on: division that refuses a zero divisor, a normalization that maps
//! the zero vector to itself instead of NaN, and exact equality.

use bevy::math::DVec2;

use crate::physics::PhysicsError;

/// World-space 2D vector (f64 components).
pub type Vector2 = DVec2;

/// Extra vector operations used by the force and integration code.
pub trait VectorExt: Sized {
    /// Divide every component by `divisor`.
    ///
    /// Fails with [`PhysicsError::DivideByZero`] when `divisor == 0`.
    fn checked_div(self, divisor: f64) -> Result<Self, PhysicsError>;

    /// Unit vector in the same direction, or the zero vector if the
    /// magnitude is zero (or not finite).
    fn direction(self) -> Self;

    /// Component-wise exact float equality, no epsilon.
    fn exactly_equals(self, other: Self) -> bool;
}

impl VectorExt for DVec2 {
    #[inline]
    fn checked_div(self, divisor: f64) -> Result<Self, PhysicsError> {
        if divisor == 0.0 {
            return Err(PhysicsError::DivideByZero);
        }
        Ok(self / divisor)
    }

    #[inline]
    fn direction(self) -> Self {
        self.normalize_or_zero()
    }

    #[inline]
    fn exactly_equals(self, other: Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_checked_div_rejects_zero() {
        let v = DVec2::new(3.0, 4.0);
        assert_eq!(v.checked_div(0.0), Err(PhysicsError::DivideByZero));
        assert_eq!(v.checked_div(2.0), Ok(DVec2::new(1.5, 2.0)));
    }

    #[test]
    fn test_direction_of_zero_is_zero() {
        assert_eq!(DVec2::ZERO.direction(), DVec2::ZERO);
    }

    #[test]
    fn test_direction_is_unit_length() {
        let dir = DVec2::new(3.0, -4.0).direction();
        assert_relative_eq!(dir.length(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(dir.x, 0.6, epsilon = 1e-15);
        assert_relative_eq!(dir.y, -0.8, epsilon = 1e-15);
    }

    #[test]
    fn test_direction_of_nan_does_not_panic() {
        let dir = DVec2::new(f64::NAN, 1.0).direction();
        assert_eq!(dir, DVec2::ZERO);
    }

    #[test]
    fn test_exact_equality() {
        let a = DVec2::new(0.1 + 0.2, 1.0);
        let b = DVec2::new(0.3, 1.0);
        assert!(!a.exactly_equals(b), "Equality must not use an epsilon");
        assert!(a.exactly_equals(a));
        assert!(!DVec2::new(f64::NAN, 0.0).exactly_equals(DVec2::new(f64::NAN, 0.0)));
    }

    #[test]
    fn test_distance_and_magnitude() {
        let a = DVec2::new(1.0, 1.0);
        let b = DVec2::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!((b - a).length(), 5.0);
        assert_eq!(a + b, DVec2::new(5.0, 6.0));
        assert_eq!(a * 2.0, DVec2::new(2.0, 2.0));
    }
}
