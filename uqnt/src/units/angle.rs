//! Angle units. Angles are dimensionless on this basis.

use super::base::one;
use crate::Quantity;
use core::f64::consts::PI;

/// Radian.
pub fn radian() -> Quantity {
    one()
}

/// Steradian.
pub fn steradian() -> Quantity {
    radian() * radian()
}

/// Degree (`π / 180 rad`).
pub fn degree() -> Quantity {
    (PI / 180.0) * radian()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn half_turn() {
        assert_relative_eq!((180.0 * degree()).value(), PI, max_relative = 1e-14);
        assert!(steradian().is_dimensionless());
    }
}
