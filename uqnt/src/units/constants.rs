//! Defined reference values.
//!
//! These are exact by definition and are built with [`Quantity::exact`], so any result computed from them blocks
//! uncertainty propagation.

use super::base::{kelvin, meter, second};
use super::mechanics::pascal;
use crate::Quantity;

const ICE_POINT_KELVIN: f64 = 273.15;
const STANDARD_ATMOSPHERE_PASCALS: f64 = 101_325.0;
const STANDARD_GRAVITY: f64 = 9.806_65;

/// Magnitude of absolute zero on the Celsius scale: `273.15 K`, the kelvin value of `0 °C`.
pub fn absolute_zero() -> Quantity {
    Quantity::exact(ICE_POINT_KELVIN, kelvin())
}

/// Standard atmospheric pressure (`101325 Pa`).
pub fn standard_atmospheric_pressure() -> Quantity {
    Quantity::exact(STANDARD_ATMOSPHERE_PASCALS, pascal())
}

/// Standard acceleration of gravity (`9.80665 m s^-2`).
pub fn standard_gravitational_acceleration() -> Quantity {
    Quantity::exact(STANDARD_GRAVITY, standard_gravity_units())
}

fn standard_gravity_units() -> Quantity {
    meter() / second().powi(2)
}

/// `g0` as a propagating value, for building units such as the pound-force.
pub(super) fn standard_gravity_value() -> Quantity {
    STANDARD_GRAVITY * standard_gravity_units()
}

/// The `0 °C` offset as a propagating value, for the temperature scale constructors.
pub(super) fn ice_point() -> Quantity {
    ICE_POINT_KELVIN * kelvin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rational;

    #[test]
    fn constants_block_propagation() {
        for c in [
            absolute_zero(),
            standard_atmospheric_pressure(),
            standard_gravitational_acceleration(),
        ] {
            assert!(!c.propagates());
            assert_eq!(c.uncertainty(), 0.0);
        }
    }

    #[test]
    fn constant_values() {
        assert_eq!(absolute_zero().value(), 273.15);
        assert_eq!(standard_atmospheric_pressure().value(), 101_325.0);
        assert_eq!(standard_gravitational_acceleration().time_dim(), Rational::integer(-2));
        assert_eq!(standard_gravity_value(), standard_gravitational_acceleration());
        assert!(standard_gravity_value().propagates());
    }

    #[test]
    fn measurement_times_constant_is_exact() {
        let mass = Quantity::normal(2.0, 0.01, super::super::base::kilogram()).unwrap();
        let weight = mass * standard_gravitational_acceleration();
        assert!(!weight.propagates());
        assert_eq!(weight.uncertainty(), 0.0);
    }
}
