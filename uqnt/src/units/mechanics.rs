//! Force, pressure, energy and power units.
//!
//! All derived SI units are coherent (value `1.0`); the non-SI units use their conventional definitions.
//!
//! ```rust
//! use uqnt::units::mechanics::{pascal, pound_per_square_inch};
//!
//! let psi = pound_per_square_inch().value_in(pascal()).unwrap();
//! assert!((psi - 6894.757293168).abs() < 1e-6);
//! ```

use super::base::{kilogram, meter, second};
use super::constants::standard_gravity_value;
use super::length::inch;
use super::mass::pound_mass;
use super::prefix::{giga, hecto, kilo, mega, milli};
use crate::Quantity;

// ─────────────────────────────────────────────────────────────────────────────
// Force
// ─────────────────────────────────────────────────────────────────────────────

/// Newton (`kg m s^-2`).
pub fn newton() -> Quantity {
    kilogram() * meter() / second().powi(2)
}

/// Pound-force (`lbm * g0`).
pub fn pound_force() -> Quantity {
    pound_mass() * standard_gravity_value()
}

// ─────────────────────────────────────────────────────────────────────────────
// Pressure
// ─────────────────────────────────────────────────────────────────────────────

/// Pascal (`N m^-2`).
pub fn pascal() -> Quantity {
    newton() / meter().powi(2)
}

/// Hectopascal.
pub fn hectopascal() -> Quantity {
    hecto() * pascal()
}

/// Kilopascal.
pub fn kilopascal() -> Quantity {
    kilo() * pascal()
}

/// Megapascal.
pub fn megapascal() -> Quantity {
    mega() * pascal()
}

/// Gigapascal.
pub fn gigapascal() -> Quantity {
    giga() * pascal()
}

/// Bar (`1e5 Pa`).
pub fn bar() -> Quantity {
    1e5 * pascal()
}

/// Millibar.
pub fn millibar() -> Quantity {
    milli() * bar()
}

/// Kilobar.
pub fn kilobar() -> Quantity {
    kilo() * bar()
}

/// Standard atmosphere (`101325 Pa`).
pub fn atmosphere() -> Quantity {
    101_325.0 * pascal()
}

/// Torr (`atm / 760`).
pub fn torr() -> Quantity {
    atmosphere() / 760.0
}

/// Conventional millimetre of mercury (`133.322387415 Pa`).
pub fn millimeter_of_mercury() -> Quantity {
    133.322_387_415 * pascal()
}

/// Conventional inch of mercury (`3386.389 Pa`).
pub fn inch_of_mercury() -> Quantity {
    3_386.389 * pascal()
}

/// Conventional inch of water (`249.08891 Pa`).
pub fn inch_of_water() -> Quantity {
    249.088_91 * pascal()
}

/// Pound-force per square inch.
pub fn pound_per_square_inch() -> Quantity {
    pound_force() / inch().powi(2)
}

// ─────────────────────────────────────────────────────────────────────────────
// Energy and power
// ─────────────────────────────────────────────────────────────────────────────

/// Joule (`N m`).
pub fn joule() -> Quantity {
    newton() * meter()
}

/// Thermochemical gram calorie (`4.184 J`).
pub fn gram_calorie() -> Quantity {
    4.184 * joule()
}

/// Kilogram (food) calorie.
pub fn kilogram_calorie() -> Quantity {
    kilo() * gram_calorie()
}

/// International table British thermal unit (`1055.05585262 J`).
pub fn british_thermal_unit() -> Quantity {
    1_055.055_852_62 * joule()
}

/// Watt (`J s^-1`).
pub fn watt() -> Quantity {
    joule() / second()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dimensions, Rational};
    use approx::assert_relative_eq;

    #[test]
    fn coherent_si_units() {
        for u in [newton(), pascal(), joule(), watt()] {
            assert_eq!(u.value(), 1.0);
        }
        assert_eq!(
            pascal().dimensions(),
            Dimensions::new(
                Rational::integer(-1),
                Rational::ONE,
                Rational::integer(-2),
                Rational::ZERO
            )
        );
        assert_eq!(watt().time_dim(), Rational::integer(-3));
    }

    #[test]
    fn pound_force_in_newtons() {
        assert_relative_eq!(pound_force().value(), 4.4482216152605, max_relative = 1e-12);
        assert!(pound_force().propagates());
    }

    #[test]
    fn pressure_units() {
        assert_relative_eq!(torr().value(), 133.322368421, max_relative = 1e-9);
        assert_eq!(kilobar().value_in(bar()).unwrap(), 1000.0);
        assert_relative_eq!(atmosphere().value_in(bar()).unwrap(), 1.01325, max_relative = 1e-12);
    }

    #[test]
    fn energy_units() {
        assert_relative_eq!(kilogram_calorie().value(), 4184.0, max_relative = 1e-12);
        assert!(british_thermal_unit().same_dimensions(&joule()));
    }
}
