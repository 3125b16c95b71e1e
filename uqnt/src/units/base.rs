//! The dimensionless one and the four base units.

use crate::{Dimensions, Quantity};

/// The dimensionless unit.
#[inline]
pub fn one() -> Quantity {
    Quantity::ONE
}

/// Metre (SI base unit of length).
#[inline]
pub fn meter() -> Quantity {
    Quantity::base_unit(Dimensions::LENGTH)
}

/// Kilogram (SI base unit of mass).
#[inline]
pub fn kilogram() -> Quantity {
    Quantity::base_unit(Dimensions::MASS)
}

/// Second (SI base unit of time).
#[inline]
pub fn second() -> Quantity {
    Quantity::base_unit(Dimensions::TIME)
}

/// Kelvin (SI base unit of thermodynamic temperature).
#[inline]
pub fn kelvin() -> Quantity {
    Quantity::base_unit(Dimensions::TEMPERATURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rational;

    #[test]
    fn base_units_have_unit_value_and_one_exponent() {
        assert_eq!(meter().length_dim(), Rational::ONE);
        assert_eq!(kilogram().mass_dim(), Rational::ONE);
        assert_eq!(second().time_dim(), Rational::ONE);
        assert_eq!(kelvin().temperature_dim(), Rational::ONE);
        for u in [one(), meter(), kilogram(), second(), kelvin()] {
            assert_eq!(u.value(), 1.0);
            assert_eq!(u.uncertainty(), 0.0);
        }
        assert!(one().is_dimensionless());
    }
}
