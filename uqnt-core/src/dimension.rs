//! Dimension exponents over the fixed length/mass/time/temperature basis.

use crate::error::Result;
use crate::rational::Rational;
use core::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The exponents of the four base dimensions carried by a quantity.
///
/// Two quantities are dimensionally compatible iff their `Dimensions` are equal. Exponents are
/// exact rationals, so `sqrt(m^2)` is exactly `m^1`.
///
/// ```rust
/// use uqnt_core::{Dimensions, Rational};
///
/// let velocity = Dimensions::LENGTH.quotient(Dimensions::TIME);
/// assert_eq!(velocity.time, Rational::integer(-1));
/// assert_eq!(velocity.to_string(), " m^+1 s^-1");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    /// Length exponent (metre).
    pub length: Rational,
    /// Mass exponent (kilogram).
    pub mass: Rational,
    /// Time exponent (second).
    pub time: Rational,
    /// Temperature exponent (kelvin).
    pub temperature: Rational,
}

impl Dimensions {
    /// All exponents zero.
    pub const NONE: Self = Self::new(Rational::ZERO, Rational::ZERO, Rational::ZERO, Rational::ZERO);
    /// `m^1`.
    pub const LENGTH: Self = Self::new(Rational::ONE, Rational::ZERO, Rational::ZERO, Rational::ZERO);
    /// `kg^1`.
    pub const MASS: Self = Self::new(Rational::ZERO, Rational::ONE, Rational::ZERO, Rational::ZERO);
    /// `s^1`.
    pub const TIME: Self = Self::new(Rational::ZERO, Rational::ZERO, Rational::ONE, Rational::ZERO);
    /// `K^1`.
    pub const TEMPERATURE: Self =
        Self::new(Rational::ZERO, Rational::ZERO, Rational::ZERO, Rational::ONE);

    /// Builds a set of exponents.
    pub const fn new(length: Rational, mass: Rational, time: Rational, temperature: Rational) -> Self {
        Self {
            length,
            mass,
            time,
            temperature,
        }
    }

    /// True when every exponent is zero.
    pub fn is_dimensionless(&self) -> bool {
        *self == Self::NONE
    }

    fn zip(self, other: Self, op: impl Fn(Rational, Rational) -> Rational) -> Self {
        Self {
            length: op(self.length, other.length),
            mass: op(self.mass, other.mass),
            time: op(self.time, other.time),
            temperature: op(self.temperature, other.temperature),
        }
    }

    /// Dimensions of a product: exponent-wise sum.
    ///
    /// Panics if an exponent overflows; see [`Dimensions::checked_product`].
    pub fn product(self, other: Self) -> Self {
        self.zip(other, |a, b| a + b)
    }

    /// Dimensions of a quotient: exponent-wise difference.
    ///
    /// Panics if an exponent overflows; see [`Dimensions::checked_quotient`].
    pub fn quotient(self, other: Self) -> Self {
        self.zip(other, |a, b| a - b)
    }

    /// Dimensions raised to an exact power: every exponent multiplied by `exponent`.
    ///
    /// Panics if an exponent overflows; see [`Dimensions::checked_powr`].
    pub fn powr(self, exponent: Rational) -> Self {
        self.zip(Self::NONE, |a, _| a * exponent)
    }

    fn try_zip(self, other: Self, op: impl Fn(Rational, Rational) -> Result<Rational>) -> Result<Self> {
        Ok(Self {
            length: op(self.length, other.length)?,
            mass: op(self.mass, other.mass)?,
            time: op(self.time, other.time)?,
            temperature: op(self.temperature, other.temperature)?,
        })
    }

    /// Like [`Dimensions::product`], but fails with [`UqntError::Overflow`](crate::UqntError::Overflow)
    /// instead of panicking.
    pub fn checked_product(self, other: Self) -> Result<Self> {
        self.try_zip(other, Rational::checked_add)
    }

    /// Like [`Dimensions::quotient`], but fails with [`UqntError::Overflow`](crate::UqntError::Overflow)
    /// instead of panicking.
    pub fn checked_quotient(self, other: Self) -> Result<Self> {
        self.try_zip(other, Rational::checked_sub)
    }

    /// Like [`Dimensions::powr`], but fails with [`UqntError::Overflow`](crate::UqntError::Overflow)
    /// instead of panicking.
    pub fn checked_powr(self, exponent: Rational) -> Result<Self> {
        self.try_zip(Self::NONE, |a, _| a.checked_mul(exponent))
    }

    fn terms(&self) -> [(&'static str, Rational); 4] {
        [
            ("m", self.length),
            ("kg", self.mass),
            ("s", self.time),
            ("K", self.temperature),
        ]
    }
}

/// Writes ` m^<exp>`, ` kg^<exp>`, ` s^<exp>`, ` K^<exp>` for each non-zero exponent.
impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for (symbol, exponent) in self.terms() {
            if !exponent.is_zero() {
                write!(f, " {}^{}", symbol, exponent)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UqntError;

    fn r(n: i32, d: i32) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn product_and_quotient_are_exact() {
        let area = Dimensions::LENGTH.product(Dimensions::LENGTH);
        assert_eq!(area.length, Rational::integer(2));
        let back = area.quotient(Dimensions::LENGTH);
        assert_eq!(back, Dimensions::LENGTH);
        assert!(area.quotient(area).is_dimensionless());
    }

    #[test]
    fn powr_scales_every_exponent() {
        let d = Dimensions::new(Rational::integer(2), Rational::ONE, r(-3, 2), Rational::ZERO);
        let half = d.powr(Rational::HALF);
        assert_eq!(half, Dimensions::new(Rational::ONE, r(1, 2), r(-3, 4), Rational::ZERO));
    }

    #[test]
    fn checked_forms_report_overflow() {
        let big = Dimensions::LENGTH.powr(Rational::integer(i32::MAX));
        assert_eq!(big.checked_product(Dimensions::LENGTH), Err(UqntError::Overflow));
        let small = Dimensions::LENGTH.powr(Rational::integer(-i32::MAX));
        let area = Dimensions::LENGTH.powr(Rational::integer(2));
        assert_eq!(small.checked_quotient(area), Err(UqntError::Overflow));
        assert_eq!(big.checked_powr(Rational::integer(2)), Err(UqntError::Overflow));
        assert_eq!(
            Dimensions::LENGTH.checked_product(Dimensions::TIME).unwrap(),
            Dimensions::LENGTH.product(Dimensions::TIME)
        );
    }

    #[test]
    fn display_lists_non_zero_terms_in_basis_order() {
        let force = Dimensions::new(Rational::ONE, Rational::ONE, Rational::integer(-2), Rational::ZERO);
        assert_eq!(force.to_string(), " m^+1 kg^+1 s^-2");
        assert_eq!(Dimensions::TEMPERATURE.to_string(), " K^+1");
        assert_eq!(Dimensions::NONE.to_string(), "");
        assert_eq!(Dimensions::LENGTH.powr(Rational::HALF).to_string(), " m^+1/2");
    }
}
