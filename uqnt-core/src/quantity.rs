//! Uncertainty quantity type and its implementations.

use crate::dimension::Dimensions;
use crate::error::{Result, UqntError};
use crate::rational::Rational;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use core::ops::{Div, Mul, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Absolute tolerance used by quantity equality: two quantities are equal when their values differ
/// by less than this.
pub const EQUALITY_TOLERANCE: f64 = f64::EPSILON;

/// A measured value with a standard uncertainty and exact dimension exponents.
///
/// Every arithmetic operation combines three independent things at once: the central value, the
/// standard uncertainty (first-order propagation, independent errors), and the dimension
/// exponents. A quantity whose `propagates` flag is cleared carries an exact, defined value; any
/// result computed from it is exact as well.
///
/// # Examples
///
/// ```rust
/// use uqnt_core::{Dimensions, Quantity};
///
/// let meter = Quantity::base_unit(Dimensions::LENGTH);
/// let a = Quantity::normal(2.0, 0.1, meter).unwrap();
/// let b = Quantity::normal(3.0, 0.2, meter).unwrap();
///
/// let sum = a.checked_add(b).unwrap();
/// assert_eq!(sum.value(), 5.0);
/// assert!((sum.uncertainty() - 0.05f64.sqrt()).abs() < 1e-12);
/// assert_eq!(sum.dimensions(), Dimensions::LENGTH);
/// ```
///
/// Dimensions are checked where the operation requires it:
///
/// ```rust
/// use uqnt_core::{Dimensions, ErrorKind, Quantity};
///
/// let meter = Quantity::base_unit(Dimensions::LENGTH);
/// let second = Quantity::base_unit(Dimensions::TIME);
/// let err = meter.checked_add(second).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
/// ```
///
/// # Panics
///
/// The `*` and `/` operators and [`Quantity::powr`] panic if a resulting dimension exponent
/// overflows `i32`, the same way integer operators do. [`Quantity::checked_mul`],
/// [`Quantity::checked_div`] and [`Quantity::checked_powr`] report the overflow as an error.
///
/// # Numeric edge cases
///
/// Uncertainties are computed as `∂f/∂x · u_x` per operand, combined in quadrature, rather than
/// with relative-error formulas such as `|ab| * sqrt((ua/a)^2 + (ub/b)^2)`. The two agree wherever
/// the relative form is defined. They differ for zero-valued operands: `(0 ± 0.1) * 2` has
/// uncertainty `0.2` here, where the relative form divides by zero and yields `NaN`. An operand
/// with zero uncertainty contributes nothing.
///
/// Values follow IEEE-754. A zero divisor, or the logarithm of a non-positive base paired with an
/// uncertain exponent, yields a non-finite uncertainty; it is returned as is and reported through
/// `log::warn!`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "QuantityRepr"))]
pub struct Quantity {
    value: f64,
    uncertainty: f64,
    propagates: bool,
    dimensions: Dimensions,
}

impl Quantity {
    /// The dimensionless number one.
    pub const ONE: Self = Self::base_unit(Dimensions::NONE);

    /// A unit of value one with the given dimensions and no uncertainty.
    ///
    /// ```rust
    /// use uqnt_core::{Dimensions, Quantity};
    /// let kelvin = Quantity::base_unit(Dimensions::TEMPERATURE);
    /// assert_eq!(kelvin.value(), 1.0);
    /// assert!(kelvin.propagates());
    /// ```
    #[inline]
    pub const fn base_unit(dimensions: Dimensions) -> Self {
        Self {
            value: 1.0,
            uncertainty: 0.0,
            propagates: true,
            dimensions,
        }
    }

    /// A normally distributed measurement `mean ± uncertainty`, expressed in `units`.
    ///
    /// Both numbers are scaled by the value of `units` (the uncertainty by its magnitude) and the
    /// dimensions of `units` are copied.
    ///
    /// Fails with [`UqntError::PreconditionViolation`] when `uncertainty` is negative or NaN.
    pub fn normal(mean: f64, uncertainty: f64, units: Quantity) -> Result<Self> {
        if !(uncertainty >= 0.0) {
            return Err(UqntError::precondition(format!(
                "standard uncertainty must be non-negative, got {}",
                uncertainty
            )));
        }
        Ok(Self {
            value: mean * units.value,
            uncertainty: uncertainty * units.value.abs(),
            propagates: true,
            dimensions: units.dimensions,
        })
    }

    /// A measurement known only to lie uniformly within `[min, max]`.
    ///
    /// The mean is the midpoint and the standard uncertainty is `(max - min) / √12`, the standard
    /// deviation of a continuous uniform distribution.
    ///
    /// ```rust
    /// use uqnt_core::Quantity;
    /// let q = Quantity::uniform_bounds(1.0, 3.0, Quantity::ONE).unwrap();
    /// assert_eq!(q.value(), 2.0);
    /// assert!((q.uncertainty() - 2.0 / 12f64.sqrt()).abs() < 1e-15);
    /// ```
    pub fn uniform_bounds(min: f64, max: f64, units: Quantity) -> Result<Self> {
        let mean = 0.5 * (min + max);
        let uncertainty = (max - min) / 12f64.sqrt();
        Self::normal(mean, uncertainty, units)
    }

    /// A uniform measurement `center ± half_width`.
    pub fn uniform(center: f64, half_width: f64, units: Quantity) -> Result<Self> {
        Self::uniform_bounds(center - half_width, center + half_width, units)
    }

    /// An exact, defined value that blocks uncertainty propagation.
    ///
    /// Every result computed from this quantity has zero uncertainty and does not propagate.
    #[inline]
    pub fn exact(value: f64, units: Quantity) -> Self {
        Self {
            value: value * units.value,
            uncertainty: 0.0,
            propagates: false,
            dimensions: units.dimensions,
        }
    }

    /// A plain dimensionless number with no uncertainty.
    #[inline]
    pub const fn number(value: f64) -> Self {
        Self {
            value,
            uncertainty: 0.0,
            propagates: true,
            dimensions: Dimensions::NONE,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Central value in coherent SI base units.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Standard uncertainty; zero when propagation is blocked.
    #[inline]
    pub const fn uncertainty(&self) -> f64 {
        self.uncertainty
    }

    /// Whether this quantity's uncertainty takes part in propagation.
    #[inline]
    pub const fn propagates(&self) -> bool {
        self.propagates
    }

    /// All four dimension exponents.
    #[inline]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Length exponent.
    #[inline]
    pub const fn length_dim(&self) -> Rational {
        self.dimensions.length
    }

    /// Mass exponent.
    #[inline]
    pub const fn mass_dim(&self) -> Rational {
        self.dimensions.mass
    }

    /// Time exponent.
    #[inline]
    pub const fn time_dim(&self) -> Rational {
        self.dimensions.time
    }

    /// Temperature exponent.
    #[inline]
    pub const fn temperature_dim(&self) -> Rational {
        self.dimensions.temperature
    }

    /// `uncertainty / |value|`.
    #[inline]
    pub fn relative_uncertainty(&self) -> f64 {
        self.uncertainty / self.value.abs()
    }

    /// True when all dimension exponents are zero.
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.dimensions.is_dimensionless()
    }

    /// True iff all four exponents of `self` and `other` are pairwise equal.
    #[inline]
    pub fn same_dimensions(&self, other: &Quantity) -> bool {
        self.dimensions == other.dimensions
    }

    /// The value of `self` expressed as a multiple of `units`.
    ///
    /// ```rust
    /// use uqnt_core::{Dimensions, Quantity};
    /// let meter = Quantity::base_unit(Dimensions::LENGTH);
    /// let foot = 0.3048 * meter;
    /// let d = 3.0 * foot;
    /// assert!((d.value_in(foot).unwrap() - 3.0).abs() < 1e-12);
    /// ```
    pub fn value_in(&self, units: Quantity) -> Result<f64> {
        self.require_same_dimensions(&units, "unit conversion")?;
        Ok(self.value / units.value)
    }

    fn require_same_dimensions(&self, other: &Quantity, operation: &'static str) -> Result<()> {
        if self.same_dimensions(other) {
            Ok(())
        } else {
            Err(UqntError::DimensionMismatch {
                operation,
                left: self.dimensions,
                right: other.dimensions,
            })
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    fn combine(
        operation: &'static str,
        a: &Quantity,
        b: &Quantity,
        value: f64,
        dimensions: Dimensions,
        uncertainty: impl FnOnce() -> f64,
    ) -> Self {
        let propagates = a.propagates && b.propagates;
        let uncertainty = if propagates {
            checked_uncertainty(operation, uncertainty())
        } else {
            0.0
        };
        Self {
            value,
            uncertainty,
            propagates,
            dimensions,
        }
    }

    /// Sum of two quantities with equal dimensions; uncertainties add in quadrature.
    ///
    /// Fails with [`UqntError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_add(self, rhs: Quantity) -> Result<Self> {
        self.require_same_dimensions(&rhs, "addition")?;
        Ok(Self::combine(
            "addition",
            &self,
            &rhs,
            self.value + rhs.value,
            self.dimensions,
            || self.uncertainty.hypot(rhs.uncertainty),
        ))
    }

    /// Difference of two quantities with equal dimensions; uncertainties add in quadrature.
    ///
    /// Fails with [`UqntError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_sub(self, rhs: Quantity) -> Result<Self> {
        self.require_same_dimensions(&rhs, "subtraction")?;
        Ok(Self::combine(
            "subtraction",
            &self,
            &rhs,
            self.value - rhs.value,
            self.dimensions,
            || self.uncertainty.hypot(rhs.uncertainty),
        ))
    }

    fn product(self, rhs: Quantity) -> Self {
        self.product_in(rhs, self.dimensions.product(rhs.dimensions))
    }

    fn product_in(self, rhs: Quantity, dimensions: Dimensions) -> Self {
        let (a, b) = (self.value, rhs.value);
        // |ab| * sqrt((ua/a)^2 + (ub/b)^2), written without dividing by the operands
        Self::combine(
            "multiplication",
            &self,
            &rhs,
            a * b,
            dimensions,
            || sensitivity(b, self.uncertainty).hypot(sensitivity(a, rhs.uncertainty)),
        )
    }

    fn quotient(self, rhs: Quantity) -> Self {
        self.quotient_in(rhs, self.dimensions.quotient(rhs.dimensions))
    }

    fn quotient_in(self, rhs: Quantity, dimensions: Dimensions) -> Self {
        let (a, b) = (self.value, rhs.value);
        let c = a / b;
        Self::combine(
            "division",
            &self,
            &rhs,
            c,
            dimensions,
            || sensitivity(1.0 / b, self.uncertainty).hypot(sensitivity(c / b, rhs.uncertainty)),
        )
    }

    /// Product that fails with [`UqntError::Overflow`] instead of panicking when a dimension
    /// exponent leaves the `i32` range.
    pub fn checked_mul(self, rhs: Quantity) -> Result<Self> {
        let dimensions = self.dimensions.checked_product(rhs.dimensions)?;
        Ok(self.product_in(rhs, dimensions))
    }

    /// Quotient that fails with [`UqntError::Overflow`] instead of panicking when a dimension
    /// exponent leaves the `i32` range.
    pub fn checked_div(self, rhs: Quantity) -> Result<Self> {
        let dimensions = self.dimensions.checked_quotient(rhs.dimensions)?;
        Ok(self.quotient_in(rhs, dimensions))
    }

    /// `self` raised to an uncertain power.
    ///
    /// Both operands must be dimensionless, since an uncertain exponent would make the dimensions
    /// of the result uncertain. The result is dimensionless.
    ///
    /// ```rust
    /// use uqnt_core::Quantity;
    /// let q = Quantity::number(2.0).pow(Quantity::number(3.0)).unwrap();
    /// assert_eq!(q.value(), 8.0);
    /// ```
    pub fn pow(self, exponent: Quantity) -> Result<Self> {
        self.require_same_dimensions(&Self::ONE, "power base")?;
        exponent.require_same_dimensions(&Self::ONE, "power exponent")?;
        let (a, b) = (self.value, exponent.value);
        let c = a.powf(b);
        Ok(Self::combine(
            "power",
            &self,
            &exponent,
            c,
            Dimensions::NONE,
            || {
                sensitivity(b * a.powf(b - 1.0), self.uncertainty)
                    .hypot(sensitivity(a.ln() * c, exponent.uncertainty))
            },
        ))
    }

    /// `self` raised to an exact rational power; every dimension exponent is multiplied by it.
    ///
    /// ```rust
    /// use uqnt_core::{Dimensions, Quantity, Rational};
    /// let meter = Quantity::base_unit(Dimensions::LENGTH);
    /// let volume = Quantity::normal(8.0, 0.3, meter).unwrap().powr(Rational::integer(3));
    /// let side = volume.powr(Rational::new(1, 3).unwrap());
    /// assert_eq!(side.dimensions(), Dimensions::LENGTH);
    /// ```
    pub fn powr(self, exponent: Rational) -> Self {
        self.powr_in(exponent, self.dimensions.powr(exponent))
    }

    /// Rational power that fails with [`UqntError::Overflow`] instead of panicking when a
    /// dimension exponent leaves the `i32` range.
    pub fn checked_powr(self, exponent: Rational) -> Result<Self> {
        let dimensions = self.dimensions.checked_powr(exponent)?;
        Ok(self.powr_in(exponent, dimensions))
    }

    fn powr_in(self, exponent: Rational, dimensions: Dimensions) -> Self {
        let (a, b) = (self.value, exponent.to_f64());
        let uncertainty = if self.propagates {
            // |c * b * ua / a|, the magnitude of the first-order term
            checked_uncertainty(
                "rational power",
                sensitivity(b * a.powf(b - 1.0), self.uncertainty).abs(),
            )
        } else {
            0.0
        };
        Self {
            value: a.powf(b),
            uncertainty,
            propagates: self.propagates,
            dimensions,
        }
    }

    /// `self` raised to an integer power.
    #[inline]
    pub fn powi(self, exponent: i32) -> Self {
        self.powr(Rational::integer(exponent))
    }

    /// `self` raised to a rational power written as `"N"` or `"N/D"`.
    pub fn powr_str(self, exponent: &str) -> Result<Self> {
        self.checked_powr(exponent.parse()?)
    }

    /// Square root; exponents are halved exactly.
    #[inline]
    pub fn sqrt(self) -> Self {
        self.powr(Rational::HALF)
    }
}

/// First-order contribution of one operand: `∂f/∂x · u_x`.
///
/// An operand without uncertainty contributes nothing, even where the partial derivative is
/// singular.
#[inline]
fn sensitivity(partial: f64, uncertainty: f64) -> f64 {
    if uncertainty == 0.0 {
        0.0
    } else {
        partial * uncertainty
    }
}

fn checked_uncertainty(operation: &'static str, uncertainty: f64) -> f64 {
    if !uncertainty.is_finite() {
        log::warn!(
            "{} produced a non-finite uncertainty ({}); first-order propagation is singular here",
            operation,
            uncertainty
        );
    }
    uncertainty
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Mul for Quantity {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.product(rhs)
    }
}

impl Mul<f64> for Quantity {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.product(Quantity::number(rhs))
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;
    #[inline]
    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity::number(self).product(rhs)
    }
}

impl Div for Quantity {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.quotient(rhs)
    }
}

impl Div<f64> for Quantity {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        self.quotient(Quantity::number(rhs))
    }
}

impl Div<Quantity> for f64 {
    type Output = Quantity;
    #[inline]
    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::number(self).quotient(rhs)
    }
}

impl Neg for Quantity {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            value: -self.value,
            ..self
        }
    }
}

impl From<f64> for Quantity {
    #[inline]
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison (value only; dimensions and uncertainty are ignored)
// ─────────────────────────────────────────────────────────────────────────────

impl PartialEq for Quantity {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        (self.value - other.value).abs() < EQUALITY_TOLERANCE
    }
}

impl PartialEq<f64> for Quantity {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        (self.value - *other).abs() < EQUALITY_TOLERANCE
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.value.partial_cmp(&other.value)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// `printf("%+e")`-style scientific notation: signed mantissa and at least two exponent digits.
struct Scientific(f64, usize);

impl Display for Scientific {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let Scientific(x, precision) = *self;
        if !x.is_finite() {
            return write!(f, "{:+}", x);
        }
        let text = format!("{:+.*e}", precision, x);
        let (mantissa, exponent) = text.split_once('e').ok_or(core::fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| core::fmt::Error)?;
        write!(f, "{}e{:+03}", mantissa, exponent)
    }
}

/// Formats as `( +v.vvvvve±XX +/- +u.uuuuue±XX )` followed by the non-zero dimension terms.
///
/// Blocked quantities print only the value. The formatter precision sets the number of mantissa
/// digits (default 5).
///
/// ```rust
/// use uqnt_core::{Dimensions, Quantity};
/// let meter = Quantity::base_unit(Dimensions::LENGTH);
/// let q = Quantity::normal(2.0, 0.1, meter).unwrap();
/// assert_eq!(q.to_string(), "( +2.00000e+00 +/- +1.00000e-01 ) m^+1");
/// assert_eq!(format!("{:.2}", Quantity::exact(1500.0, meter)), "+1.50e+03 m^+1");
/// ```
impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let precision = f.precision().unwrap_or(5);
        if self.propagates {
            write!(
                f,
                "( {} +/- {} )",
                Scientific(self.value, precision),
                Scientific(self.uncertainty, precision)
            )?;
        } else {
            write!(f, "{}", Scientific(self.value, precision))?;
        }
        write!(f, "{}", self.dimensions)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct QuantityRepr {
    value: f64,
    #[serde(default)]
    uncertainty: f64,
    #[serde(default = "propagates_by_default")]
    propagates: bool,
    #[serde(default)]
    dimensions: Dimensions,
}

#[cfg(feature = "serde")]
fn propagates_by_default() -> bool {
    true
}

#[cfg(feature = "serde")]
impl TryFrom<QuantityRepr> for Quantity {
    type Error = UqntError;

    fn try_from(repr: QuantityRepr) -> Result<Self> {
        if !(repr.uncertainty >= 0.0) {
            return Err(UqntError::precondition(format!(
                "standard uncertainty must be non-negative, got {}",
                repr.uncertainty
            )));
        }
        if !repr.propagates && repr.uncertainty != 0.0 {
            return Err(UqntError::precondition(
                "a quantity that blocks propagation must have zero uncertainty",
            ));
        }
        Ok(Self {
            value: repr.value,
            uncertainty: repr.uncertainty,
            propagates: repr.propagates,
            dimensions: repr.dimensions,
        })
    }
}
