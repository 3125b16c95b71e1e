//! Exact rational numbers used as dimension and power exponents.

use crate::error::{Result, UqntError};
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use core::ops::{Add, Div, Mul, Neg, Sub};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Greatest common divisor of two integers, always non-negative.
///
/// `gcd(0, n) == |n|` and `gcd(a, 0) == |a|`.
///
/// ```rust
/// use uqnt_core::gcd;
/// assert_eq!(gcd(6, -8), 2);
/// assert_eq!(gcd(0, -5), 5);
/// ```
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    // |i64::MIN| only appears for gcd(i64::MIN, 0) or gcd(i64::MIN, i64::MIN)
    i64::try_from(a).unwrap_or(i64::MAX)
}

/// An exact fraction, always stored in lowest terms with a positive denominator.
///
/// `Rational` is the representation of every dimension exponent and of exact power
/// arguments. It is an immutable value type: each operation returns a new, reduced value.
///
/// ```rust
/// use uqnt_core::Rational;
///
/// let r = Rational::new(6, -8).unwrap();
/// assert_eq!((r.numer(), r.denom()), (-3, 4));
/// assert_eq!(r.to_string(), "-3/4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Rational {
    num: i32,
    den: i32,
}

impl Rational {
    /// Zero.
    pub const ZERO: Self = Self::integer(0);
    /// One.
    pub const ONE: Self = Self::integer(1);
    /// One half, the exponent of a square root.
    pub const HALF: Self = Self { num: 1, den: 2 };

    /// Builds the reduced fraction `num / den`.
    ///
    /// Fails with [`UqntError::PreconditionViolation`] when `den == 0`.
    pub fn new(num: i32, den: i32) -> Result<Self> {
        Self::reduce(i64::from(num), i64::from(den))
    }

    /// A whole number `n / 1`.
    #[inline]
    pub const fn integer(n: i32) -> Self {
        Self { num: n, den: 1 }
    }

    fn reduce(num: i64, den: i64) -> Result<Self> {
        if den == 0 {
            return Err(UqntError::precondition("rational denominator is zero"));
        }
        let g = gcd(num, den);
        let (num, den) = if den < 0 {
            (-(num / g), -(den / g))
        } else {
            (num / g, den / g)
        };
        Ok(Self {
            num: i32::try_from(num).map_err(|_| UqntError::Overflow)?,
            den: i32::try_from(den).map_err(|_| UqntError::Overflow)?,
        })
    }

    /// Numerator; carries the sign.
    #[inline]
    pub const fn numer(self) -> i32 {
        self.num
    }

    /// Denominator; always strictly positive.
    #[inline]
    pub const fn denom(self) -> i32 {
        self.den
    }

    /// Floating-point value `numer / denom`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// True for `0/1`.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// True when the denominator is one.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    fn parts(self) -> (i64, i64) {
        (i64::from(self.num), i64::from(self.den))
    }

    /// Exact sum, reduced.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        let ((a, b), (c, d)) = (self.parts(), rhs.parts());
        Self::reduce(a * d + c * b, b * d)
    }

    /// Exact difference, reduced.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        let ((a, b), (c, d)) = (self.parts(), rhs.parts());
        Self::reduce(a * d - c * b, b * d)
    }

    /// Exact product, reduced.
    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        let ((a, b), (c, d)) = (self.parts(), rhs.parts());
        Self::reduce(a * c, b * d)
    }

    /// Exact quotient, reduced.
    ///
    /// Fails with [`UqntError::PreconditionViolation`] when `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(UqntError::precondition("division by a zero rational"));
        }
        let ((a, b), (c, d)) = (self.parts(), rhs.parts());
        Self::reduce(a * d, b * c)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::integer(n)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

// The operators behave like the primitive integer ones: they panic where the
// checked forms would return an error.
macro_rules! impl_rational_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait for Rational {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                match self.$checked(rhs) {
                    Ok(r) => r,
                    Err(e) => panic!("{} {} {}: {}", self, stringify!($method), rhs, e),
                }
            }
        }
    };
}

impl_rational_op!(Add, add, checked_add);
impl_rational_op!(Sub, sub, checked_sub);
impl_rational_op!(Mul, mul, checked_mul);
impl_rational_op!(Div, div, checked_div);

impl Neg for Rational {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let ((a, b), (c, d)) = (self.parts(), other.parts());
        (a * d).cmp(&(c * b))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text form
// ─────────────────────────────────────────────────────────────────────────────

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.den == 1 {
            write!(f, "{:+}", self.num)
        } else {
            write!(f, "{:+}/{}", self.num, self.den)
        }
    }
}

impl FromStr for Rational {
    type Err = UqntError;

    /// Parses `"N"` or `"N/D"`.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let parse_int = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|e| UqntError::parse(s, e.to_string()))
        };
        match text.split_once('/') {
            None => parse_int(text).map(Self::integer),
            Some((num, den)) => Self::new(parse_int(num)?, parse_int(den)?),
        }
    }
}

impl TryFrom<&str> for Rational {
    type Error = UqntError;
    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl TryFrom<String> for Rational {
    type Error = UqntError;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl From<Rational> for String {
    fn from(r: Rational) -> Self {
        r.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;

    fn r(n: i32, d: i32) -> Rational {
        Rational::new(n, d).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // gcd and reduction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn gcd_edge_cases() {
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(-7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, -18), 6);
    }

    #[test]
    fn reduce_moves_sign_to_numerator() {
        assert_eq!(r(6, -8), r(-3, 4));
        assert_eq!(r(-6, -8), r(3, 4));
        assert_eq!(r(6, -8).denom(), 4);
    }

    #[test]
    fn reduce_zero_numerator() {
        let z = r(0, -5);
        assert_eq!((z.numer(), z.denom()), (0, 1));
        assert_eq!(z, Rational::ZERO);
    }

    #[test]
    fn zero_denominator_is_rejected() {
        let err = Rational::new(1, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
    }

    #[test]
    fn overflow_is_reported() {
        let big = Rational::integer(i32::MAX);
        assert_eq!(big.checked_add(Rational::ONE), Err(UqntError::Overflow));
        assert_eq!(Rational::new(i32::MIN, -1), Err(UqntError::Overflow));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn arithmetic_reduces() {
        assert_eq!(r(1, 2) + r(1, 3), r(5, 6));
        assert_eq!(r(1, 2) - r(1, 2), Rational::ZERO);
        assert_eq!(r(2, 3) * r(3, 4), r(1, 2));
        assert_eq!(r(1, 2) / r(1, 4), Rational::integer(2));
        assert_eq!(-r(1, 2), r(-1, 2));
    }

    #[test]
    fn divide_by_zero_rational_fails() {
        let err = r(1, 2).checked_div(Rational::ZERO).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
    }

    #[test]
    #[should_panic]
    fn divide_operator_panics_on_zero() {
        let _ = Rational::ONE / Rational::ZERO;
    }

    #[test]
    fn to_f64_and_ordering() {
        assert_eq!(r(-3, 4).to_f64(), -0.75);
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 2) < Rational::ZERO);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Parsing and display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_is_sign_prefixed() {
        assert_eq!(Rational::ONE.to_string(), "+1");
        assert_eq!(Rational::ZERO.to_string(), "+0");
        assert_eq!(r(-3, 2).to_string(), "-3/2");
        assert_eq!(Rational::HALF.to_string(), "+1/2");
    }

    #[test]
    fn parse_accepts_integer_and_fraction() {
        assert_eq!("-3".parse::<Rational>().unwrap(), Rational::integer(-3));
        assert_eq!("1/2".parse::<Rational>().unwrap(), Rational::HALF);
        assert_eq!(" 4/-6 ".parse::<Rational>().unwrap(), r(-2, 3));
        assert_eq!("+2/4".parse::<Rational>().unwrap(), Rational::HALF);
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for bad in ["", "abc", "1/", "/2", "1/2/3", "1.5"] {
            let err = bad.parse::<Rational>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ParseError, "input {bad:?}");
        }
    }

    #[test]
    fn parse_zero_denominator_is_a_precondition_violation() {
        let err = "3/0".parse::<Rational>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_reduced_form(n in -100_000i32..100_000, d in -100_000i32..100_000) {
            prop_assume!(d != 0);
            let q = Rational::new(n, d).unwrap();
            prop_assert!(q.denom() > 0);
            prop_assert_eq!(gcd(i64::from(q.numer()), i64::from(q.denom())), 1);
            // same value as the input fraction
            prop_assert_eq!(i64::from(q.numer()) * i64::from(d), i64::from(n) * i64::from(q.denom()));
        }

        #[test]
        fn prop_text_roundtrip(n in -100_000i32..100_000, d in 1i32..100_000) {
            let q = Rational::new(n, d).unwrap();
            prop_assert_eq!(q.to_string().parse::<Rational>().unwrap(), q);
        }

        #[test]
        fn prop_add_then_sub_is_identity(a in -1000i32..1000, b in 1i32..1000, c in -1000i32..1000, d in 1i32..1000) {
            let x = Rational::new(a, b).unwrap();
            let y = Rational::new(c, d).unwrap();
            prop_assert_eq!((x + y) - y, x);
        }
    }
}
