//! Core types for quantities carrying a standard uncertainty and dimension exponents.
//!
//! `uqnt-core` provides two cooperating value types:
//!
//! - [`Rational`]: an exact fraction, always reduced, with a positive denominator. It represents dimension exponents
//!   and exact power arguments.
//! - [`Quantity`]: a value/uncertainty pair tagged with four rational dimension exponents (length, mass, time,
//!   temperature) and a flag that tells whether its uncertainty takes part in propagation.
//!
//! Most users should depend on `uqnt` (the facade crate), which adds the unit catalog, a unit registry and
//! measurement sheets on top of these primitives.
//!
//! # What this crate solves
//!
//! - Runtime dimensional analysis on a fixed basis (`m`, `kg`, `s`, `K`) with exact exponents, so `sqrt(m^2)` is
//!   `m^1` rather than `m^1.0000000001`.
//! - First-order propagation of independent standard uncertainties through `+`, `-`, `*`, `/` and powers.
//! - Defined constants that block propagation ([`Quantity::exact`]).
//!
//! # What this crate does not try to solve
//!
//! - Correlated uncertainties (no covariance terms).
//! - Vector, matrix or complex quantities.
//! - Arbitrary-precision exponents (`i32` numerators and denominators).
//! - Symbolic units: values are stored in coherent SI base units.
//!
//! # Quick start
//!
//! ```rust
//! use uqnt_core::{Dimensions, Quantity};
//!
//! let meter = Quantity::base_unit(Dimensions::LENGTH);
//! let second = Quantity::base_unit(Dimensions::TIME);
//!
//! let d = Quantity::normal(100.0, 0.5, meter).unwrap();
//! let t = Quantity::normal(20.0, 0.1, second).unwrap();
//! let v = d / t;
//! assert!((v.value() - 5.0).abs() < 1e-12);
//! assert_eq!(v.to_string(), "( +5.00000e+00 +/- +3.53553e-02 ) m^+1 s^-1");
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for [`Rational`] (as its `"N/D"` text), [`Dimensions`] and [`Quantity`].
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`] with an [`UqntError`]: precondition violations (zero denominators, negative
//! uncertainties), dimension mismatches and malformed exponent text. The `*`/`/` operators cannot fail on dimensions;
//! they panic only if an exponent overflows `i32`. Floating-point edge cases follow IEEE-754 and are reported through
//! the `log` facade rather than turned into errors.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod quantity;
mod rational;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::Dimensions;
pub use error::{ErrorKind, Result, UqntError};
pub use quantity::{Quantity, EQUALITY_TOLERANCE};
pub use rational::{gcd, Rational};
