//! Quantities with standard uncertainties, dimensional analysis and a unit catalog.
//!
//! `uqnt` is the user-facing crate in this workspace. It re-exports the full API from `uqnt-core` and adds:
//!
//! - [`units`]: a catalog of SI, imperial and US customary units, each a function returning a [`Quantity`].
//! - [`registry`]: lookup of units by name or symbol and evaluation of unit expressions such as `"kg*m/s^2"`.
//! - [`config`]: TOML measurement sheets that describe named inputs of an uncertainty analysis.
//!
//! A value is always a [`Quantity`]: an `f64` value in coherent SI base units, its standard uncertainty, the four
//! rational dimension exponents and a propagation flag. Dimensions are checked at runtime.
//!
//! # What this crate solves
//!
//! - Carrying measurement uncertainty through a calculation without writing the partial derivatives by hand.
//! - Refusing to add metres to seconds, with a descriptive [`UqntError::DimensionMismatch`].
//! - Converting between unit systems (`psi` to `kPa`, Fahrenheit to kelvin) with exact dimension bookkeeping.
//!
//! # What this crate does not try to solve
//!
//! - Correlated inputs: every operand is treated as independent.
//! - Compile-time unit checking.
//! - Monte Carlo or higher-order propagation.
//!
//! # Quick start
//!
//! ```rust
//! use uqnt::units::length::inch;
//! use uqnt::units::time::minute;
//! use uqnt::Quantity;
//!
//! let distance = Quantity::normal(120.0, 0.25, inch()).unwrap();
//! let elapsed = Quantity::uniform(2.0, 0.05, minute()).unwrap();
//! let speed = distance / elapsed;
//!
//! assert!((speed.value() - 0.0254).abs() < 1e-12);
//! assert!(speed.uncertainty() > 0.0);
//! assert_eq!(speed.dimensions().to_string(), " m^+1 s^-1");
//! ```
//!
//! Blocking propagation through a defined constant:
//!
//! ```rust
//! use uqnt::units::base::meter;
//! use uqnt::Quantity;
//!
//! let measured = Quantity::normal(2.0, 0.1, meter()).unwrap();
//! let scale = Quantity::exact(3.0, Quantity::ONE);
//! let blocked = measured * scale;
//! assert_eq!(blocked.uncertainty(), 0.0);
//! assert!(!blocked.propagates());
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support in `uqnt-core` for [`Rational`], [`Dimensions`] and [`Quantity`].
//!
//! # Logging
//!
//! The crate logs through the `log` facade: `debug` when the registry is built or a measurement sheet is loaded,
//! `trace` for unit expressions, and `warn` when propagation produces a non-finite uncertainty. Install any `log`
//! backend to see them.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![forbid(unsafe_code)]

pub use uqnt_core::*;

pub mod config;
pub mod registry;
pub mod units;

pub use config::{ConfigError, MeasurementSheet};
pub use registry::{RegistryError, RegistryResult};
