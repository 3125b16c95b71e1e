//! Temperature units and the Celsius/Fahrenheit scale constructors.
//!
//! Temperatures are stored in kelvin. The Celsius and Fahrenheit constructors scale the reading and then add the
//! scale offset as a propagating zero-uncertainty quantity, so the measurement's uncertainty survives the shift.
//!
//! ```rust
//! use uqnt::units::temperature::{celsius_normal, fahrenheit_exact};
//!
//! let t = celsius_normal(20.0, 0.5).unwrap();
//! assert!((t.value() - 293.15).abs() < 1e-9);
//! assert_eq!(t.uncertainty(), 0.5);
//!
//! let boiling = fahrenheit_exact(212.0).unwrap();
//! assert!((boiling.value() - 373.15).abs() < 1e-9);
//! assert!(!boiling.propagates());
//! ```

use super::base::kelvin;
use super::constants::ice_point;
use crate::{Quantity, Result};

/// Rankine (`5/9 K`).
pub fn rankine() -> Quantity {
    kelvin() * 5.0 / 9.0
}

fn fahrenheit_offset() -> Quantity {
    459.67 * rankine()
}

/// A normally distributed Celsius reading.
pub fn celsius_normal(value: f64, uncertainty: f64) -> Result<Quantity> {
    Quantity::normal(value, uncertainty, kelvin())?.checked_add(ice_point())
}

/// A uniformly distributed Celsius reading `value ± half_width`.
pub fn celsius_uniform(value: f64, half_width: f64) -> Result<Quantity> {
    Quantity::uniform(value, half_width, kelvin())?.checked_add(ice_point())
}

/// An exact Celsius value; blocks propagation.
pub fn celsius_exact(value: f64) -> Result<Quantity> {
    Quantity::exact(value, kelvin()).checked_add(ice_point())
}

/// A normally distributed Fahrenheit reading.
pub fn fahrenheit_normal(value: f64, uncertainty: f64) -> Result<Quantity> {
    Quantity::normal(value, uncertainty, rankine())?.checked_add(fahrenheit_offset())
}

/// A uniformly distributed Fahrenheit reading `value ± half_width`.
pub fn fahrenheit_uniform(value: f64, half_width: f64) -> Result<Quantity> {
    Quantity::uniform(value, half_width, rankine())?.checked_add(fahrenheit_offset())
}

/// An exact Fahrenheit value; blocks propagation.
pub fn fahrenheit_exact(value: f64) -> Result<Quantity> {
    Quantity::exact(value, rankine()).checked_add(fahrenheit_offset())
}
