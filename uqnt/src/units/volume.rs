//! Volume units.
//!
//! ```rust
//! use uqnt::units::volume::{liter, us_gallon};
//!
//! let gal = us_gallon().value_in(liter()).unwrap();
//! assert!((gal - 3.785411784).abs() < 1e-9);
//! ```

use super::base::meter;
use super::length::inch;
use super::prefix::{deci, milli};
use crate::Quantity;

/// Litre (`1 dm^3`).
pub fn liter() -> Quantity {
    (deci() * meter()).powi(3)
}

/// Millilitre.
pub fn milliliter() -> Quantity {
    milli() * liter()
}

/// Imperial gallon (`4.54609 L`).
pub fn imperial_gallon() -> Quantity {
    4.546_09 * liter()
}

/// US liquid gallon (`231 in^3`).
pub fn us_gallon() -> Quantity {
    231.0 * inch().powi(3)
}

/// Imperial fluid ounce (`imperial gallon / 160`).
pub fn imperial_fluid_ounce() -> Quantity {
    imperial_gallon() / 160.0
}

/// US fluid ounce (`US gallon / 128`).
pub fn us_fluid_ounce() -> Quantity {
    us_gallon() / 128.0
}
