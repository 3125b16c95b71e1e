//! Mass units.
//!
//! The canonical scaling unit is the kilogram, so the gram is `1e-3`.

use super::base::kilogram;
use super::prefix::milli;
use crate::Quantity;

/// Gram.
pub fn gram() -> Quantity {
    milli() * kilogram()
}

/// Avoirdupois pound (`0.45359237 kg`).
pub fn pound_mass() -> Quantity {
    0.453_592_37 * kilogram()
}

/// Avoirdupois ounce (`lbm / 16`).
pub fn avoirdupois_ounce() -> Quantity {
    pound_mass() / 16.0
}
