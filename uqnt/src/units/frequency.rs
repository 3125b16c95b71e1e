//! Frequency units.

use super::base::second;
use super::prefix::{giga, kilo, mega};
use crate::Quantity;

/// Hertz (`s^-1`).
pub fn hertz() -> Quantity {
    1.0 / second()
}

/// Kilohertz.
pub fn kilohertz() -> Quantity {
    kilo() * hertz()
}

/// Megahertz.
pub fn megahertz() -> Quantity {
    mega() * hertz()
}

/// Gigahertz.
pub fn gigahertz() -> Quantity {
    giga() * hertz()
}
