//! Length units.
//!
//! The canonical scaling unit is the metre. Imperial units follow the international yard and pound agreement
//! (`1 ft = 0.3048 m` exactly).
//!
//! ```rust
//! use uqnt::units::length::{foot, yard};
//!
//! assert_eq!(3.0 * foot(), 1.0 * yard());
//! ```

use super::base::meter;
use super::prefix::{centi, kilo, micro, milli, nano};
use crate::Quantity;

/// Kilometre.
pub fn kilometer() -> Quantity {
    kilo() * meter()
}

/// Centimetre.
pub fn centimeter() -> Quantity {
    centi() * meter()
}

/// Millimetre.
pub fn millimeter() -> Quantity {
    milli() * meter()
}

/// Micrometre.
pub fn micrometer() -> Quantity {
    micro() * meter()
}

/// Nanometre.
pub fn nanometer() -> Quantity {
    nano() * meter()
}

/// International foot (`0.3048 m`).
pub fn foot() -> Quantity {
    yard() / 3.0
}

/// Inch (`foot / 12`).
pub fn inch() -> Quantity {
    foot() / 12.0
}

/// International yard (`0.9144 m`).
pub fn yard() -> Quantity {
    0.9144 * meter()
}
