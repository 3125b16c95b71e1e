//! Time units.

use super::base::second;
use super::prefix::{micro, milli, nano};
use crate::Quantity;

/// Millisecond.
pub fn millisecond() -> Quantity {
    milli() * second()
}

/// Microsecond.
pub fn microsecond() -> Quantity {
    micro() * second()
}

/// Nanosecond.
pub fn nanosecond() -> Quantity {
    nano() * second()
}

/// Minute (`60 s`).
pub fn minute() -> Quantity {
    60.0 * second()
}

/// Hour (`60 min`).
pub fn hour() -> Quantity {
    60.0 * minute()
}

/// Day (`24 h`).
pub fn day() -> Quantity {
    24.0 * hour()
}
