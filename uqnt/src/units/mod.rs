//! Predefined units grouped by dimension.
//!
//! Every unit is a zero-argument function returning a fresh [`Quantity`](crate::Quantity); there is no shared mutable
//! state to corrupt. Units are built purely from the operators of [`Quantity`](crate::Quantity) and carry zero
//! uncertainty while still propagating, so multiplying a measurement by a unit never hides its uncertainty. Defined
//! physical constants that should block propagation live in [`constants`].
//!
//! Values are stored in coherent SI base units: metre, kilogram, second and kelvin all have value `1.0`.
//!
//! ## Modules
//!
//! - [`prefix`]: dimensionless SI prefixes (`tera` … `pico`).
//! - [`base`]: the dimensionless one and the four base units.
//! - [`length`]: metric multiples plus foot, inch and yard.
//! - [`mass`]: gram, pound-mass, ounce.
//! - [`time`]: minute, hour, day and sub-second units.
//! - [`temperature`]: rankine and the Celsius/Fahrenheit constructors.
//! - [`frequency`]: hertz and multiples.
//! - [`angle`]: radian, steradian, degree.
//! - [`volume`]: litre and imperial/US gallons and fluid ounces.
//! - [`mechanics`]: force, pressure, energy and power.
//! - [`constants`]: defined reference values (absolute zero, standard atmosphere, standard gravity).

pub mod angle;
pub mod base;
pub mod constants;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod mechanics;
pub mod prefix;
pub mod temperature;
pub mod time;
pub mod volume;
