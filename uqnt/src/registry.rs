//! Unit registry: name and symbol lookup over the unit catalog.
//!
//! The registry maps names (`"meter"`, `"pound_force"`) and symbols (`"m"`, `"lbf"`) to the factory functions in
//! [`crate::units`]. The table is built once, on first use, and is immutable afterwards.
//!
//! Unit expressions combine registry entries with `*` and `/`, evaluated left to right. Each factor may be raised to
//! an integer power (`s^2`, `m^-3`) or a parenthesized rational one (`m^(1/2)`); plain numbers act as dimensionless
//! factors (`1e-3*m`). The expression `"1"` is the dimensionless unit.
//!
//! ```rust
//! use uqnt::registry;
//! use uqnt::units::mechanics::newton;
//!
//! let force = registry::parse_units("kg*m/s^2").unwrap();
//! assert_eq!(force.dimensions(), newton().dimensions());
//!
//! let psi = registry::lookup("psi").unwrap();
//! let kpa = registry::convert(psi, "kPa").unwrap();
//! assert!((kpa - 6.894757).abs() < 1e-6);
//! ```

use crate::units::{angle, base, frequency, length, mass, mechanics, temperature, time, volume};
use crate::{Quantity, Rational, UqntError};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Error type for registry lookups and unit expressions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// No registry entry has this name.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// The unit expression is malformed.
    #[error("Invalid unit expression '{expr}': {reason}")]
    Syntax {
        /// The full expression being parsed.
        expr: String,
        /// What was wrong with it.
        reason: String,
    },

    /// An exponent or a conversion was rejected by the quantity layer.
    #[error(transparent)]
    Quantity(#[from] UqntError),
}

type UnitFn = fn() -> Quantity;

// Long names first, then conventional symbols.
const ENTRIES: &[(&str, UnitFn)] = &[
    // base
    ("one", base::one),
    ("1", base::one),
    ("meter", base::meter),
    ("m", base::meter),
    ("kilogram", base::kilogram),
    ("kg", base::kilogram),
    ("second", base::second),
    ("s", base::second),
    ("kelvin", base::kelvin),
    ("K", base::kelvin),
    // length
    ("kilometer", length::kilometer),
    ("km", length::kilometer),
    ("centimeter", length::centimeter),
    ("cm", length::centimeter),
    ("millimeter", length::millimeter),
    ("mm", length::millimeter),
    ("micrometer", length::micrometer),
    ("um", length::micrometer),
    ("nanometer", length::nanometer),
    ("nm", length::nanometer),
    ("foot", length::foot),
    ("ft", length::foot),
    ("inch", length::inch),
    ("in", length::inch),
    ("yard", length::yard),
    ("yd", length::yard),
    // mass
    ("gram", mass::gram),
    ("g", mass::gram),
    ("pound_mass", mass::pound_mass),
    ("lbm", mass::pound_mass),
    ("avoirdupois_ounce", mass::avoirdupois_ounce),
    ("oz", mass::avoirdupois_ounce),
    // time
    ("minute", time::minute),
    ("min", time::minute),
    ("hour", time::hour),
    ("h", time::hour),
    ("day", time::day),
    ("d", time::day),
    ("millisecond", time::millisecond),
    ("ms", time::millisecond),
    ("microsecond", time::microsecond),
    ("us", time::microsecond),
    ("nanosecond", time::nanosecond),
    ("ns", time::nanosecond),
    // temperature
    ("rankine", temperature::rankine),
    ("R", temperature::rankine),
    // frequency
    ("hertz", frequency::hertz),
    ("Hz", frequency::hertz),
    ("kilohertz", frequency::kilohertz),
    ("kHz", frequency::kilohertz),
    ("megahertz", frequency::megahertz),
    ("MHz", frequency::megahertz),
    ("gigahertz", frequency::gigahertz),
    ("GHz", frequency::gigahertz),
    // angle
    ("radian", angle::radian),
    ("rad", angle::radian),
    ("steradian", angle::steradian),
    ("sr", angle::steradian),
    ("degree", angle::degree),
    ("deg", angle::degree),
    // volume
    ("liter", volume::liter),
    ("L", volume::liter),
    ("milliliter", volume::milliliter),
    ("mL", volume::milliliter),
    ("imperial_gallon", volume::imperial_gallon),
    ("us_gallon", volume::us_gallon),
    ("gal", volume::us_gallon),
    ("imperial_fluid_ounce", volume::imperial_fluid_ounce),
    ("us_fluid_ounce", volume::us_fluid_ounce),
    ("floz", volume::us_fluid_ounce),
    // force
    ("newton", mechanics::newton),
    ("N", mechanics::newton),
    ("pound_force", mechanics::pound_force),
    ("lbf", mechanics::pound_force),
    // pressure
    ("pascal", mechanics::pascal),
    ("Pa", mechanics::pascal),
    ("hectopascal", mechanics::hectopascal),
    ("hPa", mechanics::hectopascal),
    ("kilopascal", mechanics::kilopascal),
    ("kPa", mechanics::kilopascal),
    ("megapascal", mechanics::megapascal),
    ("MPa", mechanics::megapascal),
    ("gigapascal", mechanics::gigapascal),
    ("GPa", mechanics::gigapascal),
    ("bar", mechanics::bar),
    ("millibar", mechanics::millibar),
    ("mbar", mechanics::millibar),
    ("kilobar", mechanics::kilobar),
    ("kbar", mechanics::kilobar),
    ("atmosphere", mechanics::atmosphere),
    ("atm", mechanics::atmosphere),
    ("torr", mechanics::torr),
    ("Torr", mechanics::torr),
    ("millimeter_of_mercury", mechanics::millimeter_of_mercury),
    ("mmHg", mechanics::millimeter_of_mercury),
    ("inch_of_mercury", mechanics::inch_of_mercury),
    ("inHg", mechanics::inch_of_mercury),
    ("inch_of_water", mechanics::inch_of_water),
    ("inH2O", mechanics::inch_of_water),
    ("pound_per_square_inch", mechanics::pound_per_square_inch),
    ("psi", mechanics::pound_per_square_inch),
    // energy and power
    ("joule", mechanics::joule),
    ("J", mechanics::joule),
    ("gram_calorie", mechanics::gram_calorie),
    ("cal", mechanics::gram_calorie),
    ("kilogram_calorie", mechanics::kilogram_calorie),
    ("kcal", mechanics::kilogram_calorie),
    ("british_thermal_unit", mechanics::british_thermal_unit),
    ("Btu", mechanics::british_thermal_unit),
    ("watt", mechanics::watt),
    ("W", mechanics::watt),
];

static REGISTRY: Lazy<HashMap<&'static str, UnitFn>> = Lazy::new(|| {
    let table: HashMap<_, _> = ENTRIES.iter().copied().collect();
    log::debug!("unit registry built with {} entries", table.len());
    table
});

/// Returns the unit registered under `name`, if any.
///
/// Names are case-sensitive (`"mm"` is a millimetre, `"Mm"` is unknown).
#[inline]
pub fn lookup(name: &str) -> Option<Quantity> {
    REGISTRY.get(name).map(|unit| unit())
}

/// True if `name` is registered.
#[inline]
pub fn contains(name: &str) -> bool {
    REGISTRY.contains_key(name)
}

/// All registered names and symbols, in catalog order.
pub fn names() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|(name, _)| *name)
}

/// Evaluates a unit expression such as `"kg*m/s^2"` or `"m^(1/2)"`.
pub fn parse_units(expr: &str) -> RegistryResult<Quantity> {
    log::trace!("parsing unit expression '{}'", expr);
    let (mut units, mut rest) = next_factor(expr, expr)?;
    while let Some(op) = rest.chars().next() {
        if !matches!(op, '*' | '/') {
            return Err(syntax(expr, format!("expected '*' or '/', found '{}'", op)));
        }
        let (factor, tail) = next_factor(expr, &rest[op.len_utf8()..])?;
        units = if op == '*' {
            units.checked_mul(factor)?
        } else {
            units.checked_div(factor)?
        };
        rest = tail;
    }
    Ok(units)
}

/// Numeric value of `quantity` expressed in the units described by `target`.
///
/// Fails with [`UqntError::DimensionMismatch`] (wrapped) if the dimensions are incompatible.
pub fn convert(quantity: Quantity, target: &str) -> RegistryResult<f64> {
    let units = parse_units(target)?;
    Ok(quantity.value_in(units)?)
}

fn syntax(expr: &str, reason: impl Into<String>) -> RegistryError {
    RegistryError::Syntax {
        expr: expr.to_string(),
        reason: reason.into(),
    }
}

/// Reads one factor (`name`, `number`, optionally `^exponent`) and returns it with the unread remainder, trimmed.
fn next_factor<'a>(expr: &str, input: &'a str) -> RegistryResult<(Quantity, &'a str)> {
    let input = input.trim_start();
    let end = input
        .find(|c: char| matches!(c, '*' | '/' | '^') || c.is_whitespace())
        .unwrap_or(input.len());
    let name = &input[..end];
    if name.is_empty() {
        return Err(syntax(expr, "expected a unit name"));
    }
    let base = match lookup(name) {
        Some(units) => units,
        None if name.starts_with(|c: char| c.is_ascii_digit() || c == '.') => name
            .parse::<f64>()
            .map(Quantity::number)
            .map_err(|_| syntax(expr, format!("invalid number '{}'", name)))?,
        None => return Err(RegistryError::UnknownUnit(name.to_string())),
    };

    let rest = input[end..].trim_start();
    let Some(after) = rest.strip_prefix('^') else {
        return Ok((base, rest));
    };
    let after = after.trim_start();
    let (text, tail) = match after.strip_prefix('(') {
        Some(inner) => {
            let close = inner
                .find(')')
                .ok_or_else(|| syntax(expr, "unclosed '(' in exponent"))?;
            (&inner[..close], &inner[close + 1..])
        }
        None => {
            let end = after
                .char_indices()
                .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && matches!(c, '+' | '-'))))
                .map_or(after.len(), |(i, _)| i);
            (&after[..end], &after[end..])
        }
    };
    let exponent: Rational = text.parse()?;
    Ok((base.checked_powr(exponent)?, tail.trim_start()))
}
