//! SI prefixes as dimensionless scale factors.
//!
//! ```rust
//! use uqnt::units::{base::meter, prefix::kilo};
//!
//! let km = kilo() * meter();
//! assert_eq!(km.value(), 1000.0);
//! ```

use crate::Quantity;

macro_rules! si_prefix {
    ($($name:ident = $factor:literal),+ $(,)?) => {
        $(
            #[doc = concat!("SI prefix `", stringify!($name), "` (`", stringify!($factor), "`).")]
            #[inline]
            pub fn $name() -> Quantity {
                Quantity::number($factor)
            }
        )+
    };
}

si_prefix!(
    tera = 1e12,
    giga = 1e9,
    mega = 1e6,
    kilo = 1e3,
    hecto = 1e2,
    deca = 1e1,
    deci = 1e-1,
    centi = 1e-2,
    milli = 1e-3,
    micro = 1e-6,
    nano = 1e-9,
    pico = 1e-12,
);
