//! Minimal end-to-end example: propagate uncertainty through a velocity and a kinetic energy.

use uqnt::units::base::{kilogram, meter, second};
use uqnt::units::mechanics::joule;
use uqnt::Quantity;

fn main() -> uqnt::Result<()> {
    let distance = Quantity::normal(100.0, 0.5, meter())?;
    let elapsed = Quantity::normal(20.0, 0.1, second())?;
    let velocity = distance / elapsed;
    println!("v  = {}", velocity);

    let mass = Quantity::uniform(1.5, 0.01, kilogram())?;
    let energy = 0.5 * mass * velocity.powi(2);
    println!("Ek = {}", energy);
    println!("Ek = {:.3} J", energy.value_in(joule())?);

    assert!((energy.value() - 18.75).abs() < 1e-9);
    Ok(())
}
