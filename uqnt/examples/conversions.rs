//! Unit expressions, conversions and temperature scales.

use uqnt::registry;
use uqnt::units::temperature::fahrenheit_normal;
use uqnt::Quantity;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tire = Quantity::normal(32.0, 0.5, registry::lookup("psi").ok_or("psi is not registered")?)?;
    println!("tire pressure: {:.2} kPa", registry::convert(tire, "kPa")?);
    println!("tire pressure: {:.4} bar", registry::convert(tire, "bar")?);

    let flow = Quantity::normal(3.2, 0.1, registry::parse_units("L/min")?)?;
    println!("flow: {:.3e} m^3/s ({})", flow.value(), flow);

    let oven = fahrenheit_normal(350.0, 5.0)?;
    println!("oven: {:.2} K +/- {:.2} K", oven.value(), oven.uncertainty());

    if let Err(err) = registry::convert(tire, "m") {
        println!("expected failure: {}", err);
    }
    Ok(())
}
