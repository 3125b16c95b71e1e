//! Resolve a measurement sheet and combine its entries.

use uqnt::units::base::one;
use uqnt::MeasurementSheet;

const SHEET: &str = r#"
[[measurement]]
name = "diameter"
value = 2.50
uncertainty = 0.02
unit = "cm"

[[measurement]]
name = "height"
distribution = "uniform"
value = 12.0
half_width = 0.1
unit = "cm"

[[measurement]]
name = "quarter"
distribution = "exact"
value = 0.25
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sheet = MeasurementSheet::from_toml_str(SHEET)?;
    let m = sheet.resolve()?;

    let pi = uqnt::Quantity::exact(std::f64::consts::PI, one());
    // The exact factors block propagation, so keep them out of the measured part.
    let measured = m["diameter"].powi(2) * m["height"];
    let volume = measured * (pi * m["quarter"]).value();
    println!("cylinder volume: {}", volume);
    println!("relative uncertainty: {:.3}%", 100.0 * volume.relative_uncertainty());
    println!("in millilitres: {:.2}", uqnt::registry::convert(volume, "mL")?);
    Ok(())
}
