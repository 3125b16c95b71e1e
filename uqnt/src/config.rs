//! Measurement sheets.
//!
//! A measurement sheet is a TOML file listing named measurements, each with a distribution, its parameters and a
//! unit expression understood by [`crate::registry::parse_units`]:
//!
//! ```toml
//! [[measurement]]
//! name = "duct_width"
//! distribution = "normal"
//! value = 2.54
//! uncertainty = 0.01
//! unit = "cm"
//!
//! [[measurement]]
//! name = "tap_spacing"
//! distribution = "uniform-bounds"
//! min = 0.77
//! max = 0.79
//! unit = "cm"
//! ```
//!
//! Resolving a sheet turns every entry into a [`Quantity`] through the constructors of `uqnt-core`.

use crate::registry::{self, RegistryError};
use crate::{Quantity, UqntError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for loading and resolving measurement sheets.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The sheet could not be read.
    #[error("Failed to read measurement sheet {}: {source}", path.display())]
    Io {
        /// Path of the sheet.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The sheet is not valid TOML or does not match the expected layout.
    #[error("Failed to parse measurement sheet: {0}")]
    Toml(#[from] toml::de::Error),

    /// A field required by the entry's distribution is absent.
    #[error("Measurement '{name}' requires field '{field}'")]
    MissingField {
        /// Name of the measurement.
        name: String,
        /// The absent field.
        field: &'static str,
    },

    /// Two entries share a name.
    #[error("Measurement '{0}' is defined more than once")]
    DuplicateName(String),

    /// No entry has the requested name.
    #[error("Unknown measurement: {0}")]
    UnknownMeasurement(String),

    /// The entry's unit expression could not be evaluated.
    #[error("Measurement '{name}': {source}")]
    Registry {
        /// Name of the measurement.
        name: String,
        /// Why the unit expression was rejected.
        source: RegistryError,
    },

    /// The entry's parameters were rejected by the quantity constructors.
    #[error("Measurement '{name}': {source}")]
    Quantity {
        /// Name of the measurement.
        name: String,
        /// Why the parameters were rejected.
        source: UqntError,
    },
}

/// How a measurement's parameters describe its uncertainty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Distribution {
    /// `value ± uncertainty` (standard uncertainty).
    #[default]
    Normal,
    /// `value ± half_width`, uniformly distributed.
    Uniform,
    /// Uniformly distributed within `[min, max]`.
    UniformBounds,
    /// An exact value that blocks propagation.
    Exact,
}

/// One `[[measurement]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSpec {
    /// Unique key of the measurement within the sheet.
    pub name: String,
    /// Defaults to `normal`.
    #[serde(default)]
    pub distribution: Distribution,
    /// Mean (`normal`), center (`uniform`) or the exact value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Standard uncertainty of a `normal` measurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<f64>,
    /// Half width of a `uniform` measurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_width: Option<f64>,
    /// Lower bound of a `uniform-bounds` measurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound of a `uniform-bounds` measurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Unit expression; `"1"` when absent.
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Free-text remarks, carried through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_unit() -> String {
    "1".to_string()
}

impl MeasurementSpec {
    fn require(&self, field: &'static str, value: Option<f64>) -> Result<f64, ConfigError> {
        value.ok_or_else(|| ConfigError::MissingField {
            name: self.name.clone(),
            field,
        })
    }

    /// Builds the quantity this entry describes.
    pub fn quantity(&self) -> Result<Quantity, ConfigError> {
        let units = registry::parse_units(&self.unit).map_err(|source| ConfigError::Registry {
            name: self.name.clone(),
            source,
        })?;

        let built = match self.distribution {
            Distribution::Normal => Quantity::normal(
                self.require("value", self.value)?,
                self.require("uncertainty", self.uncertainty)?,
                units,
            ),
            Distribution::Uniform => Quantity::uniform(
                self.require("value", self.value)?,
                self.require("half_width", self.half_width)?,
                units,
            ),
            Distribution::UniformBounds => Quantity::uniform_bounds(
                self.require("min", self.min)?,
                self.require("max", self.max)?,
                units,
            ),
            Distribution::Exact => Ok(Quantity::exact(self.require("value", self.value)?, units)),
        };

        built.map_err(|source| ConfigError::Quantity {
            name: self.name.clone(),
            source,
        })
    }
}

/// A parsed measurement sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSheet {
    /// Entries in file order.
    #[serde(default, rename = "measurement")]
    pub measurements: Vec<MeasurementSpec>,
}

impl MeasurementSheet {
    /// Parses a sheet from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a sheet from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading measurement sheet from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Builds the named measurement.
    pub fn get(&self, name: &str) -> Result<Quantity, ConfigError> {
        self.measurements
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| ConfigError::UnknownMeasurement(name.to_string()))?
            .quantity()
    }

    /// Builds every measurement, keyed by name.
    ///
    /// Fails on the first invalid entry, or if two entries share a name.
    pub fn resolve(&self) -> Result<BTreeMap<String, Quantity>, ConfigError> {
        let mut resolved = BTreeMap::new();
        for spec in &self.measurements {
            if resolved.contains_key(&spec.name) {
                return Err(ConfigError::DuplicateName(spec.name.clone()));
            }
            resolved.insert(spec.name.clone(), spec.quantity()?);
        }
        log::debug!("resolved {} measurements", resolved.len());
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{base::kelvin, length::centimeter};
    use crate::Dimensions;
    use approx::assert_abs_diff_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SHEET: &str = r#"
        [[measurement]]
        name = "duct_width"
        value = 2.54
        uncertainty = 0.01
        unit = "cm"

        [[measurement]]
        name = "bulk_temperature"
        distribution = "uniform"
        value = 300.0
        half_width = 0.5
        unit = "K"

        [[measurement]]
        name = "tap_spacing"
        distribution = "uniform-bounds"
        min = 0.77
        max = 0.79
        unit = "cm"

        [[measurement]]
        name = "gamma"
        distribution = "exact"
        value = 1.4
        notes = "ideal diatomic gas"
    "#;

    #[test]
    fn parse_and_resolve_sheet() {
        let sheet = MeasurementSheet::from_toml_str(SHEET).unwrap();
        assert_eq!(sheet.measurements.len(), 4);
        assert_eq!(sheet.measurements[0].distribution, Distribution::Normal);

        let resolved = sheet.resolve().unwrap();
        let width = resolved["duct_width"];
        assert_abs_diff_eq!(width.value(), 0.0254, epsilon = 1e-15);
        assert_abs_diff_eq!(width.uncertainty(), 1e-4, epsilon = 1e-15);
        assert_eq!(width.dimensions(), Dimensions::LENGTH);

        let temperature = resolved["bulk_temperature"];
        assert_eq!(temperature.value(), 300.0);
        assert_eq!(temperature.dimensions(), kelvin().dimensions());

        let spacing = resolved["tap_spacing"];
        assert_abs_diff_eq!(spacing.value_in(centimeter()).unwrap(), 0.78, epsilon = 1e-12);

        let gamma = resolved["gamma"];
        assert!(!gamma.propagates());
        assert!(gamma.is_dimensionless());
    }

    #[test]
    fn get_single_measurement() {
        let sheet = MeasurementSheet::from_toml_str(SHEET).unwrap();
        assert_eq!(sheet.get("gamma").unwrap().value(), 1.4);
        assert!(matches!(sheet.get("nope"), Err(ConfigError::UnknownMeasurement(_))));
    }

    #[test]
    fn missing_field_is_reported() {
        let sheet = MeasurementSheet::from_toml_str(
            r#"
            [[measurement]]
            name = "x"
            distribution = "uniform"
            value = 1.0
            "#,
        )
        .unwrap();
        match sheet.resolve() {
            Err(ConfigError::MissingField { name, field }) => {
                assert_eq!(name, "x");
                assert_eq!(field, "half_width");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let sheet = MeasurementSheet::from_toml_str(
            r#"
            [[measurement]]
            name = "x"
            distribution = "exact"
            value = 1.0

            [[measurement]]
            name = "x"
            distribution = "exact"
            value = 2.0
            "#,
        )
        .unwrap();
        assert!(matches!(sheet.resolve(), Err(ConfigError::DuplicateName(n)) if n == "x"));
    }

    #[test]
    fn invalid_entries_are_rejected() {
        let negative = MeasurementSheet::from_toml_str(
            r#"
            [[measurement]]
            name = "x"
            value = 1.0
            uncertainty = -0.5
            "#,
        )
        .unwrap();
        assert!(matches!(negative.resolve(), Err(ConfigError::Quantity { .. })));

        let unknown_unit = MeasurementSheet::from_toml_str(
            r#"
            [[measurement]]
            name = "x"
            value = 1.0
            uncertainty = 0.5
            unit = "furlong"
            "#,
        )
        .unwrap();
        assert!(matches!(
            unknown_unit.resolve(),
            Err(ConfigError::Registry { source: RegistryError::UnknownUnit(_), .. })
        ));

        assert!(matches!(
            MeasurementSheet::from_toml_str("[[measurement]]\nname = 3"),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            MeasurementSheet::from_toml_str("[[measurement]]\nname = \"x\"\ndistribution = \"poisson\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn overflowing_unit_exponent_is_an_error() {
        let sheet = MeasurementSheet::from_toml_str(
            r#"
            [[measurement]]
            name = "x"
            distribution = "exact"
            value = 1.0
            unit = "m^2147483647*m"
            "#,
        )
        .unwrap();
        assert!(matches!(
            sheet.resolve(),
            Err(ConfigError::Registry {
                source: RegistryError::Quantity(UqntError::Overflow),
                ..
            })
        ));
    }

    #[test]
    fn load_sheet_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SHEET.as_bytes()).unwrap();
        let sheet = MeasurementSheet::from_file(file.path()).unwrap();
        assert_eq!(sheet.resolve().unwrap().len(), 4);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = MeasurementSheet::from_file("/nonexistent/measurements.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/measurements.toml"));
    }
}
