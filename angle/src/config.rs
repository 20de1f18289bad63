//! Angle defaults read from TOML configuration.
//!
//! Geometry code often wants every angle it creates to use the same range policy, display unit and comparison
//! tolerance. [`AngleConfig`] holds those three settings and can be loaded from the `[angle]` table of a TOML file:
//!
//! ```toml
//! [angle]
//! range = "signed"
//! units = "degrees"
//! tolerance = 1e-9
//! ```
//!
//! Every key is optional; a missing table yields [`AngleConfig::default`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::angle::Angle;
use crate::compare::AngleOperand;
use crate::error::{AngleError, Result};
use crate::units::{Range, Units};

/// Default range, display unit and comparison tolerance for new angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleConfig {
    /// Range policy for new angles.
    #[serde(default)]
    pub range: Range,
    /// Display unit for new angles.
    #[serde(default)]
    pub units: Units,
    /// Epsilon used by [`AngleConfig::is_equal`].
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    angle: AngleConfig,
}

fn default_tolerance() -> f64 {
    1e-9
}

impl Default for AngleConfig {
    fn default() -> Self {
        Self {
            range: Range::default(),
            units: Units::default(),
            tolerance: default_tolerance(),
        }
    }
}

impl AngleConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Returns
    /// * `Ok(AngleConfig)` if the text parses and the tolerance is valid
    /// * `Err(AngleError::Config)` otherwise
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| AngleError::Config(format!("Failed to parse config: {}", e)))?;
        file.angle.validate()?;
        Ok(file.angle)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AngleError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "Loaded angle configuration from {}: range={}, units={}, tolerance={}",
            path.display(),
            config.range,
            config.units,
            config.tolerance
        );
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(AngleError::Config(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// An angle of `radians` carrying the configured range and display unit.
    pub fn angle(&self, radians: f64) -> Angle {
        let mut angle = Angle::from_radians(radians);
        self.apply(&mut angle);
        angle
    }

    /// Set the configured range and display unit on `angle`. The stored value is untouched.
    pub fn apply(&self, angle: &mut Angle) {
        angle.set_range(self.range);
        angle.set_units(self.units);
    }

    /// [`Angle::is_equal_to`] with the configured tolerance.
    pub fn is_equal(&self, a: &Angle, b: impl AngleOperand) -> bool {
        a.is_equal_to(b, self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = AngleConfig::default();
        assert_eq!(config.range, Range::Unlimited);
        assert_eq!(config.units, Units::Radians);
        assert_eq!(config.tolerance, 1e-9);
    }

    #[test]
    fn parse_full_table() {
        let config = AngleConfig::from_toml_str(
            r#"
            [angle]
            range = "signed"
            units = "degrees"
            tolerance = 0.001
            "#,
        )
        .unwrap();
        assert_eq!(config.range, Range::Signed);
        assert_eq!(config.units, Units::Degrees);
        assert_eq!(config.tolerance, 0.001);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = AngleConfig::from_toml_str("[angle]\nrange = \"unsigned\"\n").unwrap();
        assert_eq!(config.range, Range::Unsigned);
        assert_eq!(config.units, Units::Radians);
        assert_eq!(config.tolerance, 1e-9);

        assert_eq!(AngleConfig::from_toml_str("").unwrap(), AngleConfig::default());
    }

    #[test]
    fn unknown_range_is_rejected() {
        let err = AngleConfig::from_toml_str("[angle]\nrange = \"sideways\"\n").unwrap_err();
        assert!(matches!(err, AngleError::Config(_)));
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        let err = AngleConfig::from_toml_str("[angle]\ntolerance = -1.0\n").unwrap_err();
        assert!(matches!(err, AngleError::Config(_)));
    }

    #[test]
    fn infinite_tolerance_is_rejected() {
        let err = AngleConfig::from_toml_str("[angle]\ntolerance = inf\n").unwrap_err();
        assert!(matches!(err, AngleError::Config(_)));
    }

    #[test]
    fn from_file_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[angle]\nunits = \"degrees\"").unwrap();
        let config = AngleConfig::from_file(file.path()).unwrap();
        assert_eq!(config.units, Units::Degrees);
    }

    #[test]
    fn from_file_missing_path() {
        let err = AngleConfig::from_file("/definitely/not/here/angle.toml").unwrap_err();
        assert!(matches!(err, AngleError::Config(_)));
    }

    #[test]
    fn configured_angles_carry_flags() {
        let config = AngleConfig {
            range: Range::Signed,
            units: Units::Degrees,
            tolerance: 1e-6,
        };
        let a = config.angle(1.5 * PI);
        assert_eq!(a.raw(), 1.5 * PI);
        assert_eq!(a.range(), Range::Signed);
        assert_eq!(a.units(), Units::Degrees);
        assert!((a.degrees() + 90.0).abs() < 1e-9);
    }

    #[test]
    fn configured_tolerance() {
        let config = AngleConfig {
            tolerance: 1e-3,
            ..AngleConfig::default()
        };
        let a = Angle::from_radians(-0.1);
        assert!(config.is_equal(&a, TAU - 0.1005));
        assert!(!config.is_equal(&a, TAU - 0.2));
    }
}
