//! Display units and range policies for [`Angle`](crate::Angle).
//!
//! Both enums are plain mode flags. Neither one ever changes the radian value stored inside an angle:
//!
//! * [`Units`] only affects how an angle is written as text.
//! * [`Range`] only affects how the stored value is *projected* when it is read back.
//!
//! They parse from (and display as) lowercase names so they can be used directly in configuration files.
//!
//! ```rust
//! use planar_angle::{Range, Units};
//!
//! let range: Range = "Signed".parse().unwrap();
//! assert_eq!(range, Range::Signed);
//! assert_eq!(Units::Degrees.to_string(), "degrees");
//! ```

use crate::error::AngleError;
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Number of degrees in one radian (`180 / π`).
pub const DEGREES_IN_RADIAN: f64 = 180.0 / core::f64::consts::PI;

/// Unit used when an angle is formatted as text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Bare radian value.
    #[default]
    Radians,
    /// Degree value followed by `" degrees"`.
    Degrees,
}

impl Units {
    /// Convert a value expressed in this unit into radians.
    #[inline]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Units::Radians => value,
            Units::Degrees => value / DEGREES_IN_RADIAN,
        }
    }

    /// Convert a radian value into this unit.
    #[inline]
    pub fn of_radians(self, radians: f64) -> f64 {
        match self {
            Units::Radians => radians,
            Units::Degrees => radians * DEGREES_IN_RADIAN,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Units::Radians => "radians",
            Units::Degrees => "degrees",
        }
    }
}

/// Interval a stored angle is projected into when read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Range {
    /// Any value; no projection.
    #[default]
    Unlimited,
    /// `(-π, π]`.
    Signed,
    /// `[0, 2π)`.
    Unsigned,
}

impl Range {
    fn name(self) -> &'static str {
        match self {
            Range::Unlimited => "unlimited",
            Range::Signed => "signed",
            Range::Unsigned => "unsigned",
        }
    }
}

impl Display for Units {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Units {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "radians" | "radian" | "rad" => Ok(Units::Radians),
            "degrees" | "degree" | "deg" => Ok(Units::Degrees),
            other => Err(AngleError::Parse(format!("unknown angle unit '{}'", other))),
        }
    }
}

impl FromStr for Range {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unlimited" => Ok(Range::Unlimited),
            "signed" => Ok(Range::Signed),
            "unsigned" => Ok(Range::Unsigned),
            other => Err(AngleError::Parse(format!("unknown angle range '{}'", other))),
        }
    }
}
