//! Text formatting and parsing for [`Angle`].
//!
//! `Display` writes the range-projected value. With [`Units::Degrees`] the value is converted to degrees and
//! followed by `" degrees"`; with [`Units::Radians`] the bare radian number is written. A precision given to the
//! formatter (`{:.3}`) is applied to the number.
//!
//! `FromStr` reads the same two shapes back: `"1.5"` is 1.5 radians, `"90 degrees"` is 90 degrees and yields an
//! angle whose display unit is [`Units::Degrees`].
//!
//! ```rust
//! use planar_angle::{Angle, Units};
//!
//! let mut a = Angle::from_degrees(45.0);
//! a.set_units(Units::Degrees);
//! assert_eq!(format!("{:.1}", a), "45.0 degrees");
//!
//! let b: Angle = "45 degrees".parse().unwrap();
//! assert!(b.is_equal_to(a, 1e-12));
//! ```

use crate::angle::Angle;
use crate::error::AngleError;
use crate::units::Units;
use core::fmt::{Display, Formatter};
use core::str::FromStr;

const DEGREES_SUFFIX: &str = "degrees";

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let value = self.units().of_radians(self.radians());
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, value)?,
            None => write!(f, "{}", value)?,
        }
        if self.units() == Units::Degrees {
            write!(f, " {}", DEGREES_SUFFIX)?;
        }
        Ok(())
    }
}

impl FromStr for Angle {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (number, units) = match text.strip_suffix(DEGREES_SUFFIX) {
            Some(rest) => (rest.trim_end(), Units::Degrees),
            None => (text, Units::Radians),
        };

        let value: f64 = number
            .parse()
            .map_err(|e| AngleError::Parse(format!("invalid angle '{}': {}", s, e)))?;

        let mut angle = Angle::with_units(value, units);
        angle.set_units(units);
        Ok(angle)
    }
}
