//! Conversions between [`Angle`] and `qtty` angular quantities.
//!
//! Enabled with the `qtty` feature. Quantities coming in are taken at face value (no range projection);
//! quantities going out carry the range-projected value, the same number [`Angle::radians`] or
//! [`Angle::degrees`] would return.

use crate::angle::Angle;
use crate::units::Units;
use qtty::{Degrees, Radians};

impl From<Radians> for Angle {
    fn from(q: Radians) -> Self {
        Angle::from_radians(q.value())
    }
}

/// Degree quantities also switch the display unit to [`Units::Degrees`].
impl From<Degrees> for Angle {
    fn from(q: Degrees) -> Self {
        let mut angle = Angle::with_units(q.value(), Units::Degrees);
        angle.set_units(Units::Degrees);
        angle
    }
}

impl Angle {
    /// Range-projected value as a `qtty` radian quantity.
    pub fn to_radians_quantity(&self) -> Radians {
        Radians::new(self.radians())
    }

    /// Range-projected value as a `qtty` degree quantity.
    pub fn to_degrees_quantity(&self) -> Degrees {
        Degrees::new(self.degrees())
    }
}
