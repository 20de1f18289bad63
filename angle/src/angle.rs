//! The [`Angle`] value type.
//!
//! An `Angle` stores a single `f64` in **radians**, whatever unit it was built from, plus two mode flags:
//!
//! * [`Range`] decides how the stored value is projected when read (`radians()`, `degrees()`, `Display`).
//! * [`Units`] decides whether `Display` writes radians or degrees.
//!
//! The stored value itself is never wrapped implicitly. Only [`Angle::normalize_to_2pi`] and
//! [`Angle::normalize_to_plus_minus_pi`] rewrite it; changing a flag never does.
//!
//! Arithmetic always returns a fresh angle with default flags: the operands' range and display unit are not
//! carried over.
//!
//! ```rust
//! use planar_angle::{Angle, Range, Units};
//! use std::f64::consts::PI;
//!
//! let mut a = Angle::with_units(540.0, Units::Degrees);
//! assert!((a.radians() - 3.0 * PI).abs() < 1e-12);
//!
//! a.set_range(Range::Signed);
//! assert!((a.degrees() - 180.0).abs() < 1e-9);
//! ```

use crate::units::{Range, Units, DEGREES_IN_RADIAN};
use crate::wrap::{fold_signed, normalise, try_normalise};
use core::f64::consts::FRAC_PI_2;
use core::ops::{Add, Mul, Sub};

/// A planar angle held in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Angle {
    value: f64,
    range: Range,
    units: Units,
}

/// Outcome of [`Angle::right_angle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RightAngle {
    /// Within tolerance of `+π/2`.
    Positive,
    /// Within tolerance of `-π/2`.
    Negative,
    /// Not a right angle.
    Neither,
}

impl RightAngle {
    /// `1`, `-1` or `0`.
    #[inline]
    pub const fn signum(self) -> i32 {
        match self {
            RightAngle::Positive => 1,
            RightAngle::Negative => -1,
            RightAngle::Neither => 0,
        }
    }
}

impl Angle {
    /// Zero radians, unlimited range, radian display.
    #[inline]
    pub const fn new() -> Self {
        Self::from_radians(0.0)
    }

    /// Creates an angle from a radian value.
    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self {
            value: radians,
            range: Range::Unlimited,
            units: Units::Radians,
        }
    }

    /// Creates an angle from a degree value.
    ///
    /// The display unit stays [`Units::Radians`]; only the input is interpreted as degrees.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::with_units(degrees, Units::Degrees)
    }

    /// Creates an angle from `value` expressed in `units`.
    #[inline]
    pub fn with_units(value: f64, units: Units) -> Self {
        Self::from_radians(units.to_radians(value))
    }

    /// Angle of the vector `(x, y)` from the positive x axis, in `(-π, π]`.
    ///
    /// Arguments follow `atan2` order: `y` first.
    ///
    /// ```rust
    /// use planar_angle::Angle;
    /// let up = Angle::from_components(1.0, 0.0);
    /// assert!((up.degrees() - 90.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_components(y: f64, x: f64) -> Self {
        Self::from_radians(y.atan2(x))
    }

    /// Overwrite value, range and display unit with those of `other`.
    #[inline]
    pub fn copy_from(&mut self, other: &Angle) {
        *self = *other;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    /// Sum of the stored values, with default flags.
    #[inline]
    pub fn plus(&self, other: &Angle) -> Angle {
        Angle::from_radians(self.value + other.value)
    }

    /// Difference of the stored values, with default flags.
    #[inline]
    pub fn subtract(&self, other: &Angle) -> Angle {
        Angle::from_radians(self.value - other.value)
    }

    /// Stored value scaled by `factor`, with default flags.
    #[inline]
    pub fn multiply_by(&self, factor: f64) -> Angle {
        Angle::from_radians(self.value * factor)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Trigonometry (raw value, no range projection)
    // ─────────────────────────────────────────────────────────────────────────

    /// Cosine of the stored value.
    #[inline]
    pub fn cos(&self) -> f64 {
        self.value.cos()
    }

    /// Sine of the stored value.
    #[inline]
    pub fn sin(&self) -> f64 {
        self.value.sin()
    }

    /// Tangent of the stored value.
    #[inline]
    pub fn tan(&self) -> f64 {
        self.value.tan()
    }

    /// Sine and cosine in one call.
    #[inline]
    pub fn sin_cos(&self) -> (f64, f64) {
        self.value.sin_cos()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Normalisation
    // ─────────────────────────────────────────────────────────────────────────

    /// Map a radian value into `[0, 2π)`. Same as [`crate::normalise`].
    #[inline]
    pub fn normalise(angle: f64) -> f64 {
        normalise(angle)
    }

    /// Rewrite the stored value into `[0, 2π)`.
    pub fn normalize_to_2pi(&mut self) {
        self.value = normalise(self.value);
    }

    /// Rewrite the stored value into `(-π, π]`.
    pub fn normalize_to_plus_minus_pi(&mut self) {
        self.value = fold_signed(self.value);
    }

    /// Copy of this angle with the stored value in `[0, 2π)`, or an error if it is not finite.
    pub fn try_normalized(&self) -> crate::Result<Angle> {
        Ok(Angle {
            value: try_normalise(self.value)?,
            ..*self
        })
    }

    fn adjust(&self, a: f64) -> f64 {
        match self.range {
            Range::Unlimited => a,
            Range::Unsigned => normalise(a),
            Range::Signed => fold_signed(a),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Readers / writers
    // ─────────────────────────────────────────────────────────────────────────

    /// Value in radians, projected by the current range.
    #[inline]
    pub fn radians(&self) -> f64 {
        self.adjust(self.value)
    }

    /// Alias of [`Angle::radians`].
    #[inline]
    pub fn angle(&self) -> f64 {
        self.radians()
    }

    /// Value in degrees, projected by the current range.
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.adjust(self.value) * DEGREES_IN_RADIAN
    }

    /// Stored radian value, without range projection.
    #[inline]
    pub const fn raw(&self) -> f64 {
        self.value
    }

    /// Replace the stored value with `degrees`, converted to radians.
    #[inline]
    pub fn put_degrees(&mut self, degrees: f64) {
        self.value = degrees / DEGREES_IN_RADIAN;
    }

    /// Current range policy.
    #[inline]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// Change the range policy. The stored value is left as is.
    #[inline]
    pub fn set_range(&mut self, range: Range) {
        self.range = range;
    }

    /// Current display unit.
    #[inline]
    pub const fn units(&self) -> Units {
        self.units
    }

    /// Change the display unit. The stored value is left as is.
    #[inline]
    pub fn set_units(&mut self, units: Units) {
        self.units = units;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Right-angle test
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether this angle lies within `eps` of `+π/2` or `-π/2` once folded into `(-π, π]`.
    ///
    /// Returns `None` when no tolerance is given. Only the magnitude of `eps` (as read through its own range)
    /// is used, and both bounds are strict. `self` is not modified.
    ///
    /// ```rust
    /// use planar_angle::{Angle, RightAngle};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let eps = Angle::from_radians(0.01);
    /// let a = Angle::from_radians(FRAC_PI_2 + 0.001);
    /// assert_eq!(a.right_angle(Some(&eps)), Some(RightAngle::Positive));
    /// assert_eq!(a.right_angle(None), None);
    /// ```
    pub fn right_angle(&self, eps: Option<&Angle>) -> Option<RightAngle> {
        let abs_eps = eps?.radians().abs();
        let v = fold_signed(self.value);
        let rt = if (FRAC_PI_2 - v).abs() < abs_eps {
            RightAngle::Positive
        } else if (-FRAC_PI_2 - v).abs() < abs_eps {
            RightAngle::Negative
        } else {
            RightAngle::Neither
        };
        Some(rt)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        self.plus(&rhs)
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        self.subtract(&rhs)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: f64) -> Angle {
        self.multiply_by(rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: Angle) -> Angle {
        rhs.multiply_by(self)
    }
}

impl From<f64> for Angle {
    #[inline]
    fn from(radians: f64) -> Self {
        Angle::from_radians(radians)
    }
}
