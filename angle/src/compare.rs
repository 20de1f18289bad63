//! Normalised comparisons between angles.
//!
//! Every comparison first maps *both* sides into `[0, 2π)` with [`normalise`] and then compares the plain numbers.
//! Range flags play no part: an angle read as `Signed` compares exactly like the same stored value read as
//! `Unsigned`.
//!
//! There is no circular wraparound. `0.01` and `2π - 0.01` are geometrically adjacent but compare as far apart,
//! and `0.01 < 2π - 0.01` holds.
//!
//! The right-hand side can be another [`Angle`] or a bare radian `f64`, through [`AngleOperand`].

use crate::angle::Angle;
use crate::wrap::normalise;

/// Anything that can stand on the right-hand side of an angle comparison.
pub trait AngleOperand {
    /// Stored (unprojected) value in radians.
    fn raw_radians(&self) -> f64;
}

impl AngleOperand for f64 {
    #[inline]
    fn raw_radians(&self) -> f64 {
        *self
    }
}

impl AngleOperand for Angle {
    #[inline]
    fn raw_radians(&self) -> f64 {
        self.raw()
    }
}

impl<T: AngleOperand + ?Sized> AngleOperand for &T {
    #[inline]
    fn raw_radians(&self) -> f64 {
        (**self).raw_radians()
    }
}

impl Angle {
    #[inline]
    fn normalised_pair(&self, other: impl AngleOperand) -> (f64, f64) {
        (normalise(self.raw()), normalise(other.raw_radians()))
    }

    /// Whether both normalised values lie within `epsilon` of each other.
    ///
    /// ```rust
    /// use planar_angle::Angle;
    /// use std::f64::consts::TAU;
    ///
    /// let a = Angle::from_radians(-0.1);
    /// assert!(a.is_equal_to(TAU - 0.1, 1e-12));
    /// ```
    pub fn is_equal_to(&self, other: impl AngleOperand, epsilon: f64) -> bool {
        let (a, b) = self.normalised_pair(other);
        (a - b).abs() <= epsilon
    }

    /// Exact floating-point equality of the normalised values.
    ///
    /// Prefer [`Angle::is_equal_to`]; results that went through different arithmetic rarely match bit for bit.
    pub fn is_exactly_equal_to(&self, other: impl AngleOperand) -> bool {
        let (a, b) = self.normalised_pair(other);
        a == b
    }

    /// `normalise(self) > normalise(other)`.
    pub fn greater_than(&self, other: impl AngleOperand) -> bool {
        let (a, b) = self.normalised_pair(other);
        a > b
    }

    /// `normalise(self) >= normalise(other)`.
    pub fn greater_than_or_equals(&self, other: impl AngleOperand) -> bool {
        let (a, b) = self.normalised_pair(other);
        a >= b
    }

    /// `normalise(self) < normalise(other)`.
    pub fn less_than(&self, other: impl AngleOperand) -> bool {
        let (a, b) = self.normalised_pair(other);
        a < b
    }

    /// `normalise(self) <= normalise(other)`.
    pub fn less_than_or_equals(&self, other: impl AngleOperand) -> bool {
        let (a, b) = self.normalised_pair(other);
        a <= b
    }
}
