//! Whole-turn normalisation of raw radian values.
//!
//! [`normalise`] maps any finite radian value into `[0, 2π)` by stepping whole turns, and [`fold_signed`] builds
//! the `(-π, π]` projection on top of it. Every range-aware reader of [`Angle`](crate::Angle) goes through these
//! two functions.
//!
//! ## Edge cases
//!
//! * Values within about a million turns of zero are reduced one turn at a time, so results are bit-identical to
//!   repeated subtraction. Beyond that the value is first reduced with a Euclidean remainder, which keeps the cost
//!   bounded (`x - 2π == x` once `|x|` is large enough, so a pure loop would never finish).
//! * `NaN` and `±∞` have no position on the circle. [`normalise`] returns `NaN` for them and logs a warning;
//!   [`try_normalise`] reports [`AngleError::NonFinite`] instead.

use crate::error::AngleError;
use core::f64::consts::{PI, TAU};

/// Turns stepped one at a time before falling back to `rem_euclid`.
const MAX_LOOP_TURNS: f64 = 1_048_576.0;

/// Map a radian value into `[0, 2π)`.
///
/// ```rust
/// use planar_angle::normalise;
/// use std::f64::consts::PI;
///
/// assert!((normalise(3.0 * PI) - PI).abs() < 1e-12);
/// assert!((normalise(-0.5) - (2.0 * PI - 0.5)).abs() < 1e-12);
/// ```
pub fn normalise(angle: f64) -> f64 {
    if !angle.is_finite() {
        log::warn!("cannot normalise non-finite angle {}", angle);
        return f64::NAN;
    }

    let mut a = angle;
    if a.abs() > MAX_LOOP_TURNS * TAU {
        a = a.rem_euclid(TAU);
    }
    while a >= TAU {
        a -= TAU;
    }
    while a < 0.0 {
        a += TAU;
    }
    // A negative value smaller than one ulp of 2π rounds up to exactly a full turn.
    if a >= TAU {
        a = 0.0;
    }

    log::trace!("normalised {} to {}", angle, a);
    a
}

/// Like [`normalise`], but fails on non-finite input instead of returning `NaN`.
pub fn try_normalise(angle: f64) -> crate::Result<f64> {
    if angle.is_finite() {
        Ok(normalise(angle))
    } else {
        Err(AngleError::NonFinite(angle))
    }
}

/// Map a radian value into `(-π, π]`.
#[inline]
pub fn fold_signed(angle: f64) -> f64 {
    let n = normalise(angle);
    if n > PI {
        n - TAU
    } else {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // normalise
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn normalise_in_range_is_identity() {
        assert_eq!(normalise(0.0), 0.0);
        assert_eq!(normalise(1.0), 1.0);
        assert_eq!(normalise(PI), PI);
    }

    #[test]
    fn normalise_positive_overflow() {
        assert_abs_diff_eq!(normalise(3.0 * PI), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(normalise(TAU + 0.25), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn normalise_negative() {
        assert_abs_diff_eq!(normalise(-0.5), TAU - 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(normalise(-PI / 2.0), 1.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(normalise(-5.0 * TAU - 1.0), TAU - 1.0, epsilon = 1e-9);
    }

    #[test]
    fn normalise_full_turn_is_zero() {
        assert_eq!(normalise(TAU), 0.0);
        assert_eq!(normalise(-TAU), 0.0);
    }

    #[test]
    fn normalise_tiny_negative_stays_below_full_turn() {
        let n = normalise(-1e-20);
        assert!((0.0..TAU).contains(&n));
    }

    #[test]
    fn normalise_huge_values_terminate() {
        let n = normalise(1e300);
        assert!((0.0..TAU).contains(&n));
        let n = normalise(-1e18);
        assert!((0.0..TAU).contains(&n));
    }

    #[test]
    fn normalise_non_finite_is_nan() {
        assert!(normalise(f64::NAN).is_nan());
        assert!(normalise(f64::INFINITY).is_nan());
        assert!(normalise(f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn try_normalise_reports_non_finite() {
        assert_eq!(
            try_normalise(f64::INFINITY),
            Err(AngleError::NonFinite(f64::INFINITY))
        );
        assert!(matches!(
            try_normalise(f64::NAN),
            Err(AngleError::NonFinite(v)) if v.is_nan()
        ));
        assert_abs_diff_eq!(try_normalise(3.0 * PI).unwrap(), PI, epsilon = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // fold_signed
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn fold_signed_keeps_half_turn_positive() {
        assert_abs_diff_eq!(fold_signed(PI), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(fold_signed(-PI), PI, epsilon = 1e-12);
    }

    #[test]
    fn fold_signed_over_half_turn() {
        assert_abs_diff_eq!(fold_signed(1.5 * PI), -PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fold_signed(-0.25), -0.25, epsilon = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_normalise_range(angle in -1e6..1e6f64) {
            let n = normalise(angle);
            prop_assert!(n >= 0.0);
            prop_assert!(n < TAU);
        }

        #[test]
        fn prop_normalise_full_turn_periodic(angle in -1e3..1e3f64) {
            let a = normalise(angle);
            let b = normalise(angle + TAU);
            // Either equal, or on opposite sides of the 0/2π seam.
            let d = (a - b).abs();
            prop_assert!(d < 1e-9 || (TAU - d) < 1e-9);
        }

        #[test]
        fn prop_fold_signed_range(angle in -1e6..1e6f64) {
            let s = fold_signed(angle);
            prop_assert!(s > -PI);
            prop_assert!(s <= PI);
        }
    }
}
