//! Planar angle value type.
//!
//! `planar-angle` provides [`Angle`], a small value type for geometry code that keeps radian/degree handling and
//! range wrapping explicit:
//!
//! - The stored value is always in **radians**. Degree input is converted when the angle is built.
//! - A [`Range`] policy decides how the stored value is *read*: unchanged, in `[0, 2π)`, or in `(-π, π]`.
//! - A [`Units`] flag decides whether the angle is *written* as radians or degrees.
//! - Comparisons normalise both sides into `[0, 2π)` first and ignore range flags.
//!
//! # Quick start
//!
//! ```rust
//! use planar_angle::{Angle, Range, Units};
//! use std::f64::consts::PI;
//!
//! let mut heading = Angle::from_components(-1.0, 0.0); // atan2(-1, 0) = -π/2
//! assert!((heading.degrees() + 90.0).abs() < 1e-12);
//!
//! heading.set_range(Range::Unsigned);
//! assert!((heading.degrees() - 270.0).abs() < 1e-9);
//!
//! heading.set_units(Units::Degrees);
//! assert_eq!(format!("{:.0}", heading), "270 degrees");
//!
//! // Same direction, one full turn apart.
//! assert!(heading.is_equal_to(-PI / 2.0 + 2.0 * PI, 1e-12));
//! ```
//!
//! # What this crate does not try to solve
//!
//! - Vector or matrix geometry.
//! - Angular units other than degrees and radians on [`Angle`] itself.
//! - Circular distance: `0.01` and `2π - 0.01` compare as far apart.
//!
//! # Feature flags
//!
//! - `qtty`: `From` conversions between [`Angle`] and `qtty::Radians` / `qtty::Degrees`.
//!
//! # Panics and errors
//!
//! Angle arithmetic and reads never panic. Non-finite values normalise to `NaN` (with a `log` warning) instead of
//! looping; [`try_normalise`] and [`Angle::try_normalized`] report them as [`AngleError::NonFinite`]. Parsing and
//! configuration loading return [`AngleError`].
//!
//! # Logging
//!
//! Diagnostics go through the `log` facade: every normalisation is traced at `trace` level. No logger is installed
//! by this crate.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod angle;
mod compare;
mod error;
mod format;
mod units;
mod wrap;

pub mod config;

#[cfg(feature = "qtty")]
mod interop;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use angle::{Angle, RightAngle};
pub use compare::AngleOperand;
pub use config::AngleConfig;
pub use error::{AngleError, Result};
pub use units::{Range, Units, DEGREES_IN_RADIAN};
pub use wrap::{fold_signed, normalise, try_normalise};
