//! Progress curves and value scales.
//!
//! Every curve maps progress `t` in `[0, 1]` (clamped) to a scaled value
//! that is `0` or `1` at the ends of a run, so repeated runs join without a
//! jump.

use core::f32::consts::{PI, TAU};

/// Curve function signature: maps progress in `[0, 1]` to a scaled value.
pub type CurveFn = fn(f32) -> f32;

/// Rises to `1` and back to `0` along half a sine wave.
#[inline]
#[must_use]
pub fn zero_one_zero_sin(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    (t * PI).sin()
}

/// Rises to `1` in the first quarter, holds, and falls back in the last quarter.
#[inline]
#[must_use]
pub fn zero_one_zero_3(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.25 {
        4.0 * t
    } else if t < 0.75 {
        1.0
    } else {
        4.0 * (1.0 - t)
    }
}

/// Mirror of [`zero_one_zero_3`]: falls to `0`, holds, and comes back to `1`.
#[inline]
#[must_use]
pub fn one_zero_one_3(t: f32) -> f32 {
    1.0 - zero_one_zero_3(t)
}

/// Swings up to `1`, down to `-0.5`, up to `0.25` and settles at `0`.
///
/// Each quarter is one half-period of `-cos(4πt)` with a smaller amplitude
/// and a shifted centre, so the curve is continuous at every quarter.
#[inline]
#[must_use]
pub fn damped_oscillations_3(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let (amplitude, centre) = if t < 0.25 {
        (0.5, 0.5)
    } else if t < 0.5 {
        (0.75, 0.25)
    } else if t < 0.75 {
        (0.375, -0.125)
    } else {
        (0.125, 0.125)
    };
    amplitude * (2.0 * TAU * t - PI / 2.0).sin() + centre
}

/// Shapes the progress of one run.
#[derive(Clone, Copy)]
pub struct ProgressCurve {
    name: &'static str,
    eval: CurveFn,
}

impl ProgressCurve {
    /// See [`zero_one_zero_sin`].
    pub const ZERO_ONE_ZERO_SIN: Self = Self::new("zero_one_zero_sin", zero_one_zero_sin);
    /// See [`zero_one_zero_3`].
    pub const ZERO_ONE_ZERO_3: Self = Self::new("zero_one_zero_3", zero_one_zero_3);
    /// See [`one_zero_one_3`].
    pub const ONE_ZERO_ONE_3: Self = Self::new("one_zero_one_3", one_zero_one_3);
    /// See [`damped_oscillations_3`].
    pub const DAMPED_OSCILLATIONS_3: Self = Self::new("damped_oscillations_3", damped_oscillations_3);

    /// Wraps a custom curve. `name` only shows up in `Debug` output.
    #[must_use]
    pub const fn new(name: &'static str, eval: CurveFn) -> Self {
        Self { name, eval }
    }

    /// Scaled value at `progress`.
    #[must_use]
    pub fn eval(&self, progress: f32) -> f32 {
        (self.eval)(progress)
    }
}

impl core::fmt::Debug for ProgressCurve {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ProgressCurve").field(&self.name).finish()
    }
}

/// Maps a scaled value onto the animated property.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueScale {
    /// The scaled value itself, e.g. an opacity.
    #[default]
    Identity,
    /// One full turn in radians per unit.
    Radians,
    /// Multiplies by a maximum, e.g. the largest rotation angle.
    Linear(f32),
}

impl ValueScale {
    /// Property value for `scaled`.
    #[must_use]
    pub fn eval(self, scaled: f32) -> f32 {
        match self {
            Self::Identity => scaled,
            Self::Radians => TAU * scaled,
            Self::Linear(max) => max * scaled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn close(actual: f32, expected: f32) -> bool {
        (actual - expected).abs() < EPSILON
    }

    #[test]
    fn sine_peaks_halfway() {
        assert!(close(zero_one_zero_sin(0.0), 0.0));
        assert!(close(zero_one_zero_sin(0.25), core::f32::consts::FRAC_1_SQRT_2));
        assert!(close(zero_one_zero_sin(0.5), 1.0));
        assert!(close(zero_one_zero_sin(0.75), core::f32::consts::FRAC_1_SQRT_2));
        assert!(close(zero_one_zero_sin(1.0), 0.0));
    }

    #[test]
    fn plateau_curve_breakpoints() {
        assert!(close(zero_one_zero_3(0.0), 0.0));
        assert!(close(zero_one_zero_3(0.125), 0.5));
        assert!(close(zero_one_zero_3(0.25), 1.0));
        assert!(close(zero_one_zero_3(0.5), 1.0));
        assert!(close(zero_one_zero_3(0.75), 1.0));
        assert!(close(zero_one_zero_3(0.875), 0.5));
        assert!(close(zero_one_zero_3(1.0), 0.0));
    }

    #[test]
    fn dip_curve_breakpoints() {
        assert!(close(one_zero_one_3(0.0), 1.0));
        assert!(close(one_zero_one_3(0.125), 0.5));
        assert!(close(one_zero_one_3(0.25), 0.0));
        assert!(close(one_zero_one_3(0.5), 0.0));
        assert!(close(one_zero_one_3(0.75), 0.0));
        assert!(close(one_zero_one_3(0.875), 0.5));
        assert!(close(one_zero_one_3(1.0), 1.0));
    }

    #[test]
    fn damped_oscillation_breakpoints() {
        assert!(close(damped_oscillations_3(0.0), 0.0));
        assert!(close(damped_oscillations_3(0.125), 0.5));
        assert!(close(damped_oscillations_3(0.25), 1.0));
        assert!(close(damped_oscillations_3(0.5), -0.5));
        assert!(close(damped_oscillations_3(0.75), 0.25));
        assert!(close(damped_oscillations_3(1.0), 0.0));
    }

    #[test]
    fn damped_oscillation_is_continuous_at_quarters() {
        for quarter in [0.25, 0.5, 0.75] {
            let before = damped_oscillations_3(quarter - 1e-4);
            let after = damped_oscillations_3(quarter);
            assert!((before - after).abs() < 1e-3, "jump at {quarter}");
        }
    }

    #[test]
    fn curves_clamp_progress() {
        assert!(close(zero_one_zero_3(-1.0), 0.0));
        assert!(close(one_zero_one_3(2.0), 1.0));
        assert!(close(damped_oscillations_3(1.5), 0.0));
    }

    #[test]
    fn scales_map_scaled_values() {
        assert!(close(ValueScale::Identity.eval(0.4), 0.4));
        assert!(close(ValueScale::Radians.eval(0.5), core::f32::consts::PI));
        assert!(close(ValueScale::Linear(30.0).eval(0.5), 15.0));
    }

    #[test]
    fn curve_debug_names_the_curve() {
        let debug = format!("{:?}", ProgressCurve::DAMPED_OSCILLATIONS_3);
        assert_eq!(debug, "ProgressCurve(\"damped_oscillations_3\")");
        assert!(close(ProgressCurve::ZERO_ONE_ZERO_SIN.eval(0.5), 1.0));
    }
}
