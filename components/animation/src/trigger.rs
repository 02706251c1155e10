//! The animated counter and the animation it drives.

use crate::curve::{ProgressCurve, ValueScale};

/// Counter whose interpolated value drives an [`ExplicitAnimation`].
///
/// Only the fractional part matters for rendering, so every
/// [`animate`](Self::animate) call replays the animation once.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trigger(f32);

impl Trigger {
    /// A trigger at rest at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self(0.0)
    }

    /// Starts one more run.
    pub fn animate(&mut self) {
        self.0 += 1.0;
    }

    /// Current, possibly interpolated, value.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Overwrites the value; hosts call this while interpolating.
    pub const fn set_value(&mut self, value: f32) {
        self.0 = value;
    }

    /// Progress of the current run: the fractional part, always in `[0, 1)`.
    ///
    /// Non-finite values count as a finished run.
    #[must_use]
    pub fn progress(self) -> f32 {
        if self.0.is_finite() {
            self.0 - self.0.floor()
        } else {
            0.0
        }
    }
}

/// A progress curve paired with the scale of the property it animates.
#[derive(Debug, Clone, Copy)]
pub struct ExplicitAnimation {
    curve: ProgressCurve,
    scale: ValueScale,
}

impl ExplicitAnimation {
    /// Combines a curve with a value scale.
    #[must_use]
    pub const fn new(curve: ProgressCurve, scale: ValueScale) -> Self {
        Self { curve, scale }
    }

    /// Animates an opacity: the curve's value is used as is.
    #[must_use]
    pub const fn opacity(curve: ProgressCurve) -> Self {
        Self::new(curve, ValueScale::Identity)
    }

    /// Animates a rotation around the z axis of at most `max_angle` radians.
    #[must_use]
    pub const fn z_rotation(max_angle: f32, curve: ProgressCurve) -> Self {
        Self::new(curve, ValueScale::Linear(max_angle))
    }

    /// Returns the curve.
    #[must_use]
    pub const fn curve(&self) -> ProgressCurve {
        self.curve
    }

    /// Returns the value scale.
    #[must_use]
    pub const fn scale(&self) -> ValueScale {
        self.scale
    }

    /// Property value for the trigger's current progress.
    #[must_use]
    pub fn evaluate(&self, trigger: Trigger) -> f32 {
        self.scale.eval(self.curve.eval(trigger.progress()))
    }
}
