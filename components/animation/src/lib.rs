//! Explicit animations driven by a counter instead of a clock.
//!
//! A [`Trigger`] is a number the host animates: each call to
//! [`Trigger::animate`] adds one, and the host's own timing interpolates the
//! value from `n` to `n + 1`. The fractional part of the interpolated value is
//! the progress of one run. A [`ProgressCurve`] shapes that progress and a
//! [`ValueScale`] maps the shaped value onto the animated property.
//!
//! ```text
//! trigger 2.0 ──animate──▶ 3.0        (host interpolates 2.0 → 3.0)
//!           │
//!           ▼  fractional part
//!     progress 0‥1 ──ProgressCurve──▶ 0‥1 ──ValueScale──▶ opacity / angle
//! ```
//!
//! ```rust
//! use viewkit_animation::{ExplicitAnimation, ProgressCurve, Trigger};
//!
//! let blink = ExplicitAnimation::opacity(ProgressCurve::ONE_ZERO_ONE_3);
//! let mut trigger = Trigger::new();
//! trigger.animate();
//! assert_eq!(trigger.value(), 1.0);
//!
//! // Halfway through the run the view is fully transparent.
//! trigger.set_value(0.5);
//! assert_eq!(blink.evaluate(trigger), 0.0);
//! ```

pub mod curve;
pub mod trigger;

pub use curve::{CurveFn, ProgressCurve, ValueScale};
pub use trigger::{ExplicitAnimation, Trigger};
