#![no_std]
//! Shared foundation for `viewkit` components.
//!
//! - [`layout`]: geometry types plus the [`Layout`]/[`SubView`] contract a
//!   host toolkit drives during its measure and place passes.
//! - [`measurement`]: first-value-wins reduction for measured sizes.
//! - [`diagnostics`]: the injected sink components report coding errors to.

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod diagnostics;
pub mod layout;
pub mod measurement;

pub use diagnostics::{Diagnostics, SharedDiagnostics, TracingDiagnostics};
#[cfg(any(test, feature = "std"))]
pub use diagnostics::RecordingDiagnostics;
pub use layout::*;
pub use measurement::Measurement;
