//! Reporting a measured value up to the container that needs it.
//!
//! A container that must know its own width before it can lay out its
//! children (a wrapping stack, a collection grid) renders an invisible
//! measuring view whose reported size ends up in a [`Measurement`]. Several
//! of them may report during one pass; the first reported value wins.

/// A value reported by a measuring view, reduced "first reported wins".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement<T> {
    value: Option<T>,
}

impl<T> Default for Measurement<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> Measurement<T> {
    /// Creates an empty measurement.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Records `value` unless a value was already reported.
    ///
    /// Returns `true` when the report was kept.
    pub fn report(&mut self, value: Option<T>) -> bool {
        if self.value.is_some() || value.is_none() {
            return false;
        }
        self.value = value;
        true
    }

    /// Returns the reported value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Takes the reported value, leaving the measurement empty for the next pass.
    pub const fn take(&mut self) -> Option<T> {
        self.value.take()
    }
}
