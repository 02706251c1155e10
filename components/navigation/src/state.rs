//! States and messages of a navigation item.

use thiserror::Error;

/// The phases a navigation item moves through, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationPhase {
    /// No value has arrived yet.
    Idle,
    /// A value arrived but the content refused to activate the link for it.
    ValueReceived,
    /// The link is active and its destination is shown.
    LinkActive,
    /// The link was active and has been popped, or the value stream was cancelled.
    Dismissed,
}

/// State of a navigation item, carrying the latest value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationState<V> {
    /// No value has arrived yet.
    Idle,
    /// A value arrived; the link stays inactive.
    ValueReceived(V),
    /// The link is active and shows a destination built from this value.
    LinkActive(V),
    /// The destination was dismissed. The value is kept unless the stream was cancelled.
    Dismissed(Option<V>),
}

impl<V> Default for NavigationState<V> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<V> NavigationState<V> {
    /// Returns the phase of this state.
    #[must_use]
    pub const fn phase(&self) -> NavigationPhase {
        match self {
            Self::Idle => NavigationPhase::Idle,
            Self::ValueReceived(_) => NavigationPhase::ValueReceived,
            Self::LinkActive(_) => NavigationPhase::LinkActive,
            Self::Dismissed(_) => NavigationPhase::Dismissed,
        }
    }

    /// The latest value, if one is held.
    #[must_use]
    pub const fn value(&self) -> Option<&V> {
        match self {
            Self::Idle | Self::Dismissed(None) => None,
            Self::ValueReceived(value) | Self::LinkActive(value) | Self::Dismissed(Some(value)) => {
                Some(value)
            }
        }
    }

    /// Whether the push link is active.
    #[must_use]
    pub const fn is_link_active(&self) -> bool {
        matches!(self, Self::LinkActive(_))
    }
}

/// Inputs of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationMessage<V> {
    /// The content's value stream produced a value.
    Value(V),
    /// The content's value stream was cancelled; no further values follow.
    Cancelled,
    /// The destination asked to pop back to this item.
    Deactivate,
}

/// A state change produced by one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Phase before the message.
    pub from: NavigationPhase,
    /// Phase after the message.
    pub to: NavigationPhase,
}

/// Marker error a value stream yields when it is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[error("navigation value stream was cancelled")]
pub struct Cancelled;

/// Errors returned by navigation handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The item's mailbox was dropped; nobody processes messages anymore.
    #[error("navigation item is no longer running")]
    Closed,
}
