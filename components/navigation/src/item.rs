//! The navigation item state machine.

use alloc::boxed::Box;
use core::{fmt, mem};

use futures::stream::BoxStream;
use viewkit_core::SharedDiagnostics;

use crate::state::{Cancelled, NavigationMessage, NavigationState, Transition};

/// Content of a navigation step: it produces values asynchronously, and each
/// value may open the step's push link.
pub trait NavigationContent {
    /// Value that drives the next step.
    type Value;

    /// Stream of values this content produces.
    ///
    /// `Err(Cancelled)` ends the stream.
    fn values(&self) -> BoxStream<'static, Result<Self::Value, Cancelled>>;

    /// Whether `value` should activate the push link.
    fn can_activate_link(&self, _value: &Self::Value) -> bool {
        true
    }
}

type SideEffect = Box<dyn FnMut() + Send>;

/// One step of a navigation flow.
///
/// The item is driven purely by [`NavigationMessage`]s: values from the
/// content's stream, cancellation of that stream, and requests to pop back.
pub struct NavigationItem<C: NavigationContent> {
    content: C,
    links_to_details: bool,
    state: NavigationState<C::Value>,
    finished: bool,
    side_effect: Option<SideEffect>,
    diagnostics: SharedDiagnostics,
}

impl<C> fmt::Debug for NavigationItem<C>
where
    C: NavigationContent + fmt::Debug,
    C::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationItem")
            .field("content", &self.content)
            .field("links_to_details", &self.links_to_details)
            .field("state", &self.state)
            .field("finished", &self.finished)
            .field("side_effect", &self.side_effect.is_some())
            .finish_non_exhaustive()
    }
}

impl<C: NavigationContent> NavigationItem<C> {
    /// Creates an idle item for `content`.
    pub fn new(content: C, diagnostics: SharedDiagnostics) -> Self {
        Self {
            content,
            links_to_details: false,
            state: NavigationState::Idle,
            finished: false,
            side_effect: None,
            diagnostics,
        }
    }

    /// Marks the link as leading to the detail column of a split view.
    #[must_use]
    pub const fn links_to_details(mut self, links_to_details: bool) -> Self {
        self.links_to_details = links_to_details;
        self
    }

    /// Runs `effect` after every value (and after cancellation).
    ///
    /// Used by flows that end at this step and only need to react.
    #[must_use]
    pub fn with_side_effect(mut self, effect: impl FnMut() + Send + 'static) -> Self {
        self.side_effect = Some(Box::new(effect));
        self
    }

    /// The content driving this item.
    pub const fn content(&self) -> &C {
        &self.content
    }

    /// Current state.
    pub const fn state(&self) -> &NavigationState<C::Value> {
        &self.state
    }

    /// Latest value, if any.
    pub const fn value(&self) -> Option<&C::Value> {
        self.state.value()
    }

    /// Whether the push link is active.
    pub const fn link_is_active(&self) -> bool {
        self.state.is_link_active()
    }

    /// Whether the link targets the detail column.
    pub const fn is_detail_link(&self) -> bool {
        self.links_to_details
    }

    /// Value the destination should be built from, while the link is active.
    pub const fn destination(&self) -> Option<&C::Value> {
        match &self.state {
            NavigationState::LinkActive(value) => Some(value),
            _ => None,
        }
    }

    /// Feeds one message to the state machine.
    ///
    /// Returns the transition, or `None` if the message was ignored.
    pub fn apply(&mut self, message: NavigationMessage<C::Value>) -> Option<Transition> {
        match message {
            NavigationMessage::Value(value) => {
                if self.finished {
                    self.diagnostics
                        .coding_error("navigation value arrived after its stream was cancelled");
                    return None;
                }
                let next = if self.content.can_activate_link(&value) {
                    NavigationState::LinkActive(value)
                } else {
                    NavigationState::ValueReceived(value)
                };
                let transition = self.transition(next);
                self.run_side_effect();
                Some(transition)
            }
            NavigationMessage::Cancelled => {
                if self.finished {
                    return None;
                }
                self.finished = true;
                let next = match self.state {
                    NavigationState::Idle => NavigationState::Idle,
                    _ => NavigationState::Dismissed(None),
                };
                let transition = self.transition(next);
                self.run_side_effect();
                Some(transition)
            }
            NavigationMessage::Deactivate => match mem::take(&mut self.state) {
                NavigationState::LinkActive(value) => {
                    Some(self.transition(NavigationState::Dismissed(Some(value))))
                }
                other => {
                    tracing::trace!(phase = ?other.phase(), "deactivate ignored: link not active");
                    self.state = other;
                    None
                }
            },
        }
    }

    /// Pops back to this item: deactivates its link.
    pub fn pop_to_self(&mut self) -> Option<Transition> {
        self.apply(NavigationMessage::Deactivate)
    }

    fn transition(&mut self, next: NavigationState<C::Value>) -> Transition {
        let transition = Transition {
            from: self.state.phase(),
            to: next.phase(),
        };
        self.state = next;
        tracing::debug!(from = ?transition.from, to = ?transition.to, "navigation transition");
        transition
    }

    fn run_side_effect(&mut self) {
        if let Some(effect) = self.side_effect.as_mut() {
            effect();
        }
    }
}
