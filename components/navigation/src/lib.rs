//! Push-link navigation for `viewkit`.
//!
//! A navigation step ([`NavigationItem`]) waits for its content to produce a
//! value. When one arrives the step decides whether to activate its push
//! link, and the destination can later pop back to it. All of this is an
//! explicit state machine fed by [`NavigationMessage`]s:
//!
//! ```text
//!            Value(v), can activate            Deactivate
//!   Idle ─────────────────────────▶ LinkActive ───────────▶ Dismissed
//!     │                                ▲                        │
//!     │ Value(v), refused              │ Value(v)               │
//!     ▼                                │                        │
//!   ValueReceived ─────────────────────┘◀───────────────────────┘
//! ```
//!
//! `Cancelled` ends the value stream: the value is dropped and later values
//! are reported as coding errors through the item's diagnostics.
//!
//! The [`driver`] module connects an item to its value stream and to the
//! handles used to pop back.
extern crate alloc;

pub mod driver;
pub mod item;
pub mod state;

pub use driver::{NavigationHandle, NavigationMailbox, channel, forward_values};
pub use item::{NavigationContent, NavigationItem};
pub use state::{
    Cancelled, NavigationError, NavigationMessage, NavigationPhase, NavigationState, Transition,
};
