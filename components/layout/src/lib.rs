#![no_std]
//! Layout containers for `viewkit`.
//!
//! Every container here is a pure function of measured child sizes:
//!
//! - [`flow`]: items wrap into rows like words in a paragraph
//!   ([`flow::compute`], [`FlowLayout`], [`WrappingStack`]),
//! - [`collection`]: a selectable grid of equally sized cells,
//! - [`master_detail`]: a list/detail split that collapses on narrow screens.
//!
//! # Example
//!
//! ```rust
//! use viewkit_layout::flow::{self, FlowItem, FlowLayoutParams};
//!
//! let params = FlowLayoutParams::new().item_spacing(10.0).available_width(100.0);
//! let items = [
//!     FlowItem::new("a", 40.0, 20.0),
//!     FlowItem::new("b", 40.0, 20.0),
//!     FlowItem::new("c", 40.0, 20.0),
//! ];
//! let layout = flow::compute(items, &params).expect("keys are unique");
//!
//! assert_eq!(layout.rows().len(), 2);
//! assert_eq!(layout.content_width(), 90.0);
//! ```

extern crate alloc;
#[cfg(test)]
extern crate std;

pub use viewkit_core::layout::*;

pub mod collection;
pub mod flow;
pub mod master_detail;

pub use collection::{CellWidth, CollectionCell, CollectionLayout, Identifiable, Selection};
pub use flow::{FlowError, FlowItem, FlowLayout, FlowLayoutParams, RowAlignment, WrappingStack};
pub use master_detail::{MasterDetailFrames, MasterDetailLayout};
