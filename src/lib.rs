#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod logging;

pub use viewkit_animation as animation;
pub use viewkit_layout as layout;
pub use viewkit_navigation as navigation;

#[doc(inline)]
pub use viewkit_core::{
    Diagnostics, Measurement, Point, ProposalSize, Rect, SharedDiagnostics, Size,
    TracingDiagnostics,
};

pub mod prelude {
    //! Commonly used types, importable in one line.
    //!
    //! ```rust
    //! use viewkit::prelude::*;
    //!
    //! let params = FlowLayoutParams::new().available_width(320.0);
    //! let layout = flow::compute([FlowItem::new(1, 80.0, 24.0)], &params).unwrap();
    //! assert_eq!(layout.content_size(), Size::new(80.0, 24.0));
    //! ```
    pub use viewkit_animation::{ExplicitAnimation, ProgressCurve, Trigger, ValueScale};
    pub use viewkit_core::{
        Diagnostics, Layout, Measurement, Point, ProposalSize, Rect, SharedDiagnostics, Size,
        SubView, TracingDiagnostics,
    };
    pub use viewkit_layout::{
        CellWidth, CollectionCell, CollectionLayout, FlowError, FlowItem, FlowLayout,
        FlowLayoutParams, Identifiable, MasterDetailLayout, RowAlignment, Selection,
        WrappingStack, flow,
    };
    pub use viewkit_navigation::{
        NavigationContent, NavigationHandle, NavigationItem, NavigationMessage, NavigationState,
    };
}
