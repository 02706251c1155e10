//! Master-detail split: a list on the leading edge and the selected item's
//! detail on the trailing edge, collapsing to one pane on narrow screens.

use alloc::vec::Vec;

use viewkit_core::{
    Layout, Point, ProposalSize, Rect, Size, StretchAxis, SubView, layout::non_negative,
};

/// Default width of the master pane in split mode.
pub const DEFAULT_MASTER_WIDTH: f32 = 375.0;

/// Thickness of the divider between the panes.
pub const DIVIDER_THICKNESS: f32 = 1.0;

/// Frames of the panes for one container size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasterDetailFrames {
    /// Frame of the master pane.
    pub master: Rect,
    /// Divider between the panes; only present in split mode.
    pub divider: Option<Rect>,
    /// Frame of the detail pane; absent while it is hidden.
    pub detail: Option<Rect>,
}

/// State and geometry of a master-detail container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MasterDetailLayout {
    master_width: f32,
    show_all: bool,
    show_detail: bool,
}

impl Default for MasterDetailLayout {
    fn default() -> Self {
        Self {
            master_width: DEFAULT_MASTER_WIDTH,
            show_all: false,
            show_detail: false,
        }
    }
}

impl MasterDetailLayout {
    /// Creates a collapsed layout with the default master width.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the master pane width used in split mode.
    #[must_use]
    pub const fn master_width(mut self, width: f32) -> Self {
        self.master_width = width;
        self
    }

    /// Shows both panes side by side (`true`) or one at a time (`false`).
    #[must_use]
    pub const fn show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    /// Sets whether the detail pane is presented in collapsed mode.
    pub const fn set_show_detail(&mut self, show: bool) {
        self.show_detail = show;
    }

    /// Whether the detail pane is currently visible.
    #[must_use]
    pub const fn is_detail_visible(&self) -> bool {
        self.show_all || self.show_detail
    }

    /// The detail pane needs a back button only when it covers the master.
    #[must_use]
    pub const fn shows_back_button(&self) -> bool {
        !self.show_all
    }

    /// Back action of the detail pane: hides it in collapsed mode.
    pub fn back(&mut self) {
        if self.show_detail {
            tracing::debug!("master-detail: dismissing detail pane");
        }
        self.show_detail = false;
    }

    /// Computes pane frames inside `container`.
    #[must_use]
    pub fn frames(&self, container: Rect) -> MasterDetailFrames {
        let width = non_negative(container.width());
        let height = non_negative(container.height());

        if self.show_all {
            let master_width = non_negative(self.master_width).min(width);
            let master = Rect::new(container.origin(), Size::new(master_width, height));
            let divider = Rect::new(
                Point::new(container.x() + master_width, container.y()),
                Size::new(DIVIDER_THICKNESS.min(width - master_width), height),
            );
            let detail = Rect::new(
                Point::new(container.x() + master_width, container.y()),
                Size::new(width - master_width, height),
            );
            MasterDetailFrames {
                master,
                divider: Some(divider),
                detail: Some(detail),
            }
        } else {
            let full = Rect::new(container.origin(), Size::new(width, height));
            MasterDetailFrames {
                master: full,
                divider: None,
                detail: self.show_detail.then_some(full),
            }
        }
    }
}

/// Children are `[master]` or `[master, detail]`; extra children get empty frames.
impl Layout for MasterDetailLayout {
    /// Takes the proposal on the axes the master stretches along and the
    /// master's ideal size on the others. Split mode always takes the proposed
    /// width, because the detail pane fills what the master leaves.
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        let (ideal, axis) = children.first().map_or((Size::zero(), StretchAxis::Both), |master| {
            (master.size_that_fits(ProposalSize::UNSPECIFIED), master.stretch_axis())
        });

        let width = if self.show_all || axis.stretches_horizontal() {
            proposal.width.unwrap_or(ideal.width)
        } else {
            ideal.width
        };
        let height = if axis.stretches_vertical() {
            proposal.height.unwrap_or(ideal.height)
        } else {
            ideal.height
        };
        Size::new(width, height)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        let frames = self.frames(bounds);
        let hidden = Rect::new(bounds.origin(), Size::zero());

        (0..children.len())
            .map(|index| match index {
                0 => frames.master,
                1 => frames.detail.unwrap_or(hidden),
                _ => hidden,
            })
            .collect()
    }

    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::Both
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Rect {
        Rect::new(Point::new(0.0, 20.0), Size::new(1024.0, 768.0))
    }

    #[test]
    fn split_mode_places_panes_side_by_side() {
        let layout = MasterDetailLayout::new().show_all(true);
        let frames = layout.frames(container());

        assert_eq!(frames.master, Rect::new(Point::new(0.0, 20.0), Size::new(375.0, 768.0)));
        assert_eq!(frames.divider.unwrap().x(), 375.0);
        let detail = frames.detail.unwrap();
        assert_eq!(detail.x(), 375.0);
        assert_eq!(detail.width(), 649.0);
        assert_eq!(detail.max_x(), 1024.0);
        assert!(!layout.shows_back_button());
    }

    #[test]
    fn collapsed_mode_covers_master_with_detail() {
        let mut layout = MasterDetailLayout::new();
        assert!(layout.frames(container()).detail.is_none());

        layout.set_show_detail(true);
        let frames = layout.frames(container());
        assert_eq!(frames.detail, Some(frames.master));
        assert!(frames.divider.is_none());
        assert!(layout.shows_back_button());

        layout.back();
        assert!(!layout.is_detail_visible());
    }

    #[test]
    fn master_width_is_clamped_to_container() {
        let layout = MasterDetailLayout::new().show_all(true).master_width(500.0);
        let frames = layout.frames(Rect::from_size(Size::new(300.0, 100.0)));

        assert_eq!(frames.master.width(), 300.0);
        assert_eq!(frames.detail.unwrap().width(), 0.0);
        assert_eq!(frames.divider.unwrap().width(), 0.0);
    }

    struct Pane {
        size: Size,
        axis: StretchAxis,
    }

    impl SubView for Pane {
        fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
            self.size
        }

        fn stretch_axis(&self) -> StretchAxis {
            self.axis
        }
    }

    #[test]
    fn sizing_follows_master_stretch_axis() {
        let proposal = ProposalSize::new(1024.0, 768.0);
        let size = |layout: &MasterDetailLayout, axis| {
            let master = Pane { size: Size::new(200.0, 300.0), axis };
            let children: [&dyn SubView; 1] = [&master];
            layout.size_that_fits(proposal, &children)
        };
        let collapsed = MasterDetailLayout::new();

        assert_eq!(size(&collapsed, StretchAxis::None), Size::new(200.0, 300.0));
        assert_eq!(size(&collapsed, StretchAxis::Horizontal), Size::new(1024.0, 300.0));
        assert_eq!(size(&collapsed, StretchAxis::Vertical), Size::new(200.0, 768.0));
        assert_eq!(size(&collapsed, StretchAxis::Both), Size::new(1024.0, 768.0));

        let split = MasterDetailLayout::new().show_all(true);
        assert_eq!(size(&split, StretchAxis::None), Size::new(1024.0, 300.0));
    }

    #[test]
    fn sizing_without_children_takes_proposal() {
        let layout = MasterDetailLayout::new();

        assert_eq!(
            layout.size_that_fits(ProposalSize::new(320.0, 480.0), &[]),
            Size::new(320.0, 480.0)
        );
        assert_eq!(layout.size_that_fits(ProposalSize::UNSPECIFIED, &[]), Size::zero());
    }
}
