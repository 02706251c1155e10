//! A selectable collection laid out as a grid of equally sized cells.

use alloc::{vec, vec::Vec};
use core::num::NonZeroUsize;

use viewkit_core::{Layout, Point, ProposalSize, Rect, Size, SubView, layout::non_negative};

/// Smallest side of a comfortably tappable cell, in points.
pub const MIN_TAPPABLE_SIDE: f32 = 44.0;

/// How wide each cell of a collection is.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellWidth {
    /// Every cell is exactly this wide.
    Fixed(f32),
    /// Cells are at least this wide and grow to share the available width.
    Min(f32),
}

impl Default for CellWidth {
    fn default() -> Self {
        Self::Min(MIN_TAPPABLE_SIDE)
    }
}

/// Grid layout behind a collection view.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectionLayout {
    cell_width: CellWidth,
    column_count: Option<NonZeroUsize>,
    column_spacing: f32,
    row_spacing: f32,
}

#[allow(clippy::cast_precision_loss)]
impl CollectionLayout {
    /// Creates a layout with adaptive columns of at least [`MIN_TAPPABLE_SIDE`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cell width policy.
    #[must_use]
    pub const fn cell_width(mut self, cell_width: CellWidth) -> Self {
        self.cell_width = cell_width;
        self
    }

    /// Fixes the number of columns instead of fitting as many as possible.
    #[must_use]
    pub const fn column_count(mut self, count: NonZeroUsize) -> Self {
        self.column_count = Some(count);
        self
    }

    /// Sets the gap between columns.
    #[must_use]
    pub const fn column_spacing(mut self, spacing: f32) -> Self {
        self.column_spacing = spacing;
        self
    }

    /// Sets the gap between rows.
    #[must_use]
    pub const fn row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = spacing;
        self
    }

    fn base_width(&self) -> f32 {
        match self.cell_width {
            CellWidth::Fixed(width) | CellWidth::Min(width) => non_negative(width),
        }
    }

    /// Number of columns for a container of `available_width`.
    ///
    /// Without an explicit count this is the largest `c` with
    /// `c * cell + (c - 1) * spacing <= available_width`, and never less than one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn columns(&self, available_width: f32) -> usize {
        if let Some(count) = self.column_count {
            return count.get();
        }
        let spacing = non_negative(self.column_spacing);
        let stride = self.base_width() + spacing;
        if stride <= 0.0 || !available_width.is_finite() {
            return 1;
        }
        let fitting = ((non_negative(available_width) + spacing) / stride).floor();
        (fitting as usize).max(1)
    }

    /// Width each cell receives in a container of `available_width`.
    #[must_use]
    pub fn cell_width_for(&self, available_width: f32) -> f32 {
        match self.cell_width {
            CellWidth::Fixed(width) => non_negative(width),
            CellWidth::Min(min) => {
                let columns = self.columns(available_width) as f32;
                let spacing = non_negative(self.column_spacing) * (columns - 1.0);
                let shared = if available_width.is_finite() {
                    (available_width - spacing) / columns
                } else {
                    0.0
                };
                non_negative(min).max(shared)
            }
        }
    }

    /// Width the grid content occupies, for fixed-width cells.
    ///
    /// Returns `None` for [`CellWidth::Min`], where the grid fills its container.
    #[must_use]
    pub fn content_width(&self, available_width: f32) -> Option<f32> {
        match self.cell_width {
            CellWidth::Fixed(width) => {
                let columns = self.columns(available_width) as f32;
                Some(columns * non_negative(width) + (columns - 1.0) * non_negative(self.column_spacing))
            }
            CellWidth::Min(_) => None,
        }
    }

    fn row_heights(&self, cell_width: f32, columns: usize, children: &[&dyn SubView]) -> Vec<f32> {
        let proposal = ProposalSize::new(cell_width, None);
        children
            .chunks(columns)
            .map(|row| {
                row.iter()
                    .map(|child| child.size_that_fits(proposal).height)
                    .filter(|height| height.is_finite())
                    .fold(0.0, f32::max)
            })
            .collect()
    }
}

#[allow(clippy::cast_precision_loss)]
impl Layout for CollectionLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        if children.is_empty() {
            return Size::zero();
        }
        let available = proposal.width_or(f32::INFINITY);
        let columns = self.columns(available);
        let cell_width = self.cell_width_for(available);
        let heights = self.row_heights(cell_width, columns, children);

        let height = heights.iter().sum::<f32>()
            + non_negative(self.row_spacing) * heights.len().saturating_sub(1) as f32;
        let width = self.content_width(available).unwrap_or_else(|| {
            proposal.width.filter(|width| width.is_finite()).unwrap_or_else(|| {
                columns as f32 * cell_width
                    + (columns as f32 - 1.0) * non_negative(self.column_spacing)
            })
        });

        Size::new(width, height)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        if children.is_empty() {
            return Vec::new();
        }
        if !bounds.width().is_finite() {
            return vec![Rect::new(bounds.origin(), Size::zero()); children.len()];
        }

        let columns = self.columns(bounds.width());
        let cell_width = self.cell_width_for(bounds.width());
        let heights = self.row_heights(cell_width, columns, children);
        let proposal = ProposalSize::new(cell_width, None);
        let column_spacing = non_negative(self.column_spacing);

        let mut placements = Vec::with_capacity(children.len());
        let mut cursor_y = bounds.y();

        for (row, row_height) in children.chunks(columns).zip(heights) {
            let mut cursor_x = bounds.x();
            for child in row {
                let measured = child.size_that_fits(proposal);
                let width = if measured.width.is_finite() { measured.width.min(cell_width) } else { cell_width };
                let height = if measured.height.is_finite() { measured.height } else { row_height };

                // Center each child inside its cell.
                let x = cursor_x + (cell_width - width) / 2.0;
                let y = cursor_y + (row_height - height) / 2.0;
                placements.push(Rect::new(Point::new(x, y), Size::new(width, height)));

                cursor_x += cell_width + column_spacing;
            }
            cursor_y += row_height + non_negative(self.row_spacing);
        }

        placements
    }
}

// ============================================================================
// Cells and selection
// ============================================================================

/// A value with a stable identity.
pub trait Identifiable {
    /// Identity type.
    type Id: PartialEq;

    /// Returns the identity of this value.
    fn id(&self) -> Self::Id;
}

/// A cell of a collection: shows one value and knows whether it is selected.
pub trait CollectionCell {
    /// The value shown by the cell.
    type Item: Identifiable;

    /// The value this cell shows.
    fn value(&self) -> &Self::Item;

    /// The currently selected value of the collection, if any.
    fn selection(&self) -> Option<&Self::Item>;

    /// Whether this cell's value is the selected one.
    fn is_selected(&self) -> bool {
        self.selection()
            .is_some_and(|selected| selected.id() == self.value().id())
    }
}

/// Single selection shared by the cells of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    selected: Option<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<T: Identifiable + Clone> Selection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Selects `value`, replacing any previous selection.
    pub fn select(&mut self, value: &T) {
        self.selected = Some(value.clone());
    }

    /// Selects `value`, or clears the selection if `value` is already selected.
    pub fn toggle(&mut self, value: &T) {
        if self.is_selected(value) {
            self.selected = None;
        } else {
            self.select(value);
        }
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Returns the selected value.
    #[must_use]
    pub const fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Whether `value` is the selected one.
    #[must_use]
    pub fn is_selected(&self, value: &T) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|selected| selected.id() == value.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Cell {
        height: f32,
    }

    impl SubView for Cell {
        fn size_that_fits(&self, proposal: ProposalSize) -> Size {
            Size::new(proposal.width_or(10.0), self.height)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Tag {
        id: u32,
        label: &'static str,
    }

    impl Identifiable for Tag {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    struct TagCell<'a> {
        value: Tag,
        selection: &'a Selection<Tag>,
    }

    impl CollectionCell for TagCell<'_> {
        type Item = Tag;

        fn value(&self) -> &Tag {
            &self.value
        }

        fn selection(&self) -> Option<&Tag> {
            self.selection.selected()
        }
    }

    #[test]
    fn fixed_cells_fit_as_many_columns_as_possible() {
        let layout = CollectionLayout::new()
            .cell_width(CellWidth::Fixed(50.0))
            .column_spacing(10.0);

        // c * 50 + (c - 1) * 10 <= 200  =>  c = 3
        assert_eq!(layout.columns(200.0), 3);
        assert_eq!(layout.content_width(200.0), Some(170.0));
        assert_eq!(layout.columns(20.0), 1);
    }

    #[test]
    fn explicit_column_count_wins() {
        let layout = CollectionLayout::new()
            .cell_width(CellWidth::Fixed(40.0))
            .column_count(NonZeroUsize::new(2).unwrap())
            .column_spacing(5.0);

        assert_eq!(layout.columns(1000.0), 2);
        assert_eq!(layout.content_width(1000.0), Some(85.0));
    }

    #[test]
    fn min_cells_share_remaining_width() {
        let layout = CollectionLayout::new().cell_width(CellWidth::Min(44.0));

        assert_eq!(layout.columns(100.0), 2);
        assert_eq!(layout.cell_width_for(100.0), 50.0);
        assert_eq!(layout.content_width(100.0), None);
    }

    #[test]
    fn grid_height_sums_tallest_per_row() {
        let layout = CollectionLayout::new()
            .cell_width(CellWidth::Fixed(50.0))
            .column_count(NonZeroUsize::new(2).unwrap())
            .row_spacing(4.0);
        let (a, b, c) = (Cell { height: 10.0 }, Cell { height: 30.0 }, Cell { height: 20.0 });
        let children: Vec<&dyn SubView> = vec![&a, &b, &c];

        let size = layout.size_that_fits(ProposalSize::new(200.0, None), &children);
        assert_eq!(size, Size::new(100.0, 54.0));

        let rects = layout.place(Rect::from_size(size), &children);
        assert_eq!(rects[0].origin(), Point::new(0.0, 10.0));
        assert_eq!(rects[1].origin(), Point::new(50.0, 0.0));
        assert_eq!(rects[2].origin(), Point::new(0.0, 34.0));
    }

    #[test]
    fn selection_drives_cell_state() {
        let first = Tag { id: 1, label: "one" };
        let second = Tag { id: 2, label: "two" };
        let mut selection = Selection::new();
        selection.select(&first);

        let cell = TagCell { value: first.clone(), selection: &selection };
        assert!(cell.is_selected());
        let other = TagCell { value: second.clone(), selection: &selection };
        assert!(!other.is_selected());
        assert_eq!(other.value().label, "two");

        selection.toggle(&first);
        assert!(selection.selected().is_none());
        selection.toggle(&second);
        assert!(selection.is_selected(&second));
        selection.clear();
        assert_eq!(selection, Selection::default());
    }
}
