//! Wrapping flow layout: items run left to right and break onto a new row
//! when the container runs out of width, the way words wrap in a paragraph.
//!
//! The engine ([`compute`]) is a pure function of item sizes and
//! [`FlowLayoutParams`]. Two containers sit on top of it:
//!
//! - [`FlowLayout`] implements [`Layout`] for anonymous children, measuring
//!   each one at its ideal size.
//! - [`WrappingStack`] holds keyed items and answers "where does item `k`
//!   go" for a given container width.
//!
//! ```text
//! available_width
//! ├────────────────────────────┤
//! ┌──────┐ ┌──────────┐ ┌────┐
//! │  a   │ │    b     │ │ c  │     row 0
//! └──────┘ └──────────┘ └────┘
//!           ↕ row_spacing
//! ┌────────────────┐ ┌───┐
//! │       d        │ │ e │         row 1
//! └────────────────┘ └───┘
//! ```

use alloc::{
    collections::btree_map::{BTreeMap, Entry},
    format,
    vec,
    vec::Vec,
};
use core::{fmt::Debug, ops::Range};

use thiserror::Error;
use viewkit_core::{
    Layout, Measurement, Point, ProposalSize, Rect, SharedDiagnostics, Size, SubView,
    TracingDiagnostics, layout::non_negative,
};

/// Spacing used between items (and between rows) unless configured otherwise.
pub const DEFAULT_SPACING: f32 = 10.0;

// ============================================================================
// Configuration
// ============================================================================

/// Vertical placement of items that are shorter than their row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowAlignment {
    /// Align top edges with the top of the row.
    Top,
    /// Center each item vertically in the row.
    #[default]
    Center,
    /// Align bottom edges with the bottom of the row.
    Bottom,
}

impl RowAlignment {
    /// Vertical offset of an item of `height` inside a row of `row_height`.
    #[must_use]
    pub fn offset(self, row_height: f32, height: f32) -> f32 {
        match self {
            Self::Top => 0.0,
            Self::Center => (row_height - height) / 2.0,
            Self::Bottom => row_height - height,
        }
    }
}

/// Parameters of a flow layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowLayoutParams {
    item_spacing: f32,
    row_spacing: Option<f32>,
    row_alignment: RowAlignment,
    available_width: f32,
}

impl Default for FlowLayoutParams {
    fn default() -> Self {
        Self {
            item_spacing: DEFAULT_SPACING,
            row_spacing: None,
            row_alignment: RowAlignment::Center,
            available_width: f32::INFINITY,
        }
    }
}

impl FlowLayoutParams {
    /// Creates parameters with default spacing, centered rows and unbounded width.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the horizontal gap between neighbours in a row.
    ///
    /// Row spacing follows this value until [`row_spacing`](Self::row_spacing)
    /// is set explicitly.
    #[must_use]
    pub const fn item_spacing(mut self, spacing: f32) -> Self {
        self.item_spacing = spacing;
        self
    }

    /// Sets the vertical gap between rows.
    #[must_use]
    pub const fn row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = Some(spacing);
        self
    }

    /// Sets how items shorter than their row are positioned.
    #[must_use]
    pub const fn row_alignment(mut self, alignment: RowAlignment) -> Self {
        self.row_alignment = alignment;
        self
    }

    /// Sets the container width rows wrap at.
    #[must_use]
    pub const fn available_width(mut self, width: f32) -> Self {
        self.available_width = width;
        self
    }

    /// Horizontal gap actually used; negative and non-finite values become `0`.
    #[must_use]
    pub fn resolved_item_spacing(&self) -> f32 {
        non_negative(self.item_spacing)
    }

    /// Vertical gap actually used; falls back to the item spacing.
    #[must_use]
    pub fn resolved_row_spacing(&self) -> f32 {
        self.row_spacing
            .map_or_else(|| self.resolved_item_spacing(), non_negative)
    }

    /// Wrap width actually used. `NaN` counts as zero; infinity never wraps.
    #[must_use]
    pub fn resolved_available_width(&self) -> f32 {
        if self.available_width.is_nan() {
            0.0
        } else {
            self.available_width
        }
    }

    /// Returns the configured row alignment.
    #[must_use]
    pub const fn alignment(&self) -> RowAlignment {
        self.row_alignment
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Frames produced for a sequence of sizes, before keys are attached.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Arrangement {
    pub frames: Vec<Rect>,
    pub rows: Vec<Range<usize>>,
    pub content: Size,
}

/// Running state of the greedy pass.
struct RowCursor {
    row_start: usize,
    offset_x: f32,
    offset_y: f32,
    row_height: f32,
}

impl RowCursor {
    const fn new() -> Self {
        Self {
            row_start: 0,
            offset_x: 0.0,
            offset_y: 0.0,
            row_height: 0.0,
        }
    }

    /// Closes the row `row_start..end` and assigns frames to its items.
    fn flush(&mut self, end: usize, sizes: &[Size], params: &FlowLayoutParams, out: &mut Arrangement) {
        if self.row_start >= end {
            return;
        }

        out.content.width = out.content.width.max(self.offset_x);
        if !out.rows.is_empty() {
            self.offset_y += params.resolved_row_spacing();
        }

        let spacing = params.resolved_item_spacing();
        let mut x = 0.0;
        for index in self.row_start..end {
            let size = sizes[index];
            let y = self.offset_y + params.alignment().offset(self.row_height, size.height);
            out.frames[index] = Rect::new(Point::new(x, y), size);
            x += size.width + spacing;
        }

        out.rows.push(self.row_start..end);
        out.content.height = self.offset_y + self.row_height;
        self.offset_y += self.row_height;
        self.row_start = end;
        self.offset_x = 0.0;
        self.row_height = 0.0;
    }
}

/// Greedy single pass over `sizes`. Sizes must already be sanitized.
pub(crate) fn arrange(sizes: &[Size], params: &FlowLayoutParams) -> Arrangement {
    let mut out = Arrangement {
        frames: vec![Rect::default(); sizes.len()],
        rows: Vec::new(),
        content: Size::zero(),
    };
    let available = params.resolved_available_width();
    let spacing = params.resolved_item_spacing();
    let mut cursor = RowCursor::new();

    for (index, size) in sizes.iter().enumerate() {
        let row_is_empty = index == cursor.row_start;
        let delta = if row_is_empty { 0.0 } else { spacing } + size.width;

        // An empty row always accepts the item, so oversized items still get a row.
        if row_is_empty || cursor.offset_x + delta <= available {
            cursor.offset_x += delta;
            cursor.row_height = cursor.row_height.max(size.height);
        } else {
            cursor.flush(index, sizes, params, &mut out);
            cursor.offset_x = size.width;
            cursor.row_height = size.height;
        }
    }
    cursor.flush(sizes.len(), sizes, params, &mut out);

    tracing::trace!(
        items = sizes.len(),
        rows = out.rows.len(),
        content_width = out.content.width,
        content_height = out.content.height,
        "flow layout computed"
    );

    out
}

// ============================================================================
// Keyed items and results
// ============================================================================

/// An item to lay out: a unique key plus its measured size.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowItem<K> {
    /// Identity of the item; must be unique within one layout.
    pub key: K,
    /// Intrinsic size reported by the host's measurement pass.
    pub size: Size,
}

impl<K> FlowItem<K> {
    /// Creates an item of the given width and height.
    #[must_use]
    pub const fn new(key: K, width: f32, height: f32) -> Self {
        Self {
            key,
            size: Size::new(width, height),
        }
    }
}

/// An item together with the frame the layout assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem<K> {
    /// Key of the placed item.
    pub key: K,
    /// Frame relative to the top-left corner of the content bounds.
    pub frame: Rect,
}

/// Output of [`compute`].
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLayoutResult<K> {
    placements: Vec<PlacedItem<K>>,
    index: BTreeMap<K, usize>,
    rows: Vec<Range<usize>>,
    content: Size,
}

impl<K: Ord> FlowLayoutResult<K> {
    /// Returns the placement of the item with `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&PlacedItem<K>> {
        self.index.get(key).map(|&position| &self.placements[position])
    }

    /// Returns the frame of the item with `key`.
    #[must_use]
    pub fn frame(&self, key: &K) -> Option<Rect> {
        self.get(key).map(|placed| placed.frame)
    }
}

impl<K> FlowLayoutResult<K> {
    /// Placements in input order.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedItem<K>> {
        self.placements.iter()
    }

    /// Number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if nothing was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Rows as ranges of input positions, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Range<usize>] {
        &self.rows
    }

    /// Widest row extent, spacing included.
    #[must_use]
    pub const fn content_width(&self) -> f32 {
        self.content.width
    }

    /// Sum of row heights plus the spacing between rows.
    #[must_use]
    pub const fn content_height(&self) -> f32 {
        self.content.height
    }

    /// Bounding size of all placed items.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.content
    }
}

/// Errors reported by the flow layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError<K> {
    /// Two items share a key.
    #[error("duplicate item key {key:?} at index {duplicate} (first used at index {first})")]
    DuplicateKey {
        /// The repeated key.
        key: K,
        /// Position of the first item with this key.
        first: usize,
        /// Position of the offending item.
        duplicate: usize,
    },
}

fn index_keys<K: Ord + Clone>(items: &[FlowItem<K>]) -> Result<BTreeMap<K, usize>, FlowError<K>> {
    let mut index = BTreeMap::new();
    for (position, item) in items.iter().enumerate() {
        match index.entry(item.key.clone()) {
            Entry::Occupied(entry) => {
                return Err(FlowError::DuplicateKey {
                    key: item.key.clone(),
                    first: *entry.get(),
                    duplicate: position,
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(position);
            }
        }
    }
    Ok(index)
}

fn assemble<K: Clone>(
    items: &[FlowItem<K>],
    index: BTreeMap<K, usize>,
    params: &FlowLayoutParams,
) -> FlowLayoutResult<K> {
    let sizes: Vec<Size> = items.iter().map(|item| item.size.sanitized()).collect();
    let arrangement = arrange(&sizes, params);

    let placements = items
        .iter()
        .zip(arrangement.frames)
        .map(|(item, frame)| PlacedItem {
            key: item.key.clone(),
            frame,
        })
        .collect();

    FlowLayoutResult {
        placements,
        index,
        rows: arrangement.rows,
        content: arrangement.content,
    }
}

/// Lays out `items` into wrapping rows.
///
/// Every call recomputes from scratch.
///
/// # Errors
///
/// Returns [`FlowError::DuplicateKey`] if two items share a key; no partial
/// result is produced.
pub fn compute<K: Ord + Clone>(
    items: impl IntoIterator<Item = FlowItem<K>>,
    params: &FlowLayoutParams,
) -> Result<FlowLayoutResult<K>, FlowError<K>> {
    let items: Vec<FlowItem<K>> = items.into_iter().collect();
    let index = index_keys(&items)?;
    Ok(assemble(&items, index, params))
}

// ============================================================================
// Containers
// ============================================================================

/// [`Layout`] that wraps children into rows.
///
/// Children are measured at their ideal size; the flow never proposes a
/// narrower width to make an item fit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowLayout {
    params: FlowLayoutParams,
}

impl FlowLayout {
    /// Creates a flow layout. The wrap width comes from the parent, so any
    /// `available_width` in `params` is ignored.
    #[must_use]
    pub const fn new(params: FlowLayoutParams) -> Self {
        Self { params }
    }

    fn measure(children: &[&dyn SubView]) -> Vec<Size> {
        children
            .iter()
            .map(|child| child.size_that_fits(ProposalSize::UNSPECIFIED).sanitized())
            .collect()
    }
}

impl Layout for FlowLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        if children.is_empty() {
            return Size::zero();
        }
        let params = self
            .params
            .available_width(proposal.width_or(f32::INFINITY));
        arrange(&Self::measure(children), &params).content
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        let params = self.params.available_width(bounds.width());
        arrange(&Self::measure(children), &params)
            .frames
            .into_iter()
            .map(|frame| frame.offset(bounds.x(), bounds.y()))
            .collect()
    }
}

/// Keyed flow container: a list of items with unique keys that can be laid
/// out for any container width.
#[derive(Debug, Clone)]
pub struct WrappingStack<K> {
    items: Vec<FlowItem<K>>,
    index: BTreeMap<K, usize>,
    params: FlowLayoutParams,
    diagnostics: SharedDiagnostics,
}

impl<K: Ord + Clone + Debug> WrappingStack<K> {
    /// Creates a stack from `items`.
    ///
    /// # Errors
    ///
    /// Rejects duplicate keys with [`FlowError::DuplicateKey`], after
    /// reporting the mistake to `diagnostics`.
    pub fn new(
        items: impl IntoIterator<Item = FlowItem<K>>,
        params: FlowLayoutParams,
        diagnostics: SharedDiagnostics,
    ) -> Result<Self, FlowError<K>> {
        let items: Vec<FlowItem<K>> = items.into_iter().collect();
        let index = index_keys(&items).inspect_err(|error| report(&diagnostics, error))?;
        Ok(Self {
            items,
            index,
            params,
            diagnostics,
        })
    }

    /// Creates a stack that reports coding errors through `tracing`.
    ///
    /// # Errors
    ///
    /// Rejects duplicate keys with [`FlowError::DuplicateKey`].
    pub fn with_tracing(
        items: impl IntoIterator<Item = FlowItem<K>>,
        params: FlowLayoutParams,
    ) -> Result<Self, FlowError<K>> {
        Self::new(items, params, TracingDiagnostics::shared())
    }

    /// Appends an item.
    ///
    /// # Errors
    ///
    /// Rejects the item if its key is already present; the stack is unchanged.
    pub fn push(&mut self, item: FlowItem<K>) -> Result<(), FlowError<K>> {
        if let Some(&first) = self.index.get(&item.key) {
            let error = FlowError::DuplicateKey {
                key: item.key,
                first,
                duplicate: self.items.len(),
            };
            report(&self.diagnostics, &error);
            return Err(error);
        }
        self.index.insert(item.key.clone(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Removes the item with `key`, keeping the order of the rest.
    pub fn remove(&mut self, key: &K) -> Option<FlowItem<K>> {
        let position = self.index.remove(key)?;
        let removed = self.items.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Updates the measured size of the item with `key`.
    ///
    /// Returns false if no such item exists.
    pub fn set_size(&mut self, key: &K, size: Size) -> bool {
        match self.index.get(key) {
            Some(&position) => {
                self.items[position].size = size;
                true
            }
            None => false,
        }
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[FlowItem<K>] {
        &self.items
    }

    /// Lays the items out for a container of `available_width`.
    #[must_use]
    pub fn layout(&self, available_width: f32) -> FlowLayoutResult<K> {
        let params = self.params.available_width(available_width);
        assemble(&self.items, self.index.clone(), &params)
    }

    /// Lays the items out once the container width has been measured.
    #[must_use]
    pub fn layout_measured(&self, width: &Measurement<f32>) -> Option<FlowLayoutResult<K>> {
        width.value().map(|&width| self.layout(width))
    }
}

fn report<K: Debug>(diagnostics: &SharedDiagnostics, error: &FlowError<K>) {
    diagnostics.coding_error(&format!("WrappingStack expects items with unique keys: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::String, sync::Arc};
    use viewkit_core::RecordingDiagnostics;

    const EPSILON: f32 = 1e-4;

    fn items(sizes: &[(f32, f32)]) -> Vec<FlowItem<usize>> {
        sizes
            .iter()
            .enumerate()
            .map(|(key, &(width, height))| FlowItem::new(key, width, height))
            .collect()
    }

    fn params(width: f32, spacing: f32) -> FlowLayoutParams {
        FlowLayoutParams::new()
            .item_spacing(spacing)
            .row_spacing(spacing)
            .available_width(width)
    }

    #[test]
    fn wraps_third_item_to_second_row() {
        let result = compute(items(&[(40.0, 10.0); 3]), &params(100.0, 10.0)).unwrap();

        assert_eq!(result.rows(), &[0..2, 2..3]);
        assert_eq!(result.content_width(), 90.0);
        assert_eq!(result.frame(&1).unwrap().x(), 50.0);
        assert_eq!(result.frame(&2).unwrap().origin(), Point::new(0.0, 20.0));
        assert_eq!(result.content_height(), 30.0);
    }

    #[test]
    fn oversized_item_gets_its_own_row() {
        let result = compute(items(&[(50.0, 20.0)]), &params(10.0, 10.0)).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.content_width(), 50.0);
        assert_eq!(result.content_height(), 20.0);
    }

    #[test]
    fn empty_input_has_zero_bounds() {
        let result = compute(Vec::<FlowItem<usize>>::new(), &params(100.0, 10.0)).unwrap();

        assert!(result.is_empty());
        assert!(result.rows().is_empty());
        assert!(result.content_size().is_zero());
    }

    #[test]
    fn bottom_alignment_offsets() {
        let params = params(100.0, 0.0).row_alignment(RowAlignment::Bottom);
        let result = compute(items(&[(10.0, 10.0), (10.0, 30.0), (10.0, 20.0)]), &params).unwrap();

        let ys: Vec<f32> = result.iter().map(|placed| placed.frame.y()).collect();
        assert_eq!(ys, [20.0, 0.0, 10.0]);
    }

    #[test]
    fn center_alignment_shares_midpoint() {
        let params = params(1000.0, 4.0).row_alignment(RowAlignment::Center);
        let result = compute(items(&[(10.0, 7.0), (10.0, 31.0), (10.0, 12.5)]), &params).unwrap();

        for placed in result.iter() {
            assert!((placed.frame.mid_y() - 15.5).abs() < EPSILON);
        }
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let input = [
            FlowItem::new("a", 10.0, 10.0),
            FlowItem::new("b", 10.0, 10.0),
            FlowItem::new("a", 10.0, 10.0),
        ];
        let error = compute(input, &FlowLayoutParams::new()).unwrap_err();

        assert_eq!(
            error,
            FlowError::DuplicateKey {
                key: "a",
                first: 0,
                duplicate: 2
            }
        );
    }

    #[test]
    fn exact_fit_stays_on_row() {
        let result = compute(items(&[(45.0, 10.0), (45.0, 10.0)]), &params(100.0, 10.0)).unwrap();

        assert_eq!(result.rows(), &[0..2]);
        assert_eq!(result.content_width(), 100.0);
    }

    #[test]
    fn zero_width_container_stacks_items() {
        let result = compute(items(&[(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)]), &params(0.0, 2.0)).unwrap();

        assert_eq!(result.rows().len(), 3);
        assert_eq!(result.content_height(), 19.0);
    }

    #[test]
    fn negative_spacing_counts_as_zero() {
        let result = compute(items(&[(30.0, 10.0), (30.0, 10.0)]), &params(60.0, -8.0)).unwrap();

        assert_eq!(result.rows(), &[0..2]);
        assert_eq!(result.frame(&1).unwrap().x(), 30.0);
    }

    #[test]
    fn zero_size_items_take_part_in_spacing() {
        let sizes = [(0.0, 0.0), (0.0, 5.0), (10.0, 10.0)];

        let result = compute(items(&sizes), &params(30.0, 10.0)).unwrap();
        assert_eq!(result.rows(), &[0..3]);
        let xs: Vec<f32> = result.iter().map(|placed| placed.frame.x()).collect();
        assert_eq!(xs, [0.0, 10.0, 20.0]);
        assert_eq!(result.frame(&0).unwrap().y(), 5.0);
        assert_eq!(result.content_size(), Size::new(30.0, 10.0));

        let result = compute(items(&sizes), &params(20.0, 10.0)).unwrap();
        assert_eq!(result.rows(), &[0..2, 2..3]);
        assert_eq!(result.frame(&2).unwrap().origin(), Point::new(0.0, 15.0));
        assert_eq!(result.content_size(), Size::new(10.0, 25.0));
    }

    #[test]
    fn nan_available_width_wraps_every_item() {
        let params = params(f32::NAN, 0.0);
        assert_eq!(params.resolved_available_width(), 0.0);

        let result = compute(items(&[(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)]), &params).unwrap();
        assert_eq!(result.rows(), &[0..1, 1..2, 2..3]);
        assert_eq!(result.content_size(), Size::new(5.0, 15.0));
        assert!(result.iter().all(|placed| placed.frame.x() == 0.0));
    }

    #[test]
    fn row_spacing_defaults_to_item_spacing() {
        let params = FlowLayoutParams::new().item_spacing(6.0);
        assert_eq!(params.resolved_row_spacing(), 6.0);

        let params = params.row_spacing(2.0).item_spacing(9.0);
        assert_eq!(params.resolved_row_spacing(), 2.0);
    }

    #[test]
    fn wrapping_stack_reports_duplicates() {
        let recorder = Arc::new(RecordingDiagnostics::new());
        let result = WrappingStack::new(
            [FlowItem::new(1, 1.0, 1.0), FlowItem::new(1, 2.0, 2.0)],
            FlowLayoutParams::new(),
            recorder.clone(),
        );

        assert!(result.is_err());
        let messages: Vec<String> = recorder.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("duplicate item key 1"));
    }

    #[test]
    fn wrapping_stack_push_remove_keeps_lookup() {
        let recorder = Arc::new(RecordingDiagnostics::new());
        let mut stack = WrappingStack::new(
            [FlowItem::new('a', 20.0, 10.0), FlowItem::new('b', 20.0, 10.0)],
            FlowLayoutParams::new().item_spacing(0.0),
            recorder.clone(),
        )
        .unwrap();

        stack.push(FlowItem::new('c', 20.0, 10.0)).unwrap();
        assert!(stack.push(FlowItem::new('b', 1.0, 1.0)).is_err());
        assert_eq!(recorder.messages().len(), 1);

        assert_eq!(stack.remove(&'a').map(|item| item.key), Some('a'));
        let result = stack.layout(100.0);
        assert_eq!(result.frame(&'b').unwrap().x(), 0.0);
        assert_eq!(result.frame(&'c').unwrap().x(), 20.0);
        assert!(result.get(&'a').is_none());
    }

    #[test]
    fn wrapping_stack_with_tracing_still_rejects_duplicates() {
        let stack = WrappingStack::with_tracing(
            [FlowItem::new("tag", 30.0, 10.0), FlowItem::new("label", 30.0, 10.0)],
            FlowLayoutParams::new().item_spacing(0.0),
        )
        .unwrap();
        assert_eq!(stack.layout(60.0).rows(), &[0..2]);

        let duplicate = WrappingStack::with_tracing(
            [FlowItem::new("tag", 30.0, 10.0), FlowItem::new("tag", 30.0, 10.0)],
            FlowLayoutParams::new(),
        );
        assert!(matches!(duplicate, Err(FlowError::DuplicateKey { first: 0, duplicate: 1, .. })));
    }

    #[test]
    fn wrapping_stack_waits_for_measured_width() {
        let stack = WrappingStack::new(
            [FlowItem::new(0_u8, 10.0, 10.0)],
            FlowLayoutParams::new(),
            Arc::new(RecordingDiagnostics::new()),
        )
        .unwrap();
        let mut width = Measurement::new();

        assert!(stack.layout_measured(&width).is_none());
        width.report(Some(200.0));
        assert_eq!(stack.layout_measured(&width).unwrap().len(), 1);
    }
}
