//! Flow Layout - wrapping rows of items.
//!
//! Items are laid out horizontally until the next one would exceed the
//! container width, then wrap to the next row. A pass runs three steps in
//! order: row packing, positioning and size aggregation. Each pass measures
//! every item once and recomputes everything from scratch.

use crate::primitives::{Point, Rect, Size, finite_non_negative};

use super::aggregate::total_size;
use super::measure::{Measure, resolve_sizes};
use super::placement::place_rows;
use super::proposal::ProposedSize;
use super::rows::{Row, pack_rows};

/// Spacing used when none is configured.
pub const DEFAULT_SPACING: f32 = 8.0;

// =========================================================================
// FlowLayout
// =========================================================================

/// A flow layout that wraps items like CSS `flex-wrap: wrap`.
///
/// The same spacing is applied between items in a row and between rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLayout {
    spacing: f32,
}

impl FlowLayout {
    /// Create a flow layout with the given spacing.
    ///
    /// Negative or non-finite spacing becomes zero.
    pub fn new(spacing: f32) -> Self {
        Self {
            spacing: finite_non_negative(spacing),
        }
    }

    /// Set spacing between items and rows.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = finite_non_negative(spacing);
        self
    }

    pub fn spacing_value(&self) -> f32 {
        self.spacing
    }

    /// Run one layout pass.
    ///
    /// Without a width budget the pass short-circuits to an empty result and
    /// no item is measured.
    pub fn layout<M: Measure>(
        &self,
        items: &[M],
        proposal: ProposedSize,
        origin: Point,
    ) -> FlowLayoutResult {
        let Some(budget) = proposal.budget() else {
            tracing::debug!(items = items.len(), "flow layout without width budget");
            return FlowLayoutResult::empty();
        };

        let item_proposal = ProposedSize::width(budget);
        let sizes = resolve_sizes(items, item_proposal);
        let rows = pack_rows(&sizes, self.spacing, budget);
        let placements = place_rows(&rows, &sizes, self.spacing, origin);
        let total_size = total_size(&rows, self.spacing, budget);

        tracing::debug!(
            items = items.len(),
            budget,
            rows = rows.len(),
            width = total_size.width,
            height = total_size.height,
            "flow layout pass"
        );

        FlowLayoutResult {
            total_size,
            rows,
            placements,
        }
    }

    /// Total size for a proposal, without keeping the placements.
    pub fn size_that_fits<M: Measure>(&self, items: &[M], proposal: ProposedSize) -> Size {
        self.layout(items, proposal, Point::ORIGIN).total_size
    }

    /// Calculate the total height needed for a given width.
    pub fn height_for_width<M: Measure>(&self, items: &[M], width: f32) -> f32 {
        self.size_that_fits(items, ProposedSize::width(width)).height
    }

    /// Width needed to keep every item on a single row.
    ///
    /// Hosts with an unbounded width can use this to pick a budget.
    pub fn ideal_width<M: Measure>(&self, items: &[M]) -> f32 {
        let sizes = resolve_sizes(items, ProposedSize::UNSPECIFIED);
        if sizes.is_empty() {
            return 0.0;
        }
        let content: f32 = sizes.iter().map(|s| s.width).sum();
        content + self.spacing * (sizes.len() - 1) as f32
    }
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self::new(DEFAULT_SPACING)
    }
}

// =========================================================================
// FlowLayoutResult
// =========================================================================

/// The outcome of one layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowLayoutResult {
    /// Bounding size of the packed layout.
    pub total_size: Size,
    /// Packed rows, top to bottom.
    pub rows: Vec<Row>,
    /// Placement rectangle per item index.
    pub placements: Vec<Rect>,
}

impl FlowLayoutResult {
    /// The result for an unbounded width: no rows, zero size, no placements.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn placement(&self, index: usize) -> Option<Rect> {
        self.placements.get(index).copied()
    }

    /// Row index holding item `index`.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        // Rows are contiguous and ordered, so binary search on the start index.
        let pos = self.rows.partition_point(|row| row.items.start <= index);
        let row_index = pos.checked_sub(1)?;
        self.rows[row_index].contains(index).then_some(row_index)
    }

    /// First item whose placement contains `point`.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.placements.iter().position(|rect| rect.contains(point))
    }
}

// =========================================================================
// Tests
// =========================================================================
