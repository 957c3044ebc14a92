//! Row packing: greedy left-to-right assignment of items to rows.

use std::ops::Range;

use crate::primitives::Size;

/// A packed row: a contiguous, non-empty run of item indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Item indices in this row, in original order.
    pub items: Range<usize>,
    /// Packed width including inter-item spacing.
    pub width: f32,
    /// Tallest item in the row.
    pub height: f32,
}

impl Row {
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Produced rows are never empty; this exists for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.items.contains(&index)
    }

    #[inline]
    pub fn indices(&self) -> Range<usize> {
        self.items.clone()
    }
}

/// Pack items into rows that fit `budget`.
///
/// An item wraps to a new row only when the current row already has width
/// and adding `spacing + item.width` would strictly exceed the budget. An
/// exact fit stays on the current row, and an item wider than the budget is
/// placed alone on its own row.
pub fn pack_rows(sizes: &[Size], spacing: f32, budget: f32) -> Vec<Row> {
    let mut rows = Vec::new();

    let mut row_start = 0usize;
    let mut row_width = 0.0f32;
    let mut row_height = 0.0f32;

    for (index, size) in sizes.iter().enumerate() {
        if row_width > 0.0 && row_width + spacing + size.width > budget {
            rows.push(Row {
                items: row_start..index,
                width: row_width,
                height: row_height,
            });
            row_start = index;
            row_width = 0.0;
            row_height = 0.0;
        }

        if index > row_start {
            row_width += spacing;
        }
        row_width += size.width;
        row_height = row_height.max(size.height);
    }

    if row_start < sizes.len() {
        rows.push(Row {
            items: row_start..sizes.len(),
            width: row_width,
            height: row_height,
        });
    }

    rows
}
