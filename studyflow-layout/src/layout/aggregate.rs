//! Size aggregation for a packed layout.

use crate::primitives::Size;

use super::rows::Row;

/// Bounding size of the packed rows.
///
/// The width is always the container budget, never the content width.
/// The height is the sum of row heights plus `spacing` between rows.
pub fn total_size(rows: &[Row], spacing: f32, budget: f32) -> Size {
    if rows.is_empty() {
        return Size::new(budget, 0.0);
    }

    let rows_height: f32 = rows.iter().map(|row| row.height).sum();
    if rows.len() == 1 {
        return Size::new(budget, rows_height);
    }
    let gaps = spacing * (rows.len() - 1) as f32;
    Size::new(budget, rows_height + gaps)
}
