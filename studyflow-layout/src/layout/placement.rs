//! Positioning: turn packed rows into absolute placement rectangles.

use crate::primitives::{Point, Rect, Size};

use super::rows::Row;

/// Place every item of `rows` relative to `origin`.
///
/// Returns one rectangle per item index. Each row starts at `origin.x`; each
/// row after the first starts below the previous row's height plus `spacing`.
pub fn place_rows(rows: &[Row], sizes: &[Size], spacing: f32, origin: Point) -> Vec<Rect> {
    let mut placements = vec![Rect::ZERO; sizes.len()];

    let mut y = origin.y;
    for (row_index, row) in rows.iter().enumerate() {
        if row_index > 0 {
            y += rows[row_index - 1].height + spacing;
        }

        let mut x = origin.x;
        for index in row.indices() {
            let size = sizes[index];
            placements[index] = Rect::from_origin_size(Point::new(x, y), size);
            x += size.width + spacing;
        }
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::rows::pack_rows;

    #[test]
    fn test_single_row_advances_x() {
        let sizes = vec![Size::new(10.0, 5.0), Size::new(20.0, 8.0)];
        let rows = pack_rows(&sizes, 4.0, 100.0);
        let rects = place_rows(&rows, &sizes, 4.0, Point::ORIGIN);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 10.0, 5.0));
        assert_eq!(rects[1], Rect::new(14.0, 0.0, 20.0, 8.0));
    }

    #[test]
    fn test_rows_advance_y_by_previous_height() {
        let sizes = vec![
            Size::new(10.0, 10.0),
            Size::new(10.0, 20.0),
            Size::new(10.0, 10.0),
        ];
        let rows = pack_rows(&sizes, 5.0, 25.0);
        let rects = place_rows(&rows, &sizes, 5.0, Point::ORIGIN);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(rects[1], Rect::new(15.0, 0.0, 10.0, 20.0));
        assert_eq!(rects[2], Rect::new(0.0, 25.0, 10.0, 10.0));
    }

    #[test]
    fn test_origin_offsets_every_row() {
        let sizes = vec![Size::new(30.0, 10.0), Size::new(30.0, 10.0)];
        let rows = pack_rows(&sizes, 0.0, 40.0);
        let rects = place_rows(&rows, &sizes, 0.0, Point::new(7.0, 3.0));
        assert_eq!(rects[0], Rect::new(7.0, 3.0, 30.0, 10.0));
        assert_eq!(rects[1], Rect::new(7.0, 13.0, 30.0, 10.0));
    }

    #[test]
    fn test_oversized_item_at_row_start() {
        let sizes = vec![Size::new(50.0, 10.0)];
        let rows = pack_rows(&sizes, 0.0, 10.0);
        let rects = place_rows(&rows, &sizes, 0.0, Point::ORIGIN);
        assert_eq!(rects[0].x, 0.0);
        assert_eq!(rects[0].width, 50.0);
    }
}
