//! Grid pagination – assigns every serial number in the requested range
//! to a grid cell on some page, in a fixed scan order.
//!
//! Scan order is column-major within each page: columns left→right, and
//! within each column rows top→bottom. A new page starts once all
//! `rows × cols` cells are filled. Emission stops the instant the serial
//! counter passes `range_end`, even mid-page; the final page keeps only
//! the cells actually filled (trailing empty cells are omitted, which is
//! a user-visible layout contract).
//!
//! Coordinates are PDF-native: points, origin at the bottom-left of the
//! page, matching what the renderer feeds to the canvas.

use crate::request::{GridLayout, LabelRequest};

/// Lines per label: batch code, serial number, date.
pub const LABEL_LINES: u32 = 3;

/// One grid cell with its assigned serial number and draw position.
/// Ephemeral – produced here, consumed by the renderer, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelCell {
    pub page_index: usize,
    pub row: u32,
    pub col: u32,
    pub serial_index: u64,
    /// Left edge of the cell's text block, in points.
    pub x: f32,
    /// Baseline of the block's first line, in points from the page bottom.
    pub y: f32,
}

/// Pages needed for the whole range: `ceil(total / per_page)`, never 0
/// for a validated request.
///
/// Computed in u128 so a near-u64::MAX range cannot wrap to a small page
/// count; counts past `usize::MAX` saturate, which keeps any page cap
/// check firing instead of silently passing.
pub fn total_pages(request: &LabelRequest, layout: &GridLayout) -> usize {
    let total = request.total_serials();
    let per_page = layout.per_page() as u128;
    let pages = (total + per_page - 1) / per_page;
    pages.min(usize::MAX as u128) as usize
}

/// Assign every serial in the range to a cell, grouped by page.
///
/// `font_size` and `line_count` feed the vertical-centering term: a block
/// of `line_count` lines of `font_size` points is centered within one grid
/// row's vertical slot. Callers pass [`LABEL_LINES`] unless the label
/// template changes.
///
/// Assumes `request` and `layout` have been validated; a degenerate grid
/// must be rejected before this runs.
pub fn paginate(
    request: &LabelRequest,
    layout: &GridLayout,
    font_size: f32,
    line_count: u32,
) -> Vec<Vec<LabelCell>> {
    let per_page = layout.per_page();
    let x_spacing = layout.usable_width() / layout.cols as f32;
    let y_spacing = layout.usable_height() / layout.rows as f32;
    // Centers the line block within one row slot.
    let block_offset = (y_spacing - line_count as f32 * font_size) / 2.0;

    let mut pages: Vec<Vec<LabelCell>> = Vec::new();
    let mut current: Vec<LabelCell> = Vec::with_capacity(per_page as usize);
    let mut page_index = 0usize;

    for (offset, serial_index) in (request.range_start..=request.range_end).enumerate() {
        let slot = offset as u64 % per_page;
        // Column-major: consecutive serials run down a column.
        let col = (slot / layout.rows as u64) as u32;
        let row = (slot % layout.rows as u64) as u32;

        current.push(LabelCell {
            page_index,
            row,
            col,
            serial_index,
            x: layout.margin_x + col as f32 * x_spacing,
            y: layout.page_height - layout.margin_y - row as f32 * y_spacing + block_offset,
        });

        if current.len() as u64 == per_page {
            pages.push(std::mem::take(&mut current));
            page_index += 1;
        }
    }

    // Finalize the partial last page regardless of fill level.
    if !current.is_empty() {
        pages.push(current);
    }
    if pages.is_empty() {
        pages.push(Vec::new());
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::FontSpec;

    fn request(start: u64, end: u64) -> LabelRequest {
        LabelRequest {
            prefix: "SN".to_string(),
            range_start: start,
            range_end: end,
            batch_code: "B1".to_string(),
            mfg_date: "2026-08".to_string(),
        }
    }

    fn layout(rows: u32, cols: u32) -> GridLayout {
        GridLayout {
            rows,
            cols,
            ..GridLayout::default()
        }
    }

    #[test]
    fn page_count_formula() {
        assert_eq!(total_pages(&request(1, 22), &layout(7, 3)), 2);
        assert_eq!(total_pages(&request(1, 21), &layout(7, 3)), 1);
        assert_eq!(total_pages(&request(5, 5), &layout(7, 3)), 1);
        assert_eq!(total_pages(&request(0, 99), &layout(1, 1)), 100);
    }

    #[test]
    fn page_count_for_full_u64_range_does_not_wrap() {
        // 2^64 serials on a 1x1 grid saturates instead of wrapping small.
        assert_eq!(total_pages(&request(0, u64::MAX), &layout(1, 1)), usize::MAX);
        // On a 7x3 grid the exact count fits; it must stay astronomically
        // large, not wrap to a handful of pages.
        assert!(total_pages(&request(0, u64::MAX), &layout(7, 3)) > 1_000_000);
    }

    #[test]
    fn every_serial_emitted_exactly_once() {
        let pages = paginate(&request(100, 152), &layout(4, 5), 10.0, LABEL_LINES);
        let serials: Vec<u64> = pages
            .iter()
            .flatten()
            .map(|cell| cell.serial_index)
            .collect();
        assert_eq!(serials, (100..=152).collect::<Vec<u64>>());
    }

    #[test]
    fn column_major_scan_order() {
        // 2 rows × 3 cols: serials run down each column, then right.
        let pages = paginate(&request(1, 6), &layout(2, 3), 10.0, LABEL_LINES);
        let order: Vec<(u32, u32, u64)> = pages[0]
            .iter()
            .map(|cell| (cell.row, cell.col, cell.serial_index))
            .collect();
        assert_eq!(
            order,
            vec![
                (0, 0, 1),
                (1, 0, 2),
                (0, 1, 3),
                (1, 1, 4),
                (0, 2, 5),
                (1, 2, 6),
            ]
        );
    }

    #[test]
    fn partial_last_page_omits_trailing_cells() {
        let pages = paginate(&request(1, 22), &layout(7, 3), 10.0, LABEL_LINES);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 21);
        assert_eq!(pages[1].len(), 1);
        let last = pages[1][0];
        assert_eq!((last.row, last.col, last.serial_index), (0, 0, 22));
        assert_eq!(last.page_index, 1);
    }

    #[test]
    fn single_label_single_page() {
        let pages = paginate(&request(7, 7), &layout(7, 3), 10.0, LABEL_LINES);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 1);
        assert_eq!(pages[0][0].serial_index, 7);
    }

    #[test]
    fn one_by_one_grid_degrades_gracefully() {
        let pages = paginate(&request(1, 3), &layout(1, 1), 10.0, LABEL_LINES);
        assert_eq!(pages.len(), 3);
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.len(), 1);
            assert_eq!(page[0].page_index, i);
            assert_eq!((page[0].row, page[0].col), (0, 0));
        }
    }

    #[test]
    fn cell_coordinates_match_spacing_formula() {
        let grid = layout(7, 3);
        let font = FontSpec::default();
        let pages = paginate(&request(1, 22), &grid, font.size_pt, LABEL_LINES);

        let x_spacing = grid.usable_width() / grid.cols as f32;
        let y_spacing = grid.usable_height() / grid.rows as f32;
        let block = (y_spacing - LABEL_LINES as f32 * font.size_pt) / 2.0;

        for cell in pages.iter().flatten() {
            let expected_x = grid.margin_x + cell.col as f32 * x_spacing;
            let expected_y =
                grid.page_height - grid.margin_y - cell.row as f32 * y_spacing + block;
            assert!((cell.x - expected_x).abs() < 1e-3);
            assert!((cell.y - expected_y).abs() < 1e-3);
        }
    }

    #[test]
    fn cells_stay_within_horizontal_page_bounds() {
        let grid = layout(5, 4);
        let pages = paginate(&request(1, 40), &grid, 10.0, LABEL_LINES);
        for cell in pages.iter().flatten() {
            assert!(cell.x >= grid.margin_x);
            assert!(cell.x < grid.page_width - grid.margin_x);
        }
    }
}
