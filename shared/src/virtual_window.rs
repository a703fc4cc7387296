//! Visible-row computation for fixed-height virtual lists.
//!
//! Rows are laid out top to bottom at `row_height` each. Only rows that
//! intersect the viewport, plus `overscan` rows on either side, are
//! materialized; the container keeps the full `total_height` so the
//! scrollbar reflects every row.

use std::ops::Range;

use crate::units::PAGE_RATIO;

/// Display width of one text set preview in pixels
pub const TEXT_SET_SIZE: f64 = 150.0;

/// Vertical space between text set rows in pixels
pub const ROW_GAP: f64 = 12.0;

/// Rows rendered above and below the viewport
pub const OVERSCAN_ROWS: usize = 5;

/// Estimated height of one text set row.
pub fn text_set_row_height() -> f64 {
    TEXT_SET_SIZE / PAGE_RATIO + ROW_GAP
}

#[derive(Clone, Debug, PartialEq)]
pub struct VirtualWindow {
    pub total_height: f64,
    pub rows: Range<usize>,
}

impl VirtualWindow {
    pub fn compute(
        row_count: usize,
        row_height: f64,
        scroll_top: f64,
        viewport_height: f64,
        overscan: usize,
    ) -> Self {
        let total_height = row_count as f64 * row_height;
        if row_count == 0 || !(row_height > 0.0) {
            return Self {
                total_height: total_height.max(0.0),
                rows: 0..0,
            };
        }

        let scroll_top = if scroll_top.is_finite() { scroll_top.max(0.0) } else { 0.0 };
        let viewport_height = if viewport_height.is_finite() { viewport_height.max(0.0) } else { 0.0 };

        let first_visible = ((scroll_top / row_height).floor() as usize).min(row_count);
        let end_visible = (((scroll_top + viewport_height) / row_height).ceil() as usize)
            .max(first_visible)
            .min(row_count);

        Self {
            total_height,
            rows: first_visible.saturating_sub(overscan)
                ..end_visible.saturating_add(overscan).min(row_count),
        }
    }

    /// Window for the text set grid using the fixed row estimate.
    pub fn for_text_sets(row_count: usize, scroll_top: f64, viewport_height: f64) -> Self {
        Self::compute(
            row_count,
            text_set_row_height(),
            scroll_top,
            viewport_height,
            OVERSCAN_ROWS,
        )
    }

    pub fn contains(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    /// Flat item indices covered by the materialized rows.
    pub fn item_range(&self, items_per_row: usize, item_count: usize) -> Range<usize> {
        let start = self.rows.start.saturating_mul(items_per_row).min(item_count);
        let end = self.rows.end.saturating_mul(items_per_row).min(item_count);
        start..end
    }
}

/// Top offset of `row` inside the virtual container.
pub fn row_offset(row: usize, row_height: f64) -> f64 {
    row as f64 * row_height
}
