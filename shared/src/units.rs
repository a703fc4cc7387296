// Page Unit System
// Text set geometry is authored against a fixed editor page and scaled to
// whatever page size a preview is rendered at.

/// Page width in data units
pub const PAGE_WIDTH: f64 = 412.0;

/// Page height in data units
pub const PAGE_HEIGHT: f64 = 618.0;

/// Width / height of every page
pub const PAGE_RATIO: f64 = PAGE_WIDTH / PAGE_HEIGHT;

/// Coordinate system of one rendered page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageUnits {
    pub page_width: f64,
    pub page_height: f64,
}

impl PageUnits {
    /// Units for a page rendered `page_width` pixels wide.
    pub fn for_width(page_width: f64) -> Self {
        Self {
            page_width,
            page_height: page_width / PAGE_RATIO,
        }
    }

    pub fn data_to_display_x(&self, value: f64) -> f64 {
        value * self.page_width / PAGE_WIDTH
    }

    pub fn data_to_display_y(&self, value: f64) -> f64 {
        value * self.page_height / PAGE_HEIGHT
    }

    /// Font sizes follow the horizontal scale.
    pub fn data_to_display_font_size(&self, value: f64) -> f64 {
        self.data_to_display_x(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_size_page_is_identity() {
        let units = PageUnits::for_width(PAGE_WIDTH);
        assert!((units.page_height - PAGE_HEIGHT).abs() < 1e-9);
        assert!((units.data_to_display_x(206.0) - 206.0).abs() < 1e-9);
        assert!((units.data_to_display_y(309.0) - 309.0).abs() < 1e-9);
    }

    #[test]
    fn test_preview_page_scales_both_axes() {
        let units = PageUnits::for_width(206.0);
        assert!((units.page_height - 309.0).abs() < 1e-9);
        assert!((units.data_to_display_x(412.0) - 206.0).abs() < 1e-9);
        assert!((units.data_to_display_y(618.0) - 309.0).abs() < 1e-9);
        assert!((units.data_to_display_font_size(24.0) - 12.0).abs() < 1e-9);
    }
}
