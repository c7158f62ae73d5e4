//! Physical-unit geometry for the card.
//!
//! The card has a fixed footprint of 85.6mm x 54.0mm (ISO/IEC 7810 ID-1,
//! the standard ID-card size). Print and raster export both derive their
//! output dimensions from these millimetre values, so the conversion to
//! CSS reference pixels (96 per inch) lives here and nowhere else.

/// Card width in millimetres (ID-1 format).
pub const CARD_WIDTH_MM: f64 = 85.6;

/// Card height in millimetres (ID-1 format).
pub const CARD_HEIGHT_MM: f64 = 54.0;

const MM_PER_INCH: f64 = 25.4;
const CSS_PX_PER_INCH: f64 = 96.0;

/// Convert millimetres to CSS reference pixels, rounded to the nearest
/// whole pixel.
pub fn mm_to_css_px(mm: f64) -> u32 {
    (mm / MM_PER_INCH * CSS_PX_PER_INCH).round() as u32
}

/// A physical page size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSizeMm {
    pub width: f64,
    pub height: f64,
}

impl PageSizeMm {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The card's fixed footprint.
    pub const fn card() -> Self {
        Self::new(CARD_WIDTH_MM, CARD_HEIGHT_MM)
    }

    /// Width and height in whole CSS pixels.
    pub fn css_px(&self) -> (u32, u32) {
        (mm_to_css_px(self.width), mm_to_css_px(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_width_converts_to_324_px() {
        assert_eq!(mm_to_css_px(85.6), 324);
    }

    #[test]
    fn card_height_converts_to_204_px() {
        assert_eq!(mm_to_css_px(54.0), 204);
    }

    #[test]
    fn card_footprint_in_css_px() {
        assert_eq!(PageSizeMm::card().css_px(), (324, 204));
    }

    #[test]
    fn page_sizes_compare_by_value() {
        assert_eq!(PageSizeMm::card(), PageSizeMm::new(85.6, 54.0));
        assert_ne!(PageSizeMm::card(), PageSizeMm::new(210.0, 297.0));
    }
}
