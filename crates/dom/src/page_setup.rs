//! Page setup attribute bundle and the named page-format lookup table
//!
//! A-series sizes derive from halving and quartering A0 (1189 x 841 mm,
//! integer millimeter arithmetic), so A4 is exactly 210 x 297 mm. US formats
//! are fixed point-based constants.

use crate::Unit;
use serde::{Deserialize, Serialize};

/// Where a section begins relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakType {
    BreakNextPage,
    BreakEvenPage,
    BreakOddPage,
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Named page formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageFormat {
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    B5,
    Letter,
    Legal,
    Ledger,
    /// 11 x 17 inch (portrait Ledger)
    P11x17,
}

const A0_HEIGHT_MM: i32 = 1189;
const A0_WIDTH_MM: i32 = 841;

impl PageFormat {
    /// The exact page size (width, height) of this format in portrait
    /// orientation.
    pub fn page_size(self) -> (Unit, Unit) {
        let (width_mm, height_mm) = match self {
            PageFormat::A0 => (A0_WIDTH_MM, A0_HEIGHT_MM),
            PageFormat::A1 => (A0_HEIGHT_MM / 2, A0_WIDTH_MM),
            PageFormat::A2 => (A0_WIDTH_MM / 2, A0_HEIGHT_MM / 2),
            PageFormat::A3 => (A0_HEIGHT_MM / 4, A0_WIDTH_MM / 2),
            PageFormat::A4 => (A0_WIDTH_MM / 4, A0_HEIGHT_MM / 4),
            PageFormat::A5 => (A0_HEIGHT_MM / 8, A0_WIDTH_MM / 4),
            PageFormat::A6 => (A0_WIDTH_MM / 8, A0_HEIGHT_MM / 8),
            PageFormat::B5 => (182, 257),
            PageFormat::Letter => return (Unit::from_point(612.0), Unit::from_point(792.0)),
            PageFormat::Legal => return (Unit::from_point(612.0), Unit::from_point(1008.0)),
            PageFormat::Ledger => return (Unit::from_point(1224.0), Unit::from_point(792.0)),
            PageFormat::P11x17 => return (Unit::from_point(792.0), Unit::from_point(1224.0)),
        };
        (
            Unit::from_millimeter(width_mm as f64),
            Unit::from_millimeter(height_mm as f64),
        )
    }
}

/// Page configuration of a section. Every field is optional; unset fields
/// inherit from the previous section (or from `default_page_setup` for the
/// first section) during cascade resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    /// Where the section starts (next/odd/even page)
    pub section_start: Option<BreakType>,
    /// Page orientation
    pub orientation: Option<Orientation>,
    /// Page width
    pub page_width: Option<Unit>,
    /// Page height
    pub page_height: Option<Unit>,
    /// Named page format; resolves width/height when they are unset
    pub page_format: Option<PageFormat>,
    /// Starting page number for the section
    pub starting_number: Option<i32>,

    pub top_margin: Option<Unit>,
    pub bottom_margin: Option<Unit>,
    pub left_margin: Option<Unit>,
    pub right_margin: Option<Unit>,

    /// Distance between the header and the page top
    pub header_distance: Option<Unit>,
    /// Distance between the footer and the page bottom
    pub footer_distance: Option<Unit>,

    /// Different headers/footers on odd and even pages
    pub odd_and_even_pages_header_footer: Option<bool>,
    /// Different header/footer on the first page of the section
    pub different_first_page_header_footer: Option<bool>,
    /// Swap left and right margins on facing pages
    pub mirror_margins: Option<bool>,
    /// Allow tables to break horizontally across pages
    pub horizontal_page_break: Option<bool>,
}

impl PageSetup {
    /// Create new empty page setup attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// The fully-populated global default: A4 portrait, 21 x 29.7 cm,
    /// standard margins. The first section of a document inherits from this.
    pub fn default_page_setup() -> Self {
        Self {
            section_start: Some(BreakType::BreakNextPage),
            orientation: Some(Orientation::Portrait),
            page_width: Some(Unit::from_centimeter(21.0)),
            page_height: Some(Unit::from_centimeter(29.7)),
            page_format: Some(PageFormat::A4),
            starting_number: None,
            top_margin: Some(Unit::from_centimeter(2.5)),
            bottom_margin: Some(Unit::from_centimeter(2.0)),
            left_margin: Some(Unit::from_centimeter(2.5)),
            right_margin: Some(Unit::from_centimeter(2.5)),
            header_distance: Some(Unit::from_centimeter(1.25)),
            footer_distance: Some(Unit::from_centimeter(1.25)),
            odd_and_even_pages_header_footer: Some(false),
            different_first_page_header_footer: Some(false),
            mirror_margins: Some(false),
            horizontal_page_break: Some(false),
        }
    }

    /// Check if all attributes are unset
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_is_a_quarter_of_a0() {
        let (w, h) = PageFormat::A4.page_size();
        assert_eq!(w, Unit::from_millimeter(210.0));
        assert_eq!(h, Unit::from_millimeter(297.0));
    }

    #[test]
    fn test_a_series_derivation() {
        let (w0, h0) = PageFormat::A0.page_size();
        assert_eq!((w0.millimeter(), h0.millimeter()), (841.0, 1189.0));
        let (w1, h1) = PageFormat::A1.page_size();
        assert_eq!((w1.millimeter(), h1.millimeter()), (594.0, 841.0));
        let (w5, h5) = PageFormat::A5.page_size();
        assert_eq!((w5.millimeter(), h5.millimeter()), (148.0, 210.0));
        let (w6, h6) = PageFormat::A6.page_size();
        assert_eq!((w6.millimeter(), h6.millimeter()), (105.0, 148.0));
    }

    #[test]
    fn test_us_formats_are_point_exact() {
        assert_eq!(
            PageFormat::Letter.page_size(),
            (Unit::from_point(612.0), Unit::from_point(792.0))
        );
        assert_eq!(
            PageFormat::Legal.page_size(),
            (Unit::from_point(612.0), Unit::from_point(1008.0))
        );
        assert_eq!(
            PageFormat::Ledger.page_size(),
            (Unit::from_point(1224.0), Unit::from_point(792.0))
        );
        assert_eq!(
            PageFormat::P11x17.page_size(),
            (Unit::from_point(792.0), Unit::from_point(1224.0))
        );
    }

    #[test]
    fn test_default_page_setup_is_complete_a4_portrait() {
        let setup = PageSetup::default_page_setup();
        assert_eq!(setup.page_format, Some(PageFormat::A4));
        assert_eq!(setup.orientation, Some(Orientation::Portrait));
        assert_eq!(setup.page_width, Some(Unit::from_centimeter(21.0)));
        assert_eq!(setup.page_height, Some(Unit::from_centimeter(29.7)));
        assert_eq!(setup.top_margin, Some(Unit::from_centimeter(2.5)));
        assert_eq!(setup.bottom_margin, Some(Unit::from_centimeter(2.0)));
    }
}
