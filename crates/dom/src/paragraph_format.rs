//! Paragraph format attribute bundle
//!
//! The central bundle of the cascade: block-level attributes plus the
//! composite sub-bundles (font, shading, borders, tab stops, list info).
//! Every field is optional; the cascade resolver fills the gaps.

use crate::{Borders, Font, ListInfo, Shading, TabStops, Unit};
use serde::{Deserialize, Serialize};

/// Horizontal alignment of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParagraphAlignment {
    Left,
    Center,
    Right,
    Justify,
}

/// How the line spacing value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineSpacingRule {
    Single,
    OnePtFive,
    Double,
    AtLeast,
    Exactly,
    Multiple,
}

/// Outline level of a paragraph (body text or heading depth).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutlineLevel {
    BodyText,
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
    Level6,
}

/// Block formatting attributes of a paragraph (also used by tables, rows,
/// columns, cells, charts, and text areas as their default content format).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphFormat {
    /// Horizontal alignment
    pub alignment: Option<ParagraphAlignment>,
    /// First line indent (negative for hanging)
    pub first_line_indent: Option<Unit>,
    /// Left indent
    pub left_indent: Option<Unit>,
    /// Right indent
    pub right_indent: Option<Unit>,
    /// Space before the paragraph
    pub space_before: Option<Unit>,
    /// Space after the paragraph
    pub space_after: Option<Unit>,
    /// How `line_spacing` is interpreted
    pub line_spacing_rule: Option<LineSpacingRule>,
    /// Line spacing value
    pub line_spacing: Option<Unit>,
    /// Widow/orphan control
    pub widow_control: Option<bool>,
    /// Keep all lines on one page
    pub keep_together: Option<bool>,
    /// Keep on the same page as the following paragraph
    pub keep_with_next: Option<bool>,
    /// Force a page break before the paragraph
    pub page_break_before: Option<bool>,
    /// Outline level
    pub outline_level: Option<OutlineLevel>,

    /// Character formatting
    pub font: Option<Font>,
    /// Background shading
    pub shading: Option<Shading>,
    /// Borders
    pub borders: Option<Borders>,
    /// Tab stops
    pub tab_stops: Option<TabStops>,
    /// List membership
    pub list_info: Option<ListInfo>,
}

impl ParagraphFormat {
    /// Create new empty paragraph format attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the font, materializing an empty one if absent.
    pub fn font_mut(&mut self) -> &mut Font {
        self.font.get_or_insert_with(Font::new)
    }

    /// Get the tab stop list, materializing an empty one if absent.
    pub fn tab_stops_mut(&mut self) -> &mut TabStops {
        self.tab_stops.get_or_insert_with(TabStops::new)
    }

    /// Check if all attributes, including composites, are unset
    pub fn is_empty(&self) -> bool {
        self.alignment.is_none()
            && self.first_line_indent.is_none()
            && self.left_indent.is_none()
            && self.right_indent.is_none()
            && self.space_before.is_none()
            && self.space_after.is_none()
            && self.line_spacing_rule.is_none()
            && self.line_spacing.is_none()
            && self.widow_control.is_none()
            && self.keep_together.is_none()
            && self.keep_with_next.is_none()
            && self.page_break_before.is_none()
            && self.outline_level.is_none()
            && self.font.as_ref().map_or(true, Font::is_empty)
            && self.shading.as_ref().map_or(true, Shading::is_empty)
            && self.borders.as_ref().map_or(true, Borders::is_empty)
            && self.tab_stops.as_ref().map_or(true, |t| t.is_empty() && !t.closed)
            && self.list_info.as_ref().map_or(true, ListInfo::is_empty)
    }
}
