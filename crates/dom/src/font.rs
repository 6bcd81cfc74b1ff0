//! Font attribute bundle

use crate::Unit;
use serde::{Deserialize, Serialize};

/// Underline style for runs of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Underline {
    None,
    Single,
    Words,
    Dotted,
    Dash,
    DashDot,
    DashDotDot,
}

/// Character formatting attributes. Every field is optional; an unset field
/// means "inherit during cascade resolution".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font family name
    pub name: Option<String>,
    /// Font size
    pub size: Option<Unit>,
    /// Bold formatting
    pub bold: Option<bool>,
    /// Italic formatting
    pub italic: Option<bool>,
    /// Underline style
    pub underline: Option<Underline>,
    /// Superscript positioning
    pub superscript: Option<bool>,
    /// Subscript positioning
    pub subscript: Option<bool>,
    /// Text color (CSS color string)
    pub color: Option<String>,
}

impl Font {
    /// Create new empty font attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a named font
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Check if all attributes are unset
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.size.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.underline.is_none()
            && self.superscript.is_none()
            && self.subscript.is_none()
            && self.color.is_none()
    }
}
