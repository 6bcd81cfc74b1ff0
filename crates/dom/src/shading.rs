//! Shading (background fill) attribute bundle

use serde::{Deserialize, Serialize};

/// Background shading for paragraphs, table cells, rows, and columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shading {
    /// Whether the shading is painted at all
    pub visible: Option<bool>,
    /// Fill color (CSS color string)
    pub color: Option<String>,
}

impl Shading {
    /// Create new empty shading attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visible shading with the given fill color
    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            visible: Some(true),
            color: Some(color.into()),
        }
    }

    /// Check if all attributes are unset
    pub fn is_empty(&self) -> bool {
        self.visible.is_none() && self.color.is_none()
    }
}
