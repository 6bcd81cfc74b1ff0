//! Text frames (floating text shapes)

use crate::{Paragraph, Unit};
use serde::{Deserialize, Serialize};

/// A free-standing text shape. Width and height default to one inch during
/// cascade resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextFrame {
    pub width: Option<Unit>,
    pub height: Option<Unit>,
    pub content: Vec<Paragraph>,
}

impl TextFrame {
    /// Create a new empty text frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new paragraph and return a mutable reference to it
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.content.push(Paragraph::new());
        self.content.last_mut().expect("just pushed")
    }
}
