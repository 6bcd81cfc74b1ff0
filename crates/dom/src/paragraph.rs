//! Paragraphs, inline elements, and footnotes

use crate::ParagraphFormat;
use serde::{Deserialize, Serialize};

/// A block of text with an optional style reference and local format
/// overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Name of the paragraph style; rewritten during cascade resolution if
    /// it does not name a registered style
    pub style: Option<String>,
    /// Local format overrides; wins over everything inherited
    pub format: Option<ParagraphFormat>,
    pub elements: Vec<ParagraphElement>,
}

impl Paragraph {
    /// Create a new empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with the given text content
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            elements: vec![ParagraphElement::Text(text.into())],
            ..Default::default()
        }
    }

    /// Append a run of text
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.elements.push(ParagraphElement::Text(text.into()));
    }

    /// Append a footnote and return a mutable reference to it
    pub fn add_footnote(&mut self) -> &mut Footnote {
        self.elements.push(ParagraphElement::Footnote(Footnote::new()));
        match self.elements.last_mut() {
            Some(ParagraphElement::Footnote(footnote)) => footnote,
            _ => unreachable!("just pushed a footnote"),
        }
    }
}

/// Inline content of a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParagraphElement {
    Text(String),
    Footnote(Footnote),
}

/// A footnote anchored in a paragraph, carrying its own paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Footnote {
    pub style: Option<String>,
    pub format: Option<ParagraphFormat>,
    pub content: Vec<Paragraph>,
}

impl Footnote {
    /// Create a new empty footnote
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new paragraph and return a mutable reference to it
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.content.push(Paragraph::new());
        self.content.last_mut().expect("just pushed")
    }
}
