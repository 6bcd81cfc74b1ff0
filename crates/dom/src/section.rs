//! Sections, headers, and footers
//!
//! A section groups body content under one page setup. Page setup and
//! absent header/footer slots inherit from the previous section during
//! cascade resolution.

use crate::{Chart, PageSetup, Paragraph, ParagraphFormat, Table, TextFrame};
use serde::{Deserialize, Serialize};

/// Top-level content of a section body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BodyElement {
    Paragraph(Paragraph),
    Table(Table),
    Chart(Chart),
    TextFrame(TextFrame),
}

/// A header or footer, carrying its own paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderFooter {
    pub style: Option<String>,
    pub format: Option<ParagraphFormat>,
    pub content: Vec<Paragraph>,
}

impl HeaderFooter {
    /// Create a new empty header/footer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new paragraph and return a mutable reference to it
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.content.push(Paragraph::new());
        self.content.last_mut().expect("just pushed")
    }
}

/// The three header (or footer) slots of a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadersFooters {
    /// Used on every page unless a more specific slot applies
    pub primary: Option<HeaderFooter>,
    /// Used on even pages when odd/even headers are enabled
    pub even_page: Option<HeaderFooter>,
    /// Used on the first page of the section when enabled
    pub first_page: Option<HeaderFooter>,
}

impl HeadersFooters {
    /// Get the primary slot, materializing an empty header/footer if absent
    pub fn primary_mut(&mut self) -> &mut HeaderFooter {
        self.primary.get_or_insert_with(HeaderFooter::new)
    }

    /// Get the even-page slot, materializing if absent
    pub fn even_page_mut(&mut self) -> &mut HeaderFooter {
        self.even_page.get_or_insert_with(HeaderFooter::new)
    }

    /// Get the first-page slot, materializing if absent
    pub fn first_page_mut(&mut self) -> &mut HeaderFooter {
        self.first_page.get_or_insert_with(HeaderFooter::new)
    }
}

/// A section of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub page_setup: Option<PageSetup>,
    pub headers: HeadersFooters,
    pub footers: HeadersFooters,
    pub body: Vec<BodyElement>,
}

impl Section {
    /// Create a new empty section
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new paragraph and return a mutable reference to it
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.body.push(BodyElement::Paragraph(Paragraph::new()));
        match self.body.last_mut() {
            Some(BodyElement::Paragraph(p)) => p,
            _ => unreachable!("just pushed a paragraph"),
        }
    }

    /// Append a new table and return a mutable reference to it
    pub fn add_table(&mut self) -> &mut Table {
        self.body.push(BodyElement::Table(Table::new()));
        match self.body.last_mut() {
            Some(BodyElement::Table(t)) => t,
            _ => unreachable!("just pushed a table"),
        }
    }

    /// Append a new chart and return a mutable reference to it
    pub fn add_chart(&mut self) -> &mut Chart {
        self.body.push(BodyElement::Chart(Chart::new()));
        match self.body.last_mut() {
            Some(BodyElement::Chart(c)) => c,
            _ => unreachable!("just pushed a chart"),
        }
    }

    /// Append a new text frame and return a mutable reference to it
    pub fn add_text_frame(&mut self) -> &mut TextFrame {
        self.body.push(BodyElement::TextFrame(TextFrame::new()));
        match self.body.last_mut() {
            Some(BodyElement::TextFrame(f)) => f,
            _ => unreachable!("just pushed a text frame"),
        }
    }

    /// Get the page setup, materializing an empty one if absent
    pub fn page_setup_mut(&mut self) -> &mut PageSetup {
        self.page_setup.get_or_insert_with(PageSetup::new)
    }
}
