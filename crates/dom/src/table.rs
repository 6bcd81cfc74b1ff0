//! Tables, rows, columns, and cells
//!
//! Formatting attributes exist at four levels (table, column, row, cell);
//! the cascade resolver merges them with a fixed precedence: an explicit
//! cell style wins outright, otherwise row beats column, and the column
//! fills whatever gaps remain.

use crate::{Borders, Paragraph, ParagraphFormat, Shading, Unit};
use serde::{Deserialize, Serialize};

/// How a row height value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowHeightRule {
    Auto,
    Exactly,
    AtLeast,
}

/// Vertical alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

/// A table column. Columns carry formatting defaults for the cells beneath
/// them but no content of their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub style: Option<String>,
    pub format: Option<ParagraphFormat>,
    pub shading: Option<Shading>,
    pub borders: Option<Borders>,
    pub width: Option<Unit>,
    pub left_padding: Option<Unit>,
    pub right_padding: Option<Unit>,
}

impl Column {
    /// Create a new empty column
    pub fn new() -> Self {
        Self::default()
    }
}

/// The column collection of a table, with a collection-level default width.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Columns {
    /// Default width for columns that set none of their own
    pub width: Option<Unit>,
    pub list: Vec<Column>,
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub style: Option<String>,
    pub format: Option<ParagraphFormat>,
    pub shading: Option<Shading>,
    pub borders: Option<Borders>,
    pub vertical_alignment: Option<VerticalAlignment>,
    pub content: Vec<Paragraph>,
}

impl Cell {
    /// Create a new empty cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new paragraph and return a mutable reference to it
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.content.push(Paragraph::new());
        self.content.last_mut().expect("just pushed")
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub style: Option<String>,
    pub format: Option<ParagraphFormat>,
    pub shading: Option<Shading>,
    pub borders: Option<Borders>,
    pub height: Option<Unit>,
    pub height_rule: Option<RowHeightRule>,
    pub vertical_alignment: Option<VerticalAlignment>,
    pub top_padding: Option<Unit>,
    pub bottom_padding: Option<Unit>,
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create a new row with the given number of empty cells
    pub fn with_cells(count: usize) -> Self {
        Self {
            cells: (0..count).map(|_| Cell::new()).collect(),
            ..Default::default()
        }
    }
}

/// The row collection of a table, with collection-level defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rows {
    /// Default height for rows that set none of their own
    pub height: Option<Unit>,
    /// Default height rule
    pub height_rule: Option<RowHeightRule>,
    /// Default vertical alignment for cells
    pub vertical_alignment: Option<VerticalAlignment>,
    pub list: Vec<Row>,
}

/// A table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub style: Option<String>,
    pub format: Option<ParagraphFormat>,
    pub shading: Option<Shading>,
    pub borders: Option<Borders>,
    pub left_padding: Option<Unit>,
    pub right_padding: Option<Unit>,
    pub top_padding: Option<Unit>,
    pub bottom_padding: Option<Unit>,
    pub columns: Columns,
    pub rows: Rows,
}

impl Table {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, optionally with an explicit width, and return a
    /// mutable reference to it
    pub fn add_column(&mut self, width: Option<Unit>) -> &mut Column {
        self.columns.list.push(Column {
            width,
            ..Default::default()
        });
        self.columns.list.last_mut().expect("just pushed")
    }

    /// Append a row with one empty cell per column and return a mutable
    /// reference to it
    pub fn add_row(&mut self) -> &mut Row {
        let count = self.columns.list.len();
        self.rows.list.push(Row::with_cells(count));
        self.rows.list.last_mut().expect("just pushed")
    }
}
