//! Charts and their sub-objects

use crate::{Paragraph, ParagraphFormat, Font, Unit};
use serde::{Deserialize, Serialize};

/// Kind of chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartType {
    #[default]
    Line,
    Column,
    Bar,
    Area,
    Pie,
}

/// Outline attributes of a drawable chart element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineFormat {
    pub visible: Option<bool>,
    pub width: Option<Unit>,
    pub color: Option<String>,
}

impl LineFormat {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Fill attributes of a drawable chart element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FillFormat {
    pub visible: Option<bool>,
    pub color: Option<String>,
}

/// Major or minor gridlines of an axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gridlines {
    pub line_format: Option<LineFormat>,
}

/// A chart axis. The `has_*_gridlines` flags declare which gridline
/// sub-elements exist; the cascade only touches declared sub-elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub has_major_gridlines: Option<bool>,
    pub has_minor_gridlines: Option<bool>,
    pub major_gridlines: Option<Gridlines>,
    pub minor_gridlines: Option<Gridlines>,
    pub line_format: Option<LineFormat>,
}

impl Axis {
    /// Create a new axis with no gridlines declared
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare major gridlines, materializing the sub-element
    pub fn with_major_gridlines(mut self) -> Self {
        self.has_major_gridlines = Some(true);
        self.major_gridlines = Some(Gridlines::default());
        self
    }

    /// Declare minor gridlines, materializing the sub-element
    pub fn with_minor_gridlines(mut self) -> Self {
        self.has_minor_gridlines = Some(true);
        self.minor_gridlines = Some(Gridlines::default());
        self
    }
}

/// The plot area of a chart. Passive during cascade resolution; reserved
/// for layout consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub line_format: Option<LineFormat>,
    pub fill_format: Option<FillFormat>,
}

/// Data label attributes. Passive during cascade resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataLabel {
    pub style: Option<String>,
    pub font: Option<Font>,
}

/// A chart legend, styled like a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub style: Option<String>,
    pub format: Option<ParagraphFormat>,
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Content of a chart text area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TextAreaElement {
    Paragraph(Paragraph),
    Legend(Legend),
}

/// A text area above or below the plot (chart header/footer), holding
/// paragraphs and legends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextArea {
    pub style: Option<String>,
    pub format: Option<ParagraphFormat>,
    pub elements: Vec<TextAreaElement>,
}

impl TextArea {
    /// Create a new empty text area
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new paragraph and return a mutable reference to it
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.elements.push(TextAreaElement::Paragraph(Paragraph::new()));
        match self.elements.last_mut() {
            Some(TextAreaElement::Paragraph(p)) => p,
            _ => unreachable!("just pushed a paragraph"),
        }
    }

    /// Append a new legend and return a mutable reference to it
    pub fn add_legend(&mut self) -> &mut Legend {
        self.elements.push(TextAreaElement::Legend(Legend::new()));
        match self.elements.last_mut() {
            Some(TextAreaElement::Legend(l)) => l,
            _ => unreachable!("just pushed a legend"),
        }
    }
}

/// A chart embedded in the document body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub chart_type: ChartType,
    pub style: Option<String>,
    pub format: Option<ParagraphFormat>,
    pub line_format: Option<LineFormat>,
    pub fill_format: Option<FillFormat>,
    pub x_axis: Option<Axis>,
    pub y_axis: Option<Axis>,
    pub z_axis: Option<Axis>,
    pub plot_area: Option<PlotArea>,
    pub data_label: Option<DataLabel>,
    pub header_area: Option<TextArea>,
    pub footer_area: Option<TextArea>,
}

impl Chart {
    /// Create a new line chart
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chart of the given type
    pub fn of_type(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            ..Default::default()
        }
    }

    /// Get the x axis, materializing an empty one if absent
    pub fn x_axis_mut(&mut self) -> &mut Axis {
        self.x_axis.get_or_insert_with(Axis::new)
    }

    /// Get the y axis, materializing an empty one if absent
    pub fn y_axis_mut(&mut self) -> &mut Axis {
        self.y_axis.get_or_insert_with(Axis::new)
    }

    /// Get the header text area, materializing an empty one if absent
    pub fn header_area_mut(&mut self) -> &mut TextArea {
        self.header_area.get_or_insert_with(TextArea::new)
    }

    /// Get the footer text area, materializing an empty one if absent
    pub fn footer_area_mut(&mut self) -> &mut TextArea {
        self.footer_area.get_or_insert_with(TextArea::new)
    }
}
