//! Cascade resolution
//!
//! A single top-down pass over the document tree that fills every unset
//! formatting attribute from its nearest source: the element's own style
//! chain, the enclosing element (cell, row, column, table, header, chart),
//! the previous section, or the built-in defaults. Parents resolve before
//! children, so a child always inherits already-resolved values. The pass
//! is idempotent: resolving a resolved document changes nothing.

use std::collections::HashMap;

use tracing::{debug, trace};

use quire_dom::style::{FOOTER, FOOTNOTE, HEADER, INVALID_STYLE_NAME, NORMAL};
use quire_dom::{
    Axis, BodyElement, Cell, Chart, Document, Footnote, Gridlines, HeaderFooter, HeadersFooters,
    LineFormat, PageSetup, Paragraph, ParagraphElement, ParagraphFormat, Result, Section, Shading,
    Borders, StyleType, Styles, Table, TextArea, TextAreaElement, TextFrame, Unit,
};

use crate::merge::{
    apply_bundle_fallback, merge_borders, merge_page_setup, merge_paragraph_format, merge_shading,
};

/// Default cell padding on the left and right of a table, in millimeters.
const TABLE_SIDE_PADDING_MM: f64 = 1.2;
/// Default column width, in centimeters.
const COLUMN_WIDTH_CM: f64 = 2.5;
/// Default gridline width of a chart axis, in points.
const GRIDLINE_WIDTH_PT: f64 = 0.15;
/// Default axis line width, in points.
const AXIS_LINE_WIDTH_PT: f64 = 0.4;
/// Default text frame edge length, in inches.
const TEXT_FRAME_EDGE_IN: f64 = 1.0;

/// Validate the document's style registry, then resolve the whole tree in
/// place. After this returns, every formatting attribute the model defines
/// is set on every element.
pub fn resolve(document: &mut Document) -> Result<()> {
    document.styles.validate()?;
    let resolver = Resolver::new(&document.styles);
    resolver.resolve_document(document);
    Ok(())
}

// ============================================================================
// Style sheet
// ============================================================================

/// A snapshot of the style registry with every base chain folded into one
/// effective format per style. Built once per resolution; later registry
/// edits do not affect it.
pub struct StyleSheet {
    formats: HashMap<String, ParagraphFormat>,
    empty: ParagraphFormat,
}

impl StyleSheet {
    /// Fold every style's base chain, leaf first, so the leaf's own values
    /// win over everything it inherits. Character styles are additionally
    /// topped up from the root paragraph style so they can serve as a
    /// paragraph ancestor.
    pub fn build(styles: &Styles) -> Self {
        let mut formats = HashMap::new();
        let mut character_styles = Vec::new();
        for style in styles.iter() {
            let Some(chain) = styles.chain(&style.name) else {
                continue;
            };
            let mut effective = chain[0].paragraph_format.clone();
            for base in &chain[1..] {
                merge_paragraph_format(&mut effective, &base.paragraph_format);
            }
            normalize(&mut effective);
            if style.style_type == StyleType::Character {
                character_styles.push(style.name.clone());
            }
            formats.insert(style.name.clone(), effective);
        }
        if let Some(normal) = formats.get(NORMAL).cloned() {
            for name in character_styles {
                if let Some(effective) = formats.get_mut(&name) {
                    merge_paragraph_format(effective, &normal);
                }
            }
        }
        Self {
            formats,
            empty: ParagraphFormat::new(),
        }
    }

    /// The effective format of the named style, if registered.
    pub fn format(&self, name: &str) -> Option<&ParagraphFormat> {
        self.formats.get(name)
    }

    /// The effective format of a built-in style. Built-ins are always
    /// registered; the empty format is a safety net, not a code path.
    fn builtin(&self, name: &str) -> &ParagraphFormat {
        self.formats.get(name).unwrap_or(&self.empty)
    }
}

/// Put an effective format into its post-resolution shape: tab stop list
/// closed with tombstones dropped, bundle-level border values baked into
/// the sides. A base-less style never passes through a merge, so this has
/// to happen here for elements that adopt the format wholesale to end up
/// identical to elements that merge with it.
fn normalize(effective: &mut ParagraphFormat) {
    if let Some(stops) = &mut effective.tab_stops {
        stops.drop_tombstones();
        stops.closed = true;
    }
    if let Some(borders) = &mut effective.borders {
        apply_bundle_fallback(borders);
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// The enclosing element of a paragraph, carried down the tree instead of a
/// parent pointer. It supplies the style name and format a paragraph
/// without a resolvable style of its own falls back to.
#[derive(Clone, Copy)]
enum ParagraphContext<'a> {
    /// Section body (and text frames)
    Body,
    /// Inside a table cell: fall back to the cell's resolved style/format
    Cell {
        style: Option<&'a str>,
        format: Option<&'a ParagraphFormat>,
    },
    /// Inside a header or footer: the holder's format merges in first, then
    /// the fixed Header/Footer style
    HeaderFooter {
        header: bool,
        holder_format: Option<&'a ParagraphFormat>,
    },
    /// Inside a footnote: fall back to the fixed Footnote style
    Footnote,
    /// Inside a chart text area: fall back to the area's style/format
    TextArea {
        style: Option<&'a str>,
        format: Option<&'a ParagraphFormat>,
    },
}

/// Resolves documents against one style sheet snapshot.
pub struct Resolver {
    sheet: StyleSheet,
}

impl Resolver {
    /// Snapshot the registry. Call [`Styles::validate`] first if the
    /// registry may hold malformed chains; [`resolve`] does both.
    pub fn new(styles: &Styles) -> Self {
        Self {
            sheet: StyleSheet::build(styles),
        }
    }

    /// Resolve every section in order. Each section inherits its page setup
    /// and absent header/footer slots from the previous resolved section;
    /// the first section inherits from the built-in page defaults.
    pub fn resolve_document(&self, document: &mut Document) {
        let mut previous: Option<(PageSetup, HeadersFooters, HeadersFooters)> = None;
        for (index, section) in document.sections.iter_mut().enumerate() {
            trace!(section = index, "resolving section");
            match &previous {
                Some((setup, headers, footers)) => {
                    debug!(section = index, "inheriting page setup and header/footer slots");
                    inherit_slots(&mut section.headers, headers);
                    inherit_slots(&mut section.footers, footers);
                    match &mut section.page_setup {
                        Some(page_setup) => merge_page_setup(page_setup, setup),
                        None => {
                            let mut adopted = setup.clone();
                            // page numbering restarts are per section
                            adopted.starting_number = None;
                            section.page_setup = Some(adopted);
                        }
                    }
                }
                None => {
                    let default = PageSetup::default_page_setup();
                    match &mut section.page_setup {
                        Some(page_setup) => merge_page_setup(page_setup, &default),
                        None => section.page_setup = Some(default),
                    }
                }
            }
            self.resolve_section(section);
            previous = Some((
                section.page_setup.clone().unwrap_or_default(),
                section.headers.clone(),
                section.footers.clone(),
            ));
        }
    }

    fn resolve_section(&self, section: &mut Section) {
        let headers = &mut section.headers;
        for slot in [&mut headers.primary, &mut headers.even_page, &mut headers.first_page] {
            if let Some(header) = slot {
                self.resolve_header_footer(header, true);
            }
        }
        let footers = &mut section.footers;
        for slot in [&mut footers.primary, &mut footers.even_page, &mut footers.first_page] {
            if let Some(footer) = slot {
                self.resolve_header_footer(footer, false);
            }
        }
        for element in &mut section.body {
            match element {
                BodyElement::Paragraph(paragraph) => {
                    self.resolve_paragraph(paragraph, ParagraphContext::Body);
                }
                BodyElement::Table(table) => self.resolve_table(table),
                BodyElement::Chart(chart) => self.resolve_chart(chart),
                BodyElement::TextFrame(frame) => self.resolve_text_frame(frame),
            }
        }
    }

    fn resolve_header_footer(&self, header_footer: &mut HeaderFooter, header: bool) {
        let HeaderFooter { style, format, content } = header_footer;
        let slot_style = if header { HEADER } else { FOOTER };
        let ancestor = match style.as_deref().and_then(|n| self.sheet.format(n)) {
            Some(style_format) => style_format,
            None => {
                *style = Some(slot_style.to_string());
                self.sheet.builtin(slot_style)
            }
        };
        match format {
            Some(format) => merge_paragraph_format(format, ancestor),
            None => *format = Some(ancestor.clone()),
        }
        for paragraph in content {
            self.resolve_paragraph(
                paragraph,
                ParagraphContext::HeaderFooter {
                    header,
                    holder_format: format.as_ref(),
                },
            );
        }
    }

    fn resolve_paragraph(&self, paragraph: &mut Paragraph, ctx: ParagraphContext<'_>) {
        let style_format = paragraph.style.as_deref().and_then(|n| self.sheet.format(n));
        let ancestor: Option<&ParagraphFormat> = match style_format {
            Some(style_format) => Some(style_format),
            None => match ctx {
                ParagraphContext::Cell { style, format } => {
                    paragraph.style = style.map(str::to_string);
                    format
                }
                ParagraphContext::HeaderFooter { header, holder_format } => {
                    if let Some(holder) = holder_format {
                        merge_paragraph_format(
                            paragraph.format.get_or_insert_with(ParagraphFormat::new),
                            holder,
                        );
                    }
                    let slot_style = if header { HEADER } else { FOOTER };
                    paragraph.style = Some(slot_style.to_string());
                    Some(self.sheet.builtin(slot_style))
                }
                ParagraphContext::Footnote => {
                    paragraph.style = Some(FOOTNOTE.to_string());
                    Some(self.sheet.builtin(FOOTNOTE))
                }
                ParagraphContext::TextArea { style, format } => {
                    paragraph.style = style.map(str::to_string);
                    format
                }
                ParagraphContext::Body => {
                    let name = match paragraph.style.as_deref() {
                        Some(existing) if !existing.is_empty() => {
                            debug!(style = %existing, "unknown style name, substituting the sentinel");
                            INVALID_STYLE_NAME
                        }
                        _ => NORMAL,
                    };
                    paragraph.style = Some(name.to_string());
                    Some(self.sheet.builtin(name))
                }
            },
        };

        match (&mut paragraph.format, ancestor) {
            (Some(format), Some(ancestor)) => merge_paragraph_format(format, ancestor),
            (None, Some(ancestor)) => paragraph.format = Some(ancestor.clone()),
            (None, None) => paragraph.format = Some(ParagraphFormat::new()),
            (Some(_), None) => {}
        }

        for element in &mut paragraph.elements {
            if let ParagraphElement::Footnote(footnote) = element {
                self.resolve_footnote(footnote);
            }
        }
    }

    fn resolve_footnote(&self, footnote: &mut Footnote) {
        let ancestor = match footnote.style.as_deref().and_then(|n| self.sheet.format(n)) {
            Some(style_format) => style_format,
            None => {
                footnote.style = Some(FOOTNOTE.to_string());
                self.sheet.builtin(FOOTNOTE)
            }
        };
        match &mut footnote.format {
            Some(format) => merge_paragraph_format(format, ancestor),
            None => footnote.format = Some(ancestor.clone()),
        }
        for paragraph in &mut footnote.content {
            self.resolve_paragraph(paragraph, ParagraphContext::Footnote);
        }
    }

    /// Resolve a table: the table format first, then columns, then the rows
    /// with their cells. Cells resolve before their row so the row's local
    /// format, not the row's inherited one, is what cells inherit.
    fn resolve_table(&self, table: &mut Table) {
        if table.left_padding.is_none() {
            table.left_padding = Some(Unit::from_millimeter(TABLE_SIDE_PADDING_MM));
        }
        if table.right_padding.is_none() {
            table.right_padding = Some(Unit::from_millimeter(TABLE_SIDE_PADDING_MM));
        }

        let ancestor = match table.style.as_deref().and_then(|n| self.sheet.format(n)) {
            Some(style_format) => style_format,
            None => {
                table.style = Some(NORMAL.to_string());
                self.sheet.builtin(NORMAL)
            }
        };
        match &mut table.format {
            Some(format) => merge_paragraph_format(format, ancestor),
            None => table.format = Some(ancestor.clone()),
        }

        let table_style = table.style.clone();
        let table_format = table.format.clone();
        let table_shading = table.shading.clone();
        let table_borders = table.borders.clone();
        let left_padding = table.left_padding;
        let right_padding = table.right_padding;
        let top_padding = table.top_padding;
        let bottom_padding = table.bottom_padding;

        let columns_width = table.columns.width;
        for column in &mut table.columns.list {
            if column.width.is_none() {
                column.width = columns_width;
            }
            if column.width.is_none() {
                column.width = Some(Unit::from_centimeter(COLUMN_WIDTH_CM));
            }
            if column.left_padding.is_none() {
                column.left_padding = left_padding;
            }
            if column.right_padding.is_none() {
                column.right_padding = right_padding;
            }

            let ancestor = match column.style.as_deref().and_then(|n| self.sheet.format(n)) {
                Some(style_format) => Some(style_format),
                None => {
                    column.style = table_style.clone();
                    table_format.as_ref()
                }
            };
            match (&mut column.format, ancestor) {
                (Some(format), Some(ancestor)) => merge_paragraph_format(format, ancestor),
                (None, Some(ancestor)) => {
                    let mut cloned = ancestor.clone();
                    if cloned.shading.is_none() {
                        cloned.shading = table_format.as_ref().and_then(|f| f.shading.clone());
                    }
                    column.format = Some(cloned);
                }
                (None, None) => column.format = Some(ParagraphFormat::new()),
                (Some(_), None) => {}
            }
            clone_or_merge_shading(&mut column.shading, table_shading.as_ref());
            clone_or_merge_borders(&mut column.borders, table_borders.as_ref());
        }

        let rows_height = table.rows.height;
        let rows_height_rule = table.rows.height_rule;
        let rows_vertical_alignment = table.rows.vertical_alignment;
        let columns = &table.columns;

        for row in &mut table.rows.list {
            if row.height.is_none() {
                row.height = rows_height;
            }
            if row.height_rule.is_none() {
                row.height_rule = rows_height_rule;
            }
            if row.vertical_alignment.is_none() {
                row.vertical_alignment = rows_vertical_alignment;
            }

            let row_style_format = row.style.as_deref().and_then(|n| self.sheet.format(n));
            let row_style_found = row_style_format.is_some();
            let row_ancestor = row_style_format.or(table_format.as_ref());
            if !row_style_found {
                row.style = table_style.clone();
            }

            // cells see the row's local format, captured before the row
            // itself inherits anything
            let row_local_format = row.format.clone();
            let row_style = row.style.clone();
            let row_shading = row.shading.clone();
            let row_borders = row.borders.clone();
            let row_vertical_alignment = row.vertical_alignment;

            for (index, cell) in row.cells.iter_mut().enumerate() {
                let column = columns.list.get(index);

                match cell.style.as_deref().and_then(|n| self.sheet.format(n)) {
                    Some(cell_style_format) => match &mut cell.format {
                        Some(format) => merge_paragraph_format(format, cell_style_format),
                        None => cell.format = Some(cell_style_format.clone()),
                    },
                    None => {
                        if let Some(row_format) = &row_local_format {
                            merge_paragraph_format(
                                cell.format.get_or_insert_with(ParagraphFormat::new),
                                row_format,
                            );
                        }
                        if row_style_found {
                            cell.style = row_style.clone();
                            if let Some(ancestor) = row_ancestor {
                                merge_paragraph_format(
                                    cell.format.get_or_insert_with(ParagraphFormat::new),
                                    ancestor,
                                );
                            }
                        } else if let Some(column) = column {
                            cell.style = column.style.clone();
                            if let Some(column_format) = &column.format {
                                merge_paragraph_format(
                                    cell.format.get_or_insert_with(ParagraphFormat::new),
                                    column_format,
                                );
                            }
                        }
                    }
                }

                // a table-wide content shading shows through cells that set
                // none of their own
                if let Some(shading) = table_format.as_ref().and_then(|f| f.shading.as_ref()) {
                    let format = cell.format.get_or_insert_with(ParagraphFormat::new);
                    if format.shading.is_none() {
                        format.shading = Some(shading.clone());
                    }
                }

                clone_or_merge_shading(&mut cell.shading, row_shading.as_ref());
                clone_or_merge_shading(&mut cell.shading, column.and_then(|c| c.shading.as_ref()));
                clone_or_merge_borders(&mut cell.borders, row_borders.as_ref());
                clone_or_merge_borders(&mut cell.borders, column.and_then(|c| c.borders.as_ref()));

                if cell.vertical_alignment.is_none() {
                    cell.vertical_alignment = row_vertical_alignment;
                }

                let Cell { style, format, content, .. } = cell;
                for paragraph in content {
                    self.resolve_paragraph(
                        paragraph,
                        ParagraphContext::Cell {
                            style: style.as_deref(),
                            format: format.as_ref(),
                        },
                    );
                }
            }

            match &mut row.format {
                Some(format) => {
                    if let Some(ancestor) = row_ancestor {
                        merge_paragraph_format(format, ancestor);
                    }
                }
                None => {
                    let mut cloned = row_ancestor.cloned().unwrap_or_default();
                    if cloned.shading.is_none() {
                        cloned.shading = table_format.as_ref().and_then(|f| f.shading.clone());
                    }
                    row.format = Some(cloned);
                }
            }
            if row.top_padding.is_none() {
                row.top_padding = top_padding;
            }
            if row.bottom_padding.is_none() {
                row.bottom_padding = bottom_padding;
            }
            clone_or_merge_shading(&mut row.shading, table_shading.as_ref());
            clone_or_merge_borders(&mut row.borders, table_borders.as_ref());
        }
    }

    fn resolve_chart(&self, chart: &mut Chart) {
        let ancestor = match chart.style.as_deref().and_then(|n| self.sheet.format(n)) {
            Some(style_format) => style_format,
            None => {
                let name = match chart.style.as_deref() {
                    Some(existing) if !existing.is_empty() => {
                        debug!(style = %existing, "unknown style name, substituting the sentinel");
                        INVALID_STYLE_NAME
                    }
                    _ => NORMAL,
                };
                chart.style = Some(name.to_string());
                self.sheet.builtin(name)
            }
        };
        match &mut chart.format {
            Some(format) => merge_paragraph_format(format, ancestor),
            None => chart.format = Some(ancestor.clone()),
        }

        for axis in [&mut chart.x_axis, &mut chart.y_axis, &mut chart.z_axis] {
            if let Some(axis) = axis {
                resolve_axis(axis);
            }
        }

        let chart_style = chart.style.clone();
        let chart_format = chart.format.clone();
        if let Some(area) = &mut chart.header_area {
            self.resolve_text_area(area, chart_style.as_deref(), chart_format.as_ref());
        }
        if let Some(area) = &mut chart.footer_area {
            self.resolve_text_area(area, chart_style.as_deref(), chart_format.as_ref());
        }
    }

    fn resolve_text_area(
        &self,
        area: &mut TextArea,
        chart_style: Option<&str>,
        chart_format: Option<&ParagraphFormat>,
    ) {
        let ancestor: Option<&ParagraphFormat> = if area.style.is_some() {
            match area.style.as_deref().and_then(|n| self.sheet.format(n)) {
                Some(style_format) => Some(style_format),
                None => {
                    if let Some(existing) = area.style.as_deref() {
                        debug!(style = %existing, "unknown style name, substituting the sentinel");
                    }
                    area.style = Some(INVALID_STYLE_NAME.to_string());
                    Some(self.sheet.builtin(INVALID_STYLE_NAME))
                }
            }
        } else {
            area.style = chart_style.map(str::to_string);
            chart_format
        };
        match (&mut area.format, ancestor) {
            (Some(format), Some(ancestor)) => merge_paragraph_format(format, ancestor),
            (None, Some(ancestor)) => area.format = Some(ancestor.clone()),
            (None, None) => area.format = Some(ParagraphFormat::new()),
            (Some(_), None) => {}
        }

        let TextArea { style, format, elements } = area;
        for element in elements {
            match element {
                TextAreaElement::Paragraph(paragraph) => self.resolve_paragraph(
                    paragraph,
                    ParagraphContext::TextArea {
                        style: style.as_deref(),
                        format: format.as_ref(),
                    },
                ),
                TextAreaElement::Legend(legend) => {
                    self.resolve_legend(legend, style.as_deref(), format.as_ref());
                }
            }
        }
    }

    fn resolve_legend(
        &self,
        legend: &mut quire_dom::Legend,
        area_style: Option<&str>,
        area_format: Option<&ParagraphFormat>,
    ) {
        let ancestor: Option<&ParagraphFormat> = if legend.style.is_some() {
            match legend.style.as_deref().and_then(|n| self.sheet.format(n)) {
                Some(style_format) => Some(style_format),
                None => {
                    if let Some(existing) = legend.style.as_deref() {
                        debug!(style = %existing, "unknown style name, substituting the sentinel");
                    }
                    legend.style = Some(INVALID_STYLE_NAME.to_string());
                    Some(self.sheet.builtin(INVALID_STYLE_NAME))
                }
            }
        } else {
            legend.style = area_style.map(str::to_string);
            area_format
        };
        match (&mut legend.format, ancestor) {
            (Some(format), Some(ancestor)) => merge_paragraph_format(format, ancestor),
            (None, Some(ancestor)) => legend.format = Some(ancestor.clone()),
            (None, None) => legend.format = Some(ParagraphFormat::new()),
            (Some(_), None) => {}
        }
    }

    fn resolve_text_frame(&self, frame: &mut TextFrame) {
        if frame.width.is_none() {
            frame.width = Some(Unit::from_inch(TEXT_FRAME_EDGE_IN));
        }
        if frame.height.is_none() {
            frame.height = Some(Unit::from_inch(TEXT_FRAME_EDGE_IN));
        }
        for paragraph in &mut frame.content {
            self.resolve_paragraph(paragraph, ParagraphContext::Body);
        }
    }
}

fn resolve_axis(axis: &mut Axis) {
    if axis.has_major_gridlines == Some(true) {
        if let Some(gridlines) = &mut axis.major_gridlines {
            default_gridline_width(gridlines);
        }
    }
    if axis.has_minor_gridlines == Some(true) {
        if let Some(gridlines) = &mut axis.minor_gridlines {
            default_gridline_width(gridlines);
        }
    }
    if let Some(line) = &mut axis.line_format {
        if line.width.is_none() {
            line.width = Some(Unit::from_point(AXIS_LINE_WIDTH_PT));
        }
    }
}

fn default_gridline_width(gridlines: &mut Gridlines) {
    let line = gridlines.line_format.get_or_insert_with(LineFormat::new);
    if line.width.is_none() {
        line.width = Some(Unit::from_point(GRIDLINE_WIDTH_PT));
    }
}

fn inherit_slots(current: &mut HeadersFooters, previous: &HeadersFooters) {
    if current.primary.is_none() {
        current.primary = previous.primary.clone();
    }
    if current.even_page.is_none() {
        current.even_page = previous.even_page.clone();
    }
    if current.first_page.is_none() {
        current.first_page = previous.first_page.clone();
    }
}

fn clone_or_merge_shading(specific: &mut Option<Shading>, fallback: Option<&Shading>) {
    if let Some(fallback) = fallback {
        match specific {
            Some(shading) => merge_shading(shading, fallback),
            None => *specific = Some(fallback.clone()),
        }
    }
}

fn clone_or_merge_borders(specific: &mut Option<Borders>, fallback: Option<&Borders>) {
    if let Some(fallback) = fallback {
        match specific {
            Some(borders) => merge_borders(borders, fallback),
            None => *specific = Some(fallback.clone()),
        }
    }
    if let Some(borders) = specific {
        apply_bundle_fallback(borders);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_dom::{
        Font, Orientation, PageFormat, ParagraphAlignment, RowHeightRule, Style, VerticalAlignment,
    };

    fn resolved(mut document: Document) -> Document {
        resolve(&mut document).unwrap();
        document
    }

    #[test]
    fn test_body_paragraph_inherits_normal() {
        let mut document = Document::new();
        document.add_section().add_paragraph().add_text("hello");
        let document = resolved(document);

        let BodyElement::Paragraph(paragraph) = &document.sections[0].body[0] else {
            panic!("expected a paragraph");
        };
        assert_eq!(paragraph.style.as_deref(), Some(NORMAL));
        let format = paragraph.format.as_ref().unwrap();
        assert_eq!(format.alignment, Some(ParagraphAlignment::Left));
        assert_eq!(format.space_after, Some(Unit::from_point(8.0)));
        let font = format.font.as_ref().unwrap();
        assert_eq!(font.name.as_deref(), Some("Calibri"));
        assert_eq!(font.size, Some(Unit::from_point(11.0)));
        assert_eq!(font.color.as_deref(), Some("#000000"));
    }

    #[test]
    fn test_explicit_values_survive_resolution() {
        let mut document = Document::new();
        let paragraph = document.add_section().add_paragraph();
        paragraph.style = Some("Heading1".to_string());
        paragraph.format = Some(ParagraphFormat {
            alignment: Some(ParagraphAlignment::Right),
            ..Default::default()
        });
        let document = resolved(document);

        let BodyElement::Paragraph(paragraph) = &document.sections[0].body[0] else {
            panic!("expected a paragraph");
        };
        let format = paragraph.format.as_ref().unwrap();
        assert_eq!(format.alignment, Some(ParagraphAlignment::Right));
        let font = format.font.as_ref().unwrap();
        assert_eq!(font.bold, Some(true));
        assert_eq!(font.size, Some(Unit::from_point(16.0)));
        // from Normal through the Heading1 base chain
        assert_eq!(font.name.as_deref(), Some("Calibri"));
    }

    #[test]
    fn test_unknown_style_gets_the_sentinel() {
        let mut document = Document::new();
        document.add_section().add_paragraph().style = Some("NoSuchStyle".to_string());
        let document = resolved(document);

        let BodyElement::Paragraph(paragraph) = &document.sections[0].body[0] else {
            panic!("expected a paragraph");
        };
        assert_eq!(paragraph.style.as_deref(), Some(INVALID_STYLE_NAME));
        let font = paragraph.format.as_ref().unwrap().font.as_ref().unwrap();
        assert_eq!(font.name.as_deref(), Some("Courier New"));
        assert_eq!(font.bold, Some(true));
        assert_eq!(font.color.as_deref(), Some("#CF0000"));
    }

    #[test]
    fn test_empty_style_name_falls_back_to_normal() {
        let mut document = Document::new();
        document.add_section().add_paragraph().style = Some(String::new());
        let document = resolved(document);

        let BodyElement::Paragraph(paragraph) = &document.sections[0].body[0] else {
            panic!("expected a paragraph");
        };
        assert_eq!(paragraph.style.as_deref(), Some(NORMAL));
    }

    #[test]
    fn test_malformed_style_chain_is_rejected() {
        let mut document = Document::new();
        document.styles.register(Style::paragraph("A").based_on("B"));
        document.styles.register(Style::paragraph("B").based_on("A"));
        let err = resolve(&mut document).unwrap_err();
        assert!(matches!(err, quire_dom::DomError::MalformedStyleChain { .. }));
    }

    #[test]
    fn test_first_section_gets_default_page_setup() {
        let mut document = Document::new();
        document.add_section();
        let document = resolved(document);

        let setup = document.sections[0].page_setup.as_ref().unwrap();
        assert_eq!(setup, &PageSetup::default_page_setup());
        assert_eq!(setup.starting_number, None);
    }

    #[test]
    fn test_page_format_resolves_dimensions() {
        let mut document = Document::new();
        document.add_section().page_setup_mut().page_format = Some(PageFormat::A5);
        let document = resolved(document);

        let setup = document.sections[0].page_setup.as_ref().unwrap();
        assert_eq!(setup.page_width, Some(Unit::from_millimeter(148.0)));
        assert_eq!(setup.page_height, Some(Unit::from_millimeter(210.0)));
    }

    #[test]
    fn test_second_section_inherits_from_the_first() {
        let mut document = Document::new();
        {
            let first = document.add_section();
            let setup = first.page_setup_mut();
            setup.orientation = Some(Orientation::Landscape);
            setup.starting_number = Some(5);
            first.headers.primary_mut().add_paragraph().add_text("page header");
        }
        document.add_section();
        let mut document = resolved(document);

        let second = &document.sections[1];
        let setup = second.page_setup.as_ref().unwrap();
        assert_eq!(setup.orientation, Some(Orientation::Landscape));
        assert_eq!(setup.starting_number, None);
        let header = second.headers.primary.as_ref().unwrap();
        assert_eq!(header.content.len(), 1);

        // the inherited header is a deep copy, not a shared one
        document.sections[1].headers.primary_mut().add_paragraph();
        assert_eq!(document.sections[0].headers.primary.as_ref().unwrap().content.len(), 1);
    }

    #[test]
    fn test_header_paragraph_gets_the_header_style() {
        let mut document = Document::new();
        let section = document.add_section();
        section.headers.primary_mut().add_paragraph().add_text("title");
        let document = resolved(document);

        let header = document.sections[0].headers.primary.as_ref().unwrap();
        assert_eq!(header.style.as_deref(), Some(HEADER));
        let paragraph = &header.content[0];
        assert_eq!(paragraph.style.as_deref(), Some(HEADER));
        let stops = paragraph.format.as_ref().unwrap().tab_stops.as_ref().unwrap();
        assert!(stops.get_at(Unit::from_centimeter(8.0)).is_some());
        assert!(stops.get_at(Unit::from_centimeter(16.0)).is_some());
    }

    #[test]
    fn test_footnote_paragraphs_get_the_footnote_style() {
        let mut document = Document::new();
        let paragraph = document.add_section().add_paragraph();
        paragraph.add_text("anchor");
        paragraph.add_footnote().add_paragraph().add_text("note");
        let document = resolved(document);

        let BodyElement::Paragraph(paragraph) = &document.sections[0].body[0] else {
            panic!("expected a paragraph");
        };
        let ParagraphElement::Footnote(footnote) = &paragraph.elements[1] else {
            panic!("expected a footnote");
        };
        assert_eq!(footnote.style.as_deref(), Some(FOOTNOTE));
        let note = &footnote.content[0];
        assert_eq!(note.style.as_deref(), Some(FOOTNOTE));
        let font = note.format.as_ref().unwrap().font.as_ref().unwrap();
        assert_eq!(font.size, Some(Unit::from_point(9.0)));
    }

    #[test]
    fn test_table_padding_and_column_width_defaults() {
        let mut document = Document::new();
        let table = document.add_section().add_table();
        table.add_column(None);
        table.add_column(Some(Unit::from_centimeter(4.0)));
        table.add_row();
        let document = resolved(document);

        let BodyElement::Table(table) = &document.sections[0].body[0] else {
            panic!("expected a table");
        };
        assert_eq!(table.left_padding, Some(Unit::from_millimeter(1.2)));
        assert_eq!(table.right_padding, Some(Unit::from_millimeter(1.2)));
        assert_eq!(table.columns.list[0].width, Some(Unit::from_centimeter(2.5)));
        assert_eq!(table.columns.list[1].width, Some(Unit::from_centimeter(4.0)));
        assert_eq!(table.columns.list[0].left_padding, Some(Unit::from_millimeter(1.2)));
    }

    #[test]
    fn test_columns_collection_width_beats_global_default() {
        let mut document = Document::new();
        let table = document.add_section().add_table();
        table.columns.width = Some(Unit::from_centimeter(3.0));
        table.add_column(None);
        let document = resolved(document);

        let BodyElement::Table(table) = &document.sections[0].body[0] else {
            panic!("expected a table");
        };
        assert_eq!(table.columns.list[0].width, Some(Unit::from_centimeter(3.0)));
    }

    #[test]
    fn test_rows_collection_defaults_flow_into_rows() {
        let mut document = Document::new();
        let table = document.add_section().add_table();
        table.add_column(None);
        table.rows.height = Some(Unit::from_point(20.0));
        table.rows.height_rule = Some(RowHeightRule::AtLeast);
        table.rows.vertical_alignment = Some(VerticalAlignment::Center);
        table.add_row();
        let document = resolved(document);

        let BodyElement::Table(table) = &document.sections[0].body[0] else {
            panic!("expected a table");
        };
        let row = &table.rows.list[0];
        assert_eq!(row.height, Some(Unit::from_point(20.0)));
        assert_eq!(row.height_rule, Some(RowHeightRule::AtLeast));
        assert_eq!(row.vertical_alignment, Some(VerticalAlignment::Center));
        assert_eq!(row.cells[0].vertical_alignment, Some(VerticalAlignment::Center));
    }

    #[test]
    fn test_cell_inherits_row_over_column() {
        let mut document = Document::new();
        let table = document.add_section().add_table();
        table.add_column(None).format = Some(ParagraphFormat {
            font: Some(Font {
                size: Some(Unit::from_point(10.0)),
                bold: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        });
        table.add_row().format = Some(ParagraphFormat {
            font: Some(Font {
                bold: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        });
        let document = resolved(document);

        let BodyElement::Table(table) = &document.sections[0].body[0] else {
            panic!("expected a table");
        };
        let cell = &table.rows.list[0].cells[0];
        let font = cell.format.as_ref().unwrap().font.as_ref().unwrap();
        assert_eq!(font.bold, Some(true));
        assert_eq!(font.size, Some(Unit::from_point(10.0)));
        // table defaults arrive through the column
        assert_eq!(font.name.as_deref(), Some("Calibri"));
    }

    #[test]
    fn test_cell_style_wins_outright() {
        let mut document = Document::new();
        document.styles.register(Style::paragraph("CellStyle").based_on(NORMAL).with_format(
            ParagraphFormat {
                font: Some(Font {
                    italic: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            },
        ));
        let table = document.add_section().add_table();
        table.add_column(None);
        let row = table.add_row();
        row.format = Some(ParagraphFormat {
            font: Some(Font {
                bold: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        });
        row.cells[0].style = Some("CellStyle".to_string());
        let document = resolved(document);

        let BodyElement::Table(table) = &document.sections[0].body[0] else {
            panic!("expected a table");
        };
        let cell = &table.rows.list[0].cells[0];
        assert_eq!(cell.style.as_deref(), Some("CellStyle"));
        let font = cell.format.as_ref().unwrap().font.as_ref().unwrap();
        assert_eq!(font.italic, Some(true));
        // the row format does not leak into a cell with its own style
        assert_eq!(font.bold, None);
    }

    #[test]
    fn test_cell_paragraph_inherits_cell_format() {
        let mut document = Document::new();
        let table = document.add_section().add_table();
        table.add_column(None).format = Some(ParagraphFormat {
            font: Some(Font {
                bold: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        });
        table.add_row().cells[0].add_paragraph().add_text("in cell");
        let document = resolved(document);

        let BodyElement::Table(table) = &document.sections[0].body[0] else {
            panic!("expected a table");
        };
        let paragraph = &table.rows.list[0].cells[0].content[0];
        let font = paragraph.format.as_ref().unwrap().font.as_ref().unwrap();
        assert_eq!(font.bold, Some(true));
        assert_eq!(font.size, Some(Unit::from_point(11.0)));
    }

    #[test]
    fn test_row_and_cell_shading_inherit_from_the_table() {
        let mut document = Document::new();
        let table = document.add_section().add_table();
        table.shading = Some(Shading::with_color("#EEEEEE"));
        table.add_column(None);
        table.add_row();
        let document = resolved(document);

        let BodyElement::Table(table) = &document.sections[0].body[0] else {
            panic!("expected a table");
        };
        let row = &table.rows.list[0];
        assert_eq!(row.shading.as_ref().unwrap().color.as_deref(), Some("#EEEEEE"));
        assert_eq!(
            row.cells[0].shading.as_ref().unwrap().color.as_deref(),
            Some("#EEEEEE")
        );
    }

    #[test]
    fn test_chart_axis_line_defaults() {
        let mut document = Document::new();
        let chart = document.add_section().add_chart();
        *chart.x_axis_mut() = Axis::new().with_major_gridlines();
        chart.y_axis_mut().line_format = Some(LineFormat::new());
        let document = resolved(document);

        let BodyElement::Chart(chart) = &document.sections[0].body[0] else {
            panic!("expected a chart");
        };
        let gridline_width = chart.x_axis.as_ref().unwrap().major_gridlines.as_ref().unwrap()
            .line_format.as_ref().unwrap().width;
        assert_eq!(gridline_width, Some(Unit::from_point(0.15)));
        let axis_width = chart.y_axis.as_ref().unwrap().line_format.as_ref().unwrap().width;
        assert_eq!(axis_width, Some(Unit::from_point(0.4)));
    }

    #[test]
    fn test_undeclared_gridlines_stay_untouched() {
        let mut document = Document::new();
        let chart = document.add_section().add_chart();
        chart.x_axis_mut().major_gridlines = Some(Gridlines::default());
        let document = resolved(document);

        let BodyElement::Chart(chart) = &document.sections[0].body[0] else {
            panic!("expected a chart");
        };
        let gridlines = chart.x_axis.as_ref().unwrap().major_gridlines.as_ref().unwrap();
        assert!(gridlines.line_format.is_none());
    }

    #[test]
    fn test_chart_text_area_inherits_chart_style() {
        let mut document = Document::new();
        let chart = document.add_section().add_chart();
        chart.style = Some("Heading2".to_string());
        chart.header_area_mut().add_paragraph().add_text("chart title");
        let document = resolved(document);

        let BodyElement::Chart(chart) = &document.sections[0].body[0] else {
            panic!("expected a chart");
        };
        let area = chart.header_area.as_ref().unwrap();
        assert_eq!(area.style.as_deref(), Some("Heading2"));
        let font = area.format.as_ref().unwrap().font.as_ref().unwrap();
        assert_eq!(font.size, Some(Unit::from_point(13.0)));
        let TextAreaElement::Paragraph(paragraph) = &area.elements[0] else {
            panic!("expected a paragraph");
        };
        assert_eq!(paragraph.style.as_deref(), Some("Heading2"));
    }

    #[test]
    fn test_text_frame_defaults_to_one_inch() {
        let mut document = Document::new();
        document.add_section().add_text_frame().add_paragraph().add_text("framed");
        let document = resolved(document);

        let BodyElement::TextFrame(frame) = &document.sections[0].body[0] else {
            panic!("expected a text frame");
        };
        assert_eq!(frame.width, Some(Unit::from_inch(1.0)));
        assert_eq!(frame.height, Some(Unit::from_inch(1.0)));
        assert_eq!(frame.content[0].style.as_deref(), Some(NORMAL));
    }

    #[test]
    fn test_character_style_is_topped_up_from_normal() {
        let document = Document::new();
        let sheet = StyleSheet::build(&document.styles);
        let hyperlink = sheet.format("Hyperlink").unwrap();
        let font = hyperlink.font.as_ref().unwrap();
        assert_eq!(font.color.as_deref(), Some("#0563C1"));
        assert_eq!(font.name.as_deref(), Some("Calibri"));
        assert_eq!(font.size, Some(Unit::from_point(11.0)));
    }

    #[test]
    fn test_baseless_style_tab_stops_resolve_idempotently() {
        use quire_dom::{TabAlignment, TabLeader, TabStops};

        let mut stops = TabStops::new();
        stops.add_tab_stop(Unit::from_centimeter(2.0), TabAlignment::Left, TabLeader::Spaces);
        stops.remove_tab_stop(Unit::from_centimeter(4.0));
        let mut document = Document::new();
        document.styles.register(Style::paragraph("RootTabs").with_format(ParagraphFormat {
            tab_stops: Some(stops),
            ..Default::default()
        }));
        document.add_section().add_paragraph().style = Some("RootTabs".to_string());

        resolve(&mut document).unwrap();
        let once = document.clone();
        resolve(&mut document).unwrap();
        assert_eq!(document, once);

        let BodyElement::Paragraph(paragraph) = &once.sections[0].body[0] else {
            panic!("expected a paragraph");
        };
        let stops = paragraph.format.as_ref().unwrap().tab_stops.as_ref().unwrap();
        assert!(stops.closed);
        assert!(stops.get_at(Unit::from_centimeter(4.0)).is_none());
    }

    #[test]
    fn test_baseless_style_bundle_borders_resolve_idempotently() {
        let mut document = Document::new();
        document.styles.register(Style::paragraph("Boxed").with_format(ParagraphFormat {
            borders: Some(Borders {
                width: Some(Unit::from_point(0.75)),
                ..Default::default()
            }),
            ..Default::default()
        }));
        document.add_section().add_paragraph().style = Some("Boxed".to_string());

        resolve(&mut document).unwrap();
        let once = document.clone();
        resolve(&mut document).unwrap();
        assert_eq!(document, once);

        let BodyElement::Paragraph(paragraph) = &once.sections[0].body[0] else {
            panic!("expected a paragraph");
        };
        let borders = paragraph.format.as_ref().unwrap().borders.as_ref().unwrap();
        for side in quire_dom::BorderSide::ALL {
            assert_eq!(borders.side(side).unwrap().width, Some(Unit::from_point(0.75)));
        }
    }

    #[test]
    fn test_cell_border_sides_take_row_bundle_values() {
        use quire_dom::Border;

        let mut document = Document::new();
        let table = document.add_section().add_table();
        table.add_column(None);
        let row = table.add_row();
        row.borders = Some(Borders {
            color: Some("#112233".to_string()),
            width: Some(Unit::from_point(1.0)),
            ..Default::default()
        });
        row.cells[0].borders = Some(Borders {
            left: Some(Border {
                width: Some(Unit::from_point(2.0)),
                ..Default::default()
            }),
            ..Default::default()
        });
        let document = resolved(document);

        let BodyElement::Table(table) = &document.sections[0].body[0] else {
            panic!("expected a table");
        };
        let borders = table.rows.list[0].cells[0].borders.as_ref().unwrap();
        let left = borders.left.as_ref().unwrap();
        assert_eq!(left.color.as_deref(), Some("#112233"));
        // the explicit side width wins over the bundle value
        assert_eq!(left.width, Some(Unit::from_point(2.0)));
        let right = borders.right.as_ref().unwrap();
        assert_eq!(right.color.as_deref(), Some("#112233"));
        assert_eq!(right.width, Some(Unit::from_point(1.0)));
    }

    #[test]
    fn test_row_without_style_adopts_the_table_style() {
        let mut document = Document::new();
        let table = document.add_section().add_table();
        table.add_column(None);
        table.add_row();
        let document = resolved(document);

        let BodyElement::Table(table) = &document.sections[0].body[0] else {
            panic!("expected a table");
        };
        assert_eq!(table.rows.list[0].style.as_deref(), Some(NORMAL));
    }

    #[test]
    fn test_text_area_empty_style_gets_the_sentinel() {
        let mut document = Document::new();
        let chart = document.add_section().add_chart();
        chart.header_area_mut().style = Some(String::new());
        let document = resolved(document);

        let BodyElement::Chart(chart) = &document.sections[0].body[0] else {
            panic!("expected a chart");
        };
        let area = chart.header_area.as_ref().unwrap();
        assert_eq!(area.style.as_deref(), Some(INVALID_STYLE_NAME));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let mut document = Document::new();
        document.styles.register(Style::paragraph("Emphasis").based_on("Heading3"));
        {
            let section = document.add_section();
            section.headers.primary_mut().add_paragraph().add_text("header");
            section.add_paragraph().style = Some("DanglingName".to_string());
            let table = section.add_table();
            table.shading = Some(Shading::with_color("#F0F0F0"));
            table.add_column(None);
            let row = table.add_row();
            row.cells[0].add_paragraph().add_footnote().add_paragraph().add_text("note");
            let chart = section.add_chart();
            *chart.x_axis_mut() = Axis::new().with_major_gridlines();
            chart.header_area_mut().add_legend();
            section.add_text_frame();
        }
        document.add_section().add_paragraph().style = Some("Emphasis".to_string());

        resolve(&mut document).unwrap();
        let once = document.clone();
        resolve(&mut document).unwrap();
        assert_eq!(document, once);
    }
}
