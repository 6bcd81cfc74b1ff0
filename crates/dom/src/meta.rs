//! By-name dynamic attribute access
//!
//! External tools (document-definition-language emitters, inspectors)
//! address attributes by dotted path, e.g. `"Format.Font.Size"`. Instead of
//! runtime type introspection, every participating type declares a static
//! attribute table via the [`dyn_attrs!`] macro: each entry maps an
//! attribute name to a typed optional field (a leaf value) or to a child
//! document object that the path may descend into.
//!
//! An access with a malformed path fails with
//! [`DomError::InvalidAttributeName`] for that access only; it never
//! invalidates the tree or an ongoing traversal.

use crate::{
    Axis, Border, BorderStyle, Borders, BreakType, Cell, Chart, Column, DataLabel, DomError,
    FillFormat, Font, Footnote, Gridlines, HeaderFooter, Legend, LineFormat, LineSpacingRule,
    ListInfo, ListType, Orientation, OutlineLevel, PageFormat, PageSetup, Paragraph,
    ParagraphAlignment, ParagraphFormat, PlotArea, Result, Row, RowHeightRule, Section, Shading,
    Table, TextArea, TextFrame, Underline, Unit, VerticalAlignment,
};

/// A value read or written through the dynamic attribute interface.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Int(i32),
    Float(f64),
    Unit(Unit),
    Str(String),
}

/// One named slot of a document object: either a leaf value or a child
/// object the path may descend into. `None` means the slot is unset.
pub enum AttrSlot<'a> {
    Value(Option<AttrValue>),
    Object(Option<&'a dyn DynAttrs>),
}

/// Conversion between a typed field and [`AttrValue`].
pub trait AttrLeaf: Sized {
    fn to_attr(&self) -> AttrValue;
    fn from_attr(value: &AttrValue) -> Option<Self>;
}

impl AttrLeaf for bool {
    fn to_attr(&self) -> AttrValue {
        AttrValue::Bool(*self)
    }
    fn from_attr(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl AttrLeaf for i32 {
    fn to_attr(&self) -> AttrValue {
        AttrValue::Int(*self)
    }
    fn from_attr(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl AttrLeaf for f64 {
    fn to_attr(&self) -> AttrValue {
        AttrValue::Float(*self)
    }
    fn from_attr(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Float(f) => Some(*f),
            AttrValue::Int(i) => Some(f64::from(*i)),
            _ => None,
        }
    }
}

impl AttrLeaf for Unit {
    fn to_attr(&self) -> AttrValue {
        AttrValue::Unit(*self)
    }
    fn from_attr(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Unit(u) => Some(*u),
            // A bare number is interpreted as points.
            AttrValue::Float(f) => Some(Unit::from_point(*f)),
            AttrValue::Int(i) => Some(Unit::from_point(f64::from(*i))),
            _ => None,
        }
    }
}

impl AttrLeaf for String {
    fn to_attr(&self) -> AttrValue {
        AttrValue::Str(self.clone())
    }
    fn from_attr(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

/// Declare [`AttrLeaf`] for a fieldless enum; the wire representation is the
/// variant name as a string.
macro_rules! attr_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl AttrLeaf for $ty {
            fn to_attr(&self) -> AttrValue {
                AttrValue::Str(
                    match self {
                        $( Self::$variant => stringify!($variant), )+
                    }
                    .to_string(),
                )
            }
            fn from_attr(value: &AttrValue) -> Option<Self> {
                match value {
                    AttrValue::Str(s) => match s.as_str() {
                        $( stringify!($variant) => Some(Self::$variant), )+
                        _ => None,
                    },
                    _ => None,
                }
            }
        }
    };
}

attr_enum!(Underline { None, Single, Words, Dotted, Dash, DashDot, DashDotDot });
attr_enum!(BorderStyle { None, Single, Dot, DashSmallGap, DashLargeGap, DashDot, DashDotDot });
attr_enum!(ParagraphAlignment { Left, Center, Right, Justify });
attr_enum!(LineSpacingRule { Single, OnePtFive, Double, AtLeast, Exactly, Multiple });
attr_enum!(OutlineLevel { BodyText, Level1, Level2, Level3, Level4, Level5, Level6 });
attr_enum!(ListType { BulletList1, BulletList2, BulletList3, NumberList1, NumberList2, NumberList3 });
attr_enum!(BreakType { BreakNextPage, BreakEvenPage, BreakOddPage });
attr_enum!(Orientation { Portrait, Landscape });
attr_enum!(PageFormat { A0, A1, A2, A3, A4, A5, A6, B5, Letter, Legal, Ledger, P11x17 });
attr_enum!(RowHeightRule { Auto, Exactly, AtLeast });
attr_enum!(VerticalAlignment { Top, Center, Bottom });

/// A document object whose attributes can be addressed by name.
pub trait DynAttrs {
    /// Type name used in error messages
    fn type_name(&self) -> &'static str;

    /// Read the named slot. Fails for an unknown name.
    fn attr(&self, name: &str) -> Result<AttrSlot<'_>>;

    /// Set the named leaf value. Fails for an unknown name, for an
    /// object-valued name, or for a type-mismatched value.
    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<()>;

    /// Descend into the named child object, materializing it with default
    /// (all-unset) attributes if absent. Fails for an unknown name or a
    /// leaf-valued name.
    fn child_mut(&mut self, name: &str) -> Result<&mut dyn DynAttrs>;
}

/// Declare the static attribute table of a type and implement [`DynAttrs`]
/// from it.
macro_rules! dyn_attrs {
    ($ty:ty, $tn:literal,
        values { $($vname:literal => $vfield:ident: $vty:ty),* $(,)? },
        objects { $($oname:literal => $ofield:ident: $oty:ty),* $(,)? } $(,)?
    ) => {
        impl DynAttrs for $ty {
            fn type_name(&self) -> &'static str {
                $tn
            }

            fn attr(&self, name: &str) -> Result<AttrSlot<'_>> {
                match name {
                    $( $vname => Ok(AttrSlot::Value(self.$vfield.as_ref().map(AttrLeaf::to_attr))), )*
                    $( $oname => Ok(AttrSlot::Object(
                        self.$ofield.as_ref().map(|o| o as &dyn DynAttrs),
                    )), )*
                    _ => Err(DomError::InvalidAttributeName {
                        type_name: $tn,
                        name: name.to_string(),
                    }),
                }
            }

            // `value` goes unused for types whose attributes are all objects
            #[allow(unused_variables)]
            fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<()> {
                match name {
                    $( $vname => match <$vty as AttrLeaf>::from_attr(&value) {
                        Some(v) => {
                            self.$vfield = Some(v);
                            Ok(())
                        }
                        None => Err(DomError::InvalidAttributeValue {
                            type_name: $tn,
                            name: name.to_string(),
                        }),
                    }, )*
                    $( $oname => Err(DomError::InvalidAttributeValue {
                        type_name: $tn,
                        name: name.to_string(),
                    }), )*
                    _ => Err(DomError::InvalidAttributeName {
                        type_name: $tn,
                        name: name.to_string(),
                    }),
                }
            }

            fn child_mut(&mut self, name: &str) -> Result<&mut dyn DynAttrs> {
                match name {
                    $( $oname => Ok(self.$ofield.get_or_insert_with(<$oty>::default)
                        as &mut dyn DynAttrs), )*
                    _ => Err(DomError::InvalidAttributeName {
                        type_name: $tn,
                        name: name.to_string(),
                    }),
                }
            }
        }
    };
}

dyn_attrs!(Font, "Font",
    values {
        "Name" => name: String,
        "Size" => size: Unit,
        "Bold" => bold: bool,
        "Italic" => italic: bool,
        "Underline" => underline: Underline,
        "Superscript" => superscript: bool,
        "Subscript" => subscript: bool,
        "Color" => color: String,
    },
    objects {},
);

dyn_attrs!(Shading, "Shading",
    values {
        "Visible" => visible: bool,
        "Color" => color: String,
    },
    objects {},
);

dyn_attrs!(Border, "Border",
    values {
        "Visible" => visible: bool,
        "Style" => style: BorderStyle,
        "Width" => width: Unit,
        "Color" => color: String,
    },
    objects {},
);

dyn_attrs!(Borders, "Borders",
    values {
        "Visible" => visible: bool,
        "Style" => style: BorderStyle,
        "Width" => width: Unit,
        "Color" => color: String,
        "DistanceFromTop" => distance_from_top: Unit,
        "DistanceFromBottom" => distance_from_bottom: Unit,
        "DistanceFromLeft" => distance_from_left: Unit,
        "DistanceFromRight" => distance_from_right: Unit,
    },
    objects {
        "Left" => left: Border,
        "Right" => right: Border,
        "Top" => top: Border,
        "Bottom" => bottom: Border,
    },
);

dyn_attrs!(ListInfo, "ListInfo",
    values {
        "ListType" => list_type: ListType,
        "NumberPosition" => number_position: Unit,
        "ContinuePreviousList" => continue_previous_list: bool,
    },
    objects {},
);

dyn_attrs!(PageSetup, "PageSetup",
    values {
        "SectionStart" => section_start: BreakType,
        "Orientation" => orientation: Orientation,
        "PageWidth" => page_width: Unit,
        "PageHeight" => page_height: Unit,
        "PageFormat" => page_format: PageFormat,
        "StartingNumber" => starting_number: i32,
        "TopMargin" => top_margin: Unit,
        "BottomMargin" => bottom_margin: Unit,
        "LeftMargin" => left_margin: Unit,
        "RightMargin" => right_margin: Unit,
        "HeaderDistance" => header_distance: Unit,
        "FooterDistance" => footer_distance: Unit,
        "OddAndEvenPagesHeaderFooter" => odd_and_even_pages_header_footer: bool,
        "DifferentFirstPageHeaderFooter" => different_first_page_header_footer: bool,
        "MirrorMargins" => mirror_margins: bool,
        "HorizontalPageBreak" => horizontal_page_break: bool,
    },
    objects {},
);

dyn_attrs!(ParagraphFormat, "ParagraphFormat",
    values {
        "Alignment" => alignment: ParagraphAlignment,
        "FirstLineIndent" => first_line_indent: Unit,
        "LeftIndent" => left_indent: Unit,
        "RightIndent" => right_indent: Unit,
        "SpaceBefore" => space_before: Unit,
        "SpaceAfter" => space_after: Unit,
        "LineSpacingRule" => line_spacing_rule: LineSpacingRule,
        "LineSpacing" => line_spacing: Unit,
        "WidowControl" => widow_control: bool,
        "KeepTogether" => keep_together: bool,
        "KeepWithNext" => keep_with_next: bool,
        "PageBreakBefore" => page_break_before: bool,
        "OutlineLevel" => outline_level: OutlineLevel,
    },
    objects {
        "Font" => font: Font,
        "Shading" => shading: Shading,
        "Borders" => borders: Borders,
        "ListInfo" => list_info: ListInfo,
    },
);

dyn_attrs!(LineFormat, "LineFormat",
    values {
        "Visible" => visible: bool,
        "Width" => width: Unit,
        "Color" => color: String,
    },
    objects {},
);

dyn_attrs!(FillFormat, "FillFormat",
    values {
        "Visible" => visible: bool,
        "Color" => color: String,
    },
    objects {},
);

dyn_attrs!(Gridlines, "Gridlines",
    values {},
    objects {
        "LineFormat" => line_format: LineFormat,
    },
);

dyn_attrs!(Axis, "Axis",
    values {
        "HasMajorGridlines" => has_major_gridlines: bool,
        "HasMinorGridlines" => has_minor_gridlines: bool,
    },
    objects {
        "MajorGridlines" => major_gridlines: Gridlines,
        "MinorGridlines" => minor_gridlines: Gridlines,
        "LineFormat" => line_format: LineFormat,
    },
);

dyn_attrs!(PlotArea, "PlotArea",
    values {},
    objects {
        "LineFormat" => line_format: LineFormat,
        "FillFormat" => fill_format: FillFormat,
    },
);

dyn_attrs!(DataLabel, "DataLabel",
    values {
        "Style" => style: String,
    },
    objects {
        "Font" => font: Font,
    },
);

dyn_attrs!(Legend, "Legend",
    values {
        "Style" => style: String,
    },
    objects {
        "Format" => format: ParagraphFormat,
    },
);

dyn_attrs!(TextArea, "TextArea",
    values {
        "Style" => style: String,
    },
    objects {
        "Format" => format: ParagraphFormat,
    },
);

dyn_attrs!(Chart, "Chart",
    values {
        "Style" => style: String,
    },
    objects {
        "Format" => format: ParagraphFormat,
        "LineFormat" => line_format: LineFormat,
        "FillFormat" => fill_format: FillFormat,
        "XAxis" => x_axis: Axis,
        "YAxis" => y_axis: Axis,
        "ZAxis" => z_axis: Axis,
        "PlotArea" => plot_area: PlotArea,
        "DataLabel" => data_label: DataLabel,
        "HeaderArea" => header_area: TextArea,
        "FooterArea" => footer_area: TextArea,
    },
);

dyn_attrs!(Paragraph, "Paragraph",
    values {
        "Style" => style: String,
    },
    objects {
        "Format" => format: ParagraphFormat,
    },
);

dyn_attrs!(Footnote, "Footnote",
    values {
        "Style" => style: String,
    },
    objects {
        "Format" => format: ParagraphFormat,
    },
);

dyn_attrs!(HeaderFooter, "HeaderFooter",
    values {
        "Style" => style: String,
    },
    objects {
        "Format" => format: ParagraphFormat,
    },
);

dyn_attrs!(Section, "Section",
    values {},
    objects {
        "PageSetup" => page_setup: PageSetup,
    },
);

dyn_attrs!(Table, "Table",
    values {
        "Style" => style: String,
        "LeftPadding" => left_padding: Unit,
        "RightPadding" => right_padding: Unit,
        "TopPadding" => top_padding: Unit,
        "BottomPadding" => bottom_padding: Unit,
    },
    objects {
        "Format" => format: ParagraphFormat,
        "Shading" => shading: Shading,
        "Borders" => borders: Borders,
    },
);

dyn_attrs!(Column, "Column",
    values {
        "Style" => style: String,
        "Width" => width: Unit,
        "LeftPadding" => left_padding: Unit,
        "RightPadding" => right_padding: Unit,
    },
    objects {
        "Format" => format: ParagraphFormat,
        "Shading" => shading: Shading,
        "Borders" => borders: Borders,
    },
);

dyn_attrs!(Row, "Row",
    values {
        "Style" => style: String,
        "Height" => height: Unit,
        "HeightRule" => height_rule: RowHeightRule,
        "VerticalAlignment" => vertical_alignment: VerticalAlignment,
        "TopPadding" => top_padding: Unit,
        "BottomPadding" => bottom_padding: Unit,
    },
    objects {
        "Format" => format: ParagraphFormat,
        "Shading" => shading: Shading,
        "Borders" => borders: Borders,
    },
);

dyn_attrs!(Cell, "Cell",
    values {
        "Style" => style: String,
        "VerticalAlignment" => vertical_alignment: VerticalAlignment,
    },
    objects {
        "Format" => format: ParagraphFormat,
        "Shading" => shading: Shading,
        "Borders" => borders: Borders,
    },
);

dyn_attrs!(TextFrame, "TextFrame",
    values {
        "Width" => width: Unit,
        "Height" => height: Unit,
    },
    objects {},
);

fn split_path<'p>(type_name: &'static str, path: &'p str) -> Result<Vec<&'p str>> {
    let segments: Vec<&str> = path.split('.').collect();
    if path.is_empty() || segments.iter().any(|s| s.is_empty()) {
        return Err(DomError::InvalidAttributeName {
            type_name,
            name: path.to_string(),
        });
    }
    Ok(segments)
}

/// Read the value at the dotted `path`. `Ok(None)` means the attribute (or
/// an object along the way) is unset. Fails for a malformed path, an
/// unknown name, a path that descends past a leaf value, or a path ending
/// on a child object instead of a leaf.
pub fn get(obj: &dyn DynAttrs, path: &str) -> Result<Option<AttrValue>> {
    let segments = split_path(obj.type_name(), path)?;
    let mut current = obj;
    let last = segments.len() - 1;
    for (i, segment) in segments.iter().enumerate() {
        match current.attr(segment)? {
            AttrSlot::Value(value) => {
                if i == last {
                    return Ok(value);
                }
                return Err(DomError::InvalidAttributeName {
                    type_name: current.type_name(),
                    name: (*segment).to_string(),
                });
            }
            AttrSlot::Object(child) => {
                if i == last {
                    return Err(DomError::InvalidAttributeName {
                        type_name: current.type_name(),
                        name: (*segment).to_string(),
                    });
                }
                match child {
                    Some(child) => current = child,
                    None => return Ok(None),
                }
            }
        }
    }
    Ok(None)
}

/// Whether the attribute at the dotted `path` is unset. An unset object
/// along the way counts as unset. A path ending on a child object reports
/// whether that object is present.
pub fn is_null(obj: &dyn DynAttrs, path: &str) -> Result<bool> {
    let segments = split_path(obj.type_name(), path)?;
    let mut current = obj;
    let last = segments.len() - 1;
    for (i, segment) in segments.iter().enumerate() {
        match current.attr(segment)? {
            AttrSlot::Value(value) => {
                if i == last {
                    return Ok(value.is_none());
                }
                return Err(DomError::InvalidAttributeName {
                    type_name: current.type_name(),
                    name: (*segment).to_string(),
                });
            }
            AttrSlot::Object(child) => {
                if i == last {
                    return Ok(child.is_none());
                }
                match child {
                    Some(child) => current = child,
                    None => return Ok(true),
                }
            }
        }
    }
    Ok(true)
}

/// Write `value` to the attribute at the dotted `path`, materializing
/// absent child objects along the way.
pub fn set(obj: &mut dyn DynAttrs, path: &str, value: AttrValue) -> Result<()> {
    let segments = split_path(obj.type_name(), path)?;
    let mut current = obj;
    for segment in &segments[..segments.len() - 1] {
        current = current.child_mut(segment)?;
    }
    current.set_attr(segments[segments.len() - 1], value)
}
