//! Merge primitives
//!
//! Every merge fills unset attributes of the specific bundle from the
//! fallback bundle and never overwrites a value that is already set. All
//! merges are idempotent: merging the same fallback twice leaves the bundle
//! unchanged after the first pass.

use quire_dom::{
    Border, BorderSide, Borders, Font, ListInfo, PageSetup, ParagraphFormat, Shading, TabStops,
};

macro_rules! fill {
    ($specific:ident, $fallback:ident, $($field:ident),+ $(,)?) => {
        $(
            if $specific.$field.is_none() {
                $specific.$field = $fallback.$field;
            }
        )+
    };
}

macro_rules! fill_clone {
    ($specific:ident, $fallback:ident, $($field:ident),+ $(,)?) => {
        $(
            if $specific.$field.is_none() {
                $specific.$field = $fallback.$field.clone();
            }
        )+
    };
}

/// Fill unset font attributes from `fallback`.
pub fn merge_font(specific: &mut Font, fallback: &Font) {
    fill!(specific, fallback, size, bold, italic, underline, superscript, subscript);
    fill_clone!(specific, fallback, name, color);
}

/// Fill unset shading attributes from `fallback`.
pub fn merge_shading(specific: &mut Shading, fallback: &Shading) {
    fill!(specific, fallback, visible);
    fill_clone!(specific, fallback, color);
}

/// Fill unset attributes of a single border edge from `fallback`.
pub fn merge_border(specific: &mut Border, fallback: &Border) {
    fill!(specific, fallback, visible, style, width);
    fill_clone!(specific, fallback, color);
}

/// Fill unset border attributes from `fallback`: the bundle-level fallback
/// values, the four content distances, and then each side the fallback has
/// an explicit border for.
pub fn merge_borders(specific: &mut Borders, fallback: &Borders) {
    fill!(
        specific,
        fallback,
        visible,
        style,
        width,
        distance_from_top,
        distance_from_bottom,
        distance_from_left,
        distance_from_right,
    );
    fill_clone!(specific, fallback, color);
    for side in BorderSide::ALL {
        if let Some(fallback_side) = fallback.side(side) {
            merge_border(specific.side_mut(side), fallback_side);
        }
    }
}

/// Apply the bundle-level fallback values (visible/style/width/color) to
/// every side that lacks them, materializing all four sides. A no-op when
/// the bundle carries no fallback values.
pub fn apply_bundle_fallback(borders: &mut Borders) {
    if !borders.has_bundle_values() {
        return;
    }
    let bundle = Border {
        visible: borders.visible,
        style: borders.style,
        width: borders.width,
        color: borders.color.clone(),
    };
    for side in BorderSide::ALL {
        merge_border(borders.side_mut(side), &bundle);
    }
}

/// Inherit the fallback's tab stops into `specific`, then close the list.
///
/// A closed list inherits nothing. An open list takes every fallback stop
/// whose position carries no local entry; a local tombstone at a position
/// blocks inheritance there. Tombstones are dropped once the list closes.
pub fn merge_tab_stops(specific: &mut TabStops, fallback: &TabStops) {
    if specific.closed {
        return;
    }
    for stop in fallback {
        if stop.add && specific.get_at(stop.position).is_none() {
            specific.add_tab_stop(stop.position, stop.alignment, stop.leader);
        }
    }
    specific.drop_tombstones();
    specific.closed = true;
}

/// Fill unset list attributes from `fallback`.
pub fn merge_list_info(specific: &mut ListInfo, fallback: &ListInfo) {
    fill!(specific, fallback, list_type, number_position, continue_previous_list);
}

/// Fill unset paragraph format attributes from `fallback`: every scalar
/// field, then each composite sub-bundle. A composite the fallback carries
/// is deep-cloned when `specific` has none of its own and merged field by
/// field when it does.
pub fn merge_paragraph_format(specific: &mut ParagraphFormat, fallback: &ParagraphFormat) {
    fill!(
        specific,
        fallback,
        alignment,
        first_line_indent,
        left_indent,
        right_indent,
        space_before,
        space_after,
        line_spacing_rule,
        line_spacing,
        widow_control,
        keep_together,
        keep_with_next,
        page_break_before,
        outline_level,
    );

    if let Some(fallback_font) = &fallback.font {
        match &mut specific.font {
            Some(font) => merge_font(font, fallback_font),
            None => specific.font = Some(fallback_font.clone()),
        }
    }

    if let Some(fallback_shading) = &fallback.shading {
        match &mut specific.shading {
            Some(shading) => merge_shading(shading, fallback_shading),
            None => specific.shading = Some(fallback_shading.clone()),
        }
    }

    if let Some(fallback_borders) = &fallback.borders {
        match &mut specific.borders {
            Some(borders) => merge_borders(borders, fallback_borders),
            None => specific.borders = Some(fallback_borders.clone()),
        }
    }
    if let Some(borders) = &mut specific.borders {
        apply_bundle_fallback(borders);
    }

    if fallback.tab_stops.is_some() || specific.tab_stops.is_some() {
        let empty = TabStops::new();
        let fallback_stops = fallback.tab_stops.as_ref().unwrap_or(&empty);
        merge_tab_stops(specific.tab_stops_mut(), fallback_stops);
    }

    if let Some(fallback_list) = &fallback.list_info {
        match &mut specific.list_info {
            Some(list) => merge_list_info(list, fallback_list),
            None => specific.list_info = Some(fallback_list.clone()),
        }
    }
}

/// Fill unset page setup attributes from `fallback`.
///
/// Width and height are special-cased around the named page format: when
/// both are unset they come from the format if one is set, otherwise from
/// the fallback together with its format; when exactly one is unset, only
/// the missing dimension is filled, from the format if set and from the
/// fallback otherwise. `starting_number` never inherits; an unset value
/// means "continue numbering".
pub fn merge_page_setup(specific: &mut PageSetup, fallback: &PageSetup) {
    if specific.page_width.is_none() && specific.page_height.is_none() {
        match specific.page_format {
            None => {
                specific.page_width = fallback.page_width;
                specific.page_height = fallback.page_height;
                specific.page_format = fallback.page_format;
            }
            Some(format) => {
                let (width, height) = format.page_size();
                specific.page_width = Some(width);
                specific.page_height = Some(height);
            }
        }
    } else {
        if specific.page_width.is_none() {
            specific.page_width = match specific.page_format {
                Some(format) => Some(format.page_size().0),
                None => fallback.page_width,
            };
        }
        if specific.page_height.is_none() {
            specific.page_height = match specific.page_format {
                Some(format) => Some(format.page_size().1),
                None => fallback.page_height,
            };
        }
    }

    fill!(
        specific,
        fallback,
        section_start,
        orientation,
        top_margin,
        bottom_margin,
        left_margin,
        right_margin,
        header_distance,
        footer_distance,
        odd_and_even_pages_header_footer,
        different_first_page_header_footer,
        mirror_margins,
        horizontal_page_break,
    );
}
