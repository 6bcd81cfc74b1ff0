//! Border attribute bundles
//!
//! Borders merge at two granularities: the bundle carries fallback values
//! (visible/style/width/color) that apply to any side without an explicit
//! value of its own, and each of the four sides is an independent `Border`
//! bundle with the same fields.

use crate::Unit;
use serde::{Deserialize, Serialize};

/// Line style of a border edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderStyle {
    None,
    Single,
    Dot,
    DashSmallGap,
    DashLargeGap,
    DashDot,
    DashDotDot,
}

/// A single border edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Border {
    /// Whether the edge is painted
    pub visible: Option<bool>,
    /// Line style
    pub style: Option<BorderStyle>,
    /// Line width
    pub width: Option<Unit>,
    /// Line color (CSS color string)
    pub color: Option<String>,
}

impl Border {
    /// Create new empty border attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all attributes are unset
    pub fn is_empty(&self) -> bool {
        self.visible.is_none()
            && self.style.is_none()
            && self.width.is_none()
            && self.color.is_none()
    }
}

/// Identifies one side of a `Borders` bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl BorderSide {
    /// All four sides, in the order sides are merged during cascade.
    pub const ALL: [BorderSide; 4] = [
        BorderSide::Left,
        BorderSide::Right,
        BorderSide::Top,
        BorderSide::Bottom,
    ];
}

/// The four borders of a paragraph, cell, row, column, or table, plus the
/// bundle-level fallback values applied to sides without explicit values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    /// Bundle-level fallback: whether edges are painted
    pub visible: Option<bool>,
    /// Bundle-level fallback: line style
    pub style: Option<BorderStyle>,
    /// Bundle-level fallback: line width
    pub width: Option<Unit>,
    /// Bundle-level fallback: line color
    pub color: Option<String>,

    /// Distance between the top border and the content
    pub distance_from_top: Option<Unit>,
    /// Distance between the bottom border and the content
    pub distance_from_bottom: Option<Unit>,
    /// Distance between the left border and the content
    pub distance_from_left: Option<Unit>,
    /// Distance between the right border and the content
    pub distance_from_right: Option<Unit>,

    pub left: Option<Border>,
    pub right: Option<Border>,
    pub top: Option<Border>,
    pub bottom: Option<Border>,
}

impl Borders {
    /// Create new empty border attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a side, if it has an explicit border object.
    pub fn side(&self, side: BorderSide) -> Option<&Border> {
        match side {
            BorderSide::Left => self.left.as_ref(),
            BorderSide::Right => self.right.as_ref(),
            BorderSide::Top => self.top.as_ref(),
            BorderSide::Bottom => self.bottom.as_ref(),
        }
    }

    /// Get a side mutably, materializing an empty border object if absent.
    pub fn side_mut(&mut self, side: BorderSide) -> &mut Border {
        let slot = match side {
            BorderSide::Left => &mut self.left,
            BorderSide::Right => &mut self.right,
            BorderSide::Top => &mut self.top,
            BorderSide::Bottom => &mut self.bottom,
        };
        slot.get_or_insert_with(Border::new)
    }

    /// Whether any bundle-level fallback value is set.
    pub fn has_bundle_values(&self) -> bool {
        self.visible.is_some()
            || self.style.is_some()
            || self.width.is_some()
            || self.color.is_some()
    }

    /// Check if all attributes, including all sides, are unset
    pub fn is_empty(&self) -> bool {
        !self.has_bundle_values()
            && self.distance_from_top.is_none()
            && self.distance_from_bottom.is_none()
            && self.distance_from_left.is_none()
            && self.distance_from_right.is_none()
            && self.left.as_ref().map_or(true, Border::is_empty)
            && self.right.as_ref().map_or(true, Border::is_empty)
            && self.top.as_ref().map_or(true, Border::is_empty)
            && self.bottom.as_ref().map_or(true, Border::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_mut_materializes() {
        let mut borders = Borders::new();
        assert!(borders.side(BorderSide::Left).is_none());
        borders.side_mut(BorderSide::Left).width = Some(Unit::from_point(0.5));
        assert_eq!(
            borders.side(BorderSide::Left).unwrap().width,
            Some(Unit::from_point(0.5))
        );
    }

    #[test]
    fn test_is_empty_sees_through_materialized_sides() {
        let mut borders = Borders::new();
        borders.side_mut(BorderSide::Top);
        assert!(borders.is_empty());
        borders.color = Some("#000000".to_string());
        assert!(!borders.is_empty());
    }
}
