//! List numbering attribute bundle

use crate::Unit;
use serde::{Deserialize, Serialize};

/// Kind of list a paragraph participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListType {
    BulletList1,
    BulletList2,
    BulletList3,
    NumberList1,
    NumberList2,
    NumberList3,
}

/// List membership attributes of a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListInfo {
    /// Kind of list
    pub list_type: Option<ListType>,
    /// Horizontal position of the bullet or number
    pub number_position: Option<Unit>,
    /// Continue numbering from the previous list of the same type
    pub continue_previous_list: Option<bool>,
}

impl ListInfo {
    /// Create new empty list attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all attributes are unset
    pub fn is_empty(&self) -> bool {
        self.list_type.is_none()
            && self.number_position.is_none()
            && self.continue_previous_list.is_none()
    }
}
