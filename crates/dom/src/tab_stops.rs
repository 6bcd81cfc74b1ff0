//! Tab stop list
//!
//! Tab stops are an ordered, position-keyed list. A stop can be an "add"
//! entry or a tombstone left by `remove_tab_stop`; tombstones suppress
//! inheritance of a stop at that position during cascade resolution and are
//! physically dropped once the list is closed.

use crate::Unit;
use serde::{Deserialize, Serialize};

/// Alignment of text at a tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TabAlignment {
    #[default]
    Left,
    Center,
    Right,
    Decimal,
}

/// Leader characters drawn up to a tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TabLeader {
    #[default]
    Spaces,
    Dots,
    Dashes,
    Heavy,
    MiddleDot,
}

/// A single tab stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabStop {
    /// Position measured from the left indent
    pub position: Unit,
    pub alignment: TabAlignment,
    pub leader: TabLeader,
    /// True for a real stop, false for a removal tombstone
    pub add: bool,
}

impl TabStop {
    /// Create a left-aligned tab stop at the given position
    pub fn new(position: Unit) -> Self {
        Self {
            position,
            alignment: TabAlignment::Left,
            leader: TabLeader::Spaces,
            add: true,
        }
    }
}

/// An ordered collection of tab stops.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabStops {
    /// Once closed, the list is complete and inherits nothing further.
    pub closed: bool,
    stops: Vec<TabStop>,
}

impl TabStops {
    /// Create a new, open, empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tab stop, keeping the list ordered by position. An existing
    /// entry at the same position (including a tombstone) is replaced.
    pub fn add_tab_stop(&mut self, position: Unit, alignment: TabAlignment, leader: TabLeader) {
        let stop = TabStop {
            position,
            alignment,
            leader,
            add: true,
        };
        self.insert(stop);
    }

    /// Mark the stop at the given position as removed. The tombstone blocks
    /// inheritance of a stop at that position.
    pub fn remove_tab_stop(&mut self, position: Unit) {
        let stop = TabStop {
            add: false,
            ..TabStop::new(position)
        };
        self.insert(stop);
    }

    fn insert(&mut self, stop: TabStop) {
        if let Some(existing) = self.stops.iter_mut().find(|s| s.position == stop.position) {
            *existing = stop;
            return;
        }
        let idx = self
            .stops
            .iter()
            .position(|s| s.position > stop.position)
            .unwrap_or(self.stops.len());
        self.stops.insert(idx, stop);
    }

    /// Get the entry at the given position, tombstones included.
    pub fn get_at(&self, position: Unit) -> Option<&TabStop> {
        self.stops.iter().find(|s| s.position == position)
    }

    /// Drop every tombstone from the list.
    pub fn drop_tombstones(&mut self) {
        self.stops.retain(|s| s.add);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TabStop> {
        self.stops.iter()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl<'a> IntoIterator for &'a TabStops {
    type Item = &'a TabStop;
    type IntoIter = std::slice::Iter<'a, TabStop>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}
