//! Document Object Model - document tree, styles, and attribute bundles
//!
//! This crate provides the passive document model for the cascade engine: a
//! tree of sections, paragraphs, tables, charts, and shapes whose formatting
//! attributes are all optional. Unset attributes are filled in later by the
//! cascade resolver in `quire-cascade`; this crate only stores values and
//! walks style chains.

mod borders;
mod chart;
mod document;
mod error;
mod font;
mod list_info;
pub mod meta;
mod page_setup;
mod paragraph;
mod paragraph_format;
mod section;
mod shading;
mod shape;
pub mod style;
mod tab_stops;
mod table;
mod unit;

pub use borders::*;
pub use chart::*;
pub use document::*;
pub use error::*;
pub use font::*;
pub use list_info::*;
pub use page_setup::*;
pub use paragraph::*;
pub use paragraph_format::*;
pub use section::*;
pub use shading::*;
pub use shape::*;
pub use style::*;
pub use tab_stops::*;
pub use table::*;
pub use unit::*;
