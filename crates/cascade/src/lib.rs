//! Cascade Engine - format defaulting for the document model
//!
//! Takes a `quire-dom` document whose formatting attributes are sparsely
//! set and fills every gap from the element's style chain, its enclosing
//! elements, the previous section, and the built-in defaults, in one
//! top-down pass. The typical consumer is a renderer that wants every
//! attribute answered without re-walking inheritance chains per query.
//!
//! ```
//! use quire_dom::Document;
//!
//! let mut document = Document::new();
//! document.add_section().add_paragraph().add_text("hello");
//! quire_cascade::resolve(&mut document).unwrap();
//!
//! let quire_dom::BodyElement::Paragraph(paragraph) = &document.sections[0].body[0] else {
//!     unreachable!()
//! };
//! assert!(paragraph.format.is_some());
//! ```

pub mod merge;
mod resolver;

pub use resolver::{resolve, Resolver, StyleSheet};
