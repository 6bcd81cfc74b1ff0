//! Document root and renderer binding

use crate::{DomError, Result, Section, Styles};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Document metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
}

/// Identity token of an external renderer. Two tokens compare equal only if
/// they are the same identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RendererId(Uuid);

impl RendererId {
    /// Create a fresh renderer identity
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RendererId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RendererId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The root of a document tree: metadata, the style registry, and the
/// ordered list of sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub info: DocumentInfo,
    pub styles: Styles,
    pub sections: Vec<Section>,
    /// The renderer this document is exclusively bound to, if any. A bound
    /// document must not be modified by anyone but that renderer.
    renderer: Option<RendererId>,
}

impl Document {
    /// Create a new empty document with the built-in styles
    pub fn new() -> Self {
        Self {
            info: DocumentInfo::default(),
            styles: Styles::new(),
            sections: Vec::new(),
            renderer: None,
        }
    }

    /// Append a new empty section and return a mutable reference to it
    pub fn add_section(&mut self) -> &mut Section {
        self.sections.push(Section::new());
        self.sections.last_mut().expect("just pushed")
    }

    /// Bind this document to a renderer. Binding is an exclusive lock:
    /// rebinding to the same identity is a no-op, binding to a different
    /// identity while already bound fails with `RendererConflict` and
    /// leaves the existing binding untouched.
    pub fn bind_to_renderer(&mut self, renderer: RendererId) -> Result<()> {
        match self.renderer {
            Some(current) if current != renderer => Err(DomError::RendererConflict),
            _ => {
                self.renderer = Some(renderer);
                Ok(())
            }
        }
    }

    /// Whether the document is bound to a renderer
    pub fn is_bound(&self) -> bool {
        self.renderer.is_some()
    }

    /// The renderer this document is bound to, if any
    pub fn bound_renderer(&self) -> Option<RendererId> {
        self.renderer
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_unbound_document() {
        let mut doc = Document::new();
        assert!(!doc.is_bound());
        let r = RendererId::new();
        doc.bind_to_renderer(r).unwrap();
        assert!(doc.is_bound());
        assert_eq!(doc.bound_renderer(), Some(r));
    }

    #[test]
    fn test_rebind_same_renderer_is_noop() {
        let mut doc = Document::new();
        let r = RendererId::new();
        doc.bind_to_renderer(r).unwrap();
        doc.bind_to_renderer(r).unwrap();
        assert_eq!(doc.bound_renderer(), Some(r));
    }

    #[test]
    fn test_clone_is_a_deep_copy() {
        let mut doc = Document::new();
        doc.add_section().add_paragraph().add_text("original");
        let mut copy = doc.clone();
        copy.sections[0].add_paragraph();
        copy.info.title = Some("copy".to_string());
        assert_eq!(doc.sections[0].body.len(), 1);
        assert_eq!(doc.info.title, None);
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let mut doc = Document::new();
        doc.info.title = Some("Quarterly report".to_string());
        doc.add_section().add_paragraph().add_text("hello");
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_rebind_different_renderer_fails_and_keeps_binding() {
        let mut doc = Document::new();
        let r1 = RendererId::new();
        let r2 = RendererId::new();
        doc.bind_to_renderer(r1).unwrap();
        let err = doc.bind_to_renderer(r2).unwrap_err();
        assert!(matches!(err, DomError::RendererConflict));
        assert_eq!(doc.bound_renderer(), Some(r1));
    }
}
