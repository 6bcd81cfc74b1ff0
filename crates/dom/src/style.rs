//! Style system - named, inheritable paragraph format bundles
//!
//! Styles form acyclic `base_style` chains terminating at a root style
//! (normally `Normal`). The registry only stores and validates styles;
//! resolving a style chain into an effective format is the cascade
//! engine's job.

use crate::{
    DomError, Font, ParagraphFormat, ParagraphAlignment, Result, TabAlignment, TabLeader,
    TabStops, Underline, Unit,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Name of the root paragraph style.
pub const NORMAL: &str = "Normal";
/// Name of the sentinel style substituted for unknown style names. Its
/// appearance is deliberately jarring so the substitution is visible in
/// rendered output.
pub const INVALID_STYLE_NAME: &str = "InvalidStyleName";
/// Fixed style name for header paragraphs.
pub const HEADER: &str = "Header";
/// Fixed style name for footer paragraphs.
pub const FOOTER: &str = "Footer";
/// Fixed style name for footnote paragraphs.
pub const FOOTNOTE: &str = "Footnote";

/// The kind of a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleType {
    /// Applies to whole paragraphs (block and run attributes)
    Paragraph,
    /// Applies to runs only; not a complete paragraph format on its own
    Character,
}

/// A named, partially-specified paragraph format with an optional base style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub name: String,
    pub style_type: StyleType,
    /// Name of the style this one inherits from; `None` for root styles
    pub base_style: Option<String>,
    /// The attributes this style sets (gaps inherit from the base chain)
    pub paragraph_format: ParagraphFormat,
}

impl Style {
    /// Create a new paragraph style
    pub fn paragraph(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style_type: StyleType::Paragraph,
            base_style: None,
            paragraph_format: ParagraphFormat::default(),
        }
    }

    /// Create a new character style
    pub fn character(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style_type: StyleType::Character,
            base_style: None,
            paragraph_format: ParagraphFormat::default(),
        }
    }

    /// Set the base style
    pub fn based_on(mut self, base: impl Into<String>) -> Self {
        self.base_style = Some(base.into());
        self
    }

    /// Set the paragraph format
    pub fn with_format(mut self, format: ParagraphFormat) -> Self {
        self.paragraph_format = format;
        self
    }
}

/// Registry of styles, keyed by name. Created with the built-in styles
/// already registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Styles {
    styles: HashMap<String, Style>,
}

impl Styles {
    /// Create a registry with the built-in styles
    pub fn new() -> Self {
        let mut styles = Self {
            styles: HashMap::new(),
        };
        styles.register_built_in_styles();
        styles
    }

    fn register_built_in_styles(&mut self) {
        let normal = Style::paragraph(NORMAL).with_format(ParagraphFormat {
            alignment: Some(ParagraphAlignment::Left),
            space_after: Some(Unit::from_point(8.0)),
            font: Some(Font {
                name: Some("Calibri".to_string()),
                size: Some(Unit::from_point(11.0)),
                color: Some("#000000".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        self.register(normal);

        // The sentinel for dangling style references: distinct font, bold,
        // red, so a bad reference is impossible to miss in output.
        let invalid = Style::paragraph(INVALID_STYLE_NAME)
            .based_on(NORMAL)
            .with_format(ParagraphFormat {
                font: Some(Font {
                    name: Some("Courier New".to_string()),
                    bold: Some(true),
                    color: Some("#CF0000".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            });
        self.register(invalid);

        self.register(heading(1, 16.0));
        self.register(heading(2, 13.0));
        self.register(heading(3, 12.0));

        // Header and footer styles carry a centered and a right-aligned tab
        // stop so content can be laid out in three zones.
        let mut hf_tabs = TabStops::new();
        hf_tabs.add_tab_stop(Unit::from_centimeter(8.0), TabAlignment::Center, TabLeader::Spaces);
        hf_tabs.add_tab_stop(Unit::from_centimeter(16.0), TabAlignment::Right, TabLeader::Spaces);
        let hf_format = ParagraphFormat {
            space_after: Some(Unit::zero()),
            tab_stops: Some(hf_tabs),
            ..Default::default()
        };
        self.register(Style::paragraph(HEADER).based_on(NORMAL).with_format(hf_format.clone()));
        self.register(Style::paragraph(FOOTER).based_on(NORMAL).with_format(hf_format));

        let footnote = Style::paragraph(FOOTNOTE)
            .based_on(NORMAL)
            .with_format(ParagraphFormat {
                space_after: Some(Unit::from_point(4.0)),
                font: Some(Font {
                    size: Some(Unit::from_point(9.0)),
                    ..Default::default()
                }),
                ..Default::default()
            });
        self.register(footnote);

        let hyperlink = Style::character("Hyperlink").with_format(ParagraphFormat {
            font: Some(Font {
                color: Some("#0563C1".to_string()),
                underline: Some(Underline::Single),
                ..Default::default()
            }),
            ..Default::default()
        });
        self.register(hyperlink);
    }

    /// Register a style, replacing any existing style of the same name
    pub fn register(&mut self, style: Style) {
        self.styles.insert(style.name.clone(), style);
    }

    /// Look up a style by name
    pub fn lookup(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Look up a style by name, mutably
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Style> {
        self.styles.get_mut(name)
    }

    /// Check if a style exists
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Iterate over all registered styles
    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.values()
    }

    /// The base chain of the named style, leaf first, root last. Returns
    /// `None` for an unknown name. A cycle in the chain terminates the walk
    /// (use [`Styles::validate`] to reject cyclic registries up front).
    pub fn chain(&self, name: &str) -> Option<Vec<&Style>> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = self.styles.get(name)?;
        loop {
            if !visited.insert(current.name.as_str()) {
                break;
            }
            chain.push(current);
            match current.base_style.as_deref().and_then(|b| self.styles.get(b)) {
                Some(base) => current = base,
                None => break,
            }
        }
        Some(chain)
    }

    /// Verify that every base chain is acyclic and every base reference
    /// names a registered style. Malformed chains are a configuration
    /// error caught here, never during cascade resolution.
    pub fn validate(&self) -> Result<()> {
        for style in self.styles.values() {
            let mut visited = HashSet::new();
            let mut current = style;
            visited.insert(current.name.as_str());
            while let Some(base_name) = current.base_style.as_deref() {
                let base = self.styles.get(base_name).ok_or_else(|| {
                    DomError::MalformedStyleChain {
                        style: style.name.clone(),
                        reason: format!("base style '{base_name}' is not registered"),
                    }
                })?;
                if !visited.insert(base.name.as_str()) {
                    return Err(DomError::MalformedStyleChain {
                        style: style.name.clone(),
                        reason: format!("cycle through '{base_name}'"),
                    });
                }
                current = base;
            }
        }
        Ok(())
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}

fn heading(level: u8, size: f64) -> Style {
    use crate::OutlineLevel;
    let outline = match level {
        1 => OutlineLevel::Level1,
        2 => OutlineLevel::Level2,
        _ => OutlineLevel::Level3,
    };
    Style::paragraph(format!("Heading{level}"))
        .based_on(NORMAL)
        .with_format(ParagraphFormat {
            space_before: Some(Unit::from_point(12.0)),
            space_after: Some(Unit::from_point(3.0)),
            keep_with_next: Some(true),
            outline_level: Some(outline),
            font: Some(Font {
                size: Some(Unit::from_point(size)),
                bold: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_styles_present() {
        let styles = Styles::new();
        for name in [NORMAL, INVALID_STYLE_NAME, HEADER, FOOTER, FOOTNOTE, "Heading1"] {
            assert!(styles.contains(name), "missing built-in {name}");
        }
        assert!(styles.validate().is_ok());
    }

    #[test]
    fn test_chain_runs_leaf_to_root() {
        let mut styles = Styles::new();
        styles.register(Style::paragraph("Quote").based_on("Heading1"));
        let chain = styles.chain("Quote").unwrap();
        let names: Vec<&str> = chain.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Quote", "Heading1", NORMAL]);
    }

    #[test]
    fn test_chain_unknown_style_is_none() {
        let styles = Styles::new();
        assert!(styles.chain("NoSuchStyle").is_none());
    }

    #[test]
    fn test_validate_detects_cycle() {
        let mut styles = Styles::new();
        styles.register(Style::paragraph("A").based_on("B"));
        styles.register(Style::paragraph("B").based_on("A"));
        let err = styles.validate().unwrap_err();
        assert!(matches!(err, DomError::MalformedStyleChain { .. }));
    }

    #[test]
    fn test_validate_detects_dangling_base() {
        let mut styles = Styles::new();
        styles.register(Style::paragraph("Orphan").based_on("Missing"));
        let err = styles.validate().unwrap_err();
        assert!(matches!(err, DomError::MalformedStyleChain { .. }));
    }

    #[test]
    fn test_chain_tolerates_cycle_without_hanging() {
        let mut styles = Styles::new();
        styles.register(Style::paragraph("A").based_on("B"));
        styles.register(Style::paragraph("B").based_on("A"));
        let chain = styles.chain("A").unwrap();
        assert_eq!(chain.len(), 2);
    }
}
