//! Rendering options and configuration.

/// Default paragraph text that separates head, body text and FAQ.
pub const DEFAULT_SECTION_MARKER: &str = "#####";

/// Options for rendering a document to sectioned HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Paragraph text (after trimming) that advances to the next section
    pub section_marker: String,

    /// Value of the `target` attribute on hyperlinks (`None` omits it)
    pub link_target: Option<String>,
}

impl HtmlOptions {
    /// Create new HTML options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the section marker.
    pub fn with_section_marker(mut self, marker: impl Into<String>) -> Self {
        self.section_marker = marker.into();
        self
    }

    /// Set the hyperlink target.
    pub fn with_link_target(mut self, target: impl Into<String>) -> Self {
        self.link_target = Some(target.into());
        self
    }

    /// Emit hyperlinks without a `target` attribute.
    pub fn without_link_target(mut self) -> Self {
        self.link_target = None;
        self
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            section_marker: DEFAULT_SECTION_MARKER.to_string(),
            link_target: Some("_blank".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_options_defaults() {
        let options = HtmlOptions::default();
        assert_eq!(options.section_marker, "#####");
        assert_eq!(options.link_target.as_deref(), Some("_blank"));
    }

    #[test]
    fn test_html_options_builder() {
        let options = HtmlOptions::new()
            .with_section_marker("---")
            .without_link_target();
        assert_eq!(options.section_marker, "---");
        assert!(options.link_target.is_none());

        let options = HtmlOptions::new().with_link_target("_self");
        assert_eq!(options.link_target.as_deref(), Some("_self"));
    }
}
