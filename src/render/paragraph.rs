//! HTML rendering for paragraphs.

use crate::model::Paragraph;

use super::list::{classify, ListKind};
use super::run::RunRenderer;

/// A rendered paragraph and its list classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedParagraph {
    /// `<p>` or `<li>` element, empty when the paragraph has no content
    pub html: String,

    /// List kind for `<li>` elements
    pub list: Option<ListKind>,
}

impl RenderedParagraph {
    fn empty() -> Self {
        Self {
            html: String::new(),
            list: None,
        }
    }

    /// Check if the paragraph produced no output.
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Renders paragraphs to `<p>` or `<li>` elements.
pub struct ParagraphRenderer<'a> {
    runs: RunRenderer<'a>,
}

impl<'a> ParagraphRenderer<'a> {
    /// Create a paragraph renderer on top of a run renderer.
    pub fn new(runs: RunRenderer<'a>) -> Self {
        Self { runs }
    }

    /// Render a paragraph.
    pub fn render(&self, para: &Paragraph) -> RenderedParagraph {
        let html: String = para.runs.iter().map(|run| self.runs.render(run)).collect();
        if html.trim().is_empty() {
            return RenderedParagraph::empty();
        }

        match classify(para) {
            Some(kind) => {
                // Only the first run decides the item color.
                let open = match para.runs.first().and_then(|r| r.color) {
                    Some(color) => format!("<li style=\"color:#{};\">", color),
                    None => "<li>".to_string(),
                };
                RenderedParagraph {
                    html: format!("{}{}</li>", open, html),
                    list: Some(kind),
                }
            }
            None => RenderedParagraph {
                html: format!("<p>{}</p>", html),
                list: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RgbColor, Run};
    use crate::render::HtmlOptions;
    use std::collections::HashMap;

    fn render(para: &Paragraph) -> RenderedParagraph {
        let links: HashMap<String, String> = HashMap::new();
        let options = HtmlOptions::default();
        ParagraphRenderer::new(RunRenderer::new(&links, &options)).render(para)
    }

    #[test]
    fn test_plain_paragraph() {
        let para = Paragraph::with_runs([Run::new("Hello "), Run::bold("world")]);
        let rendered = render(&para);
        assert_eq!(
            rendered.html,
            "<p><span style=\"font-weight:normal;\">Hello </span>\
             <span style=\"font-weight:bold;\">world</span></p>"
        );
        assert_eq!(rendered.list, None);
    }

    #[test]
    fn test_blank_paragraph_is_empty() {
        let para = Paragraph::with_runs([Run::bold("  "), Run::new("\n")]).styled("List Bullet");
        let rendered = render(&para);
        assert!(rendered.is_empty());
        assert_eq!(rendered.list, None);
        assert_eq!(render(&para), rendered);
    }

    #[test]
    fn test_list_item_uses_first_run_color() {
        let para = Paragraph::with_runs([
            Run::new("first").with_color(RgbColor(255, 0, 0)),
            Run::new("second").with_color(RgbColor(0, 0, 255)),
        ])
        .styled("List Number");
        let rendered = render(&para);
        assert!(rendered.html.starts_with("<li style=\"color:#FF0000;\">"));
        assert!(!rendered.html.starts_with("<li style=\"color:#0000FF;\">"));
        assert!(rendered.html.ends_with("</li>"));
        assert_eq!(rendered.list, Some(ListKind::Ordered));
    }

    #[test]
    fn test_list_item_without_color() {
        let para = Paragraph::with_runs([
            Run::new("plain"),
            Run::new("x").with_color(RgbColor(1, 2, 3)),
        ])
        .numbered(1);
        let rendered = render(&para);
        assert!(rendered.html.starts_with("<li><span"));
        assert_eq!(rendered.list, Some(ListKind::Unordered));
    }
}
