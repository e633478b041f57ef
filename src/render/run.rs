//! HTML rendering for individual text runs.

use crate::model::{HyperlinkResolver, Run};

use super::HtmlOptions;

/// Tags that are passed through verbatim when a run starts with them.
const RAW_MARKUP_PREFIXES: &[&str] = &["<img", "<iframe"];

/// Renders a single run to an HTML fragment.
pub struct RunRenderer<'a> {
    resolver: &'a dyn HyperlinkResolver,
    options: &'a HtmlOptions,
}

impl<'a> RunRenderer<'a> {
    /// Create a run renderer resolving hyperlinks through `resolver`.
    pub fn new(resolver: &'a dyn HyperlinkResolver, options: &'a HtmlOptions) -> Self {
        Self { resolver, options }
    }

    /// Render a run.
    ///
    /// Returns an empty string for runs without visible text.
    pub fn render(&self, run: &Run) -> String {
        let trimmed = run.text.trim();

        if RAW_MARKUP_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
            return trimmed.to_string();
        }

        if let Some(ref rel_id) = run.hyperlink {
            match self.resolver.resolve(rel_id) {
                Some(url) => return self.render_link(&url, trimmed),
                None => log::debug!("Unresolved hyperlink relationship {}", rel_id),
            }
        }

        if trimmed.is_empty() {
            return String::new();
        }

        let mut text = escape_html(&run.text);
        if text.contains('\n') {
            text = text
                .split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("<br>");
        }

        format!("<span style=\"{}\">{}</span>", inline_style(run), text)
    }

    fn render_link(&self, url: &str, text: &str) -> String {
        match self.options.link_target {
            Some(ref target) => format!("<a href=\"{}\" target=\"{}\">{}</a>", url, target, text),
            None => format!("<a href=\"{}\">{}</a>", url, text),
        }
    }
}

/// Build the inline CSS for a run.
///
/// Clause order is fixed: weight, style, size, family, color.
pub fn inline_style(run: &Run) -> String {
    let mut style = String::new();

    if run.bold {
        style.push_str("font-weight:bold;");
    } else {
        style.push_str("font-weight:normal;");
    }

    if run.italic {
        style.push_str("font-style:italic;");
    }

    if let Some(size) = run.font_size.and_then(format_points) {
        style.push_str(&format!("font-size:{}pt;", size));
    }

    if let Some(name) = run.font_name.as_deref().filter(|n| !n.is_empty()) {
        style.push_str(&format!("font-family:'{}';", name));
    }

    if let Some(color) = run.color {
        style.push_str(&format!("color:#{};", color));
    }

    style
}

fn format_points(size: f32) -> Option<String> {
    size.is_finite().then(|| format!("{:.2}", size))
}

/// Escape `&`, `<` and `>`, ampersands first.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
