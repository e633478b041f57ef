//! Section splitting driven by marker paragraphs.

use crate::model::{HyperlinkResolver, Paragraph};

use super::faq::{pair_faq, FaqItem};
use super::list::ListAccumulator;
use super::paragraph::ParagraphRenderer;
use super::run::RunRenderer;
use super::{ConversionStats, HtmlOptions, SectionedHtml};

/// Section the splitter is currently filling.
///
/// Sections only move forward, one step per marker paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    /// Content before the first marker
    Head,
    /// Content between the first and second markers
    Text,
    /// Question/answer paragraphs after the second marker
    Faq,
    /// Everything after the third marker; ignored
    Closed,
}

impl Section {
    /// The following section; `Closed` is terminal.
    pub fn next(self) -> Self {
        match self {
            Section::Head => Section::Text,
            Section::Text => Section::Faq,
            Section::Faq | Section::Closed => Section::Closed,
        }
    }
}

/// Walks a paragraph stream and routes rendered paragraphs into sections.
///
/// List items from both the head and text sections share one
/// [`ListAccumulator`] whose output always lands in the text section.
pub struct SectionSplitter<'a> {
    renderer: ParagraphRenderer<'a>,
    marker: &'a str,
    section: Section,
    head: String,
    text: String,
    lists: ListAccumulator,
    faq: Vec<FaqItem>,
    stats: ConversionStats,
}

impl<'a> SectionSplitter<'a> {
    /// Create a splitter starting in the head section.
    pub fn new(resolver: &'a dyn HyperlinkResolver, options: &'a HtmlOptions) -> Self {
        Self {
            renderer: ParagraphRenderer::new(RunRenderer::new(resolver, options)),
            marker: &options.section_marker,
            section: Section::Head,
            head: String::new(),
            text: String::new(),
            lists: ListAccumulator::new(),
            faq: Vec::new(),
            stats: ConversionStats::new(),
        }
    }

    /// Current section.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Feed one paragraph.
    pub fn push(&mut self, para: &Paragraph) {
        self.stats.paragraph_count += 1;

        let raw = para.plain_text();
        let raw = raw.trim();
        if raw.is_empty() && para.has_no_runs() {
            self.stats.skipped_count += 1;
            return;
        }

        if raw == self.marker {
            self.advance();
            return;
        }

        match self.section {
            Section::Head | Section::Text => self.push_body(para),
            Section::Faq => self.push_faq(para),
            Section::Closed => self.stats.skipped_count += 1,
        }
    }

    fn advance(&mut self) {
        self.stats.marker_count += 1;
        if self.section == Section::Text {
            self.lists.flush(&mut self.text);
        }
        let next = self.section.next();
        log::debug!("Section marker: {:?} -> {:?}", self.section, next);
        self.section = next;
    }

    fn push_body(&mut self, para: &Paragraph) {
        let rendered = self.renderer.render(para);
        if rendered.is_empty() {
            self.stats.skipped_count += 1;
            return;
        }

        match rendered.list {
            Some(kind) => {
                self.stats.list_item_count += 1;
                self.lists.accumulate(rendered.html, kind, &mut self.text);
            }
            None => {
                self.lists.flush(&mut self.text);
                let out = if self.section == Section::Head {
                    &mut self.head
                } else {
                    &mut self.text
                };
                out.push_str(&rendered.html);
            }
        }
    }

    fn push_faq(&mut self, para: &Paragraph) {
        let rendered = self.renderer.render(para);
        if rendered.is_empty() {
            self.stats.skipped_count += 1;
            return;
        }

        let is_question = para.runs.iter().any(|run| run.bold && !run.is_blank());
        if is_question {
            self.stats.question_count += 1;
            self.faq.push(FaqItem::question(rendered.html));
        } else {
            self.stats.answer_count += 1;
            self.faq.push(FaqItem::answer(rendered.html));
        }
    }

    /// Finish the stream and assemble the result.
    pub fn finish(mut self) -> (SectionedHtml, ConversionStats) {
        if self.section == Section::Text {
            self.lists.flush(&mut self.text);
        } else if !self.lists.is_empty() {
            log::debug!(
                "Discarding {} pending list items at end of {:?} section",
                self.lists.len(),
                self.section
            );
        }

        let faq = pair_faq(self.faq);

        let mut stats = self.stats;
        stats.list_count = self.lists.emitted();
        stats.faq_pair_count = faq.len() as u32;

        let result = SectionedHtml {
            head: self.head.trim().to_string(),
            text: self.text.trim().to_string(),
            faq,
        };
        (result, stats)
    }
}

/// Split a paragraph sequence into sections.
pub fn split_sections<'p>(
    paragraphs: impl IntoIterator<Item = &'p Paragraph>,
    resolver: &dyn HyperlinkResolver,
    options: &HtmlOptions,
) -> (SectionedHtml, ConversionStats) {
    let mut splitter = SectionSplitter::new(resolver, options);
    for para in paragraphs {
        splitter.push(para);
    }
    splitter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Run;
    use std::collections::HashMap;

    fn split(paragraphs: &[Paragraph]) -> (SectionedHtml, ConversionStats) {
        let links: HashMap<String, String> = HashMap::new();
        split_sections(paragraphs, &links, &HtmlOptions::default())
    }

    fn marker() -> Paragraph {
        Paragraph::with_text(" ##### ")
    }

    fn p(text: &str) -> String {
        format!("<p><span style=\"font-weight:normal;\">{}</span></p>", text)
    }

    fn li(text: &str) -> String {
        format!("<li><span style=\"font-weight:normal;\">{}</span></li>", text)
    }

    #[test]
    fn test_section_next_is_monotonic() {
        assert_eq!(Section::Head.next(), Section::Text);
        assert_eq!(Section::Text.next(), Section::Faq);
        assert_eq!(Section::Faq.next(), Section::Closed);
        assert_eq!(Section::Closed.next(), Section::Closed);
        assert!(Section::Head < Section::Text && Section::Text < Section::Faq);
    }

    #[test]
    fn test_three_markers() {
        let paragraphs = vec![
            Paragraph::with_text("A"),
            marker(),
            Paragraph::with_text("B"),
            marker(),
            Paragraph::with_runs([Run::bold("C?")]),
            Paragraph::with_text("C."),
            marker(),
            Paragraph::with_text("D"),
            marker(),
            Paragraph::with_runs([Run::bold("E?")]),
        ];
        let (result, stats) = split(&paragraphs);

        assert_eq!(result.head, p("A"));
        assert_eq!(result.text, p("B"));
        assert_eq!(result.faq.len(), 1);
        assert!(result.faq[0].question.contains("C?"));
        assert_eq!(result.faq[0].answer, p("C."));
        assert_eq!(stats.marker_count, 4);
    }

    #[test]
    fn test_lists_grouped_in_text() {
        let paragraphs = vec![
            marker(),
            Paragraph::with_text("a").styled("List Bullet"),
            Paragraph::with_text("b").styled("List Bullet"),
            Paragraph::with_text("1").styled("List Number"),
            Paragraph::with_text("after"),
        ];
        let (result, stats) = split(&paragraphs);

        assert_eq!(
            result.text,
            format!(
                "<ul>{}{}</ul><ol>{}</ol>{}",
                li("a"),
                li("b"),
                li("1"),
                p("after")
            )
        );
        assert_eq!(stats.list_count, 2);
        assert_eq!(stats.list_item_count, 3);
    }

    #[test]
    fn test_head_list_items_land_in_text() {
        let paragraphs = vec![
            Paragraph::with_text("title"),
            Paragraph::with_text("a").styled("List Bullet"),
            Paragraph::with_text("intro"),
            marker(),
            Paragraph::with_text("body"),
        ];
        let (result, _) = split(&paragraphs);

        assert_eq!(result.head, format!("{}{}", p("title"), p("intro")));
        assert_eq!(result.text, format!("<ul>{}</ul>{}", li("a"), p("body")));
    }

    #[test]
    fn test_marker_flushes_pending_list() {
        let paragraphs = vec![
            marker(),
            Paragraph::with_text("a").styled("List Bullet"),
            marker(),
            Paragraph::with_text("answer"),
        ];
        let (result, _) = split(&paragraphs);
        assert_eq!(result.text, format!("<ul>{}</ul>", li("a")));
        assert!(result.faq.is_empty());
    }

    #[test]
    fn test_stream_end_flushes_text_list() {
        let paragraphs = vec![marker(), Paragraph::with_text("1").numbered(0)];
        let (result, _) = split(&paragraphs);
        assert_eq!(result.text, format!("<ol>{}</ol>", li("1")));
    }

    #[test]
    fn test_list_pending_in_head_at_end_is_dropped() {
        let paragraphs = vec![Paragraph::with_text("a").styled("List Bullet")];
        let (result, _) = split(&paragraphs);
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_paragraphs_skipped() {
        let paragraphs = vec![
            Paragraph::new(),
            Paragraph::with_runs([Run::new("  ")]),
            Paragraph::with_text("A"),
        ];
        let (result, stats) = split(&paragraphs);
        assert_eq!(result.head, p("A"));
        assert_eq!(stats.skipped_count, 2);
    }

    #[test]
    fn test_faq_question_needs_bold_visible_run() {
        let paragraphs = vec![
            marker(),
            marker(),
            Paragraph::with_runs([Run::bold("  "), Run::new("not a question")]),
            Paragraph::with_runs([Run::new("Q: "), Run::bold("why?")]),
            Paragraph::with_text("because"),
        ];
        let (result, stats) = split(&paragraphs);

        assert_eq!(result.faq.len(), 1);
        assert!(result.faq[0].question.contains("why?"));
        assert_eq!(result.faq[0].answer, p("because"));
        assert_eq!(stats.question_count, 1);
        assert_eq!(stats.answer_count, 2);
    }

    #[test]
    fn test_custom_marker() {
        let links: HashMap<String, String> = HashMap::new();
        let options = HtmlOptions::new().with_section_marker("---");
        let paragraphs = vec![
            Paragraph::with_text("A"),
            Paragraph::with_text("---"),
            Paragraph::with_text("#####"),
        ];
        let (result, _) = split_sections(&paragraphs, &links, &options);
        assert_eq!(result.head, p("A"));
        assert_eq!(result.text, p("#####"));
    }
}
