//! DOCX package reader using zip and quick-xml.

use std::collections::{HashMap, HashSet};
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::{Document, Metadata, Numbering, Paragraph, RgbColor, Run};

use super::options::{ErrorMode, ParseOptions};

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";
const RELS_PART: &str = "word/_rels/document.xml.rels";

const HYPERLINK_REL_SUFFIX: &str = "/hyperlink";
const DEFAULT_STYLE_NAME: &str = "Normal";

/// Containers whose content is not part of the body flow, including the
/// superseded properties recorded by tracked formatting changes.
const SKIPPED_ELEMENTS: &[&[u8]] = &[
    b"w:tbl",
    b"w:txbxContent",
    b"mc:Fallback",
    b"w:pPrChange",
    b"w:rPrChange",
];

/// DOCX document parser.
pub struct DocxParser {
    document_xml: String,
    styles_xml: Option<String>,
    rels_xml: Option<String>,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, mut options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();

        // Verify it's a ZIP container
        detect_format_from_path(path)?;

        if options.source.is_none() {
            options.source = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
        }

        let data = std::fs::read(path)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a DOCX from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        detect_format_from_bytes(data)?;

        let mut archive = ZipArchive::new(Cursor::new(data))?;
        let document_xml = read_part(&mut archive, DOCUMENT_PART)?
            .ok_or_else(|| Error::MissingPart(DOCUMENT_PART.to_string()))?;
        let styles_xml = read_part(&mut archive, STYLES_PART)?;
        let rels_xml = read_part(&mut archive, RELS_PART)?;

        Ok(Self {
            document_xml,
            styles_xml,
            rels_xml,
            options,
        })
    }

    /// Parse a DOCX from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a DOCX from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse the package and return the document model.
    pub fn parse(&self) -> Result<Document> {
        let styles = match self.styles_xml {
            Some(ref xml) => self.auxiliary(STYLES_PART, parse_styles(xml))?,
            None => StyleTable::default(),
        };

        let hyperlinks = match self.rels_xml {
            Some(ref xml) => self.auxiliary(RELS_PART, parse_relationships(xml))?,
            None => HashMap::new(),
        };

        let paragraphs = BodyReader::new(&styles)
            .read(&self.document_xml)
            .map_err(|e| Error::Conversion(format!("{}: {}", DOCUMENT_PART, e)))?;

        let style_count = paragraphs
            .iter()
            .map(|p| p.style_name.as_str())
            .collect::<HashSet<_>>()
            .len();

        log::debug!(
            "Read {} paragraphs, {} hyperlinks, {} styles",
            paragraphs.len(),
            hyperlinks.len(),
            style_count
        );

        let mut document = Document::with_paragraphs(paragraphs);
        document.hyperlinks = hyperlinks;
        document.metadata = Metadata {
            source: self.options.source.clone(),
            style_count,
        };
        Ok(document)
    }

    fn auxiliary<T: Default>(&self, part: &str, result: Result<T>) -> Result<T> {
        match result {
            Ok(value) => Ok(value),
            Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("Ignoring unreadable part {}: {}", part, e);
                Ok(T::default())
            }
            Err(e) => Err(e),
        }
    }
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut xml = String::new();
    file.read_to_string(&mut xml)?;
    Ok(Some(xml))
}

/// Look up an attribute by qualified name.
fn attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attribute in e.attributes() {
        let attribute = attribute?;
        if attribute.key.as_ref() == key {
            return Ok(Some(attribute.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Read a WordprocessingML on/off property such as `<w:b/>` or `<w:b w:val="0"/>`.
fn on_off(e: &BytesStart<'_>) -> Result<bool> {
    Ok(match attr(e, b"w:val")? {
        Some(val) => !matches!(val.as_str(), "0" | "false" | "off"),
        None => true,
    })
}

/// Style id to display name mapping from `word/styles.xml`.
#[derive(Debug, Default)]
struct StyleTable {
    names: HashMap<String, String>,
    default_paragraph: Option<String>,
}

impl StyleTable {
    fn name_for(&self, style_id: Option<&str>) -> String {
        match style_id {
            Some(id) => self
                .names
                .get(id)
                .cloned()
                .unwrap_or_else(|| id.to_string()),
            None => self
                .default_paragraph
                .clone()
                .unwrap_or_else(|| DEFAULT_STYLE_NAME.to_string()),
        }
    }
}

fn parse_styles(xml: &str) -> Result<StyleTable> {
    let mut reader = Reader::from_str(xml);
    let mut table = StyleTable::default();
    // (style id, default paragraph style)
    let mut current: Option<(String, bool)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:style" => {
                let is_default = attr(&e, b"w:type")?.as_deref() == Some("paragraph")
                    && matches!(attr(&e, b"w:default")?.as_deref(), Some("1" | "true"));
                current = attr(&e, b"w:styleId")?.map(|id| (id, is_default));
            }
            Event::Empty(e) if e.name().as_ref() == b"w:name" => {
                if let (Some((id, is_default)), Some(name)) = (&current, attr(&e, b"w:val")?) {
                    if *is_default {
                        table.default_paragraph = Some(name.clone());
                    }
                    table.names.insert(id.clone(), name);
                }
            }
            Event::End(e) if e.name().as_ref() == b"w:style" => current = None,
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(table)
}

fn parse_relationships(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    let mut links = HashMap::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"Relationship" => {
                let kind = attr(&e, b"Type")?;
                if !kind.is_some_and(|k| k.ends_with(HYPERLINK_REL_SUFFIX)) {
                    continue;
                }
                if let (Some(id), Some(target)) = (attr(&e, b"Id")?, attr(&e, b"Target")?) {
                    links.insert(id, target);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(links)
}

fn is_skipped(name: &[u8]) -> bool {
    SKIPPED_ELEMENTS.iter().any(|skipped| *skipped == name)
}

/// Streaming reader for the body of `word/document.xml`.
struct BodyReader<'s> {
    styles: &'s StyleTable,
    paragraphs: Vec<Paragraph>,
    paragraph: Option<Paragraph>,
    style_id: Option<String>,
    run: Option<Run>,
    link: Option<String>,
    in_run_props: bool,
    in_text: bool,
    skip_depth: usize,
    saw_body: bool,
}

impl<'s> BodyReader<'s> {
    fn new(styles: &'s StyleTable) -> Self {
        Self {
            styles,
            paragraphs: Vec::new(),
            paragraph: None,
            style_id: None,
            run: None,
            link: None,
            in_run_props: false,
            in_text: false,
            skip_depth: 0,
            saw_body: false,
        }
    }

    fn read(mut self, xml: &str) -> Result<Vec<Paragraph>> {
        let mut reader = Reader::from_str(xml);

        loop {
            match reader.read_event()? {
                Event::Start(e) => self.start(&e)?,
                Event::Empty(e) => {
                    self.start(&e)?;
                    self.end(e.name().as_ref());
                }
                Event::End(e) => self.end(e.name().as_ref()),
                Event::Text(t) => {
                    if self.in_text && self.skip_depth == 0 {
                        if let Some(run) = self.run.as_mut() {
                            run.text.push_str(&t.unescape()?);
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !self.saw_body {
            return Err(Error::MissingPart("w:body".to_string()));
        }
        Ok(self.paragraphs)
    }

    fn start(&mut self, e: &BytesStart<'_>) -> Result<()> {
        let qname = e.name();
        let name = qname.as_ref();

        if is_skipped(name) {
            self.skip_depth += 1;
            return Ok(());
        }
        if self.skip_depth > 0 {
            return Ok(());
        }

        match name {
            b"w:body" => self.saw_body = true,
            b"w:p" => {
                self.paragraph = Some(Paragraph {
                    runs: Vec::new(),
                    style_name: String::new(),
                    numbering: None,
                });
                self.style_id = None;
            }
            b"w:pStyle" if self.run.is_none() => self.style_id = attr(e, b"w:val")?,
            b"w:numPr" => {
                if let Some(para) = self.paragraph.as_mut() {
                    para.numbering.get_or_insert_with(Numbering::default);
                }
            }
            b"w:ilvl" => {
                let level = attr(e, b"w:val")?
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0);
                if let Some(para) = self.paragraph.as_mut() {
                    para.numbering = Some(Numbering { level });
                }
            }
            b"w:hyperlink" => self.link = attr(e, b"r:id")?,
            b"w:r" => {
                if self.paragraph.is_some() {
                    self.run = Some(Run {
                        hyperlink: self.link.clone(),
                        ..Default::default()
                    });
                }
            }
            b"w:rPr" => self.in_run_props = self.run.is_some(),
            b"w:t" => self.in_text = self.run.is_some(),
            b"w:tab" | b"w:br" | b"w:cr" if !self.in_run_props => {
                if let Some(run) = self.run.as_mut() {
                    run.text.push(if name == b"w:tab" { '\t' } else { '\n' });
                }
            }
            _ if self.in_run_props => self.run_property(name, e)?,
            _ => {}
        }

        Ok(())
    }

    fn run_property(&mut self, name: &[u8], e: &BytesStart<'_>) -> Result<()> {
        let Some(run) = self.run.as_mut() else {
            return Ok(());
        };

        match name {
            b"w:b" => run.bold = on_off(e)?,
            b"w:i" => run.italic = on_off(e)?,
            // Half-points
            b"w:sz" => {
                run.font_size = attr(e, b"w:val")?
                    .and_then(|v| v.parse::<f32>().ok())
                    .map(|half_points| half_points / 2.0);
            }
            b"w:color" => {
                run.color = attr(e, b"w:val")?.and_then(|v| RgbColor::from_hex(&v));
            }
            b"w:rFonts" => {
                let ascii = attr(e, b"w:ascii")?;
                let font = match ascii {
                    Some(name) => Some(name),
                    None => attr(e, b"w:hAnsi")?,
                };
                run.font_name = font.filter(|n| !n.is_empty());
            }
            _ => {}
        }

        Ok(())
    }

    fn end(&mut self, name: &[u8]) {
        if is_skipped(name) {
            self.skip_depth = self.skip_depth.saturating_sub(1);
            return;
        }
        if self.skip_depth > 0 {
            return;
        }

        match name {
            b"w:p" => {
                if let Some(mut para) = self.paragraph.take() {
                    para.style_name = self.styles.name_for(self.style_id.take().as_deref());
                    self.paragraphs.push(para);
                }
            }
            b"w:r" => {
                if let Some(run) = self.run.take() {
                    if let Some(para) = self.paragraph.as_mut() {
                        para.runs.push(run);
                    }
                }
                self.in_run_props = false;
                self.in_text = false;
            }
            b"w:rPr" => self.in_run_props = false,
            b"w:t" => self.in_text = false,
            b"w:hyperlink" => self.link = None,
            _ => {}
        }
    }
}
