//! Benchmarks for undocx conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic documents built in memory.

use std::io::{Cursor, Write};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use undocx::render::{to_sections, HtmlOptions};
use undocx::{Document, Paragraph, RgbColor, Run};

/// Creates a document with head, text and FAQ sections of the given size.
fn create_test_document(items: usize) -> Document {
    let mut doc = Document::new();
    doc.add_hyperlink("rId1", "https://example.com");
    doc.add_paragraph(Paragraph::with_runs([Run::bold("Benchmark title")]));
    doc.add_paragraph(Paragraph::with_text("#####"));

    for i in 0..items {
        doc.add_paragraph(Paragraph::with_runs([
            Run::new(format!("Body paragraph {} with <markup> & text. ", i))
                .with_font("Arial")
                .with_size(11.0),
            Run::new("link").with_hyperlink("rId1"),
        ]));
        let bullet = Run::new(format!("bullet {}", i)).with_color(RgbColor(0, 0, 255));
        doc.add_paragraph(Paragraph::with_runs([bullet]).styled("List Bullet"));
        doc.add_paragraph(Paragraph::with_text(format!("step {}", i)).numbered(0));
    }

    doc.add_paragraph(Paragraph::with_text("#####"));
    for i in 0..items {
        doc.add_paragraph(Paragraph::with_runs([Run::bold(format!("Question {}?", i))]));
        doc.add_paragraph(Paragraph::with_text(format!("Answer {}.", i)));
    }
    doc
}

/// Creates a minimal DOCX package with the given number of paragraphs.
fn create_test_docx(paragraph_count: usize) -> Vec<u8> {
    let mut body = String::new();
    for i in 0..paragraph_count {
        body.push_str(&format!(
            "<w:p><w:r><w:rPr><w:b/><w:sz w:val=\"24\"/></w:rPr><w:t>Paragraph {} - benchmark content.</w:t></w:r></w:p>",
            i
        ));
    }
    let document = format!(
        "<?xml version=\"1.0\"?><w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\"><w:body>{}</w:body></w:document>",
        body
    );

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("word/document.xml", zip::write::FileOptions::default())
        .unwrap();
    zip.write_all(document.as_bytes()).unwrap();
    zip.finish().unwrap().into_inner()
}

/// Benchmark container detection.
fn bench_format_detection(c: &mut Criterion) {
    let docx_data = create_test_docx(1);
    let non_docx_data = b"Not a DOCX file at all, just random text content";

    c.bench_function("detect_valid_docx", |b| {
        b.iter(|| undocx::detect_format_from_bytes(black_box(&docx_data)).unwrap());
    });

    c.bench_function("detect_non_docx", |b| {
        b.iter(|| undocx::detect_format_from_bytes(black_box(non_docx_data)).is_err());
    });
}

/// Benchmark section rendering on prebuilt documents.
fn bench_section_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_rendering");
    let options = HtmlOptions::default();

    for items in [10, 100, 1000].iter() {
        let doc = create_test_document(*items);

        group.bench_function(format!("{}_items", items), |b| {
            b.iter(|| to_sections(black_box(&doc), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark full DOCX parsing and conversion.
fn bench_docx_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("docx_conversion");

    for count in [10, 100, 1000].iter() {
        let data = create_test_docx(*count);

        group.bench_function(format!("{}_paragraphs", count), |b| {
            b.iter(|| undocx::convert_bytes(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_section_rendering,
    bench_docx_conversion,
);
criterion_main!(benches);
