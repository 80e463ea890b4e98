mod common;

use std::fs;

use common::{ImagePlacement, PageSpec, TextLine};
use pdf2docx::{Converter, Error, convert_pdf_to_docx, docx_output_path};
use tempfile::tempdir;

fn three_pages() -> Vec<PageSpec> {
    vec![
        PageSpec::letter(vec![TextLine::new("Page one", 72.0, 700.0)]),
        PageSpec::letter(vec![TextLine::new("Page two", 72.0, 700.0)]),
        PageSpec::letter(vec![TextLine::new("Page three", 72.0, 700.0)]),
    ]
}

#[test]
fn converts_text_into_docx_package() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("hello.pdf");
    common::write_pdf(&input, &[PageSpec::letter(vec![TextLine::new("Hello World", 72.0, 700.0)])]);

    let output = docx_output_path(&input);
    convert_pdf_to_docx(&input, &output).unwrap();

    assert_eq!(output, dir.path().join("hello.docx"));
    let parts = common::part_names(&output);
    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "word/document.xml",
        "word/styles.xml",
        "word/_rels/document.xml.rels",
        "docProps/core.xml",
    ] {
        assert!(parts.iter().any(|p| p == part), "missing {part} in {parts:?}");
    }
    assert_eq!(common::paragraph_texts(&output), vec!["Hello World"]);
}

#[test]
fn each_page_becomes_a_section() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("pages.pdf");
    common::write_pdf(&input, &three_pages());
    let output = dir.path().join("pages.docx");

    convert_pdf_to_docx(&input, &output).unwrap();

    assert_eq!(common::count_elements(&output, "sectPr"), 3);
    assert_eq!(common::paragraph_texts(&output), vec!["Page one", "Page two", "Page three"]);
    let xml = common::read_part(&output, "word/document.xml");
    assert!(xml.contains("w:w=\"12240\" w:h=\"15840\""));
}

#[test]
fn page_range_limits_converted_pages() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("range.pdf");
    common::write_pdf(&input, &three_pages());
    let output = dir.path().join("range.docx");

    let converter = Converter::open(&input).unwrap();
    assert_eq!(converter.page_count(), 3);

    converter.convert(&output, 1, Some(2)).unwrap();
    assert_eq!(common::paragraph_texts(&output), vec!["Page two"]);

    converter.convert(&output, 1, None).unwrap();
    assert_eq!(common::paragraph_texts(&output), vec!["Page two", "Page three"]);

    // An end past the last page is clamped.
    converter.convert(&output, 2, Some(10)).unwrap();
    assert_eq!(common::paragraph_texts(&output), vec!["Page three"]);

    converter.close();
}

#[test]
fn empty_page_range_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("range.pdf");
    common::write_pdf(&input, &three_pages());
    let output = dir.path().join("range.docx");

    let converter = Converter::open(&input).unwrap();
    assert!(matches!(converter.convert(&output, 3, None), Err(Error::PageRange(_))));
    assert!(matches!(converter.convert(&output, 2, Some(1)), Err(Error::PageRange(_))));
    assert!(!output.exists());
}

#[test]
fn explicit_page_list_keeps_given_order() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("list.pdf");
    common::write_pdf(&input, &three_pages());
    let output = dir.path().join("list.docx");

    let converter = Converter::open(&input).unwrap();
    converter.convert_pages(&output, &[2, 0]).unwrap();
    assert_eq!(common::paragraph_texts(&output), vec!["Page three", "Page one"]);

    let err = converter.convert_pages(&output, &[3]).unwrap_err();
    assert!(err.to_string().contains("out of range"), "{err}");
}

#[test]
fn run_styles_follow_pdf_fonts_and_colours() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("styles.pdf");
    common::write_pdf(
        &input,
        &[PageSpec::letter(vec![
            TextLine::new("Bold heading", 72.0, 720.0).bold(),
            TextLine::new("Red warning", 72.0, 650.0).color([1.0, 0.0, 0.0]),
            TextLine::new("Plain body", 72.0, 580.0),
        ])],
    );
    let output = dir.path().join("styles.docx");
    convert_pdf_to_docx(&input, &output).unwrap();

    let xml = common::read_part(&output, "word/document.xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let wml = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    let runs: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name((wml, "r")))
        .collect();
    assert_eq!(runs.len(), 3);

    let props = |i: usize| {
        runs[i]
            .descendants()
            .map(|n| n.tag_name().name().to_string())
            .collect::<Vec<_>>()
    };
    assert!(props(0).contains(&"b".to_string()));
    assert!(!props(1).contains(&"b".to_string()));
    assert!(props(1).contains(&"color".to_string()));
    assert!(xml.contains("w:color w:val=\"FF0000\""));
    assert!(!props(2).contains(&"color".to_string()));
    assert!(xml.contains("w:ascii=\"Arial\""));
    assert!(xml.contains("<w:sz w:val=\"24\"/>"));
}

#[test]
fn distant_lines_become_separate_paragraphs() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("paras.pdf");
    common::write_pdf(
        &input,
        &[PageSpec::letter(vec![
            TextLine::new("The first paragraph line", 72.0, 700.0),
            TextLine::new("continues on this line...", 72.0, 686.0),
            TextLine::new("A second paragraph below", 72.0, 600.0),
        ])],
    );
    let output = dir.path().join("paras.docx");
    convert_pdf_to_docx(&input, &output).unwrap();

    assert_eq!(
        common::paragraph_texts(&output),
        vec![
            "The first paragraph line continues on this line...",
            "A second paragraph below"
        ]
    );
    let xml = common::read_part(&output, "word/document.xml");
    assert!(xml.contains("w:line=\"280\" w:lineRule=\"exact\""));
}

#[test]
fn images_are_embedded_as_inline_drawings() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("image.pdf");
    let mut page = PageSpec::letter(vec![TextLine::new("Caption above", 72.0, 700.0)]);
    page.image = Some(ImagePlacement { x: 72.0, y: 500.0, width: 100.0, height: 50.0 });
    common::write_pdf(&input, &[page]);
    let output = dir.path().join("image.docx");

    convert_pdf_to_docx(&input, &output).unwrap();

    let parts = common::part_names(&output);
    assert!(parts.iter().any(|p| p == "word/media/image1.png"), "{parts:?}");
    let rels = common::read_part(&output, "word/_rels/document.xml.rels");
    assert!(rels.contains("media/image1.png"));

    let xml = common::read_part(&output, "word/document.xml");
    assert!(xml.contains("<wp:extent cx=\"1270000\" cy=\"635000\"/>"));
    // Text sits above the image, so it comes first.
    assert!(xml.find("Caption above").unwrap() < xml.find("wp:inline").unwrap());
}

#[test]
fn document_title_carries_over() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("titled.pdf");
    let pdf = common::build_pdf(
        &[PageSpec::letter(vec![TextLine::new("Body", 72.0, 700.0)])],
        Some("Quarterly Report"),
    );
    fs::write(&input, pdf).unwrap();
    let output = dir.path().join("titled.docx");

    convert_pdf_to_docx(&input, &output).unwrap();

    let core = common::read_part(&output, "docProps/core.xml");
    assert!(core.contains("<dc:title>Quarterly Report</dc:title>"), "{core}");
}

#[test]
fn landscape_pages_keep_orientation() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("wide.pdf");
    let page = PageSpec {
        width: 842.0,
        height: 595.0,
        lines: vec![TextLine::new("Wide", 72.0, 500.0)],
        image: None,
    };
    common::write_pdf(&input, &[page]);
    let output = dir.path().join("wide.docx");

    convert_pdf_to_docx(&input, &output).unwrap();

    let xml = common::read_part(&output, "word/document.xml");
    assert!(xml.contains("w:w=\"16840\" w:h=\"11900\" w:orient=\"landscape\""));
}

#[test]
fn blank_page_still_produces_a_section() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("blank.pdf");
    common::write_pdf(
        &input,
        &[
            PageSpec::letter(Vec::new()),
            PageSpec::letter(vec![TextLine::new("After blank", 72.0, 700.0)]),
        ],
    );
    let output = dir.path().join("blank.docx");

    convert_pdf_to_docx(&input, &output).unwrap();

    assert_eq!(common::count_elements(&output, "sectPr"), 2);
    assert_eq!(common::paragraph_texts(&output), vec!["After blank"]);
}

#[test]
fn non_pdf_input_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.pdf");
    fs::write(&input, "just some text, not a PDF").unwrap();

    let err = Converter::open(&input).err().unwrap();
    assert!(matches!(err, Error::InvalidPdf(_)), "{err}");
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = Converter::open(&dir.path().join("absent.pdf")).err().unwrap();
    assert!(matches!(err, Error::Io(_)), "{err}");
}
