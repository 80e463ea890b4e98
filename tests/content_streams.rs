mod common;

use std::fs;
use std::path::{Path, PathBuf};

use common::{PageSpec, RawPage, TextLine};
use pdf_writer::types::{CidFontType, SystemInfo, TextRenderingMode, UnicodeCmap};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use pdf2docx::convert_pdf_to_docx;
use tempfile::tempdir;

const HELVETICA: Ref = Ref::new(10);

fn helvetica(pdf: &mut Pdf) {
    pdf.type1_font(HELVETICA).base_font(Name(b"Helvetica"));
}

fn convert(dir: &Path, name: &str, pdf: Vec<u8>) -> PathBuf {
    let input = dir.join(format!("{name}.pdf"));
    fs::write(&input, pdf).unwrap();
    let output = dir.join(format!("{name}.docx"));
    convert_pdf_to_docx(&input, &output).unwrap();
    output
}

#[test]
fn form_xobject_inherits_font_and_fill() {
    let dir = tempdir().unwrap();
    let form_id = Ref::new(11);

    let mut form_content = Content::new();
    form_content
        .begin_text()
        .next_line(72.0, 700.0)
        .show(Str(b"Inside form"))
        .end_text();
    let form_content = form_content.finish();

    let mut content = Content::new();
    content
        .set_fill_rgb(1.0, 0.0, 0.0)
        .begin_text()
        .set_font(Name(b"F1"), 12.0)
        .end_text()
        .x_object(Name(b"Fm1"));
    let content = content.finish();

    let page = RawPage {
        content: &content,
        fonts: &[("F1", HELVETICA)],
        x_objects: &[("Fm1", form_id)],
    };
    let pdf = common::build_raw_pdf(&page, |pdf| {
        helvetica(pdf);
        pdf.form_xobject(form_id, &form_content).bbox(Rect::new(0.0, 0.0, 612.0, 792.0));
    });
    let output = convert(dir.path(), "form", pdf);

    assert_eq!(common::paragraph_texts(&output), vec!["Inside form"]);
    let xml = common::read_part(&output, "word/document.xml");
    assert!(xml.contains("w:color w:val=\"FF0000\""), "{xml}");
    assert!(xml.contains("<w:sz w:val=\"24\"/>"));
}

#[test]
fn self_referencing_form_stops_at_nesting_limit() {
    let dir = tempdir().unwrap();
    let form_id = Ref::new(11);

    // Each level draws one line and then itself again, 20pt lower.
    let mut form_content = Content::new();
    form_content
        .begin_text()
        .set_font(Name(b"F1"), 12.0)
        .next_line(72.0, 700.0)
        .show(Str(b"Level"))
        .end_text()
        .x_object(Name(b"Fm1"));
    let form_content = form_content.finish();

    let page = RawPage { content: b"/Fm1 Do", fonts: &[], x_objects: &[("Fm1", form_id)] };
    let pdf = common::build_raw_pdf(&page, |pdf| {
        helvetica(pdf);
        let mut form = pdf.form_xobject(form_id, &form_content);
        form.bbox(Rect::new(0.0, 0.0, 612.0, 792.0));
        form.matrix([1.0, 0.0, 0.0, 1.0, 0.0, -20.0]);
        let mut resources = form.resources();
        resources.fonts().pair(Name(b"F1"), HELVETICA);
        resources.x_objects().pair(Name(b"Fm1"), form_id);
        resources.finish();
        form.finish();
    });
    let output = convert(dir.path(), "nested", pdf);

    let text = common::paragraph_texts(&output).concat();
    assert_eq!(text.matches("Level").count(), 8, "{text}");
}

#[test]
fn invisible_text_is_left_out() {
    let dir = tempdir().unwrap();
    let mut content = Content::new();
    content
        .begin_text()
        .set_font(Name(b"F1"), 12.0)
        .set_text_rendering_mode(TextRenderingMode::Invisible)
        .next_line(72.0, 700.0)
        .show(Str(b"Hidden OCR layer"))
        .end_text()
        .begin_text()
        .set_font(Name(b"F1"), 12.0)
        .set_text_rendering_mode(TextRenderingMode::Fill)
        .next_line(72.0, 650.0)
        .show(Str(b"Visible"))
        .end_text();
    let content = content.finish();

    let page = RawPage { content: &content, fonts: &[("F1", HELVETICA)], x_objects: &[] };
    let output = convert(dir.path(), "ocr", common::build_raw_pdf(&page, helvetica));

    assert_eq!(common::paragraph_texts(&output), vec!["Visible"]);
}

#[test]
fn large_kerning_gap_reads_as_space() {
    let dir = tempdir().unwrap();
    let mut content = Content::new();
    content.begin_text().set_font(Name(b"F1"), 12.0).next_line(72.0, 700.0);
    content.show_positioned().items().show(Str(b"Hello")).adjust(-300.0).show(Str(b"World"));
    content.end_text();
    content.begin_text().set_font(Name(b"F1"), 12.0).next_line(72.0, 600.0);
    content.show_positioned().items().show(Str(b"Ker")).adjust(-50.0).show(Str(b"ning"));
    content.end_text();
    let content = content.finish();

    let page = RawPage { content: &content, fonts: &[("F1", HELVETICA)], x_objects: &[] };
    let output = convert(dir.path(), "kerning", common::build_raw_pdf(&page, helvetica));

    assert_eq!(common::paragraph_texts(&output), vec!["Hello World", "Kerning"]);
}

#[test]
fn type0_font_text_comes_from_to_unicode() {
    let dir = tempdir().unwrap();
    let type0_id = Ref::new(11);
    let cid_font_id = Ref::new(12);
    let cmap_id = Ref::new(13);
    let info = || SystemInfo {
        registry: Str(b"Adobe"),
        ordering: Str(b"Identity"),
        supplement: 0,
    };

    let mut cmap = UnicodeCmap::new(Name(b"Custom"), info());
    cmap.pair(1u16, 'H');
    cmap.pair(2u16, '\u{e9}');
    cmap.pair(3u16, '!');
    let cmap = cmap.finish();

    let mut content = Content::new();
    content
        .begin_text()
        .set_font(Name(b"F1"), 12.0)
        .next_line(72.0, 700.0)
        .show(Str(&[0, 1, 0, 2, 0, 3]))
        .end_text();
    let content = content.finish();

    let page = RawPage { content: &content, fonts: &[("F1", type0_id)], x_objects: &[] };
    let pdf = common::build_raw_pdf(&page, |pdf| {
        pdf.type0_font(type0_id)
            .base_font(Name(b"ABCDEF+NotoSans-Bold"))
            .encoding_predefined(Name(b"Identity-H"))
            .descendant_font(cid_font_id)
            .to_unicode(cmap_id);
        pdf.cid_font(cid_font_id)
            .subtype(CidFontType::Type2)
            .base_font(Name(b"ABCDEF+NotoSans-Bold"))
            .system_info(info())
            .default_width(600.0);
        pdf.cmap(cmap_id, &cmap);
    });
    let output = convert(dir.path(), "type0", pdf);

    assert_eq!(common::paragraph_texts(&output), vec!["H\u{e9}!"]);
    let xml = common::read_part(&output, "word/document.xml");
    assert!(xml.contains("w:ascii=\"NotoSans\""), "{xml}");
    assert!(xml.contains("<w:b/>"));
}

#[test]
fn simple_font_encodings_and_differences() {
    let dir = tempdir().unwrap();
    let mac_roman_id = Ref::new(11);

    let mut content = Content::new();
    for (font, y, text) in [
        (Name(b"F1"), 700.0, &b"caf\x80 \x81"[..]),
        (Name(b"F1"), 600.0, &b"ABC"[..]),
        (Name(b"F2"), 500.0, &b"Ni\x96o \x8e"[..]),
    ] {
        content.begin_text().set_font(font, 12.0).next_line(72.0, y).show(Str(text)).end_text();
    }
    let content = content.finish();

    let page = RawPage {
        content: &content,
        fonts: &[("F1", HELVETICA), ("F2", mac_roman_id)],
        x_objects: &[],
    };
    let pdf = common::build_raw_pdf(&page, |pdf| {
        pdf.type1_font(HELVETICA)
            .base_font(Name(b"Helvetica"))
            .encoding_custom()
            .differences()
            .consecutive(128, [Name(b"eacute"), Name(b"Adieresis")])
            .consecutive(65, [Name(b"g123")]);
        pdf.type1_font(mac_roman_id)
            .base_font(Name(b"Times-Roman"))
            .encoding_predefined(Name(b"MacRomanEncoding"));
    });
    let output = convert(dir.path(), "encodings", pdf);

    // An unknown glyph name yields no text instead of the base encoding's letter.
    assert_eq!(
        common::paragraph_texts(&output),
        vec!["caf\u{e9} \u{c4}", "BC", "Ni\u{f1}o \u{e9}"]
    );
}

#[test]
fn flush_right_line_is_right_aligned() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("letter.pdf");
    // Helvetica without widths advances 6pt per glyph at 12pt: the body spans 72..366.
    common::write_pdf(
        &input,
        &[PageSpec::letter(vec![
            TextLine::new("word word word word word word word word word word", 72.0, 700.0),
            TextLine::new("Signed, A. Writer", 264.0, 600.0),
        ])],
    );
    let output = dir.path().join("letter.docx");
    convert_pdf_to_docx(&input, &output).unwrap();

    assert_eq!(
        common::paragraph_texts(&output),
        vec!["word word word word word word word word word word", "Signed, A. Writer"]
    );
    let xml = common::read_part(&output, "word/document.xml");
    assert_eq!(xml.matches("<w:jc w:val=\"right\"/>").count(), 1, "{xml}");
}
