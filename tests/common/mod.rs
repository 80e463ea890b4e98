#![allow(dead_code)]

use std::fs;
use std::io::Read;
use std::path::Path;

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

pub struct TextLine {
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub bold: bool,
    pub color: Option<[f32; 3]>,
}

impl TextLine {
    pub fn new(text: &'static str, x: f32, y: f32) -> Self {
        TextLine { text, x, y, size: 12.0, bold: false, color: None }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn color(mut self, rgb: [f32; 3]) -> Self {
        self.color = Some(rgb);
        self
    }
}

/// A 2x2 RGB image drawn at `(x, y)` with the given display size in points.
pub struct ImagePlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub struct PageSpec {
    pub width: f32,
    pub height: f32,
    pub lines: Vec<TextLine>,
    pub image: Option<ImagePlacement>,
}

impl PageSpec {
    pub fn letter(lines: Vec<TextLine>) -> Self {
        PageSpec { width: 612.0, height: 792.0, lines, image: None }
    }
}

pub fn build_pdf(pages: &[PageSpec], title: Option<&str>) -> Vec<u8> {
    let mut pdf = Pdf::new();

    let catalog_id = Ref::new(1);
    let pages_id = Ref::new(2);
    let regular_id = Ref::new(3);
    let bold_id = Ref::new(4);
    let image_id = Ref::new(5);
    let info_id = Ref::new(6);

    let page_ids: Vec<Ref> = (0..pages.len() as i32).map(|i| Ref::new(10 + i * 2)).collect();

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(pages.len() as i32);
    pdf.type1_font(regular_id).base_font(Name(b"Helvetica"));
    pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));

    if let Some(title) = title {
        pdf.document_info(info_id).title(TextStr(title));
    }

    let mut needs_image = false;
    for (spec, page_id) in pages.iter().zip(&page_ids) {
        let content_id = Ref::new(page_id.get() + 1);

        let mut content = Content::new();
        for line in &spec.lines {
            if let Some([r, g, b]) = line.color {
                content.set_fill_rgb(r, g, b);
            }
            let font = if line.bold { Name(b"F2") } else { Name(b"F1") };
            content
                .begin_text()
                .set_font(font, line.size)
                .next_line(line.x, line.y)
                .show(Str(line.text.as_bytes()))
                .end_text();
            if line.color.is_some() {
                content.set_fill_gray(0.0);
            }
        }
        if let Some(img) = &spec.image {
            needs_image = true;
            content
                .save_state()
                .transform([img.width, 0.0, 0.0, img.height, img.x, img.y])
                .x_object(Name(b"Im1"))
                .restore_state();
        }
        pdf.stream(content_id, &content.finish());

        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, spec.width, spec.height));
        page.parent(pages_id);
        page.contents(content_id);
        let mut resources = page.resources();
        resources
            .fonts()
            .pair(Name(b"F1"), regular_id)
            .pair(Name(b"F2"), bold_id);
        if spec.image.is_some() {
            resources.x_objects().pair(Name(b"Im1"), image_id);
        }
        resources.finish();
        page.finish();
    }

    if needs_image {
        let pixels = [255u8, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let mut image = pdf.image_xobject(image_id, &pixels);
        image.width(2);
        image.height(2);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        image.finish();
    }

    pdf.finish()
}

/// A single Letter page with a hand-written content stream. Fonts and XObjects are
/// written by the caller (ids 10 and up) and named here for the page resources.
pub struct RawPage<'a> {
    pub content: &'a [u8],
    pub fonts: &'a [(&'a str, Ref)],
    pub x_objects: &'a [(&'a str, Ref)],
}

pub fn build_raw_pdf(page: &RawPage, objects: impl FnOnce(&mut Pdf)) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let catalog_id = Ref::new(1);
    let pages_id = Ref::new(2);
    let page_id = Ref::new(3);
    let content_id = Ref::new(4);

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id).kids([page_id]).count(1);
    objects(&mut pdf);
    pdf.stream(content_id, page.content);

    let mut writer = pdf.page(page_id);
    writer.media_box(Rect::new(0.0, 0.0, 612.0, 792.0));
    writer.parent(pages_id);
    writer.contents(content_id);
    let mut resources = writer.resources();
    if !page.fonts.is_empty() {
        let mut fonts = resources.fonts();
        for (name, id) in page.fonts {
            fonts.pair(Name(name.as_bytes()), *id);
        }
    }
    if !page.x_objects.is_empty() {
        let mut x_objects = resources.x_objects();
        for (name, id) in page.x_objects {
            x_objects.pair(Name(name.as_bytes()), *id);
        }
    }
    resources.finish();
    writer.finish();

    pdf.finish()
}

pub fn write_pdf(path: &Path, pages: &[PageSpec]) {
    fs::write(path, build_pdf(pages, None)).unwrap();
}

pub fn read_part(docx: &Path, part: &str) -> String {
    let file = fs::File::open(docx).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut xml = String::new();
    archive
        .by_name(part)
        .unwrap_or_else(|e| panic!("missing part {part}: {e}"))
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

pub fn part_names(docx: &Path) -> Vec<String> {
    let file = fs::File::open(docx).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    archive.file_names().map(String::from).collect()
}

const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Text of every `w:p` in `word/document.xml`, in order. Empty paragraphs are skipped.
pub fn paragraph_texts(docx: &Path) -> Vec<String> {
    let xml = read_part(docx, "word/document.xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();
    doc.descendants()
        .filter(|n| n.tag_name().name() == "p" && n.tag_name().namespace() == Some(WML_NS))
        .map(|p| {
            p.descendants()
                .filter(|n| n.tag_name().name() == "t" && n.tag_name().namespace() == Some(WML_NS))
                .filter_map(|n| n.text())
                .collect::<String>()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn count_elements(docx: &Path, name: &str) -> usize {
    let xml = read_part(docx, "word/document.xml");
    let doc = roxmltree::Document::parse(&xml).unwrap();
    doc.descendants()
        .filter(|n| n.tag_name().name() == name && n.tag_name().namespace() == Some(WML_NS))
        .count()
}
