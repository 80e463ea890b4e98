use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::error::Error;
use crate::model::{Alignment, Document, EmbeddedImage, Metadata, Page, Paragraph, Run};

const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const WPD_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
const DML_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const PIC_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_TYPE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// The smallest text area Word accepts comfortably, in points.
const MIN_TEXT_EXTENT: f32 = 36.0;

fn pts_to_twips(pts: f32) -> i64 {
    (pts * 20.0).round() as i64
}

fn pts_to_emu(pts: f32) -> i64 {
    (pts * 12700.0).round() as i64
}

fn pts_to_half_points(pts: f32) -> i64 {
    (pts * 2.0).round().max(2.0) as i64
}

/// Escape text for XML, dropping characters XML 1.0 cannot represent.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if (c as u32) < 0x20 || c == '\u{FFFE}' || c == '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}

struct MediaEntry<'a> {
    rel_id: String,
    file_name: String,
    image: &'a EmbeddedImage,
}

/// Collect every embedded image in document order and assign relationship ids.
fn collect_media(doc: &Document) -> Vec<MediaEntry<'_>> {
    doc.pages
        .iter()
        .flat_map(|page| page.paragraphs.iter())
        .filter_map(|para| para.image.as_ref())
        .enumerate()
        .map(|(i, image)| MediaEntry {
            rel_id: format!("rIdImage{}", i + 1),
            file_name: format!("image{}.{}", i + 1, image.format.extension()),
            image,
        })
        .collect()
}

fn content_types() -> String {
    format!(
        "{XML_DECL}\n<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
<Default Extension=\"xml\" ContentType=\"application/xml\"/>\
<Default Extension=\"png\" ContentType=\"image/png\"/>\
<Default Extension=\"jpeg\" ContentType=\"image/jpeg\"/>\
<Override PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/>\
<Override PartName=\"/word/styles.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml\"/>\
<Override PartName=\"/word/settings.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml\"/>\
<Override PartName=\"/docProps/core.xml\" ContentType=\"application/vnd.openxmlformats-package.core-properties+xml\"/>\
<Override PartName=\"/docProps/app.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.extended-properties+xml\"/>\
</Types>"
    )
}

fn package_rels() -> String {
    format!(
        "{XML_DECL}\n<Relationships xmlns=\"{PKG_REL_NS}\">\
<Relationship Id=\"rId1\" Type=\"{REL_TYPE}/officeDocument\" Target=\"word/document.xml\"/>\
<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties\" Target=\"docProps/core.xml\"/>\
<Relationship Id=\"rId3\" Type=\"{REL_TYPE}/extended-properties\" Target=\"docProps/app.xml\"/>\
</Relationships>"
    )
}

fn document_rels(media: &[MediaEntry]) -> String {
    let mut xml = format!(
        "{XML_DECL}\n<Relationships xmlns=\"{PKG_REL_NS}\">\
<Relationship Id=\"rId1\" Type=\"{REL_TYPE}/styles\" Target=\"styles.xml\"/>\
<Relationship Id=\"rId2\" Type=\"{REL_TYPE}/settings\" Target=\"settings.xml\"/>"
    );
    for entry in media {
        xml.push_str(&format!(
            "<Relationship Id=\"{}\" Type=\"{REL_TYPE}/image\" Target=\"media/{}\"/>",
            entry.rel_id, entry.file_name
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

fn styles() -> String {
    format!(
        "{XML_DECL}\n<w:styles xmlns:w=\"{WML_NS}\">\
<w:docDefaults>\
<w:rPrDefault><w:rPr><w:rFonts w:ascii=\"Arial\" w:hAnsi=\"Arial\" w:eastAsia=\"Arial\" w:cs=\"Arial\"/>\
<w:sz w:val=\"22\"/><w:szCs w:val=\"22\"/><w:lang w:val=\"en-US\"/></w:rPr></w:rPrDefault>\
<w:pPrDefault><w:pPr><w:spacing w:before=\"0\" w:after=\"0\" w:line=\"240\" w:lineRule=\"auto\"/></w:pPr></w:pPrDefault>\
</w:docDefaults>\
<w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\"><w:name w:val=\"Normal\"/><w:qFormat/></w:style>\
</w:styles>"
    )
}

fn settings() -> String {
    format!(
        "{XML_DECL}\n<w:settings xmlns:w=\"{WML_NS}\">\
<w:defaultTabStop w:val=\"720\"/>\
<w:compat><w:compatSetting w:name=\"compatibilityMode\" w:uri=\"http://schemas.microsoft.com/office/word\" w:val=\"15\"/></w:compat>\
</w:settings>"
    )
}

fn core_properties(metadata: &Metadata) -> String {
    let mut xml = format!(
        "{XML_DECL}\n<cp:coreProperties \
xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
xmlns:dcterms=\"http://purl.org/dc/terms/\" \
xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">"
    );
    if let Some(title) = &metadata.title {
        xml.push_str(&format!("<dc:title>{}</dc:title>", escape(title)));
    }
    if let Some(subject) = &metadata.subject {
        xml.push_str(&format!("<dc:subject>{}</dc:subject>", escape(subject)));
    }
    if let Some(author) = &metadata.author {
        xml.push_str(&format!("<dc:creator>{}</dc:creator>", escape(author)));
    }
    xml.push_str("</cp:coreProperties>");
    xml
}

fn app_properties(page_count: usize) -> String {
    format!(
        "{XML_DECL}\n<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\">\
<Application>{}</Application><Pages>{page_count}</Pages></Properties>",
        env!("CARGO_PKG_NAME")
    )
}

fn section_properties(page: &Page) -> String {
    let mut margin_left = page.margin_left;
    let mut margin_right = page.margin_right;
    let mut margin_top = page.margin_top;
    let mut margin_bottom = page.margin_bottom;

    // Keep a usable text area even when content touches the page edges.
    let excess_x = margin_left + margin_right + MIN_TEXT_EXTENT - page.width;
    if excess_x > 0.0 {
        margin_left = (margin_left - excess_x / 2.0).max(0.0);
        margin_right = (page.width - MIN_TEXT_EXTENT - margin_left).max(0.0);
    }
    let excess_y = margin_top + margin_bottom + MIN_TEXT_EXTENT - page.height;
    if excess_y > 0.0 {
        margin_top = (margin_top - excess_y / 2.0).max(0.0);
        margin_bottom = (page.height - MIN_TEXT_EXTENT - margin_top).max(0.0);
    }

    let orient = if page.width > page.height { " w:orient=\"landscape\"" } else { "" };
    format!(
        "<w:sectPr><w:pgSz w:w=\"{}\" w:h=\"{}\"{orient}/>\
<w:pgMar w:top=\"{}\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\" w:header=\"0\" w:footer=\"0\" w:gutter=\"0\"/>\
</w:sectPr>",
        pts_to_twips(page.width),
        pts_to_twips(page.height),
        pts_to_twips(margin_top),
        pts_to_twips(margin_right),
        pts_to_twips(margin_bottom),
        pts_to_twips(margin_left),
    )
}

fn run_xml(run: &Run) -> String {
    let font = escape(&run.font_name);
    let size = pts_to_half_points(run.font_size);
    let mut xml = format!(
        "<w:r><w:rPr><w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:eastAsia=\"{font}\" w:cs=\"{font}\"/>"
    );
    if run.bold {
        xml.push_str("<w:b/><w:bCs/>");
    }
    if run.italic {
        xml.push_str("<w:i/><w:iCs/>");
    }
    if let Some([r, g, b]) = run.color {
        xml.push_str(&format!("<w:color w:val=\"{r:02X}{g:02X}{b:02X}\"/>"));
    }
    xml.push_str(&format!("<w:sz w:val=\"{size}\"/><w:szCs w:val=\"{size}\"/></w:rPr>"));
    xml.push_str(&format!("<w:t xml:space=\"preserve\">{}</w:t></w:r>", escape(&run.text)));
    xml
}

fn drawing_xml(entry: &MediaEntry, id: usize) -> String {
    let cx = pts_to_emu(entry.image.display_width);
    let cy = pts_to_emu(entry.image.display_height);
    let name = escape(&entry.file_name);
    format!(
        "<w:r><w:drawing><wp:inline distT=\"0\" distB=\"0\" distL=\"0\" distR=\"0\">\
<wp:extent cx=\"{cx}\" cy=\"{cy}\"/><wp:effectExtent l=\"0\" t=\"0\" r=\"0\" b=\"0\"/>\
<wp:docPr id=\"{id}\" name=\"Picture {id}\"/>\
<wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect=\"1\"/></wp:cNvGraphicFramePr>\
<a:graphic><a:graphicData uri=\"{PIC_NS}\"><pic:pic>\
<pic:nvPicPr><pic:cNvPr id=\"{id}\" name=\"{name}\"/><pic:cNvPicPr/></pic:nvPicPr>\
<pic:blipFill><a:blip r:embed=\"{}\"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>\
<pic:spPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></pic:spPr>\
</pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing></w:r>",
        entry.rel_id
    )
}

fn paragraph_xml(para: &Paragraph, media: Option<(&MediaEntry, usize)>, sect_pr: Option<&str>) -> String {
    let mut ppr = String::new();

    let before = pts_to_twips(para.space_before);
    match para.line_spacing {
        Some(line) => ppr.push_str(&format!(
            "<w:spacing w:before=\"{before}\" w:after=\"0\" w:line=\"{}\" w:lineRule=\"exact\"/>",
            pts_to_twips(line)
        )),
        None if before > 0 => {
            ppr.push_str(&format!("<w:spacing w:before=\"{before}\" w:after=\"0\"/>"))
        }
        None => {}
    }

    let indent = pts_to_twips(para.indent_left);
    if indent > 0 {
        ppr.push_str(&format!("<w:ind w:left=\"{indent}\"/>"));
    }

    let jc = match para.alignment {
        Alignment::Left => None,
        Alignment::Center => Some("center"),
        Alignment::Right => Some("right"),
        Alignment::Justify => Some("both"),
    };
    if let Some(jc) = jc {
        ppr.push_str(&format!("<w:jc w:val=\"{jc}\"/>"));
    }

    if let Some(sect_pr) = sect_pr {
        ppr.push_str(sect_pr);
    }

    let mut xml = String::from("<w:p>");
    if !ppr.is_empty() {
        xml.push_str(&format!("<w:pPr>{ppr}</w:pPr>"));
    }
    if let Some((entry, id)) = media {
        xml.push_str(&drawing_xml(entry, id));
    }
    for run in &para.runs {
        xml.push_str(&run_xml(run));
    }
    xml.push_str("</w:p>");
    xml
}

fn document_xml(doc: &Document, media: &[MediaEntry]) -> String {
    let mut body = String::new();
    let mut media_iter = media.iter().enumerate();

    for (page_index, page) in doc.pages.iter().enumerate() {
        let is_last_page = page_index + 1 == doc.pages.len();
        // Every page but the last closes its section inside its final paragraph.
        let sect_pr = (!is_last_page).then(|| section_properties(page));

        if page.paragraphs.is_empty() {
            body.push_str("<w:p>");
            if let Some(sect_pr) = &sect_pr {
                body.push_str(&format!("<w:pPr>{sect_pr}</w:pPr>"));
            }
            body.push_str("</w:p>");
        }

        for (i, para) in page.paragraphs.iter().enumerate() {
            let is_last_para = i + 1 == page.paragraphs.len();
            let drawing = match para.image {
                Some(_) => media_iter.next().map(|(n, entry)| (entry, n + 1)),
                None => None,
            };
            let para_sect = if is_last_para { sect_pr.as_deref() } else { None };
            body.push_str(&paragraph_xml(para, drawing, para_sect));
        }
    }

    let final_section = doc.pages.last().map(section_properties).unwrap_or_default();

    format!(
        "{XML_DECL}\n<w:document xmlns:w=\"{WML_NS}\" xmlns:r=\"{REL_NS}\" xmlns:wp=\"{WPD_NS}\" \
xmlns:a=\"{DML_NS}\" xmlns:pic=\"{PIC_NS}\"><w:body>{body}{final_section}</w:body></w:document>"
    )
}

/// Serialize the document model as a DOCX package.
pub fn render(doc: &Document) -> Result<Vec<u8>, Error> {
    let media = collect_media(doc);
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts = [
        ("[Content_Types].xml", content_types()),
        ("_rels/.rels", package_rels()),
        ("docProps/core.xml", core_properties(&doc.metadata)),
        ("docProps/app.xml", app_properties(doc.pages.len())),
        ("word/document.xml", document_xml(doc, &media)),
        ("word/styles.xml", styles()),
        ("word/settings.xml", settings()),
        ("word/_rels/document.xml.rels", document_rels(&media)),
    ];
    for (name, xml) in parts {
        zip.start_file(name, options)?;
        zip.write_all(xml.as_bytes())?;
    }

    for entry in &media {
        log::debug!(
            "embedding {} ({}x{} px)",
            entry.file_name,
            entry.image.pixel_width,
            entry.image.pixel_height
        );
        zip.start_file(format!("word/media/{}", entry.file_name), options)?;
        zip.write_all(&entry.image.data)?;
    }

    log::debug!("wrote {} pages and {} images", doc.pages.len(), media.len());
    Ok(zip.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_and_control_chars() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape("bell\u{7}tab\t"), "belltab\t");
    }

    #[test]
    fn unit_conversions() {
        assert_eq!(pts_to_twips(72.0), 1440);
        assert_eq!(pts_to_emu(72.0), 914400);
        assert_eq!(pts_to_half_points(10.5), 21);
    }

    #[test]
    fn run_xml_orders_properties() {
        let run = Run {
            text: "Hi".into(),
            font_size: 12.0,
            font_name: "Arial".into(),
            bold: true,
            italic: false,
            color: Some([255, 0, 16]),
        };
        let xml = run_xml(&run);
        let b = xml.find("<w:b/>").unwrap();
        let color = xml.find("<w:color w:val=\"FF0010\"/>").unwrap();
        let sz = xml.find("<w:sz w:val=\"24\"/>").unwrap();
        assert!(b < color && color < sz);
        assert!(!xml.contains("<w:i/>"));
    }

    #[test]
    fn narrow_page_keeps_a_text_area() {
        let page = Page {
            width: 100.0,
            height: 100.0,
            margin_top: 0.0,
            margin_bottom: 0.0,
            margin_left: 40.0,
            margin_right: 40.0,
            paragraphs: Vec::new(),
        };
        let xml = section_properties(&page);
        // 8pt trimmed from each side leaves 36pt of text width.
        assert!(xml.contains("w:right=\"640\""));
        assert!(xml.contains("w:left=\"640\""));
    }
}
