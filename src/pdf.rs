use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use lopdf::content::Content;
use lopdf::{Dictionary, Object, ObjectId, Stream};

use crate::error::Error;
use crate::fonts::FontInfo;
use crate::images;
use crate::model::{EmbeddedImage, Metadata};

const LETTER_WIDTH: f32 = 612.0;
const LETTER_HEIGHT: f32 = 792.0;
const MAX_FORM_DEPTH: usize = 8;
const MAX_REFERENCE_DEPTH: usize = 32;

/// A TJ offset (in thousandths of an em) past which the gap reads as a word break.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

pub(crate) type Matrix = [f32; 6];

pub(crate) const IDENTITY: Matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// `a × b` in PDF row-vector convention: apply `a` first, then `b`.
pub(crate) fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    [
        a[0] * b[0] + a[1] * b[2],
        a[0] * b[1] + a[1] * b[3],
        a[2] * b[0] + a[3] * b[2],
        a[2] * b[1] + a[3] * b[3],
        a[4] * b[0] + a[5] * b[2] + b[4],
        a[4] * b[1] + a[5] * b[3] + b[5],
    ]
}

fn translate(tx: f32, ty: f32) -> Matrix {
    [1.0, 0.0, 0.0, 1.0, tx, ty]
}

fn apply(m: &Matrix, x: f32, y: f32) -> (f32, f32) {
    (x * m[0] + y * m[2] + m[4], x * m[1] + y * m[3] + m[5])
}

/// Follow indirect references until a direct object is reached.
pub(crate) fn resolve<'a>(doc: &'a lopdf::Document, mut obj: &'a Object) -> &'a Object {
    for _ in 0..MAX_REFERENCE_DEPTH {
        match obj {
            Object::Reference(id) => match doc.get_object(*id) {
                Ok(target) => obj = target,
                Err(_) => return &Object::Null,
            },
            _ => return obj,
        }
    }
    &Object::Null
}

pub(crate) fn dict_get<'a>(
    doc: &'a lopdf::Document,
    dict: &'a Dictionary,
    key: &[u8],
) -> Option<&'a Object> {
    dict.get(key).ok().map(|obj| resolve(doc, obj))
}

pub(crate) fn dict_get_dict<'a>(
    doc: &'a lopdf::Document,
    dict: &'a Dictionary,
    key: &[u8],
) -> Option<&'a Dictionary> {
    match dict_get(doc, dict, key)? {
        Object::Dictionary(d) => Some(d),
        Object::Stream(s) => Some(&s.dict),
        _ => None,
    }
}

pub(crate) fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r as f32),
        _ => None,
    }
}

pub(crate) fn name(obj: &Object) -> Option<&[u8]> {
    match obj {
        Object::Name(n) => Some(n.as_slice()),
        _ => None,
    }
}

/// Stream payload with its filters removed. Unfiltered streams are returned as-is.
pub(crate) fn stream_bytes(stream: &Stream) -> Result<Vec<u8>, Error> {
    if stream.dict.has(b"Filter") {
        Ok(stream.decompressed_content()?)
    } else {
        Ok(stream.content.clone())
    }
}

fn matrix_operand(operands: &[Object]) -> Option<Matrix> {
    if operands.len() < 6 {
        return None;
    }
    let mut m = IDENTITY;
    for (slot, obj) in m.iter_mut().zip(operands) {
        *slot = number(obj)?;
    }
    Some(m)
}

/// One shown string, positioned on the page (origin bottom-left, y up).
pub(crate) struct TextSpan {
    pub(crate) text: String,
    pub(crate) x: f32,
    pub(crate) y: f32, // baseline
    pub(crate) width: f32,
    pub(crate) font_size: f32,
    pub(crate) font: Rc<FontInfo>,
    pub(crate) color: Option<[u8; 3]>,
}

pub(crate) struct PlacedImage {
    pub(crate) x: f32,
    pub(crate) y: f32, // bottom edge
    pub(crate) image: EmbeddedImage,
}

pub(crate) struct PageContent {
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) spans: Vec<TextSpan>,
    pub(crate) images: Vec<PlacedImage>,
}

/// Loaded fonts keyed by the font dictionary's object id.
#[derive(Default)]
pub(crate) struct FontCache {
    fonts: HashMap<ObjectId, Rc<FontInfo>>,
}

pub(crate) struct PdfDocument {
    doc: lopdf::Document,
    pages: Vec<ObjectId>,
}

impl PdfDocument {
    pub(crate) fn load(path: &Path) -> Result<Self, Error> {
        let bytes = std::fs::read(path)?;
        if !bytes.windows(5).take(1024).any(|w| w == b"%PDF-") {
            return Err(Error::InvalidPdf("missing %PDF header".into()));
        }
        let doc = lopdf::Document::load_mem(&bytes)?;
        let pages = doc.get_pages().into_values().collect();
        Ok(PdfDocument { doc, pages })
    }

    pub(crate) fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub(crate) fn metadata(&self) -> Metadata {
        let info = self
            .doc
            .trailer
            .get(b"Info")
            .ok()
            .map(|obj| resolve(&self.doc, obj));
        let Some(Object::Dictionary(info)) = info else {
            return Metadata::default();
        };
        let text = |key: &[u8]| {
            let decoded = lopdf::decode_text_string(dict_get(&self.doc, info, key)?).ok()?;
            let trimmed = decoded.trim_start_matches('\u{FEFF}').trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        Metadata {
            title: text(b"Title"),
            author: text(b"Author"),
            subject: text(b"Subject"),
        }
    }

    /// Look up a page attribute, walking up the page tree for inherited keys.
    fn inherited(&self, page_id: ObjectId, key: &[u8]) -> Option<&Object> {
        let mut node = self.doc.get_object(page_id).ok()?.as_dict().ok()?;
        for _ in 0..MAX_REFERENCE_DEPTH {
            if let Ok(value) = node.get(key) {
                return Some(resolve(&self.doc, value));
            }
            let parent = node.get(b"Parent").ok()?.as_reference().ok()?;
            node = self.doc.get_object(parent).ok()?.as_dict().ok()?;
        }
        None
    }

    fn media_box(&self, page_id: ObjectId) -> [f32; 4] {
        let Some(Object::Array(values)) = self.inherited(page_id, b"MediaBox") else {
            return [0.0, 0.0, LETTER_WIDTH, LETTER_HEIGHT];
        };
        let nums: Vec<f32> = values
            .iter()
            .filter_map(|v| number(resolve(&self.doc, v)))
            .collect();
        if nums.len() != 4 {
            return [0.0, 0.0, LETTER_WIDTH, LETTER_HEIGHT];
        }
        [
            nums[0].min(nums[2]),
            nums[1].min(nums[3]),
            nums[0].max(nums[2]),
            nums[1].max(nums[3]),
        ]
    }

    /// Interpret the content stream of the page at `index` (0-based).
    pub(crate) fn page(&self, index: usize, fonts: &mut FontCache) -> Result<PageContent, Error> {
        let page_id = *self
            .pages
            .get(index)
            .ok_or_else(|| Error::PageRange(format!("page {index} does not exist")))?;

        let [x0, y0, x1, y1] = self.media_box(page_id);
        let resources = match self.inherited(page_id, b"Resources") {
            Some(Object::Dictionary(d)) => Some(d),
            _ => None,
        };

        let data = self.doc.get_page_content(page_id)?;
        let mut interpreter = Interpreter {
            doc: &self.doc,
            fonts,
            spans: Vec::new(),
            images: Vec::new(),
            image_count: 0,
        };
        // Shift the media box origin to (0, 0).
        let ctm = translate(-x0, -y0);
        interpreter.run(&data, resources, GraphicsState::new(ctm), 0)?;

        log::debug!(
            "page {}: {} text spans, {} images",
            index + 1,
            interpreter.spans.len(),
            interpreter.images.len()
        );

        Ok(PageContent {
            width: x1 - x0,
            height: y1 - y0,
            spans: interpreter.spans,
            images: interpreter.images,
        })
    }
}

#[derive(Clone)]
struct GraphicsState {
    ctm: Matrix,
    fill: Option<[u8; 3]>,
    font: Option<Rc<FontInfo>>,
    font_size: f32,
    char_spacing: f32,
    word_spacing: f32,
    horizontal_scale: f32,
    leading: f32,
    rise: f32,
    render_mode: i64,
}

impl GraphicsState {
    fn new(ctm: Matrix) -> Self {
        GraphicsState {
            ctm,
            fill: None,
            font: None,
            font_size: 0.0,
            char_spacing: 0.0,
            word_spacing: 0.0,
            horizontal_scale: 1.0,
            leading: 0.0,
            rise: 0.0,
            render_mode: 0,
        }
    }
}

fn gray(v: f32) -> Option<[u8; 3]> {
    rgb(v, v, v)
}

fn rgb(r: f32, g: f32, b: f32) -> Option<[u8; 3]> {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    let color = [to_byte(r), to_byte(g), to_byte(b)];
    // Black is the automatic colour in the output document.
    (color != [0, 0, 0]).then_some(color)
}

fn cmyk(c: f32, m: f32, y: f32, k: f32) -> Option<[u8; 3]> {
    rgb((1.0 - c) * (1.0 - k), (1.0 - m) * (1.0 - k), (1.0 - y) * (1.0 - k))
}

fn fill_from_components(values: &[f32]) -> Option<Option<[u8; 3]>> {
    match values {
        [v] => Some(gray(*v)),
        [r, g, b] => Some(rgb(*r, *g, *b)),
        [c, m, y, k] => Some(cmyk(*c, *m, *y, *k)),
        _ => None,
    }
}

struct Interpreter<'a> {
    doc: &'a lopdf::Document,
    fonts: &'a mut FontCache,
    spans: Vec<TextSpan>,
    images: Vec<PlacedImage>,
    image_count: usize,
}

impl<'a> Interpreter<'a> {
    fn run(
        &mut self,
        data: &[u8],
        resources: Option<&'a Dictionary>,
        mut state: GraphicsState,
        depth: usize,
    ) -> Result<(), Error> {
        let content = Content::decode(data)?;

        let mut stack: Vec<GraphicsState> = Vec::new();
        let mut tm = IDENTITY;
        let mut tlm = IDENTITY;

        for op in &content.operations {
            let operands = &op.operands;
            let nums: Vec<f32> = operands.iter().filter_map(number).collect();
            match op.operator.as_str() {
                "q" => stack.push(state.clone()),
                "Q" => {
                    if let Some(saved) = stack.pop() {
                        state = saved;
                    }
                }
                "cm" => {
                    if let Some(m) = matrix_operand(operands) {
                        state.ctm = multiply(&m, &state.ctm);
                    }
                }
                "g" | "rg" | "k" | "sc" | "scn" => {
                    if let Some(fill) = fill_from_components(&nums) {
                        state.fill = fill;
                    }
                }
                "BT" => {
                    tm = IDENTITY;
                    tlm = IDENTITY;
                }
                "Tf" => {
                    if let [Object::Name(font_name), size] = operands.as_slice() {
                        state.font = Some(self.font(resources, font_name));
                        state.font_size = number(size).unwrap_or(0.0);
                    }
                }
                "Tc" => state.char_spacing = nums.first().copied().unwrap_or(0.0),
                "Tw" => state.word_spacing = nums.first().copied().unwrap_or(0.0),
                "Tz" => state.horizontal_scale = nums.first().copied().unwrap_or(100.0) / 100.0,
                "TL" => state.leading = nums.first().copied().unwrap_or(0.0),
                "Ts" => state.rise = nums.first().copied().unwrap_or(0.0),
                "Tr" => {
                    state.render_mode = operands.first().and_then(|o| o.as_i64().ok()).unwrap_or(0)
                }
                "Td" | "TD" => {
                    if let [tx, ty] = nums.as_slice() {
                        if op.operator == "TD" {
                            state.leading = -ty;
                        }
                        tlm = multiply(&translate(*tx, *ty), &tlm);
                        tm = tlm;
                    }
                }
                "Tm" => {
                    if let Some(m) = matrix_operand(operands) {
                        tlm = m;
                        tm = m;
                    }
                }
                "T*" => {
                    tlm = multiply(&translate(0.0, -state.leading), &tlm);
                    tm = tlm;
                }
                "Tj" => {
                    if let Some(Object::String(bytes, _)) = operands.first() {
                        self.show(&state, &mut tm, &[TextPiece::Bytes(bytes)]);
                    }
                }
                "'" | "\"" => {
                    if op.operator == "\"" && nums.len() >= 2 {
                        state.word_spacing = nums[0];
                        state.char_spacing = nums[1];
                    }
                    tlm = multiply(&translate(0.0, -state.leading), &tlm);
                    tm = tlm;
                    if let Some(Object::String(bytes, _)) = operands.last() {
                        self.show(&state, &mut tm, &[TextPiece::Bytes(bytes)]);
                    }
                }
                "TJ" => {
                    if let Some(Object::Array(items)) = operands.first() {
                        let pieces: Vec<TextPiece> = items
                            .iter()
                            .filter_map(|item| match item {
                                Object::String(bytes, _) => Some(TextPiece::Bytes(bytes)),
                                other => number(other).map(TextPiece::Offset),
                            })
                            .collect();
                        self.show(&state, &mut tm, &pieces);
                    }
                }
                "Do" => {
                    if let Some(xobject) = operands.first().and_then(name) {
                        self.draw_xobject(&state, resources, xobject, depth);
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn font(&mut self, resources: Option<&'a Dictionary>, font_name: &[u8]) -> Rc<FontInfo> {
        let entry = resources
            .and_then(|res| dict_get_dict(self.doc, res, b"Font"))
            .and_then(|fonts| fonts.get(font_name).ok());

        match entry {
            Some(Object::Reference(id)) => {
                if let Some(font) = self.fonts.fonts.get(id) {
                    return Rc::clone(font);
                }
                let font = match self.doc.get_object(*id).map(|obj| resolve(self.doc, obj)) {
                    Ok(Object::Dictionary(dict)) => Rc::new(FontInfo::load(self.doc, dict)),
                    _ => Rc::new(FontInfo::fallback()),
                };
                self.fonts.fonts.insert(*id, Rc::clone(&font));
                font
            }
            Some(Object::Dictionary(dict)) => Rc::new(FontInfo::load(self.doc, dict)),
            _ => {
                log::warn!(
                    "font resource /{} not found, using fallback metrics",
                    String::from_utf8_lossy(font_name)
                );
                Rc::new(FontInfo::fallback())
            }
        }
    }

    fn show(&mut self, state: &GraphicsState, tm: &mut Matrix, pieces: &[TextPiece]) {
        let Some(font) = state.font.clone() else {
            return;
        };
        let size = state.font_size;
        let th = state.horizontal_scale;

        let start = *tm;
        let mut text = String::new();
        let mut advance = 0.0f32;

        for piece in pieces {
            match piece {
                TextPiece::Bytes(bytes) => {
                    for glyph in font.decode(bytes) {
                        let w0 = font.width(glyph.code) / 1000.0;
                        let mut tx = w0 * size + state.char_spacing;
                        if glyph.single_byte && glyph.code == 32 {
                            tx += state.word_spacing;
                        }
                        advance += tx * th;
                        text.push_str(&glyph.text);
                    }
                }
                TextPiece::Offset(offset) => {
                    if -offset > TJ_SPACE_THRESHOLD && !text.is_empty() && !text.ends_with(' ') {
                        text.push(' ');
                    }
                    advance -= offset / 1000.0 * size * th;
                }
            }
        }

        *tm = multiply(&translate(advance, 0.0), tm);

        // Tr 3 is invisible text (OCR layers and the like).
        if state.render_mode == 3 || text.trim().is_empty() {
            return;
        }

        let user = multiply(&start, &state.ctm);
        let rendering = multiply(&[size * th, 0.0, 0.0, size, 0.0, state.rise], &user);
        let (x, y) = apply(&rendering, 0.0, 0.0);
        let font_size = rendering[2].hypot(rendering[3]);
        let width = advance * user[0].hypot(user[1]);

        self.spans.push(TextSpan {
            text,
            x,
            y,
            width,
            font_size,
            font,
            color: state.fill,
        });
    }

    fn draw_xobject(
        &mut self,
        state: &GraphicsState,
        resources: Option<&'a Dictionary>,
        xobject: &[u8],
        depth: usize,
    ) {
        let doc = self.doc;
        let stream = resources
            .and_then(|res| dict_get_dict(doc, res, b"XObject"))
            .and_then(|xobjects| dict_get(doc, xobjects, xobject));
        let Some(Object::Stream(stream)) = stream else {
            log::debug!("XObject /{} not found", String::from_utf8_lossy(xobject));
            return;
        };

        match stream.dict.get(b"Subtype").ok().and_then(name) {
            Some(b"Image") => self.place_image(state, stream),
            Some(b"Form") => {
                if depth >= MAX_FORM_DEPTH {
                    log::warn!("form XObjects nested too deeply, skipping");
                    return;
                }
                let matrix = stream
                    .dict
                    .get(b"Matrix")
                    .ok()
                    .and_then(|m| m.as_array().ok())
                    .and_then(|m| matrix_operand(m))
                    .unwrap_or(IDENTITY);
                let form_resources = dict_get_dict(doc, &stream.dict, b"Resources").or(resources);
                // Forms start from the caller's graphics state, including font and fill.
                let mut inner = state.clone();
                inner.ctm = multiply(&matrix, &state.ctm);
                let result = stream_bytes(stream)
                    .and_then(|data| self.run(&data, form_resources, inner, depth + 1));
                if let Err(e) = result {
                    log::warn!("skipping form XObject: {e}");
                }
            }
            _ => {}
        }
    }

    fn place_image(&mut self, state: &GraphicsState, stream: &Stream) {
        self.image_count += 1;
        let decoded = match images::decode(self.doc, stream) {
            Ok(Some(decoded)) => decoded,
            Ok(None) => return,
            Err(e) => {
                log::warn!("skipping image {}: {e}", self.image_count);
                return;
            }
        };

        // The image occupies the unit square mapped through the CTM.
        let corners = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]
            .map(|(x, y)| apply(&state.ctm, x, y));
        let min_x = corners.iter().map(|c| c.0).fold(f32::INFINITY, f32::min);
        let max_x = corners.iter().map(|c| c.0).fold(f32::NEG_INFINITY, f32::max);
        let min_y = corners.iter().map(|c| c.1).fold(f32::INFINITY, f32::min);
        let max_y = corners.iter().map(|c| c.1).fold(f32::NEG_INFINITY, f32::max);

        let display_width = max_x - min_x;
        let display_height = max_y - min_y;
        if display_width < 1.0 || display_height < 1.0 {
            return;
        }

        self.images.push(PlacedImage {
            x: min_x,
            y: min_y,
            image: EmbeddedImage {
                data: decoded.data,
                format: decoded.format,
                pixel_width: decoded.width,
                pixel_height: decoded.height,
                display_width,
                display_height,
            },
        });
    }
}

enum TextPiece<'b> {
    Bytes(&'b [u8]),
    Offset(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_applies_left_operand_first() {
        let scale = [2.0, 0.0, 0.0, 2.0, 0.0, 0.0];
        let shift = translate(10.0, 5.0);
        let m = multiply(&scale, &shift);
        assert_eq!(apply(&m, 1.0, 1.0), (12.0, 7.0));
        let m = multiply(&shift, &scale);
        assert_eq!(apply(&m, 1.0, 1.0), (22.0, 12.0));
    }

    #[test]
    fn black_fill_is_automatic_colour() {
        assert_eq!(gray(0.0), None);
        assert_eq!(rgb(1.0, 0.0, 0.0), Some([255, 0, 0]));
        assert_eq!(cmyk(0.0, 0.0, 0.0, 1.0), None);
        assert_eq!(fill_from_components(&[0.0, 1.0]), None);
    }

    #[test]
    fn metadata_decodes_text_strings() {
        let mut doc = lopdf::Document::with_version("1.7");
        let info = doc.add_object(lopdf::dictionary! {
            "Title" => Object::String(
                vec![0xFE, 0xFF, 0x00, 0x48, 0x00, 0xE9],
                lopdf::StringFormat::Hexadecimal,
            ),
            "Author" => Object::String(b"Report \x84 2024".to_vec(), lopdf::StringFormat::Literal),
            "Subject" => Object::string_literal("   ")
        });
        doc.trailer.set("Info", info);

        let metadata = PdfDocument { doc, pages: Vec::new() }.metadata();
        assert_eq!(metadata.title.as_deref(), Some("H\u{e9}"));
        assert_eq!(metadata.author.as_deref(), Some("Report \u{2014} 2024"));
        assert_eq!(metadata.subject, None);
    }
}
