use std::collections::HashMap;

use lopdf::{Dictionary, Document, Object};
use ttf_parser::Face;

use crate::glyph_list::GLYPH_LIST;
use crate::pdf::{dict_get, dict_get_dict, name, number, resolve, stream_bytes};

/// Glyph advance used when a font carries no width information (thousandths of an em).
const DEFAULT_WIDTH: f32 = 500.0;

/// Largest `bfrange` expanded into the lookup table.
const MAX_RANGE_LEN: u32 = 0x1_0000;

pub(crate) struct Glyph {
    pub(crate) code: u32,
    pub(crate) text: String,
    pub(crate) single_byte: bool,
}

enum Widths {
    Simple { first_char: u32, widths: Vec<f32>, missing: f32 },
    Cid { default: f32, widths: HashMap<u32, f32> },
}

impl Widths {
    fn get(&self, code: u32) -> f32 {
        match self {
            Widths::Simple { first_char, widths, missing } => code
                .checked_sub(*first_char)
                .and_then(|i| widths.get(i as usize))
                .copied()
                .filter(|w| *w > 0.0)
                .unwrap_or(*missing),
            Widths::Cid { default, widths } => widths.get(&code).copied().unwrap_or(*default),
        }
    }
}

pub(crate) struct FontInfo {
    pub(crate) name: String,
    pub(crate) bold: bool,
    pub(crate) italic: bool,
    two_byte: bool,
    to_unicode: Option<ToUnicode>,
    encoding: [char; 256],
    widths: Widths,
}

impl FontInfo {
    pub(crate) fn fallback() -> Self {
        FontInfo {
            name: "Arial".to_string(),
            bold: false,
            italic: false,
            two_byte: false,
            to_unicode: None,
            encoding: win_ansi_table(),
            widths: Widths::Simple { first_char: 0, widths: Vec::new(), missing: DEFAULT_WIDTH },
        }
    }

    pub(crate) fn load(doc: &Document, font: &Dictionary) -> Self {
        let subtype = font.get(b"Subtype").ok().and_then(name).unwrap_or(b"Type1");
        let two_byte = subtype == b"Type0";

        let base_font = dict_get(doc, font, b"BaseFont")
            .and_then(name)
            .map(|n| String::from_utf8_lossy(n).into_owned())
            .unwrap_or_default();
        let style = parse_font_name(&base_font);

        // Type0 fonts keep their metrics on the single descendant CIDFont.
        let descendant = if two_byte {
            match dict_get(doc, font, b"DescendantFonts") {
                Some(Object::Array(items)) => items.first().and_then(|d| match resolve(doc, d) {
                    Object::Dictionary(d) => Some(d),
                    _ => None,
                }),
                _ => None,
            }
        } else {
            None
        };
        let metrics_dict = descendant.unwrap_or(font);
        let descriptor = dict_get_dict(doc, metrics_dict, b"FontDescriptor");

        let mut family = style.family;
        let mut bold = style.bold;
        let mut italic = style.italic;

        if let Some(descriptor) = descriptor {
            let flags = dict_get(doc, descriptor, b"Flags").and_then(number).unwrap_or(0.0) as u32;
            italic |= flags & 0x40 != 0;
            bold |= dict_get(doc, descriptor, b"FontWeight")
                .and_then(number)
                .is_some_and(|w| w >= 600.0);

            if let Some(Object::Stream(program)) = dict_get(doc, descriptor, b"FontFile2")
                && let Ok(data) = stream_bytes(program)
                && let Some((face_family, face_bold, face_italic)) = read_font_style(&data, 0)
            {
                family = face_family;
                bold |= face_bold;
                italic |= face_italic;
            }
        }

        let to_unicode = match dict_get(doc, font, b"ToUnicode") {
            Some(Object::Stream(stream)) => match stream_bytes(stream) {
                Ok(data) => Some(ToUnicode::parse(&data)),
                Err(e) => {
                    log::debug!("unreadable ToUnicode CMap for {base_font}: {e}");
                    None
                }
            },
            _ => None,
        };

        let encoding = simple_encoding(doc, font);

        let widths = if two_byte {
            cid_widths(doc, metrics_dict)
        } else {
            simple_widths(doc, font, &base_font)
        };

        log::debug!("loaded font {base_font} as {family} (bold: {bold}, italic: {italic})");

        FontInfo { name: family, bold, italic, two_byte, to_unicode, encoding, widths }
    }

    pub(crate) fn decode(&self, bytes: &[u8]) -> Vec<Glyph> {
        let code_len = if self.two_byte { 2 } else { 1 };
        bytes
            .chunks(code_len)
            .map(|chunk| {
                let code = chunk.iter().fold(0u32, |acc, b| (acc << 8) | *b as u32);
                let text = self
                    .to_unicode
                    .as_ref()
                    .and_then(|cmap| cmap.map.get(&code).cloned())
                    .unwrap_or_else(|| self.fallback_text(code));
                Glyph { code, text, single_byte: code_len == 1 }
            })
            .collect()
    }

    fn fallback_text(&self, code: u32) -> String {
        if self.two_byte {
            // Identity-encoded CID fonts without ToUnicode: best effort as UCS-2.
            char::from_u32(code).filter(|c| !c.is_control()).map(String::from).unwrap_or_default()
        } else {
            let c = self.encoding[(code & 0xFF) as usize];
            if c == '\0' { String::new() } else { c.to_string() }
        }
    }

    /// Advance width for `code` in thousandths of the font size.
    pub(crate) fn width(&self, code: u32) -> f32 {
        self.widths.get(code)
    }
}

pub(crate) struct FontName {
    pub(crate) family: String,
    pub(crate) bold: bool,
    pub(crate) italic: bool,
}

/// Split a PostScript font name such as `ABCDEF+Arial-BoldItalicMT` into family and style.
pub(crate) fn parse_font_name(base_font: &str) -> FontName {
    let without_subset = match base_font.split_once('+') {
        Some((tag, rest)) if tag.len() == 6 && tag.bytes().all(|b| b.is_ascii_uppercase()) => rest,
        _ => base_font,
    };

    let lower = without_subset.to_ascii_lowercase();
    let bold = ["bold", "black", "heavy", "semibold", "demibold"]
        .iter()
        .any(|s| lower.contains(s));
    let italic = lower.contains("italic") || lower.contains("oblique");

    let mut family = without_subset
        .split(['-', ','])
        .next()
        .unwrap_or(without_subset)
        .to_string();
    for suffix in ["PSMT", "MT", "PS"] {
        if family.len() > suffix.len()
            && let Some(stripped) = family.strip_suffix(suffix)
        {
            family = stripped.to_string();
            break;
        }
    }

    let family = match family.as_str() {
        "" => "Arial".to_string(),
        "Helvetica" => "Arial".to_string(),
        "Times" | "TimesNewRoman" => "Times New Roman".to_string(),
        "Courier" | "CourierNew" => "Courier New".to_string(),
        "Symbol" => "Symbol".to_string(),
        "ZapfDingbats" => "Wingdings".to_string(),
        other => other.to_string(),
    };

    FontName { family, bold, italic }
}

fn font_family_name(face: &Face) -> Option<String> {
    // Name ID 1 (Family) is what a word processor will match against.
    for name in face.names() {
        if name.name_id == ttf_parser::name_id::FAMILY
            && name.is_unicode()
            && let Some(s) = name.to_string()
        {
            return Some(s);
        }
    }
    None
}

fn read_font_style(data: &[u8], face_index: u32) -> Option<(String, bool, bool)> {
    let face = Face::parse(data, face_index).ok()?;
    let family = font_family_name(&face)?;
    Some((family, face.is_bold(), face.is_italic()))
}

fn simple_widths(doc: &Document, font: &Dictionary, base_font: &str) -> Widths {
    let missing = if base_font.contains("Courier") { 600.0 } else { DEFAULT_WIDTH };
    let first_char = dict_get(doc, font, b"FirstChar").and_then(number).unwrap_or(0.0) as u32;
    let widths = match dict_get(doc, font, b"Widths") {
        Some(Object::Array(items)) => items
            .iter()
            .map(|w| number(resolve(doc, w)).unwrap_or(0.0))
            .collect(),
        _ => Vec::new(),
    };
    Widths::Simple { first_char, widths, missing }
}

/// Parse the CIDFont `W` array: `c [w1 w2 ...]` and `c_first c_last w` entries.
fn cid_widths(doc: &Document, cid_font: &Dictionary) -> Widths {
    let default = dict_get(doc, cid_font, b"DW").and_then(number).unwrap_or(1000.0);
    let mut widths = HashMap::new();
    let Some(Object::Array(items)) = dict_get(doc, cid_font, b"W") else {
        return Widths::Cid { default, widths };
    };

    let items: Vec<&Object> = items.iter().map(|o| resolve(doc, o)).collect();
    let mut i = 0;
    while i < items.len() {
        let Some(first) = number(items[i]) else {
            i += 1;
            continue;
        };
        let first = first as u32;
        match items.get(i + 1) {
            Some(Object::Array(list)) => {
                for (offset, w) in list.iter().enumerate() {
                    let Some(cid) = u32::try_from(offset).ok().and_then(|o| first.checked_add(o))
                    else {
                        break;
                    };
                    if let Some(w) = number(resolve(doc, w)) {
                        widths.insert(cid, w);
                    }
                }
                i += 2;
            }
            Some(last) => {
                let last = number(last).unwrap_or(first as f32) as u32;
                let w = items.get(i + 2).and_then(|o| number(o)).unwrap_or(default);
                for cid in first..=last.min(first.saturating_add(MAX_RANGE_LEN)) {
                    widths.insert(cid, w);
                }
                i += 3;
            }
            None => break,
        }
    }
    Widths::Cid { default, widths }
}

fn simple_encoding(doc: &Document, font: &Dictionary) -> [char; 256] {
    let encoding = dict_get(doc, font, b"Encoding");
    let base_name = match encoding {
        Some(Object::Name(n)) => Some(n.as_slice()),
        Some(Object::Dictionary(d)) => dict_get(doc, d, b"BaseEncoding").and_then(name),
        _ => None,
    };

    let mut table = match base_name {
        Some(b"MacRomanEncoding") => mac_roman_table(),
        Some(b"StandardEncoding") => standard_table(),
        _ => win_ansi_table(),
    };

    if let Some(Object::Dictionary(d)) = encoding
        && let Some(Object::Array(differences)) = dict_get(doc, d, b"Differences")
    {
        let mut code = 0usize;
        for item in differences {
            match resolve(doc, item) {
                Object::Integer(start) => code = (*start).clamp(0, 255) as usize,
                Object::Name(glyph) => {
                    if code < 256 {
                        // Unknown names map to no text.
                        let glyph = String::from_utf8_lossy(glyph);
                        table[code] = glyph_to_char(&glyph).unwrap_or('\0');
                    }
                    code += 1;
                }
                _ => {}
            }
        }
    }

    table
}

fn latin1_table() -> [char; 256] {
    let mut table = ['\0'; 256];
    for (i, slot) in table.iter_mut().enumerate().skip(0x20) {
        *slot = char::from(i as u8);
    }
    table[0x7F] = '\0';
    table
}

const WIN_ANSI_HIGH: [(u8, char); 27] = [
    (0x80, '\u{20AC}'), (0x82, '\u{201A}'), (0x83, '\u{0192}'), (0x84, '\u{201E}'),
    (0x85, '\u{2026}'), (0x86, '\u{2020}'), (0x87, '\u{2021}'), (0x88, '\u{02C6}'),
    (0x89, '\u{2030}'), (0x8A, '\u{0160}'), (0x8B, '\u{2039}'), (0x8C, '\u{0152}'),
    (0x8E, '\u{017D}'), (0x91, '\u{2018}'), (0x92, '\u{2019}'), (0x93, '\u{201C}'),
    (0x94, '\u{201D}'), (0x95, '\u{2022}'), (0x96, '\u{2013}'), (0x97, '\u{2014}'),
    (0x98, '\u{02DC}'), (0x99, '\u{2122}'), (0x9A, '\u{0161}'), (0x9B, '\u{203A}'),
    (0x9C, '\u{0153}'), (0x9E, '\u{017E}'), (0x9F, '\u{0178}'),
];

fn win_ansi_table() -> [char; 256] {
    let mut table = latin1_table();
    for b in 0x80..0xA0 {
        table[b] = '\0';
    }
    for (code, c) in WIN_ANSI_HIGH {
        table[code as usize] = c;
    }
    table
}

const STANDARD_GLYPHS: [(u8, &str); 56] = [
    (0x27, "quoteright"), (0x60, "quoteleft"), (0xA1, "exclamdown"), (0xA2, "cent"),
    (0xA3, "sterling"), (0xA4, "fraction"), (0xA5, "yen"), (0xA6, "florin"), (0xA7, "section"),
    (0xA8, "currency"), (0xA9, "quotesingle"), (0xAA, "quotedblleft"), (0xAB, "guillemotleft"),
    (0xAC, "guilsinglleft"), (0xAD, "guilsinglright"), (0xAE, "fi"), (0xAF, "fl"),
    (0xB1, "endash"), (0xB2, "dagger"), (0xB3, "daggerdbl"), (0xB4, "periodcentered"),
    (0xB6, "paragraph"), (0xB7, "bullet"), (0xB8, "quotesinglbase"), (0xB9, "quotedblbase"),
    (0xBA, "quotedblright"), (0xBB, "guillemotright"), (0xBC, "ellipsis"), (0xBD, "perthousand"),
    (0xBF, "questiondown"), (0xC1, "grave"), (0xC2, "acute"), (0xC3, "circumflex"),
    (0xC4, "tilde"), (0xC5, "macron"), (0xC6, "breve"), (0xC7, "dotaccent"), (0xC8, "dieresis"),
    (0xCA, "ring"), (0xCB, "cedilla"), (0xCD, "hungarumlaut"), (0xCE, "ogonek"), (0xCF, "caron"),
    (0xD0, "emdash"), (0xE1, "AE"), (0xE3, "ordfeminine"), (0xE8, "Lslash"), (0xE9, "Oslash"),
    (0xEA, "OE"), (0xEB, "ordmasculine"), (0xF1, "ae"), (0xF5, "dotlessi"), (0xF8, "lslash"),
    (0xF9, "oslash"), (0xFA, "oe"), (0xFB, "germandbls"),
];

fn standard_table() -> [char; 256] {
    let mut table = latin1_table();
    for slot in &mut table[0x80..] {
        *slot = '\0';
    }
    for (code, glyph) in STANDARD_GLYPHS {
        table[code as usize] = glyph_to_char(glyph).unwrap_or('\0');
    }
    table
}

const MAC_ROMAN_HIGH: [char; 128] = [
    'Ä', 'Å', 'Ç', 'É', 'Ñ', 'Ö', 'Ü', 'á', 'à', 'â', 'ä', 'ã', 'å', 'ç', 'é', 'è',
    'ê', 'ë', 'í', 'ì', 'î', 'ï', 'ñ', 'ó', 'ò', 'ô', 'ö', 'õ', 'ú', 'ù', 'û', 'ü',
    '†', '°', '¢', '£', '§', '•', '¶', 'ß', '®', '©', '™', '´', '¨', '≠', 'Æ', 'Ø',
    '∞', '±', '≤', '≥', '¥', 'µ', '∂', '∑', '∏', 'π', '∫', 'ª', 'º', 'Ω', 'æ', 'ø',
    '¿', '¡', '¬', '√', 'ƒ', '≈', '∆', '«', '»', '…', '\u{A0}', 'À', 'Ã', 'Õ', 'Œ', 'œ',
    '–', '—', '“', '”', '‘', '’', '÷', '◊', 'ÿ', 'Ÿ', '⁄', '€', '‹', '›', 'ﬁ', 'ﬂ',
    '‡', '·', '‚', '„', '‰', 'Â', 'Ê', 'Á', 'Ë', 'È', 'Í', 'Î', 'Ï', 'Ì', 'Ó', 'Ô',
    '\u{F8FF}', 'Ò', 'Ú', 'Û', 'Ù', 'ı', 'ˆ', '˜', '¯', '˘', '˙', '˚', '¸', '˝', '˛', 'ˇ',
];

fn mac_roman_table() -> [char; 256] {
    let mut table = latin1_table();
    for (i, c) in MAC_ROMAN_HIGH.iter().enumerate() {
        table[0x80 + i] = *c;
    }
    table
}

/// Map a glyph name from an encoding `Differences` array to its character.
/// Suffixes after a period (`a.sc`, `one.oldstyle`) name variants of the base glyph.
pub(crate) fn glyph_to_char(glyph: &str) -> Option<char> {
    let base = glyph.split('.').next().unwrap_or(glyph);
    if let Ok(i) = GLYPH_LIST.binary_search_by(|(n, _)| (*n).cmp(base)) {
        return Some(GLYPH_LIST[i].1);
    }
    let hex = base
        .strip_prefix("uni")
        .filter(|h| h.len() == 4)
        .or_else(|| base.strip_prefix('u').filter(|h| (4..=6).contains(&h.len())))?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// A ToUnicode CMap reduced to a code → text lookup.
pub(crate) struct ToUnicode {
    pub(crate) map: HashMap<u32, String>,
}

#[derive(Debug, PartialEq)]
enum Token {
    Hex(Vec<u8>),
    Keyword(String),
    ArrayStart,
    ArrayEnd,
}

fn tokenize(data: &[u8]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        match b {
            b'%' => {
                while i < data.len() && data[i] != b'\n' && data[i] != b'\r' {
                    i += 1;
                }
            }
            b'<' if data.get(i + 1) == Some(&b'<') => i += 2,
            b'>' if data.get(i + 1) == Some(&b'>') => i += 2,
            b'<' => {
                let end = data[i..].iter().position(|c| *c == b'>').map_or(data.len(), |p| i + p);
                let digits: Vec<u8> = data[i + 1..end]
                    .iter()
                    .copied()
                    .filter(u8::is_ascii_hexdigit)
                    .collect();
                let bytes = digits
                    .chunks(2)
                    .map(|pair| {
                        let hi = hex_value(pair[0]);
                        let lo = pair.get(1).map_or(0, |c| hex_value(*c));
                        (hi << 4) | lo
                    })
                    .collect();
                tokens.push(Token::Hex(bytes));
                i = end + 1;
            }
            b'[' => {
                tokens.push(Token::ArrayStart);
                i += 1;
            }
            b']' => {
                tokens.push(Token::ArrayEnd);
                i += 1;
            }
            b'(' => {
                let mut depth = 0;
                while i < data.len() {
                    match data[i] {
                        b'\\' => i += 1,
                        b'(' => depth += 1,
                        b')' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                    i += 1;
                }
                i += 1;
            }
            c if c.is_ascii_whitespace() => i += 1,
            _ => {
                let start = i;
                while i < data.len()
                    && !data[i].is_ascii_whitespace()
                    && !b"<>[]()%".contains(&data[i])
                {
                    i += 1;
                }
                if i == start {
                    i += 1;
                } else {
                    let word = String::from_utf8_lossy(&data[start..i]);
                    tokens.push(Token::Keyword(word.trim_start_matches('/').to_string()));
                }
            }
        }
    }
    tokens
}

fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

fn code_of(bytes: &[u8]) -> u32 {
    bytes.iter().take(4).fold(0u32, |acc, b| (acc << 8) | *b as u32)
}

fn utf16_text(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair.get(1).copied().unwrap_or(0)]))
        .collect();
    String::from_utf16_lossy(&units)
}

/// `dst` with its last UTF-16 unit advanced by `offset`, as `bfrange` prescribes.
fn offset_text(dst: &[u8], offset: u32) -> String {
    let mut units: Vec<u16> = dst
        .chunks(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair.get(1).copied().unwrap_or(0)]))
        .collect();
    if let Some(last) = units.last_mut() {
        *last = last.wrapping_add(offset as u16);
    }
    String::from_utf16_lossy(&units)
}

impl ToUnicode {
    pub(crate) fn parse(data: &[u8]) -> Self {
        let tokens = tokenize(data);
        let mut map = HashMap::new();
        let mut i = 0;

        while i < tokens.len() {
            match &tokens[i] {
                Token::Keyword(k) if k == "beginbfchar" => {
                    i += 1;
                    while let (Some(Token::Hex(src)), Some(Token::Hex(dst))) =
                        (tokens.get(i), tokens.get(i + 1))
                    {
                        map.insert(code_of(src), utf16_text(dst));
                        i += 2;
                    }
                }
                Token::Keyword(k) if k == "beginbfrange" => {
                    i += 1;
                    while let (Some(Token::Hex(lo)), Some(Token::Hex(hi))) =
                        (tokens.get(i), tokens.get(i + 1))
                    {
                        let lo = code_of(lo);
                        let hi = code_of(hi).min(lo.saturating_add(MAX_RANGE_LEN));
                        match tokens.get(i + 2) {
                            Some(Token::Hex(dst)) => {
                                for code in lo..=hi {
                                    map.insert(code, offset_text(dst, code - lo));
                                }
                                i += 3;
                            }
                            Some(Token::ArrayStart) => {
                                let mut j = i + 3;
                                let mut code = Some(lo);
                                while let Some(Token::Hex(dst)) = tokens.get(j) {
                                    if let Some(c) = code.filter(|c| *c <= hi) {
                                        map.insert(c, utf16_text(dst));
                                    }
                                    code = code.and_then(|c| c.checked_add(1));
                                    j += 1;
                                }
                                // Skip the closing bracket.
                                i = j + 1;
                            }
                            _ => break,
                        }
                    }
                }
                _ => i += 1,
            }
        }

        ToUnicode { map }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_name_strips_subset_tag_and_style() {
        let parsed = parse_font_name("ABCDEF+Arial-BoldItalicMT");
        assert_eq!(parsed.family, "Arial");
        assert!(parsed.bold);
        assert!(parsed.italic);

        let parsed = parse_font_name("TimesNewRomanPSMT");
        assert_eq!(parsed.family, "Times New Roman");
        assert!(!parsed.bold);

        let parsed = parse_font_name("Helvetica-Oblique");
        assert_eq!(parsed.family, "Arial");
        assert!(parsed.italic);
        assert!(!parsed.bold);
    }

    #[test]
    fn font_name_keeps_lowercase_prefix() {
        let parsed = parse_font_name("abcdef+Calibri,Bold");
        assert_eq!(parsed.family, "abcdef+Calibri");
        assert!(parsed.bold);
    }

    #[test]
    fn cmap_bfchar_and_bfrange() {
        let cmap = b"/CIDInit /ProcSet findresource begin
            12 dict begin
            begincmap
            1 begincodespacerange <0000> <FFFF> endcodespacerange
            2 beginbfchar
            <0003> <0020>
            <0011> <00660069>
            endbfchar
            2 beginbfrange
            <0024> <0026> <0041>
            <0030> <0031> [<0078> <0079>]
            endbfrange
            endcmap";
        let parsed = ToUnicode::parse(cmap);
        assert_eq!(parsed.map.get(&0x03).map(String::as_str), Some(" "));
        assert_eq!(parsed.map.get(&0x11).map(String::as_str), Some("fi"));
        assert_eq!(parsed.map.get(&0x24).map(String::as_str), Some("A"));
        assert_eq!(parsed.map.get(&0x26).map(String::as_str), Some("C"));
        assert_eq!(parsed.map.get(&0x31).map(String::as_str), Some("y"));
        assert_eq!(parsed.map.get(&0x27), None);
    }

    #[test]
    fn glyph_names_resolve() {
        assert_eq!(glyph_to_char("A"), Some('A'));
        assert_eq!(glyph_to_char("uni00E9"), Some('\u{e9}'));
        assert_eq!(glyph_to_char("emdash"), Some('\u{2014}'));
        assert_eq!(glyph_to_char("g123"), None);
        assert_eq!(glyph_to_char("eacute"), Some('\u{e9}'));
        assert_eq!(glyph_to_char("Adieresis"), Some('\u{c4}'));
        assert_eq!(glyph_to_char("ccedilla"), Some('\u{e7}'));
        assert_eq!(glyph_to_char("a.sc"), Some('a'));
        assert_eq!(glyph_to_char("u1F600"), Some('\u{1F600}'));
        assert_eq!(glyph_to_char("uniZZZZ"), None);
    }

    #[test]
    fn standard_encoding_high_range() {
        let table = standard_table();
        assert_eq!(table[0xA4], '\u{2044}');
        assert_eq!(table[0xE1], '\u{c6}');
        assert_eq!(table[0x27], '\u{2019}');
        assert_eq!(table[0xA0], '\0');
        assert_eq!(table[0xC0], '\0');
        assert_eq!(table[b'a' as usize], 'a');
    }

    #[test]
    fn cmap_range_near_code_limit_stops_expanding() {
        let cmap = b"1 beginbfrange
            <FFFFFFFE> <FFFFFFFF> [<0041> <0042> <0043>]
            endbfrange";
        let parsed = ToUnicode::parse(cmap);
        assert_eq!(parsed.map.get(&0xFFFF_FFFE).map(String::as_str), Some("A"));
        assert_eq!(parsed.map.get(&0xFFFF_FFFF).map(String::as_str), Some("B"));
        assert_eq!(parsed.map.len(), 2);
    }

    #[test]
    fn cid_widths_stop_at_code_limit() {
        let doc = Document::new();
        let mut cid_font = Dictionary::new();
        cid_font.set(
            "W",
            vec![
                Object::Integer(u32::MAX as i64),
                Object::Array(vec![Object::Integer(250), Object::Integer(300)]),
            ],
        );
        let widths = cid_widths(&doc, &cid_font);
        assert_eq!(widths.get(u32::MAX), 250.0);
        assert_eq!(widths.get(7), 1000.0);
    }

    #[test]
    fn win_ansi_maps_smart_quotes() {
        let table = win_ansi_table();
        assert_eq!(table[0x93], '\u{201C}');
        assert_eq!(table[b'A' as usize], 'A');
        assert_eq!(table[0x81], '\0');
    }

    #[test]
    fn fallback_font_decodes_single_bytes() {
        let font = FontInfo::fallback();
        let glyphs = font.decode(b"Hi ");
        let text: String = glyphs.iter().map(|g| g.text.as_str()).collect();
        assert_eq!(text, "Hi ");
        assert!(glyphs[2].single_byte);
        assert_eq!(font.width(b'H' as u32), DEFAULT_WIDTH);
    }
}
