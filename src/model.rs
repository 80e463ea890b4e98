#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Default)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
}

pub struct Document {
    pub metadata: Metadata,
    pub pages: Vec<Page>,
}

pub struct Page {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
        }
    }
}

pub struct EmbeddedImage {
    pub data: Vec<u8>,
    pub format: ImageFormat,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub display_width: f32,  // points
    pub display_height: f32, // points
}

pub struct Paragraph {
    pub runs: Vec<Run>,
    pub space_before: f32,
    pub alignment: Alignment,
    pub indent_left: f32,
    pub line_spacing: Option<f32>, // exact baseline-to-baseline distance in points
    pub image: Option<EmbeddedImage>,
}

#[cfg(test)]
impl Paragraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Run {
    pub text: String,
    pub font_size: f32,
    pub font_name: String,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<[u8; 3]>, // None = automatic (black)
}

impl Run {
    pub fn same_style(&self, other: &Run) -> bool {
        (self.font_size - other.font_size).abs() < 0.5
            && self.font_name == other.font_name
            && self.bold == other.bold
            && self.italic == other.italic
            && self.color == other.color
    }
}
