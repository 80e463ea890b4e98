mod docx;
mod error;
mod fonts;
mod glyph_list;
mod images;
mod layout;
mod model;
mod pdf;

pub use error::Error;
pub use layout::LayoutSettings;

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::model::Document;
use crate::pdf::{FontCache, PdfDocument};

/// Output path for `input`: the last extension replaced by `.docx` (or appended if there is none).
pub fn docx_output_path(input: &Path) -> PathBuf {
    input.with_extension("docx")
}

/// An opened PDF, ready to be converted page range by page range.
pub struct Converter {
    path: PathBuf,
    pdf: PdfDocument,
    settings: LayoutSettings,
}

impl Converter {
    pub fn open(path: &Path) -> Result<Self, Error> {
        log::info!("Opening document {}", path.display());
        let pdf = PdfDocument::load(path)?;
        log::debug!("{} has {} pages", path.display(), pdf.page_count());
        Ok(Converter {
            path: path.to_path_buf(),
            pdf,
            settings: LayoutSettings::default(),
        })
    }

    pub fn with_settings(mut self, settings: LayoutSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn page_count(&self) -> usize {
        self.pdf.page_count()
    }

    /// Convert pages `start..end` (0-based, end exclusive; `None` = to the last page).
    pub fn convert(&self, output: &Path, start: usize, end: Option<usize>) -> Result<(), Error> {
        let count = self.page_count();
        let end = end.unwrap_or(count).min(count);
        if start >= end {
            return Err(Error::PageRange(format!(
                "no pages to convert in {start}..{end} ({count} pages in document)"
            )));
        }
        let pages: Vec<usize> = (start..end).collect();
        self.convert_indexes(output, &pages)
    }

    /// Convert an explicit list of 0-based page indexes, in the order given.
    pub fn convert_pages(&self, output: &Path, pages: &[usize]) -> Result<(), Error> {
        let count = self.page_count();
        if pages.is_empty() {
            return Err(Error::PageRange("no pages to convert".into()));
        }
        if let Some(bad) = pages.iter().find(|p| **p >= count) {
            return Err(Error::PageRange(format!(
                "page index {bad} out of range ({count} pages in document)"
            )));
        }
        self.convert_indexes(output, pages)
    }

    fn convert_indexes(&self, output: &Path, pages: &[usize]) -> Result<(), Error> {
        let started = Instant::now();
        log::info!("Start to convert {}", self.path.display());

        log::info!("[1/2] Parsing pages...");
        let mut fonts = FontCache::default();
        let mut doc = Document {
            metadata: self.pdf.metadata(),
            pages: Vec::with_capacity(pages.len()),
        };
        for (n, &index) in pages.iter().enumerate() {
            log::debug!("({}/{}) page {}", n + 1, pages.len(), index + 1);
            let content = self.pdf.page(index, &mut fonts)?;
            doc.pages.push(layout::layout_page(content, &self.settings));
        }

        log::info!("[2/2] Creating pages...");
        let bytes = docx::render(&doc)?;
        std::fs::write(output, bytes)?;

        log::info!(
            "Terminated in {:.2}s, wrote {}",
            started.elapsed().as_secs_f32(),
            output.display()
        );
        Ok(())
    }

    /// Release the loaded document.
    pub fn close(self) {
        log::debug!("closing {}", self.path.display());
    }
}

/// Convert every page of `input` into a DOCX file at `output`.
pub fn convert_pdf_to_docx(input: &Path, output: &Path) -> Result<(), Error> {
    let converter = Converter::open(input)?;
    let result = converter.convert(output, 0, None);
    converter.close();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_replaces_extension() {
        assert_eq!(docx_output_path(Path::new("report.pdf")), PathBuf::from("report.docx"));
        assert_eq!(
            docx_output_path(Path::new("dir/scan.v2.pdf")),
            PathBuf::from("dir/scan.v2.docx")
        );
        assert_eq!(docx_output_path(Path::new("UPPER.PDF")), PathBuf::from("UPPER.docx"));
    }

    #[test]
    fn output_path_without_extension_appends() {
        assert_eq!(docx_output_path(Path::new("notes")), PathBuf::from("notes.docx"));
        assert_eq!(docx_output_path(Path::new(".hidden")), PathBuf::from(".hidden.docx"));
    }
}
