use std::fmt;

#[derive(Debug)]
pub enum Error {
    InvalidPdf(String),
    Pdf(lopdf::Error),
    Zip(zip::result::ZipError),
    Image(image::ImageError),
    PageRange(String),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPdf(reason) => write!(f, "not a valid PDF file: {reason}"),
            Error::Pdf(e) => write!(f, "PDF error: {e}"),
            Error::Zip(e) => write!(f, "ZIP error: {e}"),
            Error::Image(e) => write!(f, "image error: {e}"),
            Error::PageRange(reason) => write!(f, "invalid page range: {reason}"),
            Error::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<lopdf::Error> for Error {
    fn from(e: lopdf::Error) -> Self {
        Error::Pdf(e)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        Error::Zip(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
