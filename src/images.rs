use std::io::Cursor;

use image::{DynamicImage, GrayImage, RgbImage};
use lopdf::{Document, Object, Stream};

use crate::error::Error;
use crate::model::ImageFormat;
use crate::pdf::{dict_get, name, number, resolve, stream_bytes};

pub(crate) struct DecodedImage {
    pub(crate) data: Vec<u8>,
    pub(crate) format: ImageFormat,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ColorSpace {
    Gray,
    Rgb,
    Cmyk,
}

impl ColorSpace {
    fn components(self) -> usize {
        match self {
            ColorSpace::Gray => 1,
            ColorSpace::Rgb => 3,
            ColorSpace::Cmyk => 4,
        }
    }
}

fn filters(stream: &Stream) -> Vec<Vec<u8>> {
    match stream.dict.get(b"Filter") {
        Ok(Object::Name(n)) => vec![n.clone()],
        Ok(Object::Array(items)) => items.iter().filter_map(name).map(<[u8]>::to_vec).collect(),
        _ => Vec::new(),
    }
}

fn color_space(doc: &Document, obj: &Object) -> Option<ColorSpace> {
    match resolve(doc, obj) {
        Object::Name(n) => match n.as_slice() {
            b"DeviceGray" | b"CalGray" | b"G" => Some(ColorSpace::Gray),
            b"DeviceRGB" | b"CalRGB" | b"RGB" => Some(ColorSpace::Rgb),
            b"DeviceCMYK" | b"CMYK" => Some(ColorSpace::Cmyk),
            _ => None,
        },
        Object::Array(items) => {
            let family = items.first().and_then(name)?;
            match family {
                b"ICCBased" => {
                    let Object::Stream(profile) = resolve(doc, items.get(1)?) else {
                        return None;
                    };
                    match dict_get(doc, &profile.dict, b"N").and_then(number)? as usize {
                        1 => Some(ColorSpace::Gray),
                        3 => Some(ColorSpace::Rgb),
                        4 => Some(ColorSpace::Cmyk),
                        _ => None,
                    }
                }
                b"CalRGB" => Some(ColorSpace::Rgb),
                b"CalGray" => Some(ColorSpace::Gray),
                _ => None,
            }
        }
        _ => None,
    }
}

fn cmyk_to_rgb(samples: &[u8]) -> Vec<u8> {
    samples
        .chunks_exact(4)
        .flat_map(|px| {
            let k = 255 - px[3] as u16;
            [
                ((255 - px[0] as u16) * k / 255) as u8,
                ((255 - px[1] as u16) * k / 255) as u8,
                ((255 - px[2] as u16) * k / 255) as u8,
            ]
        })
        .collect()
}

/// Extract an image XObject as PNG or JPEG bytes. `Ok(None)` means the image kind is unsupported.
pub(crate) fn decode(doc: &Document, stream: &Stream) -> Result<Option<DecodedImage>, Error> {
    let dict = &stream.dict;
    let width = dict_get(doc, dict, b"Width").and_then(number).unwrap_or(0.0) as u32;
    let height = dict_get(doc, dict, b"Height").and_then(number).unwrap_or(0.0) as u32;
    if width == 0 || height == 0 {
        return Err(Error::InvalidPdf("image without dimensions".into()));
    }

    if matches!(dict_get(doc, dict, b"ImageMask"), Some(Object::Boolean(true))) {
        log::debug!("skipping stencil mask image");
        return Ok(None);
    }

    let filters = filters(stream);
    match filters.last().map(Vec::as_slice) {
        Some(b"DCTDecode") if filters.len() == 1 => {
            return Ok(Some(DecodedImage {
                data: stream.content.clone(),
                format: ImageFormat::Jpeg,
                width,
                height,
            }));
        }
        Some(b"DCTDecode" | b"JPXDecode" | b"CCITTFaxDecode" | b"JBIG2Decode") => {
            log::debug!(
                "skipping image with unsupported filter chain {:?}",
                filters.iter().map(|f| String::from_utf8_lossy(f)).collect::<Vec<_>>()
            );
            return Ok(None);
        }
        _ => {}
    }

    let bits = dict_get(doc, dict, b"BitsPerComponent").and_then(number).unwrap_or(8.0) as u32;
    let Some(space) = dict.get(b"ColorSpace").ok().and_then(|cs| color_space(doc, cs)) else {
        log::debug!("skipping image with unsupported colour space");
        return Ok(None);
    };
    if bits != 8 {
        log::debug!("skipping {bits}-bit image");
        return Ok(None);
    }

    let samples = stream_bytes(stream)?;
    let expected = width as usize * height as usize * space.components();
    if samples.len() < expected {
        return Err(Error::InvalidPdf(format!(
            "image data too short: {} bytes, expected {expected}",
            samples.len()
        )));
    }
    let samples = &samples[..expected];

    let pixels = match space {
        ColorSpace::Gray => {
            GrayImage::from_raw(width, height, samples.to_vec()).map(DynamicImage::ImageLuma8)
        }
        ColorSpace::Rgb => {
            RgbImage::from_raw(width, height, samples.to_vec()).map(DynamicImage::ImageRgb8)
        }
        ColorSpace::Cmyk => {
            RgbImage::from_raw(width, height, cmyk_to_rgb(samples)).map(DynamicImage::ImageRgb8)
        }
    };
    let Some(pixels) = pixels else {
        return Err(Error::InvalidPdf("image buffer does not match its dimensions".into()));
    };

    let mut png = Cursor::new(Vec::new());
    pixels.write_to(&mut png, image::ImageFormat::Png)?;

    Ok(Some(DecodedImage {
        data: png.into_inner(),
        format: ImageFormat::Png,
        width,
        height,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Dictionary, Stream};

    fn image_stream(entries: Vec<(&str, Object)>, content: Vec<u8>) -> Stream {
        let mut dict = Dictionary::new();
        for (key, value) in entries {
            dict.set(key, value);
        }
        Stream::new(dict, content)
    }

    #[test]
    fn rgb_samples_become_png() {
        let doc = Document::new();
        let stream = image_stream(
            vec![
                ("Width", Object::Integer(2)),
                ("Height", Object::Integer(1)),
                ("BitsPerComponent", Object::Integer(8)),
                ("ColorSpace", Object::Name(b"DeviceRGB".to_vec())),
            ],
            vec![255, 0, 0, 0, 0, 255],
        );
        let decoded = decode(&doc, &stream).unwrap().unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
        assert_eq!((decoded.width, decoded.height), (2, 1));
        assert!(decoded.data.starts_with(b"\x89PNG"));
    }

    #[test]
    fn jpeg_passes_through() {
        let doc = Document::new();
        let stream = image_stream(
            vec![
                ("Width", Object::Integer(4)),
                ("Height", Object::Integer(4)),
                ("Filter", Object::Name(b"DCTDecode".to_vec())),
            ],
            vec![0xFF, 0xD8, 0xFF, 0xD9],
        );
        let decoded = decode(&doc, &stream).unwrap().unwrap();
        assert_eq!(decoded.format, ImageFormat::Jpeg);
        assert_eq!(decoded.data, vec![0xFF, 0xD8, 0xFF, 0xD9]);
    }

    #[test]
    fn indexed_images_are_skipped() {
        let doc = Document::new();
        let stream = image_stream(
            vec![
                ("Width", Object::Integer(1)),
                ("Height", Object::Integer(1)),
                ("BitsPerComponent", Object::Integer(8)),
                (
                    "ColorSpace",
                    Object::Array(vec![Object::Name(b"Indexed".to_vec())]),
                ),
            ],
            vec![0],
        );
        assert!(decode(&doc, &stream).unwrap().is_none());
    }

    #[test]
    fn cmyk_converts_to_rgb() {
        assert_eq!(cmyk_to_rgb(&[0, 0, 0, 255]), vec![0, 0, 0]);
        assert_eq!(cmyk_to_rgb(&[0, 255, 255, 0]), vec![255, 0, 0]);
    }
}
