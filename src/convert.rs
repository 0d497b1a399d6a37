use crate::error::ErrorKind;
use crate::Result;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader, RgbImage};
use img_parts::jpeg::Jpeg;
use img_parts::Bytes;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// What was written by [`to_jpeg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegInfo {
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
}

pub fn decode(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let decode_err = |source| ErrorKind::Decode {
        path: path.to_path_buf(),
        source,
    };

    // content sniffing first, extension only when the magic bytes are unknown
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?;
    let img = reader.decode().map_err(decode_err)?;
    debug!(
        "Decoded {} as {:?} ({}x{})",
        path.display(),
        img.color(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Drops alpha and palette data. JPEG has no use for either.
pub fn to_rgb(img: DynamicImage) -> RgbImage {
    match img {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => {
            trace!("Converting {:?} to Rgb8", other.color());
            other.to_rgb8()
        }
    }
}

pub fn encode_jpeg(rgb: &RgbImage, quality: u8) -> Result<Bytes> {
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .encode_image(rgb)
        .map_err(ErrorKind::Encode)?;

    let buffer = Bytes::from(buffer);
    let jpeg = Jpeg::from_bytes(buffer.clone())?;
    trace!("Encoded jpeg has {} segments", jpeg.segments().len());
    Ok(buffer)
}

/// Decodes `src`, forces RGB and writes a JPEG to `dst`.
///
/// The JPEG is built in memory first, so `dst` is left untouched when `src`
/// fails to decode.
pub fn to_jpeg(src: impl AsRef<Path>, dst: impl AsRef<Path>, quality: u8) -> Result<JpegInfo> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    let start_time = Instant::now();

    let rgb = to_rgb(decode(src)?);
    let buffer = encode_jpeg(&rgb, quality)?;
    fs::write(dst, &buffer).map_err(|source| ErrorKind::Write {
        path: dst.to_path_buf(),
        source,
    })?;

    trace!(
        "Converting {} to {} took {:?}",
        src.display(),
        dst.display(),
        Instant::now() - start_time
    );
    Ok(JpegInfo {
        width: rgb.width(),
        height: rgb.height(),
        bytes: buffer.len(),
    })
}
