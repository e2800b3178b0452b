//! Lossless PNG serialization of RGBA image views.
//!
//! The image is encoded fully in memory and only then written out, so a
//! failed conversion never leaves a truncated file behind.

use std::error::Error;
use std::fmt::{self, Display};
use std::fs;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use imgref::ImgRef;
use rgb::Rgba;

use crate::raster;

/// Errors that may occur while producing a PNG.
#[derive(Debug)]
pub enum EncodeError {
    /// The image dimensions do not fit the PNG header's 32-bit fields.
    TooLarge { width: usize, height: usize },
    /// The PNG serializer rejected the image.
    Png(image::ImageError),
    /// The encoded image could not be written out.
    Io(std::io::Error),
}

impl Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::TooLarge { width, height } => {
                write!(f, "{width}x{height} exceeds the PNG dimension range")
            }
            EncodeError::Png(_) => f.write_str("png serialization failed"),
            EncodeError::Io(_) => f.write_str("could not write the encoded image"),
        }
    }
}

impl Error for EncodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EncodeError::TooLarge { .. } => None,
            EncodeError::Png(err) => Some(err),
            EncodeError::Io(err) => Some(err),
        }
    }
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Serialize `img` into an in-memory PNG, channel order R,G,B,A, bit
/// depth 8.
pub fn encode_png(img: ImgRef<'_, Rgba<u8>>) -> Result<Vec<u8>, EncodeError> {
    if img.width() > u32::MAX as usize || img.height() > u32::MAX as usize {
        return Err(EncodeError::TooLarge {
            width: img.width(),
            height: img.height(),
        });
    }

    let pixels = raster::rgba_to_bytes(img);
    let mut encoded = Vec::new();
    PngEncoder::new(&mut encoded)
        .write_image(
            &pixels,
            img.width() as u32,
            img.height() as u32,
            ExtendedColorType::Rgba8,
        )
        .map_err(EncodeError::Png)?;
    Ok(encoded)
}

/// Encode `img` and write the finished PNG to `path`, creating or
/// overwriting the file.
pub fn write_png<P: AsRef<Path>>(path: P, img: ImgRef<'_, Rgba<u8>>) -> Result<(), EncodeError> {
    let encoded = encode_png(img)?;
    fs::write(path, encoded).map_err(EncodeError::Io)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use imgref::ImgVec;

    #[test]
    fn test_png_signature() {
        let img = ImgVec::new(vec![Rgba::new(1u8, 2, 3, 4); 4], 2, 2);
        let encoded = encode_png(img.as_ref()).unwrap();
        assert_eq!(&encoded[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_encode_round_trip() {
        let img = ImgVec::new(vec![Rgba::new(255u8, 0, 128, 200); 6], 3, 2);
        let encoded = encode_png(img.as_ref()).unwrap();

        let decoded = image::load_from_memory(&encoded).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.into_raw(), raster::rgba_to_bytes(img.as_ref()));
    }
}
