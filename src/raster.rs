//! Reinterpretation of raw byte buffers as typed RGBA grids.
//!
//! A dump stores one unsigned byte per channel, R,G,B,A, pixels
//! left-to-right within a row, rows top-to-bottom, no padding and no
//! header. Element (r, c, ch) of the grid therefore lives at byte offset
//! `r * width * 4 + c * 4 + ch`.
//!
//! ```rust
//! use rawpng::raster;
//! use rgb::Rgba;
//!
//! let dump = vec![255u8, 0, 0, 255, 0, 255, 0, 255];
//! let img = raster::rgba_from_bytes(dump, 2, 1).unwrap();
//! assert_eq!(img.buf()[0], Rgba::new(255, 0, 0, 255));
//! ```

use imgref::{ImgRef, ImgVec};
use rgb::Rgba;

use crate::ShapeError;

const RGBA_BPP: usize = 4;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[inline]
fn check_len(len: usize, width: usize, height: usize) -> Result<(), ShapeError> {
    let err = ShapeError {
        width,
        height,
        actual: len,
    };

    if width == 0 || height == 0 {
        return Err(err);
    }
    let expected = width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(RGBA_BPP))
        .ok_or(err)?;
    if len != expected {
        return Err(err);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Bytes → grid
// ---------------------------------------------------------------------------

/// Reinterpret an owned byte buffer as a `width`×`height` RGBA image.
///
/// The length must be exactly `width * height * 4`; all byte values are
/// legal channel values. The allocation is reused without touching the
/// pixels whenever its capacity permits, otherwise the bytes are copied
/// once.
pub fn rgba_from_bytes(
    bytes: Vec<u8>,
    width: usize,
    height: usize,
) -> Result<ImgVec<Rgba<u8>>, ShapeError> {
    check_len(bytes.len(), width, height)?;
    let buf: Vec<Rgba<u8>> = match bytemuck::allocation::try_cast_vec(bytes) {
        Ok(buf) => buf,
        // capacity is not a multiple of the pixel size
        Err((_, bytes)) => bytemuck::cast_slice(&bytes).to_vec(),
    };
    Ok(ImgVec::new(buf, width, height))
}

/// Borrowing variant of [`rgba_from_bytes`]. Always zero-copy.
pub fn rgba_from_slice(
    bytes: &[u8],
    width: usize,
    height: usize,
) -> Result<ImgRef<'_, Rgba<u8>>, ShapeError> {
    check_len(bytes.len(), width, height)?;
    Ok(ImgRef::new(bytemuck::cast_slice(bytes), width, height))
}

// ---------------------------------------------------------------------------
// Grid → bytes
// ---------------------------------------------------------------------------

/// Flatten an RGBA image back into row-major R,G,B,A bytes.
///
/// Strided views are handled; the result is always contiguous.
pub fn rgba_to_bytes(img: ImgRef<'_, Rgba<u8>>) -> Vec<u8> {
    let mut out = Vec::with_capacity(img.width() * img.height() * RGBA_BPP);
    for row in img.rows() {
        out.extend_from_slice(bytemuck::cast_slice(row));
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_dump(width: usize, height: usize) -> Vec<u8> {
        (0..width * height * RGBA_BPP).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn test_offset_formula() {
        let img = rgba_from_bytes(make_dump(4, 3), 4, 3).unwrap();
        // pixel (r, c) = (2, 1) starts at byte 2 * 4 * 4 + 1 * 4 = 36
        assert_eq!(img.buf()[2 * 4 + 1], Rgba::new(36, 37, 38, 39));
    }

    #[test]
    fn test_shape_mismatch() {
        let err = rgba_from_bytes(vec![0u8; 100], 512, 128).unwrap_err();
        assert_eq!(
            err,
            ShapeError {
                width: 512,
                height: 128,
                actual: 100
            }
        );
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(rgba_from_slice(&[], 0, 128).is_err());
        assert!(rgba_from_slice(&[], 512, 0).is_err());
    }

    #[test]
    fn test_borrowed_grid_matches_owned() {
        let dump = make_dump(8, 2);
        let borrowed = rgba_from_slice(&dump, 8, 2).unwrap();
        let owned = rgba_from_bytes(dump.clone(), 8, 2).unwrap();
        assert_eq!(borrowed.buf(), owned.buf());
    }

    #[test]
    fn test_bytes_round_trip() {
        let dump = make_dump(8, 2);
        let img = rgba_from_bytes(dump.clone(), 8, 2).unwrap();
        assert_eq!(rgba_to_bytes(img.as_ref()), dump);
    }

    #[test]
    fn test_strided_view_flattens_contiguous() {
        // 2 pixels wide with stride 3; the padding pixel must not leak
        let buf = vec![
            Rgba::new(1u8, 2, 3, 4),
            Rgba::new(5, 6, 7, 8),
            Rgba::default(),
            Rgba::new(9, 10, 11, 12),
            Rgba::new(13, 14, 15, 16),
            Rgba::default(),
        ];
        let img = ImgVec::new_stride(buf, 2, 2, 3);
        assert_eq!(rgba_to_bytes(img.as_ref()), (1..=16).collect::<Vec<u8>>());
    }
}
