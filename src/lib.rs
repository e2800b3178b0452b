//! # rawpng
//!
//! *Get your naked pixels into a proper container.*
//!
//! Converts headerless RGBA pixel dumps into lossless PNG images. A dump
//! is nothing but the bytes of a row-major 8-bit R,G,B,A raster; this
//! crate reinterprets those bytes as a typed pixel grid and re-encodes
//! the grid, bit for bit, into the PNG container format.
//!
//! ## Layers
//!
//! - [`raster`] — zero-copy reinterpretation of byte buffers as
//!   [`imgref`] image views over [`rgb`] pixel types.
//! - [`encode`] — lossless PNG serialization of RGBA views.
//! - [`convert`] — the file-to-file pipeline used by the `rawpng` binary.

#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt::{self, Display};

pub mod convert;
pub mod encode;
pub mod raster;

pub use convert::{ConvertError, DUMP_HEIGHT, DUMP_STEMS, DUMP_WIDTH, convert_dump};
pub use encode::{EncodeError, encode_png, write_png};
pub use raster::{rgba_from_bytes, rgba_from_slice, rgba_to_bytes};

/// A byte buffer whose length does not match the requested grid shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeError {
    /// Requested grid width in pixels.
    pub width: usize,
    /// Requested grid height in pixels.
    pub height: usize,
    /// Actual length of the buffer in bytes.
    pub actual: usize,
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a buffer of {} bytes cannot be shaped into a {}x{} RGBA grid",
            self.actual, self.width, self.height
        )
    }
}

impl Error for ShapeError {}
