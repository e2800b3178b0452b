//! File-to-file conversion of raw RGBA dumps.
//!
//! One dump in, one PNG out: the whole file is read into memory,
//! reinterpreted as an RGBA grid, and re-encoded losslessly next to the
//! input under the same base name with a `.png` extension.

use std::error::Error;
use std::fmt::{self, Display};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::ShapeError;
use crate::encode::{self, EncodeError};
use crate::raster;

/// Width in pixels of the fixed-size dumps the binary consumes.
pub const DUMP_WIDTH: usize = 512;
/// Height in pixels of the fixed-size dumps the binary consumes.
pub const DUMP_HEIGHT: usize = 128;
/// Base names of the two dumps, in processing order.
pub const DUMP_STEMS: [&str; 2] = ["mine", "theirs"];

/// Errors that may occur while converting a dump file.
#[derive(Debug)]
pub enum ConvertError {
    /// The input file could not be read.
    Read(io::Error),
    /// The input bytes do not form a grid of the requested dimensions.
    Shape(ShapeError),
    /// The PNG could not be produced.
    Encode(EncodeError),
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Read(_) => f.write_str("could not read the dump"),
            ConvertError::Shape(_) => f.write_str("the dump does not match the expected shape"),
            ConvertError::Encode(_) => f.write_str("the png could not be produced"),
        }
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConvertError::Read(err) => Some(err),
            ConvertError::Shape(err) => Some(err),
            ConvertError::Encode(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConvertError {
    fn from(err: io::Error) -> Self {
        ConvertError::Read(err)
    }
}

impl From<ShapeError> for ConvertError {
    fn from(err: ShapeError) -> Self {
        ConvertError::Shape(err)
    }
}

impl From<EncodeError> for ConvertError {
    fn from(err: EncodeError) -> Self {
        ConvertError::Encode(err)
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Convert one raw `width`×`height` RGBA dump into a PNG written next to
/// it.
///
/// Returns the path of the written image. On failure nothing is written.
pub fn convert_dump(input: &Path, width: usize, height: usize) -> Result<PathBuf, ConvertError> {
    let bytes = fs::read(input)?;
    let img = raster::rgba_from_bytes(bytes, width, height)?;

    let output = input.with_extension("png");
    encode::write_png(&output, img.as_ref())?;
    info!("wrote {}x{} png to {}", width, height, output.display());

    Ok(output)
}
