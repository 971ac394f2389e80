//! Compact share format for puzzles.
//!
//! # Binary layout
//!
//! | byte  | content                       |
//! |-------|-------------------------------|
//! | 0     | width (1-255)                 |
//! | 1     | height (1-255)                |
//! | 2..   | cell bits, 8 per byte         |
//!
//! Bits are packed least-significant bit first. The bit stream visits cells
//! column by column: column 0 row 0, column 0 row 1, ..., column 0 row
//! `height - 1`, column 1 row 0, and so on. Unused bits of the last byte are
//! zero.
//!
//! # Text form
//!
//! The share text is the standard (padded) base64 encoding of the raw bytes.
//!
//! ```
//! use nonopaint_core::{CellGrid, codec};
//!
//! let mut grid = CellGrid::new(3, 2);
//! grid.toggle(0, 0);
//! grid.toggle(1, 0);
//! grid.toggle(1, 1);
//!
//! let bytes = codec::pack(&grid).unwrap();
//! assert_eq!(bytes, [3, 2, 0b0000_1101]);
//! assert_eq!(codec::to_text(&bytes), "AwIN");
//! ```

use base64::{
    Engine as _, alphabet,
    engine::{
        DecodePaddingMode,
        general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD},
    },
};

use crate::CellGrid;

/// Standard alphabet, accepting text with or without `=` padding.
const LENIENT_DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Number of header bytes preceding the cell bits.
pub const HEADER_LEN: usize = 2;

/// Largest width or height the single-byte header can carry.
pub const MAX_DIMENSION: usize = u8::MAX as usize;

/// Errors that can occur when packing a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EncodeError {
    /// Width or height does not fit in the one-byte header.
    #[display("grid size {width}x{height} exceeds the shareable maximum of {MAX_DIMENSION}")]
    DimensionTooLarge {
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
}

/// Errors that can occur when reading share text or packed bytes.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DecodeError {
    /// The text is not valid base64.
    #[display("invalid base64: {_0}")]
    #[from]
    InvalidBase64(base64::DecodeError),
    /// The buffer is too short to contain the width/height header.
    #[display("missing size header ({len} bytes)")]
    MissingHeader {
        /// Buffer length.
        len: usize,
    },
    /// The header declares a zero width or height.
    #[display("invalid grid size {width}x{height}")]
    EmptyDimension {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
    },
    /// The buffer ends before all cell bits were read.
    #[display("truncated cell data: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Required buffer length.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
}

/// Returns the buffer length needed for a `width × height` grid.
#[must_use]
pub const fn packed_len(width: usize, height: usize) -> usize {
    HEADER_LEN + (width * height).div_ceil(8)
}

/// Packs `grid` into the binary share layout.
///
/// # Errors
///
/// Returns [`EncodeError::DimensionTooLarge`] if either dimension exceeds
/// [`MAX_DIMENSION`].
pub fn pack(grid: &CellGrid) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (grid.width(), grid.height());
    let too_large = || EncodeError::DimensionTooLarge { width, height };
    let width_byte = u8::try_from(width).map_err(|_| too_large())?;
    let height_byte = u8::try_from(height).map_err(|_| too_large())?;

    let mut bytes = vec![0; packed_len(width, height)];
    bytes[0] = width_byte;
    bytes[1] = height_byte;
    for (bit_index, _) in grid
        .column_major()
        .iter()
        .enumerate()
        .filter(|&(_, &filled)| filled)
    {
        bytes[HEADER_LEN + bit_index / 8] |= 1 << (bit_index % 8);
    }
    Ok(bytes)
}

/// Unpacks a grid from the binary share layout.
///
/// Bytes past the cell data are ignored.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the header is missing, declares a zero
/// dimension, or the buffer is too short for the declared size.
pub fn unpack(bytes: &[u8]) -> Result<CellGrid, DecodeError> {
    let [width, height, data @ ..] = bytes else {
        return Err(DecodeError::MissingHeader { len: bytes.len() });
    };
    let (width, height) = (usize::from(*width), usize::from(*height));
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyDimension { width, height });
    }
    let expected = packed_len(width, height);
    if bytes.len() < expected {
        return Err(DecodeError::Truncated {
            expected,
            actual: bytes.len(),
        });
    }

    let cells = (0..width * height)
        .map(|bit_index| data[bit_index / 8] & (1 << (bit_index % 8)) != 0)
        .collect();
    Ok(CellGrid::from_column_major(width, height, cells))
}

/// Encodes packed bytes as share text.
#[must_use]
pub fn to_text(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes share text into packed bytes.
///
/// Leading and trailing whitespace is ignored, and the `=` padding may be
/// omitted.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidBase64`] if the text is not valid base64.
pub fn from_text(text: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(LENIENT_DECODER.decode(text.trim())?)
}

/// Packs `grid` and encodes it as share text.
///
/// # Errors
///
/// See [`pack`].
pub fn encode_grid(grid: &CellGrid) -> Result<String, EncodeError> {
    pack(grid).map(|bytes| to_text(&bytes))
}

/// Decodes share text into a new grid.
///
/// # Errors
///
/// See [`from_text`] and [`unpack`].
pub fn decode_grid(text: &str) -> Result<CellGrid, DecodeError> {
    unpack(&from_text(text)?)
}
