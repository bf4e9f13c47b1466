//! Error type shared by the tile table and sheet parsing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    /// Frame index outside `[0, count)`.
    #[error("frame index {index} out of range (frame count {count})")]
    OutOfRange { index: i64, count: usize },

    #[error("'{0}' is not a decimal digit")]
    NotADigit(char),

    /// Fewer bytes than the 2-byte header.
    #[error("tile sheet truncated: {len} bytes")]
    Truncated { len: usize },

    #[error("invalid tile dimensions {width}x{height}")]
    InvalidDimensions { width: u8, height: u8 },

    /// Frame data does not divide evenly into rows of `height` bytes.
    #[error("tile sheet of {len} bytes does not hold whole frames of height {height}")]
    LengthMismatch { len: usize, height: u8 },

    #[error("pixel ({x}, {y}) outside {width}x{height} tile")]
    PixelOutOfBounds { x: u8, y: u8, width: u8, height: u8 },
}
