//! Numeral glyph tiles
//!
//! Ten 8x8 monochrome tiles for the digits 0-9, stored as one read-only
//! image: a width/height header followed by eight row bytes per frame.
//! Frame `k` is the glyph for digit `k`.
//!
//! Every glyph is drawn inside a boxed cell: the first and last rows are
//! `0x81`, which lights only the two outermost pixels and marks the corners
//! of the tile.
//!
//! ```text
//! frame 0         frame 1
//! #......#        #......#
//! ........        ........
//! ..####..        ........
//! .#....#.        .#...#..
//! .#....#.        .######.
//! ..####..        .#......
//! ........        ........
//! #......#        #......#
//! ```
//!
//! The glyphs read upright when each byte is drawn as a screen column with
//! the LSB at the top. Decoded as rows, the way this crate does, a digit
//! appears turned a quarter turn. The bytes are kept exactly as authored.

use crate::error::TileError;
use crate::sheet::{TileSheet, HEADER_LEN};

/// Width of every digit tile in pixels.
pub const TILE_WIDTH: u8 = 8;

/// Height of every digit tile in pixels.
pub const TILE_HEIGHT: u8 = 8;

/// Number of glyph frames (digits 0-9).
pub const FRAME_COUNT: usize = 10;

/// Total size of the encoded image.
pub const TILES_LEN: usize = HEADER_LEN + FRAME_COUNT * TILE_HEIGHT as usize;

/// The digit tile image, header first.
#[rustfmt::skip]
pub static DIGIT_TILES: [u8; TILES_LEN] = [
    // Dimensions
    TILE_WIDTH, TILE_HEIGHT,

    // 0
    0x81, 0x00, 0x3C, 0x42, 0x42, 0x3C, 0x00, 0x81,
    // 1
    0x81, 0x00, 0x00, 0x44, 0x7E, 0x40, 0x00, 0x81,
    // 2
    0x81, 0x00, 0x44, 0x62, 0x52, 0x4C, 0x00, 0x81,
    // 3
    0x81, 0x00, 0x24, 0x42, 0x4A, 0x4A, 0x34, 0x81,
    // 4
    0x81, 0x00, 0x30, 0x28, 0x24, 0x7C, 0x20, 0x81,
    // 5
    0x81, 0x00, 0x4E, 0x4A, 0x4A, 0x32, 0x00, 0x81,
    // 6
    0x81, 0x00, 0x3C, 0x52, 0x52, 0x24, 0x00, 0x81,
    // 7
    0x81, 0x00, 0x02, 0x62, 0x1A, 0x06, 0x00, 0x81,
    // 8
    0x81, 0x00, 0x34, 0x4A, 0x4A, 0x34, 0x00, 0x81,
    // 9
    0x81, 0x00, 0x0C, 0x52, 0x52, 0x3C, 0x00, 0x81,
];

/// The digit tiles as a [`TileSheet`].
pub static DIGITS: TileSheet<'static> = TileSheet::from_static(&DIGIT_TILES);

/// Tile width; always 8.
#[inline]
pub fn width() -> u8 {
    TILE_WIDTH
}

/// Tile height; always 8.
#[inline]
pub fn height() -> u8 {
    TILE_HEIGHT
}

/// Number of glyph frames; always 10.
#[inline]
pub fn frame_count() -> usize {
    FRAME_COUNT
}

/// Get the eight row bytes of the glyph for digit `index`.
///
/// Rows are returned top to bottom, MSB = leftmost pixel.
///
/// # Errors
///
/// [`TileError::OutOfRange`] when `index >= 10`.
pub fn frame_rows(index: usize) -> Result<&'static [u8], TileError> {
    DIGITS.frame_rows(index)
}

/// Signed variant of [`frame_rows`]; negative indices are out of range.
pub fn frame_rows_signed(index: i64) -> Result<&'static [u8], TileError> {
    DIGITS.frame_rows_signed(index)
}

/// The raw 82-byte image.
pub fn as_bytes() -> &'static [u8; TILES_LEN] {
    &DIGIT_TILES
}

/// The digit tiles as a generic sheet.
pub fn sheet() -> TileSheet<'static> {
    DIGITS
}

/// Frame index of the glyph for an ASCII digit character.
pub fn frame_for_char(c: char) -> Result<usize, TileError> {
    c.to_digit(10)
        .map(|d| d as usize)
        .ok_or(TileError::NotADigit(c))
}
