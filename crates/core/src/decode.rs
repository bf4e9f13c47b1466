//! 1-bit-per-pixel row-bitmap decoding.
//!
//! Each tile row is a single byte. The most significant bit is the leftmost
//! pixel, so a tile narrower than 8 pixels only uses the high `width` bits of
//! each row and the remaining low bits are ignored.
//!
//! ```text
//! 0x81 = 1000_0001 -> #......#
//! 0x3C = 0011_1100 -> ..####..
//! ```

/// Widest tile a single row byte can hold.
pub const MAX_TILE_WIDTH: u8 = 8;

/// Trait for decoding tile data into pixel indices.
pub trait TileDecoder {
    /// Decode a single pixel from a tile.
    ///
    /// # Arguments
    /// * `tile_data` - The raw rows of one tile
    /// * `x` - X coordinate within the tile
    /// * `y` - Y coordinate within the tile
    ///
    /// # Returns
    /// The palette index for this pixel. Coordinates outside the tile, or
    /// data too short to hold it, decode as 0.
    fn decode_pixel(&self, tile_data: &[u8], x: u8, y: u8) -> u8;

    /// Get the size of a single tile in bytes.
    fn tile_size(&self) -> usize;
}

/// Monochrome decoder: one byte per row, one bit per pixel, MSB first.
///
/// Set bits decode to palette index 1 (foreground), clear bits to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mono1BppDecoder {
    pub width: u8,
    pub height: u8,
}

impl Mono1BppDecoder {
    pub const fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    /// Whether pixel `(x, y)` is lit.
    #[inline]
    pub fn is_set(&self, tile_data: &[u8], x: u8, y: u8) -> bool {
        self.decode_pixel(tile_data, x, y) != 0
    }
}

impl TileDecoder for Mono1BppDecoder {
    fn decode_pixel(&self, tile_data: &[u8], x: u8, y: u8) -> u8 {
        if x >= self.width.min(MAX_TILE_WIDTH) || y >= self.height {
            return 0;
        }

        match tile_data.get(y as usize) {
            Some(row) => (row >> (7 - x)) & 1,
            None => 0,
        }
    }

    fn tile_size(&self) -> usize {
        self.height as usize
    }
}

/// Expand row bytes into rows of pixels, `width` pixels per row.
///
/// `width` is clamped to 8.
pub fn decode_rows(rows: &[u8], width: u8) -> Vec<Vec<bool>> {
    let width = width.min(MAX_TILE_WIDTH);
    rows.iter()
        .map(|&row| (0..width).map(|x| (row >> (7 - x)) & 1 != 0).collect())
        .collect()
}

/// Pack rows of pixels back into row bytes, leftmost pixel in bit 7.
///
/// Pixels past the eighth in a row are dropped. Unused low bits are zero.
pub fn encode_rows(pixels: &[Vec<bool>]) -> Vec<u8> {
    pixels
        .iter()
        .map(|row| {
            row.iter()
                .take(MAX_TILE_WIDTH as usize)
                .enumerate()
                .fold(0u8, |acc, (x, &lit)| if lit { acc | (0x80u8 >> x) } else { acc })
        })
        .collect()
}
