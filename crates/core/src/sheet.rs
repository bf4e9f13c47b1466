//! Borrowed view over a header-plus-frames tile image.
//!
//! Layout:
//!
//! ```text
//! byte[0]                = tile width  (1..=8)
//! byte[1]                = tile height (>= 1)
//! byte[2 + h*k + r]      = row r of frame k
//! ```

use serde::{Deserialize, Serialize};

use crate::decode::{Mono1BppDecoder, MAX_TILE_WIDTH};
use crate::error::TileError;

/// Size of the width/height header.
pub const HEADER_LEN: usize = 2;

/// A validated, read-only tile sheet.
///
/// Every frame has the same dimensions. Frame `k` is the `k`-th run of
/// `height` row bytes after the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSheet<'a> {
    bytes: &'a [u8],
}

impl<'a> TileSheet<'a> {
    /// Wrap a byte image that is known to be well formed.
    ///
    /// Only used for compile-time tables whose layout is checked by tests.
    pub(crate) const fn from_static(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Validate `bytes` as a tile sheet.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, TileError> {
        let len = bytes.len();
        if len < HEADER_LEN {
            return Err(TileError::Truncated { len });
        }

        let (width, height) = (bytes[0], bytes[1]);
        if width == 0 || width > MAX_TILE_WIDTH || height == 0 {
            return Err(TileError::InvalidDimensions { width, height });
        }

        if (len - HEADER_LEN) % height as usize != 0 {
            return Err(TileError::LengthMismatch { len, height });
        }

        let sheet = Self { bytes };
        log::trace!(
            "parsed tile sheet: {}x{}, {} frames",
            width,
            height,
            sheet.frame_count()
        );
        Ok(sheet)
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.bytes[0]
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.bytes[1]
    }

    /// Number of frames after the header.
    #[inline]
    pub fn frame_count(&self) -> usize {
        (self.bytes.len() - HEADER_LEN) / self.height() as usize
    }

    /// The raw image, header included.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Row bytes of frame `index`, top to bottom.
    pub fn frame_rows(&self, index: usize) -> Result<&'a [u8], TileError> {
        let count = self.frame_count();
        if index >= count {
            log::debug!("rejected frame lookup {} (count {})", index, count);
            return Err(TileError::OutOfRange {
                index: index as i64,
                count,
            });
        }

        let bytes = self.bytes;
        let h = self.height() as usize;
        let start = HEADER_LEN + index * h;
        Ok(&bytes[start..start + h])
    }

    /// Same as [`frame_rows`](Self::frame_rows) for callers holding a signed index.
    pub fn frame_rows_signed(&self, index: i64) -> Result<&'a [u8], TileError> {
        match usize::try_from(index) {
            Ok(i) => self.frame_rows(i),
            Err(_) => {
                log::debug!("rejected negative frame lookup {}", index);
                Err(TileError::OutOfRange {
                    index,
                    count: self.frame_count(),
                })
            }
        }
    }

    /// Iterate over every frame's rows in index order.
    pub fn frames(&self) -> impl ExactSizeIterator<Item = &'a [u8]> + 'a {
        let bytes = self.bytes;
        let h = self.height() as usize;
        bytes[HEADER_LEN..].chunks_exact(h)
    }

    /// Decoder matching this sheet's dimensions.
    pub fn decoder(&self) -> Mono1BppDecoder {
        Mono1BppDecoder::new(self.width(), self.height())
    }

    /// Whether pixel `(x, y)` of frame `index` is lit.
    pub fn pixel(&self, index: usize, x: u8, y: u8) -> Result<bool, TileError> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(TileError::PixelOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }

        let rows = self.frame_rows(index)?;
        Ok(self.decoder().is_set(rows, x, y))
    }

    /// Owned snapshot of the sheet.
    pub fn to_info(&self) -> TileSheetInfo {
        TileSheetInfo {
            width: self.width(),
            height: self.height(),
            frames: self.frames().map(<[u8]>::to_vec).collect(),
        }
    }
}

/// Serializable copy of a tile sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSheetInfo {
    pub width: u8,
    pub height: u8,
    pub frames: Vec<Vec<u8>>,
}

impl TileSheetInfo {
    /// Encode back into the header-plus-frames image.
    ///
    /// Fails if any frame does not hold exactly `height` rows, or if the
    /// dimensions could not be parsed back.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TileError> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.frames.len() * self.height as usize);
        out.push(self.width);
        out.push(self.height);
        for frame in &self.frames {
            if frame.len() != self.height as usize {
                return Err(TileError::LengthMismatch {
                    len: HEADER_LEN + frame.len(),
                    height: self.height,
                });
            }
            out.extend_from_slice(frame);
        }

        TileSheet::parse(&out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_frame_sheet() -> Vec<u8> {
        vec![4, 2, 0xF0, 0x90, 0x60, 0x60]
    }

    #[test]
    fn test_parse_valid_sheet() {
        let bytes = two_frame_sheet();
        let sheet = TileSheet::parse(&bytes).unwrap();

        assert_eq!(sheet.width(), 4);
        assert_eq!(sheet.height(), 2);
        assert_eq!(sheet.frame_count(), 2);
        assert_eq!(sheet.frame_rows(1).unwrap(), &[0x60, 0x60]);
        assert_eq!(sheet.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn test_parse_header_only_is_empty_sheet() {
        let sheet = TileSheet::parse(&[8, 8]).unwrap();
        assert_eq!(sheet.frame_count(), 0);
        assert_eq!(sheet.frames().count(), 0);
        assert_eq!(
            sheet.frame_rows(0),
            Err(TileError::OutOfRange { index: 0, count: 0 })
        );
    }

    #[test]
    fn test_parse_rejects_bad_images() {
        assert_eq!(
            TileSheet::parse(&[8]),
            Err(TileError::Truncated { len: 1 })
        );
        assert_eq!(
            TileSheet::parse(&[0, 8]),
            Err(TileError::InvalidDimensions { width: 0, height: 8 })
        );
        assert_eq!(
            TileSheet::parse(&[9, 8]),
            Err(TileError::InvalidDimensions { width: 9, height: 8 })
        );
        assert_eq!(
            TileSheet::parse(&[8, 0]),
            Err(TileError::InvalidDimensions { width: 8, height: 0 })
        );
        assert_eq!(
            TileSheet::parse(&[8, 3, 1, 2, 3, 4]),
            Err(TileError::LengthMismatch { len: 6, height: 3 })
        );
    }

    #[test]
    fn test_signed_lookup() {
        let bytes = two_frame_sheet();
        let sheet = TileSheet::parse(&bytes).unwrap();

        assert_eq!(sheet.frame_rows_signed(0).unwrap(), &[0xF0, 0x90]);
        assert_eq!(
            sheet.frame_rows_signed(-1),
            Err(TileError::OutOfRange { index: -1, count: 2 })
        );
        assert_eq!(
            sheet.frame_rows_signed(2),
            Err(TileError::OutOfRange { index: 2, count: 2 })
        );
    }

    #[test]
    fn test_pixel_lookup() {
        let bytes = two_frame_sheet();
        let sheet = TileSheet::parse(&bytes).unwrap();

        // Frame 0 row 1 = 1001
        assert!(sheet.pixel(0, 0, 1).unwrap());
        assert!(!sheet.pixel(0, 1, 1).unwrap());
        assert!(sheet.pixel(0, 3, 1).unwrap());

        assert_eq!(
            sheet.pixel(0, 4, 0),
            Err(TileError::PixelOutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 2
            })
        );
        assert!(matches!(
            sheet.pixel(5, 0, 0),
            Err(TileError::OutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn test_info_reencodes_to_same_bytes() {
        let bytes = two_frame_sheet();
        let info = TileSheet::parse(&bytes).unwrap().to_info();

        assert_eq!(info.frames, vec![vec![0xF0, 0x90], vec![0x60, 0x60]]);
        assert_eq!(info.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_info_rejects_ragged_frames() {
        let info = TileSheetInfo {
            width: 8,
            height: 2,
            frames: vec![vec![1, 2], vec![3]],
        };
        assert!(matches!(
            info.to_bytes(),
            Err(TileError::LengthMismatch { height: 2, .. })
        ));
    }

    #[test]
    fn test_info_json_roundtrip() {
        let bytes = two_frame_sheet();
        let info = TileSheet::parse(&bytes).unwrap().to_info();

        let json = serde_json::to_string(&info).expect("serialize");
        let back: TileSheetInfo = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, info);
    }
}
