//! Read-only 1bpp tile sheets and the built-in digit glyph table.
//!
//! The [`digits`] module holds ten 8x8 numeral glyphs in a single static
//! image. [`sheet::TileSheet`] is a validated view over any image in the same
//! header-plus-frames layout, and [`decode`] turns row bytes into pixels.
//!
//! ```
//! use tile_core::digits;
//!
//! let rows = digits::frame_rows(4).unwrap();
//! assert_eq!(rows.len(), digits::height() as usize);
//! assert!(digits::frame_rows(10).is_err());
//! ```

pub mod decode;
pub mod digits;
pub mod error;
pub mod sheet;

pub use decode::{Mono1BppDecoder, TileDecoder};
pub use error::TileError;
pub use sheet::{TileSheet, TileSheetInfo};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn sheet_is_thread_safe() {
        assert_send_sync::<TileSheet<'static>>();
        assert_send_sync::<TileError>();
    }

    #[test]
    fn digit_sheet_through_reexports() {
        let sheet: TileSheet<'static> = digits::sheet();
        let decoder: Mono1BppDecoder = sheet.decoder();
        assert_eq!(decoder.tile_size(), 8);
    }
}
