//! Apple IIGS Super Hi-Res (SHR) screen image parser.
//!
//! An uncompressed SHR screen (ProDOS type $C1/$0000, usually `*.SHR` or
//! `*.PIC`) is a straight dump of the IIGS video bank from $2000 to $9FFF:
//!
//! | Offset | Length | Content                                          |
//! |--------|--------|--------------------------------------------------|
//! | 0      | 32,000 | bitmap, 200 rows x 160 bytes, two pixels a byte  |
//! | 32,000 | 256    | scanline control bytes (SCBs), first 200 used    |
//! | 32,256 | 512    | 16 palettes x 16 colours x little-endian `u16`   |
//!
//! This crate only slices the file into those three regions. Turning them
//! into colours is the job of the video crate.

mod bitmap;
mod error;
mod palette;
mod scb;

pub use bitmap::BitmapRegion;
pub use error::FormatError;
pub use palette::PaletteBank;
pub use scb::{ScanlineControl, ScanlineControlTable};

/// Visible pixels per scanline in 320 mode.
pub const WIDTH: usize = 320;
/// Scanlines per screen.
pub const HEIGHT: usize = 200;
/// Bitmap bytes per scanline (two 4-bit pixels per byte).
pub const BYTES_PER_ROW: usize = WIDTH / 2;

pub const BITMAP_SIZE: usize = BYTES_PER_ROW * HEIGHT;
pub const SCB_OFFSET: usize = BITMAP_SIZE;
pub const SCB_TABLE_SIZE: usize = 256;
pub const PALETTE_OFFSET: usize = SCB_OFFSET + SCB_TABLE_SIZE;

pub const PALETTE_COUNT: usize = 16;
pub const COLORS_PER_PALETTE: usize = 16;
pub const PALETTE_BLOCK_SIZE: usize = PALETTE_COUNT * COLORS_PER_PALETTE * 2;

/// Exact size of an SHR screen file.
pub const SHR_FILE_SIZE: usize = PALETTE_OFFSET + PALETTE_BLOCK_SIZE;

/// The three regions of an SHR screen, split out of the raw file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShrImage {
    pub bitmap: BitmapRegion,
    pub scbs: ScanlineControlTable,
    pub palettes: PaletteBank,
}

/// Split a raw SHR file into its bitmap, SCB table and palette bank.
///
/// Slicing is purely positional. The only check is the length: anything
/// other than exactly [`SHR_FILE_SIZE`] bytes is rejected, never partially
/// decoded.
pub fn extract(source: &[u8]) -> Result<ShrImage, FormatError> {
    if source.len() != SHR_FILE_SIZE {
        return Err(FormatError::TruncatedOrOversized {
            actual: source.len(),
        });
    }

    let (bitmap, rest) = source.split_at(SCB_OFFSET);
    let (scbs, palette_block) = rest.split_at(SCB_TABLE_SIZE);

    let image = ShrImage {
        bitmap: BitmapRegion::from_slice(bitmap),
        scbs: ScanlineControlTable::from_slice(scbs),
        palettes: PaletteBank::from_le_bytes(palette_block),
    };

    tracing::debug!(
        bitmap = bitmap.len(),
        scbs = scbs.len(),
        palette_block = palette_block.len(),
        "extracted SHR regions"
    );

    Ok(image)
}
