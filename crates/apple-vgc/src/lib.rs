//! Apple IIGS Video Graphics Controller, Super Hi-Res 320 mode.
//!
//! Turns the three regions of an SHR screen (bitmap, scanline control bytes,
//! palette bank) into a 320x200 true-colour raster:
//!
//! - each scanline's SCB selects one of sixteen palettes (low nibble);
//! - each bitmap byte yields two 4-bit pixel indices, high nibble first;
//! - each index picks a `$0RGB` word from that palette, widened to 8 bits per
//!   channel by nibble replication.
//!
//! Decoding is a pure function of its inputs. With the `parallel` feature the
//! scanlines can be rendered on a rayon pool with identical results.

mod color;
mod decode;
mod raster;

pub use color::{Rgb, channels, widen_channel};
#[cfg(feature = "parallel")]
pub use decode::decode_par;
pub use decode::{
    DecodeOptions, decode, decode_scanline, decode_with, pixel_index, resolve_pixel,
};
pub use format_shr::{self, FormatError, HEIGHT, ShrImage, WIDTH};
pub use raster::{DecodedRaster, PixelFormat};

/// Decode a raw SHR file in one step.
///
/// Fails only when `source` is not exactly 32,768 bytes long.
pub fn decode_bytes(source: &[u8]) -> Result<DecodedRaster, FormatError> {
    let image = format_shr::extract(source)?;
    Ok(decode(&image.bitmap, &image.scbs, &image.palettes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use format_shr::SHR_FILE_SIZE;

    #[test]
    fn decode_bytes_rejects_bad_size() {
        assert_eq!(
            decode_bytes(&[0; 1000]),
            Err(FormatError::TruncatedOrOversized { actual: 1000 })
        );
    }

    #[test]
    fn decode_bytes_all_zero_is_black() {
        let raster = decode_bytes(&[0; SHR_FILE_SIZE]).expect("valid");
        assert_eq!(raster.pixels().len(), WIDTH * HEIGHT);
        assert!(raster.pixels().iter().all(|&p| p == Rgb::BLACK));
    }
}
