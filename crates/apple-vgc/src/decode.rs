//! Super Hi-Res 320 mode scanline decoding.
//!
//! For each scanline the VGC reads the SCB, picks one of the sixteen
//! palettes from its low nibble, then walks the 160 bitmap bytes emitting two
//! pixels per byte, high nibble first. No pixel depends on another (outside
//! fill mode, which only looks left within its own scanline), so scanlines
//! can be rendered in any order.

use format_shr::{
    BYTES_PER_ROW, BitmapRegion, HEIGHT, PaletteBank, ScanlineControl, ScanlineControlTable,
    ShrImage, WIDTH,
};

use crate::color::Rgb;
use crate::raster::DecodedRaster;

/// Knobs for [`decode_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Honour the SCB colour-fill bit. Off by default: a plain decode uses
    /// only the palette field.
    pub fill_mode: bool,
    /// Render scanlines on the rayon pool. Ignored without the `parallel`
    /// feature.
    pub parallel: bool,
}

/// 4-bit pixel index of column `x` within a 160-byte scanline.
#[inline]
#[must_use]
pub fn pixel_index(row: &[u8], x: usize) -> u8 {
    let byte = row[x / 2];
    if x % 2 == 0 { byte >> 4 } else { byte & 0x0F }
}

/// Colour of pixel `index` under palette `palette`.
#[inline]
#[must_use]
pub fn resolve_pixel(palette: usize, index: u8, palettes: &PaletteBank) -> Rgb {
    debug_assert!(palette < 16 && index < 16);
    Rgb::from_rgb12(palettes[palette][index as usize])
}

/// Decode one scanline on its own: its 160 bitmap bytes, its control byte
/// and the full palette bank are all it needs.
///
/// # Panics
///
/// Panics if `row` is not exactly 160 bytes.
#[must_use]
pub fn decode_scanline(
    row: &[u8],
    scb: ScanlineControl,
    palettes: &PaletteBank,
    options: DecodeOptions,
) -> [Rgb; WIDTH] {
    let mut out = [Rgb::BLACK; WIDTH];
    render_scanline(row, scb, palettes, options, &mut out);
    out
}

fn render_scanline(
    row: &[u8],
    scb: ScanlineControl,
    palettes: &PaletteBank,
    options: DecodeOptions,
    out: &mut [Rgb],
) {
    assert_eq!(row.len(), BYTES_PER_ROW);
    debug_assert_eq!(out.len(), WIDTH);

    let palette = scb.palette();

    if options.fill_mode && scb.fill_mode() {
        // Index 0 repeats the last non-zero colour to its left. A line that
        // starts with zeros shows entry 0 until the first real colour.
        let mut fill = palettes[palette][0];
        for (x, pixel) in out.iter_mut().enumerate() {
            let index = pixel_index(row, x);
            if index != 0 {
                fill = palettes[palette][index as usize];
            }
            *pixel = Rgb::from_rgb12(fill);
        }
        return;
    }

    for (x, pixel) in out.iter_mut().enumerate() {
        *pixel = resolve_pixel(palette, pixel_index(row, x), palettes);
    }
}

/// Decode a full screen using only the palette field of each SCB.
#[must_use]
pub fn decode(
    bitmap: &BitmapRegion,
    scbs: &ScanlineControlTable,
    palettes: &PaletteBank,
) -> DecodedRaster {
    decode_sequential(bitmap, scbs, palettes, DecodeOptions::default())
}

/// Decode a full screen with explicit options.
#[must_use]
pub fn decode_with(image: &ShrImage, options: DecodeOptions) -> DecodedRaster {
    #[cfg(feature = "parallel")]
    {
        if options.parallel {
            return decode_parallel(&image.bitmap, &image.scbs, &image.palettes, options);
        }
    }
    decode_sequential(&image.bitmap, &image.scbs, &image.palettes, options)
}

/// Like [`decode`], one scanline per rayon task.
#[cfg(feature = "parallel")]
#[must_use]
pub fn decode_par(
    bitmap: &BitmapRegion,
    scbs: &ScanlineControlTable,
    palettes: &PaletteBank,
) -> DecodedRaster {
    decode_parallel(bitmap, scbs, palettes, DecodeOptions::default())
}

fn decode_sequential(
    bitmap: &BitmapRegion,
    scbs: &ScanlineControlTable,
    palettes: &PaletteBank,
    options: DecodeOptions,
) -> DecodedRaster {
    note_scanline_modes(scbs, options);

    let mut pixels = vec![Rgb::BLACK; WIDTH * HEIGHT];
    for ((row, scb), out) in bitmap
        .rows()
        .zip(scbs.active())
        .zip(pixels.chunks_exact_mut(WIDTH))
    {
        render_scanline(row, scb, palettes, options, out);
    }
    DecodedRaster::from_pixels(pixels)
}

#[cfg(feature = "parallel")]
fn decode_parallel(
    bitmap: &BitmapRegion,
    scbs: &ScanlineControlTable,
    palettes: &PaletteBank,
    options: DecodeOptions,
) -> DecodedRaster {
    use rayon::prelude::*;

    note_scanline_modes(scbs, options);

    let mut pixels = vec![Rgb::BLACK; WIDTH * HEIGHT];
    pixels
        .par_chunks_mut(WIDTH)
        .enumerate()
        .for_each(|(y, out)| render_scanline(bitmap.row(y), scbs.get(y), palettes, options, out));
    DecodedRaster::from_pixels(pixels)
}

/// Log SCB flags this decoder does not act on.
fn note_scanline_modes(scbs: &ScanlineControlTable, options: DecodeOptions) {
    let mode_640 = scbs.active().filter(|scb| scb.mode_640()).count();
    if mode_640 > 0 {
        tracing::warn!(
            scanlines = mode_640,
            "640 mode is not supported; decoding those scanlines as 320 mode"
        );
    }

    let fill = scbs.active().filter(|scb| scb.fill_mode()).count();
    if fill > 0 && !options.fill_mode {
        tracing::debug!(scanlines = fill, "ignoring SCB colour-fill bit");
    }

    tracing::debug!(
        fill_mode = options.fill_mode,
        parallel = options.parallel,
        "decoding 320x200 SHR screen"
    );
}
