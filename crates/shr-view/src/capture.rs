//! Headless export: PNG screenshots and raw pixel dumps.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use apple_vgc::{DecodedRaster, PixelFormat};

use crate::error::ViewerError;

/// Encode the raster as an 8-bit RGBA PNG.
pub fn write_png<W: Write>(raster: &DecodedRaster, w: W) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, raster.width() as u32, raster.height() as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&raster.to_bytes(PixelFormat::Rgba8))?;
    writer.finish()
}

/// Save the raster as a PNG file.
pub fn save_png(raster: &DecodedRaster, path: &Path) -> Result<(), ViewerError> {
    let file = fs::File::create(path).map_err(|source| ViewerError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    write_png(raster, BufWriter::new(file))?;
    Ok(())
}

/// Save the raster as headerless packed pixels.
pub fn save_raw(raster: &DecodedRaster, path: &Path, format: PixelFormat) -> Result<(), ViewerError> {
    fs::write(path, raster.to_bytes(format)).map_err(|source| ViewerError::Write {
        path: path.to_path_buf(),
        source,
    })
}
