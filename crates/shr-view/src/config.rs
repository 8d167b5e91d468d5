//! Viewer configuration, built from the command line.

use std::path::PathBuf;

use apple_vgc::{DecodeOptions, PixelFormat};

/// Everything the run modes need, already validated.
#[derive(Clone, Debug)]
pub struct ViewerConfig {
    /// SHR screen file to decode.
    pub input: PathBuf,
    /// Decode and export, never open a window.
    pub headless: bool,
    /// Write the raster as an RGBA PNG.
    pub screenshot: Option<PathBuf>,
    /// Write the raster as packed pixels.
    pub raw: Option<(PathBuf, PixelFormat)>,
    /// Print the palette bank and SCB summary to stdout.
    pub show_palettes: bool,
    /// Integer window scale.
    pub scale: u32,
    pub decode: DecodeOptions,
}

impl ViewerConfig {
    /// Window title: the file name, falling back to the full path.
    #[must_use]
    pub fn title(&self) -> String {
        let name = self
            .input
            .file_name()
            .map_or_else(|| self.input.display().to_string(), |n| n.to_string_lossy().into_owned());
        format!("{name} - Super Hi-Res")
    }
}
