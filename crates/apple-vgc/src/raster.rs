use format_shr::{HEIGHT, WIDTH};

use crate::color::Rgb;

/// Byte layout for exporting a raster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb8,
    /// RGB with an opaque alpha byte.
    #[default]
    Rgba8,
    /// Swapped red/blue with opaque alpha, as most swap chains expect.
    Bgra8,
}

impl PixelFormat {
    #[must_use]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 | Self::Bgra8 => 4,
        }
    }
}

/// A decoded 320x200 screen, row-major from the top-left corner.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedRaster {
    pixels: Vec<Rgb>,
}

impl DecodedRaster {
    pub(crate) fn from_pixels(pixels: Vec<Rgb>) -> Self {
        assert_eq!(pixels.len(), WIDTH * HEIGHT);
        Self { pixels }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        WIDTH
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        HEIGHT
    }

    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// The 320 pixels of scanline `y`.
    #[must_use]
    pub fn row(&self, y: usize) -> &[Rgb] {
        let start = y * WIDTH;
        &self.pixels[start..start + WIDTH]
    }

    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        assert!(x < WIDTH && y < HEIGHT, "pixel ({x}, {y}) out of range");
        self.pixels[y * WIDTH + x]
    }

    /// Pack every pixel into `format`.
    #[must_use]
    pub fn to_bytes(&self, format: PixelFormat) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * format.bytes_per_pixel());
        for &Rgb { r, g, b } in &self.pixels {
            match format {
                PixelFormat::Rgb8 => out.extend_from_slice(&[r, g, b]),
                PixelFormat::Rgba8 => out.extend_from_slice(&[r, g, b, 0xFF]),
                PixelFormat::Bgra8 => out.extend_from_slice(&[b, g, r, 0xFF]),
            }
        }
        out
    }

    /// Pack every pixel as `0xFFRRGGBB`.
    #[must_use]
    pub fn to_argb32(&self) -> Vec<u32> {
        self.pixels.iter().map(|p| p.to_argb32()).collect()
    }
}

impl std::fmt::Debug for DecodedRaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedRaster")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .finish_non_exhaustive()
    }
}
