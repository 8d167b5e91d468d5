use std::slice::ChunksExact;

use crate::{BITMAP_SIZE, BYTES_PER_ROW, HEIGHT};

/// Packed 4bpp pixel data: 200 rows of 160 bytes.
///
/// Each byte holds two pixel indices, the high nibble being the left pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct BitmapRegion {
    data: Vec<u8>,
}

impl BitmapRegion {
    pub(crate) fn from_slice(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), BITMAP_SIZE);
        Self {
            data: bytes.to_vec(),
        }
    }

    /// The 160 bytes of scanline `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= HEIGHT`.
    #[must_use]
    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < HEIGHT, "scanline {y} out of range");
        let start = y * BYTES_PER_ROW;
        &self.data[start..start + BYTES_PER_ROW]
    }

    /// Iterate scanlines top to bottom.
    pub fn rows(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(BYTES_PER_ROW)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl std::fmt::Debug for BitmapRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitmapRegion")
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}
