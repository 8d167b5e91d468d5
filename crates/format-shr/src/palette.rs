use std::ops::Index;

use crate::{COLORS_PER_PALETTE, PALETTE_COUNT};

/// Sixteen palettes of sixteen `$0RGB` colour words.
///
/// Words are stored exactly as read; the top nibble is not masked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteBank([[u16; COLORS_PER_PALETTE]; PALETTE_COUNT]);

impl PaletteBank {
    #[must_use]
    pub const fn from_palettes(palettes: [[u16; COLORS_PER_PALETTE]; PALETTE_COUNT]) -> Self {
        Self(palettes)
    }

    /// Build from 256 words in file order (`palette * 16 + colour`).
    #[must_use]
    pub fn from_words(words: &[u16; PALETTE_COUNT * COLORS_PER_PALETTE]) -> Self {
        let mut palettes = [[0u16; COLORS_PER_PALETTE]; PALETTE_COUNT];
        for (palette, chunk) in palettes
            .iter_mut()
            .zip(words.chunks_exact(COLORS_PER_PALETTE))
        {
            palette.copy_from_slice(chunk);
        }
        Self(palettes)
    }

    /// Decode the 512-byte palette block. The IIGS is little-endian: the pair
    /// `(lo, hi)` at offset `2k` is word `k`.
    pub(crate) fn from_le_bytes(block: &[u8]) -> Self {
        debug_assert_eq!(block.len(), PALETTE_COUNT * COLORS_PER_PALETTE * 2);
        let mut palettes = [[0u16; COLORS_PER_PALETTE]; PALETTE_COUNT];
        for (word, pair) in palettes
            .as_flattened_mut()
            .iter_mut()
            .zip(block.chunks_exact(2))
        {
            *word = u16::from_le_bytes([pair[0], pair[1]]);
        }
        Self(palettes)
    }

    /// Palette `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p >= 16`.
    #[must_use]
    pub fn palette(&self, p: usize) -> &[u16; COLORS_PER_PALETTE] {
        &self.0[p]
    }

    /// Colour `c` of palette `p`.
    #[must_use]
    pub fn entry(&self, p: usize, c: usize) -> u16 {
        self.0[p][c]
    }

    /// All 256 words in file order.
    #[must_use]
    pub fn words(&self) -> &[u16] {
        self.0.as_flattened()
    }
}

impl Index<usize> for PaletteBank {
    type Output = [u16; COLORS_PER_PALETTE];

    fn index(&self, p: usize) -> &Self::Output {
        self.palette(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PALETTE_BLOCK_SIZE;

    #[test]
    fn block_is_little_endian() {
        let mut block = [0u8; PALETTE_BLOCK_SIZE];
        block[0] = 0x34;
        block[1] = 0x12;
        let bank = PaletteBank::from_le_bytes(&block);
        assert_eq!(bank.words()[0], 0x1234);
        assert_eq!(bank[0][0], 0x1234);
    }

    #[test]
    fn word_order_is_palette_major() {
        let mut block = [0u8; PALETTE_BLOCK_SIZE];
        // Palette 2, colour 5 -> word 37 -> byte offset 74
        block[74] = 0xBC;
        block[75] = 0x0A;
        // Palette 15, colour 15 -> last word
        block[510] = 0xFF;
        block[511] = 0x0F;
        let bank = PaletteBank::from_le_bytes(&block);
        assert_eq!(bank.entry(2, 5), 0x0ABC);
        assert_eq!(bank.palette(15)[15], 0x0FFF);
        assert_eq!(bank.words()[37], 0x0ABC);
    }

    #[test]
    fn top_nibble_is_preserved() {
        let mut block = [0u8; PALETTE_BLOCK_SIZE];
        block[1] = 0xF0;
        assert_eq!(PaletteBank::from_le_bytes(&block).entry(0, 0), 0xF000);
    }

    #[test]
    fn from_words_matches_index_layout() {
        let mut words = [0u16; 256];
        for (i, w) in words.iter_mut().enumerate() {
            *w = i as u16;
        }
        let bank = PaletteBank::from_words(&words);
        assert_eq!(bank.entry(3, 4), 3 * 16 + 4);
        assert_eq!(bank.words(), &words[..]);
    }
}
