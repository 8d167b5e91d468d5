//! Scanline control bytes.
//!
//! Bit layout, per the IIGS hardware reference:
//!
//! ```text
//! 7        6          5     4     3..0
//! 640 mode interrupt  fill  rsvd  palette
//! ```
//!
//! Only the palette field takes part in a standard 320-mode decode. The flag
//! bits are exposed so callers can inspect them.

use crate::{HEIGHT, SCB_TABLE_SIZE};

/// One scanline control byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanlineControl(pub u8);

impl ScanlineControl {
    pub const PALETTE_MASK: u8 = 0x0F;
    pub const RESERVED: u8 = 0x10;
    pub const FILL_MODE: u8 = 0x20;
    pub const INTERRUPT: u8 = 0x40;
    pub const MODE_640: u8 = 0x80;

    /// Palette selected for this scanline, always `< 16`.
    #[must_use]
    pub const fn palette(self) -> usize {
        (self.0 & Self::PALETTE_MASK) as usize
    }

    /// Colour fill: index 0 repeats the previous pixel (320 mode only).
    #[must_use]
    pub const fn fill_mode(self) -> bool {
        self.0 & Self::FILL_MODE != 0
    }

    /// Scanline interrupt enable.
    #[must_use]
    pub const fn interrupt(self) -> bool {
        self.0 & Self::INTERRUPT != 0
    }

    #[must_use]
    pub const fn mode_640(self) -> bool {
        self.0 & Self::MODE_640 != 0
    }
}

impl From<u8> for ScanlineControl {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// The 256-byte SCB table. Entries 200..256 are padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanlineControlTable([u8; SCB_TABLE_SIZE]);

impl ScanlineControlTable {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SCB_TABLE_SIZE]) -> Self {
        Self(bytes)
    }

    pub(crate) fn from_slice(bytes: &[u8]) -> Self {
        let mut table = [0u8; SCB_TABLE_SIZE];
        table.copy_from_slice(bytes);
        Self(table)
    }

    /// Control byte for scanline `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= HEIGHT`; the padding entries are not scanlines.
    #[must_use]
    pub fn get(&self, y: usize) -> ScanlineControl {
        assert!(y < HEIGHT, "scanline {y} out of range");
        ScanlineControl(self.0[y])
    }

    /// Control bytes of the 200 visible scanlines.
    pub fn active(&self) -> impl ExactSizeIterator<Item = ScanlineControl> + '_ {
        self.0[..HEIGHT].iter().copied().map(ScanlineControl)
    }

    /// All 256 bytes, padding included.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SCB_TABLE_SIZE] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_low_nibble() {
        assert_eq!(ScanlineControl(0x00).palette(), 0);
        assert_eq!(ScanlineControl(0x0F).palette(), 15);
        assert_eq!(ScanlineControl(0xA3).palette(), 3);
        assert_eq!(ScanlineControl(0xF0).palette(), 0);
    }

    #[test]
    fn flag_bits() {
        let scb = ScanlineControl(0x20);
        assert!(scb.fill_mode());
        assert!(!scb.interrupt());
        assert!(!scb.mode_640());

        let scb = ScanlineControl(0xC7);
        assert!(!scb.fill_mode());
        assert!(scb.interrupt());
        assert!(scb.mode_640());
        assert_eq!(scb.palette(), 7);
    }

    #[test]
    fn active_skips_padding() {
        let mut bytes = [0u8; SCB_TABLE_SIZE];
        bytes[HEIGHT - 1] = 0x09;
        bytes[HEIGHT] = 0xFF;
        let table = ScanlineControlTable::from_bytes(bytes);

        assert_eq!(table.active().len(), HEIGHT);
        assert_eq!(table.active().last(), Some(ScanlineControl(0x09)));
        assert!(table.active().all(|scb| !scb.mode_640()));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn padding_entry_is_not_a_scanline() {
        let _ = ScanlineControlTable::from_bytes([0; SCB_TABLE_SIZE]).get(HEIGHT);
    }
}
