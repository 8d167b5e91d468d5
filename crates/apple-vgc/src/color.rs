//! `$0RGB` colour words.
//!
//! A palette entry packs three 4-bit channels into the low 12 bits of a
//! little-endian word: red in bits 8-11, green in 4-7, blue in 0-3. Bits
//! 12-15 are unused by the VGC.

/// An 8-bit-per-channel display colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Expand a palette word to 8 bits per channel.
    #[must_use]
    pub const fn from_rgb12(word: u16) -> Self {
        let [r, g, b] = channels(word);
        Self {
            r: widen_channel(r),
            g: widen_channel(g),
            b: widen_channel(b),
        }
    }

    /// Pack as `0xFFRRGGBB`, the framebuffer word used by the pixel sinks.
    #[must_use]
    pub const fn to_argb32(self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Split a palette word into its 4-bit `[red, green, blue]` channels.
#[must_use]
pub const fn channels(word: u16) -> [u8; 3] {
    [
        ((word >> 8) & 0xF) as u8,
        ((word >> 4) & 0xF) as u8,
        (word & 0xF) as u8,
    ]
}

/// Widen a 4-bit channel to 8 bits by nibble replication (`v * 17`), so
/// 0x0 stays black and 0xF reaches full intensity.
#[must_use]
pub const fn widen_channel(value: u8) -> u8 {
    debug_assert!(value < 16);
    (value << 4) | value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widen_matches_times_seventeen() {
        for v in 0..16u8 {
            assert_eq!(u32::from(widen_channel(v)), u32::from(v) * 17);
        }
    }

    #[test]
    fn channel_positions() {
        assert_eq!(channels(0x0F00), [0xF, 0, 0]);
        assert_eq!(channels(0x00F0), [0, 0xF, 0]);
        assert_eq!(channels(0x000F), [0, 0, 0xF]);
        assert_eq!(channels(0x0ABC), [0xA, 0xB, 0xC]);
    }

    #[test]
    fn unused_top_nibble_is_ignored() {
        assert_eq!(Rgb::from_rgb12(0xF123), Rgb::from_rgb12(0x0123));
    }

    #[test]
    fn primaries() {
        assert_eq!(Rgb::from_rgb12(0x0F00), Rgb::new(0xFF, 0, 0));
        assert_eq!(Rgb::from_rgb12(0x00F0), Rgb::new(0, 0xFF, 0));
        assert_eq!(Rgb::from_rgb12(0x000F), Rgb::new(0, 0, 0xFF));
        assert_eq!(Rgb::from_rgb12(0x0FFF), Rgb::new(0xFF, 0xFF, 0xFF));
        assert_eq!(Rgb::from_rgb12(0x0000), Rgb::BLACK);
    }

    #[test]
    fn argb32_layout() {
        assert_eq!(Rgb::from_rgb12(0x0F80).to_argb32(), 0xFFFF_8800);
        assert_eq!(Rgb::BLACK.to_argb32(), 0xFF00_0000);
    }
}
