//! Text dump of the palette bank and scanline control table.

use std::io::{self, Write};

use apple_vgc::ShrImage;
use apple_vgc::format_shr::{COLORS_PER_PALETTE, PALETTE_COUNT};

pub fn print_palettes(image: &ShrImage, out: &mut impl Write) -> io::Result<()> {
    let mut usage = [0usize; PALETTE_COUNT];
    let (mut fill, mut interrupt, mut mode_640) = (0, 0, 0);
    for scb in image.scbs.active() {
        usage[scb.palette()] += 1;
        fill += usize::from(scb.fill_mode());
        interrupt += usize::from(scb.interrupt());
        mode_640 += usize::from(scb.mode_640());
    }

    for (p, used) in usage.iter().enumerate() {
        write!(out, "palette {p:2} ({used:3} lines):")?;
        for c in 0..COLORS_PER_PALETTE {
            write!(out, " ${:04X}", image.palettes.entry(p, c))?;
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "scanlines: {fill} fill mode, {interrupt} interrupt, {mode_640} 640 mode"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use apple_vgc::format_shr::{PALETTE_OFFSET, SCB_OFFSET, SHR_FILE_SIZE, extract};

    #[test]
    fn dump_lists_every_palette_and_flag_counts() {
        let mut file = vec![0u8; SHR_FILE_SIZE];
        file[SCB_OFFSET] = 0xA3; // 640 mode + fill, palette 3
        file[SCB_OFFSET + 1] = 0x43; // interrupt, palette 3
        file[PALETTE_OFFSET + 3 * 32] = 0x21;
        file[PALETTE_OFFSET + 3 * 32 + 1] = 0x0F;
        let image = extract(&file).expect("valid");

        let mut out = Vec::new();
        print_palettes(&image, &mut out).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 17);
        assert!(lines[0].starts_with("palette  0 (198 lines):"), "{}", lines[0]);
        assert!(lines[3].starts_with("palette  3 (  2 lines): $0F21"), "{}", lines[3]);
        assert_eq!(lines[16], "scanlines: 1 fill mode, 1 interrupt, 1 640 mode");
    }
}
