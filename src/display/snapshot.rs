/*
 *  display/snapshot.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Dump the visible framebuffer as a binary PGM
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use std::io::{self, Write};

use super::framebuffer::PixelWriter;

/// BT.601 luma of a pixel
pub fn luma(c: Rgb888) -> u8 {
    ((299 * u32::from(c.r()) + 587 * u32::from(c.g()) + 114 * u32::from(c.b())) / 1000) as u8
}

/// Write the visible area as P5, one gray byte per pixel.
pub fn write_pgm<W: Write>(fb: &PixelWriter<'_>, mut out: W) -> io::Result<()> {
    let panel = fb.panel();
    write!(out, "P5\n{} {}\n255\n", panel.xres, panel.yres)?;
    let mut row = Vec::with_capacity(panel.xres as usize);
    for y in 0..panel.yres {
        row.clear();
        row.extend((0..panel.xres).map(|x| fb.get_pixel(x, y).map_or(0, luma)));
        out.write_all(&row)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::color::PaletteColor;
    use crate::display::geometry::PanelGeometry;

    #[test]
    fn test_luma() {
        assert_eq!(luma(Rgb888::WHITE), 255);
        assert_eq!(luma(Rgb888::BLACK), 0);
        assert_eq!(luma(Rgb888::new(0x88, 0x88, 0x88)), 0x88);
    }

    #[test]
    fn test_pgm_layout() {
        let panel = PanelGeometry::packed(3, 2, 32);
        let mut buf = vec![0u8; panel.smem_len as usize];
        let mut fb = PixelWriter::new(&mut buf, panel).unwrap();
        fb.clear_screen(PaletteColor::White);
        fb.put_pixel(1, 1, PaletteColor::Black);

        let mut out = Vec::new();
        write_pgm(&fb, &mut out).unwrap();
        let header = b"P5\n3 2\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(&out[header.len()..], &[255, 255, 255, 255, 0, 255]);
    }
}
