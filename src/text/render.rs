/*
 *  text/render.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Paints one laid out line of glyphs
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

use crate::constants::{BG_INDEX, FG_INDEX};
use crate::display::color::PaletteColor;
use crate::display::framebuffer::PixelWriter;
use crate::display::geometry::{GridGeometry, Region};
use crate::font::{FontTable, GlyphScaler};

use super::layout::LayoutLine;

/// Paints lines cell by cell, foreground and background both, so text
/// reads on top of whatever was on screen before.
pub struct LineRenderer<'f> {
    font: &'f FontTable,
    scaler: GlyphScaler,
    grid: GridGeometry,
}

impl<'f> LineRenderer<'f> {
    pub fn new(font: &'f FontTable, grid: GridGeometry) -> Self {
        Self { font, scaler: GlyphScaler::new(grid.scale), grid }
    }

    pub fn colors(inverted: bool) -> (PaletteColor, PaletteColor) {
        let fg = PaletteColor::from_index(FG_INDEX);
        let bg = PaletteColor::from_index(BG_INDEX);
        if inverted { (bg, fg) } else { (fg, bg) }
    }

    /// Draw `line` and return the rectangle it covers.
    ///
    /// A line spanning every column also blanks the partial cell between
    /// the last column and the panel edge. That sliver is left out of the
    /// returned region, the EPDC rejects regions that include it.
    pub fn draw_line(&mut self, fb: &mut PixelWriter<'_>, line: &LayoutLine, inverted: bool) -> Region {
        let (fg, bg) = Self::colors(inverted);
        let fw = self.grid.font_w;
        let fh = self.grid.font_h;
        let top = line.row * fh;
        let left = line.col * fw;
        let mask_w = self.scaler.width() as usize;

        for (i, &ch) in line.cells.iter().enumerate() {
            let glyph = self.font.resolve_char(ch);
            let mask = self.scaler.render(glyph);
            let x0 = left + i as u32 * fw;
            for (py, row) in mask.chunks_exact(mask_w).enumerate() {
                for (px, &on) in row.iter().enumerate() {
                    fb.put_pixel(x0 + px as u32, top + py as u32, if on { fg } else { bg });
                }
            }
        }

        let xres = fb.panel().xres;
        if line.width() == self.grid.max_cols {
            let edge = left + line.width() * fw;
            fb.fill_rect(edge, top, xres.saturating_sub(edge), fh, bg);
        }

        Region::new(top, left, line.width() * fw, fh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::geometry::PanelGeometry;
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

    fn line(row: u32, col: u32, text: &str) -> LayoutLine {
        let cells: Vec<char> = text.chars().collect();
        let n = cells.len();
        LayoutLine { offset: 0, row, col, cells, content: 0..n }
    }

    #[test]
    fn test_region_of_line() {
        let panel = PanelGeometry::packed(758, 1024, 16);
        let grid = GridGeometry::for_panel(&panel);
        let mut buf = vec![0u8; panel.smem_len as usize];
        let mut fb = PixelWriter::new(&mut buf, panel).unwrap();
        let font = FontTable::builtin();
        let mut r = LineRenderer::new(&font, grid);
        let region = r.draw_line(&mut fb, &line(2, 3, "Hi"), false);
        assert_eq!(region, Region::new(32, 48, 32, 16));
    }

    #[test]
    fn test_glyph_pixels() {
        let panel = PanelGeometry::packed(64, 16, 32);
        let grid = GridGeometry::for_panel(&panel);
        let mut buf = vec![0x55u8; panel.smem_len as usize];
        let mut fb = PixelWriter::new(&mut buf, panel).unwrap();
        let font = FontTable::builtin();
        let mut r = LineRenderer::new(&font, grid);
        r.draw_line(&mut fb, &line(0, 0, "A"), false);
        // 'A' row 0 is 0x0C: columns 2 and 3 set
        assert_eq!(fb.get_pixel(1, 0), Some(Rgb888::WHITE));
        assert_eq!(fb.get_pixel(2, 0), Some(Rgb888::BLACK));
        assert_eq!(fb.get_pixel(3, 0), Some(Rgb888::BLACK));
        assert_eq!(fb.get_pixel(4, 0), Some(Rgb888::WHITE));
        // untouched next cell
        assert_eq!(fb.get_pixel(8, 0), Some(Rgb888::new(0x55, 0x55, 0x55)));
    }

    #[test]
    fn test_inverted_swaps_colors() {
        let panel = PanelGeometry::packed(16, 8, 24);
        let grid = GridGeometry::for_panel(&panel);
        let mut buf = vec![0u8; panel.smem_len as usize];
        let mut fb = PixelWriter::new(&mut buf, panel).unwrap();
        let font = FontTable::builtin();
        let mut r = LineRenderer::new(&font, grid);
        r.draw_line(&mut fb, &line(0, 0, " "), true);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgb888::BLACK));
        r.draw_line(&mut fb, &line(0, 0, " "), false);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgb888::WHITE));
    }

    #[test]
    fn test_full_line_fills_sliver() {
        // 20px wide: two 8px columns and a 4px sliver
        let panel = PanelGeometry::packed(20, 8, 8);
        let grid = GridGeometry::for_panel(&panel);
        assert_eq!(grid.max_cols, 2);
        let mut buf = vec![7u8; panel.smem_len as usize];
        let mut fb = PixelWriter::new(&mut buf, panel).unwrap();
        let font = FontTable::builtin();
        let mut r = LineRenderer::new(&font, grid);
        let region = r.draw_line(&mut fb, &line(0, 0, "  "), false);
        assert_eq!(region.width, 16);
        drop(fb);
        assert!(buf.iter().all(|&b| b == 15));
    }

    #[test]
    fn test_short_line_leaves_sliver() {
        let panel = PanelGeometry::packed(20, 8, 8);
        let grid = GridGeometry::for_panel(&panel);
        let mut buf = vec![7u8; panel.smem_len as usize];
        let mut fb = PixelWriter::new(&mut buf, panel).unwrap();
        let font = FontTable::builtin();
        let mut r = LineRenderer::new(&font, grid);
        r.draw_line(&mut fb, &line(0, 0, " "), false);
        drop(fb);
        assert_eq!(buf[8], 7);
        assert_eq!(buf[19], 7);
    }
}
