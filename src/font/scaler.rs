/*
 *  font/scaler.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Nearest-neighbour magnification of 8x8 glyphs
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

use super::Glyph;
use crate::constants::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// Expands glyphs into a `size x size` on/off mask, row major.
///
/// The mask buffer is reused between calls so a line of text costs one
/// allocation, not one per character.
#[derive(Debug, Clone)]
pub struct GlyphScaler {
    scale: u32,
    mask: Vec<bool>,
}

impl GlyphScaler {
    pub fn new(scale: u32) -> Self {
        let scale = scale.max(1);
        let len = (GLYPH_WIDTH * scale * GLYPH_HEIGHT * scale) as usize;
        Self { scale, mask: vec![false; len] }
    }

    pub fn width(&self) -> u32 {
        GLYPH_WIDTH * self.scale
    }

    /// Magnify `glyph`; pixel (x, y) of the result is source bit
    /// (x / scale, y / scale). No smoothing.
    pub fn render(&mut self, glyph: &Glyph) -> &[bool] {
        let w = self.width() as usize;
        let s = self.scale as usize;
        for (y, row) in self.mask.chunks_exact_mut(w).enumerate() {
            let bits = glyph[y / s];
            for (x, px) in row.iter_mut().enumerate() {
                *px = bits & (1 << (x / s)) != 0;
            }
        }
        &self.mask
    }
}

/// One-shot variant of [`GlyphScaler::render`].
pub fn scale_glyph(glyph: &Glyph, scale: u32) -> Vec<bool> {
    let mut scaler = GlyphScaler::new(scale);
    scaler.render(glyph).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_scale() {
        let glyph: Glyph = [0x01, 0x80, 0, 0, 0, 0, 0, 0xFF];
        let mask = scale_glyph(&glyph, 1);
        assert_eq!(mask.len(), 64);
        assert!(mask[0]);
        assert!(!mask[1]);
        assert!(mask[8 + 7]);
        assert!(mask[56..64].iter().all(|&b| b));
    }

    #[test]
    fn test_blocky_scale_two() {
        let glyph: Glyph = [0x01, 0, 0, 0, 0, 0, 0, 0];
        let mask = scale_glyph(&glyph, 2);
        assert_eq!(mask.len(), 256);
        let on: Vec<usize> = mask.iter().enumerate().filter(|(_, b)| **b).map(|(i, _)| i).collect();
        // the top-left source pixel becomes a 2x2 block
        assert_eq!(on, vec![0, 1, 16, 17]);
    }

    #[test]
    fn test_every_output_pixel_matches_source() {
        let glyph: Glyph = [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00];
        for scale in [1u32, 2, 4] {
            let mask = scale_glyph(&glyph, scale);
            let size = 8 * scale as usize;
            for y in 0..size {
                for x in 0..size {
                    let src = glyph[y / scale as usize] & (1 << (x / scale as usize)) != 0;
                    assert_eq!(mask[y * size + x], src);
                }
            }
        }
    }

    #[test]
    fn test_scaler_reuse_clears_previous_glyph() {
        let mut scaler = GlyphScaler::new(2);
        scaler.render(&[0xFF; 8]);
        let mask = scaler.render(&[0; 8]);
        assert!(mask.iter().all(|&b| !b));
    }
}
