/*
 *  font/mod.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  8x8 bitmap font, code point lookup across the built-in ranges
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

mod basic;
mod block;
mod box_drawing;
mod greek;
mod latin;
pub mod scaler;

pub use scaler::GlyphScaler;

use log::debug;
use std::cmp::Ordering;

/// One 8x8 glyph: a byte per scanline, bit 0 is the leftmost pixel.
pub type Glyph = [u8; 8];

// C1 control codes draw nothing
static CONTROL: [Glyph; 32] = [[0; 8]; 32];

/// A contiguous run of code points backed by one glyph array.
#[derive(Debug)]
pub struct GlyphRange {
    pub name: &'static str,
    pub first: u32,
    pub last: u32,
    glyphs: &'static [Glyph],
}

impl GlyphRange {
    const fn new(name: &'static str, first: u32, glyphs: &'static [Glyph]) -> Self {
        Self { name, first, last: first + glyphs.len() as u32 - 1, glyphs }
    }

    fn contains(&self, cp: u32) -> bool {
        (self.first..=self.last).contains(&cp)
    }
}

// must stay sorted by first code point, ranges never overlap
static BUILTIN_RANGES: [GlyphRange; 6] = [
    GlyphRange::new("basic", 0x0000, &basic::BASIC),
    GlyphRange::new("control", 0x0080, &CONTROL),
    GlyphRange::new("latin-1", 0x00A0, &latin::EXT_LATIN),
    GlyphRange::new("greek", 0x0390, &greek::GREEK),
    GlyphRange::new("box drawing", 0x2500, &box_drawing::BOX_DRAWING),
    GlyphRange::new("block elements", 0x2580, &block::BLOCK_ELEMENTS),
];

/// Maps code points to glyphs through a sorted table of disjoint ranges.
///
/// Anything outside the table resolves to the first basic glyph (blank),
/// so rendering never fails on unknown input.
#[derive(Debug, Clone, Copy)]
pub struct FontTable {
    ranges: &'static [GlyphRange],
}

impl Default for FontTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FontTable {
    pub fn builtin() -> Self {
        Self { ranges: &BUILTIN_RANGES }
    }

    pub fn ranges(&self) -> &'static [GlyphRange] {
        self.ranges
    }

    /// The glyph for `cp`, or `None` when no range covers it.
    pub fn lookup(&self, cp: u32) -> Option<&'static Glyph> {
        let idx = self
            .ranges
            .binary_search_by(|r| {
                if r.last < cp {
                    Ordering::Less
                } else if r.first > cp {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .ok()?;
        let range = &self.ranges[idx];
        debug_assert!(range.contains(cp));
        range.glyphs.get((cp - range.first) as usize)
    }

    /// The glyph for `cp`, falling back to the basic range's first entry.
    pub fn resolve(&self, cp: u32) -> &'static Glyph {
        match self.lookup(cp) {
            Some(glyph) => glyph,
            None => {
                debug!("code point U+{:04X} out of font range, using fallback glyph", cp);
                &basic::BASIC[0]
            }
        }
    }

    pub fn resolve_char(&self, ch: char) -> &'static Glyph {
        self.resolve(ch as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_sorted_and_disjoint() {
        let table = FontTable::builtin();
        for pair in table.ranges().windows(2) {
            assert!(pair[0].last < pair[1].first, "{} overlaps {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn test_capital_a() {
        let table = FontTable::builtin();
        let glyph = table.resolve(0x41);
        assert_eq!(glyph, &[0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00]);
    }

    #[test]
    fn test_out_of_range_falls_back() {
        let table = FontTable::builtin();
        assert!(table.lookup(0x10FFFF).is_none());
        assert_eq!(table.resolve(0x10FFFF), &basic::BASIC[0]);
        // gap between latin-1 and greek
        assert!(table.lookup(0x0200).is_none());
    }

    #[test]
    fn test_range_edges() {
        let table = FontTable::builtin();
        for cp in [0x00, 0x7F, 0x80, 0x9F, 0xA0, 0xFF, 0x390, 0x3C9, 0x2500, 0x257F, 0x2580, 0x259F] {
            assert!(table.lookup(cp).is_some(), "U+{:04X} should resolve", cp);
        }
        for cp in [0x100, 0x38F, 0x3CA, 0x24FF, 0x25A0] {
            assert!(table.lookup(cp).is_none(), "U+{:04X} should not resolve", cp);
        }
    }

    #[test]
    fn test_control_codes_are_blank() {
        let table = FontTable::builtin();
        assert_eq!(table.resolve(0x85), &[0u8; 8]);
    }

    #[test]
    fn test_full_block_is_solid() {
        let table = FontTable::builtin();
        assert_eq!(table.resolve_char('\u{2588}'), &[0xFF; 8]);
    }
}
