/*
 *  display/color.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  The fixed 16 level grayscale palette
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

use embedded_graphics::pixelcolor::{Gray4, GrayColor, Rgb888};

/// One of the 16 palette entries, black to white.
///
/// The discriminant is the palette index, which is also what 8bpp
/// framebuffers store and what a `Gray4` luma maps onto.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Black = 0,
    Gray1,
    Gray2,
    Gray3,
    Gray4,
    Gray5,
    Gray6,
    Gray7,
    Gray8,
    Gray9,
    GrayA,
    GrayB,
    GrayC,
    GrayD,
    GrayE,
    White,
}

/// r, g and b of every palette entry; index n is 0x11 * n on each channel.
pub static PALETTE: [Rgb888; 16] = [
    Rgb888::new(0x00, 0x00, 0x00),
    Rgb888::new(0x11, 0x11, 0x11),
    Rgb888::new(0x22, 0x22, 0x22),
    Rgb888::new(0x33, 0x33, 0x33),
    Rgb888::new(0x44, 0x44, 0x44),
    Rgb888::new(0x55, 0x55, 0x55),
    Rgb888::new(0x66, 0x66, 0x66),
    Rgb888::new(0x77, 0x77, 0x77),
    Rgb888::new(0x88, 0x88, 0x88),
    Rgb888::new(0x99, 0x99, 0x99),
    Rgb888::new(0xAA, 0xAA, 0xAA),
    Rgb888::new(0xBB, 0xBB, 0xBB),
    Rgb888::new(0xCC, 0xCC, 0xCC),
    Rgb888::new(0xDD, 0xDD, 0xDD),
    Rgb888::new(0xEE, 0xEE, 0xEE),
    Rgb888::new(0xFF, 0xFF, 0xFF),
];

const ALL: [PaletteColor; 16] = [
    PaletteColor::Black,
    PaletteColor::Gray1,
    PaletteColor::Gray2,
    PaletteColor::Gray3,
    PaletteColor::Gray4,
    PaletteColor::Gray5,
    PaletteColor::Gray6,
    PaletteColor::Gray7,
    PaletteColor::Gray8,
    PaletteColor::Gray9,
    PaletteColor::GrayA,
    PaletteColor::GrayB,
    PaletteColor::GrayC,
    PaletteColor::GrayD,
    PaletteColor::GrayE,
    PaletteColor::White,
];

impl PaletteColor {
    /// Palette entry for an index, anything above 15 saturates to white.
    pub fn from_index(index: u8) -> Self {
        ALL[usize::from(index.min(15))]
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn rgb(self) -> Rgb888 {
        PALETTE[usize::from(self.index())]
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "BLACK",
            PaletteColor::Gray1 => "GRAY1",
            PaletteColor::Gray2 => "GRAY2",
            PaletteColor::Gray3 => "GRAY3",
            PaletteColor::Gray4 => "GRAY4",
            PaletteColor::Gray5 => "GRAY5",
            PaletteColor::Gray6 => "GRAY6",
            PaletteColor::Gray7 => "GRAY7",
            PaletteColor::Gray8 => "GRAY8",
            PaletteColor::Gray9 => "GRAY9",
            PaletteColor::GrayA => "GRAYA",
            PaletteColor::GrayB => "GRAYB",
            PaletteColor::GrayC => "GRAYC",
            PaletteColor::GrayD => "GRAYD",
            PaletteColor::GrayE => "GRAYE",
            PaletteColor::White => "WHITE",
        }
    }

    /// Swap black and white, used for inverted prints.
    pub fn inverted(self) -> Self {
        Self::from_index(15 - self.index())
    }

    pub fn to_gray4(self) -> Gray4 {
        Gray4::new(self.index())
    }
}

impl From<Gray4> for PaletteColor {
    fn from(value: Gray4) -> Self {
        Self::from_index(value.luma())
    }
}

impl From<PaletteColor> for Gray4 {
    fn from(value: PaletteColor) -> Self {
        value.to_gray4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::RgbColor;

    #[test]
    fn test_palette_is_gray_ramp() {
        for (i, c) in PALETTE.iter().enumerate() {
            let v = (i as u8) * 0x11;
            assert_eq!((c.r(), c.g(), c.b()), (v, v, v));
        }
    }

    #[test]
    fn test_index_round_trip() {
        for i in 0..16u8 {
            assert_eq!(PaletteColor::from_index(i).index(), i);
        }
        assert_eq!(PaletteColor::from_index(200), PaletteColor::White);
    }

    #[test]
    fn test_gray4_mapping() {
        assert_eq!(PaletteColor::from(Gray4::new(0)), PaletteColor::Black);
        assert_eq!(PaletteColor::from(Gray4::new(15)), PaletteColor::White);
        assert_eq!(Gray4::from(PaletteColor::GrayA).luma(), 10);
    }

    #[test]
    fn test_inverted() {
        assert_eq!(PaletteColor::Black.inverted(), PaletteColor::White);
        assert_eq!(PaletteColor::Gray1.inverted(), PaletteColor::GrayE);
    }

    #[test]
    fn test_names() {
        assert_eq!(PaletteColor::Black.name(), "BLACK");
        assert_eq!(PaletteColor::GrayE.name(), "GRAYE");
        assert_eq!(PaletteColor::White.name(), "WHITE");
    }
}
