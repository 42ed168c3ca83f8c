/*
 *  font/latin.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Latin-1 supplement glyphs, U+00A0..U+00FF
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

/// Latin-1 supplement, indexed from U+00A0.
#[rustfmt::skip]
pub static EXT_LATIN: [Glyph; 96] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00A0 (no-break space)
    [0x18, 0x00, 0x18, 0x18, 0x3C, 0x3C, 0x18, 0x00], // U+00A1 (inverted exclamation mark)
    [0x18, 0x18, 0x7E, 0x03, 0x03, 0x7E, 0x18, 0x18], // U+00A2 (cent sign)
    [0x1C, 0x36, 0x26, 0x0F, 0x06, 0x67, 0x3F, 0x00], // U+00A3 (pound sign)
    [0x00, 0x63, 0x3E, 0x36, 0x3E, 0x63, 0x00, 0x00], // U+00A4 (currency sign)
    [0x33, 0x33, 0x1E, 0x3F, 0x0C, 0x3F, 0x0C, 0x0C], // U+00A5 (yen sign)
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // U+00A6 (broken bar)
    [0x3C, 0x06, 0x1C, 0x36, 0x1C, 0x30, 0x1E, 0x00], // U+00A7 (section sign)
    [0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00A8 (diaeresis)
    [0x7E, 0x81, 0x9D, 0x85, 0x85, 0x9D, 0x81, 0x7E], // U+00A9 (copyright sign)
    [0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00, 0x7F, 0x00], // U+00AA (feminine ordinal indicator)
    [0x00, 0xCC, 0x66, 0x33, 0x66, 0xCC, 0x00, 0x00], // U+00AB (left-pointing double angle quotation mark)
    [0x00, 0x00, 0x3F, 0x30, 0x30, 0x00, 0x00, 0x00], // U+00AC (not sign)
    [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // U+00AD (soft hyphen)
    [0x7E, 0x81, 0x9D, 0xA5, 0x9D, 0x95, 0x81, 0x7E], // U+00AE (registered sign)
    [0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00AF (macron)
    [0x1C, 0x36, 0x36, 0x1C, 0x00, 0x00, 0x00, 0x00], // U+00B0 (degree sign)
    [0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x3F, 0x00], // U+00B1 (plus-minus sign)
    [0x1C, 0x30, 0x18, 0x0C, 0x3C, 0x00, 0x00, 0x00], // U+00B2 (superscript two)
    [0x1C, 0x30, 0x18, 0x30, 0x1C, 0x00, 0x00, 0x00], // U+00B3 (superscript three)
    [0x30, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00B4 (acute accent)
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x03], // U+00B5 (micro sign)
    [0xFE, 0xDB, 0xDB, 0xDE, 0xD8, 0xD8, 0xD8, 0x00], // U+00B6 (pilcrow sign)
    [0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x00], // U+00B7 (middle dot)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x30, 0x1E], // U+00B8 (cedilla)
    [0x0C, 0x0E, 0x0C, 0x0C, 0x1E, 0x00, 0x00, 0x00], // U+00B9 (superscript one)
    [0x1C, 0x36, 0x36, 0x1C, 0x00, 0x3E, 0x00, 0x00], // U+00BA (masculine ordinal indicator)
    [0x00, 0x33, 0x66, 0xCC, 0x66, 0x33, 0x00, 0x00], // U+00BB (right-pointing double angle quotation mark)
    [0x43, 0x22, 0x12, 0x17, 0x28, 0x34, 0x7A, 0x21], // U+00BC (vulgar fraction one quarter)
    [0x43, 0x22, 0x12, 0x17, 0x68, 0x44, 0x22, 0x71], // U+00BD (vulgar fraction one half)
    [0x43, 0x24, 0x12, 0x14, 0x2B, 0x34, 0x7A, 0x21], // U+00BE (vulgar fraction three quarters)
    [0x0C, 0x00, 0x0C, 0x06, 0x03, 0x33, 0x1E, 0x00], // U+00BF (inverted question mark)
    [0x0C, 0x18, 0x1E, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+00C0 (latin capital letter a with grave)
    [0x30, 0x18, 0x1E, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+00C1 (latin capital letter a with acute)
    [0x1C, 0x36, 0x1E, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+00C2 (latin capital letter a with circumflex)
    [0x2C, 0x1A, 0x1E, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+00C3 (latin capital letter a with tilde)
    [0x36, 0x00, 0x1E, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+00C4 (latin capital letter a with diaeresis)
    [0x1C, 0x14, 0x1E, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+00C5 (latin capital letter a with ring above)
    [0x7E, 0x1B, 0x1B, 0x7F, 0x1B, 0x1B, 0x7B, 0x00], // U+00C6 (latin capital letter ae)
    [0x1E, 0x33, 0x03, 0x33, 0x1E, 0x18, 0x30, 0x1E], // U+00C7 (latin capital letter c with cedilla)
    [0x0C, 0x18, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // U+00C8 (latin capital letter e with grave)
    [0x30, 0x18, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // U+00C9 (latin capital letter e with acute)
    [0x1C, 0x36, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // U+00CA (latin capital letter e with circumflex)
    [0x36, 0x00, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // U+00CB (latin capital letter e with diaeresis)
    [0x0C, 0x18, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00CC (latin capital letter i with grave)
    [0x30, 0x18, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00CD (latin capital letter i with acute)
    [0x1C, 0x36, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00CE (latin capital letter i with circumflex)
    [0x36, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00CF (latin capital letter i with diaeresis)
    [0x1F, 0x36, 0x66, 0x6F, 0x66, 0x36, 0x1F, 0x00], // U+00D0 (latin capital letter eth)
    [0x2C, 0x1A, 0x63, 0x6F, 0x7B, 0x73, 0x63, 0x00], // U+00D1 (latin capital letter n with tilde)
    [0x0C, 0x18, 0x1C, 0x36, 0x63, 0x36, 0x1C, 0x00], // U+00D2 (latin capital letter o with grave)
    [0x30, 0x18, 0x1C, 0x36, 0x63, 0x36, 0x1C, 0x00], // U+00D3 (latin capital letter o with acute)
    [0x1C, 0x36, 0x1C, 0x36, 0x63, 0x36, 0x1C, 0x00], // U+00D4 (latin capital letter o with circumflex)
    [0x2C, 0x1A, 0x1C, 0x36, 0x63, 0x36, 0x1C, 0x00], // U+00D5 (latin capital letter o with tilde)
    [0x36, 0x00, 0x1C, 0x36, 0x63, 0x36, 0x1C, 0x00], // U+00D6 (latin capital letter o with diaeresis)
    [0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00, 0x00], // U+00D7 (multiplication sign)
    [0xBC, 0x66, 0x76, 0x6E, 0x66, 0x66, 0x3D, 0x00], // U+00D8 (latin capital letter o with stroke)
    [0x0C, 0x18, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U+00D9 (latin capital letter u with grave)
    [0x30, 0x18, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U+00DA (latin capital letter u with acute)
    [0x1C, 0x36, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U+00DB (latin capital letter u with circumflex)
    [0x36, 0x00, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U+00DC (latin capital letter u with diaeresis)
    [0x30, 0x18, 0x33, 0x33, 0x1E, 0x0C, 0x1E, 0x00], // U+00DD (latin capital letter y with acute)
    [0x0F, 0x06, 0x3E, 0x66, 0x3E, 0x06, 0x0F, 0x00], // U+00DE (latin capital letter thorn)
    [0x1E, 0x33, 0x33, 0x1B, 0x33, 0x33, 0x1B, 0x03], // U+00DF (latin small letter sharp s)
    [0x0C, 0x18, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // U+00E0 (latin small letter a with grave)
    [0x30, 0x18, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // U+00E1 (latin small letter a with acute)
    [0x1C, 0x36, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // U+00E2 (latin small letter a with circumflex)
    [0x2C, 0x1A, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // U+00E3 (latin small letter a with tilde)
    [0x36, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // U+00E4 (latin small letter a with diaeresis)
    [0x1C, 0x14, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // U+00E5 (latin small letter a with ring above)
    [0x00, 0x00, 0x37, 0x58, 0x7E, 0x1B, 0x76, 0x00], // U+00E6 (latin small letter ae)
    [0x00, 0x00, 0x1E, 0x03, 0x03, 0x1E, 0x30, 0x1C], // U+00E7 (latin small letter c with cedilla)
    [0x0C, 0x18, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+00E8 (latin small letter e with grave)
    [0x30, 0x18, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+00E9 (latin small letter e with acute)
    [0x1C, 0x36, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+00EA (latin small letter e with circumflex)
    [0x36, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+00EB (latin small letter e with diaeresis)
    [0x0C, 0x18, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00EC (latin small letter i with grave)
    [0x30, 0x18, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00ED (latin small letter i with acute)
    [0x1C, 0x36, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00EE (latin small letter i with circumflex)
    [0x36, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00EF (latin small letter i with diaeresis)
    [0x36, 0x1C, 0x36, 0x30, 0x7E, 0x63, 0x3E, 0x00], // U+00F0 (latin small letter eth)
    [0x2C, 0x1A, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // U+00F1 (latin small letter n with tilde)
    [0x0C, 0x18, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00F2 (latin small letter o with grave)
    [0x30, 0x18, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00F3 (latin small letter o with acute)
    [0x1C, 0x36, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00F4 (latin small letter o with circumflex)
    [0x2C, 0x1A, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00F5 (latin small letter o with tilde)
    [0x36, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00F6 (latin small letter o with diaeresis)
    [0x00, 0x0C, 0x00, 0x3F, 0x00, 0x0C, 0x00, 0x00], // U+00F7 (division sign)
    [0x00, 0x00, 0x5E, 0x33, 0x3B, 0x37, 0x1E, 0x01], // U+00F8 (latin small letter o with stroke)
    [0x0C, 0x18, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // U+00F9 (latin small letter u with grave)
    [0x30, 0x18, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // U+00FA (latin small letter u with acute)
    [0x1C, 0x36, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // U+00FB (latin small letter u with circumflex)
    [0x36, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // U+00FC (latin small letter u with diaeresis)
    [0x30, 0x18, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // U+00FD (latin small letter y with acute)
    [0x07, 0x06, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x0F], // U+00FE (latin small letter thorn)
    [0x36, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // U+00FF (latin small letter y with diaeresis)
];
