/*
 *  font/greek.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Greek glyphs, U+0390..U+03C9
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

/// Greek capitals and small letters, indexed from U+0390.
#[rustfmt::skip]
pub static GREEK: [Glyph; 58] = [
    [0x5A, 0x00, 0x0E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // U+0390 (greek small letter iota with dialytika and tonos)
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+0391 (greek capital letter alpha)
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // U+0392 (greek capital letter beta)
    [0x7F, 0x46, 0x06, 0x06, 0x06, 0x06, 0x0F, 0x00], // U+0393 (greek capital letter gamma)
    [0x08, 0x1C, 0x36, 0x63, 0x63, 0x63, 0x7F, 0x00], // U+0394 (greek capital letter delta)
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // U+0395 (greek capital letter epsilon)
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // U+0396 (greek capital letter zeta)
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // U+0397 (greek capital letter eta)
    [0x1C, 0x36, 0x63, 0x7F, 0x63, 0x36, 0x1C, 0x00], // U+0398 (greek capital letter theta)
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+0399 (greek capital letter iota)
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // U+039A (greek capital letter kappa)
    [0x08, 0x1C, 0x36, 0x63, 0x63, 0x63, 0x63, 0x00], // U+039B (greek capital letter lamda)
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // U+039C (greek capital letter mu)
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // U+039D (greek capital letter nu)
    [0x7F, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x7F, 0x00], // U+039E (greek capital letter xi)
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // U+039F (greek capital letter omicron)
    [0x7F, 0x36, 0x36, 0x36, 0x36, 0x36, 0x36, 0x00], // U+03A0 (greek capital letter pi)
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // U+03A1 (greek capital letter rho)
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+03A2
    [0x7F, 0x63, 0x06, 0x0C, 0x06, 0x63, 0x7F, 0x00], // U+03A3 (greek capital letter sigma)
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+03A4 (greek capital letter tau)
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // U+03A5 (greek capital letter upsilon)
    [0x18, 0x7E, 0xDB, 0xDB, 0xDB, 0x7E, 0x18, 0x00], // U+03A6 (greek capital letter phi)
    [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], // U+03A7 (greek capital letter chi)
    [0xDB, 0xDB, 0xDB, 0x7E, 0x18, 0x18, 0x3C, 0x00], // U+03A8 (greek capital letter psi)
    [0x1C, 0x36, 0x63, 0x63, 0x36, 0x14, 0x77, 0x00], // U+03A9 (greek capital letter omega)
    [0x36, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+03AA (greek capital letter iota with dialytika)
    [0x36, 0x00, 0x33, 0x33, 0x1E, 0x0C, 0x1E, 0x00], // U+03AB (greek capital letter upsilon with dialytika)
    [0x30, 0x18, 0x6E, 0x73, 0x23, 0x73, 0x6E, 0x00], // U+03AC (greek small letter alpha with tonos)
    [0x30, 0x18, 0x3E, 0x03, 0x1E, 0x03, 0x3E, 0x00], // U+03AD (greek small letter epsilon with tonos)
    [0x30, 0x18, 0x1B, 0x6E, 0x66, 0x66, 0x66, 0x60], // U+03AE (greek small letter eta with tonos)
    [0x30, 0x18, 0x0E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // U+03AF (greek small letter iota with tonos)
    [0x5A, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00], // U+03B0 (greek small letter upsilon with dialytika and tonos)
    [0x00, 0x00, 0x6E, 0x73, 0x23, 0x73, 0x6E, 0x00], // U+03B1 (greek small letter alpha)
    [0x1C, 0x36, 0x36, 0x1E, 0x36, 0x66, 0x3E, 0x06], // U+03B2 (greek small letter beta)
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x0C, 0x0C, 0x0C], // U+03B3 (greek small letter gamma)
    [0x3C, 0x06, 0x0C, 0x3E, 0x63, 0x63, 0x3E, 0x00], // U+03B4 (greek small letter delta)
    [0x00, 0x00, 0x3E, 0x03, 0x1E, 0x03, 0x3E, 0x00], // U+03B5 (greek small letter epsilon)
    [0x3F, 0x18, 0x0C, 0x06, 0x03, 0x3E, 0x60, 0x30], // U+03B6 (greek small letter zeta)
    [0x00, 0x00, 0x1B, 0x6E, 0x66, 0x66, 0x66, 0x60], // U+03B7 (greek small letter eta)
    [0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x1E, 0x00], // U+03B8 (greek small letter theta)
    [0x00, 0x00, 0x0E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // U+03B9 (greek small letter iota)
    [0x00, 0x00, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x00], // U+03BA (greek small letter kappa)
    [0x07, 0x0C, 0x0C, 0x1E, 0x36, 0x63, 0x63, 0x00], // U+03BB (greek small letter lamda)
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x03], // U+03BC (greek small letter mu)
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // U+03BD (greek small letter nu)
    [0x3F, 0x06, 0x3C, 0x06, 0x03, 0x3E, 0x60, 0x30], // U+03BE (greek small letter xi)
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+03BF (greek small letter omicron)
    [0x00, 0x00, 0x7F, 0x36, 0x36, 0x36, 0x36, 0x00], // U+03C0 (greek small letter pi)
    [0x00, 0x00, 0x3C, 0x66, 0x66, 0x3E, 0x06, 0x0F], // U+03C1 (greek small letter rho)
    [0x00, 0x00, 0x3C, 0x06, 0x06, 0x3C, 0x60, 0x30], // U+03C2 (greek small letter final sigma)
    [0x00, 0x00, 0x7E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+03C3 (greek small letter sigma)
    [0x00, 0x00, 0x3F, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // U+03C4 (greek small letter tau)
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00], // U+03C5 (greek small letter upsilon)
    [0x00, 0x18, 0x7E, 0xDB, 0xDB, 0x7E, 0x18, 0x18], // U+03C6 (greek small letter phi)
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // U+03C7 (greek small letter chi)
    [0x00, 0x00, 0xDB, 0xDB, 0xDB, 0x7E, 0x18, 0x18], // U+03C8 (greek small letter psi)
    [0x00, 0x00, 0x36, 0x63, 0x6B, 0x6B, 0x36, 0x00], // U+03C9 (greek small letter omega)
];
