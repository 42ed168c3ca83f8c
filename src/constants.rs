/*
 *  constants.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Device paths, font metrics and mxcfb protocol values
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

/// Framebuffer node opened when nothing else is configured.
pub const DEFAULT_FB_DEVICE: &str = "/dev/fb0";

/// The width of the base 8x8 glyphs, before scaling.
pub const GLYPH_WIDTH: u32 = 8;
/// The height of the base 8x8 glyphs, before scaling.
pub const GLYPH_HEIGHT: u32 = 8;

/// Panels up to this height get unscaled 8x8 glyphs (Pearl).
pub const SCALE_1_MAX_YRES: u32 = 800;
/// Panels up to this height get 16x16 glyphs (Carta), anything taller 32x32.
pub const SCALE_2_MAX_YRES: u32 = 1024;

/// Palette index used for text on a normal print (black).
pub const FG_INDEX: u8 = 0;
/// Palette index used behind the text on a normal print (white).
pub const BG_INDEX: u8 = 15;

// mxcfb protocol values, as the i.MX EPDC driver defines them
pub const TEMP_USE_AMBIENT: i32 = 0x1000;

pub const UPDATE_MODE_PARTIAL: u32 = 0x0;
pub const UPDATE_MODE_FULL: u32 = 0x1;

pub const WAVEFORM_MODE_INIT: u32 = 0x0;
pub const WAVEFORM_MODE_DU: u32 = 0x1;
pub const WAVEFORM_MODE_GC16: u32 = 0x2;
pub const WAVEFORM_MODE_GC4: u32 = 0x3;
pub const WAVEFORM_MODE_A2: u32 = 0x4;
pub const WAVEFORM_MODE_AUTO: u32 = 257;

/// Update marker used when our pid reads as zero. A zero marker can hang
/// some EPDC kernels instead of failing.
pub const FALLBACK_UPDATE_MARKER: u32 = 70 + 66 + 73 + 78 + 75;
