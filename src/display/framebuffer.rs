/*
 *  display/framebuffer.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Pixel writer over the mapped framebuffer, one encoder per depth
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

use core::convert::Infallible;
use embedded_graphics::pixelcolor::{Gray4, Rgb888, RgbColor};
use embedded_graphics::prelude::*;

use super::color::PaletteColor;
use super::error::InkError;
use super::geometry::PanelGeometry;

/// Enum dispatch over the pixel encodings we can drive.
///
/// Picked from the bit depth the kernel reports at initialize time, so
/// one binary handles every panel without static binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8 bpp, one byte holding the raw palette index
    Indexed8,
    /// 16 bpp RGB565, little endian
    Rgb565,
    /// 24 bpp, B G R
    Bgr24,
    /// 32 bpp, B G R plus an opaque alpha byte
    Bgra32,
}

impl PixelFormat {
    pub fn from_depth(bits_per_pixel: u32) -> Result<Self, InkError> {
        match bits_per_pixel {
            8 => Ok(PixelFormat::Indexed8),
            16 => Ok(PixelFormat::Rgb565),
            24 => Ok(PixelFormat::Bgr24),
            32 => Ok(PixelFormat::Bgra32),
            other => Err(InkError::UnsupportedDepth(other)),
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Indexed8 => 1,
            PixelFormat::Rgb565 => 2,
            PixelFormat::Bgr24 => 3,
            PixelFormat::Bgra32 => 4,
        }
    }

    /// Native bytes for a palette entry; only the first
    /// `bytes_per_pixel()` are meaningful.
    pub fn encode(self, color: PaletteColor) -> [u8; 4] {
        let rgb = color.rgb();
        let (r, g, b) = (rgb.r(), rgb.g(), rgb.b());
        match self {
            PixelFormat::Indexed8 => [color.index(), 0, 0, 0],
            PixelFormat::Rgb565 => {
                let v = (u16::from(r / 8) << 11) | (u16::from(g / 4) << 5) | u16::from(b / 8);
                let [lo, hi] = v.to_le_bytes();
                [lo, hi, 0, 0]
            }
            PixelFormat::Bgr24 => [b, g, r, 0],
            PixelFormat::Bgra32 => [b, g, r, 0xFF],
        }
    }

    /// Inverse of [`encode`](Self::encode) for arbitrary stored pixels.
    pub fn decode(self, bytes: &[u8]) -> Rgb888 {
        match self {
            PixelFormat::Indexed8 => Rgb888::new(bytes[0], bytes[0], bytes[0]),
            PixelFormat::Rgb565 => {
                let v = u16::from_le_bytes([bytes[0], bytes[1]]);
                let r5 = ((v >> 11) & 0x1F) as u8;
                let g6 = ((v >> 5) & 0x3F) as u8;
                let b5 = (v & 0x1F) as u8;
                Rgb888::new((r5 << 3) | (r5 >> 2), (g6 << 2) | (g6 >> 4), (b5 << 3) | (b5 >> 2))
            }
            PixelFormat::Bgr24 | PixelFormat::Bgra32 => Rgb888::new(bytes[2], bytes[1], bytes[0]),
        }
    }
}

/// Bounds checked pixel access over a framebuffer sized byte slice.
///
/// Coordinates outside the visible panel, or whose bytes would land past
/// the end of the slice, are ignored on write and read back as `None`.
pub struct PixelWriter<'a> {
    buf: &'a mut [u8],
    panel: PanelGeometry,
    format: PixelFormat,
}

impl<'a> PixelWriter<'a> {
    pub fn new(buf: &'a mut [u8], panel: PanelGeometry) -> Result<Self, InkError> {
        let format = PixelFormat::from_depth(panel.bits_per_pixel)?;
        Ok(Self { buf, panel, format })
    }

    pub fn panel(&self) -> &PanelGeometry {
        &self.panel
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.panel.xres || y >= self.panel.yres {
            return None;
        }
        let bpp = self.format.bytes_per_pixel();
        let offset = x as usize * bpp + y as usize * self.panel.stride as usize;
        (offset + bpp <= self.buf.len()).then_some(offset)
    }

    fn put_encoded(&mut self, x: u32, y: u32, encoded: &[u8]) {
        if let Some(offset) = self.offset(x, y) {
            self.buf[offset..offset + encoded.len()].copy_from_slice(encoded);
        }
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, color: PaletteColor) {
        let encoded = self.format.encode(color);
        let bpp = self.format.bytes_per_pixel();
        self.put_encoded(x, y, &encoded[..bpp]);
    }

    /// Read one pixel back as r, g, b.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        let offset = self.offset(x, y)?;
        let bpp = self.format.bytes_per_pixel();
        Some(self.format.decode(&self.buf[offset..offset + bpp]))
    }

    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: PaletteColor) {
        let encoded = self.format.encode(color);
        let bpp = self.format.bytes_per_pixel();
        let x_end = x.saturating_add(w).min(self.panel.xres);
        let y_end = y.saturating_add(h).min(self.panel.yres);
        for cy in y..y_end {
            for cx in x..x_end {
                self.put_encoded(cx, cy, &encoded[..bpp]);
            }
        }
    }

    /// Fill the whole buffer, stride padding included.
    ///
    /// Above 8 bpp every byte gets the entry's blue channel, which is exact
    /// for the gray palette.
    pub fn clear_screen(&mut self, color: PaletteColor) {
        let fill = match self.format {
            PixelFormat::Indexed8 => color.index(),
            _ => color.rgb().b(),
        };
        self.buf.fill(fill);
    }
}

impl OriginDimensions for PixelWriter<'_> {
    fn size(&self) -> Size {
        Size::new(self.panel.xres, self.panel.yres)
    }
}

impl DrawTarget for PixelWriter<'_> {
    type Color = Gray4;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.put_pixel(point.x as u32, point.y as u32, PaletteColor::from(color));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    fn buffer(panel: &PanelGeometry) -> Vec<u8> {
        vec![0xAB; panel.smem_len as usize]
    }

    #[test]
    fn test_unsupported_depth() {
        let panel = PanelGeometry::packed(4, 4, 8);
        let mut buf = buffer(&panel);
        let panel = PanelGeometry { bits_per_pixel: 4, ..panel };
        assert!(matches!(
            PixelWriter::new(&mut buf, panel),
            Err(InkError::UnsupportedDepth(4))
        ));
    }

    #[test]
    fn test_indexed8_raw_index() {
        let panel = PanelGeometry::packed(4, 4, 8);
        let mut buf = buffer(&panel);
        let mut fb = PixelWriter::new(&mut buf, panel).unwrap();
        fb.put_pixel(1, 2, PaletteColor::White);
        drop(fb);
        assert_eq!(buf[2 * 4 + 1], 15);
    }

    #[test]
    fn test_rgb565_encoding() {
        let panel = PanelGeometry::packed(4, 4, 16);
        let mut buf = buffer(&panel);
        let mut fb = PixelWriter::new(&mut buf, panel).unwrap();
        fb.put_pixel(0, 0, PaletteColor::White);
        fb.put_pixel(1, 0, PaletteColor::Black);
        fb.put_pixel(2, 0, PaletteColor::Gray8);
        drop(fb);
        assert_eq!(&buf[0..2], &[0xFF, 0xFF]);
        assert_eq!(&buf[2..4], &[0x00, 0x00]);
        // 0x88: r=17, g=34, b=17 -> 0x8C51
        assert_eq!(&buf[4..6], &[0x51, 0x8C]);
    }

    #[test]
    fn test_bgr24_and_bgra32() {
        let panel = PanelGeometry::packed(2, 2, 24);
        let mut buf = buffer(&panel);
        let mut fb = PixelWriter::new(&mut buf, panel).unwrap();
        fb.put_pixel(1, 1, PaletteColor::Gray3);
        drop(fb);
        assert_eq!(&buf[9..12], &[0x33, 0x33, 0x33]);

        let panel = PanelGeometry::packed(2, 2, 32);
        let mut buf = buffer(&panel);
        let mut fb = PixelWriter::new(&mut buf, panel).unwrap();
        fb.put_pixel(1, 0, PaletteColor::GrayE);
        drop(fb);
        assert_eq!(&buf[4..8], &[0xEE, 0xEE, 0xEE, 0xFF]);
    }

    #[test]
    fn test_stride_padding_respected() {
        let panel = PanelGeometry { xres: 3, yres: 2, bits_per_pixel: 16, stride: 8, smem_len: 16 };
        let mut buf = vec![0u8; 16];
        let mut fb = PixelWriter::new(&mut buf, panel).unwrap();
        fb.put_pixel(0, 1, PaletteColor::White);
        drop(fb);
        assert_eq!(&buf[8..10], &[0xFF, 0xFF]);
        assert!(buf[..8].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let panel = PanelGeometry::packed(4, 4, 32);
        let mut buf = buffer(&panel);
        let before = buf.clone();
        let mut fb = PixelWriter::new(&mut buf, panel).unwrap();
        fb.put_pixel(4, 0, PaletteColor::Black);
        fb.put_pixel(0, 4, PaletteColor::Black);
        fb.fill_rect(3, 3, 10, 10, PaletteColor::Black);
        assert!(fb.get_pixel(9, 9).is_none());
        drop(fb);
        assert_eq!(&buf[..60], &before[..60]);
        assert_eq!(&buf[60..64], &[0, 0, 0, 0xFF]);
    }

    #[test]
    fn test_short_buffer_never_overrun() {
        let panel = PanelGeometry::packed(4, 4, 16);
        let mut buf = vec![0u8; 7];
        let mut fb = PixelWriter::new(&mut buf, panel).unwrap();
        fb.fill_rect(0, 0, 4, 4, PaletteColor::White);
        drop(fb);
        assert_eq!(&buf[..6], &[0xFF; 6]);
        assert_eq!(buf[6], 0);
    }

    #[test]
    fn test_get_pixel_round_trip() {
        for bpp in [16, 24, 32] {
            let panel = PanelGeometry::packed(4, 4, bpp);
            let mut buf = buffer(&panel);
            let mut fb = PixelWriter::new(&mut buf, panel).unwrap();
            fb.put_pixel(2, 3, PaletteColor::White);
            fb.put_pixel(3, 3, PaletteColor::Black);
            assert_eq!(fb.get_pixel(2, 3), Some(Rgb888::WHITE));
            assert_eq!(fb.get_pixel(3, 3), Some(Rgb888::BLACK));
        }
    }

    #[test]
    fn test_clear_screen() {
        let panel = PanelGeometry::packed(4, 4, 8);
        let mut buf = buffer(&panel);
        PixelWriter::new(&mut buf, panel).unwrap().clear_screen(PaletteColor::White);
        assert!(buf.iter().all(|&b| b == 15));

        let panel = PanelGeometry::packed(4, 4, 32);
        let mut buf = buffer(&panel);
        PixelWriter::new(&mut buf, panel).unwrap().clear_screen(PaletteColor::White);
        assert!(buf.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_draw_target() {
        let panel = PanelGeometry::packed(8, 8, 24);
        let mut buf = vec![0xFF; panel.smem_len as usize];
        let mut fb = PixelWriter::new(&mut buf, panel).unwrap();
        Rectangle::new(Point::new(-2, -2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Gray4::BLACK))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(fb.get_pixel(1, 1), Some(Rgb888::BLACK));
        assert_eq!(fb.get_pixel(2, 2), Some(Rgb888::WHITE));
    }
}
