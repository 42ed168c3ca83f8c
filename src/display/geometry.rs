/*
 *  display/geometry.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Panel, character grid and refresh region geometry
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

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::constants::{GLYPH_HEIGHT, GLYPH_WIDTH, SCALE_1_MAX_YRES, SCALE_2_MAX_YRES};

/// What the kernel told us about the panel, fixed until re-initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    pub xres: u32,
    pub yres: u32,
    pub bits_per_pixel: u32,
    /// bytes per scanline, may be wider than xres * bytes per pixel
    pub stride: u32,
    /// length of the mappable framebuffer memory in bytes
    pub smem_len: u32,
}

impl PanelGeometry {
    pub fn bytes_per_pixel(&self) -> u32 {
        self.bits_per_pixel / 8
    }

    /// Bytes covered by the visible area.
    pub fn visible_len(&self) -> usize {
        self.stride as usize * self.yres as usize
    }

    /// Geometry of a tightly packed buffer, handy for off-screen rendering.
    pub fn packed(xres: u32, yres: u32, bits_per_pixel: u32) -> Self {
        let stride = xres * (bits_per_pixel / 8);
        Self { xres, yres, bits_per_pixel, stride, smem_len: stride * yres }
    }
}

/// Glyph magnification for a panel height: 1 up to 800 px, 2 up to 1024 px,
/// 4 beyond that.
pub fn scale_factor_for(yres: u32) -> u32 {
    if yres <= SCALE_1_MAX_YRES {
        1
    } else if yres <= SCALE_2_MAX_YRES {
        2
    } else {
        4
    }
}

/// The character cell grid laid over a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub scale: u32,
    pub font_w: u32,
    pub font_h: u32,
    pub max_cols: u32,
    pub max_rows: u32,
}

impl GridGeometry {
    pub fn for_panel(panel: &PanelGeometry) -> Self {
        let scale = scale_factor_for(panel.yres);
        let font_w = GLYPH_WIDTH * scale;
        let font_h = GLYPH_HEIGHT * scale;
        Self {
            scale,
            font_w,
            font_h,
            max_cols: panel.xres / font_w,
            max_rows: panel.yres / font_h,
        }
    }
}

/// A pixel rectangle on the panel, as handed to the refresh path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub top: u32,
    pub left: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(top: u32, left: u32, width: u32, height: u32) -> Self {
        Self { top, left, width, height }
    }

    /// The whole visible panel.
    pub fn full(panel: &PanelGeometry) -> Self {
        Self::new(0, 0, panel.xres, panel.yres)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn right(&self) -> u32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    /// Smallest region covering both. An empty side contributes nothing.
    pub fn union(&self, other: &Region) -> Region {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        let top = self.top.min(other.top);
        let left = self.left.min(other.left);
        Region {
            top,
            left,
            width: self.right().max(other.right()) - left,
            height: self.bottom().max(other.bottom()) - top,
        }
    }

    /// Clip to the visible panel.
    pub fn clamp_to(&self, panel: &PanelGeometry) -> Region {
        let left = self.left.min(panel.xres);
        let top = self.top.min(panel.yres);
        Region {
            top,
            left,
            width: self.right().min(panel.xres) - left,
            height: self.bottom().min(panel.yres) - top,
        }
    }
}

impl From<Region> for Rectangle {
    fn from(r: Region) -> Self {
        Rectangle::new(
            Point::new(r.left as i32, r.top as i32),
            Size::new(r.width, r.height),
        )
    }
}

impl From<Rectangle> for Region {
    fn from(r: Rectangle) -> Self {
        // anything left of or above the origin is cut off
        let left = r.top_left.x.max(0) as u32;
        let top = r.top_left.y.max(0) as u32;
        let right = (r.top_left.x + r.size.width as i32).max(0) as u32;
        let bottom = (r.top_left.y + r.size.height as i32).max(0) as u32;
        Region {
            top,
            left,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_len_follows_stride() {
        let packed = PanelGeometry::packed(758, 1024, 16);
        assert_eq!(packed.visible_len(), 758 * 2 * 1024);
        let padded = PanelGeometry { stride: 1536, ..packed };
        assert_eq!(padded.visible_len(), 1536 * 1024);
    }

    #[test]
    fn test_scale_factor_tiers() {
        assert_eq!(scale_factor_for(600), 1);
        assert_eq!(scale_factor_for(800), 1);
        assert_eq!(scale_factor_for(801), 2);
        assert_eq!(scale_factor_for(1024), 2);
        assert_eq!(scale_factor_for(1448), 4);
    }

    #[test]
    fn test_scale_factor_monotonic() {
        let mut last = 0;
        for yres in (0..4000).step_by(7) {
            let scale = scale_factor_for(yres);
            assert!(scale >= last, "scale dropped at {}", yres);
            last = scale;
            let grid = GridGeometry::for_panel(&PanelGeometry::packed(600, yres, 8));
            assert_eq!(grid.font_w % 8, 0);
            assert_eq!(grid.font_h % 8, 0);
            assert!(grid.font_w > 0 && grid.font_h > 0);
        }
    }

    #[test]
    fn test_carta_grid() {
        let panel = PanelGeometry::packed(758, 1024, 16);
        let grid = GridGeometry::for_panel(&panel);
        assert_eq!((grid.font_w, grid.font_h), (16, 16));
        assert_eq!((grid.max_cols, grid.max_rows), (47, 64));
    }

    #[test]
    fn test_union() {
        let a = Region::new(0, 0, 80, 16);
        let b = Region::new(16, 32, 16, 16);
        assert_eq!(a.union(&b), Region::new(0, 0, 80, 32));
        assert_eq!(a.union(&Region::default()), a);
        assert_eq!(Region::default().union(&b), b);
    }

    #[test]
    fn test_clamp_to_panel() {
        let panel = PanelGeometry::packed(100, 50, 8);
        let r = Region::new(40, 90, 30, 30).clamp_to(&panel);
        assert_eq!(r, Region::new(40, 90, 10, 10));
    }

    #[test]
    fn test_rectangle_conversion() {
        let r = Region::new(16, 32, 80, 16);
        let rect: Rectangle = r.into();
        assert_eq!(rect.top_left, Point::new(32, 16));
        assert_eq!(Region::from(rect), r);

        let offscreen = Rectangle::new(Point::new(-10, -5), Size::new(20, 10));
        assert_eq!(Region::from(offscreen), Region::new(0, 0, 10, 5));
    }
}
