/*
 *  display/drivers/mxcfb.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  fbdev screeninfo and i.MX EPDC update ioctls
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

use libc::c_ulong;
use log::debug;
use std::io;
use std::os::fd::RawFd;

use crate::display::error::InkError;
use crate::display::geometry::{PanelGeometry, Region};
use crate::display::refresh::UpdateRequest;
use crate::display::traits::EinkController;

pub const FBIOGET_VSCREENINFO: u32 = 0x4600;
pub const FBIOGET_FSCREENINFO: u32 = 0x4602;
pub const MXCFB_SEND_UPDATE: u32 = 0x4040_462E;
pub const MXCFB_WAIT_FOR_UPDATE_COMPLETE: u32 = 0x4004_462F;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FbBitfield {
    pub offset: u32,
    pub length: u32,
    pub msb_right: u32,
}

/// Mirror of the kernel's `fb_var_screeninfo`
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct VarScreenInfo {
    pub xres: u32,
    pub yres: u32,
    pub xres_virtual: u32,
    pub yres_virtual: u32,
    pub xoffset: u32,
    pub yoffset: u32,
    pub bits_per_pixel: u32,
    pub grayscale: u32,
    pub red: FbBitfield,
    pub green: FbBitfield,
    pub blue: FbBitfield,
    pub transp: FbBitfield,
    pub nonstd: u32,
    pub activate: u32,
    pub height: u32,
    pub width: u32,
    pub accel_flags: u32,
    pub pixclock: u32,
    pub left_margin: u32,
    pub right_margin: u32,
    pub upper_margin: u32,
    pub lower_margin: u32,
    pub hsync_len: u32,
    pub vsync_len: u32,
    pub sync: u32,
    pub vmode: u32,
    pub rotate: u32,
    pub colorspace: u32,
    pub reserved: [u32; 4],
}

/// Mirror of the kernel's `fb_fix_screeninfo`
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FixScreenInfo {
    pub id: [u8; 16],
    pub smem_start: c_ulong,
    pub smem_len: u32,
    pub type_: u32,
    pub type_aux: u32,
    pub visual: u32,
    pub xpanstep: u16,
    pub ypanstep: u16,
    pub ywrapstep: u16,
    pub line_length: u32,
    pub mmio_start: c_ulong,
    pub mmio_len: u32,
    pub accel: u32,
    pub capabilities: u16,
    pub reserved: [u16; 2],
}

impl FixScreenInfo {
    /// Driver name, up to the first NUL
    pub fn id(&self) -> String {
        let end = self.id.iter().position(|&b| b == 0).unwrap_or(self.id.len());
        String::from_utf8_lossy(&self.id[..end]).into_owned()
    }
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MxcfbRect {
    pub top: u32,
    pub left: u32,
    pub width: u32,
    pub height: u32,
}

impl From<Region> for MxcfbRect {
    fn from(r: Region) -> Self {
        Self { top: r.top, left: r.left, width: r.width, height: r.height }
    }
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct MxcfbAltBufferData {
    pub phys_addr: u32,
    pub width: u32,
    pub height: u32,
    pub alt_update_region: MxcfbRect,
}

/// Mirror of `mxcfb_update_data`
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct MxcfbUpdateData {
    pub update_region: MxcfbRect,
    pub waveform_mode: u32,
    pub update_mode: u32,
    pub update_marker: u32,
    pub temp: i32,
    pub flags: u32,
    pub alt_buffer_data: MxcfbAltBufferData,
}

impl From<&UpdateRequest> for MxcfbUpdateData {
    fn from(req: &UpdateRequest) -> Self {
        Self {
            update_region: req.region.into(),
            waveform_mode: req.waveform.code(),
            update_mode: req.mode.code(),
            update_marker: req.marker,
            temp: req.temperature,
            flags: req.flags,
            alt_buffer_data: MxcfbAltBufferData::default(),
        }
    }
}

pub fn read_var_screeninfo(fd: RawFd) -> Result<VarScreenInfo, InkError> {
    let mut info = VarScreenInfo::default();
    // SAFETY: the kernel fills exactly one fb_var_screeninfo
    let rc = unsafe { libc::ioctl(fd, FBIOGET_VSCREENINFO as _, &mut info as *mut VarScreenInfo) };
    if rc < 0 {
        return Err(InkError::last_os_ioctl("FBIOGET_VSCREENINFO"));
    }
    Ok(info)
}

pub fn read_fix_screeninfo(fd: RawFd) -> Result<FixScreenInfo, InkError> {
    let mut info = FixScreenInfo::default();
    // SAFETY: the kernel fills exactly one fb_fix_screeninfo
    let rc = unsafe { libc::ioctl(fd, FBIOGET_FSCREENINFO as _, &mut info as *mut FixScreenInfo) };
    if rc < 0 {
        return Err(InkError::last_os_ioctl("FBIOGET_FSCREENINFO"));
    }
    Ok(info)
}

/// Query both screeninfo blocks and keep what we need.
pub fn read_panel_geometry(fd: RawFd) -> Result<PanelGeometry, InkError> {
    let var = read_var_screeninfo(fd)?;
    let fix = read_fix_screeninfo(fd)?;
    debug!(
        "{}: {}x{} ({}x{} virtual) {}bpp, line_length {}, smem_len {}",
        fix.id(),
        var.xres,
        var.yres,
        var.xres_virtual,
        var.yres_virtual,
        var.bits_per_pixel,
        fix.line_length,
        fix.smem_len
    );
    Ok(PanelGeometry {
        xres: var.xres,
        yres: var.yres,
        bits_per_pixel: var.bits_per_pixel,
        stride: fix.line_length,
        smem_len: fix.smem_len,
    })
}

/// EPDC refresh through ioctls on an open framebuffer descriptor.
///
/// Does not own the descriptor; the session that lent it keeps it alive.
#[derive(Debug, Clone, Copy)]
pub struct MxcfbController {
    fd: RawFd,
}

impl MxcfbController {
    pub fn new(fd: RawFd) -> Self {
        Self { fd }
    }
}

impl EinkController for MxcfbController {
    fn send_update(&mut self, request: &UpdateRequest) -> Result<(), InkError> {
        let data = MxcfbUpdateData::from(request);
        // SAFETY: MXCFB_SEND_UPDATE reads one mxcfb_update_data
        let rc = unsafe { libc::ioctl(self.fd, MXCFB_SEND_UPDATE as _, &data as *const MxcfbUpdateData) };
        if rc < 0 {
            return Err(InkError::last_os_ioctl("MXCFB_SEND_UPDATE"));
        }
        Ok(())
    }

    fn wait_for_update_complete(&mut self, marker: u32) -> Result<(), InkError> {
        let mut marker_arg = marker;
        // SAFETY: the ioctl takes a pointer to a single u32 marker
        let rc = unsafe { libc::ioctl(self.fd, MXCFB_WAIT_FOR_UPDATE_COMPLETE as _, &mut marker_arg as *mut u32) };
        if rc < 0 {
            return Err(InkError::Refresh { marker, source: io::Error::last_os_error() });
        }
        Ok(())
    }
}
