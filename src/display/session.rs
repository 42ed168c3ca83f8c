/*
 *  display/session.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Framebuffer device lifecycle: open, initialize, map, print, teardown
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

use log::{debug, info, warn};
use memmap2::{MmapMut, MmapOptions};
use std::fs::{File, OpenOptions};
use std::os::fd::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_FB_DEVICE;
use crate::display::drivers::mxcfb::{read_panel_geometry, MxcfbController};
use crate::display::error::InkError;
use crate::display::framebuffer::{PixelFormat, PixelWriter};
use crate::display::geometry::{GridGeometry, PanelGeometry, Region};
use crate::display::refresh::{RefreshController, UpdateRequest, WaveformMode};
use crate::display::traits::EinkController;
use crate::text::{print_text, PrintOutcome, RenderRequest};

#[derive(Debug)]
enum Device {
    /// opened by us, closed when dropped
    Owned(File),
    /// lent by the caller, never closed here
    Borrowed(RawFd),
}

impl Device {
    fn raw_fd(&self) -> RawFd {
        match self {
            Device::Owned(file) => file.as_raw_fd(),
            Device::Borrowed(fd) => *fd,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    /// descriptor valid, geometry unknown
    Opened,
    /// geometry cached
    Initialized,
    /// framebuffer memory mapped
    Mapped,
}

/// Owns the framebuffer descriptor, the mapping and the cached geometry.
///
/// Every print goes through a `&mut FramebufferSession`, so there is one
/// writer per session by construction. Sessions in different processes
/// racing on the same panel are not coordinated.
///
/// A session that was never opened, or initialized without keeping the
/// descriptor, opens the device for a single print and releases it again
/// before returning, on success and failure alike.
#[derive(Debug)]
pub struct FramebufferSession {
    path: PathBuf,
    device: Option<Device>,
    panel: Option<PanelGeometry>,
    grid: Option<GridGeometry>,
    map: Option<MmapMut>,
    waveform: WaveformMode,
    flash_waveform: WaveformMode,
}

impl Default for FramebufferSession {
    fn default() -> Self {
        Self::new(DEFAULT_FB_DEVICE)
    }
}

impl FramebufferSession {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            device: None,
            panel: None,
            grid: None,
            map: None,
            waveform: WaveformMode::Auto,
            flash_waveform: WaveformMode::Gc16,
        }
    }

    /// Session over a descriptor the caller already opened and keeps
    /// ownership of.
    pub fn from_raw_fd(fd: RawFd) -> Self {
        let mut session = Self::new(format!("fd:{}", fd));
        session.device = Some(Device::Borrowed(fd));
        session
    }

    /// Waveforms used when a request does not name one.
    pub fn with_waveforms(mut self, waveform: WaveformMode, flash_waveform: WaveformMode) -> Self {
        self.waveform = waveform;
        self.flash_waveform = flash_waveform;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> SessionState {
        if self.map.is_some() {
            SessionState::Mapped
        } else if self.panel.is_some() {
            SessionState::Initialized
        } else if self.device.is_some() {
            SessionState::Opened
        } else {
            SessionState::Closed
        }
    }

    pub fn panel(&self) -> Option<&PanelGeometry> {
        self.panel.as_ref()
    }

    pub fn grid(&self) -> Option<&GridGeometry> {
        self.grid.as_ref()
    }

    pub fn raw_fd(&self) -> Option<RawFd> {
        self.device.as_ref().map(Device::raw_fd)
    }

    /// Open the device read-write. Reuses the descriptor if one is open.
    pub fn open(&mut self) -> Result<RawFd, InkError> {
        if let Some(device) = &self.device {
            return Ok(device.raw_fd());
        }
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(|source| InkError::Open { path: self.path.clone(), source })?;
        let fd = file.as_raw_fd();
        info!("opened {} (fd {})", self.path.display(), fd);
        self.device = Some(Device::Owned(file));
        Ok(fd)
    }

    /// Read the panel geometry and derive the cell grid.
    ///
    /// Opens the device if needed. With `keep_open` false the descriptor is
    /// let go afterwards and later prints open it on demand. A descriptor
    /// from [`FramebufferSession::from_raw_fd`] is always kept.
    pub fn initialize(&mut self, keep_open: bool) -> Result<(), InkError> {
        let fd = self.open()?;
        let result = read_panel_geometry(fd).and_then(|panel| {
            PixelFormat::from_depth(panel.bits_per_pixel)?;
            Ok(panel)
        });
        let panel = match result {
            Ok(panel) => panel,
            Err(e) => {
                self.release();
                return Err(e);
            }
        };

        let grid = GridGeometry::for_panel(&panel);
        info!(
            "panel {}x{} {}bpp, stride {}, {} bytes",
            panel.xres, panel.yres, panel.bits_per_pixel, panel.stride, panel.smem_len
        );
        info!(
            "font {}x{} (scale {}), grid {} columns x {} rows",
            grid.font_w, grid.font_h, grid.scale, grid.max_cols, grid.max_rows
        );
        if (panel.smem_len as usize) < panel.visible_len() {
            warn!(
                "framebuffer memory ({} bytes) is shorter than the visible area ({} bytes), bottom rows are not drawn",
                panel.smem_len,
                panel.visible_len()
            );
        }

        // geometry changed, an old mapping may be the wrong size
        self.map = None;
        self.panel = Some(panel);
        self.grid = Some(grid);

        if !keep_open {
            self.release();
        }
        Ok(())
    }

    /// Map the framebuffer memory, once. Later calls are no-ops.
    pub fn ensure_mapped(&mut self) -> Result<(), InkError> {
        if self.map.is_some() {
            return Ok(());
        }
        let panel = self.panel.ok_or(InkError::NotInitialized)?;
        let fd = self.open()?;
        // SAFETY: the mapping is shared with the display controller and is
        // only written through this session
        let map = unsafe { MmapOptions::new().len(panel.smem_len as usize).map_mut(fd) }
            .map_err(InkError::Map)?;
        debug!("mapped {} bytes of framebuffer memory", panel.smem_len);
        self.map = Some(map);
        Ok(())
    }

    pub fn unmap(&mut self) {
        if self.map.take().is_some() {
            debug!("unmapped framebuffer memory");
        }
    }

    /// Unmap and close a descriptor we opened, keeping the geometry. A
    /// borrowed descriptor stays attached.
    fn release(&mut self) {
        self.unmap();
        match self.device.take() {
            Some(Device::Owned(file)) => {
                debug!("closing {} (fd {})", self.path.display(), file.as_raw_fd());
            }
            other => self.device = other,
        }
    }

    /// Full teardown back to [`SessionState::Closed`]. The only place a
    /// borrowed descriptor is let go, and it is never closed.
    pub fn close(&mut self) {
        self.release();
        if let Some(Device::Borrowed(fd)) = self.device.take() {
            debug!("detaching from caller's fd {}", fd);
        }
        self.panel = None;
        self.grid = None;
    }

    /// Pixel access to the mapped framebuffer, for read-back or drawing
    /// with embedded-graphics before a refresh.
    pub fn framebuffer(&mut self) -> Result<PixelWriter<'_>, InkError> {
        let panel = self.panel.ok_or(InkError::NotInitialized)?;
        let map = self.map.as_mut().ok_or(InkError::NotMapped)?;
        PixelWriter::new(&mut map[..], panel)
    }

    pub fn refresher<C: EinkController>(&self, controller: C) -> RefreshController<C> {
        RefreshController::new(controller).with_waveforms(self.waveform, self.flash_waveform)
    }

    // run `f` with an open descriptor, closing it afterwards if we had to open it
    fn with_device<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, InkError>) -> Result<T, InkError> {
        let transient = self.device.is_none();
        if transient {
            self.open()?;
        }
        let result = f(self);
        if transient {
            self.release();
        }
        result
    }

    /// Print `text` and refresh what was painted.
    pub fn print(&mut self, text: &str, req: &RenderRequest) -> Result<PrintOutcome, InkError> {
        if self.panel.is_none() {
            return Err(InkError::NotInitialized);
        }
        self.with_device(|session| {
            session.ensure_mapped()?;
            let fd = session.raw_fd().ok_or(InkError::NotInitialized)?;
            let mut refresher = session.refresher(MxcfbController::new(fd));
            session.print_with(text, req, &mut refresher)
        })
    }

    /// Print through a caller supplied refresh controller. The session must
    /// already be mapped.
    pub fn print_with<C: EinkController>(
        &mut self,
        text: &str,
        req: &RenderRequest,
        refresher: &mut RefreshController<C>,
    ) -> Result<PrintOutcome, InkError> {
        let panel = self.panel.ok_or(InkError::NotInitialized)?;
        let map = self.map.as_mut().ok_or(InkError::NotMapped)?;
        print_text(&mut map[..], &panel, text, req, refresher)
    }

    /// Refresh `region` (the whole panel if `None`) without painting.
    pub fn refresh_only(&mut self, region: Option<Region>, flashing: bool) -> Result<UpdateRequest, InkError> {
        let panel = self.panel.ok_or(InkError::NotInitialized)?;
        let region = region.unwrap_or_else(|| Region::full(&panel)).clamp_to(&panel);
        self.with_device(|session| {
            let fd = session.raw_fd().ok_or(InkError::NotInitialized)?;
            session.refresher(MxcfbController::new(fd)).refresh(region, flashing, None)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn scratch_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("inkprint-{}-{}", name, std::process::id()));
        std::fs::write(&path, [0u8; 64]).unwrap();
        path
    }

    #[test]
    fn test_new_session_is_closed() {
        let session = FramebufferSession::default();
        assert_eq!(session.state(), SessionState::Closed);
        assert_eq!(session.path(), Path::new("/dev/fb0"));
        assert!(session.panel().is_none());
    }

    #[test]
    fn test_open_missing_device() {
        let mut session = FramebufferSession::new("/nonexistent/fb9");
        assert!(matches!(session.open(), Err(InkError::Open { .. })));
        assert_eq!(session.state(), SessionState::Closed);
    }

    #[test]
    fn test_print_needs_geometry() {
        let mut session = FramebufferSession::new("/nonexistent/fb9");
        assert!(matches!(
            session.print("hi", &RenderRequest::default()),
            Err(InkError::NotInitialized)
        ));
        assert!(matches!(session.refresh_only(None, false), Err(InkError::NotInitialized)));
        assert!(matches!(session.ensure_mapped(), Err(InkError::NotInitialized)));
    }

    #[test]
    fn test_open_is_reentrant() {
        let path = scratch_file("reopen");
        let mut session = FramebufferSession::new(&path);
        let a = session.open().unwrap();
        let b = session.open().unwrap();
        assert_eq!(a, b);
        assert_eq!(session.state(), SessionState::Opened);
        session.close();
        assert_eq!(session.state(), SessionState::Closed);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_initialize_rejects_non_framebuffer() {
        let path = scratch_file("notfb");
        let mut session = FramebufferSession::new(&path);
        assert!(matches!(session.initialize(true), Err(InkError::Ioctl { .. })));
        // the descriptor it opened is released again
        assert_eq!(session.state(), SessionState::Closed);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_borrowed_fd_survives_close() {
        let path = scratch_file("borrowed");
        let mut file = OpenOptions::new().read(true).write(true).open(&path).unwrap();
        let mut session = FramebufferSession::from_raw_fd(file.as_raw_fd());
        assert_eq!(session.state(), SessionState::Opened);
        assert_eq!(session.raw_fd(), Some(file.as_raw_fd()));
        session.close();
        drop(session);
        assert!(file.write_all(b"still open").is_ok());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_borrowed_fd_kept_after_failed_initialize() {
        let path = scratch_file("borrowed-init");
        let file = OpenOptions::new().read(true).write(true).open(&path).unwrap();
        let fd = file.as_raw_fd();
        let mut session = FramebufferSession::from_raw_fd(fd);
        // a regular file answers the screeninfo ioctl with ENOTTY
        assert!(matches!(session.initialize(false), Err(InkError::Ioctl { .. })));
        assert_eq!(session.raw_fd(), Some(fd));
        assert_eq!(session.state(), SessionState::Opened);
        // still the caller's descriptor, no attempt to open a path
        assert_eq!(session.open().unwrap(), fd);
        session.close();
        assert_eq!(session.raw_fd(), None);
        assert_eq!(session.state(), SessionState::Closed);
        drop(file);
        std::fs::remove_file(path).ok();
    }
}
