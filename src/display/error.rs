/*
 *  display/error.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Unified error type for the framebuffer and refresh pipeline
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

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong talking to the framebuffer device.
///
/// Layout problems (bad row/column, overlong text, unknown code points) are
/// never errors: they are clamped, truncated or replaced by the fallback
/// glyph. What ends up here is a genuine device failure, and the library
/// hands it back to the caller instead of exiting.
#[derive(Debug, Error)]
pub enum InkError {
    /// The framebuffer node could not be opened read-write
    #[error("cannot open framebuffer device {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A screeninfo or mxcfb ioctl was rejected by the driver
    #[error("{request} failed: {source}")]
    Ioctl {
        request: &'static str,
        #[source]
        source: io::Error,
    },

    /// mmap of the framebuffer memory failed
    #[error("cannot map framebuffer memory: {0}")]
    Map(#[source] io::Error),

    /// A print or refresh was attempted before the panel geometry was read
    #[error("framebuffer session is not initialized")]
    NotInitialized,

    /// Pixel access was attempted without a live mapping
    #[error("framebuffer memory is not mapped")]
    NotMapped,

    /// The panel reports a pixel depth we have no encoder for
    #[error("unsupported framebuffer depth: {0} bits per pixel")]
    UnsupportedDepth(u32),

    /// The update was submitted but its completion could not be confirmed
    #[error("waiting for update {marker} failed: {source}")]
    Refresh {
        marker: u32,
        #[source]
        source: io::Error,
    },
}

impl InkError {
    /// Wrap the last OS error for a failed ioctl.
    pub fn last_os_ioctl(request: &'static str) -> Self {
        InkError::Ioctl { request, source: io::Error::last_os_error() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_names_the_device() {
        let err = InkError::Open {
            path: PathBuf::from("/dev/fb7"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/dev/fb7"));
    }

    #[test]
    fn test_ioctl_error_keeps_source() {
        use std::error::Error;
        let err = InkError::Ioctl {
            request: "MXCFB_SEND_UPDATE",
            source: io::Error::from_raw_os_error(libc::EINVAL),
        };
        assert!(err.to_string().starts_with("MXCFB_SEND_UPDATE failed"));
        assert!(err.source().is_some());
    }
}
