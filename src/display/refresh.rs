/*
 *  display/refresh.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Refresh requests, waveform selection and completion waiting
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

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::display::error::InkError;
use crate::display::geometry::Region;
use crate::display::traits::EinkController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Redraw only the changed pixels of the region
    Partial,
    /// Drive every pixel of the region, flashing it
    Full,
}

impl UpdateMode {
    pub fn code(self) -> u32 {
        match self {
            UpdateMode::Partial => UPDATE_MODE_PARTIAL,
            UpdateMode::Full => UPDATE_MODE_FULL,
        }
    }
}

/// EPDC waveforms we know how to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveformMode {
    Init,
    Du,
    Gc16,
    Gc4,
    A2,
    Auto,
}

impl WaveformMode {
    pub fn code(self) -> u32 {
        match self {
            WaveformMode::Init => WAVEFORM_MODE_INIT,
            WaveformMode::Du => WAVEFORM_MODE_DU,
            WaveformMode::Gc16 => WAVEFORM_MODE_GC16,
            WaveformMode::Gc4 => WAVEFORM_MODE_GC4,
            WaveformMode::A2 => WAVEFORM_MODE_A2,
            WaveformMode::Auto => WAVEFORM_MODE_AUTO,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WaveformMode::Init => "init",
            WaveformMode::Du => "du",
            WaveformMode::Gc16 => "gc16",
            WaveformMode::Gc4 => "gc4",
            WaveformMode::A2 => "a2",
            WaveformMode::Auto => "auto",
        }
    }
}

impl fmt::Display for WaveformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveformMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "init" => Ok(WaveformMode::Init),
            "du" => Ok(WaveformMode::Du),
            "gc16" => Ok(WaveformMode::Gc16),
            "gc4" => Ok(WaveformMode::Gc4),
            "a2" => Ok(WaveformMode::A2),
            "auto" => Ok(WaveformMode::Auto),
            other => Err(format!(
                "unknown waveform '{}', expected one of init, du, gc16, gc4, a2, auto",
                other
            )),
        }
    }
}

/// Everything the driver needs to schedule one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateRequest {
    pub region: Region,
    pub waveform: WaveformMode,
    pub mode: UpdateMode,
    pub marker: u32,
    pub temperature: i32,
    pub flags: u32,
}

/// Marker used to tag our updates: the pid, never zero.
pub fn update_marker() -> u32 {
    match std::process::id() {
        0 => FALLBACK_UPDATE_MARKER,
        pid => pid,
    }
}

/// Builds and submits refresh requests against an [`EinkController`].
///
/// Non-flashing updates are partial with the automatic waveform, flashing
/// updates are full GC16 and wait for the panel to confirm. Either
/// waveform can be swapped out.
pub struct RefreshController<C> {
    controller: C,
    marker: u32,
    waveform: WaveformMode,
    flash_waveform: WaveformMode,
}

impl<C: EinkController> RefreshController<C> {
    pub fn new(controller: C) -> Self {
        Self {
            controller,
            marker: update_marker(),
            waveform: WaveformMode::Auto,
            flash_waveform: WaveformMode::Gc16,
        }
    }

    pub fn with_waveforms(mut self, waveform: WaveformMode, flash_waveform: WaveformMode) -> Self {
        self.waveform = waveform;
        self.flash_waveform = flash_waveform;
        self
    }

    pub fn marker(&self) -> u32 {
        self.marker
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn into_inner(self) -> C {
        self.controller
    }

    pub fn request_for(&self, region: Region, flashing: bool, waveform: Option<WaveformMode>) -> UpdateRequest {
        let (mode, default_waveform) = if flashing {
            (UpdateMode::Full, self.flash_waveform)
        } else {
            (UpdateMode::Partial, self.waveform)
        };
        UpdateRequest {
            region,
            waveform: waveform.unwrap_or(default_waveform),
            mode,
            marker: self.marker,
            temperature: TEMP_USE_AMBIENT,
            flags: 0,
        }
    }

    /// Push `region` to the panel.
    ///
    /// A rejected submission is an error. A flashing update that cannot be
    /// confirmed is only logged, the pixels are already on their way.
    pub fn refresh(
        &mut self,
        region: Region,
        flashing: bool,
        waveform: Option<WaveformMode>,
    ) -> Result<UpdateRequest, InkError> {
        let request = self.request_for(region, flashing, waveform);
        debug!(
            "refresh {:?} mode={:?} waveform={} marker={}",
            request.region, request.mode, request.waveform, request.marker
        );
        self.controller.send_update(&request)?;

        if flashing {
            if let Err(e) = self.controller.wait_for_update_complete(request.marker) {
                warn!("{}", e);
            }
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::drivers::mock::RecordingController;

    #[test]
    fn test_marker_is_never_zero() {
        assert_ne!(update_marker(), 0);
        assert_eq!(FALLBACK_UPDATE_MARKER, 362);
    }

    #[test]
    fn test_partial_auto_by_default() {
        let mut rc = RefreshController::new(RecordingController::new());
        let region = Region::new(0, 0, 80, 16);
        let req = rc.refresh(region, false, None).unwrap();
        assert_eq!(req.mode, UpdateMode::Partial);
        assert_eq!(req.waveform, WaveformMode::Auto);
        assert_eq!(req.temperature, TEMP_USE_AMBIENT);
        assert_eq!(req.marker, update_marker());

        let state = rc.controller().state();
        assert_eq!(state.updates, vec![req]);
        assert!(state.waited.is_empty());
    }

    #[test]
    fn test_flash_is_full_gc16_and_waits() {
        let mut rc = RefreshController::new(RecordingController::new());
        let req = rc.refresh(Region::new(0, 0, 10, 10), true, None).unwrap();
        assert_eq!(req.mode, UpdateMode::Full);
        assert_eq!(req.waveform, WaveformMode::Gc16);
        assert_eq!(rc.controller().state().waited, vec![req.marker]);
    }

    #[test]
    fn test_waveform_override() {
        let mut rc = RefreshController::new(RecordingController::new())
            .with_waveforms(WaveformMode::Du, WaveformMode::Gc4);
        assert_eq!(rc.refresh(Region::new(0, 0, 1, 1), false, None).unwrap().waveform, WaveformMode::Du);
        assert_eq!(rc.refresh(Region::new(0, 0, 1, 1), true, None).unwrap().waveform, WaveformMode::Gc4);
        let req = rc.refresh(Region::new(0, 0, 1, 1), true, Some(WaveformMode::A2)).unwrap();
        assert_eq!(req.waveform, WaveformMode::A2);
        assert_eq!(req.waveform.code(), WAVEFORM_MODE_A2);
    }

    #[test]
    fn test_send_failure_is_error() {
        let mock = RecordingController::new();
        mock.simulate_send_failure(true);
        let mut rc = RefreshController::new(mock);
        assert!(matches!(
            rc.refresh(Region::new(0, 0, 1, 1), false, None),
            Err(InkError::Ioctl { .. })
        ));
    }

    #[test]
    fn test_wait_failure_is_not_fatal() {
        let mock = RecordingController::new();
        mock.simulate_wait_failure(true);
        let mut rc = RefreshController::new(mock);
        assert!(rc.refresh(Region::new(0, 0, 1, 1), true, None).is_ok());
        assert_eq!(rc.controller().state().updates.len(), 1);
    }

    #[test]
    fn test_waveform_parse() {
        assert_eq!("GC16".parse::<WaveformMode>(), Ok(WaveformMode::Gc16));
        assert_eq!("auto".parse::<WaveformMode>(), Ok(WaveformMode::Auto));
        assert!("sparkle".parse::<WaveformMode>().is_err());
        assert_eq!(WaveformMode::Auto.code(), 257);
    }
}
