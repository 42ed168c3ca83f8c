/*
 *  display/drivers/mock.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Recording refresh controller for tests and dry runs
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
use std::sync::{Arc, Mutex, MutexGuard};

use crate::display::error::InkError;
use crate::display::refresh::UpdateRequest;
use crate::display::traits::EinkController;

/// Refresh controller that talks to no hardware.
///
/// Every submitted update and every wait is recorded so tests can check
/// what would have reached the EPDC. Clones share the same state, keep
/// one to inspect after handing the other to a session.
#[derive(Debug, Clone, Default)]
pub struct RecordingController {
    state: Arc<Mutex<RecordingState>>,
}

/// What the recorder has seen so far
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingState {
    /// Updates in submission order
    pub updates: Vec<UpdateRequest>,

    /// Markers waited on, in order
    pub waited: Vec<u32>,

    /// Reject the next submissions with EIO
    pub simulate_send_failure: bool,

    /// Fail completion waits with ETIMEDOUT
    pub simulate_wait_failure: bool,
}

impl RecordingController {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RecordingState> {
        // a panicking test thread must not hide what was recorded
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of the recorded state
    pub fn state(&self) -> RecordingState {
        self.lock().clone()
    }

    pub fn last_update(&self) -> Option<UpdateRequest> {
        self.lock().updates.last().copied()
    }

    pub fn simulate_send_failure(&self, fail: bool) {
        self.lock().simulate_send_failure = fail;
    }

    pub fn simulate_wait_failure(&self, fail: bool) {
        self.lock().simulate_wait_failure = fail;
    }

    pub fn reset(&self) {
        *self.lock() = RecordingState::default();
    }
}

impl EinkController for RecordingController {
    fn send_update(&mut self, request: &UpdateRequest) -> Result<(), InkError> {
        let mut state = self.lock();
        if state.simulate_send_failure {
            return Err(InkError::Ioctl {
                request: "MXCFB_SEND_UPDATE",
                source: io::Error::from_raw_os_error(libc::EIO),
            });
        }
        state.updates.push(*request);
        Ok(())
    }

    fn wait_for_update_complete(&mut self, marker: u32) -> Result<(), InkError> {
        let mut state = self.lock();
        if state.simulate_wait_failure {
            return Err(InkError::Refresh {
                marker,
                source: io::Error::from_raw_os_error(libc::ETIMEDOUT),
            });
        }
        state.waited.push(marker);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::geometry::Region;
    use crate::display::refresh::{UpdateMode, WaveformMode};

    fn request() -> UpdateRequest {
        UpdateRequest {
            region: Region::new(0, 0, 8, 8),
            waveform: WaveformMode::Auto,
            mode: UpdateMode::Partial,
            marker: 42,
            temperature: 0x1000,
            flags: 0,
        }
    }

    #[test]
    fn test_clones_share_state() {
        let probe = RecordingController::new();
        let mut ctl = probe.clone();
        ctl.send_update(&request()).unwrap();
        ctl.wait_for_update_complete(42).unwrap();
        assert_eq!(probe.state().updates.len(), 1);
        assert_eq!(probe.state().waited, vec![42]);
        assert_eq!(probe.last_update(), Some(request()));
    }

    #[test]
    fn test_simulated_failures() {
        let mut ctl = RecordingController::new();
        ctl.simulate_send_failure(true);
        assert!(ctl.send_update(&request()).is_err());
        ctl.simulate_wait_failure(true);
        assert!(matches!(
            ctl.wait_for_update_complete(7),
            Err(InkError::Refresh { marker: 7, .. })
        ));
        assert!(ctl.state().updates.is_empty());
        ctl.reset();
        assert!(ctl.send_update(&request()).is_ok());
    }
}
