/*
 *  display/mod.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Framebuffer access and eInk refresh
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

// Core trait definitions
pub mod traits;
pub mod error;

pub mod color;
pub mod geometry;
pub mod framebuffer;
pub mod refresh;
pub mod session;
pub mod snapshot;

// Refresh controllers, hardware and recording
pub mod drivers;

// Re-exports for convenience
pub use traits::EinkController;
pub use error::InkError;
pub use color::{PaletteColor, PALETTE};
pub use geometry::{scale_factor_for, GridGeometry, PanelGeometry, Region};
pub use framebuffer::{PixelFormat, PixelWriter};
pub use refresh::{update_marker, RefreshController, UpdateMode, UpdateRequest, WaveformMode};
pub use session::{FramebufferSession, SessionState};
pub use drivers::{MxcfbController, RecordingController};
