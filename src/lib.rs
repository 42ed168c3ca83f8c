/*
 *  lib.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Library entry points for hosts that embed the printer
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

//! Print text straight onto a Linux eInk framebuffer and refresh it.
//!
//! ```no_run
//! use inkprint::{FramebufferSession, RenderRequest};
//!
//! let mut session = FramebufferSession::new("/dev/fb0");
//! session.initialize(true)?;
//! session.print("Hello", &RenderRequest { row: -1, centered: true, ..Default::default() })?;
//! # Ok::<(), inkprint::InkError>(())
//! ```

pub mod config;
pub mod constants;
pub mod display;
pub mod font;
pub mod text;

pub use display::{
    EinkController, FramebufferSession, GridGeometry, InkError, PaletteColor, PanelGeometry, PixelWriter,
    RecordingController, RefreshController, Region, SessionState, UpdateMode, UpdateRequest, WaveformMode,
};
pub use font::FontTable;
pub use text::{print_text, render_text, PrintOutcome, RenderRequest};
