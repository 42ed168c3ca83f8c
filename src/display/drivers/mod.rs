/*
 *  display/drivers/mod.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Refresh controller implementations
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

// i.MX EPDC through fbdev ioctls
pub mod mxcfb;

// Recorder for tests and dry runs
pub mod mock;

pub use mock::{RecordingController, RecordingState};
pub use mxcfb::MxcfbController;
