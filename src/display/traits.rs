/*
 *  display/traits.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Hardware seam for the eInk refresh controller
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

use crate::display::error::InkError;
use crate::display::refresh::UpdateRequest;

/// The two operations an EPDC driver offers us.
///
/// Both calls block until the driver answers; there is no timeout beyond
/// whatever the kernel enforces. The real implementation issues ioctls on
/// the framebuffer descriptor, tests use a recorder.
pub trait EinkController {
    /// Submit an update of one region of the panel
    fn send_update(&mut self, request: &UpdateRequest) -> Result<(), InkError>;

    /// Block until the update tagged with `marker` has been displayed
    fn wait_for_update_complete(&mut self, marker: u32) -> Result<(), InkError>;
}

impl<T: EinkController + ?Sized> EinkController for &mut T {
    fn send_update(&mut self, request: &UpdateRequest) -> Result<(), InkError> {
        (**self).send_update(request)
    }

    fn wait_for_update_complete(&mut self, marker: u32) -> Result<(), InkError> {
        (**self).wait_for_update_complete(marker)
    }
}
