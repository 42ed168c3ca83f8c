/*
 *  text/mod.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Print pipeline: clear, lay out, paint, refresh
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

pub mod layout;
pub mod render;

pub use layout::{layout_text, resolve_origin, Layout, LayoutLine};
pub use render::LineRenderer;

use log::debug;

use crate::display::error::InkError;
use crate::display::framebuffer::PixelWriter;
use crate::display::geometry::{GridGeometry, PanelGeometry, Region};
use crate::display::refresh::{RefreshController, WaveformMode};
use crate::display::traits::EinkController;
use crate::font::FontTable;

/// How and where to print one string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderRequest {
    /// cell row, negative counts up from the bottom
    pub row: i16,
    /// cell column, negative counts back from the right edge
    pub col: i16,
    /// white on black
    pub inverted: bool,
    /// full flashing refresh, waits for completion
    pub flashing: bool,
    /// clear the whole screen first
    pub cleared: bool,
    pub centered: bool,
    /// fill the rest of each line with blanks
    pub padded: bool,
    /// replaces the waveform the refresh would otherwise pick
    pub waveform: Option<WaveformMode>,
}

/// What a print did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOutcome {
    /// union of every painted line, the whole panel after a clear
    pub region: Region,
    /// lines painted
    pub lines: u32,
    /// text was cut to fit a single screen
    pub truncated: bool,
    /// an update was submitted; false when there was nothing to refresh
    pub refreshed: bool,
}

/// Lay out and paint `text` into `buf` without refreshing.
pub fn render_text(
    buf: &mut [u8],
    panel: &PanelGeometry,
    text: &str,
    req: &RenderRequest,
) -> Result<PrintOutcome, InkError> {
    let grid = GridGeometry::for_panel(panel);
    let mut fb = PixelWriter::new(buf, *panel)?;

    if req.cleared {
        let (_, bg) = LineRenderer::colors(req.inverted);
        fb.clear_screen(bg);
    }

    let layout = layout_text(text, req, &grid);
    let font = FontTable::builtin();
    let mut renderer = LineRenderer::new(&font, grid);
    let region = layout
        .lines
        .iter()
        .map(|line| renderer.draw_line(&mut fb, line, req.inverted))
        .fold(Region::default(), |acc, r| acc.union(&r));

    let region = if req.cleared { Region::full(panel) } else { region };
    debug!("painted {} lines, region {:?}", layout.lines.len(), region);

    Ok(PrintOutcome {
        region,
        lines: layout.lines.len() as u32,
        truncated: layout.truncated,
        refreshed: false,
    })
}

/// The whole print: paint `text` then push the painted region to the panel.
///
/// A zero area region is not sent, some EPDC kernels reject it.
pub fn print_text<C: EinkController>(
    buf: &mut [u8],
    panel: &PanelGeometry,
    text: &str,
    req: &RenderRequest,
    refresher: &mut RefreshController<C>,
) -> Result<PrintOutcome, InkError> {
    let mut outcome = render_text(buf, panel, text, req)?;
    if outcome.region.is_empty() {
        debug!("nothing to refresh");
        return Ok(outcome);
    }
    refresher.refresh(outcome.region, req.flashing, req.waveform)?;
    outcome.refreshed = true;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::drivers::mock::RecordingController;
    use crate::display::refresh::UpdateMode;

    fn carta() -> (PanelGeometry, Vec<u8>) {
        let panel = PanelGeometry::packed(758, 1024, 16);
        let buf = vec![0u8; panel.smem_len as usize];
        (panel, buf)
    }

    #[test]
    fn test_hello_region_and_refresh() {
        let (panel, mut buf) = carta();
        let mut rc = RefreshController::new(RecordingController::new());
        let out = print_text(&mut buf, &panel, "Hello", &RenderRequest::default(), &mut rc).unwrap();
        assert_eq!(out.region, Region::new(0, 0, 80, 16));
        assert!(out.refreshed);
        let sent = rc.controller().last_update().unwrap();
        assert_eq!(sent.region, out.region);
        assert_eq!(sent.mode, UpdateMode::Partial);
        assert_eq!(sent.waveform, WaveformMode::Auto);
    }

    #[test]
    fn test_multiline_region_is_union() {
        let (panel, mut buf) = carta();
        let text = "w".repeat(100);
        let req = RenderRequest { row: 4, ..Default::default() };
        let out = render_text(&mut buf, &panel, &text, &req).unwrap();
        assert_eq!(out.lines, 3);
        assert_eq!(out.region, Region::new(64, 0, 47 * 16, 48));
    }

    #[test]
    fn test_clear_refreshes_full_screen() {
        let (panel, mut buf) = carta();
        let mut rc = RefreshController::new(RecordingController::new());
        let req = RenderRequest { cleared: true, flashing: true, ..Default::default() };
        let out = print_text(&mut buf, &panel, "x", &req, &mut rc).unwrap();
        assert_eq!(out.region, Region::full(&panel));
        let sent = rc.controller().last_update().unwrap();
        assert_eq!(sent.mode, UpdateMode::Full);
        assert_eq!(sent.waveform, WaveformMode::Gc16);
    }

    #[test]
    fn test_empty_string_skips_refresh() {
        let (panel, mut buf) = carta();
        let mut rc = RefreshController::new(RecordingController::new());
        let out = print_text(&mut buf, &panel, "", &RenderRequest::default(), &mut rc).unwrap();
        assert_eq!(out.lines, 1);
        assert!(!out.refreshed);
        assert!(rc.controller().state().updates.is_empty());
    }

    #[test]
    fn test_waveform_request_override() {
        let (panel, mut buf) = carta();
        let mut rc = RefreshController::new(RecordingController::new());
        let req = RenderRequest { waveform: Some(WaveformMode::Du), ..Default::default() };
        print_text(&mut buf, &panel, "fast", &req, &mut rc).unwrap();
        assert_eq!(rc.controller().last_update().unwrap().waveform, WaveformMode::Du);
    }

    #[test]
    fn test_send_failure_propagates() {
        let (panel, mut buf) = carta();
        let mock = RecordingController::new();
        mock.simulate_send_failure(true);
        let mut rc = RefreshController::new(mock);
        assert!(print_text(&mut buf, &panel, "boom", &RenderRequest::default(), &mut rc).is_err());
    }

    #[test]
    fn test_idempotent_pixels() {
        let (panel, mut buf) = carta();
        let req = RenderRequest { row: 10, col: -8, centered: true, padded: true, ..Default::default() };
        let first = render_text(&mut buf, &panel, "twice over", &req).unwrap();
        let snapshot = buf.clone();
        let second = render_text(&mut buf, &panel, "twice over", &req).unwrap();
        assert_eq!(first, second);
        assert_eq!(snapshot, buf);
    }
}
