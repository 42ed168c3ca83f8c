/*
 *  text/layout.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Hard wrapping, centering, padding and origin clamping on the cell grid
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
use std::ops::Range;

use super::RenderRequest;
use crate::display::geometry::GridGeometry;

/// One display line, ready for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutLine {
    /// index among the produced lines
    pub offset: u32,
    /// absolute cell row
    pub row: u32,
    /// absolute cell column of the first cell
    pub col: u32,
    /// what to draw, padding blanks included
    pub cells: Vec<char>,
    /// which characters of the input this line carries
    pub content: Range<usize>,
}

impl LayoutLine {
    pub fn width(&self) -> u32 {
        self.cells.len() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// first row after clamping and the vertical fit
    pub row: u32,
    /// column after clamping
    pub col: u32,
    /// characters per line used for the line count
    pub available: u32,
    /// lines the text needed before truncation
    pub requested_lines: u32,
    pub truncated: bool,
    pub lines: Vec<LayoutLine>,
}

impl Layout {
    fn empty() -> Self {
        Self { row: 0, col: 0, available: 0, requested_lines: 0, truncated: false, lines: Vec::new() }
    }
}

/// Resolve a signed cell coordinate against a grid dimension.
///
/// Negative values count back from the far edge, anything past the edge is
/// pinned to the last cell. The result is always in `[0, max)` for a
/// non-empty dimension.
pub fn resolve_origin(requested: i16, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let max = max as i32;
    let mut v = i32::from(requested);
    if v < 0 {
        v = (max + v).max(0);
    }
    if v >= max {
        v = max - 1;
    }
    v as u32
}

/// Lay `text` out on the grid.
///
/// Never fails: out of range origins are clamped, text that does not fit
/// one screen is truncated, and the first row moves up so the last line
/// lands on the bottom row.
pub fn layout_text(text: &str, req: &RenderRequest, grid: &GridGeometry) -> Layout {
    let max_cols = grid.max_cols;
    let max_rows = grid.max_rows;
    if max_cols == 0 || max_rows == 0 {
        debug!("grid {}x{} has no printable cell", max_cols, max_rows);
        return Layout::empty();
    }

    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    let col = resolve_origin(req.col, max_cols);
    let mut row = resolve_origin(req.row, max_rows);
    if i32::from(req.col) != col as i32 || i32::from(req.row) != row as i32 {
        debug!("adjusted position from {},{} to column {}, row {}", req.col, req.row, col, row);
    }

    // centered+padded always starts at column 0 behind one blank margin;
    // centered alone never uses column 0 either
    let available = match (req.centered, req.padded) {
        (true, true) => max_cols - 1,
        (true, false) => max_cols - col.max(1),
        _ => max_cols - col,
    }
    .max(1);

    let requested_lines = (len.div_ceil(available as usize)).max(1) as u32;
    let mut lines = requested_lines;
    let truncated = lines > max_rows;
    if truncated {
        warn!("can only print {} out of {} lines, truncating", max_rows, lines);
        lines = max_rows;
    }
    if row + lines > max_rows {
        row = max_rows - lines;
    }
    debug!(
        "{} lines for {} characters over {} columns, starting at column {}, row {}",
        lines, len, available, col, row
    );

    let mut out = Vec::with_capacity(lines as usize);
    let mut consumed = 0usize;
    // centering moves the column, the next line slices from where this one landed
    let mut line_start = col;
    for offset in 0..lines {
        let left = len - consumed;
        let (line_col, chunk, lead, total) = match (req.centered, req.padded) {
            (false, false) => {
                let chunk = left.min((max_cols - col) as usize);
                (col, chunk, 0, chunk)
            }
            (false, true) => {
                let chunk = left.min((max_cols - col) as usize);
                (col, chunk, 0, (max_cols - col) as usize)
            }
            (true, false) => {
                let slice = left.min((max_cols - line_start) as usize);
                line_start = (max_cols / 2).saturating_sub(slice as u32 / 2).max(1);
                let chunk = left.min((max_cols - line_start) as usize);
                (line_start, chunk, 0, chunk)
            }
            (true, true) => {
                let chunk = left.min(max_cols as usize - 1);
                let lead = ((max_cols as usize - chunk) / 2).max(1);
                (0, chunk, lead, max_cols as usize)
            }
        };

        if offset > 0 && chunk == 0 {
            debug!("skipping trailing blank line at offset {}", offset);
            continue;
        }

        let content = consumed..consumed + chunk;
        let mut cells = Vec::with_capacity(total);
        cells.resize(lead, ' ');
        cells.extend_from_slice(&chars[content.clone()]);
        cells.resize(total, ' ');
        consumed += chunk;

        debug!(
            "line {}: {} characters at column {}, {} cells",
            offset,
            chunk,
            line_col,
            cells.len()
        );
        out.push(LayoutLine { offset, row: row + offset, col: line_col, cells, content });
    }

    Layout { row, col, available, requested_lines, truncated, lines: out }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::geometry::PanelGeometry;

    fn carta() -> GridGeometry {
        GridGeometry::for_panel(&PanelGeometry::packed(758, 1024, 16))
    }

    fn req(row: i16, col: i16, centered: bool, padded: bool) -> RenderRequest {
        RenderRequest { row, col, centered, padded, ..Default::default() }
    }

    fn line_text(line: &LayoutLine) -> String {
        line.cells.iter().collect()
    }

    #[test]
    fn test_resolve_origin() {
        assert_eq!(resolve_origin(0, 47), 0);
        assert_eq!(resolve_origin(-1, 47), 46);
        assert_eq!(resolve_origin(-47, 47), 0);
        assert_eq!(resolve_origin(-500, 47), 0);
        assert_eq!(resolve_origin(47, 47), 46);
        assert_eq!(resolve_origin(i16::MAX, 47), 46);
        assert_eq!(resolve_origin(5, 0), 0);
    }

    #[test]
    fn test_resolved_origin_always_in_grid() {
        for max in [1u32, 2, 47, 64] {
            for v in (i16::MIN..=i16::MAX).step_by(97) {
                assert!(resolve_origin(v, max) < max);
            }
        }
    }

    #[test]
    fn test_hello() {
        let layout = layout_text("Hello", &req(0, 0, false, false), &carta());
        assert_eq!(layout.lines.len(), 1);
        let line = &layout.lines[0];
        assert_eq!((line.row, line.col), (0, 0));
        assert_eq!(line_text(line), "Hello");
        assert!(!layout.truncated);
    }

    #[test]
    fn test_hundred_chars_wrap() {
        let text: String = (0..100).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let layout = layout_text(&text, &req(0, 0, false, false), &carta());
        let widths: Vec<u32> = layout.lines.iter().map(|l| l.width()).collect();
        assert_eq!(widths, vec![47, 47, 6]);
        let rows: Vec<u32> = layout.lines.iter().map(|l| l.row).collect();
        assert_eq!(rows, vec![0, 1, 2]);
        assert!(!layout.truncated);
    }

    #[test]
    fn test_line_count_and_round_trip() {
        let grid = carta();
        for len in [0usize, 1, 5, 46, 47, 48, 94, 95, 300, 1000] {
            let text: String = (0..len).map(|i| char::from(b'A' + (i % 26) as u8)).collect();
            for col in [0i16, 1, 10, 46] {
                let available = 47 - col as usize;
                if len.div_ceil(available) > 64 {
                    continue;
                }
                let layout = layout_text(&text, &req(0, col, false, false), &grid);
                assert_eq!(layout.available as usize, available);
                assert_eq!(layout.lines.len(), len.div_ceil(available).max(1));
                let joined: String = layout
                    .lines
                    .iter()
                    .flat_map(|l| text.chars().skip(l.content.start).take(l.content.len()))
                    .collect();
                assert_eq!(joined, text);
            }
        }
    }

    #[test]
    fn test_wraps_on_code_points() {
        let text = "αβγ".repeat(20);
        let layout = layout_text(&text, &req(0, 0, false, false), &carta());
        assert_eq!(layout.lines.len(), 2);
        assert_eq!(layout.lines[0].width(), 47);
        assert_eq!(layout.lines[1].width(), 13);
    }

    #[test]
    fn test_negative_origin() {
        let layout = layout_text("x", &req(-1, -5, false, false), &carta());
        assert_eq!((layout.row, layout.col), (63, 42));
    }

    #[test]
    fn test_vertical_fit_shifts_up() {
        let text = "x".repeat(47 * 3);
        let layout = layout_text(&text, &req(-1, 0, false, false), &carta());
        let rows: Vec<u32> = layout.lines.iter().map(|l| l.row).collect();
        assert_eq!(rows, vec![61, 62, 63]);
    }

    #[test]
    fn test_truncates_to_one_screen() {
        let grid = GridGeometry::for_panel(&PanelGeometry::packed(64, 32, 8));
        assert_eq!((grid.max_cols, grid.max_rows), (8, 4));
        let text = "y".repeat(50);
        let layout = layout_text(&text, &req(2, 0, false, false), &grid);
        assert!(layout.truncated);
        assert_eq!(layout.requested_lines, 7);
        assert_eq!(layout.lines.len(), 4);
        assert_eq!(layout.row, 0);
        assert_eq!(layout.lines.last().map(|l| l.content.end), Some(32));
    }

    #[test]
    fn test_empty_string_is_one_zero_width_line() {
        let layout = layout_text("", &req(3, 4, false, false), &carta());
        assert_eq!(layout.lines.len(), 1);
        assert_eq!(layout.lines[0].width(), 0);
        assert_eq!(layout.lines[0].row, 3);
    }

    #[test]
    fn test_padded_fills_to_edge() {
        let layout = layout_text("abc", &req(0, 40, false, true), &carta());
        let line = &layout.lines[0];
        assert_eq!(line.col, 40);
        assert_eq!(line_text(line), "abc    ");
    }

    #[test]
    fn test_centered() {
        let layout = layout_text("Hello", &req(0, 0, true, false), &carta());
        assert_eq!(layout.lines[0].col, 23 - 2);

        // a full centered line keeps off column 0
        let text = "z".repeat(46);
        let layout = layout_text(&text, &req(0, 0, true, false), &carta());
        assert_eq!(layout.lines.len(), 1);
        assert_eq!(layout.lines[0].col, 1);
    }

    #[test]
    fn test_centered_never_loses_characters() {
        let grid = carta();
        for len in [0usize, 1, 46, 47, 93, 94, 200] {
            let text: String = (0..len).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
            for col in [0i16, 5, 20] {
                let layout = layout_text(&text, &req(0, col, true, false), &grid);
                let total: usize = layout.lines.iter().map(|l| l.content.len()).sum();
                assert_eq!(total, len);
                for line in &layout.lines {
                    assert!(line.col >= 1);
                    assert!(line.col + line.width() <= 47);
                }
            }
        }
    }

    #[test]
    fn test_centered_carries_column_between_lines() {
        // 27 from column 20 recentres to 10, which then fits 37;
        // the remaining 23 slice from column 10 and recentre to 12
        let text = "q".repeat(60);
        let layout = layout_text(&text, &req(0, 20, true, false), &carta());
        assert_eq!(layout.requested_lines, 3);
        let placed: Vec<(u32, u32)> = layout.lines.iter().map(|l| (l.col, l.width())).collect();
        assert_eq!(placed, vec![(10, 37), (12, 23)]);
        assert_eq!(layout.lines[1].content, 37..60);
    }

    #[test]
    fn test_centered_from_column_zero_keeps_margin() {
        let text = "w".repeat(100);
        let layout = layout_text(&text, &req(0, 0, true, false), &carta());
        let placed: Vec<(u32, u32)> = layout.lines.iter().map(|l| (l.col, l.width())).collect();
        assert_eq!(placed, vec![(1, 46), (1, 46), (19, 8)]);
    }

    #[test]
    fn test_centered_padded_single_char() {
        let layout = layout_text("X", &req(0, 10, true, true), &carta());
        let line = &layout.lines[0];
        assert_eq!(line.col, 0);
        assert_eq!(line.width(), 47);
        assert_eq!(line.cells.iter().position(|&c| c == 'X'), Some(23));
        assert_eq!(line.cells[0], ' ');
    }

    #[test]
    fn test_centered_padded_multiline() {
        let text: String = (0..100).map(|i| char::from(b'0' + (i % 10) as u8)).collect();
        let layout = layout_text(&text, &req(0, 0, true, true), &carta());
        assert_eq!(layout.available, 46);
        assert_eq!(layout.lines.len(), 3);

        let expected = [
            (0..46, 1usize, 0usize),
            (46..92, 1, 0),
            (92..100, 19, 20),
        ];
        for (line, (content, lead, trail)) in layout.lines.iter().zip(expected) {
            assert_eq!(line.col, 0);
            assert_eq!(line.width(), 47);
            assert_eq!(line.content, content);
            assert!(line.cells[..lead].iter().all(|&c| c == ' '));
            let body: String = line.cells[lead..47 - trail].iter().collect();
            let want: String = text.chars().skip(content.start).take(content.len()).collect();
            assert_eq!(body, want);
            assert!(line.cells[47 - trail..].iter().all(|&c| c == ' '));
        }
    }

    #[test]
    fn test_centered_padded_odd_remainder_goes_right() {
        let layout = layout_text("ab", &req(0, 0, true, true), &carta());
        let line = &layout.lines[0];
        // 45 blanks: 22 left, 23 right
        assert_eq!(line.cells.iter().position(|&c| c == 'a'), Some(22));
        assert_eq!(line.cells[24..].len(), 23);
    }

    #[test]
    fn test_centering_start_column_bounds() {
        let grid = carta();
        let (almost, full) = ("m".repeat(46), "m".repeat(47));
        for padded in [false, true] {
            for text in ["", almost.as_str(), full.as_str()] {
                let layout = layout_text(text, &req(0, 0, true, padded), &grid);
                for line in &layout.lines {
                    assert!(line.col < 47);
                    assert!(line.col + line.width() <= 47);
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let r = req(-3, 7, true, false);
        assert_eq!(layout_text("same again", &r, &carta()), layout_text("same again", &r, &carta()));
    }

    #[test]
    fn test_empty_grid() {
        let grid = GridGeometry::for_panel(&PanelGeometry::packed(4, 4, 8));
        assert!(layout_text("hi", &req(0, 0, false, false), &grid).lines.is_empty());
    }
}
