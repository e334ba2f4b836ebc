//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. The same layout code
//! drives rendering and hit-testing, so a mouse position always resolves to
//! the tile drawn under it.

use crate::core::{GameState, Grid};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::tile_color;
use crate::pulse::ColorPulse;
use crate::types::Point;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board frame lands in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the border.
    pub origin_x: u16,
    pub origin_y: u16,
    /// Size of one tile in terminal columns / rows.
    pub cell_w: u16,
    pub cell_h: u16,
    /// Border-inclusive frame size.
    pub frame_w: u16,
    pub frame_h: u16,
}

impl Layout {
    /// Terminal position of a tile's top-left glyph.
    pub fn cell_origin(&self, p: Point) -> (u16, u16) {
        (
            self.origin_x + 1 + p.x * self.cell_w,
            self.origin_y + 1 + p.y * self.cell_h,
        )
    }
}

/// Rows reserved under the board for the status and help lines.
const STATUS_ROWS: u16 = 2;

const BOARD_BG: Rgb = Rgb::new(25, 25, 35);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the puzzle.
pub struct GameView {
    /// Preferred tile width in terminal columns.
    cell_w: u16,
    /// Preferred tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2:1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Compute the board layout, shrinking tiles to 2x1 when the preferred
    /// size does not fit.
    pub fn layout(&self, grid: &Grid, viewport: Viewport) -> Layout {
        let fits = |cw: u16, ch: u16| {
            let fw = grid.width() * cw + 2;
            let fh = grid.height() * ch + 2;
            fw <= viewport.width && fh + STATUS_ROWS <= viewport.height
        };
        let (cell_w, cell_h) = if fits(self.cell_w, self.cell_h) {
            (self.cell_w, self.cell_h)
        } else {
            (2, 1)
        };

        let frame_w = grid.width() * cell_w + 2;
        let frame_h = grid.height() * cell_h + 2;
        Layout {
            origin_x: viewport.width.saturating_sub(frame_w) / 2,
            origin_y: viewport.height.saturating_sub(frame_h + STATUS_ROWS) / 2,
            cell_w,
            cell_h,
            frame_w,
            frame_h,
        }
    }

    /// Grid cell under a terminal position, if any.
    pub fn cell_at(&self, grid: &Grid, viewport: Viewport, column: u16, row: u16) -> Option<Point> {
        let l = self.layout(grid, viewport);
        let left = l.origin_x + 1;
        let top = l.origin_y + 1;
        if column < left || row < top {
            return None;
        }
        let x = (column - left) / l.cell_w;
        let y = (row - top) / l.cell_h;
        if x >= grid.width() || y >= grid.height() {
            return None;
        }
        Some(Point::new(x, y))
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        state: &GameState,
        pulse: &ColorPulse,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).glyph(' '));

        let grid = state.grid();
        let l = self.layout(grid, viewport);

        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, l.origin_x, l.origin_y, l.frame_w, l.frame_h, border);

        let selection = state.selection();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let p = Point::new(x, y);
                match grid.cell_at(x, y) {
                    Some(color) => {
                        let fg = if selection.contains(p) {
                            pulse.current()
                        } else {
                            tile_color(color)
                        };
                        self.fill_tile(fb, &l, p, '█', CellStyle::plain(fg, BOARD_BG));
                    }
                    None => {
                        let dot = CellStyle {
                            dim: true,
                            ..CellStyle::plain(Rgb::new(70, 70, 80), BOARD_BG)
                        };
                        self.fill_tile(fb, &l, p, ' ', dot);
                        let (px, py) = l.cell_origin(p);
                        fb.put_char(px + l.cell_w / 2, py + l.cell_h / 2, '·', dot);
                    }
                }
            }
        }

        self.draw_cursor(fb, &l, state);
        self.draw_status(fb, &l, state, viewport);

        if state.is_finished() {
            self.draw_overlay_text(fb, &l, "NO MORE MOVES - N FOR NEW ROUND");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, pulse: &ColorPulse, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, pulse, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_tile(&self, fb: &mut FrameBuffer, l: &Layout, p: Point, ch: char, style: CellStyle) {
        let (px, py) = l.cell_origin(p);
        fb.fill_rect(px, py, l.cell_w, l.cell_h, ch, style);
    }

    /// Brackets on the middle row of the cursor tile.
    fn draw_cursor(&self, fb: &mut FrameBuffer, l: &Layout, state: &GameState) {
        let p = state.cursor();
        let grid = state.grid();
        if p.x >= grid.width() || p.y >= grid.height() {
            return;
        }
        let bg = grid.cell_at(p.x, p.y).map_or(BOARD_BG, tile_color);
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), bg)
        };
        let (px, py) = l.cell_origin(p);
        let row = py + l.cell_h / 2;
        fb.put_char(px, row, '[', style);
        fb.put_char(px + l.cell_w - 1, row, ']', style);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, l: &Layout, state: &GameState, viewport: Viewport) {
        let label = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(128, 128, 255), PANEL_BG)
        };
        let value = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG);

        let y = l.origin_y + l.frame_h;
        if y >= viewport.height {
            return;
        }
        let mut x = l.origin_x;
        x = fb.put_str(x, y, "SCORE ", label);
        x = fb.put_u32(x, y, state.score(), value);
        x = fb.put_str(x, y, "  ROUND ", label);
        x = fb.put_u32(x, y, state.round_id().wrapping_add(1), value);
        x = fb.put_str(x, y, "  LEFT ", label);
        x = fb.put_u32(x, y, state.grid().filled_count() as u32, value);
        if !state.selection().is_empty() {
            x = fb.put_str(x, y, "  SEL ", label);
            x = fb.put_u32(x, y, state.selection().len() as u32, value);
            x = fb.put_str(x, y, " +", value);
            fb.put_u32(x, y, state.selection_value(), value);
        }

        let help_y = y + 1;
        if help_y < viewport.height {
            let dim = CellStyle { dim: true, ..value };
            fb.put_str(
                l.origin_x,
                help_y,
                "arrows/hjkl move  space select  n new round  q quit",
                dim,
            );
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, l: &Layout, text: &str) {
        let mid_y = l.origin_y.saturating_add(l.frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = l.origin_x.saturating_add(l.frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG)
        };
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_prefers_large_tiles_when_they_fit() {
        let state = GameState::new(4, 2, 2, 1);
        let view = GameView::default();
        // 4*4+2 = 18 wide, 2*2+2 = 6 tall, plus 2 status rows.
        let l = view.layout(state.grid(), Viewport::new(18, 8));
        assert_eq!((l.cell_w, l.cell_h), (4, 2));
        assert_eq!((l.origin_x, l.origin_y), (0, 0));
    }

    #[test]
    fn layout_shrinks_tiles_on_small_viewports() {
        let state = GameState::new(4, 2, 2, 1);
        let view = GameView::default();
        let l = view.layout(state.grid(), Viewport::new(17, 8));
        assert_eq!((l.cell_w, l.cell_h), (2, 1));
        assert_eq!(l.frame_w, 10);
        assert_eq!(l.frame_h, 4);
    }

    #[test]
    fn cell_at_inverts_cell_origin() {
        let state = GameState::new(5, 3, 3, 9);
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let l = view.layout(state.grid(), vp);
        for y in 0..3 {
            for x in 0..5 {
                let p = Point::new(x, y);
                let (px, py) = l.cell_origin(p);
                assert_eq!(view.cell_at(state.grid(), vp, px, py), Some(p));
                assert_eq!(
                    view.cell_at(state.grid(), vp, px + l.cell_w - 1, py + l.cell_h - 1),
                    Some(p)
                );
            }
        }
    }

    #[test]
    fn cell_at_rejects_border_and_outside() {
        let state = GameState::new(5, 3, 3, 9);
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let l = view.layout(state.grid(), vp);
        assert_eq!(view.cell_at(state.grid(), vp, l.origin_x, l.origin_y + 1), None);
        assert_eq!(view.cell_at(state.grid(), vp, l.origin_x + 1, l.origin_y), None);
        assert_eq!(
            view.cell_at(state.grid(), vp, l.origin_x + l.frame_w - 1, l.origin_y + 1),
            None
        );
        assert_eq!(view.cell_at(state.grid(), vp, 0, 0), None);
    }
}
