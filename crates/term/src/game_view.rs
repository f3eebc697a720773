//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Cell, GameSnapshot};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{CellColor, Mark};

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

const WELL_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const HELP: [&str; 8] = [
    "1  Play Game",
    "2  Watch Game",
    "3  Pause",
    "\u{25c4} or G  Left",
    "\u{25ba} or J  Right",
    "\u{25b2} or H  Rotate",
    "B  Down",
    "\u{25bc} or Space  Drop",
];

/// Renders the well on the left and the info panel on its right.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
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

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let well_w = (snap.cols as u16).saturating_mul(self.cell_w);
        let well_h = (snap.rows as u16).saturating_mul(self.cell_h);
        let frame_w = well_w.saturating_add(2);
        let frame_h = well_h.saturating_add(2);

        let border = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(1, 1, well_w, well_h, ' ', Style::new(WELL_BG, WELL_BG));
        draw_border(fb, 0, 0, frame_w, frame_h, border);

        for row in 0..snap.rows {
            for (col, cell) in snap.row(row).iter().enumerate() {
                let (ch, style) = cell_glyph(cell, snap.grid);
                let px = 1 + col as u16 * self.cell_w;
                let py = 1 + row as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_panel(fb, snap, frame_w.saturating_add(2));

        let banner = if snap.game_over() {
            Some("GAME OVER!")
        } else if snap.paused {
            Some("PAUSED")
        } else {
            None
        };
        if let Some(text) = banner {
            let text_w = text.chars().count() as u16;
            let x = frame_w.saturating_sub(text_w) / 2;
            let style = Style::new(Rgb::new(255, 80, 80), PANEL_BG).bold();
            fb.put_str(x, frame_h / 2, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16) {
        if x >= fb.width() {
            return;
        }

        let text = Style::new(Rgb::new(220, 220, 220), PANEL_BG);
        let label = text.bold();
        let dim = text.dim();

        let mut y = 0;
        fb.put_str(x, y, "UW TETRIS", label);
        y += 2;

        let counters = [
            ("LINES: ", snap.lines, Rgb::new(255, 80, 80)),
            ("SCORE: ", snap.score, Rgb::new(100, 140, 255)),
            ("LEVEL: ", snap.level, Rgb::new(100, 220, 120)),
        ];
        for (name, value, color) in counters {
            fb.put_str(x, y, name, label);
            fb.put_str(x + 7, y, &group_thousands(value), Style::new(color, PANEL_BG).bold());
            y += 1;
        }
        y += 1;

        for line in HELP {
            fb.put_str(x, y, line, text);
            y += 1;
        }
        y += 1;

        let dims = format!("{} Rows x {} Cols", snap.rows, snap.cols);
        fb.put_str(x, y, &dims, dim);
        y += 1;
        if !snap.is_human {
            fb.put_str(x, y, "Watching", dim);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
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

fn cell_glyph(cell: &Cell, grid: bool) -> (char, Style) {
    match cell.mark() {
        Mark::Empty if grid => ('·', Style::new(Rgb::new(110, 110, 110), WELL_BG).dim()),
        Mark::Empty => (' ', Style::new(WELL_BG, WELL_BG)),
        Mark::Active => ('█', Style::new(color_rgb(cell.color()), WELL_BG).bold()),
        Mark::Locked => ('█', Style::new(color_rgb(cell.color()), WELL_BG)),
    }
}

/// Terminal color for a cell color tag.
pub fn color_rgb(color: CellColor) -> Rgb {
    match color {
        CellColor::Empty => WELL_BG,
        CellColor::Orange => Rgb::new(255, 128, 0),
        CellColor::Red => Rgb::new(230, 60, 60),
        CellColor::Cyan => Rgb::new(80, 220, 220),
        CellColor::Magenta => Rgb::new(220, 80, 220),
        CellColor::Yellow => Rgb::new(240, 220, 80),
        CellColor::Blue => Rgb::new(80, 120, 230),
        CellColor::Green => Rgb::new(100, 220, 120),
        CellColor::Gray => Rgb::new(150, 150, 150),
    }
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_locked_and_active_cells_differ_only_in_weight() {
        let active = cell_glyph_for(Mark::Active);
        let locked = cell_glyph_for(Mark::Locked);
        assert_eq!(active.0, locked.0);
        assert!(active.1.bold);
        assert!(!locked.1.bold);
    }

    fn cell_glyph_for(mark: Mark) -> (char, Style) {
        let mut board = crate::core::Board::new(6, 4).unwrap();
        board.paint(0, 0, mark, CellColor::Red).unwrap();
        cell_glyph(board.get(0, 0).unwrap(), false)
    }
}
