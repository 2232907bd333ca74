//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure, no I/O; everything here is unit-tested against the framebuffer.

use crate::core::catalog;
use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Pos, ShapeType, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Minimum side-panel width; narrower terminals get the board only.
const PANEL_MIN_W: u16 = 14;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Terminal glyphs are roughly twice as tall as wide.
        Self::new(2, 1)
    }
}

/// Top-left corner of the board frame inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size needed to show the board and the full side panel.
    pub fn preferred_viewport(&self) -> Viewport {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        Viewport::new(frame_w + 2 + PANEL_MIN_W, frame_h)
    }

    /// Render into a reused framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame = self.frame(viewport);
        let well = CellStyle::plain(Rgb::new(80, 80, 90), WELL_BG);
        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', well);
        draw_border(fb, frame, border);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let pos = (x as i8, y as i8);
                match cell {
                    Some(kind) => self.draw_block(fb, frame, pos, *kind, false),
                    None => self.fill_board_cell(fb, frame, pos, '·', well.dim()),
                }
            }
        }

        if let (Some(active), Some(ghost)) = (snap.active, snap.ghost) {
            let style = CellStyle::plain(Rgb::new(140, 140, 140), WELL_BG).dim();
            for pos in ghost {
                if !active.cells.contains(&pos) {
                    self.fill_board_cell(fb, frame, pos, '░', style);
                }
            }
        }

        if let Some(active) = snap.active {
            for pos in active.cells {
                self.draw_block(fb, frame, pos, active.kind, true);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.over {
            draw_overlay(fb, frame, "GAME OVER");
        } else if snap.paused {
            draw_overlay(fb, frame, "PAUSED");
        }
    }

    /// Allocating convenience wrapper around [`GameView::render_into`].
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        // Shift left to leave room for the panel when the terminal allows it.
        let total_w = if viewport.width >= w + 2 + PANEL_MIN_W {
            w + 2 + PANEL_MIN_W
        } else {
            w
        };
        let x = viewport.width.saturating_sub(total_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn fill_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, pos: Pos, ch: char, style: CellStyle) {
        let (x, y) = pos;
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = frame.x + 1 + x as u16 * self.cell_w;
        let py = frame.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, pos: Pos, kind: ShapeType, bold: bool) {
        let mut style = CellStyle::plain(shape_color(kind), WELL_BG);
        style.bold = bold;
        self.fill_board_cell(fb, frame, pos, '█', style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        let mut y = frame.y;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        draw_preview(fb, panel_x, y, snap.next);
        y += 3;

        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("ROWS", snap.completed_rows),
            ("SPEED", snap.speed_ms),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x + 7, y, v, value);
            y += 1;
        }
        y += 1;

        fb.put_str(panel_x, y, "STATS", label);
        y += 1;
        for (kind, count) in snap.statistics.iter() {
            let style = CellStyle::plain(shape_color(kind), PANEL_BG);
            let x = fb.put_str(panel_x, y, kind.as_str(), style);
            fb.put_u32(x + 2, y, count, value);
            y += 1;
        }
    }
}

/// Next shape drawn small, one terminal column per cell.
fn draw_preview(fb: &mut FrameBuffer, x: u16, y: u16, kind: ShapeType) {
    let style = CellStyle::plain(shape_color(kind), PANEL_BG).bold();
    for (dx, dy) in catalog::cells(kind, 0) {
        fb.put_char(x + dx as u16 * 2, y + dy as u16, '█', style);
        fb.put_char(x + dx as u16 * 2 + 1, y + dy as u16, '█', style);
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
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

fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = frame.x + frame.w.saturating_sub(text_w) / 2;
    let y = frame.y + frame.h / 2;
    let style = CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, y, text, style);
}

pub fn shape_color(kind: ShapeType) -> Rgb {
    match kind {
        ShapeType::I => Rgb::new(80, 220, 220),
        ShapeType::O => Rgb::new(240, 220, 80),
        ShapeType::T => Rgb::new(200, 120, 220),
        ShapeType::S => Rgb::new(100, 220, 120),
        ShapeType::Z => Rgb::new(220, 80, 80),
        ShapeType::J => Rgb::new(80, 120, 220),
        ShapeType::L => Rgb::new(255, 165, 0),
    }
}
