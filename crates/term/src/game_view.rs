//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::pieces::piece_color;
use crate::core::{GameSnapshot, Zone};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Phase, ZoneKind, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const FALLBACK_FG: Rgb = Rgb::new(220, 220, 220);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board origin and outer frame size inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Tint for a zone kind; `None` for normal gravity.
pub fn zone_tint(kind: ZoneKind) -> Option<Rgb> {
    match kind {
        ZoneKind::Reverse => Some(Rgb::new(244, 63, 94)),
        ZoneKind::Heavy => Some(Rgb::new(147, 51, 234)),
        ZoneKind::Zero => Some(Rgb::new(6, 182, 212)),
        ZoneKind::Normal => None,
    }
}

/// Terminal color for a piece kind, from its color token.
pub fn piece_rgb(kind: PieceKind) -> Rgb {
    Rgb::from_hex(piece_color(kind)).unwrap_or(FALLBACK_FG)
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        Layout {
            start_x: viewport.width.saturating_sub(frame_w) / 2,
            start_y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            frame_w,
            frame_h,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Reuses the framebuffer's allocation; it only grows when the viewport does.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        self.draw_border(fb, layout, border);

        // Locked board cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(kind) => self.draw_block(fb, layout, x as i8, y as i8, piece_rgb(*kind)),
                    None => self.draw_empty_cell(fb, layout, x as u16, y as u16),
                }
            }
        }

        // Zones only tint empty cells.
        for zone in snap.zones.iter() {
            self.draw_zone(fb, layout, snap, zone);
        }

        if let Some(active) = snap.active {
            let color = Rgb::from_hex(active.color).unwrap_or(FALLBACK_FG);

            if let Some(ghost_y) = snap.ghost_y {
                let ghost = CellStyle {
                    fg: BOARD_BG.blend(color, 80),
                    bg: BOARD_BG,
                    bold: false,
                    dim: true,
                };
                for (x, y) in active.cells_at(ghost_y) {
                    self.fill_board_cell(fb, layout, x, y, '░', ghost);
                }
            }

            for (x, y) in active.cells_at(active.y) {
                self.draw_block(fb, layout, x, y, color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);

        match snap.phase {
            Phase::Paused => self.draw_overlay_text(fb, layout, &["PAUSED", "P to resume"]),
            Phase::GameOver => self.draw_overlay_text(fb, layout, &["GAME OVER", "R to restart"]),
            Phase::Idle | Phase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: Layout, style: CellStyle) {
        let Layout {
            start_x: x,
            start_y: y,
            frame_w: w,
            frame_h: h,
        } = layout;

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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, layout: Layout, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: BOARD_BG,
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, layout, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: Layout, x: i8, y: i8, color: Rgb) {
        let style = CellStyle {
            fg: color,
            bg: BOARD_BG,
            bold: true,
            dim: false,
        };
        self.fill_board_cell(fb, layout, x, y, '█', style);
    }

    fn draw_zone(&self, fb: &mut FrameBuffer, layout: Layout, snap: &GameSnapshot, zone: &Zone) {
        let Some(tint) = zone_tint(zone.kind) else {
            return;
        };
        let style = CellStyle {
            fg: BOARD_BG.blend(tint, 200),
            bg: BOARD_BG.blend(tint, 100),
            bold: false,
            dim: false,
        };

        for (x, y) in zone.grid_cells() {
            if !(0..BOARD_WIDTH as i32).contains(&x) || !(0..BOARD_HEIGHT as i32).contains(&y) {
                continue;
            }
            if snap.board[y as usize][x as usize].is_some() {
                continue;
            }
            self.fill_cell_rect(fb, layout, x as u16, y as u16, '▒', style);
        }

        // Label centered on the zone's bounding box.
        let label = zone.kind.as_str();
        let cx = (zone.x + zone.width as f32 / 2.0).floor();
        let cy = (zone.y + zone.height as f32 / 2.0).floor();
        if cx < 0.0 || cy < 0.0 || cx >= BOARD_WIDTH as f32 || cy >= BOARD_HEIGHT as f32 {
            return;
        }
        let label_style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: BOARD_BG.blend(tint, 160),
            bold: true,
            dim: false,
        };
        let inner_left = layout.start_x + 1;
        let inner_right = inner_left + (BOARD_WIDTH as u16) * self.cell_w;
        let center_px = inner_left + (cx as u16) * self.cell_w + self.cell_w / 2;
        let text_w = label.len() as u16;
        let px = center_px
            .saturating_sub(text_w / 2)
            .clamp(inner_left, inner_right.saturating_sub(text_w));
        let py = layout.start_y + 1 + (cy as u16) * self.cell_h;
        fb.put_str(px, py, label, label_style);
    }

    /// Paint board cell (`x`, `y`); cells off the board are skipped.
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
            self.fill_cell_rect(fb, layout, x as u16, y as u16, ch, style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.start_x + 1 + cell_x * self.cell_w;
        let py = layout.start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: Layout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        let mut y = layout.start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, v, value);
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, snap.next, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "HOLD", label);
        y = y.saturating_add(1);
        let hold_style = if snap.can_hold {
            value
        } else {
            CellStyle { dim: true, ..value }
        };
        self.draw_preview(fb, panel_x, y, snap.hold, hold_style);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "GRAVITY", label);
        y = y.saturating_add(1);
        let gravity_style = match zone_tint(snap.gravity) {
            Some(tint) => CellStyle {
                fg: tint,
                bold: true,
                ..value
            },
            None => value,
        };
        fb.put_str(panel_x, y, snap.gravity.as_str(), gravity_style);
    }

    /// Two-row miniature of a piece's spawn shape, or `-` when empty.
    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        kind: Option<PieceKind>,
        style: CellStyle,
    ) {
        let Some(kind) = kind else {
            fb.put_str(x, y, "-", style);
            return;
        };
        let block = CellStyle {
            fg: piece_rgb(kind),
            ..style
        };
        let shape = crate::core::get_shape(kind);
        // Spawn shapes never use more than their top two rows.
        let top = if shape.cells().all(|(_, row)| row >= 1) { 1 } else { 0 };
        for (col, row) in shape.cells() {
            let row = (row - top) as u16;
            if row > 1 {
                continue;
            }
            let px = x + (col as u16) * 2;
            fb.put_str(px, y + row, "██", block);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: Layout, lines: &[&str]) {
        let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..CellStyle::default()
        };
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = layout
                .start_x
                .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
            let style = if i == 0 {
                style
            } else {
                CellStyle {
                    bold: false,
                    ..style
                }
            };
            fb.put_str(x, mid_y.saturating_add(i as u16), text, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_tints_match_kinds() {
        assert_eq!(zone_tint(ZoneKind::Normal), None);
        assert_eq!(zone_tint(ZoneKind::Heavy), Some(Rgb::new(147, 51, 234)));
        assert!(zone_tint(ZoneKind::Reverse).is_some());
        assert!(zone_tint(ZoneKind::Zero).is_some());
    }

    #[test]
    fn every_piece_color_parses() {
        for kind in PieceKind::ALL {
            assert!(Rgb::from_hex(piece_color(kind)).is_some(), "{:?}", kind);
        }
    }

    #[test]
    fn layout_centers_board() {
        let view = GameView::default();
        let layout = view.layout(Viewport::new(80, 24));
        assert_eq!(layout.frame_w, 22);
        assert_eq!(layout.frame_h, 22);
        assert_eq!(layout.start_x, 29);
        assert_eq!(layout.start_y, 1);

        let top = view.with_anchor_y(AnchorY::Top).layout(Viewport::new(80, 24));
        assert_eq!(top.start_y, 0);
    }
}
