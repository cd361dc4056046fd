//! Terminal backend - all terminal output lives here.
//!
//! The field is scaled onto the character grid; each cell is one "pixel"
//! painted with a true-colour background. Text and outlines are glyphs drawn
//! over whatever background the cell already has.

use std::io::Write;

use anyhow::Context;
use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
};
use glam::Vec2;

use super::{Align, Surface};
use crate::Rgb;
use crate::sim::Rect;

/// Glyph for outline cells on shapes too thin for box drawing
const EDGE_GLYPH: char = '▕';
const BALL_GLYPH: char = '●';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Rgb,
    bg: Rgb,
}

impl Cell {
    fn blank(bg: Rgb) -> Self {
        Self { ch: ' ', fg: bg, bg }
    }
}

fn rgb(c: Rgb) -> Color {
    Color::Rgb {
        r: c[0],
        g: c[1],
        b: c[2],
    }
}

/// Cell grid covering a field of `field` pixels
pub struct TerminalSurface<W: Write> {
    out: W,
    field: Vec2,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, field: Vec2, cols: u16, rows: u16) -> Self {
        let mut surface = Self {
            out,
            field,
            cols: 0,
            rows: 0,
            cells: Vec::new(),
        };
        surface.resize(cols, rows);
        surface
    }

    /// Match a new terminal size; takes effect from the next frame
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.max(1);
        self.cells = vec![Cell::blank([0, 0, 0]); self.cols as usize * self.rows as usize];
        log::debug!("Terminal surface resized to {}x{}", self.cols, self.rows);
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Size of one cell in field pixels
    fn cell_size(&self) -> Vec2 {
        Vec2::new(
            self.field.x / self.cols as f32,
            self.field.y / self.rows as f32,
        )
    }

    /// Cell column/row containing a field point (may be off-grid)
    fn to_cell(&self, p: Vec2) -> (i32, i32) {
        let cell = self.cell_size();
        ((p.x / cell.x).floor() as i32, (p.y / cell.y).floor() as i32)
    }

    /// Field position of a cell's centre
    fn cell_center(&self, col: i32, row: i32) -> Vec2 {
        (Vec2::new(col as f32, row as f32) + 0.5) * self.cell_size()
    }

    /// Inclusive cell range whose centres lie inside `rect`
    fn covered(&self, rect: &Rect) -> Option<(i32, i32, i32, i32)> {
        let cell = self.cell_size();
        let c0 = (rect.left() / cell.x - 0.5).ceil() as i32;
        let c1 = (rect.right() / cell.x - 0.5).ceil() as i32 - 1;
        let r0 = (rect.top() / cell.y - 0.5).ceil() as i32;
        let r1 = (rect.bottom() / cell.y - 0.5).ceil() as i32 - 1;
        let c0 = c0.max(0);
        let r0 = r0.max(0);
        let c1 = c1.min(self.cols as i32 - 1);
        let r1 = r1.min(self.rows as i32 - 1);
        (c0 <= c1 && r0 <= r1).then_some((c0, r0, c1, r1))
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        let index = row as usize * self.cols as usize + col as usize;
        self.cells.get_mut(index)
    }

    fn paint(&mut self, col: i32, row: i32, bg: Rgb) {
        if let Some(cell) = self.cell_mut(col, row) {
            *cell = Cell::blank(bg);
        }
    }

    fn glyph(&mut self, col: i32, row: i32, ch: char, fg: Rgb) {
        if let Some(cell) = self.cell_mut(col, row) {
            cell.ch = ch;
            cell.fg = fg;
        }
    }

    /// Cells whose centre lies within `radius` of `center`; never empty for
    /// an on-grid centre
    fn disc(&self, center: Vec2, radius: f32) -> Vec<(i32, i32)> {
        let (c0, r0) = self.to_cell(center - radius);
        let (c1, r1) = self.to_cell(center + radius);
        let inside = |col: i32, row: i32| self.cell_center(col, row).distance(center) <= radius;
        let mut cells: Vec<(i32, i32)> = (r0..=r1)
            .flat_map(|row| (c0..=c1).map(move |col| (col, row)))
            .filter(|&(col, row)| inside(col, row))
            .collect();
        if cells.is_empty() {
            cells.push(self.to_cell(center));
        }
        cells
    }

    #[cfg(test)]
    fn cell(&self, col: i32, row: i32) -> Cell {
        self.cells[row as usize * self.cols as usize + col as usize]
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self, color: Rgb) {
        self.cells.fill(Cell::blank(color));
    }

    fn fill_rect(&mut self, rect: &Rect, color: Rgb) {
        if let Some((c0, r0, c1, r1)) = self.covered(rect) {
            for row in r0..=r1 {
                for col in c0..=c1 {
                    self.paint(col, row, color);
                }
            }
        }
    }

    fn stroke_rect(&mut self, rect: &Rect, color: Rgb) {
        let Some((c0, r0, c1, r1)) = self.covered(rect) else {
            return;
        };
        if c1 - c0 < 1 || r1 - r0 < 1 {
            // Too thin for a box: mark the right edge so neighbours separate
            for row in r0..=r1 {
                self.glyph(c1, row, EDGE_GLYPH, color);
            }
            return;
        }
        for col in c0 + 1..c1 {
            self.glyph(col, r0, '─', color);
            self.glyph(col, r1, '─', color);
        }
        for row in r0 + 1..r1 {
            self.glyph(c0, row, '│', color);
            self.glyph(c1, row, '│', color);
        }
        self.glyph(c0, r0, '┌', color);
        self.glyph(c1, r0, '┐', color);
        self.glyph(c0, r1, '└', color);
        self.glyph(c1, r1, '┘', color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        for (col, row) in self.disc(center, radius) {
            self.paint(col, row, color);
        }
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        let cells = self.disc(center, radius);
        for &(col, row) in &cells {
            let boundary = [(-1, 0), (1, 0), (0, -1), (0, 1)]
                .iter()
                .any(|(dc, dr)| !cells.contains(&(col + dc, row + dr)));
            if boundary {
                self.glyph(col, row, BALL_GLYPH, color);
            }
        }
    }

    fn draw_text(&mut self, pos: Vec2, text: &str, color: Rgb, align: Align) {
        let (mut col, row) = self.to_cell(pos);
        if align == Align::Center {
            col -= text.chars().count() as i32 / 2;
        }
        for ch in text.chars() {
            self.glyph(col, row, ch, color);
            col += 1;
        }
    }

    fn present(&mut self) -> anyhow::Result<()> {
        let mut current: Option<(Rgb, Rgb)> = None;
        for row in 0..self.rows {
            self.out.queue(cursor::MoveTo(0, row))?;
            let start = row as usize * self.cols as usize;
            for cell in &self.cells[start..start + self.cols as usize] {
                if current != Some((cell.fg, cell.bg)) {
                    self.out.queue(style::SetBackgroundColor(rgb(cell.bg)))?;
                    self.out.queue(style::SetForegroundColor(rgb(cell.fg)))?;
                    current = Some((cell.fg, cell.bg));
                }
                self.out.queue(Print(cell.ch))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush().context("failed to flush frame to terminal")?;
        Ok(())
    }
}
