//! Rendering layer: all terminal output lives here.
//!
//! The game draws into a fixed 750×750 world; this renderer scales that
//! world onto whatever cell grid the terminal currently offers.  A frame is
//! composed in an off-screen cell buffer and written out in one go by
//! `present`, so the terminal never shows a half-drawn frame.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use pixel_raiders::constants::{HEIGHT, WIDTH};
use pixel_raiders::frontend::{Align, Rect, Renderer, Rgb};
use pixel_raiders::Sprite;

// ── Glyphs ───────────────────────────────────────────────────────────────────

const G_EMPTY: char = ' ';
const G_SOLID: char = '█';
const G_BAR: char = '▀';
const C_BACKGROUND: Color = Color::Black;

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
}

const BLANK: Cell = Cell {
    ch: G_EMPTY,
    fg: C_BACKGROUND,
};

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(TerminalRenderer {
            out,
            cols,
            rows,
            cells: vec![BLANK; cols as usize * rows as usize],
        })
    }

    // ── World → cell mapping ─────────────────────────────────────────────────

    fn col(&self, x: i32) -> i32 {
        x * self.cols as i32 / WIDTH
    }

    fn row(&self, y: i32) -> i32 {
        y * self.rows as i32 / HEIGHT
    }

    fn put(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells[idx] = cell;
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) {
        // Follow terminal resizes between frames.
        if let Ok((cols, rows)) = terminal::size() {
            if (cols, rows) != (self.cols, self.rows) {
                self.cols = cols;
                self.rows = rows;
                self.cells = vec![BLANK; cols as usize * rows as usize];
            }
        }
        self.cells.fill(BLANK);
    }

    /// A cell lights up if any opaque pixel of the sprite falls inside it.
    fn blit(&mut self, sprite: &Sprite, pos: (i32, i32)) {
        let (x0, y0) = pos;
        let cell = Cell {
            ch: G_SOLID,
            fg: color(sprite.tint),
        };
        let mask = &sprite.mask;
        for py in 0..mask.height() as i32 {
            let y = y0 + py;
            if !(0..HEIGHT).contains(&y) {
                continue;
            }
            let row = self.row(y);
            for px in 0..mask.width() as i32 {
                let x = x0 + px;
                if (0..WIDTH).contains(&x) && mask.get(px, py) {
                    let col = self.col(x);
                    self.put(col, row, cell);
                }
            }
        }
    }

    fn draw_rect(&mut self, rgb: Rgb, rect: Rect) {
        if rect.w <= 0 || rect.h <= 0 {
            return;
        }
        let cell = Cell {
            ch: G_BAR,
            fg: color(rgb),
        };
        let (c0, c1) = (self.col(rect.x), self.col(rect.x + rect.w - 1));
        let (r0, r1) = (self.row(rect.y), self.row(rect.y + rect.h - 1));
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.put(col, row, cell);
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, align: Align, rgb: Rgb) {
        let len = text.chars().count() as i32;
        let anchor = self.col(x);
        let start = match align {
            Align::Left => anchor,
            Align::Right => anchor - len,
            Align::Center => anchor - len / 2,
        };
        let row = self.row(y);
        let fg = color(rgb);
        for (i, ch) in text.chars().enumerate() {
            self.put(start + i as i32, row, Cell { ch, fg });
        }
    }

    fn present(&mut self) -> std::io::Result<()> {
        let cols = self.cols as usize;
        self.out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
        for (row, line) in self.cells.chunks(cols.max(1)).enumerate() {
            self.out.queue(cursor::MoveTo(0, row as u16))?;
            let mut current: Option<Color> = None;
            let mut run = String::with_capacity(cols);
            for cell in line {
                if current != Some(cell.fg) {
                    if let Some(fg) = current {
                        self.out.queue(style::SetForegroundColor(fg))?;
                        self.out.queue(Print(&run))?;
                        run.clear();
                    }
                    current = Some(cell.fg);
                }
                run.push(cell.ch);
            }
            if let Some(fg) = current {
                self.out.queue(style::SetForegroundColor(fg))?;
                self.out.queue(Print(&run))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }
}
