//! Views: map engine state onto a framebuffer.
//!
//! Pure (no I/O), so every screen can be unit-tested by inspecting the
//! buffer. One board cell is rendered as `cell_w` x `cell_h` terminal
//! cells (2x1 by default to compensate glyph aspect ratio).

use crate::core::Game;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::CELL_SIZE;

/// Snake body color.
pub const SNAKE_COLOR: Rgb = Rgb::new(67, 171, 67);
/// Food color.
pub const FOOD_COLOR: Rgb = Rgb::new(171, 67, 67);
/// Prompt/score text color.
pub const TEXT_COLOR: Rgb = Rgb::new(255, 255, 255);

const FIELD_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal dimensions the views draw into.
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

/// Renders the three screens: playing field, title, and game over.
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Playing screen: bordered field, food, snake, score top-right.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = self.blank(viewport);

        let cols = (game.width() / CELL_SIZE).max(1) as u16;
        let rows = (game.height() / CELL_SIZE).max(1) as u16;
        let frame_w = cols * self.cell_w + 2;
        let frame_h = rows * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        if let Some(food) = game.food().position() {
            self.fill_board_cell(
                &mut fb,
                start_x,
                start_y,
                (food.x / CELL_SIZE) as u16,
                (food.y / CELL_SIZE) as u16,
                FOOD_COLOR,
            );
        }

        for segment in game.snake().segments() {
            self.fill_board_cell(
                &mut fb,
                start_x,
                start_y,
                (segment.x / CELL_SIZE) as u16,
                (segment.y / CELL_SIZE) as u16,
                SNAKE_COLOR,
            );
        }

        fb.put_str_right(
            viewport.width.saturating_sub(2),
            0,
            &format!("Score: {}", game.score()),
            text_style(),
        );

        fb
    }

    /// Title screen with the start prompt.
    pub fn render_start(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = self.blank(viewport);
        let mid = viewport.height / 2;

        let mut title = text_style();
        title.bold = true;

        fb.put_str_centered(mid.saturating_sub(4), "S N A K E", title);
        fb.put_str_centered(mid, "Press Space to Start", text_style());
        fb.put_str_centered(mid + 2, "Use Arrow Keys to Move", text_style());
        fb
    }

    /// Game-over screen with the final score and the restart prompt.
    pub fn render_game_over(&self, score: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = self.blank(viewport);
        let mid = viewport.height / 2;

        let mut headline = text_style();
        headline.bold = true;

        fb.put_str_centered(mid.saturating_sub(2), "Game Over", headline);
        fb.put_str_centered(mid, &format!("Your Score was {score}!"), text_style());
        fb.put_str_centered(mid + 2, "Press R to Restart", text_style());
        fb.put_str_centered(mid + 4, "Press Q to Quit", text_style());
        fb
    }

    fn blank(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle {
                fg: TEXT_COLOR,
                bg: FIELD_BG,
                bold: false,
            },
        });
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: FIELD_BG,
            bold: false,
        };

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

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        color: Rgb,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        let style = CellStyle {
            fg: color,
            bg: color,
            bold: false,
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }
}

fn text_style() -> CellStyle {
    CellStyle {
        fg: TEXT_COLOR,
        bg: FIELD_BG,
        bold: false,
    }
}
