use macroquad::prelude::*;
use serde::{Deserialize, Serialize};

use crate::grid::Cell;

/// Colours used on the board, stored as RGB byte triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: [u8; 3],
    pub border: [u8; 3],
    pub apple: [u8; 3],
    pub snake: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0, 0, 0],
            border: [93, 216, 228],
            apple: [255, 0, 0],
            snake: [0, 255, 0],
        }
    }
}

impl Palette {
    pub fn background(&self) -> Color {
        rgb(self.background)
    }

    pub fn border(&self) -> Color {
        rgb(self.border)
    }

    pub fn apple(&self) -> Color {
        rgb(self.apple)
    }

    pub fn snake(&self) -> Color {
        rgb(self.snake)
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgba(r, g, b, 255)
}

/// Something rectangles can be painted on.
pub trait Surface {
    /// Fills `rect` when `border_width` is zero, otherwise outlines it with a
    /// line of that width.
    fn draw_rect(&mut self, color: Color, rect: Rect, border_width: f32);
}

/// An entity that knows how to paint itself.
pub trait Drawable {
    fn render(&self, surface: &mut dyn Surface, palette: &Palette);
}

/// Paints a filled cell with a one pixel border.
pub fn paint_cell(surface: &mut dyn Surface, cell: Cell, size: i32, fill: Color, border: Color) {
    let rect = cell.to_rect(size);
    surface.draw_rect(fill, rect, 0.0);
    surface.draw_rect(border, rect, 1.0);
}

/// Paints a cell in the background colour, erasing whatever was there.
pub fn erase_cell(surface: &mut dyn Surface, cell: Cell, size: i32, palette: &Palette) {
    surface.draw_rect(palette.background(), cell.to_rect(size), 0.0);
}

/// The macroquad window's back buffer.
pub struct Screen {
    background: Color,
}

impl Screen {
    pub fn new(palette: &Palette) -> Self {
        Self {
            background: palette.background(),
        }
    }

    /// Macroquad does not keep the previous frame around, so each frame starts
    /// from a blank board.
    pub fn begin_frame(&mut self) {
        clear_background(self.background);
    }

    /// Flips the frame buffer to the display.
    pub async fn present(&mut self) {
        next_frame().await;
    }
}

impl Surface for Screen {
    fn draw_rect(&mut self, color: Color, rect: Rect, border_width: f32) {
        if border_width > 0.0 {
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, border_width, color);
        } else {
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
        }
    }
}
