use crate::grid::{Board, Cell};
use crate::render::{Drawable, Palette, Surface, paint_cell};

/// The single piece of food on the board.
#[derive(Debug, Clone)]
pub struct Apple {
    board: Board,
    position: Cell,
}

impl Apple {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            position: board.random_cell(),
        }
    }

    /// Places the apple on a known cell.
    pub fn at(board: Board, position: Cell) -> Self {
        Self { board, position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the apple to a fresh random cell. The cell may lie under the
    /// snake; nothing checks for that.
    pub fn relocate(&mut self) {
        self.position = self.board.random_cell();
    }
}

impl Drawable for Apple {
    fn render(&self, surface: &mut dyn Surface, palette: &Palette) {
        paint_cell(
            surface,
            self.position,
            self.board.cell_size(),
            palette.apple(),
            palette.border(),
        );
    }
}
