use std::collections::VecDeque;

use log::{debug, info};

use crate::grid::{Board, Cell, Direction};
use crate::render::{Drawable, Palette, Surface, erase_cell, paint_cell};

/// What happened to the snake during one [`Snake::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The new head landed on the body; the snake has been reset.
    SelfCollided,
}

#[derive(Debug, Clone)]
pub struct Snake {
    board: Board,
    /// Head at the front, tail at the back. Never empty.
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    last_tail: Option<Cell>,
}

impl Snake {
    /// A one-cell snake in the middle of the board heading right.
    pub fn new(board: Board) -> Self {
        Self::with_body(board, vec![board.center()], Direction::Right)
    }

    /// Builds a snake from explicit segments, head first. An empty list
    /// yields a one-cell snake at the centre.
    pub fn with_body(board: Board, body: Vec<Cell>, direction: Direction) -> Self {
        let mut body = VecDeque::from(body);
        if body.is_empty() {
            body.push_back(board.center());
        }
        Self {
            board,
            body,
            direction,
            pending_direction: None,
            last_tail: None,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Cell vacated by the most recent move, if it shrank the tail.
    pub fn last_tail(&self) -> Option<Cell> {
        self.last_tail
    }

    /// Queues a turn for the next advance. Reversing onto the active
    /// direction is refused; the pending slot is not consulted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// The head the next [`Snake::advance`] would produce.
    pub fn next_head(&self) -> Cell {
        let direction = self.pending_direction.unwrap_or(self.direction);
        self.board.step(self.head(), direction)
    }

    /// Moves one cell. With `grow` set the tail stays put and the snake gets
    /// one cell longer.
    pub fn advance(&mut self, grow: bool) -> MoveOutcome {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = self.board.step(self.head(), self.direction);
        if self.body.contains(&new_head) {
            info!(
                "snake ran into itself at ({}, {}) with length {}, resetting",
                new_head.x,
                new_head.y,
                self.len()
            );
            self.reset();
            return MoveOutcome::SelfCollided;
        }

        self.body.push_front(new_head);
        self.last_tail = if grow {
            debug!("snake grew to length {}", self.len());
            None
        } else {
            self.body.pop_back()
        };
        MoveOutcome::Moved
    }

    /// Back to a single cell at the centre, facing a random direction.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_back(self.board.center());
        self.direction = Direction::random();
        self.pending_direction = None;
        self.last_tail = None;
    }
}

impl Drawable for Snake {
    fn render(&self, surface: &mut dyn Surface, palette: &Palette) {
        let size = self.board.cell_size();
        for cell in self.body.iter().skip(1) {
            paint_cell(surface, *cell, size, palette.snake(), palette.border());
        }
        paint_cell(surface, self.head(), size, palette.snake(), palette.border());

        if let Some(tail) = self.last_tail {
            erase_cell(surface, tail, size, palette);
        }
    }
}
