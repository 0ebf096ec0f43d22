use macroquad::math::Rect;
use macroquad::rand::gen_range;

// Board geometry
pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const CELL_SIZE: i32 = 20;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Displacement of one cell of `cell_size` pixels in this direction.
    pub fn offset(self, cell_size: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, -cell_size),
            Direction::Down => (0, cell_size),
            Direction::Left => (-cell_size, 0),
            Direction::Right => (cell_size, 0),
        }
    }

    /// Picks one of the four directions uniformly.
    pub fn random() -> Direction {
        Direction::ALL[gen_range(0, Direction::ALL.len())]
    }
}

/// Top-left pixel coordinate of one grid square.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_rect(self, cell_size: i32) -> Rect {
        Rect::new(
            self.x as f32,
            self.y as f32,
            cell_size as f32,
            cell_size as f32,
        )
    }
}

/// Fixed-size toroidal board measured in pixels.
///
/// Width and height are exact multiples of the cell size, so every cell
/// produced by [`Board::wrap`] or [`Board::random_cell`] stays aligned.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Board {
    pub const STANDARD: Board = Board::new(SCREEN_WIDTH, SCREEN_HEIGHT, CELL_SIZE);

    pub const fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Cell the snake spawns on: the middle column and row.
    pub fn center(&self) -> Cell {
        Cell::new(
            self.columns() / 2 * self.cell_size,
            self.rows() / 2 * self.cell_size,
        )
    }

    /// Adds a pixel displacement to `position`, re-entering from the opposite
    /// edge when it leaves the board.
    pub fn wrap(&self, position: Cell, (dx, dy): (i32, i32)) -> Cell {
        Cell::new(
            (position.x + dx).rem_euclid(self.width),
            (position.y + dy).rem_euclid(self.height),
        )
    }

    /// The neighbouring cell one step away in `direction`.
    pub fn step(&self, position: Cell, direction: Direction) -> Cell {
        self.wrap(position, direction.offset(self.cell_size))
    }

    pub fn random_cell(&self) -> Cell {
        Cell::new(
            gen_range(0, self.columns()) * self.cell_size,
            gen_range(0, self.rows()) * self.cell_size,
        )
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x)
            && (0..self.height).contains(&cell.y)
            && cell.x % self.cell_size == 0
            && cell.y % self.cell_size == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_direction_offset() {
        assert_eq!(Direction::Up.offset(20), (0, -20));
        assert_eq!(Direction::Down.offset(20), (0, 20));
        assert_eq!(Direction::Left.offset(20), (-20, 0));
        assert_eq!(Direction::Right.offset(20), (20, 0));
    }

    #[test]
    fn test_standard_geometry() {
        let board = Board::STANDARD;
        assert_eq!(board.columns(), 32);
        assert_eq!(board.rows(), 24);
        assert_eq!(board.center(), Cell::new(320, 240));
    }

    #[test]
    fn test_wrap_right_edge() {
        let board = Board::STANDARD;
        assert_eq!(
            board.step(Cell::new(620, 240), Direction::Right),
            Cell::new(0, 240)
        );
    }

    #[test]
    fn test_wrap_negative_is_true_modulo() {
        let board = Board::STANDARD;
        assert_eq!(
            board.step(Cell::new(0, 240), Direction::Left),
            Cell::new(620, 240)
        );
        assert_eq!(
            board.step(Cell::new(100, 0), Direction::Up),
            Cell::new(100, 460)
        );
        assert_eq!(
            board.step(Cell::new(100, 460), Direction::Down),
            Cell::new(100, 0)
        );
    }

    #[test]
    fn test_step_then_reverse_returns_to_origin() {
        let board = Board::STANDARD;
        for column in 0..board.columns() {
            for row in 0..board.rows() {
                let origin = Cell::new(column * CELL_SIZE, row * CELL_SIZE);
                for direction in Direction::ALL {
                    let moved = board.step(origin, direction);
                    assert!(board.contains(moved));
                    assert_eq!(board.step(moved, direction.opposite()), origin);
                }
            }
        }
    }

    #[test]
    fn test_random_cell_is_aligned_and_in_bounds() {
        let board = Board::STANDARD;
        for _ in 0..2_000 {
            let cell = board.random_cell();
            assert!((0..=620).contains(&cell.x), "x out of range: {cell:?}");
            assert!((0..=460).contains(&cell.y), "y out of range: {cell:?}");
            assert_eq!(cell.x % 20, 0);
            assert_eq!(cell.y % 20, 0);
        }
    }

    #[test]
    fn test_random_direction_is_valid() {
        for _ in 0..100 {
            assert!(Direction::ALL.contains(&Direction::random()));
        }
    }

    #[test]
    fn test_cell_rect() {
        let rect = Cell::new(40, 60).to_rect(20);
        assert_eq!(rect, Rect::new(40.0, 60.0, 20.0, 20.0));
    }
}
