use log::{debug, info};

use crate::apple::Apple;
use crate::clock::Clock;
use crate::grid::Board;
use crate::input::{Control, InputSource, apply_events};
use crate::render::{Drawable, Palette, Screen, Surface};
use crate::snake::{MoveOutcome, Snake};

/// Result of one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub outcome: MoveOutcome,
    pub ate_apple: bool,
}

/// Board state: one snake, one apple.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    snake: Snake,
    apple: Apple,
}

impl Game {
    pub fn new(board: Board) -> Self {
        let apple = Apple::new(board);
        let snake = Snake::new(board);
        Self {
            board,
            snake,
            apple,
        }
    }

    pub fn with_parts(board: Board, snake: Snake, apple: Apple) -> Self {
        Self {
            board,
            snake,
            apple,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    /// Advances the snake one cell. The snake grows when the cell it is about
    /// to enter holds the apple, and the apple then moves elsewhere.
    pub fn tick(&mut self) -> TickReport {
        let grow = self.snake.next_head() == self.apple.position();
        let outcome = self.snake.advance(grow);
        let ate_apple = grow && outcome == MoveOutcome::Moved;
        if ate_apple {
            self.apple.relocate();
            let cell = self.apple.position();
            debug!(
                "apple eaten, length {}, apple moved to ({}, {})",
                self.snake.len(),
                cell.x,
                cell.y
            );
        }
        TickReport { outcome, ate_apple }
    }

    /// Paints the snake, then the apple.
    pub fn render(&self, surface: &mut dyn Surface, palette: &Palette) {
        let entities: [&dyn Drawable; 2] = [&self.snake, &self.apple];
        for entity in entities {
            entity.render(surface, palette);
        }
    }
}

/// Everything the loop needs from the outside world, built once at startup.
pub struct GameContext<I: InputSource> {
    pub screen: Screen,
    pub input: I,
    pub clock: Clock,
    pub palette: Palette,
}

/// Runs ticks until a quit event arrives.
pub async fn run<I: InputSource>(mut context: GameContext<I>, mut game: Game) {
    loop {
        context.clock.tick();

        let events = context.input.drain();
        if apply_events(events, game.snake_mut()) == Control::Quit {
            info!("quit requested, length {}", game.snake().len());
            break;
        }

        game.tick();

        context.screen.begin_frame();
        game.render(&mut context.screen, &context.palette);
        context.screen.present().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Direction};
    use crate::render::testing::RecordingSurface;

    #[test]
    fn test_new_game() {
        let game = Game::new(Board::STANDARD);
        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.snake().head(), Cell::new(320, 240));
        assert!(game.board().contains(game.apple().position()));
    }

    #[test]
    fn test_tick_without_apple() {
        let board = Board::STANDARD;
        let mut game = Game::with_parts(board, Snake::new(board), Apple::at(board, Cell::new(0, 0)));

        let report = game.tick();
        assert_eq!(report.outcome, MoveOutcome::Moved);
        assert!(!report.ate_apple);
        assert_eq!(game.apple().position(), Cell::new(0, 0));
        assert_eq!(game.snake().len(), 1);
    }

    #[test]
    fn test_tick_eats_apple() {
        let board = Board::STANDARD;
        let mut game = Game::with_parts(
            board,
            Snake::new(board),
            Apple::at(board, Cell::new(340, 240)),
        );

        let report = game.tick();
        assert!(report.ate_apple);
        assert_eq!(game.snake().len(), 2);
        assert_eq!(game.snake().head(), Cell::new(340, 240));
        assert!(board.contains(game.apple().position()));
    }

    #[test]
    fn test_turn_towards_apple_is_honoured() {
        let board = Board::STANDARD;
        let mut game = Game::with_parts(
            board,
            Snake::new(board),
            Apple::at(board, Cell::new(320, 220)),
        );
        game.snake_mut().request_direction(Direction::Up);

        let report = game.tick();
        assert!(report.ate_apple);
        assert_eq!(game.snake().len(), 2);
    }

    #[test]
    fn test_self_collision_never_eats() {
        let board = Board::STANDARD;
        let snake = Snake::with_body(
            board,
            vec![Cell::new(340, 240), Cell::new(320, 240), Cell::new(300, 240)],
            Direction::Left,
        );
        let mut game = Game::with_parts(board, snake, Apple::at(board, Cell::new(320, 240)));

        let report = game.tick();
        assert_eq!(report.outcome, MoveOutcome::SelfCollided);
        assert!(!report.ate_apple);
        assert_eq!(game.apple().position(), Cell::new(320, 240));
    }

    #[test]
    fn test_render_draws_snake_before_apple() {
        let board = Board::STANDARD;
        let palette = Palette::default();
        let game = Game::with_parts(board, Snake::new(board), Apple::at(board, Cell::new(0, 0)));

        let mut surface = RecordingSurface::default();
        game.render(&mut surface, &palette);

        let fills = surface.fills();
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].color, palette.snake());
        assert_eq!(fills[1].color, palette.apple());
    }
}
