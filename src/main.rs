use std::path::Path;

use log::{info, warn};
use macroquad::prelude::*;

use snake_grid::clock::Clock;
use snake_grid::game::{self, Game, GameContext};
use snake_grid::grid::{Board, SCREEN_HEIGHT, SCREEN_WIDTH};
use snake_grid::input::KeyboardInput;
use snake_grid::logging::{self, LOG_PATH};
use snake_grid::render::Screen;
use snake_grid::settings::{SETTINGS_PATH, Settings};

fn window_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: settings.window_title.clone(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() {
    let loaded = Settings::load_from(Path::new(SETTINGS_PATH));
    let settings = match &loaded {
        Ok(Some(settings)) => settings.clone(),
        _ => Settings::default(),
    };

    if let Err(err) = logging::init(Path::new(LOG_PATH), settings.level_filter()) {
        eprintln!("snake: logging disabled: {err:#}");
    }
    match loaded {
        Ok(Some(_)) => info!("settings loaded from {SETTINGS_PATH}"),
        Ok(None) => info!("no {SETTINGS_PATH}, using default settings"),
        Err(err) => warn!("ignoring {SETTINGS_PATH}: {err:#}"),
    }

    macroquad::Window::from_config(window_conf(&settings), play(settings));
}

async fn play(settings: Settings) {
    prevent_quit();
    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    let board = Board::STANDARD;
    info!(
        "starting {}x{} board ({}x{} cells), {} ticks/s",
        board.width(),
        board.height(),
        board.columns(),
        board.rows(),
        settings.tick_rate()
    );

    let context = GameContext {
        screen: Screen::new(&settings.palette),
        input: KeyboardInput::new(),
        clock: Clock::new(settings.tick_rate()),
        palette: settings.palette,
    };
    game::run(context, Game::new(board)).await;
}
