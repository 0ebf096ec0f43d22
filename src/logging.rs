use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};

pub const LOG_PATH: &str = "snake.log";

/// Sends `log` records at or above `level` to a freshly truncated file.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    WriteLogger::init(level, Config::default(), file).context("logger already installed")?;
    Ok(())
}
