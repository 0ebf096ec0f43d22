use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::render::Palette;

pub const SETTINGS_PATH: &str = "snake_settings.json";

const DEFAULT_TICK_RATE: u32 = 20;
const MAX_TICK_RATE: u32 = 120;

/// Optional overrides read from `snake_settings.json`. Board geometry is not
/// configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tick_rate: u32,
    pub window_title: String,
    pub palette: Palette,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            window_title: "Snake".to_owned(),
            palette: Palette::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl Settings {
    /// Reads settings from `path`. A missing file is not an error and yields
    /// `None`.
    pub fn load_from(path: &Path) -> Result<Option<Settings>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let settings = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(Some(settings))
    }

    /// Ticks per second, kept within 1..=120.
    pub fn tick_rate(&self) -> u32 {
        self.tick_rate.clamp(1, MAX_TICK_RATE)
    }

    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}
