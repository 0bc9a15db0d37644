//! Game configuration resource.
//!
//! Settings loaded from an INI configuration file, with defaults for safe
//! startup when the file is missing.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 120
//!
//! [game]
//! lives = 5
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_STARTING_LIVES: u32 = 5;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window and gameplay settings.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Lives the player starts with and regains on respawn.
    pub starting_lives: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            starting_lives: DEFAULT_STARTING_LIVES,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an
    /// error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(lives) = config.getuint("game", "lives").ok().flatten() {
            self.starting_lives = lives as u32;
        }

        log::info!(
            "Config loaded from {}: window {}x{} @ {} fps, {} lives",
            self.config_path.display(),
            self.window_width,
            self.window_height,
            self.target_fps,
            self.starting_lives
        );
        Ok(())
    }
}
