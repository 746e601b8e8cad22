//! Tunable game constants, loadable from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Every number the simulation uses.  Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width in playfield units.
    pub width: u32,
    /// Playfield height in playfield units.
    pub height: u32,
    pub starting_lives: u32,
    pub meteor_count: usize,
    /// Per-slot fall distance per tick.  Slot `i` uses entry `i % len`.
    pub meteor_speeds: Vec<u32>,
    /// Degrees per second.
    pub meteor_rotation_speed: f32,
    /// Seconds between ship animation frames.
    pub animation_speed: f32,
    /// Ship movement per tick and held direction.
    pub ship_step: f32,
    /// Laser climb per tick.
    pub laser_step: f32,
    /// Points for shooting a meteor.
    pub laser_score: u32,
    /// Respawned meteors keep at least this far from either side wall.
    pub spawn_margin: u32,
    pub frames_per_second: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 700,
            starting_lives: 3,
            meteor_count: 5,
            meteor_speeds: vec![1, 2, 3, 4, 5, 6],
            meteor_rotation_speed: 90.0,
            animation_speed: 0.2,
            ship_step: 5.0,
            laser_step: 10.0,
            laser_score: 10,
            spawn_margin: 40,
            frames_per_second: 60,
        }
    }
}

impl GameConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.meteor_speeds.is_empty() {
            return Err(ConfigError::Invalid("meteor_speeds must not be empty".into()));
        }
        if self.meteor_count == 0 {
            return Err(ConfigError::Invalid("meteor_count must be at least 1".into()));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid("starting_lives must be at least 1".into()));
        }
        if self.width <= 2 * self.spawn_margin {
            return Err(ConfigError::Invalid(format!(
                "width {} leaves no room between spawn margins of {}",
                self.width, self.spawn_margin
            )));
        }
        if self.height == 0 {
            return Err(ConfigError::Invalid("height must be positive".into()));
        }
        if self.animation_speed.is_nan() || self.animation_speed <= 0.0 {
            return Err(ConfigError::Invalid("animation_speed must be positive".into()));
        }
        if self.frames_per_second == 0 {
            return Err(ConfigError::Invalid("frames_per_second must be positive".into()));
        }
        Ok(())
    }

    pub fn field_width(&self) -> f32 {
        self.width as f32
    }

    pub fn field_height(&self) -> f32 {
        self.height as f32
    }
}
