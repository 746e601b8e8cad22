//! Error types for the host side of the game.
//!
//! The simulation itself cannot fail; only configuration loading and
//! terminal I/O produce errors.

use thiserror::Error;

/// Problems loading or validating a [`GameConfig`](crate::config::GameConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level error returned by the binary.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
