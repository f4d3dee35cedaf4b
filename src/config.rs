use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Gameplay configuration.
///
/// The defaults reproduce the classic setup: a 20×20 grid, one movement
/// every 150 ms, and a three-segment snake.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    /// Side length of the (square, toroidal) grid
    pub grid_size: u16,

    /// Real time between movement steps
    pub move_interval: Duration,

    /// Snake length at the start of a session
    pub initial_snake_length: u16,

    /// Bound on the number of buffered direction changes
    pub max_queued_turns: usize,
}

impl Config {
    /// Return the default configuration file path
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("wrapsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a TOML file on disk.  If the file does not
    /// exist and `allow_missing` is true, the default `Config` is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, could not be parsed, or
    /// parsed to an invalid configuration.
    pub fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            grid_size: consts::GRID_SIZE,
            move_interval: consts::MOVE_INTERVAL,
            initial_snake_length: consts::INITIAL_SNAKE_LENGTH,
            max_queued_turns: consts::MAX_QUEUED_TURNS,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawConfig {
    grid_size: u16,
    move_interval_ms: u64,
    initial_snake_length: u16,
    max_queued_turns: usize,
}

impl Default for RawConfig {
    fn default() -> RawConfig {
        RawConfig {
            grid_size: consts::GRID_SIZE,
            move_interval_ms: u64::try_from(consts::MOVE_INTERVAL.as_millis()).unwrap_or(u64::MAX),
            initial_snake_length: consts::INITIAL_SNAKE_LENGTH,
            max_queued_turns: consts::MAX_QUEUED_TURNS,
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = InvalidConfig;

    fn try_from(value: RawConfig) -> Result<Config, InvalidConfig> {
        if value.grid_size == 0 {
            return Err(InvalidConfig::ZeroGrid);
        }
        if value.move_interval_ms == 0 {
            return Err(InvalidConfig::ZeroInterval);
        }
        if value.initial_snake_length == 0 {
            return Err(InvalidConfig::ZeroLength);
        }
        // The snake spawns in a straight line, so it must fit across the
        // grid without overlapping itself
        if value.initial_snake_length > value.grid_size {
            return Err(InvalidConfig::SnakeTooLong {
                length: value.initial_snake_length,
                grid_size: value.grid_size,
            });
        }
        if value.max_queued_turns == 0 {
            return Err(InvalidConfig::ZeroQueue);
        }
        Ok(Config {
            grid_size: value.grid_size,
            move_interval: Duration::from_millis(value.move_interval_ms),
            initial_snake_length: value.initial_snake_length,
            max_queued_turns: value.max_queued_turns,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

/// A configuration that parsed but describes an unplayable game
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum InvalidConfig {
    #[error("grid size must be at least 1")]
    ZeroGrid,
    #[error("move interval must be non-zero")]
    ZeroInterval,
    #[error("initial snake length must be at least 1")]
    ZeroLength,
    #[error("initial snake length {length} does not fit on a grid of size {grid_size}")]
    SnakeTooLong { length: u16, grid_size: u16 },
    #[error("turn queue capacity must be at least 1")]
    ZeroQueue,
}
