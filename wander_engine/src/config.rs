//! Game configuration.
//!
//! Settings are read from `game.toml` in the data directory. Every key is optional and a
//! missing file simply means the defaults are used.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::grid::{Grid, GridError, GridPos};
use crate::player::{DEFAULT_GOLD, DEFAULT_HEALTH};

pub const CONFIG_FILE: &str = "game.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config file '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("parsing config file '{path}': {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
    #[error("invalid grid settings: {0}")]
    Grid(#[from] GridError),
    #[error("starting health must be above zero")]
    NoHealth,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid_size: i32,
    pub town: GridPos,
    pub save_dir: PathBuf,
    pub starting_health: u32,
    pub starting_gold: u32,
    /// Seed for the random source; entropy is used when absent.
    pub seed: Option<u64>,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            town: GridPos(0, 0),
            save_dir: PathBuf::from("saved_games"),
            starting_health: DEFAULT_HEALTH,
            starting_gold: DEFAULT_GOLD,
            seed: None,
        }
    }
}
impl GameConfig {
    /// Load settings from `path`, falling back to defaults if the file doesn't exist.
    ///
    /// # Errors
    /// - if the file exists but can't be read or parsed
    /// - if the resulting settings are invalid
    pub fn load(path: &Path) -> Result<GameConfig, ConfigError> {
        if !path.exists() {
            info!("no config at '{}', using defaults", path.display());
            return Ok(GameConfig::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = GameConfig::from_toml(&raw).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!("loaded config from '{}'", path.display());
        Ok(config)
    }

    /// Parse and validate settings from TOML text.
    ///
    /// # Errors
    /// - if the text isn't valid TOML for these settings, or the settings are invalid
    pub fn from_toml(raw: &str) -> Result<GameConfig, ConfigError> {
        let config: GameConfig = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// - if the grid can't be built or the player would start dead
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid()?;
        if self.starting_health == 0 {
            return Err(ConfigError::NoHealth);
        }
        Ok(())
    }

    /// The board described by these settings.
    ///
    /// # Errors
    /// - if the size or town position is invalid
    pub fn grid(&self) -> Result<Grid, GridError> {
        Grid::new(self.grid_size, self.town)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let config = GameConfig::from_toml("grid_size = 6\ntown = [5, 2]\nseed = 9").unwrap();
        assert_eq!(config.grid_size, 6);
        assert_eq!(config.town, GridPos(5, 2));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.starting_gold, 15);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        assert!(matches!(
            GameConfig::from_toml("grid_size = 1"),
            Err(ConfigError::Grid(GridError::TooSmall(1)))
        ));
        assert!(matches!(
            GameConfig::from_toml("grid_size = 2000000000"),
            Err(ConfigError::Grid(GridError::TooLarge(2_000_000_000)))
        ));
        assert!(matches!(
            GameConfig::from_toml("town = [10, 0]"),
            Err(ConfigError::Grid(GridError::TownOutOfBounds { .. }))
        ));
        assert!(matches!(
            GameConfig::from_toml("starting_health = 0"),
            Err(ConfigError::NoHealth)
        ));
        assert!(matches!(
            GameConfig::from_toml("grid_sise = 4"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn load_missing_file_uses_defaults_and_reads_present_one() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        assert_eq!(GameConfig::load(&path).unwrap(), GameConfig::default());

        fs::write(&path, "starting_gold = 99\n").unwrap();
        assert_eq!(GameConfig::load(&path).unwrap().starting_gold, 99);

        fs::write(&path, "starting_gold = \"lots\"\n").unwrap();
        match GameConfig::load(&path) {
            Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
