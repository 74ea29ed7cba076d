use std::path::Path;

use crate::ai::EvalWeights;
use crate::error::ConfigError;
use crate::game::{Board, COLS, ROWS, WINDOW};

/// Named search depths offered by the console game.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth in plies.
    pub fn depth(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }
}

/// Board shape and turn order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub engine_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: ROWS,
            cols: COLS,
            engine_first: false,
        }
    }
}

impl GameConfig {
    /// An empty board with the configured dimensions.
    pub fn board(&self) -> Result<Board, ConfigError> {
        Board::with_dimensions(self.rows, self.cols)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

/// Search settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    /// Explicit depth, overriding `difficulty`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    /// Fixed tie-break seed. Unset means OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub pruning: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            difficulty: Difficulty::default(),
            depth: None,
            seed: None,
            pruning: true,
        }
    }
}

impl EngineConfig {
    /// The depth actually searched.
    pub fn depth(&self) -> usize {
        self.depth.unwrap_or_else(|| self.difficulty.depth())
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub engine: EngineConfig,
    pub eval: EvalWeights,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.rows < WINDOW {
            return Err(ConfigError::Validation(format!(
                "game.rows must be >= {WINDOW}"
            )));
        }
        if self.game.cols < WINDOW {
            return Err(ConfigError::Validation(format!(
                "game.cols must be >= {WINDOW}"
            )));
        }
        if self.eval.four <= 0 {
            return Err(ConfigError::Validation("eval.four must be > 0".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
