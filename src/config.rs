use std::path::Path;
use std::time::Duration;

use log::warn;

use crate::ai::PlayoutBudget;
use crate::error::ConfigError;

/// Largest board the exhaustive search may be configured for: a 4x4 grid.
pub const MAX_SEARCH_CELLS: usize = 16;

/// Which family of game to play.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    /// Place a mark on any empty cell
    #[default]
    TicTacToe,
    /// Drop a piece into a column
    ConnectFour,
}

impl GameKind {
    /// Standard (rows, columns, win length) for the family.
    pub fn default_dimensions(self) -> (usize, usize, usize) {
        match self {
            GameKind::TicTacToe => (3, 3, 3),
            GameKind::ConnectFour => (6, 7, 4),
        }
    }
}

/// Strength of the automated player on boards small enough to search.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal moves
    Easy,
    /// Exhaustive minimax
    #[default]
    Hard,
}

/// Board shape and win condition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub kind: GameKind,
    pub rows: usize,
    pub columns: usize,
    pub win_length: usize,
}

impl GameConfig {
    /// Standard board for a game family.
    pub fn for_kind(kind: GameKind) -> Self {
        let (rows, columns, win_length) = kind.default_dimensions();
        GameConfig {
            kind,
            rows,
            columns,
            win_length,
        }
    }

    /// Reject empty boards and win lengths no line on the board can reach.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 || self.win_length == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
                win_length: self.win_length,
            });
        }
        if self.win_length > self.rows && self.win_length > self.columns {
            return Err(ConfigError::Unwinnable {
                rows: self.rows,
                columns: self.columns,
                win_length: self.win_length,
            });
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_kind(GameKind::default())
    }
}

/// Automated player settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// Boards with at most this many cells are searched exhaustively.
    pub search_cell_limit: usize,
    /// Monte-Carlo thinking time per move.
    pub think_time_ms: u64,
    /// Fixed playout count; replaces the time budget when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playout_iterations: Option<u32>,
    /// Seed for the shared generator; OS entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            difficulty: Difficulty::Hard,
            search_cell_limit: 16,
            think_time_ms: 100,
            playout_iterations: None,
            seed: None,
        }
    }
}

impl AiConfig {
    pub fn budget(&self) -> PlayoutBudget {
        match self.playout_iterations {
            Some(n) => PlayoutBudget::Iterations(n),
            None => PlayoutBudget::Time(Duration::from_millis(self.think_time_ms)),
        }
    }

    /// Whether boards of `cells` cells are handled by exhaustive search.
    pub fn searches(&self, cells: usize) -> bool {
        cells <= self.search_cell_limit
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_cell_limit > MAX_SEARCH_CELLS {
            return Err(ConfigError::Validation(format!(
                "ai.search_cell_limit must be <= {MAX_SEARCH_CELLS}"
            )));
        }
        if self.playout_iterations == Some(0) {
            return Err(ConfigError::Validation(
                "ai.playout_iterations must be > 0 when set".into(),
            ));
        }
        Ok(())
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ai: AiConfig,
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
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()?;
        self.ai.validate()
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&AppConfig::default())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game, GameConfig::for_kind(GameKind::TicTacToe));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
kind = "connect-four"
rows = 6
columns = 7
win_length = 4
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.kind, GameKind::ConnectFour);
        assert_eq!(config.game.cell_count(), 42);
        // Other fields should be defaults
        assert_eq!(config.ai, AiConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_unwinnable_board() {
        let mut config = AppConfig::default();
        config.game.win_length = 4;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Unwinnable { win_length: 4, .. })
        ));
    }

    #[test]
    fn test_validation_accepts_win_along_longer_side() {
        let game = GameConfig {
            kind: GameKind::TicTacToe,
            rows: 2,
            columns: 5,
            win_length: 4,
        };
        assert!(game.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_dimensions() {
        let mut config = AppConfig::default();
        config.game.rows = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_large_search_limit() {
        let mut config = AppConfig::default();
        config.ai.search_cell_limit = 42;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_search_limit_capped_at_four_by_four() {
        assert_eq!(MAX_SEARCH_CELLS, 16);
        let mut config = AppConfig::default();
        config.ai.search_cell_limit = MAX_SEARCH_CELLS;
        assert!(config.validate().is_ok());
        config.ai.search_cell_limit = MAX_SEARCH_CELLS + 1;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_zero_iterations() {
        let mut config = AppConfig::default();
        config.ai.playout_iterations = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_budget_selection() {
        let mut ai = AiConfig::default();
        assert_eq!(ai.budget(), PlayoutBudget::Time(Duration::from_millis(100)));
        ai.playout_iterations = Some(500);
        assert_eq!(ai.budget(), PlayoutBudget::Iterations(500));
    }

    #[test]
    fn test_search_threshold() {
        let ai = AiConfig::default();
        assert!(ai.searches(9));
        assert!(ai.searches(16));
        assert!(!ai.searches(42));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ai]
difficulty = "easy"
seed = 7
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ai.difficulty, Difficulty::Easy);
        assert_eq!(config.ai.seed, Some(7));
        // Others are defaults
        assert_eq!(config.game, GameConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[game]\nrows = 2\ncolumns = 2\nwin_length = 3\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Unwinnable { .. })
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
