use std::path::PathBuf;

/// Errors raised by board mutations and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position {index} is outside the board (0..{len})")]
    OutOfRange { index: usize, len: usize },

    #[error("cell {0} is already taken")]
    Occupied(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,

    #[error("cell {0} does not hold the most recent move")]
    NotLastMove(usize),
}

impl BoardError {
    /// True for rejections of a move request itself (bad index, taken cell,
    /// full column), as opposed to the game having already ended.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfRange { .. } | BoardError::Occupied(_) | BoardError::ColumnFull(_)
        )
    }
}

/// Errors raised by the decision engines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("cannot pick a move: the game is already over")]
    GameAlreadyOver,

    #[error("cannot pick a move: no legal moves")]
    NoLegalMoves,
}

/// Errors that can occur while a game is being played out.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("{agent} could not pick a move: {source}")]
    Engine { agent: String, source: EngineError },

    #[error("{agent} selected illegal move {token} (legal: {legal:?})")]
    IllegalMove {
        agent: String,
        token: usize,
        legal: Vec<usize>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration or building a board.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("board dimensions must be positive (got {rows}x{columns}, win {win_length})")]
    InvalidDimensions {
        rows: usize,
        columns: usize,
        win_length: usize,
    },

    #[error("the game is impossible to win: {win_length} in a row on a {rows}x{columns} grid")]
    Unwinnable {
        rows: usize,
        columns: usize,
        win_length: usize,
    },
}
