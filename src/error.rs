use std::path::PathBuf;

/// A drop that the board or game refuses. Nothing is mutated when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already over")]
    GameOver,
}

/// Board construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least 4x4, got {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize },
}

/// Errors raised by the search engine and the agents driving it.
///
/// These are caller bugs: the engine was asked to move in a position it
/// should never see.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search reached a non-terminal position with no legal columns")]
    NoLegalColumns,

    #[error("cannot pick a column: the game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn { column: 9, cols: 7 };
        assert_eq!(
            err.to_string(),
            "column 9 is out of range (board has 7 columns)"
        );
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::TooSmall { rows: 3, cols: 7 };
        assert_eq!(err.to_string(), "board must be at least 4x4, got 3x7");
    }

    #[test]
    fn test_search_error_display() {
        assert_eq!(
            SearchError::GameOver.to_string(),
            "cannot pick a column: the game is already over"
        );
        assert_ne!(SearchError::GameOver, SearchError::NoLegalColumns);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.rows must be >= 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.rows must be >= 4"
        );
    }
}
