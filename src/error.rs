//! Error kinds for board access, generation, input parsing and settings

use thiserror::Error;

/// Errors raised by the board engine and the session's input handling.
#[derive(Debug, Error, PartialEq)]
pub enum BoardError {
    #[error("cell ({col}, {row}) is outside the {size}x{size} board")]
    OutOfBounds { col: usize, row: usize, size: usize },
    #[error(
        "placed {placed} of {wanted} objects; no free anchor after {attempts} attempts on a {size}x{size} board"
    )]
    Generation {
        placed: usize,
        wanted: usize,
        attempts: u32,
        size: usize,
    },
    #[error("board type {0} is not one of 0..=3")]
    InvalidBoardType(u8),
    #[error("seed text {0:?} is not a number")]
    InvalidSeedText(String),
}

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for `Settings`
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("board size {0} is outside {min}..={max}", min = crate::consts::MIN_BOARD_SIZE, max = crate::consts::MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),

    #[error("viewport {width}x{height} must be positive")]
    InvalidViewport { width: f32, height: f32 },
}
