use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Unknown difficulty")]
    InvalidDifficulty,
    #[error("Board must have at least one row and one column")]
    InvalidSize,
    #[error("Too many mines, at least one safe cell is required")]
    TooManyMines,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
