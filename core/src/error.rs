use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column, got {rows}x{cols}")]
    InvalidSize { rows: usize, cols: usize },
    #[error("Too many mines: {mines} requested but at most {max} fit")]
    TooManyMines { mines: usize, max: usize },
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;
