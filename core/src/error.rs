use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one cell")]
    EmptyBoard,
    #[error("Too many mines, requested {mines} but the board only has {capacity} cells")]
    TooManyMines { mines: CellCount, capacity: CellCount },
    #[error("Board must be square")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
