#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use session::*;
pub use timer::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod layout;
mod session;
mod timer;
mod types;

/// Side length of the classic board.
pub const BOARD_SIZE: Coord = 8;

/// Mines hidden in the classic board.
pub const MINE_COUNT: CellCount = 10;

/// Square board dimensions plus the number of mines to hide in it.
///
/// A config always leaves at least one safe cell, so mine placement can never run out of room.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig", into = "RawGameConfig")]
pub struct GameConfig {
    size: Coord,
    mines: CellCount,
}

impl GameConfig {
    pub const CLASSIC: Self = Self::new_unchecked(BOARD_SIZE, MINE_COUNT);

    pub(crate) const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(GameError::EmptyBoard);
        }

        let capacity = mult(size, size);
        if mines >= capacity {
            return Err(GameError::TooManyMines { mines, capacity });
        }

        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[derive(Copy, Clone, Serialize, Deserialize)]
struct RawGameConfig {
    size: Coord,
    mines: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.size, raw.mines)
    }
}

impl From<GameConfig> for RawGameConfig {
    fn from(config: GameConfig) -> Self {
        Self {
            size: config.size,
            mines: config.mines,
        }
    }
}
