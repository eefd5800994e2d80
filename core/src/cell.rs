use serde::{Deserialize, Serialize};

/// Content of a grid cell, fixed when the layout is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldCell {
    Mine,
    /// Safe cell with the number of mines among its neighbors.
    Clear(u8),
}

impl FieldCell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Clear(count) => Some(count),
        }
    }
}

impl Default for FieldCell {
    fn default() -> Self {
        Self::Clear(0)
    }
}

/// Player-visible state of a cell, as a shell should draw it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCell {
    Hidden,
    Revealed(u8),
    /// Mine shown after the game was lost.
    Mine,
    /// The mine that ended the game.
    TriggeredMine,
}

impl VisibleCell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for VisibleCell {
    fn default() -> Self {
        Self::Hidden
    }
}
