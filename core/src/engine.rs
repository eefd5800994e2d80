use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// One game on one board, from the first reveal to a win or a loss.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayEngine {
    board: Board,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl PlayEngine {
    pub fn new(layout: MineLayout) -> Self {
        Self {
            board: Board::new(layout),
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_won(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.layout().mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.board.revealed_count()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Reveals a cell and settles the game state: a mine loses, clearing every safe cell wins.
    ///
    /// Finished games accept no further reveals.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.state.is_finished() {
            return RevealOutcome::default();
        }

        let outcome = self.board.reveal(coords);

        if outcome.hit_mine {
            self.triggered_mine = Some(coords);
            self.end_game(GameState::Lost);
        } else if outcome.has_update() && self.board.is_cleared() {
            self.end_game(GameState::Won);
        }

        outcome
    }

    /// What a shell should draw at `coords`. Once lost, every mine is exposed.
    pub fn visible_cell(&self, coords: Coord2) -> VisibleCell {
        let layout = self.board.layout();
        if !layout.contains(coords) {
            return VisibleCell::Hidden;
        }

        let revealed = self.board.is_revealed(coords);
        match layout[coords] {
            FieldCell::Mine if self.triggered_mine == Some(coords) => VisibleCell::TriggeredMine,
            FieldCell::Mine if revealed || matches!(self.state, GameState::Lost) => {
                VisibleCell::Mine
            }
            FieldCell::Clear(count) if revealed => VisibleCell::Revealed(count),
            _ => VisibleCell::Hidden,
        }
    }

    fn end_game(&mut self, state: GameState) {
        log::debug!(
            "game over: {:?}, {} cells revealed",
            state,
            self.board.revealed_count()
        );
        self.state = state;
    }
}
