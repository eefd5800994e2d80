use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Cells uncovered by a single reveal request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RevealOutcome {
    /// Newly revealed cells, in the order they were uncovered.
    pub revealed: Vec<Coord2>,
    pub hit_mine: bool,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub fn has_update(&self) -> bool {
        !self.revealed.is_empty()
    }
}

/// True iff every non-mine cell of `layout` is revealed in `revealed`; mines may stay hidden.
pub fn check_win(layout: &MineLayout, revealed: &Array2<bool>) -> bool {
    layout
        .cells()
        .iter()
        .zip(revealed.iter())
        .all(|(cell, &is_revealed)| cell.is_mine() || is_revealed)
}

/// Layout plus the revealed mask and the reveal counter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    layout: MineLayout,
    revealed: Array2<bool>,
    revealed_count: Saturating<CellCount>,
}

impl Board {
    pub fn new(layout: MineLayout) -> Self {
        let revealed = Array2::default(layout.cells().dim());
        Self {
            layout,
            revealed,
            revealed_count: Saturating(0),
        }
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }

    pub fn size(&self) -> Coord {
        self.layout.size()
    }

    pub fn revealed_mask(&self) -> &Array2<bool> {
        &self.revealed
    }

    /// Cells revealed so far, a detonated mine included.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn is_cleared(&self) -> bool {
        check_win(&self.layout, &self.revealed)
    }

    /// Reveals a cell, cascading through zero-count cells.
    ///
    /// Out-of-bounds and already revealed cells produce an empty outcome. A mine is revealed on its
    /// own and never cascades.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let mut outcome = RevealOutcome::default();

        if !self.layout.contains(coords) || self.is_revealed(coords) {
            return outcome;
        }

        self.mark_revealed(coords, &mut outcome);
        if self.layout.is_mine(coords) {
            outcome.hit_mine = true;
            return outcome;
        }

        // cells are marked before they're queued, so each one is visited once
        let mut to_visit = VecDeque::from([coords]);
        while let Some(visit_coords) = to_visit.pop_front() {
            if self.layout[visit_coords] != FieldCell::Clear(0) {
                continue;
            }

            for pos in self.layout.neighbors(visit_coords) {
                if !self.revealed[pos.to_nd_index()] {
                    self.mark_revealed(pos, &mut outcome);
                    to_visit.push_back(pos);
                }
            }
        }

        if outcome.revealed.len() > 1 {
            log::trace!(
                "cascade from {:?} revealed {} cells",
                coords,
                outcome.revealed.len()
            );
        }

        outcome
    }

    fn mark_revealed(&mut self, coords: Coord2, outcome: &mut RevealOutcome) {
        self.revealed[coords.to_nd_index()] = true;
        self.revealed_count += 1;
        outcome.revealed.push(coords);
    }
}
