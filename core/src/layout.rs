use alloc::collections::BTreeSet;
use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Mine positions together with the adjacency count of every safe cell.
///
/// Built once per game and never mutated, a new game gets a new layout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MineLayout {
    cells: Array2<FieldCell>,
    mines: BTreeSet<Coord2>,
}

impl MineLayout {
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let side = usize::from(size);
        let mut mine_mask: Array2<bool> = Array2::default((side, side));

        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        if rows != cols {
            return Err(GameError::InvalidBoardShape);
        }
        let size = Coord::try_from(rows).map_err(|_| GameError::InvalidBoardShape)?;

        let mines: BTreeSet<Coord2> = mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .collect();

        // side fits in a Coord, so the mine count fits in a CellCount
        GameConfig::new(size, mines.len() as CellCount)?;

        Ok(Self::build(size, mines))
    }

    /// Computes adjacency counts for an already validated mine set.
    pub(crate) fn build(size: Coord, mines: BTreeSet<Coord2>) -> Self {
        let side = usize::from(size);
        let cells = Array2::from_shape_fn((side, side), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            if mines.contains(&coords) {
                FieldCell::Mine
            } else {
                let count = Neighbors::new(coords, size)
                    .filter(|pos| mines.contains(pos))
                    .count();
                FieldCell::Clear(count as u8)
            }
        });

        Self { cells, mines }
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count())
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let size = self.size();
        row < size && col < size
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.mines.contains(&coords)
    }

    /// Adjacency count of a safe cell, `None` for mines and out-of-bounds coordinates.
    pub fn adjacent_mines(&self, coords: Coord2) -> Option<u8> {
        self.cells
            .get(coords.to_nd_index())
            .and_then(|cell| cell.adjacent_mines())
    }

    /// All mine coordinates in row-major order.
    pub fn mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mines.iter().copied()
    }

    pub fn cells(&self) -> &Array2<FieldCell> {
        &self.cells
    }

    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::new(coords, self.size())
    }
}

impl Index<Coord2> for MineLayout {
    type Output = FieldCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
