/// Single coordinate axis, used for the board side length and for row/column positions.
pub type Coord = u8;

/// Count type used for mine counts, cell totals and the score.
pub type CellCount = u16;

/// Cell position as `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The up-to-8 in-bounds neighbors of a cell on a square board, diagonals included.
///
/// Owns everything it needs, so callers may mutate the board while iterating.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    side: Coord,
    next_offset: usize,
}

impl Neighbors {
    pub fn new(center: Coord2, side: Coord) -> Self {
        Self {
            center,
            side,
            next_offset: 0,
        }
    }

    fn offset_by(&self, (d_row, d_col): (i8, i8)) -> Option<Coord2> {
        let row = self.center.0.checked_add_signed(d_row)?;
        let col = self.center.1.checked_add_signed(d_col)?;
        (row < self.side && col < self.side).then_some((row, col))
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = OFFSETS.get(self.next_offset) {
            self.next_offset += 1;
            if let Some(coords) = self.offset_by(offset) {
                return Some(coords);
            }
        }
        None
    }
}
