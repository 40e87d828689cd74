/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Grid position `(row, col)`, 0-indexed.
pub type Cell = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Cell {
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

/// Whether `cell` lies inside a grid of `size` rows and columns.
pub const fn in_bounds(cell: Cell, size: Cell) -> bool {
    cell.0 < size.0 && cell.1 < size.1
}

/// Whether `a` and `b` are within Chebyshev distance 1 of each other.
pub const fn is_adjacent_or_same(a: Cell, b: Cell) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

/// Iterates the up-to-8 cells surrounding `cell` in a grid of `size`, row-major.
pub fn neighbors(cell: Cell, size: Cell) -> NeighborIter {
    NeighborIter::new(cell, size)
}

// (d_row, d_col), row-major so neighbor order is stable
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `cell`, returning a value only when it remains in bounds.
fn apply_delta(cell: Cell, delta: (i8, i8), bounds: Cell) -> Option<Cell> {
    let (row, col) = cell;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row)?;
    let next_col = col.checked_add_signed(d_col)?;

    let next = (next_row, next_col);
    in_bounds(next, bounds).then_some(next)
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Cell,
    bounds: Cell,
    index: u8,
}

impl NeighborIter {
    fn new(center: Cell, bounds: Cell) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}
