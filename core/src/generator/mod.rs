use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    /// Produces a full layout for `config`, keeping `safe` free of mines.
    fn generate(&mut self, config: GameConfig, safe: Cell) -> MineLayout;
}

/// Cells guaranteed mine-free around the first explored cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SafeZone {
    /// Only the explored cell itself.
    SingleCell,
    /// The explored cell and all of its neighbors.
    Block,
}

impl SafeZone {
    pub const fn contains(self, safe: Cell, candidate: Cell) -> bool {
        match self {
            Self::SingleCell => safe.0 == candidate.0 && safe.1 == candidate.1,
            Self::Block => is_adjacent_or_same(safe, candidate),
        }
    }

    /// Number of grid cells covered when centered on `safe`.
    pub fn cell_count(self, safe: Cell, size: Cell) -> CellCount {
        match self {
            Self::SingleCell => 1,
            // at most 8 neighbors
            Self::Block => 1 + neighbors(safe, size).count() as CellCount,
        }
    }
}
