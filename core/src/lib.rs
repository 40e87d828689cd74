//! Board model for terminal Minesweeper.
//!
//! The [`Board`] owns the player-visible grid and, once the first cell is
//! explored, the hidden [`MineLayout`]. The [`Game`] wraps a board with a
//! cursor and the [`Outcome`] state machine that front-ends drive.

use core::fmt;
use core::ops::Index;
use ndarray::Array2;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod game;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl GameConfig {
    const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Validates the dimensions and mine count. At least one cell must stay
    /// free of mines so the first explored cell can always be safe.
    pub fn new(rows: usize, cols: usize, mines: usize) -> Result<Self> {
        let invalid_size = GameError::InvalidSize { rows, cols };
        let (Ok(row_count), Ok(col_count)) = (Coord::try_from(rows), Coord::try_from(cols)) else {
            return Err(invalid_size);
        };
        if row_count == 0 || col_count == 0 {
            return Err(invalid_size);
        }

        let total = rows * cols;
        if mines >= total {
            return Err(GameError::TooManyMines {
                mines,
                max: total - 1,
            });
        }

        // mines < total <= 255 * 255, always fits
        Ok(Self::new_unchecked(row_count, col_count, mines as CellCount))
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn size(&self) -> Cell {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    /// Largest safe zone around `safe` that still leaves room for every mine.
    /// A validated config always keeps one safe cell, so `SingleCell` always fits.
    pub fn safe_zone(&self, safe: Cell) -> SafeZone {
        if self.mines + SafeZone::Block.cell_count(safe, self.size()) <= self.total_cells() {
            SafeZone::Block
        } else {
            SafeZone::SingleCell
        }
    }
}

/// Preset difficulty levels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Easy => GameConfig::new_unchecked(9, 9, 10),
            Self::Medium => GameConfig::new_unchecked(16, 16, 40),
            Self::Hard => GameConfig::new_unchecked(16, 30, 99),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hidden answer grid: mine positions and adjacency counts.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    answers: Array2<Answer>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Builds the answer grid from a mine mask of any valid board size.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let config = GameConfig::new(rows, cols, 0)?;
        Ok(Self::count_adjacent(mine_mask, config.size()))
    }

    /// Accumulates a count on every neighbor of each mine. `size` must match
    /// the mask's shape.
    pub(crate) fn count_adjacent(mine_mask: &Array2<bool>, size: Cell) -> Self {
        let mut counts: Array2<u8> = Array2::zeros(size.to_nd_index());
        let mut mine_count: CellCount = 0;
        for (index, _) in mine_mask.indexed_iter().filter(|&(_, &is_mine)| is_mine) {
            mine_count += 1;
            for pos in neighbors(cell_from_index(index), size) {
                counts[pos.to_nd_index()] += 1;
            }
        }

        let answers = Array2::from_shape_fn(size.to_nd_index(), |index| {
            if mine_mask[index] {
                Answer::Mine
            } else {
                Answer::Safe(counts[index])
            }
        });

        Self {
            answers,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Cell, mine_coords: &[Cell]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(&mine_mask)
    }

    pub fn size(&self) -> Cell {
        let (rows, cols) = self.answers.dim();
        cell_from_index((rows, cols))
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Cell) -> bool {
        self[coords].is_mine()
    }

    /// Recounts mines around `coords` straight from the grid.
    pub fn adjacent_mine_count(&self, coords: Cell) -> u8 {
        let count = self
            .iter_neighbors(coords)
            .filter(|&pos| self.contains_mine(pos))
            .count();
        // at most 8 neighbors
        count as u8
    }

    pub fn iter_neighbors(&self, coords: Cell) -> NeighborIter {
        neighbors(coords, self.size())
    }

    /// Every mine cell, row-major.
    pub fn mines(&self) -> impl Iterator<Item = Cell> + '_ {
        self.answers
            .indexed_iter()
            .filter(|(_, answer)| answer.is_mine())
            .map(|(index, _)| cell_from_index(index))
    }
}

impl Index<Cell> for MineLayout {
    type Output = Answer;

    fn index(&self, coords: Cell) -> &Self::Output {
        &self.answers[coords.to_nd_index()]
    }
}

// grids are never larger than Coord::MAX on either axis
fn cell_from_index((row, col): (usize, usize)) -> Cell {
    (row as Coord, col as Coord)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

/// Game outcome, ordered by severity so that combining results is `max`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
