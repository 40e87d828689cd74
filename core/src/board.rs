use ndarray::Array2;
use std::collections::VecDeque;

use crate::*;

#[derive(Clone, Debug)]
pub struct Board {
    config: GameConfig,
    visible: Array2<VisibleCell>,
    /// Absent until the first explore, then fixed for the rest of the game.
    layout: Option<MineLayout>,
    generator: RandomMineGenerator,
    revealed_count: CellCount,
    flagged_count: CellCount,
}

impl Board {
    /// Board whose mines are drawn from an OS-seeded source on the first explore.
    pub fn new(config: GameConfig) -> Self {
        Self::with_generator(config, RandomMineGenerator::from_os_rng())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }

    pub fn with_generator(config: GameConfig, generator: RandomMineGenerator) -> Self {
        Self {
            config,
            visible: Array2::default(config.size().to_nd_index()),
            layout: None,
            generator,
            revealed_count: 0,
            flagged_count: 0,
        }
    }

    /// Board over a fixed layout, the first explore does not generate.
    pub fn with_layout(layout: MineLayout) -> Result<Self> {
        let (rows, cols) = layout.size();
        let config = GameConfig::new(rows.into(), cols.into(), layout.mine_count().into())?;
        // the generator is never consulted once a layout is present
        let mut board = Self::with_seed(config, 0);
        board.layout = Some(layout);
        Ok(board)
    }

    pub fn size(&self) -> Cell {
        self.config.size()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn mines_left(&self) -> isize {
        (self.config.mines() as isize) - (self.flagged_count as isize)
    }

    pub fn is_generated(&self) -> bool {
        self.layout.is_some()
    }

    /// Ground truth, for tests and tooling. Front-ends should read
    /// [`Board::cell_at`] instead.
    pub fn layout(&self) -> Option<&MineLayout> {
        self.layout.as_ref()
    }

    pub fn cell_at(&self, coords: Cell) -> VisibleCell {
        self.visible[coords.to_nd_index()]
    }

    pub fn validate_coords(&self, coords: Cell) -> Result<Cell> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn neighbors(&self, coords: Cell) -> NeighborIter {
        neighbors(coords, self.size())
    }

    /// Flips a cell between hidden and flagged. Disclosed cells are left alone.
    pub fn toggle_flag(&mut self, coords: Cell) -> Result<MarkOutcome> {
        use MarkOutcome::*;
        use VisibleCell::*;

        let coords = self.validate_coords(coords)?;
        let slot = &mut self.visible[coords.to_nd_index()];

        Ok(match *slot {
            Hidden => {
                *slot = Flagged;
                self.flagged_count += 1;
                Changed
            }
            Flagged => {
                *slot = Hidden;
                self.flagged_count -= 1;
                Changed
            }
            Revealed(_) | Mine => NoChange,
        })
    }

    /// Opens a cell, generating the layout around it on the first call.
    ///
    /// Hitting a mine returns [`Outcome::Lost`] and leaves the cell as it was,
    /// flagged or not; call [`Board::reveal`] afterwards to show the mines.
    /// Otherwise flagged and already disclosed cells are no-ops, and opening
    /// an empty cell cascades through its neighbors.
    pub fn explore(&mut self, coords: Cell) -> Result<Outcome> {
        let coords = self.validate_coords(coords)?;

        let config = self.config;
        let generator = &mut self.generator;
        let layout = self.layout.get_or_insert_with(|| {
            log::debug!("First explore at {:?}, generating layout", coords);
            generator.generate(config, coords)
        });

        if layout.contains_mine(coords) {
            log::debug!("Mine hit at {:?}", coords);
            return Ok(Outcome::Lost);
        }

        if self.visible[coords.to_nd_index()] != VisibleCell::Hidden {
            return Ok(Outcome::Playing);
        }

        let disclosed = flood_fill(&mut self.visible, layout, coords);
        self.revealed_count += disclosed;
        log::trace!(
            "Explored {:?}, disclosed {} ({}/{})",
            coords,
            disclosed,
            self.revealed_count,
            config.safe_cell_count()
        );

        Ok(if self.revealed_count == config.safe_cell_count() {
            Outcome::Won
        } else {
            Outcome::Playing
        })
    }

    /// Shows every hidden mine. Flagged and disclosed cells are untouched.
    pub fn reveal(&mut self) {
        let Some(layout) = &self.layout else {
            return;
        };

        for pos in layout.mines() {
            let slot = &mut self.visible[pos.to_nd_index()];
            if *slot == VisibleCell::Hidden {
                *slot = VisibleCell::Mine;
            }
        }
    }
}

/// Discloses `start` and, through empty cells, everything connected to it.
/// Returns how many cells were disclosed. Already disclosed or flagged cells
/// are skipped, so each cell is visited at most once per game.
fn flood_fill(visible: &mut Array2<VisibleCell>, layout: &MineLayout, start: Cell) -> CellCount {
    let mut disclosed = 0;
    let mut to_visit = VecDeque::from([start]);

    while let Some(coords) = to_visit.pop_front() {
        let slot = &mut visible[coords.to_nd_index()];
        if *slot != VisibleCell::Hidden {
            continue;
        }
        // neighbors of empty cells are never mines
        let Answer::Safe(count) = layout[coords] else {
            continue;
        };

        *slot = VisibleCell::Revealed(count);
        disclosed += 1;

        if count == 0 {
            to_visit.extend(
                layout
                    .iter_neighbors(coords)
                    .filter(|&pos| visible[pos.to_nd_index()] == VisibleCell::Hidden),
            );
        }
    }

    disclosed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn board(size: Cell, mines: &[Cell]) -> Board {
        Board::with_layout(MineLayout::from_mine_coords(size, mines).unwrap()).unwrap()
    }

    fn count_cells(board: &Board, pred: impl Fn(VisibleCell) -> bool) -> usize {
        let (rows, cols) = board.size();
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&pos| pred(board.cell_at(pos)))
            .count()
    }

    #[test]
    fn explore_hits_mine_and_leaves_cell_hidden() {
        let mut board = board((2, 2), &[(0, 0)]);

        let outcome = board.explore((0, 0)).unwrap();

        assert_eq!(outcome, Outcome::Lost);
        assert_eq!(board.cell_at((0, 0)), VisibleCell::Hidden);
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn explore_flood_fill_opens_zero_region() {
        let mut board = board((3, 3), &[(2, 2)]);

        let outcome = board.explore((0, 0)).unwrap();

        assert_eq!(outcome, Outcome::Won);
        assert_eq!(board.cell_at((0, 0)), VisibleCell::Revealed(0));
        assert_eq!(board.cell_at((1, 1)), VisibleCell::Revealed(1));
        assert_eq!(board.cell_at((2, 2)), VisibleCell::Hidden);
        assert_eq!(board.revealed_count(), 8);
    }

    #[test]
    fn cascade_stops_at_counted_cells() {
        // column 2 is a wall of mines
        let mut board = board((3, 5), &[(0, 2), (1, 2), (2, 2)]);

        assert_eq!(board.explore((1, 0)).unwrap(), Outcome::Playing);

        assert_eq!(board.cell_at((1, 0)), VisibleCell::Revealed(0));
        assert_eq!(board.cell_at((1, 1)), VisibleCell::Revealed(3));
        assert_eq!(board.cell_at((0, 1)), VisibleCell::Revealed(2));
        assert_eq!(board.cell_at((1, 3)), VisibleCell::Hidden);
        assert_eq!(board.revealed_count(), 6);
    }

    #[test]
    fn single_mine_board_cascades_to_win() {
        let mut board = board((5, 5), &[(0, 0)]);

        assert_eq!(board.explore((4, 4)).unwrap(), Outcome::Won);
        assert_eq!(board.revealed_count(), 24);
        assert_eq!(board.cell_at((0, 0)), VisibleCell::Hidden);
        assert_eq!(board.cell_at((1, 1)), VisibleCell::Revealed(1));
    }

    #[test]
    fn explore_twice_is_noop() {
        let mut board = board((3, 3), &[(0, 0), (2, 2)]);

        assert_eq!(board.explore((0, 1)).unwrap(), Outcome::Playing);
        let before = board.clone();
        assert_eq!(board.explore((0, 1)).unwrap(), Outcome::Playing);

        assert_eq!(board.visible, before.visible);
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn flags_block_explore_of_safe_cells() {
        let mut board = board((3, 3), &[(0, 0)]);

        board.toggle_flag((2, 2)).unwrap();

        assert_eq!(board.explore((2, 2)).unwrap(), Outcome::Playing);
        assert_eq!(board.cell_at((2, 2)), VisibleCell::Flagged);
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn explore_flagged_mine_still_loses() {
        let mut board = board((3, 3), &[(0, 0)]);

        board.toggle_flag((0, 0)).unwrap();

        assert_eq!(board.explore((0, 0)).unwrap(), Outcome::Lost);
        assert_eq!(board.cell_at((0, 0)), VisibleCell::Flagged);
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn cascade_skips_flagged_cells() {
        let mut board = board((1, 4), &[(0, 0)]);

        board.toggle_flag((0, 2)).unwrap();
        assert_eq!(board.explore((0, 3)).unwrap(), Outcome::Playing);
        assert_eq!(board.cell_at((0, 2)), VisibleCell::Flagged);
        assert_eq!(board.revealed_count(), 1);

        board.toggle_flag((0, 2)).unwrap();
        assert_eq!(board.explore((0, 2)).unwrap(), Outcome::Won);
        assert_eq!(board.cell_at((0, 1)), VisibleCell::Revealed(1));
    }

    #[test]
    fn toggle_flag_round_trips_and_skips_disclosed() {
        let mut board = board((3, 3), &[(2, 2)]);

        assert_eq!(board.toggle_flag((1, 1)).unwrap(), MarkOutcome::Changed);
        assert_eq!(board.cell_at((1, 1)), VisibleCell::Flagged);
        assert_eq!(board.mines_left(), 0);
        assert_eq!(board.toggle_flag((1, 1)).unwrap(), MarkOutcome::Changed);
        assert_eq!(board.cell_at((1, 1)), VisibleCell::Hidden);
        assert_eq!(board.flagged_count(), 0);

        board.explore((1, 1)).unwrap();
        assert_eq!(board.toggle_flag((1, 1)).unwrap(), MarkOutcome::NoChange);
        assert_eq!(board.cell_at((1, 1)), VisibleCell::Revealed(1));
    }

    #[test]
    fn reveal_shows_hidden_mines_only() {
        let mut board = board((3, 3), &[(0, 0), (0, 2), (2, 0)]);

        board.toggle_flag((0, 2)).unwrap();
        board.toggle_flag((2, 2)).unwrap();
        assert_eq!(board.explore((1, 1)).unwrap(), Outcome::Playing);
        assert_eq!(board.explore((0, 0)).unwrap(), Outcome::Lost);
        board.reveal();

        assert_eq!(board.cell_at((0, 0)), VisibleCell::Mine);
        assert_eq!(board.cell_at((2, 0)), VisibleCell::Mine);
        assert_eq!(board.cell_at((0, 2)), VisibleCell::Flagged);
        assert_eq!(board.cell_at((2, 2)), VisibleCell::Flagged);
        assert_eq!(board.cell_at((1, 1)), VisibleCell::Revealed(3));
        assert_eq!(count_cells(&board, |cell| cell == VisibleCell::Hidden), 4);
    }

    #[test]
    fn reveal_before_generation_is_noop() {
        let mut board = Board::with_seed(Level::Easy.config(), 1);
        board.reveal();
        assert_eq!(count_cells(&board, |cell| cell == VisibleCell::Hidden), 81);
    }

    #[test]
    fn first_explore_generates_once_around_cell() {
        let mut board = Board::with_seed(Level::Easy.config(), 9);
        assert!(!board.is_generated());

        assert_ne!(board.explore((4, 4)).unwrap(), Outcome::Lost);
        let layout = board.layout().cloned().unwrap();
        assert!(!layout.contains_mine((4, 4)));
        assert!(board.neighbors((4, 4)).all(|pos| !layout.contains_mine(pos)));
        assert!(board.cell_at((4, 4)).is_empty());

        let mine = layout.mines().next().unwrap();
        assert_eq!(board.explore(mine).unwrap(), Outcome::Lost);
        assert_eq!(board.layout(), Some(&layout));
    }

    #[test]
    fn center_of_three_by_three_is_never_a_mine() {
        let config = GameConfig::new(3, 3, 1).unwrap();
        for seed in 0..32 {
            let mut board = Board::with_seed(config, seed);
            assert_eq!(board.explore((1, 1)).unwrap(), Outcome::Playing);
            assert_eq!(board.cell_at((1, 1)), VisibleCell::Revealed(1));
        }
    }

    #[test]
    fn three_by_three_mine_reaches_every_border_cell() {
        let config = GameConfig::new(3, 3, 1).unwrap();
        let mut seen = BTreeSet::new();
        for seed in 0..256 {
            let mut seeded = Board::with_seed(config, seed);
            seeded.explore((1, 1)).unwrap();
            let mines: Vec<Cell> = seeded.layout().unwrap().mines().collect();
            assert_eq!(mines.len(), 1);
            seen.insert(mines[0]);
        }

        let border: BTreeSet<Cell> = board((3, 3), &[]).neighbors((1, 1)).collect();
        assert_eq!(seen, border);
    }

    #[test]
    fn with_layout_rejects_full_board() {
        let layout = MineLayout::from_mine_coords((1, 2), &[(0, 0), (0, 1)]).unwrap();
        assert_eq!(
            Board::with_layout(layout).err(),
            Some(GameError::TooManyMines { mines: 2, max: 1 })
        );
    }

    #[test]
    fn out_of_bounds_coords_are_rejected() {
        let mut board = board((2, 2), &[(0, 0)]);
        assert_eq!(board.explore((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.toggle_flag((0, 2)), Err(GameError::InvalidCoords));
        assert!(board.is_generated());
        assert_eq!(board.revealed_count(), 0);
    }
}
