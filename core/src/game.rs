use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Player moves accepted by [`Game::apply`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    ToggleFlag,
    Explore,
}

/// A board plus a cursor and the outcome state machine.
///
/// Valid transitions:
/// - Playing -> Playing
/// - Playing -> Won
/// - Playing -> Lost
///
/// Once finished every action is ignored.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    /// `None` after a win, when nothing should stay highlighted.
    cursor: Option<Cell>,
    outcome: Outcome,
}

impl Game {
    pub fn new(level: Level) -> Self {
        Self::from_board(Board::new(level.config()))
    }

    pub fn with_seed(level: Level, seed: u64) -> Self {
        Self::from_board(Board::with_seed(level.config(), seed))
    }

    /// Starts on `board` with the cursor at its center.
    pub fn from_board(board: Board) -> Self {
        let (rows, cols) = board.size();
        Self {
            board,
            cursor: Some((rows / 2, cols / 2)),
            outcome: Outcome::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Option<Cell> {
        self.cursor
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// Runs one action and returns the resulting outcome.
    pub fn apply(&mut self, action: Action) -> Result<Outcome> {
        if self.outcome.is_finished() {
            log::trace!("Ignoring {:?}, game is over", action);
            return Ok(self.outcome);
        }
        let Some(cursor) = self.cursor else {
            return Ok(self.outcome);
        };

        match action {
            Action::Move(direction) => {
                self.cursor = Some(step(cursor, direction, self.board.size()));
            }
            Action::ToggleFlag => {
                self.board.toggle_flag(cursor)?;
            }
            Action::Explore => {
                let outcome = self.board.explore(cursor)?;
                self.finish(outcome);
            }
        }

        Ok(self.outcome)
    }

    fn finish(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Playing => return,
            Outcome::Won => self.cursor = None,
            Outcome::Lost => self.board.reveal(),
        }
        log::debug!("Game finished: {:?}", outcome);
        self.outcome = outcome;
    }
}

/// Moves one cell in `direction`, clamped to the grid.
fn step((row, col): Cell, direction: Direction, (rows, cols): Cell) -> Cell {
    match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(rows - 1), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(cols - 1)),
    }
}
