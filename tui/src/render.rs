use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, PrintStyledContent, StyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use sweeper_core::{Game, Level, Outcome, VisibleCell};

// indexed by adjacent mine count
const COUNT_COLORS: [Color; 9] = [
    Color::White,
    Color::Blue,
    Color::Green,
    Color::Red,
    Color::DarkBlue,
    Color::DarkRed,
    Color::Cyan,
    Color::Black,
    Color::DarkGrey,
];

pub fn glyph(cell: VisibleCell) -> char {
    match cell {
        VisibleCell::Hidden => '.',
        VisibleCell::Flagged => '>',
        VisibleCell::Revealed(0) => ' ',
        VisibleCell::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        VisibleCell::Mine => '*',
    }
}

pub fn color(cell: VisibleCell) -> Color {
    match cell {
        VisibleCell::Hidden => Color::DarkGrey,
        VisibleCell::Flagged => Color::Red,
        VisibleCell::Revealed(count) => COUNT_COLORS
            .get(usize::from(count))
            .copied()
            .unwrap_or(Color::Reset),
        VisibleCell::Mine => Color::Reset,
    }
}

fn styled_cell(cell: VisibleCell, selected: bool, outcome: Outcome) -> StyledContent<char> {
    let content = glyph(cell).with(color(cell));
    match (selected, outcome) {
        (false, _) => content,
        (true, Outcome::Lost) => content.on(Color::Red),
        (true, _) => content.reverse(),
    }
}

fn status_line(game: &Game, level: Level) -> String {
    let state = match game.outcome() {
        Outcome::Playing => "h/j/k/l move  f flag  e explore  q quit",
        Outcome::Won => "You won! Press any key to exit",
        Outcome::Lost => "Boom. Press any key to exit",
    };
    format!(
        "{}  mines left: {}  {}",
        level,
        game.board().mines_left(),
        state
    )
}

/// Draws the board centered in a terminal of `(width, height)`, with the
/// status line underneath.
pub fn draw(out: &mut impl Write, game: &Game, level: Level, (width, height): (u16, u16)) -> io::Result<()> {
    let board = game.board();
    let (rows, cols) = board.size();
    let board_width = 2 * u16::from(cols) - 1;
    let left = width.saturating_sub(board_width) / 2;
    let top = height.saturating_sub(u16::from(rows) + 2) / 2;

    queue!(out, Clear(ClearType::All))?;
    for row in 0..rows {
        for col in 0..cols {
            let selected = game.cursor() == Some((row, col));
            let content = styled_cell(board.cell_at((row, col)), selected, game.outcome());
            queue!(
                out,
                MoveTo(left + 2 * u16::from(col), top + u16::from(row)),
                PrintStyledContent(content)
            )?;
        }
    }

    let status = status_line(game, level);
    let status_width = u16::try_from(status.chars().count()).unwrap_or(u16::MAX);
    queue!(
        out,
        MoveTo(
            width.saturating_sub(status_width) / 2,
            top + u16::from(rows) + 1
        ),
        PrintStyledContent(status.as_str().dim())
    )?;
    out.flush()
}
