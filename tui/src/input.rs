use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sweeper_core::{Action, Direction};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Play(Action),
}

/// Maps a key press to a command. Releases and unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    use Action::*;
    use Direction::*;

    if key.kind == KeyEventKind::Release {
        return None;
    }
    // raw mode swallows SIGINT
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Command::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Command::Quit),
        KeyCode::Char('k') | KeyCode::Up => Move(Up),
        KeyCode::Char('j') | KeyCode::Down => Move(Down),
        KeyCode::Char('h') | KeyCode::Left => Move(Left),
        KeyCode::Char('l') | KeyCode::Right => Move(Right),
        KeyCode::Char('f') => ToggleFlag,
        KeyCode::Char('e') | KeyCode::Char(' ') | KeyCode::Enter => Explore,
        _ => return None,
    };
    Some(Command::Play(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn vi_keys_and_arrows_move() {
        for (vi, arrow, direction) in [
            ('k', KeyCode::Up, Direction::Up),
            ('j', KeyCode::Down, Direction::Down),
            ('h', KeyCode::Left, Direction::Left),
            ('l', KeyCode::Right, Direction::Right),
        ] {
            let expected = Some(Command::Play(Action::Move(direction)));
            assert_eq!(map_key(press(KeyCode::Char(vi))), expected);
            assert_eq!(map_key(press(arrow)), expected);
        }
    }

    #[test]
    fn flag_explore_and_quit() {
        assert_eq!(
            map_key(press(KeyCode::Char('f'))),
            Some(Command::Play(Action::ToggleFlag))
        );
        for code in [KeyCode::Char('e'), KeyCode::Char(' '), KeyCode::Enter] {
            assert_eq!(map_key(press(code)), Some(Command::Play(Action::Explore)));
        }
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn unbound_and_released_keys_are_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL)),
            None
        );
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('e'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_key(release), None);
    }
}
