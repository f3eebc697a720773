//! Key mapping from terminal events to game inputs.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    /// Start a new game, played by a human or watched.
    NewGame { human: bool },
    TogglePause,
    Command(Command),
}

/// Map a key event to an input. Releases and unbound keys map to `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Input::Quit);
    }

    let input = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Input::Quit,

        // Game control
        KeyCode::Char('1') => Input::NewGame { human: true },
        KeyCode::Char('2') => Input::NewGame { human: false },
        KeyCode::Char('3') | KeyCode::Char('p') | KeyCode::Char('P') => Input::TogglePause,

        // Moves
        KeyCode::Char(' ') | KeyCode::Down => Input::Command(Command::Drop),
        KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('H') => Input::Command(Command::Rotate),
        KeyCode::Left | KeyCode::Char('g') | KeyCode::Char('G') => {
            Input::Command(Command::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('J') => {
            Input::Command(Command::MoveRight)
        }
        KeyCode::Char('b') | KeyCode::Char('B') => Input::Command(Command::SoftDrop),

        _ => return None,
    };
    Some(input)
}
