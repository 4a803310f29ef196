//! Crossterm key events to platform-agnostic input events.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use noct_types::InputEvent;

/// Map a crossterm event to a session input event, if it carries one.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Resize(cols, rows) => Some(InputEvent::Resize { cols, rows }),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(InputEvent::Interrupt),
            KeyCode::Char('l') => Some(InputEvent::ClearScreen),
            KeyCode::Char('q') | KeyCode::Char('d') => Some(InputEvent::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(c) => Some(InputEvent::Char(c)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::Submit),
        KeyCode::Up => Some(InputEvent::HistoryPrev),
        KeyCode::Down => Some(InputEvent::HistoryNext),
        KeyCode::Tab => Some(InputEvent::Complete),
        KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}
