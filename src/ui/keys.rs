//! Keyboard mapping.
//!
//! Translates crossterm key events into application actions. Pure, so the
//! bindings can be tested without a terminal.

use crate::controller::{Event, State, Tab};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug)]
pub enum Action {
    Quit,
    Export,
    Dispatch(Event),
}

/// Map a key press to an action, or `None` when the key is unbound
pub fn map_key(key: KeyEvent, state: &State) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('r') if ctrl => Some(Action::Dispatch(Event::Retry)),
        KeyCode::Char('p') if ctrl => state.shows_report().then_some(Action::Export),
        KeyCode::Char('u') if ctrl => Some(Action::Dispatch(Event::ClearInput)),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Action::Dispatch(Event::Input(c))),
        KeyCode::Backspace => Some(Action::Dispatch(Event::Backspace)),
        KeyCode::Enter => Some(Action::Dispatch(Event::Submit(state.handle_text.clone()))),
        KeyCode::Tab | KeyCode::Right => {
            Some(Action::Dispatch(Event::SelectTab(state.active_tab.next())))
        }
        KeyCode::BackTab | KeyCode::Left => {
            Some(Action::Dispatch(Event::SelectTab(state.active_tab.previous())))
        }
        KeyCode::F(n @ 1..=5) => Tab::ALL
            .get(usize::from(n) - 1)
            .map(|tab| Action::Dispatch(Event::SelectTab(*tab))),
        _ => None,
    }
}
