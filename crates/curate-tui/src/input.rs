use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::action::Action;
use crate::app::InputMode;

/// Map a crossterm terminal event to a TUI action, respecting input mode.
pub fn map_event(event: &Event, input_mode: &InputMode) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits regardless of mode
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::Quit;
            }

            match input_mode {
                InputMode::Normal => map_key_normal(key),
                InputMode::TextInput => map_key_text_input(key),
            }
        }
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(w, h) => Action::Resize(*w, *h),
        _ => Action::None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::MoveDown,
        MouseEventKind::ScrollUp => Action::MoveUp,
        _ => Action::None,
    }
}

fn map_key_normal(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Char(' ') => Action::ToggleSelect,
        KeyCode::Char('a') => Action::ToggleSelectAll,
        KeyCode::Char('l') => Action::ToggleLegend,
        KeyCode::Char('g') => Action::GoTop,
        KeyCode::Char('G') => Action::GoBottom,
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageDown,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageUp,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Tab => Action::NextField,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Home => Action::GoTop,
        KeyCode::End => Action::GoBottom,
        _ => Action::None,
    }
}

fn map_key_text_input(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Tab => Action::NextField,
        KeyCode::Char(c) => Action::Input(c),
        KeyCode::Backspace => Action::Input('\x08'), // sentinel for backspace
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn normal_mode_maps_selection_keys() {
        assert_eq!(
            map_event(&key(KeyCode::Char(' ')), &InputMode::Normal),
            Action::ToggleSelect
        );
        assert_eq!(
            map_event(&key(KeyCode::Char('a')), &InputMode::Normal),
            Action::ToggleSelectAll
        );
    }

    #[test]
    fn text_input_mode_passes_characters_through() {
        assert_eq!(
            map_event(&key(KeyCode::Char('a')), &InputMode::TextInput),
            Action::Input('a')
        );
        assert_eq!(
            map_event(&key(KeyCode::Backspace), &InputMode::TextInput),
            Action::Input('\x08')
        );
    }

    #[test]
    fn ctrl_c_quits_in_any_mode() {
        let evt = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&evt, &InputMode::TextInput), Action::Quit);
        assert_eq!(map_event(&evt, &InputMode::Normal), Action::Quit);
    }
}
