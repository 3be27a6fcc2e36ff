use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::InputEvent;

/// Map a crossterm key press to an [`InputEvent`].
///
/// Arrow keys and the vi keys `h`/`j`/`k`/`l` navigate. Enter and Space
/// confirm. `q`, Esc and Ctrl+C quit.
pub fn classify(key: KeyEvent) -> InputEvent {
    if key.kind == KeyEventKind::Release {
        return InputEvent::Other;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => InputEvent::Quit,
            _ => InputEvent::Other,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => InputEvent::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => InputEvent::MoveRight,
        KeyCode::Up | KeyCode::Char('k') => InputEvent::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => InputEvent::MoveDown,
        KeyCode::Enter | KeyCode::Char(' ') => InputEvent::Confirm,
        KeyCode::Char('r') | KeyCode::Char('R') => InputEvent::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,
        _ => InputEvent::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(classify(press(KeyCode::Left)), InputEvent::MoveLeft);
        assert_eq!(classify(press(KeyCode::Char('l'))), InputEvent::MoveRight);
        assert_eq!(classify(press(KeyCode::Up)), InputEvent::MoveUp);
        assert_eq!(classify(press(KeyCode::Char('j'))), InputEvent::MoveDown);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(classify(press(KeyCode::Enter)), InputEvent::Confirm);
        assert_eq!(classify(press(KeyCode::Char(' '))), InputEvent::Confirm);
        assert_eq!(classify(press(KeyCode::Char('r'))), InputEvent::Restart);
        assert_eq!(classify(press(KeyCode::Esc)), InputEvent::Quit);
        assert_eq!(
            classify(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputEvent::Quit
        );
    }

    #[test]
    fn test_unmapped_keys_are_other() {
        assert_eq!(classify(press(KeyCode::Char('x'))), InputEvent::Other);
        assert_eq!(classify(press(KeyCode::Tab)), InputEvent::Other);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(classify(key), InputEvent::Other);
    }
}
