use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// User actions from keyboard and mouse events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    ClearSearch,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    ToggleCurrent,
    CopySelection,
    UpdateSearch(char),
    DeleteChar,
    Click { column: u16, row: u16 },
    Resize,
    None,
}

/// Poll for terminal events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)? {
        return Ok(match event::read()? {
            Event::Key(key) => key_to_action(key),
            Event::Mouse(mouse) => mouse_to_action(mouse),
            Event::Resize(_, _) => Action::Resize,
            _ => Action::None,
        });
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    // Windows reports releases too; only presses drive the list
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::ClearSearch,

        // Navigation (Vim/Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,

        // Row activation
        (KeyCode::Enter, _) => Action::ToggleCurrent,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopySelection,

        // Search input
        (KeyCode::Char(c), modifiers) if is_text_input(modifiers) => Action::UpdateSearch(c),
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}

/// Plain, shifted, or AltGr-composed characters (AltGr arrives as Ctrl+Alt on Windows)
fn is_text_input(modifiers: KeyModifiers) -> bool {
    let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
    modifiers == KeyModifiers::NONE
        || modifiers == KeyModifiers::SHIFT
        || modifiers == altgr
        || modifiers == altgr | KeyModifiers::SHIFT
}

fn mouse_to_action(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Action::Click { column: mouse.column, row: mouse.row }
        }
        MouseEventKind::ScrollUp => Action::MoveUp,
        MouseEventKind::ScrollDown => Action::MoveDown,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn test_quit_action() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_c), Action::Quit);
    }

    #[test]
    fn test_escape_clears_search() {
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(key_to_action(esc), Action::ClearSearch);
    }

    #[test]
    fn test_navigation_vim_style() {
        let ctrl_p = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_p), Action::MoveUp);

        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_n), Action::MoveDown);
    }

    #[test]
    fn test_navigation_arrows_and_pages() {
        assert_eq!(key_to_action(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)), Action::MoveUp);
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
            Action::MoveDown
        );
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE)),
            Action::PageUp
        );
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE)),
            Action::PageDown
        );
    }

    #[test]
    fn test_enter_toggles_and_ctrl_y_copies() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(key_to_action(enter), Action::ToggleCurrent);

        let ctrl_y = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_y), Action::CopySelection);
    }

    #[test]
    fn test_search_input() {
        let char_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_to_action(char_a), Action::UpdateSearch('a'));

        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(key_to_action(space), Action::UpdateSearch(' '));

        let char_a_shift = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(key_to_action(char_a_shift), Action::UpdateSearch('A'));

        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(key_to_action(backspace), Action::DeleteChar);
    }

    #[test]
    fn test_altgr_characters_reach_search() {
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        let at_sign = KeyEvent::new(KeyCode::Char('@'), altgr);
        assert_eq!(key_to_action(at_sign), Action::UpdateSearch('@'));

        let euro = KeyEvent::new(KeyCode::Char('€'), altgr | KeyModifiers::SHIFT);
        assert_eq!(key_to_action(euro), Action::UpdateSearch('€'));

        // Plain Alt and Ctrl chords are not text
        let alt_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT);
        assert_eq!(key_to_action(alt_a), Action::None);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_c), Action::Quit);
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(key_to_action(release), Action::None);
    }

    #[test]
    fn test_unknown_key() {
        let unknown = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(key_to_action(unknown), Action::None);
    }

    #[test]
    fn test_left_click() {
        let click = mouse(MouseEventKind::Down(MouseButton::Left), 12, 5);
        assert_eq!(mouse_to_action(click), Action::Click { column: 12, row: 5 });
    }

    #[test]
    fn test_scroll_moves_cursor() {
        assert_eq!(mouse_to_action(mouse(MouseEventKind::ScrollUp, 0, 0)), Action::MoveUp);
        assert_eq!(mouse_to_action(mouse(MouseEventKind::ScrollDown, 0, 0)), Action::MoveDown);
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let right = mouse(MouseEventKind::Down(MouseButton::Right), 1, 1);
        assert_eq!(mouse_to_action(right), Action::None);
        assert_eq!(mouse_to_action(mouse(MouseEventKind::Moved, 1, 1)), Action::None);
    }
}
