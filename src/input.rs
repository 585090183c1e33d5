//! Action classification — maps key events onto selector actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keymap::KeyMap;

/// Everything the selector knows how to do with a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CursorUp,
    CursorDown,
    GoToStart,
    GoToEnd,
    NextPage,
    PrevPage,
    NextColumn,
    PrevColumn,
    Filter,
    ClearFilter,
    Accept,
    AcceptWhileFiltering,
    Abort,
    /// A character routed into the filter editor.
    FilterInput(char),
    /// Delete the last filter character.
    FilterBackspace,
}

/// Classify a key event against the bindings.
///
/// `filtering` selects between the normal-mode and filter-editing
/// interpretations: while the filter line is open, cross-column and paging
/// keys are not interpreted and printable characters become filter input.
/// Unbound keys map to `None` and are dropped by the caller.
pub fn classify(keymap: &KeyMap, key: &KeyEvent, filtering: bool) -> Option<Action> {
    // Abort applies in every state
    if keymap.abort.matches(key) {
        return Some(Action::Abort);
    }

    if filtering {
        if keymap.accept_while_filtering.matches(key) {
            return Some(Action::AcceptWhileFiltering);
        }
        if keymap.clear_filter.matches(key) {
            return Some(Action::ClearFilter);
        }
        if keymap.cursor_up.matches(key) {
            return Some(Action::CursorUp);
        }
        if keymap.cursor_down.matches(key) {
            return Some(Action::CursorDown);
        }
        return match key.code {
            KeyCode::Backspace if key.modifiers == KeyModifiers::NONE => {
                Some(Action::FilterBackspace)
            }
            KeyCode::Char(c)
                if key.modifiers == KeyModifiers::NONE
                    || key.modifiers == KeyModifiers::SHIFT =>
            {
                Some(Action::FilterInput(c))
            }
            _ => None,
        };
    }

    if keymap.prev_column.matches(key) {
        return Some(Action::PrevColumn);
    }
    if keymap.next_column.matches(key) {
        return Some(Action::NextColumn);
    }
    if keymap.next_page.matches(key) {
        return Some(Action::NextPage);
    }
    if keymap.prev_page.matches(key) {
        return Some(Action::PrevPage);
    }
    if keymap.cursor_up.matches(key) {
        return Some(Action::CursorUp);
    }
    if keymap.cursor_down.matches(key) {
        return Some(Action::CursorDown);
    }
    if keymap.go_to_start.matches(key) {
        return Some(Action::GoToStart);
    }
    if keymap.go_to_end.matches(key) {
        return Some(Action::GoToEnd);
    }
    if keymap.filter.matches(key) {
        return Some(Action::Filter);
    }
    if keymap.clear_filter.matches(key) {
        return Some(Action::ClearFilter);
    }
    if keymap.accept.matches(key) {
        return Some(Action::Accept);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn normal_mode_navigation() {
        let km = KeyMap::default();
        assert_eq!(classify(&km, &key(KeyCode::Down), false), Some(Action::CursorDown));
        assert_eq!(classify(&km, &key(KeyCode::Right), false), Some(Action::NextColumn));
        assert_eq!(classify(&km, &key(KeyCode::PageDown), false), Some(Action::NextPage));
        assert_eq!(classify(&km, &key(KeyCode::Enter), false), Some(Action::Accept));
        assert_eq!(classify(&km, &key(KeyCode::Char('/')), false), Some(Action::Filter));
    }

    #[test]
    fn abort_wins_in_both_modes() {
        let km = KeyMap::default();
        assert_eq!(classify(&km, &key(KeyCode::Esc), false), Some(Action::Abort));
        assert_eq!(classify(&km, &key(KeyCode::Esc), true), Some(Action::Abort));
    }

    #[test]
    fn filtering_remaps_enter_and_text() {
        let km = KeyMap::default();
        assert_eq!(
            classify(&km, &key(KeyCode::Enter), true),
            Some(Action::AcceptWhileFiltering)
        );
        assert_eq!(
            classify(&km, &key(KeyCode::Char('x')), true),
            Some(Action::FilterInput('x'))
        );
        assert_eq!(
            classify(&km, &key(KeyCode::Backspace), true),
            Some(Action::FilterBackspace)
        );
        // '/' is plain text inside the filter line
        assert_eq!(
            classify(&km, &key(KeyCode::Char('/')), true),
            Some(Action::FilterInput('/'))
        );
    }

    #[test]
    fn filtering_suppresses_cross_column_keys() {
        let km = KeyMap::default();
        assert_eq!(classify(&km, &key(KeyCode::Right), true), None);
        assert_eq!(classify(&km, &key(KeyCode::Left), true), None);
        assert_eq!(classify(&km, &key(KeyCode::PageDown), true), None);
        assert_eq!(classify(&km, &key(KeyCode::PageUp), true), None);
    }

    #[test]
    fn arrows_still_navigate_while_filtering() {
        let km = KeyMap::default();
        assert_eq!(classify(&km, &key(KeyCode::Down), true), Some(Action::CursorDown));
        assert_eq!(classify(&km, &key(KeyCode::Up), true), Some(Action::CursorUp));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let km = KeyMap::default();
        assert_eq!(classify(&km, &key(KeyCode::F(5)), false), None);
        assert_eq!(classify(&km, &key(KeyCode::F(5)), true), None);
    }
}
