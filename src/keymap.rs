//! Key bindings for navigating the completions.
//!
//! Bindings are plain values: each selector instance owns its own `KeyMap`,
//! constructed once and never shared, so two selectors can never corrupt
//! each other's configuration.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single binding: the key chords that trigger it plus its help line.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<(KeyModifiers, KeyCode)>,
    help_keys: &'static str,
    help_desc: &'static str,
}

impl Binding {
    pub fn new(
        keys: Vec<(KeyModifiers, KeyCode)>,
        help_keys: &'static str,
        help_desc: &'static str,
    ) -> Self {
        Self {
            keys,
            help_keys,
            help_desc,
        }
    }

    /// Whether the key event matches one of this binding's chords.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.keys
            .iter()
            .any(|(mods, code)| key.modifiers == *mods && key.code == *code)
    }

    /// Help line as (keys, description).
    pub fn help(&self) -> (&'static str, &'static str) {
        (self.help_keys, self.help_desc)
    }
}

/// Key bindings for the selector. Immutable after construction.
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub cursor_up: Binding,
    pub cursor_down: Binding,
    pub go_to_start: Binding,
    pub go_to_end: Binding,
    pub next_page: Binding,
    pub prev_page: Binding,
    pub next_column: Binding,
    pub prev_column: Binding,
    pub filter: Binding,
    pub clear_filter: Binding,
    pub accept_while_filtering: Binding,
    pub accept: Binding,
    pub abort: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        Self {
            cursor_up: Binding::new(
                vec![(M::NONE, Up), (M::CONTROL, Char('p')), (M::SHIFT, BackTab)],
                "C-p/\u{2191}",
                "prev entry",
            ),
            cursor_down: Binding::new(
                vec![(M::NONE, Down), (M::CONTROL, Char('n')), (M::NONE, Tab)],
                "C-n/\u{2193}",
                "next entry",
            ),
            go_to_start: Binding::new(
                vec![(M::CONTROL, Char('a')), (M::NONE, Home)],
                "C-a/home",
                "start of column",
            ),
            go_to_end: Binding::new(
                vec![(M::CONTROL, Char('e')), (M::NONE, End)],
                "C-e/end",
                "end of column",
            ),
            next_page: Binding::new(vec![(M::NONE, PageDown)], "pgdown", "next page/column"),
            prev_page: Binding::new(vec![(M::NONE, PageUp)], "pgup", "prev page/column"),
            next_column: Binding::new(
                vec![(M::NONE, Right), (M::ALT, Char('n'))],
                "\u{2192}/M-n",
                "next column",
            ),
            prev_column: Binding::new(
                vec![(M::NONE, Left), (M::ALT, Char('p'))],
                "\u{2190}/M-p",
                "prev column",
            ),
            filter: Binding::new(vec![(M::NONE, Char('/'))], "/", "filter"),
            clear_filter: Binding::new(vec![(M::CONTROL, Char('g'))], "C-g", "clear/cancel"),
            accept_while_filtering: Binding::new(
                vec![(M::NONE, Enter), (M::CONTROL, Char('j'))],
                "C-j/enter",
                "accept filter",
            ),
            accept: Binding::new(
                vec![(M::NONE, Enter), (M::CONTROL, Char('j'))],
                "C-j/enter",
                "accept",
            ),
            abort: Binding::new(
                vec![(M::CONTROL, Char('c')), (M::NONE, Esc)],
                "C-c/esc",
                "close/cancel",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_matches_chord() {
        let km = KeyMap::default();
        assert!(km
            .abort
            .matches(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(km
            .abort
            .matches(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!km
            .abort
            .matches(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let km = KeyMap::default();
        // Plain 'p' is not C-p
        assert!(!km
            .cursor_up
            .matches(&KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE)));
    }

    #[test]
    fn help_lines_present() {
        let km = KeyMap::default();
        let (keys, desc) = km.next_column.help();
        assert!(keys.contains("M-n"));
        assert_eq!(desc, "next column");
    }
}
