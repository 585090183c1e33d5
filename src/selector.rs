//! Selector — the session root and its navigation state machine.
//!
//! Owns the column set, the active-column index, global focus, and the
//! termination outcome. Routes each incoming key either to itself
//! (cross-column actions, accept, abort) or to the active column (in-column
//! navigation and filter editing). Single-threaded and synchronous: one
//! message is applied to completion before the next is looked at.

use std::fmt::Write as _;

use crossterm::event::KeyEvent;
use tracing::{debug, trace};

use crate::column::Column;
use crate::error::SelectError;
use crate::event::Message;
use crate::input::{self, Action};
use crate::keymap::{Binding, KeyMap};
use crate::layout::{clamp, LayoutConfig, MIN_HEIGHT};
use crate::style::Styles;
use crate::values::{Entry, Values};

/// The completion selector widget.
///
/// Termination is signalled through `err`: once it holds
/// [`SelectError::Closed`] the machine absorbs all input until the next
/// [`set_values`](Self::set_values). The accepted entry distinguishes
/// acceptance from cancellation.
pub struct Selector {
    keymap: KeyMap,
    styles: Styles,
    layout: LayoutConfig,

    columns: Vec<Column>,
    active: usize,
    focused: bool,

    width: u16,
    height: u16,
    max_height: u16,

    accepted: Option<Entry>,
    err: Option<SelectError>,
}

impl Selector {
    pub fn new(keymap: KeyMap, styles: Styles, layout: LayoutConfig) -> Self {
        Self {
            keymap,
            styles,
            layout,
            columns: Vec::new(),
            active: 0,
            focused: true,
            width: 0,
            height: 0,
            max_height: MIN_HEIGHT,
            accepted: None,
            err: None,
        }
    }

    // ── Host-facing surface ──

    /// Rebuild all columns from the source. Discards every piece of prior
    /// navigation state, clears any termination, and recomputes the height
    /// budget over all categories. An empty source closes the selector
    /// immediately with no accepted entry.
    pub fn set_values(&mut self, values: &dyn Values) {
        self.err = None;
        self.accepted = None;
        self.active = 0;

        let num_cats = values.num_categories();
        self.columns = (0..num_cats)
            .map(|cat| {
                let items = (0..values.num_entries(cat))
                    .map(|i| values.entry(cat, i))
                    .collect();
                Column::new(values.category_title(cat), items, self.layout.page_size)
            })
            .collect();

        let sizes: Vec<usize> = self.columns.iter().map(|c| c.visible_len()).collect();
        self.max_height = self.layout.max_height(&sizes);
        self.set_height(self.max_height);

        // Focus survives the rebuild: the new active column inherits it.
        let was_focused = self.focused;
        self.blur();
        if was_focused {
            self.focus();
        }

        if self.columns.is_empty() {
            debug!("empty candidate source, closing");
            self.err = Some(SelectError::Closed);
        }
    }

    /// Record the width granted by the host's layout manager. Widths below
    /// the floor are kept but render as an empty block.
    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    /// Clamp the height into `[MIN_HEIGHT, max_height]` and hand the rest,
    /// minus the description row, to every column uniformly.
    pub fn set_height(&mut self, height: u16) {
        self.height = clamp(height, MIN_HEIGHT, self.max_height);
        let column_height = self.height - 1;
        for col in &mut self.columns {
            col.set_height(column_height);
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn max_height(&self) -> u16 {
        self.max_height
    }

    /// Apply one message. The sole mutation entry point besides the setters;
    /// ignored entirely once the selector has closed.
    pub fn update(&mut self, msg: Message) {
        if self.err.is_some() {
            return;
        }
        match msg {
            Message::Resize { width, height } => {
                self.set_width(width);
                self.set_height(height);
            }
            Message::Key(key) => self.handle_key(key),
        }
    }

    /// Whether the selector would consume this key right now. Lets the
    /// embedding application decide routing before calling [`update`].
    ///
    /// [`update`]: Self::update
    pub fn matches_key(&self, key: &KeyEvent) -> bool {
        if !self.focused || self.columns.is_empty() {
            return false;
        }
        let filtering = self.columns[self.active].is_filtering();
        // While the filter line is open every key is text or an edit action.
        filtering || input::classify(&self.keymap, key, false).is_some()
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    // ── Termination queries ──

    /// Whether the interaction has concluded.
    pub fn is_done(&self) -> bool {
        self.err.is_some()
    }

    /// The termination sentinel, once set.
    pub fn err(&self) -> Option<&SelectError> {
        self.err.as_ref()
    }

    /// The accepted entry. `Some` only when closed by an accept.
    pub fn accepted(&self) -> Option<&Entry> {
        self.accepted.as_ref()
    }

    // ── Read surface for rendering ──

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_column(&self) -> Option<&Column> {
        self.columns.get(self.active)
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// One-line dump of the machine's fields, for host debug overlays.
    pub fn debug_state(&self) -> String {
        let mut buf = String::new();
        let _ = write!(
            buf,
            "width: {}, height: {}, max_height: {}, columns: {}, active: {}",
            self.width,
            self.height,
            self.max_height,
            self.columns.len(),
            self.active,
        );
        if let Some(col) = self.active_column() {
            let _ = write!(
                buf,
                ", cursor: {}, current: {:?}",
                col.cursor(),
                col.current_item().map(|e| e.title.as_str()),
            );
        }
        let _ = write!(buf, ", accepted: {:?}, err: {:?}", self.accepted, self.err);
        buf
    }

    // ── State machine ──

    fn handle_key(&mut self, key: KeyEvent) {
        if self.columns.is_empty() {
            // No completions behaves like a cancellation.
            self.err = Some(SelectError::Closed);
            return;
        }
        let filtering = self.columns[self.active].is_filtering();
        let Some(action) = input::classify(&self.keymap, &key, filtering) else {
            return;
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Abort => {
                debug!("aborted");
                self.accepted = None;
                self.err = Some(SelectError::Closed);
            }
            Action::Accept => {
                self.accepted = self.columns[self.active].current_item().cloned();
                debug!(accepted = ?self.accepted.as_ref().map(|e| &e.title), "closing");
                self.err = Some(SelectError::Closed);
            }
            Action::NextColumn => self.next_column(),
            Action::PrevColumn => self.prev_column(),
            Action::NextPage => {
                if self.columns[self.active].on_last_page() {
                    self.next_column();
                } else {
                    self.columns[self.active].next_page();
                }
            }
            Action::PrevPage => {
                if self.columns[self.active].on_first_page() {
                    self.prev_column();
                } else {
                    self.columns[self.active].prev_page();
                }
            }
            Action::CursorUp => self.columns[self.active].cursor_up(),
            Action::CursorDown => self.columns[self.active].cursor_down(),
            Action::GoToStart => self.columns[self.active].go_to_start(),
            Action::GoToEnd => self.columns[self.active].go_to_end(),
            Action::Filter => self.columns[self.active].start_filter(),
            Action::ClearFilter => self.columns[self.active].clear_filter(),
            Action::AcceptWhileFiltering => self.columns[self.active].commit_filter(),
            Action::FilterInput(c) => self.columns[self.active].push_filter_char(c),
            Action::FilterBackspace => self.columns[self.active].pop_filter_char(),
        }
    }

    fn next_column(&mut self) {
        let was_focused = self.focused;
        self.blur();
        self.active = (self.active + 1) % self.columns.len();
        self.columns[self.active].select_cursor(0);
        if was_focused {
            self.focus();
        }
        trace!(active = self.active, "switched column");
    }

    fn prev_column(&mut self) {
        let was_focused = self.focused;
        self.blur();
        self.active = (self.active + self.columns.len() - 1) % self.columns.len();
        self.columns[self.active].select_cursor(0);
        if was_focused {
            self.focus();
        }
        trace!(active = self.active, "switched column");
    }

    // ── Help surface ──

    /// Short-form list of currently applicable bindings.
    pub fn short_help(&self) -> Vec<&Binding> {
        let Some(col) = self.active_column() else {
            return Vec::new();
        };
        let mut kb = vec![&self.keymap.abort];
        if col.is_filtering() {
            kb.push(&self.keymap.accept_while_filtering);
            kb.push(&self.keymap.clear_filter);
        } else {
            if self.columns.len() > 1 {
                kb.push(&self.keymap.next_column);
            }
            kb.push(&self.keymap.accept);
            kb.push(&self.keymap.cursor_up);
            kb.push(&self.keymap.cursor_down);
            kb.push(&self.keymap.filter);
        }
        kb
    }

    /// Full-form help, grouped by concern.
    pub fn full_help(&self) -> Vec<Vec<&Binding>> {
        let Some(col) = self.active_column() else {
            return Vec::new();
        };
        let mut first = Vec::new();
        if self.columns.len() > 1 {
            first.push(&self.keymap.next_column);
            first.push(&self.keymap.prev_column);
        }
        first.push(&self.keymap.accept);
        first.push(&self.keymap.abort);

        let mut groups = vec![first];
        if !col.is_filtering() {
            groups.push(vec![
                &self.keymap.cursor_up,
                &self.keymap.cursor_down,
                &self.keymap.go_to_start,
                &self.keymap.go_to_end,
                &self.keymap.next_page,
                &self.keymap.prev_page,
            ]);
        }
        groups.push(vec![
            &self.keymap.filter,
            &self.keymap.clear_filter,
            &self.keymap.accept_while_filtering,
        ]);
        groups
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(KeyMap::default(), Styles::default(), LayoutConfig::default())
    }
}
