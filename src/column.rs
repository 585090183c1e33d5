//! One category's navigation state: items, cursor, page, filter sub-state.
//!
//! A column never reaches into its siblings or the selector; all of its side
//! effects are confined to its own fields. The selector owns columns as slot
//! values in an index-addressed collection and replaces slots wholesale.

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use unicode_width::UnicodeWidthStr;

use crate::values::Entry;

/// Filter sub-state of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    /// No filter; all items visible in source order.
    Off,
    /// The filter line is being edited; keys are routed into the query.
    Editing,
    /// A committed filter still narrows the view.
    Applied,
}

/// Per-category navigation and display unit.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    items: Vec<Entry>,
    /// Cursor into the visible (possibly filtered) view.
    cursor: usize,
    per_page: usize,
    height: u16,
    /// Display width of the widest title, floored at the render minimum.
    width: u16,
    filter: FilterState,
    query: String,
    /// Indices into `items` forming the visible view while a non-empty
    /// query narrows it, best match first. `None` = unfiltered.
    matched: Option<Vec<usize>>,
}

impl Column {
    pub fn new(name: String, items: Vec<Entry>, per_page: usize) -> Self {
        let width = items
            .iter()
            .map(|e| e.title.width())
            .max()
            .unwrap_or(0)
            .max(crate::layout::MIN_WIDTH as usize) as u16;
        Self {
            name,
            items,
            cursor: 0,
            per_page: per_page.max(1),
            height: 0,
            width,
            filter: FilterState::Off,
            query: String::new(),
            matched: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Natural width of this column's titles.
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn set_height(&mut self, height: u16) {
        self.height = height;
    }

    /// Number of items in the visible view.
    pub fn visible_len(&self) -> usize {
        match &self.matched {
            Some(m) => m.len(),
            None => self.items.len(),
        }
    }

    /// The entry at a visible-view index.
    pub fn visible_entry(&self, i: usize) -> Option<&Entry> {
        match &self.matched {
            Some(m) => self.items.get(*m.get(i)?),
            None => self.items.get(i),
        }
    }

    /// Move the cursor, clamping into the visible range. No-op when empty.
    pub fn select_cursor(&mut self, i: usize) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = i.min(len - 1);
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The cursor target, if any.
    pub fn current_item(&self) -> Option<&Entry> {
        self.visible_entry(self.cursor)
    }

    /// (current page, total pages) over the visible view. Pages derive from
    /// the cursor, so cursor motion and paging can never disagree.
    pub fn page_info(&self) -> (usize, usize) {
        let total = self.visible_len().div_ceil(self.per_page).max(1);
        (self.cursor / self.per_page, total)
    }

    pub fn on_first_page(&self) -> bool {
        self.page_info().0 == 0
    }

    pub fn on_last_page(&self) -> bool {
        let (page, total) = self.page_info();
        page + 1 >= total
    }

    pub fn cursor_up(&mut self) {
        self.select_cursor(self.cursor.saturating_sub(1));
    }

    pub fn cursor_down(&mut self) {
        self.select_cursor(self.cursor.saturating_add(1));
    }

    pub fn go_to_start(&mut self) {
        self.select_cursor(0);
    }

    pub fn go_to_end(&mut self) {
        self.select_cursor(self.visible_len().saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        self.select_cursor(self.cursor.saturating_add(self.per_page));
    }

    pub fn prev_page(&mut self) {
        self.select_cursor(self.cursor.saturating_sub(self.per_page));
    }

    // ── Filter sub-state ──

    /// True only while the filter line is being edited.
    pub fn is_filtering(&self) -> bool {
        self.filter == FilterState::Editing
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Open the filter line with an empty query.
    pub fn start_filter(&mut self) {
        self.filter = FilterState::Editing;
        self.query.clear();
        self.matched = None;
        self.cursor = 0;
    }

    pub fn push_filter_char(&mut self, c: char) {
        if self.filter != FilterState::Editing {
            return;
        }
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_filter_char(&mut self) {
        if self.filter != FilterState::Editing {
            return;
        }
        self.query.pop();
        self.refilter();
    }

    /// Commit the filter, keeping the top result as the current item. Always
    /// succeeds: an empty query commits to the full, unfiltered view.
    pub fn commit_filter(&mut self) {
        if self.filter != FilterState::Editing {
            return;
        }
        self.filter = if self.query.is_empty() {
            FilterState::Off
        } else {
            FilterState::Applied
        };
    }

    /// Drop any filter and restore the unfiltered view.
    pub fn clear_filter(&mut self) {
        self.filter = FilterState::Off;
        self.query.clear();
        self.matched = None;
        self.cursor = 0;
    }

    /// Re-rank the visible view against the current query. Items are scored
    /// on title plus description; the cursor resets to the top match.
    fn refilter(&mut self) {
        if self.query.is_empty() {
            self.matched = None;
            self.cursor = 0;
            return;
        }
        let mut matcher = Matcher::new(Config::DEFAULT);
        let pattern = Pattern::parse(&self.query, CaseMatching::Ignore, Normalization::Smart);
        let mut buf = Vec::new();
        let mut scored: Vec<(u32, usize)> = self
            .items
            .iter()
            .enumerate()
            .filter_map(|(i, e)| {
                let haystack = format!("{}\n{}", e.title, e.description);
                pattern
                    .score(Utf32Str::new(&haystack, &mut buf), &mut matcher)
                    .map(|score| (score, i))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        self.matched = Some(scored.into_iter().map(|(_, i)| i).collect());
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(titles: &[&str]) -> Vec<Entry> {
        titles.iter().map(|t| Entry::new(*t, "")).collect()
    }

    fn column(titles: &[&str]) -> Column {
        Column::new("test".into(), entries(titles), 4)
    }

    #[test]
    fn cursor_clamps_to_items() {
        let mut col = column(&["a", "b", "c"]);
        col.select_cursor(99);
        assert_eq!(col.cursor(), 2);
        col.select_cursor(1);
        assert_eq!(col.current_item().unwrap().title, "b");
    }

    #[test]
    fn empty_column_has_no_current_item() {
        let mut col = column(&[]);
        col.select_cursor(5);
        assert_eq!(col.cursor(), 0);
        assert!(col.current_item().is_none());
    }

    #[test]
    fn page_info_derives_from_cursor() {
        let mut col = column(&["a", "b", "c", "d", "e", "f", "g", "h", "i"]);
        assert_eq!(col.page_info(), (0, 3));
        col.select_cursor(4);
        assert_eq!(col.page_info(), (1, 3));
        col.go_to_end();
        assert_eq!(col.page_info(), (2, 3));
        assert!(col.on_last_page());
    }

    #[test]
    fn paging_moves_cursor_by_page() {
        let mut col = column(&["a", "b", "c", "d", "e", "f"]);
        col.next_page();
        assert_eq!(col.cursor(), 4);
        col.next_page();
        // Clamped to the last item
        assert_eq!(col.cursor(), 5);
        col.prev_page();
        assert_eq!(col.cursor(), 1);
    }

    #[test]
    fn single_page_is_first_and_last() {
        let col = column(&["a", "b"]);
        assert!(col.on_first_page());
        assert!(col.on_last_page());
    }

    #[test]
    fn empty_column_reports_one_page() {
        let col = column(&[]);
        assert_eq!(col.page_info(), (0, 1));
    }

    #[test]
    fn width_floors_at_render_minimum() {
        let col = column(&["ab"]);
        assert_eq!(col.width(), crate::layout::MIN_WIDTH);
        let wide = column(&["a-rather-long-title"]);
        assert_eq!(wide.width(), "a-rather-long-title".len() as u16);
    }

    #[test]
    fn filter_narrows_and_ranks() {
        let mut col = column(&["users", "orders", "user_roles"]);
        col.start_filter();
        assert!(col.is_filtering());
        for c in "user".chars() {
            col.push_filter_char(c);
        }
        assert_eq!(col.visible_len(), 2);
        assert_eq!(col.current_item().unwrap().title, "users");
    }

    #[test]
    fn filter_matches_description_too() {
        let mut col = Column::new(
            "test".into(),
            vec![
                Entry::new("t1", "primary keys"),
                Entry::new("t2", "foreign keys"),
            ],
            4,
        );
        col.start_filter();
        for c in "foreign".chars() {
            col.push_filter_char(c);
        }
        assert_eq!(col.visible_len(), 1);
        assert_eq!(col.current_item().unwrap().title, "t2");
    }

    #[test]
    fn backspace_widens_view_again() {
        let mut col = column(&["alpha", "beta"]);
        col.start_filter();
        col.push_filter_char('b');
        assert_eq!(col.visible_len(), 1);
        col.pop_filter_char();
        assert_eq!(col.visible_len(), 2);
    }

    #[test]
    fn commit_with_empty_query_keeps_full_view() {
        let mut col = column(&["a", "b", "c"]);
        col.start_filter();
        col.commit_filter();
        assert!(!col.is_filtering());
        assert_eq!(col.filter_state(), FilterState::Off);
        assert_eq!(col.visible_len(), 3);
        assert_eq!(col.current_item().unwrap().title, "a");
    }

    #[test]
    fn commit_with_query_keeps_narrowed_view() {
        let mut col = column(&["alpha", "beta"]);
        col.start_filter();
        col.push_filter_char('b');
        col.commit_filter();
        assert_eq!(col.filter_state(), FilterState::Applied);
        assert!(!col.is_filtering());
        assert_eq!(col.visible_len(), 1);
        assert_eq!(col.current_item().unwrap().title, "beta");
    }

    #[test]
    fn clear_filter_restores_source_order() {
        let mut col = column(&["alpha", "beta"]);
        col.start_filter();
        col.push_filter_char('b');
        col.commit_filter();
        col.clear_filter();
        assert_eq!(col.filter_state(), FilterState::Off);
        assert_eq!(col.visible_len(), 2);
        assert_eq!(col.current_item().unwrap().title, "alpha");
    }

    #[test]
    fn no_match_leaves_empty_view() {
        let mut col = column(&["alpha", "beta"]);
        col.start_filter();
        for c in "zzz".chars() {
            col.push_filter_char(c);
        }
        assert_eq!(col.visible_len(), 0);
        assert!(col.current_item().is_none());
    }
}
