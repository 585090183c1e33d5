//! Candidate data — the source capability and the entry value type.

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Main displayed text.
    pub title: String,
    /// Explanation for the entry. May be empty.
    pub description: String,
}

impl Entry {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Source of completion candidates, grouped into named categories.
///
/// Indices are 0-based and must stay internally consistent for the duration
/// of one [`Selector::set_values`] call. The source is read exhaustively
/// during that call and never referenced afterward — columns hold their own
/// copies.
///
/// [`Selector::set_values`]: crate::Selector::set_values
pub trait Values {
    /// Number of categories to display.
    fn num_categories(&self) -> usize;

    /// Title of a category.
    fn category_title(&self, cat: usize) -> String;

    /// Number of entries in a category.
    fn num_entries(&self, cat: usize) -> usize;

    /// The entry at (category, entry) index.
    fn entry(&self, cat: usize, idx: usize) -> Entry;
}

/// In-memory source: a list of (category name, entries) pairs.
impl Values for Vec<(String, Vec<Entry>)> {
    fn num_categories(&self) -> usize {
        self.len()
    }

    fn category_title(&self, cat: usize) -> String {
        self[cat].0.clone()
    }

    fn num_entries(&self, cat: usize) -> usize {
        self[cat].1.len()
    }

    fn entry(&self, cat: usize, idx: usize) -> Entry {
        self[cat].1[idx].clone()
    }
}
