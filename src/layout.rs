//! Layout negotiation — fixed per-column costs and the max-height budget.

/// Narrowest width the widget will render at.
pub const MIN_WIDTH: u16 = 10;

/// Shortest height the widget will render at.
pub const MIN_HEIGHT: u16 = 2;

/// Fixed layout costs and caps.
///
/// `page_size` and `height_cap` are deliberately independent: the paginator
/// always shows `page_size` items regardless of how much vertical space the
/// host grants, while `height_cap` bounds how many items a category may
/// claim when the height budget is computed.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    /// Items shown per page within a column.
    pub page_size: usize,
    /// Items per category counted toward the height budget.
    pub height_cap: usize,
    /// Rows consumed by per-column decoration: title and pagination.
    pub decoration_rows: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: 4,
            height_cap: 5,
            decoration_rows: 2,
        }
    }
}

impl LayoutConfig {
    /// Maximum usable height for the given category sizes: decoration rows,
    /// the capped tallest category, and one reserved description row.
    ///
    /// Computed over all categories, so switching columns never needs a
    /// height renegotiation.
    pub fn max_height(&self, category_sizes: &[usize]) -> u16 {
        let tallest = category_sizes
            .iter()
            .map(|&n| n.min(self.height_cap))
            .max()
            .unwrap_or(0);
        self.decoration_rows + tallest as u16 + 1
    }
}

/// Clamp `v` into `[low, high]`, tolerating swapped bounds.
pub(crate) fn clamp(v: u16, low: u16, high: u16) -> u16 {
    let (low, high) = if high < low { (high, low) } else { (low, high) };
    v.max(low).min(high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_height_caps_tallest_category() {
        let cfg = LayoutConfig::default();
        // 12 items capped at 5, plus 2 decoration rows and 1 description row
        assert_eq!(cfg.max_height(&[3, 12]), 2 + 5 + 1);
    }

    #[test]
    fn max_height_small_category() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.max_height(&[2]), 2 + 2 + 1);
    }

    #[test]
    fn max_height_no_categories() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.max_height(&[]), 3);
    }

    #[test]
    fn clamp_swaps_bounds() {
        assert_eq!(clamp(7, 10, 2), 7);
        assert_eq!(clamp(1, 10, 2), 2);
        assert_eq!(clamp(20, 10, 2), 10);
    }
}
