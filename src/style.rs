//! Style records for the selector's visual states.
//!
//! Every state gets its own explicit value — no variant is derived from
//! another by copying, and there is no process-wide default to mutate.

use ratatui::style::{Color, Modifier, Style};

/// Style definitions for the completions widget.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Category title of the active, focused column.
    pub focused_title: Style,
    /// Category title of every other column.
    pub blurred_title: Style,
    /// A plain item row.
    pub item: Style,
    /// The item under the cursor in the active column.
    pub selected_item: Style,
    /// The filter prompt and query shown while editing a filter.
    pub filter_prompt: Style,
    /// The "page/pages" indicator under a column.
    pub pagination: Style,
    /// The description row for the current item.
    pub description: Style,
    /// The description row when no entry is selected.
    pub placeholder_description: Style,
    /// The outer rounded border.
    pub border: Style,
    /// The rule between the columns and the description row.
    pub separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let green = Color::Rgb(0x2a, 0xa8, 0x53);
        let green_light = Color::Rgb(0x9a, 0xd2, 0xa7);
        let gray = Color::Rgb(0xe2, 0xe1, 0xed);
        let subtle = Color::Rgb(0x38, 0x38, 0x38);

        Self {
            focused_title: Style::default()
                .fg(green_light)
                .add_modifier(Modifier::UNDERLINED),
            blurred_title: Style::default()
                .fg(subtle)
                .add_modifier(Modifier::UNDERLINED),
            item: Style::default(),
            selected_item: Style::default().fg(green).add_modifier(Modifier::BOLD),
            filter_prompt: Style::default().fg(green_light),
            pagination: Style::default().fg(gray),
            description: Style::default().fg(gray),
            placeholder_description: Style::default().fg(subtle),
            border: Style::default().fg(subtle),
            separator: Style::default().fg(subtle),
        }
    }
}
