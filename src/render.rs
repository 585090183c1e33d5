//! View — pure read of selector state into a ratatui frame.
//!
//! ```text
//! ╭───────────────────────────────────────╮
//! │ Tables      Columns                   │
//! │  users       id                       │
//! │  orders      name                     │
//! │ 1/1         1/2                       │
//! │ ───────────────────────────────────── │
//! │  user accounts and credentials        │
//! ╰───────────────────────────────────────╯
//! ```
//!
//! Columns joined horizontally, one per category; a separator rule; one
//! description row for the active column's current item. Degenerate
//! dimensions render nothing rather than failing.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::column::Column;
use crate::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::selector::Selector;

/// Draw the selector into `area`. Empty output when the negotiated size or
/// the granted area is below the safe minimums.
pub fn draw(f: &mut Frame, sel: &Selector, area: Rect) {
    if sel.width() < MIN_WIDTH || sel.height() < MIN_HEIGHT {
        return;
    }
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        return;
    }

    let styles = sel.styles();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.border);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 2 || inner.width == 0 {
        return;
    }

    // Bottom two rows are the separator and the description.
    let columns_height = inner.height.saturating_sub(2);
    let mut x = inner.x;
    for (idx, col) in sel.columns().iter().enumerate() {
        if x >= inner.right() || columns_height == 0 {
            break;
        }
        // One cell of left padding, one of gap to the next column.
        let natural = col.width() + 2;
        let width = natural.min(inner.right() - x);
        let col_area = Rect::new(x, inner.y, width, columns_height);
        draw_column(f, sel, col, idx, col_area);
        x += natural;
    }

    let separator_area = Rect::new(inner.x, inner.bottom() - 2, inner.width, 1);
    let rule = "\u{2500}".repeat(inner.width as usize);
    f.render_widget(
        Paragraph::new(Span::styled(rule, styles.separator)),
        separator_area,
    );

    let description_area = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
    let description = match sel.active_column().and_then(Column::current_item) {
        None => Span::styled("(no entry selected)", styles.placeholder_description),
        Some(entry) if entry.description.is_empty() => {
            Span::styled(String::new(), styles.placeholder_description)
        }
        Some(entry) => Span::styled(
            truncate_to_width(&entry.description, inner.width as usize),
            styles.description,
        ),
    };
    f.render_widget(Paragraph::new(description), description_area);
}

/// Draw one column: title (or filter line), the current page of items, and
/// a pagination row when there is more than one page.
fn draw_column(f: &mut Frame, sel: &Selector, col: &Column, idx: usize, area: Rect) {
    let styles = sel.styles();
    let is_active = idx == sel.active_index();

    let title = if col.is_filtering() {
        Line::from(Span::styled(
            format!("/{}", col.query()),
            styles.filter_prompt,
        ))
    } else {
        let style = if is_active && sel.is_focused() {
            styles.focused_title
        } else {
            styles.blurred_title
        };
        Line::from(Span::styled(col.name().to_string(), style))
    };

    let mut lines = vec![title];

    let (page, total_pages) = col.page_info();
    let page_size = sel.layout().page_size;
    let start = page * page_size;
    let end = (start + page_size).min(col.visible_len());

    // Rows the column may actually use, minus title and pagination.
    let pagination_rows = u16::from(total_pages > 1);
    let budget = col
        .height()
        .min(area.height)
        .saturating_sub(1 + pagination_rows) as usize;

    for vi in start..end.min(start + budget) {
        let Some(entry) = col.visible_entry(vi) else {
            break;
        };
        let style = if is_active && vi == col.cursor() {
            styles.selected_item
        } else {
            styles.item
        };
        let text = format!(" {}", pad_to_width(&entry.title, col.width() as usize));
        lines.push(Line::from(Span::styled(text, style)));
    }

    if total_pages > 1 {
        lines.push(Line::from(Span::styled(
            format!("{}/{}", page + 1, total_pages),
            styles.pagination,
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}

/// Pad with trailing spaces to a display width.
fn pad_to_width(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - w);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - w));
    out
}

/// Cut off at a display width, never splitting a wide character.
fn truncate_to_width(s: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
