//! Search bar component renderer.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Blank columns on each side of the box.
const MARGIN: usize = 5;

/// Renders the search input as a three-row box.
///
/// # Parameters
///
/// * `row` - First row of the box (1-indexed)
/// * `search` - Query text and whether it is being typed
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next free row (`row + 3`).
///
/// ```text
///      ┌──────────────────────┐
///      │ Search: jazz▏        │
///      └──────────────────────┘
/// ```
///
/// The caret only shows while keystrokes edit the query.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner = cols.saturating_sub(MARGIN * 2 + 2);
    let border = Theme::fg(&theme.colors.search_bar_border);
    let rule = "─".repeat(inner);
    let caret = if search.typing { "▏" } else { "" };
    let query = fit(&format!(" Search: {}{caret}", search.query), inner);

    let lines = [
        format!("{border}┌{rule}┐"),
        format!(
            "{border}│{}{query}{border}│",
            Theme::fg(&theme.colors.text_normal)
        ),
        format!("{border}└{rule}┘"),
    ];
    for (offset, line) in lines.iter().enumerate() {
        position_cursor(row + offset, 1);
        print!("{}{line}{}", " ".repeat(MARGIN), Theme::reset());
    }

    row + lines.len()
}
