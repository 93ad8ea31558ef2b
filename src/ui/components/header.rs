//! Header component renderer.
//!
//! Renders the catalog title bar: the result counts centered and the
//! loading/freshness status right-aligned.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// # Layout
///
/// ```text
/// [padding] Events (6/16) [padding] updated 3m ago
/// ```
///
/// The status is dropped when the terminal is too narrow for both.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    let status_len = header.status.chars().count() + 1;
    let padding = (cols.saturating_sub(title_len)) / 2;
    let show_status = padding + title_len + status_len <= cols;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);

    if show_status {
        print!("{}", " ".repeat(cols.saturating_sub(padding + title_len + status_len)));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{} ", header.status);
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    }

    print!("{}", Theme::reset());
    row + 1
}
