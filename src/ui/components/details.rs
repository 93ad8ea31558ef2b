//! Event details renderer.
//!
//! Shown by the host after an `OpenDetails` action. Everything on screen
//! comes from a [`DetailsView`], which is computed from the unmodified ledger
//! record.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailsView;

const LABEL_WIDTH: usize = 12;

/// Renders the details page for one event.
///
/// The title goes on row 2, followed by one `label: value` line per field and
/// a sold-out banner when the event has no tickets left. Values longer than
/// the terminal are truncated. The back hint sits on the last row.
pub fn render_details(view: &DetailsView, theme: &Theme, rows: usize, cols: usize) {
    let mut row = 2;

    position_cursor(row, 3);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", truncate(&view.title, cols.saturating_sub(4)));
    print!("{}", Theme::reset());
    row += 2;

    let value_width = cols.saturating_sub(LABEL_WIDTH + 4);
    for (label, value) in &view.fields {
        position_cursor(row, 3);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{label:<LABEL_WIDTH$}");
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", truncate(value, value_width));
        print!("{}", Theme::reset());
        row += 1;
    }

    if view.is_sold_out {
        row += 1;
        position_cursor(row, 3);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.sold_out_fg));
        print!("SOLD OUT");
        print!("{}", Theme::reset());
    }

    position_cursor(rows, 3);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("Enter: back to catalog");
    print!("{}", Theme::reset());
}
