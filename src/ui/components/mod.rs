//! Composable UI component renderers.
//!
//! Each component draws one part of the catalog at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with result counts and freshness status
//! - [`trending`]: One-line trending carousel
//! - [`categories`]: Category filter buttons
//! - [`search`]: Search input box
//! - [`cards`]: Event card list and scroll sentinel
//! - [`empty`]: Empty state message
//! - [`details`]: Full page for one event
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Trending]
//! [Categories]
//! [Search Bar - 3 lines, while open]
//! [Card Headers]
//! [Cards | Empty State]
//! [Sentinel, once the last revealed card is on screen]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod cards;
mod categories;
mod details;
mod empty;
mod footer;
mod header;
mod search;
mod trending;

pub use details::render_details;
pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use cards::{render_card_headers, render_cards, render_sentinel};
use categories::render_categories;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use trending::render_trending;

/// Renders a horizontal border line at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole catalog screen.
///
/// The list area gets the rows between the chrome; the view model has
/// already been windowed to fit it.
pub fn render_catalog(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_trending(current_row, &vm.trending, theme, cols);
    current_row = render_categories(current_row, &vm.categories, theme);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        current_row = render_card_headers(current_row, theme, cols);
        current_row = render_cards(current_row, &vm.cards, theme, cols);
        if vm.sentinel_ratio > 0.0 && current_row < border_row {
            render_sentinel(current_row, theme, cols);
        }
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
