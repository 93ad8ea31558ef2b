//! Trending carousel renderer.
//!
//! The carousel is a single line of ranked titles, newest first. Titles are
//! shortened so every entry fits; entries that still do not fit are dropped
//! from the right.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TrendingItem;

const LABEL: &str = " Trending ";
const MAX_TITLE: usize = 20;

/// Renders the trending line at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_trending(row: usize, items: &[TrendingItem], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{LABEL}");
    print!("{}", Theme::reset());

    let mut used = LABEL.len();
    if items.is_empty() {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("nothing yet");
        print!("{}", Theme::reset());
        return row + 1;
    }

    for item in items {
        let title = truncate(&item.title, MAX_TITLE);
        let width = format!(" {}. {title} ", item.rank).chars().count();
        if used + width > cols {
            break;
        }
        print!(" {}{}", Theme::fg(&theme.colors.accent_fg), item.rank);
        print!("{}. {title} ", Theme::fg(&theme.colors.text_normal));
        used += width;
    }
    print!("{}", Theme::reset());
    row + 1
}
