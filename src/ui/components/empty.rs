//! Empty state component renderer.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting at `row`.
///
/// Shown in the list area while loading, after a failed first load, or when
/// the filters leave nothing. An empty result is a normal state, so the
/// message uses `empty_state_fg` rather than an error color.
///
/// # Example
///
/// ```rust,no_run
/// use showfinder::ui::components::render_empty_state;
/// use showfinder::ui::viewmodel::EmptyState;
/// use showfinder::ui::Theme;
///
/// let empty = EmptyState {
///     message: "No events found".to_string(),
///     subtitle: "Try another search or category".to_string(),
/// };
/// render_empty_state(8, &empty, &Theme::default(), 80);
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.empty_state_fg),
        center(&empty.message, cols),
        Theme::reset()
    );

    if empty.subtitle.is_empty() {
        return;
    }
    position_cursor(row + 1, 1);
    print!(
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        center(&empty.subtitle, cols),
        Theme::reset()
    );
}
