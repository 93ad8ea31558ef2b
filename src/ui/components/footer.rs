//! Footer component renderer.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Draws the command hints, dimmed and centered.
///
/// # Returns
///
/// The next free row (`row + 1`).
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.text_dim),
        center(&footer.keybindings, cols),
        Theme::reset()
    );
    row + 1
}
