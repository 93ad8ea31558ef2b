//! Category filter buttons renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CategoryChip;

/// Renders the category chips on one line, selected chips filled.
///
/// # Layout
///
/// ```text
///  [ Movie ]  [ Concert ]  [ Sport ]
/// ```
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_categories(row: usize, chips: &[CategoryChip], theme: &Theme) -> usize {
    position_cursor(row, 1);
    for chip in chips {
        print!(" ");
        if chip.selected {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.chip_selected_fg));
            print!("{}", Theme::bg(&theme.colors.chip_selected_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("[ {} ]", chip.label);
        print!("{}", Theme::reset());
        print!(" ");
    }
    row + 1
}
