//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used by several components: cursor positioning, match
//! highlighting with proper ANSI reset handling, width-aware truncation, and
//! the relative age shown in the header.
//!
//! # Example
//!
//! ```rust
//! use showfinder::ui::helpers::truncate;
//!
//! assert_eq!(truncate("Midnight Screening", 10), "Midnigh...");
//! assert_eq!(truncate("Dune", 10), "Dune");
//! ```

use crate::ui::theme::Theme;
use chrono::{DateTime, Utc};

/// Positions the cursor at a specific row and column.
///
/// # Parameters
///
/// * `row` - Target row (1-indexed)
/// * `col` - Target column (1-indexed, usually 1 for the start of a line)
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Clears the screen and homes the cursor.
pub fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[H");
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Pads `text` with spaces to exactly `width` characters, truncating first.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let len = cut.chars().count();
    format!("{cut}{}", " ".repeat(width.saturating_sub(len)))
}

/// Centers `text` in a line of exactly `width` characters, truncating first.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let left = width.saturating_sub(cut.chars().count()) / 2;
    fit(&format!("{}{cut}", " ".repeat(left)), width)
}

/// Describes how long ago `then` was, relative to `now`.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use showfinder::ui::helpers::format_age;
///
/// let now = Utc::now();
/// assert_eq!(format_age(now - Duration::minutes(3), now), "updated 3m ago");
/// ```
#[must_use]
pub fn format_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    match seconds {
        0..=59 => "updated just now".to_string(),
        60..=3_599 => format!("updated {}m ago", seconds / 60),
        3_600..=86_399 => format!("updated {}h ago", seconds / 3_600),
        _ => format!("updated {}d ago", seconds / 86_400),
    }
}

/// Renders text with highlighted character ranges for search matches.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - `(start, end)` character indices to highlight, end exclusive,
///   sorted and non-overlapping
/// * `theme` - Active color theme for the highlight colors
/// * `is_selected` - Whether the line is the selected card
///
/// When `is_selected` is `true` the selection colors win and the text is
/// printed plain. Ranges past the end of `text` are clamped.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start.max(current_pos)..end.max(current_pos)].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end.max(current_pos);
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
