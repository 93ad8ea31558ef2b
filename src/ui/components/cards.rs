//! Event card list renderer.
//!
//! Cards are laid out as one row each with TITLE, DATE, LOCATION, TYPE, PRICE
//! and LEFT columns. LOCATION is dropped on narrow terminals and TITLE takes
//! whatever width is left.

use crate::ui::helpers::{self, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EventCard;

const DATE_WIDTH: usize = 12;
const LOCATION_WIDTH: usize = 18;
const TYPE_WIDTH: usize = 10;
const PRICE_WIDTH: usize = 16;
const LEFT_WIDTH: usize = 10;
const MIN_TITLE_WIDTH: usize = 12;

/// Terminal width from which the LOCATION column is shown.
const LOCATION_MIN_COLS: usize = 100;

/// Column widths for one terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    title: usize,
    location: Option<usize>,
}

impl Columns {
    fn for_width(cols: usize) -> Self {
        let location = (cols >= LOCATION_MIN_COLS).then_some(LOCATION_WIDTH);
        let fixed = DATE_WIDTH + TYPE_WIDTH + PRICE_WIDTH + LEFT_WIDTH + location.unwrap_or(0);
        Self {
            title: cols.saturating_sub(fixed).max(MIN_TITLE_WIDTH),
            location,
        }
    }
}

/// Renders the column headers.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_card_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let columns = Columns::for_width(cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", fit("TITLE", columns.title));
    print!("{}", fit("DATE", DATE_WIDTH));
    if let Some(width) = columns.location {
        print!("{}", fit("LOCATION", width));
    }
    print!("{}", fit("TYPE", TYPE_WIDTH));
    print!("{}", fit("PRICE", PRICE_WIDTH));
    print!("{}", fit("LEFT", LEFT_WIDTH));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all cards starting at `row`.
///
/// # Returns
///
/// The next available row position (row + number of cards)
pub fn render_cards(row: usize, cards: &[EventCard], theme: &Theme, cols: usize) -> usize {
    let columns = Columns::for_width(cols);
    let mut current_row = row;
    for card in cards {
        current_row = render_card(current_row, card, theme, columns);
    }
    current_row
}

/// Renders the end-of-list sentinel marker below the last card.
pub fn render_sentinel(row: usize, theme: &Theme, cols: usize) -> usize {
    let marker = "· · ·";
    let padding = cols.saturating_sub(marker.chars().count()) / 2;
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}{marker}", " ".repeat(padding));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one card.
///
/// Styling precedence: selection colors, then sold-out color on the LEFT
/// column, then search highlights on the title.
fn render_card(row: usize, card: &EventCard, theme: &Theme, columns: Columns) -> usize {
    position_cursor(row, 1);

    let base = if card.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{base}");

    let title = fit(&card.title, columns.title.saturating_sub(1));
    helpers::render_highlighted_text(&title, &card.highlight_ranges, theme, card.is_selected);
    print!(" ");

    print!("{}", fit(&card.date, DATE_WIDTH));
    if let Some(width) = columns.location {
        print!("{}", fit(&card.location, width));
    }
    print!("{}", fit(&card.event_type, TYPE_WIDTH));
    print!("{}", fit(&card.price, PRICE_WIDTH));

    if card.is_sold_out && !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.sold_out_fg));
    }
    print!("{}", fit(&card.tickets_left, LEFT_WIDTH));

    print!("{}", Theme::reset());
    row + 1
}
