//! Catalog state and view model computation.
//!
//! [`AppState`] is the single source of truth for the catalog view. It keeps
//! the source collection apart from everything derived from it (the filtered
//! list, the revealed prefix, the cursor) and recomputes the derived parts
//! explicitly whenever an input changes:
//!
//! | input changed         | filter | reveal reset | cursor clamp |
//! |-----------------------|--------|--------------|--------------|
//! | search text           | yes    | yes          | yes          |
//! | selected categories   | yes    | yes          | yes          |
//! | collection (refresh)  | yes    | no           | yes          |
//! | scroll signal         | no     | grows        | no           |
//!
//! # Example
//!
//! ```rust
//! use showfinder::app::AppState;
//! use showfinder::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! state.set_search_text("jazz");
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.cards.is_empty());
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::catalog::{self, CategorySet, RevealController, SentinelObserver};
use crate::domain::{decode, EventRecord};
use crate::ui::helpers::format_age;
use crate::ui::theme::Theme;
use crate::ui::units::{EtherUnits, UnitFormatter};
use crate::ui::viewmodel::{
    image_or_fallback, title_or_untitled, CategoryChip, EmptyState, EventCard, FooterInfo, HeaderInfo,
    SearchBarInfo, TrendingItem, UIViewModel,
};
use chrono::{DateTime, Utc};
use std::rc::Rc;
use std::sync::Arc;

/// Rows the scroll sentinel occupies below the last revealed card.
pub const SENTINEL_ROWS: usize = 2;

/// Central catalog state container.
///
/// Mutated by the event handler. Fields are public for the host and tests to
/// read; mutation goes through the methods so derived state stays in sync.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Last loaded collection, in ledger enumeration order.
    pub collection: Arc<[EventRecord]>,

    /// `collection` after the search and category stages.
    pub filtered: Vec<EventRecord>,

    pub search_text: String,

    pub selected_categories: CategorySet,

    pub reveal: RevealController,

    pub sentinel: SentinelObserver,

    /// Whether a refresh is in flight, mirrored from the repository.
    pub loading: bool,

    /// When `collection` was last replaced.
    pub last_refreshed: Option<DateTime<Utc>>,

    /// Message of the last failed refresh, cleared by the next success.
    pub last_error: Option<String>,

    /// Cursor within the visible prefix.
    pub selected_index: usize,

    pub input_mode: InputMode,

    /// Category buttons, in display order.
    pub categories: Vec<String>,

    /// Length of the trending carousel.
    pub trending_size: usize,

    /// Price formatter for cards.
    pub units: Rc<dyn UnitFormatter>,

    pub theme: Theme,
}

impl AppState {
    /// Creates an empty, not-yet-loaded catalog with default settings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use showfinder::app::AppState;
    /// use showfinder::ui::Theme;
    ///
    /// let state = AppState::new(Theme::default());
    /// assert_eq!(state.reveal.count(), 6);
    /// assert!(state.filtered.is_empty());
    /// ```
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            collection: Arc::from(Vec::new()),
            filtered: vec![],
            search_text: String::new(),
            selected_categories: CategorySet::new(),
            reveal: RevealController::default(),
            sentinel: SentinelObserver::default(),
            loading: false,
            last_refreshed: None,
            last_error: None,
            selected_index: 0,
            input_mode: InputMode::Normal,
            categories: catalog::DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
            trending_size: catalog::trending::TRENDING_SIZE,
            units: Rc::new(EtherUnits),
            theme,
        }
    }

    /// The revealed prefix of the filtered list.
    #[must_use]
    pub fn visible(&self) -> &[EventRecord] {
        self.reveal.visible(&self.filtered)
    }

    /// The most recently added events, newest first.
    ///
    /// Computed from the whole collection, independent of any filter.
    #[must_use]
    pub fn trending(&self) -> Vec<EventRecord> {
        catalog::latest(&self.collection, self.trending_size)
    }

    /// The record under the cursor, if any card is visible.
    #[must_use]
    pub fn selected_event(&self) -> Option<&EventRecord> {
        self.visible().get(self.selected_index)
    }

    /// Replaces the collection after a successful refresh.
    ///
    /// The filter is recomputed with the current inputs. The reveal count is
    /// left alone: a refresh is not a filter change.
    pub fn set_collection(&mut self, collection: Arc<[EventRecord]>, fetched_at: DateTime<Utc>) {
        self.collection = collection;
        self.last_refreshed = Some(fetched_at);
        self.last_error = None;
        self.loading = false;
        self.apply_filter();
    }

    /// Sets the search text.
    ///
    /// Returns `true` if the text changed, in which case the reveal count is
    /// reset and the filter recomputed.
    pub fn set_search_text(&mut self, text: &str) -> bool {
        if self.search_text == text {
            return false;
        }
        self.search_text = text.to_string();
        self.on_filter_inputs_changed();
        true
    }

    /// Appends one character to the search text.
    pub fn push_search_char(&mut self, c: char) {
        self.search_text.push(c);
        self.on_filter_inputs_changed();
    }

    /// Removes the last character of the search text.
    ///
    /// Returns `false` if the text was already empty.
    pub fn pop_search_char(&mut self) -> bool {
        if self.search_text.pop().is_none() {
            return false;
        }
        self.on_filter_inputs_changed();
        true
    }

    /// Adds or removes `category` from the selection.
    pub fn toggle_category(&mut self, category: &str) {
        self.selected_categories = catalog::toggle_category(&self.selected_categories, category);
        tracing::debug!(
            category = %category,
            selected = ?self.selected_categories,
            "category toggled"
        );
        self.on_filter_inputs_changed();
    }

    /// Reveals the next step of results if more are filtered than shown.
    ///
    /// Returns `true` if the visible prefix grew.
    pub fn on_scroll_threshold_reached(&mut self) -> bool {
        let grew = self.reveal.on_scroll_threshold_reached(self.filtered.len());
        tracing::debug!(
            reveal_count = self.reveal.count(),
            filtered_count = self.filtered.len(),
            grew = grew,
            "scroll threshold reached"
        );
        grew
    }

    /// Feeds a sentinel intersection ratio through the observer.
    ///
    /// Ratios under the observer's threshold are ignored.
    pub fn on_sentinel_intersection(&mut self, ratio: f64) -> bool {
        if !self.sentinel.is_intersecting(ratio) {
            return false;
        }
        self.on_scroll_threshold_reached()
    }

    /// Moves the cursor down one card, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up one card, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Resets the cursor to the first card.
    pub fn scroll_to_top(&mut self) {
        self.selected_index = 0;
    }

    fn on_filter_inputs_changed(&mut self) {
        self.reveal.on_filter_changed();
        self.apply_filter();
    }

    /// Recomputes `filtered` from the collection and the current inputs, then
    /// clamps the cursor to the visible prefix.
    pub fn apply_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filter",
            total_events = self.collection.len(),
            query_len = self.search_text.len(),
            category_count = self.selected_categories.len()
        )
        .entered();

        self.filtered = catalog::filter(&self.collection, &self.search_text, &self.selected_categories);

        let visible_len = self.visible().len();
        if visible_len == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(visible_len - 1);
        }

        tracing::debug!(
            filtered_count = self.filtered.len(),
            reveal_count = self.reveal.count(),
            "filter applied"
        );
    }

    /// Computes a renderable view model for a terminal of the given size.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        self.compute_viewmodel_at(rows, cols, Utc::now())
    }

    /// [`compute_viewmodel`](Self::compute_viewmodel) with an explicit clock.
    ///
    /// # Windowing
    ///
    /// The list area shows a window of the visible prefix centered on the
    /// cursor. Once the window reaches the end of the prefix, the rows left
    /// under the last card hold the scroll sentinel, and the share of its
    /// [`SENTINEL_ROWS`] that fit becomes `sentinel_ratio`.
    ///
    /// With the cursor on the last revealed card the window scrolls far
    /// enough to show the whole sentinel, even when the prefix fills the list
    /// area.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute_viewmodel_at(&self, rows: usize, cols: usize, now: DateTime<Utc>) -> UIViewModel {
        let visible = self.visible();
        let available_rows = self.calculate_available_rows(rows);

        let at_last_card = self.selected_index + 1 == visible.len();
        let card_rows = if at_last_card && visible.len() + SENTINEL_ROWS > available_rows {
            available_rows.saturating_sub(SENTINEL_ROWS).max(1).min(available_rows)
        } else {
            available_rows
        };

        let mut visible_start = self.selected_index.saturating_sub(card_rows / 2);
        let visible_end = (visible_start + card_rows).min(visible.len());
        if visible_end - visible_start < card_rows && visible.len() >= card_rows {
            visible_start = visible_end.saturating_sub(card_rows);
        }

        let cards: Vec<EventCard> = visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, record)| self.compute_card(record, visible_start + relative_idx, cols))
            .collect();

        let sentinel_ratio = if visible_end == visible.len() {
            let spare = available_rows.saturating_sub(cards.len()).min(SENTINEL_ROWS);
            spare as f64 / SENTINEL_ROWS as f64
        } else {
            0.0
        };

        UIViewModel {
            header: self.compute_header(now),
            trending: self.compute_trending(),
            categories: self.compute_categories(),
            search_bar: self.compute_search_bar(),
            selected_index: self.selected_index.saturating_sub(visible_start),
            empty_state: self.compute_empty_state(),
            cards,
            sentinel_ratio,
            footer: self.compute_footer(),
        }
    }

    fn compute_card(&self, record: &EventRecord, absolute_idx: usize, cols: usize) -> EventCard {
        let metadata = decode(&record.metadata_uri);

        let title = title_or_untitled(metadata.title);
        let tickets_left = if record.is_sold_out() {
            "SOLD OUT".to_string()
        } else {
            format!("{}/{}", record.tickets_remaining(), record.max_tickets)
        };
        let highlight_ranges = if self.search_text.is_empty() || cols < 40 {
            vec![]
        } else {
            Self::compute_highlight_ranges(&title, &self.search_text)
        };

        EventCard {
            title,
            date: metadata.date,
            location: metadata.location,
            event_type: metadata.event_type,
            image: image_or_fallback(metadata.image),
            price: self.units.format(record.ticket_price),
            tickets_left,
            is_sold_out: record.is_sold_out(),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    /// Finds case-insensitive, non-overlapping occurrences of `query` in
    /// `text`, as character index ranges.
    ///
    /// The search stage matches the raw metadata URI, so a card can be listed
    /// without its title containing the query. Such cards get no ranges.
    fn compute_highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
        let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
        let haystack: Vec<char> = text.chars().map(fold).collect();
        let needle: Vec<char> = query.chars().map(fold).collect();

        let mut ranges = Vec::new();
        if needle.is_empty() || needle.len() > haystack.len() {
            return ranges;
        }

        let mut i = 0;
        while i + needle.len() <= haystack.len() {
            if haystack[i..i + needle.len()] == needle[..] {
                ranges.push((i, i + needle.len()));
                i += needle.len();
            } else {
                i += 1;
            }
        }
        ranges
    }

    fn compute_header(&self, now: DateTime<Utc>) -> HeaderInfo {
        let status = if self.loading {
            "loading...".to_string()
        } else if self.last_error.is_some() {
            "refresh failed".to_string()
        } else {
            self.last_refreshed
                .map_or_else(|| "not loaded".to_string(), |at| format_age(at, now))
        };
        HeaderInfo {
            title: format!(" Events ({}/{}) ", self.visible().len(), self.filtered.len()),
            status,
        }
    }

    fn compute_trending(&self) -> Vec<TrendingItem> {
        self.trending()
            .iter()
            .enumerate()
            .map(|(idx, record)| TrendingItem {
                rank: idx + 1,
                title: title_or_untitled(decode(&record.metadata_uri).title),
            })
            .collect()
    }

    fn compute_categories(&self) -> Vec<CategoryChip> {
        self.categories
            .iter()
            .map(|label| CategoryChip {
                label: label.clone(),
                selected: self.selected_categories.contains(label),
            })
            .collect()
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.search_text.clone(),
                typing: focus == SearchFocus::Typing,
            }),
            InputMode::Normal => None,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.filtered.is_empty() {
            return None;
        }
        if self.loading && self.collection.is_empty() {
            return Some(EmptyState {
                message: "Loading events...".to_string(),
                subtitle: "Fetching records from the ledger".to_string(),
            });
        }
        if let Some(error) = &self.last_error {
            if self.collection.is_empty() {
                return Some(EmptyState {
                    message: "Could not load events".to_string(),
                    subtitle: format!("{error} (r: retry)"),
                });
            }
        }
        let subtitle = if self.search_text.is_empty() && self.selected_categories.is_empty() {
            "The ledger has no events yet".to_string()
        } else {
            "Try another search or category".to_string()
        };
        Some(EmptyState {
            message: "No events found".to_string(),
            subtitle,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => "ESC: close search  Enter: results  Type to filter",
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: close search  /: edit query  j/k: navigate  o: open  c <cat>: category"
            }
            InputMode::Normal => {
                "j/k: navigate  o: open  t <n>: trending  /: search  c <cat>: category  r: refresh  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Rows left for the card list after the chrome.
    ///
    /// Chrome: blank, header, border, trending, categories, column headers,
    /// border, footer. The search bar adds 3 rows when open.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(8),
            InputMode::Search(_) => total_rows.saturating_sub(11),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventId;
    use crate::ui::viewmodel::{FALLBACK_IMAGE, UNTITLED_EVENT};

    fn event(id: u64, title: &str, kind: &str) -> EventRecord {
        EventRecord {
            id: EventId::from(id),
            creator: "0xabc".to_string(),
            ticket_price: 10_u128.pow(16),
            metadata_uri: format!("https://tix.example/m?title={title}&eventType={kind}&date=2026-05-01"),
            max_tickets: 50,
            tickets_sold: 10,
        }
    }

    fn loaded(count: u64) -> AppState {
        let mut state = AppState::new(Theme::default());
        let events: Vec<EventRecord> = (1..=count)
            .map(|n| event(n, &format!("Show{n}"), if n % 2 == 0 { "Movie" } else { "Sport" }))
            .collect();
        state.set_collection(Arc::from(events), Utc::now());
        state
    }

    #[test]
    fn reveal_grows_then_stops() {
        let mut state = loaded(16);
        assert_eq!(state.visible().len(), 6);
        assert!(state.on_scroll_threshold_reached());
        assert!(state.on_scroll_threshold_reached());
        assert_eq!(state.visible().len(), 16);
        assert!(!state.on_scroll_threshold_reached());
        assert_eq!(state.reveal.count(), 16);
    }

    #[test]
    fn filter_mutations_reset_reveal() {
        let mut state = loaded(20);
        state.on_scroll_threshold_reached();
        assert_eq!(state.reveal.count(), 11);

        state.toggle_category("Movie");
        assert_eq!(state.reveal.count(), 6);
        assert_eq!(state.filtered.len(), 10);

        state.on_scroll_threshold_reached();
        state.set_search_text("show1");
        assert_eq!(state.reveal.count(), 6);

        state.toggle_category("Movie");
        assert_eq!(state.filtered.len(), 11);
        state.on_scroll_threshold_reached();
        assert!(!state.set_search_text("show1"));
        assert_eq!(state.reveal.count(), 11);
    }

    #[test]
    fn refresh_keeps_reveal_count() {
        let mut state = loaded(20);
        state.on_scroll_threshold_reached();
        let more: Vec<EventRecord> = (1..=25).map(|n| event(n, "X", "Movie")).collect();
        state.set_collection(Arc::from(more), Utc::now());
        assert_eq!(state.reveal.count(), 11);
        assert_eq!(state.filtered.len(), 25);
    }

    #[test]
    fn sentinel_below_threshold_is_ignored() {
        let mut state = loaded(20);
        assert!(!state.on_sentinel_intersection(0.05));
        assert!(state.on_sentinel_intersection(0.5));
        assert_eq!(state.reveal.count(), 11);
    }

    #[test]
    fn cursor_wraps_within_visible_prefix() {
        let mut state = loaded(20);
        state.move_selection_up();
        assert_eq!(state.selected_index, 5);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);

        state.selected_index = 5;
        state.set_search_text("show2");
        assert_eq!(state.filtered.len(), 2);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn trending_ignores_filters() {
        let mut state = loaded(7);
        state.set_search_text("nothing matches this");
        let ids: Vec<String> = state.trending().iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, ["7", "6", "5", "4", "3"]);
    }

    #[test]
    fn viewmodel_windows_and_sentinel() {
        let mut state = loaded(16);
        let now = Utc::now();

        let tall = state.compute_viewmodel_at(40, 100, now);
        assert_eq!(tall.cards.len(), 6);
        assert!((tall.sentinel_ratio - 1.0).abs() < f64::EPSILON);

        let short = state.compute_viewmodel_at(12, 100, now);
        assert_eq!(short.cards.len(), 4);
        assert!(short.sentinel_ratio.abs() < f64::EPSILON);

        let snug = state.compute_viewmodel_at(15, 100, now);
        assert_eq!(snug.cards.len(), 6);
        assert!((snug.sentinel_ratio - 0.5).abs() < f64::EPSILON);

        state.on_sentinel_intersection(tall.sentinel_ratio);
        assert_eq!(state.compute_viewmodel_at(40, 100, now).cards.len(), 11);
    }

    #[test]
    fn sentinel_shows_when_cursor_reaches_last_card() {
        let mut state = loaded(30);
        let now = Utc::now();
        for _ in 0..5 {
            state.move_selection_down();
        }
        assert_eq!(state.selected_index, 5);

        // 4 list rows: two cards, then the sentinel.
        let vm = state.compute_viewmodel_at(12, 100, now);
        assert_eq!(vm.cards.len(), 2);
        assert!(vm.cards[1].is_selected);
        assert!((vm.sentinel_ratio - 1.0).abs() < f64::EPSILON);

        assert!(state.on_sentinel_intersection(vm.sentinel_ratio));
        assert_eq!(state.visible().len(), 11);

        // The cursor is no longer on the last card; the window scrolls normally.
        let vm = state.compute_viewmodel_at(12, 100, now);
        assert_eq!(vm.cards.len(), 4);
        assert!(vm.sentinel_ratio.abs() < f64::EPSILON);
    }

    #[test]
    fn cards_use_fallbacks_and_units() {
        let mut state = AppState::new(Theme::default());
        let mut sold_out = event(1, "%20%20", "Concert");
        sold_out.tickets_sold = sold_out.max_tickets;
        state.set_collection(Arc::from(vec![sold_out]), Utc::now());

        let vm = state.compute_viewmodel_at(30, 100, Utc::now());
        let card = &vm.cards[0];
        assert_eq!(card.title, UNTITLED_EVENT);
        assert_eq!(card.image, FALLBACK_IMAGE);
        assert_eq!(card.price, "0.01 ETH");
        assert_eq!(card.tickets_left, "SOLD OUT");
        assert!(card.is_sold_out);
        assert_eq!(card.location, "N/A");
    }

    #[test]
    fn title_highlights_are_case_insensitive() {
        assert_eq!(
            AppState::compute_highlight_ranges("Jazz at the Jazz Club", "JAZZ"),
            vec![(0, 4), (12, 16)]
        );
        assert!(AppState::compute_highlight_ranges("Dune", "dunes").is_empty());
    }

    #[test]
    fn empty_states() {
        let mut state = AppState::new(Theme::default());
        state.loading = true;
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.map(|e| e.message).as_deref(), Some("Loading events..."));
        assert_eq!(vm.header.status, "loading...");

        let mut state = loaded(3);
        state.set_search_text("zzz");
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.map(|e| e.message).as_deref(), Some("No events found"));
        assert_eq!(vm.header.status, "updated just now");
    }
}
