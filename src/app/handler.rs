//! Event handling and state transition logic.
//!
//! [`handle_event`] is the one place catalog state changes. Every event is
//! translated into `AppState` mutations plus a list of [`Action`]s for the
//! host, along with whether the view needs a re-render.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `Refresh`, `CatalogLoaded`, `RefreshFailed`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`,
//!   `Char`, `Backspace`, `SetSearchText`
//! - **Filtering**: `ToggleCategory`
//! - **Navigation**: `KeyDown`, `KeyUp`, `SelectEvent`, `SelectTrending`, `CloseFocus`
//! - **Reveal**: `SentinelIntersection`, `ScrollThresholdReached`
//!
//! # Example
//!
//! ```rust
//! use showfinder::app::{handle_event, AppState, Event};
//! use showfinder::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (should_render, _actions) = handle_event(&mut state, &Event::ToggleCategory("Movie".into()))?;
//! assert!(should_render);
//! # Ok::<(), showfinder::ShowfinderError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::EventRecord;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Events triggered by user input, the host, or refresh completion.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The catalog view was mounted. Scrolls to the top and starts the
    /// initial load.
    Mount,

    /// Requests a reload from the ledger. Ignored while one is in flight.
    Refresh,

    /// A refresh finished and the repository holds a new collection.
    CatalogLoaded {
        /// The new collection, in ledger enumeration order.
        events: Arc<[EventRecord]>,
        /// When the repository replaced its collection.
        fetched_at: DateTime<Utc>,
    },

    /// A refresh failed. The previous collection stays on screen.
    RefreshFailed {
        /// Error message, already logged by the repository.
        error: String,
    },

    /// Opens the search input with typing focus.
    SearchMode,
    /// Returns focus to the open search input.
    FocusSearchBar,
    /// Moves focus from the search input to the results.
    FocusResults,
    /// Closes the search input and clears the search text.
    ExitSearch,
    /// Appends a character to the search text while typing.
    Char(char),
    /// Removes the last character of the search text while typing.
    Backspace,
    /// Replaces the search text wholesale.
    SetSearchText(String),

    /// Toggles one category button.
    ToggleCategory(String),

    /// Moves the cursor down one card (wraps to top).
    KeyDown,
    /// Moves the cursor up one card (wraps to bottom).
    KeyUp,

    /// The host measured the scroll sentinel after a render.
    SentinelIntersection {
        /// Fraction of the sentinel inside the viewport.
        ratio: f64,
    },
    /// The user reached the end of the revealed list.
    ScrollThresholdReached,

    /// Opens the details view for the card under the cursor.
    SelectEvent,
    /// Opens the details view for the `n`th trending event (0-based).
    SelectTrending(usize),
    /// Closes the catalog.
    CloseFocus,
}

/// Processes an event, mutates catalog state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `false` when the event left
/// the view unchanged.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the host's error path in place
/// for handlers that touch fallible collaborators.
///
/// # Example
///
/// ```rust
/// use showfinder::app::{handle_event, Action, AppState, Event};
/// use showfinder::ui::Theme;
///
/// let mut state = AppState::new(Theme::default());
/// let (_, actions) = handle_event(&mut state, &Event::Mount)?;
/// assert_eq!(actions, vec![Action::Refresh]);
/// assert!(state.loading);
/// # Ok::<(), showfinder::ShowfinderError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_kind(event)).entered();

    match event {
        Event::Mount => {
            state.scroll_to_top();
            Ok((true, request_refresh(state)))
        }
        Event::Refresh => {
            let actions = request_refresh(state);
            Ok((!actions.is_empty(), actions))
        }
        Event::CatalogLoaded { events, fetched_at } => {
            tracing::debug!(event_count = events.len(), "catalog loaded");
            state.set_collection(Arc::clone(events), *fetched_at);
            Ok((true, vec![]))
        }
        Event::RefreshFailed { error } => {
            tracing::debug!(error = %error, "keeping previous collection after failed refresh");
            state.loading = false;
            state.last_error = Some(error.clone());
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("opening search");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_text.is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_text, "closing search");
            state.input_mode = InputMode::Normal;
            state.set_search_text("");
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            state.push_search_char(*c);
            tracing::trace!(query = %state.search_text, char = %c, "search text updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            Ok((state.pop_search_char(), vec![]))
        }
        Event::SetSearchText(text) => {
            let changed = state.set_search_text(text);
            let mode = if text.is_empty() {
                InputMode::Normal
            } else {
                InputMode::Search(SearchFocus::Navigating)
            };
            let mode_changed = state.input_mode != mode;
            state.input_mode = mode;
            Ok((changed || mode_changed, vec![]))
        }
        Event::ToggleCategory(category) => {
            state.toggle_category(category);
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::SentinelIntersection { ratio } => Ok((state.on_sentinel_intersection(*ratio), vec![])),
        Event::ScrollThresholdReached => Ok((state.on_scroll_threshold_reached(), vec![])),
        Event::SelectEvent => {
            let Some(record) = state.selected_event() else {
                tracing::debug!("no event selected");
                return Ok((false, vec![]));
            };
            tracing::debug!(event_id = record.id.as_str(), "event selected");
            Ok((false, vec![Action::OpenDetails(record.clone())]))
        }
        Event::SelectTrending(index) => {
            let Some(record) = state.trending().into_iter().nth(*index) else {
                tracing::debug!(index = index, "no trending event at index");
                return Ok((false, vec![]));
            };
            tracing::debug!(event_id = record.id.as_str(), "trending event selected");
            Ok((false, vec![Action::OpenDetails(record)]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Marks the view as loading and asks for a refresh, unless one is pending.
fn request_refresh(state: &mut AppState) -> Vec<Action> {
    if state.loading {
        tracing::debug!("refresh already pending");
        return vec![];
    }
    state.loading = true;
    vec![Action::Refresh]
}

/// Short event name for span fields, without payloads.
const fn event_kind(event: &Event) -> &'static str {
    match event {
        Event::Mount => "Mount",
        Event::Refresh => "Refresh",
        Event::CatalogLoaded { .. } => "CatalogLoaded",
        Event::RefreshFailed { .. } => "RefreshFailed",
        Event::SearchMode => "SearchMode",
        Event::FocusSearchBar => "FocusSearchBar",
        Event::FocusResults => "FocusResults",
        Event::ExitSearch => "ExitSearch",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::SetSearchText(_) => "SetSearchText",
        Event::ToggleCategory(_) => "ToggleCategory",
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::SentinelIntersection { .. } => "SentinelIntersection",
        Event::ScrollThresholdReached => "ScrollThresholdReached",
        Event::SelectEvent => "SelectEvent",
        Event::SelectTrending(_) => "SelectTrending",
        Event::CloseFocus => "CloseFocus",
    }
}
