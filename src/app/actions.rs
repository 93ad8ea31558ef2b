//! Actions representing side effects to be executed by the host.
//!
//! The event handler never talks to the ledger or the terminal itself. It
//! returns a `Vec<Action>` and the host runs them in order: refreshing the
//! repository, handing a record to the details view, or closing the catalog.
//!
//! # Example
//!
//! ```rust
//! use showfinder::app::{handle_event, Action, AppState, Event};
//! use showfinder::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert_eq!(actions, vec![Action::Refresh]);
//! # Ok::<(), showfinder::ShowfinderError>(())
//! ```

use crate::domain::EventRecord;

/// Commands produced by the event handler for the host to execute.
///
/// Actions come back in the order they should run. None of them carry a
/// result back to the handler directly: anything the host learns while
/// running one is fed back as a new [`Event`](crate::app::Event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Reloads the event collection from the ledger.
    ///
    /// The host awaits [`EventRepository::refresh`](crate::gateway::EventRepository::refresh)
    /// and reports back with `CatalogLoaded` or `RefreshFailed`.
    Refresh,

    /// Hands a record to the details view.
    ///
    /// The record is the full, unmodified ledger record, not its decoded
    /// display form.
    OpenDetails(EventRecord),

    /// Closes the catalog view.
    CloseFocus,
}
