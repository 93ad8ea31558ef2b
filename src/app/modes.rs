//! Input mode state types for the catalog view.
//!
//! The search input is collapsible. While it is closed the view is in
//! **Normal** mode and keys drive the cursor. While it is open the view is in
//! **Search** mode, either typing into the query or navigating the results
//! with the query kept on screen.
//!
//! # Example
//!
//! ```rust
//! use showfinder::app::modes::{InputMode, SearchFocus};
//!
//! let mode = InputMode::Search(SearchFocus::Typing);
//! assert!(mode.is_search());
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Characters edit the search text.
    Typing,

    /// The query stays open while the cursor moves through results.
    Navigating,
}

/// Current input handling mode.
///
/// Determines how characters are interpreted and which hints the footer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Search input closed.
    #[default]
    Normal,

    /// Search input open, with the given focus.
    Search(SearchFocus),
}

impl InputMode {
    /// Whether the search input is open.
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }
}
