//! Application layer coordinating catalog state, events, and actions.
//!
//! This layer sits between the host (main.rs) and the pure catalog and
//! gateway layers. It follows a unidirectional data flow:
//!
//! ```text
//! User Input → Events → handle_event → State Mutations → Actions → Host
//!                           ↑                                  ↓
//!                           └──── CatalogLoaded / RefreshFailed ┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Search input modes
//! - [`state`]: Catalog state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use state::AppState;
