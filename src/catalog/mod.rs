//! Pure catalog computations.
//!
//! Everything here is synchronous and side-effect free. The application layer
//! calls these explicitly whenever an input changes, so the dependency chain
//! stays visible:
//!
//! ```text
//! collection ─┬─ search text, categories ─→ filter ─→ reveal ─→ visible prefix
//!             └────────────────────────────→ trending
//! ```
//!
//! # Modules
//!
//! - [`filter`](mod@filter): Search text and category filtering
//! - [`reveal`]: Incremental reveal count and sentinel threshold
//! - [`trending`](mod@trending): Most recently added events
//! - [`categories`]: Category selection toggling

pub mod categories;
pub mod filter;
pub mod reveal;
pub mod trending;

pub use categories::{toggle_category, CategorySet, DEFAULT_CATEGORIES};
pub use filter::filter;
pub use reveal::{RevealController, SentinelObserver};
pub use trending::{latest, trending};
