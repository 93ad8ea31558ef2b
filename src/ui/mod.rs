//! Terminal rendering layer with component-based architecture.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable catalog state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, truncation, age)
//! - [`theme`]: Color schemes and ANSI escape sequence generation
//! - [`units`]: Currency formatting for ticket prices

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod units;
pub mod viewmodel;

pub use renderer::{render, render_details};
pub use theme::Theme;
pub use units::{EtherUnits, UnitFormatter};
pub use viewmodel::{
    CategoryChip, DetailsView, EmptyState, EventCard, FooterInfo, HeaderInfo, SearchBarInfo, TrendingItem,
    UIViewModel,
};
