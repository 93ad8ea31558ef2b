//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process: compute the view model from `AppState`,
//! then hand it to the components. The view model is returned so the host can
//! read back what was drawn, in particular the sentinel ratio that drives the
//! incremental reveal.
//!
//! # Example
//!
//! ```rust,no_run
//! use showfinder::app::AppState;
//! use showfinder::ui::{render, Theme};
//!
//! let state = AppState::new(Theme::default());
//! let drawn = render(&state, 24, 80);
//! println!("sentinel at {}", drawn.sentinel_ratio);
//! ```

use crate::app::AppState;
use crate::domain::EventRecord;
use crate::ui::components;
use crate::ui::helpers::clear_screen;
use crate::ui::viewmodel::{DetailsView, UIViewModel};

/// Renders the catalog to stdout and returns the view model it drew.
///
/// # Parameters
///
/// * `state` - Catalog state to draw
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The view model that was drawn. Its `sentinel_ratio` is the share of the
/// scroll sentinel that fit on screen, which the host reports back as
/// `Event::SentinelIntersection` when it crosses the threshold.
pub fn render(state: &AppState, rows: usize, cols: usize) -> UIViewModel {
    let viewmodel = state.compute_viewmodel(rows, cols);

    clear_screen();
    components::render_catalog(&viewmodel, &state.theme, cols, rows);

    viewmodel
}

/// Renders the details page for `record` to stdout.
pub fn render_details(state: &AppState, record: &EventRecord, rows: usize, cols: usize) {
    let view = DetailsView::from_record(record, &*state.units);

    clear_screen();
    components::render_details(&view, &state.theme, rows, cols);
}
