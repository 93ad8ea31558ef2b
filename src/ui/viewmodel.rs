//! View model types representing renderable catalog state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only: metadata is
//! already decoded, prices already formatted, highlights already located.
//!
//! # Example
//!
//! ```rust
//! use showfinder::ui::viewmodel::{EmptyState, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Events (0) ".to_string(), status: "loading".to_string() },
//!     trending: vec![],
//!     categories: vec![],
//!     search_bar: None,
//!     cards: vec![],
//!     selected_index: 0,
//!     sentinel_ratio: 0.0,
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: Some(EmptyState {
//!         message: "Loading events...".to_string(),
//!         subtitle: String::new(),
//!     }),
//! };
//! assert!(vm.cards.is_empty());
//! ```

use crate::domain::{decode, EventRecord};
use crate::ui::units::UnitFormatter;

/// Card title shown when the metadata title is blank.
pub const UNTITLED_EVENT: &str = "Untitled Event";

/// Image reference shown when the metadata has no image.
pub const FALLBACK_IMAGE: &str = "fallback.jpg";

/// `title`, or [`UNTITLED_EVENT`] if it is blank.
#[must_use]
pub fn title_or_untitled(title: String) -> String {
    if title.trim().is_empty() {
        UNTITLED_EVENT.to_string()
    } else {
        title
    }
}

/// `image`, or [`FALLBACK_IMAGE`] if it is empty.
#[must_use]
pub fn image_or_fallback(image: String) -> String {
    if image.is_empty() {
        FALLBACK_IMAGE.to_string()
    } else {
        image
    }
}

/// Complete view model for one frame of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// The trending carousel, most recent first.
    pub trending: Vec<TrendingItem>,

    /// Category filter buttons, in configured order.
    pub categories: Vec<CategoryChip>,

    /// Present while the search input is open.
    pub search_bar: Option<SearchBarInfo>,

    /// Cards for the window of the visible prefix that fits on screen.
    pub cards: Vec<EventCard>,

    /// Index of the selected card within `cards`.
    pub selected_index: usize,

    /// Fraction of the scroll sentinel inside the list area, in `[0, 1]`.
    ///
    /// The sentinel sits right after the last revealed card. It is only on
    /// screen once the window reaches the end of the visible prefix.
    pub sentinel_ratio: f64,

    pub footer: FooterInfo,

    /// Shown in place of the cards when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// One card of the catalog list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub title: String,
    pub date: String,
    pub location: String,
    pub event_type: String,
    pub image: String,
    /// Formatted ticket price.
    pub price: String,
    /// Remaining inventory, or `"SOLD OUT"`.
    pub tickets_left: String,
    pub is_sold_out: bool,
    pub is_selected: bool,

    /// Character ranges of `title` matching the search text.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// One entry of the trending carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingItem {
    /// 1-based position, as typed in the `t <n>` command.
    pub rank: usize,
    pub title: String,
}

/// A category filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    pub label: String,
    pub selected: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title with the filtered result count.
    pub title: String,

    /// Loading or freshness status, e.g. `"updated 3m ago"`.
    pub status: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No events found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,

    /// Whether keystrokes currently edit the query.
    pub typing: bool,
}

/// Display form of one record for the details view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    pub title: String,

    /// Labeled values, in display order.
    pub fields: Vec<(&'static str, String)>,

    pub is_sold_out: bool,
}

impl DetailsView {
    /// Decodes the record's metadata and formats its price and inventory.
    ///
    /// # Example
    ///
    /// ```rust
    /// use showfinder::domain::{EventId, EventRecord};
    /// use showfinder::ui::units::EtherUnits;
    /// use showfinder::ui::viewmodel::DetailsView;
    ///
    /// let record = EventRecord {
    ///     id: EventId::from(7_u64),
    ///     creator: "0xabc".to_string(),
    ///     ticket_price: 0,
    ///     metadata_uri: "https://tix.example/m?title=Dune".to_string(),
    ///     max_tickets: 10,
    ///     tickets_sold: 4,
    /// };
    /// let view = DetailsView::from_record(&record, &EtherUnits);
    /// assert_eq!(view.title, "Dune");
    /// assert!(view.fields.contains(&("Event id", "7".to_string())));
    /// ```
    #[must_use]
    pub fn from_record(record: &EventRecord, units: &dyn UnitFormatter) -> Self {
        let metadata = decode(&record.metadata_uri);

        Self {
            title: title_or_untitled(metadata.title),
            fields: vec![
                ("Date", metadata.date),
                ("Location", metadata.location),
                ("Type", metadata.event_type),
                ("Price", units.format(record.ticket_price)),
                (
                    "Tickets",
                    format!("{} of {} left", record.tickets_remaining(), record.max_tickets),
                ),
                ("About", metadata.description),
                ("Image", image_or_fallback(metadata.image)),
                ("Event id", record.id.as_str().to_string()),
                ("Creator", record.creator.clone()),
            ],
            is_sold_out: record.is_sold_out(),
        }
    }
}
