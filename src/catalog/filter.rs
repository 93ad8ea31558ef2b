//! Search and category filtering over the event collection.
//!
//! Two stages, both plain text comparisons (no fuzzy matching, no scoring):
//!
//! 1. **Text**: the lowercased raw `metadata_uri` must contain the lowercased
//!    search text. Empty search text keeps everything.
//! 2. **Category**: skipped when no category is selected. Otherwise the
//!    record's decoded `event_type` must equal one of the selected categories,
//!    ignoring case.
//!
//! The output keeps the collection's relative order.

use super::categories::CategorySet;
use crate::domain::metadata;
use crate::domain::EventRecord;

/// Filters `collection` by search text and selected categories.
///
/// # Examples
///
/// ```
/// use showfinder::catalog::{filter, CategorySet};
/// use showfinder::domain::EventRecord;
///
/// let record = |id: u64, uri: &str| EventRecord {
///     id: id.into(),
///     creator: String::new(),
///     ticket_price: 0,
///     metadata_uri: uri.to_string(),
///     max_tickets: 1,
///     tickets_sold: 0,
/// };
/// let events = vec![
///     record(1, "https://t.example/?title=Dune&eventType=Movie"),
///     record(2, "https://t.example/?title=Derby&eventType=Sport"),
/// ];
///
/// let categories: CategorySet = ["movie".to_string()].into_iter().collect();
/// let hits = filter(&events, "", &categories);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, 1_u64.into());
///
/// assert_eq!(filter(&events, "DERBY", &CategorySet::new()).len(), 1);
/// ```
#[must_use]
pub fn filter(collection: &[EventRecord], search_text: &str, selected: &CategorySet) -> Vec<EventRecord> {
    let needle = search_text.to_lowercase();
    let wanted: Vec<String> = selected.iter().map(|c| c.to_lowercase()).collect();

    collection
        .iter()
        .filter(|event| needle.is_empty() || event.metadata_uri.to_lowercase().contains(&needle))
        .filter(|event| {
            if wanted.is_empty() {
                return true;
            }
            let event_type = metadata::decode(&event.metadata_uri).event_type.to_lowercase();
            wanted.iter().any(|category| *category == event_type)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, event_type: &str) -> EventRecord {
        EventRecord {
            id: id.into(),
            creator: "0xcreator".to_string(),
            ticket_price: 1,
            metadata_uri: format!("https://tix.example/m?title=Show{id}&eventType={event_type}"),
            max_tickets: 10,
            tickets_sold: 0,
        }
    }

    fn categories(names: &[&str]) -> CategorySet {
        names.iter().map(ToString::to_string).collect()
    }

    fn ids(events: &[EventRecord]) -> Vec<String> {
        events.iter().map(|e| e.id.to_string()).collect()
    }

    fn mixed() -> Vec<EventRecord> {
        vec![
            record(1, "Movie"),
            record(2, "Concert"),
            record(3, "movie"),
            record(4, "Sport"),
            record(5, "CONCERT"),
        ]
    }

    #[test]
    fn empty_inputs_are_identity() {
        let events = mixed();
        assert_eq!(filter(&events, "", &CategorySet::new()), events);
    }

    #[test]
    fn category_match_ignores_case() {
        let events = mixed();
        assert_eq!(ids(&filter(&events, "", &categories(&["Movie"]))), ["1", "3"]);
        assert_eq!(ids(&filter(&events, "", &categories(&["concert"]))), ["2", "5"]);
    }

    #[test]
    fn multiple_categories_keep_collection_order() {
        let events = mixed();
        assert_eq!(ids(&filter(&events, "", &categories(&["Sport", "Movie"]))), ["1", "3", "4"]);
    }

    #[test]
    fn search_matches_anywhere_in_raw_uri() {
        let events = mixed();
        assert_eq!(ids(&filter(&events, "show4", &CategorySet::new())), ["4"]);
        assert_eq!(ids(&filter(&events, "TIX.EXAMPLE", &CategorySet::new())).len(), 5);
        assert!(filter(&events, "opera", &CategorySet::new()).is_empty());
    }

    #[test]
    fn search_sees_encoded_text_not_decoded_text() {
        let mut event = record(1, "Movie");
        event.metadata_uri = "https://tix.example/m?title=Jazz%20Night".to_string();
        let events = vec![event];
        assert!(filter(&events, "jazz night", &CategorySet::new()).is_empty());
        assert_eq!(filter(&events, "jazz%20night", &CategorySet::new()).len(), 1);
    }

    #[test]
    fn uncategorized_and_malformed_never_match_a_category() {
        let mut broken = record(9, "Movie");
        broken.metadata_uri = "eventType=Movie".to_string();
        let events = vec![broken, record(10, "")];
        assert!(filter(&events, "", &categories(&["Movie"])).is_empty());
        assert_eq!(filter(&events, "movie", &CategorySet::new()).len(), 1);
    }

    #[test]
    fn narrowing_never_grows_the_result() {
        let events = mixed();
        let mut previous = filter(&events, "", &CategorySet::new()).len();
        for text in ["s", "sh", "sho", "show", "show2"] {
            let current = filter(&events, text, &CategorySet::new()).len();
            assert!(current <= previous, "{text:?} grew the result");
            previous = current;
        }

        let unfiltered = filter(&events, "show", &CategorySet::new());
        let selections: [&[&str]; 3] = [&["Movie"], &["Movie", "Sport"], &["Opera"]];
        for selection in selections {
            let narrowed = filter(&events, "show", &categories(selection));
            assert!(narrowed.len() <= unfiltered.len());
            assert!(narrowed.iter().all(|e| unfiltered.contains(e)));
        }
    }
}
