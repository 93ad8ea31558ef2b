//! Category selection.
//!
//! Membership here is exact-string; case folding happens only when the filter
//! compares against an event's `event_type`.

use std::collections::BTreeSet;

/// Currently selected category tags.
pub type CategorySet = BTreeSet<String>;

/// Categories offered as buttons when the configuration names none.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Movie", "Concert", "Sport"];

/// Returns `current` with `category` removed if present, added otherwise.
///
/// # Examples
///
/// ```
/// use showfinder::catalog::{toggle_category, CategorySet};
///
/// let selected = toggle_category(&CategorySet::new(), "Movie");
/// assert!(selected.contains("Movie"));
/// assert!(toggle_category(&selected, "Movie").is_empty());
/// ```
#[must_use]
pub fn toggle_category(current: &CategorySet, category: &str) -> CategorySet {
    let mut next = current.clone();
    if !next.remove(category) {
        next.insert(category.to_string());
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_exact_string() {
        let selected = toggle_category(&CategorySet::new(), "Movie");
        let both = toggle_category(&selected, "movie");
        assert_eq!(both.len(), 2);

        let back = toggle_category(&both, "Movie");
        assert_eq!(back.into_iter().collect::<Vec<_>>(), ["movie"]);
    }

    #[test]
    fn toggle_leaves_input_untouched() {
        let selected: CategorySet = ["Sport".to_string()].into_iter().collect();
        let _ = toggle_category(&selected, "Concert");
        assert_eq!(selected.len(), 1);
    }
}
