//! "Now trending" selection: the most recently appended events.
//!
//! The ledger enumerates events in creation order, so the tail of the
//! collection is the newest. Trending is that tail, newest first.

/// Number of events in the trending carousel.
pub const TRENDING_SIZE: usize = 5;

/// Returns the last [`TRENDING_SIZE`] events, most recent first.
///
/// # Examples
///
/// ```
/// use showfinder::catalog::trending;
///
/// assert_eq!(trending(&['a', 'b', 'c', 'd', 'e', 'f']), ['f', 'e', 'd', 'c', 'b']);
/// assert_eq!(trending(&['a', 'b', 'c']), ['c', 'b', 'a']);
/// assert!(trending::<char>(&[]).is_empty());
/// ```
#[must_use]
pub fn trending<T: Clone>(collection: &[T]) -> Vec<T> {
    latest(collection, TRENDING_SIZE)
}

/// Returns the last `size` elements of `collection`, most recent first.
#[must_use]
pub fn latest<T: Clone>(collection: &[T], size: usize) -> Vec<T> {
    collection.iter().rev().take(size).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_five_are_reversed() {
        assert_eq!(trending(&["a", "b", "c", "d", "e"]), ["e", "d", "c", "b", "a"]);
    }

    #[test]
    fn custom_size() {
        assert_eq!(latest(&[1, 2, 3, 4], 2), [4, 3]);
        assert!(latest(&[1, 2, 3], 0).is_empty());
    }
}
