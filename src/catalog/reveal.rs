//! Incremental reveal of filtered results.
//!
//! The catalog exposes a prefix of the filtered list. The prefix grows by a
//! fixed step each time the end-of-list sentinel becomes visible, and snaps
//! back to its floor whenever the search text or category selection changes.

/// Number of results exposed after mount and after every filter change.
pub const INITIAL_REVEAL: usize = 6;

/// Number of results added per sentinel crossing.
pub const REVEAL_STEP: usize = 5;

/// Fraction of the sentinel that must be visible to count as reached.
pub const DEFAULT_INTERSECTION_THRESHOLD: f64 = 0.1;

/// Tracks how many filtered results are currently exposed.
///
/// # Examples
///
/// ```
/// use showfinder::catalog::RevealController;
///
/// let mut reveal = RevealController::default();
/// assert_eq!(reveal.count(), 6);
///
/// reveal.on_scroll_threshold_reached(20);
/// reveal.on_scroll_threshold_reached(20);
/// assert_eq!(reveal.count(), 16);
///
/// // Already past the end of a 16-long list: no creep.
/// reveal.on_scroll_threshold_reached(16);
/// assert_eq!(reveal.count(), 16);
///
/// reveal.on_filter_changed();
/// assert_eq!(reveal.count(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealController {
    count: usize,
    initial: usize,
    step: usize,
}

impl RevealController {
    /// Creates a controller with a custom floor and step. A zero step is
    /// raised to one.
    #[must_use]
    pub fn new(initial: usize, step: usize) -> Self {
        Self {
            count: initial,
            initial,
            step: step.max(1),
        }
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Returns the exposed prefix of `filtered`.
    #[must_use]
    pub fn visible<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        &filtered[..self.count.min(filtered.len())]
    }

    /// Resets the count to its floor.
    pub fn on_filter_changed(&mut self) {
        self.count = self.initial;
    }

    /// Grows the count by one step if results remain hidden.
    ///
    /// `filtered_len` must be the length of the filtered list as it is now,
    /// not as it was when the signal was scheduled. Returns whether the count
    /// changed.
    pub fn on_scroll_threshold_reached(&mut self, filtered_len: usize) -> bool {
        if self.count < filtered_len {
            self.count = self.count.saturating_add(self.step);
            true
        } else {
            false
        }
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(INITIAL_REVEAL, REVEAL_STEP)
    }
}

/// Decides when the end-of-list sentinel counts as reached.
///
/// The host reports how much of the sentinel is inside the viewport as a
/// ratio in `[0, 1]`; the observer compares it against its threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentinelObserver {
    threshold: f64,
}

impl SentinelObserver {
    /// Creates an observer. The threshold is clamped into `(0, 1]`; a
    /// non-finite value falls back to the default.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(f64::EPSILON, 1.0)
        } else {
            DEFAULT_INTERSECTION_THRESHOLD
        };
        Self { threshold }
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether a sentinel showing `ratio` of itself is intersecting.
    #[must_use]
    pub fn is_intersecting(&self, ratio: f64) -> bool {
        ratio >= self.threshold
    }
}

impl Default for SentinelObserver {
    fn default() -> Self {
        Self::new(DEFAULT_INTERSECTION_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_clamps_to_list_length() {
        let reveal = RevealController::default();
        let short = [1, 2, 3];
        let long: Vec<u32> = (0..20).collect();
        assert_eq!(reveal.visible(&short), &[1, 2, 3]);
        assert_eq!(reveal.visible(&long).len(), 6);
        assert!(reveal.visible::<u32>(&[]).is_empty());
    }

    #[test]
    fn repeated_signals_at_the_end_are_noops() {
        let mut reveal = RevealController::default();
        assert!(reveal.on_scroll_threshold_reached(8));
        assert_eq!(reveal.count(), 11);
        for _ in 0..5 {
            assert!(!reveal.on_scroll_threshold_reached(8));
        }
        assert_eq!(reveal.count(), 11);
    }

    #[test]
    fn huge_step_saturates() {
        let mut reveal = RevealController::new(6, usize::MAX);
        assert!(reveal.on_scroll_threshold_reached(20));
        assert_eq!(reveal.count(), usize::MAX);
        assert_eq!(reveal.visible(&[0_u8; 20]).len(), 20);
        assert!(!reveal.on_scroll_threshold_reached(20));
    }

    #[test]
    fn signal_reads_the_current_length() {
        let mut reveal = RevealController::default();
        reveal.on_scroll_threshold_reached(30);
        assert_eq!(reveal.count(), 11);
        // The list shrank underneath the count.
        assert!(!reveal.on_scroll_threshold_reached(4));
        assert_eq!(reveal.visible(&[0; 4]).len(), 4);
    }

    #[test]
    fn custom_floor_and_zero_step() {
        let mut reveal = RevealController::new(2, 0);
        assert_eq!(reveal.step(), 1);
        reveal.on_scroll_threshold_reached(10);
        assert_eq!(reveal.count(), 3);
        reveal.on_filter_changed();
        assert_eq!(reveal.count(), 2);
    }

    #[test]
    fn sentinel_threshold() {
        let observer = SentinelObserver::default();
        assert!(!observer.is_intersecting(0.0));
        assert!(!observer.is_intersecting(0.05));
        assert!(observer.is_intersecting(0.1));
        assert!(observer.is_intersecting(1.0));
    }

    #[test]
    fn sentinel_threshold_is_clamped() {
        assert!((SentinelObserver::new(3.0).threshold() - 1.0).abs() < f64::EPSILON);
        assert!(!SentinelObserver::new(-1.0).is_intersecting(0.0));
        assert!(
            (SentinelObserver::new(f64::NAN).threshold() - DEFAULT_INTERSECTION_THRESHOLD).abs()
                < f64::EPSILON
        );
    }
}
