//! Showfinder: an event discovery catalog for on-chain ticketing.
//!
//! Showfinder pulls every event from a ticketing ledger and presents them as
//! a browsable catalog:
//! - Case-insensitive search over the raw metadata URI
//! - Category filtering by event type
//! - Lazy reveal of results, growing as the list end scrolls into view
//! - A trending carousel of the most recently created events

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal host (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Gateway       │
//! │ (ui/)         │   │ (catalog/)    │   │ (gateway/)    │
//! │ - Rendering   │   │ - Filter      │   │ - Ledger API  │
//! │ - Theming     │   │ - Reveal      │   │ - Repository  │
//! │ - Components  │   │ - Trending    │   │ - Snapshot    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Event records, metadata decoding (domain/)       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/showfinder/config.toml
//! snapshot = "~/ledger.json"
//! theme = "tokyo-night"
//! trace_level = "debug"
//! categories = ["Movie", "Concert", "Sport", "Theatre"]
//! initial_category = "Concert"
//! reveal_step = 10
//! ```
//!
//! # Example
//!
//! ```rust
//! use showfinder::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert_eq!(actions, vec![Action::Refresh]);
//!
//! handle_event(&mut state, &Event::SetSearchText("jazz".to_string()))?;
//! assert_eq!(state.search_text, "jazz");
//! # Ok::<(), showfinder::ShowfinderError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod gateway;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{Result, ShowfinderError};
pub use ui::Theme;

use catalog::reveal::{DEFAULT_INTERSECTION_THRESHOLD, INITIAL_REVEAL, REVEAL_STEP};
use catalog::trending::TRENDING_SIZE;
use catalog::{RevealController, SentinelObserver, DEFAULT_CATEGORIES};
use std::collections::BTreeMap;
use std::path::Path;

/// Runtime configuration.
///
/// Built from a TOML file ([`Config::from_toml_file`]) or a flat key/value map
/// ([`Config::from_map`]); the binary then applies its command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Ledger snapshot file the catalog reads events from.
    pub snapshot: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Filter directive for tracing, e.g. `"debug"`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Number of results revealed before any scrolling. Default: 6
    pub initial_reveal: usize,

    /// Results added per sentinel intersection. Default: 5
    pub reveal_step: usize,

    /// Length of the trending carousel. Default: 5
    pub trending_size: usize,

    /// Sentinel ratio counted as intersecting, clamped to `(0, 1]`. Default: 0.1
    pub intersection_threshold: f64,

    /// Category buttons, in display order.
    pub categories: Vec<String>,

    /// Category selected when the catalog mounts.
    pub initial_category: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            initial_reveal: INITIAL_REVEAL,
            reveal_step: REVEAL_STEP,
            trending_size: TRENDING_SIZE,
            intersection_threshold: DEFAULT_INTERSECTION_THRESHOLD,
            categories: default_categories(),
            initial_category: None,
        }
    }
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect()
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty()).map(String::from)
}

impl Config {
    /// Parses configuration from a flat key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `categories`: comma-separated, empty entries dropped; an empty list
    ///   keeps the defaults
    /// - `initial_reveal`, `reveal_step`, `trending_size`: positive integers,
    ///   falling back to the default otherwise
    /// - `intersection_threshold`: number, clamped to `(0, 1]`
    /// - `snapshot`, `theme`, `theme_file`, `trace_level`, `initial_category`:
    ///   taken as is, blank values ignored
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use showfinder::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("categories".to_string(), "Movie, Opera".to_string());
    /// map.insert("reveal_step".to_string(), "ten".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.categories, vec!["Movie", "Opera"]);
    /// assert_eq!(config.reveal_step, 5);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let count = |key: &str, default: usize| {
            config
                .get(key)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(default)
        };

        let categories = config
            .get("categories")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_categories);

        let intersection_threshold = config
            .get("intersection_threshold")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .map_or(DEFAULT_INTERSECTION_THRESHOLD, |t| SentinelObserver::new(t).threshold());

        Self {
            snapshot: non_empty(config.get("snapshot")),
            theme_name: non_empty(config.get("theme")),
            theme_file: non_empty(config.get("theme_file")),
            trace_level: non_empty(config.get("trace_level")),
            initial_reveal: count("initial_reveal", INITIAL_REVEAL),
            reveal_step: count("reveal_step", REVEAL_STEP),
            trending_size: count("trending_size", TRENDING_SIZE),
            intersection_threshold,
            categories,
            initial_category: non_empty(config.get("initial_category")),
        }
    }

    /// Reads a TOML configuration file.
    ///
    /// Top-level values are flattened into strings (arrays joined with
    /// commas) and parsed with the same rules as [`Config::from_map`].
    ///
    /// # Errors
    ///
    /// Returns [`ShowfinderError::Config`] if the file cannot be read or is
    /// not a TOML table.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ShowfinderError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    /// Parses TOML configuration text. See [`Config::from_toml_file`].
    ///
    /// # Errors
    ///
    /// Returns [`ShowfinderError::Config`] if the text is not a TOML table.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let table: toml::Table = contents
            .parse()
            .map_err(|e| ShowfinderError::Config(format!("invalid config TOML: {e}")))?;

        let map = table
            .into_iter()
            .filter_map(|(key, value)| flatten_toml(value).map(|v| (key, v)))
            .collect();

        Ok(Self::from_map(&map))
    }
}

fn flatten_toml(value: toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        toml::Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(flatten_toml)
                .collect::<Vec<_>>()
                .join(","),
        ),
        toml::Value::Datetime(_) | toml::Value::Table(_) => None,
    }
}

/// Builds the catalog state described by `config`.
///
/// The theme comes from `theme_file`, then `theme_name`, then the default;
/// a theme that fails to load is logged and replaced by the default. No
/// events are loaded yet: the host sends [`Event::Mount`] to trigger the
/// first refresh.
///
/// # Example
///
/// ```rust
/// use showfinder::{initialize, Config};
///
/// let config = Config {
///     initial_category: Some("Concert".to_string()),
///     ..Config::default()
/// };
///
/// let state = initialize(&config);
/// assert!(state.selected_categories.contains("Concert"));
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing showfinder catalog");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(theme);
    state.reveal = RevealController::new(config.initial_reveal, config.reveal_step);
    state.sentinel = SentinelObserver::new(config.intersection_threshold);
    state.trending_size = config.trending_size;
    state.categories.clone_from(&config.categories);
    if let Some(category) = &config.initial_category {
        state.toggle_category(category);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_map(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = Config::from_map(&map(&[
            ("initial_reveal", "0"),
            ("reveal_step", "-3"),
            ("trending_size", "8"),
        ]));

        assert_eq!(config.initial_reveal, INITIAL_REVEAL);
        assert_eq!(config.reveal_step, REVEAL_STEP);
        assert_eq!(config.trending_size, 8);
    }

    #[test]
    fn huge_reveal_step_saturates() {
        let step = usize::MAX.to_string();
        let config = Config::from_map(&map(&[("reveal_step", step.as_str())]));
        assert_eq!(config.reveal_step, usize::MAX);

        let mut state = initialize(&config);
        assert!(state.reveal.on_scroll_threshold_reached(20));
        assert_eq!(state.reveal.count(), usize::MAX);
        assert!(!state.reveal.on_scroll_threshold_reached(20));
    }

    #[test]
    fn threshold_is_clamped() {
        let config = Config::from_map(&map(&[("intersection_threshold", "4.0")]));
        assert!((config.intersection_threshold - 1.0).abs() < f64::EPSILON);

        let config = Config::from_map(&map(&[("intersection_threshold", "nope")]));
        assert!((config.intersection_threshold - DEFAULT_INTERSECTION_THRESHOLD).abs() < f64::EPSILON);
    }

    #[test]
    fn blank_strings_are_absent() {
        let config = Config::from_map(&map(&[("snapshot", "  "), ("initial_category", "")]));
        assert_eq!(config.snapshot, None);
        assert_eq!(config.initial_category, None);
    }

    #[test]
    fn toml_arrays_become_categories() {
        let config = Config::from_toml_str(
            r#"
            snapshot = "ledger.json"
            categories = ["Opera", "Sport"]
            reveal_step = 10
            intersection_threshold = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.snapshot.as_deref(), Some("ledger.json"));
        assert_eq!(config.categories, vec!["Opera", "Sport"]);
        assert_eq!(config.reveal_step, 10);
        assert!((config.intersection_threshold - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = Config::from_toml_str("snapshot = ").unwrap_err();
        assert!(matches!(err, ShowfinderError::Config(_)));
    }

    #[test]
    fn initialize_applies_settings() {
        let config = Config {
            initial_reveal: 3,
            reveal_step: 2,
            trending_size: 2,
            categories: vec!["Opera".to_string()],
            initial_category: Some("Opera".to_string()),
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);

        assert_eq!(state.reveal.count(), 3);
        assert_eq!(state.reveal.step(), 2);
        assert_eq!(state.trending_size, 2);
        assert_eq!(state.categories, vec!["Opera"]);
        assert!(state.selected_categories.contains("Opera"));
        assert_eq!(state.theme, Theme::default());
    }
}
