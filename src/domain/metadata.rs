//! Display metadata decoding.
//!
//! Event records carry their human-readable fields as query parameters of the
//! `metadata_uri`, e.g.
//!
//! ```text
//! https://tix.example/meta?title=Dune&desc=Premiere&date=2025-03-01&location=Paris&image=https://img/1.png&eventType=Movie
//! ```
//!
//! [`decode`] turns that URI into a [`DisplayMetadata`]. It is total: a missing
//! (or empty) parameter falls back to its default, and a URI that does not
//! parse yields [`DisplayMetadata::default`] as a whole.

use thiserror::Error;
use url::Url;

/// Title shown when the URI carries none.
pub const DEFAULT_TITLE: &str = "No Title";
/// Description shown when the URI carries none.
pub const DEFAULT_DESCRIPTION: &str = "No Description";
/// Placeholder for a missing date or location.
pub const NOT_AVAILABLE: &str = "N/A";

/// Query parameter names, as written by the event creation flow.
const TITLE_PARAM: &str = "title";
const DESCRIPTION_PARAM: &str = "desc";
const DATE_PARAM: &str = "date";
const LOCATION_PARAM: &str = "location";
const IMAGE_PARAM: &str = "image";
const EVENT_TYPE_PARAM: &str = "eventType";

/// Display-ready fields decoded from a metadata URI. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMetadata {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    /// Image URL, empty when absent.
    pub image: String,
    /// Category tag as stored (case preserved); empty means uncategorized.
    pub event_type: String,
}

impl Default for DisplayMetadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            date: NOT_AVAILABLE.to_string(),
            location: NOT_AVAILABLE.to_string(),
            image: String::new(),
            event_type: String::new(),
        }
    }
}

/// A metadata URI that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed metadata URI: {0}")]
    MalformedUri(#[from] url::ParseError),
}

/// Decodes a metadata URI, surfacing parse failures.
///
/// Absent parameters still take their defaults; only an unparseable URI is an
/// error. Most callers want [`decode`].
///
/// # Errors
///
/// Returns [`DecodeError::MalformedUri`] if `uri` is not an absolute URI.
pub fn try_decode(uri: &str) -> Result<DisplayMetadata, DecodeError> {
    let url = Url::parse(uri)?;
    let param = |name: &str, default: &str| {
        url.query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    Ok(DisplayMetadata {
        title: param(TITLE_PARAM, DEFAULT_TITLE),
        description: param(DESCRIPTION_PARAM, DEFAULT_DESCRIPTION),
        date: param(DATE_PARAM, NOT_AVAILABLE),
        location: param(LOCATION_PARAM, NOT_AVAILABLE),
        image: param(IMAGE_PARAM, ""),
        event_type: param(EVENT_TYPE_PARAM, ""),
    })
}

/// Decodes a metadata URI into display fields. Never fails.
///
/// # Examples
///
/// ```
/// use showfinder::domain::metadata::{decode, DisplayMetadata};
///
/// let meta = decode("https://tix.example/m?title=Dune&eventType=Movie");
/// assert_eq!(meta.title, "Dune");
/// assert_eq!(meta.event_type, "Movie");
/// assert_eq!(meta.location, "N/A");
///
/// assert_eq!(decode("not a uri"), DisplayMetadata::default());
/// ```
#[must_use]
pub fn decode(uri: &str) -> DisplayMetadata {
    try_decode(uri).unwrap_or_else(|e| {
        tracing::trace!(error = %e, "metadata URI fell back to defaults");
        DisplayMetadata::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_all_six_parameters() {
        let meta = decode(
            "https://tix.example/m?title=Dune%20Part%20Two&desc=Premiere+night&date=2025-03-01\
             &location=Paris&image=https%3A%2F%2Fimg.example%2F1.png&eventType=Movie",
        );
        assert_eq!(
            meta,
            DisplayMetadata {
                title: "Dune Part Two".to_string(),
                description: "Premiere night".to_string(),
                date: "2025-03-01".to_string(),
                location: "Paris".to_string(),
                image: "https://img.example/1.png".to_string(),
                event_type: "Movie".to_string(),
            }
        );
    }

    #[test]
    fn missing_parameters_take_their_defaults() {
        let meta = decode("https://tix.example/m?title=Solo&location=Berlin");
        assert_eq!(meta.title, "Solo");
        assert_eq!(meta.location, "Berlin");
        assert_eq!(meta.description, DEFAULT_DESCRIPTION);
        assert_eq!(meta.date, NOT_AVAILABLE);
        assert_eq!(meta.image, "");
        assert_eq!(meta.event_type, "");
    }

    #[test]
    fn uri_without_query_is_all_defaults() {
        assert_eq!(decode("https://tix.example/m"), DisplayMetadata::default());
    }

    #[test]
    fn empty_value_counts_as_absent() {
        let meta = decode("https://tix.example/m?title=&eventType=");
        assert_eq!(meta.title, DEFAULT_TITLE);
        assert_eq!(meta.event_type, "");
    }

    #[test]
    fn first_occurrence_wins() {
        let meta = decode("https://tix.example/m?eventType=Sport&eventType=Movie");
        assert_eq!(meta.event_type, "Sport");
    }

    #[test]
    fn event_type_case_is_preserved() {
        assert_eq!(decode("https://x.example/?eventType=CONCERT").event_type, "CONCERT");
    }

    #[test]
    fn unparseable_uri_is_all_defaults() {
        for uri in ["", "title=Dune", "://missing-scheme", "http://[::1"] {
            assert!(try_decode(uri).is_err(), "{uri:?} should not parse");
            assert_eq!(decode(uri), DisplayMetadata::default());
        }
    }
}
