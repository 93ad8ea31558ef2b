//! Ledger gateway backed by a JSON snapshot file.
//!
//! A snapshot is a dump of the contract's event table, in enumeration order.
//! It stands in for a live ledger client in the terminal host and in tests.
//! When opened from a file, the file is re-read on every listing so an edited
//! snapshot shows up on the next refresh.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "events": [
//!     {
//!       "id": 1,
//!       "creator": "0x9f2c...",
//!       "ticket_price": "10000000000000000",
//!       "metadata_uri": "https://tix.example/m?title=Dune&eventType=Movie",
//!       "max_tickets": 120,
//!       "tickets_sold": 37
//!     }
//!   ]
//! }
//! ```

use super::ledger::LedgerGateway;
use crate::domain::error::{Result, ShowfinderError};
use crate::domain::{EventId, EventRecord, GatewayError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Snapshot format version this crate reads and writes.
const SNAPSHOT_VERSION: u32 = 1;

/// On-disk snapshot container.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotData {
    version: u32,
    #[serde(default)]
    events: Vec<EventRecord>,
}

/// [`LedgerGateway`] over a snapshot of event records.
///
/// # Examples
///
/// ```no_run
/// use showfinder::gateway::SnapshotLedger;
///
/// let ledger = SnapshotLedger::open("ledger.json")?;
/// # Ok::<(), showfinder::ShowfinderError>(())
/// ```
#[derive(Debug)]
pub struct SnapshotLedger {
    /// Source file, if the snapshot came from disk.
    path: Option<PathBuf>,
    events: RefCell<Vec<EventRecord>>,
}

impl SnapshotLedger {
    /// Opens a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid snapshot.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        tracing::debug!(path = ?path, "opening ledger snapshot");
        let events = Self::parse(&std::fs::read_to_string(&path)?)?;
        Ok(Self {
            path: Some(path),
            events: RefCell::new(events),
        })
    }

    /// Creates an in-memory snapshot.
    #[must_use]
    pub fn from_events(events: Vec<EventRecord>) -> Self {
        Self {
            path: None,
            events: RefCell::new(events),
        }
    }

    /// Parses snapshot JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ShowfinderError::Snapshot`] for invalid JSON, an unsupported
    /// version, or duplicate event ids.
    pub fn parse(json: &str) -> Result<Vec<EventRecord>> {
        let data: SnapshotData = serde_json::from_str(json)
            .map_err(|e| ShowfinderError::Snapshot(format!("failed to parse JSON: {e}")))?;

        if data.version != SNAPSHOT_VERSION {
            return Err(ShowfinderError::Snapshot(format!(
                "unsupported snapshot version {}",
                data.version
            )));
        }

        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = data.events.iter().find(|e| !seen.insert(&e.id)) {
            return Err(ShowfinderError::Snapshot(format!("duplicate event id {}", dup.id)));
        }

        tracing::debug!(event_count = data.events.len(), "parsed ledger snapshot");
        Ok(data.events)
    }

    /// Serializes records in snapshot format.
    ///
    /// # Errors
    ///
    /// Returns [`ShowfinderError::Snapshot`] if serialization fails.
    pub fn to_json(events: &[EventRecord]) -> Result<String> {
        let data = SnapshotData {
            version: SNAPSHOT_VERSION,
            events: events.to_vec(),
        };
        serde_json::to_string_pretty(&data)
            .map_err(|e| ShowfinderError::Snapshot(format!("failed to serialize JSON: {e}")))
    }

    /// Re-reads the source file, keeping the previous events on failure.
    fn reload(&self) -> std::result::Result<(), GatewayError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GatewayError::Unavailable(format!("{}: {e}", path.display())))?;
        let events = Self::parse(&contents).map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
        *self.events.borrow_mut() = events;
        Ok(())
    }
}

#[async_trait(?Send)]
impl LedgerGateway for SnapshotLedger {
    async fn list_event_ids(&self) -> std::result::Result<Vec<EventId>, GatewayError> {
        self.reload()?;
        Ok(self.events.borrow().iter().map(|e| e.id.clone()).collect())
    }

    async fn get_event(&self, id: &EventId) -> std::result::Result<EventRecord, GatewayError> {
        self.events
            .borrow()
            .iter()
            .find(|e| &e.id == id)
            .cloned()
            .ok_or_else(|| GatewayError::UnknownEvent(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(n: u64) -> EventRecord {
        EventRecord {
            id: EventId::from(n),
            creator: "0xfeed".to_string(),
            ticket_price: 5,
            metadata_uri: format!("https://tix.example/m?title=Night{n}"),
            max_tickets: 10,
            tickets_sold: 1,
        }
    }

    #[tokio::test]
    async fn serves_records_in_file_order() {
        let ledger = SnapshotLedger::from_events(vec![record(3), record(1), record(2)]);
        let ids = ledger.list_event_ids().await.unwrap();
        assert_eq!(ids, vec![EventId::from(3_u64), EventId::from(1_u64), EventId::from(2_u64)]);
        assert_eq!(ledger.get_event(&EventId::from(1_u64)).await.unwrap(), record(1));
    }

    #[tokio::test]
    async fn unknown_id_is_a_gateway_error() {
        let ledger = SnapshotLedger::from_events(vec![record(1)]);
        let err = ledger.get_event(&EventId::from(99_u64)).await.unwrap_err();
        assert_eq!(err, GatewayError::UnknownEvent(EventId::from(99_u64)));
    }

    #[tokio::test]
    async fn file_edits_show_up_on_next_listing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SnapshotLedger::to_json(&[record(1)]).unwrap()).unwrap();
        let ledger = SnapshotLedger::open(file.path()).unwrap();
        assert_eq!(ledger.list_event_ids().await.unwrap().len(), 1);

        std::fs::write(file.path(), SnapshotLedger::to_json(&[record(1), record(2)]).unwrap()).unwrap();
        assert_eq!(ledger.list_event_ids().await.unwrap().len(), 2);

        std::fs::write(file.path(), "{ not json").unwrap();
        let err = ledger.list_event_ids().await.unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
        assert_eq!(ledger.get_event(&EventId::from(2_u64)).await.unwrap(), record(2));
    }

    #[test]
    fn rejects_bad_snapshots() {
        assert!(SnapshotLedger::parse(r#"{"version": 2, "events": []}"#).is_err());
        let dup = format!(
            r#"{{"version": 1, "events": [{0}, {0}]}}"#,
            serde_json::to_string(&record(1)).unwrap()
        );
        assert!(matches!(SnapshotLedger::parse(&dup), Err(ShowfinderError::Snapshot(_))));
        assert!(SnapshotLedger::parse(r#"{"version": 1}"#).unwrap().is_empty());
    }
}
