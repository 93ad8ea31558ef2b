//! Event repository: the catalog's single pull from the ledger.
//!
//! [`EventRepository::refresh`] lists every event id, then fetches every
//! record concurrently and joins them all-or-nothing:
//!
//! ```text
//! list_event_ids ──→ get_event(id₁) ┐
//!                    get_event(id₂) ├─ try_join_all ─→ replace collection
//!                    get_event(idₙ) ┘
//! ```
//!
//! One failing `get_event` fails the whole refresh and leaves the previous
//! collection in place. The repository runs on one cooperative thread; its
//! state lives in `Cell`/`RefCell` so readers can observe `is_loading()` while
//! a refresh is suspended.

use super::ledger::LedgerGateway;
use crate::domain::{EventRecord, GatewayError, Result};
use chrono::{DateTime, Utc};
use futures_util::future::try_join_all;
use std::cell::{Cell, RefCell};
use std::sync::Arc;

/// Result of a [`EventRepository::refresh`] call that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The collection was replaced with this snapshot.
    Loaded(Arc<[EventRecord]>),
    /// Another refresh was still in flight; this request was ignored.
    AlreadyLoading,
}

/// Owns the fetched event collection and the loading flag.
///
/// # Examples
///
/// ```no_run
/// use showfinder::gateway::{EventRepository, SnapshotLedger};
///
/// # async fn demo() -> showfinder::Result<()> {
/// let repository = EventRepository::new(SnapshotLedger::open("ledger.json")?);
/// repository.refresh().await?;
/// println!("{} events", repository.events().len());
/// # Ok(())
/// # }
/// ```
pub struct EventRepository<G> {
    gateway: G,
    collection: RefCell<Arc<[EventRecord]>>,
    loading: Cell<bool>,
    last_refreshed: Cell<Option<DateTime<Utc>>>,
}

impl<G: LedgerGateway> EventRepository<G> {
    /// Creates an empty repository. Nothing is fetched until
    /// [`refresh`](Self::refresh).
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            collection: RefCell::new(Arc::from(Vec::new())),
            loading: Cell::new(false),
            last_refreshed: Cell::new(None),
        }
    }

    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Whether a refresh is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// The current collection, in ledger enumeration order.
    ///
    /// Snapshots are immutable: a later refresh swaps in a new one and never
    /// touches a snapshot already handed out.
    pub fn events(&self) -> Arc<[EventRecord]> {
        Arc::clone(&self.collection.borrow())
    }

    /// When the collection was last replaced.
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed.get()
    }

    /// Reloads the whole collection from the ledger.
    ///
    /// A call made while another refresh is suspended returns
    /// [`RefreshOutcome::AlreadyLoading`] without touching the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`ShowfinderError::Gateway`](crate::domain::ShowfinderError::Gateway)
    /// if listing ids or fetching any single record fails. The error is also
    /// logged. The previous collection is kept and loading is cleared.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn refresh(&self) -> Result<RefreshOutcome> {
        if self.loading.replace(true) {
            tracing::debug!("refresh already in flight, ignoring request");
            return Ok(RefreshOutcome::AlreadyLoading);
        }
        let _loading = LoadingGuard(&self.loading);

        match self.fetch_all().await {
            Ok(events) => {
                let snapshot: Arc<[EventRecord]> = Arc::from(events);
                *self.collection.borrow_mut() = Arc::clone(&snapshot);
                self.last_refreshed.set(Some(Utc::now()));
                tracing::info!(event_count = snapshot.len(), "event collection refreshed");
                Ok(RefreshOutcome::Loaded(snapshot))
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching on-chain events");
                Err(e.into())
            }
        }
    }

    /// Lists all ids, then fetches all records with every request outstanding
    /// at once.
    async fn fetch_all(&self) -> std::result::Result<Vec<EventRecord>, GatewayError> {
        let ids = self.gateway.list_event_ids().await?;
        tracing::debug!(id_count = ids.len(), "fetching event records");
        try_join_all(ids.iter().map(|id| self.gateway.get_event(id))).await
    }
}

/// Clears the loading flag when a refresh ends, including when its future is
/// dropped mid-flight.
struct LoadingGuard<'a>(&'a Cell<bool>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventId, ShowfinderError};
    use async_trait::async_trait;
    use std::collections::HashSet;

    #[derive(Default)]
    struct ScriptedLedger {
        records: Vec<EventRecord>,
        failing: RefCell<HashSet<EventId>>,
        list_fails: bool,
        list_calls: Cell<usize>,
        in_flight: Cell<usize>,
        max_in_flight: Cell<usize>,
    }

    impl ScriptedLedger {
        fn with_events(count: u64) -> Self {
            Self {
                records: (1..=count).map(record).collect(),
                ..Self::default()
            }
        }
    }

    #[async_trait(?Send)]
    impl LedgerGateway for ScriptedLedger {
        async fn list_event_ids(&self) -> std::result::Result<Vec<EventId>, GatewayError> {
            self.list_calls.set(self.list_calls.get() + 1);
            tokio::task::yield_now().await;
            if self.list_fails {
                return Err(GatewayError::Unavailable("connection refused".to_string()));
            }
            Ok(self.records.iter().map(|r| r.id.clone()).collect())
        }

        async fn get_event(&self, id: &EventId) -> std::result::Result<EventRecord, GatewayError> {
            self.in_flight.set(self.in_flight.get() + 1);
            self.max_in_flight.set(self.max_in_flight.get().max(self.in_flight.get()));
            tokio::task::yield_now().await;
            self.in_flight.set(self.in_flight.get() - 1);

            if self.failing.borrow().contains(id) {
                return Err(GatewayError::Unavailable(format!("timeout reading {id}")));
            }
            self.records
                .iter()
                .find(|r| &r.id == id)
                .cloned()
                .ok_or_else(|| GatewayError::UnknownEvent(id.clone()))
        }
    }

    fn record(n: u64) -> EventRecord {
        EventRecord {
            id: EventId::from(n),
            creator: format!("0x{n:040x}"),
            ticket_price: u128::from(n) * 10_u128.pow(15),
            metadata_uri: format!("https://tix.example/m?title=Show{n}"),
            max_tickets: 100,
            tickets_sold: n,
        }
    }

    #[tokio::test]
    async fn refresh_loads_in_ledger_order() {
        let repository = EventRepository::new(ScriptedLedger::with_events(4));
        assert!(repository.events().is_empty());
        assert!(repository.last_refreshed().is_none());

        let outcome = repository.refresh().await.unwrap();

        let RefreshOutcome::Loaded(snapshot) = outcome else {
            panic!("expected a loaded snapshot");
        };
        let ids: Vec<String> = snapshot.iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert_eq!(repository.events(), snapshot);
        assert!(!repository.is_loading());
        assert!(repository.last_refreshed().is_some());
    }

    #[tokio::test]
    async fn record_fetches_are_concurrent() {
        let repository = EventRepository::new(ScriptedLedger::with_events(8));
        repository.refresh().await.unwrap();
        assert_eq!(repository.gateway().max_in_flight.get(), 8);
    }

    #[tokio::test]
    async fn one_failing_record_fails_the_refresh() {
        let repository = EventRepository::new(ScriptedLedger::with_events(3));
        repository.refresh().await.unwrap();
        let before = repository.events();
        let refreshed_at = repository.last_refreshed();

        repository.gateway().failing.borrow_mut().insert(EventId::from(2_u64));
        let err = repository.refresh().await.unwrap_err();

        assert!(matches!(err, ShowfinderError::Gateway(GatewayError::Unavailable(_))));
        assert_eq!(repository.events(), before);
        assert_eq!(repository.last_refreshed(), refreshed_at);
        assert!(!repository.is_loading());
    }

    #[tokio::test]
    async fn failed_listing_on_first_load_leaves_empty_collection() {
        let repository = EventRepository::new(ScriptedLedger {
            list_fails: true,
            ..ScriptedLedger::default()
        });
        assert!(repository.refresh().await.is_err());
        assert!(repository.events().is_empty());
        assert!(!repository.is_loading());
    }

    #[tokio::test]
    async fn empty_ledger_is_a_valid_load() {
        let repository = EventRepository::new(ScriptedLedger::default());
        let outcome = repository.refresh().await.unwrap();
        assert_eq!(outcome, RefreshOutcome::Loaded(Arc::from(Vec::new())));
    }

    #[tokio::test]
    async fn overlapping_refresh_is_ignored() {
        let repository = EventRepository::new(ScriptedLedger::with_events(2));

        let (first, second) = tokio::join!(repository.refresh(), repository.refresh());

        assert!(matches!(first.unwrap(), RefreshOutcome::Loaded(_)));
        assert_eq!(second.unwrap(), RefreshOutcome::AlreadyLoading);
        assert_eq!(repository.gateway().list_calls.get(), 1);
    }

    #[tokio::test]
    async fn dropped_refresh_clears_loading() {
        let repository = EventRepository::new(ScriptedLedger::with_events(2));
        {
            let pending = repository.refresh();
            tokio::pin!(pending);
            let polled = futures_util::poll!(pending.as_mut());
            assert!(polled.is_pending());
            assert!(repository.is_loading());
        }
        assert!(!repository.is_loading());
        assert!(repository.events().is_empty());
    }
}
