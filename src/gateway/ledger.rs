//! Ledger gateway abstraction.
//!
//! The ledger client (contract bindings, RPC transport, wallet) lives outside
//! this crate. The catalog only needs two read-only calls, captured by
//! [`LedgerGateway`].

use crate::domain::{EventId, EventRecord, GatewayError};
use async_trait::async_trait;
use std::rc::Rc;
use std::sync::Arc;

/// Read-only access to on-chain event records.
///
/// Both calls are assumed idempotent and side-effect free. Futures are not
/// required to be `Send`: the catalog runs on a single cooperative thread.
///
/// # Implementations
///
/// - [`SnapshotLedger`](super::SnapshotLedger): JSON snapshot of a ledger
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use showfinder::domain::{EventId, EventRecord, GatewayError};
/// use showfinder::gateway::LedgerGateway;
///
/// struct EmptyLedger;
///
/// #[async_trait(?Send)]
/// impl LedgerGateway for EmptyLedger {
///     async fn list_event_ids(&self) -> Result<Vec<EventId>, GatewayError> {
///         Ok(vec![])
///     }
///
///     async fn get_event(&self, id: &EventId) -> Result<EventRecord, GatewayError> {
///         Err(GatewayError::UnknownEvent(id.clone()))
///     }
/// }
/// ```
#[async_trait(?Send)]
pub trait LedgerGateway {
    /// Lists every event id, in ledger enumeration order.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the ledger cannot be reached or read.
    async fn list_event_ids(&self) -> Result<Vec<EventId>, GatewayError>;

    /// Fetches one event record.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::UnknownEvent`] for an id the ledger does not
    /// know, or another [`GatewayError`] if the call fails.
    async fn get_event(&self, id: &EventId) -> Result<EventRecord, GatewayError>;
}

#[async_trait(?Send)]
impl<G: LedgerGateway + ?Sized> LedgerGateway for Rc<G> {
    async fn list_event_ids(&self) -> Result<Vec<EventId>, GatewayError> {
        (**self).list_event_ids().await
    }

    async fn get_event(&self, id: &EventId) -> Result<EventRecord, GatewayError> {
        (**self).get_event(id).await
    }
}

#[async_trait(?Send)]
impl<G: LedgerGateway + ?Sized> LedgerGateway for Arc<G> {
    async fn list_event_ids(&self) -> Result<Vec<EventId>, GatewayError> {
        (**self).list_event_ids().await
    }

    async fn get_event(&self, id: &EventId) -> Result<EventRecord, GatewayError> {
        (**self).get_event(id).await
    }
}
