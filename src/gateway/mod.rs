//! Ledger access for the catalog.
//!
//! # Modules
//!
//! - `ledger`: [`LedgerGateway`] trait over the external ledger client
//! - `repository`: [`EventRepository`], concurrent fetch and collection ownership
//! - `snapshot`: [`SnapshotLedger`], a gateway over a JSON snapshot file

pub mod ledger;
pub mod repository;
pub mod snapshot;

pub use ledger::LedgerGateway;
pub use repository::{EventRepository, RefreshOutcome};
pub use snapshot::SnapshotLedger;
