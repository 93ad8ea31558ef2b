//! Domain layer for the showfinder catalog.
//!
//! Core types independent of the ledger transport and the terminal host.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`event`]: Ledger event records and identifiers
//! - [`metadata`]: Metadata URI decoding into display fields
//!
//! # Examples
//!
//! ```
//! use showfinder::domain::{metadata, EventId, EventRecord};
//!
//! let record = EventRecord {
//!     id: EventId::from(1_u64),
//!     creator: "0xabc".to_string(),
//!     ticket_price: 10_u128.pow(16),
//!     metadata_uri: "https://tix.example/m?title=Gala".to_string(),
//!     max_tickets: 50,
//!     tickets_sold: 0,
//! };
//! assert_eq!(metadata::decode(&record.metadata_uri).title, "Gala");
//! ```

pub mod error;
pub mod event;
pub mod metadata;

pub use error::{GatewayError, Result, ShowfinderError};
pub use event::{EventId, EventRecord};
pub use metadata::{decode, DecodeError, DisplayMetadata};
