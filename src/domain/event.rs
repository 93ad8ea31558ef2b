//! On-chain event records.
//!
//! An [`EventRecord`] is exactly what the ledger returns for one event id. The
//! catalog never edits a record: the one handed to the details view is the one
//! last fetched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, ledger-assigned event identifier.
///
/// Ledgers hand out ids as integers or strings; both forms normalize to their
/// decimal/string representation.
///
/// # Examples
///
/// ```
/// use showfinder::domain::EventId;
///
/// assert_eq!(EventId::from(7_u64), EventId::from("7"));
/// assert_eq!(EventId::from(7_u64).to_string(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawEventId", into = "String")]
pub struct EventId(String);

impl EventId {
    /// The id as it appears on the ledger, e.g. `"7"` or `"0x1f"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<EventId> for String {
    fn from(id: EventId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEventId {
    Number(u64),
    Text(String),
}

impl From<RawEventId> for EventId {
    fn from(raw: RawEventId) -> Self {
        match raw {
            RawEventId::Number(n) => Self::from(n),
            RawEventId::Text(s) => Self(s),
        }
    }
}

/// A ticketed event as stored on the ledger.
///
/// `tickets_sold <= max_tickets` is enforced by the contract, not here; the
/// inventory helpers saturate instead of trusting it.
///
/// # Fields
///
/// - `id`: Ledger identifier
/// - `creator`: Address of the account that created the event
/// - `ticket_price`: Price in the smallest currency unit (wei for ETH)
/// - `metadata_uri`: URI whose query parameters carry the display fields
/// - `max_tickets`: Ticket supply
/// - `tickets_sold`: Tickets already sold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: EventId,
    pub creator: String,
    #[serde(with = "amount")]
    pub ticket_price: u128,
    pub metadata_uri: String,
    pub max_tickets: u64,
    pub tickets_sold: u64,
}

impl EventRecord {
    /// Tickets still available for sale.
    ///
    /// # Examples
    ///
    /// ```
    /// use showfinder::domain::EventRecord;
    ///
    /// let record = EventRecord {
    ///     id: 1_u64.into(),
    ///     creator: "0xabc".to_string(),
    ///     ticket_price: 0,
    ///     metadata_uri: String::new(),
    ///     max_tickets: 100,
    ///     tickets_sold: 40,
    /// };
    /// assert_eq!(record.tickets_remaining(), 60);
    /// assert!(!record.is_sold_out());
    /// ```
    #[must_use]
    pub const fn tickets_remaining(&self) -> u64 {
        self.max_tickets.saturating_sub(self.tickets_sold)
    }

    #[must_use]
    pub const fn is_sold_out(&self) -> bool {
        self.tickets_remaining() == 0
    }
}

/// Serde adapter for smallest-unit amounts.
///
/// Amounts routinely exceed `u64` (20 ETH in wei already does), so they are
/// written as decimal strings. Plain JSON integers are accepted on input.
mod amount {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(u64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(n) => Ok(u128::from(n)),
            RawAmount::Text(s) => s
                .trim()
                .parse::<u128>()
                .map_err(|e| de::Error::custom(format!("invalid amount {s:?}: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_accepts_numbers_and_strings() {
        let ids: Vec<EventId> = serde_json::from_str(r#"[3, "0x1f"]"#).unwrap();
        assert_eq!(ids, vec![EventId::from(3_u64), EventId::from("0x1f")]);
        assert_eq!(ids[1].as_str(), "0x1f");
    }

    #[test]
    fn price_above_u64_survives_json() {
        let json = r#"{
            "id": 9,
            "creator": "0xabc",
            "ticket_price": "20000000000000000000",
            "metadata_uri": "https://tix.example/e?title=Gala",
            "max_tickets": 10,
            "tickets_sold": 10
        }"#;
        let record: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.ticket_price, 20_000_000_000_000_000_000);
        assert!(record.is_sold_out());

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["ticket_price"], "20000000000000000000");
        assert_eq!(back["id"], "9");
    }

    #[test]
    fn oversold_record_saturates() {
        let record = EventRecord {
            id: EventId::from(1_u64),
            creator: String::new(),
            ticket_price: 1,
            metadata_uri: String::new(),
            max_tickets: 2,
            tickets_sold: 5,
        };
        assert_eq!(record.tickets_remaining(), 0);
    }

    #[test]
    fn malformed_price_is_rejected() {
        let json = r#"{"id":1,"creator":"","ticket_price":"ten","metadata_uri":"","max_tickets":1,"tickets_sold":0}"#;
        assert!(serde_json::from_str::<EventRecord>(json).is_err());
    }
}
