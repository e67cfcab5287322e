//! Core record types for the event API.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned party identifier
pub type PartyId = i64;

/// Server-assigned guest identifier
pub type GuestId = i64;

/// Server-assigned RSVP identifier
pub type RsvpId = i64;

/// A single event record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// ISO-8601 date-time as stored by the API
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
}

/// Optional text fields may be absent or `null`; both read as empty
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Party {
    /// Parse the stored date-time, if it is valid RFC 3339
    pub fn starts_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.date).ok()
    }

    /// Calendar-date portion of the stored date-time
    pub fn calendar_date(&self) -> String {
        super::calendar_date(&self.date)
    }
}

/// A party without its identifier, as sent on creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyDraft {
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
}

impl PartyDraft {
    /// Create a draft with an empty description
    pub fn new(name: impl Into<String>, date: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            date: date.into(),
            location: location.into(),
        }
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A person who may attend parties. Read-only for this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
}

/// Join record linking a guest to a party. Read-only for this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: RsvpId,
    pub guest_id: GuestId,
    /// Identifier of the party (the API calls parties "events")
    pub event_id: PartyId,
}

/// The `{ "data": ... }` wrapper returned by every read endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Error body returned by the API on failed requests
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
