//! Remote Data Gateway
//!
//! Everything the client knows about the remote event API lives here.
//!
//! ## Endpoints
//!
//! - `GET/POST <base>/<cohort>/events` - list and create parties
//! - `GET/DELETE <base>/<cohort>/events/:id` - fetch and delete one party
//! - `GET <base>/<cohort>/guests` - read-only guest collection
//! - `GET <base>/<cohort>/rsvps` - read-only RSVP collection
//!
//! Every read reply is wrapped in an [`Envelope`](crate::model::Envelope).
//! Gateways never touch application state; the
//! [`Planner`](crate::planner::Planner) decides what a reply means.

mod client;
mod endpoints;
mod error;

#[cfg(test)]
pub(crate) mod fake;

pub use client::HttpGateway;
pub use endpoints::Endpoints;
pub use error::{GatewayError, GatewayResult};

use async_trait::async_trait;

use crate::model::{Guest, Party, PartyDraft, PartyId, Rsvp};

/// Access to the remote party, guest and RSVP collections
#[async_trait]
pub trait PartyGateway: Send + Sync {
    /// Fetch every party in the collection
    async fn list_parties(&self) -> GatewayResult<Vec<Party>>;

    /// Fetch a single party by identifier
    async fn get_party(&self, id: PartyId) -> GatewayResult<Party>;

    /// Fetch every RSVP
    async fn list_rsvps(&self) -> GatewayResult<Vec<Rsvp>>;

    /// Fetch every guest
    async fn list_guests(&self) -> GatewayResult<Vec<Guest>>;

    /// Create a party; returns the record as stored by the server
    async fn create_party(&self, draft: &PartyDraft) -> GatewayResult<Party>;

    /// Delete a party by identifier
    async fn delete_party(&self, id: PartyId) -> GatewayResult<()>;
}
