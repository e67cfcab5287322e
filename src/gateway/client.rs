//! Event API REST Client
//!
//! HTTP client for the remote party, guest and RSVP collections.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{Endpoints, GatewayError, GatewayResult, PartyGateway};
use crate::config::GatewayConfig;
use crate::model::{Envelope, ErrorEnvelope, Guest, Party, PartyDraft, PartyId, Rsvp};

/// Event API client backed by `reqwest`
pub struct HttpGateway {
    client: Client,
    endpoints: Endpoints,
}

impl HttpGateway {
    /// Create a new client with the given configuration
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoints: Endpoints::from_config(config),
        })
    }

    /// Resolved endpoint URLs
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// GET a URL and unwrap the `data` field of the reply envelope
    async fn fetch_data<T: DeserializeOwned>(&self, url: &str) -> GatewayResult<T> {
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(GatewayError::from_transport)?;

        read_data(response).await
    }
}

#[async_trait]
impl PartyGateway for HttpGateway {
    async fn list_parties(&self) -> GatewayResult<Vec<Party>> {
        self.fetch_data(self.endpoints.parties()).await
    }

    async fn get_party(&self, id: PartyId) -> GatewayResult<Party> {
        self.fetch_data(&self.endpoints.party(id)).await
    }

    async fn list_rsvps(&self) -> GatewayResult<Vec<Rsvp>> {
        self.fetch_data(self.endpoints.rsvps()).await
    }

    async fn list_guests(&self) -> GatewayResult<Vec<Guest>> {
        self.fetch_data(self.endpoints.guests()).await
    }

    async fn create_party(&self, draft: &PartyDraft) -> GatewayResult<Party> {
        let url = self.endpoints.parties();
        tracing::debug!(url = %url, name = %draft.name, "POST");

        let response = self
            .client
            .post(url)
            .json(draft)
            .send()
            .await
            .map_err(GatewayError::from_transport)?;

        read_data(response).await
    }

    async fn delete_party(&self, id: PartyId) -> GatewayResult<()> {
        let url = self.endpoints.party(id);
        tracing::debug!(url = %url, "DELETE");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(GatewayError::from_transport)?;

        // Any 2xx counts, with or without a confirmation body
        ensure_success(response).await?;
        Ok(())
    }
}

/// Check the status and decode the reply envelope
async fn read_data<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
    let response = ensure_success(response).await?;
    let body = response.text().await.map_err(GatewayError::from_transport)?;
    let envelope: Envelope<T> = serde_json::from_str(&body)?;
    Ok(envelope.data)
}

/// Turn a non-2xx reply into [`GatewayError::Status`]
async fn ensure_success(response: Response) -> GatewayResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorEnvelope>(&text)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|body| body.message)
        .unwrap_or_else(|| {
            if text.trim().is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                text
            }
        });

    Err(GatewayError::Status {
        status: status.as_u16(),
        message,
    })
}
