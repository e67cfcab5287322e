//! URL construction for the event API.

use crate::config::GatewayConfig;
use crate::model::PartyId;

/// Resolved endpoint URLs for one cohort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    collection: String,
    guests: String,
    rsvps: String,
}

impl Endpoints {
    /// Resolve endpoints from gateway configuration
    pub fn from_config(config: &GatewayConfig) -> Self {
        let cohort = config.cohort.trim_matches('/');
        let root = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            urlencoding::encode(cohort)
        );

        Self {
            collection: join(&root, &config.resource),
            guests: join(&root, &config.guests_path),
            rsvps: join(&root, &config.rsvps_path),
        }
    }

    /// Party collection endpoint (`GET` list, `POST` create)
    pub fn parties(&self) -> &str {
        &self.collection
    }

    /// Single party endpoint (`GET`, `DELETE`)
    pub fn party(&self, id: PartyId) -> String {
        format!("{}/{}", self.collection, id)
    }

    /// Guest collection endpoint
    pub fn guests(&self) -> &str {
        &self.guests
    }

    /// RSVP collection endpoint
    pub fn rsvps(&self) -> &str {
        &self.rsvps
    }
}

fn join(root: &str, path: &str) -> String {
    format!("{}/{}", root, path.trim_matches('/'))
}
