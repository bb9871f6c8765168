//! Pass-through client for the admin resource endpoints.

use serde_json::Value;
use tracing::instrument;

use fixwell_core::{Result, ServiceUrl};

use crate::client::ApiClient;

const VENDORS: &str = "/admin/vendors";
const NOTIFICATIONS: &str = "/admin/notifications";
const SERVICES: &str = "/admin/services";
const REMINDERS: &str = "/admin/reminders";

/// Thin pass-through over the admin resource endpoints.
///
/// Payload shapes belong to the collaborating services; responses come
/// back as raw JSON and the session layer does not interpret them.
#[derive(Debug, Clone)]
pub struct AdminApi {
    client: ApiClient,
}

impl AdminApi {
    /// Create a new pass-through client for the given API base URL.
    pub fn new(base: ServiceUrl) -> Self {
        Self {
            client: ApiClient::new(base),
        }
    }

    /// Fetch the vendor listing.
    #[instrument(skip(self))]
    pub async fn vendors(&self) -> Result<Value> {
        self.client.fetch(VENDORS).await
    }

    /// Fetch operational notifications.
    #[instrument(skip(self))]
    pub async fn notifications(&self) -> Result<Value> {
        self.client.fetch(NOTIFICATIONS).await
    }

    /// Fetch the service catalog.
    #[instrument(skip(self))]
    pub async fn services(&self) -> Result<Value> {
        self.client.fetch(SERVICES).await
    }

    /// Fetch reminder follow-ups.
    #[instrument(skip(self))]
    pub async fn reminders(&self) -> Result<Value> {
        self.client.fetch(REMINDERS).await
    }
}
