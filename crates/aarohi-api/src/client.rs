//! HTTP client for the backend API.

use crate::envelope::{unwrap_envelope, Envelope};
use crate::error::{FetchError, FetchResult};
use crate::models::{EducationData, EmergencyData, HealthData, MentalHealthData, StoriesData};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// The data operations the pages depend on.
///
/// Pages hold this seam rather than the concrete client so their render-state
/// transitions are testable without a network.
#[async_trait]
pub trait PortalData: Send + Sync {
    /// Fetches the education page payload.
    async fn education(&self) -> FetchResult<EducationData>;
    /// Fetches the health services payload.
    async fn health(&self) -> FetchResult<HealthData>;
    /// Fetches the mental-health resources payload.
    async fn mental_health(&self) -> FetchResult<MentalHealthData>;
    /// Fetches the community stories payload.
    async fn stories(&self) -> FetchResult<StoriesData>;
    /// Fetches the emergency contacts payload.
    async fn emergency(&self) -> FetchResult<EmergencyData>;
    /// Fires the emergency trigger; returns the backend's message.
    async fn trigger_emergency(&self) -> FetchResult<String>;
}

/// Client for the backend's envelope-wrapped endpoints.
///
/// One shared connection pool; no caching, no retry, no shared-state
/// mutation. Each call is a single attempt whose failure the caller projects
/// into a page-local error state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: Url,
    trigger: Url,
}

impl ApiClient {
    /// Creates a client over the given API base and emergency trigger URLs.
    pub fn new(base: Url, trigger: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
            trigger,
        }
    }

    fn endpoint(&self, path: &str) -> Url {
        // Url::join treats the base as a directory only with a trailing
        // slash; build from the path string instead so "/api" + "education"
        // lands on "/api/education".
        let mut url = self.base.clone();
        let joined = format!("{}/{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url
    }

    /// Fetches one resource and decodes its envelope payload.
    ///
    /// Single attempt: transport, non-2xx status, failure envelope, and
    /// decode faults all surface as [`FetchError`].
    pub async fn fetch_resource<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        let url = self.endpoint(path);
        debug!(%url, "fetching resource");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "resource fetch returned error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        unwrap_envelope(&body)
    }

    async fn post_trigger(&self) -> FetchResult<String> {
        debug!(url = %self.trigger, "firing emergency trigger");

        let response = self.client.post(self.trigger.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "emergency trigger returned error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        // The trigger endpoint's envelope carries no payload worth keeping;
        // the message is what the user sees.
        let body = response.text().await?;
        let raw: Envelope<serde_json::Value> = serde_json::from_str(&body)?;
        if !raw.is_success() {
            return Err(FetchError::Envelope {
                message: raw.message,
            });
        }
        Ok(raw.message)
    }
}

#[async_trait]
impl PortalData for ApiClient {
    async fn education(&self) -> FetchResult<EducationData> {
        self.fetch_resource("education").await
    }

    async fn health(&self) -> FetchResult<HealthData> {
        self.fetch_resource("health").await
    }

    async fn mental_health(&self) -> FetchResult<MentalHealthData> {
        self.fetch_resource("mental-health").await
    }

    async fn stories(&self) -> FetchResult<StoriesData> {
        self.fetch_resource("stories").await
    }

    async fn emergency(&self) -> FetchResult<EmergencyData> {
        self.fetch_resource("emergency").await
    }

    async fn trigger_emergency(&self) -> FetchResult<String> {
        self.post_trigger().await
    }
}
