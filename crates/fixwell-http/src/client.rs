//! HTTP client for the admin API.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use fixwell_core::error::{Error, RemoteRejectedError, TransportError};
use fixwell_core::{Result, ServiceUrl};

/// Error body shape the admin API uses for structured declines.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client wrapper for admin API requests.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: ServiceUrl,
}

impl ApiClient {
    /// Create a new client for the given API base URL.
    pub fn new(base: ServiceUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fixadmin/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, base }
    }

    /// Returns the API base URL this client is configured for.
    pub fn base(&self) -> &ServiceUrl {
        &self.base
    }

    /// Make a JSON POST request.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn procedure<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(path);
        debug!(path, "API procedure");

        let response = self
            .client
            .post(&url)
            .headers(json_headers())
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Make a JSON GET request.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn fetch<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(path);
        debug!(path, "API fetch");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Handle a response, parsing the body or converting the failure.
    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            let body = response.json::<R>().await.map_err(transport)?;
            Ok(body)
        } else {
            Err(self.convert_failure(response).await)
        }
    }

    /// Convert a non-success response into an error.
    ///
    /// A structured `{ "message": ... }` body is an explicit decline and
    /// carries the server's text verbatim; anything else is a transport
    /// failure the flow cannot attribute to the service.
    async fn convert_failure(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();

        match response.json::<ErrorBody>().await {
            Ok(ErrorBody {
                message: Some(message),
            }) => RemoteRejectedError::new(status, message).into(),
            _ => TransportError::Http {
                message: format!("HTTP {}", status),
            }
            .into(),
        }
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Classify a reqwest failure into the transport taxonomy.
fn transport(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}
