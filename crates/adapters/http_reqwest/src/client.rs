//! Backend client for the panel ports.

use std::time::Duration;

use z407_app::ports::{ActionSink, StatusSource};
use z407_domain::action::ActionEndpoint;
use z407_domain::error::ClientError;
use z407_domain::status::StatusSnapshot;

/// HTTP client talking to one backend.
#[derive(Debug, Clone)]
pub struct PanelClient {
    client: reqwest::Client,
    base_url: String,
}

impl PanelClient {
    /// Create a client for the backend at `base_url` (e.g. `http://127.0.0.1:3000`).
    ///
    /// Requests wait for the backend as long as the connection stays open.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::build(base_url, reqwest::Client::builder())
    }

    /// Same as [`PanelClient::new`], but requests slower than `timeout` fail
    /// as transport errors.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP client cannot be built.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Self::build(base_url, reqwest::Client::builder().timeout(timeout))
    }

    fn build(base_url: &str, builder: reqwest::ClientBuilder) -> Result<Self, ClientError> {
        let client = builder.build().map_err(transport)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Backend address, without a trailing `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl StatusSource for PanelClient {
    async fn fetch_status(&self) -> Result<StatusSnapshot, ClientError> {
        let response = self
            .client
            .get(self.url("/status"))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "status request rejected");
            return Err(ClientError::Status(status.as_u16()));
        }

        response
            .json::<StatusSnapshot>()
            .await
            .map_err(|err| ClientError::Decode(Box::new(err)))
    }
}

impl ActionSink for PanelClient {
    async fn post_action(&self, endpoint: &ActionEndpoint) -> Result<u16, ClientError> {
        let response = self
            .client
            .post(self.url(endpoint.path()))
            .send()
            .await
            .map_err(transport)?;

        Ok(response.status().as_u16())
    }
}

fn transport(err: reqwest::Error) -> ClientError {
    ClientError::Transport(Box::new(err))
}
