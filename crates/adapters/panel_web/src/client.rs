//! Same-origin backend client on top of `fetch`.

use gloo_net::http::Request;

use z407_app::ports::{ActionSink, StatusSource};
use z407_domain::action::ActionEndpoint;
use z407_domain::error::ClientError;
use z407_domain::status::StatusSnapshot;

/// Talks to the backend that served the page, through relative URLs.
pub struct BrowserClient;

impl StatusSource for BrowserClient {
    async fn fetch_status(&self) -> Result<StatusSnapshot, ClientError> {
        let response = Request::get("/status").send().await.map_err(transport)?;
        if !response.ok() {
            return Err(ClientError::Status(response.status()));
        }
        response
            .json::<StatusSnapshot>()
            .await
            .map_err(|err| ClientError::Decode(Box::new(err)))
    }
}

impl ActionSink for BrowserClient {
    async fn post_action(&self, endpoint: &ActionEndpoint) -> Result<u16, ClientError> {
        let response = Request::post(endpoint.path())
            .send()
            .await
            .map_err(transport)?;
        Ok(response.status())
    }
}

fn transport(err: gloo_net::Error) -> ClientError {
    ClientError::Transport(Box::new(err))
}
