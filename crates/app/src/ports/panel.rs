//! Panel ports — the control panel's view of the backend and of its display.
//!
//! The panel runs on a single-threaded event loop (a browser tab, or the
//! CLI's main task), so none of these futures are required to be `Send`.

use std::future::Future;

use z407_domain::action::ActionEndpoint;
use z407_domain::error::ClientError;
use z407_domain::panel::PanelState;
use z407_domain::status::StatusSnapshot;

/// Fetches the backend's current status (`GET /status`).
pub trait StatusSource {
    /// Fetch and decode one snapshot.
    ///
    /// Non-success HTTP statuses and undecodable bodies are errors.
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, ClientError>>;
}

/// Fires backend actions (`POST /<endpoint>`, no body).
pub trait ActionSink {
    /// Send the request and return the response's status code.
    ///
    /// Only transport failures are errors; any HTTP status, success or not,
    /// is returned as `Ok`.
    fn post_action(
        &self,
        endpoint: &ActionEndpoint,
    ) -> impl Future<Output = Result<u16, ClientError>>;
}

/// Writes a panel state into the display regions.
pub trait PanelRenderer {
    /// Replace everything shown with `state`.
    fn render(&self, state: &PanelState);
}

/// Shows a user-visible alert.
pub trait Notifier {
    fn alert(&self, message: &str);
}
