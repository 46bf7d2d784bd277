//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`RemoteError`]
//! via `#[from]` or an explicit `into_domain` when crossing a port boundary.

/// Top-level error for backend operations on the speaker.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// Input rejected before reaching the speaker.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The BLE link to the speaker is down.
    #[error("speaker is not connected")]
    NotConnected,

    /// The speaker (or the radio talking to it) failed.
    #[error("device error")]
    Device(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An action endpoint was empty (or only a `/`).
    #[error("action endpoint must not be empty")]
    EmptyEndpoint,

    /// No backend action is registered under the given endpoint.
    #[error("unknown action {0:?}")]
    UnknownAction(String),
}

/// Errors raised by the panel's HTTP client.
///
/// The panel never shows these to the user as typed values: a failed poll
/// renders the fixed error state and a failed action alerts with the
/// `Display` text.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, …).
    #[error("{0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server answered with a non-success status code.
    #[error("HTTP {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(#[source] Box<dyn std::error::Error + Send + Sync>),
}
