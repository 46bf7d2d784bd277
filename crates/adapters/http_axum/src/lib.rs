//! # z407-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve `GET /status` with the speaker's current
//!   [`StatusSnapshot`](z407_domain::status::StatusSnapshot)
//! - Serve one `POST /<action>` route per speaker action, answering
//!   `{"status": "<confirmation>"}`
//! - Serve the browser panel's static files as the router fallback
//!
//! ## Dependency rule
//! Depends on `z407-app` (for the remote port and service) and `z407-domain`
//! (for the types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;
