//! # z407-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `StatusSource` — fetch the backend's status snapshot
//!   - `ActionSink` — fire a backend action
//!   - `PanelRenderer` — write a panel state to the display
//!   - `Notifier` — show a user-visible alert
//!   - `SpeakerRemote` — talk to the speaker over its control link
//! - Define **use-cases**:
//!   - `StatusPoller` — one poll: fetch, render, never fail
//!   - `ActionInvoker` — one action: post, alert on failure, refresh on input switches
//!   - `PanelContext` — the panel's render targets and client, built once
//!   - `RemoteService` — backend status and action handling
//!
//! ## Dependency rule
//! Depends on `z407-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
