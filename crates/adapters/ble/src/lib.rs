//! # z407-adapter-ble
//!
//! BLE adapter: finds the Z407 control puck, opens a GATT session and
//! keeps a live [`SpeakerState`](z407_domain::speaker::SpeakerState) from
//! its notifications.
//!
//! ## Session
//!
//! | Step | Direction | Frame |
//! |------|-----------|-------|
//! | Subscribe to the response characteristic | host → speaker | |
//! | Handshake | host → speaker | `84 05` |
//! | Handshake request | speaker → host | `d4 05 01` |
//! | Acknowledge | host → speaker | `84 00` |
//! | Connected, with active input | speaker → host | `d4 00 <input>` |
//!
//! After that, commands are written to the command characteristic and
//! acknowledged through notifications.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `z407-app` and `z407-domain`.

mod config;
mod error;
mod gatt;
mod remote;

pub use config::BleConfig;
pub use error::BleError;
pub use remote::Z407Remote;
