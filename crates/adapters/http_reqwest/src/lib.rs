//! # z407-adapter-http-reqwest
//!
//! HTTP client adapter built on [reqwest](https://docs.rs/reqwest).
//!
//! Implements the panel's `StatusSource` and `ActionSink` ports against a
//! running backend, for panels that live outside the browser.
//!
//! ## Dependency rule
//! Same as other adapters: depends on `z407-app` and `z407-domain`.

mod client;

pub use client::PanelClient;
