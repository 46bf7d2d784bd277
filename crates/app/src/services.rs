//! Application services — use-case implementations.
//!
//! Each service accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod action_invoker;
pub mod panel_context;
pub mod remote_service;
pub mod status_poller;

#[cfg(test)]
pub(crate) mod testing;
