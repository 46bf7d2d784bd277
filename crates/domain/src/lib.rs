//! # z407-domain
//!
//! Pure domain model for the z407hub speaker remote.
//!
//! ## Responsibilities
//! - Foundational types: error conventions
//! - Define the **speaker protocol** (GATT UUIDs, commands, notifications)
//! - Define the **speaker state** tracked from notifications
//! - Define **actions** (the backend's one-shot command routes)
//! - Define the **status snapshot** exchanged over `GET /status`
//! - Define the **panel state**: what the control panel displays for a
//!   given poll outcome
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod action;
pub mod panel;
pub mod protocol;
pub mod speaker;
pub mod status;
