//! Shared application state for axum handlers.

use std::sync::Arc;

use z407_app::ports::SpeakerRemote;
use z407_app::services::remote_service::RemoteService;

/// Application state shared across all axum handlers.
///
/// `Clone` is implemented manually so the remote itself does not need to be
/// `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Speaker use-cases.
    pub remote_service: Arc<RemoteService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            remote_service: Arc::clone(&self.remote_service),
        }
    }
}

impl<R> AppState<R>
where
    R: SpeakerRemote + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(remote_service: RemoteService<R>) -> Self {
        Self {
            remote_service: Arc::new(remote_service),
        }
    }
}
