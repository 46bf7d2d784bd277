//! Remote service — backend use-cases on top of the speaker remote.

use z407_domain::action::Action;
use z407_domain::error::RemoteError;
use z407_domain::status::StatusSnapshot;

use crate::ports::SpeakerRemote;

/// Application service answering `/status` and performing actions.
pub struct RemoteService<R> {
    remote: R,
}

impl<R: SpeakerRemote> RemoteService<R> {
    /// Create a new service backed by the given remote.
    pub fn new(remote: R) -> Self {
        Self { remote }
    }

    /// Current status as served on `GET /status`.
    pub async fn status(&self) -> StatusSnapshot {
        let link_up = self.remote.is_connected().await;
        self.remote.state().await.snapshot(link_up)
    }

    /// Send the command behind `action` and return its confirmation text.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::NotConnected`] when the control link is down,
    /// or the remote's error when the write fails.
    #[tracing::instrument(skip(self), fields(action = %action))]
    pub async fn perform(&self, action: Action) -> Result<&'static str, RemoteError> {
        if !self.remote.is_connected().await {
            tracing::warn!("action refused, speaker not connected");
            return Err(RemoteError::NotConnected);
        }

        self.remote.send(action.command()).await?;
        tracing::info!("action sent");
        Ok(action.confirmation())
    }
}
