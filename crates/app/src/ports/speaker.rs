//! Speaker port — the backend's control link to the Z407.

use std::future::Future;

use z407_domain::error::RemoteError;
use z407_domain::protocol::Command;
use z407_domain::speaker::SpeakerState;

/// A connected speaker remote.
///
/// Implementations keep [`SpeakerState`] up to date from the speaker's
/// notifications in the background; this port only reads it.
pub trait SpeakerRemote: Send + Sync {
    /// Whether the control link is currently up.
    fn is_connected(&self) -> impl Future<Output = bool> + Send;

    /// Latest state learned from notifications.
    fn state(&self) -> impl Future<Output = SpeakerState> + Send;

    /// Write one command frame to the speaker.
    fn send(&self, command: Command) -> impl Future<Output = Result<(), RemoteError>> + Send;
}

impl<T: SpeakerRemote> SpeakerRemote for std::sync::Arc<T> {
    fn is_connected(&self) -> impl Future<Output = bool> + Send {
        (**self).is_connected()
    }

    fn state(&self) -> impl Future<Output = SpeakerState> + Send {
        (**self).state()
    }

    fn send(&self, command: Command) -> impl Future<Output = Result<(), RemoteError>> + Send {
        (**self).send(command)
    }
}
