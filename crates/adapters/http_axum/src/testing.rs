//! Shared test fixtures.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::response::Response;

use z407_app::ports::SpeakerRemote;
use z407_app::services::remote_service::RemoteService;
use z407_domain::error::RemoteError;
use z407_domain::protocol::{Command, Notification};
use z407_domain::speaker::{InputMode, SpeakerState};

use crate::state::AppState;

#[derive(Default)]
struct Inner {
    connected: bool,
    fail_writes: bool,
    state: SpeakerState,
    sent: Mutex<Vec<Command>>,
}

/// In-memory speaker remote recording every command sent to it.
#[derive(Clone, Default)]
pub(crate) struct StubRemote(Arc<Inner>);

impl StubRemote {
    pub(crate) fn connected_on_aux() -> Self {
        let mut state = SpeakerState::default();
        state.apply(&Notification::Connected(InputMode::Aux));
        state.apply(&Notification::BluetoothPaired);
        Self(Arc::new(Inner {
            connected: true,
            state,
            ..Inner::default()
        }))
    }

    pub(crate) fn disconnected() -> Self {
        Self::default()
    }

    pub(crate) fn failing() -> Self {
        Self(Arc::new(Inner {
            connected: true,
            fail_writes: true,
            ..Inner::default()
        }))
    }

    pub(crate) fn sent(&self) -> Vec<Command> {
        self.0.sent.lock().unwrap().clone()
    }
}

impl SpeakerRemote for StubRemote {
    async fn is_connected(&self) -> bool {
        self.0.connected
    }

    async fn state(&self) -> SpeakerState {
        self.0.state.clone()
    }

    async fn send(&self, command: Command) -> Result<(), RemoteError> {
        if self.0.fail_writes {
            return Err(RemoteError::Device(Box::new(std::io::Error::other(
                "write failed",
            ))));
        }
        self.0.sent.lock().unwrap().push(command);
        Ok(())
    }
}

pub(crate) fn test_router(remote: StubRemote) -> Router {
    crate::router::build(AppState::new(RemoteService::new(remote)), None)
}

pub(crate) async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
