//! In-memory port implementations shared by the service tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use z407_domain::action::ActionEndpoint;
use z407_domain::error::ClientError;
use z407_domain::panel::PanelState;
use z407_domain::status::StatusSnapshot;

use crate::ports::{ActionSink, Notifier, PanelRenderer, StatusSource};

/// Scripted backend: answers are consumed in order. An exhausted status
/// script behaves like an unreachable backend; an exhausted action script
/// answers `200`.
#[derive(Default)]
pub struct FakeClient {
    statuses: RefCell<VecDeque<Result<StatusSnapshot, ClientError>>>,
    actions: RefCell<VecDeque<Result<u16, ClientError>>>,
    status_calls: Cell<usize>,
    posted: RefCell<Vec<String>>,
}

impl FakeClient {
    pub fn with_status(self, answer: Result<StatusSnapshot, ClientError>) -> Self {
        self.statuses.borrow_mut().push_back(answer);
        self
    }

    pub fn with_action(self, answer: Result<u16, ClientError>) -> Self {
        self.actions.borrow_mut().push_back(answer);
        self
    }

    pub fn refused() -> ClientError {
        ClientError::Transport(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }

    pub fn malformed() -> ClientError {
        ClientError::Decode(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "expected value at line 1 column 1",
        )))
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.get()
    }

    pub fn posted(&self) -> Vec<String> {
        self.posted.borrow().clone()
    }
}

impl StatusSource for FakeClient {
    async fn fetch_status(&self) -> Result<StatusSnapshot, ClientError> {
        self.status_calls.set(self.status_calls.get() + 1);
        self.statuses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Self::refused()))
    }
}

impl ActionSink for FakeClient {
    async fn post_action(&self, endpoint: &ActionEndpoint) -> Result<u16, ClientError> {
        self.posted.borrow_mut().push(endpoint.path().to_string());
        self.actions.borrow_mut().pop_front().unwrap_or(Ok(200))
    }
}

/// Keeps every rendered state.
#[derive(Default)]
pub struct RecordingRenderer {
    rendered: RefCell<Vec<PanelState>>,
}

impl RecordingRenderer {
    pub fn rendered(&self) -> Vec<PanelState> {
        self.rendered.borrow().clone()
    }

    pub fn last(&self) -> Option<PanelState> {
        self.rendered.borrow().last().cloned()
    }
}

impl PanelRenderer for RecordingRenderer {
    fn render(&self, state: &PanelState) {
        self.rendered.borrow_mut().push(state.clone());
    }
}

/// Keeps every alert.
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
