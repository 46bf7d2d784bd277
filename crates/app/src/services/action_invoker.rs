//! Action invoker — fire one backend action from the panel.

use z407_domain::action::ActionEndpoint;
use z407_domain::panel::PanelState;

use crate::ports::{ActionSink, Notifier, PanelRenderer, StatusSource};
use crate::services::status_poller::StatusPoller;

/// What happened to one action call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The backend accepted the action.
    Completed,
    /// The backend accepted an input switch and the panel was refreshed.
    Refreshed(PanelState),
    /// The backend answered with a non-success status; the user was alerted.
    Rejected(u16),
    /// The request failed in transit; the user was alerted.
    Failed,
}

/// Posts actions and reports failures to the user.
///
/// Each call is independent: no retry, no ordering against other calls or
/// against polls, except that a successful `input-*` action is followed by
/// a poll of its own.
pub struct ActionInvoker<'a, C, R, N> {
    client: &'a C,
    notifier: &'a N,
    poller: StatusPoller<'a, C, R>,
}

impl<'a, C, R, N> ActionInvoker<'a, C, R, N>
where
    C: StatusSource + ActionSink,
    R: PanelRenderer,
    N: Notifier,
{
    pub fn new(client: &'a C, renderer: &'a R, notifier: &'a N) -> Self {
        Self {
            client,
            notifier,
            poller: StatusPoller::new(client, renderer),
        }
    }

    /// Post `endpoint` and handle the answer.
    #[tracing::instrument(skip(self, endpoint), fields(endpoint = %endpoint))]
    pub async fn call_action(&self, endpoint: &ActionEndpoint) -> ActionOutcome {
        match self.client.post_action(endpoint).await {
            Ok(status) if is_success(status) => {
                tracing::debug!(status, "action accepted");
                if endpoint.triggers_refresh() {
                    ActionOutcome::Refreshed(self.poller.check_status().await)
                } else {
                    ActionOutcome::Completed
                }
            }
            Ok(status) => {
                tracing::warn!(status, "action rejected");
                self.notifier
                    .alert(&format!("Error executing {endpoint}: {status}"));
                ActionOutcome::Rejected(status)
            }
            Err(err) => {
                tracing::warn!(%err, "action request failed");
                self.notifier
                    .alert(&format!("Failed to call {endpoint}: {err}"));
                ActionOutcome::Failed
            }
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
