//! Panel context — the panel's collaborators, built once at startup.

use std::time::Duration;

use z407_domain::action::ActionEndpoint;
use z407_domain::panel::{POLL_INTERVAL_MS, PanelState};

use crate::ports::{ActionSink, Notifier, PanelRenderer, StatusSource};
use crate::services::action_invoker::{ActionInvoker, ActionOutcome};
use crate::services::status_poller::StatusPoller;

/// Owns the backend client, the render targets and the alert channel.
///
/// Both panel operations borrow from the same context, so a poll and an
/// action write to the same display; whichever finishes last wins. The
/// repeating timer is owned by the host (browser or CLI), which drives
/// [`check_status`](Self::check_status) every [`poll_interval`](Self::poll_interval).
pub struct PanelContext<C, R, N> {
    client: C,
    renderer: R,
    notifier: N,
}

impl<C, R, N> PanelContext<C, R, N>
where
    C: StatusSource + ActionSink,
    R: PanelRenderer,
    N: Notifier,
{
    pub fn new(client: C, renderer: R, notifier: N) -> Self {
        Self {
            client,
            renderer,
            notifier,
        }
    }

    /// Fixed polling period.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(POLL_INTERVAL_MS))
    }

    pub fn poller(&self) -> StatusPoller<'_, C, R> {
        StatusPoller::new(&self.client, &self.renderer)
    }

    pub fn invoker(&self) -> ActionInvoker<'_, C, R, N> {
        ActionInvoker::new(&self.client, &self.renderer, &self.notifier)
    }

    /// Poll the backend once and render the result.
    pub async fn check_status(&self) -> PanelState {
        self.poller().check_status().await
    }

    /// Fire one action.
    pub async fn call_action(&self, endpoint: &ActionEndpoint) -> ActionOutcome {
        self.invoker().call_action(endpoint).await
    }

    /// Alert the user directly, e.g. when a button handler hands over an
    /// endpoint that cannot be parsed.
    pub fn alert(&self, message: &str) {
        self.notifier.alert(message);
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
