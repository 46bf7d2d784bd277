//! Status poller — one poll of the backend, rendered onto the panel.

use z407_domain::panel::PanelState;

use crate::ports::{PanelRenderer, StatusSource};

/// Fetches the backend status and renders it.
///
/// A poll never fails: every error renders the fixed error state. There is no
/// retry inside a poll; the cadence belongs to whoever drives the poller.
/// Overlapping polls are not coordinated; the last one to finish is what the
/// panel shows.
pub struct StatusPoller<'a, S, R> {
    source: &'a S,
    renderer: &'a R,
}

impl<'a, S: StatusSource, R: PanelRenderer> StatusPoller<'a, S, R> {
    pub fn new(source: &'a S, renderer: &'a R) -> Self {
        Self { source, renderer }
    }

    /// Run one poll and return what was rendered.
    #[tracing::instrument(skip(self))]
    pub async fn check_status(&self) -> PanelState {
        let outcome = self.source.fetch_status().await;
        if let Err(err) = &outcome {
            tracing::debug!(%err, "status poll failed");
        }

        let state = PanelState::from_outcome(&outcome);
        self.renderer.render(&state);
        tracing::trace!(indicator = %state.indicator, "panel rendered");
        state
    }
}
