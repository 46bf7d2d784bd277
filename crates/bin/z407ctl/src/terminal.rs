//! Terminal render target and alerts.

use std::cell::RefCell;
use std::io::{Stdout, Write};

use chrono::{DateTime, Local};

use z407_app::ports::{Notifier, PanelRenderer};
use z407_domain::panel::PanelState;

/// Prints one line per status change.
pub struct TerminalRenderer<W> {
    out: RefCell<W>,
    last: RefCell<Option<PanelState>>,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            last: RefCell::new(None),
        }
    }
}

impl<W: Write> PanelRenderer for TerminalRenderer<W> {
    fn render(&self, state: &PanelState) {
        if self.last.borrow().as_ref() == Some(state) {
            return;
        }

        let line = format_line(state, Local::now());
        if let Err(err) = writeln!(self.out.borrow_mut(), "{line}") {
            tracing::warn!(%err, "failed to write status");
        }
        self.last.replace(Some(state.clone()));
    }
}

fn format_line(state: &PanelState, at: DateTime<Local>) -> String {
    format!(
        "[{}] {:<12} input: {:<12} bluetooth: {}",
        at.format("%H:%M:%S"),
        state.indicator.label(),
        state.connection_mode.text(),
        state.bluetooth_status.text(),
    )
}

/// Alerts go to stderr.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}
