//! Panel state — what the control panel shows for one poll outcome.
//!
//! The panel has three display regions: the connection indicator, the
//! connection mode and the Bluetooth status. Their content is a pure function
//! of the latest poll outcome (see [`PanelState::from_outcome`]).

use std::fmt;

use crate::status::StatusSnapshot;

/// DOM id of the connection indicator.
pub const STATUS_INDICATOR_ID: &str = "status-indicator";
/// DOM id of the connection mode region.
pub const CONNECTION_MODE_ID: &str = "connection-mode";
/// DOM id of the Bluetooth status region.
pub const BLUETOOTH_STATUS_ID: &str = "bluetooth-status";

/// Text shown in a detail region when nothing is known.
pub const UNKNOWN_TEXT: &str = "unknown";

/// Fixed polling period of the panel, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 3000;

/// Overall connectivity as displayed by the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Connected,
    Disconnected,
    /// The poll itself failed.
    Error,
}

/// Visual class applied to the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorClass {
    Connected,
    Disconnected,
}

impl IndicatorClass {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
        }
    }

    /// The class that must be removed when this one is applied.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Connected => Self::Disconnected,
            Self::Disconnected => Self::Connected,
        }
    }
}

impl Indicator {
    /// Label written into the indicator.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
            Self::Error => "Error",
        }
    }

    /// Errors share the disconnected look; only the label tells them apart.
    #[must_use]
    pub fn class(self) -> IndicatorClass {
        match self {
            Self::Connected => IndicatorClass::Connected,
            Self::Disconnected | Self::Error => IndicatorClass::Disconnected,
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Content of a detail region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailField {
    /// A reported value, rendered in bold.
    Bold(String),
    /// The literal [`UNKNOWN_TEXT`], rendered plain.
    Unknown,
}

impl DetailField {
    fn reported(value: Option<&str>) -> Self {
        value.map_or(Self::Unknown, |v| Self::Bold(v.to_string()))
    }

    /// Plain text of the region, without markup.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Bold(value) => value,
            Self::Unknown => UNKNOWN_TEXT,
        }
    }

    #[must_use]
    pub fn is_bold(&self) -> bool {
        matches!(self, Self::Bold(_))
    }
}

/// Everything the panel displays after one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    pub indicator: Indicator,
    pub connection_mode: DetailField,
    pub bluetooth_status: DetailField,
}

impl PanelState {
    /// Render a successfully decoded snapshot.
    ///
    /// A connected snapshot missing a detail shows that detail as unknown.
    #[must_use]
    pub fn from_snapshot(snapshot: &StatusSnapshot) -> Self {
        if snapshot.is_connected() {
            Self {
                indicator: Indicator::Connected,
                connection_mode: DetailField::reported(snapshot.connection_mode.as_deref()),
                bluetooth_status: DetailField::reported(snapshot.bluetooth_status.as_deref()),
            }
        } else {
            Self::unknown(Indicator::Disconnected)
        }
    }

    /// Rendering for a failed poll.
    #[must_use]
    pub fn error() -> Self {
        Self::unknown(Indicator::Error)
    }

    /// Render any poll outcome; every error renders identically.
    #[must_use]
    pub fn from_outcome<E>(outcome: &Result<StatusSnapshot, E>) -> Self {
        match outcome {
            Ok(snapshot) => Self::from_snapshot(snapshot),
            Err(_) => Self::error(),
        }
    }

    fn unknown(indicator: Indicator) -> Self {
        Self {
            indicator,
            connection_mode: DetailField::Unknown,
            bluetooth_status: DetailField::Unknown,
        }
    }
}
