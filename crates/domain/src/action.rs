//! Actions — one-shot commands triggered with `POST /<endpoint>`.
//!
//! [`Action`] is the backend's closed set of routes. [`ActionEndpoint`] is the
//! panel's view: any caller-supplied path, which the backend may or may not
//! know about.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::protocol::Command;
use crate::speaker::InputMode;

/// Endpoints starting with this prefix change the input and are followed by
/// a status refresh on the panel.
pub const INPUT_PREFIX: &str = "input-";

/// A backend action route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    VolumeUp,
    VolumeDown,
    PlayPause,
    Input(InputMode),
    BluetoothPair,
    FactoryReset,
}

impl Action {
    /// Every route the backend serves.
    pub const ALL: [Self; 8] = [
        Self::VolumeUp,
        Self::VolumeDown,
        Self::PlayPause,
        Self::Input(InputMode::Bluetooth),
        Self::Input(InputMode::Aux),
        Self::Input(InputMode::Usb),
        Self::BluetoothPair,
        Self::FactoryReset,
    ];

    /// Route segment, without the leading `/`.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::VolumeUp => "volume-up",
            Self::VolumeDown => "volume-down",
            Self::PlayPause => "play-pause",
            Self::Input(InputMode::Bluetooth) => "input-bluetooth",
            Self::Input(InputMode::Aux) => "input-aux",
            Self::Input(InputMode::Usb) => "input-usb",
            Self::BluetoothPair => "bluetooth-pair",
            Self::FactoryReset => "factory-reset",
        }
    }

    /// Command written to the speaker for this action.
    #[must_use]
    pub fn command(self) -> Command {
        match self {
            Self::VolumeUp => Command::VolumeUp,
            Self::VolumeDown => Command::VolumeDown,
            Self::PlayPause => Command::PlayPause,
            Self::Input(mode) => Command::SelectInput(mode),
            Self::BluetoothPair => Command::BluetoothPair,
            Self::FactoryReset => Command::FactoryReset,
        }
    }

    /// Text returned to the caller once the command was sent.
    #[must_use]
    pub fn confirmation(self) -> &'static str {
        match self {
            Self::VolumeUp => "volume up",
            Self::VolumeDown => "volume down",
            Self::PlayPause => "toggled play/pause",
            Self::Input(InputMode::Bluetooth) => "switched to bluetooth",
            Self::Input(InputMode::Aux) => "switched to aux",
            Self::Input(InputMode::Usb) => "switched to usb",
            Self::BluetoothPair => "pairing mode",
            Self::FactoryReset => "factory reset",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

impl FromStr for Action {
    type Err = ValidationError;

    /// Accepts the endpoint with or without its leading `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix('/').unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|action| action.endpoint() == name)
            .ok_or_else(|| ValidationError::UnknownAction(name.to_string()))
    }
}

/// A caller-supplied action path, as the panel sends it.
///
/// Stored with a leading `/` so it can be appended to a base URL and shown in
/// alerts exactly as the caller wrote it (`/reboot`, `/input-aux`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionEndpoint(String);

impl ActionEndpoint {
    /// Parse a caller-supplied endpoint (`input-aux` or `/input-aux`).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyEndpoint`] for an empty path.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref().trim();
        let name = raw.strip_prefix('/').unwrap_or(raw);
        if name.is_empty() {
            return Err(ValidationError::EmptyEndpoint);
        }
        Ok(Self(format!("/{name}")))
    }

    /// Path with its leading `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }

    /// Whether a successful call should be followed by a status refresh.
    #[must_use]
    pub fn triggers_refresh(&self) -> bool {
        self.0[1..].starts_with(INPUT_PREFIX)
    }
}

impl From<Action> for ActionEndpoint {
    fn from(action: Action) -> Self {
        Self(format!("/{}", action.endpoint()))
    }
}

impl fmt::Display for ActionEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
