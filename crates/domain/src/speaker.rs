//! Speaker state — what the backend knows about the Z407 from its notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::protocol::{Command, Notification};
use crate::status::{LinkStatus, StatusSnapshot};

/// Audio input selected on the speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Bluetooth,
    Aux,
    Usb,
}

impl InputMode {
    /// Every input, in protocol code order.
    pub const ALL: [Self; 3] = [Self::Bluetooth, Self::Aux, Self::Usb];

    /// Protocol byte identifying this input.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Bluetooth => 0x01,
            Self::Aux => 0x02,
            Self::Usb => 0x03,
        }
    }

    /// Inverse of [`code`](Self::code).
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }

    /// Lowercase name, as shown on the panel.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bluetooth => "bluetooth",
            Self::Aux => "aux",
            Self::Usb => "usb",
        }
    }
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of the speaker's Bluetooth receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BluetoothStatus {
    #[default]
    Unknown,
    Connected,
    Disconnected,
    Pairing,
}

impl BluetoothStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::Pairing => "pairing",
        }
    }
}

impl std::fmt::Display for BluetoothStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything learned from the speaker's notifications so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpeakerState {
    /// Active input, `None` until the speaker reports one.
    pub input: Option<InputMode>,
    pub bluetooth: BluetoothStatus,
    /// When a notification last changed this state.
    pub updated_at: Option<DateTime<Utc>>,
}

impl SpeakerState {
    /// Fold a notification into the state.
    ///
    /// Returns the command the speaker expects in reply, if any.
    pub fn apply(&mut self, notification: &Notification) -> Option<Command> {
        let before = (self.input, self.bluetooth);

        let reply = match notification {
            Notification::HandshakeRequested => Some(Command::Acknowledge),
            Notification::Connected(mode) | Notification::InputChanged(mode) => {
                self.input = Some(*mode);
                None
            }
            Notification::BluetoothPaired => {
                self.bluetooth = BluetoothStatus::Connected;
                None
            }
            Notification::BluetoothLost | Notification::FactoryReset => {
                self.bluetooth = BluetoothStatus::Disconnected;
                None
            }
            Notification::PairingMode => {
                self.bluetooth = BluetoothStatus::Pairing;
                None
            }
            Notification::Connecting
            | Notification::VolumeUpAcknowledged
            | Notification::VolumeDownAcknowledged
            | Notification::PlayPauseAcknowledged
            | Notification::InputSwitchAcknowledged(_)
            | Notification::Unknown(_) => None,
        };

        if before != (self.input, self.bluetooth) {
            self.updated_at = Some(Utc::now());
        }
        reply
    }

    /// Text shown for the connection mode: the input name, or
    /// `"disconnected"` before the speaker reported one.
    #[must_use]
    pub fn connection_mode(&self) -> &'static str {
        self.input.map_or("disconnected", InputMode::as_str)
    }

    /// Build the `GET /status` body.
    ///
    /// `link_up` is the state of the BLE link itself; the snapshot reports
    /// `connected` only while it holds.
    #[must_use]
    pub fn snapshot(&self, link_up: bool) -> StatusSnapshot {
        StatusSnapshot {
            status: if link_up {
                LinkStatus::Connected
            } else {
                LinkStatus::Disconnected
            },
            connection_mode: Some(self.connection_mode().to_string()),
            bluetooth_status: Some(self.bluetooth.to_string()),
        }
    }
}
