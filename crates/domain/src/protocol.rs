//! Z407 GATT protocol — UUIDs, outgoing commands and incoming notifications.
//!
//! The speaker exposes one vendor service with two characteristics: commands
//! are written (without response) to [`COMMAND_CHAR`] and the speaker reports
//! back through notifications on [`RESPONSE_CHAR`]. Every frame is a handful of
//! raw bytes; this module only encodes and decodes them; no BLE dependency.

use std::fmt;

use crate::speaker::InputMode;

/// Vendor GATT service advertised by the Z407 control puck.
pub const SERVICE_UUID: uuid::Uuid =
    uuid::Uuid::from_u128(0x0000_fdc2_0000_1000_8000_0080_5f9b_34fb);

/// Characteristic commands are written to.
pub const COMMAND_CHAR: uuid::Uuid =
    uuid::Uuid::from_u128(0xc2e7_58b9_0e78_41e0_b0cb_98a5_9319_3fc5);

/// Characteristic the speaker notifies on.
pub const RESPONSE_CHAR: uuid::Uuid =
    uuid::Uuid::from_u128(0xb84a_c9c6_29c5_46d4_bba1_9d53_4784_330f);

/// A command frame sent to the speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Opens the control session right after subscribing (`84 05`).
    Handshake,
    /// Answers the speaker's handshake request (`84 00`).
    Acknowledge,
    VolumeUp,
    VolumeDown,
    PlayPause,
    /// Switch the active input.
    SelectInput(InputMode),
    /// Put the Bluetooth receiver into pairing mode.
    BluetoothPair,
    FactoryReset,
}

impl Command {
    /// Wire encoding of the command.
    #[must_use]
    pub fn to_bytes(self) -> [u8; 2] {
        match self {
            Self::Handshake => [0x84, 0x05],
            Self::Acknowledge => [0x84, 0x00],
            Self::VolumeUp => [0x80, 0x02],
            Self::VolumeDown => [0x80, 0x03],
            Self::PlayPause => [0x80, 0x04],
            Self::SelectInput(mode) => [0x81, mode.code()],
            Self::BluetoothPair => [0x82, 0x00],
            Self::FactoryReset => [0x83, 0x00],
        }
    }
}

/// A notification frame received from the speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The speaker asks for an [`Command::Acknowledge`] to finish the handshake.
    HandshakeRequested,
    /// The control session is being established.
    Connecting,
    /// The control session is up and the speaker reports its active input.
    Connected(InputMode),
    VolumeUpAcknowledged,
    VolumeDownAcknowledged,
    PlayPauseAcknowledged,
    /// An input switch was accepted; the change itself arrives as
    /// [`Notification::InputChanged`].
    InputSwitchAcknowledged(InputMode),
    /// A Bluetooth source paired with the speaker.
    BluetoothPaired,
    /// The Bluetooth source went away.
    BluetoothLost,
    /// The receiver entered pairing mode.
    PairingMode,
    /// The active input changed.
    InputChanged(InputMode),
    /// The speaker was factory reset.
    FactoryReset,
    /// Anything this module does not recognise.
    Unknown(Vec<u8>),
}

impl Notification {
    /// Decode a raw notification payload.
    ///
    /// Never fails: unrecognised frames come back as [`Notification::Unknown`]
    /// so the caller can log them.
    #[must_use]
    pub fn decode(data: &[u8]) -> Self {
        match data {
            [0xd4, 0x05, 0x01] => Self::HandshakeRequested,
            [0xcf, 0x0b] => Self::Connecting,
            [0xd4, 0x00, code] => InputMode::from_code(*code)
                .map_or_else(|| Self::Unknown(data.to_vec()), Self::Connected),
            [0xc0, 0x02] => Self::VolumeUpAcknowledged,
            [0xc0, 0x03] => Self::VolumeDownAcknowledged,
            [0xc0, 0x04] => Self::PlayPauseAcknowledged,
            [0xc1, code] => InputMode::from_code(*code)
                .map_or_else(|| Self::Unknown(data.to_vec()), Self::InputSwitchAcknowledged),
            [0xcf, 0x00] => Self::BluetoothPaired,
            [0xcf, 0x01] => Self::BluetoothLost,
            [0xc2, 0x00] => Self::PairingMode,
            [0xcf, 0x04] => Self::InputChanged(InputMode::Bluetooth),
            [0xcf, 0x05] => Self::InputChanged(InputMode::Aux),
            [0xcf, 0x06] => Self::InputChanged(InputMode::Usb),
            [0xc3, 0x00] => Self::FactoryReset,
            _ => Self::Unknown(data.to_vec()),
        }
    }
}

/// Hex rendering of a frame, e.g. `d4 05 01`.
pub struct HexFrame<'a>(pub &'a [u8]);

impl fmt::Display for HexFrame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, byte) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
