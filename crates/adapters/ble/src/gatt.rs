//! GATT helpers for the speaker's control service.

use btleplug::api::{Characteristic, Peripheral as _, WriteType};
use btleplug::platform::Peripheral;

use z407_domain::protocol::{Command, HexFrame};

use crate::error::BleError;

/// Find a GATT characteristic by UUID on a peripheral that has already
/// discovered its services.
///
/// # Errors
///
/// Returns [`BleError::CharacteristicNotFound`] if no characteristic with
/// the given UUID is present.
pub(crate) fn find_characteristic(
    peripheral: &Peripheral,
    uuid: uuid::Uuid,
) -> Result<Characteristic, BleError> {
    peripheral
        .characteristics()
        .into_iter()
        .find(|c| c.uuid == uuid)
        .ok_or(BleError::CharacteristicNotFound { uuid })
}

/// Write one command frame. The speaker never acknowledges at the GATT
/// level; replies come back as notifications.
///
/// # Errors
///
/// Returns [`BleError::Scan`] when the write fails.
pub(crate) async fn write_command(
    peripheral: &Peripheral,
    command_char: &Characteristic,
    command: Command,
) -> Result<(), BleError> {
    let frame = command.to_bytes();
    tracing::debug!(?command, frame = %HexFrame(&frame), "writing command");
    peripheral
        .write(command_char, &frame, WriteType::WithoutResponse)
        .await?;
    Ok(())
}
