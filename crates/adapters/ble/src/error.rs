//! BLE adapter error types.

use z407_domain::error::RemoteError;

/// Errors specific to the BLE adapter.
#[derive(Debug, thiserror::Error)]
pub enum BleError {
    /// No BLE adapter found on the host.
    #[error("no BLE adapter available")]
    NotAvailable,

    /// The scan finished without seeing a speaker.
    #[error("no Z407 speaker found")]
    NotFound,

    /// Connecting and subscribing took longer than the configured timeout.
    #[error("timed out connecting to the speaker")]
    Timeout,

    /// BLE scan or adapter operation failed.
    #[error("BLE error")]
    Scan(#[from] btleplug::Error),

    /// Failed to connect to the speaker.
    #[error("failed to connect to the speaker")]
    GattConnect(#[source] btleplug::Error),

    /// The speaker does not expose a required characteristic.
    #[error("characteristic {uuid} not found")]
    CharacteristicNotFound {
        /// The characteristic that was looked up.
        uuid: uuid::Uuid,
    },
}

impl BleError {
    /// Convert into a [`RemoteError::Device`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> RemoteError {
        RemoteError::Device(Box::new(self))
    }
}

impl From<BleError> for RemoteError {
    fn from(err: BleError) -> Self {
        err.into_domain()
    }
}
