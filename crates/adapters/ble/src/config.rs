//! BLE adapter configuration.

use serde::Deserialize;

/// Configuration for discovering and connecting to the speaker.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BleConfig {
    /// How long to scan for the speaker at startup, in seconds.
    pub scan_duration_secs: u16,
    /// Upper bound for connecting and subscribing, in seconds.
    pub connect_timeout_secs: u16,
    /// Only accept the speaker with this address (e.g. `"C4:7C:8D:6A:12:34"`).
    ///
    /// When unset, the first device advertising the Z407 service is used.
    pub device_address: Option<String>,
}

impl BleConfig {
    /// Check whether a discovered address is acceptable.
    #[must_use]
    pub fn accepts(&self, address: &str) -> bool {
        self.device_address
            .as_deref()
            .is_none_or(|wanted| wanted.eq_ignore_ascii_case(address))
    }
}

impl Default for BleConfig {
    fn default() -> Self {
        Self {
            scan_duration_secs: 10,
            connect_timeout_secs: 10,
            device_address: None,
        }
    }
}
