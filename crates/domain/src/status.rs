//! Status snapshot — the body of `GET /status`.
//!
//! A snapshot lives for exactly one poll: it is decoded from the response,
//! rendered, and dropped.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Overall connectivity reported by the backend.
///
/// Only the literal `"connected"` means connected; any other value, or a
/// missing field, decodes as [`Disconnected`](Self::Disconnected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStatus {
    Connected,
    #[default]
    Disconnected,
}

impl LinkStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
        }
    }
}

impl Serialize for LinkStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LinkStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(serde_json::Value::String(s)) if s == "connected" => Self::Connected,
            _ => Self::Disconnected,
        })
    }
}

/// Decoded `GET /status` payload.
///
/// Any JSON value other than `null` decodes. Fields are read by name from an
/// object; arrays and primitives carry no fields, so they decode as an empty
/// (disconnected) snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatusSnapshot {
    pub status: LinkStatus,
    /// Active input description; meaningful only while connected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_mode: Option<String>,
    /// Bluetooth receiver description; meaningful only while connected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bluetooth_status: Option<String>,
}

impl<'de> Deserialize<'de> for StatusSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Null => return Err(D::Error::custom("expected a status body")),
            serde_json::Value::Object(fields) => fields,
            _ => return Ok(Self::default()),
        };

        let status = match fields.remove("status") {
            Some(value) => LinkStatus::deserialize(value).map_err(D::Error::custom)?,
            None => LinkStatus::Disconnected,
        };

        Ok(Self {
            status,
            connection_mode: text_field(&mut fields, "connection_mode"),
            bluetooth_status: text_field(&mut fields, "bluetooth_status"),
        })
    }
}

fn text_field(
    fields: &mut serde_json::Map<String, serde_json::Value>,
    key: &str,
) -> Option<String> {
    match fields.remove(key) {
        Some(serde_json::Value::String(value)) => Some(value),
        _ => None,
    }
}

impl StatusSnapshot {
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.status == LinkStatus::Connected
    }
}
