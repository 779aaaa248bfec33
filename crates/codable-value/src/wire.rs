//! Wire primitives: the only representations that cross the host
//! serialization boundary.

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Four-channel color mapping as it appears on the wire.
///
/// Serializes as a map with exactly the keys `red`, `green`, `blue` and
/// `alpha`. Unknown or missing keys fail the shaped read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorChannels {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

/// The single value written to the host container by one encode call.
///
/// `Absent` serializes as an explicit null. A zero-length byte sequence is a
/// present value, not absence.
#[derive(Debug, Clone, PartialEq)]
pub enum WirePrimitive {
    Channels(ColorChannels),
    Bytes(Vec<u8>),
    Absent,
}

impl WirePrimitive {
    pub fn into_channels(self) -> Option<ColorChannels> {
        match self {
            WirePrimitive::Channels(channels) => Some(channels),
            _ => None,
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            WirePrimitive::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl Serialize for WirePrimitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WirePrimitive::Channels(channels) => serializer.serialize_some(channels),
            WirePrimitive::Bytes(bytes) => serializer.serialize_some(bytes),
            WirePrimitive::Absent => serializer.serialize_none(),
        }
    }
}

/// Resolver input: what the host container reported for "is there a value at
/// this location".
#[derive(Debug, Clone, PartialEq)]
pub enum Presence {
    Present(WirePrimitive),
    Absent,
}

impl From<WirePrimitive> for Presence {
    fn from(primitive: WirePrimitive) -> Self {
        match primitive {
            WirePrimitive::Absent => Presence::Absent,
            present => Presence::Present(present),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_channels_wire_shape() {
        let channels = ColorChannels {
            red: 1.0,
            green: 0.0,
            blue: 0.0,
            alpha: 1.0,
        };
        let encoded = serde_json::to_value(WirePrimitive::Channels(channels)).unwrap();
        assert_eq!(
            encoded,
            json!({ "red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0 })
        );
    }

    #[test]
    fn test_channels_reject_unknown_keys() {
        let result: Result<ColorChannels, _> = serde_json::from_value(json!({
            "red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0, "gamma": 0.5
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_channels_reject_missing_keys() {
        let result: Result<ColorChannels, _> =
            serde_json::from_value(json!({ "red": 1.0, "green": 0.0, "blue": 0.0 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_absent_serializes_as_null() {
        let encoded = serde_json::to_value(WirePrimitive::Absent).unwrap();
        assert_eq!(encoded, json!(null));
    }

    #[test]
    fn test_empty_bytes_are_present_not_absent() {
        let encoded = serde_json::to_value(WirePrimitive::Bytes(Vec::new())).unwrap();
        assert_eq!(encoded, json!([]));
        assert_eq!(
            Presence::from(WirePrimitive::Bytes(Vec::new())),
            Presence::Present(WirePrimitive::Bytes(Vec::new()))
        );
    }

    #[test]
    fn test_presence_from_absorbs_absent_marker() {
        assert_eq!(Presence::from(WirePrimitive::Absent), Presence::Absent);
    }
}
