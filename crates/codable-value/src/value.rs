//! The generic value wrapper.

use std::hash::{Hash, Hasher};

use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::config::EncodingConfig;
use crate::error::DecodeError;
use crate::kind::Kind;
use crate::support::Supported;
use crate::wire::{ColorChannels, Presence, WirePrimitive};

/// Adapter that gives a platform value serde participation.
///
/// The wrapper owns its value and config, is constructed once and consumed by
/// a single encode or decode. Equality and hashing delegate to the value and
/// ignore the config: two wrappers holding equal values compare equal even
/// with different encoding settings.
#[derive(Debug, Clone)]
pub struct CodableValue<T: Supported> {
    pub value: T,
    config: EncodingConfig,
}

impl<T: Supported> CodableValue<T> {
    /// Wraps a value with the default encoding configuration.
    pub fn new(value: T) -> Self {
        Self::with_config(value, EncodingConfig::default())
    }

    /// Wraps a value with an explicit configuration. Only meaningful for
    /// image kinds; color encoding has no parameters.
    pub fn with_config(value: T, config: EncodingConfig) -> Self {
        Self { value, config }
    }

    /// The kind this wrapper dispatches on.
    pub fn kind(&self) -> Kind {
        T::KIND
    }

    pub fn config(&self) -> EncodingConfig {
        self.config
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Forward conversion: asks the platform adapter for the wire primitive.
    /// No side effects beyond reading the value.
    pub fn encode_primitive(&self) -> WirePrimitive {
        self.value.to_primitive(&self.config)
    }

    /// Backward conversion from a resolved presence state. Present data that
    /// the adapter cannot use is a [`DecodeError::TypeMismatch`]; absence is
    /// `Ok(None)` exactly when `T` is an `Option`, otherwise
    /// [`DecodeError::MissingRequiredValue`].
    pub fn decode_presence(presence: Presence) -> Result<T, DecodeError> {
        T::from_presence(presence)
    }
}

impl<T: Supported + PartialEq> PartialEq for CodableValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Supported + Eq> Eq for CodableValue<T> {}

impl<T: Supported + Hash> Hash for CodableValue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: Supported> Serialize for CodableValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode_primitive().serialize(serializer)
    }
}

impl<'de, T: Supported> Deserialize<'de> for CodableValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Shaped read per kind: an explicit null resolves to Absent, a value
        // of the wrong shape is a type mismatch, never silent absence.
        let presence = match T::KIND {
            Kind::Color => match Option::<ColorChannels>::deserialize(deserializer) {
                Ok(Some(channels)) => Presence::Present(WirePrimitive::Channels(channels)),
                Ok(None) => Presence::Absent,
                Err(_) => {
                    return Err(D::Error::custom(DecodeError::type_mismatch::<T>(T::KIND)))
                }
            },
            Kind::Image => match Option::<Vec<u8>>::deserialize(deserializer) {
                Ok(Some(bytes)) => Presence::Present(WirePrimitive::Bytes(bytes)),
                Ok(None) => Presence::Absent,
                Err(_) => {
                    return Err(D::Error::custom(DecodeError::type_mismatch::<T>(T::KIND)))
                }
            },
        };
        let value = T::from_presence(presence).map_err(D::Error::custom)?;
        Ok(Self::new(value))
    }
}
