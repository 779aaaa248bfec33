//! Platform adapter traits and the capability that connects them to the
//! wrapper.
//!
//! A platform type participates in [`CodableValue`](crate::CodableValue) by
//! implementing the adapter trait for its kind ([`ColorValue`] or
//! [`ImageValue`]) together with [`Supported`], which pins the [`Kind`] and
//! forwards between the adapter and the wire primitive. `Option<T>` of any
//! supported type is itself supported and is the only way a value can accept
//! absence; the distinction is resolved at compile time, not by a runtime
//! flag.

use crate::config::{EncodingConfig, ImageFormat};
use crate::error::DecodeError;
use crate::kind::Kind;
use crate::wire::{ColorChannels, Presence, WirePrimitive};

/// Conversion capability of a platform color type.
///
/// Both directions are total: every color maps to four channels in
/// `[0.0, 1.0]` and every such channel set maps back to a color.
pub trait ColorValue: Sized {
    fn extract_channels(&self) -> ColorChannels;
    fn reconstruct(channels: ColorChannels) -> Self;
}

/// Conversion capability of a platform image type.
pub trait ImageValue: Sized {
    /// Encodes the raster into the given format. Returns `None` when the
    /// image holds no encodable raster state; the wrapper then writes an
    /// absent primitive instead of fabricating data.
    fn encode_raster(&self, format: ImageFormat, quality: f64) -> Option<Vec<u8>>;

    /// Reconstructs an image from encoded bytes. Returns `None` on malformed
    /// input.
    fn decode_raster(bytes: &[u8]) -> Option<Self>;
}

/// Types that [`CodableValue`](crate::CodableValue) can carry.
///
/// Concrete implementations forward to the kind's adapter trait, as in:
///
/// ```
/// use codable_value::{
///     ColorChannels, ColorValue, EncodingConfig, Kind, Supported, WirePrimitive,
/// };
///
/// struct Gray(f64);
///
/// impl ColorValue for Gray {
///     fn extract_channels(&self) -> ColorChannels {
///         ColorChannels { red: self.0, green: self.0, blue: self.0, alpha: 1.0 }
///     }
///     fn reconstruct(channels: ColorChannels) -> Self {
///         Gray(channels.red)
///     }
/// }
///
/// impl Supported for Gray {
///     const KIND: Kind = Kind::Color;
///     fn to_primitive(&self, _config: &EncodingConfig) -> WirePrimitive {
///         WirePrimitive::Channels(self.extract_channels())
///     }
///     fn from_primitive(primitive: WirePrimitive) -> Option<Self> {
///         primitive.into_channels().map(Self::reconstruct)
///     }
/// }
/// ```
pub trait Supported: Sized {
    /// The kind this type's adapter is registered for.
    const KIND: Kind;

    /// Forward conversion into the wire primitive. Reads nothing but the
    /// value and the supplied config.
    fn to_primitive(&self, config: &EncodingConfig) -> WirePrimitive;

    /// Backward conversion from a present primitive. `None` means the
    /// primitive's shape belongs to another kind or the adapter rejected the
    /// payload as malformed; the caller reports both as a type mismatch.
    fn from_primitive(primitive: WirePrimitive) -> Option<Self>;

    /// Optionality resolver. Non-optional types use this default: present
    /// data goes to [`Supported::from_primitive`], absence is an error.
    /// `Option<T>` overrides it to absorb absence as `None`.
    fn from_presence(presence: Presence) -> Result<Self, DecodeError> {
        match presence {
            Presence::Present(primitive) => Self::from_primitive(primitive)
                .ok_or_else(|| DecodeError::type_mismatch::<Self>(Self::KIND)),
            Presence::Absent => Err(DecodeError::missing_required::<Self>()),
        }
    }
}

impl<T: Supported> Supported for Option<T> {
    const KIND: Kind = T::KIND;

    fn to_primitive(&self, config: &EncodingConfig) -> WirePrimitive {
        match self {
            Some(value) => value.to_primitive(config),
            None => WirePrimitive::Absent,
        }
    }

    fn from_primitive(primitive: WirePrimitive) -> Option<Self> {
        T::from_primitive(primitive).map(Some)
    }

    fn from_presence(presence: Presence) -> Result<Self, DecodeError> {
        match presence {
            Presence::Absent => Ok(None),
            present => T::from_presence(present).map(Some),
        }
    }
}
