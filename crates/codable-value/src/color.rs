//! A plain four-channel color value.
//!
//! Color conversion needs no platform toolkit, so the crate ships this
//! reference implementation of the color adapter. Toolkit color types
//! implement [`ColorValue`] and [`Supported`] the same way.

use crate::config::EncodingConfig;
use crate::kind::Kind;
use crate::support::{ColorValue, Supported};
use crate::wire::{ColorChannels, WirePrimitive};

/// An RGBA color with channels in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    /// Builds a color, clamping each channel into `[0.0, 1.0]`.
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: red.clamp(0.0, 1.0),
            green: green.clamp(0.0, 1.0),
            blue: blue.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

impl ColorValue for Rgba {
    fn extract_channels(&self) -> ColorChannels {
        ColorChannels {
            red: self.red,
            green: self.green,
            blue: self.blue,
            alpha: self.alpha,
        }
    }

    fn reconstruct(channels: ColorChannels) -> Self {
        Self::new(channels.red, channels.green, channels.blue, channels.alpha)
    }
}

impl Supported for Rgba {
    const KIND: Kind = Kind::Color;

    fn to_primitive(&self, _config: &EncodingConfig) -> WirePrimitive {
        WirePrimitive::Channels(self.extract_channels())
    }

    fn from_primitive(primitive: WirePrimitive) -> Option<Self> {
        primitive.into_channels().map(Self::reconstruct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_channels() {
        let color = Rgba::new(1.5, -0.25, 0.5, 2.0);
        assert_eq!(color, Rgba::new(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_channels_round_trip() {
        let color = Rgba::new(0.25, 0.5, 0.75, 1.0);
        assert_eq!(Rgba::reconstruct(color.extract_channels()), color);
    }

    #[test]
    fn test_primitive_shape_is_channels() {
        let color = Rgba::new(0.1, 0.2, 0.3, 0.4);
        let primitive = color.to_primitive(&EncodingConfig::default());
        assert!(matches!(primitive, WirePrimitive::Channels(_)));
    }
}
