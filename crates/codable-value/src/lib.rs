//! Serde adapter for opaque platform values (colors and images).
//!
//! Some value types cannot implement `Serialize`/`Deserialize` themselves,
//! usually because they are owned by a platform toolkit. [`CodableValue`]
//! wraps such a value, tags it with a [`Kind`], and dispatches encode/decode
//! to a per-kind platform adapter while handling optionality and decode
//! errors uniformly.
//!
//! The wire contract is fixed: a color crosses the boundary as a map with
//! exactly the keys `red`, `green`, `blue` and `alpha`, an image as an
//! optional byte sequence. Absence is always an explicit null, never a
//! zero-length sequence.
//!
//! ```
//! use codable_value::{CodableValue, Rgba};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Theme {
//!     accent: CodableValue<Rgba>,
//!     highlight: CodableValue<Option<Rgba>>,
//! }
//!
//! let theme = Theme {
//!     accent: CodableValue::new(Rgba::new(1.0, 0.0, 0.0, 1.0)),
//!     highlight: CodableValue::new(None),
//! };
//! let json = serde_json::to_string(&theme).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"accent":{"red":1.0,"green":0.0,"blue":0.0,"alpha":1.0},"highlight":null}"#
//! );
//! ```

mod color;
mod config;
mod error;
mod kind;
mod support;
mod value;
mod wire;

pub use color::Rgba;
pub use config::{EncodingConfig, ImageFormat, DEFAULT_JPEG_QUALITY};
pub use error::DecodeError;
pub use kind::Kind;
pub use support::{ColorValue, ImageValue, Supported};
pub use value::CodableValue;
pub use wire::{ColorChannels, Presence, WirePrimitive};
