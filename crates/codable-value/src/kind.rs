//! Closed registry of the value categories the adapter can carry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag identifying which opaque value category a wrapper holds.
///
/// The tag is a runtime attribute of the wrapper, not of the wrapped value's
/// static type; a wrapper whose tag disagrees with the wire data it is asked
/// to decode fails with [`DecodeError::TypeMismatch`](crate::DecodeError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Color,
    Image,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Color => f.write_str("color"),
            Kind::Image => f.write_str("image"),
        }
    }
}
