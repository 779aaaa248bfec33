//! Decode error taxonomy.

use std::any::type_name;

use thiserror::Error;

use crate::kind::Kind;

/// Error surfaced by a failed decode.
///
/// Both variants are terminal for the decode call that raised them: no retry,
/// no partial result. Each carries the statically requested type name so a
/// message can be reconstructed without the call context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The wire data was present but could not be turned into the requested
    /// type, either because its shape belongs to another kind or because the
    /// platform adapter rejected it as malformed.
    #[error("mismatching types: cannot decode {kind} wire data as {requested}")]
    TypeMismatch {
        kind: Kind,
        requested: &'static str,
    },
    /// The wire data was absent but the requested type does not accept
    /// absence.
    #[error("no value present: cannot decode non-optional {requested}")]
    MissingRequiredValue { requested: &'static str },
}

impl DecodeError {
    pub(crate) fn type_mismatch<T>(kind: Kind) -> Self {
        Self::TypeMismatch {
            kind,
            requested: type_name::<T>(),
        }
    }

    pub(crate) fn missing_required<T>() -> Self {
        Self::MissingRequiredValue {
            requested: type_name::<T>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message_names_kind_and_type() {
        let err = DecodeError::type_mismatch::<u32>(Kind::Color);
        let message = err.to_string();
        assert!(message.contains("color"));
        assert!(message.contains("u32"));
    }

    #[test]
    fn test_missing_required_message_names_type() {
        let err = DecodeError::missing_required::<u32>();
        assert!(err.to_string().contains("non-optional u32"));
    }
}
