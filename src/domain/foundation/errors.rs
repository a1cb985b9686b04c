//! Error raised by strict enum parsing.

use thiserror::Error;

/// A wire string that does not name any variant of a strict enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidValueError {
    #[error("{enum_name} value cannot be null or empty")]
    Empty { enum_name: &'static str },

    #[error("Cannot create {enum_name} from value '{value}'")]
    Unknown {
        enum_name: &'static str,
        value: String,
    },
}

impl InvalidValueError {
    /// Creates an error for null or empty input.
    pub fn empty(enum_name: &'static str) -> Self {
        InvalidValueError::Empty { enum_name }
    }

    /// Creates an error for input matching no wire value.
    pub fn unknown(enum_name: &'static str, value: impl Into<String>) -> Self {
        InvalidValueError::Unknown {
            enum_name,
            value: value.into(),
        }
    }

    /// Name of the enum that rejected the input.
    pub fn enum_name(&self) -> &'static str {
        match self {
            InvalidValueError::Empty { enum_name } | InvalidValueError::Unknown { enum_name, .. } => {
                enum_name
            }
        }
    }

    /// The offending input, when there was one.
    pub fn value(&self) -> Option<&str> {
        match self {
            InvalidValueError::Empty { .. } => None,
            InvalidValueError::Unknown { value, .. } => Some(value),
        }
    }
}
