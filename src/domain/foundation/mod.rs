//! Foundation module - the generic model machinery.
//!
//! Contains the strict enum and value type contracts, the per-field hashing and
//! rendering they share, the timestamp field type and the parse error.

mod errors;
mod field;
mod strict_enum;
mod timestamp;
mod value_type;

pub use errors::InvalidValueError;
pub use field::{field_eq, FieldValue, ShapeHash, ShapeRenderer, HASH_PRIME, HASH_SEED, REDACTED};
pub use strict_enum::{build_lookup, StrictEnum};
pub use timestamp::Timestamp;
pub use value_type::ValueType;
