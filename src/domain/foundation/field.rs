//! Per-field capabilities shared by strict enums and value types.
//!
//! Every value a shape can hold implements [`FieldValue`], which provides the two
//! things the generated shapes need from a field: a hash contribution that is stable
//! across runs and platforms, and a debug rendering of the value.

use std::collections::BTreeMap;
use std::fmt;

/// Multiplier used when mixing field hashes.
pub const HASH_PRIME: i32 = 31;

/// Seed every shape and list hash starts from.
pub const HASH_SEED: i32 = 1;

/// Placeholder rendered in place of sensitive field values.
pub const REDACTED: &str = "*** Sensitive Data Redacted ***";

/// A value that can be stored in a shape field.
pub trait FieldValue {
    /// Run-independent hash of this value.
    fn stable_hash(&self) -> i32;

    /// Value equality consistent with [`stable_hash`](FieldValue::stable_hash).
    fn value_eq(&self, other: &Self) -> bool;

    /// Writes the debug rendering of this value.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Compares two optional fields; absent equals only absent.
pub fn field_eq<T: FieldValue>(left: Option<&T>, right: Option<&T>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => left.value_eq(right),
        (None, None) => true,
        _ => false,
    }
}

impl FieldValue for String {
    /// Hashes the UTF-16 code units, `h = 31 * h + unit`.
    fn stable_hash(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(HASH_PRIME).wrapping_add(i32::from(unit)))
    }

    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl FieldValue for bool {
    fn stable_hash(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }

    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FieldValue for i32 {
    fn stable_hash(&self) -> i32 {
        *self
    }

    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FieldValue for i64 {
    fn stable_hash(&self) -> i32 {
        fold_u64(*self as u64)
    }

    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FieldValue for f64 {
    fn stable_hash(&self) -> i32 {
        fold_u64(canonical_bits(*self))
    }

    /// Bitwise after NaN canonicalization: NaN equals NaN, `0.0` differs from `-0.0`.
    fn value_eq(&self, other: &Self) -> bool {
        canonical_bits(*self) == canonical_bits(*other)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn stable_hash(&self) -> i32 {
        self.iter().fold(HASH_SEED, |h, item| {
            h.wrapping_mul(HASH_PRIME).wrapping_add(item.stable_hash())
        })
    }

    fn value_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|(left, right)| left.value_eq(right))
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<T: FieldValue> FieldValue for BTreeMap<String, T> {
    /// Order-independent: the wrapping sum of `key ^ value` per entry.
    fn stable_hash(&self) -> i32 {
        self.iter().fold(0i32, |h, (key, value)| {
            h.wrapping_add(key.stable_hash() ^ value.stable_hash())
        })
    }

    fn value_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|((lk, lv), (rk, rv))| lk == rk && lv.value_eq(rv))
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(key)?;
            f.write_str("=")?;
            value.render(f)?;
        }
        f.write_str("}")
    }
}

// All NaN payloads collapse to one pattern.
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

fn fold_u64(bits: u64) -> i32 {
    (bits ^ (bits >> 32)) as i32
}

/// Accumulates a shape hash field by field in declaration order.
///
/// Starts at [`HASH_SEED`]; each field contributes `h = 31 * h + field_hash`,
/// with absent fields contributing `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeHash(i32);

impl ShapeHash {
    /// Starts a new accumulation from the fixed seed.
    pub fn new() -> Self {
        Self(HASH_SEED)
    }

    /// Mixes in one field.
    pub fn field<T: FieldValue>(self, value: Option<&T>) -> Self {
        let contribution = value.map_or(0, FieldValue::stable_hash);
        Self(self.0.wrapping_mul(HASH_PRIME).wrapping_add(contribution))
    }

    /// Returns the accumulated hash.
    pub fn finish(self) -> i32 {
        self.0
    }
}

impl Default for ShapeHash {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes the `{Name: value,Other: value}` form of a shape.
///
/// Only present fields are written; absent fields leave no trace.
pub struct ShapeRenderer<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> ShapeRenderer<'a, 'b> {
    /// Opens the rendering.
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        Self {
            f,
            result,
            has_fields: false,
        }
    }

    /// Writes `name: value` when the field is present.
    pub fn field<T: FieldValue>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        if let Some(value) = value {
            self.result = self.result.and_then(|_| {
                Self::write_name(self.f, name, self.has_fields)?;
                value.render(self.f)
            });
            self.has_fields = true;
        }
        self
    }

    /// Writes `name: <redacted>` when the field is present.
    pub fn sensitive_field<T: FieldValue>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        if value.is_some() {
            self.result = self.result.and_then(|_| {
                Self::write_name(self.f, name, self.has_fields)?;
                self.f.write_str(REDACTED)
            });
            self.has_fields = true;
        }
        self
    }

    /// Closes the rendering and returns the first write error, if any.
    pub fn finish(&mut self) -> fmt::Result {
        self.result.and_then(|_| self.f.write_str("}"))
    }

    fn write_name(f: &mut fmt::Formatter<'_>, name: &str, separate: bool) -> fmt::Result {
        if separate {
            f.write_str(",")?;
        }
        f.write_str(name)?;
        f.write_str(": ")
    }
}
