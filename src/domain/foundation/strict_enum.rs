//! Closed-set, string-backed enumerations.
//!
//! A strict enum maps each variant to exactly one wire string and parses only those
//! exact strings back. There is no case folding and no catch-all variant: a value the
//! client does not know about is an error, so schema drift surfaces immediately.
//!
//! Enums are declared with [`strict_enum!`](crate::strict_enum), which generates the
//! enum, its [`StrictEnum`] implementation and the usual conversions.

use std::collections::HashMap;

use super::InvalidValueError;

/// A closed set of variants identified by their wire strings.
pub trait StrictEnum: Sized + Copy + 'static {
    /// Name used in diagnostics.
    const NAME: &'static str;

    /// The fixed wire string for this variant.
    fn wire_value(&self) -> &'static str;

    /// Every variant, in declaration order.
    fn values() -> &'static [Self];

    /// Wire string to variant table, built on first use and never modified.
    fn lookup() -> &'static HashMap<&'static str, Self>;

    /// Parses an exact wire string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValueError` if the input is empty or matches no variant.
    fn parse(value: &str) -> Result<Self, InvalidValueError> {
        if value.is_empty() {
            tracing::debug!(enum_name = Self::NAME, "rejected empty enum value");
            return Err(InvalidValueError::empty(Self::NAME));
        }
        match Self::lookup().get(value) {
            Some(variant) => Ok(*variant),
            None => {
                tracing::debug!(enum_name = Self::NAME, value, "rejected unknown enum value");
                Err(InvalidValueError::unknown(Self::NAME, value))
            }
        }
    }

    /// Parses a possibly missing wire string; `None` is rejected like empty input.
    fn parse_optional(value: Option<&str>) -> Result<Self, InvalidValueError> {
        match value {
            Some(value) => Self::parse(value),
            None => {
                tracing::debug!(enum_name = Self::NAME, "rejected missing enum value");
                Err(InvalidValueError::empty(Self::NAME))
            }
        }
    }
}

/// Builds the wire lookup table for an enum.
///
/// # Panics
///
/// Panics if two variants share a wire string; the declaration itself is wrong.
pub fn build_lookup<E: StrictEnum>() -> HashMap<&'static str, E> {
    let mut table = HashMap::with_capacity(E::values().len());
    for variant in E::values() {
        let previous = table.insert(variant.wire_value(), *variant);
        assert!(
            previous.is_none(),
            "duplicate wire value '{}' in {}",
            variant.wire_value(),
            E::NAME
        );
    }
    tracing::trace!(enum_name = E::NAME, variants = table.len(), "built enum lookup table");
    table
}

/// Declares a strict enum.
///
/// Generates the enum (`Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`), its
/// [`StrictEnum`] implementation backed by a lazily built lookup table, an inherent
/// `as_str`, `Display`, `FromStr`, `TryFrom<&str>`, serde impls that go through the
/// strict parse, and [`FieldValue`](crate::domain::foundation::FieldValue) so the enum
/// can be stored in value types.
///
/// # Example
///
/// ```ignore
/// strict_enum! {
///     /// Queue availability.
///     pub enum QueueStatus {
///         Enabled = "ENABLED",
///         Disabled = "DISABLED",
///     }
/// }
/// ```
#[macro_export]
macro_rules! strict_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::domain::foundation::StrictEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn wire_value(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }

            fn values() -> &'static [Self] {
                &[ $( $name::$variant, )+ ]
            }

            fn lookup() -> &'static ::std::collections::HashMap<&'static str, Self> {
                static TABLE: $crate::__private::Lazy<::std::collections::HashMap<&'static str, $name>> =
                    $crate::__private::Lazy::new($crate::domain::foundation::build_lookup::<$name>);
                &TABLE
            }
        }

        impl $name {
            /// Returns the wire string for this variant.
            pub fn as_str(&self) -> &'static str {
                <Self as $crate::domain::foundation::StrictEnum>::wire_value(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::foundation::InvalidValueError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::domain::foundation::StrictEnum>::parse(s)
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::domain::foundation::InvalidValueError;

            fn try_from(value: &str) -> ::std::result::Result<Self, Self::Error> {
                <Self as $crate::domain::foundation::StrictEnum>::parse(value)
            }
        }

        impl $crate::domain::foundation::FieldValue for $name {
            fn stable_hash(&self) -> i32 {
                $crate::domain::foundation::FieldValue::stable_hash(&self.as_str().to_string())
            }

            fn value_eq(&self, other: &Self) -> bool {
                self == other
            }

            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::domain::foundation::StrictEnum>::parse(&raw)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::FieldValue;

    crate::strict_enum! {
        /// Fixture enum for the parse contract.
        enum Signal {
            Green = "GREEN",
            Amber = "AMBER",
            Red = "RED",
        }
    }

    #[test]
    fn wire_values_round_trip() {
        for variant in Signal::values() {
            assert_eq!(Signal::parse(variant.wire_value()), Ok(*variant));
        }
    }

    #[test]
    fn values_keep_declaration_order() {
        assert_eq!(Signal::values(), &[Signal::Green, Signal::Amber, Signal::Red]);
    }

    #[test]
    fn lookup_table_covers_every_variant() {
        assert_eq!(Signal::lookup().len(), Signal::values().len());
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(Signal::parse(""), Err(InvalidValueError::empty("Signal")));
    }

    #[test]
    fn parse_optional_rejects_missing_input() {
        assert_eq!(Signal::parse_optional(None), Err(InvalidValueError::empty("Signal")));
        assert_eq!(Signal::parse_optional(Some("RED")), Ok(Signal::Red));
    }

    #[test]
    fn parse_is_case_sensitive() {
        let err = Signal::parse("green").unwrap_err();
        assert_eq!(err.value(), Some("green"));
    }

    #[test]
    fn parse_rejects_surrounding_whitespace() {
        assert!(Signal::parse(" RED").is_err());
        assert!(Signal::parse("RED ").is_err());
    }

    #[test]
    fn parse_rejects_unknown_value() {
        assert_eq!(
            Signal::parse("NOT_A_REAL_VALUE"),
            Err(InvalidValueError::unknown("Signal", "NOT_A_REAL_VALUE"))
        );
    }

    #[test]
    fn display_and_from_str_use_wire_value() {
        assert_eq!(Signal::Amber.to_string(), "AMBER");
        assert_eq!("AMBER".parse::<Signal>(), Ok(Signal::Amber));
        assert_eq!(Signal::try_from("RED"), Ok(Signal::Red));
    }

    #[test]
    fn hash_is_the_wire_string_hash() {
        assert_eq!(Signal::Red.stable_hash(), "RED".to_string().stable_hash());
    }

    #[test]
    fn serde_goes_through_strict_parse() {
        assert_eq!(serde_json::to_string(&Signal::Green).unwrap(), "\"GREEN\"");
        let parsed: Signal = serde_json::from_str("\"AMBER\"").unwrap();
        assert_eq!(parsed, Signal::Amber);
        assert!(serde_json::from_str::<Signal>("\"amber\"").is_err());
        assert!(serde_json::from_str::<Signal>("\"\"").is_err());
    }

    #[test]
    #[should_panic(expected = "duplicate wire value")]
    fn duplicate_wire_values_are_rejected() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        enum Twin {
            Left,
            Right,
        }

        impl StrictEnum for Twin {
            const NAME: &'static str = "Twin";

            fn wire_value(&self) -> &'static str {
                "SAME"
            }

            fn values() -> &'static [Self] {
                &[Twin::Left, Twin::Right]
            }

            fn lookup() -> &'static HashMap<&'static str, Self> {
                unreachable!("table is built directly in this test")
            }
        }

        let _ = build_lookup::<Twin>();
    }
}
