//! Structural data holders with value semantics.
//!
//! A value type is a named record whose fields are each either absent or present.
//! Equality is field-wise and deep; absent and present-but-empty are different
//! states. Hashing mixes the fields' [`FieldValue::stable_hash`] in declaration
//! order, so equal values hash equal on every run.
//!
//! Shapes are declared with [`value_type!`](crate::value_type).

use std::fmt;

use super::FieldValue;

/// A generated shape.
pub trait ValueType: FieldValue + Clone + Default + PartialEq + fmt::Debug + fmt::Display {
    /// Shape name as published by the service.
    const SHAPE_NAME: &'static str;

    /// Wire member names in declaration order.
    const FIELD_NAMES: &'static [&'static str];

    /// Wire names of the fields currently present, in declaration order.
    fn present_fields(&self) -> Vec<&'static str>;

    /// True when no field is present.
    fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }
}

/// Declares a value type.
///
/// Each field is written `name: kind(Type) = "WireName"` where `kind` is one of:
///
/// - `scalar` - a single value stored as `Option<Type>`
/// - `sensitive` - like `scalar`, but redacted from the `Display` rendering
/// - `list` - an ordered list stored as `Option<Vec<Type>>`
/// - `map` - string-keyed entries stored as `Option<BTreeMap<String, Type>>`
///
/// The macro generates the struct, getters, `set_*`/`with_*` methods, `append_*`
/// for lists, `add_*_entry`/`clear_*_entries` for maps, `PartialEq`/`Eq`, `Display`,
/// `Hash`, [`FieldValue`] and [`ValueType`] implementations, and serde derives using
/// the wire names.
///
/// Equality goes field by field through [`FieldValue::value_eq`], so it agrees with
/// the hash: a NaN field equals itself and `0.0` differs from `-0.0`.
///
/// The serde derives are emitted as `::serde::Serialize`/`::serde::Deserialize`, so
/// a crate invoking this macro must itself depend on `serde` with the `derive`
/// feature.
///
/// # Example
///
/// ```ignore
/// value_type! {
///     /// Caller ID settings for outbound calls.
///     pub struct OutboundCallerConfig {
///         outbound_caller_id_name: scalar(String) = "OutboundCallerIdName",
///         outbound_flow_id: scalar(String) = "OutboundFlowId",
///     }
/// }
/// ```
#[macro_export]
macro_rules! value_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $kind:ident ( $ty:ty ) = $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                $field: $crate::__value_field_type!($kind, $ty),
            )*
        }

        impl $name {
            /// Creates an instance with every field absent.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $crate::__value_field_accessors!($kind, $field, $ty, $wire);
            )*
        }

        impl $crate::domain::foundation::FieldValue for $name {
            fn stable_hash(&self) -> i32 {
                $crate::domain::foundation::ShapeHash::new()
                    $( .field(self.$field.as_ref()) )*
                    .finish()
            }

            fn value_eq(&self, other: &Self) -> bool {
                self == other
            }

            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }

        impl ::std::cmp::PartialEq for $name {
            #[allow(unused_variables)]
            fn eq(&self, other: &Self) -> bool {
                true $(
                    && $crate::domain::foundation::field_eq(
                        self.$field.as_ref(),
                        other.$field.as_ref(),
                    )
                )*
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #[allow(unused_mut)]
                let mut renderer = $crate::domain::foundation::ShapeRenderer::new(f);
                $(
                    $crate::__value_field_render!($kind, renderer, $wire, self.$field.as_ref());
                )*
                renderer.finish()
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_i32($crate::domain::foundation::FieldValue::stable_hash(self));
            }
        }

        impl $crate::domain::foundation::ValueType for $name {
            const SHAPE_NAME: &'static str = stringify!($name);

            const FIELD_NAMES: &'static [&'static str] = &[ $( $wire, )* ];

            fn present_fields(&self) -> ::std::vec::Vec<&'static str> {
                #[allow(unused_mut)]
                let mut present = ::std::vec::Vec::new();
                $(
                    if self.$field.is_some() {
                        present.push($wire);
                    }
                )*
                present
            }
        }
    };
}

/// Storage type for a field kind.
#[doc(hidden)]
#[macro_export]
macro_rules! __value_field_type {
    (scalar, $ty:ty) => {
        ::std::option::Option<$ty>
    };
    (sensitive, $ty:ty) => {
        ::std::option::Option<$ty>
    };
    (list, $ty:ty) => {
        ::std::option::Option<::std::vec::Vec<$ty>>
    };
    (map, $ty:ty) => {
        ::std::option::Option<::std::collections::BTreeMap<::std::string::String, $ty>>
    };
}

/// Rendering call for a field kind.
#[doc(hidden)]
#[macro_export]
macro_rules! __value_field_render {
    (sensitive, $renderer:ident, $wire:literal, $value:expr) => {
        $renderer.sensitive_field($wire, $value);
    };
    ($kind:ident, $renderer:ident, $wire:literal, $value:expr) => {
        $renderer.field($wire, $value);
    };
}

/// Accessor methods for a field kind.
#[doc(hidden)]
#[macro_export]
macro_rules! __value_field_accessors {
    (scalar, $field:ident, $ty:ty, $wire:literal) => {
        $crate::__value_scalar_accessors!($field, $ty, $wire);
    };
    (sensitive, $field:ident, $ty:ty, $wire:literal) => {
        $crate::__value_scalar_accessors!($field, $ty, $wire);
    };
    (list, $field:ident, $ty:ty, $wire:literal) => {
        $crate::__private::paste! {
            #[doc = concat!("Returns `", $wire, "`, if present.")]
            pub fn $field(&self) -> ::std::option::Option<&[$ty]> {
                self.$field.as_deref()
            }

            #[doc = concat!("Replaces `", $wire, "`; `None` makes it absent.")]
            pub fn [<set_ $field>](&mut self, values: ::std::option::Option<::std::vec::Vec<$ty>>) {
                self.$field = values;
            }

            #[doc = concat!("Replaces `", $wire, "` with the given items.")]
            pub fn [<with_ $field>]<I>(&mut self, values: I) -> &mut Self
            where
                I: ::std::iter::IntoIterator<Item = $ty>,
            {
                self.$field = ::std::option::Option::Some(values.into_iter().collect());
                self
            }

            #[doc = concat!("Appends to `", $wire, "`, creating the list if absent.")]
            pub fn [<append_ $field>]<I>(&mut self, values: I) -> &mut Self
            where
                I: ::std::iter::IntoIterator<Item = $ty>,
            {
                self.$field
                    .get_or_insert_with(::std::vec::Vec::new)
                    .extend(values);
                self
            }
        }
    };
    (map, $field:ident, $ty:ty, $wire:literal) => {
        $crate::__private::paste! {
            #[doc = concat!("Returns `", $wire, "`, if present.")]
            pub fn $field(
                &self,
            ) -> ::std::option::Option<&::std::collections::BTreeMap<::std::string::String, $ty>> {
                self.$field.as_ref()
            }

            #[doc = concat!("Replaces `", $wire, "`; `None` makes it absent.")]
            pub fn [<set_ $field>](
                &mut self,
                entries: ::std::option::Option<::std::collections::BTreeMap<::std::string::String, $ty>>,
            ) {
                self.$field = entries;
            }

            #[doc = concat!("Replaces `", $wire, "` with the given entries.")]
            pub fn [<with_ $field>]<I>(&mut self, entries: I) -> &mut Self
            where
                I: ::std::iter::IntoIterator<Item = (::std::string::String, $ty)>,
            {
                self.$field = ::std::option::Option::Some(entries.into_iter().collect());
                self
            }

            #[doc = concat!("Inserts one entry into `", $wire, "`, replacing an existing key.")]
            pub fn [<add_ $field _entry>](
                &mut self,
                key: impl ::std::convert::Into<::std::string::String>,
                value: $ty,
            ) -> &mut Self {
                self.$field
                    .get_or_insert_with(::std::collections::BTreeMap::new)
                    .insert(key.into(), value);
                self
            }

            #[doc = concat!("Makes `", $wire, "` absent.")]
            pub fn [<clear_ $field _entries>](&mut self) -> &mut Self {
                self.$field = ::std::option::Option::None;
                self
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __value_scalar_accessors {
    ($field:ident, $ty:ty, $wire:literal) => {
        $crate::__private::paste! {
            #[doc = concat!("Returns `", $wire, "`, if present.")]
            pub fn $field(&self) -> ::std::option::Option<&$ty> {
                self.$field.as_ref()
            }

            #[doc = concat!("Sets `", $wire, "`; `None` makes it absent.")]
            pub fn [<set_ $field>](&mut self, value: ::std::option::Option<$ty>) {
                self.$field = value;
            }

            #[doc = concat!("Sets `", $wire, "` and returns the same instance.")]
            pub fn [<with_ $field>](&mut self, value: impl ::std::convert::Into<$ty>) -> &mut Self {
                self.$field = ::std::option::Option::Some(value.into());
                self
            }
        }
    };
}
