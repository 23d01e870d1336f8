//! Resource objects returned by the payment API
//!
//! Every resource is declared through [`resource!`], which generates the serde
//! struct together with its [`Reflect`] shape and [`Record`] accessor. Field
//! order in the declaration is the order reported by the shape.

use crate::reflect::{FieldKind, FieldType, Record, Reflect};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Declare a resource struct along with its runtime shape.
///
/// Field types must implement [`FieldType`]. Raw identifiers such as `r#type`
/// keep their unprefixed wire name. A missing field and an explicit `null`
/// both decode to the field type's default.
macro_rules! resource {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(deserialize_with = "crate::resources::null_as_default")]
                pub $field: $ty,
            )*
        }

        impl $crate::reflect::Reflect for $name {
            const NAME: &'static str = stringify!($name);

            fn shape() -> &'static $crate::reflect::StructShape {
                static SHAPE: once_cell::sync::Lazy<$crate::reflect::StructShape> =
                    once_cell::sync::Lazy::new(|| $crate::reflect::StructShape {
                        name: stringify!($name),
                        fields: vec![
                            $(
                                $crate::reflect::FieldShape {
                                    name: $crate::resources::wire_name(stringify!($field)),
                                    kind: <$ty as $crate::reflect::FieldType>::KIND,
                                },
                            )*
                        ],
                    });
                &SHAPE
            }
        }

        impl $crate::reflect::Record for $name {
            fn record_shape(&self) -> &'static $crate::reflect::StructShape {
                <Self as $crate::reflect::Reflect>::shape()
            }

            #[allow(unused_variables)]
            fn scalar(&self, field: &str) -> Option<$crate::reflect::Scalar> {
                $(
                    if field == $crate::resources::wire_name(stringify!($field)) {
                        return $crate::reflect::FieldType::to_scalar(&self.$field);
                    }
                )*
                None
            }
        }

        // Embedded by value inside other resources
        impl $crate::reflect::FieldType for $name {
            const KIND: $crate::reflect::FieldKind =
                $crate::reflect::FieldKind::Named(stringify!($name));
        }
    };
}

/// Declare named string types. They are never projected as scalars.
macro_rules! named_string {
    ($( $(#[$meta:meta])* $name:ident ),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(pub String);

            impl $name {
                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl FieldType for $name {
                const KIND: FieldKind = FieldKind::Named(stringify!($name));
            }
        )*
    };
}

pub mod billing;
pub mod connect;
pub mod charges;
pub mod payments;

pub use self::billing::*;
pub use self::connect::*;
pub use self::charges::*;
pub use self::payments::*;

/// Free-form key/value pairs attached to most resources
pub type Metadata = HashMap<String, String>;

named_string! {
    /// Three-letter ISO currency code
    Currency,
    ChargeStatus,
    DisputeStatus,
    InvoiceStatus,
    PaymentIntentStatus,
    SubscriptionStatus,
    TaxExempt,
}

/// A reference to another resource: its id, or the object itself when expanded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(String),
    Object(Box<T>),
}

impl<T: Record> Expandable<T> {
    pub fn id(&self) -> Option<String> {
        match self {
            Expandable::Id(id) => Some(id.clone()),
            Expandable::Object(object) => match object.scalar("id") {
                Some(crate::reflect::Scalar::String(id)) => Some(id),
                _ => None,
            },
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, Expandable::Object(_))
    }
}

impl<T> Default for Expandable<T> {
    fn default() -> Self {
        Expandable::Id(String::new())
    }
}

impl<T: Reflect> FieldType for Expandable<T> {
    const KIND: FieldKind = FieldKind::Pointer(T::NAME);
}

// Untyped payloads such as event data
impl FieldType for serde_json::Value {
    const KIND: FieldKind = FieldKind::Map;
}

/// Decode a field, reading `null` as the type's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Strip the raw identifier prefix from a field name
pub(crate) fn wire_name(ident: &'static str) -> &'static str {
    ident.strip_prefix("r#").unwrap_or(ident)
}
