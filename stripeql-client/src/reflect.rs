//! Runtime shape descriptions for resources and service methods
//!
//! Resources and services describe themselves through these types so that
//! callers can discover, at runtime, which fields a resource carries and which
//! methods a service exposes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Runtime kind of a resource struct field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Int64,
    Bool,
    Float64,
    /// A named non-primitive type such as `Currency` or `Address`
    Named(&'static str),
    Map,
    List,
    /// A reference to another resource that may be expanded in place
    Pointer(&'static str),
}

impl FieldKind {
    /// Name of the field's type. Composite kinds have no name.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Int64 => "int64",
            FieldKind::Bool => "bool",
            FieldKind::Float64 => "float64",
            FieldKind::Named(name) => name,
            FieldKind::Map | FieldKind::List | FieldKind::Pointer(_) => "",
        }
    }

    /// The scalar this kind projects to, if any
    pub fn scalar(&self) -> Option<ScalarKind> {
        ScalarKind::from_type_name(self.type_name())
    }
}

/// The four primitive kinds a field can be projected to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Int,
    Boolean,
    Float,
}

impl ScalarKind {
    /// Map a type name to a scalar. Only the four primitive names map.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(ScalarKind::String),
            "int64" => Some(ScalarKind::Int),
            "bool" => Some(ScalarKind::Boolean),
            "float64" => Some(ScalarKind::Float),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::String => "String",
            ScalarKind::Int => "Int",
            ScalarKind::Boolean => "Boolean",
            ScalarKind::Float => "Float",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A primitive field value read off a resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Int(i64),
    Boolean(bool),
    Float(f64),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::String(_) => ScalarKind::String,
            Scalar::Int(_) => ScalarKind::Int,
            Scalar::Boolean(_) => ScalarKind::Boolean,
            Scalar::Float(_) => ScalarKind::Float,
        }
    }
}

/// One field of a resource struct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldShape {
    /// Wire name of the field
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Static layout of a resource struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructShape {
    pub name: &'static str,
    pub fields: Vec<FieldShape>,
}

impl StructShape {
    pub fn field(&self, name: &str) -> Option<&FieldShape> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields whose kind maps to a scalar, in declaration order
    pub fn scalar_fields(&self) -> impl Iterator<Item = (&FieldShape, ScalarKind)> {
        self.fields
            .iter()
            .filter_map(|f| f.kind.scalar().map(|scalar| (f, scalar)))
    }
}

/// Types that can describe their own layout
pub trait Reflect {
    const NAME: &'static str;

    fn shape() -> &'static StructShape;
}

/// Object-safe read access to a fetched resource
pub trait Record: fmt::Debug + Send + Sync + 'static {
    fn record_shape(&self) -> &'static StructShape;

    /// Primitive value of `field`. `None` when the field is unknown, null, or
    /// not primitive.
    fn scalar(&self, field: &str) -> Option<Scalar>;
}

/// Field types usable inside a resource declaration
pub trait FieldType {
    const KIND: FieldKind;

    fn to_scalar(&self) -> Option<Scalar> {
        None
    }
}

impl FieldType for String {
    const KIND: FieldKind = FieldKind::String;

    fn to_scalar(&self) -> Option<Scalar> {
        Some(Scalar::String(self.clone()))
    }
}

impl FieldType for i64 {
    const KIND: FieldKind = FieldKind::Int64;

    fn to_scalar(&self) -> Option<Scalar> {
        Some(Scalar::Int(*self))
    }
}

impl FieldType for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn to_scalar(&self) -> Option<Scalar> {
        Some(Scalar::Boolean(*self))
    }
}

impl FieldType for f64 {
    const KIND: FieldKind = FieldKind::Float64;

    fn to_scalar(&self) -> Option<Scalar> {
        Some(Scalar::Float(*self))
    }
}

// Nullable fields keep the kind of their inner type
impl<T: FieldType> FieldType for Option<T> {
    const KIND: FieldKind = T::KIND;

    fn to_scalar(&self) -> Option<Scalar> {
        self.as_ref().and_then(FieldType::to_scalar)
    }
}

impl<T> FieldType for Vec<T> {
    const KIND: FieldKind = FieldKind::List;
}

impl<K, V> FieldType for HashMap<K, V> {
    const KIND: FieldKind = FieldKind::Map;
}

/// Method parameter kinds, receiver included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Receiver,
    Id,
    /// A params struct, named
    Params(&'static str),
}

/// Shape of a service method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub inputs: Vec<ParamKind>,
    /// Struct the method returns on success, when declared. Schema
    /// inference reads this before asking the handler.
    pub output: Option<&'static StructShape>,
}

impl Signature {
    /// Number of inputs, counting the receiver
    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    /// `(receiver, id, params)`
    pub fn is_get_by_id(&self) -> bool {
        matches!(
            self.inputs.as_slice(),
            [ParamKind::Receiver, ParamKind::Id, ParamKind::Params(_)]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_primitive_type_names_map() {
        assert_eq!(ScalarKind::from_type_name("string"), Some(ScalarKind::String));
        assert_eq!(ScalarKind::from_type_name("int64"), Some(ScalarKind::Int));
        assert_eq!(ScalarKind::from_type_name("bool"), Some(ScalarKind::Boolean));
        assert_eq!(ScalarKind::from_type_name("float64"), Some(ScalarKind::Float));

        assert_eq!(ScalarKind::from_type_name("Currency"), None);
        assert_eq!(ScalarKind::from_type_name("int32"), None);
        assert_eq!(ScalarKind::from_type_name(""), None);
    }

    #[test]
    fn test_composite_kinds_have_no_scalar() {
        assert_eq!(FieldKind::Map.scalar(), None);
        assert_eq!(FieldKind::List.scalar(), None);
        assert_eq!(FieldKind::Pointer("Customer").scalar(), None);
        assert_eq!(FieldKind::Named("Currency").scalar(), None);
        assert_eq!(FieldKind::Float64.scalar(), Some(ScalarKind::Float));
    }

    #[test]
    fn test_option_keeps_inner_kind() {
        assert_eq!(<Option<String> as FieldType>::KIND, FieldKind::String);
        assert_eq!(Some(5i64).to_scalar(), Some(Scalar::Int(5)));
        assert_eq!(None::<i64>.to_scalar(), None);
        assert_eq!(vec![1i64].to_scalar(), None);
    }

    #[test]
    fn test_get_by_id_signature() {
        let get = Signature {
            inputs: vec![ParamKind::Receiver, ParamKind::Id, ParamKind::Params("CustomerParams")],
            output: None,
        };
        assert_eq!(get.arity(), 3);
        assert!(get.is_get_by_id());

        let balance = Signature {
            inputs: vec![ParamKind::Receiver, ParamKind::Params("BalanceParams")],
            output: None,
        };
        assert_eq!(balance.arity(), 2);
        assert!(!balance.is_get_by_id());
    }
}
