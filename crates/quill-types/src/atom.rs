//! Type atoms: the members of a union type.

use std::fmt;
use std::sync::Arc;

/// A single type in a union.
///
/// Keyword atoms compare by variant; class atoms compare by their
/// fully-qualified name with the leading namespace separator removed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeAtom {
    Int,
    Float,
    String,
    Bool,
    True,
    False,
    Null,
    /// The universal type; anything casts to and from it.
    Any,
    Void,
    Array,
    Iterable,
    Callable,
    Object,
    Class(Arc<str>),
}

impl TypeAtom {
    /// Create a class atom, normalizing a leading `\`.
    pub fn class(name: &str) -> Self {
        TypeAtom::Class(Arc::from(name.trim_start_matches('\\')))
    }

    /// Resolve a keyword (case-insensitive), including common aliases.
    pub fn from_keyword(word: &str) -> Option<Self> {
        let atom = match word.to_ascii_lowercase().as_str() {
            "int" | "integer" => TypeAtom::Int,
            "float" | "double" => TypeAtom::Float,
            "string" => TypeAtom::String,
            "bool" | "boolean" => TypeAtom::Bool,
            "true" => TypeAtom::True,
            "false" => TypeAtom::False,
            "null" => TypeAtom::Null,
            "mixed" | "any" => TypeAtom::Any,
            "void" => TypeAtom::Void,
            "array" | "list" => TypeAtom::Array,
            "iterable" => TypeAtom::Iterable,
            "callable" => TypeAtom::Callable,
            "object" => TypeAtom::Object,
            _ => return None,
        };
        Some(atom)
    }

    /// Whether a value of this atom may be passed where `target` is expected.
    ///
    /// `Any` is handled at the union level; this only covers atom pairs.
    pub fn can_cast_to(&self, target: &TypeAtom) -> bool {
        if self == target {
            return true;
        }
        matches!(
            (self, target),
            (TypeAtom::Int, TypeAtom::Float)
                | (TypeAtom::True | TypeAtom::False, TypeAtom::Bool)
                | (TypeAtom::Bool, TypeAtom::True | TypeAtom::False)
                | (TypeAtom::Array, TypeAtom::Iterable)
                | (TypeAtom::Class(_), TypeAtom::Object)
                | (TypeAtom::String | TypeAtom::Array, TypeAtom::Callable)
        )
    }
}

impl fmt::Display for TypeAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TypeAtom::Int => "int",
            TypeAtom::Float => "float",
            TypeAtom::String => "string",
            TypeAtom::Bool => "bool",
            TypeAtom::True => "true",
            TypeAtom::False => "false",
            TypeAtom::Null => "null",
            TypeAtom::Any => "any",
            TypeAtom::Void => "void",
            TypeAtom::Array => "array",
            TypeAtom::Iterable => "iterable",
            TypeAtom::Callable => "callable",
            TypeAtom::Object => "object",
            TypeAtom::Class(name) => &**name,
        };
        f.write_str(text)
    }
}
