//! Parameter descriptors.

use quill_types::{TypeAtom, UnionType};
use std::fmt;

/// A declared parameter.
///
/// For a variadic parameter `union_type` is the element type: `...xs: int`
/// stores `int`, and every caller-side argument it absorbs is checked
/// against that type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    union_type: UnionType,
    is_variadic: bool,
    default_value_type: Option<UnionType>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, union_type: UnionType) -> Self {
        Parameter {
            name: name.into(),
            union_type,
            is_variadic: false,
            default_value_type: None,
        }
    }

    /// A parameter with no declared type.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self::new(name, UnionType::empty())
    }

    /// A trailing parameter collecting the remaining arguments.
    pub fn variadic(name: impl Into<String>, element_type: UnionType) -> Self {
        Parameter {
            is_variadic: true,
            ..Self::new(name, element_type)
        }
    }

    /// Attach the inferred type of the parameter's default value.
    #[must_use]
    pub fn with_default(mut self, default_value_type: UnionType) -> Self {
        self.default_value_type = Some(default_value_type);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn union_type(&self) -> &UnionType {
        &self.union_type
    }

    pub fn set_union_type(&mut self, union_type: UnionType) {
        self.union_type = union_type;
    }

    pub fn add_union_type(&mut self, union_type: &UnionType) {
        self.union_type.add_union_type(union_type);
    }

    pub fn add_type(&mut self, atom: TypeAtom) {
        self.union_type.add_type(atom);
    }

    pub fn is_variadic(&self) -> bool {
        self.is_variadic
    }

    pub fn has_default_value(&self) -> bool {
        self.default_value_type.is_some()
    }

    pub fn default_value_type(&self) -> Option<&UnionType> {
        self.default_value_type.as_ref()
    }

    pub fn set_default_value_type(&mut self, default_value_type: UnionType) {
        self.default_value_type = Some(default_value_type);
    }

    /// Callers may omit this parameter.
    pub fn is_optional(&self) -> bool {
        self.is_variadic || self.has_default_value()
    }

    /// The parameter as seen by a single caller-side argument: same name and
    /// element type, without "collects the rest" semantics.
    pub fn as_non_variadic(&self) -> Parameter {
        Parameter {
            is_variadic: false,
            ..self.clone()
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.union_type.is_empty() {
            write!(f, "{} ", self.union_type)?;
        }
        if self.is_variadic {
            f.write_str("...")?;
        }
        f.write_str(&self.name)
    }
}
