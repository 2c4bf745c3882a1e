//! Doc comment model.
//!
//! Parses the type-bearing tags of a documentation comment:
//!
//! ```text
//! /**
//!  * @param int|null $count  how many
//!  * @param string ...$names
//!  * @param {array<int, Foo>} map
//!  * @return bool
//!  */
//! ```
//!
//! Parameters are recorded in declaration order and can be looked up either by
//! name or by zero-based position. Untyped or malformed tags keep their
//! position with an empty type.

mod parser;

use indexmap::IndexMap;
use quill_types::UnionType;
use std::fmt;

/// A `@param` annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentParameter {
    name: String,
    union_type: UnionType,
    is_variadic: bool,
}

impl CommentParameter {
    pub fn new(name: impl Into<String>, union_type: UnionType, is_variadic: bool) -> Self {
        CommentParameter {
            name: name.into(),
            union_type,
            is_variadic,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn union_type(&self) -> &UnionType {
        &self.union_type
    }

    /// Whether the annotation used the `...name` marker.
    pub fn is_variadic(&self) -> bool {
        self.is_variadic
    }
}

impl fmt::Display for CommentParameter {
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

/// A parsed documentation comment.
///
/// Every `@param` line takes a position, including untyped ones, ones whose
/// type failed to parse and repeated names, so offsets match the comment as
/// written. Name lookup sees the first annotation for each name.
#[derive(Clone, Debug, Default)]
pub struct Comment {
    parameters: Vec<CommentParameter>,
    by_name: IndexMap<String, usize>,
    return_type: Option<UnionType>,
}

impl Comment {
    /// A comment with no annotations, for entities without a doc comment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse raw comment text (with or without the `/** */` delimiters).
    pub fn parse(text: &str) -> Self {
        parser::parse_comment(text)
    }

    /// Record the next `@param` line.
    ///
    /// Returns whether the annotation became the one found by its name. An
    /// annotation with an empty name only holds its position.
    pub fn add_parameter(&mut self, parameter: CommentParameter) -> bool {
        let index = self.parameters.len();
        let named = !parameter.name.is_empty() && !self.by_name.contains_key(parameter.name());
        if named {
            self.by_name.insert(parameter.name.clone(), index);
        }
        self.parameters.push(parameter);
        named
    }

    pub fn set_return_type(&mut self, union_type: UnionType) {
        self.return_type = Some(union_type);
    }

    pub fn return_type(&self) -> Option<&UnionType> {
        self.return_type.as_ref()
    }

    /// Every `@param` line, in order.
    pub fn parameters(&self) -> impl Iterator<Item = &CommentParameter> {
        self.parameters.iter()
    }

    /// Distinct annotated names, in order of first appearance.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    /// Number of `@param` lines.
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty() && self.return_type.is_none()
    }

    pub fn has_parameter_with_name_or_offset(&self, name: &str, offset: usize) -> bool {
        self.parameter_with_name_or_offset(name, offset).is_some()
    }

    /// Look up an annotation by exact name, falling back to its position.
    ///
    /// Positions count `@param` lines; they are never extended past the last
    /// one. A line without a usable name is never returned.
    pub fn parameter_with_name_or_offset(
        &self,
        name: &str,
        offset: usize,
    ) -> Option<&CommentParameter> {
        self.by_name
            .get(name)
            .and_then(|&index| self.parameters.get(index))
            .or_else(|| {
                self.parameters
                    .get(offset)
                    .filter(|parameter| !parameter.name.is_empty())
            })
    }
}

#[cfg(test)]
#[path = "tests/comment_tests.rs"]
mod tests;
