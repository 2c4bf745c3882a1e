//! Type expression parsing.
//!
//! Accepts the forms found in declarations and doc comments:
//! `int`, `int|string`, `?int` (nullable shorthand), `Foo[]` and
//! `(int|string)[]` (arrays), `array<int, Foo>` / `iterable<Foo>` (generic
//! parameters are accepted and erased) and namespaced class names.

use crate::atom::TypeAtom;
use crate::union::UnionType;
use std::error::Error;
use std::fmt;

/// Error returned for a malformed type expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeParseError {
    pub input: String,
    pub message: &'static str,
}

impl TypeParseError {
    fn new(input: &str, message: &'static str) -> Self {
        TypeParseError {
            input: input.to_string(),
            message,
        }
    }
}

impl fmt::Display for TypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid type expression '{}': {}", self.input, self.message)
    }
}

impl Error for TypeParseError {}

pub(crate) fn parse_union_type(input: &str) -> Result<UnionType, TypeParseError> {
    let source = input.trim();
    if source.is_empty() {
        return Err(TypeParseError::new(input, "empty type expression"));
    }

    let mut union = UnionType::empty();
    let parts = split_top_level(source).map_err(|message| TypeParseError::new(input, message))?;
    for part in parts {
        parse_member(part.trim(), &mut union)
            .map_err(|message| TypeParseError::new(input, message))?;
    }
    Ok(union)
}

/// Split on `|` outside of `<>` and `()`.
fn split_top_level(source: &str) -> Result<Vec<&str>, &'static str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in source.char_indices() {
        match ch {
            '<' | '(' => depth += 1,
            '>' | ')' => {
                depth = depth.checked_sub(1).ok_or("unbalanced brackets")?;
            }
            '|' if depth == 0 => {
                parts.push(&source[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err("unbalanced brackets");
    }
    parts.push(&source[start..]);
    Ok(parts)
}

fn parse_member(part: &str, union: &mut UnionType) -> Result<(), &'static str> {
    if part.is_empty() {
        return Err("empty union member");
    }

    if let Some(rest) = part.strip_prefix('?') {
        union.add_type(TypeAtom::Null);
        return parse_member(rest.trim(), union);
    }

    if part.ends_with("[]") {
        union.add_type(TypeAtom::Array);
        return Ok(());
    }

    if let Some(inner) = part.strip_prefix('(').and_then(|p| p.strip_suffix(')')) {
        for nested in split_top_level(inner)? {
            parse_member(nested.trim(), union)?;
        }
        return Ok(());
    }

    // Generic parameters are erased: `array<int, Foo>` is `array`.
    let base = match part.find('<') {
        Some(idx) if part.ends_with('>') => part[..idx].trim_end(),
        Some(_) => return Err("malformed generic type"),
        None => part,
    };

    if let Some(atom) = TypeAtom::from_keyword(base) {
        union.add_type(atom);
        return Ok(());
    }

    if !is_class_name(base) {
        return Err("invalid type name");
    }
    union.add_type(TypeAtom::class(base));
    Ok(())
}

fn is_class_name(name: &str) -> bool {
    let name = name.trim_start_matches('\\');
    !name.is_empty()
        && name.split('\\').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c == '_' || c.is_alphabetic())
                && chars.all(|c| c == '_' || c.is_alphanumeric())
        })
}

#[cfg(test)]
#[path = "tests/parse_tests.rs"]
mod tests;
