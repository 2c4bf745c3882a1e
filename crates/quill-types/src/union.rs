//! The union type set.

use crate::atom::TypeAtom;
use crate::parse::{TypeParseError, parse_union_type};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// An insertion-ordered set of type atoms.
///
/// The empty union means "no type information", not "no possible value".
/// Equality ignores insertion order.
#[derive(Clone, Debug, Default)]
pub struct UnionType {
    atoms: SmallVec<[TypeAtom; 2]>,
}

impl UnionType {
    /// The empty union.
    pub fn empty() -> Self {
        UnionType {
            atoms: SmallVec::new(),
        }
    }

    /// A union holding exactly one atom.
    pub fn of(atom: TypeAtom) -> Self {
        let mut union = Self::empty();
        union.atoms.push(atom);
        union
    }

    pub fn any() -> Self {
        Self::of(TypeAtom::Any)
    }

    pub fn null() -> Self {
        Self::of(TypeAtom::Null)
    }

    /// Parse a type expression such as `int|null` or `?Foo`.
    pub fn parse(source: &str) -> Result<Self, TypeParseError> {
        parse_union_type(source)
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn atoms(&self) -> &[TypeAtom] {
        &self.atoms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeAtom> {
        self.atoms.iter()
    }

    pub fn has_type(&self, atom: &TypeAtom) -> bool {
        self.atoms.contains(atom)
    }

    /// True when this union is exactly `{atom}`.
    pub fn is_type(&self, atom: &TypeAtom) -> bool {
        self.atoms.len() == 1 && self.atoms[0] == *atom
    }

    pub fn is_nullable(&self) -> bool {
        self.has_type(&TypeAtom::Null)
    }

    /// Set equality, ignoring insertion order.
    pub fn is_equal_to(&self, other: &UnionType) -> bool {
        self.atoms.len() == other.atoms.len() && self.atoms.iter().all(|a| other.has_type(a))
    }

    /// Add one atom; already-present atoms are ignored.
    pub fn add_type(&mut self, atom: TypeAtom) {
        if !self.has_type(&atom) {
            self.atoms.push(atom);
        }
    }

    /// Union `other` into this set, preserving this set's order first.
    pub fn add_union_type(&mut self, other: &UnionType) {
        for atom in other.iter() {
            self.add_type(atom.clone());
        }
    }

    #[must_use]
    pub fn with_type(mut self, atom: TypeAtom) -> Self {
        self.add_type(atom);
        self
    }

    /// Whether a value of this type may be used where `target` is expected.
    ///
    /// An empty union on either side carries no information and always casts.
    /// Otherwise at least one atom of `self` must cast to some atom of `target`.
    pub fn can_cast_to_union_type(&self, target: &UnionType) -> bool {
        if self.is_empty() || target.is_empty() {
            return true;
        }
        if self.has_type(&TypeAtom::Any) || target.has_type(&TypeAtom::Any) {
            return true;
        }
        self.atoms
            .iter()
            .any(|source| target.atoms.iter().any(|t| source.can_cast_to(t)))
    }
}

impl PartialEq for UnionType {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }
}

impl Eq for UnionType {}

impl From<TypeAtom> for UnionType {
    fn from(atom: TypeAtom) -> Self {
        UnionType::of(atom)
    }
}

impl FromIterator<TypeAtom> for UnionType {
    fn from_iter<I: IntoIterator<Item = TypeAtom>>(iter: I) -> Self {
        let mut union = UnionType::empty();
        union.extend(iter);
        union
    }
}

impl Extend<TypeAtom> for UnionType {
    fn extend<I: IntoIterator<Item = TypeAtom>>(&mut self, iter: I) {
        for atom in iter {
            self.add_type(atom);
        }
    }
}

impl<'a> IntoIterator for &'a UnionType {
    type Item = &'a TypeAtom;
    type IntoIter = std::slice::Iter<'a, TypeAtom>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for UnionType {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_union_type(s)
    }
}

impl fmt::Display for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, atom) in self.atoms.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{atom}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/union_tests.rs"]
mod tests;
