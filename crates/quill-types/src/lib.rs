//! Union Type Algebra
//!
//! A union type is an insertion-ordered set of type atoms describing every
//! type a value might hold. This crate provides:
//!
//! - **`TypeAtom`**: primitive, pseudo and class types
//! - **`UnionType`**: the set, with emptiness/equality/cast queries and append
//! - **Parsing**: type expressions as written in declarations and doc comments
//!   (`int|null`, `?string`, `Foo[]`, `\App\Model`)

mod atom;
mod parse;
mod union;

pub use atom::TypeAtom;
pub use parse::TypeParseError;
pub use union::UnionType;
