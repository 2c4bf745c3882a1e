//! Function signatures and parameter-type reconciliation.
//!
//! This crate is organized into several modules:
//! - `flags` - derived boolean properties of a function body
//! - `parameter` / `parameter_list` - ordered parameters with caller-side projection
//! - `signature` - `FunctionSignature`, the component embedded in every entity
//! - `entity` - the `FunctionLike` capability and the `Function` / `Method` entities
//! - `diagnostics` - pending diagnostics, sinks and the collecting sink
//! - `reconcile` - merges declared, doc-comment and default-value types

pub mod diagnostics;
pub mod entity;
pub mod flags;
pub mod parameter;
pub mod parameter_list;
pub mod reconcile;
pub mod signature;

pub use diagnostics::{DiagnosticArg, DiagnosticCollector, DiagnosticSink, PendingDiagnostic};
pub use entity::{Function, FunctionLike, Method};
pub use flags::{FlagStore, FunctionFlags};
pub use parameter::Parameter;
pub use parameter_list::ParameterList;
pub use reconcile::{CommentLookup, CommentParameterInfo, reconcile};
pub use signature::FunctionSignature;
