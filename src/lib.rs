//! quill: parameter-type reconciliation for a gradual static type checker.
//!
//! The work is split across the workspace crates:
//! - `quill-common` - diagnostics registry, source spans, analyzer options
//! - `quill-types` - union types and type-expression parsing
//! - `quill-docblock` - `@param` / `@return` extraction from doc comments
//! - `quill-signature` - function signatures and the reconciliation pass
//!
//! This crate re-exports them and adds the batch driver and logging setup.

pub use quill_common as common;
pub use quill_docblock as docblock;
pub use quill_signature as signature;
pub use quill_types as types;

pub use quill_common::{AnalyzerOptions, Diagnostic, DiagnosticCategory, SourceSpan};
pub use quill_docblock::{Comment, CommentParameter};
pub use quill_signature::{
    DiagnosticCollector, DiagnosticSink, Function, FunctionLike, FunctionSignature, Method,
    Parameter, reconcile,
};
pub use quill_types::{TypeAtom, UnionType};

// Batch reconciliation over many entities
pub mod driver;
pub use driver::{ReconcileJob, reconcile_all, reconcile_entity};

// Tracing subscriber setup
pub mod logging;
pub use logging::init_tracing;
