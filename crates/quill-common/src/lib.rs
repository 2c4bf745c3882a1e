//! Common types and utilities for the quill type checker.
//!
//! This crate provides foundational types used across all quill crates:
//! - Diagnostic codes, message templates and rendered diagnostics
//! - Source spans for declaration sites (`SourceSpan`)
//! - Analyzer options loaded from JSON (`AnalyzerOptions`)

// Diagnostic registry and rendered diagnostics
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes, diagnostic_messages,
    format_message, get_diagnostic_category, get_diagnostic_message,
    get_diagnostic_message_by_name, get_message_template,
};

// Span - Declaration site tracking
pub mod span;
pub use span::SourceSpan;

// Analyzer options
pub mod options;
pub use options::{AnalyzerOptions, load_options, parse_options};
