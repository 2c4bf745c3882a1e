//! Diagnostic types and message lookup for the type checker.
//!
//! Message data lives in `data.rs`. Every diagnostic has a numeric code and a
//! stable issue name; either one can be used to suppress it in the options file.

use crate::span::SourceSpan;
use serde::{Deserialize, Serialize};

mod data;
pub use data::{DIAGNOSTIC_MESSAGES, diagnostic_codes, diagnostic_messages};

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

impl DiagnosticCategory {
    /// Ordering used by `minimumSeverity`: message < suggestion < warning < error.
    #[must_use]
    pub const fn severity_rank(self) -> u8 {
        match self {
            Self::Message => 0,
            Self::Suggestion => 1,
            Self::Warning => 2,
            Self::Error => 3,
        }
    }
}

/// A rendered diagnostic, ready for output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub line: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a diagnostic anchored at `span`.
    #[must_use]
    pub fn new(
        span: &SourceSpan,
        category: DiagnosticCategory,
        code: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: span.file.to_string(),
            start: span.start,
            length: span.length,
            line: span.line,
            message_text: message.into(),
            category,
            code,
        }
    }
}

/// A diagnostic message definition with code, issue name, category, and template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub name: &'static str,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Look up a diagnostic message definition by its issue name (e.g. `TypeMismatchDefault`).
#[must_use]
pub fn get_diagnostic_message_by_name(name: &str) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.name == name)
}

/// Get the message template for a diagnostic code.
///
/// Returns the template string with `{0}`, `{1}`, etc. placeholders.
/// Use `format_message()` to fill in the placeholders.
#[must_use]
pub fn get_message_template(code: u32) -> Option<&'static str> {
    get_diagnostic_message(code).map(|m| m.message)
}

/// Get the category for a diagnostic code.
#[must_use]
pub fn get_diagnostic_category(code: u32) -> Option<DiagnosticCategory> {
    get_diagnostic_message(code).map(|m| m.category)
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
