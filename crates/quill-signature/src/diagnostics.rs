//! Diagnostic reporting for reconciliation.
//!
//! Reconciliation never formats messages itself. It emits `PendingDiagnostic`
//! values holding the code, the declaration site and structured arguments;
//! the sink decides what to keep and renders the text.

use quill_common::diagnostics::{Diagnostic, DiagnosticCategory, format_message};
use quill_common::{AnalyzerOptions, SourceSpan, get_diagnostic_category, get_message_template};
use quill_types::UnionType;
use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Argument for a diagnostic message template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticArg {
    /// A union type (rendered as `int|null`)
    Type(UnionType),
    /// A plain string
    String(Arc<str>),
    /// A number
    Number(usize),
}

impl From<UnionType> for DiagnosticArg {
    fn from(v: UnionType) -> Self {
        Self::Type(v)
    }
}

impl From<usize> for DiagnosticArg {
    fn from(v: usize) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for DiagnosticArg {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for DiagnosticArg {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl fmt::Display for DiagnosticArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticArg::Type(ty) => write!(f, "{ty}"),
            DiagnosticArg::String(s) => f.write_str(s),
            DiagnosticArg::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A diagnostic that hasn't been rendered yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDiagnostic {
    pub code: u32,
    pub span: SourceSpan,
    pub args: Vec<DiagnosticArg>,
}

impl PendingDiagnostic {
    pub fn new(code: u32, span: SourceSpan, args: Vec<DiagnosticArg>) -> Self {
        PendingDiagnostic { code, span, args }
    }

    pub fn category(&self) -> DiagnosticCategory {
        get_diagnostic_category(self.code).unwrap_or(DiagnosticCategory::Warning)
    }

    /// Fill the message template for this code.
    pub fn message_text(&self) -> String {
        let template = get_message_template(self.code).unwrap_or("Unknown diagnostic");
        let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        format_message(template, &args)
    }

    pub fn render(&self) -> Diagnostic {
        Diagnostic::new(&self.span, self.category(), self.code, self.message_text())
    }
}

/// Destination for diagnostics raised during analysis.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: PendingDiagnostic);
}

/// Keeps every diagnostic unrendered.
impl DiagnosticSink for Vec<PendingDiagnostic> {
    fn emit(&mut self, diagnostic: PendingDiagnostic) {
        self.push(diagnostic);
    }
}

/// A sink that applies the analyzer options, drops duplicates and renders.
pub struct DiagnosticCollector<'a> {
    options: &'a AnalyzerOptions,
    seen: FxHashSet<(u32, SourceSpan, String)>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> DiagnosticCollector<'a> {
    pub fn new(options: &'a AnalyzerOptions) -> Self {
        DiagnosticCollector {
            options,
            seen: FxHashSet::default(),
            diagnostics: Vec::new(),
        }
    }

    /// Get the collected diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take the collected diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.seen.clear();
        std::mem::take(&mut self.diagnostics)
    }
}

impl DiagnosticSink for DiagnosticCollector<'_> {
    fn emit(&mut self, diagnostic: PendingDiagnostic) {
        if !self.options.allows(diagnostic.code, diagnostic.category()) {
            trace!(code = diagnostic.code, "diagnostic suppressed");
            return;
        }
        let rendered = diagnostic.render();
        let key = (
            diagnostic.code,
            diagnostic.span,
            rendered.message_text.clone(),
        );
        if self.seen.insert(key) {
            self.diagnostics.push(rendered);
        }
    }
}

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod tests;
