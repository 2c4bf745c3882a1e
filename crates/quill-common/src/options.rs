//! Analyzer options.
//!
//! Options are read from a JSON file:
//!
//! ```json
//! {
//!   "suppressIssueTypes": ["TypeMismatchDefault", 10021],
//!   "minimumSeverity": "warning"
//! }
//! ```

use crate::diagnostics::{
    DiagnosticCategory, get_diagnostic_message, get_diagnostic_message_by_name,
};
use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// An issue named either by its stable name or its numeric code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IssueRef {
    Code(u32),
    Name(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalyzerOptions {
    #[serde(default)]
    suppress_issue_types: Vec<IssueRef>,
    #[serde(default)]
    minimum_severity: Option<DiagnosticCategory>,
}

/// Resolved analyzer options.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerOptions {
    suppressed_codes: FxHashSet<u32>,
    /// Diagnostics ranked below this category are dropped.
    pub minimum_severity: Option<DiagnosticCategory>,
}

impl AnalyzerOptions {
    /// Suppress a diagnostic code.
    pub fn suppress(&mut self, code: u32) {
        self.suppressed_codes.insert(code);
    }

    pub fn is_suppressed(&self, code: u32) -> bool {
        self.suppressed_codes.contains(&code)
    }

    /// Whether a diagnostic with `code` and `category` should be reported.
    pub fn allows(&self, code: u32, category: DiagnosticCategory) -> bool {
        if self.is_suppressed(code) {
            return false;
        }
        match self.minimum_severity {
            Some(minimum) => category.severity_rank() >= minimum.severity_rank(),
            None => true,
        }
    }
}

fn resolve_issue(issue: &IssueRef) -> Result<u32> {
    match issue {
        IssueRef::Code(code) => match get_diagnostic_message(*code) {
            Some(message) => Ok(message.code),
            None => bail!("unknown issue code {code} in suppressIssueTypes"),
        },
        IssueRef::Name(name) => match get_diagnostic_message_by_name(name) {
            Some(message) => Ok(message.code),
            None => bail!("unknown issue type '{name}' in suppressIssueTypes"),
        },
    }
}

/// Parse options from JSON source.
pub fn parse_options(source: &str) -> Result<AnalyzerOptions> {
    let raw: RawAnalyzerOptions =
        serde_json::from_str(source).context("failed to parse analyzer options JSON")?;

    let mut options = AnalyzerOptions {
        suppressed_codes: FxHashSet::default(),
        minimum_severity: raw.minimum_severity,
    };
    for issue in &raw.suppress_issue_types {
        options.suppress(resolve_issue(issue)?);
    }
    debug!(
        suppressed = options.suppressed_codes.len(),
        minimum_severity = ?options.minimum_severity,
        "analyzer options parsed"
    );
    Ok(options)
}

/// Load options from a JSON file.
pub fn load_options(path: &Path) -> Result<AnalyzerOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read analyzer options: {}", path.display()))?;
    parse_options(&source)
        .with_context(|| format!("failed to parse analyzer options: {}", path.display()))
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
