//! Declaration-site locations.

use std::fmt;
use std::sync::Arc;

/// A source location span.
///
/// Diagnostics raised while reconciling an entity are anchored at the
/// entity's declaration site.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    /// File path or name
    pub file: Arc<str>,
    /// Start position (byte offset)
    pub start: u32,
    /// Length in bytes
    pub length: u32,
    /// One-based line of `start`, 0 when unknown
    pub line: u32,
}

impl SourceSpan {
    pub fn new(file: impl Into<Arc<str>>, start: u32, length: u32) -> Self {
        SourceSpan {
            file: file.into(),
            start,
            length,
            line: 0,
        }
    }

    /// Span covering a whole line, for callers that only track line numbers.
    pub fn at_line(file: impl Into<Arc<str>>, line: u32) -> Self {
        SourceSpan {
            file: file.into(),
            start: 0,
            length: 0,
            line,
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "{}:{}", self.file, self.line)
        } else {
            write!(f, "{}@{}", self.file, self.start)
        }
    }
}
