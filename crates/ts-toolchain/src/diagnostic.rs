//! Compiler diagnostic records.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Well-known TypeScript diagnostic codes this layer treats specially.
pub mod codes {
    /// "No inputs were found in config file" — benign when the include list
    /// has been cleared on purpose before expansion.
    pub const NO_INPUTS_WERE_FOUND: u32 = 18003;
}

/// Diagnostic severity, mirroring the toolchain's categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiagnosticCategory {
    Error,
    Warning,
    Suggestion,
    Message,
}

/// A position in a source file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticPosition {
    /// 1-indexed line number.
    pub line: u32,
    /// 1-indexed column number.
    pub column: u32,
}

/// A diagnostic produced by the compiler toolchain.
///
/// This layer classifies and formats diagnostics; it never interprets them
/// structurally beyond category and code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnostic {
    /// The severity category.
    pub category: DiagnosticCategory,
    /// The TypeScript diagnostic code.
    pub code: u32,
    /// The renderable message.
    pub message_text: String,
    /// The file the diagnostic points at, when known.
    pub file: Option<Utf8PathBuf>,
    /// The start position within `file`, when known.
    pub start: Option<DiagnosticPosition>,
}

impl Diagnostic {
    /// Creates an error diagnostic with no file context.
    pub fn error(code: u32, message_text: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            message_text: message_text.into(),
            file: None,
            start: None,
        }
    }

    /// Creates a warning diagnostic with no file context.
    pub fn warning(code: u32, message_text: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            code,
            message_text: message_text.into(),
            file: None,
            start: None,
        }
    }

    /// Attaches a file and position.
    pub fn at(mut self, file: Utf8PathBuf, position: Option<DiagnosticPosition>) -> Self {
        self.file = Some(file);
        self.start = position;
        self
    }

    /// Whether this diagnostic is error-severity.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_error() {
        assert!(Diagnostic::error(2322, "type mismatch").is_error());
        assert!(!Diagnostic::warning(6133, "unused").is_error());
    }
}
