//! Diagnostic rendering.

use crate::diagnostic::{Diagnostic, DiagnosticCategory};
use camino::Utf8Path;
use colored::Colorize;

/// Formats diagnostics for display, one per line, in the conventional
/// `file:line:col - severity TScode: message` shape. File paths are shown
/// relative to `base_path` when they live under it. Severity labels are
/// colorized when stdout is a terminal; `colored` handles the TTY check.
pub fn format_diagnostics(diagnostics: &[Diagnostic], base_path: &Utf8Path) -> String {
    let mut output = String::new();

    for diag in diagnostics {
        if !output.is_empty() {
            output.push('\n');
        }

        if let Some(file) = &diag.file {
            let shown = file.strip_prefix(base_path).unwrap_or(file);
            match diag.start {
                Some(position) => {
                    output.push_str(&format!("{}:{}:{}", shown, position.line, position.column));
                }
                None => output.push_str(shown.as_str()),
            }
            output.push_str(" - ");
        }

        let severity = match diag.category {
            DiagnosticCategory::Error => "error".red().to_string(),
            DiagnosticCategory::Warning => "warning".yellow().to_string(),
            DiagnosticCategory::Suggestion => "suggestion".cyan().to_string(),
            DiagnosticCategory::Message => "message".to_string(),
        };

        output.push_str(&format!(
            "{} TS{}: {}",
            severity, diag.code, diag.message_text
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use crate::diagnostic::DiagnosticPosition;
    use pretty_assertions::assert_eq;

    fn uncolored() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_with_location() {
        uncolored();
        let diag = Diagnostic::error(2322, "Type 'string' is not assignable to type 'number'.")
            .at(
                Utf8PathBuf::from("/project/src/App.svelte"),
                Some(DiagnosticPosition { line: 3, column: 7 }),
            );

        let formatted = format_diagnostics(&[diag], Utf8Path::new("/project"));
        assert_eq!(
            formatted,
            "src/App.svelte:3:7 - error TS2322: Type 'string' is not assignable to type 'number'."
        );
    }

    #[test]
    fn test_format_without_file() {
        uncolored();
        let diag = Diagnostic::error(5083, "Cannot read file '/x/tsconfig.json'.");
        let formatted = format_diagnostics(&[diag], Utf8Path::new("/project"));
        assert_eq!(formatted, "error TS5083: Cannot read file '/x/tsconfig.json'.");
    }

    #[test]
    fn test_format_multiple_keeps_order() {
        uncolored();
        let diags = vec![
            Diagnostic::warning(6133, "'x' is declared but its value is never read."),
            Diagnostic::error(2304, "Cannot find name 'y'."),
        ];
        let formatted = format_diagnostics(&diags, Utf8Path::new("/"));
        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("warning TS6133"));
        assert!(lines[1].contains("error TS2304"));
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_diagnostics(&[], Utf8Path::new("/")), "");
    }
}
