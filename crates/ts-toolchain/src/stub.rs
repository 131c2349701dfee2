//! An in-process stand-in for the external TypeScript toolchain.

use crate::diagnostic::{Diagnostic, DiagnosticCategory, DiagnosticPosition};
use crate::service::{CompilerService, NodeRewrite, SyntaxNode, TranspileRequest, TranspileResult};
use std::sync::Arc;
use swc_common::{FileName, SourceMap, Spanned};
use swc_ecma_ast::{EsVersion, ModuleDecl, ModuleItem};
use swc_ecma_parser::{parse_file_as_module, Syntax, TsSyntax};

/// A deterministic, fully local [`CompilerService`].
///
/// Configuration handling comes from the provided trait methods and is real.
/// Transpilation parses the source as TypeScript with swc, applies the
/// requested pre-emit transforms to the top-level module items by splicing
/// their spans out of the source text, and reports parse failures as error
/// diagnostics. It does not type-check; `// diag:<severity> <code> <message>`
/// directive comments inject diagnostics so the reporting and classification
/// paths can be exercised without a checker.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubCompiler;

impl StubCompiler {
    /// Creates a stub service.
    pub fn new() -> Self {
        Self
    }
}

impl CompilerService for StubCompiler {
    fn transpile_module(&self, source: &str, request: &TranspileRequest) -> TranspileResult {
        let mut diagnostics = Vec::new();

        if request.report_diagnostics {
            check_extension(request, &mut diagnostics);
            collect_directives(source, request, &mut diagnostics);
        }

        let cm: Arc<SourceMap> = Default::default();
        let fm = cm.new_source_file(
            FileName::Custom(request.file_name.to_string()).into(),
            source.to_string(),
        );

        let mut recovered = Vec::new();
        let parsed = parse_file_as_module(
            &fm,
            Syntax::Typescript(TsSyntax {
                tsx: false,
                ..Default::default()
            }),
            EsVersion::Es2022,
            None,
            &mut recovered,
        );

        if request.report_diagnostics {
            for error in &recovered {
                diagnostics.push(parse_diagnostic(error, request));
            }
        }

        let module = match parsed {
            Ok(module) => module,
            Err(error) => {
                if request.report_diagnostics {
                    diagnostics.push(parse_diagnostic(&error, request));
                }
                // Nothing to rewrite without a syntax tree.
                return TranspileResult {
                    code: source.to_string(),
                    map: None,
                    diagnostics,
                };
            }
        };

        let file_start = fm.start_pos.0;
        let mut erasures: Vec<(usize, usize)> = Vec::new();

        for item in &module.body {
            let node = ItemNode(item);
            for transform in &request.transforms {
                match transform(&node) {
                    NodeRewrite::Erase => {
                        let span = item.span();
                        let lo = (span.lo.0 - file_start) as usize;
                        let mut hi = (span.hi.0 - file_start) as usize;
                        // The span may or may not cover the terminator.
                        if source.as_bytes().get(hi) == Some(&b';') {
                            hi += 1;
                        }
                        erasures.push((lo, hi));
                        break;
                    }
                    NodeRewrite::Keep | NodeRewrite::Descend => {}
                }
            }
        }

        let code = splice(source, &mut erasures);
        let map = request
            .compiler_options
            .source_map
            .then(|| minimal_source_map(request));

        TranspileResult {
            code,
            map,
            diagnostics,
        }
    }
}

/// A top-level module item viewed through the opaque node capability.
struct ItemNode<'a>(&'a ModuleItem);

impl SyntaxNode for ItemNode<'_> {
    fn is_import_declaration(&self) -> bool {
        matches!(self.0, ModuleItem::ModuleDecl(ModuleDecl::Import(_)))
    }

    fn is_type_only_import(&self) -> bool {
        matches!(
            self.0,
            ModuleItem::ModuleDecl(ModuleDecl::Import(import)) if import.type_only
        )
    }
}

fn check_extension(request: &TranspileRequest, diagnostics: &mut Vec<Diagnostic>) {
    if request.compiler_options.allow_non_ts_extensions {
        return;
    }
    let name = request.file_name.as_str();
    let supported = [".ts", ".tsx", ".mts", ".cts", ".js", ".jsx"];
    if !supported.iter().any(|ext| name.ends_with(ext)) {
        diagnostics.push(Diagnostic::error(
            6054,
            format!(
                "File '{}' has an unsupported extension. The only supported extensions are \
                 '.ts', '.tsx', '.mts', '.cts', '.js', '.jsx'.",
                request.file_name
            ),
        ));
    }
}

/// Collects `// diag:<severity> <code> <message>` directives.
fn collect_directives(source: &str, request: &TranspileRequest, diagnostics: &mut Vec<Diagnostic>) {
    for (index, line) in source.lines().enumerate() {
        let Some(rest) = line.trim_start().strip_prefix("// diag:") else {
            continue;
        };
        let mut words = rest.split_whitespace();
        let category = match words.next() {
            Some("error") => DiagnosticCategory::Error,
            Some("warning") => DiagnosticCategory::Warning,
            Some("suggestion") => DiagnosticCategory::Suggestion,
            Some("message") => DiagnosticCategory::Message,
            _ => continue,
        };
        let Some(code) = words.next().and_then(|word| word.parse::<u32>().ok()) else {
            continue;
        };
        let message: Vec<&str> = words.collect();
        diagnostics.push(Diagnostic {
            category,
            code,
            message_text: message.join(" "),
            file: Some(request.file_name.clone()),
            start: Some(DiagnosticPosition {
                line: index as u32 + 1,
                column: 1,
            }),
        });
    }
}

fn parse_diagnostic(error: &swc_ecma_parser::error::Error, request: &TranspileRequest) -> Diagnostic {
    Diagnostic::error(1128, format!("{:?}", error)).at(request.file_name.clone(), None)
}

/// Replaces each erased range with a no-op statement.
fn splice(source: &str, erasures: &mut Vec<(usize, usize)>) -> String {
    erasures.sort_unstable();
    let mut code = String::with_capacity(source.len());
    let mut cursor = 0;
    for &(lo, hi) in erasures.iter() {
        if lo < cursor {
            continue;
        }
        code.push_str(&source[cursor..lo]);
        code.push(';');
        cursor = hi;
    }
    code.push_str(&source[cursor..]);
    code
}

fn minimal_source_map(request: &TranspileRequest) -> String {
    serde_json::json!({
        "version": 3,
        "file": request.file_name.file_name().unwrap_or(request.file_name.as_str()),
        "sources": [request.file_name.as_str()],
        "names": [],
        "mappings": "",
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CompilerOptions;
    use camino::Utf8PathBuf;
    use pretty_assertions::assert_eq;

    fn request() -> TranspileRequest {
        TranspileRequest {
            file_name: Utf8PathBuf::from("App.svelte"),
            compiler_options: CompilerOptions {
                allow_non_ts_extensions: true,
                ..Default::default()
            },
            report_diagnostics: true,
            transforms: Vec::new(),
        }
    }

    fn erase_type_only(node: &dyn SyntaxNode) -> NodeRewrite {
        if node.is_import_declaration() {
            if node.is_type_only_import() {
                NodeRewrite::Erase
            } else {
                NodeRewrite::Keep
            }
        } else {
            NodeRewrite::Descend
        }
    }

    #[test]
    fn test_erases_type_only_imports() {
        let source = "import type { Props } from './types';\nimport { onMount } from 'svelte';\nonMount(() => {});\n";
        let mut request = request();
        request.transforms = vec![erase_type_only];

        let result = StubCompiler::new().transpile_module(source, &request);
        assert_eq!(result.diagnostics, vec![]);
        assert!(!result.code.contains("Props"));
        assert!(result.code.contains("import { onMount } from 'svelte';"));
        assert!(result.code.contains("onMount(() => {});"));
    }

    #[test]
    fn test_parse_failure_is_an_error_diagnostic() {
        let source = "const x: = 5;";
        let result = StubCompiler::new().transpile_module(source, &request());
        assert!(result.diagnostics.iter().any(|d| d.is_error()));
    }

    #[test]
    fn test_directive_diagnostics() {
        let source = "// diag:warning 6133 'x' is declared but its value is never read.\nconst x = 1;\n";
        let result = StubCompiler::new().transpile_module(source, &request());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].category, DiagnosticCategory::Warning);
        assert_eq!(result.diagnostics[0].code, 6133);
        assert_eq!(
            result.diagnostics[0].start,
            Some(DiagnosticPosition { line: 1, column: 1 })
        );
    }

    #[test]
    fn test_report_diagnostics_off_suppresses_everything() {
        let source = "// diag:error 2322 boom\nconst x: = 5;";
        let mut request = request();
        request.report_diagnostics = false;
        let result = StubCompiler::new().transpile_module(source, &request);
        assert_eq!(result.diagnostics, vec![]);
    }

    #[test]
    fn test_unsupported_extension_without_override() {
        let mut request = request();
        request.compiler_options.allow_non_ts_extensions = false;
        let result = StubCompiler::new().transpile_module("const x = 1;", &request);
        assert!(result.diagnostics.iter().any(|d| d.code == 6054));
    }

    #[test]
    fn test_source_map_on_request() {
        let mut request = request();
        request.compiler_options.source_map = true;
        let result = StubCompiler::new().transpile_module("const x = 1;", &request);
        let map = result.map.expect("source map requested");
        assert!(map.contains("\"version\":3"));
    }
}
