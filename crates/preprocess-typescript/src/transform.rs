//! The transform pipeline.

use crate::error::TypescriptError;
use crate::options::TypescriptOptions;
use crate::tsconfig::resolve_compiler_options;
use crate::working_dir;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use ts_toolchain::{
    format_diagnostics, CompilerService, NodeRewrite, SyntaxNode, TranspileRequest,
    TranspileResult,
};

/// The mandatory pre-emit rewrite: type-only imports have no runtime
/// representation and must not reach emitted code, independent of whatever
/// elision the toolchain's own emitter does. Other imports pass through
/// unchanged; everything else is descended into.
pub fn strip_type_only_imports(node: &dyn SyntaxNode) -> NodeRewrite {
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

/// Joins a relative path onto `base`, dropping `.` segments and collapsing
/// `..` segments so the compiler sees a clean absolute path.
fn resolve_against(base: &Utf8Path, relative: &Utf8Path) -> Utf8PathBuf {
    let mut resolved = base.to_owned();
    for component in relative.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}

/// Transpiles one embedded TypeScript block.
///
/// Resolves the compiler configuration, invokes the service, and classifies
/// diagnostics: the full formatted set is printed whenever any exist, and the
/// pipeline fails with [`TypescriptError::Compilation`] if and only if at
/// least one is error-severity. Non-error diagnostics never abort.
pub fn transform(
    service: &dyn CompilerService,
    content: &str,
    filename: &Utf8Path,
    options: &TypescriptOptions,
) -> Result<TranspileResult, TypescriptError> {
    let base_path = working_dir();

    let resolution = resolve_compiler_options(service, filename, options)?;
    if !resolution.errors.is_empty() {
        return Err(TypescriptError::ConfigLoad {
            formatted: format_diagnostics(&resolution.errors, &base_path),
        });
    }

    let file_name = if filename.as_str().starts_with('.') {
        resolve_against(&base_path, filename)
    } else {
        filename.to_owned()
    };

    let request = TranspileRequest {
        file_name,
        compiler_options: resolution.options,
        report_diagnostics: options.report_diagnostics != Some(false),
        transforms: vec![strip_type_only_imports],
    };

    let result = service.transpile_module(content, &request);

    if !result.diagnostics.is_empty() {
        let formatted = format_diagnostics(&result.diagnostics, &base_path);
        println!("{formatted}");

        if result.diagnostics.iter().any(|diagnostic| diagnostic.is_error()) {
            return Err(TypescriptError::Compilation { formatted });
        }
    }

    Ok(result)
}
