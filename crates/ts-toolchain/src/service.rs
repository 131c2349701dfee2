//! The compiler-service contract.

use crate::config_file::{self, ConfigFile};
use crate::diagnostic::Diagnostic;
use crate::options::{CompilerOptions, CompilerOptionsJson};
use camino::{Utf8Path, Utf8PathBuf};

/// The outcome of resolving compiler configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TsconfigResolution {
    /// Configuration-load diagnostics, in the order they were produced.
    pub errors: Vec<Diagnostic>,
    /// The validated options.
    pub options: CompilerOptions,
}

/// The outcome of a single-file transpilation.
#[derive(Debug, Clone, PartialEq)]
pub struct TranspileResult {
    /// The emitted code.
    pub code: String,
    /// The source map, when one was requested.
    pub map: Option<String>,
    /// Every diagnostic the compiler produced, errors and non-errors alike.
    pub diagnostics: Vec<Diagnostic>,
}

/// A syntax-tree node as seen through the compiler's visitation capability.
///
/// Transform policies never touch the toolchain's concrete node
/// representation; they only ask these questions.
pub trait SyntaxNode {
    /// Whether this node is a top-level import declaration.
    fn is_import_declaration(&self) -> bool;
    /// Whether this node is an import declaration marked type-only.
    fn is_type_only_import(&self) -> bool;
}

/// What a pre-emit transform wants done with a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRewrite {
    /// Pass the node through unchanged, without visiting its children.
    Keep,
    /// Erase the node, leaving a no-op statement in its place.
    Erase,
    /// Leave the node alone and recurse into its children.
    Descend,
}

/// A pure tree-rewrite predicate applied before emission.
pub type PreEmitTransform = fn(&dyn SyntaxNode) -> NodeRewrite;

/// A single-file transpile request.
#[derive(Debug, Clone)]
pub struct TranspileRequest {
    /// The name the compiler should attribute the source to.
    pub file_name: Utf8PathBuf,
    /// Fully resolved compiler options.
    pub compiler_options: CompilerOptions,
    /// Whether the compiler should collect diagnostics at all.
    pub report_diagnostics: bool,
    /// Transforms applied to the syntax tree before emission, in order.
    pub transforms: Vec<PreEmitTransform>,
}

/// The external compiler toolchain, as this layer sees it.
///
/// The configuration-side methods have real provided implementations (local
/// file discovery, JSON-with-comments parsing, options validation); a
/// service implementation only has to supply transpilation, though one that
/// fronts a full toolchain is free to override the rest as well.
pub trait CompilerService {
    /// Finds the nearest project-configuration file at or above `search_dir`.
    fn find_config_file(&self, search_dir: &Utf8Path) -> Option<Utf8PathBuf> {
        config_file::find_config_file(search_dir)
    }

    /// Reads and parses a project-configuration file.
    fn read_config_file(&self, path: &Utf8Path) -> Result<ConfigFile, Diagnostic> {
        config_file::read_config_file(path)
    }

    /// Expands and validates a parsed configuration, with `existing_options`
    /// taking precedence over the file's own compiler options.
    fn parse_config_content(
        &self,
        config: &ConfigFile,
        base_path: &Utf8Path,
        existing_options: &CompilerOptionsJson,
        config_file_name: &Utf8Path,
    ) -> TsconfigResolution {
        config_file::parse_config_content(config, base_path, existing_options, config_file_name)
    }

    /// Validates a bare JSON options record with no file context.
    fn convert_options_from_json(
        &self,
        json: &CompilerOptionsJson,
        _base_path: &Utf8Path,
    ) -> TsconfigResolution {
        let (errors, options) = CompilerOptions::from_json(json);
        TsconfigResolution { errors, options }
    }

    /// Transpiles a single source file.
    fn transpile_module(&self, source: &str, request: &TranspileRequest) -> TranspileResult;
}
