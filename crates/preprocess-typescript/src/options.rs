//! Caller-facing pipeline options.

use camino::Utf8PathBuf;
use ts_toolchain::CompilerOptionsJson;

/// How the pipeline should treat project-configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TsconfigFile {
    /// Discover the nearest tsconfig upward from the source file (default).
    #[default]
    Auto,
    /// Use exactly this file.
    Path(Utf8PathBuf),
    /// Treat the explicit compiler options as already resolved; no file I/O.
    /// Takes precedence over everything, including `tsconfig_directory`.
    Resolved,
    /// Do not consult any project file.
    Ignore,
}

impl TsconfigFile {
    /// Whether this setting, on its own, asks for project-file handling.
    pub(crate) fn wants_project_file(&self) -> bool {
        !matches!(self, Self::Ignore)
    }

    /// Whether this setting short-circuits all file I/O.
    pub(crate) fn is_sentinel(&self) -> bool {
        matches!(self, Self::Resolved | Self::Ignore)
    }
}

/// Options for one TypeScript transform invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypescriptOptions {
    /// Explicit compiler options, highest precedence in the merge.
    pub compiler_options: Option<CompilerOptionsJson>,
    /// Project-configuration file handling.
    pub tsconfig_file: TsconfigFile,
    /// Directory to start tsconfig discovery from, instead of the source
    /// file's own directory.
    pub tsconfig_directory: Option<Utf8PathBuf>,
    /// Whether the compiler collects diagnostics. On unless explicitly
    /// disabled.
    pub report_diagnostics: Option<bool>,
}

impl TypescriptOptions {
    /// Whether configuration resolution should go through the project-file
    /// path at all.
    pub(crate) fn wants_project_config(&self) -> bool {
        self.tsconfig_file.wants_project_file() || self.tsconfig_directory.is_some()
    }
}
