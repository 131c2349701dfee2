//! TypeScript transform orchestration.
//!
//! Given the source of one embedded TypeScript block, this crate resolves a
//! merged compiler configuration (explicit options, a discovered or named
//! tsconfig file, and built-in defaults), hands the source to a
//! [`CompilerService`](ts_toolchain::CompilerService) for single-file
//! transpilation with the type-only-import strip applied before emission,
//! and classifies the resulting diagnostics: every diagnostic is surfaced,
//! error-severity ones abort the pipeline.
//!
//! # Example
//!
//! ```
//! use camino::Utf8Path;
//! use preprocess_typescript::{transform, TsconfigFile, TypescriptOptions};
//! use ts_toolchain::StubCompiler;
//!
//! let options = TypescriptOptions {
//!     tsconfig_file: TsconfigFile::Ignore,
//!     ..Default::default()
//! };
//! let result = transform(
//!     &StubCompiler::new(),
//!     "import type { Props } from './types';\nexport const n = 1;\n",
//!     Utf8Path::new("App.svelte"),
//!     &options,
//! )
//! .unwrap();
//! assert!(!result.code.contains("Props"));
//! ```

mod error;
mod options;
mod transform;
mod tsconfig;

pub use error::TypescriptError;
pub use options::{TsconfigFile, TypescriptOptions};
pub use transform::{strip_type_only_imports, transform};
pub use tsconfig::{load_tsconfig, resolve_compiler_options};

use camino::Utf8PathBuf;

/// The process working directory as a UTF-8 path, falling back to `.` when
/// it cannot be represented.
pub(crate) fn working_dir() -> Utf8PathBuf {
    std::env::current_dir()
        .ok()
        .and_then(|dir| Utf8PathBuf::try_from(dir).ok())
        .unwrap_or_else(|| Utf8PathBuf::from("."))
}
