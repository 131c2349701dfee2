//! Boundary to the TypeScript compiler toolchain.
//!
//! The orchestration layer above this crate never parses, type-checks, or
//! emits TypeScript itself; it talks to a [`CompilerService`]. This crate
//! defines that boundary: diagnostic records and their rendering, the raw and
//! validated forms of compiler options, project-configuration-file discovery
//! and expansion, and the single-file transpile contract with pluggable
//! pre-emit transforms.
//!
//! [`StubCompiler`] is a deterministic in-process service for tests and for
//! embedders that have no real toolchain available. Its configuration
//! handling is fully real; only transpilation is a stand-in.

mod config_file;
mod diagnostic;
mod format;
mod options;
mod service;
mod stub;

pub use config_file::{find_config_file, parse_config_content, read_config_file, ConfigFile};
pub use diagnostic::{codes, Diagnostic, DiagnosticCategory, DiagnosticPosition};
pub use format::format_diagnostics;
pub use options::{
    CompilerOptions, CompilerOptionsJson, ImportsNotUsedAsValues, ModuleResolutionKind,
    ScriptTarget,
};
pub use service::{
    CompilerService, NodeRewrite, PreEmitTransform, SyntaxNode, TranspileRequest, TranspileResult,
    TsconfigResolution,
};
pub use stub::StubCompiler;
