//! Pipeline error types.

use thiserror::Error;

/// A fatal failure in the TypeScript pipeline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypescriptError {
    /// The project configuration could not be loaded or validated. Carries
    /// the fully formatted diagnostic text.
    #[error("failed to load TypeScript configuration:\n{formatted}")]
    ConfigLoad {
        /// The formatted configuration diagnostics.
        formatted: String,
    },

    /// The resolved compiler target predates ES2015, which this pipeline
    /// does not support.
    #[error("Svelte only supports es6+ syntax. Set your 'compilerOptions.target' to 'es6' or higher.")]
    UnsupportedTarget,

    /// Transpilation produced at least one error-severity diagnostic. This
    /// kind means "the source is invalid", as opposed to an internal failure.
    #[error("TypeScript compilation failed:\n{formatted}")]
    Compilation {
        /// The formatted diagnostics, errors and non-errors alike.
        formatted: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_target_message_is_fixed() {
        assert_eq!(
            TypescriptError::UnsupportedTarget.to_string(),
            "Svelte only supports es6+ syntax. Set your 'compilerOptions.target' to 'es6' or higher."
        );
    }
}
