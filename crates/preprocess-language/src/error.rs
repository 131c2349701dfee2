//! Language resolution error types.

use thiserror::Error;

/// An error produced while resolving a language or its defaults.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LanguageError {
    /// A tag attribute that must carry a string value carried something else,
    /// e.g. a valueless `<script lang>` attribute.
    #[error("`{attribute}` attribute must be a string")]
    TypeMismatch {
        /// The offending attribute name.
        attribute: &'static str,
    },

    /// A language's defaults need an optional support module that is not
    /// available. Only the language that asked for the module is affected.
    #[error("the `{module}` module is required for `{language}` support but could not be loaded")]
    OptionalDependencyMissing {
        /// The language whose defaults were requested.
        language: String,
        /// The missing module.
        module: String,
    },
}
