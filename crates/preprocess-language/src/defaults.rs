//! Per-language default preprocessor options.

use crate::error::LanguageError;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::fmt;

/// A handle to a loaded optional support module, opaque to this crate.
///
/// The embedder decides what a "module" is (for a PostCSS-style toolchain it
/// is the parser plugin handed through to the CSS processor); this crate only
/// tracks which module was asked for and hands the handle back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleHandle {
    specifier: String,
}

impl ModuleHandle {
    /// Creates a handle for the given module specifier.
    pub fn new(specifier: impl Into<String>) -> Self {
        Self {
            specifier: specifier.into(),
        }
    }

    /// The module specifier this handle was loaded from.
    pub fn specifier(&self) -> &str {
        &self.specifier
    }
}

/// Loads optional support modules on demand.
///
/// A loader is consulted only when a language whose defaults need a module is
/// actually requested; constructing a registry never touches it.
pub trait ModuleLoader: Send + Sync {
    /// Loads the named module, or `None` if it is not available.
    fn load(&self, module: &str) -> Option<ModuleHandle>;
}

/// A loader backed by a fixed set of available modules.
///
/// The default value has no modules at all, which makes every optional
/// dependency unavailable.
#[derive(Debug, Clone, Default)]
pub struct StaticModuleLoader {
    modules: HashMap<String, ModuleHandle>,
}

impl StaticModuleLoader {
    /// Creates a loader with no available modules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a module as available.
    pub fn provide(&mut self, module: impl Into<String>, handle: ModuleHandle) {
        self.modules.insert(module.into(), handle);
    }
}

impl ModuleLoader for StaticModuleLoader {
    fn load(&self, module: &str) -> Option<ModuleHandle> {
        self.modules.get(module).cloned()
    }
}

/// The default options a preprocessor receives for one language.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageDefaults {
    /// Plain key/value options merged into the tool's own options.
    pub options: Map<String, Value>,
    /// A parser module for tools that take one, loaded on demand.
    pub parser: Option<ModuleHandle>,
}

/// A stored defaults entry: either a ready value or a deferred producer.
///
/// Producers exist for languages whose defaults have a side effect to
/// materialize (loading an optional module) and run only when the language is
/// requested.
enum DefaultsEntry {
    Value(LanguageDefaults),
    Provider(fn(&dyn ModuleLoader) -> Result<LanguageDefaults, LanguageError>),
}

fn sugarss_defaults(loader: &dyn ModuleLoader) -> Result<LanguageDefaults, LanguageError> {
    let parser = loader
        .load("sugarss")
        .ok_or_else(|| LanguageError::OptionalDependencyMissing {
            language: "sugarss".to_string(),
            module: "sugarss".to_string(),
        })?;
    Ok(LanguageDefaults {
        options: plain_options(&[("stripIndent", json!(true))]),
        parser: Some(parser),
    })
}

fn plain_options(entries: &[(&str, Value)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

/// Per-canonical-language default options.
///
/// Like [`AliasRegistry`](crate::AliasRegistry), this is an explicit value
/// constructed at startup. The optional-module loader is injected at
/// construction so tests and embedders control which modules exist.
pub struct DefaultsRegistry {
    entries: HashMap<String, DefaultsEntry>,
    loader: Box<dyn ModuleLoader>,
}

impl DefaultsRegistry {
    /// Creates a registry with the built-in defaults and no optional modules
    /// available.
    pub fn new() -> Self {
        Self::with_loader(Box::new(StaticModuleLoader::new()))
    }

    /// Creates a registry with the built-in defaults and the given loader for
    /// optional modules.
    pub fn with_loader(loader: Box<dyn ModuleLoader>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            "sass".to_string(),
            DefaultsEntry::Value(LanguageDefaults {
                options: plain_options(&[
                    ("indentedSyntax", json!(true)),
                    ("stripIndent", json!(true)),
                ]),
                parser: None,
            }),
        );
        for lang in ["pug", "coffeescript", "stylus"] {
            entries.insert(
                lang.to_string(),
                DefaultsEntry::Value(LanguageDefaults {
                    options: plain_options(&[("stripIndent", json!(true))]),
                    parser: None,
                }),
            );
        }
        entries.insert("sugarss".to_string(), DefaultsEntry::Provider(sugarss_defaults));
        Self { entries, loader }
    }

    /// Returns the defaults for a canonical language, materializing deferred
    /// entries now. Languages without special defaults yield `Ok(None)`.
    pub fn get_defaults(&self, lang: &str) -> Result<Option<LanguageDefaults>, LanguageError> {
        match self.entries.get(lang) {
            None => Ok(None),
            Some(DefaultsEntry::Value(defaults)) => Ok(Some(defaults.clone())),
            Some(DefaultsEntry::Provider(provider)) => provider(self.loader.as_ref()).map(Some),
        }
    }
}

impl Default for DefaultsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DefaultsRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut languages: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        languages.sort_unstable();
        f.debug_struct("DefaultsRegistry")
            .field("languages", &languages)
            .finish_non_exhaustive()
    }
}
