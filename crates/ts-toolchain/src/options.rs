//! Compiler options, raw and validated.

use crate::diagnostic::Diagnostic;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A raw, toolchain-neutral compiler-options record, as found in a tsconfig
/// file or supplied by a caller, prior to validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompilerOptionsJson(pub Map<String, Value>);

impl CompilerOptionsJson {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one option.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Shallow key-by-key merge: every key of `other` wins over this record.
    pub fn overlay(&mut self, other: &CompilerOptionsJson) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }
}

impl From<Map<String, Value>> for CompilerOptionsJson {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// ECMAScript emit target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptTarget {
    Es3,
    Es5,
    Es2015,
    Es2016,
    Es2017,
    Es2018,
    Es2019,
    Es2020,
    Es2021,
    Es2022,
    EsNext,
}

impl ScriptTarget {
    /// Parses a target name as written in configuration, case-insensitively.
    /// `es6` is an alias of `es2015`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "es3" => Some(Self::Es3),
            "es5" => Some(Self::Es5),
            "es6" | "es2015" => Some(Self::Es2015),
            "es2016" => Some(Self::Es2016),
            "es2017" => Some(Self::Es2017),
            "es2018" => Some(Self::Es2018),
            "es2019" => Some(Self::Es2019),
            "es2020" => Some(Self::Es2020),
            "es2021" => Some(Self::Es2021),
            "es2022" => Some(Self::Es2022),
            "esnext" => Some(Self::EsNext),
            _ => None,
        }
    }

    /// Whether this target predates ES2015.
    pub fn is_pre_es2015(self) -> bool {
        matches!(self, Self::Es3 | Self::Es5)
    }
}

/// Module resolution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleResolutionKind {
    Classic,
    Node,
    Node16,
    NodeNext,
    Bundler,
}

impl ModuleResolutionKind {
    /// Parses a strategy name as written in configuration.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Some(Self::Classic),
            "node" | "node10" => Some(Self::Node),
            "node16" => Some(Self::Node16),
            "nodenext" => Some(Self::NodeNext),
            "bundler" => Some(Self::Bundler),
            _ => None,
        }
    }
}

/// What the emitter does with imports that are never used as values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportsNotUsedAsValues {
    /// Drop them silently (the toolchain default).
    #[default]
    Remove,
    /// Keep them in the output.
    Preserve,
    /// Report them as errors instead of dropping them.
    Error,
}

impl ImportsNotUsedAsValues {
    /// Parses a mode name as written in configuration.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "remove" => Some(Self::Remove),
            "preserve" => Some(Self::Preserve),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Validated compiler options.
///
/// Only the options this layer actually inspects are typed; everything else
/// rides along in `extra` untouched for the toolchain to interpret.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompilerOptions {
    /// ECMAScript emit target.
    pub target: Option<ScriptTarget>,
    /// Module resolution strategy.
    pub module_resolution: Option<ModuleResolutionKind>,
    /// Policy for imports unused as values.
    pub imports_not_used_as_values: ImportsNotUsedAsValues,
    /// Permit source files whose names lack a TypeScript extension.
    pub allow_non_ts_extensions: bool,
    /// Emit a source map.
    pub source_map: bool,
    /// Options passed through without interpretation.
    pub extra: Map<String, Value>,
}

impl CompilerOptions {
    /// Validates a raw JSON options record, collecting a diagnostic for each
    /// unusable entry instead of failing outright. This is the JSON-options
    /// validation a real toolchain performs on `convertCompilerOptionsFromJson`.
    pub fn from_json(json: &CompilerOptionsJson) -> (Vec<Diagnostic>, Self) {
        let mut errors = Vec::new();
        let mut options = Self::default();

        for (key, value) in &json.0 {
            match key.as_str() {
                "target" => match expect_string(key, value, &mut errors) {
                    Some(name) => match ScriptTarget::from_name(name) {
                        Some(target) => options.target = Some(target),
                        None => errors.push(bad_enum_argument(
                            "target",
                            "'es3', 'es5', 'es6', 'es2015', 'es2016', 'es2017', 'es2018', \
                             'es2019', 'es2020', 'es2021', 'es2022', 'esnext'",
                        )),
                    },
                    None => {}
                },
                "moduleResolution" => match expect_string(key, value, &mut errors) {
                    Some(name) => match ModuleResolutionKind::from_name(name) {
                        Some(kind) => options.module_resolution = Some(kind),
                        None => errors.push(bad_enum_argument(
                            "moduleResolution",
                            "'classic', 'node', 'node16', 'nodenext', 'bundler'",
                        )),
                    },
                    None => {}
                },
                "importsNotUsedAsValues" => match expect_string(key, value, &mut errors) {
                    Some(name) => match ImportsNotUsedAsValues::from_name(name) {
                        Some(mode) => options.imports_not_used_as_values = mode,
                        None => errors.push(bad_enum_argument(
                            "importsNotUsedAsValues",
                            "'remove', 'preserve', 'error'",
                        )),
                    },
                    None => {}
                },
                "allowNonTsExtensions" => {
                    if let Some(flag) = expect_bool(key, value, &mut errors) {
                        options.allow_non_ts_extensions = flag;
                    }
                }
                "sourceMap" => {
                    if let Some(flag) = expect_bool(key, value, &mut errors) {
                        options.source_map = flag;
                    }
                }
                _ => {
                    options.extra.insert(key.clone(), value.clone());
                }
            }
        }

        (errors, options)
    }
}

fn expect_string<'a>(key: &str, value: &'a Value, errors: &mut Vec<Diagnostic>) -> Option<&'a str> {
    match value.as_str() {
        Some(text) => Some(text),
        None => {
            errors.push(Diagnostic::error(
                5024,
                format!("Compiler option '{key}' requires a value of type string."),
            ));
            None
        }
    }
}

fn expect_bool(key: &str, value: &Value, errors: &mut Vec<Diagnostic>) -> Option<bool> {
    match value.as_bool() {
        Some(flag) => Some(flag),
        None => {
            errors.push(Diagnostic::error(
                5024,
                format!("Compiler option '{key}' requires a value of type boolean."),
            ));
            None
        }
    }
}

fn bad_enum_argument(option: &str, allowed: &str) -> Diagnostic {
    Diagnostic::error(
        6046,
        format!("Argument for '--{option}' option must be: {allowed}."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(entries: &[(&str, Value)]) -> CompilerOptionsJson {
        let mut json = CompilerOptionsJson::new();
        for (key, value) in entries {
            json.insert(*key, value.clone());
        }
        json
    }

    #[test]
    fn test_overlay_wins_key_by_key() {
        let mut base = record(&[("target", json!("es6")), ("moduleResolution", json!("node"))]);
        base.overlay(&record(&[("target", json!("es2020"))]));
        assert_eq!(base.0.get("target"), Some(&json!("es2020")));
        assert_eq!(base.0.get("moduleResolution"), Some(&json!("node")));
    }

    #[test]
    fn test_valid_conversion() {
        let (errors, options) = CompilerOptions::from_json(&record(&[
            ("target", json!("es6")),
            ("moduleResolution", json!("node")),
            ("importsNotUsedAsValues", json!("error")),
            ("sourceMap", json!(true)),
            ("strict", json!(true)),
        ]));
        assert_eq!(errors, vec![]);
        assert_eq!(options.target, Some(ScriptTarget::Es2015));
        assert_eq!(options.module_resolution, Some(ModuleResolutionKind::Node));
        assert_eq!(options.imports_not_used_as_values, ImportsNotUsedAsValues::Error);
        assert!(options.source_map);
        assert_eq!(options.extra.get("strict"), Some(&json!(true)));
    }

    #[test]
    fn test_unknown_target_is_a_diagnostic() {
        let (errors, options) = CompilerOptions::from_json(&record(&[("target", json!("es7000"))]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, 6046);
        assert_eq!(options.target, None);
    }

    #[test]
    fn test_wrongly_typed_option_is_a_diagnostic() {
        let (errors, _) = CompilerOptions::from_json(&record(&[("sourceMap", json!("yes"))]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, 5024);
    }

    #[test]
    fn test_target_names() {
        assert_eq!(ScriptTarget::from_name("ES6"), Some(ScriptTarget::Es2015));
        assert_eq!(ScriptTarget::from_name("es2015"), Some(ScriptTarget::Es2015));
        assert_eq!(ScriptTarget::from_name("ESNext"), Some(ScriptTarget::EsNext));
        assert!(ScriptTarget::Es3.is_pre_es2015());
        assert!(ScriptTarget::Es5.is_pre_es2015());
        assert!(!ScriptTarget::Es2015.is_pre_es2015());
    }
}
