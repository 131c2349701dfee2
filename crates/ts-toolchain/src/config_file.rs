//! Project-configuration file discovery and expansion.

use crate::diagnostic::{codes, Diagnostic};
use crate::options::{CompilerOptions, CompilerOptionsJson};
use crate::service::TsconfigResolution;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;

/// The parsed content of a tsconfig file, before expansion.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigFile {
    /// Raw compiler options.
    pub compiler_options: Map<String, Value>,
    /// Explicit file list.
    pub files: Vec<String>,
    /// Include patterns.
    pub include: Vec<String>,
    /// Exclude patterns.
    pub exclude: Vec<String>,
}

/// Finds the nearest `tsconfig.json` at or above `search_dir`.
///
/// Relative search directories are resolved against the process working
/// directory first.
pub fn find_config_file(search_dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let absolute;
    let start = if search_dir.is_absolute() {
        search_dir
    } else {
        absolute = working_dir().join(search_dir);
        &absolute
    };

    for dir in start.ancestors() {
        let candidate = dir.join("tsconfig.json");
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// Reads and parses a tsconfig file. tsconfig allows JS-style comments, so
/// the content is stripped of them before JSON parsing. A failed read or
/// parse comes back as a diagnostic for the caller to format and raise.
pub fn read_config_file(path: &Utf8Path) -> Result<ConfigFile, Diagnostic> {
    let content = fs::read_to_string(path)
        .map_err(|_| Diagnostic::error(5083, format!("Cannot read file '{path}'.")))?;

    let content = remove_json_comments(&content);
    serde_json::from_str(&content)
        .map_err(|e| Diagnostic::error(5014, format!("Failed to parse file '{path}': {e}.")))
}

/// Expands and validates a parsed configuration.
///
/// `existing_options` take precedence over the file's own compiler options,
/// key by key. No source-file scan is performed here; when the effective
/// `files` and `include` lists are both empty the toolchain's "no inputs
/// were found" diagnostic (18003) is reported, exactly as a real project
/// expansion would.
pub fn parse_config_content(
    config: &ConfigFile,
    _base_path: &Utf8Path,
    existing_options: &CompilerOptionsJson,
    config_file_name: &Utf8Path,
) -> TsconfigResolution {
    let mut merged = CompilerOptionsJson(config.compiler_options.clone());
    merged.overlay(existing_options);

    let (mut errors, options) = CompilerOptions::from_json(&merged);

    if config.files.is_empty() && config.include.is_empty() {
        errors.push(Diagnostic::error(
            codes::NO_INPUTS_WERE_FOUND,
            format!(
                "No inputs were found in config file '{}'. Specified 'include' paths were \
                 '{}' and 'exclude' paths were '{}'.",
                config_file_name,
                Value::from(config.include.clone()),
                Value::from(config.exclude.clone()),
            ),
        ));
    }

    TsconfigResolution { errors, options }
}

fn working_dir() -> Utf8PathBuf {
    std::env::current_dir()
        .ok()
        .and_then(|dir| Utf8PathBuf::try_from(dir).ok())
        .unwrap_or_else(|| Utf8PathBuf::from("."))
}

/// Removes single-line and multi-line comments from JSON, leaving comment
/// markers inside string literals untouched.
fn remove_json_comments(json: &str) -> String {
    #[derive(PartialEq)]
    enum State {
        Plain,
        InString,
        Escape,
        SlashSeen,
        LineComment,
        BlockComment,
        BlockStar,
    }

    let mut out = String::with_capacity(json.len());
    let mut state = State::Plain;

    for c in json.chars() {
        state = match state {
            State::Plain => match c {
                '/' => State::SlashSeen,
                '"' => {
                    out.push(c);
                    State::InString
                }
                _ => {
                    out.push(c);
                    State::Plain
                }
            },
            State::SlashSeen => match c {
                '/' => State::LineComment,
                '*' => State::BlockComment,
                _ => {
                    out.push('/');
                    out.push(c);
                    if c == '"' {
                        State::InString
                    } else {
                        State::Plain
                    }
                }
            },
            State::InString => {
                out.push(c);
                match c {
                    '"' => State::Plain,
                    '\\' => State::Escape,
                    _ => State::InString,
                }
            }
            State::Escape => {
                out.push(c);
                State::InString
            }
            State::LineComment => {
                if c == '\n' {
                    out.push(c);
                    State::Plain
                } else {
                    State::LineComment
                }
            }
            State::BlockComment => {
                if c == '*' {
                    State::BlockStar
                } else {
                    State::BlockComment
                }
            }
            State::BlockStar => match c {
                '/' => State::Plain,
                '*' => State::BlockStar,
                _ => State::BlockComment,
            },
        };
    }

    // A trailing lone slash is content, not a comment opener.
    if state == State::SlashSeen {
        out.push('/');
    }

    out
}
