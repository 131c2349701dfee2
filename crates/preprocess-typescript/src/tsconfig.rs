//! Compiler-configuration resolution.

use crate::error::TypescriptError;
use crate::options::{TsconfigFile, TypescriptOptions};
use crate::working_dir;
use camino::Utf8Path;
use serde_json::json;
use ts_toolchain::{
    codes, format_diagnostics, CompilerOptionsJson, CompilerService, ImportsNotUsedAsValues,
    TsconfigResolution,
};

/// Resolves compiler options through the project-file path.
///
/// The boolean sentinels short-circuit before any file I/O. Otherwise the
/// config file is the explicitly named one or the nearest `tsconfig.json`
/// above the search directory; relative paths resolve against the working
/// directory. The file's `include` list is cleared before expansion — this
/// pipeline transpiles exactly one given file, so a project-wide source scan
/// would be wasted work and a source of unrelated errors — and the resulting
/// "no inputs were found" diagnostic (18003) is filtered out as expected.
pub fn load_tsconfig(
    service: &dyn CompilerService,
    compiler_options_json: &CompilerOptionsJson,
    filename: &Utf8Path,
    options: &TypescriptOptions,
) -> Result<TsconfigResolution, TypescriptError> {
    let cwd = working_dir();

    if options.tsconfig_file.is_sentinel() {
        let TsconfigResolution { options, .. } =
            service.convert_options_from_json(compiler_options_json, &cwd);
        return Ok(TsconfigResolution {
            errors: Vec::new(),
            options,
        });
    }

    let file_directory = match &options.tsconfig_directory {
        Some(directory) => directory.clone(),
        None => {
            let parent = filename.parent().unwrap_or(Utf8Path::new(""));
            if parent.as_str().is_empty() {
                cwd.clone()
            } else {
                parent.to_owned()
            }
        }
    };

    let tsconfig_file = match &options.tsconfig_file {
        TsconfigFile::Path(path) => Some(path.clone()),
        _ => service.find_config_file(&file_directory),
    };
    let Some(tsconfig_file) = tsconfig_file else {
        // No project file anywhere above the search directory; fall back to
        // the explicit options alone.
        return Ok(service.convert_options_from_json(compiler_options_json, &cwd));
    };

    let tsconfig_file = if tsconfig_file.is_absolute() {
        tsconfig_file
    } else {
        cwd.join(tsconfig_file)
    };
    let base_path = tsconfig_file.parent().unwrap_or(&cwd).to_owned();

    let mut config = service
        .read_config_file(&tsconfig_file)
        .map_err(|diagnostic| TypescriptError::ConfigLoad {
            formatted: format_diagnostics(&[diagnostic], &base_path),
        })?;

    // This pipeline feeds the compiler one file; never rediscover the
    // project's own source list.
    config.include = Vec::new();

    let mut resolution = service.parse_config_content(
        &config,
        &base_path,
        compiler_options_json,
        &tsconfig_file,
    );
    resolution
        .errors
        .retain(|diagnostic| diagnostic.code != codes::NO_INPUTS_WERE_FOUND);

    Ok(resolution)
}

/// Resolves the full compiler configuration for one transform invocation:
/// built-in defaults, overlaid by explicit options, merged with the project
/// file when requested, then the fixed post-merge overrides.
pub fn resolve_compiler_options(
    service: &dyn CompilerService,
    filename: &Utf8Path,
    options: &TypescriptOptions,
) -> Result<TsconfigResolution, TypescriptError> {
    let mut compiler_options_json = CompilerOptionsJson::new();
    compiler_options_json.insert("moduleResolution", json!("node"));
    compiler_options_json.insert("target", json!("es6"));
    if let Some(user_options) = &options.compiler_options {
        compiler_options_json.overlay(user_options);
    }

    let mut resolution = if options.wants_project_config() {
        load_tsconfig(service, &compiler_options_json, filename, options)?
    } else {
        service.convert_options_from_json(&compiler_options_json, &working_dir())
    };

    // Non-negotiable for embedded blocks: unused value imports are an error
    // instead of a silent drop, and the surrounding filename need not end in
    // a TypeScript extension.
    resolution.options.imports_not_used_as_values = ImportsNotUsedAsValues::Error;
    resolution.options.allow_non_ts_extensions = true;

    if resolution
        .options
        .target
        .is_some_and(|target| target.is_pre_es2015())
    {
        return Err(TypescriptError::UnsupportedTarget);
    }

    Ok(resolution)
}
