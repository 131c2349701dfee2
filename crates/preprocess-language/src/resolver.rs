//! Attribute-based language resolution.

use crate::alias::AliasRegistry;
use crate::error::LanguageError;
use std::path::Path;

/// The value of a parsed tag attribute.
///
/// Markup parsers produce strings for `lang="ts"` and a bare flag for
/// valueless attributes like `<script defer>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A string-valued attribute.
    Text(String),
    /// A valueless attribute.
    Flag(bool),
}

impl AttributeValue {
    fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// The language-bearing attributes of an embedded source block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageAttributes {
    /// An explicit language name, e.g. `lang="scss"`.
    pub lang: Option<AttributeValue>,
    /// A MIME-style type, e.g. `type="text/typescript"`.
    pub mime_type: Option<AttributeValue>,
    /// An external source path whose extension names the language.
    pub src: Option<AttributeValue>,
}

/// The outcome of language resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLanguage {
    /// The canonical language, if any signal produced one.
    pub lang: Option<String>,
    /// The author-facing name the canonical language was derived from,
    /// possibly equal to `lang`.
    pub alias: Option<String>,
}

/// Resolves the language of an embedded block from its tag attributes.
///
/// The first usable signal wins: `lang`, then `type` (with any `text/` or
/// `application/` prefix stripped), then the extension of a local `src`
/// path. `lang` and `type` must be strings when present; a non-string `src`
/// simply yields no signal.
pub fn resolve_language(
    attributes: &LanguageAttributes,
    aliases: &AliasRegistry,
) -> Result<ResolvedLanguage, LanguageError> {
    let mut alias: Option<String> = None;

    if let Some(lang) = &attributes.lang {
        let lang = lang
            .as_str()
            .ok_or(LanguageError::TypeMismatch { attribute: "lang" })?;
        alias = Some(lang.to_string());
    } else if let Some(mime_type) = &attributes.mime_type {
        let mime_type = mime_type
            .as_str()
            .ok_or(LanguageError::TypeMismatch { attribute: "type" })?;
        alias = Some(strip_mime_prefix(mime_type).to_string());
    } else if let Some(AttributeValue::Text(src)) = &attributes.src {
        if is_valid_local_path(src) {
            alias = extension_of(src);
        }
    }

    Ok(ResolvedLanguage {
        lang: alias.as_deref().map(|alias| aliases.resolve(alias).to_string()),
        alias,
    })
}

/// Strips a leading `text/` or `application/` MIME prefix, keeping values
/// without one verbatim.
fn strip_mime_prefix(mime_type: &str) -> &str {
    mime_type
        .strip_prefix("text/")
        .or_else(|| mime_type.strip_prefix("application/"))
        .unwrap_or(mime_type)
}

/// Whether a `src` value points at the local filesystem rather than a remote
/// resource.
fn is_valid_local_path(path: &str) -> bool {
    !path.is_empty() && !path.contains("://") && !path.starts_with("//")
}

/// The extension of the final path segment, or `None` when the segment has no
/// extension at all.
fn extension_of(path: &str) -> Option<String> {
    let basename = Path::new(path).file_name().and_then(|name| name.to_str())?;
    let parts: Vec<&str> = basename.split('.').collect();
    if parts.len() > 1 {
        parts.last().map(|ext| ext.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve(attributes: LanguageAttributes) -> Result<ResolvedLanguage, LanguageError> {
        resolve_language(&attributes, &AliasRegistry::new())
    }

    #[test]
    fn test_lang_attribute() {
        let resolved = resolve(LanguageAttributes {
            lang: Some("ts".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(resolved.lang.as_deref(), Some("typescript"));
        assert_eq!(resolved.alias.as_deref(), Some("ts"));
    }

    #[test]
    fn test_lang_wins_over_type_and_src() {
        let resolved = resolve(LanguageAttributes {
            lang: Some("sass".into()),
            mime_type: Some("text/stylus".into()),
            src: Some("theme.less".into()),
        })
        .unwrap();
        assert_eq!(resolved.lang.as_deref(), Some("scss"));
        assert_eq!(resolved.alias.as_deref(), Some("sass"));
    }

    #[test]
    fn test_type_attribute_strips_mime_prefix() {
        let resolved = resolve(LanguageAttributes {
            mime_type: Some("text/typescript".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(resolved.lang.as_deref(), Some("typescript"));
        assert_eq!(resolved.alias.as_deref(), Some("typescript"));

        let resolved = resolve(LanguageAttributes {
            mime_type: Some("application/json".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(resolved.alias.as_deref(), Some("json"));
    }

    #[test]
    fn test_type_attribute_without_prefix_is_verbatim() {
        let resolved = resolve(LanguageAttributes {
            mime_type: Some("coffee".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(resolved.lang.as_deref(), Some("coffeescript"));
        assert_eq!(resolved.alias.as_deref(), Some("coffee"));
    }

    #[test]
    fn test_src_extension() {
        let resolved = resolve(LanguageAttributes {
            src: Some("component.coffee".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(resolved.lang.as_deref(), Some("coffeescript"));
        assert_eq!(resolved.alias.as_deref(), Some("coffee"));
    }

    #[test]
    fn test_src_uses_final_extension_only() {
        let resolved = resolve(LanguageAttributes {
            src: Some("./styles/theme.module.styl".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(resolved.lang.as_deref(), Some("stylus"));
        assert_eq!(resolved.alias.as_deref(), Some("styl"));
    }

    #[test]
    fn test_src_without_extension() {
        let resolved = resolve(LanguageAttributes {
            src: Some("noext".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(resolved.lang, None);
        assert_eq!(resolved.alias, None);
    }

    #[test]
    fn test_remote_src_is_ignored() {
        for src in ["https://example.com/app.ts", "//cdn.example.com/app.ts"] {
            let resolved = resolve(LanguageAttributes {
                src: Some(src.into()),
                ..Default::default()
            })
            .unwrap();
            assert_eq!(resolved.alias, None);
        }
    }

    #[test]
    fn test_non_string_src_is_ignored() {
        let resolved = resolve(LanguageAttributes {
            src: Some(true.into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(resolved.alias, None);
    }

    #[test]
    fn test_non_string_lang_fails() {
        let error = resolve(LanguageAttributes {
            lang: Some(true.into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(error, LanguageError::TypeMismatch { attribute: "lang" });
    }

    #[test]
    fn test_non_string_type_fails() {
        let error = resolve(LanguageAttributes {
            mime_type: Some(true.into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(error, LanguageError::TypeMismatch { attribute: "type" });
    }

    #[test]
    fn test_no_attributes() {
        let resolved = resolve(LanguageAttributes::default()).unwrap();
        assert_eq!(resolved, ResolvedLanguage { lang: None, alias: None });
    }
}
