//! Language alias resolution.

use std::collections::HashMap;

/// Built-in alias table. Aliases resolve in a single hop; the table contains
/// no chained entries and chains are deliberately not followed.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("pcss", "css"),
    ("postcss", "css"),
    ("sugarss", "css"),
    ("sass", "scss"),
    ("styl", "stylus"),
    ("js", "javascript"),
    ("coffee", "coffeescript"),
    ("ts", "typescript"),
];

/// Maps short or community language names to canonical language identifiers.
///
/// Constructed once at startup and passed by reference into resolution; there
/// is no ambient global instance. Callers may register additional aliases
/// before handing the registry out, but there is no removal operation.
#[derive(Debug, Clone)]
pub struct AliasRegistry {
    map: HashMap<String, String>,
}

impl AliasRegistry {
    /// Creates a registry seeded with the built-in alias table.
    pub fn new() -> Self {
        let map = BUILTIN_ALIASES
            .iter()
            .map(|(alias, lang)| (alias.to_string(), lang.to_string()))
            .collect();
        Self { map }
    }

    /// Resolves an alias to its canonical language name.
    ///
    /// Unknown names pass through unchanged, so canonical names resolve to
    /// themselves.
    pub fn resolve<'a>(&'a self, alias: &'a str) -> &'a str {
        self.map.get(alias).map(String::as_str).unwrap_or(alias)
    }

    /// Registers additional alias mappings. The last write for a given alias
    /// wins. Canonical names are not validated against the defaults registry;
    /// the two are deliberately decoupled.
    pub fn add_aliases<A, L>(&mut self, entries: impl IntoIterator<Item = (A, L)>)
    where
        A: Into<String>,
        L: Into<String>,
    {
        for (alias, lang) in entries {
            self.map.insert(alias.into(), lang.into());
        }
    }

    /// Returns whether `alias` is a true alias of `lang`, i.e. a distinct
    /// name that resolves to it. A canonical name is not an alias of itself.
    pub fn is_alias_of(&self, alias: &str, lang: &str) -> bool {
        alias != lang && self.resolve(alias) == lang
    }
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_aliases_resolve() {
        let registry = AliasRegistry::new();
        assert_eq!(registry.resolve("ts"), "typescript");
        assert_eq!(registry.resolve("coffee"), "coffeescript");
        assert_eq!(registry.resolve("sass"), "scss");
        assert_eq!(registry.resolve("styl"), "stylus");
        assert_eq!(registry.resolve("pcss"), "css");
        assert_eq!(registry.resolve("postcss"), "css");
        assert_eq!(registry.resolve("sugarss"), "css");
        assert_eq!(registry.resolve("js"), "javascript");
    }

    #[test]
    fn test_canonical_names_are_fixed_points() {
        let registry = AliasRegistry::new();
        for lang in ["css", "scss", "stylus", "javascript", "coffeescript", "typescript"] {
            assert_eq!(registry.resolve(lang), lang);
        }
    }

    #[test]
    fn test_unknown_names_pass_through() {
        let registry = AliasRegistry::new();
        assert_eq!(registry.resolve("pug"), "pug");
        assert_eq!(registry.resolve("not-a-language"), "not-a-language");
    }

    #[test]
    fn test_is_alias_of() {
        let registry = AliasRegistry::new();
        assert!(registry.is_alias_of("ts", "typescript"));
        assert!(!registry.is_alias_of("typescript", "typescript"));
        assert!(!registry.is_alias_of("ts", "javascript"));
    }

    #[test]
    fn test_add_aliases_last_write_wins() {
        let mut registry = AliasRegistry::new();
        registry.add_aliases([("cts", "typescript"), ("cts", "coffeescript")]);
        assert_eq!(registry.resolve("cts"), "coffeescript");
    }

    #[test]
    fn test_add_aliases_can_overwrite_builtins() {
        let mut registry = AliasRegistry::new();
        registry.add_aliases([("sass", "sass")]);
        assert_eq!(registry.resolve("sass"), "sass");
    }
}
