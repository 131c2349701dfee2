//! Language detection for embedded source blocks.
//!
//! Markup preprocessors hand this crate the attributes of a tag like
//! `<script lang="ts">` or `<style src="./theme.scss">` and get back the
//! canonical language the block is written in, so they can dispatch to the
//! right tool. The crate also carries the per-language default options each
//! tool expects, including the ones that require an optional support module.
//!
//! # Example
//!
//! ```
//! use preprocess_language::{resolve_language, AliasRegistry, LanguageAttributes};
//!
//! let aliases = AliasRegistry::new();
//! let attributes = LanguageAttributes {
//!     lang: Some("ts".into()),
//!     ..Default::default()
//! };
//!
//! let resolved = resolve_language(&attributes, &aliases).unwrap();
//! assert_eq!(resolved.lang.as_deref(), Some("typescript"));
//! assert_eq!(resolved.alias.as_deref(), Some("ts"));
//! ```

mod alias;
mod defaults;
mod error;
mod resolver;
mod source_maps;

pub use alias::AliasRegistry;
pub use defaults::{
    DefaultsRegistry, LanguageDefaults, ModuleHandle, ModuleLoader, StaticModuleLoader,
};
pub use error::LanguageError;
pub use resolver::{resolve_language, AttributeValue, LanguageAttributes, ResolvedLanguage};
pub use source_maps::source_map_property;
