//! Extraction options.
//!
//! Groups:
//! - [`ExtractOptions`] : explicit dialect override plus per-dialect blocks
//! - [`FileOptions`] : `ExtractOptions` + the built-in module filter
//! - [`OptionsInput`] : the accepted call shapes, normalized once at entry
//!
//! All structs are `serde`-friendly (camelCase keys) so they can be loaded
//! from JSON. Unknown keys, including blocks for dialects without options,
//! are ignored.

use crate::model::{dialect::Dialect, stylesheet::StyleSyntax};
use serde::{Deserialize, Serialize};

/// Options for the dispatch core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Explicit dialect; skips parsing and detection when set.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub dialect: Option<Dialect>,
    pub amd: AmdOptions,
    pub es6: Es6Options,
    pub sass: SassOptions,
}

impl ExtractOptions {
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self {
            dialect: Some(dialect),
            ..Self::default()
        }
    }
}

/// AMD extractor options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AmdOptions {
    /// Drop `require` calls made inside factories and driver callbacks.
    pub skip_lazy_loaded: bool,
}

/// ES6 extractor options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Es6Options {
    /// Also report CommonJS `require('x')` calls found in an ES6 module.
    pub mixed_imports: bool,
    /// Ignore dynamic `import('x')` expressions.
    pub skip_async_imports: bool,
}

/// Sass extractor options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SassOptions {
    /// Surface syntax of raw text; SCSS when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syntax: Option<StyleSyntax>,
}

/// Options for the file entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileOptions {
    /// Keep built-in (runtime core) modules in the result.
    pub include_core: bool,
    #[serde(flatten)]
    pub extract: ExtractOptions,
}

impl Default for FileOptions {
    fn default() -> Self {
        Self {
            include_core: true,
            extract: ExtractOptions::default(),
        }
    }
}

/// Second argument of [`crate::extract`].
///
/// Besides a full options value, a bare dialect tag is accepted for
/// backward compatibility (`extract(src, "es6")`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsInput {
    Dialect(Dialect),
    Options(ExtractOptions),
}

impl OptionsInput {
    /// Collapse both shapes into one [`ExtractOptions`].
    pub fn normalize(self) -> ExtractOptions {
        match self {
            OptionsInput::Dialect(d) => ExtractOptions::with_dialect(d),
            OptionsInput::Options(o) => o,
        }
    }
}

impl Default for OptionsInput {
    fn default() -> Self {
        OptionsInput::Options(ExtractOptions::default())
    }
}

impl From<&str> for OptionsInput {
    fn from(tag: &str) -> Self {
        OptionsInput::Dialect(Dialect::from(tag))
    }
}

impl From<Dialect> for OptionsInput {
    fn from(d: Dialect) -> Self {
        OptionsInput::Dialect(d)
    }
}

impl From<ExtractOptions> for OptionsInput {
    fn from(o: ExtractOptions) -> Self {
        OptionsInput::Options(o)
    }
}

impl From<&ExtractOptions> for OptionsInput {
    fn from(o: &ExtractOptions) -> Self {
        OptionsInput::Options(o.clone())
    }
}

impl From<Option<ExtractOptions>> for OptionsInput {
    fn from(o: Option<ExtractOptions>) -> Self {
        OptionsInput::Options(o.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_tag_normalizes_to_type() {
        let o = OptionsInput::from("es6").normalize();
        assert_eq!(o.dialect, Some(Dialect::Es6));
        assert_eq!(o.amd, AmdOptions::default());
    }

    #[test]
    fn full_options_pass_through() {
        let mut opts = ExtractOptions::default();
        opts.amd.skip_lazy_loaded = true;
        let o = OptionsInput::from(opts.clone()).normalize();
        assert_eq!(o, opts);
        assert_eq!(OptionsInput::from(None).normalize(), ExtractOptions::default());
    }

    #[test]
    fn deserializes_camel_case_and_ignores_unknown_dialects() {
        let json = r#"{
            "type": "amd",
            "amd": { "skipLazyLoaded": true },
            "es6": { "mixedImports": true },
            "coffee": { "whatever": 1 }
        }"#;
        let o: ExtractOptions = serde_json::from_str(json).unwrap();
        assert_eq!(o.dialect, Some(Dialect::Amd));
        assert!(o.amd.skip_lazy_loaded);
        assert!(o.es6.mixed_imports);
        assert!(!o.es6.skip_async_imports);
    }

    #[test]
    fn file_options_default_includes_core() {
        let o: FileOptions = serde_json::from_str("{}").unwrap();
        assert!(o.include_core);
        let o: FileOptions =
            serde_json::from_str(r#"{ "includeCore": false, "type": "es6" }"#).unwrap();
        assert!(!o.include_core);
        assert_eq!(o.extract.dialect, Some(Dialect::Es6));
    }
}
