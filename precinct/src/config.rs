//! Configuration loader and validator.
//!
//! Responsibilities:
//! - Read `PRECINCT_*` environment variables or a JSON file into [`FileOptions`]
//! - Apply defaults when values are missing
//! - Validate constraints (booleans must parse, sass syntax must be a Sass syntax)

use crate::{
    errors::{Error, Result},
    model::{dialect::Dialect, options::FileOptions, stylesheet::StyleSyntax},
};
use std::{env, fs, path::Path};

pub const ENV_INCLUDE_CORE: &str = "PRECINCT_INCLUDE_CORE";
pub const ENV_TYPE: &str = "PRECINCT_TYPE";
pub const ENV_AMD_SKIP_LAZY_LOADED: &str = "PRECINCT_AMD_SKIP_LAZY_LOADED";
pub const ENV_ES6_MIXED_IMPORTS: &str = "PRECINCT_ES6_MIXED_IMPORTS";
pub const ENV_ES6_SKIP_ASYNC_IMPORTS: &str = "PRECINCT_ES6_SKIP_ASYNC_IMPORTS";
pub const ENV_SASS_SYNTAX: &str = "PRECINCT_SASS_SYNTAX";

/// Load [`FileOptions`] from ENV variables, falling back to defaults if not set.
pub fn load_from_env_or_default() -> Result<FileOptions> {
    load_from_vars(|key| env::var(key).ok())
}

/// Load [`FileOptions`] from a JSON file (camelCase keys, all optional).
pub fn load_from_json_file(path: &Path) -> Result<FileOptions> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: FileOptions = serde_json::from_str(&raw)?;
    validate(&cfg)?;
    Ok(cfg)
}

/// Same as [`load_from_env_or_default`] with an injectable variable lookup.
pub fn load_from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<FileOptions> {
    let mut cfg = FileOptions::default();

    if let Some(v) = lookup(ENV_INCLUDE_CORE) {
        cfg.include_core = parse_bool(ENV_INCLUDE_CORE, &v)?;
    }
    if let Some(v) = lookup(ENV_TYPE).filter(|v| !v.trim().is_empty()) {
        cfg.extract.dialect = Some(Dialect::from(v.trim()));
    }
    if let Some(v) = lookup(ENV_AMD_SKIP_LAZY_LOADED) {
        cfg.extract.amd.skip_lazy_loaded = parse_bool(ENV_AMD_SKIP_LAZY_LOADED, &v)?;
    }
    if let Some(v) = lookup(ENV_ES6_MIXED_IMPORTS) {
        cfg.extract.es6.mixed_imports = parse_bool(ENV_ES6_MIXED_IMPORTS, &v)?;
    }
    if let Some(v) = lookup(ENV_ES6_SKIP_ASYNC_IMPORTS) {
        cfg.extract.es6.skip_async_imports = parse_bool(ENV_ES6_SKIP_ASYNC_IMPORTS, &v)?;
    }
    if let Some(v) = lookup(ENV_SASS_SYNTAX) {
        cfg.extract.sass.syntax = Some(parse_sass_syntax(&v)?);
    }

    validate(&cfg)?;
    Ok(cfg)
}

/// Basic config validation. Returns an error if validation fails.
pub fn validate(cfg: &FileOptions) -> Result<()> {
    if cfg.extract.sass.syntax == Some(StyleSyntax::Stylus) {
        return Err(Error::Config(
            "sass.syntax must be `scss` or `indented`, not `stylus`".into(),
        ));
    }
    Ok(())
}

fn parse_bool(key: &str, v: &str) -> Result<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(Error::Config(format!("{key}: expected a boolean, got `{other}`"))),
    }
}

fn parse_sass_syntax(v: &str) -> Result<StyleSyntax> {
    match v.trim().to_ascii_lowercase().as_str() {
        "scss" => Ok(StyleSyntax::Scss),
        "indented" | "sass" => Ok(StyleSyntax::Indented),
        other => Err(Error::Config(format!(
            "{ENV_SASS_SYNTAX}: expected `scss` or `indented`, got `{other}`"
        ))),
    }
}
