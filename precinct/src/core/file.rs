//! File entry point: read a file, hint the dialect from its extension, dispatch.

use crate::{
    builtins,
    core::dispatch::{Extraction, extract},
    errors::{Error, Result},
    model::{dialect::Dialect, options::FileOptions, stylesheet::StyleSyntax},
};
use std::{fs, path::Path};

/// Dependencies of the file at `path`.
///
/// The extension decides the dialect hint (`.scss`/`.sass` → sass,
/// `.styl` → stylus, `.less` → less) and always replaces any `type` in
/// `options`; other extensions clear it so JS detection runs. With
/// `include_core: false`, built-in modules are filtered out.
///
/// # Errors
/// Returns [`Error::Io`] when the file cannot be read, plus any extractor error.
pub fn from_file(path: impl AsRef<Path>, options: &FileOptions) -> Result<Vec<String>> {
    extract_file(path.as_ref(), options).map(|e| e.dependencies)
}

/// Like [`from_file`], keeping the syntax tree.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn extract_file(path: &Path, options: &FileOptions) -> Result<Extraction> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    let mut extract_opts = options.extract.clone();
    extract_opts.dialect = Dialect::from_extension(ext);
    if extract_opts.dialect == Some(Dialect::Sass) && extract_opts.sass.syntax.is_none() {
        extract_opts.sass.syntax = Some(if ext.eq_ignore_ascii_case("sass") {
            StyleSyntax::Indented
        } else {
            StyleSyntax::Scss
        });
    }

    let mut extraction = extract(content.as_str(), extract_opts)?;
    if !options.include_core {
        extraction.dependencies.retain(|d| !builtins::is_builtin(d));
    }
    Ok(extraction)
}
