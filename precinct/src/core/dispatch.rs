//! Dispatch core: parse once, detect the dialect, route to its extractor.
//!
//! Flow:
//! 1) Normalize the options argument (a bare dialect tag is accepted).
//! 2) Raw text with no explicit dialect is parsed as JS. A parse failure is not
//!    an error: it yields an empty result with no tree.
//! 3) The dialect is the explicit one, or whatever detection finds in the tree.
//! 4) The matching extractor runs on the tree (or on the raw text when a
//!    dialect was given). Dialects without an extractor yield an empty list.
//! 5) The returned tree is the one the extractor produced, else the working tree.

use crate::{
    core::{
        detect,
        traits::{Extracted, Extractor},
    },
    dialects::{Amd, CommonJs, Es6, Sass, Stylus},
    errors::Result,
    model::{
        dialect::Dialect,
        options::{ExtractOptions, OptionsInput},
        tree::{Source, SyntaxTree},
    },
    syntax,
};

/// Result of one extraction.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Module identifiers exactly as the extractor returned them.
    pub dependencies: Vec<String>,
    /// The syntax tree behind this result, for callers that want it without
    /// re-parsing. `None` after a parse failure, and when a dialect was given
    /// for raw text that no extractor parsed.
    pub tree: Option<SyntaxTree>,
}

impl Extraction {
    fn empty() -> Self {
        Self::default()
    }
}

/// Find the modules referenced by `input`.
///
/// `options` may be an [`ExtractOptions`], a [`Dialect`], or a bare tag string
/// (`"es6"`), the last being the legacy positional form.
///
/// # Errors
/// Parse failures during detection are swallowed (empty result). Errors raised
/// by an extractor itself, such as a tree of the wrong family or raw text an
/// explicitly chosen JS extractor cannot parse, are returned.
///
/// # Example
/// ```
/// let out = precinct::extract("const a = require('./a');", precinct::ExtractOptions::default())?;
/// assert_eq!(out.dependencies, vec!["./a"]);
///
/// let out = precinct::extract("import b from 'b';", "es6")?;
/// assert_eq!(out.dependencies, vec!["b"]);
/// # Ok::<(), precinct::Error>(())
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn extract<'a>(
    input: impl Into<Source<'a>>,
    options: impl Into<OptionsInput>,
) -> Result<Extraction> {
    let options = options.into().normalize();
    let input = input.into();

    let working = match (options.dialect, input) {
        (None, Source::Text(code)) => match syntax::js::parse(code) {
            Ok(tree) => Source::Tree(SyntaxTree::Js(tree)),
            Err(e) => {
                tracing::debug!("could not parse content: {}", e);
                return Ok(Extraction::empty());
            }
        },
        (_, other) => other,
    };

    let dialect = match (options.dialect, &working) {
        (Some(d), _) => d,
        (None, Source::Tree(tree)) => detect::detect(tree),
        (None, Source::Text(_)) => Dialect::None,
    };

    let Extracted { dependencies, tree } = run_extractor(dialect, &working, &options)?;
    tracing::debug!(%dialect, count = dependencies.len(), "extracted dependencies");

    Ok(Extraction {
        dependencies,
        tree: tree.or_else(|| working.into_tree()),
    })
}

/// The dialect → extractor table.
fn run_extractor(
    dialect: Dialect,
    source: &Source<'_>,
    options: &ExtractOptions,
) -> Result<Extracted> {
    match dialect {
        Dialect::CommonJs => CommonJs::extract(source, &()),
        Dialect::Amd => Amd::extract(source, &options.amd),
        Dialect::Es6 => Es6::extract(source, &options.es6),
        Dialect::Sass => Sass::extract(source, &options.sass),
        Dialect::Stylus => Stylus::extract(source, &()),
        Dialect::Less | Dialect::None => {
            tracing::debug!(%dialect, "no extractor registered");
            Ok(Extracted::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::Error, model::options::AmdOptions, model::stylesheet::StyleSyntax};

    fn deps(code: &str) -> Vec<String> {
        extract(code, ExtractOptions::default()).unwrap().dependencies
    }

    #[test]
    fn detects_each_js_dialect() {
        assert_eq!(deps("var a = require('a');\nvar b = require('./b');"), vec!["a", "./b"]);
        assert_eq!(deps("define(['x', 'y'], function (x, y) {});"), vec!["x", "y"]);
        assert_eq!(deps("import a from 'a';\nexport * from './b';"), vec!["a", "./b"]);
    }

    #[test]
    fn malformed_source_degrades_to_empty() {
        let out = extract("function ( { require('a');", ExtractOptions::default()).unwrap();
        assert!(out.dependencies.is_empty());
        assert!(out.tree.is_none());
    }

    #[test]
    fn successful_parse_exposes_tree() {
        let out = extract("require('a');", ExtractOptions::default()).unwrap();
        let tree = out.tree.expect("tree");
        assert_eq!(tree.as_js().unwrap().root().kind(), "program");
    }

    #[test]
    fn deeply_nested_amd_module() {
        let depth = 10_000;
        let code = format!(
            "x = {}1{};\ndefine(['a'], function () {{}});",
            "[".repeat(depth),
            "]".repeat(depth)
        );
        assert_eq!(deps(&code), vec!["a"]);
    }

    #[test]
    fn legacy_string_options_match_detection() {
        let code = "import a from 'a';\nimport './b';";
        let detected = extract(code, ExtractOptions::default()).unwrap();
        let legacy = extract(code, "es6").unwrap();
        assert_eq!(detected.dependencies, legacy.dependencies);
    }

    #[test]
    fn explicit_type_overrides_detection() {
        let code = "import a from 'a';\nrequire(['b'], function () {});";
        let out = extract(code, Dialect::Amd).unwrap();
        assert_eq!(out.dependencies, vec!["b"]);
        // Plain ES6 routed to AMD finds nothing, but still runs the AMD extractor.
        assert!(extract("import a from 'a';", "amd").unwrap().dependencies.is_empty());
    }

    #[test]
    fn unsupported_dialects_are_silent() {
        let code = "@import 'a';";
        assert!(extract(code, "less").unwrap().dependencies.is_empty());
        assert!(extract(code, "coffee").unwrap().dependencies.is_empty());
        assert!(deps("var x = 1;").is_empty());
    }

    #[test]
    fn options_reach_the_extractor() {
        let code = "define(['a'], function () { require('lazy'); });";
        assert_eq!(deps(code), vec!["a", "lazy"]);
        let opts = ExtractOptions {
            amd: AmdOptions {
                skip_lazy_loaded: true,
            },
            ..ExtractOptions::default()
        };
        assert_eq!(extract(code, opts).unwrap().dependencies, vec!["a"]);
    }

    #[test]
    fn stylesheet_text_gets_the_extractor_tree() {
        let out = extract("@import 'reset';", "sass").unwrap();
        assert_eq!(out.dependencies, vec!["reset"]);
        assert!(matches!(out.tree, Some(SyntaxTree::Stylesheet(_))));
    }

    #[test]
    fn supplied_tree_is_not_reparsed_and_is_returned() {
        let sheet = syntax::stylesheet::parse("@require 'nib'", StyleSyntax::Stylus);
        let out = extract(sheet.clone(), Dialect::Stylus).unwrap();
        assert_eq!(out.dependencies, vec!["nib"]);
        match out.tree {
            Some(SyntaxTree::Stylesheet(s)) => assert_eq!(s, sheet),
            other => panic!("unexpected tree: {other:?}"),
        }

        // Without a type a stylesheet tree detects as none; it is still handed back.
        let out = extract(sheet, ExtractOptions::default()).unwrap();
        assert!(out.dependencies.is_empty());
        assert!(out.tree.is_some());
    }

    #[test]
    fn supplied_js_tree_is_detected() {
        let tree = syntax::js::parse("define(['a'], function (a) {});").unwrap();
        let out = extract(tree, ExtractOptions::default()).unwrap();
        assert_eq!(out.dependencies, vec!["a"]);
        assert!(matches!(out.tree, Some(SyntaxTree::Js(_))));
    }

    #[test]
    fn extractor_errors_propagate() {
        let sheet = syntax::stylesheet::parse("@import 'a';", StyleSyntax::Scss);
        let err = extract(sheet, "commonjs").unwrap_err();
        assert!(matches!(err, Error::UnexpectedTree { .. }));

        let err = extract("require('a'", "commonjs").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
