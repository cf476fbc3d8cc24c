//! The extractor seam between the dispatcher and the per-dialect modules.

use crate::{
    errors::{Error, Result},
    model::{
        dialect::Dialect,
        stylesheet::StyleSheet,
        tree::{JsTree, Source, SyntaxTree},
    },
    syntax,
};
use std::borrow::Cow;

/// What an extractor hands back.
#[derive(Debug, Clone, Default)]
pub struct Extracted {
    /// Module identifiers in the order the extractor found them.
    pub dependencies: Vec<String>,
    /// A tree the extractor produced itself while reading raw text.
    pub tree: Option<SyntaxTree>,
}

/// A dialect-specific dependency extractor.
pub trait Extractor {
    /// Dialect this extractor serves.
    const DIALECT: Dialect;

    /// Per-dialect options; `()` when the dialect has none.
    type Options: Default;

    /// Scan `source` (text or tree) and return the referenced module identifiers.
    fn extract(source: &Source<'_>, options: &Self::Options) -> Result<Extracted>;
}

/// Borrow the JS tree from `source`, parsing raw text when needed.
///
/// The `bool` is true when the tree was parsed here (and so should be handed
/// back to the caller through [`Extracted::tree`]).
pub(crate) fn js_tree<'s>(
    dialect: Dialect,
    source: &'s Source<'_>,
) -> Result<(Cow<'s, JsTree>, bool)> {
    match source {
        Source::Tree(SyntaxTree::Js(t)) => Ok((Cow::Borrowed(t), false)),
        Source::Tree(other) => Err(Error::UnexpectedTree {
            dialect,
            found: other.family(),
        }),
        Source::Text(code) => Ok((Cow::Owned(syntax::js::parse(code)?), true)),
    }
}

/// Borrow the stylesheet from `source`, reading raw text with `read` when needed.
pub(crate) fn stylesheet<'s>(
    dialect: Dialect,
    source: &'s Source<'_>,
    read: impl FnOnce(&str) -> StyleSheet,
) -> Result<(Cow<'s, StyleSheet>, bool)> {
    match source {
        Source::Tree(SyntaxTree::Stylesheet(s)) => Ok((Cow::Borrowed(s), false)),
        Source::Tree(other) => Err(Error::UnexpectedTree {
            dialect,
            found: other.family(),
        }),
        Source::Text(code) => Ok((Cow::Owned(read(code)), true)),
    }
}
