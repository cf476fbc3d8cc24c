//! CommonJS extractor: every `require('<literal>')` call, in source order.
//!
//! Calls with a computed argument (`require(name)`) are skipped. Duplicates are
//! reported as often as they appear.

use crate::{
    core::traits::{Extracted, Extractor, js_tree},
    errors::Result,
    model::{
        dialect::Dialect,
        tree::{JsTree, Source, SyntaxTree},
    },
    syntax::js::{call_args, callee_name, string_value, walk_preorder},
};

pub struct CommonJs;

impl Extractor for CommonJs {
    const DIALECT: Dialect = Dialect::CommonJs;
    type Options = ();

    fn extract(source: &Source<'_>, _options: &()) -> Result<Extracted> {
        let (tree, parsed) = js_tree(Self::DIALECT, source)?;
        let dependencies = require_calls(&tree);
        Ok(Extracted {
            dependencies,
            tree: parsed.then(|| SyntaxTree::Js(tree.into_owned())),
        })
    }
}

/// Literal arguments of all `require(...)` calls under the root.
pub(crate) fn require_calls(tree: &JsTree) -> Vec<String> {
    let mut out = Vec::new();
    walk_preorder(tree.root(), |node| {
        if callee_name(tree, node) != Some("require") {
            return;
        }
        if let Some(dep) = call_args(node)
            .first()
            .and_then(|arg| string_value(tree, *arg))
        {
            out.push(dep);
        }
    });
    out
}
