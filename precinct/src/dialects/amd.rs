//! AMD extractor.
//!
//! Recognized forms:
//! - `define(['a', 'b'], factory)` and `define('name', ['a'], factory)`
//! - REM form `define(function (require) { require('a') })`, whose `require`
//!   calls are the dependencies
//! - object form `define({...})` (no dependencies)
//! - driver script `require(['a'], callback)` outside any `define`
//!
//! `require` calls inside factories and callbacks are lazy-loaded dependencies;
//! they are included unless `skip_lazy_loaded` is set. The pseudo-modules
//! `require`, `exports` and `module` are dropped and the result is
//! de-duplicated, keeping first occurrence.

use crate::{
    core::traits::{Extracted, Extractor, js_tree},
    errors::Result,
    model::{
        dialect::Dialect,
        options::AmdOptions,
        tree::{JsTree, Source, SyntaxTree},
    },
    syntax::js::{
        array_strings, call_args, callee_name, is_function_like, string_value, walk_preorder,
        walk_pruned,
    },
};
use tree_sitter::Node;

const PSEUDO_MODULES: [&str; 3] = ["require", "exports", "module"];

pub struct Amd;

impl Extractor for Amd {
    const DIALECT: Dialect = Dialect::Amd;
    type Options = AmdOptions;

    fn extract(source: &Source<'_>, options: &AmdOptions) -> Result<Extracted> {
        let (tree, parsed) = js_tree(Self::DIALECT, source)?;

        let mut raw = Vec::new();
        visit(&tree, tree.root(), options, &mut raw);

        let mut dependencies: Vec<String> = Vec::with_capacity(raw.len());
        for dep in raw {
            if PSEUDO_MODULES.contains(&dep.as_str()) || dependencies.contains(&dep) {
                continue;
            }
            dependencies.push(dep);
        }

        Ok(Extracted {
            dependencies,
            tree: parsed.then(|| SyntaxTree::Js(tree.into_owned())),
        })
    }
}

/// Walk from `root` looking for `define` calls and driver-script `require([...])`
/// calls. Neither is descended into once handled.
fn visit(tree: &JsTree, root: Node<'_>, options: &AmdOptions, out: &mut Vec<String>) {
    walk_pruned(root, |node| match callee_name(tree, node) {
        Some("define") => {
            collect_define(tree, node, options, out);
            false
        }
        Some("require") => {
            let args = call_args(node);
            let Some(first) = args.first().filter(|a| a.kind() == "array") else {
                return true;
            };
            out.extend(array_strings(tree, *first));
            if !options.skip_lazy_loaded {
                for cb in args.iter().skip(1).filter(|a| is_function_like(**a)) {
                    out.extend(inner_requires(tree, *cb, true));
                }
            }
            false
        }
        _ => true,
    });
}

fn collect_define(tree: &JsTree, call: Node<'_>, options: &AmdOptions, out: &mut Vec<String>) {
    let mut args = call_args(call);
    // Named module: drop the leading id.
    if args.len() > 1 && string_value(tree, args[0]).is_some() {
        args.remove(0);
    }

    let deps = args.iter().find(|a| a.kind() == "array");
    let factory = args.iter().find(|a| is_function_like(**a));

    match (deps, factory) {
        (Some(deps), factory) => {
            out.extend(array_strings(tree, *deps));
            if let Some(f) = factory.filter(|_| !options.skip_lazy_loaded) {
                out.extend(inner_requires(tree, *f, true));
            }
        }
        // REM form: plain `require('x')` calls are declared dependencies,
        // array-style requires inside it stay lazy.
        (None, Some(f)) => {
            out.extend(inner_requires(tree, *f, !options.skip_lazy_loaded));
        }
        (None, None) => {}
    }
}

/// `require('x')` calls under `scope`; with `include_arrays`, also the
/// elements of `require([...])` calls.
fn inner_requires(tree: &JsTree, scope: Node<'_>, include_arrays: bool) -> Vec<String> {
    let mut out = Vec::new();
    walk_preorder(scope, |node| {
        if callee_name(tree, node) != Some("require") {
            return;
        }
        let args = call_args(node);
        let Some(first) = args.first() else {
            return;
        };
        if first.kind() == "array" {
            if include_arrays {
                out.extend(array_strings(tree, *first));
            }
        } else if let Some(dep) = string_value(tree, *first) {
            out.push(dep);
        }
    });
    out
}
