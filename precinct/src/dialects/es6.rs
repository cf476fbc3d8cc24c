//! ES6 module extractor.
//!
//! Collects, in source order: `import ... from 'x'` and bare `import 'x'`,
//! re-exports `export ... from 'x'`, and dynamic `import('x')`. With
//! `mixed_imports`, CommonJS `require('x')` calls are collected as well.

use crate::{
    core::traits::{Extracted, Extractor, js_tree},
    errors::Result,
    model::{
        dialect::Dialect,
        options::Es6Options,
        tree::{JsTree, Source, SyntaxTree},
    },
    syntax::js::{call_args, callee_name, is_dynamic_import, string_value, walk_preorder},
};

pub struct Es6;

impl Extractor for Es6 {
    const DIALECT: Dialect = Dialect::Es6;
    type Options = Es6Options;

    fn extract(source: &Source<'_>, options: &Es6Options) -> Result<Extracted> {
        let (tree, parsed) = js_tree(Self::DIALECT, source)?;
        let dependencies = collect(&tree, options);
        Ok(Extracted {
            dependencies,
            tree: parsed.then(|| SyntaxTree::Js(tree.into_owned())),
        })
    }
}

fn collect(tree: &JsTree, options: &Es6Options) -> Vec<String> {
    let mut out = Vec::new();
    walk_preorder(tree.root(), |node| match node.kind() {
        "import_statement" | "export_statement" => {
            if let Some(dep) = node
                .child_by_field_name("source")
                .and_then(|s| string_value(tree, s))
            {
                out.push(dep);
            }
        }
        "call_expression" => {
            let wanted = (is_dynamic_import(node) && !options.skip_async_imports)
                || (options.mixed_imports && callee_name(tree, node) == Some("require"));
            if !wanted {
                return;
            }
            if let Some(dep) = call_args(node)
                .first()
                .and_then(|arg| string_value(tree, *arg))
            {
                out.push(dep);
            }
        }
        _ => {}
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps_with(code: &str, options: Es6Options) -> Vec<String> {
        Es6::extract(&Source::Text(code), &options).unwrap().dependencies
    }

    fn deps(code: &str) -> Vec<String> {
        deps_with(code, Es6Options::default())
    }

    #[test]
    fn import_forms() {
        let code = r#"
            import a from 'a';
            import * as b from "./b";
            import { c, d as e } from '../c';
            import 'side-effect';
        "#;
        assert_eq!(deps(code), vec!["a", "./b", "../c", "side-effect"]);
    }

    #[test]
    fn re_exports_only_when_sourced() {
        let code = r#"
            export { x } from './x';
            export * from './all';
            export const local = 1;
            export default function () {}
        "#;
        assert_eq!(deps(code), vec!["./x", "./all"]);
    }

    #[test]
    fn dynamic_imports_and_skip_option() {
        let code = "import a from 'a';\nconst lazy = () => import('./lazy');";
        assert_eq!(deps(code), vec!["a", "./lazy"]);
        let opts = Es6Options {
            skip_async_imports: true,
            ..Es6Options::default()
        };
        assert_eq!(deps_with(code, opts), vec!["a"]);
    }

    #[test]
    fn mixed_imports() {
        let code = "import a from 'a';\nconst b = require('b');";
        assert_eq!(deps(code), vec!["a"]);
        let opts = Es6Options {
            mixed_imports: true,
            ..Es6Options::default()
        };
        assert_eq!(deps_with(code, opts), vec!["a", "b"]);
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(deps("import a from 'a';\nimport { b } from 'a';"), vec!["a", "a"]);
    }
}
