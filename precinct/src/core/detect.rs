//! Dialect detection for JS-family syntax trees.
//!
//! A single walk records which module constructs appear. Priority when several
//! are present: ES6 `import`/`export` statements, then AMD (`define` calls or a
//! driver-script `require([...])`), then CommonJS (`require` calls or
//! `module.exports` / `exports.x`). Nothing recognizable yields
//! [`Dialect::None`].

use crate::{
    model::{
        dialect::Dialect,
        tree::{JsTree, SyntaxTree},
    },
    syntax::js::{call_args, callee_name, walk_preorder},
};
use tree_sitter::Node;

#[derive(Debug, Default)]
struct Signals {
    es6: bool,
    define: bool,
    amd_driver_require: bool,
    require: bool,
    exports: bool,
}

/// Decide which module dialect `tree` uses.
///
/// Stylesheet trees are not inspected and always detect as `none`.
pub fn detect(tree: &SyntaxTree) -> Dialect {
    match tree {
        SyntaxTree::Js(js) => detect_js(js),
        SyntaxTree::Stylesheet(_) => Dialect::None,
    }
}

pub fn detect_js(tree: &JsTree) -> Dialect {
    let mut s = Signals::default();

    walk_preorder(tree.root(), |node| match node.kind() {
        "import_statement" | "export_statement" => s.es6 = true,
        "call_expression" => match callee_name(tree, node) {
            Some("define") => s.define = true,
            Some("require") => {
                if first_arg_is_array(node) {
                    s.amd_driver_require |= is_top_level(node);
                } else {
                    s.require = true;
                }
            }
            _ => {}
        },
        "member_expression" => s.exports |= is_exports_reference(tree, node),
        _ => {}
    });

    let dialect = if s.es6 {
        Dialect::Es6
    } else if s.define || s.amd_driver_require {
        Dialect::Amd
    } else if s.require || s.exports {
        Dialect::CommonJs
    } else {
        Dialect::None
    };
    tracing::debug!(?s, %dialect, "detected module dialect");
    dialect
}

fn first_arg_is_array(call: Node<'_>) -> bool {
    call_args(call).first().is_some_and(|a| a.kind() == "array")
}

/// `require([...])` sitting directly in a program-level expression statement.
fn is_top_level(call: Node<'_>) -> bool {
    call.parent()
        .filter(|p| p.kind() == "expression_statement")
        .and_then(|p| p.parent())
        .is_some_and(|pp| pp.kind() == "program")
}

/// `module.exports` or `exports.<name>`.
fn is_exports_reference(tree: &JsTree, member: Node<'_>) -> bool {
    let Some(object) = member.child_by_field_name("object") else {
        return false;
    };
    if object.kind() != "identifier" {
        return false;
    }
    match tree.text(object) {
        "exports" => true,
        "module" => member
            .child_by_field_name("property")
            .is_some_and(|p| tree.text(p) == "exports"),
        _ => false,
    }
}
