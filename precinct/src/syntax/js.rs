//! JS-family syntax-tree provider and node helpers.
//!
//! Parsing goes through Tree-sitter with the JavaScript grammar. Tree-sitter
//! recovers from errors, so a parse is only accepted when the resulting tree
//! has no ERROR/MISSING nodes.

use crate::{
    errors::{Error, Result},
    model::tree::JsTree,
};
use std::sync::Arc;
use tree_sitter::{Node, Parser};
use tree_sitter_javascript as ts_js;

/// Parse `code` into a [`JsTree`], failing on any syntax error.
pub fn parse(code: &str) -> Result<JsTree> {
    let mut parser = Parser::new();
    parser.set_language(&ts_js::LANGUAGE.into())?;

    let tree = parser
        .parse(code, None)
        .ok_or_else(|| Error::Parse("parser returned no tree".into()))?;

    let root = tree.root_node();
    if root.has_error() {
        let at = first_error(root).unwrap_or(root);
        let pos = at.start_position();
        return Err(Error::Parse(format!(
            "syntax error at line {}, column {}",
            pos.row + 1,
            pos.column + 1
        )));
    }

    Ok(JsTree::new(tree, Arc::from(code)))
}

/// Deepest-first search for the first ERROR or MISSING node.
fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut node = root;
    loop {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        let mut w = node.walk();
        let next = node.children(&mut w).find(|ch| ch.has_error());
        match next {
            Some(ch) => node = ch,
            None => return (node != root).then_some(node),
        }
    }
}

/// Calls `f` on every node under `root` in source (pre-)order.
pub fn walk_preorder<'t>(root: Node<'t>, mut f: impl FnMut(Node<'t>)) {
    walk_pruned(root, |node| {
        f(node);
        true
    });
}

/// Pre-order walk where `f` returns whether to descend into the node's children.
/// Uses a cursor, so nesting depth does not grow the stack.
pub fn walk_pruned<'t>(root: Node<'t>, mut f: impl FnMut(Node<'t>) -> bool) {
    let mut cursor = root.walk();
    loop {
        if f(cursor.node()) && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

/// For a `call_expression` whose callee is a plain identifier, that name.
pub fn callee_name<'t>(tree: &'t JsTree, call: Node<'t>) -> Option<&'t str> {
    if call.kind() != "call_expression" {
        return None;
    }
    let func = call.child_by_field_name("function")?;
    (func.kind() == "identifier").then(|| tree.text(func))
}

/// True for a dynamic `import(...)` call.
pub fn is_dynamic_import(call: Node<'_>) -> bool {
    call.kind() == "call_expression"
        && call
            .child_by_field_name("function")
            .is_some_and(|f| f.kind() == "import")
}

/// Call arguments, comments excluded.
pub fn call_args<'t>(call: Node<'t>) -> Vec<Node<'t>> {
    let Some(args) = call.child_by_field_name("arguments") else {
        return Vec::new();
    };
    let mut w = args.walk();
    let out = args
        .named_children(&mut w)
        .filter(|n| n.kind() != "comment")
        .collect();
    out
}

/// Value of a string literal, or of a template literal without substitutions.
pub fn string_value(tree: &JsTree, node: Node<'_>) -> Option<String> {
    match node.kind() {
        "string" => Some(strip_quotes(tree.text(node))),
        "template_string" => {
            let mut w = node.walk();
            let has_subst = node
                .named_children(&mut w)
                .any(|c| c.kind() == "template_substitution");
            (!has_subst).then(|| strip_quotes(tree.text(node)))
        }
        _ => None,
    }
}

/// String elements of an `array` literal, in order. Non-string elements are skipped.
pub fn array_strings(tree: &JsTree, array: Node<'_>) -> Vec<String> {
    let mut w = array.walk();
    let out = array
        .named_children(&mut w)
        .filter_map(|el| string_value(tree, el))
        .collect();
    out
}

/// True for function-valued expressions (AMD factories, callbacks).
pub fn is_function_like(n: Node<'_>) -> bool {
    matches!(
        n.kind(),
        "function_expression" | "function" | "arrow_function" | "generator_function"
    )
}

fn strip_quotes(s: &str) -> String {
    let t = s.trim();
    let quoted = t.len() >= 2
        && ((t.starts_with('"') && t.ends_with('"'))
            || (t.starts_with('\'') && t.ends_with('\''))
            || (t.starts_with('`') && t.ends_with('`')));
    if quoted {
        t[1..t.len() - 1].to_string()
    } else {
        t.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_source() {
        let t = parse("var a = require('a');").unwrap();
        assert_eq!(t.root().kind(), "program");
        assert!(t.source().contains("require"));
    }

    #[test]
    fn rejects_unbalanced_braces() {
        let err = parse("function foo() { if (x) { return 1; }").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn walks_in_source_order() {
        let t = parse("require('a'); require('b'); require('c');").unwrap();
        let mut seen = Vec::new();
        walk_preorder(t.root(), |n| {
            if callee_name(&t, n) == Some("require") {
                let args = call_args(n);
                seen.push(string_value(&t, args[0]).unwrap());
            }
        });
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[test]
    fn string_values() {
        let t = parse("f('a', \"b\", `c`, `d${e}`, 1);").unwrap();
        let mut vals = Vec::new();
        walk_preorder(t.root(), |n| {
            if callee_name(&t, n) == Some("f") {
                vals = call_args(n).into_iter().map(|a| string_value(&t, a)).collect();
            }
        });
        assert_eq!(
            vals,
            vec![
                Some("a".to_string()),
                Some("b".to_string()),
                Some("c".to_string()),
                None,
                None
            ]
        );
    }

    #[test]
    fn detects_dynamic_import() {
        let t = parse("import('lazy').then(m => m);").unwrap();
        let mut found = false;
        walk_preorder(t.root(), |n| found |= is_dynamic_import(n));
        assert!(found);
    }

    #[test]
    fn pruned_walk_skips_children() {
        let t = parse("f(g(1)); h();").unwrap();
        let mut calls = Vec::new();
        walk_pruned(t.root(), |n| {
            if let Some(name) = callee_name(&t, n) {
                calls.push(name);
                return false;
            }
            true
        });
        assert_eq!(calls, vec!["f", "h"]);
    }

    #[test]
    fn deep_nesting_does_not_grow_the_stack() {
        let depth = 10_000;
        let nested = format!("x = {}1{};", "[".repeat(depth), "]".repeat(depth));

        let ok = parse(&format!("{nested}\nrequire('a');")).unwrap();
        let mut count = 0;
        walk_preorder(ok.root(), |_| count += 1);
        assert!(count > depth);

        let err = parse(&format!("{nested}\nrequire(;")).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
