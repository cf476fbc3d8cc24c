//! Syntax trees and the source input handed to the dispatcher.

use crate::model::stylesheet::StyleSheet;
use std::sync::Arc;
use tree_sitter::{Node, Tree};

/// A parsed JS-family source: the Tree-sitter tree plus the text it came from.
///
/// Node text is read back from `source`, so a tree never needs re-parsing to
/// be inspected by detection or extraction.
#[derive(Debug, Clone)]
pub struct JsTree {
    tree: Tree,
    source: Arc<str>,
}

impl JsTree {
    pub(crate) fn new(tree: Tree, source: Arc<str>) -> Self {
        Self { tree, source }
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Source text covered by `node`.
    pub fn text(&self, node: Node<'_>) -> &str {
        &self.source[node.byte_range()]
    }
}

/// Any tree the dispatcher can route, cache, or hand back to the caller.
#[derive(Debug, Clone)]
pub enum SyntaxTree {
    Js(JsTree),
    Stylesheet(StyleSheet),
}

impl SyntaxTree {
    /// Short family name used in logs and errors.
    pub fn family(&self) -> &'static str {
        match self {
            SyntaxTree::Js(_) => "javascript",
            SyntaxTree::Stylesheet(_) => "stylesheet",
        }
    }

    pub fn as_js(&self) -> Option<&JsTree> {
        match self {
            SyntaxTree::Js(t) => Some(t),
            SyntaxTree::Stylesheet(_) => None,
        }
    }

    pub fn as_stylesheet(&self) -> Option<&StyleSheet> {
        match self {
            SyntaxTree::Stylesheet(s) => Some(s),
            SyntaxTree::Js(_) => None,
        }
    }
}

impl From<JsTree> for SyntaxTree {
    fn from(t: JsTree) -> Self {
        SyntaxTree::Js(t)
    }
}

impl From<StyleSheet> for SyntaxTree {
    fn from(s: StyleSheet) -> Self {
        SyntaxTree::Stylesheet(s)
    }
}

/// Source input: raw text still to be parsed, or a tree the caller already has.
///
/// A supplied tree is never re-parsed as JS-family text.
#[derive(Debug, Clone)]
pub enum Source<'a> {
    Text(&'a str),
    Tree(SyntaxTree),
}

impl Source<'_> {
    /// Takes the tree out of a `Tree` input; text yields nothing.
    pub fn into_tree(self) -> Option<SyntaxTree> {
        match self {
            Source::Tree(t) => Some(t),
            Source::Text(_) => None,
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Source::Text(text)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(text: &'a String) -> Self {
        Source::Text(text.as_str())
    }
}

impl From<SyntaxTree> for Source<'_> {
    fn from(tree: SyntaxTree) -> Self {
        Source::Tree(tree)
    }
}

impl From<JsTree> for Source<'_> {
    fn from(tree: JsTree) -> Self {
        Source::Tree(SyntaxTree::Js(tree))
    }
}

impl From<StyleSheet> for Source<'_> {
    fn from(sheet: StyleSheet) -> Self {
        Source::Tree(SyntaxTree::Stylesheet(sheet))
    }
}
