//! Syntax providers: Tree-sitter for JS-family text, a statement-level reader for stylesheets.

pub mod js;
pub mod stylesheet;
